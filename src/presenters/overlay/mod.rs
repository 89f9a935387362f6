mod composer;
pub mod font;

pub use composer::{RgbaImage, compose_overlay};
