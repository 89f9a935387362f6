//! Port definitions for the interactive controller.
//!
//! Contains trait definitions that define interfaces between the controller
//! and external systems (terminal input, geometry queries, frame output).

pub mod frame_sink;
pub mod geometry_provider;
pub mod input_source;

pub use frame_sink::FrameSink;
pub use geometry_provider::GeometryProvider;
pub use input_source::{InputEvent, InputSource, Key, Modifiers, MouseButton};
