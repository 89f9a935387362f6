//! Rendering core: plain data, the escape-time evaluator, colour mapping and
//! the parallel plane renderer. Nothing in here performs I/O.

pub mod actions;
pub mod data;
pub mod fractals;
pub mod util;
