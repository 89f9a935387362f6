//! Interactive controller for terminal fractal exploration.
//!
//! This module turns input events into view changes and drives one render
//! per change.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `InputSource` yields abstract `InputEvent`s
//! - **Output**: `FrameSink` receives finished frames and the overlay request
//! - **Core**: Uses the plane renderer from `core/` for actual computation

pub mod commands;
mod controller;
pub mod errors;
pub mod ports;

pub use commands::{Command, Zoom};
pub use controller::{EventOutcome, InteractiveController};
pub use errors::ControllerError;
pub use ports::{FrameSink, GeometryProvider, InputEvent, InputSource, Key, Modifiers, MouseButton};
