//! crossterm-backed adapters: raw-mode guard, event source and geometry queries.

mod events;
mod geometry;
mod guard;

pub use events::{TerminalInput, translate_event};
pub use geometry::TerminalGeometry;
pub use guard::TerminalGuard;
