//! Output adapters: the kitty graphics transport and the help/info overlay.

pub mod kitty;
pub mod overlay;
