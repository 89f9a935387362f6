//! Input adapters for the fractal explorer.
//!
//! This module contains adapters that receive input from the terminal
//! and translate it into controller events.

pub mod terminal;
