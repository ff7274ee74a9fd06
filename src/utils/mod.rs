//! Output helpers for the command line

pub mod display;

pub use display::{Color, ColorOutput, GridRenderer, StateFormatter};
