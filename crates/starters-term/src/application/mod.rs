//! Application layer.
//!
//! Command-line parsing and the draw-and-dispatch loop that puts the catalog
//! on screen.

pub mod cli;
pub mod ui;
