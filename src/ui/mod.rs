//! Terminal output.
//!
//! This module provides:
//! - [`Theme`] for styling, honoring `NO_COLOR` and TTY detection
//! - [`Output`] for writing progress lines and the coverage table

pub mod output;
pub mod theme;

pub use output::Output;
pub use theme::{should_use_colors, Theme};
