//! Utility modules for color conversion and parsing
//!
//! The pure functions the color model is built on, kept apart from the
//! stateful [`crate::ColorModel`] so they can be used and tested directly.

pub mod conversion;
pub mod parse;

// Re-export commonly used items for convenience
pub use conversion::ColorConverter;
pub use parse::{CssColorParser, ParsedColor};
