//! CSS color string parsing
//!
//! Accepts `rgb()`/`rgba()` and `hsl()`/`hsla()` functional notation with
//! comma separated numbers, and hex codes in any form
//! [`ColorConverter::hex_to_rgb`] understands.

use crate::{
    color::{Hsla, Rgba},
    error::Result,
    utils::ColorConverter,
};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Optional sign, digits with an optional decimal point, optional exponent
static NUMBER_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[-+]?(?:\d+\.?\d*|\.\d+)(?:e[-+]?\d+)?").expect("valid number pattern")
});

/// A parsed color in the representation its notation implies
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedColor {
    Rgba(Rgba),
    Hsla(Hsla),
}

/// Parser for CSS style color strings
pub struct CssColorParser;

impl CssColorParser {
    /// Parse a color string
    ///
    /// Returns `Ok(None)` for blank input. Functional strings with fewer
    /// than three numbers are not recognized as such and fall through to
    /// hex parsing.
    ///
    /// # Errors
    /// [`crate::ColorError::UnknownHexColor`] when the string is neither
    /// functional notation nor a valid hex code.
    pub fn parse(input: &str) -> Result<Option<ParsedColor>> {
        let color = input.trim().to_lowercase();
        if color.is_empty() {
            return Ok(None);
        }

        if color.starts_with("hsl") {
            if let Some(hsla) = Self::parse_hsl(&color) {
                debug!(input = %color, "Parsed HSL color string");
                return Ok(Some(ParsedColor::Hsla(hsla)));
            }
        } else if color.starts_with("rgb") {
            if let Some(rgba) = Self::parse_rgb(&color) {
                debug!(input = %color, "Parsed RGB color string");
                return Ok(Some(ParsedColor::Rgba(rgba)));
            }
        }

        let rgba = ColorConverter::hex_to_rgb(&color)?;
        debug!(input = %color, "Parsed hex color string");
        Ok(Some(ParsedColor::Rgba(rgba)))
    }

    /// All numeric tokens in order of appearance
    ///
    /// Anything that is not part of a number (parentheses, commas, `%`,
    /// function names) is skipped.
    #[must_use]
    pub fn extract_numbers(input: &str) -> Vec<f64> {
        NUMBER_TOKEN
            .find_iter(input)
            .filter_map(|m| m.as_str().parse::<f64>().ok())
            .collect()
    }

    /// `hsl(h, s%, l%)` or `hsla(h, s%, l%, a)`; hue in degrees
    fn parse_hsl(input: &str) -> Option<Hsla> {
        match Self::extract_numbers(input).as_slice() {
            [h, s, l, rest @ ..] => Some(Hsla::new(
                h / 360.0,
                s / 100.0,
                l / 100.0,
                rest.first().copied().unwrap_or(1.0),
            )),
            _ => None,
        }
    }

    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`; channels taken as given
    fn parse_rgb(input: &str) -> Option<Rgba> {
        match Self::extract_numbers(input).as_slice() {
            [r, g, b, rest @ ..] => {
                Some(Rgba::new(*r, *g, *b, rest.first().copied().unwrap_or(1.0)))
            },
            _ => None,
        }
    }
}
