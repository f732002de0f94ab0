//! Color model conversions
//!
//! RGB <-> HSL conversion and hex code normalization. These are pure
//! functions; [`crate::ColorModel`] decides when to call them.

use crate::{
    color::{Hsla, Rgba},
    error::{ColorError, Result},
};
use once_cell::sync::Lazy;
use regex::Regex;

static HEX_RGBA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-fA-F]{8}$").expect("valid hex pattern"));

/// Converter between RGBA, HSLA and hex codes
pub struct ColorConverter;

impl ColorConverter {
    /// Convert RGBA (channels `0..=255`) to HSLA (all `0..=1`)
    ///
    /// Alpha passes through. When the largest and smallest channel are
    /// exactly equal the color is achromatic and hue and saturation are 0.
    #[must_use]
    pub fn rgb_to_hsl(rgba: Rgba) -> Hsla {
        let r = rgba.r / 255.0;
        let g = rgba.g / 255.0;
        let b = rgba.b / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Hsla::new(0.0, 0.0, l, rgba.a);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        // sixths of a turn, keyed on the channel holding the maximum
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsla::new(h / 6.0, s, l, rgba.a)
    }

    /// Convert HSLA (all `0..=1`) to RGBA
    ///
    /// Each RGB channel is scaled to `0..=255` and rounded half-up to an
    /// integer. Alpha passes through.
    #[must_use]
    pub fn hsl_to_rgb(hsla: Hsla) -> Rgba {
        let Hsla { h, s, l, a } = hsla;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                Self::hue_to_channel(p, q, h + 1.0 / 3.0),
                Self::hue_to_channel(p, q, h),
                Self::hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Rgba::new(round_channel(r), round_channel(g), round_channel(b), a)
    }

    /// Blend between `p` and `q` for one channel at hue offset `t`
    ///
    /// `t` is wrapped once into `0..=1` before the piecewise segments at
    /// 1/6, 1/2 and 2/3 are applied.
    #[must_use]
    pub fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }

        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    /// Expand a hex code to its eight digit `RRGGBBAA` form
    ///
    /// A leading `#` is dropped. Three digits gain an opaque alpha digit,
    /// four digits are doubled one by one, and six digits gain `FF`. Other
    /// lengths pass through unchanged and are left for validation to reject.
    #[must_use]
    pub fn normalize_hex(input: &str) -> String {
        let hex = input.strip_prefix('#').unwrap_or(input);
        let digits: Vec<char> = hex.chars().collect();

        match digits.len() {
            3 | 4 => {
                let mut expanded = String::with_capacity(8);
                for &c in digits.iter().chain(std::iter::once(&'F')).take(4) {
                    expanded.push(c);
                    expanded.push(c);
                }
                expanded
            },
            6 => format!("{}FF", hex),
            _ => hex.to_string(),
        }
    }

    /// Parse a 3, 4, 6 or 8 digit hex code (with or without `#`) into RGBA
    ///
    /// # Errors
    /// [`ColorError::UnknownHexColor`] carrying `input` when the normalized
    /// code is not exactly eight hex digits.
    pub fn hex_to_rgb(input: &str) -> Result<Rgba> {
        let hex = Self::normalize_hex(input);
        if !HEX_RGBA.is_match(&hex) {
            return Err(ColorError::unknown_hex(input));
        }

        let byte = |i: usize| -> Result<f64> {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .map(f64::from)
                .ok_or_else(|| ColorError::unknown_hex(input))
        };

        Ok(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)? / 255.0))
    }
}

fn round_channel(value: f64) -> f64 {
    (value * 255.0 + 0.5).floor()
}
