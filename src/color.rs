//! Color model with a lazily converted RGBA/HSLA representation
//!
//! A [`ColorModel`] holds one color in exactly one source representation.
//! Reading the other representation converts on demand and memoizes the
//! result alongside the source; any setter replaces the source and with it
//! the memoized copy.

use crate::{
    error::{ColorError, Result},
    utils::{ColorConverter, CssColorParser, ParsedColor},
};
use once_cell::unsync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Red, green, blue in `0..=255` and alpha in `0..=1`
///
/// Channels are kept as parsed; they are not clamped or rounded on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    #[must_use]
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f64; 3]> for Rgba {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::opaque(r, g, b)
    }
}

impl From<[f64; 4]> for Rgba {
    fn from([r, g, b, a]: [f64; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl From<Rgba> for [f64; 4] {
    fn from(rgba: Rgba) -> Self {
        rgba.to_array()
    }
}

/// Hue, saturation, lightness and alpha, all in `0..=1`
///
/// Hue is a fraction of a full turn, so `0.5` is 180 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Fully opaque color
    #[must_use]
    pub const fn opaque(h: f64, s: f64, l: f64) -> Self {
        Self::new(h, s, l, 1.0)
    }

    #[must_use]
    pub const fn to_array(self) -> [f64; 4] {
        [self.h, self.s, self.l, self.a]
    }
}

impl From<[f64; 3]> for Hsla {
    fn from([h, s, l]: [f64; 3]) -> Self {
        Self::opaque(h, s, l)
    }
}

impl From<[f64; 4]> for Hsla {
    fn from([h, s, l, a]: [f64; 4]) -> Self {
        Self::new(h, s, l, a)
    }
}

impl From<Hsla> for [f64; 4] {
    fn from(hsla: Hsla) -> Self {
        hsla.to_array()
    }
}

/// Every shape a color can be constructed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput<'a> {
    /// No color yet; set one later through a setter
    Empty,
    /// RGBA channels
    Rgba(Rgba),
    /// HSLA channels
    Hsla(Hsla),
    /// CSS color string: `rgb()`, `rgba()`, `hsl()`, `hsla()` or hex
    Css(&'a str),
}

impl From<[f64; 3]> for ColorInput<'_> {
    fn from(rgb: [f64; 3]) -> Self {
        Self::Rgba(rgb.into())
    }
}

impl From<[f64; 4]> for ColorInput<'_> {
    fn from(rgba: [f64; 4]) -> Self {
        Self::Rgba(rgba.into())
    }
}

impl From<Rgba> for ColorInput<'_> {
    fn from(rgba: Rgba) -> Self {
        Self::Rgba(rgba)
    }
}

impl From<Hsla> for ColorInput<'_> {
    fn from(hsla: Hsla) -> Self {
        Self::Hsla(hsla)
    }
}

impl<'a> From<&'a str> for ColorInput<'a> {
    fn from(css: &'a str) -> Self {
        Self::Css(css)
    }
}

#[derive(Debug, Clone, Default)]
enum Representation {
    #[default]
    Empty,
    Rgba {
        value: Rgba,
        hsla: OnceCell<Hsla>,
    },
    Hsla {
        value: Hsla,
        rgba: OnceCell<Rgba>,
    },
}

/// A single color value convertible between RGBA, HSLA and hex
///
/// # Examples
///
/// ```rust
/// use picker_color::{ColorModel, Rgba};
///
/// let mut color: ColorModel = "hsla(240, 100%, 50%, .7)".parse()?;
/// assert_eq!(color.rgba()?, Rgba::new(0.0, 0.0, 255.0, 0.7));
/// assert_eq!(color.hex()?, "#0000ffb3");
///
/// color.set_rgba([51.0, 170.0, 51.0]);
/// assert_eq!(color.rgb_string()?, "rgb(51,170,51)");
/// # Ok::<(), picker_color::ColorError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorModel {
    repr: Representation,
}

impl ColorModel {
    /// Create an empty color; getters fail until a setter is called
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a color from any supported input shape
    pub fn from_input<'a, I: Into<ColorInput<'a>>>(input: I) -> Result<Self> {
        match input.into() {
            ColorInput::Empty => Ok(Self::new()),
            ColorInput::Rgba(rgba) => Ok(Self::from_rgba(rgba)),
            ColorInput::Hsla(hsla) => Ok(Self::from_hsla(hsla)),
            ColorInput::Css(css) => Self::parse_css_string(css),
        }
    }

    /// Create a color with RGBA as the source representation
    #[must_use]
    pub fn from_rgba<T: Into<Rgba>>(rgba: T) -> Self {
        let mut color = Self::new();
        color.set_rgba(rgba);
        color
    }

    /// Create a color with HSLA as the source representation
    #[must_use]
    pub fn from_hsla<T: Into<Hsla>>(hsla: T) -> Self {
        let mut color = Self::new();
        color.set_hsla(hsla);
        color
    }

    /// Create a color from discrete channels; a missing alpha means opaque
    #[must_use]
    pub fn from_components(r: f64, g: f64, b: f64, a: Option<f64>) -> Self {
        Self::from_rgba(Rgba::new(r, g, b, a.unwrap_or(1.0)))
    }

    /// Parse a CSS color string
    ///
    /// The input is trimmed and lower-cased, then dispatched on its prefix:
    /// `hsl…` and `rgb…` are read as functional notation, anything else as a
    /// hex code. A blank string yields an empty color.
    pub fn parse_css_string(input: &str) -> Result<Self> {
        Ok(match CssColorParser::parse(input)? {
            None => Self::new(),
            Some(ParsedColor::Rgba(rgba)) => Self::from_rgba(rgba),
            Some(ParsedColor::Hsla(hsla)) => Self::from_hsla(hsla),
        })
    }

    /// Whether any representation has been set
    #[must_use]
    pub fn is_set(&self) -> bool {
        !matches!(self.repr, Representation::Empty)
    }

    /// Current color as RGBA, converting from HSLA if that is the source
    pub fn rgba(&self) -> Result<Rgba> {
        match &self.repr {
            Representation::Empty => Err(ColorError::NoColorSet),
            Representation::Rgba { value, .. } => Ok(*value),
            Representation::Hsla { value, rgba } => Ok(*rgba.get_or_init(|| {
                trace!(?value, "Deriving RGBA from HSLA");
                ColorConverter::hsl_to_rgb(*value)
            })),
        }
    }

    /// Replace the color with RGBA; a three channel input is made opaque
    pub fn set_rgba<T: Into<Rgba>>(&mut self, rgba: T) {
        self.repr = Representation::Rgba {
            value: rgba.into(),
            hsla: OnceCell::new(),
        };
    }

    /// Current color as HSLA, converting from RGBA if that is the source
    pub fn hsla(&self) -> Result<Hsla> {
        match &self.repr {
            Representation::Empty => Err(ColorError::NoColorSet),
            Representation::Hsla { value, .. } => Ok(*value),
            Representation::Rgba { value, hsla } => Ok(*hsla.get_or_init(|| {
                trace!(?value, "Deriving HSLA from RGBA");
                ColorConverter::rgb_to_hsl(*value)
            })),
        }
    }

    /// Replace the color with HSLA; a three channel input is made opaque
    pub fn set_hsla<T: Into<Hsla>>(&mut self, hsla: T) {
        self.repr = Representation::Hsla {
            value: hsla.into(),
            rgba: OnceCell::new(),
        };
    }

    /// Eight digit lowercase `#rrggbbaa`
    pub fn hex(&self) -> Result<String> {
        let rgba = self.rgba()?;
        Ok(format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            channel_byte(rgba.r),
            channel_byte(rgba.g),
            channel_byte(rgba.b),
            channel_byte(rgba.a * 255.0),
        ))
    }

    /// Replace the color with a parsed hex code
    ///
    /// On failure the current color is left untouched.
    pub fn set_hex(&mut self, hex: &str) -> Result<()> {
        let rgba = ColorConverter::hex_to_rgb(hex)?;
        self.set_rgba(rgba);
        Ok(())
    }

    /// `rgb(R,G,B)`
    pub fn rgb_string(&self) -> Result<String> {
        let Rgba { r, g, b, .. } = self.rgba()?;
        Ok(format!(
            "rgb({},{},{})",
            css_number(r),
            css_number(g),
            css_number(b)
        ))
    }

    /// `rgba(R,G,B,A)`
    pub fn rgba_string(&self) -> Result<String> {
        let Rgba { r, g, b, a } = self.rgba()?;
        Ok(format!(
            "rgba({},{},{},{})",
            css_number(r),
            css_number(g),
            css_number(b),
            css_number(a)
        ))
    }

    /// `hsl(H,S%,L%)` with hue in degrees, unrounded
    pub fn hsl_string(&self) -> Result<String> {
        let Hsla { h, s, l, .. } = self.hsla()?;
        Ok(format!(
            "hsl({},{}%,{}%)",
            css_number(h * 360.0),
            css_number(s * 100.0),
            css_number(l * 100.0)
        ))
    }

    /// `hsla(H,S%,L%,A)` with hue in degrees, unrounded
    pub fn hsla_string(&self) -> Result<String> {
        let Hsla { h, s, l, a } = self.hsla()?;
        Ok(format!(
            "hsla({},{}%,{}%,{})",
            css_number(h * 360.0),
            css_number(s * 100.0),
            css_number(l * 100.0),
            css_number(a)
        ))
    }
}

impl std::str::FromStr for ColorModel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_css_string(s)
    }
}

impl TryFrom<&str> for ColorModel {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse_css_string(value)
    }
}

impl From<Rgba> for ColorModel {
    fn from(rgba: Rgba) -> Self {
        Self::from_rgba(rgba)
    }
}

impl From<Hsla> for ColorModel {
    fn from(hsla: Hsla) -> Self {
        Self::from_hsla(hsla)
    }
}

/// Format a number the way a browser stringifies it
///
/// Shortest round-trip digits, plain notation for magnitudes in
/// `[1e-6, 1e21)`, exponent notation with a signed exponent outside it.
/// Negative zero prints as `0`.
pub(crate) fn css_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude.is_nan() || (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exponent_form = format!("{:e}", value);
    match exponent_form.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        },
        _ => exponent_form,
    }
}

// round-half-up, then clamp into a byte
fn channel_byte(value: f64) -> u8 {
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}
