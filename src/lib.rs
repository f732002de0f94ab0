#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::uninlined_format_args)]

//! # picker-color
//!
//! The color model behind a web color picker: one color value held as RGBA
//! or HSLA, converted lazily to the other on demand, with hex normalization
//! and CSS color string parsing.
//!
//! ## Features
//!
//! - **Lazy dual representation**: set RGBA or HSLA, read either; the derived
//!   form is computed once and dropped on the next write
//! - **Hex codes**: 3, 4, 6 and 8 digit forms, rendered back as `#rrggbbaa`
//! - **CSS strings**: `rgb()`, `rgba()`, `hsl()`, `hsla()` and hex
//! - **Picker state**: the widget's color handling without a DOM (drag
//!   updates, editor text, alpha toggle, change notifications)
//! - **CLI Integration**: `picker-color` converter (enable with `cli` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use picker_color::{ColorModel, Hsla};
//!
//! # fn example() -> picker_color::Result<()> {
//! let mut color = ColorModel::parse_css_string("#0cf")?;
//! assert_eq!(color.rgb_string()?, "rgb(0,204,255)");
//!
//! let Hsla { h, s, l, a } = color.hsla()?;
//! color.set_hsla([h, s, l * 0.5, a]);
//! assert_eq!(color.hex()?, "#006680ff");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ### Feature Flags
//!
//! - `cli` (default): command-line converter and tracing subscriber setup
//! - `tracing-json`: JSON log output for the CLI
//! - `tracing-files`: log file output for the CLI
//!
//! ### Library-Only Usage
//!
//! ```toml
//! [dependencies]
//! picker-color = { version = "0.1", default-features = false }
//! ```

#[cfg(feature = "cli")]
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod picker;
#[cfg(feature = "cli")]
pub mod tracing_config;
pub mod utils;

// Public API exports
pub use color::{ColorInput, ColorModel, Hsla, Rgba};
pub use config::{PickerConfig, PickerConfigBuilder, PopupPlacement};
pub use error::{ColorError, PickerError, PickerResult, Result};
pub use picker::{
    ColorListener, DragArea, NoOpColorListener, PickerState, PickerView, SetColorFlags,
    TracingColorListener, DEFAULT_COLOR,
};
pub use utils::{ColorConverter, CssColorParser, ParsedColor};

#[cfg(feature = "cli")]
pub use tracing_config::{
    events, init_cli_tracing, spans, TracingConfig, TracingFormat, TracingOutput,
};
