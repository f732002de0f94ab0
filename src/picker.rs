//! Color picker state without a DOM
//!
//! [`PickerState`] is everything the picker widget does to its color:
//! accepting typed or programmatic colors, turning drag positions into
//! HSLA updates, and producing the strings the view layer renders. The
//! widget shell only forwards events in and applies [`PickerView`] out.

use crate::{
    color::css_number,
    config::PickerConfig,
    error::{ColorError, PickerResult},
    ColorModel,
};
use tracing::{debug, info, warn};

/// Color a picker shows when opened without one
pub const DEFAULT_COLOR: &str = "#0cf";

/// Receives picker lifecycle and color change notifications
///
/// All methods default to doing nothing.
pub trait ColorListener {
    /// The color changed (not fired for silent updates)
    fn on_change(&mut self, _color: &ColorModel) {}

    /// The user confirmed the current color
    fn on_done(&mut self, _color: Option<&ColorModel>) {}

    /// The picker was opened
    fn on_open(&mut self, _color: Option<&ColorModel>) {}

    /// The picker was closed
    fn on_close(&mut self, _color: Option<&ColorModel>) {}
}

/// Listener that discards all notifications
pub struct NoOpColorListener;

impl ColorListener for NoOpColorListener {}

/// Listener that logs every notification as a tracing event
pub struct TracingColorListener;

impl ColorListener for TracingColorListener {
    fn on_change(&mut self, color: &ColorModel) {
        info!(color = %describe(Some(color)), "🎨 Color changed");
    }

    fn on_done(&mut self, color: Option<&ColorModel>) {
        info!(color = %describe(color), "✅ Color picked");
    }

    fn on_open(&mut self, color: Option<&ColorModel>) {
        debug!(color = %describe(color), "Picker opened");
    }

    fn on_close(&mut self, color: Option<&ColorModel>) {
        debug!(color = %describe(color), "Picker closed");
    }
}

fn describe(color: Option<&ColorModel>) -> String {
    color
        .and_then(|c| c.hex().ok())
        .unwrap_or_else(|| "<none>".to_string())
}

/// How a color update should be handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SetColorFlags {
    /// Do not notify `on_change`
    pub silent: bool,
    /// The value came from the text editor; leave the editor text alone
    pub from_editor: bool,
    /// Ignore unparseable input instead of returning an error
    pub fail_silently: bool,
}

impl SetColorFlags {
    /// Flags for text typed into the editor: partial input is expected
    #[must_use]
    pub fn editor_input() -> Self {
        Self {
            silent: false,
            from_editor: true,
            fail_silently: true,
        }
    }
}

/// Screen rectangle of a draggable picker area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl DragArea {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Pointer position relative to the area, each axis clamped to `0..=1`
    ///
    /// A zero-sized axis maps to 0.
    #[must_use]
    pub fn relative_position(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        fn relative(offset: f64, size: f64) -> f64 {
            if size > 0.0 {
                offset.clamp(0.0, size) / size
            } else {
                0.0
            }
        }

        (
            relative(client_x - self.left, self.width),
            relative(client_y - self.top, self.height),
        )
    }
}

/// Everything the view layer needs to render the current color
#[derive(Debug, Clone, PartialEq)]
pub struct PickerView {
    /// Fully saturated hue, for the hue thumb and the S/L panel background
    pub hue_css: String,
    /// Opaque color, for the S/L thumb
    pub hsl_css: String,
    /// Color with alpha, for the sample swatch
    pub hsla_css: String,
    /// Opaque to transparent gradient for the alpha slider
    pub alpha_gradient: String,
    /// Hue thumb left offset in percent
    pub hue_x: f64,
    /// S/L thumb left offset in percent
    pub saturation_x: f64,
    /// S/L thumb top offset in percent
    pub lightness_y: f64,
    /// Alpha thumb top offset in percent
    pub alpha_y: f64,
    /// Text the editor field should show
    pub editor_text: Option<String>,
}

/// State of one color picker
pub struct PickerState {
    config: PickerConfig,
    color: Option<ColorModel>,
    editor_text: Option<String>,
    open: bool,
    listener: Box<dyn ColorListener>,
}

impl std::fmt::Debug for PickerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerState")
            .field("config", &self.config)
            .field("color", &self.color)
            .field("editor_text", &self.editor_text)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

impl PickerState {
    /// Create a picker that discards notifications
    pub fn new(config: PickerConfig) -> PickerResult<Self> {
        Self::with_listener(config, Box::new(NoOpColorListener))
    }

    /// Create a picker reporting to `listener`
    ///
    /// The configured initial color, if any, is applied after the listener
    /// is attached, so it triggers `on_change`.
    pub fn with_listener(
        config: PickerConfig,
        listener: Box<dyn ColorListener>,
    ) -> PickerResult<Self> {
        let mut state = Self {
            config: PickerConfig::default(),
            color: None,
            editor_text: None,
            open: false,
            listener,
        };
        state.set_options(config)?;
        Ok(state)
    }

    /// Replace the options; a color in the new options is applied
    pub fn set_options(&mut self, config: PickerConfig) -> PickerResult<()> {
        config.validate()?;
        let color = config.color.clone();
        self.config = config;
        if let Some(color) = color {
            self.set_color(&color, false)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Current color, if one has been set
    #[must_use]
    pub fn color(&self) -> Option<&ColorModel> {
        self.color.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Text currently shown in the editor field
    #[must_use]
    pub fn editor_text(&self) -> Option<&str> {
        self.editor_text.as_deref()
    }

    /// Set the color from a string
    pub fn set_color(&mut self, input: &str, silent: bool) -> PickerResult<bool> {
        self.set_color_with(
            input,
            SetColorFlags {
                silent,
                ..SetColorFlags::default()
            },
        )
    }

    /// Set the color from a string with explicit handling flags
    ///
    /// Returns whether the color was applied. Blank input is ignored, as is
    /// unparseable input when `fail_silently` is set. With alpha disabled
    /// the parsed color is made opaque.
    pub fn set_color_with(&mut self, input: &str, flags: SetColorFlags) -> PickerResult<bool> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(false);
        }

        let mut color = match ColorModel::parse_css_string(input) {
            Ok(color) => color,
            Err(e) if flags.fail_silently => {
                warn!(input = %input, error = %e, "Ignoring unparseable color");
                return Ok(false);
            },
            Err(e) => return Err(e.into()),
        };

        if !self.config.alpha {
            let mut hsla = color.hsla()?;
            hsla.a = 1.0;
            color.set_hsla(hsla);
        }

        self.color = Some(color);
        self.update_hsla([None; 4], flags)?;
        Ok(true)
    }

    /// Replace any of the HSLA components of the current color
    pub fn set_hsla(
        &mut self,
        h: Option<f64>,
        s: Option<f64>,
        l: Option<f64>,
        a: Option<f64>,
    ) -> PickerResult<()> {
        self.update_hsla([h, s, l, a], SetColorFlags::default())
    }

    /// Hue slider moved to relative position `x`
    pub fn drag_hue(&mut self, x: f64) -> PickerResult<()> {
        self.set_hsla(Some(x), None, None, None)
    }

    /// Saturation/lightness panel moved to relative position `(x, y)`
    pub fn drag_saturation_lightness(&mut self, x: f64, y: f64) -> PickerResult<()> {
        self.set_hsla(None, Some(x), Some(1.0 - y), None)
    }

    /// Alpha slider moved to relative position `y`; ignored with alpha disabled
    pub fn drag_alpha(&mut self, y: f64) -> PickerResult<()> {
        if !self.config.alpha {
            return Ok(());
        }
        self.set_hsla(None, None, None, Some(1.0 - y))
    }

    /// Open the picker, choosing [`DEFAULT_COLOR`] if none is set
    pub fn open(&mut self) -> PickerResult<()> {
        if self.color.is_none() {
            self.set_color(DEFAULT_COLOR, false)?;
        }
        self.open = true;
        self.listener.on_open(self.color.as_ref());
        Ok(())
    }

    /// Close the picker
    pub fn close(&mut self) {
        self.open = false;
        self.listener.on_close(self.color.as_ref());
    }

    /// Confirm the current color; a popup picker closes first
    pub fn done(&mut self) {
        if self.config.popup.is_some() {
            self.close();
        }
        self.listener.on_done(self.color.as_ref());
    }

    /// Editor text for the current color: 8 digit hex, or 6 with alpha disabled
    pub fn editor_value(&self) -> PickerResult<String> {
        let mut hex = self.current()?.hex()?;
        if !self.config.alpha {
            hex.truncate(7);
        }
        Ok(hex)
    }

    /// Render state for the current color
    pub fn view(&self) -> PickerResult<PickerView> {
        let color = self.current()?;
        let hsla = color.hsla()?;
        let hsl_css = color.hsl_string()?;
        let transparent = hsl_css.replacen("hsl", "hsla", 1).replacen(')', ", 0)", 1);

        Ok(PickerView {
            hue_css: format!("hsl({}, 100%, 50%)", css_number(hsla.h * 360.0)),
            alpha_gradient: format!("linear-gradient({},{})", hsl_css, transparent),
            hsla_css: color.hsla_string()?,
            hsl_css,
            hue_x: hsla.h * 100.0,
            saturation_x: hsla.s * 100.0,
            lightness_y: (1.0 - hsla.l) * 100.0,
            alpha_y: (1.0 - hsla.a) * 100.0,
            editor_text: self.editor_text.clone(),
        })
    }

    fn current(&self) -> PickerResult<&ColorModel> {
        self.color.as_ref().ok_or_else(|| ColorError::NoColorSet.into())
    }

    // Every color change funnels through here.
    fn update_hsla(
        &mut self,
        components: [Option<f64>; 4],
        flags: SetColorFlags,
    ) -> PickerResult<()> {
        let color = self.color.as_mut().ok_or(ColorError::NoColorSet)?;

        let mut hsla = color.hsla()?.to_array();
        for (slot, value) in hsla.iter_mut().zip(components) {
            if let Some(value) = value.filter(|v| !v.is_nan()) {
                *slot = value;
            }
        }
        color.set_hsla(hsla);
        debug!(?hsla, from_editor = flags.from_editor, "Picker color updated");

        if !flags.from_editor {
            self.editor_text = Some(self.editor_value()?);
        }

        if !flags.silent {
            if let Some(color) = &self.color {
                self.listener.on_change(color);
            }
        }

        Ok(())
    }
}
