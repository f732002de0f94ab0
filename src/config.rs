//! Configuration types for the color picker

use crate::{
    error::{PickerError, PickerResult},
    ColorModel,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where a popup picker is placed relative to its parent element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopupPlacement {
    Top,
    Bottom,
    Left,
    #[default]
    Right,
}

impl PopupPlacement {
    /// CSS class that positions the popup
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Top => "popup_top",
            Self::Bottom => "popup_bottom",
            Self::Left => "popup_left",
            Self::Right => "popup_right",
        }
    }
}

impl std::fmt::Display for PopupPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl std::str::FromStr for PopupPlacement {
    type Err = PickerError;

    fn from_str(s: &str) -> PickerResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(PickerError::config_value_error(
                "popup placement",
                other,
                "top, bottom, left or right",
            )),
        }
    }
}

/// Picker options that do not depend on a DOM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Popup placement, `None` to show the picker inline
    pub popup: Option<PopupPlacement>,

    /// Suffix of the `layout_<name>` CSS class
    pub layout: String,

    /// Whether the alpha channel can be adjusted
    pub alpha: bool,

    /// Whether the text editor is shown
    pub editor: bool,

    /// Initial color (any string [`ColorModel`] parses)
    pub color: Option<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            popup: Some(PopupPlacement::default()),
            layout: "default".to_string(),
            alpha: true,
            editor: true,
            color: None,
        }
    }
}

impl PickerConfig {
    /// Create a new configuration builder
    ///
    /// # Examples
    /// ```rust
    /// use picker_color::{PickerConfig, PopupPlacement};
    ///
    /// let config = PickerConfig::builder()
    ///     .popup(Some(PopupPlacement::Bottom))
    ///     .alpha(false)
    ///     .color("gold")
    ///     .build();
    /// assert!(config.is_err());
    ///
    /// let config = PickerConfig::builder()
    ///     .popup(Some(PopupPlacement::Bottom))
    ///     .alpha(false)
    ///     .color("#ffd700")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.css_classes(), ["layout_default", "no_alpha", "popup", "popup_bottom"]);
    /// ```
    #[must_use]
    pub fn builder() -> PickerConfigBuilder {
        PickerConfigBuilder::default()
    }

    /// Validate all configuration parameters
    ///
    /// # Validation Rules
    ///
    /// - `layout`: non-empty, ASCII letters, digits, `-` or `_`
    /// - `color`: blank, or a string [`ColorModel`] can parse
    ///
    /// # Errors
    /// [`PickerError::InvalidConfig`] describing the first offending field.
    pub fn validate(&self) -> PickerResult<()> {
        let layout_ok = !self.layout.is_empty()
            && self
                .layout
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !layout_ok {
            return Err(PickerError::config_value_error(
                "layout",
                &self.layout,
                "ASCII letters, digits, '-' or '_'",
            ));
        }

        if let Some(color) = &self.color {
            if let Err(e) = ColorModel::parse_css_string(color) {
                return Err(PickerError::config_value_error(
                    "initial color",
                    e,
                    "rgb(), rgba(), hsl(), hsla() or a 3/4/6/8 digit hex code",
                ));
            }
        }

        Ok(())
    }

    /// CSS classes for the picker's wrapper element
    #[must_use]
    pub fn css_classes(&self) -> Vec<String> {
        let mut classes = vec![format!("layout_{}", self.layout)];
        if !self.alpha {
            classes.push("no_alpha".to_string());
        }
        if !self.editor {
            classes.push("no_editor".to_string());
        }
        if let Some(popup) = self.popup {
            classes.push("popup".to_string());
            classes.push(popup.css_class().to_string());
        }
        classes
    }

    /// Load and validate a configuration from a JSON file
    ///
    /// Missing fields take their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> PickerResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PickerError::file_io_error("read config file", path, &e))?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded picker configuration");
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save_json_file<P: AsRef<Path>>(&self, path: P) -> PickerResult<()> {
        let path = path.as_ref();
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .map_err(|e| PickerError::file_io_error("write config file", path, &e))
    }
}

/// Builder for `PickerConfig`
#[derive(Debug, Default)]
pub struct PickerConfigBuilder {
    config: PickerConfig,
}

impl PickerConfigBuilder {
    /// Set popup placement, `None` for an inline picker
    #[must_use]
    pub fn popup(mut self, popup: Option<PopupPlacement>) -> Self {
        self.config.popup = popup;
        self
    }

    /// Set layout class suffix
    #[must_use]
    pub fn layout<S: Into<String>>(mut self, layout: S) -> Self {
        self.config.layout = layout.into();
        self
    }

    /// Enable or disable alpha editing
    #[must_use]
    pub fn alpha(mut self, alpha: bool) -> Self {
        self.config.alpha = alpha;
        self
    }

    /// Show or hide the text editor
    #[must_use]
    pub fn editor(mut self, editor: bool) -> Self {
        self.config.editor = editor;
        self
    }

    /// Set the initial color
    #[must_use]
    pub fn color<S: Into<String>>(mut self, color: S) -> Self {
        self.config.color = Some(color.into());
        self
    }

    /// Build and validate the configuration
    ///
    /// # Errors
    /// See [`PickerConfig::validate`].
    pub fn build(self) -> PickerResult<PickerConfig> {
        let config = self.config;
        config.validate()?;
        Ok(config)
    }
}
