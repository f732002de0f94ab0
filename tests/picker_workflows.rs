//! End-to-end picker workflows
//!
//! Drives `PickerState` the way the widget shell does: open, drag, type,
//! confirm. Also covers configuration files shared between sessions.

use picker_color::{
    ColorListener, ColorModel, DragArea, PickerConfig, PickerResult, PickerState, PopupPlacement,
    SetColorFlags, DEFAULT_COLOR,
};
use std::cell::RefCell;
use std::rc::Rc;
use tempfile::tempdir;

/// Listener that records every notification as a short string
#[derive(Clone, Default)]
struct EventLog(Rc<RefCell<Vec<String>>>);

impl EventLog {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    fn push(&self, event: &str, color: Option<&ColorModel>) {
        let hex = color
            .and_then(|c| c.hex().ok())
            .unwrap_or_else(|| "-".to_string());
        self.0.borrow_mut().push(format!("{event} {hex}"));
    }
}

impl ColorListener for EventLog {
    fn on_change(&mut self, color: &ColorModel) {
        self.push("change", Some(color));
    }

    fn on_done(&mut self, color: Option<&ColorModel>) {
        self.push("done", color);
    }

    fn on_open(&mut self, color: Option<&ColorModel>) {
        self.push("open", color);
    }

    fn on_close(&mut self, color: Option<&ColorModel>) {
        self.push("close", color);
    }
}

fn picker_with_log(config: PickerConfig) -> PickerResult<(PickerState, EventLog)> {
    let log = EventLog::default();
    let picker = PickerState::with_listener(config, Box::new(log.clone()))?;
    Ok((picker, log))
}

#[test]
fn test_open_drag_and_confirm() -> PickerResult<()> {
    let (mut picker, log) = picker_with_log(PickerConfig::default())?;
    assert!(picker.color().is_none());

    picker.open()?;
    assert!(picker.is_open());
    assert_eq!(
        picker.editor_value()?,
        ColorModel::parse_css_string(DEFAULT_COLOR)?.hex()?
    );
    assert_eq!(log.take(), ["change #00ccffff", "open #00ccffff"]);

    let hue_slider = DragArea::new(10.0, 20.0, 200.0, 10.0);
    let (x, _) = hue_slider.relative_position(110.0, 25.0);
    picker.drag_hue(x)?;
    assert_eq!(picker.editor_text(), Some("#00ffffff"));

    let panel = DragArea::new(0.0, 0.0, 100.0, 100.0);
    let (x, y) = panel.relative_position(-40.0, 50.0);
    picker.drag_saturation_lightness(x, y)?;
    assert_eq!(picker.editor_text(), Some("#808080ff"));

    let alpha_slider = DragArea::new(0.0, 0.0, 10.0, 200.0);
    let (_, y) = alpha_slider.relative_position(5.0, 50.0);
    picker.drag_alpha(y)?;
    assert_eq!(picker.editor_value()?, "#808080bf");

    picker.done();
    assert!(!picker.is_open());
    assert_eq!(
        log.take(),
        [
            "change #00ffffff",
            "change #808080ff",
            "change #808080bf",
            "close #808080bf",
            "done #808080bf",
        ]
    );
    Ok(())
}

#[test]
fn test_typing_into_editor() -> PickerResult<()> {
    let (mut picker, log) = picker_with_log(PickerConfig::default())?;
    picker.set_color("#fff", true)?;
    assert_eq!(picker.editor_text(), Some("#ffffffff"));

    // Partial input is ignored until it parses.
    let mut applied = Vec::new();
    for typed in ["#", "#0", "#0c", "#0cf"] {
        applied.push(picker.set_color_with(typed, SetColorFlags::editor_input())?);
    }
    assert_eq!(applied, [false, false, false, true]);

    // The editor keeps what was typed.
    assert_eq!(picker.editor_text(), Some("#ffffffff"));
    assert_eq!(picker.editor_value()?, "#00ccffff");
    assert_eq!(log.take(), ["change #00ccffff"]);
    Ok(())
}

#[test]
fn test_inline_picker_stays_open_on_done() -> PickerResult<()> {
    let config = PickerConfig::builder().popup(None).build()?;
    let (mut picker, log) = picker_with_log(config)?;

    picker.open()?;
    picker.done();
    assert!(picker.is_open());
    assert_eq!(
        log.take(),
        ["change #00ccffff", "open #00ccffff", "done #00ccffff"]
    );
    Ok(())
}

#[test]
fn test_alpha_disabled() -> PickerResult<()> {
    let config = PickerConfig::builder().alpha(false).build()?;
    let mut picker = PickerState::new(config)?;

    picker.set_color("rgba(255, 0, 0, .5)", false)?;
    assert_eq!(picker.editor_value()?, "#ff0000");
    assert_eq!(picker.editor_text(), Some("#ff0000"));

    picker.drag_alpha(0.9)?;
    assert_eq!(picker.color().map(|c| c.hsla()).transpose()?.map(|h| h.a), Some(1.0));
    Ok(())
}

#[test]
fn test_initial_color_from_options() -> PickerResult<()> {
    let config = PickerConfig::builder().color("hsl(0, 100%, 50%)").build()?;
    let (mut picker, log) = picker_with_log(config)?;
    assert_eq!(picker.editor_text(), Some("#ff0000ff"));
    assert_eq!(log.take(), ["change #ff0000ff"]);

    let config = PickerConfig::builder().color("#00f").build()?;
    picker.set_options(config)?;
    assert_eq!(picker.editor_value()?, "#0000ffff");
    assert_eq!(log.take(), ["change #0000ffff"]);
    Ok(())
}

#[test]
fn test_view_render_state() -> PickerResult<()> {
    let mut picker = PickerState::new(PickerConfig::default())?;
    picker.set_color("hsla(180, 50%, 25%, .5)", true)?;
    let view = picker.view()?;

    assert_eq!(view.hue_css, "hsl(180, 100%, 50%)");
    assert_eq!(view.hsl_css, "hsl(180,50%,25%)");
    assert_eq!(view.hsla_css, "hsla(180,50%,25%,0.5)");
    assert_eq!(
        view.alpha_gradient,
        "linear-gradient(hsl(180,50%,25%),hsla(180,50%,25%, 0))"
    );
    assert_eq!(view.hue_x, 50.0);
    assert_eq!(view.saturation_x, 50.0);
    assert_eq!(view.lightness_y, 75.0);
    assert_eq!(view.alpha_y, 50.0);
    assert_eq!(view.editor_text, picker.editor_text().map(str::to_string));
    Ok(())
}

#[test]
fn test_config_file_round_trip() -> PickerResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("picker.json");

    let config = PickerConfig::builder()
        .popup(Some(PopupPlacement::Top))
        .layout("compact")
        .alpha(false)
        .editor(false)
        .color("#abc")
        .build()?;
    config.save_json_file(&path)?;

    let loaded = PickerConfig::from_json_file(&path)?;
    assert_eq!(loaded, config);
    assert_eq!(
        loaded.css_classes(),
        ["layout_compact", "no_alpha", "no_editor", "popup", "popup_top"]
    );

    let picker = PickerState::new(loaded)?;
    assert_eq!(picker.editor_value()?, "#aabbcc");
    Ok(())
}

#[test]
fn test_partial_config_file_uses_defaults() -> PickerResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("inline.json");
    std::fs::write(&path, r#"{"popup": null, "layout": "large"}"#)?;

    let config = PickerConfig::from_json_file(&path)?;
    assert_eq!(config.popup, None);
    assert_eq!(config.layout, "large");
    assert!(config.alpha);
    assert_eq!(config.css_classes(), ["layout_large"]);
    Ok(())
}
