//! Error handling and edge case tests
//!
//! Covers the two color model errors, malformed input of every shape, and
//! the picker layer's configuration failures.

use picker_color::{
    ColorError, ColorModel, CssColorParser, PickerConfig, PickerError, PickerState, PopupPlacement,
};
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

#[test]
fn test_unknown_hex_carries_input() {
    let err = ColorModel::parse_css_string("zz").unwrap_err();
    assert_eq!(err, ColorError::UnknownHexColor("zz".to_string()));
    assert_eq!(err.to_string(), "Unknown hex color: zz");
}

#[test]
fn test_invalid_hex_lengths() {
    for input in ["#", "#0", "#0c", "#0ccff", "#00ccf", "#00ccffa", "#00ccff000"] {
        let err = ColorModel::parse_css_string(input).unwrap_err();
        assert_eq!(err, ColorError::unknown_hex(input), "input {input:?}");
    }
}

#[test]
fn test_invalid_hex_digits() {
    let err = ColorModel::parse_css_string(" #ABCDEG ").unwrap_err();
    assert_eq!(err, ColorError::unknown_hex("#abcdeg"));

    let mut color = ColorModel::new();
    assert_eq!(
        color.set_hex("GGG").unwrap_err(),
        ColorError::unknown_hex("GGG")
    );
}

#[test]
fn test_incomplete_functional_strings_fall_through_to_hex() {
    // Fewer than three numbers is not functional notation.
    for input in ["rgb(1,2)", "hsl(120)", "rgba()", "hsla(,,)"] {
        let err = ColorModel::parse_css_string(input).unwrap_err();
        assert_eq!(err, ColorError::unknown_hex(input));
    }

    assert!(CssColorParser::parse("RGB(1, 2)").is_err());
}

#[test]
fn test_functional_strings_are_lenient() {
    // Extra numbers are ignored and channels are not clamped.
    let color = ColorModel::parse_css_string("rgb(300, -5, 10, 0.5, 99)").unwrap();
    assert_eq!(color.rgba().unwrap().to_array(), [300.0, -5.0, 10.0, 0.5]);
    assert_eq!(color.hex().unwrap(), "#ff000a80");
}

#[test]
fn test_failed_set_hex_keeps_previous_color() {
    let mut color = ColorModel::from_rgba([1.0, 2.0, 3.0]);
    assert!(color.set_hex("#12345").is_err());
    assert_eq!(color.rgb_string().unwrap(), "rgb(1,2,3)");
}

#[test]
fn test_no_color_set_everywhere() {
    let color = ColorModel::new();
    assert_eq!(color.rgb_string().unwrap_err(), ColorError::NoColorSet);
    assert_eq!(color.rgba_string().unwrap_err(), ColorError::NoColorSet);
    assert_eq!(color.hsl_string().unwrap_err(), ColorError::NoColorSet);
    assert_eq!(color.hsla_string().unwrap_err(), ColorError::NoColorSet);
    assert_eq!(ColorError::NoColorSet.to_string(), "No color is set");
}

#[test]
fn test_picker_errors_before_any_color() {
    let mut picker = PickerState::new(PickerConfig::default()).unwrap();

    assert!(matches!(
        picker.editor_value(),
        Err(PickerError::Color(ColorError::NoColorSet))
    ));
    assert!(matches!(
        picker.view(),
        Err(PickerError::Color(ColorError::NoColorSet))
    ));
    assert!(matches!(
        picker.drag_hue(0.5),
        Err(PickerError::Color(ColorError::NoColorSet))
    ));
}

#[test]
fn test_picker_rejects_bad_color() {
    let mut picker = PickerState::new(PickerConfig::default()).unwrap();
    let err = picker.set_color("nope", false).unwrap_err();

    assert!(matches!(&err, PickerError::Color(ColorError::UnknownHexColor(s)) if s == "nope"));
    assert_eq!(err.to_string(), "Color error: Unknown hex color: nope");
    assert!(picker.color().is_none());
}

#[test]
fn test_picker_ignores_nan_components() {
    let mut picker = PickerState::new(PickerConfig::default()).unwrap();
    picker.set_color("hsl(180, 50%, 50%)", true).unwrap();
    picker.set_hsla(Some(f64::NAN), None, Some(0.25), None).unwrap();

    let hsla = picker.color().unwrap().hsla().unwrap();
    assert_eq!(hsla.to_array(), [0.5, 0.5, 0.25, 1.0]);
}

#[test]
fn test_config_validation_errors() {
    let config = PickerConfig {
        layout: "two words".to_string(),
        ..PickerConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, PickerError::InvalidConfig(_)));
    assert!(err.to_string().contains("Invalid layout: 'two words'"));

    let err = PickerConfig::builder().layout("").build().unwrap_err();
    assert!(matches!(err, PickerError::InvalidConfig(_)));

    let err = PickerConfig::builder().color("#nope").build().unwrap_err();
    assert!(err
        .to_string()
        .contains("Invalid initial color: 'Unknown hex color: #nope'"));

    assert!(PickerState::new(config).is_err());
}

#[test]
fn test_popup_placement_parse_errors() {
    assert_eq!(" Top ".parse::<PopupPlacement>().unwrap(), PopupPlacement::Top);
    let err = "center".parse::<PopupPlacement>().unwrap_err();
    assert!(err.to_string().contains("Invalid popup placement: 'center'"));
}

#[test]
fn test_config_file_errors() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let err = PickerConfig::from_json_file(&missing).unwrap_err();
    match err {
        PickerError::Io(e) => {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
            assert!(e.to_string().contains("Failed to read config file"));
        },
        other => panic!("expected Io error, got {other:?}"),
    }

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    assert!(matches!(
        PickerConfig::from_json_file(file.path()),
        Err(PickerError::Serialization(_))
    ));

    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"popup": "middle"}}"#).unwrap();
    assert!(matches!(
        PickerConfig::from_json_file(file.path()),
        Err(PickerError::Serialization(_))
    ));

    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"color": "rgb(1,2)"}}"#).unwrap();
    assert!(matches!(
        PickerConfig::from_json_file(file.path()),
        Err(PickerError::InvalidConfig(_))
    ));
}
