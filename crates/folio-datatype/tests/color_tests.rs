//! Integration tests for color values.

use folio_datatype::ColorValue;

#[test]
fn test_six_digit_hex() {
    assert_eq!(
        ColorValue::from_hex("#ff0000"),
        Ok(ColorValue::new(255, 0, 0))
    );
}

#[test]
fn test_three_digit_hex_doubles_digits() {
    assert_eq!(ColorValue::from_hex("#fff"), Ok(ColorValue::WHITE));
    assert_eq!(ColorValue::from_hex("#f00"), Ok(ColorValue::new(255, 0, 0)));
}

#[test]
fn test_hex_without_leading_hash() {
    assert_eq!(ColorValue::from_hex("008000"), Ok(ColorValue::new(0, 128, 0)));
}

#[test]
fn test_wrong_digit_count_is_error() {
    let err = ColorValue::from_hex("#ff").expect_err("two digits");
    assert_eq!(err.message(), "color not 3 or 6 hex digits");

    let err = ColorValue::from_hex("#ffff").expect_err("four digits");
    assert_eq!(err.message(), "color not 3 or 6 hex digits");
}

#[test]
fn test_named_colors() {
    assert_eq!(ColorValue::from_named("teal"), Some(ColorValue::new(0, 128, 128)));
    assert_eq!(ColorValue::from_named("black"), Some(ColorValue::BLACK));
    assert_eq!(ColorValue::from_named("chartreuse"), None);
}

#[test]
fn test_component_clamping() {
    assert_eq!(
        ColorValue::from_components(300.0, -20.0, 12.0),
        ColorValue::new(255, 0, 12)
    );
}

#[test]
fn test_display_round_trips_through_hex() {
    let color = ColorValue::new(18, 52, 86);
    assert_eq!(color.to_string(), "#123456");
    assert_eq!(ColorValue::from_hex(&color.to_string()), Ok(color));
}
