//! Property parsing: style JSON values → typed `ComponentStyle` fields.
//!
//! Every known key has its own coercion. A value that fails to coerce is
//! reported as a [`PropertyError`] and the caller keeps the field's previous
//! value, so one bad key never invalidates the rest of the style.

use serde_json::{Map, Value};

use crate::geometry::Insets;
use crate::style::styles::*;
use crate::style::tokenizer;

/// Errors from property parsing.
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    #[error("invalid value for {property}: {message}")]
    InvalidValue { property: String, message: String },
}

fn invalid(property: &str, message: impl Into<String>) -> PropertyError {
    PropertyError::InvalidValue { property: property.into(), message: message.into() }
}

/// Largest magnitude accepted for a length or inset, in points.
pub const MAX_LENGTH: f64 = 1_000_000.0;

/// Round `n` to whole points, rejecting values outside `±MAX_LENGTH`.
fn to_points(n: f64, property: &str) -> Result<i32, PropertyError> {
    if !n.is_finite() || n.abs() > MAX_LENGTH {
        return Err(invalid(property, format!("length out of range: {n}")));
    }
    Ok(n.round() as i32)
}

/// Read a number from a JSON number or a numeric string.
pub fn parse_number(value: &Value, property: &str) -> Result<f64, PropertyError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| invalid(property, "number out of range")),
        Value::String(s) => match tokenizer::numbers(s).as_deref() {
            Some([n]) => Ok(*n),
            _ => Err(invalid(property, format!("expected a number, got {s:?}"))),
        },
        other => Err(invalid(property, format!("expected a number, got {other}"))),
    }
}

/// Read a non-negative length in points, rounded to the nearest point.
pub fn parse_length(value: &Value, property: &str) -> Result<i32, PropertyError> {
    let n = parse_number(value, property)?;
    if !n.is_finite() || n < 0.0 {
        return Err(invalid(property, format!("expected a non-negative length, got {n}")));
    }
    to_points(n, property)
}

/// Parse an inset shorthand: a number, or a string of 1-4 numbers.
///
/// - 1 value: all sides
/// - 2 values: vertical, horizontal
/// - 3 values: top, horizontal, bottom
/// - 4 values: top, right, bottom, left
pub fn parse_insets(value: &Value, property: &str) -> Result<Insets, PropertyError> {
    let values: Vec<f64> = match value {
        Value::Number(_) => vec![parse_number(value, property)?],
        Value::String(s) => tokenizer::numbers(s)
            .ok_or_else(|| invalid(property, format!("expected 1-4 numbers, got {s:?}")))?,
        other => return Err(invalid(property, format!("expected insets, got {other}"))),
    };
    let v = values
        .iter()
        .map(|&n| to_points(n, property))
        .collect::<Result<Vec<i32>, _>>()?;
    match v.as_slice() {
        [all] => Ok(Insets::all(*all)),
        [vertical, horizontal] => Ok(Insets::symmetric(*vertical, *horizontal)),
        [top, horizontal, bottom] => Ok(Insets::new(*top, *horizontal, *bottom, *horizontal)),
        [top, right, bottom, left] => Ok(Insets::new(*top, *right, *bottom, *left)),
        other => Err(invalid(property, format!("expected 1-4 values, got {}", other.len()))),
    }
}

fn parse_color(value: &Value, property: &str) -> Result<Color, PropertyError> {
    value
        .as_str()
        .and_then(Color::from_hex)
        .ok_or_else(|| invalid(property, format!("expected a hex color, got {value}")))
}

fn parse_name<T>(
    value: &Value,
    property: &str,
    from_name: impl Fn(&str) -> Option<T>,
) -> Result<T, PropertyError> {
    value
        .as_str()
        .and_then(from_name)
        .ok_or_else(|| invalid(property, format!("unrecognized value {value}")))
}

/// Which side a suffixed inset key (`marginTop`, `paddingLeft`, ...) targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

fn split_inset_key(key: &str) -> Option<(&'static str, Side)> {
    let (base, rest) = if let Some(rest) = key.strip_prefix("margin") {
        ("margin", rest)
    } else if let Some(rest) = key.strip_prefix("padding") {
        ("padding", rest)
    } else {
        return None;
    };
    let side = match rest {
        "Top" => Side::Top,
        "Right" => Side::Right,
        "Bottom" => Side::Bottom,
        "Left" => Side::Left,
        _ => return None,
    };
    Some((base, side))
}

fn set_side(insets: &mut Insets, side: Side, value: i32) {
    match side {
        Side::Top => insets.top = value,
        Side::Right => insets.right = value,
        Side::Bottom => insets.bottom = value,
        Side::Left => insets.left = value,
    }
}

/// Apply a single style key to `style`.
pub fn apply_property(
    style: &mut ComponentStyle,
    key: &str,
    value: &Value,
) -> Result<(), PropertyError> {
    if let Some((base, side)) = split_inset_key(key) {
        let n = to_points(parse_number(value, key)?, key)?;
        let target = if base == "margin" { &mut style.margin } else { &mut style.padding };
        set_side(target, side, n);
        return Ok(());
    }

    match key {
        "align" | "alignment" => style.alignment = parse_name(value, key, Alignment::from_name)?,
        "gravity" => style.gravity = parse_name(value, key, Gravity::from_name)?,
        "margin" => style.margin = parse_insets(value, key)?,
        "padding" => style.padding = parse_insets(value, key)?,
        "width" => style.width = parse_length(value, key)?,
        "height" => style.height = parse_length(value, key)?,
        "weight" => {
            let n = parse_number(value, key)?;
            if n < 0.0 || n.fract() != 0.0 {
                return Err(invalid(key, format!("expected a non-negative integer, got {n}")));
            }
            style.weight = n as u32;
        }
        "color" | "textColor" => style.color = Some(parse_color(value, key)?),
        "backgroundColor" => style.background_color = Some(parse_color(value, key)?),
        "borderColor" => style.border_color = Some(parse_color(value, key)?),
        "borderWidth" => style.border_width = parse_length(value, key)?,
        "cornerRadius" => style.corner_radius = parse_length(value, key)?,
        "fontSize" => style.font_size = Some(parse_length(value, key)?),
        "textType" => style.text_type = parse_name(value, key, TextType::from_name)?,
        "textAlign" => style.text_align = parse_name(value, key, TextAlign::from_name)?,
        other => return Err(PropertyError::UnknownProperty(other.to_owned())),
    }
    Ok(())
}

/// Build a style from a merged style JSON object on top of `base`.
///
/// Shorthand insets are applied before suffixed keys, independent of map
/// order, so `paddingTop` always refines `padding`.
pub fn style_from_json(base: &ComponentStyle, json: &Map<String, Value>) -> ComponentStyle {
    let mut style = base.clone();
    let (suffixed, plain): (Vec<_>, Vec<_>) =
        json.iter().partition(|(key, _)| split_inset_key(key).is_some());

    for (key, value) in plain.into_iter().chain(suffixed) {
        match apply_property(&mut style, key, value) {
            Ok(()) => {}
            Err(PropertyError::UnknownProperty(_)) => {}
            Err(err) => tracing::debug!(%err, "ignoring style value"),
        }
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn style_of(v: Value) -> ComponentStyle {
        style_from_json(&ComponentStyle::default(), v.as_object().unwrap())
    }

    // ── Numbers ──────────────────────────────────────────────────────

    #[test]
    fn number_from_number_and_string() {
        assert_eq!(parse_number(&json!(12.5), "x").unwrap(), 12.5);
        assert_eq!(parse_number(&json!("12.5"), "x").unwrap(), 12.5);
        assert!(parse_number(&json!("twelve"), "x").is_err());
        assert!(parse_number(&json!("1 2"), "x").is_err());
        assert!(parse_number(&json!(true), "x").is_err());
    }

    #[test]
    fn length_rounds_and_rejects_negative() {
        assert_eq!(parse_length(&json!(10.6), "width").unwrap(), 11);
        assert!(parse_length(&json!(-1), "width").is_err());
    }

    #[test]
    fn lengths_beyond_bound_are_rejected() {
        assert_eq!(parse_length(&json!(1_000_000), "width").unwrap(), 1_000_000);
        assert!(parse_length(&json!(3e9), "width").is_err());
        assert!(parse_insets(&json!(3_000_000_000u64), "margin").is_err());
        assert!(parse_insets(&json!("8 -3000000000"), "margin").is_err());

        let s = style_of(json!({"margin": 3_000_000_000u64, "paddingLeft": -5e12, "width": "3000000000", "height": 4}));
        assert_eq!(s.margin, Insets::ZERO);
        assert_eq!(s.padding, Insets::ZERO);
        assert_eq!(s.width, ComponentStyle::default().width);
        assert_eq!(s.height, 4);
    }

    // ── Insets ───────────────────────────────────────────────────────

    #[test]
    fn insets_single_number() {
        assert_eq!(parse_insets(&json!(8), "padding").unwrap(), Insets::all(8));
    }

    #[test]
    fn insets_shorthand_strings() {
        assert_eq!(parse_insets(&json!("8"), "p").unwrap(), Insets::all(8));
        assert_eq!(parse_insets(&json!("8 16"), "p").unwrap(), Insets::symmetric(8, 16));
        assert_eq!(parse_insets(&json!("1 2 3"), "p").unwrap(), Insets::new(1, 2, 3, 2));
        assert_eq!(parse_insets(&json!("1 2 3 4"), "p").unwrap(), Insets::new(1, 2, 3, 4));
    }

    #[test]
    fn insets_rejects_bad_shorthand() {
        assert!(parse_insets(&json!("1 2 3 4 5"), "p").is_err());
        assert!(parse_insets(&json!(""), "p").is_err());
        assert!(parse_insets(&json!([1, 2]), "p").is_err());
    }

    #[test]
    fn suffixed_inset_overrides_shorthand() {
        let s = style_of(json!({"padding": 10, "paddingTop": 2, "marginLeft": "6"}));
        assert_eq!(s.padding, Insets::new(2, 10, 10, 10));
        assert_eq!(s.margin, Insets::new(0, 0, 0, 6));
    }

    // ── Whole style ──────────────────────────────────────────────────

    #[test]
    fn reads_known_keys() {
        let s = style_of(json!({
            "align": "center",
            "gravity": "bottom",
            "width": 120,
            "height": "44",
            "weight": 2,
            "color": "#336699",
            "backgroundColor": "#fff",
            "cornerRadius": 4,
            "textType": "header2",
            "textAlign": "right",
        }));
        assert_eq!(s.alignment, Alignment::Center);
        assert_eq!(s.gravity, Gravity::Bottom);
        assert_eq!(s.width, 120);
        assert_eq!(s.height, 44);
        assert_eq!(s.weight, 2);
        assert_eq!(s.color, Some(Color::rgb(0x33, 0x66, 0x99)));
        assert_eq!(s.background_color, Some(Color::rgb(255, 255, 255)));
        assert_eq!(s.corner_radius, 4);
        assert_eq!(s.text_type, TextType::Header2);
        assert_eq!(s.text_align, TextAlign::Right);
    }

    #[test]
    fn malformed_value_keeps_default_for_that_field_only() {
        let s = style_of(json!({"width": "wide", "height": 20, "color": "blue", "weight": 1.5}));
        assert_eq!(s.width, 0);
        assert_eq!(s.height, 20);
        assert_eq!(s.color, None);
        assert_eq!(s.weight, 0);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let s = style_of(json!({"shadow": "heavy", "height": 5}));
        assert_eq!(s.height, 5);
    }

    #[test]
    fn unknown_property_error() {
        let mut s = ComponentStyle::default();
        let err = apply_property(&mut s, "blink", &json!(true)).unwrap_err();
        assert!(matches!(err, PropertyError::UnknownProperty(ref k) if k == "blink"));
    }

    #[test]
    fn base_style_is_preserved_for_unset_keys() {
        let mut base = ComponentStyle::default();
        base.corner_radius = 8;
        let s = style_from_json(&base, json!({"height": 3}).as_object().unwrap());
        assert_eq!(s.corner_radius, 8);
        assert_eq!(s.height, 3);
    }
}
