//! User-editable values held by input components.

use serde_json::Value;

use super::content::ComponentContent;
use super::kind::ComponentKind;

/// The current value of an editable component.
#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Text(String),
    Bool(bool),
    Number(f64),
    /// Selected radio option value or tab index.
    Choice(String),
}

impl FormValue {
    /// Value an editable component starts with when the payload gives none.
    ///
    /// Sliders start at zero pulled into their range.
    pub fn initial(content: &ComponentContent) -> Option<Self> {
        match content {
            ComponentContent::TextInput(_) => Some(Self::Text(String::new())),
            ComponentContent::Checkbox(_) => Some(Self::Bool(false)),
            ComponentContent::Slider(slider) => Some(Self::Number(slider.normalize(0.0))),
            ComponentContent::TabView(_) => Some(Self::Choice("0".into())),
            _ => None,
        }
    }

    /// Whether this value can be stored on a component of `kind`.
    pub fn fits(&self, kind: ComponentKind) -> bool {
        matches!(
            (self, kind),
            (Self::Text(_), ComponentKind::TextInput)
                | (Self::Bool(_), ComponentKind::Checkbox)
                | (Self::Number(_), ComponentKind::Slider)
                | (Self::Choice(_), ComponentKind::RadioButtons | ComponentKind::TabView)
        )
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Text(text) | Self::Choice(text) => Value::String(text.clone()),
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
        }
    }

    /// Decode a wire `value` for a component of `kind`.
    pub fn from_json(kind: ComponentKind, json: &Value) -> Option<Self> {
        match (kind, json) {
            (ComponentKind::TextInput, Value::String(s)) => Some(Self::Text(s.clone())),
            (ComponentKind::TextInput, Value::Number(n)) => Some(Self::Text(n.to_string())),
            (ComponentKind::Checkbox, Value::Bool(b)) => Some(Self::Bool(*b)),
            (ComponentKind::Slider, Value::Number(n)) => n.as_f64().map(Self::Number),
            (ComponentKind::RadioButtons, Value::String(s)) => Some(Self::Choice(s.clone())),
            (ComponentKind::TabView, Value::Number(n)) => n.as_u64().map(|i| Self::Choice(i.to_string())),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) | Self::Choice(text) => Some(text),
            _ => None,
        }
    }
}
