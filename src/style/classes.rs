//! Style class table and the style resolver.
//!
//! A view document may carry a `styles` object mapping class names to partial
//! style JSON, much like CSS classes. A component's effective style is its
//! classes merged in listed order, with its inline `style` object on top.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::style::properties::style_from_json;
use crate::style::styles::ComponentStyle;

/// Class name → partial style JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleClassTable {
    classes: HashMap<String, Map<String, Value>>,
}

impl StyleClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a JSON object. Entries whose value is not an object
    /// are dropped.
    pub fn from_json(json: &Value) -> Self {
        let mut table = Self::new();
        if let Some(obj) = json.as_object() {
            for (name, style) in obj {
                match style.as_object() {
                    Some(style) => table.insert(name.clone(), style.clone()),
                    None => tracing::warn!(class = %name, "style class is not an object, dropping"),
                }
            }
        }
        table
    }

    /// Add or replace a class.
    pub fn insert(&mut self, name: impl Into<String>, style: Map<String, Value>) {
        self.classes.insert(name.into(), style);
    }

    pub fn get(&self, name: &str) -> Option<&Map<String, Value>> {
        self.classes.get(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Shallow-merge the named classes in order. Later classes win per key.
    pub fn merge_classes<S: AsRef<str>>(&self, names: &[S]) -> Map<String, Value> {
        let mut merged = Map::new();
        for name in names {
            let name = name.as_ref();
            match self.classes.get(name) {
                Some(style) => {
                    for (key, value) in style {
                        merged.insert(key.clone(), value.clone());
                    }
                }
                None => tracing::debug!(class = %name, "unknown style class"),
            }
        }
        merged
    }
}

/// Split a `class` attribute into class names.
///
/// Accepts a space-separated string or an array of strings; anything else
/// yields no classes.
pub fn class_names(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => s.split_whitespace().map(str::to_owned).collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .flat_map(str::split_whitespace)
            .map(str::to_owned)
            .collect(),
        _ => Vec::new(),
    }
}

/// Resolve a component style from inline JSON and class names.
///
/// Classes are merged first, in listed order, then the inline style object
/// overrides them key by key. The merged JSON is read on top of the built-in
/// defaults.
pub fn resolve_style(
    inline: Option<&Value>,
    class_names: Option<&[String]>,
    table: Option<&StyleClassTable>,
) -> ComponentStyle {
    resolve_style_over(&ComponentStyle::default(), inline, class_names, table)
}

/// [`resolve_style`] with a caller-supplied base instead of the built-in defaults.
pub fn resolve_style_over(
    base: &ComponentStyle,
    inline: Option<&Value>,
    class_names: Option<&[String]>,
    table: Option<&StyleClassTable>,
) -> ComponentStyle {
    let mut combined = match (class_names, table) {
        (Some(names), Some(table)) => table.merge_classes(names),
        _ => Map::new(),
    };
    if let Some(inline) = inline.and_then(Value::as_object) {
        for (key, value) in inline {
            combined.insert(key.clone(), value.clone());
        }
    }
    style_from_json(base, &combined)
}
