//! The root wrapper of a server-delivered component document.

use serde_json::Value;

use crate::error::ParseError;
use crate::style::{ComponentStyle, StyleClassTable};

use super::factory::ComponentFactory;
use super::tree::ComponentTree;

/// A decoded component view: optional title, a body tree and its class table.
#[derive(Debug, Clone)]
pub struct ComponentView {
    pub title: Option<String>,
    pub tree: ComponentTree,
    pub styles: StyleClassTable,
}

impl ComponentView {
    /// Decode `{title?, body? | root?, styles?}` with built-in style defaults.
    pub fn from_json(json: &Value) -> Result<ComponentView, ParseError> {
        Self::from_json_with_style(json, &ComponentStyle::default())
    }

    /// Decode a view, resolving every node's style on top of `base`.
    ///
    /// A view needs a title or a valid body. A body that fails to decode is
    /// dropped when a title is present.
    pub fn from_json_with_style(json: &Value, base: &ComponentStyle) -> Result<ComponentView, ParseError> {
        let obj = json.as_object().ok_or(ParseError::NotAnObject("component view"))?;
        let title = obj.get("title").and_then(Value::as_str).map(str::to_owned);
        let styles = obj.get("styles").map(StyleClassTable::from_json).unwrap_or_default();
        let body = obj.get("body").or_else(|| obj.get("root")).filter(|b| !b.is_null());

        let mut tree = ComponentTree::new();
        match body {
            Some(body) => {
                if let Err(err) = ComponentFactory::new(Some(&styles), base).parse_into(&mut tree, None, body) {
                    if title.is_none() {
                        return Err(err);
                    }
                    tracing::warn!(%err, "dropping invalid view body");
                }
            }
            None if title.is_none() => {
                return Err(ParseError::MissingField { kind: "componentView", field: "body" });
            }
            None => {}
        }
        tracing::debug!(title = ?title, nodes = tree.len(), "component view decoded");
        Ok(ComponentView { title, tree, styles })
    }
}
