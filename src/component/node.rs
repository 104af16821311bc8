//! Node types: NodeId, ComponentNode.

use slotmap::new_key_type;

use crate::style::ComponentStyle;

use super::content::ComponentContent;
use super::kind::ComponentKind;

new_key_type! {
    /// Handle to a node in a [`ComponentTree`](super::ComponentTree).
    pub struct NodeId;
}

/// One decoded component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentNode {
    pub content: ComponentContent,
    /// Server-assigned id, used to collect form values.
    pub id: Option<String>,
    /// Class names as listed on the wire.
    pub classes: Vec<String>,
    /// Resolved once when the node is decoded.
    pub style: ComponentStyle,
    /// Set while the node's action is in flight.
    pub disabled: bool,
}

impl ComponentNode {
    pub fn new(content: ComponentContent) -> Self {
        Self {
            content,
            id: None,
            classes: Vec::new(),
            style: ComponentStyle::default(),
            disabled: false,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_style(mut self, style: ComponentStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_classes(mut self, classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for class in classes {
            let class = class.into();
            if !self.classes.contains(&class) {
                self.classes.push(class);
            }
        }
        self
    }

    pub fn kind(&self) -> ComponentKind {
        self.content.kind()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_dedups_classes() {
        let node = ComponentNode::new(ComponentContent::Separator)
            .with_id("sep")
            .with_classes(["thin", "muted", "thin"]);
        assert_eq!(node.id.as_deref(), Some("sep"));
        assert_eq!(node.classes, vec!["thin", "muted"]);
        assert!(node.has_class("muted"));
        assert!(!node.disabled);
        assert_eq!(node.kind(), ComponentKind::Separator);
    }
}
