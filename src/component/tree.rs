//! The component tree: a slotmap arena plus editable state.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use crate::action::DataMap;
use crate::error::ValueError;

use super::content::{ComponentContent, InputType};
use super::node::{ComponentNode, NodeId};
use super::value::FormValue;

const EMPTY_CHILDREN: &[NodeId] = &[];

/// A decoded component tree.
///
/// Nodes live in one `SlotMap`; parent/child links and editable values are
/// stored in secondary maps. The tree is rebuilt wholesale for every payload;
/// only values and the `disabled` flag change in place.
#[derive(Debug, Clone)]
pub struct ComponentTree {
    nodes: SlotMap<NodeId, ComponentNode>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
    values: SecondaryMap<NodeId, FormValue>,
    root: Option<NodeId>,
}

impl ComponentTree {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            values: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a parentless node. The first one inserted becomes the root.
    pub fn insert(&mut self, node: ComponentNode) -> NodeId {
        let id = self.insert_detached(node);
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert a node as the last child of `parent`.
    ///
    /// A stale `parent` leaves the new node detached.
    pub fn insert_child(&mut self, parent: NodeId, node: ComponentNode) -> NodeId {
        let id = self.insert_detached(node);
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.push(id);
            self.parent.insert(id, parent);
        }
        id
    }

    fn insert_detached(&mut self, node: ComponentNode) -> NodeId {
        let initial = FormValue::initial(&node.content);
        let id = self.nodes.insert(node);
        self.children.insert(id, Vec::new());
        if let Some(value) = initial {
            self.values.insert(id, value);
        }
        id
    }

    /// Remove a node and its whole subtree.
    pub fn remove(&mut self, id: NodeId) -> Option<ComponentNode> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        if let Some(parent) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent) {
                siblings.retain(|&child| child != id);
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }

        let mut queue = VecDeque::from([id]);
        let mut removed = None;
        while let Some(current) = queue.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                queue.extend(kids);
            }
            self.parent.remove(current);
            self.values.remove(current);
            let node = self.nodes.remove(current);
            if current == id {
                removed = node;
            }
        }
        removed
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(EMPTY_CHILDREN)
    }

    /// Ancestors from the immediate parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    pub fn get(&self, id: NodeId) -> Option<&ComponentNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut ComponentNode> {
        self.nodes.get_mut(id)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        result
    }

    /// Every node reachable from the root, in document order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ComponentNode)> + '_ {
        self.root
            .map(|root| self.walk_depth_first(root))
            .unwrap_or_default()
            .into_iter()
            .filter_map(|id| self.nodes.get(id).map(|node| (id, node)))
    }

    // ---------------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------------

    /// First node in document order whose server id matches.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.iter().find(|(_, node)| node.id.as_deref() == Some(id)).map(|(nid, _)| nid)
    }

    /// All nodes in document order carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.iter().filter(|(_, node)| node.has_class(class)).map(|(id, _)| id).collect()
    }

    // ---------------------------------------------------------------------------
    // Editable state
    // ---------------------------------------------------------------------------

    pub fn value(&self, id: NodeId) -> Option<&FormValue> {
        self.values.get(id)
    }

    /// Replace the value of an editable node.
    ///
    /// The value must fit the node's kind and content constraints: text inputs
    /// honour `max_length` and the date range, radio choices must be one of the
    /// options (or empty to clear), and sliders are clamped and snapped.
    pub fn set_value(&mut self, id: NodeId, value: FormValue) -> Result<(), ValueError> {
        let node = self.nodes.get(id).ok_or(ValueError::UnknownComponent)?;
        let kind = node.kind();
        if !value.fits(kind) {
            return Err(ValueError::WrongKind(kind.name()));
        }
        let value = match (&node.content, value) {
            (ComponentContent::TextInput(input), FormValue::Text(text)) => {
                if let Some(max) = input.max_length {
                    if text.chars().count() > max {
                        return Err(ValueError::TooLong(max));
                    }
                }
                if input.input_type == InputType::Date && !text.is_empty() {
                    let below = input.min_date.as_deref().is_some_and(|min| text.as_str() < min);
                    let above = input.max_date.as_deref().is_some_and(|max| text.as_str() > max);
                    if below || above {
                        return Err(ValueError::OutOfRange(text));
                    }
                }
                FormValue::Text(text)
            }
            (ComponentContent::RadioButtons(radio), FormValue::Choice(choice)) => {
                if !choice.is_empty() && !radio.contains_value(&choice) {
                    return Err(ValueError::UnknownOption(choice));
                }
                FormValue::Choice(choice)
            }
            (ComponentContent::TabView(_), FormValue::Choice(choice)) => {
                let pages = self.children(id).len();
                match choice.parse::<usize>() {
                    Ok(index) if index < pages => FormValue::Choice(choice),
                    _ => return Err(ValueError::UnknownOption(choice)),
                }
            }
            (ComponentContent::Slider(slider), FormValue::Number(n)) => {
                FormValue::Number(slider.normalize(n))
            }
            (_, value) => value,
        };
        tracing::trace!(kind = kind.name(), ?value, "value changed");
        self.values.insert(id, value);
        Ok(())
    }

    /// The page currently shown by a tab view.
    pub fn selected_page(&self, tab_view: NodeId) -> Option<NodeId> {
        let pages = self.children(tab_view);
        let index = self
            .values
            .get(tab_view)
            .and_then(FormValue::as_text)
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(0);
        pages.get(index).or_else(|| pages.first()).copied()
    }

    /// Values of every identified editable node, keyed by server id.
    ///
    /// Tab selections are navigation state and are not collected.
    pub fn form_data(&self) -> DataMap {
        let mut data = DataMap::new();
        for (id, node) in self.iter() {
            let (Some(key), Some(value)) = (node.id.as_ref(), self.values.get(id)) else {
                continue;
            };
            if matches!(node.content, ComponentContent::TabView(_)) {
                continue;
            }
            data.insert(key.clone(), value.to_json());
        }
        data
    }

    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.disabled = disabled;
        }
    }

    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|node| node.disabled)
    }
}

impl Default for ComponentTree {
    fn default() -> Self {
        Self::new()
    }
}
