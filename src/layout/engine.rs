//! Tree-level layout.
//!
//! [`LayoutEngine`] walks a [`ComponentTree`] and assigns every visible node
//! an absolute frame. Leaves are sized by their kind's measure provider;
//! containers stack their children with [`layout_stack`] inside their padding.
//! Layout is a pure function of the tree, the bounds and the config.

use slotmap::SecondaryMap;

use crate::component::content::{ComponentContent, SeparatorStyle, StackOrientation};
use crate::component::{ComponentTree, NodeId};
use crate::config::Config;
use crate::geometry::{Point, Rect, Size};
use crate::style::Alignment;

use super::measure::provider;
use super::stack::{layout_stack, Orientation, StackChild, StackLayout};

// ---------------------------------------------------------------------------
// TreeLayout
// ---------------------------------------------------------------------------

/// Frames computed for one pass over a tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeLayout {
    frames: SecondaryMap<NodeId, Rect>,
    content_size: Size,
}

impl TreeLayout {
    /// The node's frame. Nodes that were not laid out (hidden tab pages and
    /// their subtrees, stale ids) report [`Rect::ZERO`].
    pub fn frame(&self, id: NodeId) -> Rect {
        self.frames.get(id).copied().unwrap_or(Rect::ZERO)
    }

    /// The node's frame, or `None` if this pass never reached it.
    pub fn get(&self, id: NodeId) -> Option<Rect> {
        self.frames.get(id).copied()
    }

    /// Extent of the root including its margins.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The deepest node whose frame contains `point`.
    pub fn hit_test(&self, tree: &ComponentTree, point: Point) -> Option<NodeId> {
        let mut current = tree.root().filter(|&root| self.frame(root).contains(point))?;
        'descend: loop {
            for &child in tree.children(current).iter().rev() {
                if self.frame(child).contains(point) {
                    current = child;
                    continue 'descend;
                }
            }
            return Some(current);
        }
    }
}

// ---------------------------------------------------------------------------
// LayoutEngine
// ---------------------------------------------------------------------------

/// Lays out component trees using the sizes in a [`Config`].
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'c> {
    config: &'c Config,
}

impl<'c> LayoutEngine<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Lay out the whole tree. The root spans the bounds width minus its
    /// margins and takes its measured height.
    pub fn layout(&self, tree: &ComponentTree, bounds: Rect) -> TreeLayout {
        let mut out = TreeLayout::default();
        let Some(root) = tree.root() else {
            return out;
        };
        let Some(node) = tree.get(root) else {
            return out;
        };
        let margin = node.style.margin;
        let width = (bounds.width - margin.horizontal()).max(0);
        let size = self.measure(tree, root, width);
        let frame = Rect::new(bounds.x + margin.left, bounds.y + margin.top, width, size.height);
        if !frame.is_empty() {
            self.place(tree, root, frame, &mut out.frames);
            out.content_size = Size::new(bounds.width, size.height + margin.vertical());
        }
        tracing::debug!(nodes = out.frames.len(), ?bounds, "layout pass");
        out
    }

    /// Size of `id` when offered `width`, padding included. Explicit style
    /// sizes win over the measured size.
    pub fn measure(&self, tree: &ComponentTree, id: NodeId, width: i32) -> Size {
        let Some(node) = tree.get(id) else {
            return Size::ZERO;
        };
        let style = &node.style;
        let offered = if style.width > 0 { style.width.min(width.max(0)) } else { width.max(0) };
        let inner = (offered - style.padding.horizontal()).max(0);

        let content = match provider(node.kind()) {
            Some(measure) => measure.measure(node, inner, self.config),
            None => self.container_layout(tree, id, Rect::new(0, 0, inner, 0)).content_size,
        };
        if content.is_empty() && style.width == 0 && style.height == 0 {
            return Size::ZERO;
        }

        let mut size = Size::new(
            content.width + style.padding.horizontal(),
            content.height + style.padding.vertical(),
        );
        if style.width > 0 {
            size.width = offered;
        }
        if style.height > 0 {
            size.height = style.height;
        }
        size
    }

    /// Record `frame` for `id` and lay out its subtree inside it.
    fn place(&self, tree: &ComponentTree, id: NodeId, frame: Rect, frames: &mut SecondaryMap<NodeId, Rect>) {
        frames.insert(id, frame);
        let Some(node) = tree.get(id) else {
            return;
        };
        if !node.kind().is_container() {
            return;
        }
        let inner = frame.inset(node.style.padding);
        let stacked = self.container_layout(tree, id, inner);
        for (&child, &child_frame) in self.laid_out_children(tree, id).iter().zip(&stacked.frames) {
            if !child_frame.is_empty() {
                self.place(tree, child, child_frame, frames);
            }
        }
    }

    /// The children a container stacks, in order. Tab views stack only the
    /// selected page.
    fn laid_out_children(&self, tree: &ComponentTree, id: NodeId) -> Vec<NodeId> {
        match tree.get(id).map(|node| &node.content) {
            Some(ComponentContent::TabView(_)) => tree.selected_page(id).into_iter().collect(),
            _ => tree.children(id).to_vec(),
        }
    }

    /// Stack a container's children inside `bounds`.
    fn container_layout(&self, tree: &ComponentTree, id: NodeId, bounds: Rect) -> StackLayout {
        let Some(node) = tree.get(id) else {
            return StackLayout::default();
        };
        let children = self.laid_out_children(tree, id);
        match &node.content {
            ComponentContent::StackView(stack) => {
                let orientation = match stack.orientation {
                    StackOrientation::Vertical => Orientation::Vertical,
                    StackOrientation::Horizontal => Orientation::Horizontal,
                };
                let boxes = self.boxes(tree, &children, 0, false);
                layout_stack(&boxes, orientation, bounds)
            }
            ComponentContent::TableView(_) => {
                let gap = self.row_gap(tree, id);
                layout_stack(&self.boxes(tree, &children, gap, true), Orientation::Vertical, bounds)
            }
            ComponentContent::Section(_) => {
                let gap = tree.parent(id).map_or(0, |table| self.row_gap(tree, table));
                layout_stack(&self.boxes(tree, &children, gap, true), Orientation::Vertical, bounds)
            }
            ComponentContent::TabView(_) => {
                let bar = self.config.control_heights.tab_bar;
                let body = Rect::new(bounds.x, bounds.y + bar, bounds.width, bounds.height);
                let mut layout = layout_stack(&self.boxes(tree, &children, 0, true), Orientation::Vertical, body);
                layout.content_size.width = bounds.width;
                layout.content_size.height += bar;
                layout
            }
            ComponentContent::Page(_) => {
                layout_stack(&self.boxes(tree, &children, 0, true), Orientation::Vertical, bounds)
            }
            _ => StackLayout::default(),
        }
    }

    /// Spacing a table puts between its sections and between rows.
    fn row_gap(&self, tree: &ComponentTree, table: NodeId) -> i32 {
        match tree.get(table).map(|node| &node.content) {
            Some(ComponentContent::TableView(t)) if t.separator_style != SeparatorStyle::None => {
                self.config.table_separator_height
            }
            _ => 0,
        }
    }

    /// Stack boxes for `children`. Every child after the first gets `gap`
    /// extra top margin; `fill` stretches children across the container.
    fn boxes<'t>(&'t self, tree: &'t ComponentTree, children: &[NodeId], gap: i32, fill: bool) -> Vec<StackChild<'t>> {
        children
            .iter()
            .enumerate()
            .filter_map(|(index, &child)| {
                let node = tree.get(child)?;
                let mut stack_child =
                    StackChild::new(move |width| self.measure(tree, child, width)).styled(&node.style);
                if index > 0 {
                    stack_child.margin.top += gap;
                }
                if fill {
                    stack_child = stack_child.with_alignment(Alignment::Fill);
                }
                Some(stack_child)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::FormValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn tree(json: serde_json::Value) -> ComponentTree {
        ComponentTree::parse(&json, None).unwrap()
    }

    fn label(text: &str, style: serde_json::Value) -> serde_json::Value {
        json!({"type": "label", "style": style, "content": {"text": text}})
    }

    #[test]
    fn empty_tree_has_no_frames() {
        let config = Config::default();
        let layout = LayoutEngine::new(&config).layout(&ComponentTree::new(), Rect::new(0, 0, 100, 100));
        assert!(layout.is_empty());
        assert_eq!(layout.content_size(), Size::ZERO);
    }

    #[test]
    fn horizontal_weights_and_gravity() {
        let config = Config::default();
        let tree = tree(json!({
            "type": "stackView",
            "content": {
                "orientation": "horizontal",
                "items": [
                    label("a", json!({"weight": 1, "height": 40, "gravity": "middle"})),
                    label("b", json!({"weight": 2, "height": 60})),
                    label("c", json!({"weight": 1, "height": 20, "gravity": "bottom"})),
                ],
            },
        }));
        let layout = LayoutEngine::new(&config).layout(&tree, Rect::new(0, 0, 400, 800));
        let root = tree.root().unwrap();
        let kids = tree.children(root);
        let columns: Vec<i32> = kids.iter().map(|&k| layout.frame(k).x).collect();
        assert_eq!(columns, vec![0, 100, 300]);
        assert_eq!(layout.frame(kids[0]).y, 10);
        assert_eq!(layout.frame(kids[2]).y, 40);
        assert_eq!(layout.frame(root), Rect::new(0, 0, 400, 60));
    }

    #[test]
    fn padding_and_margin() {
        let config = Config::default();
        let tree = tree(json!({
            "type": "stackView",
            "style": {"padding": 10, "margin": "5"},
            "content": {"items": [{"type": "separator", "style": {"margin": "0 4"}}]},
        }));
        let layout = LayoutEngine::new(&config).layout(&tree, Rect::new(0, 0, 200, 100));
        let root = tree.root().unwrap();
        let sep = tree.children(root)[0];
        assert_eq!(layout.frame(root), Rect::new(5, 5, 190, 21));
        assert_eq!(layout.frame(sep), Rect::new(19, 15, 162, 1));
        assert_eq!(layout.content_size(), Size::new(200, 31));
    }

    #[test]
    fn explicit_size_overrides_intrinsic() {
        let config = Config::default();
        let tree = tree(json!({
            "type": "stackView",
            "content": {"items": [{"type": "icon", "style": {"width": 60, "height": 30}, "content": {"icon": "star"}}]},
        }));
        let layout = LayoutEngine::new(&config).layout(&tree, Rect::new(0, 0, 200, 100));
        let icon = tree.children(tree.root().unwrap())[0];
        assert_eq!(layout.frame(icon).size(), Size::new(60, 30));
    }

    #[test]
    fn empty_labels_take_no_space() {
        let config = Config::default();
        let tree = tree(json!({
            "type": "stackView",
            "content": {"items": [
                label("", json!({"margin": 20})),
                {"type": "separator"},
            ]},
        }));
        let layout = LayoutEngine::new(&config).layout(&tree, Rect::new(0, 0, 100, 100));
        let kids = tree.children(tree.root().unwrap());
        assert_eq!(layout.frame(kids[0]), Rect::ZERO);
        assert_eq!(layout.frame(kids[1]), Rect::new(0, 0, 100, 1));
    }

    #[test]
    fn table_rows_fill_and_separate() {
        let config = Config::default().with_table_separator_height(4);
        let tree = tree(json!({
            "type": "tableView",
            "content": {
                "separatorStyle": "spacing",
                "sections": [{"items": [
                    {"type": "separator"},
                    {"type": "icon", "content": {"icon": "star"}},
                ]}],
            },
        }));
        let layout = LayoutEngine::new(&config).layout(&tree, Rect::new(0, 0, 100, 100));
        let section = tree.children(tree.root().unwrap())[0];
        let rows = tree.children(section);
        assert_eq!(layout.frame(rows[0]), Rect::new(0, 0, 100, 1));
        assert_eq!(layout.frame(rows[1]), Rect::new(0, 5, 100, 24));
    }

    #[test]
    fn tab_view_lays_out_selected_page_only() {
        let config = Config::default();
        let mut tree = tree(json!({
            "type": "tabView",
            "content": {"pages": [
                {"title": "One", "body": {"type": "separator"}},
                {"title": "Two", "body": {"type": "icon", "content": {"icon": "star"}}},
            ]},
        }));
        let root = tree.root().unwrap();
        let pages = tree.children(root).to_vec();
        let engine = LayoutEngine::new(&config);

        let layout = engine.layout(&tree, Rect::new(0, 0, 100, 100));
        assert_eq!(layout.frame(pages[0]), Rect::new(0, 44, 100, 1));
        assert_eq!(layout.frame(pages[1]), Rect::ZERO);
        assert_eq!(layout.frame(root).height, 45);

        tree.set_value(root, FormValue::Choice("1".into())).unwrap();
        let layout = engine.layout(&tree, Rect::new(0, 0, 100, 100));
        assert_eq!(layout.frame(pages[0]), Rect::ZERO);
        assert_eq!(layout.frame(tree.children(pages[1])[0]).y, 44);
    }

    #[test]
    fn layout_is_idempotent() {
        let config = Config::default();
        let tree = tree(json!({
            "type": "stackView",
            "content": {"items": [
                label("Hello there, this wraps", json!({"align": "center"})),
                {"type": "button", "content": {"title": "OK"}},
            ]},
        }));
        let engine = LayoutEngine::new(&config);
        let bounds = Rect::new(0, 0, 120, 400);
        assert_eq!(engine.layout(&tree, bounds), engine.layout(&tree, bounds));
    }

    #[test]
    fn hit_test_finds_deepest() {
        let config = Config::default();
        let tree = tree(json!({
            "type": "stackView",
            "style": {"padding": 10},
            "content": {"items": [{"type": "button", "id": "ok", "content": {"title": "OK"}}]},
        }));
        let layout = LayoutEngine::new(&config).layout(&tree, Rect::new(0, 0, 200, 200));
        let button = tree.find_by_id("ok").unwrap();
        let frame = layout.frame(button);
        assert_eq!(layout.hit_test(&tree, Point::new(frame.x + 1, frame.y + 1)), Some(button));
        assert_eq!(layout.hit_test(&tree, Point::new(2, 2)), tree.root());
        assert_eq!(layout.hit_test(&tree, Point::new(500, 500)), None);
    }
}
