//! Snapshot helpers.
//!
//! [`layout_to_string`] turns a laid-out tree into a stable text outline for
//! snapshot assertions: one line per node, indented by depth, with its kind,
//! identifier and frame.

use std::fmt::Write;

use crate::component::{ComponentTree, NodeId};
use crate::layout::TreeLayout;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Outline every node of `tree` with its frame in `layout`.
///
/// Lines look like `button#pay 16,40 120x44`. Nodes that were not laid out,
/// such as unselected tab pages, show `-` instead of a frame. The last line
/// has no trailing newline.
pub fn layout_to_string(tree: &ComponentTree, layout: &TreeLayout) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        outline(tree, layout, root, 0, &mut out);
    }
    out.truncate(out.trim_end().len());
    out
}

fn outline(tree: &ComponentTree, layout: &TreeLayout, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let _ = write!(out, "{:indent$}{}", "", node.kind().name(), indent = depth * 2);
    if let Some(name) = &node.id {
        let _ = write!(out, "#{name}");
    }
    match layout.get(id) {
        Some(frame) => {
            let _ = writeln!(out, " {},{} {}x{}", frame.x, frame.y, frame.width, frame.height);
        }
        None => out.push_str(" -\n"),
    }
    for &child in tree.children(id) {
        outline(tree, layout, child, depth + 1, out);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
