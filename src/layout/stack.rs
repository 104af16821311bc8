//! Vertical and horizontal stacking.
//!
//! A container hands [`layout_stack`] one [`StackChild`] per child. Each child
//! is fitted through its measure closure, placed along the main axis, then
//! aligned on the cross axis. Frames keep the child's index; children that fit
//! to an empty size get [`Rect::ZERO`] and take up no space.

use std::fmt;

use crate::geometry::{Insets, Rect, Size};
use crate::style::{Alignment, ComponentStyle, Gravity};

/// Main axis of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// One child box as seen by the stacking pass.
pub struct StackChild<'a> {
    /// Size of the child when offered the given width.
    measure: Box<dyn Fn(i32) -> Size + 'a>,
    pub margin: Insets,
    pub weight: u32,
    pub alignment: Alignment,
    pub gravity: Gravity,
}

impl<'a> StackChild<'a> {
    pub fn new(measure: impl Fn(i32) -> Size + 'a) -> Self {
        Self {
            measure: Box::new(measure),
            margin: Insets::ZERO,
            weight: 0,
            alignment: Alignment::default(),
            gravity: Gravity::default(),
        }
    }

    /// A child with a fixed natural size, narrowed to the offered width.
    pub fn intrinsic(size: Size) -> Self {
        Self::new(move |width| Size::new(size.width.min(width.max(0)), size.height))
    }

    /// Take margin, weight, alignment and gravity from a resolved style.
    pub fn styled(mut self, style: &ComponentStyle) -> Self {
        self.margin = style.margin;
        self.weight = style.weight;
        self.alignment = style.alignment;
        self.gravity = style.gravity;
        self
    }

    pub fn with_margin(mut self, margin: Insets) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Fit the child to `width`, never reporting more than was offered.
    pub fn fit(&self, width: i32) -> Size {
        let width = width.max(0);
        let size = (self.measure)(width);
        Size::new(size.width.clamp(0, width), size.height.max(0))
    }
}

impl fmt::Debug for StackChild<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackChild")
            .field("margin", &self.margin)
            .field("weight", &self.weight)
            .field("alignment", &self.alignment)
            .field("gravity", &self.gravity)
            .finish_non_exhaustive()
    }
}

/// Result of one stacking pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StackLayout {
    /// One frame per child, in child order.
    pub frames: Vec<Rect>,
    /// Extent of the placed frames measured from the bounds origin, margins
    /// included. Trailing padding is the caller's.
    pub content_size: Size,
}

/// Split `remaining` into columns proportional to `weights`.
///
/// Every weight gets `weight * floor(remaining / total)`; the rounding
/// leftover goes to the last column, so the columns always sum to
/// `remaining` (clamped at zero). A zero total hands the whole width to the
/// last column.
pub fn distribute_weights(remaining: i32, weights: &[u32]) -> Vec<i32> {
    let remaining = i64::from(remaining.max(0));
    let total: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let per = if total == 0 { remaining } else { remaining / total };
    let mut columns: Vec<i64> = weights.iter().map(|&w| i64::from(w) * per).collect();
    let used: i64 = columns.iter().sum();
    if let Some(last) = columns.last_mut() {
        *last += remaining - used;
    }
    columns.into_iter().map(|c| c as i32).collect()
}

/// Offset and width of a child of `width` inside a slot of `available`.
fn align_in(alignment: Alignment, width: i32, available: i32) -> (i32, i32) {
    let spare = (available - width).max(0);
    match alignment {
        Alignment::Left => (0, width),
        Alignment::Center => (spare / 2, width),
        Alignment::Right => (spare, width),
        Alignment::Fill => (0, width.max(available)),
    }
}

/// Lay out `children` along `orientation` inside `bounds`.
pub fn layout_stack(children: &[StackChild<'_>], orientation: Orientation, bounds: Rect) -> StackLayout {
    match orientation {
        Orientation::Vertical => layout_vertical(children, bounds),
        Orientation::Horizontal => layout_horizontal(children, bounds),
    }
}

fn layout_vertical(children: &[StackChild<'_>], bounds: Rect) -> StackLayout {
    let mut frames = Vec::with_capacity(children.len());
    let mut top = bounds.y;
    let mut max_x = bounds.x;

    for child in children {
        let available = (bounds.width - child.margin.horizontal()).max(0);
        let size = child.fit(available);
        if size.is_empty() {
            frames.push(Rect::ZERO);
            continue;
        }
        top += child.margin.top;
        let (offset, width) = align_in(child.alignment, size.width, available);
        let frame = Rect::new(bounds.x + child.margin.left + offset, top, width, size.height);
        top += size.height + child.margin.bottom;
        max_x = max_x.max(frame.right() + child.margin.right);
        frames.push(frame);
    }

    StackLayout {
        frames,
        content_size: Size::new(max_x - bounds.x, top - bounds.y),
    }
}

fn layout_horizontal(children: &[StackChild<'_>], bounds: Rect) -> StackLayout {
    let margins = children
        .iter()
        .map(|c| c.margin.horizontal())
        .fold(0, i32::saturating_add);
    let mut remaining = (bounds.width - margins).max(0);

    // Fixed children take their natural width first.
    let mut columns = vec![0; children.len()];
    let mut sizes = vec![Size::ZERO; children.len()];
    for (i, child) in children.iter().enumerate() {
        if child.weight == 0 {
            let size = child.fit(remaining);
            columns[i] = size.width;
            sizes[i] = size;
            remaining = (remaining - size.width).max(0);
        }
    }

    // Weighted children share what is left.
    let weighted: Vec<usize> = (0..children.len()).filter(|&i| children[i].weight > 0).collect();
    let weights: Vec<u32> = weighted.iter().map(|&i| children[i].weight).collect();
    for (&i, column) in weighted.iter().zip(distribute_weights(remaining, &weights)) {
        let size = children[i].fit(column);
        columns[i] = column;
        sizes[i] = size;
    }

    // Place along the row; the cursor advances by column, not rendered width.
    let mut frames = Vec::with_capacity(children.len());
    let mut cursor = bounds.x;
    for (i, child) in children.iter().enumerate() {
        let size = sizes[i];
        if size.is_empty() {
            frames.push(Rect::ZERO);
            continue;
        }
        cursor += child.margin.left;
        let (offset, width) = align_in(child.alignment, size.width, columns[i]);
        frames.push(Rect::new(cursor + offset, bounds.y, width, size.height));
        cursor += columns[i] + child.margin.right;
    }

    // Cross axis: each child sits in the band set by the tallest child.
    let band = children
        .iter()
        .zip(&sizes)
        .filter(|(_, size)| !size.is_empty())
        .map(|(child, size)| size.height + child.margin.vertical())
        .max()
        .unwrap_or(0);
    let mut max_x = bounds.x;
    let mut max_y = bounds.y;
    for (child, frame) in children.iter().zip(frames.iter_mut()) {
        if frame.is_empty() {
            continue;
        }
        let slot = (band - child.margin.vertical()).max(0);
        let spare = (slot - frame.height).max(0);
        let top = bounds.y + child.margin.top;
        match child.gravity {
            Gravity::Top => frame.y = top,
            Gravity::Middle => frame.y = top + spare / 2,
            Gravity::Bottom => frame.y = top + spare,
            Gravity::Fill => {
                frame.y = top;
                frame.height = slot;
            }
        }
        max_x = max_x.max(frame.right() + child.margin.right);
        max_y = max_y.max(frame.bottom() + child.margin.bottom);
    }
    max_x = max_x.max(cursor);

    StackLayout {
        frames,
        content_size: Size::new(max_x - bounds.x, max_y - bounds.y),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
