//! Intrinsic sizes of leaf components.
//!
//! Each leaf kind has a stateless [`Measure`] provider looked up by kind.
//! Providers return the content size for an offered content width; padding
//! and explicit style sizes are applied by the engine.

use crate::component::content::ComponentContent;
use crate::component::{ComponentKind, ComponentNode};
use crate::config::{Config, TextMetrics};
use crate::geometry::Size;
use crate::style::TextType;

/// Computes the content size of one kind of leaf.
pub trait Measure: Sync {
    fn measure(&self, node: &ComponentNode, width: i32, config: &Config) -> Size;
}

/// Gap between a control's glyph and its text.
const GLYPH_GAP: i32 = 8;
/// Horizontal inner spacing of a button, per side.
const BUTTON_INSET: i32 = 16;

/// Size of `text` wrapped to `width`, limited to `max_lines` when non-zero.
pub fn measure_text(text: &str, font_size: i32, max_lines: u32, width: i32, metrics: &TextMetrics) -> Size {
    if text.is_empty() {
        return Size::ZERO;
    }
    let char_width = metrics.char_width(font_size);
    let per_line = (width / char_width).max(1) as usize;

    let mut lines = 0usize;
    let mut widest = 0usize;
    for paragraph in text.split('\n') {
        let chars = paragraph.chars().count();
        lines += chars.div_ceil(per_line).max(1);
        widest = widest.max(chars.min(per_line));
    }
    if max_lines > 0 {
        lines = lines.min(max_lines as usize);
    }
    Size::new(widest as i32 * char_width, lines as i32 * metrics.line_height(font_size))
}

struct LabelMeasure;

impl Measure for LabelMeasure {
    fn measure(&self, node: &ComponentNode, width: i32, config: &Config) -> Size {
        let ComponentContent::Label(label) = &node.content else {
            return Size::ZERO;
        };
        measure_text(&label.text, node.style.effective_font_size(), label.number_of_lines, width, &config.text)
    }
}

struct ButtonMeasure;

impl Measure for ButtonMeasure {
    fn measure(&self, node: &ComponentNode, width: i32, config: &Config) -> Size {
        let ComponentContent::Button(button) = &node.content else {
            return Size::ZERO;
        };
        let heights = &config.control_heights;
        let font = node.style.font_size.unwrap_or_else(|| TextType::Button.default_font_size());
        let icon = if button.icon.is_some() { heights.icon + GLYPH_GAP } else { 0 };
        let inner = (width - 2 * BUTTON_INSET - icon).max(0);
        let text = measure_text(&button.title, font, 1, inner, &config.text);
        Size::new(text.width + icon + 2 * BUTTON_INSET, heights.button)
    }
}

struct IconMeasure;

impl Measure for IconMeasure {
    fn measure(&self, _node: &ComponentNode, _width: i32, config: &Config) -> Size {
        let side = config.control_heights.icon;
        Size::new(side, side)
    }
}

/// Controls that span the offered width at a fixed height.
struct FullWidthMeasure;

impl Measure for FullWidthMeasure {
    fn measure(&self, node: &ComponentNode, width: i32, config: &Config) -> Size {
        let heights = &config.control_heights;
        let height = match node.kind() {
            ComponentKind::Separator => heights.separator,
            ComponentKind::TextInput => heights.text_input,
            ComponentKind::Slider => heights.slider,
            ComponentKind::ProgressBar => heights.progress_bar,
            _ => 0,
        };
        Size::new(width, height)
    }
}

/// A box glyph followed by text, one row per option.
struct ChoiceMeasure;

impl Measure for ChoiceMeasure {
    fn measure(&self, node: &ComponentNode, width: i32, config: &Config) -> Size {
        let side = config.control_heights.checkbox_box;
        let font = node.style.effective_font_size();
        let text_width = (width - side - GLYPH_GAP).max(0);
        let row = |text: &str| {
            let text = measure_text(text, font, 0, text_width, &config.text);
            Size::new(side + GLYPH_GAP + text.width, text.height.max(side))
        };
        match &node.content {
            ComponentContent::Checkbox(checkbox) => row(&checkbox.label),
            ComponentContent::RadioButtons(radio) => radio
                .options
                .iter()
                .map(|option| row(&option.text))
                .fold(Size::ZERO, |acc, row| Size::new(acc.width.max(row.width), acc.height + row.height)),
            _ => Size::ZERO,
        }
    }
}

static LABEL: LabelMeasure = LabelMeasure;
static BUTTON: ButtonMeasure = ButtonMeasure;
static ICON: IconMeasure = IconMeasure;
static FULL_WIDTH: FullWidthMeasure = FullWidthMeasure;
static CHOICE: ChoiceMeasure = ChoiceMeasure;

/// The measure provider for a leaf kind. Containers have none.
pub fn provider(kind: ComponentKind) -> Option<&'static dyn Measure> {
    match kind {
        ComponentKind::Label => Some(&LABEL),
        ComponentKind::Button => Some(&BUTTON),
        ComponentKind::Icon => Some(&ICON),
        ComponentKind::Separator
        | ComponentKind::TextInput
        | ComponentKind::Slider
        | ComponentKind::ProgressBar => Some(&FULL_WIDTH),
        ComponentKind::Checkbox | ComponentKind::RadioButtons => Some(&CHOICE),
        ComponentKind::StackView
        | ComponentKind::TableView
        | ComponentKind::Section
        | ComponentKind::TabView
        | ComponentKind::Page => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::content::*;

    fn metrics() -> TextMetrics {
        TextMetrics { char_width_ratio: 0.5, line_height_ratio: 1.25 }
    }

    #[test]
    fn text_fits_on_one_line() {
        // 16pt: 8pt per char, 20pt per line.
        assert_eq!(measure_text("Hello", 16, 0, 200, &metrics()), Size::new(40, 20));
    }

    #[test]
    fn text_wraps_and_limits_lines() {
        // 10 chars per line at width 80.
        let text = "a".repeat(25);
        assert_eq!(measure_text(&text, 16, 0, 80, &metrics()), Size::new(80, 60));
        assert_eq!(measure_text(&text, 16, 2, 80, &metrics()), Size::new(80, 40));
        assert_eq!(measure_text("ab\ncd", 16, 0, 80, &metrics()), Size::new(16, 40));
    }

    #[test]
    fn empty_text_is_zero() {
        assert_eq!(measure_text("", 16, 0, 80, &metrics()), Size::ZERO);
    }

    #[test]
    fn providers_by_kind() {
        let config = Config::default();
        let separator = ComponentNode::new(ComponentContent::Separator);
        let size = provider(ComponentKind::Separator).unwrap().measure(&separator, 300, &config);
        assert_eq!(size, Size::new(300, 1));

        let icon = ComponentNode::new(ComponentContent::Icon(IconContent { icon: crate::component::IconName::Star }));
        assert_eq!(provider(ComponentKind::Icon).unwrap().measure(&icon, 300, &config), Size::new(24, 24));

        assert!(provider(ComponentKind::StackView).is_none());
    }

    #[test]
    fn radio_rows_stack() {
        let config = Config::default();
        let radio = ComponentNode::new(ComponentContent::RadioButtons(RadioButtonsContent {
            options: vec![
                RadioOption { text: "Yes".into(), value: "y".into() },
                RadioOption { text: "No".into(), value: "n".into() },
            ],
        }));
        let size = provider(ComponentKind::RadioButtons).unwrap().measure(&radio, 300, &config);
        assert_eq!(size.height, 2 * 22);
    }
}
