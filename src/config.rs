//! Explicit configuration shared by layout, dispatch and screens.
//!
//! There is no global state: every consumer takes a `&Config`.
//! [`Config::default()`] is the documented default instance.

use crate::style::ComponentStyle;

// ---------------------------------------------------------------------------
// TextMetrics
// ---------------------------------------------------------------------------

/// Approximate text metrics used to measure labels without a font engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Average glyph advance as a fraction of the font size.
    pub char_width_ratio: f32,
    /// Line height as a multiple of the font size.
    pub line_height_ratio: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self { char_width_ratio: 0.5, line_height_ratio: 1.25 }
    }
}

impl TextMetrics {
    /// Width of one character at `font_size`, at least one point.
    pub fn char_width(&self, font_size: i32) -> i32 {
        ((font_size as f32 * self.char_width_ratio).round() as i32).max(1)
    }

    /// Height of one line at `font_size`, at least one point.
    pub fn line_height(&self, font_size: i32) -> i32 {
        ((font_size as f32 * self.line_height_ratio).round() as i32).max(1)
    }
}

// ---------------------------------------------------------------------------
// ControlHeights
// ---------------------------------------------------------------------------

/// Intrinsic heights of fixed-height controls, in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlHeights {
    pub button: i32,
    pub text_input: i32,
    pub slider: i32,
    pub progress_bar: i32,
    /// Side of the checkbox square and radio dot.
    pub checkbox_box: i32,
    pub tab_bar: i32,
    pub separator: i32,
    pub icon: i32,
}

impl Default for ControlHeights {
    fn default() -> Self {
        Self {
            button: 44,
            text_input: 40,
            slider: 32,
            progress_bar: 6,
            checkbox_box: 22,
            tab_bar: 44,
            separator: 1,
            icon: 24,
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Shown when a failed action carries no server message.
    pub generic_error_message: String,
    pub text: TextMetrics,
    pub control_heights: ControlHeights,
    /// Vertical gap between table rows when the separator style asks for one.
    pub table_separator_height: i32,
    /// Style every component starts from before classes and inline styles.
    pub default_style: ComponentStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            generic_error_message: "Something went wrong. Please try again.".into(),
            text: TextMetrics::default(),
            control_heights: ControlHeights::default(),
            table_separator_height: 1,
            default_style: ComponentStyle::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_generic_error_message(mut self, message: impl Into<String>) -> Self {
        self.generic_error_message = message.into();
        self
    }

    pub fn with_text_metrics(mut self, text: TextMetrics) -> Self {
        self.text = text;
        self
    }

    pub fn with_control_heights(mut self, heights: ControlHeights) -> Self {
        self.control_heights = heights;
        self
    }

    pub fn with_table_separator_height(mut self, height: i32) -> Self {
        self.table_separator_height = height.max(0);
        self
    }

    pub fn with_default_style(mut self, style: ComponentStyle) -> Self {
        self.default_style = style;
        self
    }
}
