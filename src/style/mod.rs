//! Style engine: value tokenizer, style record, property coercion, class cascade.

pub mod classes;
pub mod properties;
pub mod styles;
pub mod tokenizer;

pub use classes::{class_names, resolve_style, resolve_style_over, StyleClassTable};
pub use styles::{Alignment, Color, ComponentStyle, Gravity, TextAlign, TextType};
