//! `ComponentStyle`: the flat, fully-resolved style record of a component.
//!
//! Unlike a cascade of `Option`s, every field here holds a concrete value. A key
//! that is absent or malformed in the style JSON leaves the built-in default in
//! place, so layout and rendering never have to ask "is this set?".

use crate::geometry::Insets;
use crate::style::tokenizer::{tokenize, Token};

/// Horizontal placement of a child inside the width available to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Fill,
}

impl Alignment {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "fill" => Some(Self::Fill),
            _ => None,
        }
    }
}

/// Vertical placement of a child inside the row band it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gravity {
    #[default]
    Top,
    Middle,
    Bottom,
    Fill,
}

impl Gravity {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Self::Top),
            "middle" => Some(Self::Middle),
            "bottom" => Some(Self::Bottom),
            "fill" => Some(Self::Fill),
            _ => None,
        }
    }
}

/// Alignment of text inside a label's own frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

impl TextAlign {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "justified" => Some(Self::Justified),
            _ => None,
        }
    }
}

/// Named text styles from the chat theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextType {
    Header1,
    Header2,
    Subheader,
    #[default]
    Body,
    BodyBold,
    Detail1,
    Detail2,
    Error,
    Button,
    Link,
}

impl TextType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "header1" => Some(Self::Header1),
            "header2" => Some(Self::Header2),
            "subheader" => Some(Self::Subheader),
            "body" => Some(Self::Body),
            "bodyBold" => Some(Self::BodyBold),
            "detail1" => Some(Self::Detail1),
            "detail2" => Some(Self::Detail2),
            "error" => Some(Self::Error),
            "button" => Some(Self::Button),
            "link" => Some(Self::Link),
            _ => None,
        }
    }

    /// Font size in points used when the style does not set `fontSize`.
    pub fn default_font_size(self) -> i32 {
        match self {
            Self::Header1 => 24,
            Self::Header2 => 18,
            Self::Subheader => 12,
            Self::Body | Self::BodyBold | Self::Link => 15,
            Self::Detail1 => 12,
            Self::Detail2 => 10,
            Self::Error => 12,
            Self::Button => 14,
        }
    }
}

/// An sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(input: &str) -> Option<Self> {
        let tokens = tokenize(input.trim())?;
        let [(Token::HexColor, slice)] = tokens.as_slice() else {
            return None;
        };
        let digits = &slice[1..];
        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            3 => Some(Self { r: nibble(0)?, g: nibble(1)?, b: nibble(2)?, a: 255 }),
            4 => Some(Self { r: nibble(0)?, g: nibble(1)?, b: nibble(2)?, a: nibble(3)? }),
            6 => Some(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: 255 }),
            8 => Some(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a: byte(6)? }),
            _ => None,
        }
    }
}

/// The resolved visual and layout attributes of a component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentStyle {
    // Layout
    pub alignment: Alignment,
    pub gravity: Gravity,
    pub margin: Insets,
    pub padding: Insets,
    /// Fixed width in points, `0` = intrinsic.
    pub width: i32,
    /// Fixed height in points, `0` = intrinsic.
    pub height: i32,
    /// Share of the remaining main-axis space; `0` = sized to content.
    pub weight: u32,

    // Colors (`None` = platform theme)
    pub color: Option<Color>,
    pub background_color: Option<Color>,
    pub border_color: Option<Color>,

    // Decoration
    pub border_width: i32,
    pub corner_radius: i32,

    // Text
    /// Explicit font size; `None` falls back to the text type's size.
    pub font_size: Option<i32>,
    pub text_type: TextType,
    pub text_align: TextAlign,
}

impl Default for ComponentStyle {
    fn default() -> Self {
        Self {
            alignment: Alignment::default(),
            gravity: Gravity::default(),
            margin: Insets::ZERO,
            padding: Insets::ZERO,
            width: 0,
            height: 0,
            weight: 0,
            color: None,
            background_color: None,
            border_color: None,
            border_width: 0,
            corner_radius: 0,
            font_size: None,
            text_type: TextType::default(),
            text_align: TextAlign::default(),
        }
    }
}

impl ComponentStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The font size used for text measurement.
    pub fn effective_font_size(&self) -> i32 {
        self.font_size.unwrap_or_else(|| self.text_type.default_font_size())
    }

    /// Whether this child takes a proportional share along the main axis.
    pub fn is_weighted(&self) -> bool {
        self.weight > 0
    }
}
