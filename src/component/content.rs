//! Type-specific component payloads.
//!
//! Children are not stored here; container kinds keep them in the
//! [`ComponentTree`](super::ComponentTree) arena.

use crate::action::Action;

use super::kind::{ComponentKind, IconName};

/// Main axis of a stack view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackOrientation {
    #[default]
    Vertical,
    Horizontal,
}

impl StackOrientation {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "vertical" => Some(Self::Vertical),
            "horizontal" => Some(Self::Horizontal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    #[default]
    Primary,
    Secondary,
    Text,
}

impl ButtonType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "text" | "textPrimary" => Some(Self::Text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Number,
    Date,
}

impl InputType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            "number" => Some(Self::Number),
            "date" => Some(Self::Date),
            _ => None,
        }
    }
}

/// Separator drawn between table rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorStyle {
    #[default]
    None,
    Line,
    Spacing,
}

impl SeparatorStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Self::None),
            "line" | "singleLine" => Some(Self::Line),
            "spacing" => Some(Self::Spacing),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelContent {
    pub text: String,
    /// `0` means unlimited.
    pub number_of_lines: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonContent {
    pub title: String,
    pub icon: Option<IconName>,
    pub button_type: ButtonType,
    pub action: Option<Action>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconContent {
    pub icon: IconName,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackContent {
    pub orientation: StackOrientation,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableContent {
    pub separator_style: SeparatorStyle,
}

/// One table section. When `has_header` is set the first child is the header.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionContent {
    pub has_header: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabContent {}

/// One tab page. Its only child is the page body.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInputContent {
    pub placeholder: Option<String>,
    pub input_type: InputType,
    /// ISO `YYYY-MM-DD`, compared lexically.
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub max_length: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxContent {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadioOption {
    pub text: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadioButtonsContent {
    pub options: Vec<RadioOption>,
}

impl RadioButtonsContent {
    pub fn contains_value(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderContent {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl Default for SliderContent {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0, step: None }
    }
}

impl SliderContent {
    /// Clamp into `min..=max` and snap to `step` when one is set.
    pub fn normalize(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.min, self.max);
        match self.step {
            Some(step) if step > 0.0 => {
                let snapped = self.min + ((clamped - self.min) / step).round() * step;
                snapped.min(self.max)
            }
            _ => clamped,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBarContent {
    /// Always within `0..=100`.
    pub fill_percentage: u8,
}

/// Kind-specific payload of a [`ComponentNode`](super::ComponentNode).
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentContent {
    Label(LabelContent),
    Button(ButtonContent),
    Icon(IconContent),
    Separator,
    StackView(StackContent),
    TableView(TableContent),
    Section(SectionContent),
    TabView(TabContent),
    Page(PageContent),
    TextInput(TextInputContent),
    Checkbox(CheckboxContent),
    RadioButtons(RadioButtonsContent),
    Slider(SliderContent),
    ProgressBar(ProgressBarContent),
}

impl ComponentContent {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Label(_) => ComponentKind::Label,
            Self::Button(_) => ComponentKind::Button,
            Self::Icon(_) => ComponentKind::Icon,
            Self::Separator => ComponentKind::Separator,
            Self::StackView(_) => ComponentKind::StackView,
            Self::TableView(_) => ComponentKind::TableView,
            Self::Section(_) => ComponentKind::Section,
            Self::TabView(_) => ComponentKind::TabView,
            Self::Page(_) => ComponentKind::Page,
            Self::TextInput(_) => ComponentKind::TextInput,
            Self::Checkbox(_) => ComponentKind::Checkbox,
            Self::RadioButtons(_) => ComponentKind::RadioButtons,
            Self::Slider(_) => ComponentKind::Slider,
            Self::ProgressBar(_) => ComponentKind::ProgressBar,
        }
    }

    /// The action a tap on this component triggers, if any.
    pub fn action(&self) -> Option<&Action> {
        match self {
            Self::Button(button) => button.action.as_ref(),
            _ => None,
        }
    }

    /// User-visible text used as the echoed message for treewalk steps.
    pub fn display_text(&self) -> Option<&str> {
        match self {
            Self::Label(label) => Some(&label.text),
            Self::Button(button) => Some(&button.title),
            Self::Checkbox(checkbox) => Some(&checkbox.label),
            Self::Page(page) => Some(&page.title),
            _ => None,
        }
    }
}
