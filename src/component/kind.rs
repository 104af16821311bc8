//! Component kind tags and icon names.

/// The closed set of component kinds.
///
/// `Section` and `Page` only appear as children of a table view or tab view
/// and have no top-level wire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Label,
    Button,
    Icon,
    Separator,
    StackView,
    TableView,
    Section,
    TabView,
    Page,
    TextInput,
    Checkbox,
    RadioButtons,
    Slider,
    ProgressBar,
}

impl ComponentKind {
    /// Map a wire `type` tag to a kind. Aliases from older templates are accepted.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "label" => Some(Self::Label),
            "button" => Some(Self::Button),
            "icon" => Some(Self::Icon),
            "separator" => Some(Self::Separator),
            "stackView" => Some(Self::StackView),
            "tableView" | "basicList" => Some(Self::TableView),
            "tabView" => Some(Self::TabView),
            "textInput" | "textArea" => Some(Self::TextInput),
            "checkbox" => Some(Self::Checkbox),
            "radioButtons" | "radioButtonsContainer" => Some(Self::RadioButtons),
            "slider" => Some(Self::Slider),
            "progressBar" => Some(Self::ProgressBar),
            _ => None,
        }
    }

    /// Canonical name, used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Button => "button",
            Self::Icon => "icon",
            Self::Separator => "separator",
            Self::StackView => "stackView",
            Self::TableView => "tableView",
            Self::Section => "section",
            Self::TabView => "tabView",
            Self::Page => "page",
            Self::TextInput => "textInput",
            Self::Checkbox => "checkbox",
            Self::RadioButtons => "radioButtons",
            Self::Slider => "slider",
            Self::ProgressBar => "progressBar",
        }
    }

    /// Kinds that hold user-editable state.
    pub fn is_editable(self) -> bool {
        matches!(
            self,
            Self::TextInput | Self::Checkbox | Self::RadioButtons | Self::Slider | Self::TabView
        )
    }

    /// Kinds whose children live in the tree.
    pub fn is_container(self) -> bool {
        matches!(self, Self::StackView | Self::TableView | Self::Section | Self::TabView | Self::Page)
    }
}

/// Icons the client ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Placeholder,
    CheckmarkThick,
    CheckmarkThin,
    CheckmarkCircle,
    XThick,
    XThin,
    ArrowOutgoing,
    ArrowRight,
    ArrowLeft,
    NavBack,
    NavClose,
    NavMore,
    Power,
    User,
    NotificationAlert,
    LoginKey,
    Trash,
    Clock,
    Phone,
    Chat,
    Star,
    Info,
}

impl IconName {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "placeholder" => Some(Self::Placeholder),
            "checkmarkThick" => Some(Self::CheckmarkThick),
            "checkmarkThin" => Some(Self::CheckmarkThin),
            "checkmarkCircle" => Some(Self::CheckmarkCircle),
            "xThick" => Some(Self::XThick),
            "xThin" => Some(Self::XThin),
            "arrowOutgoing" => Some(Self::ArrowOutgoing),
            "arrowRight" => Some(Self::ArrowRight),
            "arrowLeft" => Some(Self::ArrowLeft),
            "navBack" => Some(Self::NavBack),
            "navClose" => Some(Self::NavClose),
            "navMore" => Some(Self::NavMore),
            "power" => Some(Self::Power),
            "user" => Some(Self::User),
            "notificationAlert" => Some(Self::NotificationAlert),
            "loginKey" => Some(Self::LoginKey),
            "trash" => Some(Self::Trash),
            "clock" => Some(Self::Clock),
            "phone" => Some(Self::Phone),
            "chat" => Some(Self::Chat),
            "star" => Some(Self::Star),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}
