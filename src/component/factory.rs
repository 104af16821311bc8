//! Component factory: server JSON → nodes in a [`ComponentTree`].
//!
//! Every node has the wire shape
//!
//! ```text
//! { "type": "<kind>", "id"?: "...", "class"?: "a b", "style"?: {...}, "content": {...} }
//! ```
//!
//! Each kind validates its own required fields and fails as a whole rather
//! than producing a partial node. Containers parse their children through the
//! same entry point and skip the ones that fail; a container whose required
//! collection ends up empty fails too, and its partially inserted subtree is
//! removed from the arena.

use serde_json::{Map, Value};

use crate::action::Action;
use crate::error::ParseError;
use crate::style::properties::parse_number;
use crate::style::{class_names, resolve_style_over, ComponentStyle, StyleClassTable, TextType};

use super::content::*;
use super::kind::{ComponentKind, IconName};
use super::node::{ComponentNode, NodeId};
use super::tree::ComponentTree;
use super::value::FormValue;

type Object = Map<String, Value>;

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn invalid(kind: ComponentKind, field: &'static str, message: impl Into<String>) -> ParseError {
    ParseError::InvalidField { kind: kind.name(), field, message: message.into() }
}

fn required_str<'v>(kind: ComponentKind, content: &'v Object, field: &'static str) -> Result<&'v str, ParseError> {
    match content.get(field) {
        None | Some(Value::Null) => Err(ParseError::MissingField { kind: kind.name(), field }),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(invalid(kind, field, format!("expected a string, got {other}"))),
    }
}

fn optional_str<'v>(content: &'v Object, field: &str) -> Option<&'v str> {
    content.get(field).and_then(Value::as_str)
}

fn optional_number(kind: ComponentKind, content: &Object, field: &'static str) -> Result<Option<f64>, ParseError> {
    match content.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => parse_number(value, field)
            .map(Some)
            .map_err(|err| invalid(kind, field, err.to_string())),
    }
}

fn optional_array<'v>(kind: ComponentKind, content: &'v Object, field: &'static str) -> Result<Option<&'v Vec<Value>>, ParseError> {
    match content.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(other) => Err(invalid(kind, field, format!("expected an array, got {other}"))),
    }
}

/// A required, non-empty array under the first of `fields` that is present.
fn required_array<'v>(
    kind: ComponentKind,
    content: &'v Object,
    fields: &[&'static str],
) -> Result<&'v Vec<Value>, ParseError> {
    let field = fields[0];
    for name in fields {
        if let Some(items) = optional_array(kind, content, name)? {
            if items.is_empty() {
                return Err(ParseError::EmptyCollection { kind: kind.name(), field });
            }
            return Ok(items);
        }
    }
    Err(ParseError::MissingField { kind: kind.name(), field })
}

/// Read an enum by name; unknown names fall back to the default.
fn named<T: Default>(content: &Object, field: &str, from_name: impl Fn(&str) -> Option<T>) -> T {
    match optional_str(content, field) {
        Some(name) => from_name(name).unwrap_or_else(|| {
            tracing::debug!(field, value = name, "unknown name, using default");
            T::default()
        }),
        None => T::default(),
    }
}

/// The payload object. Nodes without a `content` key carry their fields inline.
fn content_of(obj: &Object) -> Result<&Object, ParseError> {
    match obj.get("content") {
        None | Some(Value::Null) => Ok(obj),
        Some(Value::Object(content)) => Ok(content),
        Some(_) => Err(ParseError::NotAnObject("component content")),
    }
}

// ---------------------------------------------------------------------------
// Leaf constructors
// ---------------------------------------------------------------------------

fn make_label(content: &Object) -> Result<ComponentContent, ParseError> {
    let kind = ComponentKind::Label;
    let text = required_str(kind, content, "text")?;
    let lines = optional_number(kind, content, "numberOfLines")?.unwrap_or(0.0);
    Ok(ComponentContent::Label(LabelContent {
        text: text.to_owned(),
        number_of_lines: lines.max(0.0) as u32,
    }))
}

fn make_button(content: &Object) -> Result<ComponentContent, ParseError> {
    let title = required_str(ComponentKind::Button, content, "title")?;
    let icon = optional_str(content, "icon").and_then(|name| {
        let icon = IconName::from_name(name);
        if icon.is_none() {
            tracing::debug!(icon = name, "unknown button icon, ignoring");
        }
        icon
    });
    let action = content.get("action").and_then(Action::parse_or_warn);
    Ok(ComponentContent::Button(ButtonContent {
        title: title.to_owned(),
        icon,
        button_type: named(content, "buttonType", ButtonType::from_name),
        action,
    }))
}

fn make_icon(content: &Object) -> Result<ComponentContent, ParseError> {
    let kind = ComponentKind::Icon;
    let name = required_str(kind, content, "icon")?;
    let icon = IconName::from_name(name).ok_or_else(|| invalid(kind, "icon", format!("unknown icon {name:?}")))?;
    Ok(ComponentContent::Icon(IconContent { icon }))
}

fn make_text_input(content: &Object) -> Result<ComponentContent, ParseError> {
    let kind = ComponentKind::TextInput;
    let max_length = optional_number(kind, content, "maxLength")?
        .map(|n| if n < 0.0 { Err(invalid(kind, "maxLength", "must not be negative")) } else { Ok(n as usize) })
        .transpose()?;
    Ok(ComponentContent::TextInput(TextInputContent {
        placeholder: optional_str(content, "placeholder").map(str::to_owned),
        input_type: named(content, "inputType", InputType::from_name),
        min_date: optional_str(content, "minDate").map(str::to_owned),
        max_date: optional_str(content, "maxDate").map(str::to_owned),
        max_length,
    }))
}

fn make_checkbox(content: &Object) -> Result<ComponentContent, ParseError> {
    let label = required_str(ComponentKind::Checkbox, content, "label")?;
    Ok(ComponentContent::Checkbox(CheckboxContent { label: label.to_owned() }))
}

fn make_radio_buttons(content: &Object) -> Result<ComponentContent, ParseError> {
    let kind = ComponentKind::RadioButtons;
    let options: Vec<RadioOption> = required_array(kind, content, &["options"])?
        .iter()
        .filter_map(|option| {
            let text = option.get("text").and_then(Value::as_str);
            let value = option.get("value").and_then(Value::as_str);
            match (text, value) {
                (Some(text), Some(value)) => Some(RadioOption { text: text.to_owned(), value: value.to_owned() }),
                _ => {
                    tracing::warn!(%option, "dropping malformed radio option");
                    None
                }
            }
        })
        .collect();
    if options.is_empty() {
        return Err(ParseError::EmptyCollection { kind: kind.name(), field: "options" });
    }
    Ok(ComponentContent::RadioButtons(RadioButtonsContent { options }))
}

fn make_slider(content: &Object) -> Result<ComponentContent, ParseError> {
    let kind = ComponentKind::Slider;
    let defaults = SliderContent::default();
    let min = optional_number(kind, content, "min")?.unwrap_or(defaults.min);
    let max = optional_number(kind, content, "max")?.unwrap_or(defaults.max);
    if max < min {
        return Err(invalid(kind, "max", format!("{max} is below min {min}")));
    }
    let step = optional_number(kind, content, "step")?;
    Ok(ComponentContent::Slider(SliderContent { min, max, step }))
}

fn make_progress_bar(content: &Object) -> Result<ComponentContent, ParseError> {
    let fill = optional_number(ComponentKind::ProgressBar, content, "fillPercentage")?.unwrap_or(0.0);
    Ok(ComponentContent::ProgressBar(ProgressBarContent {
        fill_percentage: fill.clamp(0.0, 100.0).round() as u8,
    }))
}

/// Build the payload of a leaf kind. Containers are handled by the factory.
pub fn make(kind: ComponentKind, content: &Object) -> Result<ComponentContent, ParseError> {
    match kind {
        ComponentKind::Label => make_label(content),
        ComponentKind::Button => make_button(content),
        ComponentKind::Icon => make_icon(content),
        ComponentKind::Separator => Ok(ComponentContent::Separator),
        ComponentKind::TextInput => make_text_input(content),
        ComponentKind::Checkbox => make_checkbox(content),
        ComponentKind::RadioButtons => make_radio_buttons(content),
        ComponentKind::Slider => make_slider(content),
        ComponentKind::ProgressBar => make_progress_bar(content),
        ComponentKind::StackView
        | ComponentKind::TableView
        | ComponentKind::Section
        | ComponentKind::TabView
        | ComponentKind::Page => Err(ParseError::InvalidField {
            kind: kind.name(),
            field: "type",
            message: "container kinds are built by the factory".into(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

/// Decodes component JSON into a tree, resolving styles against a class table.
#[derive(Debug, Clone, Copy)]
pub struct ComponentFactory<'a> {
    classes: Option<&'a StyleClassTable>,
    base_style: &'a ComponentStyle,
}

impl<'a> ComponentFactory<'a> {
    pub fn new(classes: Option<&'a StyleClassTable>, base_style: &'a ComponentStyle) -> Self {
        Self { classes, base_style }
    }

    /// Decode `json` into `tree`, under `parent` or as a parentless node.
    pub fn parse_into(
        &self,
        tree: &mut ComponentTree,
        parent: Option<NodeId>,
        json: &Value,
    ) -> Result<NodeId, ParseError> {
        let obj = json.as_object().ok_or(ParseError::NotAnObject("component"))?;
        let tag = obj
            .get("type")
            .or_else(|| obj.get("template_type"))
            .and_then(Value::as_str)
            .ok_or(ParseError::MissingType)?;
        let kind = ComponentKind::from_type_name(tag).ok_or_else(|| ParseError::UnknownType(tag.to_owned()))?;
        let content = content_of(obj)?;

        let classes = obj.get("class").map(class_names).unwrap_or_default();
        let style = resolve_style_over(self.base_style, obj.get("style"), Some(classes.as_slice()), self.classes);
        let node_of = |content: ComponentContent| {
            let mut node = ComponentNode::new(content).with_style(style.clone()).with_classes(classes.iter().cloned());
            node.id = obj.get("id").and_then(Value::as_str).map(str::to_owned);
            node
        };

        match kind {
            ComponentKind::StackView => {
                let orientation = named(content, "orientation", StackOrientation::from_name);
                let items = optional_array(kind, content, "items")?;
                let id = place(tree, parent, node_of(ComponentContent::StackView(StackContent { orientation })));
                if let Some(items) = items {
                    self.parse_children(tree, id, kind, items);
                }
                Ok(id)
            }
            ComponentKind::TableView => {
                let separator_style = match optional_str(content, "separatorStyle") {
                    Some(_) => named(content, "separatorStyle", SeparatorStyle::from_name),
                    None => named(content, "separator_style", SeparatorStyle::from_name),
                };
                let sections = required_array(kind, content, &["sections"])?;
                let id = place(tree, parent, node_of(ComponentContent::TableView(TableContent { separator_style })));
                for section in sections {
                    if let Err(err) = self.parse_section(tree, id, section) {
                        tracing::warn!(%err, "dropping table section");
                    }
                }
                self.require_children(tree, id, kind, "sections")
            }
            ComponentKind::TabView => {
                let pages = required_array(kind, content, &["pages"])?;
                let id = place(tree, parent, node_of(ComponentContent::TabView(TabContent::default())));
                for page in pages {
                    if let Err(err) = self.parse_page(tree, id, page) {
                        tracing::warn!(%err, "dropping tab page");
                    }
                }
                let id = self.require_children(tree, id, kind, "pages")?;
                if let Some(initial) = content.get("value").and_then(|v| FormValue::from_json(kind, v)) {
                    set_initial(tree, id, initial);
                }
                Ok(id)
            }
            ComponentKind::Section | ComponentKind::Page => Err(ParseError::UnknownType(tag.to_owned())),
            leaf => {
                let id = place(tree, parent, node_of(make(leaf, content)?));
                if let Some(initial) = content.get("value").and_then(|v| FormValue::from_json(leaf, v)) {
                    set_initial(tree, id, initial);
                }
                Ok(id)
            }
        }
    }

    /// Parse each child under `parent`, logging and skipping failures.
    fn parse_children(&self, tree: &mut ComponentTree, parent: NodeId, kind: ComponentKind, items: &[Value]) {
        for item in items {
            if let Err(err) = self.parse_into(tree, Some(parent), item) {
                tracing::warn!(%err, parent = kind.name(), "dropping component");
            }
        }
    }

    /// Fail, removing the container, when none of its children survived.
    fn require_children(
        &self,
        tree: &mut ComponentTree,
        id: NodeId,
        kind: ComponentKind,
        field: &'static str,
    ) -> Result<NodeId, ParseError> {
        if tree.children(id).is_empty() {
            tree.remove(id);
            return Err(ParseError::EmptyCollection { kind: kind.name(), field });
        }
        Ok(id)
    }

    fn parse_section(&self, tree: &mut ComponentTree, table: NodeId, json: &Value) -> Result<NodeId, ParseError> {
        let kind = ComponentKind::Section;
        let obj = json.as_object().ok_or(ParseError::NotAnObject("section"))?;
        let rows = required_array(kind, obj, &["items", "rows"])?;
        let header = obj.get("header").filter(|h| !h.is_null());

        let classes = obj.get("class").map(class_names).unwrap_or_default();
        let style = resolve_style_over(self.base_style, obj.get("style"), Some(classes.as_slice()), self.classes);
        let section = ComponentNode::new(ComponentContent::Section(SectionContent { has_header: false }))
            .with_style(style)
            .with_classes(classes);
        let id = tree.insert_child(table, section);

        let has_header = match header {
            Some(Value::String(text)) => {
                let mut style = self.base_style.clone();
                style.text_type = TextType::Subheader;
                let label = LabelContent { text: text.clone(), number_of_lines: 0 };
                tree.insert_child(id, ComponentNode::new(ComponentContent::Label(label)).with_style(style));
                true
            }
            Some(component) => match self.parse_into(tree, Some(id), component) {
                Ok(_) => true,
                Err(err) => {
                    tracing::warn!(%err, "dropping section header");
                    false
                }
            },
            None => false,
        };
        if let Some(ComponentContent::Section(section)) = tree.get_mut(id).map(|node| &mut node.content) {
            section.has_header = has_header;
        }

        let before = tree.children(id).len();
        self.parse_children(tree, id, kind, rows);
        if tree.children(id).len() == before {
            tree.remove(id);
            return Err(ParseError::EmptyCollection { kind: kind.name(), field: "items" });
        }
        Ok(id)
    }

    fn parse_page(&self, tree: &mut ComponentTree, tab_view: NodeId, json: &Value) -> Result<NodeId, ParseError> {
        let kind = ComponentKind::Page;
        let obj = json.as_object().ok_or(ParseError::NotAnObject("page"))?;
        let title = required_str(kind, obj, "title")?;
        let body = obj
            .get("body")
            .filter(|b| !b.is_null())
            .ok_or(ParseError::MissingField { kind: kind.name(), field: "body" })?;

        let page = ComponentNode::new(ComponentContent::Page(PageContent { title: title.to_owned() }))
            .with_style(self.base_style.clone());
        let id = tree.insert_child(tab_view, page);
        if let Err(err) = self.parse_into(tree, Some(id), body) {
            tree.remove(id);
            return Err(err);
        }
        Ok(id)
    }
}

fn place(tree: &mut ComponentTree, parent: Option<NodeId>, node: ComponentNode) -> NodeId {
    match parent {
        Some(parent) => tree.insert_child(parent, node),
        None => tree.insert(node),
    }
}

fn set_initial(tree: &mut ComponentTree, id: NodeId, value: FormValue) {
    if let Err(err) = tree.set_value(id, value) {
        tracing::debug!(%err, "ignoring initial value");
    }
}

/// Decode one component into `tree` as a parentless node.
pub fn parse_component(
    tree: &mut ComponentTree,
    json: &Value,
    classes: Option<&StyleClassTable>,
) -> Result<NodeId, ParseError> {
    let base = ComponentStyle::default();
    ComponentFactory::new(classes, &base).parse_into(tree, None, json)
}

impl ComponentTree {
    /// Decode a whole tree rooted at `json`.
    pub fn parse(json: &Value, classes: Option<&StyleClassTable>) -> Result<ComponentTree, ParseError> {
        let mut tree = ComponentTree::new();
        parse_component(&mut tree, json, classes)?;
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;
    use crate::style::{Alignment, Color};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(json: Value) -> Result<ComponentTree, ParseError> {
        ComponentTree::parse(&json, None)
    }

    fn root_content(tree: &ComponentTree) -> &ComponentContent {
        &tree.get(tree.root().unwrap()).unwrap().content
    }

    // ===== Leaves =====

    #[test]
    fn label_requires_text() {
        let tree = parse(json!({"type": "label", "content": {"text": "Hi"}})).unwrap();
        assert_eq!(
            root_content(&tree),
            &ComponentContent::Label(LabelContent { text: "Hi".into(), number_of_lines: 0 })
        );

        let err = parse(json!({"type": "label", "content": {}})).unwrap_err();
        assert_eq!(err, ParseError::MissingField { kind: "label", field: "text" });
    }

    #[test]
    fn unknown_and_missing_type() {
        assert_eq!(
            parse(json!({"type": "carousel", "content": {}})).unwrap_err(),
            ParseError::UnknownType("carousel".into())
        );
        assert_eq!(parse(json!({"content": {"text": "x"}})).unwrap_err(), ParseError::MissingType);
        assert_eq!(
            parse(json!({"type": "section", "content": {}})).unwrap_err(),
            ParseError::UnknownType("section".into())
        );
    }

    #[test]
    fn template_type_alias_and_inline_fields() {
        let tree = parse(json!({"template_type": "label", "text": "Inline"})).unwrap();
        let ComponentContent::Label(label) = root_content(&tree) else { panic!() };
        assert_eq!(label.text, "Inline");
    }

    #[test]
    fn button_with_action_and_icon() {
        let tree = parse(json!({
            "type": "button",
            "id": "pay",
            "content": {
                "title": "Pay",
                "icon": "arrowRight",
                "buttonType": "secondary",
                "action": {"type": "treewalk", "content": {"classification": "billing"}},
            },
        }))
        .unwrap();
        let node = tree.get(tree.root().unwrap()).unwrap();
        assert_eq!(node.id.as_deref(), Some("pay"));
        let ComponentContent::Button(button) = &node.content else { panic!() };
        assert_eq!(button.icon, Some(IconName::ArrowRight));
        assert_eq!(button.button_type, ButtonType::Secondary);
        assert!(matches!(button.action.as_ref().map(Action::kind), Some(ActionKind::Treewalk(_))));
    }

    #[test]
    fn button_with_malformed_action_keeps_button() {
        let tree = parse(json!({"type": "button", "content": {"title": "Go", "action": {"type": "bogus"}}})).unwrap();
        let ComponentContent::Button(button) = root_content(&tree) else { panic!() };
        assert!(button.action.is_none());
    }

    #[test]
    fn icon_must_be_known() {
        assert!(parse(json!({"type": "icon", "content": {"icon": "star"}})).is_ok());
        assert!(matches!(
            parse(json!({"type": "icon", "content": {"icon": "rocket"}})),
            Err(ParseError::InvalidField { field: "icon", .. })
        ));
    }

    #[test]
    fn editable_leaves_pick_up_initial_values() {
        let tree = parse(json!({"type": "checkbox", "id": "agree", "content": {"label": "OK", "value": true}})).unwrap();
        assert_eq!(tree.value(tree.root().unwrap()), Some(&FormValue::Bool(true)));

        let tree = parse(json!({"type": "slider", "content": {"min": 0, "max": "10", "value": 25}})).unwrap();
        assert_eq!(tree.value(tree.root().unwrap()), Some(&FormValue::Number(10.0)));
    }

    #[test]
    fn radio_buttons_drop_bad_options() {
        let tree = parse(json!({
            "type": "radioButtons",
            "content": {"options": [{"text": "A", "value": "a"}, {"text": "broken"}]},
        }))
        .unwrap();
        let ComponentContent::RadioButtons(radio) = root_content(&tree) else { panic!() };
        assert_eq!(radio.options.len(), 1);

        assert_eq!(
            parse(json!({"type": "radioButtons", "content": {"options": [{"text": "x"}]}})).unwrap_err(),
            ParseError::EmptyCollection { kind: "radioButtons", field: "options" }
        );
    }

    #[test]
    fn progress_bar_clamps() {
        let tree = parse(json!({"type": "progressBar", "content": {"fillPercentage": 150}})).unwrap();
        assert_eq!(root_content(&tree), &ComponentContent::ProgressBar(ProgressBarContent { fill_percentage: 100 }));
    }

    #[test]
    fn slider_rejects_inverted_range() {
        assert!(parse(json!({"type": "slider", "content": {"min": 5, "max": 1}})).is_err());
    }

    // ===== Containers =====

    #[test]
    fn stack_skips_failing_children() {
        let tree = parse(json!({
            "type": "stackView",
            "content": {
                "orientation": "horizontal",
                "items": [
                    {"type": "label", "content": {"text": "one"}},
                    {"type": "label", "content": {}},
                    {"type": "mystery"},
                    {"type": "separator"},
                ],
            },
        }))
        .unwrap();
        let root = tree.root().unwrap();
        assert_eq!(tree.children(root).len(), 2);
        assert_eq!(
            root_content(&tree),
            &ComponentContent::StackView(StackContent { orientation: StackOrientation::Horizontal })
        );
    }

    #[test]
    fn empty_stack_is_valid() {
        let tree = parse(json!({"type": "stackView"})).unwrap();
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn table_requires_sections_with_rows() {
        let tree = parse(json!({
            "type": "basicList",
            "content": {
                "separatorStyle": "line",
                "sections": [
                    {"header": "Plans", "items": [{"type": "label", "content": {"text": "Basic"}}]},
                    {"items": [{"type": "label", "content": {}}]},
                    {"rows": []},
                ],
            },
        }))
        .unwrap();
        let root = tree.root().unwrap();
        let sections = tree.children(root);
        assert_eq!(sections.len(), 1);
        assert_eq!(
            tree.get(sections[0]).unwrap().content,
            ComponentContent::Section(SectionContent { has_header: true })
        );
        assert_eq!(tree.children(sections[0]).len(), 2);
        // Dropped sections leave nothing behind in the arena.
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn table_with_no_valid_sections_fails_and_cleans_up() {
        let mut tree = ComponentTree::new();
        let err = parse_component(
            &mut tree,
            &json!({"type": "tableView", "content": {"sections": [{"items": [{"type": "nope"}]}]}}),
            None,
        )
        .unwrap_err();
        assert_eq!(err, ParseError::EmptyCollection { kind: "tableView", field: "sections" });
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);

        assert_eq!(
            parse(json!({"type": "tableView", "content": {"sections": []}})).unwrap_err(),
            ParseError::EmptyCollection { kind: "tableView", field: "sections" }
        );
    }

    #[test]
    fn tab_view_pages() {
        let tree = parse(json!({
            "type": "tabView",
            "content": {
                "value": 1,
                "pages": [
                    {"title": "One", "body": {"type": "label", "content": {"text": "1"}}},
                    {"title": "Broken", "body": {"type": "label"}},
                    {"title": "Two", "body": {"type": "label", "content": {"text": "2"}}},
                    {"body": {"type": "separator"}},
                ],
            },
        }))
        .unwrap();
        let root = tree.root().unwrap();
        let pages = tree.children(root).to_vec();
        assert_eq!(pages.len(), 2);
        assert_eq!(tree.selected_page(root), Some(pages[1]));
        assert_eq!(tree.children(pages[0]).len(), 1);
    }

    // ===== Styles =====

    #[test]
    fn styles_resolve_against_class_table() {
        let classes = StyleClassTable::from_json(&json!({
            "title": {"textType": "header1", "align": "center", "color": "#111"},
        }));
        let tree = ComponentTree::parse(
            &json!({
                "type": "label",
                "class": "title",
                "style": {"color": "#ff0000"},
                "content": {"text": "Hello"},
            }),
            Some(&classes),
        )
        .unwrap();
        let node = tree.get(tree.root().unwrap()).unwrap();
        assert_eq!(node.classes, vec!["title"]);
        assert_eq!(node.style.text_type, TextType::Header1);
        assert_eq!(node.style.alignment, Alignment::Center);
        assert_eq!(node.style.color, Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn factory_applies_base_style() {
        let mut base = ComponentStyle::default();
        base.text_type = TextType::Detail1;
        let mut tree = ComponentTree::new();
        let id = ComponentFactory::new(None, &base)
            .parse_into(&mut tree, None, &json!({"type": "label", "content": {"text": "x"}}))
            .unwrap();
        assert_eq!(tree.get(id).unwrap().style.text_type, TextType::Detail1);
    }
}
