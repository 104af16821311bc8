//! Decoding of the legacy action wire format.
//!
//! Older servers wrap actions in a `value` object with upper-case tags and
//! differently named keys:
//!
//! ```text
//! { "label": "Pay bill", "value": { "type": "ACTION", "content": { "endpoint": "...", "endpointPayload": {...} } } }
//! ```
//!
//! Tags are normalized into the current kinds (`LINK` → deepLink, `AID` →
//! treewalk, `ACTION` → api, `COMPONENT_VIEW` → componentView) and then go
//! through the same validation as current actions.

use serde_json::Value;

use super::model::*;
use super::parse::validate;
use crate::error::ParseError;

/// Classification that makes the legacy client auto-select the step.
const AUTO_SELECT_CLASSIFICATION: &str = "bpp";

fn string_field<'a>(content: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| content.get(*key).and_then(Value::as_str))
}

fn object_field(content: &Value, keys: &[&str]) -> DataMap {
    keys.iter()
        .find_map(|key| content.get(*key).and_then(Value::as_object))
        .cloned()
        .unwrap_or_default()
}

fn strings_field(content: &Value, key: &str) -> Vec<String> {
    content
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).map(str::to_owned).collect())
        .unwrap_or_default()
}

fn missing(kind: &'static str, field: &'static str) -> ParseError {
    ParseError::MissingField { kind, field }
}

fn decode_link(content: &Value) -> Result<ActionKind, ParseError> {
    let name = string_field(content, &["deepLink", "name"]).ok_or(missing("deepLink", "deepLink"))?;
    Ok(ActionKind::DeepLink(DeepLinkAction {
        name: name.to_owned(),
        data: object_field(content, &["deepLinkData", "data"]),
    }))
}

fn decode_aid(content: &Value) -> Result<ActionKind, ParseError> {
    let (classification, text) = match content {
        Value::String(classification) => (classification.as_str(), None),
        Value::Object(_) => (
            string_field(content, &["classification"]).ok_or(missing("treewalk", "classification"))?,
            string_field(content, &["text"]).map(str::to_owned),
        ),
        _ => return Err(missing("treewalk", "classification")),
    };
    Ok(ActionKind::Treewalk(TreewalkAction {
        classification: classification.to_owned(),
        text,
        auto_select: classification == AUTO_SELECT_CLASSIFICATION,
    }))
}

fn decode_api(content: &Value) -> Result<ActionKind, ParseError> {
    let path = string_field(content, &["endpoint", "requestPath"]).ok_or(missing("api", "endpoint"))?;
    Ok(ActionKind::Api(ApiAction {
        request_path: path.to_owned(),
        data: object_field(content, &["endpointPayload", "data"]),
        required_inputs: strings_field(content, "requiredInputFields"),
        optional_inputs: strings_field(content, "inputFields"),
    }))
}

fn decode_component_view(content: &Value) -> Result<ActionKind, ParseError> {
    let name = match content {
        Value::String(name) => Some(name.as_str()),
        _ => string_field(content, &["name"]),
    }
    .ok_or(missing("componentView", "name"))?;
    let display_style = match string_field(content, &["displayStyle"]) {
        None | Some("full") => DisplayStyle::Full,
        Some("inset") => DisplayStyle::Inset,
        Some(other) => {
            return Err(ParseError::InvalidField {
                kind: "componentView",
                field: "displayStyle",
                message: format!("unknown display style {other:?}"),
            })
        }
    };
    Ok(ActionKind::ComponentView(ComponentViewAction {
        name: name.to_owned(),
        display_style,
        data: object_field(content, &["data"]),
    }))
}

impl Action {
    /// Decode an action in the legacy `{value: {type, content}}` format.
    pub fn parse_legacy(json: &Value) -> Result<Action, ParseError> {
        let value = json
            .get("value")
            .filter(|v| v.is_object())
            .ok_or(ParseError::NotAnObject("legacy action value"))?;
        let tag = value.get("type").and_then(Value::as_str).ok_or(ParseError::MissingType)?;
        let null = Value::Null;
        let content = value.get("content").unwrap_or(&null);

        let kind = match tag {
            "LINK" => decode_link(content)?,
            "AID" => decode_aid(content)?,
            "ACTION" => decode_api(content)?,
            "COMPONENT_VIEW" => decode_component_view(content)?,
            other => return Err(ParseError::UnknownActionType(other.to_owned())),
        };
        validate(&kind)?;
        Ok(Action::new(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn aid_string_matches_modern_treewalk() {
        let legacy = Action::parse_legacy(&json!({"value": {"type": "AID", "content": "billing"}})).unwrap();
        let modern = Action::parse(&json!({"type": "treewalk", "content": {"classification": "billing"}})).unwrap();
        assert_eq!(legacy, modern);
    }

    #[test]
    fn aid_object_with_text() {
        let action = Action::parse_legacy(&json!({
            "value": {"type": "AID", "content": {"classification": "outage", "text": "Outage?"}},
        }))
        .unwrap();
        let ActionKind::Treewalk(walk) = action.kind() else { panic!() };
        assert_eq!(walk.classification, "outage");
        assert_eq!(walk.text.as_deref(), Some("Outage?"));
    }

    #[test]
    fn bpp_classification_sets_auto_select() {
        let action = Action::parse_legacy(&json!({"value": {"type": "AID", "content": "bpp"}})).unwrap();
        let ActionKind::Treewalk(walk) = action.kind() else { panic!() };
        assert!(walk.auto_select);
    }

    #[test]
    fn link_maps_to_deep_link() {
        let action = Action::parse_legacy(&json!({
            "value": {"type": "LINK", "content": {"deepLink": "payBill", "deepLinkData": {"amount": 5}}},
        }))
        .unwrap();
        assert_eq!(
            action.kind(),
            &ActionKind::DeepLink(DeepLinkAction {
                name: "payBill".into(),
                data: json!({"amount": 5}).as_object().cloned().unwrap(),
            })
        );
    }

    #[test]
    fn action_maps_to_api() {
        let action = Action::parse_legacy(&json!({
            "label": "Send",
            "value": {"type": "ACTION", "content": {"endpoint": "/send", "endpointPayload": {"a": 1}}},
        }))
        .unwrap();
        let ActionKind::Api(api) = action.kind() else { panic!() };
        assert_eq!(api.request_path, "/send");
        assert_eq!(api.data.get("a"), Some(&json!(1)));
    }

    #[test]
    fn component_view_from_string_or_object() {
        let a = Action::parse_legacy(&json!({"value": {"type": "COMPONENT_VIEW", "content": "plans"}})).unwrap();
        let b = Action::parse_legacy(&json!({
            "value": {"type": "COMPONENT_VIEW", "content": {"name": "plans", "displayStyle": "full"}},
        }))
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_legacy_tag_fails() {
        let err = Action::parse_legacy(&json!({"value": {"type": "treewalk", "content": "x"}})).unwrap_err();
        assert_eq!(err, ParseError::UnknownActionType("treewalk".into()));
    }

    #[test]
    fn legacy_still_validates() {
        assert!(Action::parse_legacy(&json!({"value": {"type": "AID", "content": ""}})).is_err());
        assert!(Action::parse_legacy(&json!({"value": {"type": "LINK", "content": {}}})).is_err());
        assert!(Action::parse_legacy(&json!({"value": "AID"})).is_err());
    }

    #[test]
    fn parse_any_routes_by_shape() {
        let legacy = Action::parse_any(&json!({"value": {"type": "AID", "content": "billing"}})).unwrap();
        let modern = Action::parse_any(&json!({"type": "treewalk", "content": {"classification": "billing"}})).unwrap();
        assert_eq!(legacy, modern);
    }
}
