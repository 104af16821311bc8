//! Decoding of the current action wire format.
//!
//! ```text
//! { "type": "<tag>", "content": { ...kind fields... }, "metadata": { ... } }
//! ```
//!
//! Payload schemas are enforced by serde; required strings must also be
//! non-empty. Any failure rejects the whole action.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::model::*;
use crate::error::ParseError;

/// Deserialize a payload, mapping serde's error into a [`ParseError`].
pub(crate) fn decode<T: DeserializeOwned>(kind: &'static str, content: &Value) -> Result<T, ParseError> {
    serde_json::from_value(content.clone()).map_err(|err| ParseError::InvalidField {
        kind,
        field: "content",
        message: err.to_string(),
    })
}

/// Reject empty or whitespace-only required strings.
pub(crate) fn require_non_empty(kind: &'static str, field: &'static str, value: &str) -> Result<(), ParseError> {
    if value.trim().is_empty() {
        Err(ParseError::MissingField { kind, field })
    } else {
        Ok(())
    }
}

/// Validate a decoded kind's required fields.
pub(crate) fn validate(kind: &ActionKind) -> Result<(), ParseError> {
    match kind {
        ActionKind::Api(api) => require_non_empty("api", "requestPath", &api.request_path),
        ActionKind::ComponentView(view) => require_non_empty("componentView", "name", &view.name),
        ActionKind::DeepLink(link) => require_non_empty("deepLink", "name", &link.name),
        ActionKind::Treewalk(walk) => {
            require_non_empty("treewalk", "classification", &walk.classification)
        }
        ActionKind::Web(_) | ActionKind::Finish(_) => Ok(()),
    }
}

/// Decode the payload of a modern action tag.
fn decode_kind(tag: &str, content: &Value) -> Result<ActionKind, ParseError> {
    let kind = match tag {
        "api" => ActionKind::Api(decode("api", content)?),
        "componentView" => ActionKind::ComponentView(decode("componentView", content)?),
        "deepLink" => ActionKind::DeepLink(decode("deepLink", content)?),
        "treewalk" => ActionKind::Treewalk(decode("treewalk", content)?),
        "web" => ActionKind::Web(decode("web", content)?),
        "finish" => ActionKind::Finish(decode("finish", content)?),
        other => return Err(ParseError::UnknownActionType(other.to_owned())),
    };
    validate(&kind)?;
    Ok(kind)
}

impl Action {
    /// Decode an action in the current wire format.
    pub fn parse(json: &Value) -> Result<Action, ParseError> {
        let obj = json.as_object().ok_or(ParseError::NotAnObject("action"))?;
        let tag = obj
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ParseError::MissingType)?;

        let empty = Value::Object(Default::default());
        let content = match obj.get("content") {
            None | Some(Value::Null) => &empty,
            Some(content @ Value::Object(_)) => content,
            Some(_) => return Err(ParseError::NotAnObject("action content")),
        };

        let kind = decode_kind(tag, content)?;
        let metadata = obj
            .get("metadata")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        Ok(Action::with_metadata(kind, metadata))
    }

    /// Decode either wire format: a top-level `value` object marks the legacy
    /// encoding, anything else is treated as current.
    pub fn parse_any(json: &Value) -> Result<Action, ParseError> {
        if json.get("value").is_some_and(Value::is_object) {
            Action::parse_legacy(json)
        } else {
            Action::parse(json)
        }
    }

    /// [`Action::parse_any`] that logs and drops failures.
    pub fn parse_or_warn(json: &Value) -> Option<Action> {
        match Action::parse_any(json) {
            Ok(action) => Some(action),
            Err(err) => {
                tracing::warn!(%err, "dropping malformed action");
                None
            }
        }
    }
}
