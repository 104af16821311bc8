//! The `Action` tagged variant and its payloads.
//!
//! Actions are decoded once from server JSON and never mutated afterwards.
//! Each kind owns its payload schema; the only runtime input an action takes is
//! the form data collected from the component tree when it is dispatched.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// Free-form key/value bag carried by actions and requests.
pub type DataMap = Map<String, Value>;

/// How a pushed component view is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayStyle {
    /// Full-screen presentation.
    #[default]
    Full,
    /// Inset card over the current view.
    Inset,
}

/// Call a server endpoint, merging collected form data into `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAction {
    pub request_path: String,
    #[serde(default)]
    pub data: DataMap,
    /// Inputs that must hold a non-empty value before the request is sent.
    #[serde(default, rename = "requiredInputFields")]
    pub required_inputs: Vec<String>,
    /// Additional inputs whose values are sent when present.
    #[serde(default, rename = "inputFields")]
    pub optional_inputs: Vec<String>,
}

impl ApiAction {
    /// Names of every input this action reads, required first.
    pub fn input_names(&self) -> impl Iterator<Item = &str> {
        self.required_inputs
            .iter()
            .chain(self.optional_inputs.iter())
            .map(String::as_str)
    }
}

/// Navigate to a named component view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentViewAction {
    pub name: String,
    #[serde(default)]
    pub display_style: DisplayStyle,
    #[serde(default)]
    pub data: DataMap,
}

/// Hand a named action back to the host application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeepLinkAction {
    pub name: String,
    #[serde(default)]
    pub data: DataMap,
}

/// One step in the scripted conversation graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreewalkAction {
    pub classification: String,
    /// Message echoed into the conversation; the triggering label wins at dispatch.
    #[serde(default)]
    pub text: Option<String>,
    /// Only ever set by the legacy `AID` decoder.
    #[serde(skip)]
    pub auto_select: bool,
}

/// Open a URL outside the component view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebAction {
    pub url: Url,
}

/// End the current flow.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinishAction {
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// The closed set of action kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionKind {
    Api(ApiAction),
    ComponentView(ComponentViewAction),
    DeepLink(DeepLinkAction),
    Treewalk(TreewalkAction),
    Web(WebAction),
    Finish(FinishAction),
}

/// A decoded, immutable action.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    kind: ActionKind,
    metadata: DataMap,
}

impl Action {
    pub fn new(kind: ActionKind) -> Self {
        Self { kind, metadata: DataMap::new() }
    }

    pub fn with_metadata(kind: ActionKind, metadata: DataMap) -> Self {
        Self { kind, metadata }
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Opaque server metadata, forwarded untouched with requests.
    pub fn metadata(&self) -> &DataMap {
        &self.metadata
    }

    /// The wire tag of this action's kind.
    pub fn type_name(&self) -> &'static str {
        match &self.kind {
            ActionKind::Api(_) => "api",
            ActionKind::ComponentView(_) => "componentView",
            ActionKind::DeepLink(_) => "deepLink",
            ActionKind::Treewalk(_) => "treewalk",
            ActionKind::Web(_) => "web",
            ActionKind::Finish(_) => "finish",
        }
    }

    /// Whether dispatching this action needs a live connection.
    pub fn requires_network(&self) -> bool {
        match &self.kind {
            ActionKind::Api(_) | ActionKind::ComponentView(_) | ActionKind::Treewalk(_) => true,
            ActionKind::Finish(finish) => finish.classification.is_some(),
            ActionKind::DeepLink(_) | ActionKind::Web(_) => false,
        }
    }

    /// The static data bag, if this kind carries one.
    pub fn data(&self) -> Option<&DataMap> {
        match &self.kind {
            ActionKind::Api(api) => Some(&api.data),
            ActionKind::ComponentView(view) => Some(&view.data),
            ActionKind::DeepLink(link) => Some(&link.data),
            ActionKind::Treewalk(_) | ActionKind::Web(_) | ActionKind::Finish(_) => None,
        }
    }

    /// Merge collected form values over the action's own data.
    ///
    /// Form values win on key collisions. An api action that names its inputs
    /// only picks up those inputs; every other action takes the whole form.
    pub fn merged_data(&self, form: &DataMap) -> DataMap {
        let mut merged = self.data().cloned().unwrap_or_default();
        let wanted: Option<HashSet<&str>> = match &self.kind {
            ActionKind::Api(api) => {
                let names: HashSet<&str> = api.input_names().collect();
                (!names.is_empty()).then_some(names)
            }
            _ => None,
        };
        for (key, value) in form {
            if wanted.as_ref().map_or(true, |names| names.contains(key.as_str())) {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

impl From<ActionKind> for Action {
    fn from(kind: ActionKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(v: Value) -> DataMap {
        v.as_object().cloned().unwrap()
    }

    fn api(required: &[&str], optional: &[&str], data: Value) -> Action {
        Action::new(ActionKind::Api(ApiAction {
            request_path: "/billing/pay".into(),
            data: map(data),
            required_inputs: required.iter().map(|s| s.to_string()).collect(),
            optional_inputs: optional.iter().map(|s| s.to_string()).collect(),
        }))
    }

    #[test]
    fn network_requirements() {
        assert!(api(&[], &[], json!({})).requires_network());
        let web = Action::new(ActionKind::Web(WebAction {
            url: Url::parse("https://example.com").unwrap(),
        }));
        assert!(!web.requires_network());
        let finish = Action::new(ActionKind::Finish(FinishAction::default()));
        assert!(!finish.requires_network());
        let finish_classified = Action::new(ActionKind::Finish(FinishAction {
            classification: Some("done".into()),
            text: None,
        }));
        assert!(finish_classified.requires_network());
    }

    #[test]
    fn form_data_wins_over_static_data() {
        let action = api(&[], &[], json!({"amount": 10, "currency": "USD"}));
        let merged = action.merged_data(&map(json!({"amount": 25})));
        assert_eq!(merged, map(json!({"amount": 25, "currency": "USD"})));
    }

    #[test]
    fn named_inputs_filter_form_data() {
        let action = api(&["zip"], &["note"], json!({"source": "chat"}));
        let merged = action.merged_data(&map(json!({"zip": "10001", "note": "hi", "other": 1})));
        assert_eq!(merged, map(json!({"source": "chat", "zip": "10001", "note": "hi"})));
    }

    #[test]
    fn actions_without_data_take_whole_form() {
        let action = Action::new(ActionKind::Treewalk(TreewalkAction {
            classification: "billing".into(),
            text: None,
            auto_select: false,
        }));
        assert!(action.data().is_none());
        assert_eq!(action.merged_data(&map(json!({"a": 1}))), map(json!({"a": 1})));
    }

    #[test]
    fn type_names() {
        assert_eq!(api(&[], &[], json!({})).type_name(), "api");
        assert_eq!(
            Action::new(ActionKind::Finish(FinishAction::default())).type_name(),
            "finish"
        );
    }
}
