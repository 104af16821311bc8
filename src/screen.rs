//! One rendered component view.
//!
//! [`Screen`] owns a decoded [`ComponentView`], its most recent layout, and
//! the set of triggers whose actions are in flight. A trigger is disabled from
//! the moment its action is handed to the transport or queued offline until
//! [`Screen::complete`] is called for it, so a second tap cannot send a
//! duplicate request.

use serde_json::Value;

use crate::component::{ComponentTree, ComponentView, FormValue, NodeId};
use crate::config::Config;
use crate::dispatch::{ActionDispatcher, DispatchContext, DispatchOutcome, Opener, Transport};
use crate::error::{DispatchError, ParseError, ValueError};
use crate::geometry::{Point, Rect};
use crate::layout::{LayoutEngine, TreeLayout};

#[derive(Debug, Clone)]
pub struct Screen {
    /// Name the view was pushed under, if any.
    name: Option<String>,
    view: ComponentView,
    layout: TreeLayout,
    bounds: Rect,
    in_flight: Vec<NodeId>,
    search_query: Option<String>,
}

impl Screen {
    pub fn new(view: ComponentView) -> Self {
        Self {
            name: None,
            view,
            layout: TreeLayout::default(),
            bounds: Rect::ZERO,
            in_flight: Vec::new(),
            search_query: None,
        }
    }

    /// Decode a view document with the config's default style.
    pub fn from_json(json: &Value, config: &Config) -> Result<Self, ParseError> {
        ComponentView::from_json_with_style(json, &config.default_style).map(Self::new)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The search that led to this screen, forwarded with treewalk steps.
    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.view.title.as_deref()
    }

    pub fn tree(&self) -> &ComponentTree {
        &self.view.tree
    }

    pub fn layout(&self) -> &TreeLayout {
        &self.layout
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    // ---------------------------------------------------------------------------
    // Layout
    // ---------------------------------------------------------------------------

    /// Lay the tree out in `bounds` and keep the result.
    pub fn relayout(&mut self, config: &Config, bounds: Rect) -> &TreeLayout {
        self.bounds = bounds;
        self.layout = LayoutEngine::new(config).layout(&self.view.tree, bounds);
        &self.layout
    }

    pub fn frame(&self, id: NodeId) -> Rect {
        self.layout.frame(id)
    }

    /// The node under `point` that has an action, searching up from the
    /// deepest hit.
    pub fn trigger_at(&self, point: Point) -> Option<NodeId> {
        let hit = self.layout.hit_test(&self.view.tree, point)?;
        std::iter::once(hit)
            .chain(self.view.tree.ancestors(hit))
            .find(|&id| self.view.tree.get(id).is_some_and(|node| node.content.action().is_some()))
    }

    // ---------------------------------------------------------------------------
    // Interaction
    // ---------------------------------------------------------------------------

    /// Update an editable component. Layout is not recomputed.
    pub fn set_value(&mut self, id: NodeId, value: FormValue) -> Result<(), ValueError> {
        self.view.tree.set_value(id, value)
    }

    /// Dispatch the action of `id`.
    ///
    /// The trigger's label and the tree's form data go with the action. When
    /// the dispatch hands work to the transport or queues it, the trigger is
    /// disabled until [`Screen::complete`].
    pub fn tap<T: Transport, O: Opener>(
        &mut self,
        id: NodeId,
        dispatcher: &mut ActionDispatcher<T, O>,
    ) -> Result<DispatchOutcome, DispatchError> {
        let node = self.view.tree.get(id).ok_or(DispatchError::UnknownComponent)?;
        if node.disabled {
            return Err(DispatchError::InFlight);
        }
        let action = node.content.action().ok_or(DispatchError::NoAction)?.clone();

        let mut ctx = DispatchContext::new()
            .with_form_data(self.view.tree.form_data())
            .with_trigger(id);
        if let Some(text) = node.content.display_text() {
            ctx = ctx.with_trigger_text(text);
        }
        if let Some(query) = &self.search_query {
            ctx = ctx.with_search_query(query.clone());
        }

        let outcome = dispatcher.dispatch(&action, ctx)?;
        if matches!(outcome, DispatchOutcome::Pending(_) | DispatchOutcome::Queued) {
            self.view.tree.set_disabled(id, true);
            self.in_flight.push(id);
        }
        Ok(outcome)
    }

    /// Re-enable a trigger once its action resolved.
    pub fn complete(&mut self, id: NodeId) {
        self.in_flight.retain(|&n| n != id);
        self.view.tree.set_disabled(id, false);
    }

    pub fn in_flight(&self) -> &[NodeId] {
        &self.in_flight
    }

    /// Replace the tree with a new payload and lay it out again in the
    /// previous bounds. In-flight triggers belong to the old tree and are
    /// forgotten.
    pub fn reload(&mut self, json: &Value, config: &Config) -> Result<(), ParseError> {
        self.view = ComponentView::from_json_with_style(json, &config.default_style)?;
        self.in_flight.clear();
        let bounds = self.bounds;
        self.relayout(config, bounds);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::ActionResponse;
    use crate::testing::{RecordingOpener, RecordingTransport};
    use serde_json::json;
    use tokio_test::block_on;

    fn screen() -> Screen {
        let config = Config::default();
        let mut screen = Screen::from_json(
            &json!({
                "title": "Outage",
                "body": {
                    "type": "stackView",
                    "content": {"items": [
                        {"type": "label", "content": {"text": "Is your power out?"}},
                        {"type": "textInput", "id": "zip", "content": {"placeholder": "ZIP"}},
                        {"type": "button", "id": "yes", "content": {
                            "title": "Report outage",
                            "action": {"type": "api", "content": {"requestPath": "/outage", "requiredInputFields": ["zip"]}},
                        }},
                    ]},
                },
            }),
            &config,
        )
        .unwrap()
        .with_search_query("power");
        screen.relayout(&config, Rect::new(0, 0, 320, 600));
        screen
    }

    fn dispatcher() -> ActionDispatcher<RecordingTransport, RecordingOpener> {
        ActionDispatcher::new(RecordingTransport::new(true), RecordingOpener::default(), "generic")
    }

    #[test]
    fn tap_requires_inputs_then_disables_trigger() {
        let mut screen = screen();
        let mut d = dispatcher();
        let yes = screen.tree().find_by_id("yes").unwrap();
        let zip = screen.tree().find_by_id("zip").unwrap();

        assert!(matches!(screen.tap(yes, &mut d), Err(DispatchError::MissingInputs(_))));

        screen.set_value(zip, FormValue::Text("10001".into())).unwrap();
        let pending = screen.tap(yes, &mut d).unwrap().into_pending().unwrap();
        assert!(screen.tree().is_disabled(yes));
        assert_eq!(screen.in_flight(), &[yes]);
        assert_eq!(screen.tap(yes, &mut d).unwrap_err(), DispatchError::InFlight);

        d.transport_mut().respond(ActionResponse::Ok);
        assert_eq!(block_on(pending.wait()), ActionResponse::Ok);
        screen.complete(yes);
        assert!(!screen.tree().is_disabled(yes));
        assert!(screen.in_flight().is_empty());
    }

    #[test]
    fn queued_tap_disables_trigger() {
        let mut screen = screen();
        let mut d = ActionDispatcher::new(RecordingTransport::new(false), RecordingOpener::default(), "generic")
            .with_options(crate::dispatch::DispatchOptions { queue_when_offline: true });
        let yes = screen.tree().find_by_id("yes").unwrap();
        let zip = screen.tree().find_by_id("zip").unwrap();
        screen.set_value(zip, FormValue::Text("10001".into())).unwrap();

        assert!(matches!(screen.tap(yes, &mut d).unwrap(), DispatchOutcome::Queued));
        assert!(screen.tree().is_disabled(yes));
        assert_eq!(screen.tap(yes, &mut d).unwrap_err(), DispatchError::InFlight);
        assert_eq!(d.queued_count(), 1);

        d.transport_mut().set_connected(true);
        let flushed = d.flush_queue();
        assert_eq!(flushed.len(), 1);
        assert_eq!(flushed[0].0, Some(yes));
        assert_eq!(d.transport().requests().len(), 1);
    }

    #[test]
    fn tap_without_action() {
        let mut screen = screen();
        let mut d = dispatcher();
        let zip = screen.tree().find_by_id("zip").unwrap();
        assert_eq!(screen.tap(zip, &mut d).unwrap_err(), DispatchError::NoAction);
    }

    #[test]
    fn trigger_at_walks_up_to_the_button() {
        let screen = screen();
        let yes = screen.tree().find_by_id("yes").unwrap();
        let frame = screen.frame(yes);
        assert_eq!(screen.trigger_at(Point::new(frame.x + 2, frame.y + 2)), Some(yes));
        assert_eq!(screen.trigger_at(Point::new(1, 1)), None);
    }

    #[test]
    fn reload_rebuilds_and_relays_out() {
        let config = Config::default();
        let mut screen = screen();
        screen
            .reload(&json!({"body": {"type": "label", "content": {"text": "Thanks"}}}), &config)
            .unwrap();
        assert_eq!(screen.title(), None);
        assert_eq!(screen.tree().len(), 1);
        assert_eq!(screen.layout().frame(screen.tree().root().unwrap()).width, 320);
        assert!(screen.reload(&json!({}), &config).is_err());
    }
}
