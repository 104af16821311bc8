//! App struct: screen stack, dispatch, navigation.
//!
//! [`App`] ties together the config, the [`ActionDispatcher`] and a stack of
//! [`Screen`]s. The host feeds it view documents and taps; navigation the
//! dispatcher asks for is applied after every dispatch. Views are fetched by
//! the host, so a push request is queued as a [`ViewRequest`] until the host
//! answers it with [`App::push_view`].

use std::collections::VecDeque;

use serde_json::Value;

use crate::action::{DataMap, DisplayStyle};
use crate::component::{FormValue, NodeId};
use crate::config::Config;
use crate::dispatch::{
    ActionDispatcher, ActionResponse, DispatchContext, DispatchOutcome, NavigationEvent, Opener, PendingAction,
    Transport,
};
use crate::error::{DispatchError, ParseError, ValueError};
use crate::geometry::{Point, Rect};
use crate::screen::Screen;

// ---------------------------------------------------------------------------
// Navigation records
// ---------------------------------------------------------------------------

/// A component view the dispatcher asked to show.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRequest {
    pub name: String,
    pub display_style: DisplayStyle,
    pub data: DataMap,
}

/// How the flow ended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FinishRecord {
    pub classification: Option<String>,
    pub text: Option<String>,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App<T, O> {
    pub config: Config,
    pub dispatcher: ActionDispatcher<T, O>,
    screens: Vec<Screen>,
    bounds: Rect,
    view_requests: VecDeque<ViewRequest>,
    finished: Option<FinishRecord>,
    last_error: Option<String>,
}

impl<T: Transport, O: Opener> App<T, O> {
    pub fn new(config: Config, transport: T, opener: O) -> Self {
        let dispatcher = ActionDispatcher::new(transport, opener, config.generic_error_message.clone());
        Self {
            config,
            dispatcher,
            screens: Vec::new(),
            bounds: Rect::ZERO,
            view_requests: VecDeque::new(),
            finished: None,
            last_error: None,
        }
    }

    /// Set the viewport size (builder).
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.bounds = Rect::new(0, 0, width, height);
        self
    }

    // ── Screens ──────────────────────────────────────────────────────

    /// Replace the whole stack with a single view.
    pub fn present(&mut self, json: &Value) -> Result<(), ParseError> {
        let screen = Screen::from_json(json, &self.config)?;
        self.screens.clear();
        self.finished = None;
        self.push_screen(screen);
        Ok(())
    }

    /// Push the view the host fetched for a [`ViewRequest`].
    pub fn push_view(&mut self, name: &str, json: &Value) -> Result<(), ParseError> {
        let screen = Screen::from_json(json, &self.config)?.with_name(name);
        self.push_screen(screen);
        Ok(())
    }

    pub fn push_screen(&mut self, mut screen: Screen) {
        screen.relayout(&self.config, self.bounds);
        tracing::debug!(name = ?screen.name(), depth = self.screens.len() + 1, "screen pushed");
        self.screens.push(screen);
    }

    /// Pop the top screen. The last screen is never popped.
    pub fn pop_screen(&mut self) -> Option<Screen> {
        if self.screens.len() <= 1 {
            return None;
        }
        self.screens.pop()
    }

    pub fn screen(&self) -> Option<&Screen> {
        self.screens.last()
    }

    pub fn screen_mut(&mut self) -> Option<&mut Screen> {
        self.screens.last_mut()
    }

    pub fn depth(&self) -> usize {
        self.screens.len()
    }

    /// Resize the viewport and lay out every screen again.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.bounds = Rect::new(0, 0, width, height);
        for screen in &mut self.screens {
            screen.relayout(&self.config, self.bounds);
        }
    }

    // ── Interaction ──────────────────────────────────────────────────

    /// The node with identifier `id` on the top screen.
    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.screen()?.tree().find_by_id(id)
    }

    pub fn set_value(&mut self, id: NodeId, value: FormValue) -> Result<(), ValueError> {
        self.screen_mut().ok_or(ValueError::UnknownComponent)?.set_value(id, value)
    }

    /// Tap a component on the top screen and apply any navigation it caused.
    pub fn tap(&mut self, id: NodeId) -> Result<DispatchOutcome, DispatchError> {
        self.last_error = None;
        let screen = self.screens.last_mut().ok_or(DispatchError::UnknownComponent)?;
        let outcome = screen.tap(id, &mut self.dispatcher);
        self.apply_navigation();
        outcome
    }

    /// Tap whatever action-carrying component is under `point`.
    pub fn tap_at(&mut self, point: Point) -> Result<DispatchOutcome, DispatchError> {
        let id = self
            .screen()
            .and_then(|screen| screen.trigger_at(point))
            .ok_or(DispatchError::NoAction)?;
        self.tap(id)
    }

    /// Deliver the response of an action tapped on `trigger`.
    ///
    /// The trigger is enabled again on the screen that has it in flight, which
    /// need not be the top one. A follow-up action is dispatched with the top
    /// screen's form data; a failure message is kept for [`App::last_error`].
    pub fn complete(
        &mut self,
        trigger: NodeId,
        response: ActionResponse,
    ) -> Result<Option<DispatchOutcome>, DispatchError> {
        self.release(trigger);
        match response {
            ActionResponse::Ok => Ok(None),
            ActionResponse::Failed { message } => {
                tracing::warn!(%message, "action failed");
                self.last_error = Some(message);
                Ok(None)
            }
            ActionResponse::Next(action) => {
                let form_data = self.screen().map(|s| s.tree().form_data()).unwrap_or_default();
                let outcome = self.dispatcher.dispatch(&action, DispatchContext::new().with_form_data(form_data));
                self.apply_navigation();
                outcome.map(Some)
            }
        }
    }

    /// Replay actions queued while offline.
    ///
    /// Triggers whose replay completed or failed are enabled again. Those that
    /// reached the transport stay disabled and come back with their pending
    /// action, to be answered through [`App::complete`].
    pub fn flush_queue(&mut self) -> Vec<(Option<NodeId>, PendingAction)> {
        let mut pending = Vec::new();
        for (trigger, result) in self.dispatcher.flush_queue() {
            match result {
                Ok(DispatchOutcome::Pending(action)) => pending.push((trigger, action)),
                Ok(_) => trigger.into_iter().for_each(|id| self.release(id)),
                Err(err) => {
                    tracing::warn!(%err, "queued action dropped");
                    trigger.into_iter().for_each(|id| self.release(id));
                }
            }
        }
        self.apply_navigation();
        pending
    }

    /// Re-enable `trigger` on the topmost screen that has it in flight.
    fn release(&mut self, trigger: NodeId) {
        let owner = self.screens.iter_mut().rev().find(|screen| screen.in_flight().contains(&trigger));
        if let Some(screen) = owner {
            screen.complete(trigger);
        }
    }

    fn apply_navigation(&mut self) {
        for event in self.dispatcher.drain_navigation() {
            match event {
                NavigationEvent::PushView { name, display_style, data } => {
                    tracing::debug!(%name, "component view requested");
                    self.view_requests.push_back(ViewRequest { name, display_style, data });
                }
                NavigationEvent::Finish { classification, text } => {
                    tracing::debug!(classification = ?classification, "flow finished");
                    self.screens.clear();
                    self.view_requests.clear();
                    self.finished = Some(FinishRecord { classification, text });
                }
            }
        }
    }

    // ── State ────────────────────────────────────────────────────────

    /// Take every view request not yet answered, oldest first.
    pub fn take_view_requests(&mut self) -> Vec<ViewRequest> {
        self.view_requests.drain(..).collect()
    }

    pub fn finished(&self) -> Option<&FinishRecord> {
        self.finished.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    /// Message of the most recent failed action.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingOpener, RecordingTransport};
    use serde_json::json;

    type TestApp = App<RecordingTransport, RecordingOpener>;

    fn app() -> TestApp {
        App::new(Config::default(), RecordingTransport::new(true), RecordingOpener::default()).with_size(360, 640)
    }

    fn menu() -> Value {
        json!({
            "title": "Help",
            "body": {"type": "stackView", "content": {"items": [
                {"type": "button", "id": "plans", "content": {
                    "title": "See plans",
                    "action": {"type": "componentView", "content": {"name": "plans", "displayStyle": "inset"}},
                }},
                {"type": "button", "id": "done", "content": {
                    "title": "Done",
                    "action": {"type": "finish", "content": {"text": "Bye"}},
                }},
                {"type": "button", "id": "check", "content": {
                    "title": "Check status",
                    "action": {"type": "api", "content": {"requestPath": "/status"}},
                }},
            ]}},
        })
    }

    // ── Construction ─────────────────────────────────────────────────

    #[test]
    fn present_lays_out_at_viewport_width() {
        let mut app = app();
        app.present(&menu()).unwrap();
        assert_eq!(app.depth(), 1);
        let screen = app.screen().unwrap();
        assert_eq!(screen.title(), Some("Help"));
        assert_eq!(screen.layout().frame(screen.tree().root().unwrap()).width, 360);
    }

    #[test]
    fn dispatcher_uses_configured_error_message() {
        let config = Config::default().with_generic_error_message("Oops");
        let mut app = App::new(config, RecordingTransport::new(true), RecordingOpener::default());
        app.present(&menu()).unwrap();
        let check = app.find("check").unwrap();
        let mut pending = app.tap(check).unwrap().into_pending().unwrap();
        app.dispatcher.transport_mut().fail(None);
        assert_eq!(pending.try_response(), Some(ActionResponse::Failed { message: "Oops".into() }));
    }

    // ── Navigation ───────────────────────────────────────────────────

    #[test]
    fn component_view_request_then_push() {
        let mut app = app();
        app.present(&menu()).unwrap();
        let plans = app.find("plans").unwrap();
        app.tap(plans).unwrap();

        let requests = app.take_view_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].name, "plans");
        assert_eq!(requests[0].display_style, DisplayStyle::Inset);

        app.push_view("plans", &json!({"title": "Plans"})).unwrap();
        assert_eq!(app.depth(), 2);
        assert_eq!(app.screen().unwrap().name(), Some("plans"));
        assert!(app.pop_screen().is_some());
        assert!(app.pop_screen().is_none());
    }

    #[test]
    fn finish_clears_stack() {
        let mut app = app();
        app.present(&menu()).unwrap();
        let done = app.find("done").unwrap();
        assert!(matches!(app.tap(done).unwrap(), DispatchOutcome::Completed));
        assert_eq!(app.depth(), 0);
        assert_eq!(
            app.finished(),
            Some(&FinishRecord { classification: None, text: Some("Bye".into()) })
        );
    }

    #[test]
    fn next_action_is_dispatched_on_completion() {
        let mut app = app();
        app.present(&menu()).unwrap();
        let check = app.find("check").unwrap();
        app.tap(check).unwrap();
        assert!(app.screen().unwrap().tree().is_disabled(check));

        let follow_up = crate::action::Action::parse(&json!({"type": "finish"})).unwrap();
        let outcome = app.complete(check, ActionResponse::Next(follow_up)).unwrap();
        assert!(matches!(outcome, Some(DispatchOutcome::Completed)));
        assert!(app.is_finished());
    }

    #[test]
    fn failure_is_recorded_and_trigger_enabled() {
        let mut app = app();
        app.present(&menu()).unwrap();
        let check = app.find("check").unwrap();
        app.tap(check).unwrap();
        app.complete(check, ActionResponse::Failed { message: "Server down".into() }).unwrap();
        assert_eq!(app.last_error(), Some("Server down"));
        assert!(!app.screen().unwrap().tree().is_disabled(check));
    }

    #[test]
    fn completion_reenables_trigger_under_pushed_view() {
        let mut app = app();
        app.present(&menu()).unwrap();
        let check = app.find("check").unwrap();
        let plans = app.find("plans").unwrap();
        app.tap(check).unwrap();
        app.tap(plans).unwrap();
        app.push_view("plans", &menu()).unwrap();
        let covering = app.screen().unwrap().tree().find_by_id("check").unwrap();

        app.complete(check, ActionResponse::Ok).unwrap();
        assert!(!app.screen().unwrap().tree().is_disabled(covering));
        app.pop_screen().unwrap();
        let screen = app.screen().unwrap();
        assert!(!screen.tree().is_disabled(check));
        assert!(screen.in_flight().is_empty());
    }

    #[test]
    fn offline_taps_are_sent_once() {
        let mut app = app();
        app.dispatcher.set_options(crate::dispatch::DispatchOptions { queue_when_offline: true });
        app.dispatcher.transport_mut().set_connected(false);
        app.present(&menu()).unwrap();
        let check = app.find("check").unwrap();

        assert!(matches!(app.tap(check).unwrap(), DispatchOutcome::Queued));
        assert_eq!(app.tap(check).unwrap_err(), DispatchError::InFlight);
        assert!(app.flush_queue().is_empty());

        app.dispatcher.transport_mut().set_connected(true);
        let pending = app.flush_queue();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].0, Some(check));
        assert_eq!(app.dispatcher.transport().requests().len(), 1);
        assert!(app.screen().unwrap().tree().is_disabled(check));

        app.complete(check, ActionResponse::Ok).unwrap();
        assert!(!app.screen().unwrap().tree().is_disabled(check));
    }

    #[test]
    fn resize_relays_out_every_screen() {
        let mut app = app();
        app.present(&menu()).unwrap();
        app.push_view("plans", &json!({"body": {"type": "separator"}})).unwrap();
        app.resize(200, 400);
        assert_eq!(app.screen().unwrap().bounds().width, 200);
        app.pop_screen();
        let screen = app.screen().unwrap();
        assert_eq!(screen.layout().frame(screen.tree().root().unwrap()).width, 200);
    }

    #[test]
    fn tap_at_misses_empty_space() {
        let mut app = app();
        app.present(&menu()).unwrap();
        assert_eq!(app.tap_at(Point::new(10, 630)).unwrap_err(), DispatchError::NoAction);
    }
}
