//! Pilot: programmatic interaction with a headless App.
//!
//! The `Pilot` wraps an [`App`] wired to a [`RecordingTransport`] and a
//! [`RecordingOpener`], and drives it the way a user and a server would:
//! load a view, fill inputs, tap by identifier, answer requests.

use serde_json::Value;

use crate::app::App;
use crate::component::{FormValue, NodeId};
use crate::config::Config;
use crate::dispatch::{ActionResponse, DispatchOutcome, NetworkRequest, PendingAction};
use crate::error::{DispatchError, ParseError, ValueError};
use crate::geometry::{Point, Rect};

use super::recording::{RecordingOpener, RecordingTransport};
use super::snapshot::layout_to_string;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless app driver for testing.
///
/// # Examples
///
/// ```ignore
/// use chat_components::testing::Pilot;
///
/// let mut pilot = Pilot::new(320, 640);
/// pilot.load(&view_json).unwrap();
/// pilot.type_text("zip", "10001").unwrap();
/// pilot.tap("submit").unwrap();
/// assert_eq!(pilot.requests().len(), 1);
/// ```
pub struct Pilot {
    app: App<RecordingTransport, RecordingOpener>,
    /// Outstanding actions keyed by the trigger that started them, oldest first.
    pending: Vec<(NodeId, PendingAction)>,
}

impl Pilot {
    /// Create an online pilot with the default config and a viewport.
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_config(Config::default(), width, height)
    }

    pub fn with_config(config: Config, width: i32, height: i32) -> Self {
        let app = App::new(config, RecordingTransport::new(true), RecordingOpener::default())
            .with_size(width, height);
        Self { app, pending: Vec::new() }
    }

    /// Replace the screen stack with the view in `json`.
    pub fn load(&mut self, json: &Value) -> Result<(), ParseError> {
        self.pending.clear();
        self.app.present(json)
    }

    // ── Interaction ──────────────────────────────────────────────────

    /// The node with identifier `id` on the top screen.
    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.app.find(id)
    }

    pub fn set_value(&mut self, id: &str, value: FormValue) -> Result<(), ValueError> {
        let node = self.find(id).ok_or(ValueError::UnknownComponent)?;
        self.app.set_value(node, value)
    }

    /// Replace the text of the input with identifier `id`.
    pub fn type_text(&mut self, id: &str, text: &str) -> Result<(), ValueError> {
        self.set_value(id, FormValue::Text(text.to_owned()))
    }

    /// Tap the component with identifier `id`.
    pub fn tap(&mut self, id: &str) -> Result<(), DispatchError> {
        let node = self.find(id).ok_or(DispatchError::UnknownComponent)?;
        self.tap_node(node)
    }

    /// Tap at `(x, y)`.
    pub fn click(&mut self, x: i32, y: i32) -> Result<(), DispatchError> {
        let node = self
            .app
            .screen()
            .and_then(|screen| screen.trigger_at(Point::new(x, y)))
            .ok_or(DispatchError::NoAction)?;
        self.tap_node(node)
    }

    fn tap_node(&mut self, node: NodeId) -> Result<(), DispatchError> {
        if let DispatchOutcome::Pending(pending) = self.app.tap(node)? {
            self.pending.push((node, pending));
        }
        Ok(())
    }

    /// Answer the oldest outstanding request and feed the result back into
    /// the app. Returns `false` if nothing was waiting.
    pub fn respond(&mut self, response: ActionResponse) -> Result<bool, DispatchError> {
        if !self.app.dispatcher.transport_mut().respond(response) {
            return Ok(false);
        }
        self.settle()?;
        Ok(true)
    }

    /// Fail the oldest outstanding request.
    pub fn fail(&mut self, message: Option<String>) -> Result<bool, DispatchError> {
        if !self.app.dispatcher.transport_mut().fail(message) {
            return Ok(false);
        }
        self.settle()?;
        Ok(true)
    }

    /// Deliver every response that already arrived.
    fn settle(&mut self) -> Result<(), DispatchError> {
        let mut waiting = Vec::with_capacity(self.pending.len());
        let mut arrived = Vec::new();
        for (node, mut pending) in self.pending.drain(..) {
            match pending.try_response() {
                Some(response) => arrived.push((node, response)),
                None => waiting.push((node, pending)),
            }
        }
        self.pending = waiting;
        for (node, response) in arrived {
            if let Some(DispatchOutcome::Pending(pending)) = self.app.complete(node, response)? {
                self.pending.push((node, pending));
            }
        }
        Ok(())
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.app.dispatcher.transport_mut().set_connected(connected);
    }

    /// Replay what was queued offline. Returns how many requests went out.
    pub fn flush(&mut self) -> usize {
        let mut sent = 0;
        for (trigger, pending) in self.app.flush_queue() {
            sent += 1;
            if let Some(node) = trigger {
                self.pending.push((node, pending));
            }
        }
        sent
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.app.resize(width, height);
    }

    // ── Query ────────────────────────────────────────────────────────

    pub fn app(&self) -> &App<RecordingTransport, RecordingOpener> {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App<RecordingTransport, RecordingOpener> {
        &mut self.app
    }

    /// Every request the transport received, oldest first.
    pub fn requests(&self) -> &[NetworkRequest] {
        self.app.dispatcher.transport().requests()
    }

    pub fn opener(&self) -> &RecordingOpener {
        self.app.dispatcher.opener()
    }

    /// Frame of the node with identifier `id`.
    pub fn frame(&self, id: &str) -> Option<Rect> {
        let node = self.find(id)?;
        self.app.screen().map(|screen| screen.frame(node))
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        match (self.app.screen(), self.find(id)) {
            (Some(screen), Some(node)) => screen.tree().is_disabled(node),
            _ => false,
        }
    }

    /// Layout outline of the top screen, see [`layout_to_string`].
    pub fn outline(&self) -> String {
        self.app
            .screen()
            .map(|screen| layout_to_string(screen.tree(), screen.layout()))
            .unwrap_or_default()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
