//! Routes actions to their collaborators.
//!
//! [`ActionDispatcher`] owns the transport and opener, an offline queue for
//! actions deferred until the connection returns, and an outbox of
//! [`NavigationEvent`]s the host drains after each dispatch.

use std::collections::VecDeque;

use serde_json::Value;

use crate::action::{Action, ActionKind, DataMap, DisplayStyle};
use crate::component::NodeId;
use crate::error::DispatchError;

use super::collaborator::{NetworkRequest, Opener, Transport, UrlTarget};
use super::completion::{completion_pair, PendingAction};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOptions {
    /// Defer network actions while offline instead of rejecting them.
    pub queue_when_offline: bool,
}

/// Runtime inputs of one dispatch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DispatchContext {
    /// Values collected from the component tree.
    pub form_data: DataMap,
    /// Label of the triggering button or quick reply.
    pub trigger_text: Option<String>,
    pub search_query: Option<String>,
    /// Component that started the action; handed back by [`ActionDispatcher::flush_queue`].
    pub trigger: Option<NodeId>,
}

impl DispatchContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form_data(mut self, form_data: DataMap) -> Self {
        self.form_data = form_data;
        self
    }

    pub fn with_trigger_text(mut self, text: impl Into<String>) -> Self {
        self.trigger_text = Some(text.into());
        self
    }

    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn with_trigger(mut self, trigger: NodeId) -> Self {
        self.trigger = Some(trigger);
        self
    }
}

/// Result of replaying one queued action, with the trigger it came from.
pub type FlushResult = (Option<NodeId>, Result<DispatchOutcome, DispatchError>);

/// Navigation requested by an action, for the host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationEvent {
    PushView {
        name: String,
        display_style: DisplayStyle,
        data: DataMap,
    },
    Finish {
        classification: Option<String>,
        text: Option<String>,
    },
}

/// What a successful dispatch did.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// Deferred until the connection returns.
    Queued,
    /// Handled synchronously.
    Completed,
    /// Handed to the transport; resolves through the pending action.
    Pending(PendingAction),
}

impl DispatchOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }

    pub fn into_pending(self) -> Option<PendingAction> {
        match self {
            Self::Pending(pending) => Some(pending),
            _ => None,
        }
    }
}

/// Whether `action` may be dispatched right now.
pub fn can_dispatch(action: &Action, is_connected: bool, options: DispatchOptions) -> bool {
    !action.requires_network() || is_connected || options.queue_when_offline
}

/// Required inputs with no usable value in `form`.
fn missing_inputs(required: &[String], form: &DataMap) -> Vec<String> {
    required
        .iter()
        .filter(|name| match form.get(name.as_str()) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.trim().is_empty(),
            Some(_) => false,
        })
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// ActionDispatcher
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ActionDispatcher<T, O> {
    transport: T,
    opener: O,
    options: DispatchOptions,
    generic_error: String,
    offline_queue: VecDeque<(Action, DispatchContext)>,
    navigation: VecDeque<NavigationEvent>,
}

impl<T: Transport, O: Opener> ActionDispatcher<T, O> {
    pub fn new(transport: T, opener: O, generic_error: impl Into<String>) -> Self {
        Self {
            transport,
            opener,
            options: DispatchOptions::default(),
            generic_error: generic_error.into(),
            offline_queue: VecDeque::new(),
            navigation: VecDeque::new(),
        }
    }

    pub fn with_options(mut self, options: DispatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> DispatchOptions {
        self.options
    }

    pub fn set_options(&mut self, options: DispatchOptions) {
        self.options = options;
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    pub fn can_dispatch(&self, action: &Action) -> bool {
        can_dispatch(action, self.transport.is_connected(), self.options)
    }

    /// Route `action` to its handler.
    ///
    /// Api actions first check their required inputs. Network actions are
    /// rejected while offline, or queued when the options allow it.
    pub fn dispatch(&mut self, action: &Action, ctx: DispatchContext) -> Result<DispatchOutcome, DispatchError> {
        tracing::trace!(action = action.type_name(), "dispatching");

        if let ActionKind::Api(api) = action.kind() {
            let missing = missing_inputs(&api.required_inputs, &ctx.form_data);
            if !missing.is_empty() {
                return Err(DispatchError::MissingInputs(missing));
            }
        }

        if action.requires_network() && !self.transport.is_connected() {
            if !self.options.queue_when_offline {
                return Err(DispatchError::Offline);
            }
            tracing::debug!(action = action.type_name(), "offline, queueing action");
            self.offline_queue.push_back((action.clone(), ctx));
            return Ok(DispatchOutcome::Queued);
        }

        Ok(self.route(action, ctx))
    }

    fn route(&mut self, action: &Action, ctx: DispatchContext) -> DispatchOutcome {
        match action.kind() {
            ActionKind::Api(api) => self.send(NetworkRequest::Api {
                path: api.request_path.clone(),
                data: action.merged_data(&ctx.form_data),
                metadata: action.metadata().clone(),
            }),
            ActionKind::ComponentView(view) => {
                self.navigation.push_back(NavigationEvent::PushView {
                    name: view.name.clone(),
                    display_style: view.display_style,
                    data: action.merged_data(&ctx.form_data),
                });
                DispatchOutcome::Completed
            }
            ActionKind::Treewalk(walk) => self.send(NetworkRequest::Treewalk {
                classification: walk.classification.clone(),
                text: ctx.trigger_text.or_else(|| walk.text.clone()),
                search_query: ctx.search_query,
                auto_select: walk.auto_select,
            }),
            ActionKind::Web(web) => {
                self.opener.open_url(&web.url, UrlTarget::for_url(&web.url));
                DispatchOutcome::Completed
            }
            ActionKind::DeepLink(link) => {
                self.opener.open_deep_link(&link.name, &action.merged_data(&ctx.form_data));
                DispatchOutcome::Completed
            }
            ActionKind::Finish(finish) => {
                self.navigation.push_back(NavigationEvent::Finish {
                    classification: finish.classification.clone(),
                    text: finish.text.clone(),
                });
                match &finish.classification {
                    Some(classification) => self.send(NetworkRequest::Finish {
                        classification: classification.clone(),
                        text: finish.text.clone(),
                    }),
                    None => DispatchOutcome::Completed,
                }
            }
        }
    }

    fn send(&mut self, request: NetworkRequest) -> DispatchOutcome {
        let (completion, pending) = completion_pair(&self.generic_error);
        self.transport.send(request, completion);
        DispatchOutcome::Pending(pending)
    }

    /// Replay queued actions once connected, oldest first.
    ///
    /// Does nothing while still offline. Actions that fail again are dropped
    /// with their error reported in the result. Each result carries the
    /// trigger recorded in its [`DispatchContext`].
    pub fn flush_queue(&mut self) -> Vec<FlushResult> {
        if !self.transport.is_connected() {
            return Vec::new();
        }
        let queued: Vec<_> = self.offline_queue.drain(..).collect();
        tracing::debug!(count = queued.len(), "flushing offline queue");
        queued
            .into_iter()
            .map(|(action, ctx)| (ctx.trigger, self.dispatch(&action, ctx)))
            .collect()
    }

    pub fn queued_count(&self) -> usize {
        self.offline_queue.len()
    }

    /// Take every pending navigation event, oldest first.
    pub fn drain_navigation(&mut self) -> Vec<NavigationEvent> {
        self.navigation.drain(..).collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
