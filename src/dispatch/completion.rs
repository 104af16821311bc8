//! Completion channel for actions that finish asynchronously.
//!
//! The dispatcher hands a [`Completion`] to the transport and returns the
//! matching [`PendingAction`] to the caller. Exactly one terminal response is
//! delivered; a completion dropped without responding reads as a failure with
//! the generic error message.

use std::time::Duration;

use tokio::sync::oneshot;

use crate::action::Action;

/// Terminal result of an asynchronous action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResponse {
    /// The server handed back a follow-up action.
    Next(Action),
    /// Succeeded with nothing further to do.
    Ok,
    Failed { message: String },
}

impl ActionResponse {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Sending half, owned by the transport until it responds.
#[derive(Debug)]
pub struct Completion {
    sender: oneshot::Sender<ActionResponse>,
    generic_error: String,
}

impl Completion {
    pub fn respond(self, response: ActionResponse) {
        if self.sender.send(response).is_err() {
            tracing::debug!("action response dropped, nobody is waiting");
        }
    }

    pub fn succeed(self) {
        self.respond(ActionResponse::Ok);
    }

    pub fn next(self, action: Action) {
        self.respond(ActionResponse::Next(action));
    }

    /// Fail with the server's message, or the generic one when it gave none.
    pub fn fail(self, message: Option<String>) {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| self.generic_error.clone());
        self.respond(ActionResponse::Failed { message });
    }
}

/// Receiving half, held by whoever triggered the action.
#[derive(Debug)]
pub struct PendingAction {
    receiver: oneshot::Receiver<ActionResponse>,
    generic_error: String,
}

impl PendingAction {
    /// Wait for the terminal response.
    pub async fn wait(self) -> ActionResponse {
        match self.receiver.await {
            Ok(response) => response,
            Err(_) => ActionResponse::Failed { message: self.generic_error },
        }
    }

    /// Wait at most `limit`. Running out of time reads as a failure with the
    /// generic message.
    pub async fn wait_for(self, limit: Duration) -> ActionResponse {
        let generic_error = self.generic_error.clone();
        match tokio::time::timeout(limit, self.wait()).await {
            Ok(response) => response,
            Err(_) => {
                tracing::debug!(?limit, "action timed out");
                ActionResponse::Failed { message: generic_error }
            }
        }
    }

    /// The response if it already arrived, without waiting.
    pub fn try_response(&mut self) -> Option<ActionResponse> {
        match self.receiver.try_recv() {
            Ok(response) => Some(response),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                Some(ActionResponse::Failed { message: self.generic_error.clone() })
            }
        }
    }
}

/// A connected completion/pending pair.
pub fn completion_pair(generic_error: &str) -> (Completion, PendingAction) {
    let (sender, receiver) = oneshot::channel();
    (
        Completion { sender, generic_error: generic_error.to_owned() },
        PendingAction { receiver, generic_error: generic_error.to_owned() },
    )
}
