//! Action dispatch: preconditions, routing, completion and navigation.

pub mod collaborator;
pub mod completion;
pub mod dispatcher;

pub use collaborator::{NetworkRequest, Opener, Transport, UrlTarget};
pub use completion::{completion_pair, ActionResponse, Completion, PendingAction};
pub use dispatcher::{
    can_dispatch, ActionDispatcher, DispatchContext, DispatchOptions, DispatchOutcome, FlushResult,
    NavigationEvent,
};
