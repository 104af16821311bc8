//! Error types for decoding and dispatch.
//!
//! Parse errors are always absorbed at the smallest scope: the failing node or
//! action is dropped and logged, its siblings survive.

/// Why a component, view, or action could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected a JSON object for {0}")]
    NotAnObject(&'static str),
    #[error("missing type tag")]
    MissingType,
    #[error("unknown component type: {0}")]
    UnknownType(String),
    #[error("unknown action type: {0}")]
    UnknownActionType(String),
    #[error("{kind} is missing required field `{field}`")]
    MissingField { kind: &'static str, field: &'static str },
    #[error("{kind} has an invalid `{field}`: {message}")]
    InvalidField {
        kind: &'static str,
        field: &'static str,
        message: String,
    },
    #[error("{kind} has no valid `{field}`")]
    EmptyCollection { kind: &'static str, field: &'static str },
}

/// Why an action could not be dispatched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    #[error("no network connection")]
    Offline,
    #[error("required inputs are missing: {}", .0.join(", "))]
    MissingInputs(Vec<String>),
    #[error("an action for this component is already in flight")]
    InFlight,
    #[error("component has no action")]
    NoAction,
    #[error("component does not exist")]
    UnknownComponent,
}

/// Why an editable value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("component does not exist")]
    UnknownComponent,
    #[error("{0} does not accept this kind of value")]
    WrongKind(&'static str),
    #[error("text exceeds the maximum length of {0}")]
    TooLong(usize),
    #[error("date {0} is outside the allowed range")]
    OutOfRange(String),
    #[error("{0:?} is not one of the offered options")]
    UnknownOption(String),
}
