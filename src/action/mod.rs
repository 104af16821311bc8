//! Action model: typed actions decoded from current and legacy wire formats.

pub mod legacy;
pub mod model;
pub mod parse;

pub use model::{
    Action, ActionKind, ApiAction, ComponentViewAction, DataMap, DeepLinkAction, DisplayStyle,
    FinishAction, TreewalkAction, WebAction,
};
