//! # chat-components
//!
//! The core of a server-driven chat widget: JSON component documents decoded
//! into a typed tree, a style cascade, a stacking layout engine and an action
//! model with a dispatcher.
//!
//! ## Core Systems
//!
//! - **[`style`]**: value tokenizer, style record, property coercion, class cascade
//! - **[`component`]**: slotmap-backed component tree, factory, form values
//! - **[`layout`]**: measure providers and the linear stacking engine
//! - **[`action`]**: typed actions decoded from current and legacy payloads
//! - **[`dispatch`]**: preconditions, routing, completion and navigation
//! - **[`screen`]**: one rendered view with in-flight tracking
//! - **[`app`]**: screen stack tying dispatch and navigation together
//! - **[`testing`]**: headless Pilot, recording collaborators, snapshots
//! - **[`geometry`]**: Point, Size, Rect, Insets primitives

// Foundation
pub mod config;
pub mod error;
pub mod geometry;

// Core systems
pub mod action;
pub mod component;
pub mod layout;
pub mod style;

// Dispatch
pub mod dispatch;

// Application
pub mod app;
pub mod screen;

// Headless testing support
pub mod testing;

pub use action::{Action, ActionKind, DataMap};
pub use app::App;
pub use component::{ComponentTree, ComponentView, FormValue, NodeId};
pub use config::Config;
pub use dispatch::{ActionDispatcher, ActionResponse, DispatchContext, DispatchOutcome};
pub use error::{DispatchError, ParseError, ValueError};
pub use layout::{LayoutEngine, TreeLayout};
pub use screen::Screen;
pub use style::{ComponentStyle, StyleClassTable};
