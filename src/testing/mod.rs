//! Headless testing framework: Pilot, recording collaborators, snapshots.
//!
//! Use the [`Pilot`] to drive an [`App`](crate::app::App) without a host UI or
//! network. [`RecordingTransport`] and [`RecordingOpener`] stand in for the
//! collaborators and keep everything they were asked to do. Use
//! [`layout_to_string`] to capture a laid-out tree for snapshot assertions.

pub mod pilot;
pub mod recording;
pub mod snapshot;

pub use pilot::Pilot;
pub use recording::{RecordingOpener, RecordingTransport};
pub use snapshot::layout_to_string;
