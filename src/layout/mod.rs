//! Layout engine: stacking, intrinsic measurement and tree-level frames.

pub mod engine;
pub mod measure;
pub mod stack;

pub use engine::{LayoutEngine, TreeLayout};
pub use measure::{measure_text, Measure};
pub use stack::{distribute_weights, layout_stack, Orientation, StackChild, StackLayout};
