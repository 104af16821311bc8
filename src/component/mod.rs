//! Component model: kinds, payloads, the arena tree and the JSON factory.

pub mod content;
pub mod factory;
pub mod kind;
pub mod node;
pub mod tree;
pub mod value;
pub mod view;

pub use content::ComponentContent;
pub use factory::{parse_component, ComponentFactory};
pub use kind::{ComponentKind, IconName};
pub use node::{ComponentNode, NodeId};
pub use tree::ComponentTree;
pub use value::FormValue;
pub use view::ComponentView;
