//! Arena-backed AST node definitions, flag types, and traversal helpers.

pub mod node;
pub mod queries;
pub mod syntax_kind;
pub mod types;
pub mod visit;

pub use node::{
    node_ref_eq, opt_array_ref_eq, opt_node_ref_eq, Node, NodeArray, NodeArrayOrVec, NodeData,
    NodeShape,
};
pub use syntax_kind::{text_to_keyword, SyntaxKind};
pub use types::{
    AutoGenerateInfo, EmitFlags, GeneratedIdentifierKind, ModifierFlags, NodeFlags, NodeId,
    OuterExpressionKinds, TransformFlags,
};
pub use visit::for_each_child;
