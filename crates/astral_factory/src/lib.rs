//! astral_factory: AST node synthesis for transforms.
//!
//! The `NodeFactory` owns node identity (ids, the synthesized flag, emit
//! metadata) and exposes one `create_*` constructor per node kind plus a
//! paired `update_*` that preserves structural sharing. Constructors wrap
//! children in parentheses wherever printing them bare would reparse
//! differently.

mod base;
mod emit_node;
mod factory;
mod parenthesizer;
mod precedence;

pub use base::NodeFactory;
pub use emit_node::{
    CommentKind, ConstantValue, EmitHelper, EmitNode, EmitNodeStore, SyntheticComment,
};
pub use precedence::{
    get_binary_operator_precedence, get_expression_associativity, get_expression_precedence,
    get_operator_associativity, get_operator_precedence_of_binary, Associativity,
    OperatorPrecedence,
};
