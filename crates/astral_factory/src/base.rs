//! Node identity and synthesis core.
//!
//! Every node the factory produces funnels through `synthesize`, the single
//! allocation point: fresh id, synthesized range, synthesized flag. That
//! makes "was this node built by a transform" always decidable from the
//! flag, and gives the emit side table a stable identity to key on.

use std::cell::{Cell, RefCell};

use astral_core::arena::AstArena;
use astral_core::intern::StringInterner;
use astral_core::text::TextRange;
use astral_ast::node::{Node, NodeArray, NodeArrayOrVec, NodeData, NodeShape};
use astral_ast::syntax_kind::SyntaxKind;
use astral_ast::types::{ModifierFlags, NodeFlags, NodeId, TransformFlags};
use astral_ast::visit::for_each_child;
use rustc_hash::FxHashMap;

use crate::emit_node::EmitNodeStore;

/// Builds, clones, and updates AST nodes for one transform pipeline.
///
/// Single-threaded by construction (`Cell`/`RefCell` throughout); one
/// factory per file pipeline. The generated-name counter lives here rather
/// than in process-global state, so concurrent pipelines cannot collide.
pub struct NodeFactory<'a> {
    arena: &'a AstArena,
    interner: StringInterner,
    next_node_id: Cell<u32>,
    pub(crate) next_auto_generate_id: Cell<u32>,
    pub emit: EmitNodeStore<'a>,
    /// Memo for the `+`-operand literal-kind check. The original cached this
    /// on the node itself; an external table keeps synthesized nodes
    /// immutable after construction.
    pub(crate) plus_operand_literal_kinds: RefCell<FxHashMap<NodeId, SyntaxKind>>,
}

impl<'a> NodeFactory<'a> {
    pub fn new(arena: &'a AstArena, interner: StringInterner) -> Self {
        Self {
            arena,
            interner,
            next_node_id: Cell::new(0),
            next_auto_generate_id: Cell::new(0),
            emit: EmitNodeStore::new(),
            plus_operand_literal_kinds: RefCell::new(FxHashMap::default()),
        }
    }

    #[inline]
    pub fn arena(&self) -> &'a AstArena {
        self.arena
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    fn next_id(&self) -> NodeId {
        let id = self.next_node_id.get();
        self.next_node_id.set(id + 1);
        NodeId(id)
    }

    /// The single allocation point for every node the factory produces.
    pub(crate) fn synthesize(&self, kind: SyntaxKind, shape: NodeShape<'a>) -> &'a Node<'a> {
        let node = self.arena.alloc(Node {
            data: NodeData {
                kind,
                range: Cell::new(TextRange::SYNTHESIZED),
                flags: Cell::new(NodeFlags::SYNTHESIZED),
                modifier_flags: Cell::new(ModifierFlags::NONE),
                transform_flags: Cell::new(TransformFlags::NONE),
                id: self.next_id(),
                parent: Cell::new(None),
                original: Cell::new(None),
            },
            shape,
        });
        self.aggregate_transform_flags(node);
        node
    }

    /// Same, with node flags known up front (they feed transform-flag
    /// aggregation, e.g. block scoping on a declaration list).
    pub(crate) fn synthesize_with_flags(
        &self,
        kind: SyntaxKind,
        flags: NodeFlags,
        shape: NodeShape<'a>,
    ) -> &'a Node<'a> {
        let node = self.synthesize(kind, shape);
        if flags != NodeFlags::NONE {
            node.add_flags(flags);
            self.aggregate_transform_flags(node);
        }
        node
    }

    /// Same, with declaration modifiers.
    pub(crate) fn synthesize_with_modifiers(
        &self,
        kind: SyntaxKind,
        modifiers: ModifierFlags,
        shape: NodeShape<'a>,
    ) -> &'a Node<'a> {
        let node = self.synthesize(kind, shape);
        node.data.modifier_flags.set(modifiers);
        node
    }

    // ------------------------------------------------------------------
    // Node arrays
    // ------------------------------------------------------------------

    /// Normalize a child list into a `NodeArray`. Passing an existing array
    /// returns it unchanged, so list construction is idempotent.
    pub fn create_node_array(
        &self,
        elements: impl Into<NodeArrayOrVec<'a>>,
        has_trailing_comma: bool,
    ) -> &'a NodeArray<'a> {
        match elements.into() {
            NodeArrayOrVec::Array(array) => array,
            NodeArrayOrVec::Vec(elements) => {
                let elements = self.arena.alloc_vec(elements);
                self.arena.alloc(NodeArray {
                    elements,
                    range: Cell::new(TextRange::SYNTHESIZED),
                    has_trailing_comma,
                })
            }
        }
    }

    /// An empty `NodeArray` with a synthesized range.
    pub fn empty_node_array(&self) -> &'a NodeArray<'a> {
        self.create_node_array(Vec::new(), false)
    }

    // ------------------------------------------------------------------
    // Clones
    // ------------------------------------------------------------------

    /// New node of the same kind with every payload field copied, fresh id,
    /// synthesized-or-not carried forward, and `original` pointing at the
    /// source. Used when a transform needs "the same node but mine".
    pub fn clone_shallow(&self, node: &'a Node<'a>) -> &'a Node<'a> {
        let clone = self.synthesize(node.kind(), node.shape);
        clone.set_flags(node.flags() | NodeFlags::SYNTHESIZED);
        clone.data.modifier_flags.set(node.modifier_flags());
        clone.data.original.set(Some(node));
        self.aggregate_transform_flags(clone);
        clone
    }

    /// Shallow clone plus position range and parent, for in-place mutation
    /// of a parsed node without corrupting the original.
    pub fn get_mutable_clone(&self, node: &'a Node<'a>) -> &'a Node<'a> {
        let clone = self.clone_shallow(node);
        clone.set_range(node.range());
        clone.set_parent(node.parent());
        clone
    }

    // ------------------------------------------------------------------
    // Original tracking and updates
    // ------------------------------------------------------------------

    /// Point `node` at the node it was synthesized from, folding the
    /// original's emit metadata into the node's own (never dropping either
    /// side's entries).
    pub fn set_original_node(
        &self,
        node: &'a Node<'a>,
        original: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        node.data.original.set(original);
        if let Some(original) = original {
            if self.emit.has_emit_node(original) {
                self.emit.merge_emit_info(original, node);
            }
        }
        node
    }

    /// Finish an update operation once a rebuilt node exists: inherit the
    /// original's identity, range, formatting hint, and emit metadata, then
    /// re-aggregate transform flags from the new children. Reference-equal
    /// input is a no-op fast path.
    pub fn update(&self, updated: &'a Node<'a>, original: &'a Node<'a>) -> &'a Node<'a> {
        if std::ptr::eq(updated, original) {
            return updated;
        }
        self.set_original_node(updated, Some(original));
        updated.set_range(original.range());
        if let Some(hint) = self.emit.get_starts_on_new_line(original) {
            self.emit.set_starts_on_new_line(updated, hint);
        }
        self.aggregate_transform_flags(updated);
        updated
    }

    // ------------------------------------------------------------------
    // Transform flags
    // ------------------------------------------------------------------

    /// Recompute a node's transform flags from its own facts plus its
    /// direct children, applying the kind's propagation boundary.
    pub fn aggregate_transform_flags(&self, node: &'a Node<'a>) {
        let mut flags = own_transform_flags(node);
        for_each_child(node, &mut |child| flags |= child.transform_flags());
        node.data
            .transform_flags
            .set(flags - boundary_excludes(node.kind()));
    }
}

/// Facts a node contributes by itself, independent of its children.
fn own_transform_flags(node: &Node<'_>) -> TransformFlags {
    match node.kind() {
        SyntaxKind::ThisKeyword => TransformFlags::CONTAINS_LEXICAL_THIS,
        SyntaxKind::SpreadElement => TransformFlags::CONTAINS_SPREAD,
        SyntaxKind::SpreadAssignment => TransformFlags::CONTAINS_OBJECT_REST_OR_SPREAD,
        SyntaxKind::YieldExpression => TransformFlags::CONTAINS_YIELD,
        SyntaxKind::AwaitExpression => TransformFlags::CONTAINS_AWAIT,
        SyntaxKind::ComputedPropertyName => TransformFlags::CONTAINS_COMPUTED_PROPERTY_NAME,
        SyntaxKind::ObjectBindingPattern => {
            let mut flags = TransformFlags::CONTAINS_DESTRUCTURING;
            if let NodeShape::ObjectBindingPattern(pattern) = &node.shape {
                let has_rest = pattern.elements.iter().any(|element| {
                    matches!(
                        &element.shape,
                        NodeShape::BindingElement(binding) if binding.dot_dot_dot_token.is_some()
                    )
                });
                if has_rest {
                    flags |= TransformFlags::CONTAINS_OBJECT_REST_OR_SPREAD;
                }
            }
            flags
        }
        SyntaxKind::ArrayBindingPattern => TransformFlags::CONTAINS_DESTRUCTURING,
        SyntaxKind::VariableDeclarationList => {
            if node.flags().intersects(NodeFlags::BLOCK_SCOPED) {
                TransformFlags::CONTAINS_BLOCK_SCOPED_BINDING
            } else {
                TransformFlags::NONE
            }
        }
        SyntaxKind::Identifier if node.is_generated_identifier() => {
            TransformFlags::CONTAINS_GENERATED_IDENTIFIER
        }
        _ => TransformFlags::NONE,
    }
}

/// Child facts that must not escape this kind of node. Arrows stay
/// transparent to lexical `this`; other function-like boundaries absorb it
/// along with yield/await and block-scoped bindings.
fn boundary_excludes(kind: SyntaxKind) -> TransformFlags {
    match kind {
        SyntaxKind::ArrowFunction => TransformFlags::ARROW_FUNCTION_EXCLUDES,
        SyntaxKind::FunctionExpression
        | SyntaxKind::FunctionDeclaration
        | SyntaxKind::MethodDeclaration
        | SyntaxKind::Constructor
        | SyntaxKind::GetAccessor
        | SyntaxKind::SetAccessor
        | SyntaxKind::ClassStaticBlockDeclaration => TransformFlags::FUNCTION_EXCLUDES,
        SyntaxKind::ClassDeclaration | SyntaxKind::ClassExpression => {
            TransformFlags::CLASS_EXCLUDES
        }
        SyntaxKind::ModuleDeclaration | SyntaxKind::SourceFile => TransformFlags::MODULE_EXCLUDES,
        _ => TransformFlags::NONE,
    }
}
