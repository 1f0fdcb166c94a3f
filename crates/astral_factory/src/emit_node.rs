//! Out-of-band emit metadata.
//!
//! Transform passes annotate nodes with printer-only facts (emit flags,
//! synthetic comments, range overrides, helper requests). These never live on
//! the node itself: they sit in a side table keyed by `NodeId`, created
//! lazily on first annotation and torn down explicitly when a file leaves the
//! transform pipeline.

use std::cell::RefCell;

use astral_core::debug;
use astral_core::text::TextRange;
use astral_ast::node::Node;
use astral_ast::queries::get_parse_tree_node;
use astral_ast::syntax_kind::SyntaxKind;
use astral_ast::types::{EmitFlags, NodeId};
use rustc_hash::FxHashMap;

/// A comment that exists only in the synthesized tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticComment {
    pub kind: CommentKind,
    pub text: String,
    pub has_trailing_new_line: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    SingleLine,
    MultiLine,
}

/// A runtime helper snippet requested by a transform.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitHelper {
    pub name: String,
    /// Scoped helpers are emitted inline; unscoped ones come from the shared
    /// helpers module when `import_helpers` is on.
    pub scoped: bool,
    pub text: String,
}

/// A constant-folded value for a property or element access.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Number(f64),
    String(String),
}

/// Per-node emit metadata record.
#[derive(Debug)]
pub struct EmitNode<'a> {
    pub flags: EmitFlags,
    pub leading_comments: Vec<SyntheticComment>,
    pub trailing_comments: Vec<SyntheticComment>,
    pub comment_range: Option<TextRange>,
    pub source_map_range: Option<TextRange>,
    pub token_source_map_ranges: FxHashMap<SyntaxKind, TextRange>,
    pub constant_value: Option<ConstantValue>,
    pub helpers: Vec<EmitHelper>,
    pub starts_on_new_line: Option<bool>,
    /// Only populated on a source file root: every parse tree node in the
    /// file that has an entry, recorded for teardown.
    pub annotated_nodes: Vec<&'a Node<'a>>,
    /// Only meaningful on a source file root.
    pub external_helpers_module_name: Option<&'a Node<'a>>,
}

impl Default for EmitNode<'_> {
    fn default() -> Self {
        Self {
            flags: EmitFlags::NONE,
            leading_comments: Vec::new(),
            trailing_comments: Vec::new(),
            comment_range: None,
            source_map_range: None,
            token_source_map_ranges: FxHashMap::default(),
            constant_value: None,
            helpers: Vec::new(),
            starts_on_new_line: None,
            annotated_nodes: Vec::new(),
            external_helpers_module_name: None,
        }
    }
}

/// Side table associating `EmitNode` records with nodes.
#[derive(Debug, Default)]
pub struct EmitNodeStore<'a> {
    entries: RefCell<FxHashMap<NodeId, EmitNode<'a>>>,
}

/// The source file that owns a parse tree node, found through parent links.
fn source_file_of<'a>(node: &'a Node<'a>) -> Option<&'a Node<'a>> {
    let mut current = node;
    loop {
        if current.kind() == SyntaxKind::SourceFile {
            return Some(current);
        }
        current = current.parent()?;
    }
}

impl<'a> EmitNodeStore<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` over the node's record, creating it first if needed.
    ///
    /// A parse tree node getting its first record is also registered in its
    /// source file root's `annotated_nodes`, so disposal can find it later.
    pub fn with_emit_node<R>(
        &self,
        node: &'a Node<'a>,
        f: impl FnOnce(&mut EmitNode<'a>) -> R,
    ) -> R {
        let mut entries = self.entries.borrow_mut();
        if !entries.contains_key(&node.id()) && node.is_parse_tree_node() {
            if node.kind() != SyntaxKind::SourceFile {
                match source_file_of(node) {
                    Some(file) => {
                        entries.entry(file.id()).or_default().annotated_nodes.push(node);
                    }
                    None => debug::fail("node is not part of a source file"),
                }
            }
        }
        f(entries.entry(node.id()).or_default())
    }

    fn read<R>(&self, node: &Node<'a>, f: impl FnOnce(&EmitNode<'a>) -> R) -> Option<R> {
        self.entries.borrow().get(&node.id()).map(f)
    }

    // ------------------------------------------------------------------
    // Read-only accessors (printer-facing)
    // ------------------------------------------------------------------

    pub fn get_emit_flags(&self, node: &Node<'a>) -> EmitFlags {
        self.read(node, |emit| emit.flags).unwrap_or(EmitFlags::NONE)
    }

    /// Override range for source maps; falls back to the node's own range.
    pub fn get_source_map_range(&self, node: &Node<'a>) -> TextRange {
        self.read(node, |emit| emit.source_map_range)
            .flatten()
            .unwrap_or_else(|| node.range())
    }

    pub fn get_comment_range(&self, node: &Node<'a>) -> TextRange {
        self.read(node, |emit| emit.comment_range)
            .flatten()
            .unwrap_or_else(|| node.range())
    }

    pub fn get_token_source_map_range(
        &self,
        node: &Node<'a>,
        token: SyntaxKind,
    ) -> Option<TextRange> {
        self.read(node, |emit| emit.token_source_map_ranges.get(&token).copied())
            .flatten()
    }

    pub fn get_constant_value(&self, node: &Node<'a>) -> Option<ConstantValue> {
        self.read(node, |emit| emit.constant_value.clone()).flatten()
    }

    pub fn get_synthetic_leading_comments(&self, node: &Node<'a>) -> Vec<SyntheticComment> {
        self.read(node, |emit| emit.leading_comments.clone())
            .unwrap_or_default()
    }

    pub fn get_synthetic_trailing_comments(&self, node: &Node<'a>) -> Vec<SyntheticComment> {
        self.read(node, |emit| emit.trailing_comments.clone())
            .unwrap_or_default()
    }

    pub fn get_emit_helpers(&self, node: &Node<'a>) -> Vec<EmitHelper> {
        self.read(node, |emit| emit.helpers.clone()).unwrap_or_default()
    }

    pub fn get_starts_on_new_line(&self, node: &Node<'a>) -> Option<bool> {
        self.read(node, |emit| emit.starts_on_new_line).flatten()
    }

    pub fn get_external_helpers_module_name(&self, node: &Node<'a>) -> Option<&'a Node<'a>> {
        self.read(node, |emit| emit.external_helpers_module_name)
            .flatten()
    }

    /// Whether the node has any record at all.
    pub fn has_emit_node(&self, node: &Node<'a>) -> bool {
        self.entries.borrow().contains_key(&node.id())
    }

    // ------------------------------------------------------------------
    // Writers (transform-facing)
    // ------------------------------------------------------------------

    pub fn set_emit_flags(&self, node: &'a Node<'a>, flags: EmitFlags) {
        self.with_emit_node(node, |emit| emit.flags = flags);
    }

    pub fn add_emit_flags(&self, node: &'a Node<'a>, flags: EmitFlags) {
        self.with_emit_node(node, |emit| emit.flags |= flags);
    }

    pub fn set_source_map_range(&self, node: &'a Node<'a>, range: Option<TextRange>) {
        self.with_emit_node(node, |emit| emit.source_map_range = range);
    }

    pub fn set_token_source_map_range(
        &self,
        node: &'a Node<'a>,
        token: SyntaxKind,
        range: TextRange,
    ) {
        self.with_emit_node(node, |emit| {
            emit.token_source_map_ranges.insert(token, range);
        });
    }

    pub fn set_comment_range(&self, node: &'a Node<'a>, range: TextRange) {
        self.with_emit_node(node, |emit| emit.comment_range = Some(range));
    }

    pub fn add_synthetic_leading_comment(&self, node: &'a Node<'a>, comment: SyntheticComment) {
        self.with_emit_node(node, |emit| emit.leading_comments.push(comment));
    }

    pub fn add_synthetic_trailing_comment(&self, node: &'a Node<'a>, comment: SyntheticComment) {
        self.with_emit_node(node, |emit| emit.trailing_comments.push(comment));
    }

    pub fn set_constant_value(&self, node: &'a Node<'a>, value: ConstantValue) {
        self.with_emit_node(node, |emit| emit.constant_value = Some(value));
    }

    pub fn add_emit_helper(&self, node: &'a Node<'a>, helper: EmitHelper) {
        self.with_emit_node(node, |emit| {
            if !emit.helpers.iter().any(|existing| existing.name == helper.name) {
                emit.helpers.push(helper);
            }
        });
    }

    pub fn add_emit_helpers(&self, node: &'a Node<'a>, helpers: Vec<EmitHelper>) {
        for helper in helpers {
            self.add_emit_helper(node, helper);
        }
    }

    /// Move every helper from `source` onto `target`.
    pub fn move_emit_helpers(&self, source: &'a Node<'a>, target: &'a Node<'a>) {
        let moved = self.with_emit_node(source, |emit| std::mem::take(&mut emit.helpers));
        self.add_emit_helpers(target, moved);
    }

    pub fn set_starts_on_new_line(&self, node: &'a Node<'a>, value: bool) {
        self.with_emit_node(node, |emit| emit.starts_on_new_line = Some(value));
    }

    pub fn set_external_helpers_module_name(&self, node: &'a Node<'a>, name: &'a Node<'a>) {
        self.with_emit_node(node, |emit| emit.external_helpers_module_name = Some(name));
    }

    // ------------------------------------------------------------------
    // Merge and teardown
    // ------------------------------------------------------------------

    /// Fold `source`'s record into `dest`'s when a synthesized node inherits
    /// metadata from the node it replaces. Nothing is silently dropped:
    /// flags are OR-ed, comments are ordered source-then-destination,
    /// single-valued ranges are overwritten per-field by the source, and
    /// helpers append with name dedup.
    pub fn merge_emit_info(&self, source: &'a Node<'a>, dest: &'a Node<'a>) {
        let taken = {
            let entries = self.entries.borrow();
            match entries.get(&source.id()) {
                Some(emit) => (
                    emit.flags,
                    emit.leading_comments.clone(),
                    emit.trailing_comments.clone(),
                    emit.comment_range,
                    emit.source_map_range,
                    emit.token_source_map_ranges.clone(),
                    emit.constant_value.clone(),
                    emit.helpers.clone(),
                    emit.starts_on_new_line,
                ),
                None => return,
            }
        };
        let (
            flags,
            leading,
            trailing,
            comment_range,
            source_map_range,
            token_ranges,
            constant_value,
            helpers,
            starts_on_new_line,
        ) = taken;
        self.with_emit_node(dest, |emit| {
            emit.flags |= flags;
            if !leading.is_empty() {
                let mut combined = leading;
                combined.append(&mut emit.leading_comments);
                emit.leading_comments = combined;
            }
            if !trailing.is_empty() {
                let mut combined = trailing;
                combined.append(&mut emit.trailing_comments);
                emit.trailing_comments = combined;
            }
            if comment_range.is_some() {
                emit.comment_range = comment_range;
            }
            if source_map_range.is_some() {
                emit.source_map_range = source_map_range;
            }
            for (token, range) in token_ranges {
                emit.token_source_map_ranges.insert(token, range);
            }
            if constant_value.is_some() {
                emit.constant_value = constant_value;
            }
            for helper in helpers {
                if !emit.helpers.iter().any(|existing| existing.name == helper.name) {
                    emit.helpers.push(helper);
                }
            }
            if starts_on_new_line.is_some() {
                emit.starts_on_new_line = starts_on_new_line;
            }
        });
    }

    /// Discard all emit metadata recorded for a file once it leaves the
    /// active transform pipeline. Explicit teardown, not drop-driven: parse
    /// tree nodes outlive transform phases and must not keep stale
    /// annotations into the next one.
    pub fn dispose_emit_nodes(&self, source_file: &'a Node<'a>) {
        let root = match get_parse_tree_node(source_file) {
            Some(root) if root.kind() == SyntaxKind::SourceFile => root,
            _ => return,
        };
        let mut entries = self.entries.borrow_mut();
        if let Some(root_emit) = entries.remove(&root.id()) {
            for node in root_emit.annotated_nodes {
                entries.remove(&node.id());
            }
        }
    }
}
