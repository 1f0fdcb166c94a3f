//! AST node definitions.
//!
//! Every node is an arena-allocated `Node` pairing shared metadata
//! (`NodeData`) with a kind-specific payload (`NodeShape`). Children are
//! plain `&'a Node<'a>` references, so structural sharing falls out of
//! reference equality: an update that changes nothing returns the same
//! pointer.
//!
//! Metadata that must change after construction (positions, flags, parent,
//! original pointer) lives in `Cell`s; the payload itself is immutable once
//! built.

use std::cell::Cell;

use astral_core::intern::InternedString;
use astral_core::text::TextRange;

use crate::syntax_kind::SyntaxKind;
use crate::types::*;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all AST nodes.
#[derive(Debug)]
pub struct NodeData<'a> {
    /// The kind of this node.
    pub kind: SyntaxKind,
    /// Source position range. Synthesized nodes use `TextRange::SYNTHESIZED`.
    pub range: Cell<TextRange>,
    /// Node flags.
    pub flags: Cell<NodeFlags>,
    /// Modifier flags (for declarations).
    pub modifier_flags: Cell<ModifierFlags>,
    /// Aggregated subtree facts, maintained bottom-up by the factory.
    pub transform_flags: Cell<TransformFlags>,
    /// Factory-unique ID, used to key side tables.
    pub id: NodeId,
    /// Parent pointer, set lazily by whoever assembles trees.
    pub parent: Cell<Option<&'a Node<'a>>>,
    /// The node this one was synthesized from, if any.
    pub original: Cell<Option<&'a Node<'a>>>,
}

/// An AST node: shared metadata plus the kind-specific payload.
#[derive(Debug)]
pub struct Node<'a> {
    pub data: NodeData<'a>,
    pub shape: NodeShape<'a>,
}

impl<'a> Node<'a> {
    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data.kind
    }

    #[inline]
    pub fn range(&self) -> TextRange {
        self.data.range.get()
    }

    #[inline]
    pub fn pos(&self) -> i32 {
        self.data.range.get().pos
    }

    #[inline]
    pub fn end(&self) -> i32 {
        self.data.range.get().end
    }

    #[inline]
    pub fn set_range(&self, range: TextRange) {
        self.data.range.set(range);
    }

    #[inline]
    pub fn flags(&self) -> NodeFlags {
        self.data.flags.get()
    }

    #[inline]
    pub fn set_flags(&self, flags: NodeFlags) {
        self.data.flags.set(flags);
    }

    #[inline]
    pub fn add_flags(&self, flags: NodeFlags) {
        self.data.flags.set(self.data.flags.get() | flags);
    }

    #[inline]
    pub fn modifier_flags(&self) -> ModifierFlags {
        self.data.modifier_flags.get()
    }

    #[inline]
    pub fn transform_flags(&self) -> TransformFlags {
        self.data.transform_flags.get()
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.data.id
    }

    #[inline]
    pub fn parent(&self) -> Option<&'a Node<'a>> {
        self.data.parent.get()
    }

    #[inline]
    pub fn set_parent(&self, parent: Option<&'a Node<'a>>) {
        self.data.parent.set(parent);
    }

    #[inline]
    pub fn original(&self) -> Option<&'a Node<'a>> {
        self.data.original.get()
    }

    /// Whether this node was produced by a factory rather than a parser.
    #[inline]
    pub fn is_synthesized(&self) -> bool {
        self.data.flags.get().contains(NodeFlags::SYNTHESIZED)
    }

    /// Whether this node came from a parse (no SYNTHESIZED flag anywhere in
    /// its original chain is not checked here; this is the direct test).
    #[inline]
    pub fn is_parse_tree_node(&self) -> bool {
        !self.is_synthesized()
    }

    pub fn as_identifier(&self) -> Option<&Identifier> {
        match &self.shape {
            NodeShape::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    /// Interned text of an identifier or private identifier.
    pub fn identifier_text(&self) -> Option<InternedString> {
        match &self.shape {
            NodeShape::Identifier(ident) => Some(ident.text),
            NodeShape::PrivateIdentifier(ident) => Some(ident.text),
            _ => None,
        }
    }

    /// Interned text of any literal-like node (string, numeric, template
    /// fragment, ...).
    pub fn literal_text(&self) -> Option<InternedString> {
        match &self.shape {
            NodeShape::StringLiteral(lit) => Some(lit.text),
            NodeShape::NumericLiteral(lit) => Some(lit.text),
            NodeShape::BigIntLiteral(lit) => Some(lit.text),
            NodeShape::RegularExpressionLiteral(lit) => Some(lit.text),
            NodeShape::TemplateLiteralFragment(lit) => Some(lit.text),
            NodeShape::JsxText(lit) => Some(lit.text),
            _ => None,
        }
    }

    /// Generation info if this is a generated identifier or private name.
    pub fn auto_generate(&self) -> Option<AutoGenerateInfo> {
        match &self.shape {
            NodeShape::Identifier(ident) => ident.auto_generate,
            NodeShape::PrivateIdentifier(ident) => ident.auto_generate,
            _ => None,
        }
    }

    #[inline]
    pub fn is_generated_identifier(&self) -> bool {
        matches!(&self.shape, NodeShape::Identifier(ident) if ident.auto_generate.is_some())
    }
}

/// Reference equality for nodes. Update methods use this to decide whether a
/// rebuilt node may be elided in favor of the original.
#[inline]
pub fn node_ref_eq<'a>(a: &'a Node<'a>, b: &'a Node<'a>) -> bool {
    std::ptr::eq(a, b)
}

#[inline]
pub fn opt_node_ref_eq<'a>(a: Option<&'a Node<'a>>, b: Option<&'a Node<'a>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => std::ptr::eq(a, b),
        _ => false,
    }
}

// ============================================================================
// Node Arrays
// ============================================================================

/// A delimited list of child nodes with its own source range.
#[derive(Debug)]
pub struct NodeArray<'a> {
    pub elements: &'a [&'a Node<'a>],
    pub range: Cell<TextRange>,
    pub has_trailing_comma: bool,
}

impl<'a> NodeArray<'a> {
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, &'a Node<'a>> {
        self.elements.iter()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&'a Node<'a>> {
        self.elements.get(index).copied()
    }

    /// Element-wise reference equality against another array.
    pub fn ref_eq(&self, other: &NodeArray<'a>) -> bool {
        std::ptr::eq(self.elements, other.elements)
            || (self.elements.len() == other.elements.len()
                && self
                    .elements
                    .iter()
                    .zip(other.elements.iter())
                    .all(|(a, b)| std::ptr::eq(*a, *b)))
    }
}

impl<'a> std::ops::Index<usize> for NodeArray<'a> {
    type Output = &'a Node<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<'a, 'b> IntoIterator for &'b NodeArray<'a> {
    type Item = &'b &'a Node<'a>;
    type IntoIter = std::slice::Iter<'b, &'a Node<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

pub fn opt_array_ref_eq<'a>(a: Option<&'a NodeArray<'a>>, b: Option<&'a NodeArray<'a>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.ref_eq(b),
        _ => false,
    }
}

/// Input to `NodeFactory::create_node_array`: either an already-built array
/// (returned unchanged, keeping list construction idempotent) or a fresh
/// vector of elements.
pub enum NodeArrayOrVec<'a> {
    Array(&'a NodeArray<'a>),
    Vec(Vec<&'a Node<'a>>),
}

impl<'a> From<&'a NodeArray<'a>> for NodeArrayOrVec<'a> {
    fn from(array: &'a NodeArray<'a>) -> Self {
        NodeArrayOrVec::Array(array)
    }
}

impl<'a> From<Vec<&'a Node<'a>>> for NodeArrayOrVec<'a> {
    fn from(elements: Vec<&'a Node<'a>>) -> Self {
        NodeArrayOrVec::Vec(elements)
    }
}

// ============================================================================
// Node Shapes
// ============================================================================

/// Kind-specific payload. One variant covers one payload layout; a few
/// variants serve several closely-related kinds (distinguished by
/// `NodeData::kind`), e.g. `CompositeType` for union and intersection types.
#[derive(Debug, Clone, Copy)]
pub enum NodeShape<'a> {
    /// Kinds with no payload beyond `NodeData`: punctuation and keyword
    /// tokens, keyword type nodes, `this`/`super`/`null`/`true`/`false`
    /// expressions, omitted expressions, empty/debugger/not-emitted
    /// statements, semicolon class elements, JSX fragment brackets, and the
    /// end-of-file token.
    Token,

    // Literals
    NumericLiteral(NumericLiteral),
    BigIntLiteral(BigIntLiteral),
    StringLiteral(StringLiteral<'a>),
    RegularExpressionLiteral(RegularExpressionLiteral),
    /// Template head/middle/tail and no-substitution template literals.
    TemplateLiteralFragment(TemplateLiteralFragment),

    // Identifiers and names
    Identifier(Identifier),
    PrivateIdentifier(PrivateIdentifier),
    QualifiedName(QualifiedName<'a>),
    ComputedPropertyName(ComputedPropertyName<'a>),

    // Signature elements
    TypeParameter(TypeParameterDeclaration<'a>),
    Parameter(ParameterDeclaration<'a>),
    Decorator(Decorator<'a>),

    // Type members
    PropertySignature(PropertySignature<'a>),
    PropertyDeclaration(PropertyDeclaration<'a>),
    MethodSignature(MethodSignature<'a>),
    MethodDeclaration(MethodDeclaration<'a>),
    ClassStaticBlockDeclaration(ClassStaticBlockDeclaration<'a>),
    ConstructorDeclaration(ConstructorDeclaration<'a>),
    /// Get and set accessors.
    AccessorDeclaration(AccessorDeclaration<'a>),
    /// Call and construct signatures.
    SignatureDeclaration(SignatureDeclaration<'a>),
    IndexSignature(IndexSignature<'a>),

    // Type nodes
    TypePredicate(TypePredicate<'a>),
    TypeReference(TypeReference<'a>),
    /// Function and constructor types.
    FunctionTypeLike(FunctionTypeLike<'a>),
    TypeQuery(TypeQuery<'a>),
    TypeLiteral(TypeLiteral<'a>),
    ArrayType(ArrayType<'a>),
    TupleType(TupleType<'a>),
    /// Optional, rest, and parenthesized types.
    WrappedType(WrappedType<'a>),
    /// Union and intersection types.
    CompositeType(CompositeType<'a>),
    ConditionalType(ConditionalType<'a>),
    InferType(InferType<'a>),
    TypeOperator(TypeOperator<'a>),
    IndexedAccessType(IndexedAccessType<'a>),
    MappedType(MappedType<'a>),
    LiteralType(LiteralType<'a>),
    NamedTupleMember(NamedTupleMember<'a>),
    TemplateLiteralType(TemplateLiteralType<'a>),
    TemplateLiteralTypeSpan(TemplateLiteralTypeSpan<'a>),
    ImportType(ImportType<'a>),
    ExpressionWithTypeArguments(ExpressionWithTypeArguments<'a>),

    // Binding patterns
    ObjectBindingPattern(ObjectBindingPattern<'a>),
    ArrayBindingPattern(ArrayBindingPattern<'a>),
    BindingElement(BindingElement<'a>),

    // Expressions
    ArrayLiteralExpression(ArrayLiteralExpression<'a>),
    ObjectLiteralExpression(ObjectLiteralExpression<'a>),
    PropertyAccessExpression(PropertyAccessExpression<'a>),
    ElementAccessExpression(ElementAccessExpression<'a>),
    CallExpression(CallExpression<'a>),
    NewExpression(NewExpression<'a>),
    TaggedTemplateExpression(TaggedTemplateExpression<'a>),
    TypeAssertionExpression(TypeAssertionExpression<'a>),
    ParenthesizedExpression(ParenthesizedExpression<'a>),
    FunctionExpression(FunctionExpression<'a>),
    ArrowFunction(ArrowFunction<'a>),
    /// `delete`, `typeof`, `void`, and `await` expressions.
    SimpleUnaryExpression(SimpleUnaryExpression<'a>),
    PrefixUnaryExpression(PrefixUnaryExpression<'a>),
    PostfixUnaryExpression(PostfixUnaryExpression<'a>),
    BinaryExpression(BinaryExpression<'a>),
    ConditionalExpression(ConditionalExpression<'a>),
    TemplateExpression(TemplateExpression<'a>),
    TemplateSpan(TemplateSpan<'a>),
    YieldExpression(YieldExpression<'a>),
    SpreadElement(SpreadElement<'a>),
    /// Class declarations and class expressions.
    ClassLikeDeclaration(ClassLikeDeclaration<'a>),
    AsExpression(AsExpression<'a>),
    NonNullExpression(NonNullExpression<'a>),
    MetaProperty(MetaProperty<'a>),
    SatisfiesExpression(SatisfiesExpression<'a>),
    PartiallyEmittedExpression(PartiallyEmittedExpression<'a>),
    CommaListExpression(CommaListExpression<'a>),

    // Statements
    Block(Block<'a>),
    VariableStatement(VariableStatement<'a>),
    ExpressionStatement(ExpressionStatement<'a>),
    IfStatement(IfStatement<'a>),
    DoStatement(DoStatement<'a>),
    WhileStatement(WhileStatement<'a>),
    ForStatement(ForStatement<'a>),
    ForInStatement(ForInStatement<'a>),
    ForOfStatement(ForOfStatement<'a>),
    /// `break` and `continue` statements.
    BreakOrContinueStatement(BreakOrContinueStatement<'a>),
    ReturnStatement(ReturnStatement<'a>),
    WithStatement(WithStatement<'a>),
    SwitchStatement(SwitchStatement<'a>),
    LabeledStatement(LabeledStatement<'a>),
    ThrowStatement(ThrowStatement<'a>),
    TryStatement(TryStatement<'a>),

    // Declarations
    VariableDeclaration(VariableDeclaration<'a>),
    VariableDeclarationList(VariableDeclarationList<'a>),
    FunctionDeclaration(FunctionDeclaration<'a>),
    InterfaceDeclaration(InterfaceDeclaration<'a>),
    TypeAliasDeclaration(TypeAliasDeclaration<'a>),
    EnumDeclaration(EnumDeclaration<'a>),
    ModuleDeclaration(ModuleDeclaration<'a>),
    ModuleBlock(ModuleBlock<'a>),
    CaseBlock(CaseBlock<'a>),

    // Module surface
    ImportEqualsDeclaration(ImportEqualsDeclaration<'a>),
    ImportDeclaration(ImportDeclaration<'a>),
    ImportClause(ImportClause<'a>),
    NamespaceImport(NamespaceImport<'a>),
    NamespaceExport(NamespaceExport<'a>),
    /// Named imports and named exports.
    NamedImportsOrExports(NamedImportsOrExports<'a>),
    /// Import and export specifiers.
    ImportOrExportSpecifier(ImportOrExportSpecifier<'a>),
    ExportAssignment(ExportAssignment<'a>),
    ExportDeclaration(ExportDeclaration<'a>),
    ExternalModuleReference(ExternalModuleReference<'a>),
    ImportAttributes(ImportAttributes<'a>),
    ImportAttribute(ImportAttribute<'a>),

    // JSX
    JsxElement(JsxElement<'a>),
    JsxSelfClosingElement(JsxSelfClosingElement<'a>),
    JsxOpeningElement(JsxOpeningElement<'a>),
    JsxClosingElement(JsxClosingElement<'a>),
    JsxFragment(JsxFragment<'a>),
    JsxText(JsxText),
    JsxAttribute(JsxAttribute<'a>),
    JsxAttributes(JsxAttributes<'a>),
    JsxSpreadAttribute(JsxSpreadAttribute<'a>),
    JsxExpression(JsxExpression<'a>),

    // Clauses
    CaseClause(CaseClause<'a>),
    DefaultClause(DefaultClause<'a>),
    HeritageClause(HeritageClause<'a>),
    CatchClause(CatchClause<'a>),

    // Object literal members
    PropertyAssignment(PropertyAssignment<'a>),
    ShorthandPropertyAssignment(ShorthandPropertyAssignment<'a>),
    SpreadAssignment(SpreadAssignment<'a>),

    // Enum
    EnumMember(EnumMember<'a>),

    // Top-level
    SourceFile(SourceFile<'a>),
}

// ============================================================================
// Literals
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct NumericLiteral {
    pub text: InternedString,
}

#[derive(Debug, Clone, Copy)]
pub struct BigIntLiteral {
    /// Text without the trailing `n`.
    pub text: InternedString,
}

#[derive(Debug, Clone, Copy)]
pub struct StringLiteral<'a> {
    pub text: InternedString,
    pub single_quote: bool,
    /// When the literal was synthesized from an identifier or another
    /// literal, the emitter copies that node's escaping.
    pub text_source: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct RegularExpressionLiteral {
    pub text: InternedString,
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateLiteralFragment {
    /// Cooked text.
    pub text: InternedString,
    /// Raw text, when it differs from what re-escaping the cooked text would
    /// produce.
    pub raw_text: Option<InternedString>,
}

// ============================================================================
// Identifiers and Names
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Identifier {
    pub text: InternedString,
    /// Keyword kind if the text spells a keyword.
    pub original_keyword_kind: Option<SyntaxKind>,
    /// Present iff this identifier's final name is produced at emit time.
    pub auto_generate: Option<AutoGenerateInfo>,
}

#[derive(Debug, Clone, Copy)]
pub struct PrivateIdentifier {
    /// Includes the leading `#`.
    pub text: InternedString,
    pub auto_generate: Option<AutoGenerateInfo>,
}

#[derive(Debug, Clone, Copy)]
pub struct QualifiedName<'a> {
    pub left: &'a Node<'a>,
    pub right: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ComputedPropertyName<'a> {
    pub expression: &'a Node<'a>,
}

// ============================================================================
// Signature Elements
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct TypeParameterDeclaration<'a> {
    pub name: &'a Node<'a>,
    pub constraint: Option<&'a Node<'a>>,
    pub default: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ParameterDeclaration<'a> {
    pub dot_dot_dot_token: Option<&'a Node<'a>>,
    pub name: &'a Node<'a>,
    pub question_token: Option<&'a Node<'a>>,
    pub type_node: Option<&'a Node<'a>>,
    pub initializer: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct Decorator<'a> {
    pub expression: &'a Node<'a>,
}

// ============================================================================
// Type Members
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct PropertySignature<'a> {
    pub name: &'a Node<'a>,
    pub question_token: Option<&'a Node<'a>>,
    pub type_node: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct PropertyDeclaration<'a> {
    pub name: &'a Node<'a>,
    pub question_token: Option<&'a Node<'a>>,
    pub exclamation_token: Option<&'a Node<'a>>,
    pub type_node: Option<&'a Node<'a>>,
    pub initializer: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct MethodSignature<'a> {
    pub name: &'a Node<'a>,
    pub question_token: Option<&'a Node<'a>>,
    pub type_parameters: Option<&'a NodeArray<'a>>,
    pub parameters: &'a NodeArray<'a>,
    pub type_node: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct MethodDeclaration<'a> {
    pub asterisk_token: Option<&'a Node<'a>>,
    pub name: &'a Node<'a>,
    pub question_token: Option<&'a Node<'a>>,
    pub type_parameters: Option<&'a NodeArray<'a>>,
    pub parameters: &'a NodeArray<'a>,
    pub type_node: Option<&'a Node<'a>>,
    pub body: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ClassStaticBlockDeclaration<'a> {
    pub body: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ConstructorDeclaration<'a> {
    pub parameters: &'a NodeArray<'a>,
    pub body: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct AccessorDeclaration<'a> {
    pub name: &'a Node<'a>,
    pub parameters: &'a NodeArray<'a>,
    pub type_node: Option<&'a Node<'a>>,
    pub body: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct SignatureDeclaration<'a> {
    pub type_parameters: Option<&'a NodeArray<'a>>,
    pub parameters: &'a NodeArray<'a>,
    pub type_node: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct IndexSignature<'a> {
    pub parameters: &'a NodeArray<'a>,
    pub type_node: Option<&'a Node<'a>>,
}

// ============================================================================
// Type Nodes
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct TypePredicate<'a> {
    pub asserts_modifier: bool,
    pub parameter_name: &'a Node<'a>,
    pub type_node: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct TypeReference<'a> {
    pub type_name: &'a Node<'a>,
    pub type_arguments: Option<&'a NodeArray<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct FunctionTypeLike<'a> {
    pub type_parameters: Option<&'a NodeArray<'a>>,
    pub parameters: &'a NodeArray<'a>,
    pub type_node: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct TypeQuery<'a> {
    pub expr_name: &'a Node<'a>,
    pub type_arguments: Option<&'a NodeArray<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct TypeLiteral<'a> {
    pub members: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ArrayType<'a> {
    pub element_type: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct TupleType<'a> {
    pub elements: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct WrappedType<'a> {
    pub type_node: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct CompositeType<'a> {
    pub types: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ConditionalType<'a> {
    pub check_type: &'a Node<'a>,
    pub extends_type: &'a Node<'a>,
    pub true_type: &'a Node<'a>,
    pub false_type: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct InferType<'a> {
    pub type_parameter: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct TypeOperator<'a> {
    /// `keyof`, `unique`, or `readonly`.
    pub operator: SyntaxKind,
    pub type_node: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct IndexedAccessType<'a> {
    pub object_type: &'a Node<'a>,
    pub index_type: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct MappedType<'a> {
    /// `readonly`, `+readonly` (ReadonlyKeyword), or `-readonly` (MinusToken).
    pub readonly_token: Option<&'a Node<'a>>,
    pub type_parameter: &'a Node<'a>,
    pub name_type: Option<&'a Node<'a>>,
    pub question_token: Option<&'a Node<'a>>,
    pub type_node: Option<&'a Node<'a>>,
    pub members: Option<&'a NodeArray<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct LiteralType<'a> {
    pub literal: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct NamedTupleMember<'a> {
    pub dot_dot_dot_token: Option<&'a Node<'a>>,
    pub name: &'a Node<'a>,
    pub question_token: Option<&'a Node<'a>>,
    pub type_node: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateLiteralType<'a> {
    pub head: &'a Node<'a>,
    pub template_spans: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateLiteralTypeSpan<'a> {
    pub type_node: &'a Node<'a>,
    pub literal: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ImportType<'a> {
    pub argument: &'a Node<'a>,
    pub attributes: Option<&'a Node<'a>>,
    pub qualifier: Option<&'a Node<'a>>,
    pub type_arguments: Option<&'a NodeArray<'a>>,
    pub is_type_of: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ExpressionWithTypeArguments<'a> {
    pub expression: &'a Node<'a>,
    pub type_arguments: Option<&'a NodeArray<'a>>,
}

// ============================================================================
// Binding Patterns
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ObjectBindingPattern<'a> {
    pub elements: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ArrayBindingPattern<'a> {
    pub elements: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct BindingElement<'a> {
    pub dot_dot_dot_token: Option<&'a Node<'a>>,
    pub property_name: Option<&'a Node<'a>>,
    pub name: &'a Node<'a>,
    pub initializer: Option<&'a Node<'a>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ArrayLiteralExpression<'a> {
    pub elements: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ObjectLiteralExpression<'a> {
    pub properties: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct PropertyAccessExpression<'a> {
    pub expression: &'a Node<'a>,
    pub question_dot_token: Option<&'a Node<'a>>,
    pub name: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ElementAccessExpression<'a> {
    pub expression: &'a Node<'a>,
    pub question_dot_token: Option<&'a Node<'a>>,
    pub argument_expression: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct CallExpression<'a> {
    pub expression: &'a Node<'a>,
    pub question_dot_token: Option<&'a Node<'a>>,
    pub type_arguments: Option<&'a NodeArray<'a>>,
    pub arguments: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct NewExpression<'a> {
    pub expression: &'a Node<'a>,
    pub type_arguments: Option<&'a NodeArray<'a>>,
    pub arguments: Option<&'a NodeArray<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct TaggedTemplateExpression<'a> {
    pub tag: &'a Node<'a>,
    pub type_arguments: Option<&'a NodeArray<'a>>,
    pub template: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct TypeAssertionExpression<'a> {
    pub type_node: &'a Node<'a>,
    pub expression: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ParenthesizedExpression<'a> {
    pub expression: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct FunctionExpression<'a> {
    pub asterisk_token: Option<&'a Node<'a>>,
    pub name: Option<&'a Node<'a>>,
    pub type_parameters: Option<&'a NodeArray<'a>>,
    pub parameters: &'a NodeArray<'a>,
    pub type_node: Option<&'a Node<'a>>,
    pub body: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ArrowFunction<'a> {
    pub type_parameters: Option<&'a NodeArray<'a>>,
    pub parameters: &'a NodeArray<'a>,
    pub type_node: Option<&'a Node<'a>>,
    pub equals_greater_than_token: &'a Node<'a>,
    /// A block or an expression.
    pub body: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct SimpleUnaryExpression<'a> {
    pub expression: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct PrefixUnaryExpression<'a> {
    pub operator: SyntaxKind,
    pub operand: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct PostfixUnaryExpression<'a> {
    pub operand: &'a Node<'a>,
    pub operator: SyntaxKind,
}

#[derive(Debug, Clone, Copy)]
pub struct BinaryExpression<'a> {
    pub left: &'a Node<'a>,
    pub operator_token: &'a Node<'a>,
    pub right: &'a Node<'a>,
}

impl<'a> BinaryExpression<'a> {
    #[inline]
    pub fn operator(&self) -> SyntaxKind {
        self.operator_token.kind()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConditionalExpression<'a> {
    pub condition: &'a Node<'a>,
    pub question_token: &'a Node<'a>,
    pub when_true: &'a Node<'a>,
    pub colon_token: &'a Node<'a>,
    pub when_false: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateExpression<'a> {
    pub head: &'a Node<'a>,
    pub template_spans: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct TemplateSpan<'a> {
    pub expression: &'a Node<'a>,
    pub literal: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct YieldExpression<'a> {
    pub asterisk_token: Option<&'a Node<'a>>,
    pub expression: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct SpreadElement<'a> {
    pub expression: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ClassLikeDeclaration<'a> {
    pub name: Option<&'a Node<'a>>,
    pub type_parameters: Option<&'a NodeArray<'a>>,
    pub heritage_clauses: Option<&'a NodeArray<'a>>,
    pub members: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct AsExpression<'a> {
    pub expression: &'a Node<'a>,
    pub type_node: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct NonNullExpression<'a> {
    pub expression: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct MetaProperty<'a> {
    /// `new` (for `new.target`) or `import` (for `import.meta`).
    pub keyword_token: SyntaxKind,
    pub name: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct SatisfiesExpression<'a> {
    pub expression: &'a Node<'a>,
    pub type_node: &'a Node<'a>,
}

/// Transparent wrapper that re-scopes source map positions around an
/// expression without changing its semantics.
#[derive(Debug, Clone, Copy)]
pub struct PartiallyEmittedExpression<'a> {
    pub expression: &'a Node<'a>,
}

/// Flattened comma sequence. Unlike a comma `BinaryExpression` tree, its
/// elements print without parentheses between them.
#[derive(Debug, Clone, Copy)]
pub struct CommaListExpression<'a> {
    pub elements: &'a NodeArray<'a>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    pub statements: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct VariableStatement<'a> {
    pub declaration_list: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ExpressionStatement<'a> {
    pub expression: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct IfStatement<'a> {
    pub expression: &'a Node<'a>,
    pub then_statement: &'a Node<'a>,
    pub else_statement: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct DoStatement<'a> {
    pub statement: &'a Node<'a>,
    pub expression: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct WhileStatement<'a> {
    pub expression: &'a Node<'a>,
    pub statement: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ForStatement<'a> {
    pub initializer: Option<&'a Node<'a>>,
    pub condition: Option<&'a Node<'a>>,
    pub incrementor: Option<&'a Node<'a>>,
    pub statement: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ForInStatement<'a> {
    pub initializer: &'a Node<'a>,
    pub expression: &'a Node<'a>,
    pub statement: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ForOfStatement<'a> {
    pub await_modifier: bool,
    pub initializer: &'a Node<'a>,
    pub expression: &'a Node<'a>,
    pub statement: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct BreakOrContinueStatement<'a> {
    pub label: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ReturnStatement<'a> {
    pub expression: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct WithStatement<'a> {
    pub expression: &'a Node<'a>,
    pub statement: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct SwitchStatement<'a> {
    pub expression: &'a Node<'a>,
    pub case_block: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct LabeledStatement<'a> {
    pub label: &'a Node<'a>,
    pub statement: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ThrowStatement<'a> {
    pub expression: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct TryStatement<'a> {
    pub try_block: &'a Node<'a>,
    pub catch_clause: Option<&'a Node<'a>>,
    pub finally_block: Option<&'a Node<'a>>,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct VariableDeclaration<'a> {
    pub name: &'a Node<'a>,
    pub exclamation_token: Option<&'a Node<'a>>,
    pub type_node: Option<&'a Node<'a>>,
    pub initializer: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct VariableDeclarationList<'a> {
    /// `var`/`let`/`const`/`using` is carried by NodeFlags.
    pub declarations: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct FunctionDeclaration<'a> {
    pub asterisk_token: Option<&'a Node<'a>>,
    pub name: Option<&'a Node<'a>>,
    pub type_parameters: Option<&'a NodeArray<'a>>,
    pub parameters: &'a NodeArray<'a>,
    pub type_node: Option<&'a Node<'a>>,
    pub body: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct InterfaceDeclaration<'a> {
    pub name: &'a Node<'a>,
    pub type_parameters: Option<&'a NodeArray<'a>>,
    pub heritage_clauses: Option<&'a NodeArray<'a>>,
    pub members: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct TypeAliasDeclaration<'a> {
    pub name: &'a Node<'a>,
    pub type_parameters: Option<&'a NodeArray<'a>>,
    pub type_node: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct EnumDeclaration<'a> {
    pub name: &'a Node<'a>,
    pub members: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ModuleDeclaration<'a> {
    /// Identifier for a namespace, string literal for an ambient module.
    pub name: &'a Node<'a>,
    pub body: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ModuleBlock<'a> {
    pub statements: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct CaseBlock<'a> {
    pub clauses: &'a NodeArray<'a>,
}

// ============================================================================
// Module Surface
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct ImportEqualsDeclaration<'a> {
    pub is_type_only: bool,
    pub name: &'a Node<'a>,
    pub module_reference: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ImportDeclaration<'a> {
    pub import_clause: Option<&'a Node<'a>>,
    pub module_specifier: &'a Node<'a>,
    pub attributes: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ImportClause<'a> {
    pub is_type_only: bool,
    /// Default import binding.
    pub name: Option<&'a Node<'a>>,
    /// `NamespaceImport` or `NamedImports`.
    pub named_bindings: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct NamespaceImport<'a> {
    pub name: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct NamespaceExport<'a> {
    pub name: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct NamedImportsOrExports<'a> {
    pub elements: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ImportOrExportSpecifier<'a> {
    pub is_type_only: bool,
    /// Present when the binding is renamed (`{ a as b }`).
    pub property_name: Option<&'a Node<'a>>,
    pub name: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ExportAssignment<'a> {
    /// `export = expr` when true, `export default expr` when false.
    pub is_export_equals: bool,
    pub expression: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ExportDeclaration<'a> {
    pub is_type_only: bool,
    /// `NamedExports` or `NamespaceExport`.
    pub export_clause: Option<&'a Node<'a>>,
    pub module_specifier: Option<&'a Node<'a>>,
    pub attributes: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ExternalModuleReference<'a> {
    pub expression: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ImportAttributes<'a> {
    pub elements: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ImportAttribute<'a> {
    pub name: &'a Node<'a>,
    pub value: &'a Node<'a>,
}

// ============================================================================
// JSX
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct JsxElement<'a> {
    pub opening_element: &'a Node<'a>,
    pub children: &'a NodeArray<'a>,
    pub closing_element: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct JsxSelfClosingElement<'a> {
    pub tag_name: &'a Node<'a>,
    pub type_arguments: Option<&'a NodeArray<'a>>,
    pub attributes: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct JsxOpeningElement<'a> {
    pub tag_name: &'a Node<'a>,
    pub type_arguments: Option<&'a NodeArray<'a>>,
    pub attributes: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct JsxClosingElement<'a> {
    pub tag_name: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct JsxFragment<'a> {
    pub opening_fragment: &'a Node<'a>,
    pub children: &'a NodeArray<'a>,
    pub closing_fragment: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct JsxText {
    pub text: InternedString,
    pub contains_only_trivia_white_spaces: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct JsxAttribute<'a> {
    pub name: &'a Node<'a>,
    pub initializer: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct JsxAttributes<'a> {
    pub properties: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct JsxSpreadAttribute<'a> {
    pub expression: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct JsxExpression<'a> {
    pub dot_dot_dot_token: Option<&'a Node<'a>>,
    pub expression: Option<&'a Node<'a>>,
}

// ============================================================================
// Clauses
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct CaseClause<'a> {
    pub expression: &'a Node<'a>,
    pub statements: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct DefaultClause<'a> {
    pub statements: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct HeritageClause<'a> {
    /// `extends` or `implements`.
    pub token: SyntaxKind,
    pub types: &'a NodeArray<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct CatchClause<'a> {
    pub variable_declaration: Option<&'a Node<'a>>,
    pub block: &'a Node<'a>,
}

// ============================================================================
// Object Literal Members
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct PropertyAssignment<'a> {
    pub name: &'a Node<'a>,
    pub initializer: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct ShorthandPropertyAssignment<'a> {
    pub name: &'a Node<'a>,
    /// Only meaningful inside destructuring assignment targets.
    pub object_assignment_initializer: Option<&'a Node<'a>>,
}

#[derive(Debug, Clone, Copy)]
pub struct SpreadAssignment<'a> {
    pub expression: &'a Node<'a>,
}

#[derive(Debug, Clone, Copy)]
pub struct EnumMember<'a> {
    pub name: &'a Node<'a>,
    pub initializer: Option<&'a Node<'a>>,
}

// ============================================================================
// Source File
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct SourceFile<'a> {
    pub statements: &'a NodeArray<'a>,
    pub end_of_file_token: &'a Node<'a>,
    pub file_name: InternedString,
    pub is_declaration_file: bool,
}
