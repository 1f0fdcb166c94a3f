//! Kind classification predicates and tree navigation helpers.
//!
//! The grammar-class predicates mirror the expression hierarchy: every
//! left-hand-side expression is a unary expression, and every unary
//! expression is an expression.

use crate::node::Node;
use crate::syntax_kind::SyntaxKind;
use crate::types::OuterExpressionKinds;

// ============================================================================
// Grammar Classes
// ============================================================================

pub fn is_literal_expression_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::RegularExpressionLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
    )
}

pub fn is_literal_expression(node: &Node<'_>) -> bool {
    is_literal_expression_kind(node.kind())
}

pub fn is_left_hand_side_expression_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PropertyAccessExpression
            | SyntaxKind::ElementAccessExpression
            | SyntaxKind::NewExpression
            | SyntaxKind::CallExpression
            | SyntaxKind::JsxElement
            | SyntaxKind::JsxSelfClosingElement
            | SyntaxKind::JsxFragment
            | SyntaxKind::TaggedTemplateExpression
            | SyntaxKind::ArrayLiteralExpression
            | SyntaxKind::ParenthesizedExpression
            | SyntaxKind::ObjectLiteralExpression
            | SyntaxKind::ClassExpression
            | SyntaxKind::FunctionExpression
            | SyntaxKind::Identifier
            | SyntaxKind::PrivateIdentifier
            | SyntaxKind::RegularExpressionLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateExpression
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::ThisKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::NonNullExpression
            | SyntaxKind::ExpressionWithTypeArguments
            | SyntaxKind::MetaProperty
            | SyntaxKind::ImportKeyword
    )
}

pub fn is_left_hand_side_expression(node: &Node<'_>) -> bool {
    is_left_hand_side_expression_kind(node.kind())
}

pub fn is_unary_expression_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PrefixUnaryExpression
            | SyntaxKind::PostfixUnaryExpression
            | SyntaxKind::DeleteExpression
            | SyntaxKind::TypeOfExpression
            | SyntaxKind::VoidExpression
            | SyntaxKind::AwaitExpression
            | SyntaxKind::TypeAssertionExpression
    ) || is_left_hand_side_expression_kind(kind)
}

pub fn is_unary_expression(node: &Node<'_>) -> bool {
    is_unary_expression_kind(node.kind())
}

pub fn is_expression_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::ConditionalExpression
            | SyntaxKind::YieldExpression
            | SyntaxKind::ArrowFunction
            | SyntaxKind::BinaryExpression
            | SyntaxKind::SpreadElement
            | SyntaxKind::AsExpression
            | SyntaxKind::OmittedExpression
            | SyntaxKind::CommaListExpression
            | SyntaxKind::PartiallyEmittedExpression
            | SyntaxKind::SatisfiesExpression
    ) || is_unary_expression_kind(kind)
}

pub fn is_expression(node: &Node<'_>) -> bool {
    is_expression_kind(node.kind())
}

pub fn is_statement_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Block
            | SyntaxKind::EmptyStatement
            | SyntaxKind::VariableStatement
            | SyntaxKind::ExpressionStatement
            | SyntaxKind::IfStatement
            | SyntaxKind::DoStatement
            | SyntaxKind::WhileStatement
            | SyntaxKind::ForStatement
            | SyntaxKind::ForInStatement
            | SyntaxKind::ForOfStatement
            | SyntaxKind::ContinueStatement
            | SyntaxKind::BreakStatement
            | SyntaxKind::ReturnStatement
            | SyntaxKind::WithStatement
            | SyntaxKind::SwitchStatement
            | SyntaxKind::LabeledStatement
            | SyntaxKind::ThrowStatement
            | SyntaxKind::TryStatement
            | SyntaxKind::DebuggerStatement
            | SyntaxKind::VariableDeclaration
            | SyntaxKind::VariableDeclarationList
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::ClassDeclaration
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::EnumDeclaration
            | SyntaxKind::ModuleDeclaration
            | SyntaxKind::ImportEqualsDeclaration
            | SyntaxKind::ImportDeclaration
            | SyntaxKind::ExportAssignment
            | SyntaxKind::ExportDeclaration
            | SyntaxKind::NotEmittedStatement
    )
}

pub fn is_statement(node: &Node<'_>) -> bool {
    is_statement_kind(node.kind())
}

/// Identifier or qualified name.
pub fn is_entity_name(node: &Node<'_>) -> bool {
    matches!(
        node.kind(),
        SyntaxKind::Identifier | SyntaxKind::QualifiedName
    )
}

/// Anything usable as a declared member name.
pub fn is_property_name(node: &Node<'_>) -> bool {
    matches!(
        node.kind(),
        SyntaxKind::Identifier
            | SyntaxKind::PrivateIdentifier
            | SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::ComputedPropertyName
    )
}

pub fn is_binding_pattern(node: &Node<'_>) -> bool {
    matches!(
        node.kind(),
        SyntaxKind::ObjectBindingPattern | SyntaxKind::ArrayBindingPattern
    )
}

/// Object or array literal used as a destructuring assignment target.
pub fn is_assignment_pattern(node: &Node<'_>) -> bool {
    matches!(
        node.kind(),
        SyntaxKind::ObjectLiteralExpression | SyntaxKind::ArrayLiteralExpression
    )
}

pub fn is_object_literal_element_like(node: &Node<'_>) -> bool {
    matches!(
        node.kind(),
        SyntaxKind::PropertyAssignment
            | SyntaxKind::ShorthandPropertyAssignment
            | SyntaxKind::SpreadAssignment
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
    )
}

pub fn is_class_element(node: &Node<'_>) -> bool {
    matches!(
        node.kind(),
        SyntaxKind::Constructor
            | SyntaxKind::PropertyDeclaration
            | SyntaxKind::MethodDeclaration
            | SyntaxKind::GetAccessor
            | SyntaxKind::SetAccessor
            | SyntaxKind::IndexSignature
            | SyntaxKind::ClassStaticBlockDeclaration
            | SyntaxKind::SemicolonClassElement
    )
}

/// A binary expression whose operator is `=` (not a compound assignment).
pub fn is_assignment_expression(node: &Node<'_>) -> bool {
    match &node.shape {
        crate::node::NodeShape::BinaryExpression(binary) => {
            binary.operator() == SyntaxKind::EqualsToken
        }
        _ => false,
    }
}

/// A comma binary expression or a flattened comma list.
pub fn is_comma_sequence(node: &Node<'_>) -> bool {
    match &node.shape {
        crate::node::NodeShape::BinaryExpression(binary) => {
            binary.operator() == SyntaxKind::CommaToken
        }
        _ => node.kind() == SyntaxKind::CommaListExpression,
    }
}

// ============================================================================
// Outer Expressions
// ============================================================================

/// Whether `node` is one of the transparent expression wrappers selected by
/// `kinds`. Parenthesized JSX is never treated as transparent.
pub fn is_outer_expression(node: &Node<'_>, kinds: OuterExpressionKinds) -> bool {
    match node.kind() {
        SyntaxKind::ParenthesizedExpression => {
            kinds.contains(OuterExpressionKinds::PARENTHESES)
        }
        SyntaxKind::TypeAssertionExpression
        | SyntaxKind::AsExpression
        | SyntaxKind::SatisfiesExpression
        | SyntaxKind::ExpressionWithTypeArguments => {
            kinds.contains(OuterExpressionKinds::TYPE_ASSERTIONS)
        }
        SyntaxKind::NonNullExpression => {
            kinds.contains(OuterExpressionKinds::NON_NULL_ASSERTIONS)
        }
        SyntaxKind::PartiallyEmittedExpression => {
            kinds.contains(OuterExpressionKinds::PARTIALLY_EMITTED_EXPRESSIONS)
        }
        _ => false,
    }
}

/// The wrapped operand of an outer expression wrapper.
pub fn outer_expression_operand<'a>(node: &'a Node<'a>) -> Option<&'a Node<'a>> {
    use crate::node::NodeShape;
    match &node.shape {
        NodeShape::ParenthesizedExpression(paren) => Some(paren.expression),
        NodeShape::TypeAssertionExpression(assertion) => Some(assertion.expression),
        NodeShape::AsExpression(as_expr) => Some(as_expr.expression),
        NodeShape::SatisfiesExpression(satisfies) => Some(satisfies.expression),
        NodeShape::ExpressionWithTypeArguments(ewta) => Some(ewta.expression),
        NodeShape::NonNullExpression(non_null) => Some(non_null.expression),
        NodeShape::PartiallyEmittedExpression(pee) => Some(pee.expression),
        _ => None,
    }
}

/// Strip the selected wrapper kinds off an expression.
pub fn skip_outer_expressions<'a>(
    mut node: &'a Node<'a>,
    kinds: OuterExpressionKinds,
) -> &'a Node<'a> {
    while is_outer_expression(node, kinds) {
        match outer_expression_operand(node) {
            Some(operand) => node = operand,
            None => break,
        }
    }
    node
}

pub fn skip_parentheses<'a>(node: &'a Node<'a>) -> &'a Node<'a> {
    skip_outer_expressions(node, OuterExpressionKinds::PARENTHESES)
}

pub fn skip_partially_emitted_expressions<'a>(node: &'a Node<'a>) -> &'a Node<'a> {
    skip_outer_expressions(node, OuterExpressionKinds::PARTIALLY_EMITTED_EXPRESSIONS)
}

// ============================================================================
// Original Chains
// ============================================================================

/// Follow the `original` chain to its end.
pub fn get_original_node<'a>(node: &'a Node<'a>) -> &'a Node<'a> {
    let mut node = node;
    while let Some(original) = node.original() {
        node = original;
    }
    node
}

/// Follow the `original` chain until a parse tree node is found, if any.
pub fn get_parse_tree_node<'a>(node: &'a Node<'a>) -> Option<&'a Node<'a>> {
    let node = get_original_node(node);
    node.is_parse_tree_node().then_some(node)
}

// ============================================================================
// Leftmost Expression
// ============================================================================

/// Descend into the expression that would be emitted first.
///
/// Used to answer questions like "does this expression statement start with
/// `{` or `function`?" without printing it. `stop_at_call_expressions`
/// prevents descending through the callee of a call, which matters when
/// parenthesizing the callee of `new`.
pub fn get_leftmost_expression<'a>(
    node: &'a Node<'a>,
    stop_at_call_expressions: bool,
) -> &'a Node<'a> {
    use crate::node::NodeShape;
    let mut node = node;
    loop {
        node = match &node.shape {
            NodeShape::PostfixUnaryExpression(postfix) => postfix.operand,
            NodeShape::BinaryExpression(binary) => binary.left,
            NodeShape::ConditionalExpression(conditional) => conditional.condition,
            NodeShape::CallExpression(call) => {
                if stop_at_call_expressions {
                    return node;
                }
                call.expression
            }
            NodeShape::ElementAccessExpression(access) => access.expression,
            NodeShape::PropertyAccessExpression(access) => access.expression,
            NodeShape::TaggedTemplateExpression(tagged) => tagged.tag,
            NodeShape::AsExpression(as_expr) => as_expr.expression,
            NodeShape::SatisfiesExpression(satisfies) => satisfies.expression,
            NodeShape::NonNullExpression(non_null) => non_null.expression,
            NodeShape::PartiallyEmittedExpression(pee) => pee.expression,
            _ => return node,
        };
    }
}
