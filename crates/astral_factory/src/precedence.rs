//! Operator precedence and associativity for synthesized expressions.

use astral_ast::node::{Node, NodeShape};
use astral_ast::syntax_kind::SyntaxKind;

/// Operator precedence levels, from loosest to tightest binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum OperatorPrecedence {
    Comma = 0,
    Spread = 1,
    Yield = 2,
    Assignment = 3,
    Conditional = 4,
    NullishCoalescing = 5,
    LogicalOr = 6,
    LogicalAnd = 7,
    BitwiseOr = 8,
    BitwiseXor = 9,
    BitwiseAnd = 10,
    Equality = 11,
    Relational = 12,
    Shift = 13,
    Additive = 14,
    Multiplicative = 15,
    Exponentiation = 16,
    Unary = 17,
    Update = 18,
    LeftHandSide = 19,
    Member = 20,
    Primary = 21,
    Highest = 22,
    Invalid = 255,
}

/// Grouping direction for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Get the binary operator precedence for a given token kind.
pub fn get_binary_operator_precedence(kind: SyntaxKind) -> OperatorPrecedence {
    match kind {
        SyntaxKind::QuestionQuestionToken => OperatorPrecedence::NullishCoalescing,
        SyntaxKind::BarBarToken => OperatorPrecedence::LogicalOr,
        SyntaxKind::AmpersandAmpersandToken => OperatorPrecedence::LogicalAnd,
        SyntaxKind::BarToken => OperatorPrecedence::BitwiseOr,
        SyntaxKind::CaretToken => OperatorPrecedence::BitwiseXor,
        SyntaxKind::AmpersandToken => OperatorPrecedence::BitwiseAnd,
        SyntaxKind::EqualsEqualsToken
        | SyntaxKind::ExclamationEqualsToken
        | SyntaxKind::EqualsEqualsEqualsToken
        | SyntaxKind::ExclamationEqualsEqualsToken => OperatorPrecedence::Equality,
        SyntaxKind::LessThanToken
        | SyntaxKind::GreaterThanToken
        | SyntaxKind::LessThanEqualsToken
        | SyntaxKind::GreaterThanEqualsToken
        | SyntaxKind::InstanceOfKeyword
        | SyntaxKind::InKeyword
        | SyntaxKind::AsKeyword
        | SyntaxKind::SatisfiesKeyword => OperatorPrecedence::Relational,
        SyntaxKind::LessThanLessThanToken
        | SyntaxKind::GreaterThanGreaterThanToken
        | SyntaxKind::GreaterThanGreaterThanGreaterThanToken => OperatorPrecedence::Shift,
        SyntaxKind::PlusToken | SyntaxKind::MinusToken => OperatorPrecedence::Additive,
        SyntaxKind::AsteriskToken | SyntaxKind::SlashToken | SyntaxKind::PercentToken => {
            OperatorPrecedence::Multiplicative
        }
        SyntaxKind::AsteriskAsteriskToken => OperatorPrecedence::Exponentiation,
        _ => OperatorPrecedence::Invalid,
    }
}

/// Precedence of a binary expression given its operator token kind.
pub fn get_operator_precedence_of_binary(operator: SyntaxKind) -> OperatorPrecedence {
    if operator == SyntaxKind::CommaToken {
        OperatorPrecedence::Comma
    } else if operator.is_assignment_operator() {
        OperatorPrecedence::Assignment
    } else {
        get_binary_operator_precedence(operator)
    }
}

/// The operator kind that decides an expression's precedence: the operator
/// token for binary/unary expressions, the node's own kind otherwise.
pub fn get_operator(expression: &Node<'_>) -> SyntaxKind {
    match &expression.shape {
        NodeShape::BinaryExpression(binary) => binary.operator(),
        NodeShape::PrefixUnaryExpression(prefix) => prefix.operator,
        NodeShape::PostfixUnaryExpression(postfix) => postfix.operator,
        _ => expression.kind(),
    }
}

/// Precedence of a whole expression node.
pub fn get_expression_precedence(expression: &Node<'_>) -> OperatorPrecedence {
    match &expression.shape {
        NodeShape::CommaListExpression(_) => OperatorPrecedence::Comma,
        NodeShape::SpreadElement(_) => OperatorPrecedence::Spread,
        NodeShape::YieldExpression(_) => OperatorPrecedence::Yield,
        NodeShape::ConditionalExpression(_) => OperatorPrecedence::Conditional,
        NodeShape::BinaryExpression(binary) => {
            get_operator_precedence_of_binary(binary.operator())
        }
        NodeShape::TypeAssertionExpression(_)
        | NodeShape::NonNullExpression(_)
        | NodeShape::PrefixUnaryExpression(_)
        | NodeShape::SimpleUnaryExpression(_) => OperatorPrecedence::Unary,
        NodeShape::PostfixUnaryExpression(_) => OperatorPrecedence::Update,
        NodeShape::CallExpression(_) => OperatorPrecedence::LeftHandSide,
        NodeShape::NewExpression(new) => {
            if new.arguments.is_some() {
                OperatorPrecedence::Member
            } else {
                OperatorPrecedence::LeftHandSide
            }
        }
        NodeShape::TaggedTemplateExpression(_)
        | NodeShape::PropertyAccessExpression(_)
        | NodeShape::ElementAccessExpression(_)
        | NodeShape::MetaProperty(_) => OperatorPrecedence::Member,
        NodeShape::AsExpression(_) | NodeShape::SatisfiesExpression(_) => {
            OperatorPrecedence::Relational
        }
        NodeShape::Identifier(_)
        | NodeShape::PrivateIdentifier(_)
        | NodeShape::NumericLiteral(_)
        | NodeShape::BigIntLiteral(_)
        | NodeShape::StringLiteral(_)
        | NodeShape::RegularExpressionLiteral(_)
        | NodeShape::TemplateLiteralFragment(_)
        | NodeShape::TemplateExpression(_)
        | NodeShape::ArrayLiteralExpression(_)
        | NodeShape::ObjectLiteralExpression(_)
        | NodeShape::FunctionExpression(_)
        | NodeShape::ArrowFunction(_)
        | NodeShape::ClassLikeDeclaration(_)
        | NodeShape::ParenthesizedExpression(_)
        | NodeShape::JsxElement(_)
        | NodeShape::JsxSelfClosingElement(_)
        | NodeShape::JsxFragment(_) => OperatorPrecedence::Primary,
        NodeShape::Token => match expression.kind() {
            SyntaxKind::ThisKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::ImportKeyword
            | SyntaxKind::OmittedExpression => OperatorPrecedence::Primary,
            _ => OperatorPrecedence::Invalid,
        },
        _ => OperatorPrecedence::Invalid,
    }
}

/// Associativity of the operator that governs `kind` with `operator`.
pub fn get_operator_associativity(
    kind: SyntaxKind,
    operator: SyntaxKind,
    has_arguments: bool,
) -> Associativity {
    match kind {
        SyntaxKind::NewExpression => {
            if has_arguments {
                Associativity::Right
            } else {
                Associativity::Left
            }
        }
        SyntaxKind::PrefixUnaryExpression
        | SyntaxKind::TypeOfExpression
        | SyntaxKind::VoidExpression
        | SyntaxKind::DeleteExpression
        | SyntaxKind::AwaitExpression
        | SyntaxKind::ConditionalExpression
        | SyntaxKind::YieldExpression => Associativity::Right,
        SyntaxKind::BinaryExpression => {
            if operator == SyntaxKind::AsteriskAsteriskToken || operator.is_assignment_operator() {
                Associativity::Right
            } else {
                Associativity::Left
            }
        }
        _ => Associativity::Left,
    }
}

/// Associativity of an expression node.
pub fn get_expression_associativity(expression: &Node<'_>) -> Associativity {
    let operator = get_operator(expression);
    let has_arguments = matches!(
        &expression.shape,
        NodeShape::NewExpression(new) if new.arguments.is_some()
    );
    get_operator_associativity(expression.kind(), operator, has_arguments)
}

/// Whether the operator is mathematically associative: regrouping cannot
/// change the result, so same-operator right operands may be re-flattened.
pub fn operator_has_associative_property(operator: SyntaxKind) -> bool {
    matches!(
        operator,
        SyntaxKind::AsteriskToken
            | SyntaxKind::BarToken
            | SyntaxKind::AmpersandToken
            | SyntaxKind::CaretToken
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_total_order() {
        assert!(OperatorPrecedence::Additive < OperatorPrecedence::Multiplicative);
        assert!(OperatorPrecedence::Multiplicative < OperatorPrecedence::Exponentiation);
        assert!(OperatorPrecedence::Comma < OperatorPrecedence::Assignment);
    }

    #[test]
    fn test_binary_operator_table() {
        assert_eq!(
            get_binary_operator_precedence(SyntaxKind::PlusToken),
            OperatorPrecedence::Additive
        );
        assert_eq!(
            get_binary_operator_precedence(SyntaxKind::AsteriskAsteriskToken),
            OperatorPrecedence::Exponentiation
        );
        assert_eq!(
            get_binary_operator_precedence(SyntaxKind::OpenBraceToken),
            OperatorPrecedence::Invalid
        );
    }

    #[test]
    fn test_associativity() {
        assert_eq!(
            get_operator_associativity(
                SyntaxKind::BinaryExpression,
                SyntaxKind::AsteriskAsteriskToken,
                false
            ),
            Associativity::Right
        );
        assert_eq!(
            get_operator_associativity(
                SyntaxKind::BinaryExpression,
                SyntaxKind::PlusToken,
                false
            ),
            Associativity::Left
        );
        assert_eq!(
            get_operator_associativity(
                SyntaxKind::BinaryExpression,
                SyntaxKind::EqualsToken,
                false
            ),
            Associativity::Right
        );
    }

    #[test]
    fn test_associative_property() {
        assert!(operator_has_associative_property(SyntaxKind::AsteriskToken));
        assert!(!operator_has_associative_property(SyntaxKind::SlashToken));
        assert!(!operator_has_associative_property(SyntaxKind::MinusToken));
    }
}
