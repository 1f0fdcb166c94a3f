//! Protective parenthesization tests.
//!
//! Constructors insert parentheses wherever re-printing the tree naively
//! would change evaluation order; these tests pin the table down.

use astral_core::arena::AstArena;
use astral_core::intern::StringInterner;
use astral_ast::node::{Node, NodeShape};
use astral_ast::syntax_kind::SyntaxKind;
use astral_ast::types::ModifierFlags;
use astral_factory::NodeFactory;

fn fixture(arena: &AstArena) -> NodeFactory<'_> {
    NodeFactory::new(arena, StringInterner::new())
}

fn binary<'a>(
    factory: &NodeFactory<'a>,
    left: &'a Node<'a>,
    operator: SyntaxKind,
    right: &'a Node<'a>,
) -> &'a Node<'a> {
    factory.create_binary_expression(left, operator, right)
}

fn operands<'a>(node: &'a Node<'a>) -> (&'a Node<'a>, &'a Node<'a>) {
    let NodeShape::BinaryExpression(shape) = &node.shape else {
        panic!("expected a binary expression, got {:?}", node.kind());
    };
    (shape.left, shape.right)
}

fn is_parenthesized(node: &Node<'_>) -> bool {
    node.kind() == SyntaxKind::ParenthesizedExpression
}

#[test]
fn test_lower_precedence_left_operand_is_wrapped() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // (a + b) * c
    let sum = binary(
        &factory,
        factory.create_identifier("a"),
        SyntaxKind::PlusToken,
        factory.create_identifier("b"),
    );
    let product = binary(
        &factory,
        sum,
        SyntaxKind::AsteriskToken,
        factory.create_identifier("c"),
    );
    let (left, right) = operands(product);
    assert!(is_parenthesized(left));
    assert!(!is_parenthesized(right));
}

#[test]
fn test_higher_precedence_left_operand_is_not_wrapped() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // a * b + c
    let product = binary(
        &factory,
        factory.create_identifier("a"),
        SyntaxKind::AsteriskToken,
        factory.create_identifier("b"),
    );
    let sum = binary(
        &factory,
        product,
        SyntaxKind::PlusToken,
        factory.create_identifier("c"),
    );
    let (left, _) = operands(sum);
    assert!(std::ptr::eq(left, product));
}

#[test]
fn test_right_associative_operator_keeps_right_nesting() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // a ** (b ** c) needs no parens on the right...
    let inner = binary(
        &factory,
        factory.create_identifier("b"),
        SyntaxKind::AsteriskAsteriskToken,
        factory.create_identifier("c"),
    );
    let outer = binary(
        &factory,
        factory.create_identifier("a"),
        SyntaxKind::AsteriskAsteriskToken,
        inner,
    );
    let (_, right) = operands(outer);
    assert!(std::ptr::eq(right, inner));

    // ...but (a ** b) ** c must wrap the left.
    let left_nested = binary(
        &factory,
        factory.create_identifier("a"),
        SyntaxKind::AsteriskAsteriskToken,
        factory.create_identifier("b"),
    );
    let wrapped = binary(
        &factory,
        left_nested,
        SyntaxKind::AsteriskAsteriskToken,
        factory.create_identifier("c"),
    );
    let (left, _) = operands(wrapped);
    assert!(is_parenthesized(left));
}

#[test]
fn test_associative_operator_leaves_both_sides_bare() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // (a * b) * c prints fine without parens on either side.
    let inner = binary(
        &factory,
        factory.create_identifier("a"),
        SyntaxKind::AsteriskToken,
        factory.create_identifier("b"),
    );
    let outer = binary(
        &factory,
        inner,
        SyntaxKind::AsteriskToken,
        factory.create_identifier("c"),
    );
    let (left, right) = operands(outer);
    assert!(std::ptr::eq(left, inner));
    assert!(!is_parenthesized(right));
}

#[test]
fn test_subtraction_wraps_same_precedence_right_operand() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // a - (b - c): subtraction is not associative, the right side keeps its
    // parens.
    let inner = binary(
        &factory,
        factory.create_identifier("b"),
        SyntaxKind::MinusToken,
        factory.create_identifier("c"),
    );
    let outer = binary(
        &factory,
        factory.create_identifier("a"),
        SyntaxKind::MinusToken,
        inner,
    );
    let (_, right) = operands(outer);
    assert!(is_parenthesized(right));
}

#[test]
fn test_new_expression_wraps_call_callee() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // new (f())() -- leaving the callee bare would bind the arguments to f.
    let call = factory.create_call_expression(
        factory.create_identifier("f"),
        None,
        Vec::<&Node>::new(),
    );
    let new_expression =
        factory.create_new_expression(call, None, Some(factory.empty_node_array()));
    let NodeShape::NewExpression(shape) = &new_expression.shape else {
        panic!("expected a new expression");
    };
    assert!(is_parenthesized(shape.expression));
}

#[test]
fn test_new_expression_keeps_identifier_callee_bare() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    let callee = factory.create_identifier("C");
    let new_expression =
        factory.create_new_expression(callee, None, Some(factory.empty_node_array()));
    let NodeShape::NewExpression(shape) = &new_expression.shape else {
        panic!("expected a new expression");
    };
    assert!(std::ptr::eq(shape.expression, callee));
}

#[test]
fn test_property_access_wraps_conditional_object() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // (a ? b : c).d
    let conditional = factory.create_conditional_expression(
        factory.create_identifier("a"),
        None,
        factory.create_identifier("b"),
        None,
        factory.create_identifier("c"),
    );
    let access = factory
        .create_property_access_expression(conditional, factory.create_identifier("d"));
    let NodeShape::PropertyAccessExpression(shape) = &access.shape else {
        panic!("expected a property access");
    };
    assert!(is_parenthesized(shape.expression));
}

#[test]
fn test_property_access_wraps_binary_object() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // (a + b).d
    let sum = binary(
        &factory,
        factory.create_identifier("a"),
        SyntaxKind::PlusToken,
        factory.create_identifier("b"),
    );
    let access =
        factory.create_property_access_expression(sum, factory.create_identifier("d"));
    let NodeShape::PropertyAccessExpression(shape) = &access.shape else {
        panic!("expected a property access");
    };
    assert!(is_parenthesized(shape.expression));
}

#[test]
fn test_expression_statement_wraps_function_expression_callee() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // (function () {})() as a statement must not start with `function`.
    let function = factory.create_function_expression(
        ModifierFlags::NONE,
        None,
        None,
        None,
        Vec::<&Node>::new(),
        None,
        factory.create_block(Vec::<&Node>::new(), true),
    );
    let call = factory.create_call_expression(function, None, Vec::<&Node>::new());
    let statement = factory.create_expression_statement(call);
    let NodeShape::ExpressionStatement(statement_shape) = &statement.shape else {
        panic!("expected an expression statement");
    };
    let NodeShape::CallExpression(call_shape) = &statement_shape.expression.shape else {
        panic!("expected the call to survive");
    };
    assert!(is_parenthesized(call_shape.expression));
}

#[test]
fn test_expression_statement_keeps_partially_emitted_wrapper() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // A source-map wrapper around the call must survive callee wrapping.
    let function = factory.create_function_expression(
        ModifierFlags::NONE,
        None,
        None,
        None,
        Vec::<&Node>::new(),
        None,
        factory.create_block(Vec::<&Node>::new(), true),
    );
    let call = factory.create_call_expression(function, None, Vec::<&Node>::new());
    let marker = factory.create_identifier("marker");
    let wrapped = factory.create_partially_emitted_expression(call, marker);
    let statement = factory.create_expression_statement(wrapped);

    let NodeShape::ExpressionStatement(statement_shape) = &statement.shape else {
        panic!("expected an expression statement");
    };
    let NodeShape::PartiallyEmittedExpression(wrapper_shape) = &statement_shape.expression.shape
    else {
        panic!(
            "expected the wrapper to survive, got {:?}",
            statement_shape.expression.kind()
        );
    };
    assert!(std::ptr::eq(
        statement_shape.expression.original().unwrap(),
        wrapped
    ));
    let NodeShape::CallExpression(call_shape) = &wrapper_shape.expression.shape else {
        panic!("expected the call inside the wrapper");
    };
    assert!(is_parenthesized(call_shape.expression));
}

#[test]
fn test_comma_expressions_wrap_in_argument_lists() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // f((a, b)) keeps the sequence a single argument.
    let comma = binary(
        &factory,
        factory.create_identifier("a"),
        SyntaxKind::CommaToken,
        factory.create_identifier("b"),
    );
    let call =
        factory.create_call_expression(factory.create_identifier("f"), None, vec![comma]);
    let NodeShape::CallExpression(shape) = &call.shape else {
        panic!("expected a call");
    };
    assert!(is_parenthesized(shape.arguments[0]));
}

#[test]
fn test_arrow_concise_body_wraps_object_literal() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // () => ({}) -- a bare `{` would parse as a block body.
    let body = factory.create_object_literal_expression(Vec::<&Node>::new(), false);
    let arrow = factory.create_arrow_function(
        ModifierFlags::NONE,
        None,
        Vec::<&Node>::new(),
        None,
        None,
        body,
    );
    let NodeShape::ArrowFunction(shape) = &arrow.shape else {
        panic!("expected an arrow function");
    };
    assert!(is_parenthesized(shape.body));
}

#[test]
fn test_prefix_unary_wraps_lower_precedence_operand() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // !(a + b)
    let sum = binary(
        &factory,
        factory.create_identifier("a"),
        SyntaxKind::PlusToken,
        factory.create_identifier("b"),
    );
    let negated = factory.create_prefix_unary_expression(SyntaxKind::ExclamationToken, sum);
    let NodeShape::PrefixUnaryExpression(shape) = &negated.shape else {
        panic!("expected a prefix unary");
    };
    assert!(is_parenthesized(shape.operand));

    let lone = factory
        .create_prefix_unary_expression(SyntaxKind::ExclamationToken, factory.create_identifier("a"));
    let NodeShape::PrefixUnaryExpression(shape) = &lone.shape else {
        panic!("expected a prefix unary");
    };
    assert!(!is_parenthesized(shape.operand));
}

#[test]
fn test_export_default_wraps_class_expression() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // export default (class {}) -- a bare `class` would parse as a
    // declaration.
    let class = factory.create_class_expression(
        ModifierFlags::NONE,
        None,
        None,
        None,
        Vec::<&Node>::new(),
    );
    let export = factory.create_export_assignment(false, class);
    let NodeShape::ExportAssignment(shape) = &export.shape else {
        panic!("expected an export assignment");
    };
    assert!(is_parenthesized(shape.expression));
}

#[test]
fn test_array_type_wraps_union_element() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    // (string | number)[]
    let union = factory.create_union_type_node(vec![
        factory.create_keyword_type_node(SyntaxKind::StringKeyword),
        factory.create_keyword_type_node(SyntaxKind::NumberKeyword),
    ]);
    let array = factory.create_array_type_node(union);
    let NodeShape::ArrayType(shape) = &array.shape else {
        panic!("expected an array type");
    };
    assert_eq!(shape.element_type.kind(), SyntaxKind::ParenthesizedType);
}

#[test]
fn test_computed_property_name_wraps_comma_expression() {
    let arena = AstArena::new();
    let factory = fixture(&arena);

    let comma = binary(
        &factory,
        factory.create_identifier("a"),
        SyntaxKind::CommaToken,
        factory.create_identifier("b"),
    );
    let name = factory.create_computed_property_name(comma);
    let NodeShape::ComputedPropertyName(shape) = &name.shape else {
        panic!("expected a computed property name");
    };
    assert!(is_parenthesized(shape.expression));
}
