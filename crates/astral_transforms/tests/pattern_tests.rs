//! Binding-to-assignment pattern conversion tests.

use astral_core::arena::AstArena;
use astral_core::intern::StringInterner;
use astral_ast::node::{Node, NodeShape};
use astral_ast::syntax_kind::SyntaxKind;
use astral_factory::NodeFactory;
use astral_transforms::pattern::*;

fn factory_fixture(arena: &AstArena) -> NodeFactory<'_> {
    NodeFactory::new(arena, StringInterner::new())
}

#[test]
fn test_object_binding_pattern_becomes_object_literal() {
    let arena = AstArena::new();
    let factory = factory_fixture(&arena);

    // { a, b: c = 1, ...rest }
    let pattern = factory.create_object_binding_pattern(vec![
        factory.create_binding_element(None, None, factory.create_identifier("a"), None),
        factory.create_binding_element(
            None,
            Some(factory.create_identifier("b")),
            factory.create_identifier("c"),
            Some(factory.create_numeric_literal("1")),
        ),
        factory.create_binding_element(
            Some(factory.create_token(SyntaxKind::DotDotDotToken)),
            None,
            factory.create_identifier("rest"),
            None,
        ),
    ]);

    let converted = convert_to_assignment_pattern(&factory, pattern);
    let NodeShape::ObjectLiteralExpression(literal) = &converted.shape else {
        panic!("expected an object literal, got {:?}", converted.kind());
    };
    assert!(std::ptr::eq(converted.original().unwrap(), pattern));

    assert_eq!(literal.properties.len(), 3);
    assert_eq!(
        literal.properties[0].kind(),
        SyntaxKind::ShorthandPropertyAssignment
    );
    assert_eq!(literal.properties[2].kind(), SyntaxKind::SpreadAssignment);

    // `b: c = 1` turns into a property assignment over `c = 1`.
    let NodeShape::PropertyAssignment(property) = &literal.properties[1].shape else {
        panic!("expected a property assignment");
    };
    let NodeShape::BinaryExpression(binary) = &property.initializer.shape else {
        panic!("expected a defaulting assignment");
    };
    assert_eq!(binary.operator(), SyntaxKind::EqualsToken);
}

#[test]
fn test_array_binding_pattern_becomes_array_literal() {
    let arena = AstArena::new();
    let factory = factory_fixture(&arena);

    let name_a = factory.create_identifier("a");
    // [a, b = 1, ...rest]
    let pattern = factory.create_array_binding_pattern(vec![
        factory.create_binding_element(None, None, name_a, None),
        factory.create_binding_element(
            None,
            None,
            factory.create_identifier("b"),
            Some(factory.create_numeric_literal("1")),
        ),
        factory.create_binding_element(
            Some(factory.create_token(SyntaxKind::DotDotDotToken)),
            None,
            factory.create_identifier("rest"),
            None,
        ),
    ]);

    let converted = convert_to_assignment_pattern(&factory, pattern);
    let NodeShape::ArrayLiteralExpression(literal) = &converted.shape else {
        panic!("expected an array literal, got {:?}", converted.kind());
    };

    // A plain identifier element converts to the identifier itself.
    assert!(std::ptr::eq(literal.elements[0], name_a));
    assert_eq!(literal.elements[1].kind(), SyntaxKind::BinaryExpression);
    assert_eq!(literal.elements[2].kind(), SyntaxKind::SpreadElement);
}

#[test]
fn test_nested_patterns_convert_recursively() {
    let arena = AstArena::new();
    let factory = factory_fixture(&arena);

    // { a: [b] }
    let inner = factory.create_array_binding_pattern(vec![factory.create_binding_element(
        None,
        None,
        factory.create_identifier("b"),
        None,
    )]);
    let pattern = factory.create_object_binding_pattern(vec![factory.create_binding_element(
        None,
        Some(factory.create_identifier("a")),
        inner,
        None,
    )]);

    let converted = convert_to_object_assignment_pattern(&factory, pattern);
    let NodeShape::ObjectLiteralExpression(literal) = &converted.shape else {
        panic!("expected an object literal");
    };
    let NodeShape::PropertyAssignment(property) = &literal.properties[0].shape else {
        panic!("expected a property assignment");
    };
    assert_eq!(
        property.initializer.kind(),
        SyntaxKind::ArrayLiteralExpression
    );
}

#[test]
fn test_assignment_patterns_pass_through() {
    let arena = AstArena::new();
    let factory = factory_fixture(&arena);

    let literal = factory.create_object_literal_expression(Vec::<&Node>::new(), false);
    assert!(std::ptr::eq(
        convert_to_assignment_pattern(&factory, literal),
        literal
    ));
}

#[test]
fn test_target_recurses_through_wrappers() {
    let arena = AstArena::new();
    let factory = factory_fixture(&arena);

    let name = factory.create_identifier("a");
    let element = factory.create_binding_element(
        None,
        None,
        name,
        Some(factory.create_numeric_literal("1")),
    );
    assert!(std::ptr::eq(
        get_target_of_binding_or_assignment_element(element).unwrap(),
        name
    ));

    let spread = factory.create_spread_element(factory.create_assignment(
        name,
        factory.create_numeric_literal("2"),
    ));
    assert!(std::ptr::eq(
        get_target_of_binding_or_assignment_element(spread).unwrap(),
        name
    ));

    let omitted = factory.create_omitted_expression();
    assert!(get_target_of_binding_or_assignment_element(omitted).is_none());
}

#[test]
fn test_initializer_comes_from_each_concrete_shape() {
    let arena = AstArena::new();
    let factory = factory_fixture(&arena);

    let default = factory.create_numeric_literal("1");
    let element = factory.create_binding_element(
        None,
        None,
        factory.create_identifier("a"),
        Some(default),
    );
    assert!(std::ptr::eq(
        get_initializer_of_binding_or_assignment_element(element).unwrap(),
        default
    ));

    let assignment = factory.create_assignment(factory.create_identifier("a"), default);
    assert!(std::ptr::eq(
        get_initializer_of_binding_or_assignment_element(assignment).unwrap(),
        default
    ));

    let shorthand = factory
        .create_shorthand_property_assignment(factory.create_identifier("a"), Some(default));
    assert!(std::ptr::eq(
        get_initializer_of_binding_or_assignment_element(shorthand).unwrap(),
        default
    ));

    let property = factory.create_property_assignment(
        factory.create_identifier("a"),
        factory.create_identifier("b"),
    );
    assert!(get_initializer_of_binding_or_assignment_element(property).is_none());
}

#[test]
fn test_rest_indicator_identifies_rest_captures() {
    let arena = AstArena::new();
    let factory = factory_fixture(&arena);

    let dots = factory.create_token(SyntaxKind::DotDotDotToken);
    let rest = factory.create_binding_element(
        Some(dots),
        None,
        factory.create_identifier("rest"),
        None,
    );
    assert!(std::ptr::eq(
        get_rest_indicator_of_binding_or_assignment_element(rest).unwrap(),
        dots
    ));

    let spread = factory.create_spread_element(factory.create_identifier("a"));
    assert!(std::ptr::eq(
        get_rest_indicator_of_binding_or_assignment_element(spread).unwrap(),
        spread
    ));

    let plain =
        factory.create_binding_element(None, None, factory.create_identifier("a"), None);
    assert!(get_rest_indicator_of_binding_or_assignment_element(plain).is_none());
}

#[test]
fn test_property_name_prefers_the_explicit_name() {
    let arena = AstArena::new();
    let factory = factory_fixture(&arena);

    let explicit = factory.create_identifier("b");
    let element = factory.create_binding_element(
        None,
        Some(explicit),
        factory.create_identifier("c"),
        None,
    );
    assert!(std::ptr::eq(
        get_property_name_of_binding_or_assignment_element(element),
        explicit
    ));

    // A computed name over a string literal denotes the literal itself.
    let literal = factory.create_string_literal("key", false);
    let computed = factory.create_computed_property_name(literal);
    let element = factory.create_binding_element(
        None,
        Some(computed),
        factory.create_identifier("c"),
        None,
    );
    assert!(std::ptr::eq(
        get_property_name_of_binding_or_assignment_element(element),
        literal
    ));

    // With no explicit name, the target doubles as the property name.
    let name = factory.create_identifier("a");
    let shorthand = factory.create_shorthand_property_assignment(name, None);
    assert!(std::ptr::eq(
        get_property_name_of_binding_or_assignment_element(shorthand),
        name
    ));
}
