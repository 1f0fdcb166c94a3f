//! Node synthesis, update, and emit side-table tests.

use astral_core::arena::AstArena;
use astral_core::intern::StringInterner;
use astral_core::text::TextRange;
use astral_ast::node::NodeShape;
use astral_ast::syntax_kind::SyntaxKind;
use astral_ast::types::{EmitFlags, NodeFlags};
use astral_factory::{CommentKind, EmitHelper, NodeFactory, SyntheticComment};

fn comment(text: &str) -> SyntheticComment {
    SyntheticComment {
        kind: CommentKind::SingleLine,
        text: text.to_string(),
        has_trailing_new_line: true,
    }
}

fn helper(name: &str) -> EmitHelper {
    EmitHelper {
        name: name.to_string(),
        scoped: false,
        text: format!("var {} = function () {{}};", name),
    }
}

#[test]
fn test_synthesized_nodes_have_fresh_ids_and_the_flag() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let a = factory.create_identifier("a");
    let b = factory.create_identifier("b");
    assert!(a.is_synthesized());
    assert!(b.is_synthesized());
    assert_ne!(a.id(), b.id());
    assert_eq!(a.range(), TextRange::SYNTHESIZED);
}

#[test]
fn test_update_with_identical_children_returns_the_node() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let left = factory.create_identifier("a");
    let right = factory.create_identifier("b");
    let binary = factory.create_binary_expression(left, SyntaxKind::PlusToken, right);
    let NodeShape::BinaryExpression(shape) = &binary.shape else {
        panic!("expected a binary expression");
    };

    let updated = factory.update_binary_expression(binary, left, shape.operator_token, right);
    assert!(std::ptr::eq(updated, binary));
    assert!(updated.original().is_none());
}

#[test]
fn test_update_with_new_children_inherits_identity() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let left = factory.create_identifier("a");
    let right = factory.create_identifier("b");
    let binary = factory.create_binary_expression(left, SyntaxKind::PlusToken, right);
    binary.set_range(TextRange::new(10, 15));
    factory.emit.set_emit_flags(binary, EmitFlags::NO_COMMENTS);
    factory.emit.add_synthetic_leading_comment(binary, comment("c1"));

    let NodeShape::BinaryExpression(shape) = &binary.shape else {
        panic!("expected a binary expression");
    };
    let new_right = factory.create_identifier("c");
    let updated = factory.update_binary_expression(binary, left, shape.operator_token, new_right);

    assert!(!std::ptr::eq(updated, binary));
    assert!(std::ptr::eq(updated.original().unwrap(), binary));
    assert_eq!(updated.range(), binary.range());
    // The replaced node's emit metadata carries over, never dropped.
    assert!(factory
        .emit
        .get_emit_flags(updated)
        .contains(EmitFlags::NO_COMMENTS));
    assert_eq!(
        factory.emit.get_synthetic_leading_comments(updated),
        vec![comment("c1")]
    );
}

#[test]
fn test_node_array_reuse_is_idempotent() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let elements = vec![
        factory.create_identifier("a"),
        factory.create_identifier("b"),
    ];
    let array = factory.create_node_array(elements, false);
    let again = factory.create_node_array(array, false);
    assert!(std::ptr::eq(array, again));

    // An array synthesized from nothing carries no source positions.
    assert_eq!(
        factory.empty_node_array().range.get(),
        TextRange::SYNTHESIZED
    );
}

#[test]
fn test_generated_ids_are_strictly_increasing() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let names = [
        factory.create_temp_variable(),
        factory.create_loop_variable(),
        factory.create_unique_name("helper"),
        factory.create_temp_variable(),
    ];
    let ids: Vec<u32> = names
        .iter()
        .map(|name| name.as_identifier().unwrap().auto_generate.unwrap().id)
        .collect();
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_generated_name_for_node_targets_the_node() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let declaration_name = factory.create_identifier("foo");
    let generated = factory.get_generated_name_for_node(declaration_name);
    let info = generated.as_identifier().unwrap().auto_generate.unwrap();
    assert_eq!(info.target, Some(declaration_name.id()));
    assert_eq!(
        factory
            .interner()
            .resolve(generated.identifier_text().unwrap()),
        "foo"
    );
}

#[test]
fn test_emit_merge_orders_source_before_destination() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let a = factory.create_identifier("a");
    factory.emit.add_synthetic_leading_comment(a, comment("c1"));
    factory.emit.add_emit_helper(a, helper("h1"));

    let b = factory.create_identifier("b");
    factory.emit.add_synthetic_leading_comment(b, comment("c2"));

    factory.emit.merge_emit_info(a, b);
    assert_eq!(
        factory.emit.get_synthetic_leading_comments(b),
        vec![comment("c1"), comment("c2")]
    );
    assert_eq!(factory.emit.get_emit_helpers(b), vec![helper("h1")]);
}

#[test]
fn test_emit_merge_dedups_helpers_by_name() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let a = factory.create_identifier("a");
    factory.emit.add_emit_helper(a, helper("h1"));
    let b = factory.create_identifier("b");
    factory.emit.add_emit_helper(b, helper("h1"));

    factory.emit.merge_emit_info(a, b);
    assert_eq!(factory.emit.get_emit_helpers(b).len(), 1);
}

#[test]
fn test_dispose_clears_every_annotated_node() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    // Simulate a parse tree: clear the synthesized flag and wire parents,
    // the way a parser-built file arrives at the transform pipeline.
    let statement = factory.create_empty_statement();
    let file = factory.create_source_file(vec![statement], "main.ts", false);
    statement.set_flags(statement.flags() & !NodeFlags::SYNTHESIZED);
    file.set_flags(file.flags() & !NodeFlags::SYNTHESIZED);
    statement.set_parent(Some(file));

    factory.emit.set_emit_flags(statement, EmitFlags::NO_COMMENTS);
    factory.emit.add_synthetic_leading_comment(statement, comment("c1"));
    factory.emit.add_emit_helper(statement, helper("h1"));
    assert!(factory.emit.has_emit_node(statement));

    factory.emit.dispose_emit_nodes(file);
    assert!(!factory.emit.has_emit_node(statement));
    assert_eq!(factory.emit.get_emit_flags(statement), EmitFlags::NONE);
    assert!(factory
        .emit
        .get_synthetic_leading_comments(statement)
        .is_empty());
    assert!(factory.emit.get_emit_helpers(statement).is_empty());
}

#[test]
fn test_mutable_clone_gets_a_new_identity() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let original = factory.create_identifier("a");
    original.set_range(TextRange::new(3, 4));
    let clone = factory.get_mutable_clone(original);

    assert!(!std::ptr::eq(clone, original));
    assert_ne!(clone.id(), original.id());
    assert!(std::ptr::eq(clone.original().unwrap(), original));
    assert_eq!(clone.range(), original.range());
}

#[test]
fn test_string_literal_from_node_remembers_its_source() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let name = factory.create_identifier("foo");
    let literal = factory.create_string_literal_from_node(name);
    let NodeShape::StringLiteral(shape) = &literal.shape else {
        panic!("expected a string literal");
    };
    assert_eq!(factory.interner().resolve(shape.text), "foo");
    assert!(shape.text_source.is_some());
}

#[test]
fn test_optional_chain_updates_stay_on_the_chain_path() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let base = factory.create_identifier("a");
    let question_dot = factory.create_token(SyntaxKind::QuestionDotToken);
    let chain = factory.create_property_access_chain(
        base,
        Some(question_dot),
        factory.create_identifier("b"),
    );
    assert!(chain.flags().contains(NodeFlags::OPTIONAL_CHAIN));

    let new_name = factory.create_identifier("c");
    let updated = factory.update_property_access_expression(chain, base, new_name);
    assert!(updated.flags().contains(NodeFlags::OPTIONAL_CHAIN));
    let NodeShape::PropertyAccessExpression(shape) = &updated.shape else {
        panic!("expected a property access");
    };
    assert!(shape.question_dot_token.is_some());
}

#[test]
fn test_comma_list_flattens_plain_synthesized_elements() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let inner = factory.create_comma_list_expression(vec![
        factory.create_identifier("a"),
        factory.create_identifier("b"),
    ]);
    let outer =
        factory.create_comma_list_expression(vec![inner, factory.create_identifier("c")]);
    let NodeShape::CommaListExpression(shape) = &outer.shape else {
        panic!("expected a comma list");
    };
    assert_eq!(shape.elements.len(), 3);
}

#[test]
fn test_source_file_update_keeps_file_identity() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let file = factory.create_source_file(
        vec![factory.create_empty_statement()],
        "main.ts",
        false,
    );
    let statements = factory.create_node_array(
        vec![factory.create_empty_statement(), factory.create_empty_statement()],
        false,
    );
    let updated = factory.update_source_file(file, statements);

    assert!(!std::ptr::eq(updated, file));
    assert!(std::ptr::eq(updated.original().unwrap(), file));
    let (NodeShape::SourceFile(old), NodeShape::SourceFile(new)) = (&file.shape, &updated.shape)
    else {
        panic!("expected source files");
    };
    assert_eq!(new.file_name, old.file_name);
    assert!(std::ptr::eq(new.end_of_file_token, old.end_of_file_token));
    assert_eq!(new.statements.len(), 2);
}
