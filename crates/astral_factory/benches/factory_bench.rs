use criterion::{black_box, criterion_group, criterion_main, Criterion};

use astral_core::arena::AstArena;
use astral_core::intern::StringInterner;
use astral_ast::node::Node;
use astral_ast::syntax_kind::SyntaxKind;
use astral_factory::NodeFactory;

/// Builds `f(a + b * c, i)` for a spread of identifiers: a mix of cheap
/// token nodes, parenthesizer checks, and transform-flag aggregation.
fn build_expressions<'a>(factory: &NodeFactory<'a>, count: usize) -> Vec<&'a Node<'a>> {
    let mut out = Vec::with_capacity(count);
    for index in 0..count {
        let product = factory.create_binary_expression(
            factory.create_identifier("b"),
            SyntaxKind::AsteriskToken,
            factory.create_identifier("c"),
        );
        let sum = factory.create_binary_expression(
            factory.create_identifier("a"),
            SyntaxKind::PlusToken,
            product,
        );
        let call = factory.create_call_expression(
            factory.create_identifier("f"),
            None,
            vec![sum, factory.create_numeric_literal(&index.to_string())],
        );
        out.push(call);
    }
    out
}

fn bench_synthesize_expressions(c: &mut Criterion) {
    c.bench_function("synthesize_call_expressions_1k", |b| {
        b.iter(|| {
            let arena = AstArena::new();
            let factory = NodeFactory::new(&arena, StringInterner::new());
            black_box(build_expressions(&factory, 1000));
        });
    });
}

fn bench_update_no_op(c: &mut Criterion) {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());
    let calls = build_expressions(&factory, 1000);

    c.bench_function("update_call_expressions_no_op_1k", |b| {
        b.iter(|| {
            for &call in &calls {
                let astral_ast::node::NodeShape::CallExpression(shape) = &call.shape else {
                    unreachable!();
                };
                black_box(factory.update_call_expression(
                    call,
                    shape.expression,
                    shape.type_arguments,
                    shape.arguments,
                ));
            }
        });
    });
}

fn bench_generated_names(c: &mut Criterion) {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    c.bench_function("create_unique_names_1k", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(factory.create_unique_name("tmp"));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_synthesize_expressions,
    bench_update_no_op,
    bench_generated_names
);
criterion_main!(benches);
