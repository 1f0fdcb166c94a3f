//! Module-info collector tests.

use astral_core::arena::AstArena;
use astral_core::intern::StringInterner;
use astral_ast::node::Node;
use astral_ast::syntax_kind::SyntaxKind;
use astral_ast::types::{ModifierFlags, NodeFlags};
use astral_factory::NodeFactory;
use astral_transforms::{
    collect_external_module_info, CollectorOptions, ModuleInfoResolver, NullResolver,
    EXTERNAL_HELPERS_MODULE_NAME,
};

fn text<'a>(factory: &NodeFactory<'a>, node: &'a Node<'a>) -> String {
    factory
        .interner()
        .resolve(node.identifier_text().unwrap())
        .to_string()
}

/// `export { local as exported };`
fn named_export<'a>(
    factory: &NodeFactory<'a>,
    local: &str,
    exported: &str,
) -> &'a Node<'a> {
    let specifier = factory.create_export_specifier(
        false,
        Some(factory.create_identifier(local)),
        factory.create_identifier(exported),
    );
    factory.create_export_declaration(
        ModifierFlags::NONE,
        false,
        Some(factory.create_named_exports(vec![specifier])),
        None,
        None,
    )
}

#[test]
fn test_duplicate_local_exports_share_a_multimap_entry() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let file = factory.create_source_file(
        vec![
            named_export(&factory, "a", "x"),
            named_export(&factory, "a", "y"),
        ],
        "main.ts",
        false,
    );
    let info =
        collect_external_module_info(file, &factory, CollectorOptions::default(), &NullResolver);

    let key = factory.interner().intern("a");
    let specifiers = info.export_specifiers.get(&key).expect("local name recorded");
    assert_eq!(specifiers.len(), 2);
    assert_eq!(text(&factory, specifiers[0]), "x");
    assert_eq!(text(&factory, specifiers[1]), "y");

    // First occurrence wins in the flat list.
    assert_eq!(info.exported_names.len(), 1);
    assert_eq!(text(&factory, info.exported_names[0]), "x");
}

#[test]
fn test_imports_and_export_stars_are_external_imports() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let import = factory.create_import_declaration(
        Some(factory.create_import_clause(
            false,
            Some(factory.create_identifier("dep")),
            None,
        )),
        factory.create_string_literal("dep", false),
        None,
    );
    let star = factory.create_export_declaration(
        ModifierFlags::NONE,
        false,
        None,
        Some(factory.create_string_literal("other", false)),
        None,
    );
    let file = factory.create_source_file(vec![import, star], "main.ts", false);
    let info =
        collect_external_module_info(file, &factory, CollectorOptions::default(), &NullResolver);

    assert_eq!(info.external_imports.len(), 2);
    assert!(std::ptr::eq(info.external_imports[0], import));
    assert!(std::ptr::eq(info.external_imports[1], star));
    assert!(info.has_export_stars_to_export_values);
    assert!(info.export_specifiers.is_empty());
}

#[test]
fn test_reexport_with_clause_is_external_but_not_a_specifier_entry() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let specifier =
        factory.create_export_specifier(false, None, factory.create_identifier("x"));
    let reexport = factory.create_export_declaration(
        ModifierFlags::NONE,
        false,
        Some(factory.create_named_exports(vec![specifier])),
        Some(factory.create_string_literal("other", false)),
        None,
    );
    let file = factory.create_source_file(vec![reexport], "main.ts", false);
    let info =
        collect_external_module_info(file, &factory, CollectorOptions::default(), &NullResolver);

    assert_eq!(info.external_imports.len(), 1);
    assert!(!info.has_export_stars_to_export_values);
    // Local-name specifiers are only recorded for clause-without-specifier
    // exports; the name still lands in the flat list.
    assert!(info.export_specifiers.is_empty());
    assert_eq!(info.exported_names.len(), 1);
    assert_eq!(text(&factory, info.exported_names[0]), "x");
}

#[test]
fn test_export_equals_first_wins() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let first = factory.create_export_assignment(true, factory.create_identifier("a"));
    let second = factory.create_export_assignment(true, factory.create_identifier("b"));
    let file = factory.create_source_file(vec![first, second], "main.ts", false);
    let info =
        collect_external_module_info(file, &factory, CollectorOptions::default(), &NullResolver);

    assert!(std::ptr::eq(info.export_equals.unwrap(), first));
}

#[test]
fn test_export_default_is_not_export_equals() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let default = factory.create_export_assignment(false, factory.create_identifier("a"));
    let file = factory.create_source_file(vec![default], "main.ts", false);
    let info =
        collect_external_module_info(file, &factory, CollectorOptions::default(), &NullResolver);

    assert!(info.export_equals.is_none());
}

#[test]
fn test_exported_variable_statement_records_pattern_names() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    // export const { a, b: c } = expr;
    let pattern = factory.create_object_binding_pattern(vec![
        factory.create_binding_element(None, None, factory.create_identifier("a"), None),
        factory.create_binding_element(
            None,
            Some(factory.create_identifier("b")),
            factory.create_identifier("c"),
            None,
        ),
    ]);
    let declaration = factory.create_variable_declaration(
        pattern,
        None,
        None,
        Some(factory.create_identifier("expr")),
    );
    let statement = factory.create_variable_statement(
        ModifierFlags::EXPORT,
        factory.create_variable_declaration_list(NodeFlags::CONST, vec![declaration]),
    );
    let file = factory.create_source_file(vec![statement], "main.ts", false);
    let info =
        collect_external_module_info(file, &factory, CollectorOptions::default(), &NullResolver);

    let names: Vec<String> = info
        .exported_names
        .iter()
        .map(|&name| text(&factory, name))
        .collect();
    assert_eq!(names, vec!["a".to_string(), "c".to_string()]);
}

#[test]
fn test_exported_function_names_dedup_against_specifiers() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let function = factory.create_function_declaration(
        ModifierFlags::EXPORT,
        None,
        Some(factory.create_identifier("f")),
        None,
        Vec::<&Node>::new(),
        None,
        Some(factory.create_block(Vec::<&Node>::new(), true)),
    );
    let file = factory.create_source_file(
        vec![function, named_export(&factory, "f", "f")],
        "main.ts",
        false,
    );
    let info =
        collect_external_module_info(file, &factory, CollectorOptions::default(), &NullResolver);

    assert_eq!(info.exported_names.len(), 1);
    assert_eq!(
        info.exported_bindings.get(&function.id()).map(|b| b.len()),
        Some(1)
    );
}

#[test]
fn test_default_export_recognized_once() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let first = factory.create_function_declaration(
        ModifierFlags::EXPORT | ModifierFlags::DEFAULT,
        None,
        Some(factory.create_identifier("f")),
        None,
        Vec::<&Node>::new(),
        None,
        Some(factory.create_block(Vec::<&Node>::new(), true)),
    );
    let second = factory.create_class_declaration(
        ModifierFlags::EXPORT | ModifierFlags::DEFAULT,
        Some(factory.create_identifier("C")),
        None,
        None,
        Vec::<&Node>::new(),
    );
    let file = factory.create_source_file(vec![first, second], "main.ts", false);
    let info =
        collect_external_module_info(file, &factory, CollectorOptions::default(), &NullResolver);

    assert_eq!(info.exported_bindings.get(&first.id()).map(|b| b.len()), Some(1));
    assert!(info.exported_bindings.get(&second.id()).is_none());
    // Default exports never join the named list.
    assert!(info.exported_names.is_empty());
}

#[test]
fn test_import_helpers_synthesizes_the_helpers_import() {
    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let file = factory.create_source_file(Vec::<&Node>::new(), "main.ts", false);
    let options = CollectorOptions {
        import_helpers: true,
    };
    let info = collect_external_module_info(file, &factory, options, &NullResolver);

    let import = info
        .external_helpers_import_declaration
        .expect("helpers import synthesized");
    assert_eq!(import.kind(), SyntaxKind::ImportDeclaration);
    assert!(std::ptr::eq(info.external_imports[0], import));

    let name = factory
        .emit
        .get_external_helpers_module_name(file)
        .expect("module name recorded on the file root");
    assert_eq!(
        factory.interner().resolve(name.identifier_text().unwrap()),
        EXTERNAL_HELPERS_MODULE_NAME
    );
}

#[test]
fn test_resolver_populates_exported_bindings_for_specifiers() {
    struct FixedResolver<'a> {
        declaration: &'a Node<'a>,
    }

    impl<'a> ModuleInfoResolver<'a> for FixedResolver<'a> {
        fn referenced_declaration(&self, _name: &'a Node<'a>) -> Option<&'a Node<'a>> {
            Some(self.declaration)
        }
    }

    let arena = AstArena::new();
    let factory = NodeFactory::new(&arena, StringInterner::new());

    let declaration = factory.create_function_declaration(
        ModifierFlags::NONE,
        None,
        Some(factory.create_identifier("a")),
        None,
        Vec::<&Node>::new(),
        None,
        Some(factory.create_block(Vec::<&Node>::new(), true)),
    );
    let file = factory.create_source_file(
        vec![declaration, named_export(&factory, "a", "x")],
        "main.ts",
        false,
    );
    let resolver = FixedResolver { declaration };
    let info =
        collect_external_module_info(file, &factory, CollectorOptions::default(), &resolver);

    let aliases = info
        .exported_bindings
        .get(&declaration.id())
        .expect("specifier resolved to its declaration");
    assert_eq!(aliases.len(), 1);
    assert_eq!(text(&factory, aliases[0]), "x");
}
