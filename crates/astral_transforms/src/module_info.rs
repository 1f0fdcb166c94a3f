//! Single-pass collection of a source file's module surface: everything the
//! module transform passes need to know about its imports and exports.

use astral_core::collections::MultiMap;
use astral_core::debug;
use astral_core::InternedString;
use astral_ast::node::{Node, NodeShape};
use astral_ast::syntax_kind::SyntaxKind;
use astral_ast::types::{ModifierFlags, NodeId};
use astral_factory::NodeFactory;
use rustc_hash::{FxHashMap, FxHashSet};

/// The module name unscoped emit helpers are imported from.
pub const EXTERNAL_HELPERS_MODULE_NAME: &str = "tslib";

/// Summary of one file's module surface.
#[derive(Debug, Default)]
pub struct ExternalModuleInfo<'a> {
    /// Import-like statements that require a module-loader load, in source
    /// order.
    pub external_imports: Vec<&'a Node<'a>>,
    /// Synthesized import of the shared helpers module, when requested.
    pub external_helpers_import_declaration: Option<&'a Node<'a>>,
    /// Every export specifier re-exporting a local name, keyed by that local
    /// name.
    pub export_specifiers: MultiMap<InternedString, &'a Node<'a>>,
    /// Declaration identity to the identifiers that alias it on export.
    pub exported_bindings: FxHashMap<NodeId, Vec<&'a Node<'a>>>,
    /// Flat ordered list of all locally exported names, first occurrence per
    /// local name.
    pub exported_names: Vec<&'a Node<'a>>,
    /// The `export =` assignment, if the file has one.
    pub export_equals: Option<&'a Node<'a>>,
    /// Whether the file contains `export * from ...`.
    pub has_export_stars_to_export_values: bool,
}

/// Options controlling collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectorOptions {
    /// Synthesize a shared helpers-module import for the file.
    pub import_helpers: bool,
}

/// Resolution seam for associating export specifiers with the declarations
/// they ultimately refer to. The default resolves nothing.
pub trait ModuleInfoResolver<'a> {
    /// The declaration a re-exported name refers to, when known.
    fn referenced_declaration(&self, _name: &'a Node<'a>) -> Option<&'a Node<'a>> {
        None
    }
}

/// Resolver that never resolves anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullResolver;

impl<'a> ModuleInfoResolver<'a> for NullResolver {}

pub fn collect_external_module_info<'a>(
    file: &'a Node<'a>,
    factory: &NodeFactory<'a>,
    options: CollectorOptions,
    resolver: &dyn ModuleInfoResolver<'a>,
) -> ExternalModuleInfo<'a> {
    let NodeShape::SourceFile(source) = &file.shape else {
        debug::fail_bad_syntax_kind("collect_external_module_info", file.kind());
    };

    let mut collector = Collector {
        info: ExternalModuleInfo::default(),
        unique_exports: FxHashSet::default(),
        has_export_default: false,
        resolver,
    };

    if options.import_helpers {
        let helpers_import = create_external_helpers_import(factory, file);
        collector.info.external_helpers_import_declaration = Some(helpers_import);
        collector.info.external_imports.push(helpers_import);
    }

    for &statement in source.statements.iter() {
        collector.visit_statement(statement);
    }
    collector.info
}

struct Collector<'a, 'r> {
    info: ExternalModuleInfo<'a>,
    /// Local names already claimed in the flat exported-names list.
    unique_exports: FxHashSet<InternedString>,
    has_export_default: bool,
    resolver: &'r dyn ModuleInfoResolver<'a>,
}

impl<'a, 'r> Collector<'a, 'r> {
    fn visit_statement(&mut self, statement: &'a Node<'a>) {
        match &statement.shape {
            NodeShape::ImportDeclaration(_) => {
                self.info.external_imports.push(statement);
            }
            NodeShape::ImportEqualsDeclaration(import) => {
                if import.module_reference.kind() == SyntaxKind::ExternalModuleReference {
                    self.info.external_imports.push(statement);
                }
            }
            NodeShape::ExportDeclaration(export) => {
                if export.module_specifier.is_some() {
                    self.info.external_imports.push(statement);
                    match export.export_clause {
                        None => {
                            self.info.has_export_stars_to_export_values = true;
                        }
                        Some(clause) => self.visit_export_clause(statement, clause, true),
                    }
                } else if let Some(clause) = export.export_clause {
                    self.visit_export_clause(statement, clause, false);
                }
            }
            NodeShape::ExportAssignment(export) => {
                if export.is_export_equals && self.info.export_equals.is_none() {
                    self.info.export_equals = Some(statement);
                }
            }
            NodeShape::VariableStatement(var_statement) => {
                if statement.modifier_flags().contains(ModifierFlags::EXPORT) {
                    if let NodeShape::VariableDeclarationList(list) =
                        &var_statement.declaration_list.shape
                    {
                        for &declaration in list.declarations.iter() {
                            if let NodeShape::VariableDeclaration(decl) = &declaration.shape {
                                self.collect_exported_variable_names(decl.name);
                            }
                        }
                    }
                }
            }
            NodeShape::FunctionDeclaration(function) => {
                self.visit_exported_declaration(statement, function.name);
            }
            NodeShape::ClassLikeDeclaration(class)
                if statement.kind() == SyntaxKind::ClassDeclaration =>
            {
                self.visit_exported_declaration(statement, class.name);
            }
            _ => {}
        }
    }

    fn visit_export_clause(&mut self, statement: &'a Node<'a>, clause: &'a Node<'a>, re_export: bool) {
        match &clause.shape {
            NodeShape::NamedImportsOrExports(named) => {
                for &specifier in named.elements.iter() {
                    let NodeShape::ImportOrExportSpecifier(spec) = &specifier.shape else {
                        continue;
                    };
                    let local = spec.property_name.unwrap_or(spec.name);
                    let Some(local_text) = local.identifier_text() else {
                        continue;
                    };
                    if !re_export {
                        self.info.export_specifiers.insert(local_text, specifier);
                    }
                    if self.unique_exports.insert(local_text) {
                        self.info.exported_names.push(spec.name);
                        if let Some(declaration) = self.resolver.referenced_declaration(local) {
                            self.info
                                .exported_bindings
                                .entry(original_node_id(declaration))
                                .or_default()
                                .push(spec.name);
                        }
                    }
                }
            }
            NodeShape::NamespaceExport(namespace) => {
                if let Some(text) = namespace.name.identifier_text() {
                    if self.unique_exports.insert(text) {
                        self.info.exported_names.push(namespace.name);
                        self.info
                            .exported_bindings
                            .entry(original_node_id(statement))
                            .or_default()
                            .push(namespace.name);
                    }
                }
            }
            _ => {}
        }
    }

    fn visit_exported_declaration(&mut self, statement: &'a Node<'a>, name: Option<&'a Node<'a>>) {
        let flags = statement.modifier_flags();
        if !flags.contains(ModifierFlags::EXPORT) {
            return;
        }
        if flags.contains(ModifierFlags::DEFAULT) {
            // A file has a single default export; later ones are upstream
            // errors and ignored here.
            if !self.has_export_default {
                self.has_export_default = true;
                if let Some(name) = name {
                    self.info
                        .exported_bindings
                        .entry(original_node_id(statement))
                        .or_default()
                        .push(name);
                }
            }
            return;
        }
        let Some(name) = name else {
            return;
        };
        let Some(text) = name.identifier_text() else {
            return;
        };
        if self.unique_exports.insert(text) {
            self.info.exported_names.push(name);
            self.info
                .exported_bindings
                .entry(original_node_id(statement))
                .or_default()
                .push(name);
        }
    }

    fn collect_exported_variable_names(&mut self, name: &'a Node<'a>) {
        match &name.shape {
            NodeShape::Identifier(_) => {
                if let Some(text) = name.identifier_text() {
                    if self.unique_exports.insert(text) {
                        self.info.exported_names.push(name);
                    }
                }
            }
            NodeShape::ObjectBindingPattern(pattern) => {
                for &element in pattern.elements.iter() {
                    if let NodeShape::BindingElement(binding) = &element.shape {
                        self.collect_exported_variable_names(binding.name);
                    }
                }
            }
            NodeShape::ArrayBindingPattern(pattern) => {
                for &element in pattern.elements.iter() {
                    if let NodeShape::BindingElement(binding) = &element.shape {
                        self.collect_exported_variable_names(binding.name);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Identity of the parse-tree node a synthesized node ultimately replaced.
fn original_node_id<'a>(node: &'a Node<'a>) -> NodeId {
    let mut current = node;
    while let Some(original) = current.original() {
        current = original;
    }
    current.id()
}

/// `import * as tslib_N from "tslib"`, recorded on the file root so later
/// helper emission can reference the namespace binding.
fn create_external_helpers_import<'a>(
    factory: &NodeFactory<'a>,
    file: &'a Node<'a>,
) -> &'a Node<'a> {
    let module_name = factory.create_unique_name(EXTERNAL_HELPERS_MODULE_NAME);
    factory
        .emit
        .set_external_helpers_module_name(file, module_name);
    let namespace_import = factory.create_namespace_import(module_name);
    let import_clause = factory.create_import_clause(false, None, Some(namespace_import));
    factory.create_import_declaration(
        Some(import_clause),
        factory.create_string_literal(EXTERNAL_HELPERS_MODULE_NAME, false),
        None,
    )
}
