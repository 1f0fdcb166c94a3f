//! Single-level child traversal.

use crate::node::{Node, NodeArray, NodeShape};

#[inline]
fn visit_opt<'a>(node: Option<&'a Node<'a>>, f: &mut impl FnMut(&'a Node<'a>)) {
    if let Some(node) = node {
        f(node);
    }
}

#[inline]
fn visit_array<'a>(array: &'a NodeArray<'a>, f: &mut impl FnMut(&'a Node<'a>)) {
    for element in array.iter() {
        f(element);
    }
}

#[inline]
fn visit_opt_array<'a>(array: Option<&'a NodeArray<'a>>, f: &mut impl FnMut(&'a Node<'a>)) {
    if let Some(array) = array {
        visit_array(array, f);
    }
}

/// Invoke `f` once per direct child of `node`, in source order. Token
/// children (question marks, operator tokens, ...) are visited like any
/// other child.
pub fn for_each_child<'a>(node: &'a Node<'a>, f: &mut impl FnMut(&'a Node<'a>)) {
    match &node.shape {
        NodeShape::Token
        | NodeShape::NumericLiteral(_)
        | NodeShape::BigIntLiteral(_)
        | NodeShape::StringLiteral(_)
        | NodeShape::RegularExpressionLiteral(_)
        | NodeShape::TemplateLiteralFragment(_)
        | NodeShape::Identifier(_)
        | NodeShape::PrivateIdentifier(_)
        | NodeShape::JsxText(_) => {}

        NodeShape::QualifiedName(name) => {
            f(name.left);
            f(name.right);
        }
        NodeShape::ComputedPropertyName(name) => f(name.expression),

        NodeShape::TypeParameter(tp) => {
            f(tp.name);
            visit_opt(tp.constraint, f);
            visit_opt(tp.default, f);
        }
        NodeShape::Parameter(param) => {
            visit_opt(param.dot_dot_dot_token, f);
            f(param.name);
            visit_opt(param.question_token, f);
            visit_opt(param.type_node, f);
            visit_opt(param.initializer, f);
        }
        NodeShape::Decorator(decorator) => f(decorator.expression),

        NodeShape::PropertySignature(prop) => {
            f(prop.name);
            visit_opt(prop.question_token, f);
            visit_opt(prop.type_node, f);
        }
        NodeShape::PropertyDeclaration(prop) => {
            f(prop.name);
            visit_opt(prop.question_token, f);
            visit_opt(prop.exclamation_token, f);
            visit_opt(prop.type_node, f);
            visit_opt(prop.initializer, f);
        }
        NodeShape::MethodSignature(method) => {
            f(method.name);
            visit_opt(method.question_token, f);
            visit_opt_array(method.type_parameters, f);
            visit_array(method.parameters, f);
            visit_opt(method.type_node, f);
        }
        NodeShape::MethodDeclaration(method) => {
            visit_opt(method.asterisk_token, f);
            f(method.name);
            visit_opt(method.question_token, f);
            visit_opt_array(method.type_parameters, f);
            visit_array(method.parameters, f);
            visit_opt(method.type_node, f);
            visit_opt(method.body, f);
        }
        NodeShape::ClassStaticBlockDeclaration(block) => f(block.body),
        NodeShape::ConstructorDeclaration(ctor) => {
            visit_array(ctor.parameters, f);
            visit_opt(ctor.body, f);
        }
        NodeShape::AccessorDeclaration(accessor) => {
            f(accessor.name);
            visit_array(accessor.parameters, f);
            visit_opt(accessor.type_node, f);
            visit_opt(accessor.body, f);
        }
        NodeShape::SignatureDeclaration(sig) => {
            visit_opt_array(sig.type_parameters, f);
            visit_array(sig.parameters, f);
            visit_opt(sig.type_node, f);
        }
        NodeShape::IndexSignature(sig) => {
            visit_array(sig.parameters, f);
            visit_opt(sig.type_node, f);
        }

        NodeShape::TypePredicate(pred) => {
            f(pred.parameter_name);
            visit_opt(pred.type_node, f);
        }
        NodeShape::TypeReference(reference) => {
            f(reference.type_name);
            visit_opt_array(reference.type_arguments, f);
        }
        NodeShape::FunctionTypeLike(func) => {
            visit_opt_array(func.type_parameters, f);
            visit_array(func.parameters, f);
            f(func.type_node);
        }
        NodeShape::TypeQuery(query) => {
            f(query.expr_name);
            visit_opt_array(query.type_arguments, f);
        }
        NodeShape::TypeLiteral(literal) => visit_array(literal.members, f),
        NodeShape::ArrayType(array) => f(array.element_type),
        NodeShape::TupleType(tuple) => visit_array(tuple.elements, f),
        NodeShape::WrappedType(wrapped) => f(wrapped.type_node),
        NodeShape::CompositeType(composite) => visit_array(composite.types, f),
        NodeShape::ConditionalType(conditional) => {
            f(conditional.check_type);
            f(conditional.extends_type);
            f(conditional.true_type);
            f(conditional.false_type);
        }
        NodeShape::InferType(infer) => f(infer.type_parameter),
        NodeShape::TypeOperator(operator) => f(operator.type_node),
        NodeShape::IndexedAccessType(access) => {
            f(access.object_type);
            f(access.index_type);
        }
        NodeShape::MappedType(mapped) => {
            visit_opt(mapped.readonly_token, f);
            f(mapped.type_parameter);
            visit_opt(mapped.name_type, f);
            visit_opt(mapped.question_token, f);
            visit_opt(mapped.type_node, f);
            visit_opt_array(mapped.members, f);
        }
        NodeShape::LiteralType(literal) => f(literal.literal),
        NodeShape::NamedTupleMember(member) => {
            visit_opt(member.dot_dot_dot_token, f);
            f(member.name);
            visit_opt(member.question_token, f);
            f(member.type_node);
        }
        NodeShape::TemplateLiteralType(template) => {
            f(template.head);
            visit_array(template.template_spans, f);
        }
        NodeShape::TemplateLiteralTypeSpan(span) => {
            f(span.type_node);
            f(span.literal);
        }
        NodeShape::ImportType(import) => {
            f(import.argument);
            visit_opt(import.attributes, f);
            visit_opt(import.qualifier, f);
            visit_opt_array(import.type_arguments, f);
        }
        NodeShape::ExpressionWithTypeArguments(ewta) => {
            f(ewta.expression);
            visit_opt_array(ewta.type_arguments, f);
        }

        NodeShape::ObjectBindingPattern(pattern) => visit_array(pattern.elements, f),
        NodeShape::ArrayBindingPattern(pattern) => visit_array(pattern.elements, f),
        NodeShape::BindingElement(element) => {
            visit_opt(element.dot_dot_dot_token, f);
            visit_opt(element.property_name, f);
            f(element.name);
            visit_opt(element.initializer, f);
        }

        NodeShape::ArrayLiteralExpression(array) => visit_array(array.elements, f),
        NodeShape::ObjectLiteralExpression(object) => visit_array(object.properties, f),
        NodeShape::PropertyAccessExpression(access) => {
            f(access.expression);
            visit_opt(access.question_dot_token, f);
            f(access.name);
        }
        NodeShape::ElementAccessExpression(access) => {
            f(access.expression);
            visit_opt(access.question_dot_token, f);
            f(access.argument_expression);
        }
        NodeShape::CallExpression(call) => {
            f(call.expression);
            visit_opt(call.question_dot_token, f);
            visit_opt_array(call.type_arguments, f);
            visit_array(call.arguments, f);
        }
        NodeShape::NewExpression(new) => {
            f(new.expression);
            visit_opt_array(new.type_arguments, f);
            visit_opt_array(new.arguments, f);
        }
        NodeShape::TaggedTemplateExpression(tagged) => {
            f(tagged.tag);
            visit_opt_array(tagged.type_arguments, f);
            f(tagged.template);
        }
        NodeShape::TypeAssertionExpression(assertion) => {
            f(assertion.type_node);
            f(assertion.expression);
        }
        NodeShape::ParenthesizedExpression(paren) => f(paren.expression),
        NodeShape::FunctionExpression(func) => {
            visit_opt(func.asterisk_token, f);
            visit_opt(func.name, f);
            visit_opt_array(func.type_parameters, f);
            visit_array(func.parameters, f);
            visit_opt(func.type_node, f);
            f(func.body);
        }
        NodeShape::ArrowFunction(arrow) => {
            visit_opt_array(arrow.type_parameters, f);
            visit_array(arrow.parameters, f);
            visit_opt(arrow.type_node, f);
            f(arrow.equals_greater_than_token);
            f(arrow.body);
        }
        NodeShape::SimpleUnaryExpression(unary) => f(unary.expression),
        NodeShape::PrefixUnaryExpression(prefix) => f(prefix.operand),
        NodeShape::PostfixUnaryExpression(postfix) => f(postfix.operand),
        NodeShape::BinaryExpression(binary) => {
            f(binary.left);
            f(binary.operator_token);
            f(binary.right);
        }
        NodeShape::ConditionalExpression(conditional) => {
            f(conditional.condition);
            f(conditional.question_token);
            f(conditional.when_true);
            f(conditional.colon_token);
            f(conditional.when_false);
        }
        NodeShape::TemplateExpression(template) => {
            f(template.head);
            visit_array(template.template_spans, f);
        }
        NodeShape::TemplateSpan(span) => {
            f(span.expression);
            f(span.literal);
        }
        NodeShape::YieldExpression(yield_expr) => {
            visit_opt(yield_expr.asterisk_token, f);
            visit_opt(yield_expr.expression, f);
        }
        NodeShape::SpreadElement(spread) => f(spread.expression),
        NodeShape::ClassLikeDeclaration(class) => {
            visit_opt(class.name, f);
            visit_opt_array(class.type_parameters, f);
            visit_opt_array(class.heritage_clauses, f);
            visit_array(class.members, f);
        }
        NodeShape::AsExpression(as_expr) => {
            f(as_expr.expression);
            f(as_expr.type_node);
        }
        NodeShape::NonNullExpression(non_null) => f(non_null.expression),
        NodeShape::MetaProperty(meta) => f(meta.name),
        NodeShape::SatisfiesExpression(satisfies) => {
            f(satisfies.expression);
            f(satisfies.type_node);
        }
        NodeShape::PartiallyEmittedExpression(pee) => f(pee.expression),
        NodeShape::CommaListExpression(comma) => visit_array(comma.elements, f),

        NodeShape::Block(block) => visit_array(block.statements, f),
        NodeShape::VariableStatement(stmt) => f(stmt.declaration_list),
        NodeShape::ExpressionStatement(stmt) => f(stmt.expression),
        NodeShape::IfStatement(stmt) => {
            f(stmt.expression);
            f(stmt.then_statement);
            visit_opt(stmt.else_statement, f);
        }
        NodeShape::DoStatement(stmt) => {
            f(stmt.statement);
            f(stmt.expression);
        }
        NodeShape::WhileStatement(stmt) => {
            f(stmt.expression);
            f(stmt.statement);
        }
        NodeShape::ForStatement(stmt) => {
            visit_opt(stmt.initializer, f);
            visit_opt(stmt.condition, f);
            visit_opt(stmt.incrementor, f);
            f(stmt.statement);
        }
        NodeShape::ForInStatement(stmt) => {
            f(stmt.initializer);
            f(stmt.expression);
            f(stmt.statement);
        }
        NodeShape::ForOfStatement(stmt) => {
            f(stmt.initializer);
            f(stmt.expression);
            f(stmt.statement);
        }
        NodeShape::BreakOrContinueStatement(stmt) => visit_opt(stmt.label, f),
        NodeShape::ReturnStatement(stmt) => visit_opt(stmt.expression, f),
        NodeShape::WithStatement(stmt) => {
            f(stmt.expression);
            f(stmt.statement);
        }
        NodeShape::SwitchStatement(stmt) => {
            f(stmt.expression);
            f(stmt.case_block);
        }
        NodeShape::LabeledStatement(stmt) => {
            f(stmt.label);
            f(stmt.statement);
        }
        NodeShape::ThrowStatement(stmt) => f(stmt.expression),
        NodeShape::TryStatement(stmt) => {
            f(stmt.try_block);
            visit_opt(stmt.catch_clause, f);
            visit_opt(stmt.finally_block, f);
        }

        NodeShape::VariableDeclaration(decl) => {
            f(decl.name);
            visit_opt(decl.exclamation_token, f);
            visit_opt(decl.type_node, f);
            visit_opt(decl.initializer, f);
        }
        NodeShape::VariableDeclarationList(list) => visit_array(list.declarations, f),
        NodeShape::FunctionDeclaration(func) => {
            visit_opt(func.asterisk_token, f);
            visit_opt(func.name, f);
            visit_opt_array(func.type_parameters, f);
            visit_array(func.parameters, f);
            visit_opt(func.type_node, f);
            visit_opt(func.body, f);
        }
        NodeShape::InterfaceDeclaration(interface) => {
            f(interface.name);
            visit_opt_array(interface.type_parameters, f);
            visit_opt_array(interface.heritage_clauses, f);
            visit_array(interface.members, f);
        }
        NodeShape::TypeAliasDeclaration(alias) => {
            f(alias.name);
            visit_opt_array(alias.type_parameters, f);
            f(alias.type_node);
        }
        NodeShape::EnumDeclaration(decl) => {
            f(decl.name);
            visit_array(decl.members, f);
        }
        NodeShape::ModuleDeclaration(module) => {
            f(module.name);
            visit_opt(module.body, f);
        }
        NodeShape::ModuleBlock(block) => visit_array(block.statements, f),
        NodeShape::CaseBlock(block) => visit_array(block.clauses, f),

        NodeShape::ImportEqualsDeclaration(import) => {
            f(import.name);
            f(import.module_reference);
        }
        NodeShape::ImportDeclaration(import) => {
            visit_opt(import.import_clause, f);
            f(import.module_specifier);
            visit_opt(import.attributes, f);
        }
        NodeShape::ImportClause(clause) => {
            visit_opt(clause.name, f);
            visit_opt(clause.named_bindings, f);
        }
        NodeShape::NamespaceImport(import) => f(import.name),
        NodeShape::NamespaceExport(export) => f(export.name),
        NodeShape::NamedImportsOrExports(named) => visit_array(named.elements, f),
        NodeShape::ImportOrExportSpecifier(specifier) => {
            visit_opt(specifier.property_name, f);
            f(specifier.name);
        }
        NodeShape::ExportAssignment(export) => f(export.expression),
        NodeShape::ExportDeclaration(export) => {
            visit_opt(export.export_clause, f);
            visit_opt(export.module_specifier, f);
            visit_opt(export.attributes, f);
        }
        NodeShape::ExternalModuleReference(reference) => f(reference.expression),
        NodeShape::ImportAttributes(attributes) => visit_array(attributes.elements, f),
        NodeShape::ImportAttribute(attribute) => {
            f(attribute.name);
            f(attribute.value);
        }

        NodeShape::JsxElement(element) => {
            f(element.opening_element);
            visit_array(element.children, f);
            f(element.closing_element);
        }
        NodeShape::JsxSelfClosingElement(element) => {
            f(element.tag_name);
            visit_opt_array(element.type_arguments, f);
            f(element.attributes);
        }
        NodeShape::JsxOpeningElement(element) => {
            f(element.tag_name);
            visit_opt_array(element.type_arguments, f);
            f(element.attributes);
        }
        NodeShape::JsxClosingElement(element) => f(element.tag_name),
        NodeShape::JsxFragment(fragment) => {
            f(fragment.opening_fragment);
            visit_array(fragment.children, f);
            f(fragment.closing_fragment);
        }
        NodeShape::JsxAttribute(attribute) => {
            f(attribute.name);
            visit_opt(attribute.initializer, f);
        }
        NodeShape::JsxAttributes(attributes) => visit_array(attributes.properties, f),
        NodeShape::JsxSpreadAttribute(attribute) => f(attribute.expression),
        NodeShape::JsxExpression(expression) => {
            visit_opt(expression.dot_dot_dot_token, f);
            visit_opt(expression.expression, f);
        }

        NodeShape::CaseClause(clause) => {
            f(clause.expression);
            visit_array(clause.statements, f);
        }
        NodeShape::DefaultClause(clause) => visit_array(clause.statements, f),
        NodeShape::HeritageClause(clause) => visit_array(clause.types, f),
        NodeShape::CatchClause(clause) => {
            visit_opt(clause.variable_declaration, f);
            f(clause.block);
        }

        NodeShape::PropertyAssignment(prop) => {
            f(prop.name);
            f(prop.initializer);
        }
        NodeShape::ShorthandPropertyAssignment(prop) => {
            f(prop.name);
            visit_opt(prop.object_assignment_initializer, f);
        }
        NodeShape::SpreadAssignment(spread) => f(spread.expression),

        NodeShape::EnumMember(member) => {
            f(member.name);
            visit_opt(member.initializer, f);
        }

        NodeShape::SourceFile(file) => {
            visit_array(file.statements, f);
            f(file.end_of_file_token);
        }
    }
}
