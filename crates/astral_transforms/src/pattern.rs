//! Conversion of declaration-side binding patterns into expression-side
//! assignment patterns, plus the unified views over binding-or-assignment
//! elements that the destructuring transforms consume.

use astral_core::debug;
use astral_ast::node::{Node, NodeShape};
use astral_ast::syntax_kind::SyntaxKind;
use astral_factory::NodeFactory;

/// Converts an object or array binding pattern into the equivalent
/// assignment pattern. Already-converted assignment patterns pass through.
pub fn convert_to_assignment_pattern<'a>(
    factory: &NodeFactory<'a>,
    node: &'a Node<'a>,
) -> &'a Node<'a> {
    match node.kind() {
        SyntaxKind::ObjectBindingPattern | SyntaxKind::ObjectLiteralExpression => {
            convert_to_object_assignment_pattern(factory, node)
        }
        SyntaxKind::ArrayBindingPattern | SyntaxKind::ArrayLiteralExpression => {
            convert_to_array_assignment_pattern(factory, node)
        }
        _ => debug::fail_bad_syntax_kind("convert_to_assignment_pattern", node.kind()),
    }
}

/// `{ a, b: c = 1, ...rest }` binding pattern to object literal target.
pub fn convert_to_object_assignment_pattern<'a>(
    factory: &NodeFactory<'a>,
    node: &'a Node<'a>,
) -> &'a Node<'a> {
    match &node.shape {
        NodeShape::ObjectBindingPattern(pattern) => {
            let properties: Vec<&'a Node<'a>> = pattern
                .elements
                .iter()
                .map(|&element| convert_to_object_assignment_element(factory, element))
                .collect();
            carry_source(
                factory,
                factory.create_object_literal_expression(properties, false),
                node,
            )
        }
        NodeShape::ObjectLiteralExpression(_) => node,
        _ => debug::fail_bad_syntax_kind("convert_to_object_assignment_pattern", node.kind()),
    }
}

/// `[a, b = 1, ...rest]` binding pattern to array literal target.
pub fn convert_to_array_assignment_pattern<'a>(
    factory: &NodeFactory<'a>,
    node: &'a Node<'a>,
) -> &'a Node<'a> {
    match &node.shape {
        NodeShape::ArrayBindingPattern(pattern) => {
            let elements: Vec<&'a Node<'a>> = pattern
                .elements
                .iter()
                .map(|&element| convert_to_array_assignment_element(factory, element))
                .collect();
            carry_source(
                factory,
                factory.create_array_literal_expression(elements, false),
                node,
            )
        }
        NodeShape::ArrayLiteralExpression(_) => node,
        _ => debug::fail_bad_syntax_kind("convert_to_array_assignment_pattern", node.kind()),
    }
}

/// Converts a single binding element into its assignment counterpart.
/// Elements that already are object assignment members or expressions pass
/// through; binding elements with a property name take the object form,
/// everything else the array form.
pub fn convert_to_assignment_element<'a>(
    factory: &NodeFactory<'a>,
    element: &'a Node<'a>,
) -> &'a Node<'a> {
    match &element.shape {
        NodeShape::BindingElement(binding) if binding.property_name.is_some() => {
            convert_to_object_assignment_element(factory, element)
        }
        NodeShape::PropertyAssignment(_)
        | NodeShape::ShorthandPropertyAssignment(_)
        | NodeShape::SpreadAssignment(_) => element,
        _ => convert_to_array_assignment_element(factory, element),
    }
}

pub fn convert_to_object_assignment_element<'a>(
    factory: &NodeFactory<'a>,
    element: &'a Node<'a>,
) -> &'a Node<'a> {
    let NodeShape::BindingElement(binding) = &element.shape else {
        return element;
    };
    if binding.dot_dot_dot_token.is_some() {
        debug::assert(
            binding.name.kind() == SyntaxKind::Identifier,
            "object rest target must be an identifier",
        );
        return carry_source(factory, factory.create_spread_assignment(binding.name), element);
    }
    if let Some(property_name) = binding.property_name {
        let target = convert_to_assignment_element_target(factory, binding.name);
        let initializer = match binding.initializer {
            Some(default) => factory.create_assignment(target, default),
            None => target,
        };
        return carry_source(
            factory,
            factory.create_property_assignment(property_name, initializer),
            element,
        );
    }
    debug::assert(
        binding.name.kind() == SyntaxKind::Identifier,
        "shorthand binding target must be an identifier",
    );
    carry_source(
        factory,
        factory.create_shorthand_property_assignment(binding.name, binding.initializer),
        element,
    )
}

pub fn convert_to_array_assignment_element<'a>(
    factory: &NodeFactory<'a>,
    element: &'a Node<'a>,
) -> &'a Node<'a> {
    let NodeShape::BindingElement(binding) = &element.shape else {
        return element;
    };
    if binding.dot_dot_dot_token.is_some() {
        debug::assert(
            binding.name.kind() == SyntaxKind::Identifier,
            "array rest target must be an identifier",
        );
        return carry_source(factory, factory.create_spread_element(binding.name), element);
    }
    let target = convert_to_assignment_element_target(factory, binding.name);
    match binding.initializer {
        Some(default) => carry_source(
            factory,
            factory.create_assignment(target, default),
            element,
        ),
        None => target,
    }
}

/// The thing actually being bound or assigned, recursing through rest and
/// spread wrappers, default-value assignments, and property assignments.
/// `None` for omitted array slots.
pub fn get_target_of_binding_or_assignment_element<'a>(
    element: &'a Node<'a>,
) -> Option<&'a Node<'a>> {
    match &element.shape {
        NodeShape::BindingElement(binding) => Some(binding.name),
        NodeShape::VariableDeclaration(declaration) => Some(declaration.name),
        NodeShape::Parameter(parameter) => Some(parameter.name),
        NodeShape::PropertyAssignment(property) => {
            get_target_of_binding_or_assignment_element(property.initializer)
        }
        NodeShape::ShorthandPropertyAssignment(shorthand) => Some(shorthand.name),
        NodeShape::SpreadAssignment(spread) => {
            get_target_of_binding_or_assignment_element(spread.expression)
        }
        NodeShape::SpreadElement(spread) => {
            get_target_of_binding_or_assignment_element(spread.expression)
        }
        NodeShape::BinaryExpression(binary) if binary.operator() == SyntaxKind::EqualsToken => {
            get_target_of_binding_or_assignment_element(binary.left)
        }
        _ if element.kind() == SyntaxKind::OmittedExpression => None,
        _ => Some(element),
    }
}

/// The default value of an element, pulled from whichever concrete shape is
/// in play.
pub fn get_initializer_of_binding_or_assignment_element<'a>(
    element: &'a Node<'a>,
) -> Option<&'a Node<'a>> {
    match &element.shape {
        NodeShape::BindingElement(binding) => binding.initializer,
        NodeShape::VariableDeclaration(declaration) => declaration.initializer,
        NodeShape::Parameter(parameter) => parameter.initializer,
        NodeShape::PropertyAssignment(property) => match &property.initializer.shape {
            NodeShape::BinaryExpression(binary)
                if binary.operator() == SyntaxKind::EqualsToken =>
            {
                Some(binary.right)
            }
            _ => None,
        },
        NodeShape::ShorthandPropertyAssignment(shorthand) => {
            shorthand.object_assignment_initializer
        }
        NodeShape::SpreadElement(spread) => {
            get_initializer_of_binding_or_assignment_element(spread.expression)
        }
        NodeShape::SpreadAssignment(spread) => {
            get_initializer_of_binding_or_assignment_element(spread.expression)
        }
        NodeShape::BinaryExpression(binary) if binary.operator() == SyntaxKind::EqualsToken => {
            Some(binary.right)
        }
        _ => None,
    }
}

/// The `...` token or spread node marking a rest capture, if the element is
/// one.
pub fn get_rest_indicator_of_binding_or_assignment_element<'a>(
    element: &'a Node<'a>,
) -> Option<&'a Node<'a>> {
    match &element.shape {
        NodeShape::BindingElement(binding) => binding.dot_dot_dot_token,
        NodeShape::Parameter(parameter) => parameter.dot_dot_dot_token,
        NodeShape::SpreadElement(_) | NodeShape::SpreadAssignment(_) => Some(element),
        _ => None,
    }
}

pub fn try_get_property_name_of_binding_or_assignment_element<'a>(
    element: &'a Node<'a>,
) -> Option<&'a Node<'a>> {
    match &element.shape {
        NodeShape::BindingElement(binding) => {
            if let Some(property_name) = binding.property_name {
                return Some(unwrap_literal_computed_name(property_name));
            }
        }
        NodeShape::PropertyAssignment(property) => {
            return Some(unwrap_literal_computed_name(property.name));
        }
        _ => {}
    }
    let target = get_target_of_binding_or_assignment_element(element)?;
    if is_property_name_kind(target.kind()) {
        return Some(target);
    }
    None
}

/// The property name under which an object element binds. Only ever invoked
/// on trees already validated upstream, so a missing name is fatal.
pub fn get_property_name_of_binding_or_assignment_element<'a>(
    element: &'a Node<'a>,
) -> &'a Node<'a> {
    try_get_property_name_of_binding_or_assignment_element(element)
        .unwrap_or_else(|| debug::fail("binding element has no derivable property name"))
}

fn convert_to_assignment_element_target<'a>(
    factory: &NodeFactory<'a>,
    node: &'a Node<'a>,
) -> &'a Node<'a> {
    match node.kind() {
        SyntaxKind::ObjectBindingPattern | SyntaxKind::ArrayBindingPattern => {
            convert_to_assignment_pattern(factory, node)
        }
        _ => node,
    }
}

/// A computed name over a string or numeric literal denotes that literal.
fn unwrap_literal_computed_name<'a>(name: &'a Node<'a>) -> &'a Node<'a> {
    if let NodeShape::ComputedPropertyName(computed) = &name.shape {
        if matches!(
            computed.expression.kind(),
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral
        ) {
            return computed.expression;
        }
    }
    name
}

fn is_property_name_kind(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Identifier
            | SyntaxKind::PrivateIdentifier
            | SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::ComputedPropertyName
    )
}

fn carry_source<'a>(
    factory: &NodeFactory<'a>,
    converted: &'a Node<'a>,
    source: &'a Node<'a>,
) -> &'a Node<'a> {
    let converted = factory.set_original_node(converted, Some(source));
    converted.set_range(source.range());
    converted
}
