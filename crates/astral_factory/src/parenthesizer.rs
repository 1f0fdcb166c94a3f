//! Parenthesization rules for synthesized expressions.
//!
//! Constructors call into these rules to wrap operands whose syntactic class
//! would otherwise be mis-parsed (or mis-associated) when the tree is
//! printed and re-parsed. The correctness property: print-then-reparse of
//! any synthesized tree yields identical evaluation semantics.
//!
//! Every rule unwraps transparent wrappers first and never double-wraps an
//! already-parenthesized expression.

use std::cmp::Ordering;

use astral_ast::node::{Node, NodeArray, NodeShape};
use astral_ast::queries::{
    get_leftmost_expression, is_comma_sequence, is_left_hand_side_expression,
    is_literal_expression_kind, is_unary_expression, skip_partially_emitted_expressions,
};
use astral_ast::syntax_kind::SyntaxKind;

use crate::base::NodeFactory;
use crate::precedence::{
    get_expression_associativity, get_expression_precedence, get_operator_associativity,
    get_operator_precedence_of_binary, operator_has_associative_property, Associativity,
    OperatorPrecedence,
};

impl<'a> NodeFactory<'a> {
    /// Literal kind of a `+` operand: a literal's own kind, or the common
    /// literal kind of a nested `+` whose operands agree. Memoized by node
    /// identity in an external table.
    fn literal_kind_of_binary_plus_operand(&self, node: &'a Node<'a>) -> SyntaxKind {
        let node = skip_partially_emitted_expressions(node);
        if is_literal_expression_kind(node.kind()) {
            return node.kind();
        }
        if let NodeShape::BinaryExpression(binary) = &node.shape {
            if binary.operator() == SyntaxKind::PlusToken {
                if let Some(cached) = self.plus_operand_literal_kinds.borrow().get(&node.id()) {
                    return *cached;
                }
                let left_kind = self.literal_kind_of_binary_plus_operand(binary.left);
                let kind = if is_literal_expression_kind(left_kind)
                    && left_kind == self.literal_kind_of_binary_plus_operand(binary.right)
                {
                    left_kind
                } else {
                    SyntaxKind::Unknown
                };
                self.plus_operand_literal_kinds
                    .borrow_mut()
                    .insert(node.id(), kind);
                return kind;
            }
        }
        SyntaxKind::Unknown
    }

    /// Whether an operand of `binary_operator` must be wrapped to survive a
    /// print/reparse round trip.
    pub fn binary_operand_needs_parentheses(
        &self,
        binary_operator: SyntaxKind,
        operand: &'a Node<'a>,
        is_left_side: bool,
        left_operand: Option<&'a Node<'a>>,
    ) -> bool {
        let binary_precedence = get_operator_precedence_of_binary(binary_operator);
        let binary_associativity =
            get_operator_associativity(SyntaxKind::BinaryExpression, binary_operator, false);
        let emitted = skip_partially_emitted_expressions(operand);
        if !is_left_side
            && operand.kind() == SyntaxKind::ArrowFunction
            && binary_precedence > OperatorPrecedence::Assignment
        {
            // An arrow body swallows everything to its right.
            return true;
        }
        let operand_precedence = get_expression_precedence(emitted);
        match operand_precedence.cmp(&binary_precedence) {
            Ordering::Less => {
                // `yield` as the right operand of a right-associative
                // operator cannot be misread there.
                !(!is_left_side
                    && binary_associativity == Associativity::Right
                    && operand.kind() == SyntaxKind::YieldExpression)
            }
            Ordering::Greater => false,
            Ordering::Equal => {
                if is_left_side {
                    binary_associativity == Associativity::Right
                } else {
                    if let NodeShape::BinaryExpression(inner) = &emitted.shape {
                        if inner.operator() == binary_operator {
                            // Regrouping a mathematically associative
                            // operator preserves the result.
                            if operator_has_associative_property(binary_operator) {
                                return false;
                            }
                            // `+` reassociates safely when every operand is
                            // the same literal kind (string concatenation
                            // stays string concatenation).
                            if binary_operator == SyntaxKind::PlusToken {
                                let left_kind = left_operand
                                    .map(|left| self.literal_kind_of_binary_plus_operand(left))
                                    .unwrap_or(SyntaxKind::Unknown);
                                if is_literal_expression_kind(left_kind)
                                    && left_kind
                                        == self.literal_kind_of_binary_plus_operand(emitted)
                                {
                                    return false;
                                }
                            }
                        }
                    }
                    get_expression_associativity(emitted) == Associativity::Left
                }
            }
        }
    }

    fn parenthesize_binary_operand(
        &self,
        binary_operator: SyntaxKind,
        operand: &'a Node<'a>,
        is_left_side: bool,
        left_operand: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let skipped = skip_partially_emitted_expressions(operand);
        // Existing parentheses are always sufficient.
        if skipped.kind() == SyntaxKind::ParenthesizedExpression {
            return operand;
        }
        if self.binary_operand_needs_parentheses(binary_operator, operand, is_left_side, left_operand)
        {
            self.create_parenthesized_expression(operand)
        } else {
            operand
        }
    }

    pub fn parenthesize_left_side_of_binary(
        &self,
        binary_operator: SyntaxKind,
        left_side: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.parenthesize_binary_operand(binary_operator, left_side, true, None)
    }

    pub fn parenthesize_right_side_of_binary(
        &self,
        binary_operator: SyntaxKind,
        left_side: Option<&'a Node<'a>>,
        right_side: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.parenthesize_binary_operand(binary_operator, right_side, false, left_side)
    }

    pub fn parenthesize_expression_of_computed_property_name(
        &self,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        if is_comma_sequence(expression) {
            self.create_parenthesized_expression(expression)
        } else {
            expression
        }
    }

    pub fn parenthesize_condition_of_conditional_expression(
        &self,
        condition: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let emitted = skip_partially_emitted_expressions(condition);
        if get_expression_precedence(emitted) > OperatorPrecedence::Conditional {
            condition
        } else {
            self.create_parenthesized_expression(condition)
        }
    }

    pub fn parenthesize_branch_of_conditional_expression(
        &self,
        branch: &'a Node<'a>,
    ) -> &'a Node<'a> {
        // The branches are always separated by punctuation; only a comma
        // sequence could leak out of its slot.
        let emitted = skip_partially_emitted_expressions(branch);
        if is_comma_sequence(emitted) {
            self.create_parenthesized_expression(branch)
        } else {
            branch
        }
    }

    /// `export default` takes an assignment-level expression, but a leading
    /// `class`/`function` would bind to the declaration grammar instead.
    pub fn parenthesize_expression_of_export_default(
        &self,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let check = skip_partially_emitted_expressions(expression);
        let needs_parens = is_comma_sequence(check) || {
            let leftmost = get_leftmost_expression(check, false);
            matches!(
                leftmost.kind(),
                SyntaxKind::ClassExpression | SyntaxKind::FunctionExpression
            )
        };
        if needs_parens {
            self.create_parenthesized_expression(expression)
        } else {
            expression
        }
    }

    /// The callee of `new` must not contain a bare call (`new (a())` vs
    /// `new a()`), nor a `new` without an argument list.
    pub fn parenthesize_expression_of_new(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        let leftmost = get_leftmost_expression(expression, true);
        match &leftmost.shape {
            NodeShape::CallExpression(_) => {
                return self.create_parenthesized_expression(expression)
            }
            NodeShape::NewExpression(new) => {
                if new.arguments.is_none() {
                    return self.create_parenthesized_expression(expression);
                }
            }
            _ => {}
        }
        self.parenthesize_left_side_of_access(expression)
    }

    /// The target of a property/element access or call must be a
    /// left-hand-side-class expression; `new` without arguments still needs
    /// wrapping so the access does not become part of the callee.
    pub fn parenthesize_left_side_of_access(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        let emitted = skip_partially_emitted_expressions(expression);
        let is_valid = is_left_hand_side_expression(emitted)
            && match &emitted.shape {
                NodeShape::NewExpression(new) => new.arguments.is_some(),
                _ => true,
            };
        if is_valid {
            expression
        } else {
            self.create_parenthesized_expression(expression)
        }
    }

    pub fn parenthesize_operand_of_postfix_unary(&self, operand: &'a Node<'a>) -> &'a Node<'a> {
        if is_left_hand_side_expression(operand) {
            operand
        } else {
            self.create_parenthesized_expression(operand)
        }
    }

    pub fn parenthesize_operand_of_prefix_unary(&self, operand: &'a Node<'a>) -> &'a Node<'a> {
        if is_unary_expression(operand) {
            operand
        } else {
            self.create_parenthesized_expression(operand)
        }
    }

    /// A comma expression in a comma-delimited slot (argument list, array
    /// element) must be wrapped to keep its grouping.
    pub fn parenthesize_expression_for_disallowed_comma(
        &self,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let emitted = skip_partially_emitted_expressions(expression);
        if is_comma_sequence(emitted) {
            self.create_parenthesized_expression(expression)
        } else {
            expression
        }
    }

    pub fn parenthesize_expressions_of_comma_delimited_list(
        &self,
        elements: &'a NodeArray<'a>,
    ) -> &'a NodeArray<'a> {
        let needs_wrap = elements
            .iter()
            .any(|element| is_comma_sequence(skip_partially_emitted_expressions(element)));
        if !needs_wrap {
            return elements;
        }
        let wrapped: Vec<_> = elements
            .iter()
            .map(|element| self.parenthesize_expression_for_disallowed_comma(element))
            .collect();
        self.create_node_array(wrapped, elements.has_trailing_comma)
    }

    /// Statement-start ambiguity: an expression statement may not begin with
    /// `{` or `function`/`class` (it would parse as a block or declaration),
    /// and a call statement whose callee is a function or arrow expression
    /// needs that callee wrapped.
    pub fn parenthesize_expression_of_expression_statement(
        &self,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let emitted = skip_partially_emitted_expressions(expression);
        if let NodeShape::CallExpression(call) = &emitted.shape {
            let callee_kind = skip_partially_emitted_expressions(call.expression).kind();
            if matches!(
                callee_kind,
                SyntaxKind::FunctionExpression | SyntaxKind::ArrowFunction
            ) {
                let callee = self.create_parenthesized_expression(call.expression);
                let updated = self.update_call_expression(
                    emitted,
                    callee,
                    call.type_arguments,
                    call.arguments,
                );
                return self.restore_partially_emitted_wrappers(expression, updated);
            }
        }
        let leftmost_kind = get_leftmost_expression(emitted, false).kind();
        if matches!(
            leftmost_kind,
            SyntaxKind::ObjectLiteralExpression | SyntaxKind::FunctionExpression
        ) {
            self.create_parenthesized_expression(expression)
        } else {
            expression
        }
    }

    /// Rebuild the `PartiallyEmittedExpression` chain around a replacement
    /// for its innermost expression, keeping each wrapper's identity and
    /// emit metadata.
    fn restore_partially_emitted_wrappers(
        &self,
        outer: &'a Node<'a>,
        inner: &'a Node<'a>,
    ) -> &'a Node<'a> {
        match &outer.shape {
            NodeShape::PartiallyEmittedExpression(wrapper) => self
                .update_partially_emitted_expression(
                    outer,
                    self.restore_partially_emitted_wrappers(wrapper.expression, inner),
                ),
            _ => inner,
        }
    }

    /// An object literal as an arrow's concise body would parse as a block.
    pub fn parenthesize_concise_body_of_arrow_function(
        &self,
        body: &'a Node<'a>,
    ) -> &'a Node<'a> {
        if body.kind() == SyntaxKind::Block {
            return body;
        }
        let emitted = skip_partially_emitted_expressions(body);
        if is_comma_sequence(emitted)
            || get_leftmost_expression(emitted, false).kind() == SyntaxKind::ObjectLiteralExpression
        {
            self.create_parenthesized_expression(body)
        } else {
            body
        }
    }

    // ------------------------------------------------------------------
    // Type-side rules
    // ------------------------------------------------------------------

    /// `T[]` binds tighter than function, constructor, conditional, infer,
    /// union, intersection, and operator types.
    pub fn parenthesize_element_type_of_array_type(
        &self,
        element_type: &'a Node<'a>,
    ) -> &'a Node<'a> {
        match element_type.kind() {
            SyntaxKind::FunctionType
            | SyntaxKind::ConstructorType
            | SyntaxKind::ConditionalType
            | SyntaxKind::InferType
            | SyntaxKind::UnionType
            | SyntaxKind::IntersectionType
            | SyntaxKind::TypeOperator => self.create_parenthesized_type(element_type),
            _ => element_type,
        }
    }

    pub fn parenthesize_constituent_types_of_union_or_intersection(
        &self,
        members: &'a NodeArray<'a>,
    ) -> &'a NodeArray<'a> {
        let needs_wrap = members.iter().any(|member| {
            matches!(
                member.kind(),
                SyntaxKind::FunctionType
                    | SyntaxKind::ConstructorType
                    | SyntaxKind::ConditionalType
                    | SyntaxKind::UnionType
                    | SyntaxKind::IntersectionType
            )
        });
        if !needs_wrap {
            return members;
        }
        let wrapped: Vec<_> = members
            .iter()
            .map(|member| match member.kind() {
                SyntaxKind::FunctionType
                | SyntaxKind::ConstructorType
                | SyntaxKind::ConditionalType
                | SyntaxKind::UnionType
                | SyntaxKind::IntersectionType => self.create_parenthesized_type(member),
                _ => *member,
            })
            .collect();
        self.create_node_array(wrapped, members.has_trailing_comma)
    }
}
