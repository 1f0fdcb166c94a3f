//! Factory constructors and their paired update operations.
//!
//! One `create_*` per synthesizable kind; inputs are already-built children
//! (only literal constructors accept raw values). Constructors never
//! validate semantic legality, that is the checker's job; their only fatal
//! case is a malformed required child, which is a caller bug.
//!
//! Each `update_*` shallow-diffs the supplied children against the existing
//! node by reference and returns the node itself when nothing changed;
//! otherwise it rebuilds through the paired constructor and inherits the
//! original's range, identity, and emit metadata.

use astral_core::debug;
use astral_ast::node::*;
use astral_ast::syntax_kind::{text_to_keyword, SyntaxKind};
use astral_ast::types::{
    AutoGenerateInfo, GeneratedIdentifierKind, ModifierFlags, NodeFlags,
};

use crate::base::NodeFactory;

impl<'a> NodeFactory<'a> {
    fn next_auto_generate(&self) -> u32 {
        let id = self.next_auto_generate_id.get();
        self.next_auto_generate_id.set(id + 1);
        id
    }

    // ========================================================================
    // Tokens and keyword expressions
    // ========================================================================

    pub fn create_token(&self, kind: SyntaxKind) -> &'a Node<'a> {
        debug::assert(kind.is_token_kind(), "create_token requires a token kind");
        self.synthesize(kind, NodeShape::Token)
    }

    pub fn create_this(&self) -> &'a Node<'a> {
        self.synthesize(SyntaxKind::ThisKeyword, NodeShape::Token)
    }

    pub fn create_super(&self) -> &'a Node<'a> {
        self.synthesize(SyntaxKind::SuperKeyword, NodeShape::Token)
    }

    pub fn create_null(&self) -> &'a Node<'a> {
        self.synthesize(SyntaxKind::NullKeyword, NodeShape::Token)
    }

    pub fn create_true(&self) -> &'a Node<'a> {
        self.synthesize(SyntaxKind::TrueKeyword, NodeShape::Token)
    }

    pub fn create_false(&self) -> &'a Node<'a> {
        self.synthesize(SyntaxKind::FalseKeyword, NodeShape::Token)
    }

    // ========================================================================
    // Literals
    // ========================================================================

    pub fn create_numeric_literal(&self, text: &str) -> &'a Node<'a> {
        let text = self.interner().intern(text);
        self.synthesize(
            SyntaxKind::NumericLiteral,
            NodeShape::NumericLiteral(NumericLiteral { text }),
        )
    }

    pub fn create_big_int_literal(&self, text: &str) -> &'a Node<'a> {
        let text = self.interner().intern(text);
        self.synthesize(
            SyntaxKind::BigIntLiteral,
            NodeShape::BigIntLiteral(BigIntLiteral { text }),
        )
    }

    pub fn create_string_literal(&self, text: &str, single_quote: bool) -> &'a Node<'a> {
        let text = self.interner().intern(text);
        self.synthesize(
            SyntaxKind::StringLiteral,
            NodeShape::StringLiteral(StringLiteral {
                text,
                single_quote,
                text_source: None,
            }),
        )
    }

    /// A string literal whose text, and at emit time escaping, come from an
    /// identifier or another literal.
    pub fn create_string_literal_from_node(&self, source: &'a Node<'a>) -> &'a Node<'a> {
        let text = source
            .identifier_text()
            .or_else(|| source.literal_text())
            .unwrap_or_else(|| {
                debug::fail_bad_syntax_kind("create_string_literal_from_node", source.kind())
            });
        self.synthesize(
            SyntaxKind::StringLiteral,
            NodeShape::StringLiteral(StringLiteral {
                text,
                single_quote: false,
                text_source: Some(source),
            }),
        )
    }

    pub fn create_regular_expression_literal(&self, text: &str) -> &'a Node<'a> {
        let text = self.interner().intern(text);
        self.synthesize(
            SyntaxKind::RegularExpressionLiteral,
            NodeShape::RegularExpressionLiteral(RegularExpressionLiteral { text }),
        )
    }

    fn create_template_literal_fragment(
        &self,
        kind: SyntaxKind,
        text: &str,
        raw_text: Option<&str>,
    ) -> &'a Node<'a> {
        let text = self.interner().intern(text);
        let raw_text = raw_text.map(|raw| self.interner().intern(raw));
        self.synthesize(
            kind,
            NodeShape::TemplateLiteralFragment(TemplateLiteralFragment { text, raw_text }),
        )
    }

    pub fn create_template_head(&self, text: &str, raw_text: Option<&str>) -> &'a Node<'a> {
        self.create_template_literal_fragment(SyntaxKind::TemplateHead, text, raw_text)
    }

    pub fn create_template_middle(&self, text: &str, raw_text: Option<&str>) -> &'a Node<'a> {
        self.create_template_literal_fragment(SyntaxKind::TemplateMiddle, text, raw_text)
    }

    pub fn create_template_tail(&self, text: &str, raw_text: Option<&str>) -> &'a Node<'a> {
        self.create_template_literal_fragment(SyntaxKind::TemplateTail, text, raw_text)
    }

    pub fn create_no_substitution_template_literal(
        &self,
        text: &str,
        raw_text: Option<&str>,
    ) -> &'a Node<'a> {
        self.create_template_literal_fragment(
            SyntaxKind::NoSubstitutionTemplateLiteral,
            text,
            raw_text,
        )
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    /// A real identifier. The text is classified against the reserved-word
    /// set so later passes can tell an identifier that merely spells a
    /// keyword from a true keyword token. Empty text is valid: it is how
    /// not-yet-named internal temporaries are represented.
    pub fn create_identifier(&self, text: &str) -> &'a Node<'a> {
        let interned = self.interner().intern(text);
        self.synthesize(
            SyntaxKind::Identifier,
            NodeShape::Identifier(Identifier {
                text: interned,
                original_keyword_kind: text_to_keyword(text),
                auto_generate: None,
            }),
        )
    }

    fn create_generated_identifier(
        &self,
        text: &str,
        kind: GeneratedIdentifierKind,
        target: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let interned = self.interner().intern(text);
        self.synthesize(
            SyntaxKind::Identifier,
            NodeShape::Identifier(Identifier {
                text: interned,
                original_keyword_kind: None,
                auto_generate: Some(AutoGenerateInfo {
                    kind,
                    id: self.next_auto_generate(),
                    target: target.map(|node| node.id()),
                }),
            }),
        )
    }

    /// Temp variable whose final name is chosen at emit time.
    pub fn create_temp_variable(&self) -> &'a Node<'a> {
        self.create_generated_identifier("", GeneratedIdentifierKind::Auto, None)
    }

    /// Loop variable, kept stable across iterations of its loop.
    pub fn create_loop_variable(&self) -> &'a Node<'a> {
        self.create_generated_identifier("", GeneratedIdentifierKind::Loop, None)
    }

    /// Unique name derived from `base`, distinguished from any other use of
    /// the same base by its generation id.
    pub fn create_unique_name(&self, base: &str) -> &'a Node<'a> {
        self.create_generated_identifier(base, GeneratedIdentifierKind::Unique, None)
    }

    /// Name derived deterministically from another node's identity.
    pub fn get_generated_name_for_node(&self, node: &'a Node<'a>) -> &'a Node<'a> {
        let base = node
            .identifier_text()
            .map(|text| self.interner().resolve(text).to_string())
            .unwrap_or_default();
        self.create_generated_identifier(&base, GeneratedIdentifierKind::Node, Some(node))
    }

    /// Private name; `text` includes the leading `#`.
    pub fn create_private_identifier(&self, text: &str) -> &'a Node<'a> {
        debug::assert(
            text.starts_with('#'),
            "private identifier text must start with '#'",
        );
        let text = self.interner().intern(text);
        self.synthesize(
            SyntaxKind::PrivateIdentifier,
            NodeShape::PrivateIdentifier(PrivateIdentifier {
                text,
                auto_generate: None,
            }),
        )
    }

    // ========================================================================
    // Names
    // ========================================================================

    pub fn create_qualified_name(
        &self,
        left: &'a Node<'a>,
        right: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::QualifiedName,
            NodeShape::QualifiedName(QualifiedName { left, right }),
        )
    }

    pub fn update_qualified_name(
        &self,
        node: &'a Node<'a>,
        left: &'a Node<'a>,
        right: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::QualifiedName(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_qualified_name", node.kind())
        };
        if node_ref_eq(old.left, left) && node_ref_eq(old.right, right) {
            return node;
        }
        self.update(self.create_qualified_name(left, right), node)
    }

    pub fn create_computed_property_name(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        let expression = self.parenthesize_expression_of_computed_property_name(expression);
        self.synthesize(
            SyntaxKind::ComputedPropertyName,
            NodeShape::ComputedPropertyName(ComputedPropertyName { expression }),
        )
    }

    pub fn update_computed_property_name(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ComputedPropertyName(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_computed_property_name", node.kind())
        };
        if node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(self.create_computed_property_name(expression), node)
    }

    // ========================================================================
    // Signature elements
    // ========================================================================

    pub fn create_type_parameter_declaration(
        &self,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        constraint: Option<&'a Node<'a>>,
        default: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        self.synthesize_with_modifiers(
            SyntaxKind::TypeParameter,
            modifiers,
            NodeShape::TypeParameter(TypeParameterDeclaration {
                name,
                constraint,
                default,
            }),
        )
    }

    pub fn update_type_parameter_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        constraint: Option<&'a Node<'a>>,
        default: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::TypeParameter(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_type_parameter_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && node_ref_eq(old.name, name)
            && opt_node_ref_eq(old.constraint, constraint)
            && opt_node_ref_eq(old.default, default)
        {
            return node;
        }
        self.update(
            self.create_type_parameter_declaration(modifiers, name, constraint, default),
            node,
        )
    }

    pub fn create_parameter_declaration(
        &self,
        modifiers: ModifierFlags,
        dot_dot_dot_token: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
        question_token: Option<&'a Node<'a>>,
        type_node: Option<&'a Node<'a>>,
        initializer: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let initializer =
            initializer.map(|init| self.parenthesize_expression_for_disallowed_comma(init));
        self.synthesize_with_modifiers(
            SyntaxKind::Parameter,
            modifiers,
            NodeShape::Parameter(ParameterDeclaration {
                dot_dot_dot_token,
                name,
                question_token,
                type_node,
                initializer,
            }),
        )
    }

    pub fn update_parameter_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        dot_dot_dot_token: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
        question_token: Option<&'a Node<'a>>,
        type_node: Option<&'a Node<'a>>,
        initializer: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::Parameter(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_parameter_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && opt_node_ref_eq(old.dot_dot_dot_token, dot_dot_dot_token)
            && node_ref_eq(old.name, name)
            && opt_node_ref_eq(old.question_token, question_token)
            && opt_node_ref_eq(old.type_node, type_node)
            && opt_node_ref_eq(old.initializer, initializer)
        {
            return node;
        }
        self.update(
            self.create_parameter_declaration(
                modifiers,
                dot_dot_dot_token,
                name,
                question_token,
                type_node,
                initializer,
            ),
            node,
        )
    }

    pub fn create_decorator(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        let expression = self.parenthesize_left_side_of_access(expression);
        self.synthesize(
            SyntaxKind::Decorator,
            NodeShape::Decorator(Decorator { expression }),
        )
    }

    pub fn update_decorator(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::Decorator(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_decorator", node.kind())
        };
        if node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(self.create_decorator(expression), node)
    }

    // ========================================================================
    // Type members
    // ========================================================================

    pub fn create_property_signature(
        &self,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        question_token: Option<&'a Node<'a>>,
        type_node: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        self.synthesize_with_modifiers(
            SyntaxKind::PropertySignature,
            modifiers,
            NodeShape::PropertySignature(PropertySignature {
                name,
                question_token,
                type_node,
            }),
        )
    }

    pub fn update_property_signature(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        question_token: Option<&'a Node<'a>>,
        type_node: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::PropertySignature(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_property_signature", node.kind())
        };
        if node.modifier_flags() == modifiers
            && node_ref_eq(old.name, name)
            && opt_node_ref_eq(old.question_token, question_token)
            && opt_node_ref_eq(old.type_node, type_node)
        {
            return node;
        }
        self.update(
            self.create_property_signature(modifiers, name, question_token, type_node),
            node,
        )
    }

    pub fn create_property_declaration(
        &self,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        question_token: Option<&'a Node<'a>>,
        exclamation_token: Option<&'a Node<'a>>,
        type_node: Option<&'a Node<'a>>,
        initializer: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let initializer =
            initializer.map(|init| self.parenthesize_expression_for_disallowed_comma(init));
        self.synthesize_with_modifiers(
            SyntaxKind::PropertyDeclaration,
            modifiers,
            NodeShape::PropertyDeclaration(PropertyDeclaration {
                name,
                question_token,
                exclamation_token,
                type_node,
                initializer,
            }),
        )
    }

    pub fn update_property_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        question_token: Option<&'a Node<'a>>,
        exclamation_token: Option<&'a Node<'a>>,
        type_node: Option<&'a Node<'a>>,
        initializer: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::PropertyDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_property_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && node_ref_eq(old.name, name)
            && opt_node_ref_eq(old.question_token, question_token)
            && opt_node_ref_eq(old.exclamation_token, exclamation_token)
            && opt_node_ref_eq(old.type_node, type_node)
            && opt_node_ref_eq(old.initializer, initializer)
        {
            return node;
        }
        self.update(
            self.create_property_declaration(
                modifiers,
                name,
                question_token,
                exclamation_token,
                type_node,
                initializer,
            ),
            node,
        )
    }

    pub fn create_method_signature(
        &self,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        question_token: Option<&'a Node<'a>>,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: impl Into<NodeArrayOrVec<'a>>,
        type_node: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let parameters = self.create_node_array(parameters, false);
        self.synthesize_with_modifiers(
            SyntaxKind::MethodSignature,
            modifiers,
            NodeShape::MethodSignature(MethodSignature {
                name,
                question_token,
                type_parameters,
                parameters,
                type_node,
            }),
        )
    }

    pub fn update_method_signature(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        question_token: Option<&'a Node<'a>>,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: &'a NodeArray<'a>,
        type_node: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::MethodSignature(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_method_signature", node.kind())
        };
        if node.modifier_flags() == modifiers
            && node_ref_eq(old.name, name)
            && opt_node_ref_eq(old.question_token, question_token)
            && opt_array_ref_eq(old.type_parameters, type_parameters)
            && old.parameters.ref_eq(parameters)
            && opt_node_ref_eq(old.type_node, type_node)
        {
            return node;
        }
        self.update(
            self.create_method_signature(
                modifiers,
                name,
                question_token,
                type_parameters,
                parameters,
                type_node,
            ),
            node,
        )
    }

    pub fn create_method_declaration(
        &self,
        modifiers: ModifierFlags,
        asterisk_token: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
        question_token: Option<&'a Node<'a>>,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: impl Into<NodeArrayOrVec<'a>>,
        type_node: Option<&'a Node<'a>>,
        body: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let parameters = self.create_node_array(parameters, false);
        self.synthesize_with_modifiers(
            SyntaxKind::MethodDeclaration,
            modifiers,
            NodeShape::MethodDeclaration(MethodDeclaration {
                asterisk_token,
                name,
                question_token,
                type_parameters,
                parameters,
                type_node,
                body,
            }),
        )
    }

    pub fn update_method_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        asterisk_token: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
        question_token: Option<&'a Node<'a>>,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: &'a NodeArray<'a>,
        type_node: Option<&'a Node<'a>>,
        body: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::MethodDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_method_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && opt_node_ref_eq(old.asterisk_token, asterisk_token)
            && node_ref_eq(old.name, name)
            && opt_node_ref_eq(old.question_token, question_token)
            && opt_array_ref_eq(old.type_parameters, type_parameters)
            && old.parameters.ref_eq(parameters)
            && opt_node_ref_eq(old.type_node, type_node)
            && opt_node_ref_eq(old.body, body)
        {
            return node;
        }
        self.update(
            self.create_method_declaration(
                modifiers,
                asterisk_token,
                name,
                question_token,
                type_parameters,
                parameters,
                type_node,
                body,
            ),
            node,
        )
    }

    pub fn create_class_static_block_declaration(&self, body: &'a Node<'a>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ClassStaticBlockDeclaration,
            NodeShape::ClassStaticBlockDeclaration(ClassStaticBlockDeclaration { body }),
        )
    }

    pub fn update_class_static_block_declaration(
        &self,
        node: &'a Node<'a>,
        body: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ClassStaticBlockDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_class_static_block_declaration", node.kind())
        };
        if node_ref_eq(old.body, body) {
            return node;
        }
        self.update(self.create_class_static_block_declaration(body), node)
    }

    pub fn create_constructor_declaration(
        &self,
        modifiers: ModifierFlags,
        parameters: impl Into<NodeArrayOrVec<'a>>,
        body: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let parameters = self.create_node_array(parameters, false);
        self.synthesize_with_modifiers(
            SyntaxKind::Constructor,
            modifiers,
            NodeShape::ConstructorDeclaration(ConstructorDeclaration { parameters, body }),
        )
    }

    pub fn update_constructor_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        parameters: &'a NodeArray<'a>,
        body: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::ConstructorDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_constructor_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && old.parameters.ref_eq(parameters)
            && opt_node_ref_eq(old.body, body)
        {
            return node;
        }
        self.update(
            self.create_constructor_declaration(modifiers, parameters, body),
            node,
        )
    }

    pub fn create_get_accessor_declaration(
        &self,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        parameters: impl Into<NodeArrayOrVec<'a>>,
        type_node: Option<&'a Node<'a>>,
        body: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let parameters = self.create_node_array(parameters, false);
        self.synthesize_with_modifiers(
            SyntaxKind::GetAccessor,
            modifiers,
            NodeShape::AccessorDeclaration(AccessorDeclaration {
                name,
                parameters,
                type_node,
                body,
            }),
        )
    }

    pub fn update_get_accessor_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        parameters: &'a NodeArray<'a>,
        type_node: Option<&'a Node<'a>>,
        body: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::GetAccessor,
            "update_get_accessor_declaration requires a get accessor",
        );
        let NodeShape::AccessorDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_get_accessor_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && node_ref_eq(old.name, name)
            && old.parameters.ref_eq(parameters)
            && opt_node_ref_eq(old.type_node, type_node)
            && opt_node_ref_eq(old.body, body)
        {
            return node;
        }
        self.update(
            self.create_get_accessor_declaration(modifiers, name, parameters, type_node, body),
            node,
        )
    }

    pub fn create_set_accessor_declaration(
        &self,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        parameters: impl Into<NodeArrayOrVec<'a>>,
        body: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let parameters = self.create_node_array(parameters, false);
        self.synthesize_with_modifiers(
            SyntaxKind::SetAccessor,
            modifiers,
            NodeShape::AccessorDeclaration(AccessorDeclaration {
                name,
                parameters,
                type_node: None,
                body,
            }),
        )
    }

    pub fn update_set_accessor_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        parameters: &'a NodeArray<'a>,
        body: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::SetAccessor,
            "update_set_accessor_declaration requires a set accessor",
        );
        let NodeShape::AccessorDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_set_accessor_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && node_ref_eq(old.name, name)
            && old.parameters.ref_eq(parameters)
            && opt_node_ref_eq(old.body, body)
        {
            return node;
        }
        self.update(
            self.create_set_accessor_declaration(modifiers, name, parameters, body),
            node,
        )
    }

    pub fn create_call_signature(
        &self,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: impl Into<NodeArrayOrVec<'a>>,
        type_node: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let parameters = self.create_node_array(parameters, false);
        self.synthesize(
            SyntaxKind::CallSignature,
            NodeShape::SignatureDeclaration(SignatureDeclaration {
                type_parameters,
                parameters,
                type_node,
            }),
        )
    }

    pub fn update_call_signature(
        &self,
        node: &'a Node<'a>,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: &'a NodeArray<'a>,
        type_node: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::CallSignature,
            "update_call_signature requires a call signature",
        );
        self.update_signature_declaration(node, type_parameters, parameters, type_node)
    }

    pub fn create_construct_signature(
        &self,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: impl Into<NodeArrayOrVec<'a>>,
        type_node: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let parameters = self.create_node_array(parameters, false);
        self.synthesize(
            SyntaxKind::ConstructSignature,
            NodeShape::SignatureDeclaration(SignatureDeclaration {
                type_parameters,
                parameters,
                type_node,
            }),
        )
    }

    pub fn update_construct_signature(
        &self,
        node: &'a Node<'a>,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: &'a NodeArray<'a>,
        type_node: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::ConstructSignature,
            "update_construct_signature requires a construct signature",
        );
        self.update_signature_declaration(node, type_parameters, parameters, type_node)
    }

    fn update_signature_declaration(
        &self,
        node: &'a Node<'a>,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: &'a NodeArray<'a>,
        type_node: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::SignatureDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_signature_declaration", node.kind())
        };
        if opt_array_ref_eq(old.type_parameters, type_parameters)
            && old.parameters.ref_eq(parameters)
            && opt_node_ref_eq(old.type_node, type_node)
        {
            return node;
        }
        let updated = if node.kind() == SyntaxKind::CallSignature {
            self.create_call_signature(type_parameters, parameters, type_node)
        } else {
            self.create_construct_signature(type_parameters, parameters, type_node)
        };
        self.update(updated, node)
    }

    pub fn create_index_signature(
        &self,
        modifiers: ModifierFlags,
        parameters: impl Into<NodeArrayOrVec<'a>>,
        type_node: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let parameters = self.create_node_array(parameters, false);
        self.synthesize_with_modifiers(
            SyntaxKind::IndexSignature,
            modifiers,
            NodeShape::IndexSignature(IndexSignature {
                parameters,
                type_node,
            }),
        )
    }

    pub fn update_index_signature(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        parameters: &'a NodeArray<'a>,
        type_node: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::IndexSignature(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_index_signature", node.kind())
        };
        if node.modifier_flags() == modifiers
            && old.parameters.ref_eq(parameters)
            && opt_node_ref_eq(old.type_node, type_node)
        {
            return node;
        }
        self.update(
            self.create_index_signature(modifiers, parameters, type_node),
            node,
        )
    }

    pub fn create_semicolon_class_element(&self) -> &'a Node<'a> {
        self.synthesize(SyntaxKind::SemicolonClassElement, NodeShape::Token)
    }

    // ========================================================================
    // Types
    // ========================================================================

    pub fn create_keyword_type_node(&self, kind: SyntaxKind) -> &'a Node<'a> {
        debug::assert(
            kind.is_keyword_type_kind(),
            "create_keyword_type_node requires a keyword type kind",
        );
        self.synthesize(kind, NodeShape::Token)
    }

    pub fn create_type_predicate_node(
        &self,
        asserts_modifier: bool,
        parameter_name: &'a Node<'a>,
        type_node: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::TypePredicate,
            NodeShape::TypePredicate(TypePredicate {
                asserts_modifier,
                parameter_name,
                type_node,
            }),
        )
    }

    pub fn update_type_predicate_node(
        &self,
        node: &'a Node<'a>,
        asserts_modifier: bool,
        parameter_name: &'a Node<'a>,
        type_node: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::TypePredicate(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_type_predicate_node", node.kind())
        };
        if old.asserts_modifier == asserts_modifier
            && node_ref_eq(old.parameter_name, parameter_name)
            && opt_node_ref_eq(old.type_node, type_node)
        {
            return node;
        }
        self.update(
            self.create_type_predicate_node(asserts_modifier, parameter_name, type_node),
            node,
        )
    }

    pub fn create_type_reference_node(
        &self,
        type_name: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::TypeReference,
            NodeShape::TypeReference(TypeReference {
                type_name,
                type_arguments,
            }),
        )
    }

    pub fn update_type_reference_node(
        &self,
        node: &'a Node<'a>,
        type_name: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::TypeReference(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_type_reference_node", node.kind())
        };
        if node_ref_eq(old.type_name, type_name)
            && opt_array_ref_eq(old.type_arguments, type_arguments)
        {
            return node;
        }
        self.update(
            self.create_type_reference_node(type_name, type_arguments),
            node,
        )
    }

    pub fn create_function_type_node(
        &self,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: impl Into<NodeArrayOrVec<'a>>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let parameters = self.create_node_array(parameters, false);
        self.synthesize(
            SyntaxKind::FunctionType,
            NodeShape::FunctionTypeLike(FunctionTypeLike {
                type_parameters,
                parameters,
                type_node,
            }),
        )
    }

    pub fn update_function_type_node(
        &self,
        node: &'a Node<'a>,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: &'a NodeArray<'a>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::FunctionType,
            "update_function_type_node requires a function type",
        );
        let NodeShape::FunctionTypeLike(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_function_type_node", node.kind())
        };
        if opt_array_ref_eq(old.type_parameters, type_parameters)
            && old.parameters.ref_eq(parameters)
            && node_ref_eq(old.type_node, type_node)
        {
            return node;
        }
        self.update(
            self.create_function_type_node(type_parameters, parameters, type_node),
            node,
        )
    }

    pub fn create_constructor_type_node(
        &self,
        modifiers: ModifierFlags,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: impl Into<NodeArrayOrVec<'a>>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let parameters = self.create_node_array(parameters, false);
        self.synthesize_with_modifiers(
            SyntaxKind::ConstructorType,
            modifiers,
            NodeShape::FunctionTypeLike(FunctionTypeLike {
                type_parameters,
                parameters,
                type_node,
            }),
        )
    }

    pub fn update_constructor_type_node(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: &'a NodeArray<'a>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::ConstructorType,
            "update_constructor_type_node requires a constructor type",
        );
        let NodeShape::FunctionTypeLike(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_constructor_type_node", node.kind())
        };
        if node.modifier_flags() == modifiers
            && opt_array_ref_eq(old.type_parameters, type_parameters)
            && old.parameters.ref_eq(parameters)
            && node_ref_eq(old.type_node, type_node)
        {
            return node;
        }
        self.update(
            self.create_constructor_type_node(modifiers, type_parameters, parameters, type_node),
            node,
        )
    }

    pub fn create_type_query_node(
        &self,
        expr_name: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::TypeQuery,
            NodeShape::TypeQuery(TypeQuery {
                expr_name,
                type_arguments,
            }),
        )
    }

    pub fn update_type_query_node(
        &self,
        node: &'a Node<'a>,
        expr_name: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::TypeQuery(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_type_query_node", node.kind())
        };
        if node_ref_eq(old.expr_name, expr_name)
            && opt_array_ref_eq(old.type_arguments, type_arguments)
        {
            return node;
        }
        self.update(self.create_type_query_node(expr_name, type_arguments), node)
    }

    pub fn create_type_literal_node(
        &self,
        members: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let members = self.create_node_array(members, false);
        self.synthesize(
            SyntaxKind::TypeLiteral,
            NodeShape::TypeLiteral(TypeLiteral { members }),
        )
    }

    pub fn update_type_literal_node(
        &self,
        node: &'a Node<'a>,
        members: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::TypeLiteral(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_type_literal_node", node.kind())
        };
        if old.members.ref_eq(members) {
            return node;
        }
        self.update(self.create_type_literal_node(members), node)
    }

    pub fn create_array_type_node(&self, element_type: &'a Node<'a>) -> &'a Node<'a> {
        let element_type = self.parenthesize_element_type_of_array_type(element_type);
        self.synthesize(
            SyntaxKind::ArrayType,
            NodeShape::ArrayType(ArrayType { element_type }),
        )
    }

    pub fn update_array_type_node(
        &self,
        node: &'a Node<'a>,
        element_type: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ArrayType(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_array_type_node", node.kind())
        };
        if node_ref_eq(old.element_type, element_type) {
            return node;
        }
        self.update(self.create_array_type_node(element_type), node)
    }

    pub fn create_tuple_type_node(
        &self,
        elements: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let elements = self.create_node_array(elements, false);
        self.synthesize(
            SyntaxKind::TupleType,
            NodeShape::TupleType(TupleType { elements }),
        )
    }

    pub fn update_tuple_type_node(
        &self,
        node: &'a Node<'a>,
        elements: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::TupleType(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_tuple_type_node", node.kind())
        };
        if old.elements.ref_eq(elements) {
            return node;
        }
        self.update(self.create_tuple_type_node(elements), node)
    }

    pub fn create_named_tuple_member(
        &self,
        dot_dot_dot_token: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
        question_token: Option<&'a Node<'a>>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::NamedTupleMember,
            NodeShape::NamedTupleMember(NamedTupleMember {
                dot_dot_dot_token,
                name,
                question_token,
                type_node,
            }),
        )
    }

    pub fn update_named_tuple_member(
        &self,
        node: &'a Node<'a>,
        dot_dot_dot_token: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
        question_token: Option<&'a Node<'a>>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::NamedTupleMember(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_named_tuple_member", node.kind())
        };
        if opt_node_ref_eq(old.dot_dot_dot_token, dot_dot_dot_token)
            && node_ref_eq(old.name, name)
            && opt_node_ref_eq(old.question_token, question_token)
            && node_ref_eq(old.type_node, type_node)
        {
            return node;
        }
        self.update(
            self.create_named_tuple_member(dot_dot_dot_token, name, question_token, type_node),
            node,
        )
    }

    pub fn create_optional_type_node(&self, type_node: &'a Node<'a>) -> &'a Node<'a> {
        let type_node = self.parenthesize_element_type_of_array_type(type_node);
        self.synthesize(
            SyntaxKind::OptionalType,
            NodeShape::WrappedType(WrappedType { type_node }),
        )
    }

    pub fn update_optional_type_node(
        &self,
        node: &'a Node<'a>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::OptionalType,
            "update_optional_type_node requires an optional type",
        );
        let NodeShape::WrappedType(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_optional_type_node", node.kind())
        };
        if node_ref_eq(old.type_node, type_node) {
            return node;
        }
        self.update(self.create_optional_type_node(type_node), node)
    }

    pub fn create_rest_type_node(&self, type_node: &'a Node<'a>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::RestType,
            NodeShape::WrappedType(WrappedType { type_node }),
        )
    }

    pub fn update_rest_type_node(
        &self,
        node: &'a Node<'a>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::RestType,
            "update_rest_type_node requires a rest type",
        );
        let NodeShape::WrappedType(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_rest_type_node", node.kind())
        };
        if node_ref_eq(old.type_node, type_node) {
            return node;
        }
        self.update(self.create_rest_type_node(type_node), node)
    }

    fn create_composite_type_node(
        &self,
        kind: SyntaxKind,
        types: NodeArrayOrVec<'a>,
    ) -> &'a Node<'a> {
        let types = self.create_node_array(types, false);
        let types = self.parenthesize_constituent_types_of_union_or_intersection(types);
        self.synthesize(kind, NodeShape::CompositeType(CompositeType { types }))
    }

    pub fn create_union_type_node(
        &self,
        types: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        self.create_composite_type_node(SyntaxKind::UnionType, types.into())
    }

    pub fn create_intersection_type_node(
        &self,
        types: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        self.create_composite_type_node(SyntaxKind::IntersectionType, types.into())
    }

    pub fn update_union_type_node(
        &self,
        node: &'a Node<'a>,
        types: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::UnionType,
            "update_union_type_node requires a union type",
        );
        self.update_composite_type_node(node, types)
    }

    pub fn update_intersection_type_node(
        &self,
        node: &'a Node<'a>,
        types: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::IntersectionType,
            "update_intersection_type_node requires an intersection type",
        );
        self.update_composite_type_node(node, types)
    }

    fn update_composite_type_node(
        &self,
        node: &'a Node<'a>,
        types: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::CompositeType(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_composite_type_node", node.kind())
        };
        if old.types.ref_eq(types) {
            return node;
        }
        self.update(self.create_composite_type_node(node.kind(), types.into()), node)
    }

    pub fn create_conditional_type_node(
        &self,
        check_type: &'a Node<'a>,
        extends_type: &'a Node<'a>,
        true_type: &'a Node<'a>,
        false_type: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ConditionalType,
            NodeShape::ConditionalType(ConditionalType {
                check_type,
                extends_type,
                true_type,
                false_type,
            }),
        )
    }

    pub fn update_conditional_type_node(
        &self,
        node: &'a Node<'a>,
        check_type: &'a Node<'a>,
        extends_type: &'a Node<'a>,
        true_type: &'a Node<'a>,
        false_type: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ConditionalType(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_conditional_type_node", node.kind())
        };
        if node_ref_eq(old.check_type, check_type)
            && node_ref_eq(old.extends_type, extends_type)
            && node_ref_eq(old.true_type, true_type)
            && node_ref_eq(old.false_type, false_type)
        {
            return node;
        }
        self.update(
            self.create_conditional_type_node(check_type, extends_type, true_type, false_type),
            node,
        )
    }

    pub fn create_infer_type_node(&self, type_parameter: &'a Node<'a>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::InferType,
            NodeShape::InferType(InferType { type_parameter }),
        )
    }

    pub fn update_infer_type_node(
        &self,
        node: &'a Node<'a>,
        type_parameter: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::InferType(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_infer_type_node", node.kind())
        };
        if node_ref_eq(old.type_parameter, type_parameter) {
            return node;
        }
        self.update(self.create_infer_type_node(type_parameter), node)
    }

    pub fn create_parenthesized_type(&self, type_node: &'a Node<'a>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ParenthesizedType,
            NodeShape::WrappedType(WrappedType { type_node }),
        )
    }

    pub fn update_parenthesized_type(
        &self,
        node: &'a Node<'a>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::ParenthesizedType,
            "update_parenthesized_type requires a parenthesized type",
        );
        let NodeShape::WrappedType(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_parenthesized_type", node.kind())
        };
        if node_ref_eq(old.type_node, type_node) {
            return node;
        }
        self.update(self.create_parenthesized_type(type_node), node)
    }

    pub fn create_this_type_node(&self) -> &'a Node<'a> {
        self.synthesize(SyntaxKind::ThisType, NodeShape::Token)
    }

    pub fn create_type_operator_node(
        &self,
        operator: SyntaxKind,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let type_node = self.parenthesize_element_type_of_array_type(type_node);
        self.synthesize(
            SyntaxKind::TypeOperator,
            NodeShape::TypeOperator(TypeOperator {
                operator,
                type_node,
            }),
        )
    }

    pub fn update_type_operator_node(
        &self,
        node: &'a Node<'a>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::TypeOperator(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_type_operator_node", node.kind())
        };
        if node_ref_eq(old.type_node, type_node) {
            return node;
        }
        self.update(self.create_type_operator_node(old.operator, type_node), node)
    }

    pub fn create_indexed_access_type_node(
        &self,
        object_type: &'a Node<'a>,
        index_type: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let object_type = self.parenthesize_element_type_of_array_type(object_type);
        self.synthesize(
            SyntaxKind::IndexedAccessType,
            NodeShape::IndexedAccessType(IndexedAccessType {
                object_type,
                index_type,
            }),
        )
    }

    pub fn update_indexed_access_type_node(
        &self,
        node: &'a Node<'a>,
        object_type: &'a Node<'a>,
        index_type: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::IndexedAccessType(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_indexed_access_type_node", node.kind())
        };
        if node_ref_eq(old.object_type, object_type) && node_ref_eq(old.index_type, index_type) {
            return node;
        }
        self.update(
            self.create_indexed_access_type_node(object_type, index_type),
            node,
        )
    }

    pub fn create_mapped_type_node(
        &self,
        readonly_token: Option<&'a Node<'a>>,
        type_parameter: &'a Node<'a>,
        name_type: Option<&'a Node<'a>>,
        question_token: Option<&'a Node<'a>>,
        type_node: Option<&'a Node<'a>>,
        members: Option<&'a NodeArray<'a>>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::MappedType,
            NodeShape::MappedType(MappedType {
                readonly_token,
                type_parameter,
                name_type,
                question_token,
                type_node,
                members,
            }),
        )
    }

    pub fn update_mapped_type_node(
        &self,
        node: &'a Node<'a>,
        readonly_token: Option<&'a Node<'a>>,
        type_parameter: &'a Node<'a>,
        name_type: Option<&'a Node<'a>>,
        question_token: Option<&'a Node<'a>>,
        type_node: Option<&'a Node<'a>>,
        members: Option<&'a NodeArray<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::MappedType(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_mapped_type_node", node.kind())
        };
        if opt_node_ref_eq(old.readonly_token, readonly_token)
            && node_ref_eq(old.type_parameter, type_parameter)
            && opt_node_ref_eq(old.name_type, name_type)
            && opt_node_ref_eq(old.question_token, question_token)
            && opt_node_ref_eq(old.type_node, type_node)
            && opt_array_ref_eq(old.members, members)
        {
            return node;
        }
        self.update(
            self.create_mapped_type_node(
                readonly_token,
                type_parameter,
                name_type,
                question_token,
                type_node,
                members,
            ),
            node,
        )
    }

    pub fn create_literal_type_node(&self, literal: &'a Node<'a>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::LiteralType,
            NodeShape::LiteralType(LiteralType { literal }),
        )
    }

    pub fn update_literal_type_node(
        &self,
        node: &'a Node<'a>,
        literal: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::LiteralType(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_literal_type_node", node.kind())
        };
        if node_ref_eq(old.literal, literal) {
            return node;
        }
        self.update(self.create_literal_type_node(literal), node)
    }

    pub fn create_template_literal_type_span(
        &self,
        type_node: &'a Node<'a>,
        literal: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::TemplateLiteralTypeSpan,
            NodeShape::TemplateLiteralTypeSpan(TemplateLiteralTypeSpan { type_node, literal }),
        )
    }

    pub fn update_template_literal_type_span(
        &self,
        node: &'a Node<'a>,
        type_node: &'a Node<'a>,
        literal: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::TemplateLiteralTypeSpan(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_template_literal_type_span", node.kind())
        };
        if node_ref_eq(old.type_node, type_node) && node_ref_eq(old.literal, literal) {
            return node;
        }
        self.update(
            self.create_template_literal_type_span(type_node, literal),
            node,
        )
    }

    pub fn create_template_literal_type(
        &self,
        head: &'a Node<'a>,
        template_spans: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let template_spans = self.create_node_array(template_spans, false);
        self.synthesize(
            SyntaxKind::TemplateLiteralType,
            NodeShape::TemplateLiteralType(TemplateLiteralType {
                head,
                template_spans,
            }),
        )
    }

    pub fn update_template_literal_type(
        &self,
        node: &'a Node<'a>,
        head: &'a Node<'a>,
        template_spans: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::TemplateLiteralType(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_template_literal_type", node.kind())
        };
        if node_ref_eq(old.head, head) && old.template_spans.ref_eq(template_spans) {
            return node;
        }
        self.update(self.create_template_literal_type(head, template_spans), node)
    }

    pub fn create_import_type_node(
        &self,
        argument: &'a Node<'a>,
        attributes: Option<&'a Node<'a>>,
        qualifier: Option<&'a Node<'a>>,
        type_arguments: Option<&'a NodeArray<'a>>,
        is_type_of: bool,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ImportType,
            NodeShape::ImportType(ImportType {
                argument,
                attributes,
                qualifier,
                type_arguments,
                is_type_of,
            }),
        )
    }

    pub fn update_import_type_node(
        &self,
        node: &'a Node<'a>,
        argument: &'a Node<'a>,
        attributes: Option<&'a Node<'a>>,
        qualifier: Option<&'a Node<'a>>,
        type_arguments: Option<&'a NodeArray<'a>>,
        is_type_of: bool,
    ) -> &'a Node<'a> {
        let NodeShape::ImportType(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_import_type_node", node.kind())
        };
        if node_ref_eq(old.argument, argument)
            && opt_node_ref_eq(old.attributes, attributes)
            && opt_node_ref_eq(old.qualifier, qualifier)
            && opt_array_ref_eq(old.type_arguments, type_arguments)
            && old.is_type_of == is_type_of
        {
            return node;
        }
        self.update(
            self.create_import_type_node(argument, attributes, qualifier, type_arguments, is_type_of),
            node,
        )
    }

    pub fn create_expression_with_type_arguments(
        &self,
        expression: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
    ) -> &'a Node<'a> {
        let expression = self.parenthesize_left_side_of_access(expression);
        self.synthesize(
            SyntaxKind::ExpressionWithTypeArguments,
            NodeShape::ExpressionWithTypeArguments(ExpressionWithTypeArguments {
                expression,
                type_arguments,
            }),
        )
    }

    pub fn update_expression_with_type_arguments(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::ExpressionWithTypeArguments(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_expression_with_type_arguments", node.kind())
        };
        if node_ref_eq(old.expression, expression)
            && opt_array_ref_eq(old.type_arguments, type_arguments)
        {
            return node;
        }
        self.update(
            self.create_expression_with_type_arguments(expression, type_arguments),
            node,
        )
    }

    // ========================================================================
    // Binding patterns
    // ========================================================================

    pub fn create_object_binding_pattern(
        &self,
        elements: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let elements = self.create_node_array(elements, false);
        self.synthesize(
            SyntaxKind::ObjectBindingPattern,
            NodeShape::ObjectBindingPattern(ObjectBindingPattern { elements }),
        )
    }

    pub fn update_object_binding_pattern(
        &self,
        node: &'a Node<'a>,
        elements: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ObjectBindingPattern(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_object_binding_pattern", node.kind())
        };
        if old.elements.ref_eq(elements) {
            return node;
        }
        self.update(self.create_object_binding_pattern(elements), node)
    }

    pub fn create_array_binding_pattern(
        &self,
        elements: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let elements = self.create_node_array(elements, false);
        self.synthesize(
            SyntaxKind::ArrayBindingPattern,
            NodeShape::ArrayBindingPattern(ArrayBindingPattern { elements }),
        )
    }

    pub fn update_array_binding_pattern(
        &self,
        node: &'a Node<'a>,
        elements: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ArrayBindingPattern(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_array_binding_pattern", node.kind())
        };
        if old.elements.ref_eq(elements) {
            return node;
        }
        self.update(self.create_array_binding_pattern(elements), node)
    }

    pub fn create_binding_element(
        &self,
        dot_dot_dot_token: Option<&'a Node<'a>>,
        property_name: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
        initializer: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let initializer =
            initializer.map(|init| self.parenthesize_expression_for_disallowed_comma(init));
        self.synthesize(
            SyntaxKind::BindingElement,
            NodeShape::BindingElement(BindingElement {
                dot_dot_dot_token,
                property_name,
                name,
                initializer,
            }),
        )
    }

    pub fn update_binding_element(
        &self,
        node: &'a Node<'a>,
        dot_dot_dot_token: Option<&'a Node<'a>>,
        property_name: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
        initializer: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::BindingElement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_binding_element", node.kind())
        };
        if opt_node_ref_eq(old.dot_dot_dot_token, dot_dot_dot_token)
            && opt_node_ref_eq(old.property_name, property_name)
            && node_ref_eq(old.name, name)
            && opt_node_ref_eq(old.initializer, initializer)
        {
            return node;
        }
        self.update(
            self.create_binding_element(dot_dot_dot_token, property_name, name, initializer),
            node,
        )
    }

    pub fn create_omitted_expression(&self) -> &'a Node<'a> {
        self.synthesize(SyntaxKind::OmittedExpression, NodeShape::Token)
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn create_array_literal_expression(
        &self,
        elements: impl Into<NodeArrayOrVec<'a>>,
        multi_line: bool,
    ) -> &'a Node<'a> {
        let elements = self.create_node_array(elements, false);
        let elements = self.parenthesize_expressions_of_comma_delimited_list(elements);
        let flags = if multi_line {
            NodeFlags::MULTI_LINE
        } else {
            NodeFlags::NONE
        };
        self.synthesize_with_flags(
            SyntaxKind::ArrayLiteralExpression,
            flags,
            NodeShape::ArrayLiteralExpression(ArrayLiteralExpression { elements }),
        )
    }

    pub fn update_array_literal_expression(
        &self,
        node: &'a Node<'a>,
        elements: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ArrayLiteralExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_array_literal_expression", node.kind())
        };
        if old.elements.ref_eq(elements) {
            return node;
        }
        let multi_line = node.flags().contains(NodeFlags::MULTI_LINE);
        self.update(
            self.create_array_literal_expression(elements, multi_line),
            node,
        )
    }

    pub fn create_object_literal_expression(
        &self,
        properties: impl Into<NodeArrayOrVec<'a>>,
        multi_line: bool,
    ) -> &'a Node<'a> {
        let properties = self.create_node_array(properties, false);
        let flags = if multi_line {
            NodeFlags::MULTI_LINE
        } else {
            NodeFlags::NONE
        };
        self.synthesize_with_flags(
            SyntaxKind::ObjectLiteralExpression,
            flags,
            NodeShape::ObjectLiteralExpression(ObjectLiteralExpression { properties }),
        )
    }

    pub fn update_object_literal_expression(
        &self,
        node: &'a Node<'a>,
        properties: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ObjectLiteralExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_object_literal_expression", node.kind())
        };
        if old.properties.ref_eq(properties) {
            return node;
        }
        let multi_line = node.flags().contains(NodeFlags::MULTI_LINE);
        self.update(
            self.create_object_literal_expression(properties, multi_line),
            node,
        )
    }

    pub fn create_property_access_expression(
        &self,
        expression: &'a Node<'a>,
        name: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let expression = self.parenthesize_left_side_of_access(expression);
        self.synthesize(
            SyntaxKind::PropertyAccessExpression,
            NodeShape::PropertyAccessExpression(PropertyAccessExpression {
                expression,
                question_dot_token: None,
                name,
            }),
        )
    }

    pub fn create_property_access_chain(
        &self,
        expression: &'a Node<'a>,
        question_dot_token: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let expression = self.parenthesize_left_side_of_access(expression);
        self.synthesize_with_flags(
            SyntaxKind::PropertyAccessExpression,
            NodeFlags::OPTIONAL_CHAIN,
            NodeShape::PropertyAccessExpression(PropertyAccessExpression {
                expression,
                question_dot_token,
                name,
            }),
        )
    }

    pub fn update_property_access_expression(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        name: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::PropertyAccessExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_property_access_expression", node.kind())
        };
        if node.flags().contains(NodeFlags::OPTIONAL_CHAIN) {
            return self.update_property_access_chain(node, expression, old.question_dot_token, name);
        }
        if node_ref_eq(old.expression, expression) && node_ref_eq(old.name, name) {
            return node;
        }
        self.update(self.create_property_access_expression(expression, name), node)
    }

    pub fn update_property_access_chain(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        question_dot_token: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::PropertyAccessExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_property_access_chain", node.kind())
        };
        debug::assert(
            node.flags().contains(NodeFlags::OPTIONAL_CHAIN),
            "update_property_access_chain requires an optional chain",
        );
        if node_ref_eq(old.expression, expression)
            && opt_node_ref_eq(old.question_dot_token, question_dot_token)
            && node_ref_eq(old.name, name)
        {
            return node;
        }
        self.update(
            self.create_property_access_chain(expression, question_dot_token, name),
            node,
        )
    }

    pub fn create_element_access_expression(
        &self,
        expression: &'a Node<'a>,
        argument_expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let expression = self.parenthesize_left_side_of_access(expression);
        let argument_expression =
            self.parenthesize_expression_for_disallowed_comma(argument_expression);
        self.synthesize(
            SyntaxKind::ElementAccessExpression,
            NodeShape::ElementAccessExpression(ElementAccessExpression {
                expression,
                question_dot_token: None,
                argument_expression,
            }),
        )
    }

    pub fn create_element_access_chain(
        &self,
        expression: &'a Node<'a>,
        question_dot_token: Option<&'a Node<'a>>,
        argument_expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let expression = self.parenthesize_left_side_of_access(expression);
        let argument_expression =
            self.parenthesize_expression_for_disallowed_comma(argument_expression);
        self.synthesize_with_flags(
            SyntaxKind::ElementAccessExpression,
            NodeFlags::OPTIONAL_CHAIN,
            NodeShape::ElementAccessExpression(ElementAccessExpression {
                expression,
                question_dot_token,
                argument_expression,
            }),
        )
    }

    pub fn update_element_access_expression(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        argument_expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ElementAccessExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_element_access_expression", node.kind())
        };
        if node.flags().contains(NodeFlags::OPTIONAL_CHAIN) {
            return self.update_element_access_chain(
                node,
                expression,
                old.question_dot_token,
                argument_expression,
            );
        }
        if node_ref_eq(old.expression, expression)
            && node_ref_eq(old.argument_expression, argument_expression)
        {
            return node;
        }
        self.update(
            self.create_element_access_expression(expression, argument_expression),
            node,
        )
    }

    pub fn update_element_access_chain(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        question_dot_token: Option<&'a Node<'a>>,
        argument_expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ElementAccessExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_element_access_chain", node.kind())
        };
        debug::assert(
            node.flags().contains(NodeFlags::OPTIONAL_CHAIN),
            "update_element_access_chain requires an optional chain",
        );
        if node_ref_eq(old.expression, expression)
            && opt_node_ref_eq(old.question_dot_token, question_dot_token)
            && node_ref_eq(old.argument_expression, argument_expression)
        {
            return node;
        }
        self.update(
            self.create_element_access_chain(expression, question_dot_token, argument_expression),
            node,
        )
    }

    pub fn create_call_expression(
        &self,
        expression: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
        arguments: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let expression = self.parenthesize_left_side_of_access(expression);
        let arguments = self.create_node_array(arguments, false);
        let arguments = self.parenthesize_expressions_of_comma_delimited_list(arguments);
        self.synthesize(
            SyntaxKind::CallExpression,
            NodeShape::CallExpression(CallExpression {
                expression,
                question_dot_token: None,
                type_arguments,
                arguments,
            }),
        )
    }

    pub fn create_call_chain(
        &self,
        expression: &'a Node<'a>,
        question_dot_token: Option<&'a Node<'a>>,
        type_arguments: Option<&'a NodeArray<'a>>,
        arguments: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let expression = self.parenthesize_left_side_of_access(expression);
        let arguments = self.create_node_array(arguments, false);
        let arguments = self.parenthesize_expressions_of_comma_delimited_list(arguments);
        self.synthesize_with_flags(
            SyntaxKind::CallExpression,
            NodeFlags::OPTIONAL_CHAIN,
            NodeShape::CallExpression(CallExpression {
                expression,
                question_dot_token,
                type_arguments,
                arguments,
            }),
        )
    }

    pub fn update_call_expression(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
        arguments: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::CallExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_call_expression", node.kind())
        };
        if node.flags().contains(NodeFlags::OPTIONAL_CHAIN) {
            return self.update_call_chain(
                node,
                expression,
                old.question_dot_token,
                type_arguments,
                arguments,
            );
        }
        if node_ref_eq(old.expression, expression)
            && opt_array_ref_eq(old.type_arguments, type_arguments)
            && old.arguments.ref_eq(arguments)
        {
            return node;
        }
        self.update(
            self.create_call_expression(expression, type_arguments, arguments),
            node,
        )
    }

    pub fn update_call_chain(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        question_dot_token: Option<&'a Node<'a>>,
        type_arguments: Option<&'a NodeArray<'a>>,
        arguments: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::CallExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_call_chain", node.kind())
        };
        debug::assert(
            node.flags().contains(NodeFlags::OPTIONAL_CHAIN),
            "update_call_chain requires an optional chain",
        );
        if node_ref_eq(old.expression, expression)
            && opt_node_ref_eq(old.question_dot_token, question_dot_token)
            && opt_array_ref_eq(old.type_arguments, type_arguments)
            && old.arguments.ref_eq(arguments)
        {
            return node;
        }
        self.update(
            self.create_call_chain(expression, question_dot_token, type_arguments, arguments),
            node,
        )
    }

    pub fn create_new_expression(
        &self,
        expression: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
        arguments: Option<&'a NodeArray<'a>>,
    ) -> &'a Node<'a> {
        let expression = self.parenthesize_expression_of_new(expression);
        let arguments =
            arguments.map(|args| self.parenthesize_expressions_of_comma_delimited_list(args));
        self.synthesize(
            SyntaxKind::NewExpression,
            NodeShape::NewExpression(NewExpression {
                expression,
                type_arguments,
                arguments,
            }),
        )
    }

    pub fn update_new_expression(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
        arguments: Option<&'a NodeArray<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::NewExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_new_expression", node.kind())
        };
        if node_ref_eq(old.expression, expression)
            && opt_array_ref_eq(old.type_arguments, type_arguments)
            && opt_array_ref_eq(old.arguments, arguments)
        {
            return node;
        }
        self.update(
            self.create_new_expression(expression, type_arguments, arguments),
            node,
        )
    }

    pub fn create_tagged_template_expression(
        &self,
        tag: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
        template: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let tag = self.parenthesize_left_side_of_access(tag);
        self.synthesize(
            SyntaxKind::TaggedTemplateExpression,
            NodeShape::TaggedTemplateExpression(TaggedTemplateExpression {
                tag,
                type_arguments,
                template,
            }),
        )
    }

    pub fn update_tagged_template_expression(
        &self,
        node: &'a Node<'a>,
        tag: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
        template: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::TaggedTemplateExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_tagged_template_expression", node.kind())
        };
        if node_ref_eq(old.tag, tag)
            && opt_array_ref_eq(old.type_arguments, type_arguments)
            && node_ref_eq(old.template, template)
        {
            return node;
        }
        self.update(
            self.create_tagged_template_expression(tag, type_arguments, template),
            node,
        )
    }

    pub fn create_type_assertion(
        &self,
        type_node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let expression = self.parenthesize_operand_of_prefix_unary(expression);
        self.synthesize(
            SyntaxKind::TypeAssertionExpression,
            NodeShape::TypeAssertionExpression(TypeAssertionExpression {
                type_node,
                expression,
            }),
        )
    }

    pub fn update_type_assertion(
        &self,
        node: &'a Node<'a>,
        type_node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::TypeAssertionExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_type_assertion", node.kind())
        };
        if node_ref_eq(old.type_node, type_node) && node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(self.create_type_assertion(type_node, expression), node)
    }

    pub fn create_parenthesized_expression(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ParenthesizedExpression,
            NodeShape::ParenthesizedExpression(ParenthesizedExpression { expression }),
        )
    }

    pub fn update_parenthesized_expression(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ParenthesizedExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_parenthesized_expression", node.kind())
        };
        if node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(self.create_parenthesized_expression(expression), node)
    }

    pub fn create_function_expression(
        &self,
        modifiers: ModifierFlags,
        asterisk_token: Option<&'a Node<'a>>,
        name: Option<&'a Node<'a>>,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: impl Into<NodeArrayOrVec<'a>>,
        type_node: Option<&'a Node<'a>>,
        body: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let parameters = self.create_node_array(parameters, false);
        self.synthesize_with_modifiers(
            SyntaxKind::FunctionExpression,
            modifiers,
            NodeShape::FunctionExpression(FunctionExpression {
                asterisk_token,
                name,
                type_parameters,
                parameters,
                type_node,
                body,
            }),
        )
    }

    pub fn update_function_expression(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        asterisk_token: Option<&'a Node<'a>>,
        name: Option<&'a Node<'a>>,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: &'a NodeArray<'a>,
        type_node: Option<&'a Node<'a>>,
        body: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::FunctionExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_function_expression", node.kind())
        };
        if node.modifier_flags() == modifiers
            && opt_node_ref_eq(old.asterisk_token, asterisk_token)
            && opt_node_ref_eq(old.name, name)
            && opt_array_ref_eq(old.type_parameters, type_parameters)
            && old.parameters.ref_eq(parameters)
            && opt_node_ref_eq(old.type_node, type_node)
            && node_ref_eq(old.body, body)
        {
            return node;
        }
        self.update(
            self.create_function_expression(
                modifiers,
                asterisk_token,
                name,
                type_parameters,
                parameters,
                type_node,
                body,
            ),
            node,
        )
    }

    pub fn create_arrow_function(
        &self,
        modifiers: ModifierFlags,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: impl Into<NodeArrayOrVec<'a>>,
        type_node: Option<&'a Node<'a>>,
        equals_greater_than_token: Option<&'a Node<'a>>,
        body: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let parameters = self.create_node_array(parameters, false);
        let equals_greater_than_token = equals_greater_than_token
            .unwrap_or_else(|| self.create_token(SyntaxKind::EqualsGreaterThanToken));
        let body = self.parenthesize_concise_body_of_arrow_function(body);
        self.synthesize_with_modifiers(
            SyntaxKind::ArrowFunction,
            modifiers,
            NodeShape::ArrowFunction(ArrowFunction {
                type_parameters,
                parameters,
                type_node,
                equals_greater_than_token,
                body,
            }),
        )
    }

    pub fn update_arrow_function(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: &'a NodeArray<'a>,
        type_node: Option<&'a Node<'a>>,
        equals_greater_than_token: &'a Node<'a>,
        body: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ArrowFunction(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_arrow_function", node.kind())
        };
        if node.modifier_flags() == modifiers
            && opt_array_ref_eq(old.type_parameters, type_parameters)
            && old.parameters.ref_eq(parameters)
            && opt_node_ref_eq(old.type_node, type_node)
            && node_ref_eq(old.equals_greater_than_token, equals_greater_than_token)
            && node_ref_eq(old.body, body)
        {
            return node;
        }
        self.update(
            self.create_arrow_function(
                modifiers,
                type_parameters,
                parameters,
                type_node,
                Some(equals_greater_than_token),
                body,
            ),
            node,
        )
    }

    fn create_simple_unary_expression(
        &self,
        kind: SyntaxKind,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let expression = self.parenthesize_operand_of_prefix_unary(expression);
        self.synthesize(
            kind,
            NodeShape::SimpleUnaryExpression(SimpleUnaryExpression { expression }),
        )
    }

    pub fn create_delete_expression(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        self.create_simple_unary_expression(SyntaxKind::DeleteExpression, expression)
    }

    pub fn create_type_of_expression(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        self.create_simple_unary_expression(SyntaxKind::TypeOfExpression, expression)
    }

    pub fn create_void_expression(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        self.create_simple_unary_expression(SyntaxKind::VoidExpression, expression)
    }

    pub fn create_await_expression(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        self.create_simple_unary_expression(SyntaxKind::AwaitExpression, expression)
    }

    pub fn update_delete_expression(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::DeleteExpression,
            "update_delete_expression requires a delete expression",
        );
        self.update_simple_unary_expression(node, expression)
    }

    pub fn update_type_of_expression(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::TypeOfExpression,
            "update_type_of_expression requires a typeof expression",
        );
        self.update_simple_unary_expression(node, expression)
    }

    pub fn update_void_expression(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::VoidExpression,
            "update_void_expression requires a void expression",
        );
        self.update_simple_unary_expression(node, expression)
    }

    pub fn update_await_expression(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::AwaitExpression,
            "update_await_expression requires an await expression",
        );
        self.update_simple_unary_expression(node, expression)
    }

    fn update_simple_unary_expression(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::SimpleUnaryExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_simple_unary_expression", node.kind())
        };
        if node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(
            self.create_simple_unary_expression(node.kind(), expression),
            node,
        )
    }

    pub fn create_prefix_unary_expression(
        &self,
        operator: SyntaxKind,
        operand: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let operand = self.parenthesize_operand_of_prefix_unary(operand);
        self.synthesize(
            SyntaxKind::PrefixUnaryExpression,
            NodeShape::PrefixUnaryExpression(PrefixUnaryExpression { operator, operand }),
        )
    }

    pub fn update_prefix_unary_expression(
        &self,
        node: &'a Node<'a>,
        operand: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::PrefixUnaryExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_prefix_unary_expression", node.kind())
        };
        if node_ref_eq(old.operand, operand) {
            return node;
        }
        self.update(
            self.create_prefix_unary_expression(old.operator, operand),
            node,
        )
    }

    pub fn create_postfix_unary_expression(
        &self,
        operand: &'a Node<'a>,
        operator: SyntaxKind,
    ) -> &'a Node<'a> {
        let operand = self.parenthesize_operand_of_postfix_unary(operand);
        self.synthesize(
            SyntaxKind::PostfixUnaryExpression,
            NodeShape::PostfixUnaryExpression(PostfixUnaryExpression { operand, operator }),
        )
    }

    pub fn update_postfix_unary_expression(
        &self,
        node: &'a Node<'a>,
        operand: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::PostfixUnaryExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_postfix_unary_expression", node.kind())
        };
        if node_ref_eq(old.operand, operand) {
            return node;
        }
        self.update(
            self.create_postfix_unary_expression(operand, old.operator),
            node,
        )
    }

    fn make_binary_expression(
        &self,
        left: &'a Node<'a>,
        operator_token: &'a Node<'a>,
        right: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let operator = operator_token.kind();
        let left = self.parenthesize_left_side_of_binary(operator, left);
        let right = self.parenthesize_right_side_of_binary(operator, Some(left), right);
        self.synthesize(
            SyntaxKind::BinaryExpression,
            NodeShape::BinaryExpression(BinaryExpression {
                left,
                operator_token,
                right,
            }),
        )
    }

    pub fn create_binary_expression(
        &self,
        left: &'a Node<'a>,
        operator: SyntaxKind,
        right: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.make_binary_expression(left, self.create_token(operator), right)
    }

    pub fn update_binary_expression(
        &self,
        node: &'a Node<'a>,
        left: &'a Node<'a>,
        operator_token: &'a Node<'a>,
        right: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::BinaryExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_binary_expression", node.kind())
        };
        if node_ref_eq(old.left, left)
            && node_ref_eq(old.operator_token, operator_token)
            && node_ref_eq(old.right, right)
        {
            return node;
        }
        self.update(self.make_binary_expression(left, operator_token, right), node)
    }

    pub fn create_conditional_expression(
        &self,
        condition: &'a Node<'a>,
        question_token: Option<&'a Node<'a>>,
        when_true: &'a Node<'a>,
        colon_token: Option<&'a Node<'a>>,
        when_false: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let condition = self.parenthesize_condition_of_conditional_expression(condition);
        let question_token =
            question_token.unwrap_or_else(|| self.create_token(SyntaxKind::QuestionToken));
        let when_true = self.parenthesize_branch_of_conditional_expression(when_true);
        let colon_token = colon_token.unwrap_or_else(|| self.create_token(SyntaxKind::ColonToken));
        let when_false = self.parenthesize_branch_of_conditional_expression(when_false);
        self.synthesize(
            SyntaxKind::ConditionalExpression,
            NodeShape::ConditionalExpression(ConditionalExpression {
                condition,
                question_token,
                when_true,
                colon_token,
                when_false,
            }),
        )
    }

    pub fn update_conditional_expression(
        &self,
        node: &'a Node<'a>,
        condition: &'a Node<'a>,
        question_token: &'a Node<'a>,
        when_true: &'a Node<'a>,
        colon_token: &'a Node<'a>,
        when_false: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ConditionalExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_conditional_expression", node.kind())
        };
        if node_ref_eq(old.condition, condition)
            && node_ref_eq(old.question_token, question_token)
            && node_ref_eq(old.when_true, when_true)
            && node_ref_eq(old.colon_token, colon_token)
            && node_ref_eq(old.when_false, when_false)
        {
            return node;
        }
        self.update(
            self.create_conditional_expression(
                condition,
                Some(question_token),
                when_true,
                Some(colon_token),
                when_false,
            ),
            node,
        )
    }

    pub fn create_template_expression(
        &self,
        head: &'a Node<'a>,
        template_spans: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let template_spans = self.create_node_array(template_spans, false);
        self.synthesize(
            SyntaxKind::TemplateExpression,
            NodeShape::TemplateExpression(TemplateExpression {
                head,
                template_spans,
            }),
        )
    }

    pub fn update_template_expression(
        &self,
        node: &'a Node<'a>,
        head: &'a Node<'a>,
        template_spans: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::TemplateExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_template_expression", node.kind())
        };
        if node_ref_eq(old.head, head) && old.template_spans.ref_eq(template_spans) {
            return node;
        }
        self.update(self.create_template_expression(head, template_spans), node)
    }

    pub fn create_template_span(
        &self,
        expression: &'a Node<'a>,
        literal: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::TemplateSpan,
            NodeShape::TemplateSpan(TemplateSpan {
                expression,
                literal,
            }),
        )
    }

    pub fn update_template_span(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        literal: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::TemplateSpan(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_template_span", node.kind())
        };
        if node_ref_eq(old.expression, expression) && node_ref_eq(old.literal, literal) {
            return node;
        }
        self.update(self.create_template_span(expression, literal), node)
    }

    pub fn create_yield_expression(
        &self,
        asterisk_token: Option<&'a Node<'a>>,
        expression: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let expression =
            expression.map(|expr| self.parenthesize_expression_for_disallowed_comma(expr));
        self.synthesize(
            SyntaxKind::YieldExpression,
            NodeShape::YieldExpression(YieldExpression {
                asterisk_token,
                expression,
            }),
        )
    }

    pub fn update_yield_expression(
        &self,
        node: &'a Node<'a>,
        asterisk_token: Option<&'a Node<'a>>,
        expression: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::YieldExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_yield_expression", node.kind())
        };
        if opt_node_ref_eq(old.asterisk_token, asterisk_token)
            && opt_node_ref_eq(old.expression, expression)
        {
            return node;
        }
        self.update(self.create_yield_expression(asterisk_token, expression), node)
    }

    pub fn create_spread_element(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        let expression = self.parenthesize_expression_for_disallowed_comma(expression);
        self.synthesize(
            SyntaxKind::SpreadElement,
            NodeShape::SpreadElement(SpreadElement { expression }),
        )
    }

    pub fn update_spread_element(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::SpreadElement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_spread_element", node.kind())
        };
        if node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(self.create_spread_element(expression), node)
    }

    pub fn create_class_expression(
        &self,
        modifiers: ModifierFlags,
        name: Option<&'a Node<'a>>,
        type_parameters: Option<&'a NodeArray<'a>>,
        heritage_clauses: Option<&'a NodeArray<'a>>,
        members: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let members = self.create_node_array(members, false);
        self.synthesize_with_modifiers(
            SyntaxKind::ClassExpression,
            modifiers,
            NodeShape::ClassLikeDeclaration(ClassLikeDeclaration {
                name,
                type_parameters,
                heritage_clauses,
                members,
            }),
        )
    }

    pub fn update_class_expression(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        name: Option<&'a Node<'a>>,
        type_parameters: Option<&'a NodeArray<'a>>,
        heritage_clauses: Option<&'a NodeArray<'a>>,
        members: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::ClassExpression,
            "update_class_expression requires a class expression",
        );
        let NodeShape::ClassLikeDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_class_expression", node.kind())
        };
        if node.modifier_flags() == modifiers
            && opt_node_ref_eq(old.name, name)
            && opt_array_ref_eq(old.type_parameters, type_parameters)
            && opt_array_ref_eq(old.heritage_clauses, heritage_clauses)
            && old.members.ref_eq(members)
        {
            return node;
        }
        self.update(
            self.create_class_expression(modifiers, name, type_parameters, heritage_clauses, members),
            node,
        )
    }

    pub fn create_as_expression(
        &self,
        expression: &'a Node<'a>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::AsExpression,
            NodeShape::AsExpression(AsExpression {
                expression,
                type_node,
            }),
        )
    }

    pub fn update_as_expression(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::AsExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_as_expression", node.kind())
        };
        if node_ref_eq(old.expression, expression) && node_ref_eq(old.type_node, type_node) {
            return node;
        }
        self.update(self.create_as_expression(expression, type_node), node)
    }

    pub fn create_satisfies_expression(
        &self,
        expression: &'a Node<'a>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::SatisfiesExpression,
            NodeShape::SatisfiesExpression(SatisfiesExpression {
                expression,
                type_node,
            }),
        )
    }

    pub fn update_satisfies_expression(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::SatisfiesExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_satisfies_expression", node.kind())
        };
        if node_ref_eq(old.expression, expression) && node_ref_eq(old.type_node, type_node) {
            return node;
        }
        self.update(self.create_satisfies_expression(expression, type_node), node)
    }

    pub fn create_non_null_expression(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        let expression = self.parenthesize_left_side_of_access(expression);
        self.synthesize(
            SyntaxKind::NonNullExpression,
            NodeShape::NonNullExpression(NonNullExpression { expression }),
        )
    }

    pub fn update_non_null_expression(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::NonNullExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_non_null_expression", node.kind())
        };
        if node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(self.create_non_null_expression(expression), node)
    }

    pub fn create_meta_property(
        &self,
        keyword_token: SyntaxKind,
        name: &'a Node<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            matches!(
                keyword_token,
                SyntaxKind::NewKeyword | SyntaxKind::ImportKeyword
            ),
            "meta property keyword must be 'new' or 'import'",
        );
        self.synthesize(
            SyntaxKind::MetaProperty,
            NodeShape::MetaProperty(MetaProperty {
                keyword_token,
                name,
            }),
        )
    }

    pub fn update_meta_property(
        &self,
        node: &'a Node<'a>,
        name: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::MetaProperty(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_meta_property", node.kind())
        };
        if node_ref_eq(old.name, name) {
            return node;
        }
        self.update(self.create_meta_property(old.keyword_token, name), node)
    }

    pub fn create_partially_emitted_expression(
        &self,
        expression: &'a Node<'a>,
        original: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let node = self.synthesize(
            SyntaxKind::PartiallyEmittedExpression,
            NodeShape::PartiallyEmittedExpression(PartiallyEmittedExpression { expression }),
        );
        self.set_original_node(node, Some(original));
        node.set_range(original.range());
        node
    }

    pub fn update_partially_emitted_expression(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::PartiallyEmittedExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_partially_emitted_expression", node.kind())
        };
        if node_ref_eq(old.expression, expression) {
            return node;
        }
        let original = node.original().unwrap_or(node);
        self.update(
            self.create_partially_emitted_expression(expression, original),
            node,
        )
    }

    /// An element can be folded directly into an enclosing comma list only
    /// when doing so cannot lose source positions or emit metadata.
    fn flatten_comma_element(
        &self,
        node: &'a Node<'a>,
        out: &mut Vec<&'a Node<'a>>,
    ) {
        let foldable = node.is_synthesized()
            && node.original().is_none()
            && !self.emit.has_emit_node(node);
        if foldable {
            match &node.shape {
                NodeShape::CommaListExpression(list) => {
                    for element in list.elements.iter() {
                        self.flatten_comma_element(element, out);
                    }
                    return;
                }
                NodeShape::BinaryExpression(binary)
                    if binary.operator() == SyntaxKind::CommaToken =>
                {
                    self.flatten_comma_element(binary.left, out);
                    self.flatten_comma_element(binary.right, out);
                    return;
                }
                _ => {}
            }
        }
        out.push(node);
    }

    pub fn create_comma_list_expression(
        &self,
        elements: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let elements = self.create_node_array(elements, false);
        let mut flattened = Vec::with_capacity(elements.len());
        for element in elements.iter() {
            self.flatten_comma_element(element, &mut flattened);
        }
        let elements = self.create_node_array(flattened, false);
        let elements = self.parenthesize_expressions_of_comma_delimited_list(elements);
        self.synthesize(
            SyntaxKind::CommaListExpression,
            NodeShape::CommaListExpression(CommaListExpression { elements }),
        )
    }

    pub fn update_comma_list_expression(
        &self,
        node: &'a Node<'a>,
        elements: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::CommaListExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_comma_list_expression", node.kind())
        };
        if old.elements.ref_eq(elements) {
            return node;
        }
        self.update(self.create_comma_list_expression(elements), node)
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn create_block(
        &self,
        statements: impl Into<NodeArrayOrVec<'a>>,
        multi_line: bool,
    ) -> &'a Node<'a> {
        let statements = self.create_node_array(statements, false);
        let flags = if multi_line {
            NodeFlags::MULTI_LINE
        } else {
            NodeFlags::NONE
        };
        self.synthesize_with_flags(
            SyntaxKind::Block,
            flags,
            NodeShape::Block(Block { statements }),
        )
    }

    pub fn update_block(
        &self,
        node: &'a Node<'a>,
        statements: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::Block(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_block", node.kind())
        };
        if old.statements.ref_eq(statements) {
            return node;
        }
        let multi_line = node.flags().contains(NodeFlags::MULTI_LINE);
        self.update(self.create_block(statements, multi_line), node)
    }

    pub fn create_variable_statement(
        &self,
        modifiers: ModifierFlags,
        declaration_list: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize_with_modifiers(
            SyntaxKind::VariableStatement,
            modifiers,
            NodeShape::VariableStatement(VariableStatement { declaration_list }),
        )
    }

    pub fn update_variable_statement(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        declaration_list: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::VariableStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_variable_statement", node.kind())
        };
        if node.modifier_flags() == modifiers && node_ref_eq(old.declaration_list, declaration_list)
        {
            return node;
        }
        self.update(
            self.create_variable_statement(modifiers, declaration_list),
            node,
        )
    }

    pub fn create_empty_statement(&self) -> &'a Node<'a> {
        self.synthesize(SyntaxKind::EmptyStatement, NodeShape::Token)
    }

    pub fn create_expression_statement(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        let expression = self.parenthesize_expression_of_expression_statement(expression);
        self.synthesize(
            SyntaxKind::ExpressionStatement,
            NodeShape::ExpressionStatement(ExpressionStatement { expression }),
        )
    }

    pub fn update_expression_statement(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ExpressionStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_expression_statement", node.kind())
        };
        if node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(self.create_expression_statement(expression), node)
    }

    pub fn create_if_statement(
        &self,
        expression: &'a Node<'a>,
        then_statement: &'a Node<'a>,
        else_statement: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::IfStatement,
            NodeShape::IfStatement(IfStatement {
                expression,
                then_statement,
                else_statement,
            }),
        )
    }

    pub fn update_if_statement(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        then_statement: &'a Node<'a>,
        else_statement: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::IfStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_if_statement", node.kind())
        };
        if node_ref_eq(old.expression, expression)
            && node_ref_eq(old.then_statement, then_statement)
            && opt_node_ref_eq(old.else_statement, else_statement)
        {
            return node;
        }
        self.update(
            self.create_if_statement(expression, then_statement, else_statement),
            node,
        )
    }

    pub fn create_do_statement(
        &self,
        statement: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::DoStatement,
            NodeShape::DoStatement(DoStatement {
                statement,
                expression,
            }),
        )
    }

    pub fn update_do_statement(
        &self,
        node: &'a Node<'a>,
        statement: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::DoStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_do_statement", node.kind())
        };
        if node_ref_eq(old.statement, statement) && node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(self.create_do_statement(statement, expression), node)
    }

    pub fn create_while_statement(
        &self,
        expression: &'a Node<'a>,
        statement: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::WhileStatement,
            NodeShape::WhileStatement(WhileStatement {
                expression,
                statement,
            }),
        )
    }

    pub fn update_while_statement(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        statement: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::WhileStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_while_statement", node.kind())
        };
        if node_ref_eq(old.expression, expression) && node_ref_eq(old.statement, statement) {
            return node;
        }
        self.update(self.create_while_statement(expression, statement), node)
    }

    pub fn create_for_statement(
        &self,
        initializer: Option<&'a Node<'a>>,
        condition: Option<&'a Node<'a>>,
        incrementor: Option<&'a Node<'a>>,
        statement: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ForStatement,
            NodeShape::ForStatement(ForStatement {
                initializer,
                condition,
                incrementor,
                statement,
            }),
        )
    }

    pub fn update_for_statement(
        &self,
        node: &'a Node<'a>,
        initializer: Option<&'a Node<'a>>,
        condition: Option<&'a Node<'a>>,
        incrementor: Option<&'a Node<'a>>,
        statement: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ForStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_for_statement", node.kind())
        };
        if opt_node_ref_eq(old.initializer, initializer)
            && opt_node_ref_eq(old.condition, condition)
            && opt_node_ref_eq(old.incrementor, incrementor)
            && node_ref_eq(old.statement, statement)
        {
            return node;
        }
        self.update(
            self.create_for_statement(initializer, condition, incrementor, statement),
            node,
        )
    }

    pub fn create_for_in_statement(
        &self,
        initializer: &'a Node<'a>,
        expression: &'a Node<'a>,
        statement: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ForInStatement,
            NodeShape::ForInStatement(ForInStatement {
                initializer,
                expression,
                statement,
            }),
        )
    }

    pub fn update_for_in_statement(
        &self,
        node: &'a Node<'a>,
        initializer: &'a Node<'a>,
        expression: &'a Node<'a>,
        statement: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ForInStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_for_in_statement", node.kind())
        };
        if node_ref_eq(old.initializer, initializer)
            && node_ref_eq(old.expression, expression)
            && node_ref_eq(old.statement, statement)
        {
            return node;
        }
        self.update(
            self.create_for_in_statement(initializer, expression, statement),
            node,
        )
    }

    pub fn create_for_of_statement(
        &self,
        await_modifier: bool,
        initializer: &'a Node<'a>,
        expression: &'a Node<'a>,
        statement: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let expression = self.parenthesize_expression_for_disallowed_comma(expression);
        self.synthesize(
            SyntaxKind::ForOfStatement,
            NodeShape::ForOfStatement(ForOfStatement {
                await_modifier,
                initializer,
                expression,
                statement,
            }),
        )
    }

    pub fn update_for_of_statement(
        &self,
        node: &'a Node<'a>,
        await_modifier: bool,
        initializer: &'a Node<'a>,
        expression: &'a Node<'a>,
        statement: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ForOfStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_for_of_statement", node.kind())
        };
        if old.await_modifier == await_modifier
            && node_ref_eq(old.initializer, initializer)
            && node_ref_eq(old.expression, expression)
            && node_ref_eq(old.statement, statement)
        {
            return node;
        }
        self.update(
            self.create_for_of_statement(await_modifier, initializer, expression, statement),
            node,
        )
    }

    pub fn create_continue_statement(&self, label: Option<&'a Node<'a>>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ContinueStatement,
            NodeShape::BreakOrContinueStatement(BreakOrContinueStatement { label }),
        )
    }

    pub fn create_break_statement(&self, label: Option<&'a Node<'a>>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::BreakStatement,
            NodeShape::BreakOrContinueStatement(BreakOrContinueStatement { label }),
        )
    }

    pub fn update_continue_statement(
        &self,
        node: &'a Node<'a>,
        label: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::ContinueStatement,
            "update_continue_statement requires a continue statement",
        );
        self.update_break_or_continue_statement(node, label)
    }

    pub fn update_break_statement(
        &self,
        node: &'a Node<'a>,
        label: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::BreakStatement,
            "update_break_statement requires a break statement",
        );
        self.update_break_or_continue_statement(node, label)
    }

    fn update_break_or_continue_statement(
        &self,
        node: &'a Node<'a>,
        label: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::BreakOrContinueStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_break_or_continue_statement", node.kind())
        };
        if opt_node_ref_eq(old.label, label) {
            return node;
        }
        let updated = if node.kind() == SyntaxKind::BreakStatement {
            self.create_break_statement(label)
        } else {
            self.create_continue_statement(label)
        };
        self.update(updated, node)
    }

    pub fn create_return_statement(&self, expression: Option<&'a Node<'a>>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ReturnStatement,
            NodeShape::ReturnStatement(ReturnStatement { expression }),
        )
    }

    pub fn update_return_statement(
        &self,
        node: &'a Node<'a>,
        expression: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::ReturnStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_return_statement", node.kind())
        };
        if opt_node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(self.create_return_statement(expression), node)
    }

    pub fn create_with_statement(
        &self,
        expression: &'a Node<'a>,
        statement: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::WithStatement,
            NodeShape::WithStatement(WithStatement {
                expression,
                statement,
            }),
        )
    }

    pub fn update_with_statement(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        statement: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::WithStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_with_statement", node.kind())
        };
        if node_ref_eq(old.expression, expression) && node_ref_eq(old.statement, statement) {
            return node;
        }
        self.update(self.create_with_statement(expression, statement), node)
    }

    pub fn create_switch_statement(
        &self,
        expression: &'a Node<'a>,
        case_block: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let expression = self.parenthesize_expression_for_disallowed_comma(expression);
        self.synthesize(
            SyntaxKind::SwitchStatement,
            NodeShape::SwitchStatement(SwitchStatement {
                expression,
                case_block,
            }),
        )
    }

    pub fn update_switch_statement(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        case_block: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::SwitchStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_switch_statement", node.kind())
        };
        if node_ref_eq(old.expression, expression) && node_ref_eq(old.case_block, case_block) {
            return node;
        }
        self.update(self.create_switch_statement(expression, case_block), node)
    }

    pub fn create_labeled_statement(
        &self,
        label: &'a Node<'a>,
        statement: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::LabeledStatement,
            NodeShape::LabeledStatement(LabeledStatement { label, statement }),
        )
    }

    pub fn update_labeled_statement(
        &self,
        node: &'a Node<'a>,
        label: &'a Node<'a>,
        statement: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::LabeledStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_labeled_statement", node.kind())
        };
        if node_ref_eq(old.label, label) && node_ref_eq(old.statement, statement) {
            return node;
        }
        self.update(self.create_labeled_statement(label, statement), node)
    }

    pub fn create_throw_statement(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ThrowStatement,
            NodeShape::ThrowStatement(ThrowStatement { expression }),
        )
    }

    pub fn update_throw_statement(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ThrowStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_throw_statement", node.kind())
        };
        if node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(self.create_throw_statement(expression), node)
    }

    pub fn create_try_statement(
        &self,
        try_block: &'a Node<'a>,
        catch_clause: Option<&'a Node<'a>>,
        finally_block: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::TryStatement,
            NodeShape::TryStatement(TryStatement {
                try_block,
                catch_clause,
                finally_block,
            }),
        )
    }

    pub fn update_try_statement(
        &self,
        node: &'a Node<'a>,
        try_block: &'a Node<'a>,
        catch_clause: Option<&'a Node<'a>>,
        finally_block: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::TryStatement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_try_statement", node.kind())
        };
        if node_ref_eq(old.try_block, try_block)
            && opt_node_ref_eq(old.catch_clause, catch_clause)
            && opt_node_ref_eq(old.finally_block, finally_block)
        {
            return node;
        }
        self.update(
            self.create_try_statement(try_block, catch_clause, finally_block),
            node,
        )
    }

    pub fn create_debugger_statement(&self) -> &'a Node<'a> {
        self.synthesize(SyntaxKind::DebuggerStatement, NodeShape::Token)
    }

    /// Placeholder for a statement elided by a transform; keeps the original's
    /// position and comments alive for emit.
    pub fn create_not_emitted_statement(&self, original: &'a Node<'a>) -> &'a Node<'a> {
        let node = self.synthesize(SyntaxKind::NotEmittedStatement, NodeShape::Token);
        self.set_original_node(node, Some(original));
        node.set_range(original.range());
        node
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    pub fn create_variable_declaration(
        &self,
        name: &'a Node<'a>,
        exclamation_token: Option<&'a Node<'a>>,
        type_node: Option<&'a Node<'a>>,
        initializer: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let initializer =
            initializer.map(|init| self.parenthesize_expression_for_disallowed_comma(init));
        self.synthesize(
            SyntaxKind::VariableDeclaration,
            NodeShape::VariableDeclaration(VariableDeclaration {
                name,
                exclamation_token,
                type_node,
                initializer,
            }),
        )
    }

    pub fn update_variable_declaration(
        &self,
        node: &'a Node<'a>,
        name: &'a Node<'a>,
        exclamation_token: Option<&'a Node<'a>>,
        type_node: Option<&'a Node<'a>>,
        initializer: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::VariableDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_variable_declaration", node.kind())
        };
        if node_ref_eq(old.name, name)
            && opt_node_ref_eq(old.exclamation_token, exclamation_token)
            && opt_node_ref_eq(old.type_node, type_node)
            && opt_node_ref_eq(old.initializer, initializer)
        {
            return node;
        }
        self.update(
            self.create_variable_declaration(name, exclamation_token, type_node, initializer),
            node,
        )
    }

    /// `flags` selects the declaration form (`let`, `const`, `using`); no
    /// flag bits means `var`.
    pub fn create_variable_declaration_list(
        &self,
        flags: NodeFlags,
        declarations: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let declarations = self.create_node_array(declarations, false);
        self.synthesize_with_flags(
            SyntaxKind::VariableDeclarationList,
            flags & NodeFlags::BLOCK_SCOPED,
            NodeShape::VariableDeclarationList(VariableDeclarationList { declarations }),
        )
    }

    pub fn update_variable_declaration_list(
        &self,
        node: &'a Node<'a>,
        declarations: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::VariableDeclarationList(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_variable_declaration_list", node.kind())
        };
        if old.declarations.ref_eq(declarations) {
            return node;
        }
        self.update(
            self.create_variable_declaration_list(node.flags(), declarations),
            node,
        )
    }

    pub fn create_function_declaration(
        &self,
        modifiers: ModifierFlags,
        asterisk_token: Option<&'a Node<'a>>,
        name: Option<&'a Node<'a>>,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: impl Into<NodeArrayOrVec<'a>>,
        type_node: Option<&'a Node<'a>>,
        body: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let parameters = self.create_node_array(parameters, false);
        self.synthesize_with_modifiers(
            SyntaxKind::FunctionDeclaration,
            modifiers,
            NodeShape::FunctionDeclaration(FunctionDeclaration {
                asterisk_token,
                name,
                type_parameters,
                parameters,
                type_node,
                body,
            }),
        )
    }

    pub fn update_function_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        asterisk_token: Option<&'a Node<'a>>,
        name: Option<&'a Node<'a>>,
        type_parameters: Option<&'a NodeArray<'a>>,
        parameters: &'a NodeArray<'a>,
        type_node: Option<&'a Node<'a>>,
        body: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::FunctionDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_function_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && opt_node_ref_eq(old.asterisk_token, asterisk_token)
            && opt_node_ref_eq(old.name, name)
            && opt_array_ref_eq(old.type_parameters, type_parameters)
            && old.parameters.ref_eq(parameters)
            && opt_node_ref_eq(old.type_node, type_node)
            && opt_node_ref_eq(old.body, body)
        {
            return node;
        }
        self.update(
            self.create_function_declaration(
                modifiers,
                asterisk_token,
                name,
                type_parameters,
                parameters,
                type_node,
                body,
            ),
            node,
        )
    }

    pub fn create_class_declaration(
        &self,
        modifiers: ModifierFlags,
        name: Option<&'a Node<'a>>,
        type_parameters: Option<&'a NodeArray<'a>>,
        heritage_clauses: Option<&'a NodeArray<'a>>,
        members: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let members = self.create_node_array(members, false);
        self.synthesize_with_modifiers(
            SyntaxKind::ClassDeclaration,
            modifiers,
            NodeShape::ClassLikeDeclaration(ClassLikeDeclaration {
                name,
                type_parameters,
                heritage_clauses,
                members,
            }),
        )
    }

    pub fn update_class_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        name: Option<&'a Node<'a>>,
        type_parameters: Option<&'a NodeArray<'a>>,
        heritage_clauses: Option<&'a NodeArray<'a>>,
        members: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::ClassDeclaration,
            "update_class_declaration requires a class declaration",
        );
        let NodeShape::ClassLikeDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_class_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && opt_node_ref_eq(old.name, name)
            && opt_array_ref_eq(old.type_parameters, type_parameters)
            && opt_array_ref_eq(old.heritage_clauses, heritage_clauses)
            && old.members.ref_eq(members)
        {
            return node;
        }
        self.update(
            self.create_class_declaration(modifiers, name, type_parameters, heritage_clauses, members),
            node,
        )
    }

    pub fn create_interface_declaration(
        &self,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        type_parameters: Option<&'a NodeArray<'a>>,
        heritage_clauses: Option<&'a NodeArray<'a>>,
        members: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let members = self.create_node_array(members, false);
        self.synthesize_with_modifiers(
            SyntaxKind::InterfaceDeclaration,
            modifiers,
            NodeShape::InterfaceDeclaration(InterfaceDeclaration {
                name,
                type_parameters,
                heritage_clauses,
                members,
            }),
        )
    }

    pub fn update_interface_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        type_parameters: Option<&'a NodeArray<'a>>,
        heritage_clauses: Option<&'a NodeArray<'a>>,
        members: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::InterfaceDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_interface_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && node_ref_eq(old.name, name)
            && opt_array_ref_eq(old.type_parameters, type_parameters)
            && opt_array_ref_eq(old.heritage_clauses, heritage_clauses)
            && old.members.ref_eq(members)
        {
            return node;
        }
        self.update(
            self.create_interface_declaration(
                modifiers,
                name,
                type_parameters,
                heritage_clauses,
                members,
            ),
            node,
        )
    }

    pub fn create_type_alias_declaration(
        &self,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        type_parameters: Option<&'a NodeArray<'a>>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize_with_modifiers(
            SyntaxKind::TypeAliasDeclaration,
            modifiers,
            NodeShape::TypeAliasDeclaration(TypeAliasDeclaration {
                name,
                type_parameters,
                type_node,
            }),
        )
    }

    pub fn update_type_alias_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        type_parameters: Option<&'a NodeArray<'a>>,
        type_node: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::TypeAliasDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_type_alias_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && node_ref_eq(old.name, name)
            && opt_array_ref_eq(old.type_parameters, type_parameters)
            && node_ref_eq(old.type_node, type_node)
        {
            return node;
        }
        self.update(
            self.create_type_alias_declaration(modifiers, name, type_parameters, type_node),
            node,
        )
    }

    pub fn create_enum_declaration(
        &self,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        members: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let members = self.create_node_array(members, false);
        self.synthesize_with_modifiers(
            SyntaxKind::EnumDeclaration,
            modifiers,
            NodeShape::EnumDeclaration(EnumDeclaration { name, members }),
        )
    }

    pub fn update_enum_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        members: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::EnumDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_enum_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && node_ref_eq(old.name, name)
            && old.members.ref_eq(members)
        {
            return node;
        }
        self.update(self.create_enum_declaration(modifiers, name, members), node)
    }

    pub fn create_enum_member(
        &self,
        name: &'a Node<'a>,
        initializer: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let initializer =
            initializer.map(|init| self.parenthesize_expression_for_disallowed_comma(init));
        self.synthesize(
            SyntaxKind::EnumMember,
            NodeShape::EnumMember(EnumMember { name, initializer }),
        )
    }

    pub fn update_enum_member(
        &self,
        node: &'a Node<'a>,
        name: &'a Node<'a>,
        initializer: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::EnumMember(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_enum_member", node.kind())
        };
        if node_ref_eq(old.name, name) && opt_node_ref_eq(old.initializer, initializer) {
            return node;
        }
        self.update(self.create_enum_member(name, initializer), node)
    }

    /// `flags` distinguishes a namespace (`NodeFlags::NAMESPACE`) from an
    /// ambient `module "..."` declaration.
    pub fn create_module_declaration(
        &self,
        modifiers: ModifierFlags,
        flags: NodeFlags,
        name: &'a Node<'a>,
        body: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let node = self.synthesize_with_flags(
            SyntaxKind::ModuleDeclaration,
            flags,
            NodeShape::ModuleDeclaration(ModuleDeclaration { name, body }),
        );
        node.data.modifier_flags.set(modifiers);
        node
    }

    pub fn update_module_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        name: &'a Node<'a>,
        body: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::ModuleDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_module_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && node_ref_eq(old.name, name)
            && opt_node_ref_eq(old.body, body)
        {
            return node;
        }
        self.update(
            self.create_module_declaration(modifiers, node.flags(), name, body),
            node,
        )
    }

    pub fn create_module_block(
        &self,
        statements: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let statements = self.create_node_array(statements, false);
        self.synthesize(
            SyntaxKind::ModuleBlock,
            NodeShape::ModuleBlock(ModuleBlock { statements }),
        )
    }

    pub fn update_module_block(
        &self,
        node: &'a Node<'a>,
        statements: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ModuleBlock(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_module_block", node.kind())
        };
        if old.statements.ref_eq(statements) {
            return node;
        }
        self.update(self.create_module_block(statements), node)
    }

    pub fn create_case_block(&self, clauses: impl Into<NodeArrayOrVec<'a>>) -> &'a Node<'a> {
        let clauses = self.create_node_array(clauses, false);
        self.synthesize(
            SyntaxKind::CaseBlock,
            NodeShape::CaseBlock(CaseBlock { clauses }),
        )
    }

    pub fn update_case_block(
        &self,
        node: &'a Node<'a>,
        clauses: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::CaseBlock(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_case_block", node.kind())
        };
        if old.clauses.ref_eq(clauses) {
            return node;
        }
        self.update(self.create_case_block(clauses), node)
    }

    // ========================================================================
    // Module surface
    // ========================================================================

    pub fn create_import_equals_declaration(
        &self,
        modifiers: ModifierFlags,
        is_type_only: bool,
        name: &'a Node<'a>,
        module_reference: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize_with_modifiers(
            SyntaxKind::ImportEqualsDeclaration,
            modifiers,
            NodeShape::ImportEqualsDeclaration(ImportEqualsDeclaration {
                is_type_only,
                name,
                module_reference,
            }),
        )
    }

    pub fn update_import_equals_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        is_type_only: bool,
        name: &'a Node<'a>,
        module_reference: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ImportEqualsDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_import_equals_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && old.is_type_only == is_type_only
            && node_ref_eq(old.name, name)
            && node_ref_eq(old.module_reference, module_reference)
        {
            return node;
        }
        self.update(
            self.create_import_equals_declaration(modifiers, is_type_only, name, module_reference),
            node,
        )
    }

    pub fn create_import_declaration(
        &self,
        import_clause: Option<&'a Node<'a>>,
        module_specifier: &'a Node<'a>,
        attributes: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ImportDeclaration,
            NodeShape::ImportDeclaration(ImportDeclaration {
                import_clause,
                module_specifier,
                attributes,
            }),
        )
    }

    pub fn update_import_declaration(
        &self,
        node: &'a Node<'a>,
        import_clause: Option<&'a Node<'a>>,
        module_specifier: &'a Node<'a>,
        attributes: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::ImportDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_import_declaration", node.kind())
        };
        if opt_node_ref_eq(old.import_clause, import_clause)
            && node_ref_eq(old.module_specifier, module_specifier)
            && opt_node_ref_eq(old.attributes, attributes)
        {
            return node;
        }
        self.update(
            self.create_import_declaration(import_clause, module_specifier, attributes),
            node,
        )
    }

    pub fn create_import_clause(
        &self,
        is_type_only: bool,
        name: Option<&'a Node<'a>>,
        named_bindings: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ImportClause,
            NodeShape::ImportClause(ImportClause {
                is_type_only,
                name,
                named_bindings,
            }),
        )
    }

    pub fn update_import_clause(
        &self,
        node: &'a Node<'a>,
        is_type_only: bool,
        name: Option<&'a Node<'a>>,
        named_bindings: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::ImportClause(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_import_clause", node.kind())
        };
        if old.is_type_only == is_type_only
            && opt_node_ref_eq(old.name, name)
            && opt_node_ref_eq(old.named_bindings, named_bindings)
        {
            return node;
        }
        self.update(
            self.create_import_clause(is_type_only, name, named_bindings),
            node,
        )
    }

    pub fn create_namespace_import(&self, name: &'a Node<'a>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::NamespaceImport,
            NodeShape::NamespaceImport(NamespaceImport { name }),
        )
    }

    pub fn update_namespace_import(
        &self,
        node: &'a Node<'a>,
        name: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::NamespaceImport(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_namespace_import", node.kind())
        };
        if node_ref_eq(old.name, name) {
            return node;
        }
        self.update(self.create_namespace_import(name), node)
    }

    pub fn create_namespace_export(&self, name: &'a Node<'a>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::NamespaceExport,
            NodeShape::NamespaceExport(NamespaceExport { name }),
        )
    }

    pub fn update_namespace_export(
        &self,
        node: &'a Node<'a>,
        name: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::NamespaceExport(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_namespace_export", node.kind())
        };
        if node_ref_eq(old.name, name) {
            return node;
        }
        self.update(self.create_namespace_export(name), node)
    }

    pub fn create_named_imports(
        &self,
        elements: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let elements = self.create_node_array(elements, false);
        self.synthesize(
            SyntaxKind::NamedImports,
            NodeShape::NamedImportsOrExports(NamedImportsOrExports { elements }),
        )
    }

    pub fn create_named_exports(
        &self,
        elements: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let elements = self.create_node_array(elements, false);
        self.synthesize(
            SyntaxKind::NamedExports,
            NodeShape::NamedImportsOrExports(NamedImportsOrExports { elements }),
        )
    }

    pub fn update_named_imports(
        &self,
        node: &'a Node<'a>,
        elements: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::NamedImports,
            "update_named_imports requires named imports",
        );
        self.update_named_imports_or_exports(node, elements)
    }

    pub fn update_named_exports(
        &self,
        node: &'a Node<'a>,
        elements: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::NamedExports,
            "update_named_exports requires named exports",
        );
        self.update_named_imports_or_exports(node, elements)
    }

    fn update_named_imports_or_exports(
        &self,
        node: &'a Node<'a>,
        elements: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::NamedImportsOrExports(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_named_imports_or_exports", node.kind())
        };
        if old.elements.ref_eq(elements) {
            return node;
        }
        let updated = if node.kind() == SyntaxKind::NamedImports {
            self.create_named_imports(elements)
        } else {
            self.create_named_exports(elements)
        };
        self.update(updated, node)
    }

    pub fn create_import_specifier(
        &self,
        is_type_only: bool,
        property_name: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ImportSpecifier,
            NodeShape::ImportOrExportSpecifier(ImportOrExportSpecifier {
                is_type_only,
                property_name,
                name,
            }),
        )
    }

    pub fn create_export_specifier(
        &self,
        is_type_only: bool,
        property_name: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ExportSpecifier,
            NodeShape::ImportOrExportSpecifier(ImportOrExportSpecifier {
                is_type_only,
                property_name,
                name,
            }),
        )
    }

    pub fn update_import_specifier(
        &self,
        node: &'a Node<'a>,
        is_type_only: bool,
        property_name: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::ImportSpecifier,
            "update_import_specifier requires an import specifier",
        );
        self.update_import_or_export_specifier(node, is_type_only, property_name, name)
    }

    pub fn update_export_specifier(
        &self,
        node: &'a Node<'a>,
        is_type_only: bool,
        property_name: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
    ) -> &'a Node<'a> {
        debug::assert(
            node.kind() == SyntaxKind::ExportSpecifier,
            "update_export_specifier requires an export specifier",
        );
        self.update_import_or_export_specifier(node, is_type_only, property_name, name)
    }

    fn update_import_or_export_specifier(
        &self,
        node: &'a Node<'a>,
        is_type_only: bool,
        property_name: Option<&'a Node<'a>>,
        name: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ImportOrExportSpecifier(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_import_or_export_specifier", node.kind())
        };
        if old.is_type_only == is_type_only
            && opt_node_ref_eq(old.property_name, property_name)
            && node_ref_eq(old.name, name)
        {
            return node;
        }
        let updated = if node.kind() == SyntaxKind::ImportSpecifier {
            self.create_import_specifier(is_type_only, property_name, name)
        } else {
            self.create_export_specifier(is_type_only, property_name, name)
        };
        self.update(updated, node)
    }

    pub fn create_export_assignment(
        &self,
        is_export_equals: bool,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let expression = if is_export_equals {
            self.parenthesize_right_side_of_binary(SyntaxKind::EqualsToken, None, expression)
        } else {
            self.parenthesize_expression_of_export_default(expression)
        };
        self.synthesize(
            SyntaxKind::ExportAssignment,
            NodeShape::ExportAssignment(ExportAssignment {
                is_export_equals,
                expression,
            }),
        )
    }

    pub fn update_export_assignment(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ExportAssignment(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_export_assignment", node.kind())
        };
        if node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(
            self.create_export_assignment(old.is_export_equals, expression),
            node,
        )
    }

    pub fn create_export_declaration(
        &self,
        modifiers: ModifierFlags,
        is_type_only: bool,
        export_clause: Option<&'a Node<'a>>,
        module_specifier: Option<&'a Node<'a>>,
        attributes: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        self.synthesize_with_modifiers(
            SyntaxKind::ExportDeclaration,
            modifiers,
            NodeShape::ExportDeclaration(ExportDeclaration {
                is_type_only,
                export_clause,
                module_specifier,
                attributes,
            }),
        )
    }

    pub fn update_export_declaration(
        &self,
        node: &'a Node<'a>,
        modifiers: ModifierFlags,
        is_type_only: bool,
        export_clause: Option<&'a Node<'a>>,
        module_specifier: Option<&'a Node<'a>>,
        attributes: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::ExportDeclaration(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_export_declaration", node.kind())
        };
        if node.modifier_flags() == modifiers
            && old.is_type_only == is_type_only
            && opt_node_ref_eq(old.export_clause, export_clause)
            && opt_node_ref_eq(old.module_specifier, module_specifier)
            && opt_node_ref_eq(old.attributes, attributes)
        {
            return node;
        }
        self.update(
            self.create_export_declaration(
                modifiers,
                is_type_only,
                export_clause,
                module_specifier,
                attributes,
            ),
            node,
        )
    }

    pub fn create_external_module_reference(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ExternalModuleReference,
            NodeShape::ExternalModuleReference(ExternalModuleReference { expression }),
        )
    }

    pub fn update_external_module_reference(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ExternalModuleReference(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_external_module_reference", node.kind())
        };
        if node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(self.create_external_module_reference(expression), node)
    }

    pub fn create_import_attributes(
        &self,
        elements: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let elements = self.create_node_array(elements, false);
        self.synthesize(
            SyntaxKind::ImportAttributes,
            NodeShape::ImportAttributes(ImportAttributes { elements }),
        )
    }

    pub fn update_import_attributes(
        &self,
        node: &'a Node<'a>,
        elements: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ImportAttributes(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_import_attributes", node.kind())
        };
        if old.elements.ref_eq(elements) {
            return node;
        }
        self.update(self.create_import_attributes(elements), node)
    }

    pub fn create_import_attribute(
        &self,
        name: &'a Node<'a>,
        value: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::ImportAttribute,
            NodeShape::ImportAttribute(ImportAttribute { name, value }),
        )
    }

    pub fn update_import_attribute(
        &self,
        node: &'a Node<'a>,
        name: &'a Node<'a>,
        value: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::ImportAttribute(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_import_attribute", node.kind())
        };
        if node_ref_eq(old.name, name) && node_ref_eq(old.value, value) {
            return node;
        }
        self.update(self.create_import_attribute(name, value), node)
    }

    // ========================================================================
    // JSX
    // ========================================================================

    pub fn create_jsx_element(
        &self,
        opening_element: &'a Node<'a>,
        children: impl Into<NodeArrayOrVec<'a>>,
        closing_element: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let children = self.create_node_array(children, false);
        self.synthesize(
            SyntaxKind::JsxElement,
            NodeShape::JsxElement(JsxElement {
                opening_element,
                children,
                closing_element,
            }),
        )
    }

    pub fn update_jsx_element(
        &self,
        node: &'a Node<'a>,
        opening_element: &'a Node<'a>,
        children: &'a NodeArray<'a>,
        closing_element: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::JsxElement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_jsx_element", node.kind())
        };
        if node_ref_eq(old.opening_element, opening_element)
            && old.children.ref_eq(children)
            && node_ref_eq(old.closing_element, closing_element)
        {
            return node;
        }
        self.update(
            self.create_jsx_element(opening_element, children, closing_element),
            node,
        )
    }

    pub fn create_jsx_self_closing_element(
        &self,
        tag_name: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
        attributes: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::JsxSelfClosingElement,
            NodeShape::JsxSelfClosingElement(JsxSelfClosingElement {
                tag_name,
                type_arguments,
                attributes,
            }),
        )
    }

    pub fn update_jsx_self_closing_element(
        &self,
        node: &'a Node<'a>,
        tag_name: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
        attributes: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::JsxSelfClosingElement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_jsx_self_closing_element", node.kind())
        };
        if node_ref_eq(old.tag_name, tag_name)
            && opt_array_ref_eq(old.type_arguments, type_arguments)
            && node_ref_eq(old.attributes, attributes)
        {
            return node;
        }
        self.update(
            self.create_jsx_self_closing_element(tag_name, type_arguments, attributes),
            node,
        )
    }

    pub fn create_jsx_opening_element(
        &self,
        tag_name: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
        attributes: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::JsxOpeningElement,
            NodeShape::JsxOpeningElement(JsxOpeningElement {
                tag_name,
                type_arguments,
                attributes,
            }),
        )
    }

    pub fn update_jsx_opening_element(
        &self,
        node: &'a Node<'a>,
        tag_name: &'a Node<'a>,
        type_arguments: Option<&'a NodeArray<'a>>,
        attributes: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::JsxOpeningElement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_jsx_opening_element", node.kind())
        };
        if node_ref_eq(old.tag_name, tag_name)
            && opt_array_ref_eq(old.type_arguments, type_arguments)
            && node_ref_eq(old.attributes, attributes)
        {
            return node;
        }
        self.update(
            self.create_jsx_opening_element(tag_name, type_arguments, attributes),
            node,
        )
    }

    pub fn create_jsx_closing_element(&self, tag_name: &'a Node<'a>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::JsxClosingElement,
            NodeShape::JsxClosingElement(JsxClosingElement { tag_name }),
        )
    }

    pub fn update_jsx_closing_element(
        &self,
        node: &'a Node<'a>,
        tag_name: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::JsxClosingElement(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_jsx_closing_element", node.kind())
        };
        if node_ref_eq(old.tag_name, tag_name) {
            return node;
        }
        self.update(self.create_jsx_closing_element(tag_name), node)
    }

    pub fn create_jsx_fragment(
        &self,
        opening_fragment: &'a Node<'a>,
        children: impl Into<NodeArrayOrVec<'a>>,
        closing_fragment: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let children = self.create_node_array(children, false);
        self.synthesize(
            SyntaxKind::JsxFragment,
            NodeShape::JsxFragment(JsxFragment {
                opening_fragment,
                children,
                closing_fragment,
            }),
        )
    }

    pub fn update_jsx_fragment(
        &self,
        node: &'a Node<'a>,
        opening_fragment: &'a Node<'a>,
        children: &'a NodeArray<'a>,
        closing_fragment: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::JsxFragment(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_jsx_fragment", node.kind())
        };
        if node_ref_eq(old.opening_fragment, opening_fragment)
            && old.children.ref_eq(children)
            && node_ref_eq(old.closing_fragment, closing_fragment)
        {
            return node;
        }
        self.update(
            self.create_jsx_fragment(opening_fragment, children, closing_fragment),
            node,
        )
    }

    pub fn create_jsx_opening_fragment(&self) -> &'a Node<'a> {
        self.synthesize(SyntaxKind::JsxOpeningFragment, NodeShape::Token)
    }

    pub fn create_jsx_closing_fragment(&self) -> &'a Node<'a> {
        self.synthesize(SyntaxKind::JsxClosingFragment, NodeShape::Token)
    }

    pub fn create_jsx_text(
        &self,
        text: &str,
        contains_only_trivia_white_spaces: bool,
    ) -> &'a Node<'a> {
        let text = self.interner().intern(text);
        self.synthesize(
            SyntaxKind::JsxText,
            NodeShape::JsxText(JsxText {
                text,
                contains_only_trivia_white_spaces,
            }),
        )
    }

    pub fn create_jsx_attribute(
        &self,
        name: &'a Node<'a>,
        initializer: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::JsxAttribute,
            NodeShape::JsxAttribute(JsxAttribute { name, initializer }),
        )
    }

    pub fn update_jsx_attribute(
        &self,
        node: &'a Node<'a>,
        name: &'a Node<'a>,
        initializer: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::JsxAttribute(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_jsx_attribute", node.kind())
        };
        if node_ref_eq(old.name, name) && opt_node_ref_eq(old.initializer, initializer) {
            return node;
        }
        self.update(self.create_jsx_attribute(name, initializer), node)
    }

    pub fn create_jsx_attributes(
        &self,
        properties: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let properties = self.create_node_array(properties, false);
        self.synthesize(
            SyntaxKind::JsxAttributes,
            NodeShape::JsxAttributes(JsxAttributes { properties }),
        )
    }

    pub fn update_jsx_attributes(
        &self,
        node: &'a Node<'a>,
        properties: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::JsxAttributes(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_jsx_attributes", node.kind())
        };
        if old.properties.ref_eq(properties) {
            return node;
        }
        self.update(self.create_jsx_attributes(properties), node)
    }

    pub fn create_jsx_spread_attribute(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::JsxSpreadAttribute,
            NodeShape::JsxSpreadAttribute(JsxSpreadAttribute { expression }),
        )
    }

    pub fn update_jsx_spread_attribute(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::JsxSpreadAttribute(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_jsx_spread_attribute", node.kind())
        };
        if node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(self.create_jsx_spread_attribute(expression), node)
    }

    pub fn create_jsx_expression(
        &self,
        dot_dot_dot_token: Option<&'a Node<'a>>,
        expression: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::JsxExpression,
            NodeShape::JsxExpression(JsxExpression {
                dot_dot_dot_token,
                expression,
            }),
        )
    }

    pub fn update_jsx_expression(
        &self,
        node: &'a Node<'a>,
        expression: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::JsxExpression(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_jsx_expression", node.kind())
        };
        if opt_node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(
            self.create_jsx_expression(old.dot_dot_dot_token, expression),
            node,
        )
    }

    // ========================================================================
    // Clauses
    // ========================================================================

    pub fn create_case_clause(
        &self,
        expression: &'a Node<'a>,
        statements: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let expression = self.parenthesize_expression_for_disallowed_comma(expression);
        let statements = self.create_node_array(statements, false);
        self.synthesize(
            SyntaxKind::CaseClause,
            NodeShape::CaseClause(CaseClause {
                expression,
                statements,
            }),
        )
    }

    pub fn update_case_clause(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
        statements: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::CaseClause(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_case_clause", node.kind())
        };
        if node_ref_eq(old.expression, expression) && old.statements.ref_eq(statements) {
            return node;
        }
        self.update(self.create_case_clause(expression, statements), node)
    }

    pub fn create_default_clause(
        &self,
        statements: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        let statements = self.create_node_array(statements, false);
        self.synthesize(
            SyntaxKind::DefaultClause,
            NodeShape::DefaultClause(DefaultClause { statements }),
        )
    }

    pub fn update_default_clause(
        &self,
        node: &'a Node<'a>,
        statements: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::DefaultClause(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_default_clause", node.kind())
        };
        if old.statements.ref_eq(statements) {
            return node;
        }
        self.update(self.create_default_clause(statements), node)
    }

    pub fn create_heritage_clause(
        &self,
        token: SyntaxKind,
        types: impl Into<NodeArrayOrVec<'a>>,
    ) -> &'a Node<'a> {
        debug::assert(
            matches!(
                token,
                SyntaxKind::ExtendsKeyword | SyntaxKind::ImplementsKeyword
            ),
            "heritage clause token must be 'extends' or 'implements'",
        );
        let types = self.create_node_array(types, false);
        self.synthesize(
            SyntaxKind::HeritageClause,
            NodeShape::HeritageClause(HeritageClause { token, types }),
        )
    }

    pub fn update_heritage_clause(
        &self,
        node: &'a Node<'a>,
        types: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::HeritageClause(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_heritage_clause", node.kind())
        };
        if old.types.ref_eq(types) {
            return node;
        }
        self.update(self.create_heritage_clause(old.token, types), node)
    }

    pub fn create_catch_clause(
        &self,
        variable_declaration: Option<&'a Node<'a>>,
        block: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.synthesize(
            SyntaxKind::CatchClause,
            NodeShape::CatchClause(CatchClause {
                variable_declaration,
                block,
            }),
        )
    }

    pub fn update_catch_clause(
        &self,
        node: &'a Node<'a>,
        variable_declaration: Option<&'a Node<'a>>,
        block: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::CatchClause(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_catch_clause", node.kind())
        };
        if opt_node_ref_eq(old.variable_declaration, variable_declaration)
            && node_ref_eq(old.block, block)
        {
            return node;
        }
        self.update(self.create_catch_clause(variable_declaration, block), node)
    }

    // ========================================================================
    // Object literal members
    // ========================================================================

    pub fn create_property_assignment(
        &self,
        name: &'a Node<'a>,
        initializer: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let initializer = self.parenthesize_expression_for_disallowed_comma(initializer);
        self.synthesize(
            SyntaxKind::PropertyAssignment,
            NodeShape::PropertyAssignment(PropertyAssignment { name, initializer }),
        )
    }

    pub fn update_property_assignment(
        &self,
        node: &'a Node<'a>,
        name: &'a Node<'a>,
        initializer: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::PropertyAssignment(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_property_assignment", node.kind())
        };
        if node_ref_eq(old.name, name) && node_ref_eq(old.initializer, initializer) {
            return node;
        }
        self.update(self.create_property_assignment(name, initializer), node)
    }

    pub fn create_shorthand_property_assignment(
        &self,
        name: &'a Node<'a>,
        object_assignment_initializer: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let object_assignment_initializer = object_assignment_initializer
            .map(|init| self.parenthesize_expression_for_disallowed_comma(init));
        self.synthesize(
            SyntaxKind::ShorthandPropertyAssignment,
            NodeShape::ShorthandPropertyAssignment(ShorthandPropertyAssignment {
                name,
                object_assignment_initializer,
            }),
        )
    }

    pub fn update_shorthand_property_assignment(
        &self,
        node: &'a Node<'a>,
        name: &'a Node<'a>,
        object_assignment_initializer: Option<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let NodeShape::ShorthandPropertyAssignment(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_shorthand_property_assignment", node.kind())
        };
        if node_ref_eq(old.name, name)
            && opt_node_ref_eq(
                old.object_assignment_initializer,
                object_assignment_initializer,
            )
        {
            return node;
        }
        self.update(
            self.create_shorthand_property_assignment(name, object_assignment_initializer),
            node,
        )
    }

    pub fn create_spread_assignment(&self, expression: &'a Node<'a>) -> &'a Node<'a> {
        let expression = self.parenthesize_expression_for_disallowed_comma(expression);
        self.synthesize(
            SyntaxKind::SpreadAssignment,
            NodeShape::SpreadAssignment(SpreadAssignment { expression }),
        )
    }

    pub fn update_spread_assignment(
        &self,
        node: &'a Node<'a>,
        expression: &'a Node<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::SpreadAssignment(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_spread_assignment", node.kind())
        };
        if node_ref_eq(old.expression, expression) {
            return node;
        }
        self.update(self.create_spread_assignment(expression), node)
    }

    // ========================================================================
    // Source file
    // ========================================================================

    pub fn create_source_file(
        &self,
        statements: impl Into<NodeArrayOrVec<'a>>,
        file_name: &str,
        is_declaration_file: bool,
    ) -> &'a Node<'a> {
        let statements = self.create_node_array(statements, false);
        let end_of_file_token = self.create_token(SyntaxKind::EndOfFileToken);
        let file_name = self.interner().intern(file_name);
        self.synthesize(
            SyntaxKind::SourceFile,
            NodeShape::SourceFile(SourceFile {
                statements,
                end_of_file_token,
                file_name,
                is_declaration_file,
            }),
        )
    }

    pub fn update_source_file(
        &self,
        node: &'a Node<'a>,
        statements: &'a NodeArray<'a>,
    ) -> &'a Node<'a> {
        let NodeShape::SourceFile(old) = &node.shape else {
            debug::fail_bad_syntax_kind("update_source_file", node.kind())
        };
        if old.statements.ref_eq(statements) {
            return node;
        }
        let updated = self.synthesize(
            SyntaxKind::SourceFile,
            NodeShape::SourceFile(SourceFile {
                statements,
                ..*old
            }),
        );
        self.update(updated, node)
    }

    // ========================================================================
    // Compound conveniences
    // ========================================================================

    pub fn create_comma(&self, left: &'a Node<'a>, right: &'a Node<'a>) -> &'a Node<'a> {
        self.create_binary_expression(left, SyntaxKind::CommaToken, right)
    }

    pub fn create_assignment(&self, left: &'a Node<'a>, right: &'a Node<'a>) -> &'a Node<'a> {
        self.create_binary_expression(left, SyntaxKind::EqualsToken, right)
    }

    pub fn create_logical_and(&self, left: &'a Node<'a>, right: &'a Node<'a>) -> &'a Node<'a> {
        self.create_binary_expression(left, SyntaxKind::AmpersandAmpersandToken, right)
    }

    pub fn create_logical_or(&self, left: &'a Node<'a>, right: &'a Node<'a>) -> &'a Node<'a> {
        self.create_binary_expression(left, SyntaxKind::BarBarToken, right)
    }

    pub fn create_strict_equality(
        &self,
        left: &'a Node<'a>,
        right: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.create_binary_expression(left, SyntaxKind::EqualsEqualsEqualsToken, right)
    }

    pub fn create_strict_inequality(
        &self,
        left: &'a Node<'a>,
        right: &'a Node<'a>,
    ) -> &'a Node<'a> {
        self.create_binary_expression(left, SyntaxKind::ExclamationEqualsEqualsToken, right)
    }

    pub fn create_add(&self, left: &'a Node<'a>, right: &'a Node<'a>) -> &'a Node<'a> {
        self.create_binary_expression(left, SyntaxKind::PlusToken, right)
    }

    pub fn create_subtract(&self, left: &'a Node<'a>, right: &'a Node<'a>) -> &'a Node<'a> {
        self.create_binary_expression(left, SyntaxKind::MinusToken, right)
    }

    pub fn create_multiply(&self, left: &'a Node<'a>, right: &'a Node<'a>) -> &'a Node<'a> {
        self.create_binary_expression(left, SyntaxKind::AsteriskToken, right)
    }

    pub fn create_divide(&self, left: &'a Node<'a>, right: &'a Node<'a>) -> &'a Node<'a> {
        self.create_binary_expression(left, SyntaxKind::SlashToken, right)
    }

    pub fn create_less_than(&self, left: &'a Node<'a>, right: &'a Node<'a>) -> &'a Node<'a> {
        self.create_binary_expression(left, SyntaxKind::LessThanToken, right)
    }

    pub fn create_exponent(&self, left: &'a Node<'a>, right: &'a Node<'a>) -> &'a Node<'a> {
        self.create_binary_expression(left, SyntaxKind::AsteriskAsteriskToken, right)
    }

    pub fn create_logical_not(&self, operand: &'a Node<'a>) -> &'a Node<'a> {
        self.create_prefix_unary_expression(SyntaxKind::ExclamationToken, operand)
    }

    pub fn create_void_zero(&self) -> &'a Node<'a> {
        self.create_void_expression(self.create_numeric_literal("0"))
    }

    /// `(() => { ...statements })()`; the call constructor parenthesizes the
    /// arrow for us.
    pub fn create_immediately_invoked_arrow_function(
        &self,
        statements: Vec<&'a Node<'a>>,
    ) -> &'a Node<'a> {
        let body = self.create_block(statements, true);
        let arrow = self.create_arrow_function(
            ModifierFlags::NONE,
            None,
            Vec::new(),
            None,
            None,
            body,
        );
        self.create_call_expression(arrow, None, Vec::new())
    }
}
