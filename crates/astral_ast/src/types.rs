//! Flag types and lightweight handles for the AST.

use std::fmt;

bitflags::bitflags! {
    /// Flags for AST nodes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u32 {
        const NONE                          = 0;
        const LET                           = 1 << 0;
        const CONST                         = 1 << 1;
        const USING                         = 1 << 2;
        const AWAIT_USING                   = 1 << 3;
        const NESTED_NAMESPACE              = 1 << 4;
        const SYNTHESIZED                   = 1 << 5;
        const NAMESPACE                     = 1 << 6;
        const OPTIONAL_CHAIN                = 1 << 7;
        const EXPORT_CONTEXT                = 1 << 8;
        const GLOBAL_AUGMENTATION           = 1 << 9;
        const HAS_ASYNC_FUNCTIONS           = 1 << 10;
        const THIS_NODE_HAS_ERROR           = 1 << 11;
        const MULTI_LINE                    = 1 << 12;

        const BLOCK_SCOPED = Self::LET.bits() | Self::CONST.bits() | Self::USING.bits() | Self::AWAIT_USING.bits();
    }
}

bitflags::bitflags! {
    /// Modifier flags carried on declarations.
    ///
    /// Modifiers are stored as flags on the node rather than as a list of
    /// modifier child nodes; factory constructors for declarations take a
    /// `ModifierFlags` argument.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        const NONE              = 0;
        const EXPORT            = 1 << 0;
        const AMBIENT           = 1 << 1;
        const PUBLIC            = 1 << 2;
        const PRIVATE           = 1 << 3;
        const PROTECTED         = 1 << 4;
        const STATIC            = 1 << 5;
        const READONLY          = 1 << 6;
        const ACCESSOR          = 1 << 7;
        const ABSTRACT          = 1 << 8;
        const ASYNC             = 1 << 9;
        const DEFAULT           = 1 << 10;
        const CONST             = 1 << 11;
        const OVERRIDE          = 1 << 12;
        const IN                = 1 << 13;
        const OUT               = 1 << 14;

        const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const PARAMETER_PROPERTY_MODIFIER = Self::ACCESSIBILITY_MODIFIER.bits() | Self::READONLY.bits() | Self::OVERRIDE.bits();
        const EXPORT_DEFAULT = Self::EXPORT.bits() | Self::DEFAULT.bits();
    }
}

bitflags::bitflags! {
    /// Facts about a subtree that downstream lowering passes query without
    /// re-walking it. Aggregated bottom-up at construction time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TransformFlags: u32 {
        const NONE                              = 0;
        const CONTAINS_SPREAD                   = 1 << 0;
        const CONTAINS_OBJECT_REST_OR_SPREAD    = 1 << 1;
        const CONTAINS_DESTRUCTURING            = 1 << 2;
        const CONTAINS_YIELD                    = 1 << 3;
        const CONTAINS_AWAIT                    = 1 << 4;
        const CONTAINS_LEXICAL_THIS             = 1 << 5;
        const CONTAINS_BLOCK_SCOPED_BINDING     = 1 << 6;
        const CONTAINS_COMPUTED_PROPERTY_NAME   = 1 << 7;
        const CONTAINS_GENERATED_IDENTIFIER     = 1 << 8;

        // Facts that do not propagate past the boundary they are scoped to.
        // "Excludes" masks are subtracted from a child's flags before they
        // are folded into the parent.
        const ARROW_FUNCTION_EXCLUDES = Self::CONTAINS_YIELD.bits()
            | Self::CONTAINS_AWAIT.bits()
            | Self::CONTAINS_BLOCK_SCOPED_BINDING.bits();
        const FUNCTION_EXCLUDES = Self::ARROW_FUNCTION_EXCLUDES.bits()
            | Self::CONTAINS_LEXICAL_THIS.bits();
        const CLASS_EXCLUDES = Self::CONTAINS_COMPUTED_PROPERTY_NAME.bits()
            | Self::CONTAINS_LEXICAL_THIS.bits();
        const MODULE_EXCLUDES = Self::FUNCTION_EXCLUDES.bits()
            | Self::CONTAINS_BLOCK_SCOPED_BINDING.bits();
    }
}

bitflags::bitflags! {
    /// Emit behavior flags stored in the emit side table, never on the node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EmitFlags: u32 {
        const NONE                      = 0;
        const SINGLE_LINE               = 1 << 0;
        const MULTI_LINE                = 1 << 1;
        const ADVANCED_LINE             = 1 << 2;
        const NO_SUBSTITUTION           = 1 << 3;
        const CAPTURES_THIS             = 1 << 4;
        const NO_LEADING_SOURCE_MAP     = 1 << 5;
        const NO_TRAILING_SOURCE_MAP    = 1 << 6;
        const NO_NESTED_SOURCE_MAPS     = 1 << 7;
        const NO_LEADING_COMMENTS       = 1 << 8;
        const NO_TRAILING_COMMENTS      = 1 << 9;
        const NO_NESTED_COMMENTS        = 1 << 10;
        const HELPER_NAME               = 1 << 11;
        const EXPORT_NAME               = 1 << 12;
        const LOCAL_NAME                = 1 << 13;
        const INTERNAL_NAME             = 1 << 14;
        const INDENTED                  = 1 << 15;
        const NO_INDENTATION            = 1 << 16;
        const ASYNC_FUNCTION_BODY       = 1 << 17;
        const REUSE_TEMP_VARIABLE_SCOPE = 1 << 18;
        const CUSTOM_PROLOGUE           = 1 << 19;
        const NO_HOISTING               = 1 << 20;
        const IIFE                      = 1 << 21;
        const NO_ASCII_ESCAPING         = 1 << 22;

        const NO_SOURCE_MAP = Self::NO_LEADING_SOURCE_MAP.bits() | Self::NO_TRAILING_SOURCE_MAP.bits();
        const NO_COMMENTS = Self::NO_LEADING_COMMENTS.bits() | Self::NO_TRAILING_COMMENTS.bits();
    }
}

bitflags::bitflags! {
    /// Selects which wrapper kinds `skip_outer_expressions` unwraps.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OuterExpressionKinds: u8 {
        const PARENTHESES                   = 1 << 0;
        const TYPE_ASSERTIONS               = 1 << 1;
        const NON_NULL_ASSERTIONS           = 1 << 2;
        const PARTIALLY_EMITTED_EXPRESSIONS = 1 << 3;

        const ASSERTIONS = Self::TYPE_ASSERTIONS.bits() | Self::NON_NULL_ASSERTIONS.bits();
        const ALL = Self::PARENTHESES.bits()
            | Self::ASSERTIONS.bits()
            | Self::PARTIALLY_EMITTED_EXPRESSIONS.bits();
    }
}

/// Node ID: a factory-unique handle used to key side tables.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// How a generated identifier's final name is resolved at emit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratedIdentifierKind {
    /// Temp variable, any unused name.
    Auto,
    /// Loop variable, kept stable within its loop.
    Loop,
    /// Name unique across the file, derived from the base text.
    Unique,
    /// Name derived from another node (its text, made unique).
    Node,
}

/// Generation info attached to a generated identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoGenerateInfo {
    pub kind: GeneratedIdentifierKind,
    /// Factory-unique, monotonically increasing id. Equal ids mean equal
    /// final names.
    pub id: u32,
    /// For [`GeneratedIdentifierKind::Node`], the node the name derives from.
    pub target: Option<NodeId>,
}
