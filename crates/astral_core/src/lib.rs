//! astral_core: Core utilities for the astral node synthesis layer.
//!
//! Provides the arena all synthesized nodes live in, string interning,
//! text ranges (with the synthesized `(-1,-1)` convention), ordered
//! collections, and assertion-style failure helpers.

pub mod arena;
pub mod collections;
pub mod debug;
pub mod intern;
pub mod text;

// Re-export commonly used types
pub use arena::AstArena;
pub use intern::{InternedString, StringInterner};
pub use text::{TextRange, TextSpan};
