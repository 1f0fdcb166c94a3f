//! Assertion-style failure helpers.
//!
//! This layer is purely constructive and has no recoverable-error channel:
//! a malformed tree corrupts every downstream pass with no localized
//! symptom, so internal-invariant violations fail loudly instead of
//! returning errors.

/// Report an unrecoverable internal failure.
#[cold]
#[track_caller]
pub fn fail(message: &str) -> ! {
    panic!("Debug failure: {message}")
}

/// Assert an internal invariant, failing loudly when it does not hold.
#[track_caller]
pub fn assert(condition: bool, message: &str) {
    if !condition {
        fail(message);
    }
}

/// Report a syntax kind that should be unreachable in an exhaustive match.
#[cold]
#[track_caller]
pub fn fail_bad_syntax_kind(context: &str, kind: impl std::fmt::Debug) -> ! {
    panic!("Debug failure: unexpected syntax kind {kind:?} in {context}")
}
