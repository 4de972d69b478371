//! Construction-site capture for shape contracts.
//!
//! A failed shape assertion must point at the line that declared the
//! assertion, not at the evaluator. The location is captured as an explicit
//! value at construction time via `#[track_caller]`; nothing inspects the
//! call stack at runtime.

use std::fmt;
use std::panic::Location;

/// A source location captured when an assertion was declared.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SourceLocation {
    /// Source file of the declaration.
    pub file: &'static str,
    /// Line of the declaration.
    pub line: u32,
    /// Column of the declaration.
    pub column: u32,
}

impl SourceLocation {
    /// Captures the caller's location.
    ///
    /// Propagates through `#[track_caller]` constructors, so the captured
    /// site is where user code declared the assertion.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        let loc = Location::caller();
        Self {
            file: loc.file(),
            line: loc.line(),
            column: loc.column(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
