//! Error types for the override-stack surface.

use thiserror::Error;

/// Error returned by [`OverrideStack::pop`](crate::OverrideStack::pop) when
/// the calling thread has no pushed override to remove.
///
/// Unreachable through the scoped-guard API: every guard pops exactly the
/// push that created it. Seeing this error means an explicit `pop` was
/// unbalanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pop on an override stack with no pushed entry in the current thread")]
pub struct EmptyStackError;
