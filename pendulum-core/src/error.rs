use std::{error, fmt};

/// Geometric failure in the vector layer or in a solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// A zero-length vector has no direction.
    ZeroVector,
    /// The two-link triangle collapsed, no angle can be derived.
    DegenerateReach,
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::ZeroVector => write!(f, "cannot normalize zero vector"),
            DomainError::DegenerateReach => write!(f, "degenerate reach geometry"),
        }
    }
}

impl error::Error for DomainError {}
