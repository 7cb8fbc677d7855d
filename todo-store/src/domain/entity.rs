//! Identity and errors for to-do entities
//!
//! `Item` and `TodoList` both expose a numeric row id through [`Entity`];
//! every store operation reports failure as a [`DomainError`].

use serde::{Deserialize, Serialize};

/// A row with a system-generated id
pub trait Entity: Sized + Send + Sync + Clone {
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    fn id(&self) -> Self::Id;
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures of store operations. `NotFound` covers a missing item or list,
/// `InvalidInput` a malformed entry, title or priority, `Conflict` a violated
/// uniqueness or trigger constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
    Conflict(String),
    Internal(String),
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound(_))
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
