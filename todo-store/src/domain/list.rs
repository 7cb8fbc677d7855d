//! TodoList Entity
//!
//! A named collection of items. Titles are unique.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entity::{DomainError, DomainResult, Entity};

/// Natural key of a list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    pub fn parse(text: &str) -> DomainResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput("title must not be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named to-do list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    /// Unique identifier
    pub id: u32,
    pub title: Title,
    /// Creation time, unix millis
    pub created_at: i64,
}

impl TodoList {
    pub fn new(id: u32, title: Title, created_at: i64) -> Self {
        Self { id, title, created_at }
    }
}

impl Entity for TodoList {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Join table entry linking a list to one of its items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnList {
    pub item_id: u32,
    pub list_id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_trimmed() {
        let title = Title::parse("  Groceries\n").unwrap();
        assert_eq!(title.as_str(), "Groceries");
    }

    #[test]
    fn test_blank_title_rejected() {
        assert!(matches!(Title::parse("   "), Err(DomainError::InvalidInput(_))));
    }
}
