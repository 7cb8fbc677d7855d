//! Item Entity
//!
//! A description/priority pair. The description is the item's natural key:
//! one row per distinct (trimmed, case-sensitive) description, shared by every
//! list that references it.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entity::{DomainError, DomainResult, Entity};

/// Natural key of an item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    pub fn parse(text: &str) -> DomainResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput("description must not be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form priority label, stored exactly as entered (after trimming)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(String);

impl Priority {
    pub fn parse(text: &str) -> DomainResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInput("priority must not be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `description, priority` line of list input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
    pub description: Description,
    pub priority: Priority,
}

impl ItemEntry {
    /// Parse a raw line. Only the first and last comma-separated tokens are
    /// used; anything in between is ignored.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let tokens: Vec<&str> = raw.split(',').map(str::trim).collect();
        if tokens.len() < 2 {
            return Err(DomainError::InvalidInput(format!(
                "expected `description, priority` but got `{}`",
                raw.trim()
            )));
        }

        let description = Description::parse(tokens[0])?;
        let priority = Priority::parse(tokens[tokens.len() - 1])
            .map_err(|_| DomainError::InvalidInput(format!("missing priority for `{}`", description)))?;

        Ok(Self { description, priority })
    }
}

/// A persisted to-do item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: u32,
    pub description: Description,
    pub priority: Priority,
}

impl Item {
    pub fn new(id: u32, description: Description, priority: Priority) -> Self {
        Self { id, description, priority }
    }
}

impl Entity for Item {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
