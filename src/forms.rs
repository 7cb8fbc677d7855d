//! Request DTOs and their validation.
//!
//! Fields default to empty so that a missing field reaches validation and
//! produces a form error instead of a bare extractor rejection.

use serde::Deserialize;
use todo_store::{ItemEntry, Priority, Title};

/// Body of `POST /`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateListForm {
    /// List title
    #[serde(default)]
    pub name: String,
    /// Newline-separated `description, priority` lines
    #[serde(default)]
    pub items: String,
}

/// Body of `POST /update/{item}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePriorityForm {
    #[serde(default)]
    pub new_priority: String,
}

/// A create-list submission that passed validation
#[derive(Debug, Clone)]
pub struct ValidList {
    pub title: Title,
    /// Non-blank input lines, each a well-formed entry
    pub entries: Vec<String>,
}

/// Split the items textarea into entry lines, dropping blank ones
pub fn split_entries(items: &str) -> Vec<&str> {
    items
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

impl CreateListForm {
    /// Validate every field, collecting all problems for redisplay
    pub fn validate(&self) -> Result<ValidList, Vec<String>> {
        let mut errors = Vec::new();

        let title = match Title::parse(&self.name) {
            Ok(title) => Some(title),
            Err(_) => {
                errors.push("A title is required.".to_string());
                None
            }
        };

        let entries = split_entries(&self.items);
        for (line_no, line) in self.items.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            if let Err(e) = ItemEntry::parse(line) {
                errors.push(format!("Line {}: {}", line_no + 1, e));
            }
        }

        match title {
            Some(title) if errors.is_empty() => Ok(ValidList {
                title,
                entries: entries.into_iter().map(str::to_string).collect(),
            }),
            _ => Err(errors),
        }
    }
}

impl UpdatePriorityForm {
    pub fn validate(&self) -> Result<Priority, Vec<String>> {
        Priority::parse(&self.new_priority).map_err(|_| vec!["A new priority is required.".to_string()])
    }
}
