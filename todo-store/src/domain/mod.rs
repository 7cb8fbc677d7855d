//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod item;
mod list;

pub use entity::{Entity, DomainError, DomainResult};
pub use item::{Description, Item, ItemEntry, Priority};
pub use list::{OnList, Title, TodoList};
