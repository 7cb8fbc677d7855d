//! Todo Store
//!
//! Layered architecture:
//! - domain: Items, lists and their value types
//! - repository: SQLite-backed data access

pub mod domain;
pub mod repository;

pub use domain::{Description, DomainError, DomainResult, Entity, Item, ItemEntry, OnList, Priority, Title, TodoList};
pub use repository::{init_db, DbState, ItemRepository, ListRepository, Repository, SharedConnection, MEMORY_URL};
