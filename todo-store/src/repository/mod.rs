//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod db;
mod item_repo;
mod list_repo;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use db::{init_db, DbState, SharedConnection, MEMORY_URL};
pub use item_repo::ItemRepository;
pub use list_repo::ListRepository;
