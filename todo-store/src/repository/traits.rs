//! Repository Layer - Core Traits
//!
//! Read-side interface shared by the item and list repositories. Writes are
//! keyed by natural identity (description / title) and live on the concrete
//! repositories.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// Core repository trait for lookups by ID
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;
}
