//! Strategy backend
//!
//! CRUD over strategy records, users and learning resources, with an
//! in-memory implementation and an owner-checked service layer

mod learning;
mod memory;
mod service;
mod types;

pub use learning::{
    check_progress, default_resources, LearningError, LearningResource, NewLearningResource,
    ResourceId, ResourceKind, ResourceStatus,
};
pub use memory::MemoryStore;
pub use service::StrategyService;
pub use types::{AccessError, StrategyId, StrategyRecord};

use crate::auth::{User, UserId, UserInsert};
use crate::strategy::{NewStrategy, StrategyPatch};
use async_trait::async_trait;

/// Trait for strategy record storage
#[async_trait]
pub trait StrategyStore: Send + Sync {
    /// Insert a record owned by `owner`
    async fn create(&self, owner: UserId, strategy: NewStrategy) -> anyhow::Result<StrategyRecord>;
    /// All records of one owner, oldest first
    async fn list_by_owner(&self, owner: UserId) -> anyhow::Result<Vec<StrategyRecord>>;
    /// Fetch one record
    async fn get(&self, id: StrategyId) -> anyhow::Result<Option<StrategyRecord>>;
    /// Apply a partial update; `None` if absent
    async fn update(
        &self,
        id: StrategyId,
        patch: StrategyPatch,
    ) -> anyhow::Result<Option<StrategyRecord>>;
    /// Remove a record; false if absent
    async fn delete(&self, id: StrategyId) -> anyhow::Result<bool>;
}

/// Trait for user account storage
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get_user(&self, id: UserId) -> anyhow::Result<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;
    /// Insert a user; `None` if the username is taken
    async fn create_user(&self, user: UserInsert) -> anyhow::Result<Option<User>>;
}

/// Trait for learning resource storage
#[async_trait]
pub trait LearningStore: Send + Sync {
    async fn list_resources(&self) -> anyhow::Result<Vec<LearningResource>>;
    async fn get_resource(&self, id: ResourceId) -> anyhow::Result<Option<LearningResource>>;
    /// Insert a resource; progress must be 0..=100 and drives the status
    async fn create_resource(
        &self,
        resource: NewLearningResource,
    ) -> anyhow::Result<LearningResource>;
    /// Set progress (0..=100) and derive status; `None` if absent
    async fn update_progress(
        &self,
        id: ResourceId,
        progress: i64,
    ) -> anyhow::Result<Option<LearningResource>>;
}
