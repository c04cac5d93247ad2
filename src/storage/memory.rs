//! In-memory storage backend

use super::{
    check_progress, default_resources, LearningResource, LearningStore, NewLearningResource,
    ResourceId, StrategyId, StrategyRecord, StrategyStore, UserStore,
};
use crate::auth::{User, UserId, UserInsert};
use crate::strategy::{NewStrategy, StrategyPatch};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Table with a sequential id counter starting at 1
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.entry(id).or_insert(build(id))
    }
}

/// Map-backed store for strategies, users and learning resources.
///
/// Nothing survives the process.
#[derive(Clone, Default)]
pub struct MemoryStore {
    strategies: Arc<RwLock<Table<StrategyRecord>>>,
    users: Arc<RwLock<Table<User>>>,
    resources: Arc<RwLock<Table<LearningResource>>>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the default learning resources
    pub async fn seeded() -> Self {
        let store = Self::new();
        {
            let mut resources = store.resources.write().await;
            for resource in default_resources() {
                resources.insert_with(|id| LearningResource::new(id, resource));
            }
        }
        store
    }
}

#[async_trait]
impl StrategyStore for MemoryStore {
    async fn create(&self, owner: UserId, strategy: NewStrategy) -> anyhow::Result<StrategyRecord> {
        let mut table = self.strategies.write().await;
        let record = table
            .insert_with(|id| StrategyRecord::new(id, owner, strategy))
            .clone();
        tracing::info!(id = record.id, owner, name = %record.name, "Strategy stored");
        Ok(record)
    }

    async fn list_by_owner(&self, owner: UserId) -> anyhow::Result<Vec<StrategyRecord>> {
        let table = self.strategies.read().await;
        Ok(table
            .rows
            .values()
            .filter(|r| r.user_id == owner)
            .cloned()
            .collect())
    }

    async fn get(&self, id: StrategyId) -> anyhow::Result<Option<StrategyRecord>> {
        let table = self.strategies.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(
        &self,
        id: StrategyId,
        patch: StrategyPatch,
    ) -> anyhow::Result<Option<StrategyRecord>> {
        let mut table = self.strategies.write().await;
        let Some(record) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        record.apply(patch);
        tracing::info!(id, "Strategy updated");
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: StrategyId) -> anyhow::Result<bool> {
        let mut table = self.strategies.write().await;
        let removed = table.rows.remove(&id).is_some();
        if removed {
            tracing::info!(id, "Strategy deleted");
        }
        Ok(removed)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn get_user(&self, id: UserId) -> anyhow::Result<Option<User>> {
        let table = self.users.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        let table = self.users.read().await;
        Ok(table
            .rows
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, user: UserInsert) -> anyhow::Result<Option<User>> {
        let mut table = self.users.write().await;
        if table.rows.values().any(|u| u.username == user.username) {
            return Ok(None);
        }
        let created = table.insert_with(|id| User::new(id, user)).clone();
        tracing::info!(user_id = created.id, username = %created.username, "User created");
        Ok(Some(created))
    }
}

#[async_trait]
impl LearningStore for MemoryStore {
    async fn list_resources(&self) -> anyhow::Result<Vec<LearningResource>> {
        let table = self.resources.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_resource(&self, id: ResourceId) -> anyhow::Result<Option<LearningResource>> {
        let table = self.resources.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create_resource(
        &self,
        resource: NewLearningResource,
    ) -> anyhow::Result<LearningResource> {
        let progress = check_progress(i64::from(resource.progress))?;
        let mut table = self.resources.write().await;
        Ok(table
            .insert_with(|id| {
                let mut created = LearningResource::new(id, resource);
                created.apply_progress(progress);
                created
            })
            .clone())
    }

    async fn update_progress(
        &self,
        id: ResourceId,
        progress: i64,
    ) -> anyhow::Result<Option<LearningResource>> {
        let progress = check_progress(progress)?;
        let mut table = self.resources.write().await;
        let Some(resource) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        resource.apply_progress(progress);
        Ok(Some(resource.clone()))
    }
}
