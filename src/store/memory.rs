//! Process-local cloth store, insertion ordered

use async_trait::async_trait;
use bson::oid::ObjectId;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::store::filter::ClothFilter;
use crate::store::traits::{ClothItem, ClothStore, InsertOutcome, NewCloth};

/// In-memory store with the same id format and filter semantics as MongoDB
pub struct MemoryClothStore {
    items: RwLock<Vec<ClothItem>>,
}

impl MemoryClothStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl Default for MemoryClothStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClothStore for MemoryClothStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn insert(&self, cloth: NewCloth) -> Result<InsertOutcome> {
        let id = ObjectId::new().to_hex();
        self.items
            .write()
            .push(ClothItem::from_new(id.clone(), cloth));
        debug!(id = %id, "Inserted cloth into memory store");

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn find(&self, filter: &ClothFilter) -> Result<Vec<ClothItem>> {
        Ok(self
            .items
            .read()
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ClothItem>> {
        let oid = ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))?;
        let hex = oid.to_hex();

        Ok(self.items.read().iter().find(|item| item.id == hex).cloned())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
