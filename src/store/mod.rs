//! Store module - the cloth collection gateway and its implementations

pub mod filter;
pub mod memory;
pub mod mongo;
pub mod traits;

pub use filter::ClothFilter;
pub use memory::MemoryClothStore;
pub use mongo::MongoClothStore;
pub use traits::{ClothItem, ClothSize, ClothStore, InsertOutcome, NewCloth};

use std::sync::Arc;

use crate::config::{DatabaseConfig, StoreDriver};
use crate::error::Result;

/// Create the store selected by the configuration
pub async fn create_store(config: &DatabaseConfig) -> Result<Arc<dyn ClothStore>> {
    match config.driver {
        StoreDriver::Mongo => Ok(Arc::new(MongoClothStore::connect(config).await?)),
        StoreDriver::Memory => Ok(Arc::new(MemoryClothStore::new())),
    }
}
