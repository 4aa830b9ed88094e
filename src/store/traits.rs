//! Store trait and the cloth record types it exchanges

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Result;
use crate::store::filter::ClothFilter;

/// A garment size: either one label or the list of sizes on offer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ClothSize {
    Single(String),
    Many(Vec<String>),
}

impl Default for ClothSize {
    fn default() -> Self {
        ClothSize::Single(String::new())
    }
}

/// A cloth ready to be inserted; `created_at` is stamped by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct NewCloth {
    pub name: String,
    pub image: String,
    pub brand: String,
    pub price: f64,
    pub discount: f64,
    pub flash_sale: bool,
    pub rating: f64,
    pub size: ClothSize,
    pub description: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A stored cloth as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClothItem {
    /// Store-generated identifier (24 character hex)
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub image: String,
    pub brand: String,
    pub price: f64,
    pub discount: f64,
    pub flash_sale: bool,
    pub rating: f64,
    pub size: ClothSize,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ClothItem {
    pub fn from_new(id: String, cloth: NewCloth) -> Self {
        Self {
            id,
            name: cloth.name,
            image: cloth.image,
            brand: cloth.brand,
            price: cloth.price,
            discount: cloth.discount,
            flash_sale: cloth.flash_sale,
            rating: cloth.rating,
            size: cloth.size,
            description: cloth.description,
            category: cloth.category,
            created_at: Some(cloth.created_at),
        }
    }
}

/// Insertion metadata reported back to the creator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// Gateway to the cloth collection
///
/// Each method maps to a single round-trip against the underlying store.
#[async_trait]
pub trait ClothStore: Send + Sync {
    /// Get the store name, used in health reports and logs
    fn name(&self) -> &str;

    /// Insert a new cloth
    async fn insert(&self, cloth: NewCloth) -> Result<InsertOutcome>;

    /// List every cloth matching the filter, in store order
    async fn find(&self, filter: &ClothFilter) -> Result<Vec<ClothItem>>;

    /// Look up one cloth; a well-formed id that matches nothing yields `None`
    async fn find_by_id(&self, id: &str) -> Result<Option<ClothItem>>;

    /// Check that the store is reachable
    async fn ping(&self) -> Result<()>;
}
