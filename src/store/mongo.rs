//! MongoDB-backed cloth store

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Bson};
use futures::TryStreamExt;
use mongodb::{options::ClientOptions, Client, Collection, Database};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::{AppError, Result};
use crate::store::filter::ClothFilter;
use crate::store::traits::{ClothItem, ClothSize, ClothStore, InsertOutcome, NewCloth};

/// Shape of a cloth document in the collection
///
/// Documents written by other clients may omit fields or store them as
/// null; both read back as defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClothDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    brand: String,
    #[serde(default, deserialize_with = "null_as_default")]
    price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    discount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    flash_sale: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    size: ClothSize,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(default)]
    created_at: Option<bson::DateTime>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<NewCloth> for ClothDocument {
    fn from(cloth: NewCloth) -> Self {
        Self {
            id: None,
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
            created_at: Some(bson::DateTime::from_chrono(cloth.created_at)),
        }
    }
}

impl From<ClothDocument> for ClothItem {
    fn from(doc: ClothDocument) -> Self {
        Self {
            id: doc.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: doc.name,
            image: doc.image,
            brand: doc.brand,
            price: doc.price,
            discount: doc.discount,
            flash_sale: doc.flash_sale,
            rating: doc.rating,
            size: doc.size,
            description: doc.description,
            category: doc.category,
            created_at: doc.created_at.map(|dt| dt.to_chrono()),
        }
    }
}

/// Cloth store over a single MongoDB collection
pub struct MongoClothStore {
    database: Database,
    collection: Collection<ClothDocument>,
}

impl MongoClothStore {
    /// Build a client from the connection string and bind the collection
    ///
    /// The driver connects lazily; call [`ClothStore::ping`] to verify the
    /// server is reachable.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;
        let database = client.database(&config.name);
        let collection = database.collection::<ClothDocument>(&config.collection);

        info!(
            database = %config.name,
            collection = %config.collection,
            "Configured MongoDB cloth store"
        );

        Ok(Self {
            database,
            collection,
        })
    }
}

fn inserted_id_hex(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        other => other.to_string(),
    }
}

#[async_trait]
impl ClothStore for MongoClothStore {
    fn name(&self) -> &str {
        "mongodb"
    }

    async fn insert(&self, cloth: NewCloth) -> Result<InsertOutcome> {
        let result = self
            .collection
            .insert_one(ClothDocument::from(cloth), None)
            .await?;

        let inserted_id = inserted_id_hex(&result.inserted_id);
        debug!(id = %inserted_id, "Inserted cloth document");

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id,
        })
    }

    async fn find(&self, filter: &ClothFilter) -> Result<Vec<ClothItem>> {
        let query = filter.to_document();
        debug!(filter = %query, "Querying cloth collection");

        let cursor = self.collection.find(query, None).await?;
        let docs: Vec<ClothDocument> = cursor.try_collect().await?;

        Ok(docs.into_iter().map(ClothItem::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ClothItem>> {
        let oid = ObjectId::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))?;

        let doc = self.collection.find_one(doc! { "_id": oid }, None).await?;
        Ok(doc.map(ClothItem::from))
    }

    async fn ping(&self) -> Result<()> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;
        Ok(())
    }
}
