//! API request and response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppError;
use crate::store::{ClothFilter, ClothItem, ClothSize, InsertOutcome, NewCloth};

/// Cloth creation request
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClothRequest {
    pub name: String,

    /// Image URL
    pub image: String,

    pub brand: String,

    pub price: f64,

    /// Discount amount, 0 when omitted
    #[serde(default)]
    pub discount: f64,

    /// Whether the cloth is part of a flash sale, false when omitted
    #[serde(default)]
    pub flash_sale: bool,

    /// Rating, 0 when omitted
    #[serde(default)]
    pub rating: f64,

    /// A single size label or the list of available sizes
    pub size: ClothSize,

    pub description: String,

    #[serde(default)]
    pub category: Option<String>,
}

impl CreateClothRequest {
    /// Turn the request into a record stamped with its creation time
    pub fn into_new_cloth(self, created_at: DateTime<Utc>) -> NewCloth {
        NewCloth {
            name: self.name,
            image: self.image,
            brand: self.brand,
            price: self.price,
            discount: self.discount,
            flash_sale: self.flash_sale,
            rating: self.rating,
            size: self.size,
            description: self.description,
            category: self.category,
            created_at,
        }
    }
}

/// Query string accepted by the cloth listing endpoint
///
/// Values stay raw strings here so that empty parameters can be ignored
/// and bad numbers reported through the route's error envelope.
#[derive(Debug, Clone, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ClothQuery {
    /// Exact rating to match
    pub rating: Option<String>,
    /// Exact brand to match
    pub brand: Option<String>,
    /// Exact category to match
    pub category: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<String>,
    /// Inclusive upper price bound
    pub max_price: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_number(field: &'static str, value: Option<String>) -> Result<Option<f64>, AppError> {
    let Some(raw) = non_empty(value) else {
        return Ok(None);
    };

    match raw.trim().parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(Some(number)),
        _ => Err(AppError::InvalidQuery { field, value: raw }),
    }
}

impl TryFrom<ClothQuery> for ClothFilter {
    type Error = AppError;

    fn try_from(query: ClothQuery) -> Result<Self, Self::Error> {
        Ok(ClothFilter {
            rating: parse_number("rating", query.rating)?,
            brand: non_empty(query.brand),
            category: non_empty(query.category),
            min_price: parse_number("minPrice", query.min_price)?,
            max_price: parse_number("maxPrice", query.max_price)?,
        })
    }
}

/// Response to a successful creation
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateClothResponse {
    pub success: bool,
    pub message: String,
    pub result: InsertOutcome,
}

/// Response carrying a list of cloths
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ClothListResponse {
    pub success: bool,
    pub message: String,
    pub data: Vec<ClothItem>,
}

/// Response carrying at most one cloth; `data` is null when nothing matched
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ClothResponse {
    pub success: bool,
    pub message: String,
    pub data: Option<ClothItem>,
}

/// Root status message
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: StoreHealth,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct StoreHealth {
    pub name: String,
    pub reachable: bool,
}
