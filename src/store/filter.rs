//! Conjunctive filter over the cloth collection

use bson::{doc, Document};

use crate::store::traits::ClothItem;

/// Criteria for listing cloths; `None` fields impose no constraint
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClothFilter {
    pub rating: Option<f64>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ClothFilter {
    /// Filter matching every cloth of one brand
    pub fn by_brand(brand: impl Into<String>) -> Self {
        Self {
            brand: Some(brand.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Render as a MongoDB query document
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();

        if let Some(rating) = self.rating {
            filter.insert("rating", rating);
        }
        if let Some(brand) = &self.brand {
            filter.insert("brand", brand.as_str());
        }
        if let Some(category) = &self.category {
            filter.insert("category", category.as_str());
        }

        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) => {
                filter.insert("price", doc! { "$gte": min, "$lte": max });
            }
            (Some(min), None) => {
                filter.insert("price", doc! { "$gte": min });
            }
            (None, Some(max)) => {
                filter.insert("price", doc! { "$lte": max });
            }
            (None, None) => {}
        }

        filter
    }

    /// Evaluate the filter against an in-process item
    pub fn matches(&self, item: &ClothItem) -> bool {
        if let Some(rating) = self.rating {
            if item.rating != rating {
                return false;
            }
        }
        if let Some(brand) = &self.brand {
            if item.brand != *brand {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if item.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if item.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if item.price > max {
                return false;
            }
        }
        true
    }
}
