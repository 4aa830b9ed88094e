//! MongoDB store tests
//!
//! These need a running server. Point `MONGODB_URI` at it and run with
//! `--ignored`; each test works in a collection of its own.

use bson::oid::ObjectId;
use chrono::{SubsecRound, Utc};
use cloth_catalog_api::config::{DatabaseConfig, StoreDriver};
use cloth_catalog_api::store::{ClothFilter, ClothSize, ClothStore, MongoClothStore, NewCloth};
use cloth_catalog_api::AppError;

async fn connect_scratch_store() -> MongoClothStore {
    let config = DatabaseConfig {
        driver: StoreDriver::Mongo,
        uri: std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
        name: "cloth-catalog-test".to_string(),
        collection: format!("cloth-{}", ObjectId::new().to_hex()),
    };
    let store = MongoClothStore::connect(&config).await.unwrap();
    store.ping().await.unwrap();
    store
}

fn new_cloth(brand: &str, price: f64) -> NewCloth {
    NewCloth {
        name: format!("{} jacket", brand),
        image: "https://img.example/jacket.png".to_string(),
        brand: brand.to_string(),
        price,
        discount: 0.0,
        flash_sale: false,
        rating: 3.5,
        size: ClothSize::Many(vec!["M".to_string(), "L".to_string()]),
        description: "Windbreaker".to_string(),
        category: Some("outerwear".to_string()),
        created_at: Utc::now().trunc_subsecs(3),
    }
}

#[tokio::test]
#[ignore]
async fn test_insert_and_find_by_id_round_trip() {
    let store = connect_scratch_store().await;
    let cloth = new_cloth("Nike", 18.0);

    let outcome = store.insert(cloth.clone()).await.unwrap();
    let item = store
        .find_by_id(&outcome.inserted_id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(item.id, outcome.inserted_id);
    assert_eq!(item.brand, cloth.brand);
    assert_eq!(item.size, cloth.size);
    assert_eq!(item.category, cloth.category);
    assert_eq!(item.created_at, Some(cloth.created_at));
}

#[tokio::test]
#[ignore]
async fn test_price_range_query() {
    let store = connect_scratch_store().await;
    for price in [5.0, 10.0, 15.0, 20.0, 25.0] {
        store.insert(new_cloth("Adidas", price)).await.unwrap();
    }

    let filter = ClothFilter {
        min_price: Some(10.0),
        max_price: Some(20.0),
        ..Default::default()
    };
    let mut prices: Vec<f64> = store
        .find(&filter)
        .await
        .unwrap()
        .iter()
        .map(|c| c.price)
        .collect();
    prices.sort_by(|a, b| a.partial_cmp(b).unwrap());

    assert_eq!(prices, vec![10.0, 15.0, 20.0]);
}

#[tokio::test]
#[ignore]
async fn test_malformed_id_is_rejected() {
    let store = connect_scratch_store().await;
    let result = store.find_by_id("xyz").await;
    assert!(matches!(result, Err(AppError::InvalidId(_))));
}
