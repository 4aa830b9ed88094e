//! HTTP request handlers

use crate::api::models::{
    ClothListResponse, ClothQuery, ClothResponse, CreateClothRequest, CreateClothResponse,
    HealthResponse, RootResponse, StoreHealth,
};
use crate::error::{AppError, RouteError};
use crate::store::ClothFilter;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use chrono::{SubsecRound, Utc};
use std::sync::Arc;
use tracing::{info, warn};

const CREATE_FAILED: &str = "An error occurred while creating cloth";
const LIST_FAILED: &str = "An error occurred while retrieving cloth";
const BRAND_FAILED: &str = "An error occurred while retrieving cloth by brand";
const GET_FAILED: &str = "An error occurred while retrieving cloth by ID";

/// Root status endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "Server is up", body = RootResponse))
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "AKM CLOTH server is running smoothly".to_string(),
    })
}

/// Create a cloth
#[utoipa::path(
    post,
    path = "/api/v1/cloth",
    tag = "Cloth",
    request_body = CreateClothRequest,
    responses(
        (status = 200, description = "Cloth created", body = CreateClothResponse),
        (status = 500, description = "Rejected body or store failure", body = ErrorResponse)
    )
)]
pub async fn create_cloth(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateClothRequest>, JsonRejection>,
) -> Result<Json<CreateClothResponse>, RouteError> {
    let Json(request) = payload
        .map_err(|rejection| AppError::InvalidBody(rejection.body_text()).context(CREATE_FAILED))?;

    info!(name = %request.name, brand = %request.brand, "Creating cloth");

    // BSON datetimes hold milliseconds
    let cloth = request.into_new_cloth(Utc::now().trunc_subsecs(3));

    let result = state
        .store
        .insert(cloth)
        .await
        .map_err(|e| e.context(CREATE_FAILED))?;

    info!(id = %result.inserted_id, "Cloth created");

    Ok(Json(CreateClothResponse {
        success: true,
        message: "Successfully cloth create!".to_string(),
        result,
    }))
}

/// List cloths, optionally filtered
#[utoipa::path(
    get,
    path = "/api/v1/cloth",
    tag = "Cloth",
    params(ClothQuery),
    responses(
        (status = 200, description = "Matching cloths", body = ClothListResponse),
        (status = 500, description = "Bad query value or store failure", body = ErrorResponse)
    )
)]
pub async fn list_cloth(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ClothQuery>, QueryRejection>,
) -> Result<Json<ClothListResponse>, RouteError> {
    let Query(query) = query
        .map_err(|rejection| AppError::InvalidQueryString(rejection.body_text()).context(LIST_FAILED))?;
    let filter = ClothFilter::try_from(query).map_err(|e| e.context(LIST_FAILED))?;

    let data = state
        .store
        .find(&filter)
        .await
        .map_err(|e| e.context(LIST_FAILED))?;

    info!(count = data.len(), filtered = !filter.is_empty(), "Listed cloth");

    Ok(Json(ClothListResponse {
        success: true,
        message: "Successfully retrieved cloth!".to_string(),
        data,
    }))
}

/// List cloths of one brand
#[utoipa::path(
    get,
    path = "/api/v1/cloth/brand/{brand}",
    tag = "Cloth",
    params(("brand" = String, Path, description = "Exact brand name")),
    responses(
        (status = 200, description = "Cloths of the brand", body = ClothListResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_cloth_by_brand(
    State(state): State<Arc<AppState>>,
    Path(brand): Path<String>,
) -> Result<Json<ClothListResponse>, RouteError> {
    let data = state
        .store
        .find(&ClothFilter::by_brand(brand.as_str()))
        .await
        .map_err(|e| e.context(BRAND_FAILED))?;

    info!(brand = %brand, count = data.len(), "Listed cloth by brand");

    Ok(Json(ClothListResponse {
        success: true,
        message: format!("Successfully retrieved cloth for brand {}!", brand),
        data,
    }))
}

/// Fetch a single cloth by id
#[utoipa::path(
    get,
    path = "/api/v1/cloth/{id}",
    tag = "Cloth",
    params(("id" = String, Path, description = "24 character hex identifier")),
    responses(
        (status = 200, description = "The cloth, or null when no cloth has this id", body = ClothResponse),
        (status = 500, description = "Malformed id or store failure", body = ErrorResponse)
    )
)]
pub async fn get_cloth(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ClothResponse>, RouteError> {
    let data = state
        .store
        .find_by_id(&id)
        .await
        .map_err(|e| e.context(GET_FAILED))?;

    info!(id = %id, found = data.is_some(), "Fetched cloth");

    Ok(Json(ClothResponse {
        success: true,
        message: "successfully retrieve cloth!".to_string(),
        data,
    }))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service and store status", body = HealthResponse))
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let reachable = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!(store = %state.store.name(), error = %e, "Store ping failed");
            false
        }
    };

    Json(HealthResponse {
        status: if reachable { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: StoreHealth {
            name: state.store.name().to_string(),
            reachable,
        },
    })
}
