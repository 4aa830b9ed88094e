//! HTTP route definitions

use crate::api::handlers;
use crate::api::models::*;
use crate::config::CorsConfig;
use crate::error::{AppError, ErrorResponse, Result};
use crate::store::{ClothItem, ClothSize, InsertOutcome};
use axum::{
    http::{header::HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cloth Catalog API",
        description = "Create and query clothing items stored in MongoDB.",
        license(name = "MIT"),
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        handlers::root,
        handlers::health_check,
        handlers::create_cloth,
        handlers::list_cloth,
        handlers::list_cloth_by_brand,
        handlers::get_cloth,
    ),
    components(schemas(
        CreateClothRequest,
        CreateClothResponse,
        ClothListResponse,
        ClothResponse,
        ClothItem,
        ClothSize,
        InsertOutcome,
        RootResponse,
        HealthResponse,
        StoreHealth,
        ErrorResponse,
    )),
    tags(
        (name = "Cloth", description = "Cloth catalog endpoints"),
        (name = "Health", description = "Health and status endpoints"),
    )
)]
pub struct ApiDoc;

/// Build the CORS policy for the configured origins
pub fn cors_layer(cors: &CorsConfig) -> Result<CorsLayer> {
    let origins = cors
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| {
                AppError::Config(config::ConfigError::Message(format!(
                    "Invalid allowed origin '{}'",
                    origin
                )))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(cors.allow_credentials))
}

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Result<Router> {
    let cors = cors_layer(&state.settings.cors)?;

    let api_routes = Router::new()
        .route(
            "/cloth",
            get(handlers::list_cloth).post(handlers::create_cloth),
        )
        .route("/cloth/brand/:brand", get(handlers::list_cloth_by_brand))
        .route("/cloth/:id", get(handlers::get_cloth));

    Ok(Router::new()
        .route("/", get(handlers::root))
        // Health check endpoint
        .route("/health", get(handlers::health_check))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Cloth routes under /api/v1 prefix
        .nest("/api/v1", api_routes)
        // Add shared state
        .with_state(state)
        .layer(cors)
        // Add tracing layer
        .layer(TraceLayer::new_for_http()))
}
