//! HTTP API.
//!
//! Every response body is a JSON envelope with a `success` flag. Generation
//! results also carry an RFC 3339 `timestamp`.

use crate::catalog;
use crate::config::ServerConfig;
use crate::error::RecipeError;
use crate::model::{RecipeRecord, RecipeRequest};
use crate::service::RecipeService;
use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::{SecondsFormat, Utc};
use log::{error, info, warn};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
struct AppState {
    service: Arc<RecipeService>,
}

#[derive(Debug, Serialize)]
struct DataResponse<T: Serialize> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct ValidationResponse {
    success: bool,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    success: bool,
    message: &'static str,
}

/// Build the application router
pub fn router(service: Arc<RecipeService>, config: &ServerConfig) -> Router {
    let recipes = Router::new()
        .route("/generate", post(generate_recipe))
        .route("/validate", post(validate_recipe_input))
        .route("/cuisines", get(cuisine_types))
        .route("/meal-types", get(meal_types))
        .route("/dietary-restrictions", get(dietary_restrictions))
        .route("/equipment", get(equipment_types));

    Router::new()
        .route("/", get(status))
        .nest("/api/recipes", recipes)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(cors_layer(config.frontend_url.as_deref()))
        .with_state(AppState { service })
}

/// Bind and serve until Ctrl-C
pub async fn serve(config: &ServerConfig, service: RecipeService) -> Result<(), RecipeError> {
    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        "Server running on http://{} using provider '{}'",
        address,
        service.provider_name()
    );
    match &config.frontend_url {
        Some(url) => info!("Frontend allowed from {}", url),
        None => info!("CORS allows any origin"),
    }

    axum::serve(listener, router(Arc::new(service), config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}

fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::HEAD,
        Method::PUT,
        Method::PATCH,
        Method::POST,
        Method::DELETE,
    ];

    match frontend_url.and_then(|url| HeaderValue::from_str(url).ok()) {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(methods)
            .allow_headers([CONTENT_TYPE])
            .allow_credentials(true),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any),
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Keeps the rejection's own status, so an oversized body stays 413
fn invalid_body(rejection: JsonRejection) -> Response {
    warn!("Rejected request body: {}", rejection.body_text());
    (
        rejection.status(),
        Json(ErrorResponse {
            success: false,
            error: "Invalid request body",
            message: Some(rejection.body_text()),
            details: None,
        }),
    )
        .into_response()
}

async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        success: true,
        message: "Recipe service is running",
    })
}

async fn generate_recipe(
    State(state): State<AppState>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body(rejection),
    };

    info!("Generating recipe with data: {:?}", request);

    match state.service.generate(&request).await {
        Ok(record) => Json(DataResponse::<RecipeRecord> {
            success: true,
            data: record,
            timestamp: Some(timestamp()),
        })
        .into_response(),
        Err(RecipeError::Validation(details)) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                success: false,
                error: "Validation failed",
                message: None,
                details: Some(details),
            }),
        )
            .into_response(),
        Err(e) => {
            error!("Recipe generation error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    success: false,
                    error: "Failed to generate recipe",
                    message: Some(e.to_string()),
                    details: None,
                }),
            )
                .into_response()
        }
    }
}

async fn validate_recipe_input(
    State(state): State<AppState>,
    payload: Result<Json<RecipeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return invalid_body(rejection),
    };

    let violations = state.service.validate(&request);
    if violations.is_empty() {
        Json(ValidationResponse {
            success: true,
            valid: true,
            message: Some("Input is valid"),
            errors: None,
        })
        .into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationResponse {
                success: false,
                valid: false,
                message: None,
                errors: Some(violations),
            }),
        )
            .into_response()
    }
}

fn list(items: &'static [&'static str]) -> Json<DataResponse<&'static [&'static str]>> {
    Json(DataResponse {
        success: true,
        data: items,
        timestamp: None,
    })
}

async fn cuisine_types() -> Json<DataResponse<&'static [&'static str]>> {
    list(catalog::CUISINES)
}

async fn meal_types() -> Json<DataResponse<&'static [&'static str]>> {
    list(catalog::MEAL_TYPES)
}

async fn dietary_restrictions() -> Json<DataResponse<&'static [&'static str]>> {
    list(catalog::DIETARY_RESTRICTIONS)
}

async fn equipment_types() -> Json<DataResponse<&'static [&'static str]>> {
    list(catalog::EQUIPMENT)
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
}
