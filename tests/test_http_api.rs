use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use recipe_generator::config::ServerConfig;
use recipe_generator::providers::{LlmProvider, ProviderResult};
use recipe_generator::{server, RecipeService};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct CannedProvider(Result<&'static str, &'static str>);

#[async_trait]
impl LlmProvider for CannedProvider {
    fn provider_name(&self) -> &str {
        "canned"
    }

    async fn generate(&self, _prompt: &str) -> ProviderResult<String> {
        match self.0 {
            Ok(reply) => Ok(reply.to_string()),
            Err(message) => Err(message.into()),
        }
    }
}

fn app(reply: Result<&'static str, &'static str>) -> Router {
    let service = RecipeService::new(Box::new(CannedProvider(reply)));
    server::router(Arc::new(service), &ServerConfig::default())
}

async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

const CHICKEN_AND_RICE: &str = r#"{"ingredients": ["chicken", "rice"], "cookingTime": 30, "servings": 4}"#;

#[tokio::test]
async fn test_status_route() {
    let (status, body) = send(app(Ok("")), "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_generate_returns_model_recipe() {
    let reply = r#"Sure! {"title": "Chicken Rice Bowl", "ingredients": [{"item": "chicken"}], "instructions": [{"step": 1, "instruction": "Cook"}]}"#;
    let (status, body) = send(
        app(Ok(reply)),
        "POST",
        "/api/recipes/generate",
        Some(CHICKEN_AND_RICE),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["title"], "Chicken Rice Bowl");
    assert_eq!(body["data"]["instructions"][0]["instruction"], "Cook");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_generate_returns_fallback_for_prose() {
    let reply = "Cook the chicken with the rice until done.";
    let (status, body) = send(
        app(Ok(reply)),
        "POST",
        "/api/recipes/generate",
        Some(CHICKEN_AND_RICE),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Custom Recipe");
    assert_eq!(body["data"]["ingredients"], json!([]));
    assert_eq!(body["data"]["instructions"][0]["instruction"], reply);
    assert_eq!(body["data"]["nutritionInfo"]["calories"], "Varies");
}

#[tokio::test]
async fn test_generate_validation_failure() {
    let (status, body) = send(
        app(Ok("unused")),
        "POST",
        "/api/recipes/generate",
        Some(r#"{"ingredients": [], "cookingTime": 2, "servings": 4, "difficulty": "Expert"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(
        body["details"],
        json!([
            "At least one ingredient is required",
            "Cooking time must be between 5 and 480 minutes",
            "Difficulty must be Easy, Medium, or Hard"
        ])
    );
}

#[tokio::test]
async fn test_generate_upstream_failure() {
    let (status, body) = send(
        app(Err("connection refused")),
        "POST",
        "/api/recipes/generate",
        Some(CHICKEN_AND_RICE),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to generate recipe");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[tokio::test]
async fn test_generate_rejects_non_json_body() {
    let (status, body) = send(
        app(Ok("unused")),
        "POST",
        "/api/recipes/generate",
        Some("ingredients=chicken"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let service = RecipeService::new(Box::new(CannedProvider(Ok("unused"))));
    let config = ServerConfig {
        body_limit: 16,
        ..ServerConfig::default()
    };
    let app = server::router(Arc::new(service), &config);

    let (status, body) = send(app, "POST", "/api/recipes/generate", Some(CHICKEN_AND_RICE)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid request body");
}

#[tokio::test]
async fn test_non_string_difficulty_fails_validation() {
    let (status, body) = send(
        app(Ok("unused")),
        "POST",
        "/api/recipes/validate",
        Some(r#"{"ingredients": ["chicken"], "cookingTime": 30, "servings": 4, "difficulty": 5}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"],
        json!(["Difficulty must be Easy, Medium, or Hard"])
    );
}

#[tokio::test]
async fn test_validate_route() {
    let (status, body) = send(
        app(Ok("unused")),
        "POST",
        "/api/recipes/validate",
        Some(CHICKEN_AND_RICE),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], true);
    assert_eq!(body["message"], "Input is valid");

    let (status, body) = send(
        app(Ok("unused")),
        "POST",
        "/api/recipes/validate",
        Some(r#"{"ingredients": ["egg"], "cookingTime": 30}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["valid"], false);
    assert_eq!(body["errors"], json!(["Servings must be between 1 and 20"]));
}

#[tokio::test]
async fn test_catalog_routes() {
    for (uri, first, len) in [
        ("/api/recipes/cuisines", "Italian", 20),
        ("/api/recipes/meal-types", "Breakfast", 10),
        ("/api/recipes/dietary-restrictions", "None", 14),
        ("/api/recipes/equipment", "Oven", 19),
    ] {
        let (status, body) = send(app(Ok("")), "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"][0], first);
        assert_eq!(body["data"].as_array().unwrap().len(), len);
    }
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, body) = send(app(Ok("")), "GET", "/api/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Route not found");
}
