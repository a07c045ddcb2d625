//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{HeaderMap, Request, StatusCode, header};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use catalog_api::{AppState, build_app};
use catalog_core::config::AppConfig;
use catalog_database::DataContext;
use catalog_database::migration::run_migrations;
use catalog_entity::Product;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Data context for direct queries
    pub db: DataContext,
}

impl TestApp {
    /// Create a test application over a fresh in-memory database.
    pub async fn new() -> Self {
        let config = AppConfig::in_memory();

        let db = DataContext::connect(&config.database)
            .await
            .expect("Failed to open in-memory database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let router = build_app(AppState::new(config, db.clone()));
        Self { router, db }
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Submit an urlencoded form, as a browser would.
    pub async fn submit(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{k}={}", v.replace(' ', "+")))
            .collect::<Vec<_>>()
            .join("&");

        let req = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Create a product through the API and return it with its id.
    pub async fn create_product(
        &self,
        name: &str,
        price: &str,
        category_id: Option<i32>,
    ) -> Product {
        let response = self
            .request(
                "POST",
                "/api/products",
                Some(serde_json::json!({
                    "name": name,
                    "price": price,
                    "stock": 10,
                    "color": "Blue",
                    "category_id": category_id,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
        response.product()
    }

    /// All stored products, read through the API.
    pub async fn products(&self) -> Vec<Product> {
        let response = self.request("GET", "/api/products", None).await;
        assert_eq!(response.status, StatusCode::OK);
        serde_json::from_value(response.body).expect("product list")
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body, `Null` for non-JSON responses
    pub body: Value,
    /// Raw body text
    pub text: String,
}

impl TestResponse {
    /// The `Location` header, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// The body as a product.
    pub fn product(&self) -> Product {
        serde_json::from_value(self.body.clone()).expect("product body")
    }
}

/// Parse a decimal literal.
pub fn dec(value: &str) -> Decimal {
    value.parse().expect("decimal literal")
}
