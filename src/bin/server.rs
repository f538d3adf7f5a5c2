//! REST API server for card form validation.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! cardcheck-server
//!
//! # With custom port and static directory
//! cardcheck-server --port 8080 --static-dir ./static
//!
//! # More verbose logs
//! RUST_LOG=debug cardcheck-server
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use axum::{
    extract::rejection::JsonRejection,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::mem;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeFile;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;
use zeroize::{Zeroize, ZeroizeOnDrop};

use card_input_validator::{
    mask::mask_number, BatchSummary, BatchValidator, CardSubmission, ValidationReport,
};

// ============================================================================
// Configuration
// ============================================================================

#[derive(Parser, Debug, Clone)]
#[command(name = "cardcheck-server")]
#[command(author, version, about = "Card form validation REST API")]
struct ServerConfig {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Directory holding index.html for the root page
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,
}

impl ServerConfig {
    fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Input Validator API",
        version = "0.1.0",
        description = "Validates card number, CVV, expiry and cardholder name from a payment form. No auth or rate limiting.",
        license(name = "MIT")
    ),
    tags(
        (name = "Validation", description = "Card form validation endpoints"),
        (name = "System", description = "Health and smoke-test endpoints")
    ),
    paths(validate_card, validate_batch, smoke_test, health),
    components(schemas(
        ValidateCardRequest,
        ValidationResponse,
        BatchValidateRequest,
        BatchValidateResponse,
        BatchSummaryResponse,
        ErrorResponse,
        HealthResponse,
    ))
)]
struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize, ToSchema, Default, Zeroize, ZeroizeOnDrop)]
#[schema(example = json!({
    "card_number": "4111111111111111",
    "cvv": "123",
    "expiry": "12/25",
    "name": "John Doe"
}))]
struct ValidateCardRequest {
    /// Card number, digits only. Missing means empty.
    #[serde(default)]
    card_number: String,
    /// CVV: 4 digits for American Express, 3 otherwise. Missing means empty.
    #[serde(default)]
    cvv: String,
    /// Expiry in MM/YY format. Missing means empty.
    #[serde(default)]
    expiry: String,
    /// Cardholder name: 3-40 letters or spaces. Missing means empty.
    #[serde(default)]
    name: String,
}

impl ValidateCardRequest {
    fn into_submission(mut self) -> CardSubmission {
        CardSubmission::new(
            mem::take(&mut self.card_number),
            mem::take(&mut self.cvv),
            mem::take(&mut self.expiry),
            mem::take(&mut self.name),
        )
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
#[schema(example = json!({
    "card_number_valid": true,
    "issuer": "Visa",
    "cvv_valid": true,
    "expiry_valid": true,
    "name_valid": true,
    "overall_status": true,
    "errors": []
}))]
struct ValidationResponse {
    /// Card number is 13-19 digits from a recognised issuer
    card_number_valid: bool,
    /// Visa, MasterCard, American Express, Discover or Unknown; null when the number is malformed
    issuer: Option<String>,
    /// CVV matches the issuer's length
    cvv_valid: bool,
    /// Expiry is a valid MM/YY not in the past
    expiry_valid: bool,
    /// Cardholder name is acceptable
    name_valid: bool,
    /// All four checks passed
    overall_status: bool,
    /// One human-readable message per failed check, in field order
    errors: Vec<String>,
}

impl From<ValidationReport> for ValidationResponse {
    fn from(report: ValidationReport) -> Self {
        Self {
            card_number_valid: report.card_number_valid,
            issuer: report.issuer.map(|i| i.name().to_string()),
            cvv_valid: report.cvv_valid,
            expiry_valid: report.expiry_valid,
            name_valid: report.name_valid,
            overall_status: report.overall_status,
            errors: report.errors,
        }
    }
}

#[derive(Deserialize, ToSchema)]
struct BatchValidateRequest {
    /// Submissions to validate, each with the same keys as /validate-card
    submissions: Vec<ValidateCardRequest>,
}

#[derive(Serialize, Deserialize, ToSchema)]
struct BatchValidateResponse {
    /// Reports in input order
    results: Vec<ValidationResponse>,
    /// Summary statistics
    summary: BatchSummaryResponse,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq)]
struct BatchSummaryResponse {
    /// Total submissions processed
    total: usize,
    /// Submissions that passed every check
    valid: usize,
    /// Submissions with at least one failed check
    invalid: usize,
}

impl From<BatchSummary> for BatchSummaryResponse {
    fn from(summary: BatchSummary) -> Self {
        Self {
            total: summary.total,
            valid: summary.valid,
            invalid: summary.invalid,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
struct ErrorResponse {
    /// Why the request was rejected
    error: String,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// Service status
    status: String,
    /// API version
    version: String,
}

// ============================================================================
// Errors
// ============================================================================

/// A request rejected before reaching the validator.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(status = %self.status, error = %self.message, "rejected request");
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

fn run_validation(submission: &CardSubmission) -> ValidationResponse {
    let report = submission.validate();
    tracing::info!(
        card = %mask_number(&submission.card_number),
        issuer = ?report.issuer,
        overall_status = report.overall_status,
        failed = report.errors.len(),
        "validated card submission"
    );
    report.into()
}

/// Validate a card form submission
#[utoipa::path(
    post,
    path = "/validate-card",
    request_body = ValidateCardRequest,
    responses(
        (status = 200, description = "Validation report", body = ValidationResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 415, description = "Missing JSON content type", body = ErrorResponse),
        (status = 422, description = "Field with a non-string value", body = ErrorResponse)
    ),
    tag = "Validation"
)]
async fn validate_card(
    payload: Result<Json<ValidateCardRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>, ApiError> {
    let Json(req) = payload?;
    let submission = req.into_submission();
    Ok(Json(run_validation(&submission)))
}

/// Validate several card form submissions
#[utoipa::path(
    post,
    path = "/validate-card/batch",
    request_body = BatchValidateRequest,
    responses(
        (status = 200, description = "Batch validation results", body = BatchValidateResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse)
    ),
    tag = "Validation"
)]
async fn validate_batch(
    payload: Result<Json<BatchValidateRequest>, JsonRejection>,
) -> Result<Json<BatchValidateResponse>, ApiError> {
    let Json(req) = payload?;
    let submissions: Vec<CardSubmission> = req
        .submissions
        .into_iter()
        .map(ValidateCardRequest::into_submission)
        .collect();

    let batch = BatchValidator::new();
    let reports = batch.validate_all(&submissions);
    let summary = BatchSummary::from_reports(&reports);
    tracing::info!(
        total = summary.total,
        valid = summary.valid,
        invalid = summary.invalid,
        "validated batch"
    );

    Ok(Json(BatchValidateResponse {
        results: reports.into_iter().map(Into::into).collect(),
        summary: summary.into(),
    }))
}

/// Validate a fixed sample submission
#[utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Report for 4111111111111111 / 123 / 12/25 / John Doe", body = ValidationResponse)
    ),
    tag = "System"
)]
async fn smoke_test() -> Json<ValidationResponse> {
    Json(run_validation(&CardSubmission::sample()))
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Router
// ============================================================================

fn app(config: &ServerConfig) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route_service("/", ServeFile::new(config.static_dir.join("index.html")))
        .route("/validate-card", post(validate_card))
        .route("/validate-card/batch", post(validate_batch))
        .route("/test", get(smoke_test))
        .route("/health", get(health))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::parse();
    let addr = config.addr();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}:{}/swagger-ui/", "localhost", config.port);
    tracing::debug!(static_dir = %config.static_dir.display(), "serving root page");

    axum::serve(listener, app(&config)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_config() -> ServerConfig {
        ServerConfig::parse_from([
            "cardcheck-server",
            "--static-dir",
            concat!(env!("CARGO_MANIFEST_DIR"), "/static"),
        ])
    }

    async fn get_body(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app(&test_config())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn post_json(uri: &str, body: &'static str) -> (StatusCode, Vec<u8>) {
        let response = app(&test_config())
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[test]
    fn test_config_defaults() {
        let config = ServerConfig::parse_from(["cardcheck-server"]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
        assert_eq!(config.static_dir, PathBuf::from("static"));
    }

    #[tokio::test]
    async fn test_validate_card_rejects_bad_number() {
        let (status, body) = post_json(
            "/validate-card",
            r#"{"card_number": "1234", "cvv": "123", "expiry": "12/99", "name": "John Doe"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let response: ValidationResponse = serde_json::from_slice(&body).unwrap();
        assert!(!response.card_number_valid);
        assert_eq!(response.issuer, None);
        assert!(response.cvv_valid);
        assert!(response.expiry_valid);
        assert!(!response.overall_status);
        assert_eq!(response.errors, vec!["Invalid card number format."]);
    }

    #[tokio::test]
    async fn test_validate_card_missing_keys_are_empty() {
        let (status, body) = post_json("/validate-card", r#"{"card_number": "4111111111111111"}"#).await;
        assert_eq!(status, StatusCode::OK);

        let response: ValidationResponse = serde_json::from_slice(&body).unwrap();
        assert!(response.card_number_valid);
        assert_eq!(response.issuer.as_deref(), Some("Visa"));
        assert_eq!(response.errors.len(), 3);
    }

    #[tokio::test]
    async fn test_validate_card_malformed_json() {
        let (status, body) = post_json("/validate-card", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(!error.error.is_empty());
    }

    #[tokio::test]
    async fn test_validate_card_non_string_field() {
        let (status, _) = post_json("/validate-card", r#"{"cvv": 123}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_validate_batch() {
        let (status, body) = post_json(
            "/validate-card/batch",
            r#"{"submissions": [
                {"card_number": "4111111111111111", "cvv": "123", "expiry": "12/99", "name": "John Doe"},
                {"card_number": "9999999999999"}
            ]}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let response: BatchValidateResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response.results.len(), 2);
        assert!(response.results[0].overall_status);
        assert_eq!(response.results[1].issuer.as_deref(), Some("Unknown"));
        assert_eq!(
            response.summary,
            BatchSummaryResponse {
                total: 2,
                valid: 1,
                invalid: 1
            }
        );
    }

    #[tokio::test]
    async fn test_smoke_endpoint_uses_sample() {
        let (status, body) = get_body("/test").await;
        assert_eq!(status, StatusCode::OK);

        let response: ValidationResponse = serde_json::from_slice(&body).unwrap();
        assert!(response.card_number_valid);
        assert_eq!(response.issuer.as_deref(), Some("Visa"));
        assert!(response.cvv_valid);
        assert!(response.name_valid);
    }

    #[tokio::test]
    async fn test_smoke_endpoint_checks_expiry_against_clock() {
        let (_, body) = get_body("/test").await;
        let response: ValidationResponse = serde_json::from_slice(&body).unwrap();

        // The sample expires 12/25; the handler reads the local clock.
        let expected = card_input_validator::expiry::is_valid_expiry("12/25");
        assert_eq!(response.expiry_valid, expected);
        assert_eq!(response.overall_status, expected);
        if expected {
            assert!(response.errors.is_empty());
        } else {
            assert_eq!(response.errors, vec!["Invalid or expired expiry date."]);
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_body("/health").await;
        assert_eq!(status, StatusCode::OK);

        let health: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(health["status"], "ok");
        assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_root_serves_form_page() {
        let response = app(&test_config())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_owned();
        assert!(content_type.starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("<title>Card Input Validator</title>"));
        assert!(page.contains("/validate-card"));
    }

    #[tokio::test]
    async fn test_root_missing_static_dir_is_not_found() {
        let config = ServerConfig::parse_from(["cardcheck-server", "--static-dir", "no-such-dir"]);
        let response = app(&config)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_response_from_report() {
        let report = CardSubmission::sample()
            .validate_at(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let response = ValidationResponse::from(report);
        assert_eq!(response.issuer.as_deref(), Some("Visa"));
        assert!(response.overall_status);
        assert!(response.errors.is_empty());
    }
}
