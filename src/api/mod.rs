//! API handlers for the admin reporting and lender endpoints

pub mod health;
pub mod lenders;
pub mod openapi;
pub mod reports;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
    routing::get,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// Header carrying the shared API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Extractor guarding routes behind the configured API key
pub struct ApiKey;

#[async_trait]
impl FromRequestParts<AppState> for ApiKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let provided = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::Authentication("API key is required".to_string()))?;

        if provided != state.config.auth.api_key {
            return Err(AppError::Authentication("Invalid API key".to_string()));
        }

        Ok(ApiKey)
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Admin reports
        .route("/admin/reports/users", get(reports::get_users_report))
        .route("/admin/reports/loans", get(reports::get_loans_report))
        .route("/admin/reports/transactions", get(reports::get_transactions_report))
        .route("/admin/reports/revenue", get(reports::get_revenue_report))
        .route("/admin/analytics/dashboard", get(reports::get_dashboard_analytics))
        // Lenders
        .route("/lender/:id/dashboard", get(lenders::get_dashboard_stats))
        .route("/lender/:id/offers", get(lenders::list_offers))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(openapi::create_openapi_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
