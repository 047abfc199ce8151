//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, lenders, reports, API_KEY_HEADER};
use crate::models::report;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lending Admin API",
        version = "0.3.0",
        description = "Reporting and analytics for the P2P lending admin backend"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Reports
        reports::get_users_report,
        reports::get_loans_report,
        reports::get_transactions_report,
        reports::get_revenue_report,
        reports::get_dashboard_analytics,
        // Lenders
        lenders::get_dashboard_stats,
        lenders::list_offers,
    ),
    components(
        schemas(
            // Reports
            report::UserReportResponse,
            report::LoanReportResponse,
            report::TransactionReportResponse,
            report::RevenueReportResponse,
            report::DashboardAnalyticsResponse,
            report::UserReport,
            report::UsersByRole,
            report::UsersByStatus,
            report::LoanReport,
            report::LoansByStatus,
            report::TransactionReport,
            report::RevenueReport,
            report::MonthlyRevenue,
            report::DashboardAnalytics,
            report::DashboardOverview,
            report::RecentActivity,
            report::Trends,
            report::Alert,
            report::AlertKind,
            // Lenders
            report::LenderDashboardStats,
            crate::models::LoanOfferRecord,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "reports", description = "Admin reports and dashboard analytics"),
        (name = "lenders", description = "Lender dashboard")
    )
)]
pub struct ApiDoc;

/// Registers the `x-api-key` header scheme
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(API_KEY_HEADER))),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
