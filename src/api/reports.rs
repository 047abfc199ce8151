//! Admin report endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::report::{
        DashboardAnalytics, LoanReport, ReportEnvelope, RevenueReport, TransactionReport,
        UserReport,
    },
    AppState,
};

use super::ApiKey;

/// User population report
#[utoipa::path(
    get,
    path = "/admin/reports/users",
    tag = "reports",
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Users report", body = crate::models::report::UserReportResponse),
        (status = 401, description = "Missing or invalid API key", body = crate::error::ErrorResponse),
        (status = 500, description = "Report could not be generated", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_users_report(
    State(state): State<AppState>,
    _key: ApiKey,
) -> AppResult<Json<ReportEnvelope<UserReport>>> {
    let report = state.services.reports.get_users_report().await?;
    Ok(Json(ReportEnvelope::ok(report)))
}

/// Loan advertisement report
#[utoipa::path(
    get,
    path = "/admin/reports/loans",
    tag = "reports",
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Loans report", body = crate::models::report::LoanReportResponse),
        (status = 401, description = "Missing or invalid API key", body = crate::error::ErrorResponse),
        (status = 500, description = "Report could not be generated", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_loans_report(
    State(state): State<AppState>,
    _key: ApiKey,
) -> AppResult<Json<ReportEnvelope<LoanReport>>> {
    let report = state.services.reports.get_loans_report().await?;
    Ok(Json(ReportEnvelope::ok(report)))
}

/// Transaction volume report
#[utoipa::path(
    get,
    path = "/admin/reports/transactions",
    tag = "reports",
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Transactions report", body = crate::models::report::TransactionReportResponse),
        (status = 401, description = "Missing or invalid API key", body = crate::error::ErrorResponse),
        (status = 500, description = "Report could not be generated", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_transactions_report(
    State(state): State<AppState>,
    _key: ApiKey,
) -> AppResult<Json<ReportEnvelope<TransactionReport>>> {
    let report = state.services.reports.get_transactions_report().await?;
    Ok(Json(ReportEnvelope::ok(report)))
}

/// Platform fee revenue report
#[utoipa::path(
    get,
    path = "/admin/reports/revenue",
    tag = "reports",
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Revenue report", body = crate::models::report::RevenueReportResponse),
        (status = 401, description = "Missing or invalid API key", body = crate::error::ErrorResponse),
        (status = 500, description = "Report could not be generated", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_revenue_report(
    State(state): State<AppState>,
    _key: ApiKey,
) -> AppResult<Json<ReportEnvelope<RevenueReport>>> {
    let report = state.services.reports.get_revenue_report().await?;
    Ok(Json(ReportEnvelope::ok(report)))
}

/// Dashboard snapshot with alerts
#[utoipa::path(
    get,
    path = "/admin/analytics/dashboard",
    tag = "reports",
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Dashboard analytics", body = crate::models::report::DashboardAnalyticsResponse),
        (status = 401, description = "Missing or invalid API key", body = crate::error::ErrorResponse),
        (status = 500, description = "Report could not be generated", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_dashboard_analytics(
    State(state): State<AppState>,
    _key: ApiKey,
) -> AppResult<Json<ReportEnvelope<DashboardAnalytics>>> {
    let analytics = state.services.reports.get_dashboard_analytics().await?;
    Ok(Json(ReportEnvelope::ok(analytics)))
}
