//! Lender dashboard endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{report::LenderDashboardStats, LoanOfferRecord},
    AppState,
};

use super::ApiKey;

/// Offer totals for a lender
#[utoipa::path(
    get,
    path = "/lender/{id}/dashboard",
    tag = "lenders",
    security(("api_key" = [])),
    params(("id" = String, Path, description = "Lender ID")),
    responses(
        (status = 200, description = "Lender dashboard", body = LenderDashboardStats),
        (status = 401, description = "Missing or invalid API key", body = crate::error::ErrorResponse),
        (status = 404, description = "Lender not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    _key: ApiKey,
    Path(id): Path<String>,
) -> AppResult<Json<LenderDashboardStats>> {
    let stats = state.services.lenders.get_dashboard_stats(&id).await?;
    Ok(Json(stats))
}

/// Loan offers published by a lender
#[utoipa::path(
    get,
    path = "/lender/{id}/offers",
    tag = "lenders",
    security(("api_key" = [])),
    params(("id" = String, Path, description = "Lender ID")),
    responses(
        (status = 200, description = "Lender offers, empty for an unknown lender", body = Vec<LoanOfferRecord>),
        (status = 401, description = "Missing or invalid API key", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_offers(
    State(state): State<AppState>,
    _key: ApiKey,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<LoanOfferRecord>>> {
    let offers = state.services.lenders.list_offers(&id).await?;
    Ok(Json(offers))
}
