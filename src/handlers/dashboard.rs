// src/handlers/dashboard.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::{dashboard::DashboardView, period::Period},
    services::aggregator::DEFAULT_TOP_PRODUCTS,
};

fn default_customer() -> String {
    "1".to_string()
}

fn default_limit() -> usize {
    DEFAULT_TOP_PRODUCTS
}

#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// Cliente usado no resumo por cliente
    #[serde(default = "default_customer")]
    #[validate(length(min = 1, message = "O cliente não pode ser vazio."))]
    pub customer: String,

    /// Quantidade de produtos no ranking
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 50, message = "O limite deve estar entre 1 e 50."))]
    pub limit: usize,
}

// GET /api/dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Painel do mês corrente", body = DashboardView),
        (status = 400, description = "Parâmetros inválidos"),
        (status = 500, description = "Falha ao buscar dados na API de backend")
    )
)]
pub async fn get_current_dashboard(
    State(app_state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let view = app_state
        .dashboard_service
        .get_dashboard(Period::current(), &query.customer, query.limit)
        .await?;

    Ok((StatusCode::OK, Json(view)))
}

// GET /api/dashboard/{year}/{month}
#[utoipa::path(
    get,
    path = "/api/dashboard/{year}/{month}",
    tag = "Dashboard",
    params(
        ("year" = i32, Path, description = "Ano"),
        ("month" = u32, Path, description = "Mês (1-12)"),
        DashboardQuery
    ),
    responses(
        (status = 200, description = "Vendas diárias, gastos por cliente, top produtos e indicadores do mês", body = DashboardView),
        (status = 400, description = "Período ou parâmetros inválidos"),
        (status = 500, description = "Falha ao buscar dados na API de backend")
    )
)]
pub async fn get_dashboard(
    State(app_state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let period = Period::new(year, month)?;
    query.validate()?;

    let view = app_state
        .dashboard_service
        .get_dashboard(period, &query.customer, query.limit)
        .await?;

    Ok((StatusCode::OK, Json(view)))
}
