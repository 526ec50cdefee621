// src/handlers/reports.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{common::error::AppError, config::AppState};

// GET /api/reports/month/{year}/{month}/monthly-sales
#[utoipa::path(
    get,
    path = "/api/reports/month/{year}/{month}/monthly-sales",
    tag = "Reports",
    params(
        ("year" = String, Path, description = "Ano"),
        ("month" = String, Path, description = "Mês (1-12)")
    ),
    responses(
        (status = 200, description = "Relatório mensal: totalMonthlySales, numberOfSales, sales", body = serde_json::Value),
        (status = 500, description = "Failed to fetch sales data")
    )
)]
pub async fn get_monthly_sales(
    State(app_state): State<AppState>,
    Path((year, month)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let report = app_state
        .backend
        .get(&["reports", "month", &year, &month])
        .await
        .map_err(AppError::upstream("Failed to fetch sales data"))?;

    Ok((StatusCode::OK, Json(report)))
}

// GET /api/reports/month/{year}/{month}/{customer_id}/customer-monthly-sales
#[utoipa::path(
    get,
    path = "/api/reports/month/{year}/{month}/{customer_id}/customer-monthly-sales",
    tag = "Reports",
    params(
        ("year" = String, Path, description = "Ano"),
        ("month" = String, Path, description = "Mês (1-12)"),
        ("customer_id" = String, Path, description = "ID do cliente")
    ),
    responses(
        (status = 200, description = "Resumo de vendas por cliente", body = serde_json::Value),
        (status = 500, description = "Failed to fetch sales data")
    )
)]
pub async fn get_customer_monthly_sales(
    State(app_state): State<AppState>,
    Path((year, month, customer_id)): Path<(String, String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state
        .backend
        .get(&["reports", "month", &year, &month, &customer_id])
        .await
        .map_err(AppError::upstream("Failed to fetch sales data"))?;

    Ok((StatusCode::OK, Json(summary)))
}

#[cfg(test)]
mod tests {
    use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    use crate::test_utils::{send, spawn_upstream, test_app};

    fn upstream() -> Router {
        Router::new()
            .route(
                "/reports/month/{year}/{month}",
                get(|Path((year, month)): Path<(String, String)>| async move {
                    Json(json!({ "totalMonthlySales": "10.00", "numberOfSales": 1, "period": format!("{year}-{month}") }))
                }),
            )
            .route(
                "/reports/month/{year}/{month}/{customer}",
                get(|| async { "<html>not json</html>" }),
            )
    }

    #[tokio::test]
    async fn monthly_sales_report_is_forwarded() {
        let app = test_app(&spawn_upstream(upstream()).await);
        let (status, body) = send(app, "GET", "/api/reports/month/2025/3/monthly-sales", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period"], "2025-3");
        assert_eq!(body["totalMonthlySales"], "10.00");
    }

    #[tokio::test]
    async fn non_json_upstream_body_is_a_failure() {
        let app = test_app(&spawn_upstream(upstream()).await);
        let (status, body) =
            send(app, "GET", "/api/reports/month/2025/3/1/customer-monthly-sales", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch sales data" }));
    }
}
