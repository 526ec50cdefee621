// src/handlers/sales.rs

// Repasses simples para a API de backend: o JSON volta sem alterações.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{common::error::AppError, config::AppState};

// GET /api/sales/allSales
#[utoipa::path(
    get,
    path = "/api/sales/allSales",
    tag = "Sales",
    responses(
        (status = 200, description = "Todas as vendas", body = serde_json::Value),
        (status = 500, description = "Failed to fetch sales data")
    )
)]
pub async fn get_all_sales(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state
        .backend
        .get(&["sales", "all"])
        .await
        .map_err(AppError::upstream("Failed to fetch sales data"))?;

    Ok((StatusCode::OK, Json(data)))
}

// GET /api/sales/{customer_uuid}
#[utoipa::path(
    get,
    path = "/api/sales/{customer_uuid}",
    tag = "Sales",
    params(
        ("customer_uuid" = String, Path, description = "ID do cliente")
    ),
    responses(
        (status = 200, description = "Vendas do cliente", body = serde_json::Value),
        (status = 500, description = "Failed to fetch sales data")
    )
)]
pub async fn get_customer_sales(
    State(app_state): State<AppState>,
    Path(customer_uuid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state
        .backend
        .get(&["sales", "customer", &customer_uuid])
        .await
        .map_err(AppError::upstream("Failed to fetch sales data"))?;

    Ok((StatusCode::OK, Json(data)))
}

// GET /api/customers/sales/{year}/{month}
#[utoipa::path(
    get,
    path = "/api/customers/sales/{year}/{month}",
    tag = "Sales",
    params(
        ("year" = String, Path, description = "Ano"),
        ("month" = String, Path, description = "Mês (1-12)")
    ),
    responses(
        (status = 200, description = "Resumo de vendas por cliente no mês", body = serde_json::Value),
        (status = 500, description = "Failed to fetch customer sales data")
    )
)]
pub async fn get_customers_sales_by_month(
    State(app_state): State<AppState>,
    Path((year, month)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state
        .backend
        .get(&["customers", "sales", &year, &month])
        .await
        .map_err(AppError::upstream("Failed to fetch customer sales data"))?;

    Ok((StatusCode::OK, Json(data)))
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    use crate::test_utils::{send, spawn_upstream, test_app};

    #[tokio::test]
    async fn all_sales_passes_the_upstream_json_through() {
        let upstream = Router::new().route(
            "/sales/all",
            get(|| async { Json(json!([{ "uuid": "s-1", "total_amount": "10.00" }])) }),
        );
        let app = test_app(&spawn_upstream(upstream).await);

        let (status, body) = send(app, "GET", "/api/sales/allSales", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "uuid": "s-1", "total_amount": "10.00" }]));
    }

    #[tokio::test]
    async fn customer_sales_forwards_the_customer_id() {
        let upstream = Router::new().route(
            "/sales/customer/{id}",
            get(|axum::extract::Path(id): axum::extract::Path<String>| async move {
                Json(json!({ "customer": id }))
            }),
        );
        let app = test_app(&spawn_upstream(upstream).await);

        let (status, body) = send(app, "GET", "/api/sales/c-42", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "customer": "c-42" }));
    }

    #[tokio::test]
    async fn upstream_error_becomes_a_fixed_500() {
        let upstream = Router::new().route(
            "/customers/sales/{year}/{month}",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
        let app = test_app(&spawn_upstream(upstream).await);

        let (status, body) = send(app, "GET", "/api/customers/sales/2025/3", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch customer sales data" }));
    }
}
