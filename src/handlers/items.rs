// src/handlers/items.rs

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::items::{ItemPayload, ItemUpdatePayload},
};

// ---
// Handler: get_items
// ---
#[utoipa::path(
    get,
    path = "/api/getItems",
    tag = "Items",
    responses(
        (status = 200, description = "Lista de itens", body = serde_json::Value),
        (status = 500, description = "Failed to fetch data from API")
    )
)]
pub async fn get_items(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state
        .backend
        .get(&["items"])
        .await
        .map_err(AppError::upstream("Failed to fetch data from API"))?;

    Ok((StatusCode::OK, Json(data)))
}

// ---
// Handler: get_item
// ---
#[utoipa::path(
    get,
    path = "/api/items/{uuid}",
    tag = "Items",
    params(("uuid" = String, Path, description = "ID do item")),
    responses(
        (status = 200, description = "Item encontrado", body = serde_json::Value),
        (status = 500, description = "Failed to fetch item")
    )
)]
pub async fn get_item(
    State(app_state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state
        .backend
        .get(&["items", &uuid])
        .await
        .map_err(AppError::upstream("Failed to fetch item"))?;

    Ok((StatusCode::OK, Json(data)))
}

// ---
// Handler: update_item
// ---
#[utoipa::path(
    put,
    path = "/api/items/{uuid}",
    tag = "Items",
    params(("uuid" = String, Path, description = "ID do item")),
    request_body = ItemUpdatePayload,
    responses(
        (status = 200, description = "Item atualizado", body = serde_json::Value),
        (status = 400, description = "Payload inválido"),
        (status = 500, description = "Failed to update item")
    )
)]
pub async fn update_item(
    State(app_state): State<AppState>,
    Path(uuid): Path<String>,
    payload: Result<Json<ItemUpdatePayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let data = app_state
        .backend
        .put(&["items", &uuid], &payload)
        .await
        .map_err(AppError::upstream("Failed to update item"))?;

    Ok((StatusCode::OK, Json(data)))
}

// ---
// Handler: delete_item
// ---
#[utoipa::path(
    delete,
    path = "/api/items/{uuid}",
    tag = "Items",
    params(("uuid" = String, Path, description = "ID do item")),
    responses(
        (status = 200, description = "Item removido", body = serde_json::Value),
        (status = 500, description = "Failed to delete item")
    )
)]
pub async fn delete_item(
    State(app_state): State<AppState>,
    Path(uuid): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state
        .backend
        .delete(&["items", &uuid])
        .await
        .map_err(AppError::upstream("Failed to delete item"))?;

    Ok((StatusCode::OK, Json(data)))
}

// ---
// Handler: add_item
// ---
#[utoipa::path(
    post,
    path = "/api/addItem",
    tag = "Items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item criado", body = serde_json::Value),
        (status = 400, description = "Payload inválido"),
        (status = 500, description = "Failed to add item")
    )
)]
pub async fn add_item(
    State(app_state): State<AppState>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let new_item = app_state
        .backend
        .post(&["item"], &payload)
        .await
        .map_err(AppError::upstream("Failed to add item"))?;

    Ok((StatusCode::CREATED, Json(new_item)))
}

// ---
// Handler: get_all_products
// ---
#[utoipa::path(
    get,
    path = "/api/products/allProducts",
    tag = "Items",
    responses(
        (status = 200, description = "Catálogo de produtos", body = serde_json::Value),
        (status = 500, description = "Failed to fetch item")
    )
)]
pub async fn get_all_products(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let data = app_state
        .backend
        .get(&["products"])
        .await
        .map_err(AppError::upstream("Failed to fetch item"))?;

    Ok((StatusCode::OK, Json(data)))
}
