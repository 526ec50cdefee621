//src/main.rs

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod clients;
mod common;
mod config;
mod docs;
mod handlers;
mod models;
mod services;
#[cfg(test)]
mod test_utils;

use crate::config::{AppState, Config};
use crate::docs::ApiDoc;

pub fn build_router(app_state: AppState) -> Router {
    let sales_routes = Router::new()
        .route("/allSales", get(handlers::sales::get_all_sales))
        .route("/{customer_uuid}", get(handlers::sales::get_customer_sales));

    let report_routes = Router::new()
        .route(
            "/month/{year}/{month}/monthly-sales",
            get(handlers::reports::get_monthly_sales),
        )
        .route(
            "/month/{year}/{month}/{customer_id}/customer-monthly-sales",
            get(handlers::reports::get_customer_monthly_sales),
        );

    // Combina tudo no router principal
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        // Itens e produtos
        .route("/api/getItems", get(handlers::items::get_items))
        .route("/api/addItem", post(handlers::items::add_item))
        .route(
            "/api/items/{uuid}",
            get(handlers::items::get_item)
                .put(handlers::items::update_item)
                .delete(handlers::items::delete_item),
        )
        .route("/api/products/allProducts", get(handlers::items::get_all_products))
        .route(
            "/api/customers/sales/{year}/{month}",
            get(handlers::sales::get_customers_sales_by_month),
        )
        // Painel agregado
        .route("/api/dashboard", get(handlers::dashboard::get_current_dashboard))
        .route("/api/dashboard/{year}/{month}", get(handlers::dashboard::get_dashboard))
        .nest("/api/sales", sales_routes)
        .nest("/api/reports", report_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let config = Config::from_env()?;
    let app_state = AppState::new(&config)?;

    let app = build_router(app_state);

    // Inicia o servidor
    let listener = TcpListener::bind(config.server_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
