// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Sales ---
        handlers::sales::get_all_sales,
        handlers::sales::get_customer_sales,
        handlers::sales::get_customers_sales_by_month,

        // --- Items ---
        handlers::items::get_items,
        handlers::items::get_item,
        handlers::items::update_item,
        handlers::items::delete_item,
        handlers::items::add_item,
        handlers::items::get_all_products,

        // --- Reports ---
        handlers::reports::get_monthly_sales,
        handlers::reports::get_customer_monthly_sales,

        // --- Dashboard ---
        handlers::dashboard::get_current_dashboard,
        handlers::dashboard::get_dashboard,
    ),
    components(
        schemas(
            // --- DASHBOARD ---
            models::dashboard::DashboardView,
            models::dashboard::SummaryStats,
            models::dashboard::DailySalesEntry,
            models::dashboard::CustomerShareEntry,
            models::dashboard::TopProductEntry,
            models::dashboard::CustomerBreakdownEntry,
            models::dashboard::ProductBreakdownEntry,

            // --- Period ---
            models::period::Period,
            models::period::PeriodView,

            // --- Payloads ---
            models::items::ItemPayload,
            models::items::ItemUpdatePayload,
        )
    ),
    tags(
        (name = "Sales", description = "Vendas (repasse da API de backend)"),
        (name = "Items", description = "Itens de venda e produtos (repasse da API de backend)"),
        (name = "Reports", description = "Relatórios mensais (repasse da API de backend)"),
        (name = "Dashboard", description = "Indicadores e Gráficos Gerenciais")
    )
)]
pub struct ApiDoc;
