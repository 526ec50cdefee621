// src/models/dashboard.rs

use serde::Serialize;
use rust_decimal::Decimal;
use utoipa::ToSchema;

use crate::models::period::PeriodView;

// 1. Indicadores do Mês (Os Cards do Topo)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_sales: Decimal,
    pub total_customers: usize,
    pub total_items: i64,
    pub total_transactions: u64,
    pub avg_order_value: Decimal,
}

// 2. Gráfico de Vendas Diárias (dia do mês)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailySalesEntry {
    #[schema(example = 14)]
    pub day: u32,
    pub total: Decimal,
    pub count: u32,
}

// 3. Pizza de Gastos por Cliente
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerShareEntry {
    pub name: String,
    pub value: Decimal,
}

// 4. Top Produtos por Receita
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopProductEntry {
    pub product_id: String,
    pub name: String,
    pub total_sales: Decimal,
    pub total_quantity: i64,
}

// 5. Produtos comprados por Cliente
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductBreakdownEntry {
    pub product_id: String,
    pub name: String,
    pub total_quantity: i64,
    pub total_spent: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBreakdownEntry {
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub total_spent: Decimal,
    pub order_count: usize,
    pub products: Vec<ProductBreakdownEntry>,
}

// Tudo o que a tela do painel precisa em uma resposta só
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub period: PeriodView,
    pub customer_id: String,
    pub stats: SummaryStats,
    pub daily_sales: Vec<DailySalesEntry>,
    pub customer_share: Vec<CustomerShareEntry>,
    pub top_products: Vec<TopProductEntry>,
    pub customer_breakdown: Vec<CustomerBreakdownEntry>,
}
