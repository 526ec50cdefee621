// src/models/sales.rs

// Registros de vendas recebidos da API de backend.
// Todos os campos são opcionais: o backend é a autoridade e o agregador
// apenas ignora o que não puder usar.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::common::lenient;

// --- 1. Item de Venda ---
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SaleItem {
    #[serde(default, deserialize_with = "lenient::string")]
    pub product_uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub quantity: Option<i64>,
    // Confiamos no subtotal enviado, nunca recalculamos quantidade × preço
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub subtotal: Option<Decimal>,
}

/// Item pronto para as visões de produto.
#[derive(Debug, Clone, Copy)]
pub struct ItemLine<'a> {
    // Itens sem produto caem todos no id vazio
    pub product_id: &'a str,
    pub product_name: Option<&'a str>,
    pub quantity: i64,
    pub subtotal: Decimal,
}

impl SaleItem {
    /// Quantidade ausente conta como 0 e subtotal ausente como gasto zero.
    /// Um item sem nenhum dos dois não tem o que somar.
    pub fn line(&self) -> Option<ItemLine<'_>> {
        if self.quantity.is_none() && self.subtotal.is_none() {
            return None;
        }
        Some(ItemLine {
            product_id: self.product_uuid.as_deref().unwrap_or_default(),
            product_name: self.product_name.as_deref(),
            quantity: self.quantity.unwrap_or(0),
            subtotal: self.subtotal.unwrap_or(Decimal::ZERO),
        })
    }
}

// --- 2. Venda ---
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Sale {
    #[serde(default, deserialize_with = "lenient::string")]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub items: Vec<SaleItem>,
}

impl Sale {
    pub fn item_lines(&self) -> impl Iterator<Item = ItemLine<'_>> {
        self.items.iter().filter_map(SaleItem::line)
    }
}

// --- 3. Cliente ---
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomerRef {
    #[serde(default, deserialize_with = "lenient::string")]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
}

// --- 4. Resumo de Vendas por Cliente ---
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomerSummary {
    #[serde(default, deserialize_with = "lenient::object")]
    pub customer: Option<CustomerRef>,
    // Total do mês selecionado
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_customer_monthly_sale: Option<Decimal>,
    // Total histórico
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_spent: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub sales: Vec<Sale>,
}

impl CustomerSummary {
    /// Total do mês; se ausente, cai para o total histórico.
    pub fn spending(&self) -> Option<Decimal> {
        self.total_customer_monthly_sale.or(self.total_spent)
    }

    /// Nome do cliente, apenas se não estiver vazio.
    pub fn display_name(&self) -> Option<&str> {
        self.customer
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }

    pub fn item_lines(&self) -> impl Iterator<Item = ItemLine<'_>> {
        self.sales.iter().flat_map(Sale::item_lines)
    }

    /// Soma de todas as quantidades informadas, com ou sem produto.
    pub fn total_quantity(&self) -> i64 {
        self.item_lines()
            .fold(0i64, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Lista de resumos a partir do JSON cru; elementos inválidos são descartados.
    pub fn list_from_value(value: Value) -> Vec<Self> {
        lenient::list_from_value(value)
    }
}

// --- 5. Relatório Mensal ---
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySalesReport {
    // O backend manda esse valor como string ("1234.50")
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_monthly_sales: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub number_of_sales: Option<u64>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub sales: Vec<Sale>,
}

impl MonthlySalesReport {
    /// Um corpo que não é objeto vira relatório vazio.
    pub fn from_value(value: Value) -> Self {
        lenient::record_from_value(value).unwrap_or_default()
    }
}
