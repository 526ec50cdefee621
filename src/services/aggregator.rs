// src/services/aggregator.rs

//! Transformações puras sobre os registros de vendas já carregados.
//!
//! Nenhuma função aqui faz I/O ou guarda estado: a mesma entrada sempre gera
//! a mesma saída. Registros malformados são ignorados, nunca viram erro.
//! Somas de dinheiro usam `checked_add`: o que estouraria o `Decimal` fica de fora.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use rust_decimal::Decimal;

use crate::models::{
    dashboard::{
        CustomerBreakdownEntry, CustomerShareEntry, DailySalesEntry, DashboardView,
        ProductBreakdownEntry, SummaryStats, TopProductEntry,
    },
    period::{Period, PeriodView},
    sales::{CustomerSummary, MonthlySalesReport, ItemLine, Sale},
};

pub const DEFAULT_TOP_PRODUCTS: usize = 5;

// Acumulador por produto, na ordem em que cada produto aparece pela primeira vez
#[derive(Default)]
struct ProductTally {
    order: Vec<ProductTotals>,
    index: HashMap<String, usize>,
}

struct ProductTotals {
    product_id: String,
    name: String,
    quantity: i64,
    amount: Decimal,
}

impl ProductTally {
    fn add(&mut self, item: ItemLine<'_>) {
        let position = match self.index.get(item.product_id) {
            Some(&position) => position,
            None => {
                self.order.push(ProductTotals {
                    product_id: item.product_id.to_string(),
                    name: String::new(),
                    quantity: 0,
                    amount: Decimal::ZERO,
                });
                self.index.insert(item.product_id.to_string(), self.order.len() - 1);
                self.order.len() - 1
            }
        };

        let totals = &mut self.order[position];
        let Some(amount) = totals.amount.checked_add(item.subtotal) else {
            return;
        };
        if totals.name.is_empty() {
            if let Some(name) = item.product_name {
                totals.name = name.to_string();
            }
        }
        totals.quantity = totals.quantity.saturating_add(item.quantity);
        totals.amount = amount;
    }

    fn into_totals(self) -> Vec<ProductTotals> {
        self.order
    }
}

// --- DAILY TOTALS ---
pub fn daily_totals(sales: &[Sale]) -> Vec<DailySalesEntry> {
    let mut by_day: BTreeMap<u32, DailySalesEntry> = BTreeMap::new();

    for sale in sales {
        let (Some(date), Some(amount)) = (sale.date, sale.total_amount) else {
            continue;
        };

        let day = date.day();
        let entry = by_day.entry(day).or_insert(DailySalesEntry {
            day,
            total: Decimal::ZERO,
            count: 0,
        });
        let Some(total) = entry.total.checked_add(amount) else {
            continue;
        };
        entry.total = total;
        entry.count += 1;
    }

    by_day.into_values().collect()
}

// --- CUSTOMER SHARE ---
pub fn customer_share(customers: &[CustomerSummary]) -> Vec<CustomerShareEntry> {
    customers
        .iter()
        .filter_map(|customer| {
            Some(CustomerShareEntry {
                name: customer.display_name()?.to_string(),
                value: customer.spending()?,
            })
        })
        .collect()
}

// --- TOP PRODUCTS ---
pub fn top_products(customers: &[CustomerSummary], limit: usize) -> Vec<TopProductEntry> {
    let mut tally = ProductTally::default();
    customers
        .iter()
        .flat_map(CustomerSummary::item_lines)
        .for_each(|item| tally.add(item));

    let mut products = tally.into_totals();
    // sort_by é estável: empates ficam na ordem de aparição
    products.sort_by(|a, b| b.amount.cmp(&a.amount));
    products.truncate(limit);

    products
        .into_iter()
        .map(|p| TopProductEntry {
            product_id: p.product_id,
            name: p.name,
            total_sales: p.amount,
            total_quantity: p.quantity,
        })
        .collect()
}

// --- CUSTOMER PRODUCT BREAKDOWN ---
pub fn customer_product_breakdown(customers: &[CustomerSummary]) -> Vec<CustomerBreakdownEntry> {
    customers
        .iter()
        .map(|customer| {
            let mut tally = ProductTally::default();
            customer.item_lines().for_each(|item| tally.add(item));

            let products = tally
                .into_totals()
                .into_iter()
                .map(|p| ProductBreakdownEntry {
                    product_id: p.product_id,
                    name: p.name,
                    total_quantity: p.quantity,
                    total_spent: p.amount,
                })
                .collect();

            let identity = customer.customer.as_ref();
            CustomerBreakdownEntry {
                customer_id: identity.and_then(|c| c.uuid.clone()),
                customer_name: identity.and_then(|c| c.name.clone()),
                total_spent: customer.spending().unwrap_or(Decimal::ZERO),
                order_count: customer.sales.len(),
                products,
            }
        })
        .collect()
}

// --- SUMMARY STATS ---
pub fn summary_stats(
    monthly: Option<&MonthlySalesReport>,
    customers: &[CustomerSummary],
) -> SummaryStats {
    // O total do relatório mensal é a fonte oficial quando existe
    let authoritative = monthly.and_then(|report| {
        report
            .total_monthly_sales
            .map(|total| (total, report.number_of_sales.unwrap_or(0)))
    });

    let (total_sales, total_transactions) = authoritative.unwrap_or_else(|| {
        customers.iter().fold((Decimal::ZERO, 0u64), |(sales, count), customer| {
            let spent = customer.spending().unwrap_or(Decimal::ZERO);
            (
                sales.checked_add(spent).unwrap_or(sales),
                count.saturating_add(customer.sales.len() as u64),
            )
        })
    });

    // Sempre recalculado a partir dos clientes, mesmo com total oficial
    let total_items = customers
        .iter()
        .map(CustomerSummary::total_quantity)
        .fold(0i64, i64::saturating_add);

    let avg_order_value = if total_transactions > 0 {
        total_sales
            .checked_div(Decimal::from(total_transactions))
            .unwrap_or(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };

    SummaryStats {
        total_sales,
        total_customers: customers.len(),
        total_items,
        total_transactions,
        avg_order_value,
    }
}

// --- DASHBOARD VIEW ---
pub fn dashboard_view(
    period: Period,
    customer_id: &str,
    monthly: Option<&MonthlySalesReport>,
    customers: &[CustomerSummary],
    limit: usize,
) -> DashboardView {
    DashboardView {
        period: PeriodView::from(period),
        customer_id: customer_id.to_string(),
        stats: summary_stats(monthly, customers),
        daily_sales: monthly.map(|report| daily_totals(&report.sales)).unwrap_or_default(),
        customer_share: customer_share(customers),
        top_products: top_products(customers, limit),
        customer_breakdown: customer_product_breakdown(customers),
    }
}
