// src/services/dashboard_service.rs

use crate::{
    clients::BackendApi,
    common::error::AppError,
    models::{
        dashboard::DashboardView,
        period::Period,
        sales::{CustomerSummary, MonthlySalesReport},
    },
    services::aggregator,
};

#[derive(Clone)]
pub struct DashboardService {
    backend: BackendApi,
}

impl DashboardService {
    pub fn new(backend: BackendApi) -> Self {
        Self { backend }
    }

    pub async fn get_monthly_report(&self, period: Period) -> Result<MonthlySalesReport, AppError> {
        let (year, month) = (period.year.to_string(), period.month.to_string());
        let raw = self
            .backend
            .get(&["reports", "month", &year, &month])
            .await
            .map_err(AppError::upstream("Failed to fetch sales data"))?;

        Ok(MonthlySalesReport::from_value(raw))
    }

    pub async fn get_customer_summary(
        &self,
        period: Period,
        customer_id: &str,
    ) -> Result<Vec<CustomerSummary>, AppError> {
        let (year, month) = (period.year.to_string(), period.month.to_string());
        let raw = self
            .backend
            .get(&["reports", "month", &year, &month, customer_id])
            .await
            .map_err(AppError::upstream("Failed to fetch customer summary"))?;

        Ok(CustomerSummary::list_from_value(raw))
    }

    // As duas consultas são independentes, então rodam juntas
    pub async fn get_dashboard(
        &self,
        period: Period,
        customer_id: &str,
        top_limit: usize,
    ) -> Result<DashboardView, AppError> {
        let (report, customers) = tokio::try_join!(
            self.get_monthly_report(period),
            self.get_customer_summary(period, customer_id),
        )?;

        tracing::debug!(
            "Painel {}/{}: {} vendas no relatório, {} clientes",
            period.month,
            period.year,
            report.sales.len(),
            customers.len()
        );

        Ok(aggregator::dashboard_view(
            period,
            customer_id,
            Some(&report),
            &customers,
            top_limit,
        ))
    }
}
