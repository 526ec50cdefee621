pub mod aggregator;
pub mod dashboard_service;
