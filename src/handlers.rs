pub mod dashboard;
pub mod items;
pub mod reports;
pub mod sales;
