pub mod dashboard;
pub mod items;
pub mod period;
pub mod sales;
