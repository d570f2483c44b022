//! Dashboard module
//!
//! Provides an overview page showing categorization statistics, the CSV
//! import area and the transactions table.

mod cards;
mod handlers;
mod import;
mod stats;

pub(crate) use cards::stats_section;
pub use handlers::get_dashboard_page;
pub use import::import_endpoint;
pub(crate) use stats::DashboardStats;
