pub mod dashboard;
pub mod pricing;

pub use dashboard::{dashboard_page, DashboardVm};
pub use pricing::{pricing_popup, PricingVm};
