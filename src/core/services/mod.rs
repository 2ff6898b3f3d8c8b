pub mod rate_service;
pub mod subscription_service;
pub mod summary_service;

pub use rate_service::RateService;
pub use subscription_service::SubscriptionService;
pub use summary_service::{DashboardSummary, SummaryService};
