//! The money-normalization core and the services built on it.

pub mod aggregate;
pub mod normalize;
pub mod services;

pub use aggregate::{category_breakdown, total_monthly, total_yearly, CategoryBreakdown};
pub use normalize::{calculate_amounts, parse_amount, to_monthly_yearly, CanonicalAmounts};
pub use services::{DashboardSummary, RateService, SubscriptionService, SummaryService};
