//! Aggregate dashboard view over a book.

use crate::core::aggregate::{category_breakdown, total_monthly, total_yearly, CategoryBreakdown};
use crate::domain::book::SubscriptionBook;
use crate::domain::subscription::Subscription;

/// Totals and per-category breakdown the dashboard renders.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub total_monthly_jpy: i64,
    pub total_yearly_jpy: i64,
    pub breakdown: CategoryBreakdown,
    pub active_count: usize,
    pub paused_count: usize,
}

pub struct SummaryService;

impl SummaryService {
    /// Computes the dashboard aggregates over the book's active records.
    ///
    /// Pausing a record removes it from every figure here; the aggregator
    /// itself stays filter-free and the default active filter is applied
    /// at this seam.
    pub fn dashboard(book: &SubscriptionBook) -> DashboardSummary {
        let active: Vec<&Subscription> = book.active().collect();
        DashboardSummary {
            total_monthly_jpy: total_monthly(active.iter().copied()),
            total_yearly_jpy: total_yearly(active.iter().copied()),
            breakdown: category_breakdown(active.iter().copied()),
            active_count: active.len(),
            paused_count: book.subscription_count() - active.len(),
        }
    }
}
