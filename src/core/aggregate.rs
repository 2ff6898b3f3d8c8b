//! Aggregation over already-canonical records.
//!
//! Everything here reads the cached JPY pairs and never re-derives
//! conversion; a stale pair stays stale through aggregation. Filtering is
//! the caller's job, these functions sum exactly what they are given.

use crate::domain::category::Category;
use crate::domain::common::CanonicalCost;
use crate::domain::subscription::Subscription;

/// Sums the cached monthly yen over the given records.
pub fn total_monthly<'a, T, I>(records: I) -> i64
where
    T: CanonicalCost + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records.into_iter().map(|record| record.monthly_jpy()).sum()
}

/// Sums the cached yearly yen over the given records.
pub fn total_yearly<'a, T, I>(records: I) -> i64
where
    T: CanonicalCost + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records.into_iter().map(|record| record.yearly_jpy()).sum()
}

/// Monthly spend grouped by category.
///
/// Entries keep the order categories were first seen in the input; callers
/// wanting chart order apply [`CategoryBreakdown::sorted_by_amount`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    entries: Vec<(Category, i64)>,
}

impl CategoryBreakdown {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, category: &Category) -> Option<i64> {
        self.entries
            .iter()
            .find(|(label, _)| label == category)
            .map(|(_, amount)| *amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, i64)> {
        self.entries.iter().map(|(label, amount)| (label, *amount))
    }

    /// Sum of all grouped amounts; equals `total_monthly` over the same
    /// records.
    pub fn total(&self) -> i64 {
        self.entries.iter().map(|(_, amount)| amount).sum()
    }

    /// Re-orders entries by descending amount. The sort is stable, so
    /// equal amounts keep their first-occurrence order.
    pub fn sorted_by_amount(mut self) -> Self {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self
    }

    fn accumulate(&mut self, category: Category, amount: i64) {
        match self.entries.iter_mut().find(|(label, _)| *label == category) {
            Some((_, existing)) => *existing += amount,
            None => self.entries.push((category, amount)),
        }
    }
}

/// Groups cached monthly yen by category in first-occurrence order.
///
/// Blank and whitespace-only labels collapse into `Other`; distinct custom
/// labels stay distinct.
pub fn category_breakdown<'a, I>(records: I) -> CategoryBreakdown
where
    I: IntoIterator<Item = &'a Subscription>,
{
    let mut breakdown = CategoryBreakdown::default();
    for record in records {
        breakdown.accumulate(record.category.normalized(), record.amount_jpy_monthly);
    }
    breakdown
}
