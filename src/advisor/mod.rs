//! Rule-based spending analysis over a book's aggregates.
//!
//! The advisor runs fixed local rules; a remote language-model advisor is a
//! separate collaborator that consumes the same aggregate inputs.

use uuid::Uuid;

use crate::core::services::SummaryService;
use crate::currency::format_jpy;
use crate::domain::book::SubscriptionBook;
use crate::domain::category::Category;
use crate::domain::subscription::{BillingCycle, Subscription};

/// Share of monthly spend above which one category counts as dominant.
const DOMINANT_SHARE: f64 = 0.5;
/// Active records in one category before it counts as crowded.
const CROWDED_COUNT: usize = 3;
/// Monthly yen below which an annual-plan switch is not worth suggesting.
const ANNUAL_CANDIDATE_FLOOR_JPY: i64 = 1000;

/// Machine-usable classification of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    DominantCategory,
    AnnualPlanCandidate,
    CrowdedCategory,
    PausedRecords,
}

/// One advisory finding.
///
/// `figure` holds the number the rule keyed on: yen for the amount-based
/// rules, a record count for the others.
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub category: Option<Category>,
    pub subscription_id: Option<Uuid>,
    pub figure: i64,
    pub message: String,
}

pub struct Advisor;

impl Advisor {
    /// Runs every rule over the book's active records and returns the
    /// findings in rule order.
    pub fn analyze(book: &SubscriptionBook) -> Vec<Suggestion> {
        let summary = SummaryService::dashboard(book);
        let mut suggestions = Vec::new();

        if summary.breakdown.len() >= 2 && summary.total_monthly_jpy > 0 {
            let top = summary
                .breakdown
                .iter()
                .fold(None::<(&Category, i64)>, |best, entry| match best {
                    Some((_, amount)) if amount >= entry.1 => best,
                    _ => Some(entry),
                });
            if let Some((category, amount)) = top {
                let share = amount as f64 / summary.total_monthly_jpy as f64;
                if share > DOMINANT_SHARE {
                    let percent = (share * 100.0).round() as i64;
                    suggestions.push(Suggestion {
                        kind: SuggestionKind::DominantCategory,
                        category: Some(category.clone()),
                        subscription_id: None,
                        figure: amount,
                        message: format!(
                            "{} accounts for {}% of monthly spend ({})",
                            category,
                            percent,
                            format_jpy(amount as f64)
                        ),
                    });
                }
            }
        }

        if let Some(candidate) = priciest_monthly(book) {
            if candidate.amount_jpy_monthly >= ANNUAL_CANDIDATE_FLOOR_JPY {
                suggestions.push(Suggestion {
                    kind: SuggestionKind::AnnualPlanCandidate,
                    category: Some(candidate.category.normalized()),
                    subscription_id: Some(candidate.id),
                    figure: candidate.amount_jpy_monthly,
                    message: format!(
                        "{} is the priciest monthly plan at {}/month; an annual plan may come out cheaper",
                        candidate.service_name,
                        format_jpy(candidate.amount_jpy_monthly as f64)
                    ),
                });
            }
        }

        for (category, count) in active_counts(book) {
            if count >= CROWDED_COUNT {
                suggestions.push(Suggestion {
                    kind: SuggestionKind::CrowdedCategory,
                    category: Some(category.clone()),
                    subscription_id: None,
                    figure: count as i64,
                    message: format!(
                        "{} holds {} active subscriptions; overlapping services may be worth consolidating",
                        category, count
                    ),
                });
            }
        }

        if summary.paused_count > 0 {
            suggestions.push(Suggestion {
                kind: SuggestionKind::PausedRecords,
                category: None,
                subscription_id: None,
                figure: summary.paused_count as i64,
                message: format!(
                    "{} paused subscription(s) are still on the books; remove the ones not coming back",
                    summary.paused_count
                ),
            });
        }

        suggestions
    }
}

/// Most expensive active monthly-billed record; first wins on ties.
fn priciest_monthly(book: &SubscriptionBook) -> Option<&Subscription> {
    book.active()
        .filter(|sub| sub.billing_cycle == BillingCycle::Monthly)
        .fold(None::<&Subscription>, |best, sub| match best {
            Some(current) if current.amount_jpy_monthly >= sub.amount_jpy_monthly => best,
            _ => Some(sub),
        })
}

/// Active record counts per normalized category, first-occurrence order.
fn active_counts(book: &SubscriptionBook) -> Vec<(Category, usize)> {
    let mut counts: Vec<(Category, usize)> = Vec::new();
    for sub in book.active() {
        let label = sub.category.normalized();
        match counts.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }
    counts
}
