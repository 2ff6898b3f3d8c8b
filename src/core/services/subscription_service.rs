//! Validated mutation paths for subscription records.
//!
//! Every path that can change a record's amount, currency, or billing cycle
//! re-derives the canonical JPY pair at the book's current rate before
//! mutating anything, so a rejected input leaves the book untouched.

use uuid::Uuid;

use crate::core::normalize;
use crate::domain::book::SubscriptionBook;
use crate::domain::subscription::{NewSubscription, Subscription, SubscriptionPatch};
use crate::errors::{Result, TrackerError};

/// Provides validated CRUD helpers for a book's subscriptions.
pub struct SubscriptionService;

impl SubscriptionService {
    /// Validates a draft, derives its canonical pair at the book's current
    /// rate, and appends the new record. Returns the assigned id.
    pub fn create(book: &mut SubscriptionBook, mut draft: NewSubscription) -> Result<Uuid> {
        if draft.service_name.trim().is_empty() {
            return Err(TrackerError::InvalidInput(
                "service name must not be empty".into(),
            ));
        }
        draft.service_name = draft.service_name.trim().to_string();
        let pair = normalize::calculate_amounts(
            draft.amount_original,
            &draft.currency,
            draft.billing_cycle,
            book.rate.usd_to_jpy,
        )?;
        let subscription = Subscription::new(draft, pair.monthly_jpy, pair.yearly_jpy);
        Ok(book.add_subscription(subscription))
    }

    /// Applies a sparse edit to the record identified by `id`.
    ///
    /// When the patch touches a canonical input the replacement pair is
    /// derived from the patch-or-current values first; only a successful
    /// derivation proceeds to mutate fields. Edits that leave all three
    /// inputs alone skip recomputation entirely, which is what keeps a
    /// replaced rate from leaking into untouched records.
    pub fn update(book: &mut SubscriptionBook, id: Uuid, patch: SubscriptionPatch) -> Result<()> {
        let rate = book.rate.usd_to_jpy;
        let record = book
            .subscription_mut(id)
            .ok_or(TrackerError::NotFound(id))?;

        if let Some(name) = &patch.service_name {
            if name.trim().is_empty() {
                return Err(TrackerError::InvalidInput(
                    "service name must not be empty".into(),
                ));
            }
        }
        let pair = if patch.touches_canonical_inputs() {
            let amount = patch.amount_original.unwrap_or(record.amount_original);
            let currency = patch
                .currency
                .clone()
                .unwrap_or_else(|| record.currency.clone());
            let cycle = patch.billing_cycle.unwrap_or(record.billing_cycle);
            Some(normalize::calculate_amounts(amount, &currency, cycle, rate)?)
        } else {
            None
        };

        if let Some(name) = patch.service_name {
            record.service_name = name.trim().to_string();
        }
        if let Some(amount) = patch.amount_original {
            record.amount_original = amount;
        }
        if let Some(currency) = patch.currency {
            record.currency = currency;
        }
        if let Some(cycle) = patch.billing_cycle {
            record.billing_cycle = cycle;
        }
        if let Some(category) = patch.category {
            record.category = category;
        }
        if let Some(start_date) = patch.start_date {
            record.start_date = start_date;
        }
        if let Some(next_billing_date) = patch.next_billing_date {
            record.next_billing_date = next_billing_date;
        }
        if let Some(memo) = patch.memo {
            record.memo = memo;
        }
        if let Some(pair) = pair {
            record.amount_jpy_monthly = pair.monthly_jpy;
            record.amount_jpy_yearly = pair.yearly_jpy;
        }
        record.touch();
        book.touch();
        Ok(())
    }

    /// Flips the active flag, returning the new state.
    pub fn toggle_active(book: &mut SubscriptionBook, id: Uuid) -> Result<bool> {
        let record = book
            .subscription_mut(id)
            .ok_or(TrackerError::NotFound(id))?;
        record.is_active = !record.is_active;
        let state = record.is_active;
        record.touch();
        book.touch();
        Ok(state)
    }

    /// Removes the record identified by `id`, returning the removed instance.
    pub fn remove(book: &mut SubscriptionBook, id: Uuid) -> Result<Subscription> {
        book.remove_subscription(id)
            .ok_or(TrackerError::NotFound(id))
    }

    /// Bulk-loads drafts, returning the assigned ids in input order.
    ///
    /// All drafts are validated and canonicalized before any is appended;
    /// one bad draft rejects the whole batch.
    pub fn import(book: &mut SubscriptionBook, drafts: Vec<NewSubscription>) -> Result<Vec<Uuid>> {
        let rate = book.rate.usd_to_jpy;
        let mut staged = Vec::with_capacity(drafts.len());
        for mut draft in drafts {
            if draft.service_name.trim().is_empty() {
                return Err(TrackerError::InvalidInput(
                    "service name must not be empty".into(),
                ));
            }
            draft.service_name = draft.service_name.trim().to_string();
            let pair = normalize::calculate_amounts(
                draft.amount_original,
                &draft.currency,
                draft.billing_cycle,
                rate,
            )?;
            staged.push(Subscription::new(draft, pair.monthly_jpy, pair.yearly_jpy));
        }
        let ids = staged.iter().map(|sub| sub.id).collect();
        for subscription in staged {
            book.add_subscription(subscription);
        }
        Ok(ids)
    }

    /// Returns a snapshot of the book's records.
    pub fn list(book: &SubscriptionBook) -> Vec<&Subscription> {
        book.subscriptions.iter().collect()
    }
}
