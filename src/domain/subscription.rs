//! Domain types for subscription records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::CurrencyCode;
use crate::domain::category::Category;
use crate::domain::common::{CanonicalCost, Displayable, Identifiable, NamedEntity};

/// Billing cadence of a subscription.
///
/// Stored documents may carry cadence strings this revision does not know;
/// those collapse into `Other` on load and are normalized as monthly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Yearly => "Yearly",
            BillingCycle::Other => "Other",
        };
        f.write_str(label)
    }
}

/// A recurring expense record.
///
/// `amount_jpy_monthly` and `amount_jpy_yearly` cache the canonical JPY pair
/// derived from `amount_original`, `currency`, `billing_cycle`, and the rate
/// current at the last recomputation. The pair is written as a unit by the
/// mutation services and is never patched half-at-a-time; a replaced exchange
/// rate leaves it untouched until the next edit of a canonical input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub service_name: String,
    pub amount_original: f64,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub billing_cycle: BillingCycle,
    #[serde(default)]
    pub category: Category,
    pub amount_jpy_monthly: i64,
    pub amount_jpy_yearly: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_billing_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(default = "Subscription::active_default")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    /// Materializes a draft with its derived canonical pair.
    pub fn new(draft: NewSubscription, monthly_jpy: i64, yearly_jpy: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            service_name: draft.service_name,
            amount_original: draft.amount_original,
            currency: draft.currency,
            billing_cycle: draft.billing_cycle,
            category: draft.category,
            amount_jpy_monthly: monthly_jpy,
            amount_jpy_yearly: yearly_jpy,
            start_date: draft.start_date,
            next_billing_date: draft.next_billing_date,
            memo: draft.memo,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn active_default() -> bool {
        true
    }
}

impl Identifiable for Subscription {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Subscription {
    fn name(&self) -> &str {
        &self.service_name
    }
}

impl Displayable for Subscription {
    fn display_label(&self) -> String {
        format!("{} ({})", self.service_name, self.billing_cycle)
    }
}

impl CanonicalCost for Subscription {
    fn monthly_jpy(&self) -> i64 {
        self.amount_jpy_monthly
    }

    fn yearly_jpy(&self) -> i64 {
        self.amount_jpy_yearly
    }
}

/// Form input for a new record. Canonical amounts are always derived at
/// creation, never supplied.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewSubscription {
    pub service_name: String,
    pub amount_original: f64,
    #[serde(default)]
    pub currency: CurrencyCode,
    #[serde(default)]
    pub billing_cycle: BillingCycle,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_billing_date: Option<NaiveDate>,
    #[serde(default)]
    pub memo: Option<String>,
}

impl NewSubscription {
    pub fn new(service_name: impl Into<String>, amount_original: f64) -> Self {
        Self {
            service_name: service_name.into(),
            amount_original,
            ..Self::default()
        }
    }

    pub fn with_currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_cycle(mut self, cycle: BillingCycle) -> Self {
        self.billing_cycle = cycle;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn with_next_billing_date(mut self, date: NaiveDate) -> Self {
        self.next_billing_date = Some(date);
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }
}

/// Sparse edit of an existing record; `None` leaves a field unchanged.
///
/// The outer option on `start_date`, `next_billing_date`, and `memo`
/// distinguishes "leave alone" from "clear". Built in code rather than
/// deserialized, since JSON cannot tell an absent field from a null one.
#[derive(Debug, Clone, Default)]
pub struct SubscriptionPatch {
    pub service_name: Option<String>,
    pub amount_original: Option<f64>,
    pub currency: Option<CurrencyCode>,
    pub billing_cycle: Option<BillingCycle>,
    pub category: Option<Category>,
    pub start_date: Option<Option<NaiveDate>>,
    pub next_billing_date: Option<Option<NaiveDate>>,
    pub memo: Option<Option<String>>,
}

impl SubscriptionPatch {
    /// True when the patch touches an input of the canonical pair and the
    /// pair must therefore be re-derived.
    pub fn touches_canonical_inputs(&self) -> bool {
        self.amount_original.is_some() || self.currency.is_some() || self.billing_cycle.is_some()
    }
}
