use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, NamedEntity};
use crate::domain::rate::RateSetting;
use crate::domain::subscription::Subscription;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// One scope's subscription records plus its singleton rate setting.
///
/// The book is the unit of persistence: a store loads and saves whole books,
/// and the mutation services operate on a borrowed book in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionBook {
    pub id: Uuid,
    pub scope: String,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub rate: RateSetting,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "SubscriptionBook::schema_version_default")]
    pub schema_version: u8,
}

impl SubscriptionBook {
    pub fn new(scope: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            scope: scope.into(),
            subscriptions: Vec::new(),
            rate: RateSetting::default(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_subscription(&mut self, subscription: Subscription) -> Uuid {
        let id = subscription.id;
        self.subscriptions.push(subscription);
        self.touch();
        id
    }

    pub fn subscription(&self, id: Uuid) -> Option<&Subscription> {
        self.subscriptions.iter().find(|sub| sub.id == id)
    }

    pub fn subscription_mut(&mut self, id: Uuid) -> Option<&mut Subscription> {
        self.subscriptions.iter_mut().find(|sub| sub.id == id)
    }

    pub fn remove_subscription(&mut self, id: Uuid) -> Option<Subscription> {
        let index = self.subscriptions.iter().position(|sub| sub.id == id)?;
        let removed = self.subscriptions.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Records currently billed, in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &Subscription> {
        self.subscriptions.iter().filter(|sub| sub.is_active)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Identifiable for SubscriptionBook {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for SubscriptionBook {
    fn name(&self) -> &str {
        &self.scope
    }
}

impl Displayable for SubscriptionBook {
    fn display_label(&self) -> String {
        format!("{} ({} records)", self.scope, self.subscriptions.len())
    }
}
