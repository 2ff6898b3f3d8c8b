//! Remote persistence over an injected document transport.

use crate::domain::book::SubscriptionBook;
use crate::errors::{Result, TrackerError};

use super::SubscriptionStore;

/// Transport seam for a hosted document store holding one JSON document per
/// scope.
///
/// The crate never talks to the network itself; authentication, retry,
/// and wire concerns live behind the implementation. A fetch of an absent
/// scope is `Ok(None)`, not an error.
pub trait DocumentApi: Send + Sync {
    fn fetch(&self, scope: &str) -> Result<Option<serde_json::Value>>;
    fn store(&self, scope: &str, document: &serde_json::Value) -> Result<()>;
}

/// Remote backend adapting a [`DocumentApi`] to the store trait.
///
/// Transport failures pass straight through; there is no local fallback
/// and no retry here.
pub struct RemoteStore {
    api: Box<dyn DocumentApi>,
}

impl RemoteStore {
    pub fn new(api: Box<dyn DocumentApi>) -> Self {
        Self { api }
    }
}

impl SubscriptionStore for RemoteStore {
    fn save(&self, book: &SubscriptionBook) -> Result<()> {
        let document = serde_json::to_value(book)?;
        self.api.store(&book.scope, &document)
    }

    fn load(&self, scope: &str) -> Result<SubscriptionBook> {
        let document = self.api.fetch(scope)?.ok_or_else(|| {
            TrackerError::Storage(format!("no stored book for scope `{}`", scope))
        })?;
        Ok(serde_json::from_value(document)?)
    }

    fn exists(&self, scope: &str) -> Result<bool> {
        Ok(self.api.fetch(scope)?.is_some())
    }

    // One fetch instead of the default exists-then-load pair.
    fn load_or_create(&self, scope: &str) -> Result<SubscriptionBook> {
        match self.api.fetch(scope)? {
            Some(document) => Ok(serde_json::from_value(document)?),
            None => Ok(SubscriptionBook::new(scope)),
        }
    }
}
