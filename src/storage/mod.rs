pub mod json_backend;
pub mod remote;
pub mod session;

use crate::domain::book::SubscriptionBook;
use crate::errors::Result;

/// Abstraction over persistence backends capable of storing subscription
/// books, one JSON document per scope.
pub trait SubscriptionStore: Send + Sync {
    fn save(&self, book: &SubscriptionBook) -> Result<()>;
    fn load(&self, scope: &str) -> Result<SubscriptionBook>;
    fn exists(&self, scope: &str) -> Result<bool>;

    /// Loads the scope's book, or starts a fresh one when nothing is stored
    /// yet. The fresh book is not persisted until the first save.
    fn load_or_create(&self, scope: &str) -> Result<SubscriptionBook> {
        if self.exists(scope)? {
            self.load(scope)
        } else {
            Ok(SubscriptionBook::new(scope))
        }
    }
}

pub use json_backend::JsonStore;
pub use remote::{DocumentApi, RemoteStore};
pub use session::Session;
