//! The storage decision, bound once per session.

use std::fmt;
use std::path::PathBuf;

use crate::domain::book::SubscriptionBook;
use crate::errors::{Result, TrackerError};

use super::{DocumentApi, JsonStore, RemoteStore, SubscriptionStore};

/// One backend bound to one scope.
///
/// The binding is made at construction and never changes; a failing backend
/// surfaces its error instead of falling back to another one. Callers that
/// cannot load remotely decide for themselves what to do about it.
pub struct Session {
    scope: String,
    store: Box<dyn SubscriptionStore>,
}

impl Session {
    /// Binds the scope to local JSON storage in the default data directory.
    pub fn local(scope: impl Into<String>) -> Result<Self> {
        Ok(Self {
            scope: scope.into(),
            store: Box::new(JsonStore::new_default()?),
        })
    }

    /// Binds the scope to local JSON storage under an explicit root.
    pub fn local_with_root(scope: impl Into<String>, root: PathBuf) -> Result<Self> {
        Ok(Self {
            scope: scope.into(),
            store: Box::new(JsonStore::new(Some(root))?),
        })
    }

    /// Binds the scope to a remote document store.
    pub fn remote(scope: impl Into<String>, api: Box<dyn DocumentApi>) -> Self {
        Self {
            scope: scope.into(),
            store: Box::new(RemoteStore::new(api)),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Loads the bound scope's book.
    pub fn load(&self) -> Result<SubscriptionBook> {
        let book = self.store.load(&self.scope)?;
        ensure_schema_support(book.schema_version)?;
        Ok(book)
    }

    /// Loads the bound scope's book, or starts a fresh one.
    pub fn load_or_create(&self) -> Result<SubscriptionBook> {
        let book = self.store.load_or_create(&self.scope)?;
        ensure_schema_support(book.schema_version)?;
        Ok(book)
    }

    /// Saves the bound scope's book.
    ///
    /// A book carrying another scope is refused; the session never writes
    /// outside the scope it was bound to.
    pub fn save(&self, book: &SubscriptionBook) -> Result<()> {
        if book.scope != self.scope {
            return Err(TrackerError::InvalidInput(format!(
                "book scope `{}` does not match session scope `{}`",
                book.scope, self.scope
            )));
        }
        self.store.save(book)
    }

    pub fn exists(&self) -> Result<bool> {
        self.store.exists(&self.scope)
    }
}

// The boxed store has no Debug; show the scope and elide the store.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

fn ensure_schema_support(schema_version: u8) -> Result<()> {
    let supported = SubscriptionBook::schema_version_default();
    if schema_version > supported {
        return Err(TrackerError::Storage(format!(
            "book schema v{} is newer than supported v{}",
            schema_version, supported
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::SubscriptionService;
    use crate::domain::subscription::NewSubscription;
    use tempfile::TempDir;

    #[test]
    fn local_session_round_trips_a_book() {
        let temp = TempDir::new().unwrap();
        let session =
            Session::local_with_root("personal", temp.path().to_path_buf()).expect("session");
        assert_eq!(session.scope(), "personal");
        assert!(!session.exists().unwrap());

        let mut book = session.load_or_create().expect("fresh book");
        SubscriptionService::create(&mut book, NewSubscription::new("Netflix", 1490.0)).unwrap();
        session.save(&book).expect("save book");

        let loaded = session.load().expect("load book");
        assert_eq!(loaded.subscription_count(), 1);
        assert_eq!(loaded.subscriptions[0].service_name, "Netflix");
    }

    #[test]
    fn remote_session_failure_surfaces_without_fallback() {
        struct DownApi;
        impl DocumentApi for DownApi {
            fn fetch(&self, _scope: &str) -> Result<Option<serde_json::Value>> {
                Err(TrackerError::Storage("document api unreachable".into()))
            }
            fn store(&self, _scope: &str, _document: &serde_json::Value) -> Result<()> {
                Err(TrackerError::Storage("document api unreachable".into()))
            }
        }

        let session = Session::remote("cloud", Box::new(DownApi));
        let err = session.load().expect_err("load must surface the failure");
        assert!(matches!(err, TrackerError::Storage(_)));
        let err = session
            .save(&SubscriptionBook::new("cloud"))
            .expect_err("save must surface the failure");
        assert!(matches!(err, TrackerError::Storage(_)));
    }

    #[test]
    fn newer_schema_documents_are_rejected() {
        let temp = TempDir::new().unwrap();
        let session =
            Session::local_with_root("future", temp.path().to_path_buf()).expect("session");
        let mut book = SubscriptionBook::new("future");
        book.schema_version = SubscriptionBook::schema_version_default() + 5;
        session.save(&book).unwrap();

        let err = session.load().expect_err("future schema must fail");
        match err {
            TrackerError::Storage(message) => {
                assert!(message.contains("newer"), "unexpected error: {message}");
            }
            other => panic!("expected storage error, got {other:?}"),
        }
    }

    #[test]
    fn save_refuses_a_book_from_another_scope() {
        let temp = TempDir::new().unwrap();
        let session =
            Session::local_with_root("personal", temp.path().to_path_buf()).expect("session");
        let err = session
            .save(&SubscriptionBook::new("family"))
            .expect_err("foreign scope must be refused");
        assert!(matches!(err, TrackerError::InvalidInput(_)));

        let family =
            Session::local_with_root("family", temp.path().to_path_buf()).expect("session");
        assert!(!family.exists().unwrap());
    }

    #[test]
    fn debug_output_shows_the_scope_and_elides_the_store() {
        let temp = TempDir::new().unwrap();
        let session =
            Session::local_with_root("personal", temp.path().to_path_buf()).expect("session");
        let rendered = format!("{session:?}");
        assert!(rendered.starts_with("Session"));
        assert!(rendered.contains("personal"));
        assert!(!rendered.contains("store"));
    }
}
