use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::book::SubscriptionBook;
use crate::errors::{Result, TrackerError};
use crate::utils::{app_data_dir, books_dir_in, ensure_dir};

use super::SubscriptionStore;

const TMP_SUFFIX: &str = "tmp";

/// Local persistence backend: one pretty-printed JSON document per scope
/// under the application data directory.
#[derive(Clone)]
pub struct JsonStore {
    root: PathBuf,
    books_dir: PathBuf,
}

impl JsonStore {
    /// Opens a store rooted at `root`, or at the default data directory
    /// when `None`. Creates the directory layout on first use.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        let books_dir = books_dir_in(&root);
        ensure_dir(&books_dir)?;
        Ok(Self { root, books_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    /// Canonical file path for a scope.
    pub fn book_path(&self, scope: &str) -> PathBuf {
        self.books_dir
            .join(format!("{}.json", canonical_scope(scope)))
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    /// Stored scope stems, sorted. These are slugs, not the original scope
    /// strings.
    pub fn list_scopes(&self) -> Result<Vec<String>> {
        if !self.books_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.books_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                entries.push(stem.to_string());
            }
        }
        entries.sort();
        Ok(entries)
    }
}

impl SubscriptionStore for JsonStore {
    fn save(&self, book: &SubscriptionBook) -> Result<()> {
        let path = self.book_path(&book.scope);
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(book)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load(&self, scope: &str) -> Result<SubscriptionBook> {
        let path = self.book_path(scope);
        if !path.exists() {
            return Err(TrackerError::Storage(format!(
                "no stored book for scope `{}`",
                scope
            )));
        }
        load_book_from_path(&path)
    }

    fn exists(&self, scope: &str) -> Result<bool> {
        Ok(self.book_path(scope).exists())
    }
}

pub fn load_book_from_path(path: &Path) -> Result<SubscriptionBook> {
    let data = fs::read_to_string(path)?;
    let book: SubscriptionBook = serde_json::from_str(&data)?;
    Ok(book)
}

/// Slugs a scope string to a safe file stem. Falls back to `book` when
/// nothing survives sanitization.
fn canonical_scope(scope: &str) -> String {
    let sanitized: String = scope
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "book".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
