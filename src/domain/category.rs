//! Spending labels and their chart colors.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Labels the chart legend recognizes, in presentation order.
pub const WELL_KNOWN_CATEGORIES: &[&str] = &[
    "Entertainment",
    "Work",
    "Education",
    "Living",
    "AI",
    "Other",
];

/// Color assigned to labels outside the well-known set.
pub const DEFAULT_CHART_COLOR: &str = "#9ca3af";

static CHART_COLORS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Entertainment", "#f472b6"),
        ("Work", "#60a5fa"),
        ("Education", "#34d399"),
        ("Living", "#fbbf24"),
        ("AI", "#a78bfa"),
        ("Other", "#9ca3af"),
    ])
});

/// Free-form spending label attached to a subscription.
///
/// Any text is a valid category; the six well-known labels carry dedicated
/// chart colors and everything else falls back to [`DEFAULT_CHART_COLOR`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Category(pub String);

impl Category {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into().trim().to_string())
    }

    pub fn other() -> Self {
        Self::new("Other")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Grouping key for breakdowns: trimmed, with blank labels collapsed
    /// into `Other`. Stored labels bypass [`Category::new`] on load, so
    /// the collapse happens here rather than at construction.
    pub fn normalized(&self) -> Category {
        if self.is_blank() {
            Self::other()
        } else {
            Self(self.0.trim().to_string())
        }
    }

    pub fn is_well_known(&self) -> bool {
        CHART_COLORS.contains_key(self.as_str())
    }

    pub fn chart_color(&self) -> &'static str {
        CHART_COLORS
            .get(self.as_str())
            .copied()
            .unwrap_or(DEFAULT_CHART_COLOR)
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::other()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
