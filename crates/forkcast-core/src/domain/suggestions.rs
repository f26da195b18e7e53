//! Suggestion lists: normalized candidate entries for one round.
//!
//! The engine's contract is that lists reaching it are already normalized
//! (trimmed, no empty entries). `SuggestionList` makes that contract a type:
//! every constructor normalizes, so holding a value is proof of the
//! invariant and the engine never re-checks formatting noise.

use serde::{Deserialize, Serialize};

/// An ordered list of trimmed, non-empty suggestion strings supplied by one
/// participant for one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuggestionList {
    items: Vec<String>,
}

impl SuggestionList {
    /// Parse raw comma-separated free text: split on commas, trim each
    /// entry, drop empties. Order of the surviving entries is preserved.
    pub fn parse(raw: &str) -> Self {
        Self {
            items: raw
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Build from pre-split items, applying the same normalization as
    /// [`parse`](Self::parse) so both entry points uphold the invariant.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items
                .into_iter()
                .map(Into::into)
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Whether the list contains the given suggestion (exact match; entries
    /// are already trimmed).
    pub fn contains(&self, suggestion: &str) -> bool {
        self.items.iter().any(|item| item == suggestion)
    }
}
