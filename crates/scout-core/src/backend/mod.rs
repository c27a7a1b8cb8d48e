//! Pluggable search backend boundary.

use crate::Result;
use scout_types::SuggestionResult;

/// A search capability invoked with normalized arguments, once per query.
///
/// Implementations must be callable from concurrent requests; the
/// provider adds no locking of its own. Ranking and relevance are
/// entirely the backend's concern.
pub trait SearchBackend: Send + Sync {
    /// Run a suggestion search for `keyword`, returning at most `limit`
    /// rows scoped to the given action code.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot complete the search.
    fn search(&self, keyword: &str, limit: i64, action: i64) -> Result<Vec<SuggestionResult>>;
}

/// Backend over a fixed set of rows. Case-insensitive substring match on
/// title and description, truncated to the requested limit. The action
/// code is accepted but does not affect matching.
///
/// Used by the CLI demo mode; real deployments plug in their own backend.
pub struct InMemoryBackend {
    rows: Vec<SuggestionResult>,
}

impl InMemoryBackend {
    #[must_use]
    pub fn new(rows: Vec<SuggestionResult>) -> Self {
        Self { rows }
    }
}

impl SearchBackend for InMemoryBackend {
    fn search(&self, keyword: &str, limit: i64, _action: i64) -> Result<Vec<SuggestionResult>> {
        let needle = keyword.to_lowercase();
        let limit = usize::try_from(limit).unwrap_or(0);

        Ok(self
            .rows
            .iter()
            .filter(|row| {
                row.title.to_lowercase().contains(&needle)
                    || row
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .take(limit)
            .cloned()
            .collect())
    }
}
