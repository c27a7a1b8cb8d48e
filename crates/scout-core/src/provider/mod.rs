//! Query normalizer/dispatcher.
//!
//! [`SuggestProvider`] is the front door for suggestion queries: it parses
//! a suggest URI, checks it against the configured authority, normalizes
//! the `limit` and `action` parameters, and dispatches exactly one search
//! call to the injected backend. Results pass through untouched.

use crate::backend::SearchBackend;
use crate::config::Config;
use crate::query::SuggestQuery;
use crate::{Error, Result};
use scout_types::{SUGGEST_MIME_TYPE, SuggestionResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Stateless suggestion-query dispatcher.
///
/// The backend is an explicit constructor argument, never ambient state.
/// Each call is independent; the provider holds no mutable state, so a
/// single instance can serve concurrent callers.
pub struct SuggestProvider {
    config: Config,
    backend: Arc<dyn SearchBackend>,
}

impl SuggestProvider {
    #[must_use]
    pub fn new(config: Config, backend: Arc<dyn SearchBackend>) -> Self {
        Self { config, backend }
    }

    /// Run a suggestion query for the given suggest URI.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the URI does not match the
    /// suggest pattern or is addressed to a different authority; in that
    /// case the backend is never invoked. Backend failures propagate.
    pub fn query(&self, uri: &str) -> Result<Vec<SuggestionResult>> {
        let started = Instant::now();
        let query = self.parse_checked(uri)?;

        let limit = query.normalized_limit(self.config.search.default_limit);
        let action = query.normalized_action(self.config.search.default_action);

        debug!(
            "Dispatching suggestion query: keyword={:?} limit={} action={}",
            query.keyword, limit, action
        );

        let rows = self.backend.search(&query.keyword, limit, action)?;

        debug!(
            "Suggestion query finished: {} rows in {:?}",
            rows.len(),
            started.elapsed()
        );

        Ok(rows)
    }

    /// MIME type for result sets of a valid suggest URI.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] for URIs the provider would not
    /// serve.
    pub fn result_type(&self, uri: &str) -> Result<&'static str> {
        self.parse_checked(uri)?;
        Ok(SUGGEST_MIME_TYPE)
    }

    /// Parse a URI and verify it is addressed to this provider's authority.
    fn parse_checked(&self, uri: &str) -> Result<SuggestQuery> {
        let query = SuggestQuery::parse(uri)?;
        if query.authority != self.config.authority {
            return Err(Error::InvalidRequest(format!(
                "unknown authority: {}",
                query.authority
            )));
        }
        Ok(query)
    }
}
