//! Suggest-URI parsing and parameter normalization.
//!
//! Scout accepts exactly one request shape:
//! `content://<authority>/search_suggest_query/<keyword>?limit=N&action=M`.
//! Anything else is an invalid request. Parameters are never rejected:
//! out-of-bounds or malformed values fall back to configured defaults.

use crate::{Error, Result};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use scout_types::{
    ACTION_TYPE_END, ACTION_TYPE_START, PARAMETER_ACTION, PARAMETER_LIMIT, SUGGEST_URI_PATH_QUERY,
};
use tracing::warn;
use url::Url;

/// Characters that must be escaped inside a path segment or query value.
const SEGMENT_ESCAPE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'=');

/// A parsed suggestion query.
///
/// Built once per incoming request, consumed by a single dispatch,
/// then dropped. Carries the raw parameter values; normalization
/// against defaults happens at dispatch time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestQuery {
    /// Authority the URI was addressed to
    pub authority: String,

    /// Decoded search keyword from the path
    pub keyword: String,

    /// Raw `limit` parameter, if present and numeric
    pub limit: Option<i64>,

    /// Raw `action` parameter, if present and numeric
    pub action: Option<i64>,
}

impl SuggestQuery {
    /// Parse a suggest URI.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRequest`] if the URI is malformed, uses a
    /// scheme other than `content`, has no authority, or its path is not
    /// exactly `search_suggest_query/<keyword>`.
    pub fn parse(uri: &str) -> Result<Self> {
        let url = Url::parse(uri)
            .map_err(|e| Error::InvalidRequest(format!("malformed uri {uri:?}: {e}")))?;

        if url.scheme() != "content" {
            return Err(Error::InvalidRequest(format!(
                "unsupported scheme: {}",
                url.scheme()
            )));
        }

        let authority = url
            .host_str()
            .ok_or_else(|| Error::InvalidRequest("missing authority".to_string()))?
            .to_string();

        let mut segments = url
            .path_segments()
            .ok_or_else(|| Error::InvalidRequest("missing path".to_string()))?;

        match segments.next() {
            Some(SUGGEST_URI_PATH_QUERY) => {}
            Some(other) => {
                return Err(Error::InvalidRequest(format!(
                    "unknown query path: {other}"
                )));
            }
            None => return Err(Error::InvalidRequest("missing path".to_string())),
        }

        let keyword = match segments.next() {
            Some(raw) if !raw.is_empty() => percent_decode_str(raw)
                .decode_utf8()
                .map_err(|e| Error::InvalidRequest(format!("keyword is not valid UTF-8: {e}")))?
                .into_owned(),
            _ => return Err(Error::InvalidRequest("missing keyword".to_string())),
        };

        // A single trailing slash is tolerated; real extra segments are not.
        if segments.any(|s| !s.is_empty()) {
            return Err(Error::InvalidRequest(
                "unexpected path segments after keyword".to_string(),
            ));
        }

        let mut limit = None;
        let mut action = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                PARAMETER_LIMIT if limit.is_none() => {
                    limit = parse_numeric(PARAMETER_LIMIT, &value);
                }
                PARAMETER_ACTION if action.is_none() => {
                    action = parse_numeric(PARAMETER_ACTION, &value);
                }
                _ => {}
            }
        }

        Ok(Self {
            authority,
            keyword,
            limit,
            action,
        })
    }

    /// Resolve the effective result limit.
    /// Missing or non-positive values fall back to the default.
    #[must_use]
    pub fn normalized_limit(&self, default_limit: i64) -> i64 {
        match self.limit {
            Some(n) if n > 0 => n,
            _ => default_limit,
        }
    }

    /// Resolve the effective action code.
    /// Missing or out-of-range values fall back to the default.
    #[must_use]
    pub fn normalized_action(&self, default_action: i64) -> i64 {
        match self.action {
            Some(n) if (ACTION_TYPE_START..=ACTION_TYPE_END).contains(&n) => n,
            _ => default_action,
        }
    }
}

/// Parse an integer parameter, treating non-numeric values as absent
/// so they fall through to the configured default.
fn parse_numeric(name: &str, value: &str) -> Option<i64> {
    match value.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            warn!("Ignoring non-numeric {name} parameter: {value:?}");
            None
        }
    }
}

/// Build a suggest URI for a keyword and optional parameters.
/// The inverse of [`SuggestQuery::parse`] for well-formed input.
#[must_use]
pub fn build_suggest_uri(
    authority: &str,
    keyword: &str,
    limit: Option<i64>,
    action: Option<i64>,
) -> String {
    let encoded = utf8_percent_encode(keyword, SEGMENT_ESCAPE);
    let mut uri = format!("content://{authority}/{SUGGEST_URI_PATH_QUERY}/{encoded}");

    let mut separator = '?';
    if let Some(limit) = limit {
        uri.push(separator);
        uri.push_str(&format!("{PARAMETER_LIMIT}={limit}"));
        separator = '&';
    }
    if let Some(action) = action {
        uri.push(separator);
        uri.push_str(&format!("{PARAMETER_ACTION}={action}"));
    }

    uri
}
