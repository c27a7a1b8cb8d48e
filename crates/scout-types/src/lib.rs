//! Shared types for Scout suggestion-query components.
//!
//! This crate provides the types and compatibility constants used across
//! scout-core and scout-cli. All types are serializable for transport.

use serde::{Deserialize, Serialize};

/// Path segment identifying a suggestion query.
pub const SUGGEST_URI_PATH_QUERY: &str = "search_suggest_query";

/// Name of the result-count query parameter.
pub const PARAMETER_LIMIT: &str = "limit";

/// Name of the action-type query parameter.
pub const PARAMETER_ACTION: &str = "action";

/// MIME type reported for suggestion result sets.
pub const SUGGEST_MIME_TYPE: &str = "application/vnd.scout.suggestions+json";

/// Limit applied when a query carries no usable `limit` parameter.
pub const DEFAULT_SEARCH_LIMIT: i64 = 5;

/// Action applied when a query carries no usable `action` parameter.
pub const DEFAULT_SEARCH_ACTION: i64 = ActionType::Ambiguous as i64;

/// Lowest valid action code (inclusive).
pub const ACTION_TYPE_START: i64 = ActionType::SwitchChannel as i64;

/// Highest valid action code (inclusive).
pub const ACTION_TYPE_END: i64 = ActionType::Ambiguous as i64;

/// The user action a suggestion result is bound to.
///
/// Codes form the closed range [`ACTION_TYPE_START`, `ACTION_TYPE_END`];
/// anything outside it is normalized to [`DEFAULT_SEARCH_ACTION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Jump straight to the matched channel
    SwitchChannel = 1,

    /// Switch to the matched external input
    SwitchInput = 2,

    /// No single obvious action; let the UI decide
    Ambiguous = 3,
}

impl ActionType {
    /// Look up an action type by its wire code.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::SwitchChannel),
            2 => Some(Self::SwitchInput),
            3 => Some(Self::Ambiguous),
            _ => None,
        }
    }

    /// Wire code for this action type.
    #[must_use]
    pub fn code(self) -> i64 {
        self as i64
    }
}

/// A single suggestion row returned by a search backend.
///
/// Scout never inspects or transforms these; they pass through to the
/// caller exactly as the backend produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    /// Unique identifier within the backend's namespace
    pub id: String,

    /// Primary display text
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Action verb the consumer should fire when the row is picked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_action: Option<String>,

    /// Opaque payload for the intent action (e.g. a channel URI)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default)]
    pub is_playable: bool,

    /// Watch progress in percent (0-100), when the row is a partially
    /// watched program
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percentage: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_height: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_millis: Option<u64>,
}

impl SuggestionResult {
    /// Create a minimal row with just an id and title.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_action_type_codes() {
        assert_eq!(ActionType::SwitchChannel.code(), 1);
        assert_eq!(ActionType::SwitchInput.code(), 2);
        assert_eq!(ActionType::Ambiguous.code(), 3);
    }

    #[test]
    fn test_action_range_constants() {
        assert_eq!(ACTION_TYPE_START, 1);
        assert_eq!(ACTION_TYPE_END, 3);
        assert!(ACTION_TYPE_START <= DEFAULT_SEARCH_ACTION);
        assert!(DEFAULT_SEARCH_ACTION <= ACTION_TYPE_END);
    }

    #[test]
    fn test_default_search_action_is_ambiguous() {
        assert_eq!(DEFAULT_SEARCH_ACTION, ActionType::Ambiguous.code());
    }

    #[test]
    fn test_from_code_valid() {
        assert_eq!(ActionType::from_code(1), Some(ActionType::SwitchChannel));
        assert_eq!(ActionType::from_code(2), Some(ActionType::SwitchInput));
        assert_eq!(ActionType::from_code(3), Some(ActionType::Ambiguous));
    }

    #[test]
    fn test_from_code_invalid() {
        assert_eq!(ActionType::from_code(0), None);
        assert_eq!(ActionType::from_code(4), None);
        assert_eq!(ActionType::from_code(-1), None);
    }

    #[test]
    fn test_suggestion_result_new() {
        let row = SuggestionResult::new("ch1", "News Channel");
        assert_eq!(row.id, "ch1");
        assert_eq!(row.title, "News Channel");
        assert!(row.description.is_none());
        assert!(!row.is_playable);
    }

    #[test]
    fn test_suggestion_result_serialize_skips_none() {
        let row = SuggestionResult::new("ch1", "News Channel");
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["id"], "ch1");
        assert_eq!(json["title"], "News Channel");
        assert!(json.get("intentAction").is_none());
        assert!(json.get("durationMillis").is_none());
    }

    #[test]
    fn test_suggestion_result_deserialize_camel_case() {
        let json = r#"{
            "id": "prog-42",
            "title": "Nature Documentary",
            "intentAction": "view",
            "intentData": "content://channels/42",
            "isPlayable": true,
            "progressPercentage": 60,
            "durationMillis": 3600000
        }"#;
        let row: SuggestionResult = serde_json::from_str(json).unwrap();
        assert_eq!(row.intent_action, Some("view".to_string()));
        assert_eq!(row.intent_data, Some("content://channels/42".to_string()));
        assert!(row.is_playable);
        assert_eq!(row.progress_percentage, Some(60));
        assert_eq!(row.duration_millis, Some(3_600_000));
    }

    #[test]
    fn test_suggestion_result_roundtrip() {
        let mut row = SuggestionResult::new("ch2", "Cooking Show");
        row.description = Some("Channel 2".to_string());
        row.video_width = Some(1920);
        row.video_height = Some(1080);

        let json = serde_json::to_string(&row).unwrap();
        let back: SuggestionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    proptest! {
        #[test]
        fn prop_from_code_agrees_with_code(code in -100i64..100) {
            match ActionType::from_code(code) {
                Some(action) => prop_assert_eq!(action.code(), code),
                None => prop_assert!(!(ACTION_TYPE_START..=ACTION_TYPE_END).contains(&code)),
            }
        }
    }
}
