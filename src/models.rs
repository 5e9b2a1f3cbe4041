use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ============ Outbound (consumer-facing) models ============

/// A resolved LeetCode user, as returned in search results.
///
/// Field names mirror the wire format consumers expect; `_id` is derived
/// locally (LeetCode does not expose a stable numeric id on this query).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileSummary {
    /// Stable identifier derived from the username.
    #[serde(rename = "_id")]
    pub id: String,
    /// The confirmed LeetCode username.
    pub username: String,
    /// Real name from the public profile, empty when unset.
    #[serde(rename = "realName")]
    pub real_name: String,
    /// Avatar URL, empty when unset.
    #[serde(rename = "userAvatar")]
    pub user_avatar: String,
    /// Global ranking, 0 when unset.
    pub ranking: i64,
    /// Community reputation, 0 when unset.
    pub reputation: i64,
}

/// Envelope wrapping the search result list.
#[derive(Debug, Serialize)]
pub struct SearchEnvelope {
    pub data: SearchData,
}

#[derive(Debug, Serialize)]
pub struct SearchData {
    #[serde(rename = "userSearchList")]
    pub user_search_list: Vec<ProfileSummary>,
}

/// Envelope serialized when result assembly fails. Search never errors.
pub const EMPTY_SEARCH_ENVELOPE: &str = "{\"data\":{\"userSearchList\":[]}}";

// ============ Upstream GraphQL response models ============

/// Top-level shape of a LeetCode GraphQL response for the narrow
/// `userPublicProfile` query. Every level is null-tolerant: an unknown
/// username comes back as HTTP 200 with `matchedUser: null`.
#[derive(Debug, Deserialize)]
pub struct GraphqlUserResponse {
    #[serde(default)]
    pub data: Option<GraphqlUserData>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlUserData {
    #[serde(rename = "matchedUser")]
    #[serde(default)]
    pub matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
pub struct MatchedUser {
    pub username: String,
    #[serde(default)]
    pub profile: Option<UserProfileFields>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserProfileFields {
    #[serde(default)]
    pub ranking: Option<i64>,
    #[serde(rename = "userAvatar")]
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(rename = "realName")]
    #[serde(default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub reputation: Option<i64>,
}

impl ProfileSummary {
    /// Builds a summary from a matched user, filling absent profile fields
    /// with empty-string/zero defaults.
    pub fn from_matched_user(matched: MatchedUser) -> Self {
        let profile = matched.profile.unwrap_or_default();
        Self {
            id: profile_id(&matched.username),
            username: matched.username,
            real_name: profile.real_name.unwrap_or_default(),
            user_avatar: profile.user_avatar.unwrap_or_default(),
            ranking: profile.ranking.unwrap_or(0),
            reputation: profile.reputation.unwrap_or(0),
        }
    }
}

/// Derives a stable hexadecimal id for a username.
///
/// Same username always yields the same id across calls and processes.
pub fn profile_id(username: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(username.as_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..12].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_id_is_deterministic() {
        assert_eq!(profile_id("alice"), profile_id("alice"));
        assert_ne!(profile_id("alice"), profile_id("Alice"));
    }

    #[test]
    fn profile_id_is_short_hex() {
        let id = profile_id("some_user");
        assert_eq!(id.len(), 12);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn summary_defaults_missing_profile_fields() {
        let matched = MatchedUser {
            username: "ghost".to_string(),
            profile: None,
        };
        let summary = ProfileSummary::from_matched_user(matched);
        assert_eq!(summary.username, "ghost");
        assert_eq!(summary.real_name, "");
        assert_eq!(summary.user_avatar, "");
        assert_eq!(summary.ranking, 0);
        assert_eq!(summary.reputation, 0);
    }

    #[test]
    fn summary_serializes_with_wire_field_names() {
        let summary = ProfileSummary {
            id: "abc123".to_string(),
            username: "alice".to_string(),
            real_name: "Alice".to_string(),
            user_avatar: "https://example.com/a.png".to_string(),
            ranking: 42,
            reputation: 7,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["_id"], "abc123");
        assert_eq!(value["realName"], "Alice");
        assert_eq!(value["userAvatar"], "https://example.com/a.png");
        assert_eq!(value["ranking"], 42);
        assert_eq!(value["reputation"], 7);
    }

    #[test]
    fn null_matched_user_deserializes() {
        let body = r#"{"data":{"matchedUser":null}}"#;
        let parsed: GraphqlUserResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.data.unwrap().matched_user.is_none());
    }
}
