use crate::candidates::generate_candidates;
use crate::config::Config;
use crate::errors::AppError;
use crate::leetcode_client::{LeetCodeClient, FULL_PROFILE_QUERY, SEARCH_PROFILE_QUERY};
use crate::models::{
    GraphqlUserResponse, ProfileSummary, SearchData, SearchEnvelope, EMPTY_SEARCH_ENVELOPE,
};
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use std::time::Duration;

/// Concurrency ceiling for candidate probes against LeetCode.
pub const MAX_IN_FLIGHT: usize = 10;

/// Service wrapping user discovery and profile lookup against LeetCode.
#[derive(Clone)]
pub struct LeetCodeService {
    client: LeetCodeClient,
}

impl LeetCodeService {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = LeetCodeClient::new(
            config.leetcode_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Ok(Self { client })
    }

    /// Searches for users matching a keyword.
    ///
    /// Generates candidate usernames, probes them against LeetCode with at
    /// most [`MAX_IN_FLIGHT`] requests in flight, deduplicates by resolved
    /// username in completion order, and returns the serialized
    /// `{"data":{"userSearchList":[...]}}` envelope.
    ///
    /// This operation never fails: candidates that error or do not resolve
    /// are dropped, and a serialization failure degrades to the empty
    /// envelope.
    pub async fn search_users(&self, keyword: &str) -> String {
        let candidates = generate_candidates(keyword);
        tracing::info!(
            "Searching {} candidate usernames for keyword '{}'",
            candidates.len(),
            keyword
        );

        let mut probes = stream::iter(candidates)
            .map(|username| async move { self.try_get_user(&username).await })
            .buffer_unordered(MAX_IN_FLIGHT);

        // Dedupe by the username LeetCode confirmed, not by candidate text:
        // case-variant candidates resolve to the same account.
        let mut seen: HashSet<String> = HashSet::new();
        let mut users: Vec<ProfileSummary> = Vec::new();
        while let Some(result) = probes.next().await {
            if let Some(user) = result {
                if seen.insert(user.username.clone()) {
                    users.push(user);
                }
            }
        }

        tracing::info!("Search resolved {} distinct users", users.len());

        let envelope = SearchEnvelope {
            data: SearchData {
                user_search_list: users,
            },
        };
        match serde_json::to_string(&envelope) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("Failed to serialize search result: {}", e);
                EMPTY_SEARCH_ENVELOPE.to_string()
            }
        }
    }

    /// Probes a single candidate username.
    ///
    /// Any failure - transport error, non-success status, unparseable body,
    /// or an absent/null `matchedUser` - collapses to `None` so one bad
    /// candidate cannot abort the batch.
    pub async fn try_get_user(&self, username: &str) -> Option<ProfileSummary> {
        let body = self
            .client
            .query_user(SEARCH_PROFILE_QUERY, username)
            .await
            .ok()?;
        let parsed: GraphqlUserResponse = serde_json::from_str(&body).ok()?;
        let matched = parsed.data?.matched_user?;
        Some(ProfileSummary::from_matched_user(matched))
    }

    /// Fetches the full public profile for a known username.
    ///
    /// Returns the upstream body verbatim on HTTP success, including bodies
    /// with `matchedUser: null`. Unlike the search path, failures here are
    /// surfaced: the caller asked about a specific username and needs to
    /// know why the lookup failed.
    pub async fn get_user_profile(&self, username: &str) -> Result<String, AppError> {
        tracing::info!("Fetching full profile for '{}'", username);
        self.client.query_user(FULL_PROFILE_QUERY, username).await
    }
}
