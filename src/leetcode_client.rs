use crate::errors::AppError;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, REFERER, USER_AGENT};
use serde_json::json;
use std::time::Duration;

/// Narrow query used to probe whether a candidate username exists.
pub const SEARCH_PROFILE_QUERY: &str = r#"
    query userPublicProfile($username: String!) {
      matchedUser(username: $username) {
        username
        profile {
          ranking
          userAvatar
          realName
          reputation
        }
      }
    }
"#;

/// Wide query used for direct profile lookups.
pub const FULL_PROFILE_QUERY: &str = r#"
    query userPublicProfile($username: String!) {
      matchedUser(username: $username) {
        username
        profile {
          ranking
          userAvatar
          realName
          reputation
          websites
          countryName
          skillTags
          company
          school
          starRating
          aboutMe
          solutionCount
          postViewCount
        }
        submitStats {
          acSubmissionNum {
            difficulty
            count
            submissions
          }
          totalSubmissionNum {
            difficulty
            count
            submissions
          }
        }
      }
    }
"#;

/// Client for LeetCode's public GraphQL endpoint.
///
/// LeetCode rejects requests without a browser-like user agent and a referer,
/// so both are set as default headers.
#[derive(Clone)]
pub struct LeetCodeClient {
    client: reqwest::Client,
    base_url: String,
}

impl LeetCodeClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the LeetCode host, without trailing slash.
    /// * `timeout` - Per-request timeout; also bounds how long a hung
    ///   upstream call can occupy a fan-out slot.
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(REFERER, HeaderValue::from_static("https://leetcode.com"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
            ),
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                AppError::ExternalApiError(format!("Failed to create LeetCode client: {}", e))
            })?;

        Ok(Self { client, base_url })
    }

    /// Sends a GraphQL query for `username` and returns the raw response body.
    ///
    /// Non-success HTTP statuses become [`AppError::UpstreamStatus`] carrying
    /// the status code and upstream body text; network and body-read failures
    /// become [`AppError::ExternalApiError`].
    pub async fn query_user(&self, query: &str, username: &str) -> Result<String, AppError> {
        let url = format!("{}/graphql", self.base_url);
        let body = json!({
            "query": query,
            "variables": { "username": username }
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("LeetCode request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::UpstreamStatus { status, body });
        }

        response.text().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to read LeetCode response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = LeetCodeClient::new(
            "https://leetcode.com".to_string(),
            Duration::from_secs(4),
        );
        assert!(client.is_ok());
    }
}
