use serde::Deserialize;

/// Default per-call upstream timeout in seconds.
///
/// LeetCode's GraphQL endpoint imposes no timeout of its own; without one a
/// single hung candidate request would hold its fan-out slot indefinitely.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 4;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub leetcode_base_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            leetcode_base_url: std::env::var("LEETCODE_BASE_URL")
                .unwrap_or_else(|_| "https://leetcode.com".to_string())
                .trim_end_matches('/')
                .to_string(),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .map(|v| {
                    v.parse()
                        .map_err(|_| anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be a number"))
                })
                .unwrap_or(Ok(DEFAULT_REQUEST_TIMEOUT_SECS))?,
        };

        if config.leetcode_base_url.trim().is_empty() {
            anyhow::bail!("LEETCODE_BASE_URL cannot be empty");
        }
        if !config.leetcode_base_url.starts_with("http://")
            && !config.leetcode_base_url.starts_with("https://")
        {
            anyhow::bail!("LEETCODE_BASE_URL must start with http:// or https://");
        }
        if config.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be at least 1");
        }

        tracing::debug!("LeetCode base URL: {}", config.leetcode_base_url);
        tracing::debug!("Upstream timeout: {}s", config.request_timeout_secs);
        tracing::debug!("Server port: {}", config.port);

        Ok(config)
    }
}
