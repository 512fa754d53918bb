//! Low-level HTTP client — `BybitHttp`.
//!
//! One generic public-GET entry point shared by every endpoint binding:
//! the binding supplies a path plus query pairs, the transport assembles
//! the URL, performs the request under the configured retry policy, maps
//! non-success statuses, and decodes the JSON body. Internal to the SDK —
//! the high-level client wraps this.

use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the spot REST API.
#[derive(Clone)]
pub struct BybitHttp {
    base_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl BybitHttp {
    pub fn new(base_url: &str, timeout: Duration, retry: RetryPolicy) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retry,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform an unauthenticated GET against `path` and decode the JSON
    /// body into `T`.
    ///
    /// An empty `query` produces a URL with no `?` at all; values are
    /// percent-encoded when the query string is assembled.
    pub async fn get_public<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, HttpError> {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect();
            url = format!("{}?{}", url, pairs.join("&"));
        }
        self.get_with_retry(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get_with_retry<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let config = match &self.retry {
            RetryPolicy::None => {
                return self.do_get(url).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_get::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            let retry = config.retryable_statuses.contains(&429);
                            if retry {
                                if let Some(ms) = retry_after_ms {
                                    futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                                }
                            }
                            retry
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            url
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
