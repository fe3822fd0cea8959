//! SurveyMonkey HTTP client
//!
//! Implements [`ResponseFetcher`] against the v3 bulk responses API. Handles
//! Bearer authentication, request timeouts, bounded exponential-backoff retry
//! for transient failures, and classification of HTTP 429 as rate-limit
//! exhaustion, which is never retried because the daily budget is spent.

use super::models::BulkResponsesEnvelope;
use super::ResponseFetcher;
use crate::config::SurveyMonkeyConfig;
use crate::domain::ids::SurveyId;
use crate::domain::{ProviderError, ResponsePage, Result, SurveyorError};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;
use url::Url;

/// HTTP client for the SurveyMonkey v3 API
pub struct SurveyMonkeyClient {
    base_url: Url,
    client: Client,
    config: SurveyMonkeyConfig,
}

impl SurveyMonkeyClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL does not parse or the
    /// underlying HTTP client cannot be built.
    pub fn new(config: SurveyMonkeyConfig) -> Result<Self> {
        let base_url = Url::parse(config.base_url.trim_end_matches('/')).map_err(|e| {
            SurveyorError::Configuration(format!(
                "Invalid surveymonkey.base_url '{}': {e}",
                config.base_url
            ))
        })?;

        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                SurveyorError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url,
            client,
            config,
        })
    }

    /// Base URL of the API
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Retry an operation with exponential backoff
    ///
    /// Only transient errors are retried; rate-limit exhaustion and client
    /// errors escalate immediately.
    async fn retry_request<F, T, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let max_retries = self.config.retry.max_retries;
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    let transient = matches!(
                        &e,
                        SurveyorError::Provider(p) if p.is_transient()
                    );

                    attempt += 1;
                    if !transient || attempt >= max_retries {
                        return Err(e);
                    }

                    let delay_ms = self.config.retry.initial_delay_ms
                        * (self
                            .config
                            .retry
                            .backoff_multiplier
                            .powf((attempt - 1) as f64) as u64)
                            .max(1);
                    let delay_ms = delay_ms.min(self.config.retry.max_delay_ms);

                    tracing::warn!(
                        attempt = attempt,
                        max_retries = max_retries,
                        delay_ms = delay_ms,
                        error = %e,
                        "Retrying request after transient error"
                    );

                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
            }
        }
    }

    async fn fetch_once(&self, url: &str) -> Result<ResponsePage> {
        let resp = self
            .client
            .get(url)
            .header(
                "Authorization",
                format!(
                    "Bearer {}",
                    self.config.access_token.expose_secret().as_ref()
                ),
            )
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SurveyorError::Provider(ProviderError::Timeout(e.to_string()))
                } else {
                    SurveyorError::Provider(ProviderError::ConnectionFailed(e.to_string()))
                }
            })?;

        match resp.status() {
            StatusCode::OK => {
                let envelope: BulkResponsesEnvelope = resp.json().await.map_err(|e| {
                    SurveyorError::Provider(ProviderError::InvalidResponse(e.to_string()))
                })?;
                Ok(envelope.into_page())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = resp
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .map(String::from);
                Err(SurveyorError::Provider(ProviderError::RateLimitExhausted {
                    retry_after,
                }))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                Err(SurveyorError::Provider(ProviderError::AuthenticationFailed(
                    format!("{status}: {body}"),
                )))
            }
            status if status.is_server_error() => {
                let body = resp.text().await.unwrap_or_default();
                Err(SurveyorError::Provider(ProviderError::ServerError {
                    status: status.as_u16(),
                    message: body,
                }))
            }
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(SurveyorError::Provider(ProviderError::ClientError {
                    status: status.as_u16(),
                    message: body,
                }))
            }
        }
    }
}

#[async_trait]
impl ResponseFetcher for SurveyMonkeyClient {
    fn bulk_url(&self, survey_id: &SurveyId, since: Option<DateTime<Utc>>) -> String {
        let mut url = self.base_url.clone();
        url.set_path(&format!(
            "{}/v3/surveys/{survey_id}/responses/bulk",
            self.base_url.path().trim_end_matches('/')
        ));

        url.query_pairs_mut()
            .append_pair("per_page", &self.config.page_size.to_string());

        // No watermark means first-ever export: request full history
        if let Some(since) = since {
            url.query_pairs_mut().append_pair(
                "start_modified_at",
                &since.to_rfc3339_opts(SecondsFormat::Secs, true),
            );
        }

        url.into()
    }

    async fn fetch_page(&self, url: &str) -> Result<ResponsePage> {
        tracing::debug!(url = %url, "Fetching responses page");
        self.retry_request(|| self.fetch_once(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret::SecretValue;
    use crate::config::RetryConfig;
    use chrono::TimeZone;
    use secrecy::Secret;

    fn config_for(base_url: &str) -> SurveyMonkeyConfig {
        SurveyMonkeyConfig {
            base_url: base_url.to_string(),
            access_token: Secret::new(SecretValue::from("tok".to_string())),
            timeout_seconds: 30,
            page_size: 100,
            retry: RetryConfig::default(),
        }
    }

    fn client() -> SurveyMonkeyClient {
        SurveyMonkeyClient::new(config_for("https://api.surveymonkey.com/")).unwrap()
    }

    #[test]
    fn test_base_url_normalized() {
        assert_eq!(client().base_url(), "https://api.surveymonkey.com/");
    }

    #[test]
    fn test_invalid_base_url_rejected_at_construction() {
        let result = SurveyMonkeyClient::new(config_for("http://exa mple.com"));
        assert!(matches!(result, Err(SurveyorError::Configuration(_))));
    }

    #[test]
    fn test_bulk_url_without_watermark_has_no_time_filter() {
        let url = client().bulk_url(&SurveyId::new("316084387").unwrap(), None);
        assert_eq!(
            url,
            "https://api.surveymonkey.com/v3/surveys/316084387/responses/bulk?per_page=100"
        );
    }

    #[test]
    fn test_bulk_url_with_watermark_filters_by_modified_time() {
        let since = Utc.with_ymd_and_hms(2023, 5, 1, 10, 30, 0).unwrap();
        let url = client().bulk_url(&SurveyId::new("316084387").unwrap(), Some(since));
        assert!(url.contains("per_page=100"));
        assert!(url.contains("start_modified_at=2023-05-01T10%3A30%3A00Z"));
    }
}
