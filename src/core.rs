use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

use super::config::{EdgarConfig, EdgarUrls};
use super::error::{EdgarError, Result};
use super::traits::Fetch;

const PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct Edgar {
    /// HTTP client for making requests
    pub(crate) client: reqwest::Client,

    /// Base URLs for the archive, data and files hosts
    pub(crate) urls: EdgarUrls,
}

/// HTTP client for the SEC EDGAR endpoints used by this crate.
///
/// `Edgar` is the production [`Fetch`] implementation. It sends the configured
/// identification string as `User-Agent` on every request, as SEC.gov's fair
/// access policy requires, and lets `reqwest` derive the `Host` header from each
/// URL (the ticker feed and the submission histories are served by different
/// hosts). Responses are requested gzip-encoded.
///
/// Each call performs exactly one GET. There is no retry, throttling or caching
/// layer; a failed request surfaces as an [`EdgarError`].
///
/// # Examples
///
/// ```rust
/// # use edgarlookup::Edgar;
/// let edgar = Edgar::new("my_app/1.0 (my@email.com)")?;
/// # Ok::<(), edgarlookup::EdgarError>(())
/// ```
///
/// With custom configuration:
///
/// ```rust
/// # use edgarlookup::{Edgar, EdgarConfig, EdgarUrls};
/// # use std::time::Duration;
/// let config = EdgarConfig {
///     user_agent: "custom_app/2.0 ops@example.com".to_string(),
///     timeout: Duration::from_secs(60),
///     base_urls: EdgarUrls::default(),
/// };
/// let edgar = Edgar::with_config(config)?;
/// # Ok::<(), edgarlookup::EdgarError>(())
/// ```
impl Edgar {
    /// Creates a new Edgar client with a 30-second timeout and the SEC.gov base URLs.
    ///
    /// # Arguments
    ///
    /// * `user_agent` - A descriptive identifier for your application, following the format
    ///   "AppName contact@email.com". The SEC uses it to contact you if your traffic
    ///   causes issues.
    pub fn new(user_agent: &str) -> Result<Self> {
        let config = EdgarConfig {
            user_agent: user_agent.to_string(),
            timeout: Duration::from_secs(30),
            base_urls: EdgarUrls::default(),
        };
        Self::with_config(config)
    }

    /// Creates an Edgar client with custom configuration settings.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::ConfigError` if the user agent is not a valid header value
    /// or the HTTP client cannot be built.
    pub fn with_config(config: EdgarConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| EdgarError::ConfigError(format!("Invalid user agent: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| EdgarError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Edgar {
            client,
            urls: config.base_urls,
        })
    }

    /// Fetches text content from a URL.
    ///
    /// For URLs ending in `.json` the body is checked for an HTML error page. SEC.gov
    /// occasionally serves JSON with a `text/html` content type, so the body itself is
    /// inspected before giving up.
    ///
    /// # Errors
    ///
    /// * `EdgarError::UnexpectedContentType` - JSON URL returned HTML content
    /// * `EdgarError::NotFound` - Resource doesn't exist (HTTP 404)
    /// * `EdgarError::RequestError` - Network or HTTP errors
    /// * `EdgarError::InvalidResponse` - Any other status code, with a body preview
    pub async fn get(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();

        let html_content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|val| val.to_str().ok())
            .filter(|ct| ct.to_lowercase().contains("text/html"))
            .map(str::to_string);

        match status {
            reqwest::StatusCode::OK => {
                let body = response.text().await?;
                match html_content_type {
                    Some(ct) if url.ends_with(".json") => {
                        let trimmed = body.trim_start();
                        if trimmed.starts_with('{') || trimmed.starts_with('[') {
                            tracing::warn!(
                                "Received text/html content-type for .json URL, but content appears to be JSON: {}",
                                url
                            );
                            Ok(body)
                        } else {
                            Err(EdgarError::UnexpectedContentType {
                                url: url.to_string(),
                                expected_pattern: "application/json".to_string(),
                                got_content_type: ct,
                                content_preview: body.chars().take(PREVIEW_CHARS).collect(),
                            })
                        }
                    }
                    _ => Ok(body),
                }
            }
            reqwest::StatusCode::NOT_FOUND => Err(EdgarError::NotFound),
            other_status => {
                let error_body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read error body".to_string());

                Err(EdgarError::InvalidResponse(format!(
                    "Unexpected status code: {} for URL: {}. Response preview: {}",
                    other_status,
                    url,
                    error_body.chars().take(PREVIEW_CHARS).collect::<String>()
                )))
            }
        }
    }

    /// Returns the base URL for EDGAR archives.
    pub fn archives_url(&self) -> &str {
        &self.urls.archives
    }

    /// Returns the base URL for EDGAR data.
    pub fn data_url(&self) -> &str {
        &self.urls.data
    }

    /// Returns the base URL for EDGAR files.
    pub fn files_url(&self) -> &str {
        &self.urls.files
    }
}

#[async_trait]
impl Fetch for Edgar {
    fn urls(&self) -> &EdgarUrls {
        &self.urls
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        self.get(url).await
    }
}
