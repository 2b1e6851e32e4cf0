//! HTTP client for fetching interview pages.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScrapeError;

/// HTTP client for interview page fetches.
///
/// One GET per page with a fixed timeout and a browser-like `User-Agent`.
/// Non-2xx responses surface as typed errors; there is no retry here — the
/// export loop skips a failed page and moves on.
pub struct PageClient {
    client: Client,
}

impl PageClient {
    /// Creates a `PageClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches one interview page and returns its HTML body.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::NotFound`] — HTTP 404.
    /// - [`ScrapeError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ScrapeError::Http`] — network, TLS, or timeout failure.
    pub async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScrapeError::NotFound {
                url: url.to_owned(),
            });
        }
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}
