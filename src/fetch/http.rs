// Tue Jan 13 2026 - Alex

use crate::config::FetchConfig;
use crate::error::{PanodataError, Result};
use crate::fetch::{Page, PageFetcher};
use serde::de::DeserializeOwned;

/// Blocking HTTP page fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;

        Ok(Self { http })
    }

    pub fn with_client(http: reqwest::blocking::Client) -> Self {
        Self { http }
    }
}

impl<R: DeserializeOwned> PageFetcher<R> for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Page<R>> {
        let resp = self.http.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PanodataError::Status {
                code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.bytes()?;
        let page: Page<R> = serde_json::from_slice(&body)?;

        log::trace!("fetched {} records from {}", page.len(), url);
        Ok(page)
    }
}
