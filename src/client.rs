// Tue Jan 13 2026 - Alex

use crate::config::FetchConfig;
use crate::error::Result;
use crate::fetch::{HttpFetcher, Photo};
use crate::orchestration::{PageAggregator, RunReport};
use crate::query::Query;
use reqwest::Url;

/// Runs queries against the configured catalog endpoint over HTTP.
pub struct Client {
    config: FetchConfig,
    endpoint: Url,
    aggregator: PageAggregator<HttpFetcher>,
}

impl Client {
    pub fn new() -> Result<Self> {
        Self::with_config(FetchConfig::default())
    }

    pub fn with_config(config: FetchConfig) -> Result<Self> {
        config.validate()?;
        let endpoint = config.endpoint_url()?;
        let fetcher = HttpFetcher::new(&config)?;
        let aggregator = PageAggregator::with_page_size(fetcher, config.page_size);

        Ok(Self {
            config,
            endpoint,
            aggregator,
        })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    pub fn url_for(&self, query: &Query) -> String {
        query.url_at(&self.endpoint)
    }

    /// Fetches every photo matching `query` using `concurrency` parallel requests.
    pub fn run(&self, query: &Query, concurrency: usize) -> Result<Vec<Photo>> {
        self.aggregator.run(&self.url_for(query), concurrency)
    }

    pub fn run_with_report(&self, query: &Query, concurrency: usize) -> Result<RunReport<Photo>> {
        self.aggregator.run_with_report(&self.url_for(query), concurrency)
    }

    /// Runs with the configured concurrency.
    pub fn run_default(&self, query: &Query) -> Result<Vec<Photo>> {
        self.run(query, self.config.concurrency)
    }
}

impl Query {
    /// Runs this query against the public endpoint with default settings.
    pub fn run(&self, concurrency: usize) -> Result<Vec<Photo>> {
        Client::new()?.run(self, concurrency)
    }
}
