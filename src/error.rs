// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanodataError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Request {url} returned status code {code}")]
    Status { code: u16, url: String },
    #[error("JSON parsing error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("First page request {url} failed: {source}")]
    FirstPage {
        url: String,
        source: Box<PanodataError>,
    },
}

impl PanodataError {
    pub fn first_page(url: impl Into<String>, source: PanodataError) -> Self {
        PanodataError::FirstPage {
            url: url.into(),
            source: Box::new(source),
        }
    }

    pub fn is_first_page(&self) -> bool {
        matches!(self, PanodataError::FirstPage { .. })
    }

    /// Strips the first page wrapper, if any.
    pub fn root_cause(&self) -> &PanodataError {
        match self {
            PanodataError::FirstPage { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, PanodataError>;
