// Tue Jan 13 2026 - Alex

pub mod http;

pub use http::HttpFetcher;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A photo in the catalog, as returned by the remote service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    #[serde(rename = "photo_id")]
    pub id: i64,
    #[serde(rename = "photo_title")]
    pub title: String,
    #[serde(rename = "photo_url")]
    pub url: String,
    #[serde(rename = "photo_file_url")]
    pub file_url: String,
    #[serde(rename = "latitude")]
    pub lat: f64,
    #[serde(rename = "longitude")]
    pub lon: f64,
    pub width: i64,
    pub height: i64,
    pub upload_date: String,
    pub owner_id: i64,
    pub owner_name: String,
    pub owner_url: String,
}

/// One response of the remote service: the total match count plus a window of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<R> {
    pub count: i64,
    #[serde(default = "Vec::new")]
    pub photos: Vec<R>,
}

impl<R> Page<R> {
    pub fn new(count: i64, photos: Vec<R>) -> Self {
        Self { count, photos }
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn into_records(self) -> Vec<R> {
        self.photos
    }
}

/// Fetches a single page of records. Implementations do one round trip and never retry.
pub trait PageFetcher<R>: Send + Sync {
    fn fetch(&self, url: &str) -> Result<Page<R>>;
}

impl<R, F> PageFetcher<R> for &F
where
    F: PageFetcher<R> + ?Sized,
{
    fn fetch(&self, url: &str) -> Result<Page<R>> {
        (**self).fetch(url)
    }
}

pub fn add_range(url: &str, from: usize, to: usize) -> String {
    format!("{}&from={}&to={}", url, from, to)
}
