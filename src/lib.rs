// Tue Jan 15 2026 - Alex

//! Bounding-box queries against the Panoramio photo catalog.
//!
//! A [`Query`] renders to a request URL; [`PageAggregator`] pulls every page
//! of results for it with a bounded pool of worker threads.

pub mod config;
pub mod error;
pub mod query;
pub mod fetch;
pub mod orchestration;
pub mod client;
pub mod utils;

pub use config::FetchConfig;
pub use error::{PanodataError, Result};
pub use query::{Query, Set, Size};
pub use fetch::{add_range, HttpFetcher, Page, PageFetcher, Photo};
pub use orchestration::{OffsetRange, PageAggregator, RangePlanner, RunReport};
pub use client::Client;
