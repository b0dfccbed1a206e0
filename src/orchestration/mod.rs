// Tue Jan 13 2026 - Alex

pub mod planner;
pub mod collector;
pub mod aggregator;

pub use planner::{plan, OffsetRange, RangePlanner};
pub use collector::{PageOutcome, ResultCollector, RunReport};
pub use aggregator::PageAggregator;
