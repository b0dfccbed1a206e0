// Tue Jan 13 2026 - Alex

use crate::error::PanodataError;
use crate::fetch::Page;
use crate::orchestration::planner::OffsetRange;
use std::sync::mpsc::Receiver;

/// What a worker reports back for one range.
#[derive(Debug)]
pub enum PageOutcome<R> {
    Fetched { range: OffsetRange, page: Page<R> },
    Dropped { range: OffsetRange, error: PanodataError },
}

/// Records of a run plus how many pages made it into them.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport<R> {
    pub records: Vec<R>,
    pub pages_fetched: usize,
    pub pages_dropped: usize,
}

impl<R> RunReport<R> {
    pub fn is_complete(&self) -> bool {
        self.pages_dropped == 0
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

/// Sole owner of the accumulated records while workers are running.
pub struct ResultCollector<R> {
    records: Vec<R>,
    pages_fetched: usize,
    pages_dropped: usize,
}

impl<R> ResultCollector<R> {
    pub fn new(first: Page<R>) -> Self {
        Self {
            records: first.into_records(),
            pages_fetched: 1,
            pages_dropped: 0,
        }
    }

    pub fn collect(&mut self, outcome: PageOutcome<R>) {
        match outcome {
            PageOutcome::Fetched { range, page } => {
                log::debug!("merging {} records from {}", page.len(), range);
                self.records.extend(page.into_records());
                self.pages_fetched += 1;
            }
            PageOutcome::Dropped { range, error } => {
                log::warn!("dropping page {}: {}", range, error);
                self.pages_dropped += 1;
            }
        }
    }

    /// Collects until every sender is gone.
    pub fn drain(&mut self, outcomes: Receiver<PageOutcome<R>>) {
        for outcome in outcomes {
            self.collect(outcome);
        }
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn finish(self) -> RunReport<R> {
        RunReport {
            records: self.records,
            pages_fetched: self.pages_fetched,
            pages_dropped: self.pages_dropped,
        }
    }
}
