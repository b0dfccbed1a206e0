// Tue Jan 13 2026 - Alex

use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::{PanodataError, Result};
use crate::fetch::PageFetcher;
use crate::orchestration::collector::{PageOutcome, ResultCollector, RunReport};
use crate::orchestration::planner::{OffsetRange, RangePlanner};
use crate::utils::ScopedTimer;
use parking_lot::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Fetches every page of a query with a bounded pool of workers.
///
/// The first page is fetched on the calling thread and decides how many more
/// ranges exist. Those are fed through a work queue of capacity `concurrency`
/// to `concurrency` scoped workers, which report each outcome to a
/// [`ResultCollector`] running on the calling thread. Only a first page
/// failure is an error; later failures just leave their records out.
pub struct PageAggregator<F> {
    fetcher: F,
    planner: RangePlanner,
}

impl<F> PageAggregator<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_page_size(fetcher, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(fetcher: F, page_size: usize) -> Self {
        Self {
            fetcher,
            planner: RangePlanner::new(page_size),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn page_size(&self) -> usize {
        self.planner.page_size()
    }

    pub fn run<R>(&self, base_url: &str, concurrency: usize) -> Result<Vec<R>>
    where
        F: PageFetcher<R>,
        R: Send,
    {
        self.run_with_report(base_url, concurrency)
            .map(RunReport::into_records)
    }

    /// Like [`run`](Self::run), but also reports how many pages were dropped.
    pub fn run_with_report<R>(&self, base_url: &str, concurrency: usize) -> Result<RunReport<R>>
    where
        F: PageFetcher<R>,
        R: Send,
    {
        if concurrency == 0 {
            return Err(PanodataError::Config("concurrency must be greater than 0".to_string()));
        }

        let _timer = ScopedTimer::new("page aggregation");
        let page_size = self.planner.page_size();

        let first_url = self.planner.first_range().apply(base_url);
        let first = self
            .fetcher
            .fetch(&first_url)
            .map_err(|e| PanodataError::first_page(first_url.as_str(), e))?;

        let total_count = first.count;
        let fits = total_count <= page_size as i64 && first.len() <= page_size;
        let mut collector = ResultCollector::new(first);
        if fits {
            log::debug!("{} records fit in a single page", collector.record_count());
            return Ok(collector.finish());
        }

        let remaining = self.planner.plan(total_count);
        log::debug!(
            "{} records reported, fetching {} more pages with {} workers",
            total_count,
            remaining.remaining(),
            concurrency
        );

        // Ranges are produced lazily: the queue, not the plan, bounds memory.
        // Workers share the receiver so it closes once the last one exits.
        let (work_tx, work_rx) = mpsc::sync_channel::<OffsetRange>(concurrency);
        let work_rx = Arc::new(Mutex::new(work_rx));
        let (result_tx, result_rx) = mpsc::channel::<PageOutcome<R>>();

        thread::scope(|scope| {
            scope.spawn(move || {
                for range in remaining {
                    if work_tx.send(range).is_err() {
                        break;
                    }
                }
            });

            for worker_id in 0..concurrency {
                let work_rx = Arc::clone(&work_rx);
                let result_tx = result_tx.clone();
                let fetcher = &self.fetcher;
                scope.spawn(move || {
                    Self::worker_loop(worker_id, fetcher, base_url, work_rx, result_tx)
                });
            }
            drop(work_rx);
            drop(result_tx);

            collector.drain(result_rx);
        });

        let report = collector.finish();
        if report.pages_dropped > 0 {
            log::warn!(
                "{} of {} pages failed, returning {} records",
                report.pages_dropped,
                report.pages_fetched + report.pages_dropped,
                report.records.len()
            );
        }
        Ok(report)
    }

    fn worker_loop<R>(
        worker_id: usize,
        fetcher: &F,
        base_url: &str,
        work: Arc<Mutex<Receiver<OffsetRange>>>,
        results: Sender<PageOutcome<R>>,
    ) where
        F: PageFetcher<R>,
    {
        loop {
            let range = match work.lock().recv() {
                Ok(range) => range,
                Err(_) => break,
            };

            let outcome = match fetcher.fetch(&range.apply(base_url)) {
                Ok(page) => PageOutcome::Fetched { range, page },
                Err(error) => PageOutcome::Dropped { range, error },
            };

            if results.send(outcome).is_err() {
                break;
            }
        }
        log::trace!("worker {} finished", worker_id);
    }
}
