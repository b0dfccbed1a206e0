// Tue Jan 13 2026 - Alex

use crate::fetch::add_range;
use std::fmt;

/// Half-open `[from, to)` window of record indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OffsetRange {
    pub from: usize,
    pub to: usize,
}

impl OffsetRange {
    pub fn new(from: usize, to: usize) -> Self {
        debug_assert!(to > from, "empty offset range {}..{}", from, to);
        Self { from, to }
    }

    pub fn width(&self) -> usize {
        self.to - self.from
    }

    /// Appends this range to a base request URL.
    pub fn apply(&self, url: &str) -> String {
        add_range(url, self.from, self.to)
    }
}

impl fmt::Display for OffsetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RangePlanner {
    page_size: usize,
}

impl RangePlanner {
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be greater than 0");
        Self { page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn first_range(&self) -> OffsetRange {
        OffsetRange::new(0, self.page_size)
    }

    pub fn plan(&self, total_count: i64) -> RangePlan {
        plan(total_count, self.page_size)
    }

    /// Requests a full run issues, first page included.
    pub fn expected_fetches(&self, total_count: i64) -> usize {
        1 + self.plan(total_count).remaining()
    }
}

/// Ranges left after the first page, produced on demand.
///
/// The last range is not clipped to the total count. Planning stops early if
/// a range end would overflow `usize`.
#[derive(Debug, Clone)]
pub struct RangePlan {
    next: usize,
    total: usize,
    page_size: usize,
}

impl RangePlan {
    pub fn remaining(&self) -> usize {
        if self.next >= self.total {
            0
        } else {
            (self.total - self.next - 1) / self.page_size + 1
        }
    }
}

impl Iterator for RangePlan {
    type Item = OffsetRange;

    fn next(&mut self) -> Option<OffsetRange> {
        if self.next >= self.total {
            return None;
        }
        let from = self.next;
        let Some(to) = from.checked_add(self.page_size) else {
            self.next = self.total;
            return None;
        };
        self.next = to;
        Some(OffsetRange::new(from, to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

pub fn plan(total_count: i64, page_size: usize) -> RangePlan {
    assert!(page_size > 0, "page size must be greater than 0");
    RangePlan {
        next: page_size,
        total: usize::try_from(total_count).unwrap_or(0),
        page_size,
    }
}
