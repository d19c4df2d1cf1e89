//! Closed code point ranges and the sorted tables built from them

use std::borrow::Cow;

use crate::error::TableError;

/// Inclusive range of code points `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: u32,
    pub end: u32,
}

impl Interval {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Check if `cp` lies within the range, both ends included
    pub fn contains(&self, cp: u32) -> bool {
        self.start <= cp && cp <= self.end
    }
}

/// Binary search for `cp` in a sorted, disjoint interval list.
///
/// The ordering of `table` is not checked here; an unordered table gives
/// unspecified (but never panicking) results.
pub fn bisearch(cp: u32, table: &[Interval]) -> bool {
    let (first, last) = match (table.first(), table.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return false,
    };
    if cp < first.start || cp > last.end {
        return false;
    }

    let mut lo = 0usize;
    let mut hi = table.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let probe = &table[mid];
        if cp > probe.end {
            lo = mid + 1;
        } else if cp < probe.start {
            hi = mid;
        } else {
            return true;
        }
    }
    false
}

/// Immutable list of intervals, sorted ascending and mutually disjoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    intervals: Cow<'static, [Interval]>,
}

impl Table {
    /// Build a table, checking that intervals are well-formed, sorted and disjoint
    pub fn new(intervals: Vec<Interval>) -> Result<Self, TableError> {
        validate(&intervals)?;
        Ok(Self {
            intervals: Cow::Owned(intervals),
        })
    }

    /// Wrap generated data without validation
    pub const fn from_static(intervals: &'static [Interval]) -> Self {
        Self {
            intervals: Cow::Borrowed(intervals),
        }
    }

    pub fn empty() -> Self {
        Self::from_static(&[])
    }

    pub fn contains(&self, cp: u32) -> bool {
        bisearch(cp, &self.intervals)
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Re-run the checks `Table::new` performs; used on generated tables in tests
    pub fn validate(&self) -> Result<(), TableError> {
        validate(&self.intervals)
    }
}

fn validate(intervals: &[Interval]) -> Result<(), TableError> {
    for (index, interval) in intervals.iter().enumerate() {
        if interval.start > interval.end {
            return Err(TableError::Unordered { index });
        }
        if index > 0 && intervals[index - 1].end >= interval.start {
            return Err(TableError::Unordered { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &[Interval] = &[
        Interval::new(0x300, 0x36f),
        Interval::new(0x483, 0x489),
        Interval::new(0x591, 0x5bd),
        Interval::new(0x5bf, 0x5bf),
        Interval::new(0x1100, 0x115f),
    ];

    #[test]
    fn test_empty_table_contains_nothing() {
        assert!(!bisearch(0, &[]));
        assert!(!bisearch(u32::MAX, &[]));
        assert!(!Table::empty().contains(0x300));
    }

    #[test]
    fn test_endpoints_are_inclusive() {
        for interval in SAMPLE {
            assert!(bisearch(interval.start, SAMPLE), "{:x}", interval.start);
            assert!(bisearch(interval.end, SAMPLE), "{:x}", interval.end);
        }
    }

    #[test]
    fn test_neighbours_outside_ranges() {
        assert!(!bisearch(0x2ff, SAMPLE));
        assert!(!bisearch(0x370, SAMPLE));
        assert!(!bisearch(0x482, SAMPLE));
        assert!(!bisearch(0x48a, SAMPLE));
        assert!(!bisearch(0x5be, SAMPLE));
        assert!(!bisearch(0x5c0, SAMPLE));
        assert!(!bisearch(0x1160, SAMPLE));
    }

    #[test]
    fn test_fast_rejection_outside_bounds() {
        assert!(!bisearch(0, SAMPLE));
        assert!(!bisearch(0x10ffff, SAMPLE));
        assert!(!bisearch(u32::MAX, SAMPLE));
    }

    #[test]
    fn test_single_interval_table() {
        let table = [Interval::new(10, 10)];
        assert!(bisearch(10, &table));
        assert!(!bisearch(9, &table));
        assert!(!bisearch(11, &table));
    }

    #[test]
    fn test_matches_linear_scan() {
        for cp in 0x2f0..0x1170 {
            let linear = SAMPLE.iter().any(|i| i.contains(cp));
            assert_eq!(bisearch(cp, SAMPLE), linear, "cp {:x}", cp);
        }
    }

    #[test]
    fn test_table_new_accepts_sorted() {
        let table = Table::new(SAMPLE.to_vec()).unwrap();
        assert_eq!(table.len(), 5);
        assert!(table.contains(0x5bf));
    }

    #[test]
    fn test_table_new_rejects_overlap() {
        let result = Table::new(vec![Interval::new(1, 5), Interval::new(5, 9)]);
        assert_eq!(result, Err(TableError::Unordered { index: 1 }));
    }

    #[test]
    fn test_table_new_rejects_inverted() {
        let result = Table::new(vec![Interval::new(9, 1)]);
        assert_eq!(result, Err(TableError::Unordered { index: 0 }));
    }

    #[test]
    fn test_table_new_rejects_unsorted() {
        let result = Table::new(vec![Interval::new(20, 30), Interval::new(1, 5)]);
        assert!(matches!(result, Err(TableError::Unordered { index: 1 })));
    }

    #[test]
    fn test_adjacent_intervals_are_allowed() {
        assert!(Table::new(vec![Interval::new(1, 4), Interval::new(5, 9)]).is_ok());
    }
}
