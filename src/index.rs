//! Interval indexing for overlap queries.
//!
//! [`RangeIndex`] stores the union of inserted ranges per chromosome and
//! answers "how many bases of this query are covered". [`DomainIndex`] keeps
//! individual regulatory domains and answers "which domains contain this
//! position".

use ahash::AHashMap;

use crate::types::RegdomRecord;

/// Union of half-open ranges, organized by chromosome.
///
/// Ranges on a chromosome are kept sorted, disjoint and non-adjacent, so
/// overlapping inserts are merged and never counted twice.
#[derive(Debug, Clone, Default)]
pub struct RangeIndex {
    ranges_by_chrom: AHashMap<String, Vec<(i64, i64)>>,
}

impl RangeIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over the domains of `records`.
    pub fn from_domains(records: &[RegdomRecord]) -> Self {
        let mut by_chrom: AHashMap<String, Vec<(i64, i64)>> = AHashMap::new();
        for rec in records {
            if rec.chrom_start < rec.chrom_end {
                by_chrom
                    .entry(rec.chrom.clone())
                    .or_default()
                    .push((rec.chrom_start, rec.chrom_end));
            }
        }

        for ranges in by_chrom.values_mut() {
            ranges.sort_unstable();
            *ranges = merge_sorted(ranges);
        }

        Self {
            ranges_by_chrom: by_chrom,
        }
    }

    /// Add `[start, end)` on `chrom`, merging it with any range it touches.
    pub fn insert(&mut self, chrom: &str, start: i64, end: i64) {
        if start >= end {
            return;
        }
        let ranges = self.ranges_by_chrom.entry(chrom.to_string()).or_default();

        // First range that ends at or after `start`, last range that starts at or before `end`
        let first = ranges.partition_point(|&(_, e)| e < start);
        let last = ranges.partition_point(|&(s, _)| s <= end);

        if first == last {
            ranges.insert(first, (start, end));
        } else {
            let merged = (start.min(ranges[first].0), end.max(ranges[last - 1].1));
            ranges.splice(first..last, std::iter::once(merged));
        }
    }

    /// Number of bases of `[start, end)` on `chrom` covered by the index.
    ///
    /// Unknown chromosomes have no coverage.
    pub fn overlap_size(&self, chrom: &str, start: i64, end: i64) -> i64 {
        let Some(ranges) = self.ranges_by_chrom.get(chrom) else {
            return 0;
        };

        let first = ranges.partition_point(|&(_, e)| e <= start);
        ranges[first..]
            .iter()
            .take_while(|&&(s, _)| s < end)
            .map(|&(s, e)| e.min(end) - s.max(start))
            .filter(|&len| len > 0)
            .sum()
    }

    /// Total bases covered on all chromosomes.
    pub fn covered_bases(&self) -> i64 {
        self.ranges_by_chrom
            .values()
            .flat_map(|ranges| ranges.iter().map(|(s, e)| e - s))
            .sum()
    }

    /// Merged ranges on a chromosome, if any.
    pub fn ranges(&self, chrom: &str) -> Option<&[(i64, i64)]> {
        self.ranges_by_chrom.get(chrom).map(|v| v.as_slice())
    }
}

/// Merge sorted ranges; touching ranges are joined.
fn merge_sorted(ranges: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let mut merged: Vec<(i64, i64)> = Vec::with_capacity(ranges.len());
    for &(start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Point lookup over individual regulatory domains.
///
/// Domains on a chromosome are sorted by start; the longest domain length on
/// each chromosome bounds how far back a search has to look.
pub struct DomainIndex<'a> {
    records: &'a [RegdomRecord],
    by_chrom: AHashMap<&'a str, Vec<usize>>,
    max_lengths: AHashMap<&'a str, i64>,
}

impl<'a> DomainIndex<'a> {
    /// Index the domains of `records`.
    pub fn new(records: &'a [RegdomRecord]) -> Self {
        let mut by_chrom: AHashMap<&'a str, Vec<usize>> = AHashMap::new();
        let mut max_lengths: AHashMap<&'a str, i64> = AHashMap::new();

        for (idx, rec) in records.iter().enumerate() {
            by_chrom.entry(rec.chrom.as_str()).or_default().push(idx);
            let max_len = max_lengths.entry(rec.chrom.as_str()).or_insert(0);
            *max_len = (*max_len).max(rec.length());
        }

        for indices in by_chrom.values_mut() {
            indices.sort_by_key(|&i| (records[i].chrom_start, records[i].chrom_end));
        }

        Self {
            records,
            by_chrom,
            max_lengths,
        }
    }

    /// All domains on `chrom` whose half-open interval contains `pos`, in start order.
    pub fn containing(&self, chrom: &str, pos: i64) -> Vec<&'a RegdomRecord> {
        let Some(indices) = self.by_chrom.get(chrom) else {
            return Vec::new();
        };
        let max_len = self.max_lengths.get(chrom).copied().unwrap_or(0);
        let search_start = pos.saturating_sub(max_len);

        let first = indices.partition_point(|&i| self.records[i].chrom_start < search_start);
        indices[first..]
            .iter()
            .map(|&i| &self.records[i])
            .take_while(|rec| rec.chrom_start <= pos)
            .filter(|rec| rec.contains(pos))
            .collect()
    }
}
