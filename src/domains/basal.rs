//! The `basalPlusExtension` association rule (and `twoClosest`, which is the
//! same rule with empty basal windows).
//!
//! Every gene first gets a strand-aware basal window around its TSS. The
//! domain is then extended in both directions up to `max_extension`, stopping
//! at the basal window of the neighboring gene.
//!
//! ```text
//!   + strand:   [tss - upstream ........ tss ... tss + downstream]
//!   - strand:   [tss - downstream ... tss ........ tss + upstream]
//! ```

use crate::domains::same_chrom;
use crate::types::{RegdomRecord, Strand};

/// Basal window of a single record, clamped to `[0, chrom_size]`.
pub fn basal_window(
    record: &RegdomRecord,
    chrom_size: i64,
    upstream: i64,
    downstream: i64,
) -> (i64, i64) {
    let (left, right) = match record.strand {
        Strand::Positive => (upstream, downstream),
        Strand::Negative => (downstream, upstream),
    };
    (
        record.tss.saturating_sub(left).max(0),
        record.tss.saturating_add(right).min(chrom_size),
    )
}

/// Assign basal-plus-extension domains.
///
/// `sizes[i]` is the chromosome size of `records[i]`. Every record keeps its
/// own basal window. Capping at the neighbor's basal boundary still lets two
/// neighbors' extensions cross in the gap between their basal windows; such
/// adjacent domains are split at the midpoint of that gap, moved into the
/// crossing when the midpoint lies outside it.
pub fn assign_basal_plus_extension(
    records: &mut [RegdomRecord],
    sizes: &[i64],
    max_extension: i64,
    upstream: i64,
    downstream: i64,
) {
    let n = records.len();

    let basal: Vec<(i64, i64)> = records
        .iter()
        .zip(sizes)
        .map(|(rec, &size)| basal_window(rec, size, upstream, downstream))
        .collect();

    let mut bounds: Vec<(i64, i64)> = Vec::with_capacity(n);
    for i in 0..n {
        let tss = records[i].tss;
        let (basal_start, basal_end) = basal[i];

        // As far as we can extend with no genes nearby, never inside the basal window
        let mut start = tss.saturating_sub(max_extension).max(0).min(basal_start);
        if i > 0 && same_chrom(records, i - 1, i) {
            start = start.max(basal[i - 1].1).min(basal_start);
        }

        let mut end = tss.saturating_add(max_extension).min(sizes[i]).max(basal_end);
        if i + 1 < n && same_chrom(records, i, i + 1) {
            end = end.min(basal[i + 1].0).max(basal_end);
        }

        bounds.push((start, end));
    }

    for i in 1..n {
        if !same_chrom(records, i - 1, i) || bounds[i - 1].1 <= bounds[i].0 {
            continue;
        }
        let prev_basal_end = basal[i - 1].1;
        let next_basal_start = basal[i].0;
        // Split inside the crossing so no base of either extension is dropped
        let middle =
            ((prev_basal_end + next_basal_start) / 2).clamp(bounds[i].0, bounds[i - 1].1);

        bounds[i - 1].1 = middle.max(prev_basal_end);
        bounds[i].0 = middle.min(next_basal_start);
    }

    for (rec, (start, end)) in records.iter_mut().zip(bounds) {
        rec.chrom_start = start;
        rec.chrom_end = end;
    }
}
