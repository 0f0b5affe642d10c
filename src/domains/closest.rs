//! The `oneClosest` association rule.
//!
//! Each gene owns the bases closer to its TSS than to any neighboring TSS on
//! the same chromosome, up to `max_extension` on either side.

use crate::domains::same_chrom;
use crate::types::RegdomRecord;

/// Assign domains bounded by the midpoints to the neighboring TSSs.
///
/// `sizes[i]` is the chromosome size of `records[i]`. The midpoint is
/// `floor((tss_a + tss_b) / 2)`, so adjacent domains share a boundary and
/// never overlap.
pub fn assign_one_closest(records: &mut [RegdomRecord], sizes: &[i64], max_extension: i64) {
    let n = records.len();

    for i in 0..n {
        let tss = records[i].tss;

        let mut start = tss.saturating_sub(max_extension).max(0);
        if i > 0 && same_chrom(records, i - 1, i) {
            let middle = (records[i - 1].tss + tss) / 2;
            start = start.max(middle);
        }

        let mut end = tss.saturating_add(max_extension).min(sizes[i]);
        if i + 1 < n && same_chrom(records, i, i + 1) {
            let middle = (tss + records[i + 1].tss) / 2;
            end = end.min(middle);
        }

        records[i].chrom_start = start;
        records[i].chrom_end = end;
    }
}
