//! Output formatting.
//!
//! Writes regulatory domains as BED6 and formats numbers the way the
//! command-line tools print them.

use anyhow::Result;

use std::io::Write;

use crate::stats::RegionWeight;
use crate::types::RegdomRecord;

/// Format a single BED6 line: `chrom start end name tss strand`.
///
/// The score column carries the TSS coordinate.
pub fn format_regdom_line(record: &RegdomRecord) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        record.chrom,
        record.chrom_start,
        record.chrom_end,
        record.name,
        record.tss,
        record.strand
    )
}

/// Write all records, one BED6 line each.
pub fn write_regdoms<W: Write>(writer: &mut W, records: &[RegdomRecord]) -> Result<()> {
    for record in records {
        writeln!(writer, "{}", format_regdom_line(record))?;
    }
    Ok(())
}

/// Write region-to-gene weights: `region gene tss weight`.
pub fn write_weights<W: Write>(writer: &mut W, pairs: &[RegionWeight]) -> Result<()> {
    for pair in pairs {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            pair.region, pair.gene, pair.tss, pair.weight
        )?;
    }
    Ok(())
}

/// Fixed notation with six decimals, e.g. `0.687500`. NaN prints as `nan`.
pub fn format_fixed(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    format!("{:.6}", value)
}

/// Scientific notation with six decimals and a signed, two-digit exponent,
/// e.g. `1.000000e+00` or `3.125000e-05`.
pub fn format_scientific(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return format!("{}", value);
    }
    let formatted = format!("{:.6e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => formatted,
    }
}
