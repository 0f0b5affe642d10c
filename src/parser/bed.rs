//! BED file parser with gzip support.
//!
//! Reads the first three BED columns (plus the name column when present) of
//! background ("antigap") and region files.

use std::io::BufRead;
use std::path::Path;

use crate::error::Result;
use crate::parser::util::{is_skippable, open_reader, parse_error, parse_field};
use crate::types::Interval;

/// Parse a BED file into intervals, in file order.
///
/// Supports both plain text and gzip-compressed BED files.
pub fn parse_intervals(path: &Path) -> Result<Vec<Interval>> {
    let reader = open_reader(path)?;
    parse_intervals_reader(reader, path)
}

/// Parse BED data from a reader.
pub fn parse_intervals_reader<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Interval>> {
    let mut intervals = Vec::new();

    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line_num = idx + 1;
        let line = line.trim_end_matches(['\r', '\n']);

        // Skip empty lines, comments and UCSC header lines
        if is_skippable(line) || line.starts_with("track") || line.starts_with("browser") {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();

        // Need at least 3 columns: chrom, start, end
        if fields.len() < 3 {
            return Err(parse_error(
                path,
                line_num,
                format!("expected at least 3 fields, got {}", fields.len()),
            ));
        }

        let start: i64 = parse_field(fields[1], "start position", path, line_num)?;
        let end: i64 = parse_field(fields[2], "end position", path, line_num)?;
        if start < 0 || start > end {
            return Err(parse_error(
                path,
                line_num,
                format!("invalid interval: start {} end {}", start, end),
            ));
        }

        let name = fields
            .get(3)
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        intervals.push(Interval::new(fields[0].to_string(), start, end, name));
    }

    Ok(intervals)
}
