//! Regulatory-domain (BED6) file parser.
//!
//! Lines are `chrom \t chromStart \t chromEnd \t name \t tss \t strand`, the
//! format written by [`crate::output::write_regdoms`]. The score column
//! carries the TSS coordinate.

use std::io::BufRead;
use std::path::Path;

use crate::error::Result;
use crate::parser::util::{is_skippable, open_reader, parse_error, parse_field, split_exact};
use crate::types::{RegdomRecord, Strand};

const REGDOM_FIELDS: usize = 6;

/// Parse a regulatory-domain file (supports .gz).
pub fn parse_regdoms(path: &Path) -> Result<Vec<RegdomRecord>> {
    let reader = open_reader(path)?;
    parse_regdoms_reader(reader, path)
}

/// Parse regulatory-domain data from a reader.
pub fn parse_regdoms_reader<R: BufRead>(reader: R, path: &Path) -> Result<Vec<RegdomRecord>> {
    let mut records = Vec::new();

    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line_num = idx + 1;
        let line = line.trim_end_matches(['\r', '\n']);
        if is_skippable(line) {
            continue;
        }

        let fields = split_exact(line, REGDOM_FIELDS, path, line_num)?;
        let chrom_start: i64 = parse_field(fields[1], "chromStart", path, line_num)?;
        let chrom_end: i64 = parse_field(fields[2], "chromEnd", path, line_num)?;
        let tss: i64 = parse_field(fields[4], "TSS position", path, line_num)?;
        let strand: Strand = fields[5]
            .parse()
            .map_err(|e| parse_error(path, line_num, format!("{}: '{}'", e, fields[5])))?;

        if chrom_start > chrom_end {
            return Err(parse_error(
                path,
                line_num,
                format!("chromStart ({}) > chromEnd ({})", chrom_start, chrom_end),
            ));
        }

        records.push(RegdomRecord::with_domain(
            fields[0].to_string(),
            chrom_start,
            chrom_end,
            tss,
            strand,
            fields[3].to_string(),
        ));
    }

    Ok(records)
}
