//! TSS file parser.
//!
//! Each line is `chrom \t tss \t strand \t name`; every line becomes an
//! unassigned [`RegdomRecord`].

use std::io::BufRead;
use std::path::Path;

use crate::error::Result;
use crate::parser::util::{is_skippable, open_reader, parse_error, parse_field, split_exact};
use crate::types::{RegdomRecord, Strand};

const TSS_FIELDS: usize = 4;

/// Parse a TSS file (supports .gz). Records are returned in file order.
pub fn parse_tss(path: &Path) -> Result<Vec<RegdomRecord>> {
    let reader = open_reader(path)?;
    parse_tss_reader(reader, path)
}

/// Parse TSS data from a reader; `path` is only used in error messages.
pub fn parse_tss_reader<R: BufRead>(reader: R, path: &Path) -> Result<Vec<RegdomRecord>> {
    let mut records = Vec::new();

    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let line_num = idx + 1;
        let line = line.trim_end_matches(['\r', '\n']);
        if is_skippable(line) {
            continue;
        }

        let fields = split_exact(line, TSS_FIELDS, path, line_num)?;
        let tss: i64 = parse_field(fields[1], "TSS position", path, line_num)?;
        let strand: Strand = fields[2]
            .parse()
            .map_err(|e| parse_error(path, line_num, format!("{}: '{}'", e, fields[2])))?;

        records.push(RegdomRecord::new(
            fields[0].to_string(),
            tss,
            strand,
            fields[3].to_string(),
        ));
    }

    Ok(records)
}
