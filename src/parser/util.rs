//! Utility functions for file parsing.

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Creates a buffered reader that automatically handles gzip-compressed files.
///
/// This function checks if the file path ends with ".gz" and wraps the file
/// in a GzDecoder if so. Otherwise, it returns a plain buffered reader.
pub fn create_buffered_reader(file: File, path: &Path) -> Box<dyn BufRead> {
    if path.to_string_lossy().ends_with(".gz") {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    }
}

/// Open `path` for buffered reading, decompressing `.gz` files.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    Ok(create_buffered_reader(file, path))
}

/// Blank lines and `#` comments carry no records.
pub fn is_skippable(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('#')
}

/// Build a parse error pointing at `path:line`.
pub fn parse_error(path: &Path, line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        path: path.to_path_buf(),
        line,
        message: message.into(),
    }
}

/// Split a tab-delimited line and require exactly `expected` fields.
pub fn split_exact<'a>(
    line: &'a str,
    expected: usize,
    path: &Path,
    line_num: usize,
) -> Result<Vec<&'a str>> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != expected {
        return Err(parse_error(
            path,
            line_num,
            format!("expecting exactly {} words, got {}", expected, fields.len()),
        ));
    }
    Ok(fields)
}

/// Parse a numeric field, naming the column in the error.
pub fn parse_field<T: FromStr>(
    field: &str,
    what: &str,
    path: &Path,
    line_num: usize,
) -> Result<T> {
    field
        .trim()
        .parse()
        .map_err(|_| parse_error(path, line_num, format!("invalid {}: '{}'", what, field)))
}
