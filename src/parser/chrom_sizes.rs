//! Chromosome sizes file parser.
//!
//! Parses tab-delimited `chrom \t size` files.

use indexmap::IndexMap;
use std::io::BufRead;
use std::path::Path;

use crate::error::{Error, Result};
use crate::parser::util::{is_skippable, open_reader, parse_error, parse_field, split_exact};

const CHROM_SIZE_FIELDS: usize = 2;

/// Chromosome lengths keyed by name, in file order.
///
/// Built once per run and passed explicitly to whatever needs chromosome
/// bounds.
#[derive(Debug, Clone, Default)]
pub struct ChromSizes {
    sizes: IndexMap<String, i64>,
}

impl ChromSizes {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load sizes from a file (supports .gz).
    pub fn from_file(path: &Path) -> Result<Self> {
        let reader = open_reader(path)?;
        Self::from_reader(reader, path)
    }

    /// Load sizes from a reader; `path` is only used in error messages.
    pub fn from_reader<R: BufRead>(reader: R, path: &Path) -> Result<Self> {
        let mut table = Self::new();

        for (idx, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let line_num = idx + 1;
            let line = line.trim_end_matches(['\r', '\n']);
            if is_skippable(line) {
                continue;
            }

            let fields = split_exact(line, CHROM_SIZE_FIELDS, path, line_num)?;
            let size: i64 = parse_field(fields[1], "chromosome size", path, line_num)?;
            if size < 0 {
                return Err(parse_error(
                    path,
                    line_num,
                    format!("chromosome size must be non-negative: {}", size),
                ));
            }
            table.insert(fields[0].to_string(), size);
        }

        Ok(table)
    }

    /// Insert a chromosome size; a repeated name overwrites the earlier size.
    pub fn insert(&mut self, chrom: String, size: i64) {
        self.sizes.insert(chrom, size);
    }

    /// Get the size of a chromosome.
    #[inline]
    pub fn get(&self, chrom: &str) -> Option<i64> {
        self.sizes.get(chrom).copied()
    }

    /// Get the size of a chromosome, failing for unknown names.
    pub fn require(&self, chrom: &str) -> Result<i64> {
        self.get(chrom)
            .ok_or_else(|| Error::UnknownChrom(chrom.to_string()))
    }

    /// Chromosome names in file order.
    pub fn chromosomes(&self) -> impl Iterator<Item = &String> {
        self.sizes.keys()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
