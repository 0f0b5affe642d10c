//! Regulatory-domain assignment.
//!
//! Converts chromosome-sorted TSS records into final regulatory domains under
//! one of the [`AssociationRule`]s. Neighbors are found by index in the sorted
//! slice; records are neighbors only when they share a chromosome.

pub mod basal;
pub mod closest;

pub use basal::assign_basal_plus_extension;
pub use closest::assign_one_closest;

use log::debug;

use crate::config::DomainConfig;
use crate::error::{Error, Result};
use crate::parser::ChromSizes;
use crate::types::{AssociationRule, RegdomRecord};

/// Assign every record its regulatory domain according to `config.rule`.
///
/// `records` must already be in [`crate::types::sort_records`] order; nothing
/// is regrouped here. On error the records may be partially updated.
pub fn assign_domains(
    records: &mut [RegdomRecord],
    chrom_sizes: &ChromSizes,
    config: &DomainConfig,
) -> Result<()> {
    config.validate()?;
    let sizes = lookup_sizes(records, chrom_sizes)?;

    debug!(
        "Assigning {} domains with rule {} (max extension {})",
        records.len(),
        config.rule,
        config.max_extension
    );

    match config.rule {
        AssociationRule::OneClosest => {
            assign_one_closest(records, &sizes, config.max_extension);
        }
        AssociationRule::TwoClosest | AssociationRule::BasalPlusExtension => {
            let (up, down) = config.basal_window();
            assign_basal_plus_extension(records, &sizes, config.max_extension, up, down);
        }
    }

    Ok(())
}

/// Chromosome size for each record, checking that every TSS lies on its chromosome.
fn lookup_sizes(records: &[RegdomRecord], chrom_sizes: &ChromSizes) -> Result<Vec<i64>> {
    records
        .iter()
        .map(|rec| {
            let size = chrom_sizes.require(&rec.chrom)?;
            if rec.tss < 0 || rec.tss > size {
                return Err(Error::TssOutOfBounds {
                    name: rec.name.clone(),
                    tss: rec.tss,
                    size,
                });
            }
            Ok(size)
        })
        .collect()
}

/// Whether records `i` and `j` lie on the same chromosome.
#[inline]
pub(crate) fn same_chrom(records: &[RegdomRecord], i: usize, j: usize) -> bool {
    records[i].chrom == records[j].chrom
}
