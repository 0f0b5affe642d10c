//! Beta and binomial enrichment p-values.
//!
//! Both tests ask how surprising it is to see this much of the input set land
//! in a term's regulatory domains when the domains cover a fraction `p` of the
//! background. The binomial test counts hit regions; the beta test sums
//! per-region weights instead.

use crate::error::{Error, Result};
use crate::stats::beta::regularized_incomplete_beta;

/// Parameters of the beta distribution evaluated by [`beta_pvalue`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaParameters {
    pub alpha: f64,
    pub beta: f64,
    pub x: f64,
}

impl BetaParameters {
    /// `alpha` is the summed weight, `beta = n - alpha + 1`, `x` the annotation weight.
    pub fn new(total_regions: u64, alpha: f64, annotation_weight: f64) -> Self {
        BetaParameters {
            alpha,
            beta: total_regions as f64 - alpha + 1.0,
            x: annotation_weight,
        }
    }
}

fn check_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "annotation weight must lie in [0, 1], got {}",
            p
        )))
    }
}

/// Beta p-value for `total_regions` regions whose weights sum to `alpha`.
///
/// Returns 1 when `alpha` is 0, whatever the annotation weight (even NaN),
/// otherwise `I_p(alpha, n - alpha + 1)`.
pub fn beta_pvalue(total_regions: u64, alpha: f64, annotation_weight: f64) -> Result<f64> {
    if !(alpha.is_finite() && alpha >= 0.0) {
        return Err(Error::InvalidArgument(format!(
            "sum of weights must be a finite non-negative number, got {}",
            alpha
        )));
    }
    if alpha == 0.0 {
        return Ok(1.0);
    }
    check_probability(annotation_weight)?;

    let params = BetaParameters::new(total_regions, alpha, annotation_weight);
    regularized_incomplete_beta(params.alpha, params.beta, params.x)
}

/// Binomial upper tail `P(X >= hit_regions)` for `X ~ Bin(total_regions, p)`.
///
/// Uses `P(X >= k) = I_p(k, n - k + 1)`; `k == 0` is 1 by definition, so the
/// annotation weight is not looked at (it may be NaN).
pub fn binomial_pvalue(total_regions: u64, hit_regions: u64, annotation_weight: f64) -> Result<f64> {
    if hit_regions > total_regions {
        return Err(Error::InvalidArgument(format!(
            "hit regions ({}) exceed total regions ({})",
            hit_regions, total_regions
        )));
    }
    if hit_regions == 0 {
        return Ok(1.0);
    }
    check_probability(annotation_weight)?;

    let k = hit_regions as f64;
    let n = total_regions as f64;
    regularized_incomplete_beta(k, n - k + 1.0, annotation_weight)
}
