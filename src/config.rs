//! Configuration and defaults.
//!
//! This module contains the settings that control how regulatory domains are
//! drawn and how region hits are weighted against gene TSSs.

use crate::error::{Error, Result};
use crate::types::AssociationRule;

/// Default distance to extend a domain from its TSS when no other gene is nearby.
pub const DEFAULT_MAX_EXTENSION: i64 = 1_000_000;
/// Default basal window upstream (strand-aware) of the TSS.
pub const DEFAULT_BASAL_UPSTREAM: i64 = 5_000;
/// Default basal window downstream (strand-aware) of the TSS.
pub const DEFAULT_BASAL_DOWNSTREAM: i64 = 1_000;

/// Default mean of the distance weighting distribution.
pub const DEFAULT_WEIGHT_MEAN: f64 = 0.0;
/// Default standard deviation of the distance weighting distribution.
pub const DEFAULT_WEIGHT_SD: f64 = 333_333.0;
/// Default maximum region-to-TSS distance that still receives a weight.
pub const DEFAULT_WEIGHT_CUTOFF: i64 = 1_000_000;

/// Configuration for regulatory-domain assignment.
#[derive(Debug, Clone)]
pub struct DomainConfig {
    /// Association rule.
    pub rule: AssociationRule,
    /// Maximum extension from the TSS in bp.
    pub max_extension: i64,
    /// Basal upstream extension in bp; `None` means the default.
    pub basal_upstream: Option<i64>,
    /// Basal downstream extension in bp; `None` means the default.
    pub basal_downstream: Option<i64>,
}

impl Default for DomainConfig {
    fn default() -> Self {
        DomainConfig {
            rule: AssociationRule::BasalPlusExtension,
            max_extension: DEFAULT_MAX_EXTENSION,
            basal_upstream: None,
            basal_downstream: None,
        }
    }
}

impl DomainConfig {
    /// Create a config for `rule` with default distances.
    pub fn new(rule: AssociationRule) -> Self {
        DomainConfig {
            rule,
            ..Self::default()
        }
    }

    /// Check distances and rule/option compatibility.
    pub fn validate(&self) -> Result<()> {
        if self.max_extension < 0 {
            return Err(Error::InvalidArgument(format!(
                "maximum extension must be a non-negative integer: {}",
                self.max_extension
            )));
        }
        if let Some(up) = self.basal_upstream.filter(|v| *v < 0) {
            return Err(Error::InvalidArgument(format!(
                "basal upstream must be a non-negative integer: {}",
                up
            )));
        }
        if let Some(down) = self.basal_downstream.filter(|v| *v < 0) {
            return Err(Error::InvalidArgument(format!(
                "basal downstream must be a non-negative integer: {}",
                down
            )));
        }

        let basal_given = self.basal_upstream.is_some() || self.basal_downstream.is_some();
        if basal_given && self.rule != AssociationRule::BasalPlusExtension {
            return Err(Error::BasalOptionsWithRule(self.rule));
        }

        Ok(())
    }

    /// Basal `(upstream, downstream)` extension for the configured rule.
    ///
    /// `twoClosest` is basal-plus-extension with an empty basal window, and
    /// `oneClosest` has no basal window at all.
    pub fn basal_window(&self) -> (i64, i64) {
        match self.rule {
            AssociationRule::BasalPlusExtension => (
                self.basal_upstream.unwrap_or(DEFAULT_BASAL_UPSTREAM),
                self.basal_downstream.unwrap_or(DEFAULT_BASAL_DOWNSTREAM),
            ),
            AssociationRule::OneClosest | AssociationRule::TwoClosest => (0, 0),
        }
    }
}

/// Configuration for Gaussian region-to-TSS weighting.
#[derive(Debug, Clone)]
pub struct WeightConfig {
    /// Mean of the normal distribution, in bp.
    pub mean: f64,
    /// Standard deviation of the normal distribution, in bp.
    pub sd: f64,
    /// Regions farther than this from a TSS get no weight from it.
    pub cutoff: i64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        WeightConfig {
            mean: DEFAULT_WEIGHT_MEAN,
            sd: DEFAULT_WEIGHT_SD,
            cutoff: DEFAULT_WEIGHT_CUTOFF,
        }
    }
}

impl WeightConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the distribution is well defined and the cutoff non-negative.
    pub fn validate(&self) -> Result<()> {
        if !(self.sd.is_finite() && self.sd > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "standard deviation must be a positive number: {}",
                self.sd
            )));
        }
        if !self.mean.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "mean must be a finite number: {}",
                self.mean
            )));
        }
        if self.cutoff < 0 {
            return Err(Error::InvalidArgument(format!(
                "cutoff must be a non-negative integer: {}",
                self.cutoff
            )));
        }
        Ok(())
    }
}
