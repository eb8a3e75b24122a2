//! Configuration types for payslip generation.
//!
//! This module contains the strongly-typed tax bracket structures that are
//! deserialized from the YAML configuration file, and the validation that
//! turns a list of brackets into a usable [`TaxTable`].

use serde::{Deserialize, Serialize};

use crate::calculation::SuperPolicy;
use crate::error::{EngineError, EngineResult};

/// The inclusive upper bound of a tax bracket.
///
/// In YAML and JSON an unbounded limit is written as `null` or left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum UpperLimit {
    /// Income up to and including this amount falls in the bracket.
    Bounded(u64),
    /// The bracket has no upper bound. Only the last bracket may use this.
    #[default]
    Unbounded,
}

impl UpperLimit {
    /// Returns true if `annual_salary` does not exceed this limit.
    pub fn admits(self, annual_salary: f64) -> bool {
        match self {
            UpperLimit::Bounded(limit) => annual_salary <= limit as f64,
            UpperLimit::Unbounded => true,
        }
    }
}

impl From<Option<u64>> for UpperLimit {
    fn from(value: Option<u64>) -> Self {
        value.map_or(UpperLimit::Unbounded, UpperLimit::Bounded)
    }
}

impl From<UpperLimit> for Option<u64> {
    fn from(value: UpperLimit) -> Self {
        match value {
            UpperLimit::Bounded(limit) => Some(limit),
            UpperLimit::Unbounded => None,
        }
    }
}

/// One progressive income-tax tier.
///
/// # Example
///
/// ```
/// use payslip_engine::config::{TaxBracket, UpperLimit};
///
/// let bracket = TaxBracket {
///     lower_limit: 37001,
///     upper_limit: UpperLimit::Bounded(80000),
///     fixed_tax: 3572.0,
///     tax_multiplier: 0.325,
/// };
/// assert!(bracket.contains(60050.0));
/// assert!(!bracket.contains(80001.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound of annual income.
    pub lower_limit: u64,
    /// Inclusive upper bound of annual income.
    #[serde(default)]
    pub upper_limit: UpperLimit,
    /// Tax owed on all income up to `lower_limit`.
    pub fixed_tax: f64,
    /// Marginal rate applied to income above `lower_limit`.
    pub tax_multiplier: f64,
}

impl TaxBracket {
    /// Returns true if `annual_salary` lies within this bracket's bounds.
    pub fn contains(&self, annual_salary: f64) -> bool {
        annual_salary >= self.lower_limit as f64 && self.upper_limit.admits(annual_salary)
    }

    /// Returns true if this is the open-ended top bracket.
    pub fn is_unbounded(&self) -> bool {
        self.upper_limit == UpperLimit::Unbounded
    }
}

/// An ordered, contiguous set of tax brackets covering `[0, ∞)`.
///
/// A `TaxTable` can only be built through [`TaxTable::new`], which rejects
/// gaps, overlaps and a missing or misplaced unbounded tier. Once built it
/// is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaxTable {
    name: String,
    brackets: Vec<TaxBracket>,
}

impl TaxTable {
    /// Validates `brackets` and builds a table.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTaxTable`] if:
    /// - the list is empty or does not start at 0
    /// - any bracket's lower limit is not the previous upper limit + 1
    /// - a bounded bracket ends below its own lower limit
    /// - an unbounded bracket is not last, or the last bracket is bounded
    /// - a fixed tax or multiplier is negative or not finite
    ///
    /// # Example
    ///
    /// ```
    /// use payslip_engine::config::{TaxBracket, TaxTable, UpperLimit};
    ///
    /// let table = TaxTable::new(
    ///     "flat",
    ///     vec![TaxBracket {
    ///         lower_limit: 0,
    ///         upper_limit: UpperLimit::Unbounded,
    ///         fixed_tax: 0.0,
    ///         tax_multiplier: 0.1,
    ///     }],
    /// )?;
    /// assert_eq!(table.brackets().len(), 1);
    /// # Ok::<(), payslip_engine::error::EngineError>(())
    /// ```
    pub fn new(name: impl Into<String>, brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        let invalid = |message: String| EngineError::InvalidTaxTable { message };

        let first = brackets
            .first()
            .ok_or_else(|| invalid("at least one bracket is required".to_string()))?;
        if first.lower_limit != 0 {
            return Err(invalid(format!(
                "first bracket must start at 0, found {}",
                first.lower_limit
            )));
        }

        let last_index = brackets.len() - 1;
        let mut expected_lower = 0u64;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.lower_limit != expected_lower {
                return Err(invalid(format!(
                    "bracket {} starts at {} but {} was expected",
                    index + 1,
                    bracket.lower_limit,
                    expected_lower
                )));
            }
            if !bracket.fixed_tax.is_finite() || bracket.fixed_tax < 0.0 {
                return Err(invalid(format!(
                    "bracket {} has invalid fixed tax {}",
                    index + 1,
                    bracket.fixed_tax
                )));
            }
            if !bracket.tax_multiplier.is_finite() || bracket.tax_multiplier < 0.0 {
                return Err(invalid(format!(
                    "bracket {} has invalid tax multiplier {}",
                    index + 1,
                    bracket.tax_multiplier
                )));
            }

            match bracket.upper_limit {
                UpperLimit::Bounded(upper) => {
                    if index == last_index {
                        return Err(invalid(
                            "the last bracket must have no upper limit".to_string(),
                        ));
                    }
                    if upper < bracket.lower_limit {
                        return Err(invalid(format!(
                            "bracket {} ends at {} before it starts at {}",
                            index + 1,
                            upper,
                            bracket.lower_limit
                        )));
                    }
                    expected_lower = upper.checked_add(1).ok_or_else(|| {
                        invalid(format!(
                            "bracket {} upper limit {} leaves no room for the next bracket",
                            index + 1,
                            upper
                        ))
                    })?;
                }
                UpperLimit::Unbounded => {
                    if index != last_index {
                        return Err(invalid(format!(
                            "bracket {} has no upper limit but is not the last bracket",
                            index + 1
                        )));
                    }
                }
            }
        }

        Ok(Self {
            name: name.into(),
            brackets,
        })
    }

    /// Returns the human-readable name of the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}

/// The layout of a tax configuration YAML file.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxConfigFile {
    /// A human-readable name for the table (e.g. the financial year).
    pub name: String,
    /// The brackets, lowest first.
    pub brackets: Vec<TaxBracket>,
    /// Superannuation rate policy. Falls back to the 9% default policy.
    #[serde(default)]
    pub superannuation: SuperPolicy,
}
