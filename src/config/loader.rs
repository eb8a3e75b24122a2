//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tax bracket
//! table and superannuation policy from YAML.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::SuperPolicy;
use crate::error::{EngineError, EngineResult};

use super::types::{TaxConfigFile, TaxTable};

/// The tax configuration compiled into the binary.
const BUILTIN_CONFIG: &str = include_str!("../../config/tax_brackets.yaml");

/// Label used in error messages for the compiled-in configuration.
const BUILTIN_SOURCE: &str = "<builtin>/tax_brackets.yaml";

/// Loads and provides access to payslip configuration.
///
/// The `ConfigLoader` reads a single YAML file of the following shape and
/// validates the bracket table before handing it out:
///
/// ```text
/// name: "Resident tax rates 2017-18"
/// brackets:
///   - lower_limit: 0
///     upper_limit: 18200
///     fixed_tax: 0
///     tax_multiplier: 0
///   ...
///   - lower_limit: 180001     # no upper_limit: unbounded
///     fixed_tax: 54547
///     tax_multiplier: 0.45
/// superannuation:             # optional
///   default_multiplier: 0.09
///   min_percent: 0
///   max_percent: 50
/// ```
///
/// # Example
///
/// ```
/// use payslip_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::builtin()?;
/// assert_eq!(loader.tax_table().brackets().len(), 5);
/// # Ok::<(), payslip_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tax_table: TaxTable,
    super_policy: SuperPolicy,
}

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - The bracket table breaks contiguity (`InvalidTaxTable`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payslip_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/tax_brackets.yaml")?;
    /// println!("Loaded table: {}", loader.tax_table().name());
    /// # Ok::<(), payslip_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Loads the tax configuration shipped with the engine.
    pub fn builtin() -> EngineResult<Self> {
        Self::from_yaml_str(BUILTIN_CONFIG, BUILTIN_SOURCE)
    }

    /// Parses and validates configuration from YAML text.
    ///
    /// `source` names the origin of the text in error messages.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<Self> {
        let file: TaxConfigFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        file.superannuation.validate(source)?;

        let tax_table = TaxTable::new(file.name, file.brackets)?;
        debug!(
            source,
            table = tax_table.name(),
            brackets = tax_table.brackets().len(),
            "Loaded tax configuration"
        );

        Ok(Self {
            tax_table,
            super_policy: file.superannuation,
        })
    }

    /// Builds a loader from already-validated parts.
    pub fn from_parts(tax_table: TaxTable, super_policy: SuperPolicy) -> Self {
        Self {
            tax_table,
            super_policy,
        }
    }

    /// Returns the validated tax bracket table.
    pub fn tax_table(&self) -> &TaxTable {
        &self.tax_table
    }

    /// Returns the superannuation rate policy.
    pub fn super_policy(&self) -> &SuperPolicy {
        &self.super_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpperLimit;

    const FLAT_TABLE: &str = r#"
name: "flat"
brackets:
  - lower_limit: 0
    fixed_tax: 0
    tax_multiplier: 0.1
"#;

    #[test]
    fn test_builtin_configuration_loads() {
        let loader = ConfigLoader::builtin().unwrap();

        assert_eq!(loader.tax_table().name(), "Resident tax rates 2017-18");
        let brackets = loader.tax_table().brackets();
        assert_eq!(brackets.len(), 5);
        assert_eq!(brackets[0].lower_limit, 0);
        assert_eq!(brackets[0].upper_limit, UpperLimit::Bounded(18200));
        assert_eq!(brackets[2].fixed_tax, 3572.0);
        assert_eq!(brackets[2].tax_multiplier, 0.325);
        assert_eq!(brackets[4].lower_limit, 180001);
        assert_eq!(brackets[4].upper_limit, UpperLimit::Unbounded);
    }

    #[test]
    fn test_builtin_super_policy() {
        let loader = ConfigLoader::builtin().unwrap();
        assert_eq!(loader.super_policy(), &SuperPolicy::default());
    }

    #[test]
    fn test_load_file_from_repository_config() {
        let loader = ConfigLoader::load("./config/tax_brackets.yaml").unwrap();
        assert_eq!(
            loader.tax_table(),
            ConfigLoader::builtin().unwrap().tax_table()
        );
    }

    #[test]
    fn test_missing_superannuation_section_uses_default_policy() {
        let loader = ConfigLoader::from_yaml_str(FLAT_TABLE, "flat.yaml").unwrap();
        assert_eq!(loader.super_policy().default_multiplier, 0.09);
        assert_eq!(loader.tax_table().brackets().len(), 1);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/tax_brackets.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("tax_brackets.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("name: [unclosed", "bad.yaml");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => assert_eq!(path, "bad.yaml"),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_gap_in_yaml_table_returns_invalid_table() {
        let yaml = r#"
name: "gappy"
brackets:
  - lower_limit: 0
    upper_limit: 1000
    fixed_tax: 0
    tax_multiplier: 0
  - lower_limit: 2000
    fixed_tax: 0
    tax_multiplier: 0.2
"#;
        let result = ConfigLoader::from_yaml_str(yaml, "gappy.yaml");
        assert!(matches!(result, Err(EngineError::InvalidTaxTable { .. })));
    }

    #[test]
    fn test_inverted_super_range_returns_parse_error() {
        let yaml = format!(
            "{}superannuation:\n  default_multiplier: 0.09\n  min_percent: 60\n  max_percent: 50\n",
            FLAT_TABLE
        );
        let result = ConfigLoader::from_yaml_str(&yaml, "super.yaml");

        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("min_percent"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_super_default_outside_range_returns_parse_error() {
        let yaml = format!(
            "{}superannuation:\n  default_multiplier: 5.0\n  min_percent: 0\n  max_percent: 50\n",
            FLAT_TABLE
        );

        match ConfigLoader::from_yaml_str(&yaml, "super.yaml") {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "super.yaml");
                assert!(message.contains("default_multiplier"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }
}
