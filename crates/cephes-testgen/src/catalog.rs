//! The test cases to generate, either built in or read from a YAML catalog.

use std::{collections::BTreeMap, path::Path};

use crate::{ConfigError, Destination, GeneratorConfig, GeneratorError, JUnitFlavour, Overrides, Reference, TestCase, Width};

/// The class whose static methods are under test.
pub const NAMESPACE: &str = "net.mahdilamb.statistics.libs.Cephes";

/// The logical path of the generated file.
pub const DESTINATION: &str = "net.mahdilamb.statistics.cephes.JUnitTests.java";

/// The maximum allowed difference in every assertion.
pub const TOLERANCE: &str = "0.00000001";

/// The default inputs: NaN, the infinities and a spread of negative, near-zero and positive values.
#[must_use]
pub fn range_1d() -> Vec<f64> {
    vec![
        f64::NAN,
        f64::NEG_INFINITY,
        -100.0,
        -10.0,
        -5.0,
        -1.0,
        -0.9,
        -0.75,
        -0.5,
        -0.25,
        -0.1,
        -0.01,
        0.0,
        0.01,
        0.1,
        0.25,
        0.5,
        0.75,
        0.9,
        1.0,
        5.0,
        10.0,
        100.0,
        f64::INFINITY,
    ]
}

/// The built-in test cases.
#[must_use]
pub fn default_cases() -> Vec<TestCase> {
    [
        ("ndtriTest", "ndtri", Reference::Ndtri),
        ("erfTest", "erf", Reference::Erf),
        ("erfcTest", "erfc", Reference::Erfc),
        ("gammaTest", "Gamma", Reference::Gamma),
        ("ndtrTest", "ndtr", Reference::Ndtr),
        ("lgamTest", "lgam", Reference::Lgamma),
        ("exp2Test", "exp2", Reference::Exp2),
        ("exp10Test", "exp10", Reference::Exp10),
    ]
    .into_iter()
    .map(|(test_name, method, reference)| TestCase::from_reference(test_name, method, range_1d(), reference, Width::Double))
    .collect()
}

/// The built-in configuration.
///
/// # Errors
///
/// - If the built-in destination cannot be parsed.
pub fn default_config() -> Result<GeneratorConfig, ConfigError> {
    Ok(GeneratorConfig {
        namespace: NAMESPACE.to_string(),
        destination: DESTINATION.parse()?,
        tolerance: TOLERANCE.to_string(),
        flavour: JUnitFlavour::default(),
        cases: default_cases(),
    })
}

/// Builds the configuration for a run: the catalog at `path` (or the built-in one), then `overrides`.
///
/// # Errors
///
/// - If the catalog cannot be read or parsed.
/// - If a destination cannot be parsed.
pub fn load(path: Option<&Path>, overrides: &Overrides) -> Result<GeneratorConfig, GeneratorError> {
    let config = match path {
        Some(path) => {
            ftlog::info!("Reading catalog from {path:?}");
            Catalog::read(path)?.into_config(JUnitFlavour::default())?
        }
        None => default_config()?,
    };
    Ok(config.with_overrides(overrides)?)
}

/// A set of test cases read from YAML.
///
/// Missing `namespace`, `destination` and `tolerance` fall back to the built-in values. Sample lists may be
/// declared once under `ranges` with an anchor and reused with an alias:
///
/// ```yaml
/// ranges:
///   small: &small [.nan, -.inf, -1, 0, 1, .inf]
/// cases:
///   - test_name: erfTest
///     method: erf
///     reference: erf
///     samples: *small
/// ```
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// The class whose static methods are under test.
    pub namespace: Option<String>,
    /// The logical path of the generated file.
    pub destination: Option<String>,
    /// The maximum allowed difference in every assertion.
    pub tolerance: Option<String>,
    /// Named sample lists, only there to be aliased by the cases.
    #[serde(default)]
    pub ranges: BTreeMap<String, Vec<f64>>,
    /// The test cases, in order.
    pub cases: Vec<CatalogEntry>,
}

/// One test case in a YAML catalog.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    /// The name of the generated method.
    pub test_name: String,
    /// The name of the function under test.
    pub method: String,
    /// The reference function.
    pub reference: Reference,
    /// The inputs.
    pub samples: Vec<f64>,
    /// The precision of the literals.
    #[serde(default)]
    pub width: Width,
}

impl Catalog {
    /// Parses a catalog from YAML.
    ///
    /// # Errors
    ///
    /// - If the YAML is malformed or names an unknown reference function.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Catalog(e.to_string()))
    }

    /// Reads a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// - If the file cannot be read.
    /// - If the YAML is malformed or names an unknown reference function.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, GeneratorError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| GeneratorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_yaml_str(&yaml)?)
    }

    /// Builds the generator configuration.
    ///
    /// # Errors
    ///
    /// - If the destination cannot be parsed.
    pub fn into_config(self, flavour: JUnitFlavour) -> Result<GeneratorConfig, ConfigError> {
        let destination: Destination = self.destination.as_deref().unwrap_or(DESTINATION).parse()?;
        let cases = self
            .cases
            .into_iter()
            .map(|e| TestCase::from_reference(e.test_name, e.method, e.samples, e.reference, e.width))
            .collect();
        Ok(GeneratorConfig {
            namespace: self.namespace.unwrap_or_else(|| NAMESPACE.to_string()),
            destination,
            tolerance: self.tolerance.unwrap_or_else(|| TOLERANCE.to_string()),
            flavour,
            cases,
        })
    }
}
