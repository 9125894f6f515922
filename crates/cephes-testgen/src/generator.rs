//! The driver that validates the configuration, renders every test case and writes the test file.

use std::{
    collections::{HashMap, HashSet},
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    ConfigError, Destination, GeneratorError, TestCase, Width, WidthUsage, case::is_java_identifier, location, validate_output_location,
};

/// The JUnit API the generated tests are written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum JUnitFlavour {
    /// JUnit 5.
    #[default]
    #[clap(name = "jupiter")]
    Jupiter,
    /// JUnit 4.
    #[clap(name = "legacy")]
    Legacy,
}

impl JUnitFlavour {
    /// The fully qualified name of `assertEquals`.
    #[must_use]
    pub const fn assert_equals(self) -> &'static str {
        match self {
            Self::Jupiter => "org.junit.jupiter.api.Assertions.assertEquals",
            Self::Legacy => "org.junit.Assert.assertEquals",
        }
    }

    /// The fully qualified name of the `@Test` annotation.
    #[must_use]
    pub const fn test_annotation(self) -> &'static str {
        match self {
            Self::Jupiter => "org.junit.jupiter.api.Test",
            Self::Legacy => "org.junit.Test",
        }
    }
}

/// Everything needed for one run of the generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// The fully qualified class whose static methods are under test.
    pub namespace: String,
    /// Where the generated class lives.
    pub destination: Destination,
    /// The maximum allowed difference in every assertion, as a decimal Java `double` literal with an optional
    /// `d`/`D` suffix, e.g. `0.00000001` or `1e-8d`. Hexadecimal literals are not accepted.
    pub tolerance: String,
    /// The JUnit API to import.
    pub flavour: JUnitFlavour,
    /// The test methods to generate, in order.
    pub cases: Vec<TestCase>,
}

/// Values that replace those of a `GeneratorConfig`, e.g. from the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replaces the namespace.
    pub namespace: Option<String>,
    /// Replaces the destination, given as a dotted logical path.
    pub destination: Option<String>,
    /// Replaces the tolerance.
    pub tolerance: Option<String>,
    /// Replaces the JUnit API.
    pub flavour: Option<JUnitFlavour>,
}

impl GeneratorConfig {
    /// Replaces every value for which `overrides` has one.
    ///
    /// # Errors
    ///
    /// - If the destination override cannot be parsed.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self, ConfigError> {
        if let Some(namespace) = &overrides.namespace {
            self.namespace.clone_from(namespace);
        }
        if let Some(destination) = &overrides.destination {
            self.destination = destination.parse()?;
        }
        if let Some(tolerance) = &overrides.tolerance {
            self.tolerance.clone_from(tolerance);
        }
        if let Some(flavour) = overrides.flavour {
            self.flavour = flavour;
        }
        Ok(self)
    }
}

/// The fully rendered test file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// The name of the file in the working directory.
    pub file_name: String,
    /// The Java source.
    pub source: String,
    /// The widths of all literals written into the file.
    pub widths: WidthUsage,
    /// The total number of assertions.
    pub assertions: usize,
}

/// Generates the test file described by a `GeneratorConfig`.
#[derive(Debug, Clone)]
pub struct Generator {
    /// The configuration for the run.
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration for the run.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Checks the configuration without touching the filesystem.
    ///
    /// # Errors
    ///
    /// - If the tolerance is not a finite, non-negative number.
    /// - If the namespace, the destination or any test case contains a name that is not a Java identifier.
    /// - If a test case has the same name as the function it tests, or as any other tested function.
    /// - If two test cases have the same name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let config = &self.config;

        let tolerance = config.tolerance.trim();
        let digits = tolerance.strip_suffix(&['d', 'D'][..]).unwrap_or(tolerance);
        match digits.parse::<f64>() {
            Ok(t) if t.is_finite() && t >= 0.0 => (),
            _ => return Err(ConfigError::InvalidTolerance(config.tolerance.clone())),
        }

        let package = config.destination.package_name();
        let qualified_names = [config.namespace.as_str(), package.as_str(), config.destination.class_name()];
        for name in qualified_names.into_iter().filter(|n| !n.is_empty()) {
            if let Some(segment) = name.split('.').find(|s| !is_java_identifier(s)) {
                return Err(ConfigError::InvalidIdentifier(segment.to_string()));
            }
        }
        if config.namespace.is_empty() {
            return Err(ConfigError::InvalidIdentifier(String::new()));
        }

        let mut methods = HashMap::new();
        for case in &config.cases {
            for name in [&case.test_name, &case.method] {
                if !is_java_identifier(name) {
                    return Err(ConfigError::InvalidIdentifier(name.clone()));
                }
            }
            methods.entry(case.method.as_str()).or_insert(case.test_name.as_str());
        }

        let mut seen = HashSet::new();
        for case in &config.cases {
            if case.test_name == case.method {
                return Err(ConfigError::NameShadowsMethod {
                    test_name: case.test_name.clone(),
                });
            }
            if let Some(&other) = methods.get(case.test_name.as_str()) {
                return Err(ConfigError::NameShadowsOtherMethod {
                    test_name: case.test_name.clone(),
                    method: case.test_name.clone(),
                    other: other.to_string(),
                });
            }
            if !seen.insert(case.test_name.as_str()) {
                return Err(ConfigError::DuplicateTestName(case.test_name.clone()));
            }
        }

        Ok(())
    }

    /// Renders the whole test file.
    ///
    /// The file holds, in order: the package declaration, the static imports of the functions under test and of
    /// `assertEquals`, the import of `@Test`, imports of `Double` and `Float` only if their literals were used,
    /// the class declaration with the shared `precision` constant, and one method per test case.
    ///
    /// # Errors
    ///
    /// - If the configuration is invalid. See [`Generator::validate`].
    pub fn render(&self) -> Result<Artifact, ConfigError> {
        self.validate()?;
        let config = &self.config;

        let mut widths = WidthUsage::default();
        let mut assertions = 0;
        let mut methods = String::new();
        for case in &config.cases {
            let rendered = case.render()?;
            ftlog::debug!("Rendered {} with {} assertions", case.test_name, rendered.assertions);
            widths = widths.merge(rendered.widths);
            assertions += rendered.assertions;
            methods.push_str(&rendered.source);
        }

        let mut source = String::new();
        let package = config.destination.package_name();
        if !package.is_empty() {
            source.push_str(&format!("package {package};\n\n"));
        }
        source.push_str(&format!("import static {}.*;\n", config.namespace));
        source.push_str(&format!("import static {};\n\n", config.flavour.assert_equals()));
        source.push_str(&format!("import {};\n", config.flavour.test_annotation()));
        for width in [Width::Double, Width::Float] {
            if widths.uses(width) {
                source.push_str(&format!("import java.lang.{};\n", width.boxed_type()));
            }
        }
        source.push('\n');
        source.push_str(&format!("public final class {} {{\n", config.destination.class_name()));
        source.push_str(&format!("\tprivate static final double precision = {};\n\n", config.tolerance.trim()));
        source.push_str(&methods);
        source.push_str("}\n");

        Ok(Artifact {
            file_name: config.destination.file_name(),
            source,
            widths,
            assertions,
        })
    }

    /// Renders the test file and writes it into `working_dir`, replacing any existing file.
    ///
    /// Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// - If the configuration is invalid. See [`Generator::validate`].
    /// - If `working_dir` is not the directory of the destination's package.
    /// - If the file could not be written.
    pub fn run<P: AsRef<Path>>(&self, working_dir: P) -> Result<PathBuf, GeneratorError> {
        let artifact = self.render()?;
        self.check_location(&working_dir)?;

        let path = working_dir.as_ref().join(&artifact.file_name);
        ftlog::info!(
            "Writing {} test methods with {} assertions to {path:?}",
            self.config.cases.len(),
            artifact.assertions
        );
        write_source(&path, &artifact.source).map_err(|source| GeneratorError::Io { path: path.clone(), source })?;
        ftlog::info!("Wrote {path:?}");

        Ok(path)
    }

    /// Renders the test file and compares it with the file already in `working_dir`.
    ///
    /// Returns `false` if the file is missing or differs from a fresh rendering.
    ///
    /// # Errors
    ///
    /// - If the configuration is invalid. See [`Generator::validate`].
    /// - If `working_dir` is not the directory of the destination's package.
    /// - If the existing file could not be read.
    pub fn check<P: AsRef<Path>>(&self, working_dir: P) -> Result<bool, GeneratorError> {
        let artifact = self.render()?;
        self.check_location(&working_dir)?;

        let path = working_dir.as_ref().join(&artifact.file_name);
        match std::fs::read_to_string(&path) {
            Ok(existing) => Ok(existing == artifact.source),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(GeneratorError::Io { path, source }),
        }
    }

    /// Like [`Generator::check`], but a missing or outdated file is an error.
    ///
    /// Returns the path of the checked file.
    ///
    /// # Errors
    ///
    /// - `GeneratorError::Stale` if the file is missing or differs from a fresh rendering.
    /// - Any error from [`Generator::check`].
    pub fn ensure_current<P: AsRef<Path>>(&self, working_dir: P) -> Result<PathBuf, GeneratorError> {
        let path = working_dir.as_ref().join(self.config.destination.file_name());
        if self.check(&working_dir)? {
            ftlog::info!("{path:?} is up to date");
            Ok(path)
        } else {
            ftlog::warn!("{path:?} is missing or out of date");
            Err(GeneratorError::Stale { path })
        }
    }

    /// Checks that `working_dir` is the directory of the destination's package.
    fn check_location<P: AsRef<Path>>(&self, working_dir: P) -> Result<(), ConfigError> {
        let segments = location::path_segments(working_dir);
        validate_output_location(&segments, &self.config.destination)?;
        ftlog::debug!("Working directory matches package {}", self.config.destination.package_name());
        Ok(())
    }
}

/// Writes `source` to `path`, truncating any existing file.
fn write_source(path: &Path, source: &str) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(source.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{Generator, GeneratorConfig, JUnitFlavour, Overrides};
    use crate::{ConfigError, TestCase};

    fn config(cases: Vec<TestCase>) -> GeneratorConfig {
        GeneratorConfig {
            namespace: "net.mahdilamb.statistics.libs.Cephes".to_string(),
            destination: "net.mahdilamb.statistics.cephes.JUnitTests.java".parse().unwrap(),
            tolerance: "0.00000001".to_string(),
            flavour: JUnitFlavour::Jupiter,
            cases,
        }
    }

    fn erf(test_name: &str) -> TestCase {
        TestCase::double(test_name, "erf", vec![f64::NAN, -1.0, 0.0, 1.0], libm::erf)
    }

    #[test]
    fn header_and_footer() {
        let artifact = Generator::new(config(vec![erf("erfTest")])).render().unwrap();
        let expected_header = "package net.mahdilamb.statistics.cephes;\n\n\
            import static net.mahdilamb.statistics.libs.Cephes.*;\n\
            import static org.junit.jupiter.api.Assertions.assertEquals;\n\n\
            import org.junit.jupiter.api.Test;\n\
            import java.lang.Double;\n\n\
            public final class JUnitTests {\n\
            \tprivate static final double precision = 0.00000001;\n\n\
            \t/**\n";
        assert!(artifact.source.starts_with(expected_header), "{}", artifact.source);
        assert!(artifact.source.ends_with("\t}\n\n}\n"));
        assert_eq!(artifact.file_name, "JUnitTests.java");
        assert_eq!(artifact.assertions, 4);
    }

    #[test]
    fn legacy_imports() {
        let mut config = config(vec![erf("erfTest")]);
        config.flavour = JUnitFlavour::Legacy;
        let source = Generator::new(config).render().unwrap().source;
        assert!(source.contains("import static org.junit.Assert.assertEquals;\n"));
        assert!(source.contains("import org.junit.Test;\n"));
        assert!(!source.contains("jupiter"));
    }

    #[test_case(false, false; "no_cases")]
    #[test_case(true, false; "double_only")]
    #[test_case(false, true; "float_only")]
    #[test_case(true, true; "both")]
    fn minimal_imports(with_double: bool, with_float: bool) {
        let mut cases = Vec::new();
        if with_double {
            cases.push(erf("erfTest"));
        }
        if with_float {
            cases.push(TestCase::float("erfFloatTest", "erff", vec![0.5], libm::erf));
        }
        let artifact = Generator::new(config(cases)).render().unwrap();
        assert_eq!(artifact.source.contains("import java.lang.Double;"), with_double);
        assert_eq!(artifact.source.contains("import java.lang.Float;"), with_float);
        assert_eq!(artifact.widths.double, with_double);
        assert_eq!(artifact.widths.float, with_float);
    }

    #[test]
    fn empty_case_does_not_import_boxed_types() {
        let artifact = Generator::new(config(vec![TestCase::double("emptyTest", "erf", Vec::new(), libm::erf)])).render().unwrap();
        assert!(artifact.source.contains("\tpublic void emptyTest(){\n\t}\n"));
        assert!(!artifact.source.contains("import java.lang."));
    }

    #[test]
    fn methods_follow_list_order() {
        let cases = vec![erf("b"), erf("a"), erf("c")];
        let source = Generator::new(config(cases)).render().unwrap().source;
        let positions = ["void b()", "void a()", "void c()"].map(|m| source.find(m).unwrap());
        assert!(positions[0] < positions[1] && positions[1] < positions[2]);
    }

    #[test]
    fn name_equal_to_method_is_rejected() {
        let err = Generator::new(config(vec![erf("erf")])).render().unwrap_err();
        assert!(matches!(err, ConfigError::NameShadowsMethod { ref test_name } if test_name == "erf"));
        assert!(err.to_string().contains("`erf`"));
    }

    #[test]
    fn name_equal_to_other_method_is_rejected() {
        let cases = vec![erf("Gamma"), TestCase::double("gammaTest", "Gamma", vec![1.0], libm::tgamma)];
        let err = Generator::new(config(cases)).render().unwrap_err();
        assert!(matches!(err, ConfigError::NameShadowsOtherMethod { ref other, .. } if other == "gammaTest"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = Generator::new(config(vec![erf("erfTest"), erf("erfTest")])).render().unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateTestName(ref name) if name == "erfTest"));
    }

    #[test_case("0.00000001"; "plain")]
    #[test_case("1e-8d"; "double_suffix")]
    #[test_case(" 1E-8D "; "upper_suffix_padded")]
    #[test_case("0"; "zero")]
    fn valid_tolerance(tolerance: &str) {
        let mut config = config(vec![erf("erfTest")]);
        config.tolerance = tolerance.to_string();
        let generator = Generator::new(config);
        assert!(generator.validate().is_ok());
        assert!(generator.render().unwrap().source.contains(&format!("precision = {};", tolerance.trim())));
    }

    #[test_case("abc"; "not_a_number")]
    #[test_case("0x1p-27"; "hexadecimal")]
    #[test_case("1e-8f"; "float_suffix")]
    #[test_case("d"; "bare_suffix")]
    #[test_case("-0.1"; "negative")]
    #[test_case("inf"; "infinite")]
    #[test_case("NaN"; "nan")]
    fn invalid_tolerance(tolerance: &str) {
        let mut config = config(vec![erf("erfTest")]);
        config.tolerance = tolerance.to_string();
        assert!(matches!(Generator::new(config).validate(), Err(ConfigError::InvalidTolerance(_))));
    }

    #[test_case("net.mahdi-lamb.Cephes"; "hyphen")]
    #[test_case(""; "empty")]
    fn invalid_namespace(namespace: &str) {
        let mut config = config(vec![erf("erfTest")]);
        config.namespace = namespace.to_string();
        assert!(matches!(Generator::new(config).validate(), Err(ConfigError::InvalidIdentifier(_))));
    }

    #[test]
    fn underscore_test_name_is_rejected() {
        let err = Generator::new(config(vec![erf("_")])).validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidIdentifier(ref name) if name == "_"));
    }

    #[test]
    fn overrides_replace_only_given_values() {
        let base = config(vec![erf("erfTest")]);
        let unchanged = base.clone().with_overrides(&Overrides::default()).unwrap();
        assert_eq!(unchanged.namespace, base.namespace);
        assert_eq!(unchanged.destination, base.destination);
        assert_eq!(unchanged.tolerance, base.tolerance);
        assert_eq!(unchanged.flavour, base.flavour);

        let overrides = Overrides {
            namespace: Some("org.example.Special".to_string()),
            destination: Some("org.example.SpecialTests.java".to_string()),
            tolerance: Some("1e-6".to_string()),
            flavour: Some(JUnitFlavour::Legacy),
        };
        let changed = base.with_overrides(&overrides).unwrap();
        assert_eq!(changed.namespace, "org.example.Special");
        assert_eq!(changed.destination.file_name(), "SpecialTests.java");
        assert_eq!(changed.destination.package_name(), "org.example");
        assert_eq!(changed.tolerance, "1e-6");
        assert_eq!(changed.flavour, JUnitFlavour::Legacy);
        assert_eq!(changed.cases.len(), 1);
    }

    #[test]
    fn malformed_destination_override_is_rejected() {
        let overrides = Overrides {
            destination: Some("Tests".to_string()),
            ..Overrides::default()
        };
        let err = config(Vec::new()).with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDestination(_)));
    }

    #[test]
    fn rendering_is_idempotent() {
        let generator = Generator::new(config(vec![erf("erfTest"), TestCase::float("erfFloatTest", "erff", vec![0.25], libm::erf)]));
        assert_eq!(generator.render().unwrap(), generator.render().unwrap());
    }
}
