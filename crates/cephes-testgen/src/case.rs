//! Test case descriptors and the rendering of one test method.

use crate::{ConfigError, Reference, Width, WidthUsage};

/// Describes one generated test method.
///
/// Each sample in `cases` becomes one assertion that `method(x)` equals `evaluator(x)` within the shared
/// tolerance.
#[derive(Debug, Clone)]
pub struct TestCase {
    /// The name of the generated method. Must differ from `method`.
    pub test_name: String,
    /// The name of the function under test.
    pub method: String,
    /// The inputs, in the order their assertions are emitted.
    pub cases: Vec<f64>,
    /// Computes the reference value for an input.
    pub evaluator: fn(f64) -> f64,
    /// The precision at which inputs and expected values are written.
    pub width: Width,
    /// The built-in reference function behind `evaluator`, if there is one.
    pub reference: Option<Reference>,
}

/// The source of one rendered test method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCase {
    /// The source text of the method, including its trailing blank line.
    pub source: String,
    /// The widths of the literals written into the method.
    pub widths: WidthUsage,
    /// The number of assertions in the method.
    pub assertions: usize,
}

impl TestCase {
    /// Creates a test case whose values are written as `double`s.
    pub fn double<N: Into<String>, M: Into<String>>(test_name: N, method: M, cases: Vec<f64>, evaluator: fn(f64) -> f64) -> Self {
        Self {
            test_name: test_name.into(),
            method: method.into(),
            cases,
            evaluator,
            width: Width::Double,
            reference: None,
        }
    }

    /// Creates a test case whose values are written as `float`s.
    pub fn float<N: Into<String>, M: Into<String>>(test_name: N, method: M, cases: Vec<f64>, evaluator: fn(f64) -> f64) -> Self {
        Self {
            width: Width::Float,
            ..Self::double(test_name, method, cases, evaluator)
        }
    }

    /// Creates a test case checked against one of the built-in reference functions.
    pub fn from_reference<N: Into<String>, M: Into<String>>(test_name: N, method: M, cases: Vec<f64>, reference: Reference, width: Width) -> Self {
        Self {
            width,
            reference: Some(reference),
            ..Self::double(test_name, method, cases, reference.function())
        }
    }

    /// Renders the test method.
    ///
    /// # Errors
    ///
    /// - `ConfigError::NameShadowsMethod` if `test_name` is the same as `method`.
    pub fn render(&self) -> Result<RenderedCase, ConfigError> {
        if self.test_name == self.method {
            return Err(ConfigError::NameShadowsMethod {
                test_name: self.test_name.clone(),
            });
        }

        let mut widths = WidthUsage::default();
        let mut source = String::new();
        source.push_str("\t/**\n");
        source.push_str(&format!("\t * Run auto-generated {}\n", self.test_name));
        source.push_str("\t*/\n");
        source.push_str("\t@Test\n");
        source.push_str(&format!("\tpublic void {}(){{\n", self.test_name));
        for &x in &self.cases {
            let expected = widths.format((self.evaluator)(x), self.width);
            let input = widths.format(x, self.width);
            source.push_str(&format!("\t\tassertEquals({expected}, {}({input}), precision);\n", self.method));
        }
        source.push_str("\t}\n\n");

        Ok(RenderedCase {
            source,
            widths,
            assertions: self.cases.len(),
        })
    }
}

/// Java's reserved words, which cannot be used as identifiers.
const JAVA_KEYWORDS: [&str; 54] = [
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const", "continue", "default", "do", "double", "else", "enum",
    "extends", "final", "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long", "native", "new",
    "package", "private", "protected", "public", "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null", "_",
];

/// Whether `name` can be used as a Java identifier.
pub(crate) fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let valid_start = chars.next().is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$');
    valid_start && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') && !JAVA_KEYWORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{TestCase, is_java_identifier};
    use crate::{ConfigError, Reference, Width};

    #[test]
    fn erf_with_special_values() {
        let case = TestCase::double("erfTest", "erf", vec![f64::NAN, -1.0, 0.0, 1.0], libm::erf);
        let rendered = case.render().unwrap();

        let assertions = rendered.source.lines().filter(|l| l.contains("assertEquals")).collect::<Vec<_>>();
        assert_eq!(assertions.len(), 4);
        assert_eq!(rendered.assertions, 4);
        assert_eq!(assertions[0], "\t\tassertEquals(Double.NaN, erf(Double.NaN), precision);");
        assert_eq!(assertions[1], format!("\t\tassertEquals({:?}, erf(-1.0), precision);", libm::erf(-1.0)));
        assert_eq!(assertions[2], "\t\tassertEquals(0.0, erf(0.0), precision);");
        assert_eq!(assertions[3], format!("\t\tassertEquals({:?}, erf(1.0), precision);", libm::erf(1.0)));
        assert!(rendered.widths.double);
        assert!(!rendered.widths.float);
    }

    #[test]
    fn empty_cases_render_an_empty_method() {
        let case = TestCase::double("emptyTest", "erf", Vec::new(), libm::erf);
        let rendered = case.render().unwrap();
        assert_eq!(rendered.assertions, 0);
        assert_eq!(
            rendered.source,
            "\t/**\n\t * Run auto-generated emptyTest\n\t*/\n\t@Test\n\tpublic void emptyTest(){\n\t}\n\n"
        );
        assert!(!rendered.widths.double && !rendered.widths.float);
    }

    #[test]
    fn name_must_differ_from_method() {
        let case = TestCase::double("erf", "erf", vec![0.0], libm::erf);
        assert!(matches!(case.render(), Err(ConfigError::NameShadowsMethod { test_name }) if test_name == "erf"));
    }

    #[test]
    fn assertions_follow_sample_order() {
        let samples = vec![5.0, -5.0, 0.5, f64::INFINITY];
        let case = TestCase::from_reference("cbrtTest", "cbrt", samples.clone(), Reference::Cbrt, Width::Double);
        let rendered = case.render().unwrap();
        let inputs = rendered
            .source
            .lines()
            .filter_map(|l| l.split_once("cbrt(").map(|(_, rest)| rest.split(')').next().unwrap_or_default().to_string()))
            .collect::<Vec<_>>();
        assert_eq!(inputs, ["5.0", "-5.0", "0.5", "Double.POSITIVE_INFINITY"]);
    }

    #[test]
    fn float_cases_use_float_literals() {
        let case = TestCase::float("erfFloatTest", "erff", vec![f64::NEG_INFINITY, 0.5], libm::erf);
        let rendered = case.render().unwrap();
        assert!(rendered.source.contains("assertEquals(-1.0f, erff(Float.NEGATIVE_INFINITY), precision);"));
        assert!(rendered.source.contains(&format!("assertEquals({:?}f, erff(0.5f), precision);", libm::erf(0.5) as f32)));
        assert!(rendered.widths.float);
        assert!(!rendered.widths.double);
    }

    #[test]
    fn reference_is_kept() {
        let case = TestCase::from_reference("ndtriTest", "ndtri", vec![0.5], Reference::Ndtri, Width::Double);
        assert_eq!(case.reference, Some(Reference::Ndtri));
        assert_eq!((case.evaluator)(0.5), Reference::Ndtri.eval(0.5));

        let case = TestCase::double("erfTest", "erf", vec![0.5], libm::erf);
        assert_eq!(case.reference, None);
    }

    #[test]
    fn rendering_is_deterministic() {
        let case = TestCase::from_reference("gammaTest", "Gamma", vec![f64::NAN, -0.5, 0.5, 10.0], Reference::Gamma, Width::Double);
        assert_eq!(case.render().unwrap(), case.render().unwrap());
    }

    #[test_case("erfTest", true)]
    #[test_case("_x$1", true)]
    #[test_case("1erf", false)]
    #[test_case("erf-test", false)]
    #[test_case("double", false)]
    #[test_case("_", false; "underscore")]
    #[test_case("__", true; "double_underscore")]
    #[test_case("", false; "empty")]
    fn identifiers(name: &str, valid: bool) {
        assert_eq!(is_java_identifier(name), valid);
    }
}
