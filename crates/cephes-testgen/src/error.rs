//! Errors raised while generating the test file.

use std::path::PathBuf;

/// A mistake in the generator's configuration or in one of its test cases.
///
/// These are always raised before the output file is touched.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The test method would shadow the statically imported function it calls.
    #[error("test case `{test_name}` has the same name as the function it tests")]
    NameShadowsMethod {
        /// The name of the offending test case.
        test_name: String,
    },

    /// The test method would shadow a function tested by another case.
    #[error("test case `{test_name}` shadows the function `{method}` tested by `{other}`")]
    NameShadowsOtherMethod {
        /// The name of the offending test case.
        test_name: String,
        /// The function it would shadow.
        method: String,
        /// The test case that calls the shadowed function.
        other: String,
    },

    /// Two test cases would generate methods with the same name.
    #[error("test name `{0}` is used by more than one test case")]
    DuplicateTestName(String),

    /// A name that must be emitted as a Java identifier is not one.
    #[error("`{0}` is not a valid Java identifier")]
    InvalidIdentifier(String),

    /// The tolerance is not a finite, non-negative number.
    #[error("tolerance `{0}` is not a finite, non-negative number")]
    InvalidTolerance(String),

    /// The destination cannot be split into a package, a class name and an extension.
    #[error("destination `{0}` must look like `package.Class.ext`")]
    InvalidDestination(String),

    /// The working directory is not the directory of the destination's package.
    #[error("incorrect working directory: expected directory `{expected}` but found `{found}`; run from the directory of the output file")]
    LocationMismatch {
        /// The package segment the directory should have been named after.
        expected: String,
        /// The directory name that was found instead.
        found: String,
    },

    /// A YAML catalog could not be read or parsed.
    #[error("invalid catalog: {0}")]
    Catalog(String),
}

/// Any error that aborts a run.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The output file is missing or differs from a fresh rendering.
    #[error("'{}' is missing or out of date; regenerate it", .path.display())]
    Stale {
        /// The checked file.
        path: PathBuf,
    },

    /// The output file could not be read or written.
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
}
