//! The destination of the generated file, and the check that the tool is run from its directory.

use std::path::{Component, Path};

use crate::ConfigError;

/// The dotted logical path of the generated file, e.g. `net.mahdilamb.statistics.cephes.JUnitTests.java`.
///
/// The last two segments are the class name and the file extension. All preceding segments form the package,
/// which must match the trailing directories of the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// The package segments, outermost first.
    package: Vec<String>,
    /// The name of the generated class.
    class_name: String,
    /// The extension of the generated file.
    extension: String,
}

impl Destination {
    /// The package segments, outermost first.
    #[must_use]
    pub fn package(&self) -> &[String] {
        &self.package
    }

    /// The package as it appears in a `package` declaration.
    #[must_use]
    pub fn package_name(&self) -> String {
        self.package.join(".")
    }

    /// The name of the generated class.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The name of the generated file.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.class_name, self.extension)
    }
}

impl std::str::FromStr for Destination {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.split('.').map(str::to_string).collect::<Vec<_>>();
        if segments.len() < 2 || segments.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidDestination(s.to_string()));
        }
        let extension = segments.pop().unwrap_or_default();
        let class_name = segments.pop().unwrap_or_default();
        Ok(Self {
            package: segments,
            class_name,
            extension,
        })
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.package {
            write!(f, "{segment}.")?;
        }
        write!(f, "{}", self.file_name())
    }
}

/// Checks that the trailing directories of the working directory spell out the destination's package.
///
/// Walks upward from the innermost directory and compares each name against the package segments, last
/// segment first. A working directory with fewer segments than the package is a mismatch.
///
/// # Errors
///
/// - `ConfigError::LocationMismatch` naming the first segment that differs.
pub fn validate_output_location<S: AsRef<str>>(cwd_segments: &[S], destination: &Destination) -> Result<(), ConfigError> {
    let mut directories = cwd_segments.iter().rev().map(AsRef::as_ref);
    for expected in destination.package().iter().rev() {
        let found = directories.next().unwrap_or_default();
        if found != expected {
            return Err(ConfigError::LocationMismatch {
                expected: expected.clone(),
                found: found.to_string(),
            });
        }
    }
    Ok(())
}

/// Returns the names of the normal components of `path`, outermost first.
pub fn path_segments<P: AsRef<Path>>(path: P) -> Vec<String> {
    path.as_ref()
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}
