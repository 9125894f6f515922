//! Checking that the test file is up to date.

use std::path::Path;

use cephes_testgen::Generator;

/// Checks that the test file in `working_dir` matches a fresh rendering.
pub fn check(generator: &Generator, working_dir: &Path) -> Result<(), String> {
    let path = generator.ensure_current(working_dir).map_err(|e| e.to_string())?;
    println!("{} is up to date", path.display());
    Ok(())
}
