//! Writing the test file.

use std::path::Path;

use cephes_testgen::Generator;

/// Generates the test file in `working_dir`.
pub fn generate(generator: &Generator, working_dir: &Path) -> Result<(), String> {
    let config = generator.config();
    ftlog::info!(
        "Generating {} test cases against {} with tolerance {}",
        config.cases.len(),
        config.namespace,
        config.tolerance
    );
    let path = generator.run(working_dir).map_err(|e| e.to_string())?;
    println!("Wrote {}", path.display());
    Ok(())
}
