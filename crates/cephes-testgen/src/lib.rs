//! Generates JUnit tests that check a Java port of the Cephes special-functions library against reference
//! implementations.
//!
//! A run samples a fixed set of inputs for each [`TestCase`], evaluates the reference function on each sample,
//! and writes a single Java source file with one `assertEquals(expected, method(x), precision)` per sample.
//!
//! ```no_run
//! use cephes_testgen::{Generator, catalog};
//!
//! let generator = Generator::new(catalog::default_config().map_err(|e| e.to_string())?);
//! let working_dir = std::env::current_dir().map_err(|e| e.to_string())?;
//! let written = generator.run(&working_dir).map_err(|e| e.to_string())?;
//! println!("Wrote {}", written.display());
//! # Ok::<(), String>(())
//! ```

pub mod case;
pub mod catalog;
mod error;
pub mod format;
pub mod generator;
pub mod location;
pub mod reference;

pub use case::{RenderedCase, TestCase};
pub use error::{ConfigError, GeneratorError};
pub use format::{Width, WidthUsage, format_literal};
pub use generator::{Artifact, Generator, GeneratorConfig, JUnitFlavour, Overrides};
pub use location::{Destination, validate_output_location};
pub use reference::Reference;
