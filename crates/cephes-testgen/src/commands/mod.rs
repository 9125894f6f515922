//! The commands under the `cephes-testgen` CLI.

mod check;
mod generate;
mod list;

use clap::Subcommand;

pub use check::check;
pub use generate::generate;
pub use list::list;

#[derive(Subcommand, Debug, Clone, Copy, Default)]
pub enum Commands {
    /// Write the test file into the working directory (the default).
    #[default]
    Generate,
    /// Fail if the test file in the working directory is missing or out of date.
    Check,
    /// Print the test cases without writing anything.
    List,
}
