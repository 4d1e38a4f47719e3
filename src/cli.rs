use clap::Parser;

use crate::config::validate_name;

/// Create new source files for a tastylib component.
///
/// Always writes a header under include/tastylib/ and a gtest file under
/// test/. Run from the project root; the target directories must exist.
#[derive(Parser, Debug)]
#[command(name = "tasty-new")]
#[command(version)]
#[command(about, long_about)]
pub struct Cli {
    /// Name of the header file (without extension)
    #[arg(value_parser = parse_name)]
    pub name: String,

    /// Generate source file (default is header-only)
    #[arg(short = 's')]
    pub source: bool,

    /// Generate benchmark source file
    #[arg(short = 'b')]
    pub benchmark: bool,

    /// Suppress colored output
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long = "verbose")]
    pub verbose: bool,
}

fn parse_name(value: &str) -> Result<String, String> {
    validate_name(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}
