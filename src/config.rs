use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::cli::Cli;
use crate::error::ScaffoldError;

pub const MODULE: &str = "tastylib";

pub const DIR_INC: &str = "include";
pub const DIR_SRC: &str = "src";
pub const DIR_TEST: &str = "test";
pub const DIR_BENCHMARK: &str = "benchmark";

pub const EXT_HEADER: &str = "h";
pub const EXT_SRC: &str = "cpp";

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

/// Rejects names that are not usable both as a file stem and as a C++
/// identifier (the test template emits `TEST(<name>Test, Basic)`).
pub fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    if IDENTIFIER.is_match(name) {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidName(name.to_string()))
    }
}

/// Module name and directory table for a project tree.
///
/// `root` defaults to the empty path, so every derived path stays relative to
/// the directory the tool was invoked from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub root: PathBuf,
    pub module: String,
    pub include_dir: String,
    pub src_dir: String,
    pub test_dir: String,
    pub benchmark_dir: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            module: MODULE.to_string(),
            include_dir: DIR_INC.to_string(),
            src_dir: DIR_SRC.to_string(),
            test_dir: DIR_TEST.to_string(),
            benchmark_dir: DIR_BENCHMARK.to_string(),
        }
    }
}

impl Layout {
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    pub fn module_upper(&self) -> String {
        self.module.to_uppercase()
    }

    /// `<root>/include/<module>`
    pub fn module_include_dir(&self) -> PathBuf {
        self.root.join(&self.include_dir).join(&self.module)
    }

    /// `<root>/src/<module>`
    pub fn module_src_dir(&self) -> PathBuf {
        self.root.join(&self.src_dir).join(&self.module)
    }

    /// `<root>/test`
    pub fn test_src_dir(&self) -> PathBuf {
        self.root.join(&self.test_dir)
    }

    /// `<root>/src/benchmark`
    pub fn benchmark_src_dir(&self) -> PathBuf {
        self.root.join(&self.src_dir).join(&self.benchmark_dir)
    }
}

#[derive(Debug)]
pub struct Config {
    pub name: String,
    pub generate_source: bool,
    pub generate_benchmark: bool,
    pub no_color: bool,
    pub verbose: bool,
    pub layout: Layout,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ScaffoldError> {
        validate_name(&cli.name)?;

        Ok(Self {
            name: cli.name,
            generate_source: cli.source,
            generate_benchmark: cli.benchmark,
            no_color: cli.no_color,
            verbose: cli.verbose,
            layout: Layout::default(),
        })
    }
}
