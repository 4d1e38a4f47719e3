//! File generation for a new component.
//!
//! A [`Scaffolder`] turns a component name into up to four [`OutputSpec`]s
//! (header, test, source, benchmark), renders each one from its template and
//! writes it below the configured [`Layout`]. Existing files are overwritten;
//! target directories are expected to exist already.

pub mod templates;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::config::{EXT_HEADER, EXT_SRC, Layout, validate_name};
use crate::error::{Result, ScaffoldError};
use crate::template::{Substitutions, Template};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Header,
    Test,
    Source,
    Benchmark,
}

impl OutputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Header => "header",
            OutputKind::Test => "test",
            OutputKind::Source => "source",
            OutputKind::Benchmark => "benchmark",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            OutputKind::Header => templates::HEADER,
            OutputKind::Test => templates::TEST,
            OutputKind::Source => templates::SOURCE,
            OutputKind::Benchmark => templates::BENCHMARK,
        }
    }
}

/// One file to generate: where it goes and which template fills it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    pub kind: OutputKind,
    pub dir: PathBuf,
    pub file_name: String,
    pub template: &'static str,
}

impl OutputSpec {
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

pub struct Scaffolder {
    layout: Layout,
    no_color: bool,
}

impl Scaffolder {
    pub fn new(layout: Layout, no_color: bool) -> Self {
        Self { layout, no_color }
    }

    /// Lists the outputs for `name` in write order: header, test, then the
    /// optional source and benchmark files.
    pub fn plan(
        &self,
        name: &str,
        generate_source: bool,
        generate_benchmark: bool,
    ) -> Vec<OutputSpec> {
        let layout = &self.layout;
        let mut specs = vec![
            self.spec(
                OutputKind::Header,
                layout.module_include_dir(),
                format!("{}.{}", name, EXT_HEADER),
            ),
            self.spec(
                OutputKind::Test,
                layout.test_src_dir(),
                format!("{}_{}.{}", layout.test_dir, name, EXT_SRC),
            ),
        ];

        if generate_source {
            specs.push(self.spec(
                OutputKind::Source,
                layout.module_src_dir(),
                format!("{}.{}", name, EXT_SRC),
            ));
        }

        if generate_benchmark {
            specs.push(self.spec(
                OutputKind::Benchmark,
                layout.benchmark_src_dir(),
                format!("{}_{}.{}", layout.benchmark_dir, name, EXT_SRC),
            ));
        }

        specs
    }

    fn spec(&self, kind: OutputKind, dir: PathBuf, file_name: String) -> OutputSpec {
        OutputSpec {
            kind,
            dir,
            file_name,
            template: kind.template(),
        }
    }

    /// Builds the exact substitution set each template expects.
    pub fn substitutions(&self, kind: OutputKind, name: &str) -> Substitutions {
        let base = Substitutions::new().with("module", self.layout.module.as_str());

        match kind {
            OutputKind::Header => base
                .with("module_upper", self.layout.module_upper())
                .with("name_upper", name.to_uppercase()),
            OutputKind::Source => base
                .with("module_upper", self.layout.module_upper())
                .with("name", name),
            OutputKind::Test | OutputKind::Benchmark => base.with("name", name),
        }
    }

    pub fn render(&self, spec: &OutputSpec, name: &str) -> Result<String> {
        let substitutions = self.substitutions(spec.kind, name);
        log::debug!(
            "Rendering {} template with keys: {}",
            spec.kind.as_str(),
            substitutions.keys().collect::<Vec<_>>().join(", ")
        );
        Ok(Template::new(spec.template).substitute(&substitutions)?)
    }

    /// Generates the selected files, printing progress to stdout.
    ///
    /// Returns the written paths in write order.
    pub fn run(
        &self,
        name: &str,
        generate_source: bool,
        generate_benchmark: bool,
    ) -> Result<Vec<PathBuf>> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.run_with_progress(name, generate_source, generate_benchmark, &mut handle)
    }

    /// Like [`Scaffolder::run`], with progress lines sent to `progress`.
    ///
    /// Stops at the first failure. Files written before it are left in place.
    pub fn run_with_progress<W: Write>(
        &self,
        name: &str,
        generate_source: bool,
        generate_benchmark: bool,
        progress: &mut W,
    ) -> Result<Vec<PathBuf>> {
        validate_name(name)?;

        let mut written = Vec::new();

        for spec in self.plan(name, generate_source, generate_benchmark) {
            let path = spec.path();
            let content = self.render(&spec, name)?;

            self.report(progress, &path)?;

            fs::write(&path, &content).map_err(|source| ScaffoldError::Io {
                path: path.clone(),
                source,
            })?;

            log::debug!("Wrote {} bytes to {}", content.len(), path.display());
            written.push(path);
        }

        Ok(written)
    }

    fn report<W: Write>(&self, progress: &mut W, path: &Path) -> Result<()> {
        let shown = path.display().to_string();
        let line = if self.no_color {
            writeln!(progress, "Creating {} ...", shown)
        } else {
            writeln!(progress, "Creating {} ...", shown.green())
        };
        line.and_then(|_| progress.flush()).map_err(ScaffoldError::Progress)
    }
}
