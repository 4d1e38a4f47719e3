//! Strict `$`-placeholder substitution.
//!
//! Placeholders are `${key}` or `$key`, and `$$` is a literal dollar sign.
//! Every placeholder must resolve against the supplied [`Substitutions`];
//! unknown keys and stray `$` characters are errors rather than being passed
//! through unchanged.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$(?:(?P<escaped>\$)|(?P<named>[_A-Za-z][_A-Za-z0-9]*)|\{(?P<braced>[_A-Za-z][_A-Za-z0-9]*)\}|(?P<invalid>))",
    )
    .expect("valid regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("no value supplied for placeholder '{0}'")]
    MissingKey(String),

    /// `line` and `column` are 1-based and count characters, not bytes.
    #[error("invalid placeholder at line {line}, column {column}")]
    InvalidPlaceholder { line: usize, column: usize },
}

/// Key to value mapping used when rendering a [`Template`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Template<'a> {
    source: &'a str,
}

impl<'a> Template<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    pub fn substitute(&self, substitutions: &Substitutions) -> Result<String, TemplateError> {
        let mut rendered = String::with_capacity(self.source.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(self.source) {
            let whole = caps.get(0).expect("group 0 is always present");
            rendered.push_str(&self.source[last..whole.start()]);

            if caps.name("escaped").is_some() {
                rendered.push('$');
            } else if let Some(key) = caps.name("named").or_else(|| caps.name("braced")) {
                let value = substitutions
                    .get(key.as_str())
                    .ok_or_else(|| TemplateError::MissingKey(key.as_str().to_string()))?;
                rendered.push_str(value);
            } else {
                return Err(invalid_placeholder(self.source, whole.start()));
            }

            last = whole.end();
        }

        rendered.push_str(&self.source[last..]);
        Ok(rendered)
    }
}

/// Both numbers are 1-based.
fn invalid_placeholder(source: &str, offset: usize) -> TemplateError {
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    TemplateError::InvalidPlaceholder { line, column }
}
