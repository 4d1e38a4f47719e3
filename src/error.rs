use std::path::PathBuf;

use thiserror::Error;

use crate::template::TemplateError;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Invalid name '{0}': expected a C++ identifier ([A-Za-z_][A-Za-z0-9_]*)")]
    InvalidName(String),

    #[error("Cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write progress output: {0}")]
    Progress(#[source] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
