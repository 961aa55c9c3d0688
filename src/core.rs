use std::{
    fmt,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for loading panel documents.
///
/// A document either fails to parse at all, fails schema checks, or could
/// not be read from disk.
#[derive(Error, Debug)]
pub enum PanelConfigError {
    /// The text is not well-formed JSON.
    #[error("failed to parse panel config at '{location}' (line {line}, column {column}): {details}")]
    Parse {
        /// Location of the document (file path or "string")
        location: String,
        /// 1-based line of the syntax error
        line: usize,
        /// 1-based column of the syntax error
        column: usize,
        /// Parser error details
        details: String,
    },

    /// The document is well-formed but violates the panel schema.
    #[error("panel config at '{location}' is invalid: {}", SchemaErrors(.errors))]
    Schema {
        /// Location of the document (file path or "string")
        location: String,
        /// Every schema problem found, in document order
        errors: Vec<SchemaError>,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    Io {
        /// Path where the I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },
}

/// A single schema violation, located by its path in the document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{path}: {reason}")]
pub struct SchemaError {
    /// Dotted location of the offending value, e.g. `plugins[2].type`.
    pub path: String,
    /// What is wrong with it.
    pub reason: String,
}

impl SchemaError {
    /// Creates a schema error at `path`.
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

struct SchemaErrors<'a>(&'a [SchemaError]);

impl fmt::Display for SchemaErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// A specialized `Result` type for panel config operations.
pub type Result<T> = result::Result<T, PanelConfigError>;

impl PanelConfigError {
    /// Creates a parse error from a `serde_json` syntax error.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn parse(error: &serde_json::Error, path: Option<&Path>) -> Self {
        PanelConfigError::Parse {
            location: location(path),
            line: error.line(),
            column: error.column(),
            details: error.to_string(),
        }
    }

    /// Creates a schema error carrying every violation found.
    pub fn schema(errors: Vec<SchemaError>, path: Option<&Path>) -> Self {
        PanelConfigError::Schema {
            location: location(path),
            errors,
        }
    }

    /// Creates an I/O error with file path context.
    pub fn io(error: impl fmt::Display, path: &Path) -> Self {
        PanelConfigError::Io {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Returns the schema violations, or an empty slice for other errors.
    pub fn schema_errors(&self) -> &[SchemaError] {
        match self {
            PanelConfigError::Schema { errors, .. } => errors,
            _ => &[],
        }
    }

    /// Whether this is a syntax error.
    pub fn is_parse(&self) -> bool {
        matches!(self, PanelConfigError::Parse { .. })
    }

    /// Whether this is a schema error.
    pub fn is_schema(&self) -> bool {
        matches!(self, PanelConfigError::Schema { .. })
    }
}

fn location(path: Option<&Path>) -> String {
    match path {
        Some(p) => {
            let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
            clean_path.to_string_lossy().to_string()
        }
        None => "string".to_string(),
    }
}
