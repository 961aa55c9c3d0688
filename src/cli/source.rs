use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    PanelConfigError,
    config::{ConfigPaths, PanelConfig},
};

use super::CliError;

/// Resolves the `<panel>` argument of commands to a document on disk.
///
/// An argument naming an existing file is used as-is. Anything else is
/// treated as a panel name and looked up in the active profile.
#[derive(Debug, Clone)]
pub struct PanelSource {
    profile: String,
}

impl PanelSource {
    /// Profile used when none is configured.
    pub const DEFAULT_PROFILE: &'static str = "default";

    /// Creates a source that looks panel names up in `profile`.
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
        }
    }

    /// Finds the document for a `<panel>` argument.
    ///
    /// # Errors
    ///
    /// Returns `CliError::PanelNotFound` if the argument is neither a file
    /// nor a panel in the profile (or the template profile).
    pub fn resolve(&self, arg: &str) -> Result<PathBuf, CliError> {
        let direct = Path::new(arg);
        if direct.is_file() {
            return Ok(direct.to_path_buf());
        }

        debug!(panel = arg, profile = %self.profile, "Looking up panel by name");
        ConfigPaths::panel_file(&self.profile, arg).ok_or_else(|| {
            CliError::PanelNotFound(format!(
                "'{arg}' is not a file and no such panel exists in profile '{}'",
                self.profile
            ))
        })
    }

    /// Resolves and loads a `<panel>` argument.
    ///
    /// # Errors
    ///
    /// Returns `CliError::PanelNotFound` from resolution, or
    /// `CliError::InvalidDocument` with a full report if loading fails.
    pub fn load(&self, arg: &str) -> Result<PanelConfig, CliError> {
        let path = self.resolve(arg)?;
        PanelConfig::load_file(&path).map_err(|e| CliError::InvalidDocument(render_report(&e)))
    }
}

impl Default for PanelSource {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROFILE)
    }
}

/// Renders a load error with each schema problem on its own line.
pub fn render_report(error: &PanelConfigError) -> String {
    match error {
        PanelConfigError::Schema { location, errors } => {
            let mut report = format!("{location}: {} problem(s)", errors.len());
            for schema_error in errors {
                report.push_str(&format!("\n  {schema_error}"));
            }
            report
        }
        other => other.to_string(),
    }
}
