use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

use tracing::debug;

/// Utility struct for locating panel documents
///
/// Panel documents live under `<config dir>/panelconf/<profile>/panels/` and
/// are named `<panel>.js`. Lookups follow the XDG Base Directory
/// specification and fall back to the `template` profile.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Profile searched when the requested profile has no such panel
    pub const TEMPLATE_PROFILE: &'static str = "template";

    /// File extension of panel documents
    pub const PANEL_FILE_SUFFIX: &'static str = "js";

    const APP_DIR: &'static str = "panelconf";

    /// Returns the user configuration directory for the application
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "panelconf" to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .ok()
            .filter(|dir| !dir.is_empty())
            .map(Ok)
            .unwrap_or_else(|| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join(Self::APP_DIR))
    }

    /// Returns the system-wide configuration directories, most important first
    ///
    /// Reads the colon-separated `XDG_CONFIG_DIRS`, defaulting to `/etc/xdg`.
    pub fn system_config_dirs() -> Vec<PathBuf> {
        let dirs = env::var("XDG_CONFIG_DIRS")
            .ok()
            .filter(|dirs| !dirs.is_empty())
            .unwrap_or_else(|| "/etc/xdg".to_string());

        dirs.split(':')
            .filter(|dir| !dir.is_empty())
            .map(|dir| PathBuf::from(dir).join(Self::APP_DIR))
            .collect()
    }

    /// Returns the user panels directory for a profile
    ///
    /// # Errors
    /// Returns an error if the user config directory cannot be determined
    pub fn user_panels_dir(profile: &str) -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join(profile).join("panels"))
    }

    /// Finds the document for panel `name` in `profile`
    ///
    /// Checks the user directory, then each system directory, then repeats
    /// the search in the template profile. Returns `None` if no file exists.
    pub fn panel_file(profile: &str, name: &str) -> Option<PathBuf> {
        Self::find_in_profile(profile, name).or_else(|| {
            if profile == Self::TEMPLATE_PROFILE {
                None
            } else {
                Self::find_in_profile(Self::TEMPLATE_PROFILE, name)
            }
        })
    }

    fn find_in_profile(profile: &str, name: &str) -> Option<PathBuf> {
        let file_name = format!("{name}.{}", Self::PANEL_FILE_SUFFIX);

        let user = Self::config_dir().ok();
        let candidates = user
            .into_iter()
            .chain(Self::system_config_dirs())
            .map(|base| base.join(profile).join("panels").join(&file_name));

        for candidate in candidates {
            if candidate.is_file() {
                debug!(path = %candidate.display(), "Found panel document");
                return Some(candidate);
            }
        }

        None
    }
}
