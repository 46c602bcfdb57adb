//! Runtime settings shared by every command
//!
//! Built once at startup and passed down explicitly, so nothing below `main` reads the
//! environment on its own.

use crate::error::{LintGenError, Result};
use crate::runtime::PackageManager;
use std::path::PathBuf;

/// File name of the template store inside the home directory
pub const STORE_FILE_NAME: &str = ".lint_gen_templates.json";

/// Environment variable overriding the template store location
pub const STORE_PATH_ENV: &str = "LINT_GEN_TEMPLATES_PATH";

/// Environment variable selecting the package manager
pub const PACKAGE_MANAGER_ENV: &str = "LINT_GEN_PACKAGE_MANAGER";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory config files are written to and read from
    pub working_dir: PathBuf,

    /// Template store location, `None` when no home directory could be found
    pub store_path: Option<PathBuf>,

    pub package_manager: PackageManager,
}

impl Settings {
    /// Resolve settings from the process environment
    ///
    /// Returns the settings together with any warnings worth showing the operator.
    pub fn from_env(package_manager: Option<PackageManager>) -> (Self, Vec<String>) {
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::resolve(
            working_dir,
            std::env::var(STORE_PATH_ENV).ok(),
            dirs::home_dir(),
            package_manager,
            std::env::var(PACKAGE_MANAGER_ENV).ok(),
        )
    }

    /// Resolution logic behind [`Settings::from_env`], with every input explicit
    pub fn resolve(
        working_dir: PathBuf,
        store_override: Option<String>,
        home_dir: Option<PathBuf>,
        package_manager_flag: Option<PackageManager>,
        package_manager_env: Option<String>,
    ) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let store_path = match store_override.filter(|s| !s.trim().is_empty()) {
            Some(path) => Some(PathBuf::from(path)),
            None => home_dir.map(|home| home.join(STORE_FILE_NAME)),
        };

        let package_manager = match package_manager_flag {
            Some(pm) => pm,
            None => match package_manager_env.as_deref() {
                Some(value) if !value.trim().is_empty() => {
                    PackageManager::parse(value).unwrap_or_else(|| {
                        warnings.push(format!(
                            "Ignoring unknown {}={}, using npm",
                            PACKAGE_MANAGER_ENV, value
                        ));
                        PackageManager::Npm
                    })
                }
                _ => PackageManager::Npm,
            },
        };

        (
            Self {
                working_dir,
                store_path,
                package_manager,
            },
            warnings,
        )
    }

    /// Settings rooted at a directory, with an explicit store path
    pub fn for_dir(working_dir: impl Into<PathBuf>, store_path: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            store_path: Some(store_path.into()),
            package_manager: PackageManager::Npm,
        }
    }

    pub fn require_store_path(&self) -> Result<PathBuf> {
        self.store_path.clone().ok_or(LintGenError::NoHomeDirectory)
    }
}
