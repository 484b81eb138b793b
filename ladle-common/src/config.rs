//! Configuration loading and root folder resolution
//!
//! All runtime configuration lives in the database `settings` table; this
//! module only answers the bootstrap question of WHERE the database lives.
//! Priority order for the root folder:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`LADLE_ROOT_FOLDER`, then `LADLE_ROOT`)
//! 3. TOML config file (`root_folder` key)
//! 4. OS-dependent compiled default (fallback)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::Result;

/// Database file name inside the root folder
pub const DATABASE_FILE_NAME: &str = "ladle.db";

/// Compiled default configuration for the current platform
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub root_folder: PathBuf,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl CompiledDefaults {
    /// Platform-dependent defaults used when no other source applies
    pub fn for_current_platform() -> Self {
        Self {
            root_folder: default_root_folder(),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Bootstrap configuration loaded from a TOML file
///
/// Minimal by design: the file only locates the root folder and shapes
/// logging. Everything else is database-backed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub root_folder: Option<PathBuf>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Resolves the root folder for a named module
///
/// A missing config file is not an error: resolution falls through to the
/// compiled default so startup never terminates on absent configuration.
pub struct RootFolderResolver {
    module_name: String,
    cli_override: Option<PathBuf>,
}

impl RootFolderResolver {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            cli_override: None,
        }
    }

    /// Apply a command-line override (highest priority)
    pub fn with_cli_override(mut self, path: Option<PathBuf>) -> Self {
        self.cli_override = path;
        self
    }

    /// Resolve the root folder following the documented priority order
    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.cli_override {
            debug!("Root folder from command line: {}", path.display());
            return path.clone();
        }

        if let Ok(path) = std::env::var("LADLE_ROOT_FOLDER") {
            debug!("Root folder from LADLE_ROOT_FOLDER: {}", path);
            return PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("LADLE_ROOT") {
            debug!("Root folder from LADLE_ROOT: {}", path);
            return PathBuf::from(path);
        }

        if let Some(config) = self.load_config_file() {
            if let Some(root_folder) = config.root_folder {
                debug!("Root folder from config file: {}", root_folder.display());
                return root_folder;
            }
        }

        CompiledDefaults::for_current_platform().root_folder
    }

    /// Load the module's TOML config file if one exists
    fn load_config_file(&self) -> Option<TomlConfig> {
        let path = self.config_file_path()?;
        if !path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read config file {}: {}", path.display(), e);
                return None;
            }
        };

        match toml::from_str::<TomlConfig>(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Failed to parse config file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Config file location: `<config dir>/ladle/<module>.toml`
    fn config_file_path(&self) -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ladle").join(format!("{}.toml", self.module_name)))
    }
}

/// Prepares a resolved root folder for use
pub struct RootFolderInitializer {
    root: PathBuf,
}

impl RootFolderInitializer {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create the root folder (and parents) if missing; idempotent
    pub fn ensure_directory_exists(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Path of the SQLite database inside the root folder
    pub fn database_path(&self) -> PathBuf {
        self.root.join(DATABASE_FILE_NAME)
    }

    pub fn database_exists(&self) -> bool {
        self.database_path().exists()
    }
}

/// OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        dirs::data_local_dir()
            .map(|d| d.join("ladle"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/ladle"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("ladle"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/ladle"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("ladle"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\ladle"))
    } else {
        PathBuf::from("./ladle_data")
    }
}
