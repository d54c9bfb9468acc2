//! Configuration management for modforge
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `MODFORGE_` prefix, `__` for nesting)
//! 2. `./modforge.toml`, or the file given explicitly
//! 3. `~/.config/modforge/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! [generator]
//! app_path = "src"
//! resources_path = "resources"
//! stub_dir = "stubs"
//! extension = "rs"
//! root_namespace = "crate"
//!
//! [modular]
//! path = "src/Modules"
//! group_without_prefix = "Main"
//!
//! [modular.modules]
//! Shop = ["Storefront", "Cart"]
//! Main = ["Home"]
//!
//! [modular.group_middleware.Shop]
//! web = ["auth"]
//! api = ["throttle"]
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "modforge.toml";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Defaults could not be serialized
    #[error("failed to serialize default configuration: {0}")]
    Defaults(#[from] toml::ser::Error),

    /// A source could not be read, parsed or extracted
    #[error("invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),

    /// An explicitly requested file does not exist
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),
}

/// Generator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Application source root; modules live in `<app_path>/Modules`
    pub app_path: PathBuf,

    /// Root for views and UI components
    pub resources_path: PathBuf,

    /// Project stub directory searched before the built-in stubs
    pub stub_dir: PathBuf,

    /// Extension of generated source files and route files
    pub extension: String,

    /// Root of generated code paths
    pub root_namespace: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            app_path: PathBuf::from("src"),
            resources_path: PathBuf::from("resources"),
            stub_dir: PathBuf::from("stubs"),
            extension: "rs".to_string(),
            root_namespace: "crate".to_string(),
        }
    }
}

/// Middleware names applied to a module's route groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupMiddleware {
    /// Applied to the web group
    pub web: Vec<String>,

    /// Applied to the API group
    pub api: Vec<String>,
}

/// Module registry settings consumed by the route loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModularSettings {
    /// Directory holding `<Module>/<SubModule>/Routes/*`
    pub path: PathBuf,

    /// Module whose web routes are registered without a prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_without_prefix: Option<String>,

    /// Module key to sub-module keys
    pub modules: BTreeMap<String, Vec<String>>,

    /// Middleware by module key
    pub group_middleware: BTreeMap<String, GroupMiddleware>,
}

impl Default for ModularSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("src").join("Modules"),
            group_without_prefix: None,
            modules: BTreeMap::new(),
            group_middleware: BTreeMap::new(),
        }
    }
}

/// Complete modforge configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModforgeConfig {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorSettings,

    /// Module registry settings
    #[serde(default)]
    pub modular: ModularSettings,
}

impl ModforgeConfig {
    /// Load configuration from the standard locations
    ///
    /// When `explicit` is given it replaces `./modforge.toml` and must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - An explicit configuration file does not exist
    /// - A configuration file contains invalid TOML or values of the wrong shape
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Self::defaults()?;

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                debug!(path = %user_config.display(), "merging user configuration");
                figment = figment.merge(Toml::file(&user_config));
            }
        }

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                debug!(path = %path.display(), "merging configuration file");
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let local = PathBuf::from(LOCAL_CONFIG_FILE);
                if local.exists() {
                    debug!(path = %local.display(), "merging local configuration");
                    figment = figment.merge(Toml::file(&local));
                }
            }
        }

        figment = figment.merge(Env::prefixed("MODFORGE_").split("__"));

        figment.extract().map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    /// Load configuration from a TOML string on top of the defaults
    ///
    /// Environment variables are not consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid TOML or has values of the
    /// wrong shape.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .merge(Toml::string(source))
            .extract()
            .map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    fn defaults() -> Result<Figment, ConfigError> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }

    /// `~/.config/modforge/config.toml` or the platform equivalent
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("modforge").join("config.toml"))
    }
}
