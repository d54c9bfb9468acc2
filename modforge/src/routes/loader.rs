//! Route group discovery

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use super::registry::ModuleRegistry;
use super::{RouteError, RouteKind};
use crate::config::ModforgeConfig;
use crate::naming::NameHelpers;

/// Routes registered under a common prefix and middleware chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteGroup {
    /// Module key (`Shop`)
    pub module: String,
    /// Sub-module key (`Storefront`)
    pub submodule: String,
    /// Web or API
    pub kind: RouteKind,
    /// URL prefix without slashes; `None` for the sentinel's web group
    pub prefix: Option<String>,
    /// Middleware names, outermost first
    pub middleware: Vec<String>,
    /// Code path of the group's controllers
    pub namespace: String,
    /// Route file that produced the group
    pub routes_file: PathBuf,
}

/// Receives route groups from [`RouteLoader::load`]
pub trait RouteRegistrar {
    /// Register one group
    ///
    /// # Errors
    ///
    /// Returns an error if the group cannot be resolved.
    fn register(&mut self, group: &RouteGroup) -> Result<(), RouteError>;
}

impl RouteRegistrar for Vec<RouteGroup> {
    fn register(&mut self, group: &RouteGroup) -> Result<(), RouteError> {
        self.push(group.clone());
        Ok(())
    }
}

/// Discovers route groups for every registered module
#[derive(Debug, Clone)]
pub struct RouteLoader {
    registry: ModuleRegistry,
    base_path: PathBuf,
    extension: String,
    root_namespace: String,
}

impl RouteLoader {
    /// Loader over `registry`, looking for route files below `base_path`
    #[must_use]
    pub fn new(registry: ModuleRegistry, base_path: impl Into<PathBuf>) -> Self {
        Self {
            registry,
            base_path: base_path.into(),
            extension: "rs".to_string(),
            root_namespace: "crate".to_string(),
        }
    }

    /// Build a loader from configuration
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Config`] if the module registry is malformed.
    pub fn from_config(config: &ModforgeConfig) -> Result<Self, RouteError> {
        let registry = ModuleRegistry::from_settings(&config.modular)?;
        Ok(Self::new(registry, &config.modular.path)
            .with_extension(&config.generator.extension)
            .with_root_namespace(&config.generator.root_namespace))
    }

    /// Extension of route files (`rs`)
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Root of controller namespaces (`crate`)
    #[must_use]
    pub fn with_root_namespace(mut self, root: impl Into<String>) -> Self {
        self.root_namespace = root.into();
        self
    }

    /// The registry being loaded
    #[must_use]
    pub const fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Directory searched for modules
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Route groups for every route file present, in registry order with the
    /// web group of a sub-module before its API group
    #[must_use]
    pub fn plan(&self) -> Vec<RouteGroup> {
        let mut groups = Vec::new();

        for (module, submodule) in self.registry.entries() {
            let routes_dir = self.base_path.join(module).join(submodule).join("Routes");

            for kind in RouteKind::ALL {
                let routes_file = routes_dir.join(kind.file_name(&self.extension));
                if !routes_file.is_file() {
                    debug!(path = %routes_file.display(), "no {kind} routes");
                    continue;
                }

                groups.push(RouteGroup {
                    module: module.to_string(),
                    submodule: submodule.to_string(),
                    kind,
                    prefix: self.prefix(module, kind),
                    middleware: self.registry.middleware(module, kind).to_vec(),
                    namespace: self.controller_namespace(module, submodule),
                    routes_file,
                });
            }
        }

        groups
    }

    fn prefix(&self, module: &str, kind: RouteKind) -> Option<String> {
        let lower = module.to_lowercase();
        match kind {
            RouteKind::Web if self.registry.is_sentinel(module) => None,
            RouteKind::Web => Some(lower),
            RouteKind::Api => Some(format!("api/{lower}")),
        }
    }

    fn controller_namespace(&self, module: &str, submodule: &str) -> String {
        let tail = format!(
            "modules::{}::{}::controllers",
            NameHelpers::to_snake_case(module),
            NameHelpers::to_snake_case(submodule)
        );
        if self.root_namespace.is_empty() {
            tail
        } else {
            format!("{}::{tail}", self.root_namespace)
        }
    }

    /// Register every planned group with `registrar`
    ///
    /// Returns the groups registered.
    ///
    /// # Errors
    ///
    /// Stops at the first group the registrar rejects.
    pub fn load<R: RouteRegistrar>(&self, registrar: &mut R) -> Result<Vec<RouteGroup>, RouteError> {
        let groups = self.plan();
        for group in &groups {
            debug!(
                module = %group.module,
                submodule = %group.submodule,
                kind = %group.kind,
                prefix = group.prefix.as_deref().unwrap_or("/"),
                "registering route group"
            );
            registrar.register(group)?;
        }
        info!(groups = groups.len(), "module routes loaded");
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::tempdir;

    fn touch(base: &Path, module: &str, submodule: &str, file: &str) {
        let dir = base.join(module).join(submodule).join("Routes");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), "").unwrap();
    }

    fn registry(sentinel: Option<&str>) -> ModuleRegistry {
        ModuleRegistry::new(
            BTreeMap::from([("Shop".to_string(), vec!["Storefront".to_string()])]),
            BTreeMap::new(),
            sentinel.map(str::to_string),
        )
        .unwrap()
    }

    #[test]
    fn test_api_group_prefix_and_namespace() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "Shop", "Storefront", "api.rs");

        let groups = RouteLoader::new(registry(None), dir.path()).plan();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].kind, RouteKind::Api);
        assert_eq!(groups[0].prefix.as_deref(), Some("api/shop"));
        assert_eq!(
            groups[0].namespace,
            "crate::modules::shop::storefront::controllers"
        );
    }

    #[test]
    fn test_sentinel_api_group_keeps_prefix() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "Shop", "Storefront", "web.rs");
        touch(dir.path(), "Shop", "Storefront", "api.rs");

        let groups = RouteLoader::new(registry(Some("Shop")), dir.path()).plan();
        assert_eq!(groups[0].prefix, None);
        assert_eq!(groups[1].prefix.as_deref(), Some("api/shop"));
    }

    #[test]
    fn test_extension_and_root_namespace() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "Shop", "Storefront", "web.php");
        touch(dir.path(), "Shop", "Storefront", "web.rs");

        let groups = RouteLoader::new(registry(None), dir.path())
            .with_extension("php")
            .with_root_namespace("app")
            .plan();
        assert_eq!(groups.len(), 1);
        assert!(groups[0].routes_file.ends_with("Routes/web.php"));
        assert_eq!(groups[0].namespace, "app::modules::shop::storefront::controllers");
    }

    #[test]
    fn test_vec_registrar_collects_groups() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "Shop", "Storefront", "web.rs");

        let mut collected = Vec::new();
        let loaded = RouteLoader::new(registry(None), dir.path())
            .load(&mut collected)
            .unwrap();
        assert_eq!(loaded, collected);
    }
}
