//! Validated module registry

use std::collections::{BTreeMap, HashMap, HashSet};

use super::{RouteError, RouteKind};
use crate::config::{GroupMiddleware, ModularSettings};
use crate::naming::validate_segment;

/// Middleware names by module key
pub type MiddlewareMap = BTreeMap<String, GroupMiddleware>;

/// Immutable map of modules to sub-modules, with per-module middleware
///
/// Construction validates everything the route loader relies on, so a
/// registry that exists is well formed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRegistry {
    modules: BTreeMap<String, Vec<String>>,
    middleware: MiddlewareMap,
    sentinel: Option<String>,
}

impl ModuleRegistry {
    /// Build a registry
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Config`] if a module or sub-module key is not a
    /// plain identifier, two module keys share a URL prefix, a module lists
    /// the same sub-module twice, middleware is configured for an
    /// unregistered module or has an empty name, or the sentinel names an
    /// unregistered module.
    ///
    /// Prefixes are the lowercased module key, so `Shop` and `shop` collide.
    /// A prefixed module may not be called `api`, which is reserved for the
    /// API groups.
    pub fn new(
        modules: BTreeMap<String, Vec<String>>,
        middleware: MiddlewareMap,
        sentinel: Option<String>,
    ) -> Result<Self, RouteError> {
        let mut prefixes: HashMap<String, &str> = HashMap::new();
        for (module, submodules) in &modules {
            validate_segment(module, module)
                .map_err(|e| RouteError::Config(format!("module key: {e}")))?;

            let prefix = module.to_lowercase();
            if let Some(other) = prefixes.insert(prefix.clone(), module) {
                return Err(RouteError::Config(format!(
                    "modules '{other}' and '{module}' both map to prefix '{prefix}'"
                )));
            }
            if prefix == "api" && sentinel.as_deref() != Some(module.as_str()) {
                return Err(RouteError::Config(format!(
                    "module '{module}' would take the reserved prefix 'api'"
                )));
            }

            let mut seen = HashSet::new();
            for submodule in submodules {
                validate_segment(&format!("{module}/{submodule}"), submodule)
                    .map_err(|e| RouteError::Config(format!("sub-module of '{module}': {e}")))?;
                if !seen.insert(submodule.as_str()) {
                    return Err(RouteError::Config(format!(
                        "module '{module}' lists sub-module '{submodule}' more than once"
                    )));
                }
            }
        }

        for (module, groups) in &middleware {
            if !modules.contains_key(module) {
                return Err(RouteError::Config(format!(
                    "middleware configured for unknown module '{module}'"
                )));
            }
            if groups.web.iter().chain(&groups.api).any(|name| name.trim().is_empty()) {
                return Err(RouteError::Config(format!(
                    "module '{module}' has an empty middleware name"
                )));
            }
        }

        if let Some(sentinel) = &sentinel {
            if !modules.contains_key(sentinel) {
                return Err(RouteError::Config(format!(
                    "group_without_prefix names unknown module '{sentinel}'"
                )));
            }
        }

        Ok(Self {
            modules,
            middleware,
            sentinel,
        })
    }

    /// Build a registry from the `[modular]` configuration section
    ///
    /// # Errors
    ///
    /// See [`ModuleRegistry::new`].
    pub fn from_settings(settings: &ModularSettings) -> Result<Self, RouteError> {
        Self::new(
            settings.modules.clone(),
            settings.group_middleware.clone(),
            settings.group_without_prefix.clone(),
        )
    }

    /// `(module, sub-module)` pairs, modules in key order and sub-modules in
    /// listed order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.modules.iter().flat_map(|(module, submodules)| {
            submodules
                .iter()
                .map(move |submodule| (module.as_str(), submodule.as_str()))
        })
    }

    /// Middleware names for a module's group of `kind`, empty when none
    #[must_use]
    pub fn middleware(&self, module: &str, kind: RouteKind) -> &[String] {
        match (self.middleware.get(module), kind) {
            (Some(groups), RouteKind::Web) => &groups.web,
            (Some(groups), RouteKind::Api) => &groups.api,
            (None, _) => &[],
        }
    }

    /// Whether `module` is registered without a web prefix
    #[must_use]
    pub fn is_sentinel(&self, module: &str) -> bool {
        self.sentinel.as_deref() == Some(module)
    }

    /// Number of registered modules
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// True when no module is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
