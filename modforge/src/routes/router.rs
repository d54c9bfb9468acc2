//! `axum` binding for route groups
//!
//! Route files are ordinary Rust modules exposing `pub fn routes<S>() ->
//! Router<S>`. The application lists them in a [`RouteTable`] and its
//! middleware in a [`MiddlewareTable`]; nothing is resolved by name at
//! runtime beyond these two tables.
//!
//! ```
//! use axum::{routing::get, Router};
//! use modforge::routes::{MiddlewareTable, RouteKind, RouteTable};
//!
//! fn storefront() -> Router {
//!     Router::new().route("/products", get(|| async { "products" }))
//! }
//!
//! let routes = RouteTable::new().with("Shop", "Storefront", RouteKind::Web, storefront);
//! let middleware = MiddlewareTable::<()>::new().with("auth", |router| router);
//! assert!(routes.get("Shop", "Storefront", RouteKind::Web).is_some());
//! assert!(middleware.contains("auth"));
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use axum::Router;

use super::loader::{RouteGroup, RouteLoader, RouteRegistrar};
use super::{RouteError, RouteKind};

/// Builds the router of one route file
pub type RouteBuilder<S> = fn() -> Router<S>;

/// Wraps a router in middleware
pub type RouterLayer<S> = Arc<dyn Fn(Router<S>) -> Router<S> + Send + Sync>;

/// Route builders by `(module, sub-module, kind)`
pub struct RouteTable<S = ()> {
    builders: HashMap<(String, String, RouteKind), RouteBuilder<S>>,
}

impl<S> RouteTable<S> {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Add a builder, replacing any previous one for the same key
    pub fn insert(
        &mut self,
        module: impl Into<String>,
        submodule: impl Into<String>,
        kind: RouteKind,
        builder: RouteBuilder<S>,
    ) {
        self.builders
            .insert((module.into(), submodule.into(), kind), builder);
    }

    /// Builder-style [`RouteTable::insert`]
    #[must_use]
    pub fn with(
        mut self,
        module: impl Into<String>,
        submodule: impl Into<String>,
        kind: RouteKind,
        builder: RouteBuilder<S>,
    ) -> Self {
        self.insert(module, submodule, kind, builder);
        self
    }

    /// Look up a builder
    #[must_use]
    pub fn get(&self, module: &str, submodule: &str, kind: RouteKind) -> Option<RouteBuilder<S>> {
        self.builders
            .get(&(module.to_string(), submodule.to_string(), kind))
            .copied()
    }

    /// Number of builders
    #[must_use]
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// True when no builder is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl<S> Default for RouteTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Router transforms by middleware name
///
/// Entries named `web` and `api` are base stacks: they wrap every group of
/// that kind, outside the group's own middleware.
pub struct MiddlewareTable<S = ()> {
    layers: HashMap<String, RouterLayer<S>>,
}

impl<S> MiddlewareTable<S> {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        Self {
            layers: HashMap::new(),
        }
    }

    /// Add a transform, replacing any previous one with the same name
    pub fn insert<F>(&mut self, name: impl Into<String>, layer: F)
    where
        F: Fn(Router<S>) -> Router<S> + Send + Sync + 'static,
    {
        self.layers.insert(name.into(), Arc::new(layer));
    }

    /// Builder-style [`MiddlewareTable::insert`]
    #[must_use]
    pub fn with<F>(mut self, name: impl Into<String>, layer: F) -> Self
    where
        F: Fn(Router<S>) -> Router<S> + Send + Sync + 'static,
    {
        self.insert(name, layer);
        self
    }

    /// Look up a transform
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RouterLayer<S>> {
        self.layers.get(name)
    }

    /// Whether a transform is registered under `name`
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.layers.contains_key(name)
    }
}

impl<S> Default for MiddlewareTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// [`RouteRegistrar`] producing an `axum` [`Router`]
///
/// Groups are resolved as they are registered; the router is only assembled
/// by [`AxumRoutes::into_router`], so a failed load never yields a partial
/// router.
pub struct AxumRoutes<'a, S = ()> {
    routes: &'a RouteTable<S>,
    middleware: &'a MiddlewareTable<S>,
    groups: BTreeMap<Option<String>, Vec<Router<S>>>,
}

impl<'a, S> AxumRoutes<'a, S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Registrar resolving through the given tables
    #[must_use]
    pub fn new(routes: &'a RouteTable<S>, middleware: &'a MiddlewareTable<S>) -> Self {
        Self {
            routes,
            middleware,
            groups: BTreeMap::new(),
        }
    }

    /// Assemble the router
    ///
    /// Groups sharing a prefix are merged, then nested under `/<prefix>`.
    /// Groups without a prefix are merged at the root.
    #[must_use]
    pub fn into_router(self) -> Router<S> {
        let mut app = Router::new();
        for (prefix, routers) in self.groups {
            let merged = routers
                .into_iter()
                .fold(Router::new(), |acc, router| acc.merge(router));
            app = match prefix {
                Some(prefix) => app.nest(&format!("/{prefix}"), merged),
                None => app.merge(merged),
            };
        }
        app
    }

    fn layer(&self, name: &str, group: &RouteGroup) -> Result<&RouterLayer<S>, RouteError> {
        self.middleware
            .get(name)
            .ok_or_else(|| RouteError::UnknownMiddleware {
                name: name.to_string(),
                module: group.module.clone(),
                kind: group.kind,
            })
    }
}

impl<S> RouteRegistrar for AxumRoutes<'_, S>
where
    S: Clone + Send + Sync + 'static,
{
    fn register(&mut self, group: &RouteGroup) -> Result<(), RouteError> {
        let builder = self
            .routes
            .get(&group.module, &group.submodule, group.kind)
            .ok_or_else(|| RouteError::MissingRoutes {
                module: group.module.clone(),
                submodule: group.submodule.clone(),
                kind: group.kind,
            })?;

        // Resolve every name before building anything.
        let layers = group
            .middleware
            .iter()
            .map(|name| self.layer(name, group))
            .collect::<Result<Vec<_>, _>>()?;

        let mut router = builder();
        for layer in layers.into_iter().rev() {
            router = layer(router);
        }
        if let Some(stack) = self.middleware.get(group.kind.file_stem()) {
            router = stack(router);
        }

        self.groups
            .entry(group.prefix.clone())
            .or_default()
            .push(router);
        Ok(())
    }
}

impl RouteLoader {
    /// Load every group into an `axum` router
    ///
    /// # Errors
    ///
    /// Returns an error if a route file has no entry in `routes` or a group
    /// names middleware missing from `middleware`. No router is returned in
    /// that case.
    pub fn router<S>(
        &self,
        routes: &RouteTable<S>,
        middleware: &MiddlewareTable<S>,
    ) -> Result<Router<S>, RouteError>
    where
        S: Clone + Send + Sync + 'static,
    {
        let mut registrar = AxumRoutes::new(routes, middleware);
        self.load(&mut registrar)?;
        Ok(registrar.into_router())
    }
}
