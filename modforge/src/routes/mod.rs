//! Route loading for modular applications
//!
//! At boot, every `(module, sub-module)` pair of the [`ModuleRegistry`] is
//! checked for `Routes/web.<ext>` and `Routes/api.<ext>`. Each file found
//! becomes a [`RouteGroup`]:
//!
//! | File      | Prefix                | Middleware                         |
//! |-----------|-----------------------|------------------------------------|
//! | `web.rs`  | `lower(module)`       | `group_middleware[module].web`     |
//! | `api.rs`  | `api/lower(module)`   | `group_middleware[module].api`     |
//!
//! The web group of the sentinel module (`group_without_prefix`) has no
//! prefix. Missing files are skipped.
//!
//! Groups are handed to a [`RouteRegistrar`]. [`AxumRoutes`] is the
//! registrar for `axum`, resolving groups through a [`RouteTable`] and a
//! [`MiddlewareTable`].

mod loader;
mod registry;
mod router;

pub use loader::{RouteGroup, RouteLoader, RouteRegistrar};
pub use registry::{MiddlewareMap, ModuleRegistry};
pub use router::{AxumRoutes, MiddlewareTable, RouteBuilder, RouteTable, RouterLayer};

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Kind of a route group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    /// Browser routes from `Routes/web.<ext>`
    Web,
    /// JSON routes from `Routes/api.<ext>`
    Api,
}

impl RouteKind {
    /// Both kinds, web first
    pub const ALL: [Self; 2] = [Self::Web, Self::Api];

    /// `web` or `api`
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Api => "api",
        }
    }

    /// Route file name for a source extension (`web.rs`)
    #[must_use]
    pub fn file_name(self, extension: &str) -> String {
        format!("{}.{extension}", self.file_stem())
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Errors raised while loading routes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The module registry or middleware map is malformed
    #[error("invalid module configuration: {0}")]
    Config(String),

    /// A route file exists but no router is registered for it
    #[error("no {kind} routes registered for module '{module}/{submodule}'")]
    MissingRoutes {
        /// Module key
        module: String,
        /// Sub-module key
        submodule: String,
        /// Route kind
        kind: RouteKind,
    },

    /// A group names middleware that is not in the middleware table
    #[error("unknown middleware '{name}' on {kind} routes of module '{module}'")]
    UnknownMiddleware {
        /// Middleware name
        name: String,
        /// Module key
        module: String,
        /// Route kind
        kind: RouteKind,
    },
}
