//! # modforge
//!
//! Scaffolding and route loading for modular `axum` applications.
//!
//! An application is split into feature modules below `src/Modules`, each
//! addressed by a namespaced name such as `Billing\Invoice`. modforge:
//!
//! - derives every file path, code path, URL segment and table name of a
//!   module from its name ([`naming`])
//! - generates the module's files from overridable stubs without ever
//!   overwriting existing files ([`scaffold`])
//! - discovers each module's `Routes/web.rs` and `Routes/api.rs` at boot and
//!   mounts them under their prefixes with their middleware ([`routes`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modforge::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ModforgeConfig::load(None)?;
//!
//! let module = ModuleName::parse("Billing\\Invoice")?;
//! let report = ModuleGenerator::from_settings(&config.generator)
//!     .generate(&module, &[Task::Model, Task::Controller]);
//! for outcome in report.outcomes() {
//!     println!("{outcome}");
//! }
//!
//! let loader = RouteLoader::from_config(&config)?;
//! let router: axum::Router = loader.router(&RouteTable::new(), &MiddlewareTable::new())?;
//! # let _ = router;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod naming;
pub mod observability;
pub mod routes;
pub mod scaffold;

pub use error::{Error, Result};

/// Commonly used types
pub mod prelude {
    pub use crate::config::{GeneratorSettings, ModforgeConfig, ModularSettings};
    pub use crate::error::{Error, Result};
    pub use crate::naming::{ModuleName, NameError, NameHelpers};
    pub use crate::routes::{
        AxumRoutes, MiddlewareTable, ModuleRegistry, RouteError, RouteGroup, RouteKind,
        RouteLoader, RouteRegistrar, RouteTable,
    };
    pub use crate::scaffold::{
        ArtifactOutcome, ArtifactStatus, GenerationReport, MigrationCreator, ModuleGenerator,
        ProjectLayout, Selection, StubRepository, Task,
    };
}
