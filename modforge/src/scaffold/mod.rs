//! Module scaffolding
//!
//! Generates the files of a feature module from stubs:
//!
//! - **Migration**: create-table migration through a [`MigrationCreator`]
//! - **Vue component**: `<res>/js/components/<Dir>.vue`
//! - **Views**: `create`, `edit`, `index` and `show`
//! - **Model**: `<app>/Modules/<Dir>/Models/<Model>.<ext>`
//! - **Controller**: resource controller plus `Routes/web.<ext>`
//! - **API controller**: JSON controller plus `Routes/api.<ext>`
//!
//! # Example
//!
//! ```no_run
//! use modforge::naming::ModuleName;
//! use modforge::scaffold::{ModuleGenerator, ProjectLayout, Selection, StubRepository};
//!
//! let generator = ModuleGenerator::new(ProjectLayout::default(), StubRepository::for_project("stubs"));
//! let module = ModuleName::parse("Billing\\Invoice").unwrap();
//! let report = generator.generate(&module, &Selection::all().tasks());
//! for outcome in report.outcomes() {
//!     println!("{outcome}");
//! }
//! ```

pub mod fs;
mod generator;
mod layout;
mod migration;
mod report;
pub mod stubs;
mod task;

pub use generator::{ArtifactError, ModuleGenerator, MIGRATION_LABEL};
pub use layout::{
    ArtifactKind, ArtifactSpec, MigrationRequest, ProjectLayout, TaskPlan, MODULES_DIR, VIEW_NAMES,
};
pub use migration::{MigrationCreator, MigrationError, SqlMigrationCreator, TIMESTAMP_FORMAT};
pub use report::{ArtifactOutcome, ArtifactStatus, GenerationReport};
pub use stubs::{Placeholders, StubError, StubId, StubRenderer, StubRepository};
pub use task::{Selection, Task};
