//! CLI command implementations

pub mod make_module;
pub mod routes;
pub mod stub_publish;

pub use make_module::{ArtifactFlags, MakeModuleCommand};
pub use routes::RoutesCommand;
pub use stub_publish::StubPublishCommand;
