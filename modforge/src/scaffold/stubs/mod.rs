//! Stub resolution and rendering
//!
//! Stubs are minijinja templates. They are looked up, in order, in:
//!
//! 1. the project stub directory (`./stubs` by default)
//! 2. `$XDG_CONFIG_HOME/modforge/stubs/` (user customizations)
//! 3. the defaults compiled into this crate

mod files;

pub use files::*;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a stub
#[derive(Debug, Error)]
pub enum StubError {
    /// An override file exists but could not be read
    #[error("failed to read stub '{path}': {source}")]
    Read {
        /// The override file
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },
}

/// Identifier of a stub resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubId {
    /// `migration.stub`
    Migration,
    /// `model.stub`
    Model,
    /// `controller.stub`
    Controller,
    /// `controller.api.stub`
    ApiController,
    /// `view.stub`
    View,
    /// `vue.component.stub`
    VueComponent,
    /// `routes.web.stub`
    WebRoutes,
    /// `routes.api.stub`
    ApiRoutes,
}

impl StubId {
    /// Every stub, in a stable order
    pub const ALL: [Self; 8] = [
        Self::Migration,
        Self::Model,
        Self::Controller,
        Self::ApiController,
        Self::View,
        Self::VueComponent,
        Self::WebRoutes,
        Self::ApiRoutes,
    ];

    /// File name of the stub in a stub directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Migration => "migration.stub",
            Self::Model => "model.stub",
            Self::Controller => "controller.stub",
            Self::ApiController => "controller.api.stub",
            Self::View => "view.stub",
            Self::VueComponent => "vue.component.stub",
            Self::WebRoutes => "routes.web.stub",
            Self::ApiRoutes => "routes.api.stub",
        }
    }

    /// Built-in content
    #[must_use]
    pub const fn embedded(self) -> &'static str {
        match self {
            Self::Migration => MIGRATION_STUB,
            Self::Model => MODEL_STUB,
            Self::Controller => CONTROLLER_STUB,
            Self::ApiController => API_CONTROLLER_STUB,
            Self::View => VIEW_STUB,
            Self::VueComponent => VUE_COMPONENT_STUB,
            Self::WebRoutes => ROUTES_WEB_STUB,
            Self::ApiRoutes => ROUTES_API_STUB,
        }
    }
}

impl fmt::Display for StubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Ordered set of directories searched for stub overrides
#[derive(Debug, Clone, Default)]
pub struct StubRepository {
    search_dirs: Vec<PathBuf>,
}

impl StubRepository {
    /// Repository for a project: the project stub directory first, then the
    /// user's XDG config directory
    #[must_use]
    pub fn for_project(stub_dir: impl Into<PathBuf>) -> Self {
        let mut search_dirs = vec![stub_dir.into()];
        if let Some(user_dir) = Self::user_dir() {
            search_dirs.push(user_dir);
        }
        Self { search_dirs }
    }

    /// Repository that only searches the given directories
    #[must_use]
    pub fn with_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Repository that only serves the built-in stubs
    #[must_use]
    pub fn embedded_only() -> Self {
        Self::default()
    }

    /// `$XDG_CONFIG_HOME/modforge/stubs/` or the platform equivalent
    #[must_use]
    pub fn user_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("modforge").join("stubs"))
    }

    /// Directories searched, highest priority first
    #[must_use]
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Load a stub, preferring overrides over the built-in content
    ///
    /// # Errors
    ///
    /// Returns an error if an override exists but cannot be read.
    pub fn load(&self, id: StubId) -> Result<Cow<'static, str>, StubError> {
        match self.override_path(id) {
            Some(path) => {
                debug!(stub = %id, path = %path.display(), "using stub override");
                fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|source| StubError::Read { path, source })
            }
            None => Ok(Cow::Borrowed(id.embedded())),
        }
    }

    fn override_path(&self, id: StubId) -> Option<PathBuf> {
        self.search_dirs
            .iter()
            .map(|dir| dir.join(id.file_name()))
            .find(|path| path.is_file())
    }

    /// Write every built-in stub into `dir` so a project can customize them
    ///
    /// Existing files are left untouched. Returns the files written.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or a file cannot be written.
    pub fn publish(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;
        let mut written = Vec::new();
        for id in StubId::ALL {
            let path = dir.join(id.file_name());
            if path.exists() {
                continue;
            }
            fs::write(&path, id.embedded())?;
            written.push(path);
        }
        Ok(written)
    }
}

/// Values substituted into stubs
///
/// Every field is available to every stub; stubs reference only what they
/// need.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Placeholders {
    /// Normalized module name (`Billing\Invoice`)
    pub module: String,
    /// Namespace of the generated unit
    pub namespace: String,
    /// Root namespace of the application
    pub root_namespace: String,
    /// Class (type) defined by the generated unit
    pub class: String,
    /// `PascalCase` of the last module segment
    pub class_name: String,
    /// Controller reference used by route files
    pub controller: String,
    /// Fully qualified model path
    pub full_model_class: String,
    /// Model type name
    pub model_class: String,
    /// camelCase model variable
    pub model_variable: String,
    /// `snake_case` model variable
    pub model_snake: String,
    /// URL segment of the resource
    pub route_prefix: String,
    /// Table name
    pub table_name: String,
    /// Human-readable model title
    pub title: String,
    /// View name for view stubs
    pub view: String,
    /// kebab-case component name
    pub component: String,
}

/// Renders stub sources against [`Placeholders`]
#[derive(Debug, Clone)]
pub struct StubRenderer {
    env: Environment<'static>,
}

impl StubRenderer {
    /// Create a renderer
    ///
    /// Escaping is disabled since the output is source code, and referencing
    /// an unknown placeholder is an error.
    #[must_use]
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Render a stub source
    ///
    /// # Errors
    ///
    /// Returns an error on template syntax errors or unknown placeholders.
    pub fn render(&self, source: &str, placeholders: &Placeholders) -> Result<String, minijinja::Error> {
        self.env.render_str(source, placeholders)
    }
}

impl Default for StubRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn invoice_placeholders() -> Placeholders {
        Placeholders {
            module: "Billing\\Invoice".to_string(),
            namespace: "crate::modules::billing::invoice::controllers".to_string(),
            root_namespace: "crate".to_string(),
            class: "InvoiceController".to_string(),
            class_name: "Invoice".to_string(),
            controller: "InvoiceController".to_string(),
            full_model_class: "crate::modules::billing::invoice::models::Invoice".to_string(),
            model_class: "Invoice".to_string(),
            model_variable: "invoice".to_string(),
            model_snake: "invoice".to_string(),
            route_prefix: "invoices".to_string(),
            table_name: "invoices".to_string(),
            title: "Invoice".to_string(),
            view: "index".to_string(),
            component: "invoice".to_string(),
        }
    }

    #[test]
    fn test_every_embedded_stub_renders() {
        let renderer = StubRenderer::new();
        let placeholders = invoice_placeholders();
        for id in StubId::ALL {
            let rendered = renderer.render(id.embedded(), &placeholders);
            assert!(rendered.is_ok(), "{id}: {rendered:?}");
        }
    }

    #[test]
    fn test_routes_stub_uses_path_parameter() {
        let rendered = StubRenderer::new()
            .render(ROUTES_WEB_STUB, &invoice_placeholders())
            .unwrap();
        assert!(rendered.contains("\"/invoices/{invoice}\""));
        assert!(rendered.contains("use crate::modules::billing::invoice::controllers::InvoiceController;"));
    }

    #[test]
    fn test_raw_blocks_survive() {
        let placeholders = invoice_placeholders();
        let view = StubRenderer::new().render(VIEW_STUB, &placeholders).unwrap();
        assert!(view.contains("{% extends \"layouts/app.html\" %}"));
        assert!(view.contains("<section id=\"invoices-index\">"));

        let vue = StubRenderer::new().render(VUE_COMPONENT_STUB, &placeholders).unwrap();
        assert!(vue.contains("{{ heading }}"));
        assert!(vue.contains("name: 'InvoiceController'"));
    }

    #[test]
    fn test_unknown_placeholder_is_an_error() {
        let result = StubRenderer::new().render("{{ DummyClass }}", &Placeholders::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_trailing_newline_kept() {
        let rendered = StubRenderer::new()
            .render("{{ class }}\n", &invoice_placeholders())
            .unwrap();
        assert_eq!(rendered, "InvoiceController\n");
    }

    #[test]
    fn test_override_takes_precedence() {
        let project = tempdir().unwrap();
        let user = tempdir().unwrap();
        fs::write(project.path().join("model.stub"), "project {{ class }}").unwrap();
        fs::write(user.path().join("model.stub"), "user").unwrap();
        fs::write(user.path().join("view.stub"), "user view").unwrap();

        let repo = StubRepository::with_dirs([project.path(), user.path()]);
        assert_eq!(repo.load(StubId::Model).unwrap(), "project {{ class }}");
        assert_eq!(repo.load(StubId::View).unwrap(), "user view");
        assert_eq!(repo.load(StubId::Controller).unwrap(), CONTROLLER_STUB);
    }

    #[test]
    fn test_embedded_only() {
        let repo = StubRepository::embedded_only();
        assert!(repo.search_dirs().is_empty());
        assert_eq!(repo.load(StubId::Migration).unwrap(), MIGRATION_STUB);
    }

    #[test]
    fn test_publish_skips_existing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("model.stub"), "mine").unwrap();

        let written = StubRepository::publish(dir.path()).unwrap();
        assert_eq!(written.len(), StubId::ALL.len() - 1);
        assert_eq!(fs::read_to_string(dir.path().join("model.stub")).unwrap(), "mine");
    }

    #[test]
    fn test_file_names_are_unique() {
        let mut names: Vec<_> = StubId::ALL.iter().map(|id| id.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StubId::ALL.len());
    }
}
