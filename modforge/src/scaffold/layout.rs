//! Output paths and placeholder values per artifact
//!
//! [`ProjectLayout::plan`] turns a [`Task`] into the concrete artifacts it
//! produces. Planning is pure: nothing here touches the filesystem.

use std::path::PathBuf;

use super::stubs::{Placeholders, StubId};
use super::task::Task;
use crate::config::GeneratorSettings;
use crate::naming::{ModuleName, NameHelpers};
use crate::routes::RouteKind;

/// Directory below the application path that holds every module
pub const MODULES_DIR: &str = "Modules";

/// View files generated by [`Task::Views`]
pub const VIEW_NAMES: [&str; 4] = ["create", "edit", "index", "show"];

/// Kind of a templated artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Model type
    Model,
    /// Resource controller
    Controller,
    /// JSON API controller
    ApiController,
    /// Server-rendered view
    View,
    /// UI component
    VueComponent,
    /// Web routes file
    WebRoutes,
    /// API routes file
    ApiRoutes,
}

impl ArtifactKind {
    /// Label used in status lines
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Model => "Model",
            Self::Controller => "Controller",
            Self::ApiController => "API Controller",
            Self::View => "View",
            Self::VueComponent => "Vue Component",
            Self::WebRoutes => "Routes",
            Self::ApiRoutes => "API Routes",
        }
    }

    /// Stub rendered for this kind
    #[must_use]
    pub const fn stub(self) -> StubId {
        match self {
            Self::Model => StubId::Model,
            Self::Controller => StubId::Controller,
            Self::ApiController => StubId::ApiController,
            Self::View => StubId::View,
            Self::VueComponent => StubId::VueComponent,
            Self::WebRoutes => StubId::WebRoutes,
            Self::ApiRoutes => StubId::ApiRoutes,
        }
    }
}

/// One file to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSpec {
    /// What is being generated
    pub kind: ArtifactKind,
    /// Stub to render
    pub stub: StubId,
    /// Absolute or project-relative output path
    pub path: PathBuf,
    /// Values substituted into the stub
    pub placeholders: Placeholders,
}

/// Request handed to a migration collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationRequest {
    /// Migration name (`create_products_table`)
    pub name: String,
    /// Table to create (`products`)
    pub table: String,
    /// Directory the migration belongs in
    pub directory: PathBuf,
    /// Values available to the migration stub
    pub placeholders: Placeholders,
}

/// Planned work for a single task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskPlan {
    /// Files rendered from stubs, in write order
    Files(Vec<ArtifactSpec>),
    /// Delegated to the migration collaborator
    Migration(MigrationRequest),
}

/// Where generated files go and how code references are spelled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Application source root (`src`)
    pub app_path: PathBuf,
    /// Resources root for views and components (`resources`)
    pub resources_path: PathBuf,
    /// Extension of generated source files (`rs`)
    pub extension: String,
    /// Root of generated code paths (`crate`)
    pub root_namespace: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::from(&GeneratorSettings::default())
    }
}

impl From<&GeneratorSettings> for ProjectLayout {
    fn from(settings: &GeneratorSettings) -> Self {
        Self {
            app_path: settings.app_path.clone(),
            resources_path: settings.resources_path.clone(),
            extension: settings.extension.clone(),
            root_namespace: settings.root_namespace.clone(),
        }
    }
}

impl ProjectLayout {
    /// Layout rooted at `base`, with every other setting at its default
    #[must_use]
    pub fn rooted_at(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        let defaults = GeneratorSettings::default();
        Self {
            app_path: base.join(defaults.app_path),
            resources_path: base.join(defaults.resources_path),
            ..Self::from(&GeneratorSettings::default())
        }
    }

    /// `<app>/Modules/<Dir>`
    #[must_use]
    pub fn module_dir(&self, module: &ModuleName) -> PathBuf {
        self.app_path.join(MODULES_DIR).join(module.relative_dir())
    }

    fn source_file(&self, stem: &str) -> String {
        format!("{stem}.{}", self.extension)
    }

    /// Plan the artifacts of one task
    #[must_use]
    pub fn plan(&self, task: Task, module: &ModuleName) -> TaskPlan {
        match task {
            Task::Migration => TaskPlan::Migration(self.migration(module)),
            Task::VueComponent => TaskPlan::Files(vec![self.vue_component(module)]),
            Task::Views => TaskPlan::Files(
                VIEW_NAMES
                    .into_iter()
                    .map(|view| self.view(module, view))
                    .collect(),
            ),
            Task::Model => TaskPlan::Files(vec![self.model(module)]),
            Task::Controller => TaskPlan::Files(vec![
                self.controller(module),
                self.routes(module, RouteKind::Web),
            ]),
            Task::ApiController => TaskPlan::Files(vec![
                self.api_controller(module),
                self.routes(module, RouteKind::Api),
            ]),
        }
    }

    /// Placeholder values shared by every artifact of a module
    #[must_use]
    pub fn placeholders(&self, module: &ModuleName) -> Placeholders {
        let names = module.names();
        let module_ns = module.namespace(&self.root_namespace);

        Placeholders {
            module: module.to_string(),
            namespace: module_ns.clone(),
            root_namespace: self.root_namespace.clone(),
            class: names.class_name.clone(),
            class_name: names.class_name.clone(),
            controller: format!("{}Controller", names.class_name),
            full_model_class: format!("{module_ns}::models::{}", names.model_name),
            model_class: names.model_name.clone(),
            model_variable: names.variable_name.clone(),
            model_snake: NameHelpers::to_snake_case(&names.model_name),
            route_prefix: names.route_prefix.clone(),
            table_name: names.table_name.clone(),
            title: names.title.clone(),
            view: String::new(),
            component: NameHelpers::to_kebab_case(&names.class_name),
        }
    }

    fn spec(kind: ArtifactKind, path: PathBuf, placeholders: Placeholders) -> ArtifactSpec {
        ArtifactSpec {
            kind,
            stub: kind.stub(),
            path,
            placeholders,
        }
    }

    fn migration(&self, module: &ModuleName) -> MigrationRequest {
        let table = module.names().table_name.clone();
        let name = format!("create_{table}_table");
        let placeholders = Placeholders {
            class: NameHelpers::to_pascal_case(&name),
            ..self.placeholders(module)
        };

        MigrationRequest {
            directory: self.module_dir(module).join("Migrations"),
            name,
            table,
            placeholders,
        }
    }

    fn model(&self, module: &ModuleName) -> ArtifactSpec {
        let base = self.placeholders(module);
        let path = self
            .module_dir(module)
            .join("Models")
            .join(self.source_file(&base.model_class));
        let placeholders = Placeholders {
            namespace: format!("{}::models", base.namespace),
            class: base.model_class.clone(),
            ..base
        };
        Self::spec(ArtifactKind::Model, path, placeholders)
    }

    fn controller(&self, module: &ModuleName) -> ArtifactSpec {
        let base = self.placeholders(module);
        let path = self
            .module_dir(module)
            .join("Controllers")
            .join(self.source_file(&base.controller));
        let placeholders = Placeholders {
            namespace: format!("{}::controllers", base.namespace),
            class: base.controller.clone(),
            ..base
        };
        Self::spec(ArtifactKind::Controller, path, placeholders)
    }

    fn api_controller(&self, module: &ModuleName) -> ArtifactSpec {
        let base = self.placeholders(module);
        let path = self
            .module_dir(module)
            .join("Controllers")
            .join("Api")
            .join(self.source_file(&base.controller));
        let placeholders = Placeholders {
            namespace: format!("{}::controllers::api", base.namespace),
            class: base.controller.clone(),
            ..base
        };
        Self::spec(ArtifactKind::ApiController, path, placeholders)
    }

    fn routes(&self, module: &ModuleName, kind: RouteKind) -> ArtifactSpec {
        let base = self.placeholders(module);
        let path = self
            .module_dir(module)
            .join("Routes")
            .join(kind.file_name(&self.extension));

        let (artifact, controller) = match kind {
            RouteKind::Web => (ArtifactKind::WebRoutes, base.controller.clone()),
            RouteKind::Api => (ArtifactKind::ApiRoutes, format!("api::{}", base.controller)),
        };
        let placeholders = Placeholders {
            namespace: format!("{}::controllers", base.namespace),
            class: controller.clone(),
            controller,
            ..base
        };
        Self::spec(artifact, path, placeholders)
    }

    fn view(&self, module: &ModuleName, view: &str) -> ArtifactSpec {
        let path = self
            .resources_path
            .join("views")
            .join(module.relative_dir())
            .join(format!("{view}.html"));
        let placeholders = Placeholders {
            view: view.to_string(),
            ..self.placeholders(module)
        };
        Self::spec(ArtifactKind::View, path, placeholders)
    }

    fn vue_component(&self, module: &ModuleName) -> ArtifactSpec {
        let mut relative = module.relative_dir();
        relative.set_extension("vue");
        let path = self
            .resources_path
            .join("js")
            .join("components")
            .join(relative);
        Self::spec(ArtifactKind::VueComponent, path, self.placeholders(module))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn layout() -> ProjectLayout {
        ProjectLayout::rooted_at("/app")
    }

    fn files(plan: TaskPlan) -> Vec<ArtifactSpec> {
        match plan {
            TaskPlan::Files(files) => files,
            TaskPlan::Migration(_) => panic!("expected files"),
        }
    }

    #[test]
    fn test_controller_plan() {
        let module = ModuleName::parse("Billing\\Invoice").unwrap();
        let specs = files(layout().plan(Task::Controller, &module));

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].kind, ArtifactKind::Controller);
        assert_eq!(
            specs[0].path,
            Path::new("/app/src/Modules/Billing/Invoice/Controllers/InvoiceController.rs")
        );
        assert_eq!(specs[0].placeholders.class, "InvoiceController");
        assert_eq!(
            specs[0].placeholders.namespace,
            "crate::modules::billing::invoice::controllers"
        );
        assert_eq!(
            specs[0].placeholders.full_model_class,
            "crate::modules::billing::invoice::models::Invoice"
        );
        assert_eq!(specs[0].placeholders.model_variable, "invoice");

        assert_eq!(specs[1].kind, ArtifactKind::WebRoutes);
        assert_eq!(
            specs[1].path,
            Path::new("/app/src/Modules/Billing/Invoice/Routes/web.rs")
        );
        assert_eq!(specs[1].placeholders.controller, "InvoiceController");
    }

    #[test]
    fn test_api_controller_plan() {
        let module = ModuleName::parse("Billing\\Invoice").unwrap();
        let specs = files(layout().plan(Task::ApiController, &module));

        assert_eq!(
            specs[0].path,
            Path::new("/app/src/Modules/Billing/Invoice/Controllers/Api/InvoiceController.rs")
        );
        assert_eq!(
            specs[0].placeholders.namespace,
            "crate::modules::billing::invoice::controllers::api"
        );
        assert_eq!(specs[1].kind, ArtifactKind::ApiRoutes);
        assert_eq!(specs[1].placeholders.controller, "api::InvoiceController");
        assert!(specs[1].path.ends_with("Routes/api.rs"));
    }

    #[test]
    fn test_migration_plan() {
        let module = ModuleName::parse("Catalog\\Product").unwrap();
        let TaskPlan::Migration(request) = layout().plan(Task::Migration, &module) else {
            panic!("expected migration");
        };

        assert_eq!(request.name, "create_products_table");
        assert_eq!(request.table, "products");
        assert_eq!(
            request.directory,
            Path::new("/app/src/Modules/Catalog/Product/Migrations")
        );
        assert_eq!(request.placeholders.class, "CreateProductsTable");
    }

    #[test]
    fn test_views_plan() {
        let module = ModuleName::parse("Billing\\Invoice").unwrap();
        let specs = files(layout().plan(Task::Views, &module));

        let paths: Vec<_> = specs.iter().map(|s| s.path.clone()).collect();
        assert_eq!(
            paths,
            VIEW_NAMES
                .iter()
                .map(|v| Path::new("/app/resources/views/Billing/Invoice").join(format!("{v}.html")))
                .collect::<Vec<_>>()
        );
        assert_eq!(specs[2].placeholders.view, "index");
    }

    #[test]
    fn test_vue_component_plan() {
        let module = ModuleName::parse("Billing\\InvoiceItem").unwrap();
        let specs = files(layout().plan(Task::VueComponent, &module));

        assert_eq!(
            specs[0].path,
            Path::new("/app/resources/js/components/Billing/InvoiceItem.vue")
        );
        assert_eq!(specs[0].placeholders.component, "invoice-item");
        assert_eq!(specs[0].placeholders.class, "InvoiceItem");
    }

    #[test]
    fn test_model_plan_uses_singular() {
        let module = ModuleName::parse("Blog\\Posts").unwrap();
        let specs = files(layout().plan(Task::Model, &module));

        assert_eq!(
            specs[0].path,
            Path::new("/app/src/Modules/Blog/Posts/Models/Post.rs")
        );
        assert_eq!(specs[0].placeholders.class, "Post");
    }

    #[test]
    fn test_custom_extension() {
        let layout = ProjectLayout {
            extension: "php".to_string(),
            ..layout()
        };
        let module = ModuleName::parse("Billing\\Invoice").unwrap();
        let specs = files(layout.plan(Task::Controller, &module));
        assert!(specs[0].path.ends_with("InvoiceController.php"));
        assert!(specs[1].path.ends_with("Routes/web.php"));
    }

    #[test]
    fn test_planning_is_deterministic() {
        let module = ModuleName::parse("Shop\\Storefront").unwrap();
        for task in Task::ALL {
            assert_eq!(layout().plan(task, &module), layout().plan(task, &module));
        }
    }
}
