//! Integration tests for module generation

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use modforge::naming::ModuleName;
use modforge::scaffold::{
    ArtifactStatus, MigrationCreator, MigrationError, MigrationRequest, ModuleGenerator,
    ProjectLayout, Selection, StubRepository, Task,
};
use tempfile::TempDir;

fn generator(root: &Path) -> ModuleGenerator {
    ModuleGenerator::new(ProjectLayout::rooted_at(root), StubRepository::embedded_only())
}

/// Records every request it receives
#[derive(Clone, Default)]
struct RecordingMigrations {
    requests: Arc<Mutex<Vec<MigrationRequest>>>,
}

impl MigrationCreator for RecordingMigrations {
    fn create(&self, request: &MigrationRequest) -> Result<PathBuf, MigrationError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(request.directory.join(format!("{}.sql", request.name)))
    }
}

/// Always fails
struct BrokenMigrations;

impl MigrationCreator for BrokenMigrations {
    fn create(&self, _request: &MigrationRequest) -> Result<PathBuf, MigrationError> {
        Err(MigrationError::Collaborator("database unavailable".to_string()))
    }
}

#[test]
fn test_controller_for_billing_invoice() {
    let temp_dir = TempDir::new().unwrap();
    let module = ModuleName::parse("Billing\\Invoice").unwrap();

    let report = generator(temp_dir.path()).generate(&module, &[Task::Controller]);

    let messages: Vec<_> = report.outcomes().iter().map(|o| o.message()).collect();
    assert_eq!(
        messages,
        vec!["Controller created successfully.", "Routes created successfully."]
    );

    let controller = temp_dir
        .path()
        .join("src/Modules/Billing/Invoice/Controllers/InvoiceController.rs");
    let content = fs::read_to_string(&controller).unwrap();
    assert!(content.contains("InvoiceController"));
    assert!(content.contains("invoice"));
    assert!(content.contains("use crate::modules::billing::invoice::models::Invoice;"));

    let routes = fs::read_to_string(
        temp_dir.path().join("src/Modules/Billing/Invoice/Routes/web.rs"),
    )
    .unwrap();
    assert!(routes.contains("\"/invoices/{invoice}\""));
}

#[test]
fn test_second_run_reports_existing_and_keeps_content() {
    let temp_dir = TempDir::new().unwrap();
    let module = ModuleName::parse("Billing\\Invoice").unwrap();
    let generator = generator(temp_dir.path());
    let tasks = Selection::all().tasks();

    let first = generator.generate(&module, &tasks);
    assert!(!first.has_failures(), "{first:?}");
    assert_eq!(first.created(), first.outcomes().len());

    let model = temp_dir.path().join("src/Modules/Billing/Invoice/Models/Invoice.rs");
    fs::write(&model, "// edited by hand\n").unwrap();

    let second = generator.generate(&module, &tasks);
    assert_eq!(second.outcomes().len(), first.outcomes().len());
    for outcome in second.outcomes() {
        assert_eq!(outcome.status, ArtifactStatus::AlreadyExists, "{}", outcome.label);
        assert!(outcome.message().ends_with("already exists!"));
    }
    assert_eq!(fs::read_to_string(&model).unwrap(), "// edited by hand\n");
}

#[test]
fn test_full_generation_outcome_order() {
    let temp_dir = TempDir::new().unwrap();
    let module = ModuleName::parse("Billing\\Invoice").unwrap();

    let report = generator(temp_dir.path()).generate(&module, &Selection::all().tasks());
    let labels: Vec<_> = report.outcomes().iter().map(|o| o.label).collect();
    assert_eq!(
        labels,
        vec![
            "Migration",
            "Vue Component",
            "View",
            "View",
            "View",
            "View",
            "Model",
            "Controller",
            "Routes",
            "API Controller",
            "API Routes",
        ]
    );

    for view in ["create", "edit", "index", "show"] {
        assert!(temp_dir
            .path()
            .join(format!("resources/views/Billing/Invoice/{view}.html"))
            .is_file());
    }
    assert!(temp_dir
        .path()
        .join("resources/js/components/Billing/Invoice.vue")
        .is_file());
}

#[test]
fn test_migration_collaborator_gets_create_table_request() {
    let temp_dir = TempDir::new().unwrap();
    let module = ModuleName::parse("Catalog\\Product").unwrap();
    let recorder = RecordingMigrations::default();

    let report = generator(temp_dir.path())
        .with_migration_creator(recorder.clone())
        .generate(&module, &[Task::Migration]);

    assert_eq!(report.outcomes()[0].message(), "Migration created successfully.");

    let requests = recorder.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].table, "products");
    assert_eq!(requests[0].name, "create_products_table");
    assert_eq!(
        requests[0].directory,
        temp_dir.path().join("src/Modules/Catalog/Product/Migrations")
    );
}

#[test]
fn test_default_migration_writes_sql() {
    let temp_dir = TempDir::new().unwrap();
    let module = ModuleName::parse("Catalog\\Product").unwrap();

    let report = generator(temp_dir.path()).generate(&module, &[Task::Migration]);
    let path = report.outcomes()[0].path.clone().unwrap();

    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.ends_with("_create_products_table.sql"), "{name}");
    assert_eq!(name.len(), "20240101000000_create_products_table.sql".len());
    assert!(fs::read_to_string(&path).unwrap().contains("CREATE TABLE products"));
}

#[test]
fn test_collaborator_error_is_reported_and_generation_continues() {
    let temp_dir = TempDir::new().unwrap();
    let module = ModuleName::parse("Catalog\\Product").unwrap();

    let report = generator(temp_dir.path())
        .with_migration_creator(BrokenMigrations)
        .generate(&module, &[Task::Migration, Task::Model]);

    assert_eq!(
        report.outcomes()[0].message(),
        "Migration failed: database unavailable"
    );
    assert_eq!(report.outcomes()[1].status, ArtifactStatus::Created);
    assert!(report.has_failures());
}

#[test]
fn test_write_failure_does_not_stop_later_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let module = ModuleName::parse("Billing\\Invoice").unwrap();

    // A regular file where the Controllers directory should be.
    let module_dir = temp_dir.path().join("src/Modules/Billing/Invoice");
    fs::create_dir_all(&module_dir).unwrap();
    fs::write(module_dir.join("Controllers"), "").unwrap();

    let report = generator(temp_dir.path()).generate(&module, &[Task::Model, Task::Controller]);

    let statuses: Vec<_> = report
        .outcomes()
        .iter()
        .map(|o| (o.label, o.is_failure()))
        .collect();
    assert_eq!(
        statuses,
        vec![("Model", false), ("Controller", true), ("Routes", false)]
    );
    assert!(module_dir.join("Routes/web.rs").is_file());
    assert!(report.outcomes()[1].message().starts_with("Controller failed:"));
}

#[test]
fn test_project_stub_override() {
    let temp_dir = TempDir::new().unwrap();
    let stubs = temp_dir.path().join("stubs");
    fs::create_dir_all(&stubs).unwrap();
    fs::write(stubs.join("model.stub"), "// {{ class }} in {{ table_name }}\n").unwrap();

    let generator = ModuleGenerator::new(
        ProjectLayout::rooted_at(temp_dir.path()),
        StubRepository::with_dirs([stubs]),
    );
    let module = ModuleName::parse("Catalog\\Product").unwrap();
    generator.generate(&module, &[Task::Model]);

    let model = fs::read_to_string(
        temp_dir.path().join("src/Modules/Catalog/Product/Models/Product.rs"),
    )
    .unwrap();
    assert_eq!(model, "// Product in products\n");
}
