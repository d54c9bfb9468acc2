//! Integration tests for the modforge CLI

use std::fs;
use std::path::Path;

use clap::Parser;
use modforge_cli_lib::{Cli, Outcome};
use tempfile::TempDir;

/// Write a config file that points every output path into `root`
fn write_config(root: &Path) -> String {
    let config = format!(
        "[generator]\napp_path = {:?}\nresources_path = {:?}\nstub_dir = {:?}\n\n\
         [modular]\npath = {:?}\n\n[modular.modules]\nBilling = [\"Invoice\"]\n",
        root.join("src").display().to_string(),
        root.join("resources").display().to_string(),
        root.join("stubs").display().to_string(),
        root.join("src/Modules").display().to_string(),
    );
    let path = root.join("modforge.toml");
    fs::write(&path, config).unwrap();
    path.display().to_string()
}

fn run(args: &[&str]) -> (Outcome, String) {
    let cli = Cli::try_parse_from(std::iter::once("modforge").chain(args.iter().copied())).unwrap();
    let mut out = Vec::new();
    let outcome = cli.run(&mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_make_module_controller() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());

    let (outcome, output) = run(&[
        "--config",
        &config,
        "make:module",
        "Billing\\Invoice",
        "--controller",
    ]);

    assert_eq!(outcome, Outcome::Success);
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Controller created successfully."));
    assert!(lines[1].contains("Routes created successfully."));

    let controller = temp_dir
        .path()
        .join("src/Modules/Billing/Invoice/Controllers/InvoiceController.rs");
    assert!(fs::read_to_string(controller).unwrap().contains("InvoiceController"));
}

#[test]
fn test_second_run_reports_already_exists() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());
    let args = ["--config", &config, "make:module", "Billing/Invoice", "--model", "--view"];

    let (first, _) = run(&args);
    assert_eq!(first, Outcome::Success);

    let (second, output) = run(&args);
    assert_eq!(second, Outcome::Success);
    assert_eq!(output.lines().count(), 5);
    assert!(output.lines().all(|line| line.contains("already exists!")));
}

#[test]
fn test_failed_artifact_sets_failed_outcome() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());
    fs::create_dir_all(temp_dir.path().join("src/Modules/Billing/Invoice")).unwrap();
    fs::write(temp_dir.path().join("src/Modules/Billing/Invoice/Models"), "").unwrap();

    let (outcome, output) = run(&[
        "--config",
        &config,
        "make:module",
        "Billing\\Invoice",
        "--model",
        "--controller",
    ]);

    assert_eq!(outcome, Outcome::Failed);
    assert!(output.contains("Model failed:"));
    assert!(output.contains("Controller created successfully."));
}

#[test]
fn test_invalid_name_fails_before_writing() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());

    let cli = Cli::try_parse_from([
        "modforge",
        "--config",
        &config,
        "make:module",
        "Billing\\\\Invoice",
        "--all",
    ])
    .unwrap();
    let result = cli.run(&mut Vec::new());

    assert!(result.is_err());
    assert!(!temp_dir.path().join("src").exists());
    assert!(!temp_dir.path().join("resources").exists());
}

#[test]
fn test_routes_after_generation() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path());

    run(&["--config", &config, "make:module", "Billing\\Invoice", "--api"]);
    let (outcome, output) = run(&["--config", &config, "routes", "--json"]);

    assert_eq!(outcome, Outcome::Success);
    let groups: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(groups.as_array().unwrap().len(), 1);
    assert_eq!(groups[0]["prefix"], "api/billing");
}
