//! Binary-level tests for classy-start.
//!
//! The generator is replaced by the `true` / `false` programs through
//! `CLASSY_START__GENERATOR__PROGRAM`, so these run without Django.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Sandbox: cwd, HOME and XDG dirs point into `temp` so no real config or
/// `.env` leaks in.
fn classy(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("classy-start").unwrap();
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"))
        .env("XDG_DATA_HOME", temp.path().join(".local/share"))
        .env_remove("CLASSY_START_TEMPLATES_DIR")
        .env_remove("CLASSY_START__GENERATOR__PROGRAM")
        .env_remove("CLASSY_START__TEMPLATES__ROOT")
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

/// Create `templates/{app,project}_template` under `temp`.
fn templates_root(temp: &TempDir) -> std::path::PathBuf {
    let root = temp.path().join("templates");
    fs::create_dir_all(root.join("app_template")).unwrap();
    fs::create_dir_all(root.join("project_template")).unwrap();
    fs::write(root.join("project_template/manage.py-tpl"), "").unwrap();
    root
}

/// What the generator would leave behind from the project template.
fn generated_files(dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("secrets.py"), "SECRET_KEY=x").unwrap();
    fs::write(dir.join("gitignore.py"), "*.pyc").unwrap();
    fs::write(dir.join("requirements.py"), "django").unwrap();
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let temp = TempDir::new().unwrap();
    classy(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("project"))
        .stdout(predicate::str::contains("app"))
        .stdout(predicate::str::contains("templates"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    classy(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_is_usage_error() {
    let temp = TempDir::new().unwrap();
    classy(&temp).assert().failure().code(2);
}

// ── app ───────────────────────────────────────────────────────────────────────

#[cfg(unix)]
#[test]
fn app_runs_generator() {
    let temp = TempDir::new().unwrap();
    let root = templates_root(&temp);

    classy(&temp)
        .env("CLASSY_START__GENERATOR__PROGRAM", "true")
        .args(["app", "blog", "--templates-dir"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("App 'blog' created"));
}

#[cfg(unix)]
#[test]
fn failing_generator_exits_one() {
    let temp = TempDir::new().unwrap();
    let root = templates_root(&temp);

    classy(&temp)
        .env("CLASSY_START__GENERATOR__PROGRAM", "false")
        .args(["app", "blog", "--templates-dir"])
        .arg(&root)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("exit code 1"));
}

#[test]
fn missing_generator_suggests_installing_django() {
    let temp = TempDir::new().unwrap();
    let root = templates_root(&temp);

    classy(&temp)
        .env("CLASSY_START__GENERATOR__PROGRAM", "classy-start-no-such-generator")
        .args(["app", "blog", "--templates-dir"])
        .arg(&root)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("pip install django"));
}

#[test]
fn invalid_app_name_exits_two() {
    let temp = TempDir::new().unwrap();
    let root = templates_root(&temp);

    classy(&temp)
        .args(["app", ".hidden", "--templates-dir"])
        .arg(&root)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains(".hidden"));
}

#[test]
fn missing_templates_exits_three() {
    let temp = TempDir::new().unwrap();

    classy(&temp)
        .args(["app", "blog", "--templates-dir"])
        .arg(temp.path().join("nowhere"))
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("app_template"));
}

#[cfg(unix)]
#[test]
fn missing_project_template_stops_before_generator() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("templates");
    fs::create_dir_all(root.join("app_template")).unwrap();
    generated_files(temp.path());

    // `false` would exit 1 if it were spawned.
    classy(&temp)
        .env("CLASSY_START__GENERATOR__PROGRAM", "false")
        .args(["project", "mysite", "--templates-dir"])
        .arg(&root)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("project_template"));

    assert!(temp.path().join("secrets.py").exists());
}

#[cfg(unix)]
#[test]
fn app_dry_run_prints_command() {
    let temp = TempDir::new().unwrap();

    classy(&temp)
        .args(["app", "blog", "--dry-run", "--templates-dir", "/tpl"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "django-admin startapp blog --template /tpl/app_template",
        ));
}

// ── project ───────────────────────────────────────────────────────────────────

#[cfg(unix)]
#[test]
fn project_renames_generated_files() {
    let temp = TempDir::new().unwrap();
    let root = templates_root(&temp);
    let dest = temp.path().join("backend");
    generated_files(&dest);

    classy(&temp)
        .env("CLASSY_START__GENERATOR__PROGRAM", "true")
        .args(["project", "mysite"])
        .arg(&dest)
        .arg("--templates-dir")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'mysite' created"));

    assert_eq!(fs::read_to_string(dest.join(".env")).unwrap(), "SECRET_KEY=x");
    assert!(dest.join(".gitignore").is_file());
    assert!(dest.join("requirements.txt").is_file());
    assert!(!dest.join("secrets.py").exists());
}

#[cfg(unix)]
#[test]
fn project_defaults_to_current_directory() {
    let temp = TempDir::new().unwrap();
    let root = templates_root(&temp);
    generated_files(temp.path());

    classy(&temp)
        .env("CLASSY_START__GENERATOR__PROGRAM", "true")
        .args(["project", "mysite", "--templates-dir"])
        .arg(&root)
        .assert()
        .success();

    assert!(temp.path().join(".env").is_file());
    assert!(temp.path().join("requirements.txt").is_file());
}

#[cfg(unix)]
#[test]
fn project_skip_rename_leaves_files() {
    let temp = TempDir::new().unwrap();
    let root = templates_root(&temp);
    let dest = temp.path().join("backend");
    generated_files(&dest);

    classy(&temp)
        .env("CLASSY_START__GENERATOR__PROGRAM", "true")
        .args(["project", "mysite"])
        .arg(&dest)
        .args(["--skip-rename", "--templates-dir"])
        .arg(&root)
        .assert()
        .success();

    assert!(dest.join("secrets.py").is_file());
    assert!(!dest.join(".env").exists());
}

#[cfg(unix)]
#[test]
fn project_missing_template_file_exits_one() {
    let temp = TempDir::new().unwrap();
    let root = templates_root(&temp);
    let dest = temp.path().join("backend");
    fs::create_dir_all(&dest).unwrap();
    fs::write(dest.join("secrets.py"), "").unwrap();

    classy(&temp)
        .env("CLASSY_START__GENERATOR__PROGRAM", "true")
        .args(["project", "mysite"])
        .arg(&dest)
        .arg("--templates-dir")
        .arg(&root)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("gitignore.py"));

    // The first rename already happened; nothing is rolled back.
    assert!(dest.join(".env").is_file());
}

#[cfg(unix)]
#[test]
fn failing_generator_skips_renames() {
    let temp = TempDir::new().unwrap();
    let root = templates_root(&temp);
    let dest = temp.path().join("backend");
    generated_files(&dest);

    classy(&temp)
        .env("CLASSY_START__GENERATOR__PROGRAM", "false")
        .args(["project", "mysite"])
        .arg(&dest)
        .arg("--templates-dir")
        .arg(&root)
        .assert()
        .failure()
        .code(1);

    assert!(dest.join("secrets.py").is_file());
    assert!(!dest.join(".env").exists());
}

#[test]
fn project_missing_destination_exits_two() {
    let temp = TempDir::new().unwrap();
    let root = templates_root(&temp);

    classy(&temp)
        .args(["project", "mysite", "does-not-exist", "--templates-dir"])
        .arg(&root)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[cfg(unix)]
#[test]
fn project_dry_run_changes_nothing() {
    let temp = TempDir::new().unwrap();
    generated_files(temp.path());

    classy(&temp)
        .args(["project", "mysite", "--dry-run", "--templates-dir", "/tpl"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "django-admin startproject mysite . --template /tpl/project_template",
        ))
        .stdout(predicate::str::contains("secrets.py"))
        .stdout(predicate::str::contains(".env"));

    assert!(temp.path().join("secrets.py").is_file());
}

#[test]
fn project_dry_run_json() {
    let temp = TempDir::new().unwrap();

    let assert = classy(&temp)
        .args([
            "project",
            "mysite",
            "out",
            "--dry-run",
            "--output-format",
            "json",
            "--templates-dir",
            "/tpl",
        ])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["project"], "mysite");
    assert_eq!(report["dry_run"], true);
    assert_eq!(report["command"]["program"], "django-admin");
    assert_eq!(report["command"]["args"][0], "startproject");
    assert_eq!(report["renames"].as_array().unwrap().len(), 3);
}

// ── templates ─────────────────────────────────────────────────────────────────

#[test]
fn templates_lists_files() {
    let temp = TempDir::new().unwrap();
    let root = templates_root(&temp);

    classy(&temp)
        .args(["templates", "--templates-dir"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("project_template"))
        .stdout(predicate::str::contains("manage.py-tpl"));
}

#[test]
fn templates_reports_missing_directories() {
    let temp = TempDir::new().unwrap();

    classy(&temp)
        .args(["templates", "--output-format", "json", "--templates-dir"])
        .arg(temp.path().join("nowhere"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"exists\": false"));
}

// ── config / init ─────────────────────────────────────────────────────────────

#[test]
fn config_get_reads_environment() {
    let temp = TempDir::new().unwrap();

    classy(&temp)
        .env("CLASSY_START__GENERATOR__PROGRAM", "/venv/bin/django-admin")
        .args(["config", "get", "generator.program"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generator.program = /venv/bin/django-admin"));
}

#[test]
fn config_get_unknown_key_exits_four() {
    let temp = TempDir::new().unwrap();

    classy(&temp)
        .args(["config", "get", "nope"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn explicit_missing_config_file_exits_four() {
    let temp = TempDir::new().unwrap();

    classy(&temp)
        .args(["--config", "missing.toml", "templates"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn init_writes_explicit_config_then_refuses_without_force() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("classy.toml");

    classy(&temp)
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(path.is_file());

    classy(&temp)
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "generator.program"])
        .assert()
        .success()
        .stdout(predicate::str::contains("django-admin"));

    classy(&temp)
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn configured_templates_root_is_used() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("classy.toml");
    fs::write(&path, "[templates]\nroot = \"/srv/classy\"\n").unwrap();

    classy(&temp)
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "templates.root"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/srv/classy"));
}

#[test]
fn completions_for_bash() {
    let temp = TempDir::new().unwrap();
    classy(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("classy-start"));
}
