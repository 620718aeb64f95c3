//! Integration tests for plugin-readme

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MANIFEST: &str = r#"{
    "name": "srag/srtest",
    "description": "Test plugin",
    "version": "1.0.0",
    "keywords": ["ilias", "test"],
    "homepage": "https://github.com/srag/SrTest",
    "extra": {
        "generate_plugin_readme_template": "ILIAS_PLUGIN",
        "ilias_plugin": {"id": "srtest", "slot": "Services/Cron/CronHook"}
    }
}"#;

const TEMPLATE: &str = "# __NAME__\n\n__SHORT_DESCRIPTION__\n\n__KEYWORDS__\n\nInstall into __ILIAS_PLUGIN_BASE_SLOT_PATH__\n";

/// Isolated project root, template directory and config file
struct Harness {
    _home: TempDir,
    root: PathBuf,
    templates: PathBuf,
    config_path: PathBuf,
}

impl Harness {
    fn new() -> io::Result<Self> {
        let home = TempDir::new()?;
        let root = home.path().join("project");
        let templates = home.path().join("templates");
        fs::create_dir_all(&root)?;
        fs::create_dir_all(&templates)?;
        fs::write(root.join("composer.json"), MANIFEST)?;
        fs::write(templates.join("ILIAS_PLUGIN_README.md"), TEMPLATE)?;
        let config_path = home.path().join("config").join("plugin-readme.toml");

        Ok(Self {
            _home: home,
            root,
            templates,
            config_path,
        })
    }

    fn command(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("plugin-readme");
        cmd.env("PLUGIN_README_CONFIG", &self.config_path);
        cmd.env("PLUGIN_README_TEMPLATES_DIR", &self.templates);
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn readme(&self) -> Option<String> {
        fs::read_to_string(self.root.join("README.md")).ok()
    }

    fn root(&self) -> &Path {
        &self.root
    }
}

#[test]
fn test_version() {
    cargo_bin_cmd!("plugin-readme")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("plugin-readme"));
}

#[test]
fn test_help() {
    cargo_bin_cmd!("plugin-readme")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("composer.json"));
}

#[test]
fn test_invalid_command() {
    cargo_bin_cmd!("plugin-readme").arg("invalid").assert().failure();
}

#[test]
fn test_generate_writes_then_reports_no_changes() {
    let env = Harness::new().expect("harness");

    env.command()
        .args(["generate", "--root"])
        .arg(env.root())
        .assert()
        .success()
        .stderr(predicate::str::contains("(Re)generate README.md"))
        .stderr(predicate::str::contains("Store changes in README.md"));

    let first = env.readme().expect("README.md written");
    assert_eq!(
        first,
        "# srag/srtest\n\nTest plugin\n\n- ilias\n- test\n\nInstall into Customizing/global/plugins/Services/Cron/CronHook\n"
    );

    env.command()
        .args(["generate", "--root"])
        .arg(env.root())
        .assert()
        .success()
        .stderr(predicate::str::contains("No changes in README.md"));

    assert_eq!(env.readme(), Some(first));
}

#[test]
fn test_generate_quiet_prints_nothing() {
    let env = Harness::new().expect("harness");

    env.command()
        .args(["--quiet", "generate", "--root"])
        .arg(env.root())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_generate_unknown_template_fails() {
    let env = Harness::new().expect("harness");

    env.command()
        .args(["generate", "--template", "MISSING", "--root"])
        .arg(env.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid template reference 'MISSING'"));

    assert!(env.readme().is_none());
}

#[test]
fn test_generate_without_template_name_fails() {
    let env = Harness::new().expect("harness");
    fs::write(env.root().join("composer.json"), r#"{"name": "srag/srtest"}"#).expect("manifest");

    env.command()
        .args(["generate", "--root"])
        .arg(env.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please configure a template name"));

    assert!(env.readme().is_none());
}

#[test]
fn test_generate_without_manifest_fails() {
    let env = Harness::new().expect("harness");
    fs::remove_file(env.root().join("composer.json")).expect("remove manifest");

    env.command()
        .args(["generate", "--root"])
        .arg(env.root())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Manifest not found"));
}

#[test]
fn test_templates_dir_flag_overrides_env() {
    let env = Harness::new().expect("harness");
    let other = env.root().join("other-templates");
    fs::create_dir_all(&other).expect("dir");
    fs::write(other.join("ILIAS_PLUGIN_README.md"), "other __VERSION__").expect("template");

    env.command()
        .args(["generate", "--root"])
        .arg(env.root())
        .arg("--templates-dir")
        .arg(&other)
        .assert()
        .success();

    assert_eq!(env.readme().as_deref(), Some("other 1.0.0"));
}

#[test]
fn test_dry_run_prints_without_writing() {
    let env = Harness::new().expect("harness");

    env.command()
        .args(["generate", "--dry-run", "--root"])
        .arg(env.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("# srag/srtest"))
        .stderr(predicate::str::contains("would be updated"));

    assert!(env.readme().is_none());
}

#[test]
fn test_dry_run_stdout_is_exactly_the_rendered_readme() {
    let env = Harness::new().expect("harness");
    let expected = "# srag/srtest\n\nTest plugin\n\n- ilias\n- test\n\n\
                    Install into Customizing/global/plugins/Services/Cron/CronHook\n";

    env.command()
        .args(["generate", "--dry-run", "--root"])
        .arg(env.root())
        .assert()
        .success()
        .stdout(predicate::str::diff(expected));

    env.command()
        .args(["generate", "--root"])
        .arg(env.root())
        .assert()
        .success();
    assert_eq!(env.readme().as_deref(), Some(expected));
}

#[test]
fn test_placeholders_json() {
    let env = Harness::new().expect("harness");

    env.command()
        .args(["placeholders", "--json", "--root"])
        .arg(env.root())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"NAME\": \"srag/srtest\""))
        .stdout(predicate::str::contains("\"GITHUB_REPO\": \"https://github.com/srag/SrTest.git\""));
}

#[test]
fn test_config_set_get_and_default_template() {
    let env = Harness::new().expect("harness");
    fs::write(env.root().join("composer.json"), r#"{"name": "srag/srtest", "version": "3"}"#)
        .expect("manifest");

    env.command()
        .args(["config", "set", "default-template", "ILIAS_PLUGIN"])
        .assert()
        .success();

    env.command()
        .args(["config", "get", "default-template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ILIAS_PLUGIN"));

    env.command()
        .args(["generate", "--root"])
        .arg(env.root())
        .assert()
        .success();

    assert!(env
        .readme()
        .is_some_and(|readme| readme.starts_with("# srag/srtest")));
}

#[test]
fn test_config_unknown_key_fails() {
    let env = Harness::new().expect("harness");

    env.command()
        .args(["config", "set", "cache-path", "/tmp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_config_path() {
    let env = Harness::new().expect("harness");

    env.command()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plugin-readme.toml"));
}

#[test]
fn test_log_file_records_progress() {
    let env = Harness::new().expect("harness");
    let log = env.root().join("logs").join("run.log");

    env.command()
        .args(["--quiet", "--log-file"])
        .arg(&log)
        .args(["generate", "--root"])
        .arg(env.root())
        .assert()
        .success();

    let content = fs::read_to_string(&log).expect("log written");
    assert!(content.contains("PROGRESS (Re)generate README.md"));
    assert!(content.contains("Use template"));
}
