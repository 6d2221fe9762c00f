//! Integration tests for the clean:debug command.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Run the binary against an empty config so a per-user config file is never read.
fn debug_sweeper() -> Command {
    let config = Path::new(env!("CARGO_TARGET_TMPDIR")).join("debug-sweeper-empty.toml");
    fs::write(&config, "").unwrap();

    let mut cmd = Command::cargo_bin("debug-sweeper").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

const CONTROLLER: &str = r#"<?php

class UserController
{
    public function show($id)
    {
        $user = User::find($id);
        dump($user); // debug
        dd($id);
        return view('user', compact('user'));
    }
}
"#;

const APP_JS: &str = r#"import { mount } from './mount';

export function start(el) {
  console.log("x", y);
  debugger;
  return mount(el);
}
"#;

const CLEAN_TS: &str = "export const answer: number = 42;\n";

/// Create a small Laravel-like project tree.
fn create_test_workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    fs::create_dir_all(root.join("app/Http")).unwrap();
    fs::write(root.join("app/Http/UserController.php"), CONTROLLER).unwrap();

    fs::create_dir_all(root.join("resources/js")).unwrap();
    fs::write(root.join("resources/js/app.js"), APP_JS).unwrap();
    fs::write(root.join("resources/js/answer.ts"), CLEAN_TS).unwrap();

    // Excluded trees keep their statements
    fs::create_dir_all(root.join("vendor/acme")).unwrap();
    fs::write(root.join("vendor/acme/Lib.php"), "<?php\ndump($x);\n").unwrap();
    fs::create_dir_all(root.join("resources/js/node_modules/lib")).unwrap();
    fs::write(
        root.join("resources/js/node_modules/lib/index.js"),
        "console.log(1);\n",
    )
    .unwrap();
    fs::create_dir_all(root.join("storage/framework")).unwrap();
    fs::write(root.join("storage/framework/view.php"), "<?php\ndd(1);\n").unwrap();

    // Unsupported extension
    fs::write(root.join("notes.txt"), "console.log(1);\n").unwrap();

    tmp
}

fn path_arg(path: &Path) -> String {
    format!("--path={}", path.display())
}

fn backups_in(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.contains(".backup."))
        .collect()
}

#[test]
fn test_dry_run_reports_without_writing() {
    let tmp = create_test_workspace();

    debug_sweeper()
        .args(["clean:debug", "--dry", "--backup"])
        .arg(path_arg(tmp.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned 2 statements from:"))
        .stdout(predicate::str::contains("UserController.php"))
        .stdout(predicate::str::contains("app.js"))
        .stdout(predicate::str::contains(
            "Found total 4 debug statements in 2 files!",
        ))
        .stdout(predicate::str::contains("Backup created").not());

    assert_eq!(
        fs::read_to_string(tmp.path().join("app/Http/UserController.php")).unwrap(),
        CONTROLLER
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("resources/js/app.js")).unwrap(),
        APP_JS
    );
    assert!(backups_in(&tmp.path().join("app/Http")).is_empty());
}

#[test]
fn test_clean_removes_statements() {
    let tmp = create_test_workspace();

    debug_sweeper()
        .arg("clean:debug")
        .arg(path_arg(tmp.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cleaned total 4 debug statements in 2 files!",
        ));

    let controller = fs::read_to_string(tmp.path().join("app/Http/UserController.php")).unwrap();
    assert!(!controller.contains("dump("));
    assert!(!controller.contains("dd("));
    assert!(controller.contains("$user = User::find($id);"));
    assert!(controller.contains("return view('user', compact('user'));"));

    let app = fs::read_to_string(tmp.path().join("resources/js/app.js")).unwrap();
    assert!(!app.contains("console.log"));
    assert!(!app.contains("debugger"));
    assert!(app.contains("return mount(el);"));

    // Untouched files
    assert_eq!(
        fs::read_to_string(tmp.path().join("resources/js/answer.ts")).unwrap(),
        CLEAN_TS
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("vendor/acme/Lib.php")).unwrap(),
        "<?php\ndump($x);\n"
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("resources/js/node_modules/lib/index.js")).unwrap(),
        "console.log(1);\n"
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("storage/framework/view.php")).unwrap(),
        "<?php\ndd(1);\n"
    );
    assert_eq!(
        fs::read_to_string(tmp.path().join("notes.txt")).unwrap(),
        "console.log(1);\n"
    );
}

#[test]
fn test_second_run_finds_nothing() {
    let tmp = create_test_workspace();

    debug_sweeper()
        .arg("clean:debug")
        .arg(path_arg(tmp.path()))
        .assert()
        .success();

    debug_sweeper()
        .arg("clean:debug")
        .arg(path_arg(tmp.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("No debug statements found!"));
}

#[test]
fn test_backup_preserves_original() {
    let tmp = create_test_workspace();
    let dir = tmp.path().join("app/Http");

    debug_sweeper()
        .args(["clean:debug", "--backup"])
        .arg(path_arg(tmp.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created:"));

    let backups = backups_in(&dir);
    assert_eq!(backups.len(), 1);
    assert!(backups[0].starts_with("UserController.php.backup."));
    assert_eq!(
        fs::read_to_string(dir.join(&backups[0])).unwrap(),
        CONTROLLER
    );

    // Files without statements get no backup
    assert!(backups_in(&tmp.path().join("resources/js"))
        .iter()
        .all(|name| name.starts_with("app.js.backup.")));
}

#[test]
fn test_single_file_ignores_extension_filter() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("snippet.txt");
    fs::write(&file, "    dump($user); // debug\n").unwrap();

    debug_sweeper()
        .arg("clean:debug")
        .arg(path_arg(&file))
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned 1 statements from:"))
        .stdout(predicate::str::contains(
            "Cleaned total 1 debug statements in 1 files!",
        ));

    assert!(!fs::read_to_string(&file).unwrap().contains("dump"));
}

#[test]
fn test_language_filtering() {
    let tmp = create_test_workspace();

    debug_sweeper()
        .args(["clean:debug", "--languages=js"])
        .arg(path_arg(tmp.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cleaned total 2 debug statements in 1 files!",
        ));

    assert_eq!(
        fs::read_to_string(tmp.path().join("app/Http/UserController.php")).unwrap(),
        CONTROLLER
    );
}

#[test]
fn test_parallel_jobs_same_totals() {
    let tmp = create_test_workspace();

    debug_sweeper()
        .args(["clean:debug", "--dry", "--jobs", "4"])
        .arg(path_arg(tmp.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Found total 4 debug statements in 2 files!",
        ));
}

#[test]
fn test_json_report() {
    let tmp = create_test_workspace();

    let output = debug_sweeper()
        .args(["clean:debug", "--dry", "--json"])
        .arg(path_arg(tmp.path()))
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["dry_run"], true);
    assert_eq!(report["summary"]["total_removed"], 4);
    assert_eq!(report["files"].as_array().unwrap().len(), 2);
    assert_eq!(report["files"][0]["status"], "success");
}

#[test]
fn test_quiet_prints_summary_only() {
    let tmp = create_test_workspace();

    debug_sweeper()
        .args(["-q", "clean:debug", "--dry"])
        .arg(path_arg(tmp.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("statements from:").not())
        .stdout(predicate::str::contains(
            "Found total 4 debug statements in 2 files!",
        ));
}

#[test]
fn test_personal_config_is_not_read() {
    let tmp = create_test_workspace();
    let home = TempDir::new().unwrap();
    let user_config = home.path().join("debug-sweeper");
    fs::create_dir_all(&user_config).unwrap();
    fs::write(user_config.join("config.toml"), "[cleaner]\nextensions = [\"txt\"]\n").unwrap();

    debug_sweeper()
        .env("XDG_CONFIG_HOME", home.path())
        .args(["clean:debug", "--dry"])
        .arg(path_arg(tmp.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Found total 4 debug statements in 2 files!",
        ));
}

#[test]
fn test_nothing_to_clean() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("index.js"), CLEAN_TS).unwrap();

    debug_sweeper()
        .arg("clean:debug")
        .arg(path_arg(tmp.path()))
        .assert()
        .success()
        .stdout(predicate::str::contains("No debug statements found!"));
}

#[cfg(unix)]
#[test]
fn test_unwritable_file_is_reported_and_run_continues() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = create_test_workspace();
    let locked = tmp.path().join("resources/js/app.js");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o444)).unwrap();

    // Root ignores permission bits; nothing to assert in that case
    if fs::OpenOptions::new().write(true).open(&locked).is_ok() {
        return;
    }

    debug_sweeper()
        .arg("clean:debug")
        .arg(path_arg(tmp.path()))
        .assert()
        .code(5)
        .stdout(predicate::str::contains(
            "Cleaned total 2 debug statements in 1 files!",
        ))
        .stderr(predicate::str::contains("Error cleaning"));

    let controller = fs::read_to_string(tmp.path().join("app/Http/UserController.php")).unwrap();
    assert!(!controller.contains("dump("));
}
