//! CLI end-to-end tests that invoke the compiled `revmark` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SOURCE: &str = "\
public class Greeter {

    /**
     * Says hello.
     */
    public void greet() {
        System.out.println(\"hello\");
        System.out.println(\"world\");
    }
}
";

/// A `revmark` command running in `dir` with a clean environment.
fn revmark(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_revmark"));
    cmd.current_dir(dir)
        .env_remove("REVMARK_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn setup() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("Greeter.java"), SOURCE).unwrap();
    temp
}

fn read(temp: &TempDir) -> String {
    fs::read_to_string(temp.path().join("Greeter.java")).unwrap()
}

// ============================================================================
// Help and defaults
// ============================================================================

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    revmark(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("remove"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_no_command_prints_hint() {
    let temp = TempDir::new().unwrap();
    revmark(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("revmark --help"));
}

#[test]
fn test_languages_shows_builtins() {
    let temp = TempDir::new().unwrap();
    revmark(temp.path())
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("c-family"))
        .stdout(predicate::str::contains("<!--"));
}

// ============================================================================
// add / remove / clear
// ============================================================================

#[test]
fn test_add_then_remove_roundtrip() {
    let temp = setup();

    revmark(temp.path())
        .args(["add", "Greeter.java", "r1", "7", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tagged lines 7-8"));

    let tagged = read(&temp);
    assert!(tagged.contains("System.out.println(\"hello\");/*-?|r1|*/"));
    assert!(tagged.contains("System.out.println(\"world\");/*-|r1|?*/"));

    revmark(temp.path())
        .args(["remove", "Greeter.java", "r1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 tag(s)"));

    assert_eq!(read(&temp), SOURCE);
}

#[test]
fn test_add_inside_doc_comment_warns() {
    let temp = setup();

    revmark(temp.path())
        .args(["add", "Greeter.java", "r1", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WARN"))
        .stdout(predicate::str::contains("tagged 2-5"));

    let tagged = read(&temp);
    assert!(tagged.contains("\n/*-?|r1|*/\n    /**\n"));
    assert!(tagged.contains("     *//*-|r1|?*/\n"));
}

#[test]
fn test_add_dry_run_does_not_write() {
    let temp = setup();

    revmark(temp.path())
        .args(["add", "Greeter.java", "r1", "7", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("/*-?|r1|?*/"));

    assert_eq!(read(&temp), SOURCE);
}

#[test]
fn test_remove_with_regex() {
    let temp = setup();
    revmark(temp.path())
        .args(["add", "Greeter.java", "bug-1", "7"])
        .assert()
        .success();
    revmark(temp.path())
        .args(["add", "Greeter.java", "bug-2", "8"])
        .assert()
        .success();

    revmark(temp.path())
        .args(["remove", "Greeter.java", "bug-[0-9]+", "--regex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 tag(s)"));

    assert_eq!(read(&temp), SOURCE);
}

#[test]
fn test_remove_unknown_identifier_warns() {
    let temp = setup();
    revmark(temp.path())
        .args(["remove", "Greeter.java", "nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching tags"));

    assert_eq!(read(&temp), SOURCE);
}

#[test]
fn test_clear_removes_all_tags() {
    let temp = setup();
    for (id, line) in [("a", "1"), ("b", "4"), ("c", "9")] {
        revmark(temp.path())
            .args(["add", "Greeter.java", id, line])
            .assert()
            .success();
    }

    revmark(temp.path())
        .args(["clear", "Greeter.java"])
        .assert()
        .success();

    assert_eq!(read(&temp), SOURCE);
}

// ============================================================================
// list
// ============================================================================

#[test]
fn test_list_json() {
    let temp = setup();
    revmark(temp.path())
        .args(["add", "Greeter.java", "r1", "7", "8"])
        .assert()
        .success();

    let output = revmark(temp.path())
        .args(["list", "Greeter.java", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listing["ranges"][0]["identifier"], "r1");
    assert_eq!(listing["ranges"][0]["start_line"], 7);
    assert_eq!(listing["ranges"][0]["end_line"], 8);
    assert_eq!(listing["dangling"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_list_untagged_file() {
    let temp = setup();
    revmark(temp.path())
        .args(["list", "Greeter.java"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_extension_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.txt"), "hello\n").unwrap();

    revmark(temp.path())
        .args(["add", "notes.txt", "r1", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_language_flag_overrides_extension() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.txt"), "hello\n").unwrap();

    revmark(temp.path())
        .args(["add", "notes.txt", "r1", "1", "--language", "markup"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("notes.txt")).unwrap(),
        "hello<!---?|r1|?-->\n"
    );
}

#[test]
fn test_out_of_range_fails_without_writing() {
    let temp = setup();
    revmark(temp.path())
        .args(["add", "Greeter.java", "r1", "5", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("99"));

    assert_eq!(read(&temp), SOURCE);
}

#[test]
fn test_invalid_identifier_fails() {
    let temp = setup();
    revmark(temp.path())
        .args(["add", "Greeter.java", "a|b", "7"])
        .assert()
        .failure();

    assert_eq!(read(&temp), SOURCE);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_init_then_refuse_overwrite() {
    let temp = TempDir::new().unwrap();

    revmark(temp.path()).arg("init").assert().success();
    assert!(temp.path().join("revmark.toml").is_file());

    revmark(temp.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    revmark(temp.path()).args(["init", "--force"]).assert().success();
}

#[test]
fn test_custom_markers_from_config_flag() {
    let temp = setup();
    fs::write(
        temp.path().join("markers.toml"),
        "[markers]\nstart_end = \"!\"\nkey_separator = \":\"\ncleanup = \"^\"\n",
    )
    .unwrap();

    revmark(temp.path())
        .args(["--config", "markers.toml", "add", "Greeter.java", "r1", "7"])
        .assert()
        .success();

    assert!(read(&temp).contains("System.out.println(\"hello\");/*-!:r1:!*/"));
}

#[test]
fn test_config_from_environment() {
    let temp = setup();
    fs::write(
        temp.path().join("env.toml"),
        "[markers]\nstart_end = \"!\"\nkey_separator = \":\"\ncleanup = \"^\"\n",
    )
    .unwrap();

    revmark(temp.path())
        .env("REVMARK_CONFIG", "env.toml")
        .args(["add", "Greeter.java", "r1", "7"])
        .assert()
        .success();

    assert!(read(&temp).contains("/*-!:r1:!*/"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp = setup();
    revmark(temp.path())
        .args(["--config", "missing.toml", "list", "Greeter.java"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.toml"));
}
