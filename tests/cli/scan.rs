use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{APP_RC, CliTest, stderr, stdout};

const STRINGS_RC: &str = "STRINGTABLE\nBEGIN\n    IDS_A \"Alpha\"\n    IDS_B \"Beta\"\nEND\n";

#[test]
fn test_scan_reports_each_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("res/strings.rc", STRINGS_RC)?;
    test.write_file("res/resource.h", "#define IDS_A 100\n")?;

    let output = test.scan_command().output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "--> res/strings.rc\n\
         3 | IDS_A  \"Alpha\"\n\
         4 | IDS_B  \"Beta\"\n\
         \n\
         \u{2713} Extracted 2 strings from 1 file\n"
    );

    Ok(())
}

#[test]
fn test_scan_counts_files_without_strings() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.rc", APP_RC)?;
    test.write_file("empty.rc", "// nothing here\n")?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("--> a.rc\n"));
    assert!(!out.contains("empty.rc"));
    assert!(out.ends_with("\u{2713} Extracted 9 strings from 2 files\n"));

    Ok(())
}

#[test]
fn test_scan_respects_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("res/app.rc", STRINGS_RC)?;
    test.write_file("build/app.rc", STRINGS_RC)?;
    test.write_file(
        ".rcstringsrc.json",
        r#"{ "ignores": ["build"], "unique": true }"#,
    )?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("--> res/app.rc"));
    assert!(!out.contains("build/app.rc"));

    Ok(())
}

#[test]
fn test_scan_source_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("res/app.rc", STRINGS_RC)?;
    test.write_file("other/app.rc", STRINGS_RC)?;
    test.write_file(".rcstringsrc.json", r#"{ "sourceRoot": "./res" }"#)?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.starts_with("--> app.rc\n"), "stdout: {}", out);
    assert!(out.ends_with("Extracted 2 strings from 1 file\n"));

    Ok(())
}

#[test]
fn test_scan_with_path_argument() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("project/app.rc", STRINGS_RC)?;

    let output = test
        .scan_command()
        .args(["--path", "project", "--format", "json"])
        .output()?;

    assert!(output.status.success());
    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(parsed["totalStrings"], 2);
    assert_eq!(parsed["skippedCount"], 0);
    assert_eq!(parsed["files"][0]["path"], "app.rc");
    assert_eq!(parsed["files"][0]["entries"][1]["text"], "Beta");

    Ok(())
}

#[test]
fn test_scan_unique_across_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.rc", STRINGS_RC)?;
    test.write_file("b.rc", STRINGS_RC)?;

    let output = test
        .scan_command()
        .args(["--unique", "--format", "json"])
        .output()?;

    let parsed: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(parsed["totalStrings"], 2);
    assert_eq!(parsed["files"][1]["entries"], Value::Array(Vec::new()));

    Ok(())
}

#[test]
fn test_scan_no_resource_scripts() -> Result<()> {
    let test = CliTest::with_file("main.cpp", "int main() {}\n")?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), "warning: no resource scripts found\n");

    Ok(())
}

#[test]
fn test_scan_verbose_notes_default_config() -> Result<()> {
    let test = CliTest::with_file("app.rc", STRINGS_RC)?;

    let output = test.scan_command().arg("-v").output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("Note: No .rcstringsrc.json found"));

    Ok(())
}
