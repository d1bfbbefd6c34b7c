use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["includes"][0], "**/*.rc");
    assert_eq!(parsed["ignores"], Value::Array(Vec::new()));
    assert_eq!(parsed["sourceRoot"], "./");
    assert_eq!(parsed["unique"], false);

    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );
    assert!(content.ends_with('\n'));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert!(output.status.success());
    assert_eq!(stdout(&output), "\u{2713} Created .rcstringsrc.json\n");
    assert!(test.root().join(".rcstringsrc.json").exists());

    let content = test.read_file(".rcstringsrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".rcstringsrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "error: .rcstringsrc.json already exists\n");
    assert_eq!(test.read_file(".rcstringsrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("res/app.rc", "STRINGTABLE\nBEGIN\n    IDS_A \"Alpha\"\nEND\n")?;

    let output = test.scan_command().output()?;
    assert!(
        output.status.success(),
        "Scan command should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("Extracted 1 string from 1 file"));

    Ok(())
}
