use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .cssvarsrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".cssvarsrc.json").exists());

    let content = test.read_file(".cssvarsrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["exportName"], "colors");
    assert_eq!(parsed["removeComments"], true);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".cssvarsrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ Error: .cssvarsrc.json already exists
    ");

    assert_eq!(test.read_file(".cssvarsrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_file("vars.css", ":root { --color-primary: #fff; }")?;

    test.command().arg("init").output()?;

    let output = test.convert_command("vars.css", "colors.ts").output()?;
    assert!(
        output.status.success(),
        "Conversion should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        test.read_file("colors.ts")?
            .contains("export type TColors = keyof typeof colors;")
    );

    Ok(())
}
