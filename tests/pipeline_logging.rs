mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use regex::Regex;
use tempfile::tempdir;

use common::{ZOO_AST, write_ast};

fn stages(stderr: &str) -> Vec<String> {
    let pattern = Regex::new(r#""stage":"([a-z.]+)""#).unwrap_or_else(|err| panic!("{err}"));
    stderr
        .lines()
        .filter_map(|line| pattern.captures(line))
        .map(|captures| captures[1].to_string())
        .collect()
}

#[test]
fn json_logs_trace_each_pass_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = write_ast(dir.path(), "zoo.json", ZOO_AST);

    let output = cargo_bin_cmd!("flatclass")
        .env_remove("RUST_LOG")
        .env_remove("FLATCLASS_LOG_LEVEL")
        .arg("lower")
        .arg(&input)
        .args(["--log-format", "json", "--log-level", "info"])
        .output()?;
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(
        stages(&stderr),
        [
            "cli.run.start",
            "driver.read",
            "lowering.collect",
            "lowering.linearize",
            "lowering.fields",
            "lowering.vtables",
            "lowering.finalize",
            "driver.lower",
            "cli.run.footer",
        ]
    );
    Ok(())
}

#[test]
fn env_level_is_used_without_flags() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = write_ast(dir.path(), "zoo.json", ZOO_AST);

    let output = cargo_bin_cmd!("flatclass")
        .env_remove("RUST_LOG")
        .env("FLATCLASS_LOG_FORMAT", "json")
        .env("FLATCLASS_LOG_LEVEL", "error")
        .arg("lower")
        .arg(&input)
        .output()?;
    assert!(output.status.success());
    assert!(stages(&String::from_utf8(output.stderr)?).is_empty());
    Ok(())
}

#[test]
fn rust_log_overrides_the_configured_level() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = write_ast(dir.path(), "zoo.json", ZOO_AST);

    let output = cargo_bin_cmd!("flatclass")
        .env("RUST_LOG", "debug")
        .env_remove("FLATCLASS_LOG_LEVEL")
        .env("FLATCLASS_LOG_FORMAT", "json")
        .arg("lower")
        .arg(&input)
        .output()?;
    assert!(output.status.success());

    let stages = stages(&String::from_utf8(output.stderr)?);
    for expected in [
        "lowering.collect.class",
        "lowering.fields.class",
        "lowering.vtables.class",
    ] {
        assert!(
            stages.iter().any(|stage| stage == expected),
            "missing {expected} in {stages:?}"
        );
    }
    Ok(())
}
