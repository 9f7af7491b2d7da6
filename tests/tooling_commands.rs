#![cfg(unix)]

use std::fs;

use anyhow::Result;
use predicates::prelude::predicate;

mod support;
use support::stubs::{Stubs, canonical};

#[test]
fn update_readme_runs_inside_the_package() -> Result<()> {
    let root = tempfile::tempdir()?;
    let package = root.path().join("rend3");
    fs::create_dir_all(&package)?;

    let stubs = Stubs::new()?;
    stubs.ok("cargo")?;

    stubs.buildtask(root.path()).arg("update-readme").assert().success();

    let cwd = canonical(&package);
    assert_eq!(
        stubs.calls()?,
        [
            format!("cargo install cargo-readme | cwd={cwd} | RUSTFLAGS="),
            format!("cargo readme -t ../README.tpl -o ../README.md | cwd={cwd} | RUSTFLAGS="),
        ]
    );
    Ok(())
}

#[test]
fn update_readme_stops_when_install_fails() -> Result<()> {
    let root = tempfile::tempdir()?;
    fs::create_dir_all(root.path().join("rend3"))?;

    let stubs = Stubs::new()?;
    stubs.tool("cargo", "[ \"$1\" = install ] && exit 2\nexit 0")?;

    stubs
        .buildtask(root.path())
        .arg("update-readme")
        .assert()
        .code(2);
    assert_eq!(stubs.calls()?.len(), 1);
    Ok(())
}

#[test]
fn download_assets_fetches_and_extracts_in_order() -> Result<()> {
    let root = tempfile::tempdir()?;
    let stubs = Stubs::new()?;
    stubs.ok("curl")?.ok("tar")?.ok("unzip")?;

    stubs.buildtask(root.path()).arg("download-assets").assert().success();

    let tools: Vec<_> = stubs
        .calls()?
        .iter()
        .map(|c| c.split_whitespace().next().unwrap_or_default().to_string())
        .collect();
    assert_eq!(tools, ["curl", "tar", "curl", "unzip"]);
    Ok(())
}

#[test]
fn download_failure_skips_extraction() -> Result<()> {
    let root = tempfile::tempdir()?;
    let stubs = Stubs::new()?;
    stubs.tool("curl", "exit 22")?.ok("tar")?.ok("unzip")?;

    stubs
        .buildtask(root.path())
        .arg("download-assets")
        .assert()
        .code(22)
        .stderr(predicate::str::contains("curl exited with status 22"));
    assert_eq!(stubs.calls()?.len(), 1);
    Ok(())
}

#[test]
fn serve_passes_allow_list_and_leaves_output_alone() -> Result<()> {
    let root = tempfile::tempdir()?;
    let generated = root.path().join("target/generated");
    fs::create_dir_all(&generated)?;
    fs::write(generated.join("index.html"), "page")?;

    let stubs = Stubs::new()?;
    stubs.ok("simple-http-server")?;

    stubs
        .buildtask(root.path())
        .args(["serve", "ignored", "--extra"])
        .assert()
        .success();

    let calls = stubs.calls()?;
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("target/generated -c wasm,html,js -i |"));
    assert!(!calls[0].contains("ignored"));
    assert_eq!(fs::read_to_string(generated.join("index.html"))?, "page");
    Ok(())
}

#[test]
fn missing_tool_exits_127() -> Result<()> {
    let root = tempfile::tempdir()?;
    let stubs = Stubs::new()?;
    let empty_path = tempfile::tempdir()?;

    stubs
        .buildtask(root.path())
        .env("PATH", empty_path.path())
        .arg("serve")
        .assert()
        .code(127)
        .stderr(predicate::str::contains("simple-http-server not found"));
    Ok(())
}

#[test]
fn missing_package_dir_fails_before_running_anything() -> Result<()> {
    let root = tempfile::tempdir()?;
    let stubs = Stubs::new()?;
    stubs.ok("cargo")?;

    stubs
        .buildtask(root.path())
        .arg("update-readme")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
    assert!(stubs.calls()?.is_empty());
    Ok(())
}
