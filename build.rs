use anyhow::{Result, anyhow};
use chrono::TimeZone;
use std::env;
use std::fs;
use std::process::Command;
use vergen_gitcl::{Emitter, GitclBuilder};

const LIBRARY: &str = "atrac9";

fn main() -> Result<()> {
    // Generate git information
    let gitcl = GitclBuilder::default()
        .describe(true, true, Some("[0-9]*"))
        .build()?;

    let gitcl_res = Emitter::default()
        .idempotent()
        .fail_on_error()
        .add_instructions(&gitcl)
        .and_then(|emitter| emitter.emit());

    if let Err(e) = gitcl_res {
        eprintln!("error occurred while generating instructions: {e:?}");
        Emitter::default().idempotent().fail_on_error().emit()?;
    }

    // Add build timestamp
    let now = match env::var("SOURCE_DATE_EPOCH") {
        Ok(val) => chrono::Utc
            .timestamp_opt(val.parse::<i64>()?, 0)
            .single()
            .ok_or_else(|| anyhow!("SOURCE_DATE_EPOCH out of range: {val}"))?,
        Err(_) => chrono::Utc::now(),
    };

    println!(
        "cargo:rustc-env=BUILD_TIMESTAMP={}",
        now.format("%Y-%m-%d %H:%M:%S UTC")
    );

    let library_version = library_version_from_metadata().unwrap_or_else(|_| {
        library_version_fallback().unwrap_or_else(|_| "unknown".to_string())
    });
    println!("cargo:rustc-env=ATRAC9_VERSION={library_version}");

    println!("cargo:rerun-if-changed=atrac9/Cargo.toml");

    Ok(())
}

/// Looks the library up in `cargo metadata`, as a workspace member or a
/// resolved registry dependency.
fn library_version_from_metadata() -> Result<String> {
    let output = Command::new("cargo")
        .args(["metadata", "--format-version", "1"])
        .output()?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed");
    }

    let metadata: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    let member = metadata["packages"]
        .as_array()
        .into_iter()
        .flatten()
        .filter(|package| package["name"].as_str() == Some(LIBRARY))
        .find_map(|package| package["version"].as_str());

    if let Some(version) = member {
        return Ok(version.to_string());
    }

    // "atrac9 0.3.0 (registry+...)"
    let resolved = metadata["resolve"]["nodes"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|node| node["id"].as_str())
        .find_map(|id| {
            let mut parts = id.split(' ');
            (parts.next() == Some(LIBRARY))
                .then(|| parts.next())
                .flatten()
        });

    resolved
        .map(str::to_string)
        .ok_or_else(|| anyhow!("{LIBRARY} package not found in metadata"))
}

fn library_version_fallback() -> Result<String> {
    let toml_content = fs::read_to_string("atrac9/Cargo.toml")?;

    toml_content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("version"))
        .find_map(|line| line.split_once('='))
        .map(|(_, value)| value.trim().trim_matches('"').trim_matches('\'').to_string())
        .ok_or_else(|| anyhow!("Could not find version in atrac9/Cargo.toml"))
}
