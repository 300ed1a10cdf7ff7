use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: the subcommand and its parameters.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }
}

/// Write `<artifact>.provenance.json` with the git commit, library version,
/// callsite, command, params, and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "grazing_version": grazing::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    tracing::debug!(path = %provenance_path.display(), "provenance_written");
    Ok(provenance_path)
}

/// `runs/area.parquet` -> `runs/area.provenance.json`. A path without a file
/// name (`/`, `..`) gets `artifact.provenance.json` in that directory.
fn provenance_path(artifact: &Path) -> PathBuf {
    match artifact.file_stem() {
        Some(stem) => artifact.with_file_name(format!(
            "{}.provenance.json",
            stem.to_string_lossy()
        )),
        None => artifact.join("artifact.provenance.json"),
    }
}

/// Commit hash for provenance records: the build-time `GIT_COMMIT`, then the
/// runtime `GIT_COMMIT`, then `git rev-parse HEAD`, else `unknown`.
pub fn current_git_rev() -> String {
    let found = option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .filter(|rev| !rev.is_empty())
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(|rev| !rev.is_empty()))
        .or_else(rev_from_git);
    match found {
        Some(rev) => rev,
        None => {
            tracing::warn!("no GIT_COMMIT and git rev-parse failed; recording code_rev=unknown");
            "unknown".to_string()
        }
    }
}

fn rev_from_git() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_string())
}
