use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Clone, Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// Where an artifact came from: code revision, command, and the clamped inputs.
#[derive(Clone, Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub engine_version: &'static str,
    pub command: &'static str,
    pub tag: Option<String>,
    pub callsite: Callsite,
    pub params: Value,
    pub outputs: Vec<String>,
}

impl Provenance {
    #[track_caller]
    pub fn new(command: &'static str, tag: Option<String>, params: Value) -> Self {
        let loc = Location::caller();
        Self {
            code_rev: current_git_rev(),
            engine_version: planeviz::VERSION,
            command,
            tag,
            callsite: Callsite {
                file: loc.file(),
                line: loc.line(),
            },
            params,
            outputs: Vec::new(),
        }
    }

    /// Write `<artifact stem>.provenance.json` next to `artifact`.
    pub fn write_sidecar<P: AsRef<Path>>(mut self, artifact: P) -> Result<PathBuf> {
        let artifact = artifact.as_ref();
        let path = sidecar_path(artifact);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating provenance dir {}", parent.display()))?;
            }
        }
        self.outputs.push(artifact.to_string_lossy().into_owned());
        fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` (build-time, then runtime), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
