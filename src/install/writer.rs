//! Mirrored, all-or-nothing write of an agent document.
//!
//! Content is staged next to every target first and only then renamed into
//! place. An existing target is moved aside to `<name>.bak` just before its
//! replacement is renamed in. If anything fails, staged files and targets
//! already committed in this call are removed and the moved-aside copies are
//! put back, so the primary and compatibility copies never disagree.

use crate::project::Project;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("failed to write {path}: {source}")]
pub struct WriteFailure {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Write an agent document to both install locations
pub fn write_agent(project: &Project, id: &str, content: &str) -> Result<(), WriteFailure> {
    write_mirrored(&project.install_targets(id), content.as_bytes())
}

/// Write identical bytes to every target, or to none of them.
pub fn write_mirrored(targets: &[PathBuf], content: &[u8]) -> Result<(), WriteFailure> {
    let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(targets.len());

    for target in targets {
        let tmp = staging_path(target);
        if let Err(source) = stage(&tmp, target, content) {
            remove_quietly(&tmp);
            discard(staged.iter().map(|(tmp, _)| tmp.as_path()));
            return Err(WriteFailure {
                path: target.clone(),
                source,
            });
        }
        staged.push((tmp, target.as_path()));
    }

    let mut committed: Vec<&Path> = Vec::with_capacity(staged.len());
    let mut backups: Vec<(PathBuf, &Path)> = Vec::new();
    for (pos, (tmp, target)) in staged.iter().enumerate() {
        let result = move_aside(target).and_then(|backup| {
            if let Some(backup) = backup {
                backups.push((backup, *target));
            }
            fs::rename(tmp, target)
        });
        if let Err(source) = result {
            discard(staged[pos..].iter().map(|(tmp, _)| tmp.as_path()));
            discard(committed.iter().copied());
            restore(&backups);
            return Err(WriteFailure {
                path: target.to_path_buf(),
                source,
            });
        }
        tracing::debug!(path = %target.display(), "wrote agent document");
        committed.push(*target);
    }

    discard(backups.iter().map(|(backup, _)| backup.as_path()));
    Ok(())
}

/// Rename an existing regular file out of the way, returning where it went
fn move_aside(target: &Path) -> io::Result<Option<PathBuf>> {
    if !target.is_file() {
        return Ok(None);
    }
    let backup = sibling_path(target, ".bak");
    fs::rename(target, &backup)?;
    Ok(Some(backup))
}

fn restore(backups: &[(PathBuf, &Path)]) {
    for (backup, target) in backups {
        if let Err(e) = fs::rename(backup, target) {
            tracing::warn!(path = %target.display(), error = %e, "could not restore previous copy");
        }
    }
}

fn stage(tmp: &Path, target: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(tmp, content)
}

fn staging_path(target: &Path) -> PathBuf {
    sibling_path(target, ".tmp")
}

fn sibling_path(target: &Path, suffix: &str) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    target.with_file_name(name)
}

fn discard<'p>(paths: impl Iterator<Item = &'p Path>) {
    for path in paths {
        remove_quietly(path);
    }
}

/// Best-effort removal; failures are logged and swallowed
fn remove_quietly(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "removed partial write"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "cleanup failed"),
    }
}
