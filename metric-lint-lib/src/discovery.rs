//! Locating metric-definition files and checking directory naming under a root.
//!
//! Hidden directories (those whose name starts with `.`) are never descended into, so VCS
//! metadata and tool caches do not participate in either walk.

use crate::Result;
use crate::validation::{Diagnostic, DiagnosticKind, Severity};
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use walkdir::{DirEntry, WalkDir};

const LOG_TARGET: &str = " discovery";

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

fn walk(root: &Utf8Path) -> impl Iterator<Item = Result<(Utf8PathBuf, bool)>> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .map(move |entry_result| {
            let entry = entry_result.into_app_err_with(|| format!("could not walk directory '{root}'"))?;
            let is_dir = entry.file_type().is_dir();
            let path = Utf8PathBuf::from_path_buf(entry.into_path())
                .map_err(|path| app_err!("path '{}' is not valid UTF-8", path.display()))?;
            Ok((path, is_dir))
        })
}

/// Find every file named `file_name` under `root`, sorted lexicographically by path.
pub fn find_definition_files(root: &Utf8Path, file_name: &str) -> Result<Vec<Utf8PathBuf>> {
    if !root.is_dir() {
        return Err(app_err!("'{root}' is not a directory"));
    }

    let mut files = Vec::new();
    for entry in walk(root) {
        let (path, is_dir) = entry?;
        if !is_dir && path.file_name() == Some(file_name) {
            files.push(path);
        }
    }

    files.sort();
    log::info!(target: LOG_TARGET, "Found {} '{file_name}' files under '{root}'", files.len());
    Ok(files)
}

/// Report every directory under `root` (the root itself excluded) whose name is not lowercase.
pub fn check_lowercase_directories(root: &Utf8Path) -> Result<Vec<Diagnostic>> {
    if !root.is_dir() {
        return Err(app_err!("'{root}' is not a directory"));
    }

    let mut diagnostics = Vec::new();
    for entry in walk(root) {
        let (path, is_dir) = entry?;
        if !is_dir || path == root {
            continue;
        }

        if let Some(name) = path.file_name()
            && name != name.to_lowercase()
        {
            log::debug!(target: LOG_TARGET, "Directory '{path}' is not lowercase");
            diagnostics.push(
                Diagnostic::new(Severity::Error, DiagnosticKind::UppercaseDirectory { name: name.to_string() }).in_file(Some(&path)),
            );
        }
    }

    diagnostics.sort_by(|a, b| a.file.cmp(&b.file));
    Ok(diagnostics)
}
