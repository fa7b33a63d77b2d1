use std::fs;
use std::path::Path;

use regex::{NoExpand, Regex};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::ScaffoldError;
use crate::variables::TemplateVariables;

/// Paths never rewritten by [`replace_in_files`].
pub const DEFAULT_IGNORE: &[&str] = &["node_modules", "dist", "bun.lock", ".git"];

/// `[key]` patterns compiled once per run.
pub struct Replacements {
    rules: Vec<(Regex, String)>,
}

impl Replacements {
    pub fn new(vars: &TemplateVariables) -> Self {
        let rules = vars
            .iter()
            .map(|(key, value)| {
                let pattern = format!(r"\[{}\]", regex::escape(key));
                // Escaped input always compiles.
                let re = Regex::new(&pattern).expect("escaped placeholder pattern");
                (re, value.to_string())
            })
            .collect();
        Self { rules }
    }

    /// Applies every rule in order. Returns `None` when nothing matched.
    pub fn apply(&self, input: &str) -> Option<String> {
        let mut current = input.to_string();
        let mut changed = false;
        for (re, value) in &self.rules {
            if re.is_match(&current) {
                current = re.replace_all(&current, NoExpand(value)).into_owned();
                changed = true;
            }
        }
        changed.then_some(current)
    }
}

fn is_ignored(root: &Path, path: &Path, ignore: &[String]) -> bool {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .any(|c| ignore.iter().any(|i| c.as_os_str() == i.as_str()))
}

/// Replaces placeholders in the contents of every file under `root`.
///
/// Entries with a path component listed in `ignore` are skipped, as are files
/// that are not UTF-8 text. Returns the number of rewritten files.
///
/// # Errors
/// Directory traversal, read or write failures.
pub fn replace_in_files(
    root: &Path,
    vars: &TemplateVariables,
    ignore: &[String],
) -> Result<usize, ScaffoldError> {
    let replacements = Replacements::new(vars);
    let mut rewritten = 0;

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_ignored(root, e.path(), ignore));
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            ScaffoldError::io("failed to walk", path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let bytes = fs::read(path).map_err(|e| ScaffoldError::io("failed to read", path, e))?;
        let Ok(content) = String::from_utf8(bytes) else {
            debug!(path = %path.display(), "skipping non-text file");
            continue;
        };
        if let Some(updated) = replacements.apply(&content) {
            fs::write(path, updated).map_err(|e| ScaffoldError::io("failed to write", path, e))?;
            debug!(path = %path.display(), "substituted placeholders");
            rewritten += 1;
        }
    }
    Ok(rewritten)
}

/// Renames files and directories whose names contain placeholders.
///
/// Depth first: each entry is renamed before the walk descends into it, so
/// children are always visited through their new parent path. Returns the
/// number of renamed entries.
///
/// # Errors
/// Directory listing or rename failures.
pub fn rename_placeholders(root: &Path, vars: &TemplateVariables) -> Result<usize, ScaffoldError> {
    let replacements = Replacements::new(vars);
    rename_dir(root, &replacements)
}

fn rename_dir(dir: &Path, replacements: &Replacements) -> Result<usize, ScaffoldError> {
    let mut renamed = 0;
    let entries = fs::read_dir(dir)
        .map_err(|e| ScaffoldError::io("failed to list", dir, e))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ScaffoldError::io("failed to list", dir, e))?;

    for entry in entries {
        let old_path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| ScaffoldError::io("failed to stat", &old_path, e))?;

        let new_path = match entry.file_name().to_str().and_then(|n| replacements.apply(n)) {
            Some(new_name) => {
                let new_path = dir.join(&new_name);
                fs::rename(&old_path, &new_path)
                    .map_err(|e| ScaffoldError::io("failed to rename", &old_path, e))?;
                debug!(from = %old_path.display(), to = %new_path.display(), "renamed");
                renamed += 1;
                new_path
            }
            None => old_path,
        };

        if file_type.is_dir() {
            renamed += rename_dir(&new_path, replacements)?;
        }
    }
    Ok(renamed)
}
