use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::TemplateSource;
use crate::error::ScaffoldError;
use crate::runner::{CommandRunner, SystemCommandRunner};
use crate::template::TemplateId;

/// Materializes a template directory at `dest`.
pub trait TemplateFetcher {
    fn fetch(&self, template: TemplateId, dest: &Path) -> Result<(), ScaffoldError>;
}

/// Keeps git from asking for credentials when the repository is private or
/// missing; the clone fails instead.
const GIT_ENV: &[(&str, &str)] = &[("GIT_TERMINAL_PROMPT", "0"), ("GCM_INTERACTIVE", "never")];

/// Fetches `<template>/` from a GitHub repository with a shallow sparse clone.
pub struct GitTemplateFetcher<R: CommandRunner = SystemCommandRunner> {
    repository: String,
    reference: String,
    runner: R,
}

impl GitTemplateFetcher {
    pub fn new(repository: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::with_runner(repository, reference, SystemCommandRunner)
    }
}

impl<R: CommandRunner> GitTemplateFetcher<R> {
    pub fn with_runner(
        repository: impl Into<String>,
        reference: impl Into<String>,
        runner: R,
    ) -> Self {
        Self {
            repository: repository.into(),
            reference: reference.into(),
            runner,
        }
    }

    pub fn url(&self) -> String {
        format!("https://github.com/{}.git", self.repository)
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }
}

impl<R: CommandRunner> TemplateFetcher for GitTemplateFetcher<R> {
    fn fetch(&self, template: TemplateId, dest: &Path) -> Result<(), ScaffoldError> {
        let checkout = tempfile::Builder::new()
            .prefix("bunup-template-")
            .tempdir()
            .map_err(|e| ScaffoldError::io("failed to create", std::env::temp_dir(), e))?;
        let url = self.url();
        info!(%url, reference = %self.reference, %template, "fetching template");

        self.runner.run_with_env(
            "git",
            &[
                "clone",
                "--depth",
                "1",
                "--filter=blob:none",
                "--sparse",
                "--branch",
                self.reference.as_str(),
                url.as_str(),
                ".",
            ],
            GIT_ENV,
            checkout.path(),
        )?;
        self.runner.run_with_env(
            "git",
            &["sparse-checkout", "set", template.as_str()],
            GIT_ENV,
            checkout.path(),
        )?;

        let source = checkout.path().join(template.as_str());
        if !source.is_dir() {
            return Err(ScaffoldError::TemplateNotFound(template.to_string()));
        }
        copy_template(&source, dest)
    }
}

/// Copies `<root>/<template>/` from a local directory.
pub struct LocalTemplateFetcher {
    root: PathBuf,
}

impl LocalTemplateFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateFetcher for LocalTemplateFetcher {
    fn fetch(&self, template: TemplateId, dest: &Path) -> Result<(), ScaffoldError> {
        let source = self.root.join(template.as_str());
        if !source.is_dir() {
            return Err(ScaffoldError::TemplateNotFound(template.to_string()));
        }
        info!(source = %source.display(), %template, "copying local template");
        copy_template(&source, dest)
    }
}

/// Boxed fetcher for a configured source.
pub fn fetcher_for(source: &TemplateSource) -> Box<dyn TemplateFetcher> {
    match source {
        TemplateSource::Github {
            repository,
            reference,
        } => Box::new(GitTemplateFetcher::new(repository.as_str(), reference.as_str())),
        TemplateSource::Local { path } => Box::new(LocalTemplateFetcher::new(path.as_path())),
    }
}

impl<T: TemplateFetcher + ?Sized> TemplateFetcher for Box<T> {
    fn fetch(&self, template: TemplateId, dest: &Path) -> Result<(), ScaffoldError> {
        (**self).fetch(template, dest)
    }
}

/// Recursively copies `source` into `dest`, leaving out `.git`.
///
/// Symlinks are recreated as links on unix and copied as files elsewhere.
pub fn copy_template(source: &Path, dest: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(dest).map_err(|e| ScaffoldError::io("failed to create", dest, e))?;
    let walker = WalkDir::new(source)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git");
    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            ScaffoldError::io("failed to walk", path, e.into())
        })?;
        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let target = dest.join(relative);
        if entry.path_is_symlink() {
            copy_symlink(entry.path(), &target)?;
            debug!(path = %relative.display(), "linked");
        } else if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| ScaffoldError::io("failed to create", &target, e))?;
        } else {
            fs::copy(entry.path(), &target)
                .map_err(|e| ScaffoldError::io("failed to copy", entry.path(), e))?;
            debug!(path = %relative.display(), "copied");
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(source: &Path, target: &Path) -> Result<(), ScaffoldError> {
    let link =
        fs::read_link(source).map_err(|e| ScaffoldError::io("failed to read link", source, e))?;
    std::os::unix::fs::symlink(&link, target)
        .map_err(|e| ScaffoldError::io("failed to link", target, e))
}

#[cfg(not(unix))]
fn copy_symlink(source: &Path, target: &Path) -> Result<(), ScaffoldError> {
    if source.is_dir() {
        return copy_template(source, target);
    }
    fs::copy(source, target)
        .map(|_| ())
        .map_err(|e| ScaffoldError::io("failed to copy", source, e))
}
