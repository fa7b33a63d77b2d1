use std::path::PathBuf;

use thiserror::Error;

use crate::model::{Complexity, LibraryType};

/// The template table has no entry for a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("a {complexity} React template requires a styling option")]
    MissingStylingOption { complexity: Complexity },
    #[error("no {complexity} {library} template for variant '{variant}'")]
    UnknownCombination {
        complexity: Complexity,
        library: LibraryType,
        variant: String,
    },
}

/// Any failure after the prompts finished. The run aborts on the first one.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("destination {} already exists and is not empty", .0.display())]
    DestinationNotEmpty(PathBuf),

    #[error("template '{0}' was not found in the template repository")]
    TemplateNotFound(String),

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    Command {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("{context} {}: {source}", .path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    pub(crate) fn io(context: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.into(),
            source,
        }
    }
}
