// bunup-core: scaffolding logic shared by the `bunup` binary

pub mod collect;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod outro;
pub mod progress;
pub mod runner;
pub mod scaffold;
pub mod substitute;
pub mod template;
pub mod validation;
pub mod variables;

pub use collect::{CollectOutcome, ConfigCollector, InputRequest, SelectOption, UserPrompt};
pub use config::{load_config, CliConfig, TemplateSource};
pub use error::{ResolveError, ScaffoldError};
pub use model::{Complexity, LibraryType, ProjectConfig, StylingOption};
pub use template::{resolve_template, TemplateId};
pub use validation::{validate_package_name, validate_repository};
pub use variables::TemplateVariables;
