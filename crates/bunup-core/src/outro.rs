use crate::model::{LibraryType, ProjectConfig, StylingOption};
use crate::scaffold::project_dir_name;

/// Closing summary shown after a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outro {
    pub headline: String,
    pub project_dir: String,
    pub dev_command: &'static str,
    pub dev_hint: &'static str,
    pub learn_more_text: &'static str,
    pub learn_more_link: &'static str,
}

impl Outro {
    pub fn for_project(config: &ProjectConfig) -> Self {
        let (learn_more_text, learn_more_link) =
            match (config.library_type, config.styling_option, config.is_monorepo) {
                (LibraryType::React, Some(StylingOption::TailwindCss), _) => (
                    "Learn more about bunup's Tailwind CSS support",
                    "https://bunup.dev/docs/builtin-plugins/tailwindcss",
                ),
                (LibraryType::React, Some(StylingOption::PureCss | StylingOption::CssModules), _) => (
                    "Learn more about bunup's CSS handling",
                    "https://bunup.dev/docs/guide/css",
                ),
                (LibraryType::TypeScript, _, true) => (
                    "Learn more about bunup's workspace support",
                    "https://bunup.dev/docs/guide/workspaces",
                ),
                _ => ("Learn more", "https://bunup.dev"),
            };

        let (kind, dev_hint) = match config.library_type {
            LibraryType::React => (
                "component library",
                "(starts Bun + React to preview components real-time)",
            ),
            LibraryType::TypeScript => ("TypeScript library", "(watch mode for development)"),
        };

        Self {
            headline: format!("Ready to launch your {kind}?"),
            project_dir: project_dir_name(config).to_string(),
            dev_command: "bun run dev",
            dev_hint,
            learn_more_text,
            learn_more_link,
        }
    }
}
