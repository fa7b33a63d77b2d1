use rand::seq::IndexedRandom;
use tracing::debug;

use crate::model::{Complexity, LibraryType, ProjectConfig, StylingOption};
use crate::validation::{
    split_repository, validate_first_package_name, validate_package_name, validate_repository,
};

pub const RANDOM_PROJECT_NAMES: &[&str] = &[
    "stellar-components",
    "quantum-library",
    "nexus-toolkit",
    "aurora-components",
    "phoenix-lib",
    "zenith-ui",
    "cosmos-components",
    "nimbus-library",
    "prism-toolkit",
    "odyssey-components",
];

pub const RANDOM_DESCRIPTIONS: &[&str] = &[
    "A modern component library built with cutting-edge technologies",
    "Blazing fast components for modern web applications",
    "Next-generation UI components with developer experience in mind",
    "Elegant and performant component library",
    "Type-safe components for scalable applications",
    "Beautiful, accessible, and customizable components",
    "Production-ready component library with best practices",
    "Lightweight and flexible component toolkit",
    "Enterprise-grade component library solution",
    "Developer-friendly component ecosystem",
];

pub const DEFAULT_FIRST_PACKAGE_NAME: &str = "core";

/// Validator attached to a text prompt. `Err` carries the message shown to
/// the user before asking again.
pub type Validator = fn(&str) -> Result<(), String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub hint: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct InputRequest {
    pub message: String,
    /// Used when the answer is left empty.
    pub default: Option<String>,
    pub validator: Option<Validator>,
}

/// Terminal seam. Every method returns `Ok(None)` when the user cancels.
pub trait UserPrompt {
    fn select(&self, message: &str, options: &[SelectOption]) -> anyhow::Result<Option<usize>>;
    fn confirm(&self, message: &str, default: bool) -> anyhow::Result<Option<bool>>;
    /// Must only return values accepted by `request.validator`.
    fn input(&self, request: &InputRequest) -> anyhow::Result<Option<String>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectOutcome {
    Collected(ProjectConfig),
    Cancelled,
}

// Early return on cancellation.
macro_rules! answer {
    ($e:expr) => {
        match $e? {
            Some(v) => v,
            None => {
                debug!("prompt cancelled");
                return Ok(CollectOutcome::Cancelled);
            }
        }
    };
}

pub struct ConfigCollector<P: UserPrompt> {
    prompt: P,
}

impl<P: UserPrompt> ConfigCollector<P> {
    pub fn new(prompt: P) -> Self {
        Self { prompt }
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Asks the fixed question sequence and builds a [`ProjectConfig`].
    ///
    /// # Errors
    /// Terminal I/O failures. Cancellation is not an error.
    pub fn collect(&self) -> anyhow::Result<CollectOutcome> {
        let complexity = answer!(self.select_from(
            "Select template complexity",
            &Complexity::ALL,
            |c| SelectOption {
                label: c.label(),
                hint: Some(c.hint()),
            },
        ));

        let library_type = answer!(self.select_from(
            "What type of library do you want to create?",
            &LibraryType::ALL,
            |l| SelectOption {
                label: l.label(),
                hint: None,
            },
        ));

        let mut styling_option = None;
        let mut is_monorepo = false;
        match library_type {
            LibraryType::React => {
                styling_option = Some(answer!(self.select_from(
                    "How would you like to style your components?",
                    &StylingOption::ALL,
                    |s| SelectOption {
                        label: s.label(),
                        hint: Some(s.hint()),
                    },
                )));
            }
            LibraryType::TypeScript => {
                is_monorepo = answer!(self.prompt.confirm("Do you want to create a monorepo?", false));
            }
        }

        let name_label = if is_monorepo { "Project name" } else { "Package name" };
        let project_name = answer!(self.prompt.input(&InputRequest {
            message: name_label.to_string(),
            default: Some(random_item(RANDOM_PROJECT_NAMES).to_string()),
            validator: Some(validate_package_name),
        }));

        let first_package_name = if is_monorepo {
            Some(answer!(self.prompt.input(&InputRequest {
                message: "First package name".to_string(),
                default: Some(DEFAULT_FIRST_PACKAGE_NAME.to_string()),
                validator: Some(validate_first_package_name),
            })))
        } else {
            None
        };

        let description = answer!(self.prompt.input(&InputRequest {
            message: "Description".to_string(),
            default: Some(random_item(RANDOM_DESCRIPTIONS).to_string()),
            validator: None,
        }));

        let repository = answer!(self.prompt.input(&InputRequest {
            message: "GitHub repository (username/repo)".to_string(),
            default: None,
            validator: Some(validate_repository),
        }));
        let (username, repo_name) = split_repository(&repository)
            .ok_or_else(|| anyhow::anyhow!("invalid repository answer: {repository}"))?;

        let config = ProjectConfig {
            complexity,
            library_type,
            styling_option,
            is_monorepo,
            project_name,
            first_package_name,
            description,
            username: username.to_string(),
            repo_name: repo_name.to_string(),
        };
        debug!(?config, "collected project configuration");
        Ok(CollectOutcome::Collected(config))
    }

    fn select_from<T: Copy>(
        &self,
        message: &str,
        items: &[T],
        option: impl Fn(&T) -> SelectOption,
    ) -> anyhow::Result<Option<T>> {
        let options: Vec<SelectOption> = items.iter().map(option).collect();
        let Some(index) = self.prompt.select(message, &options)? else {
            return Ok(None);
        };
        items
            .get(index)
            .copied()
            .map(Some)
            .ok_or_else(|| anyhow::anyhow!("invalid selection {index} for '{message}'"))
    }
}

fn random_item(items: &[&'static str]) -> &'static str {
    items.choose(&mut rand::rng()).copied().unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Answer {
        Select(usize),
        Confirm(bool),
        Text(String),
        /// Accept the prompt's default value.
        Default,
        Cancel,
    }

    pub fn text(s: &str) -> Answer {
        Answer::Text(s.to_string())
    }

    /// Replays scripted answers. Invalid text answers are rejected the way a
    /// terminal prompt would and the next answer is consumed.
    pub struct ScriptedPrompt {
        answers: RefCell<VecDeque<Answer>>,
        pub asked: RefCell<Vec<String>>,
        pub rejected: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        pub fn new(answers: Vec<Answer>) -> Self {
            Self {
                answers: RefCell::new(answers.into()),
                asked: RefCell::new(Vec::new()),
                rejected: RefCell::new(Vec::new()),
            }
        }

        fn next(&self, message: &str) -> Answer {
            self.asked.borrow_mut().push(message.to_string());
            self.answers
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| panic!("no scripted answer for '{message}'"))
        }

        pub fn remaining(&self) -> usize {
            self.answers.borrow().len()
        }
    }

    impl UserPrompt for ScriptedPrompt {
        fn select(&self, message: &str, options: &[SelectOption]) -> anyhow::Result<Option<usize>> {
            match self.next(message) {
                Answer::Select(i) if i < options.len() => Ok(Some(i)),
                Answer::Default => Ok(Some(0)),
                Answer::Cancel => Ok(None),
                other => panic!("unexpected answer {other:?} for select '{message}'"),
            }
        }

        fn confirm(&self, message: &str, default: bool) -> anyhow::Result<Option<bool>> {
            match self.next(message) {
                Answer::Confirm(b) => Ok(Some(b)),
                Answer::Default => Ok(Some(default)),
                Answer::Cancel => Ok(None),
                other => panic!("unexpected answer {other:?} for confirm '{message}'"),
            }
        }

        fn input(&self, request: &InputRequest) -> anyhow::Result<Option<String>> {
            loop {
                let value = match self.next(&request.message) {
                    Answer::Text(t) if t.is_empty() => request.default.clone().unwrap_or_default(),
                    Answer::Text(t) => t,
                    Answer::Default => request.default.clone().unwrap_or_default(),
                    Answer::Cancel => return Ok(None),
                    other => panic!("unexpected answer {other:?} for input '{}'", request.message),
                };
                match request.validator.map(|v| v(&value)) {
                    Some(Err(msg)) => self.rejected.borrow_mut().push(msg),
                    _ => return Ok(Some(value)),
                }
            }
        }
    }
}
