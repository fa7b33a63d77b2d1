use std::path::{Path, PathBuf};

use tracing::info;

use crate::collect::{CollectOutcome, ConfigCollector, UserPrompt};
use crate::fetch::TemplateFetcher;
use crate::model::ProjectConfig;
use crate::progress::ProgressEvent;
use crate::runner::CommandRunner;
use crate::scaffold::Scaffolder;

/// Result of `bunup create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The user cancelled a prompt; nothing was written.
    Cancelled,
    Created { config: ProjectConfig, path: PathBuf },
}

impl CreateOutcome {
    /// Both outcomes are a clean exit. Failures surface as `Err` instead.
    pub fn exit_code(&self) -> i32 {
        0
    }
}

/// Collects answers, then scaffolds the project under `cwd`.
///
/// # Errors
/// Terminal I/O failures while prompting, or any [`crate::ScaffoldError`].
pub fn execute_create<P, F, R>(
    collector: &ConfigCollector<P>,
    scaffolder: &Scaffolder<F, R>,
    cwd: &Path,
    on_progress: impl Fn(ProgressEvent),
) -> anyhow::Result<CreateOutcome>
where
    P: UserPrompt,
    F: TemplateFetcher,
    R: CommandRunner,
{
    let config = match collector.collect()? {
        CollectOutcome::Collected(config) => config,
        CollectOutcome::Cancelled => {
            info!("create cancelled");
            return Ok(CreateOutcome::Cancelled);
        }
    };
    let path = scaffolder.scaffold(&config, cwd, on_progress)?;
    Ok(CreateOutcome::Created { config, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::testing::{text, Answer, ScriptedPrompt};
    use crate::error::ScaffoldError;
    use crate::fetch::LocalTemplateFetcher;
    use crate::runner::testing::RecordingRunner;
    use crate::scaffold::ScaffoldSettings;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    fn template_root() -> TempDir {
        let root = TempDir::new().unwrap();
        let t = root.path().join("minimal-react-pure-css");
        fs::create_dir_all(t.join("src")).unwrap();
        fs::write(t.join("src/[project_name]-[username].css"), ".[package_name_letters_only] {}").unwrap();
        root
    }

    fn scaffolder(root: &Path) -> Scaffolder<LocalTemplateFetcher, RecordingRunner> {
        Scaffolder::new(
            LocalTemplateFetcher::new(root),
            RecordingRunner::default(),
            ScaffoldSettings::default(),
        )
    }

    fn react_answers() -> Vec<Answer> {
        vec![
            Answer::Select(0),
            Answer::Select(1),
            Answer::Select(0),
            text("foo"),
            text("A foo library"),
            text("bob/foo"),
        ]
    }

    #[test]
    fn test_create_scaffolds_project() {
        let root = template_root();
        let cwd = TempDir::new().unwrap();
        let collector = ConfigCollector::new(ScriptedPrompt::new(react_answers()));
        let scaffolder = scaffolder(root.path());

        let outcome = execute_create(&collector, &scaffolder, cwd.path(), |_| {}).unwrap();

        let CreateOutcome::Created { config, path } = outcome.clone() else {
            panic!("expected a created project");
        };
        assert_eq!(config.project_name, "foo");
        assert_eq!(path, cwd.path().join("foo"));
        assert_eq!(
            fs::read_to_string(path.join("src/foo-bob.css")).unwrap(),
            ".foo {}"
        );
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_cancel_at_any_prompt_writes_nothing() {
        let root = template_root();
        let answers = react_answers();
        for i in 0..answers.len() {
            let cwd = TempDir::new().unwrap();
            let mut scripted = answers[..i].to_vec();
            scripted.push(Answer::Cancel);
            let collector = ConfigCollector::new(ScriptedPrompt::new(scripted));
            let scaffolder = scaffolder(root.path());
            let events = RefCell::new(Vec::new());

            let outcome = execute_create(&collector, &scaffolder, cwd.path(), |e| {
                events.borrow_mut().push(e)
            })
            .unwrap();

            assert_eq!(outcome, CreateOutcome::Cancelled, "cancel at prompt {i}");
            assert_eq!(outcome.exit_code(), 0);
            assert_eq!(fs::read_dir(cwd.path()).unwrap().count(), 0);
            assert!(events.borrow().is_empty());
            assert!(scaffolder.runner().commands().is_empty());
        }
    }

    #[test]
    fn test_scaffold_failure_is_an_error() {
        let root = template_root();
        let cwd = TempDir::new().unwrap();
        let collector = ConfigCollector::new(ScriptedPrompt::new(react_answers()));
        let scaffolder = Scaffolder::new(
            LocalTemplateFetcher::new(root.path()),
            RecordingRunner::failing_on("bun run build"),
            ScaffoldSettings::default(),
        );

        let err = execute_create(&collector, &scaffolder, cwd.path(), |_| {}).unwrap_err();
        let scaffold_err = err.downcast_ref::<ScaffoldError>().unwrap();
        assert!(matches!(scaffold_err, ScaffoldError::Command { command, .. } if command == "bun run build"));
    }
}
