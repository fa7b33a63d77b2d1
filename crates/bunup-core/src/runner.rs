use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::ScaffoldError;

/// Runs external programs (git, the package manager).
pub trait CommandRunner {
    /// Runs `program` in `cwd` with `env` added to the inherited environment.
    fn run_with_env(
        &self,
        program: &str,
        args: &[&str],
        env: &[(&str, &str)],
        cwd: &Path,
    ) -> Result<(), ScaffoldError>;

    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<(), ScaffoldError> {
        self.run_with_env(program, args, &[], cwd)
    }
}

/// Runs commands quietly; output is only surfaced when the command fails.
///
/// Stdin is closed, so a child that asks a question fails instead of waiting
/// behind the spinner.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run_with_env(
        &self,
        program: &str,
        args: &[&str],
        env: &[(&str, &str)],
        cwd: &Path,
    ) -> Result<(), ScaffoldError> {
        let command = display_command(program, args);
        info!(%command, cwd = %cwd.display(), "running");
        let output = Command::new(program)
            .args(args)
            .envs(env.iter().copied())
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ScaffoldError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let stderr = if stderr.is_empty() {
                String::from_utf8_lossy(&output.stdout).trim().to_string()
            } else {
                stderr
            };
            return Err(ScaffoldError::Command {
                command,
                status: output.status.to_string(),
                stderr,
            });
        }
        debug!(%command, "finished");
        Ok(())
    }
}

pub fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_command() {
        assert_eq!(display_command("bun", &["run", "build"]), "bun run build");
        assert_eq!(display_command("git", &[]), "git");
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = SystemCommandRunner
            .run("bunup-definitely-missing-program", &["install"], tmp.path())
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Spawn { .. }));
        assert!(err
            .to_string()
            .starts_with("failed to run `bunup-definitely-missing-program install`"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_command_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = SystemCommandRunner
            .run("sh", &["-c", "echo boom >&2; exit 3"], tmp.path())
            .unwrap_err();
        match err {
            ScaffoldError::Command { stderr, status, .. } => {
                assert_eq!(stderr, "boom");
                assert!(status.contains('3'));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_success_runs_in_cwd() {
        let tmp = tempfile::tempdir().unwrap();
        SystemCommandRunner
            .run("sh", &["-c", "touch marker"], tmp.path())
            .unwrap();
        assert!(tmp.path().join("marker").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_extra_env_reaches_child() {
        let tmp = tempfile::tempdir().unwrap();
        SystemCommandRunner
            .run_with_env(
                "sh",
                &["-c", "test \"$GIT_TERMINAL_PROMPT\" = 0"],
                &[("GIT_TERMINAL_PROMPT", "0")],
                tmp.path(),
            )
            .unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_child_reading_stdin_gets_eof() {
        let tmp = tempfile::tempdir().unwrap();
        let err = SystemCommandRunner
            .run("sh", &["-c", "if read answer; then exit 0; else exit 4; fi"], tmp.path())
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Command { ref status, .. } if status.contains('4')));
    }
}
