use std::cell::RefCell;
use std::time::Duration;

use bunup_core::outro::Outro;
use bunup_core::progress::{format_progress, ProgressEvent};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};

pub fn render_intro() {
    println!();
    println!(
        "{}  {}",
        style(" bunup ").on_cyan().black().bold(),
        style("Scaffold a new project with Bunup").cyan()
    );
    println!();
}

pub fn render_cancelled() {
    println!("{} {}", style("■").red(), style("Operation cancelled").red());
}

pub fn render_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", style("Error:").red().bold());
}

pub fn render_outro(outro: &Outro) {
    println!("{}", format_outro(outro));
}

pub fn format_outro(outro: &Outro) -> String {
    let lines = [
        format!("  {}", style("✨ Project scaffolded successfully! ✨").green().bold()),
        String::new(),
        format!("  {}", style(&outro.headline).bold()),
        String::new(),
        format!("  {} {}", style("cd").cyan(), outro.project_dir),
        format!(
            "  {} {}",
            style(outro.dev_command).cyan(),
            style(outro.dev_hint).dim()
        ),
        String::new(),
        format!("  {}", style(format!("{}:", outro.learn_more_text)).dim()),
        format!("  {}", style(outro.learn_more_link).cyan().underlined()),
        String::new(),
        format!("  {}", style("Happy coding! 🚀").yellow()),
    ];
    lines.join("\n")
}

/// Turns scaffold progress into a spinner, or plain lines when stderr is
/// not a terminal.
pub struct ProgressReporter {
    interactive: bool,
    spinner: RefCell<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::with_interactive(Term::stderr().is_term())
    }

    pub fn with_interactive(interactive: bool) -> Self {
        Self {
            interactive,
            spinner: RefCell::new(None),
        }
    }

    pub fn handle(&self, event: ProgressEvent) {
        if !self.interactive {
            eprintln!("{}", format_progress(&event));
            return;
        }
        let mut spinner = self.spinner.borrow_mut();
        match event {
            ProgressEvent::StepStarted { message, .. } => {
                spinner.get_or_insert_with(new_spinner).set_message(message);
            }
            ProgressEvent::Finished { success, message } => {
                let mark = if success {
                    style("✓").green()
                } else {
                    style("✗").red()
                };
                let bar = spinner.get_or_insert_with(new_spinner);
                bar.finish_with_message(format!("{mark} {message}"));
            }
        }
    }

    #[cfg(test)]
    fn is_finished(&self) -> bool {
        self.spinner
            .borrow()
            .as_ref()
            .is_some_and(ProgressBar::is_finished)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn new_spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
