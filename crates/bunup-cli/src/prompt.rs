use std::io;

use bunup_core::{InputRequest, SelectOption, UserPrompt};
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

/// Terminal prompts backed by dialoguer. Esc and Ctrl+C both cancel.
pub struct DialoguerPrompt {
    theme: ColorfulTheme,
}

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl UserPrompt for DialoguerPrompt {
    fn select(&self, message: &str, options: &[SelectOption]) -> anyhow::Result<Option<usize>> {
        let items: Vec<String> = options.iter().map(format_option).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(&items)
            .default(0)
            .interact_opt();
        Ok(cancellable(selection, restore_cursor)?.flatten())
    }

    fn confirm(&self, message: &str, default: bool) -> anyhow::Result<Option<bool>> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact_opt();
        Ok(cancellable(answer, restore_cursor)?.flatten())
    }

    fn input(&self, request: &InputRequest) -> anyhow::Result<Option<String>> {
        let mut input = Input::<String>::with_theme(&self.theme).with_prompt(&request.message);
        if let Some(default) = &request.default {
            input = input.default(default.clone());
        }
        if let Some(validator) = request.validator {
            // let empty answers reach the validator so its message is shown
            input = input
                .allow_empty(true)
                .validate_with(move |value: &String| validator(value));
        }
        cancellable(input.interact_text(), restore_cursor)
    }
}

/// `Label (hint)` with the hint dimmed.
pub fn format_option(option: &SelectOption) -> String {
    match option.hint {
        Some(hint) => format!("{} {}", option.label, style(format!("({hint})")).dim()),
        None => option.label.to_string(),
    }
}

/// Ctrl+C surfaces from console as an interrupted read. dialoguer returns
/// before showing the cursor again, so `on_interrupt` has to.
fn cancellable<T>(
    result: Result<T, dialoguer::Error>,
    on_interrupt: impl FnOnce(),
) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
            on_interrupt();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn restore_cursor() {
    let _ = Term::stderr().show_cursor();
}
