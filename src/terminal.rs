use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

pub fn input(prompt: &str) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

pub fn input_with_initial(prompt: &str, initial: &str) -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

/// Dismissing the prompt (Esc) counts as "no".
pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact_opt()?
        .unwrap_or(false))
}

/// Returns `None` if the user dismissed the prompt (Esc).
pub fn select(prompt: &str, items: &[impl ToString]) -> Result<Option<usize>> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()?)
}
