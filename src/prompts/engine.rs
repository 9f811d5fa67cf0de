//! Hands menus to the terminal front end and maps the answer back.

use std::{collections::BTreeSet, fmt::Display};

use anyhow::Context;
use log::{debug, info};

use super::{
    CheckMenu, CheckMenuPrompt, Menu, PromptCancelled, PromptResult, RadioMenuPrompt,
    SelectRequest,
};
use crate::config::PromptConfig;

/// A front end able to show single- and multiple-choice menus.
///
/// Implementations return the chosen option indices, `Ok(None)` when the user
/// pressed Escape, or an error if the terminal failed.
pub trait MenuEngine {
    fn select(&mut self, request: &SelectRequest<'_>) -> PromptResult<usize>;

    /// Shows a check menu with `request.checked` pre-ticked.
    fn multi_select(&mut self, request: &SelectRequest<'_>) -> PromptResult<Vec<usize>>;
}

impl<E: MenuEngine + ?Sized> MenuEngine for &mut E {
    fn select(&mut self, request: &SelectRequest<'_>) -> PromptResult<usize> {
        (**self).select(request)
    }

    fn multi_select(&mut self, request: &SelectRequest<'_>) -> PromptResult<Vec<usize>> {
        (**self).multi_select(request)
    }
}

/// Shows `prompt` through `engine` and returns the chosen value.
///
/// # Returns
///
/// - `Ok(Some(value))` - User selected a value
/// - `Ok(None)` - User skipped a skippable prompt
/// - `Err(_)` - Engine failure, an out-of-range answer, or [`PromptCancelled`]
///   when a required prompt was skipped
pub fn radio_prompt<E, P>(engine: &mut E, prompt: &P) -> PromptResult<P::Item>
where
    E: MenuEngine + ?Sized,
    P: RadioMenuPrompt,
{
    run_menu(engine, &Menu::from_prompt(prompt))
}

/// Shows `prompt` as a check menu and returns the ticked values.
///
/// Ticking nothing and pressing Escape both yield `Ok(None)`.
pub fn check_prompt<E, P>(engine: &mut E, prompt: &P) -> PromptResult<BTreeSet<P::Item>>
where
    E: MenuEngine + ?Sized,
    P: CheckMenuPrompt,
{
    run_check_menu(engine, &CheckMenu::from_prompt(prompt))
}

fn run_menu<E, T>(engine: &mut E, menu: &Menu<T>) -> PromptResult<T>
where
    E: MenuEngine + ?Sized,
    T: Copy + PartialEq + Display + 'static,
{
    let name = menu.name();

    let answer = engine
        .select(&menu.request())
        .with_context(|| format!("Failed to read {name}"))?;

    let Some(index) = answer else {
        if menu.skippable() {
            info!("{name}: skipped");
            return Ok(None);
        }
        return Err(PromptCancelled { name }.into());
    };

    let value = menu.value_at(index).with_context(|| {
        format!(
            "{name}: selection {index} is out of range ({} options)",
            menu.items().len()
        )
    })?;

    info!("{name}: {value}");
    Ok(Some(value))
}

fn run_check_menu<E, T>(engine: &mut E, menu: &CheckMenu<T>) -> PromptResult<BTreeSet<T>>
where
    E: MenuEngine + ?Sized,
    T: Copy + Ord + Display + 'static,
{
    let name = menu.name();

    let answer = engine
        .multi_select(&menu.request())
        .with_context(|| format!("Failed to read {name}"))?;

    let Some(indices) = answer else {
        info!("{name}: skipped");
        return Ok(None);
    };

    let values = menu.values_at(&indices).with_context(|| {
        format!(
            "{name}: selection is out of range ({} options)",
            menu.items().len()
        )
    })?;

    if values.is_empty() {
        info!("{name}: nothing selected");
        return Ok(None);
    }

    info!("{name}: {} selected", values.len());
    Ok(Some(values))
}

/// Runs prompts through an engine, applying the user's prompt settings.
pub struct Prompter<E> {
    engine: E,
    config: PromptConfig,
}

impl<E: MenuEngine> Prompter<E> {
    #[must_use]
    pub fn new(engine: E, config: PromptConfig) -> Self {
        Self { engine, config }
    }

    pub fn ask<P: RadioMenuPrompt>(&mut self, prompt: &P) -> PromptResult<P::Item> {
        let mut menu = Menu::from_prompt(prompt);

        if !self.config.prefill_from_previous && menu.default().is_some() {
            debug!("{}: previous value not offered", menu.name());
            menu = menu.without_default();
        }
        if !self.config.show_help {
            menu = menu.without_help();
        }

        run_menu(&mut self.engine, &menu)
    }

    pub fn ask_check<P: CheckMenuPrompt>(&mut self, prompt: &P) -> PromptResult<BTreeSet<P::Item>> {
        let mut menu = CheckMenu::from_prompt(prompt);

        if !self.config.prefill_from_previous && !menu.checked().is_empty() {
            debug!("{}: previous values not offered", menu.name());
            menu = menu.without_defaults();
        }
        if !self.config.show_help {
            menu = menu.without_help();
        }

        run_check_menu(&mut self.engine, &menu)
    }

    #[must_use]
    pub fn config(&self) -> &PromptConfig {
        &self.config
    }

    #[must_use]
    pub fn into_engine(self) -> E {
        self.engine
    }
}
