//! Radio menu prompts for installer manifest fields.
//!
//! A radio menu prompt offers a fixed list of values, at most one of which is
//! pre-selected. A check menu prompt lets the user tick any number of them.
//! Each concrete prompt implements [`RadioMenuPrompt`] or [`CheckMenuPrompt`];
//! drawing the menu and reading the user's answer belongs to a [`MenuEngine`].

use std::{collections::BTreeSet, fmt::Display};

use anyhow::Result;

pub mod engine;
mod error;
pub mod install_modes;
pub mod installer_scope;
pub mod menu;
pub mod upgrade_behavior;

pub use engine::{MenuEngine, Prompter, check_prompt, radio_prompt};
pub use error::PromptCancelled;
pub use install_modes::InstallModesPrompt;
pub use installer_scope::InstallerScope;
pub use menu::{CheckMenu, Menu, MenuItem, SelectRequest};
pub use upgrade_behavior::UpgradeBehaviorPrompt;

#[cfg(test)]
mod tests;

/// Result type for prompt operations.
///
/// - `Ok(Some(value))` - User submitted a value
/// - `Ok(None)` - User skipped the prompt (Escape)
/// - `Err(_)` - An error occurred
pub type PromptResult<T> = Result<Option<T>>;

/// A single-choice menu over a fixed set of values.
pub trait RadioMenuPrompt {
    type Item: Copy + PartialEq + Display + 'static;

    /// Label shown as the menu title.
    fn name(&self) -> &'static str;

    /// All candidate values, in display order. Never empty.
    fn items(&self) -> &'static [Self::Item];

    /// Whether the user may leave the value unset.
    fn skippable(&self) -> bool;

    /// Value to pre-select, if any.
    fn default(&self) -> Option<Self::Item>;

    fn help_message(&self) -> Option<&'static str> {
        None
    }
}

/// A multiple-choice menu over a fixed set of values.
///
/// The answer is the set of ticked values; ticking nothing leaves the field
/// unset, so these prompts can always be skipped.
pub trait CheckMenuPrompt {
    type Item: Copy + Ord + Display + 'static;

    fn name(&self) -> &'static str;

    /// All candidate values, in display order. Never empty.
    fn items(&self) -> &'static [Self::Item];

    /// Values ticked when the menu opens.
    fn defaults(&self) -> BTreeSet<Self::Item> {
        BTreeSet::new()
    }

    fn help_message(&self) -> Option<&'static str> {
        None
    }
}
