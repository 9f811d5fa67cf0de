//! Immutable description of one menu, built from a prompt.

use std::{collections::BTreeSet, fmt::Display};

use log::{debug, warn};

use super::{CheckMenuPrompt, RadioMenuPrompt};

const SKIP_HINT: &str = "↑↓ navigate, Enter select, Esc skip";
const CANCEL_HINT: &str = "↑↓ navigate, Enter select, Esc cancel";
const CHECK_HINT: &str = "↑↓ navigate, Space toggle, Enter confirm, Esc skip";

/// An entry in a radio menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem<T> {
    /// The value returned when this item is selected
    pub value: T,
    /// The label displayed to the user
    pub label: String,
}

impl<T: Display> MenuItem<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        let label = value.to_string();
        Self { value, label }
    }
}

/// What a [`super::MenuEngine`] needs to draw a menu, without the item type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectRequest<'a> {
    pub title: &'a str,
    pub options: Vec<&'a str>,
    pub help: Option<&'a str>,
    /// Option the cursor starts on
    pub starting_cursor: usize,
    /// Whether Escape leaves the value unset
    pub skippable: bool,
    /// Options ticked when a check menu opens; empty for radio menus
    pub checked: Vec<usize>,
}

/// A radio menu ready to be shown.
///
/// The default, if any, is guaranteed to be one of the items.
#[derive(Debug, Clone)]
pub struct Menu<T> {
    name: &'static str,
    title: String,
    items: Vec<MenuItem<T>>,
    skippable: bool,
    default: Option<T>,
    help_message: Option<&'static str>,
    show_help: bool,
}

impl<T> Menu<T>
where
    T: Copy + PartialEq + Display + 'static,
{
    /// Captures the prompt's items and resolves its default once.
    pub fn from_prompt<P>(prompt: &P) -> Self
    where
        P: RadioMenuPrompt<Item = T>,
    {
        let name = prompt.name();
        let items: Vec<MenuItem<T>> = prompt.items().iter().copied().map(MenuItem::new).collect();

        let default = prompt.default().filter(|value| {
            let known = items.iter().any(|item| item.value == *value);
            if !known {
                warn!("{name}: ignoring default {value}, not one of the menu items");
            }
            known
        });

        match default {
            Some(value) => debug!("{name}: default {value}"),
            None => debug!("{name}: no default"),
        }

        Self {
            name,
            title: format!("{name}:"),
            items,
            skippable: prompt.skippable(),
            default,
            help_message: prompt.help_message(),
            show_help: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem<T>] {
        &self.items
    }

    #[must_use]
    pub fn skippable(&self) -> bool {
        self.skippable
    }

    #[must_use]
    pub fn default(&self) -> Option<T> {
        self.default
    }

    /// Index of the default item, or the first item when there is none.
    #[must_use]
    pub fn starting_cursor(&self) -> usize {
        self.default
            .and_then(|value| self.items.iter().position(|item| item.value == value))
            .unwrap_or(0)
    }

    #[must_use]
    pub fn help_message(&self) -> Option<&str> {
        if !self.show_help {
            return None;
        }

        let hint = if self.skippable {
            SKIP_HINT
        } else {
            CANCEL_HINT
        };
        Some(self.help_message.unwrap_or(hint))
    }

    #[must_use]
    pub fn without_default(mut self) -> Self {
        self.default = None;
        self
    }

    #[must_use]
    pub fn without_help(mut self) -> Self {
        self.show_help = false;
        self
    }

    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<T> {
        self.items.get(index).map(|item| item.value)
    }

    #[must_use]
    pub fn request(&self) -> SelectRequest<'_> {
        SelectRequest {
            title: &self.title,
            options: self.items.iter().map(|item| item.label.as_str()).collect(),
            help: self.help_message(),
            starting_cursor: self.starting_cursor(),
            skippable: self.skippable,
            checked: Vec::new(),
        }
    }
}

/// A check menu ready to be shown.
///
/// Every pre-ticked value is one of the items.
#[derive(Debug, Clone)]
pub struct CheckMenu<T> {
    name: &'static str,
    title: String,
    items: Vec<MenuItem<T>>,
    checked: BTreeSet<T>,
    help_message: Option<&'static str>,
    show_help: bool,
}

impl<T> CheckMenu<T>
where
    T: Copy + Ord + Display + 'static,
{
    pub fn from_prompt<P>(prompt: &P) -> Self
    where
        P: CheckMenuPrompt<Item = T>,
    {
        let name = prompt.name();
        let items: Vec<MenuItem<T>> = prompt.items().iter().copied().map(MenuItem::new).collect();

        let checked: BTreeSet<T> = prompt
            .defaults()
            .into_iter()
            .filter(|value| {
                let known = items.iter().any(|item| item.value == *value);
                if !known {
                    warn!("{name}: ignoring default {value}, not one of the menu items");
                }
                known
            })
            .collect();

        debug!("{name}: {} of {} pre-checked", checked.len(), items.len());

        Self {
            name,
            title: format!("{name}:"),
            items,
            checked,
            help_message: prompt.help_message(),
            show_help: true,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn items(&self) -> &[MenuItem<T>] {
        &self.items
    }

    #[must_use]
    pub fn checked(&self) -> &BTreeSet<T> {
        &self.checked
    }

    /// Positions of the pre-checked items, in menu order.
    #[must_use]
    pub fn checked_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.checked.contains(&item.value))
            .map(|(idx, _)| idx)
            .collect()
    }

    #[must_use]
    pub fn help_message(&self) -> Option<&str> {
        if !self.show_help {
            return None;
        }
        Some(self.help_message.unwrap_or(CHECK_HINT))
    }

    #[must_use]
    pub fn without_defaults(mut self) -> Self {
        self.checked.clear();
        self
    }

    #[must_use]
    pub fn without_help(mut self) -> Self {
        self.show_help = false;
        self
    }

    /// Folds the engine's answer into a set of values.
    ///
    /// Returns `None` if any index is out of range.
    #[must_use]
    pub fn values_at(&self, indices: &[usize]) -> Option<BTreeSet<T>> {
        indices
            .iter()
            .map(|&idx| self.items.get(idx).map(|item| item.value))
            .collect()
    }

    #[must_use]
    pub fn request(&self) -> SelectRequest<'_> {
        let checked = self.checked_indices();
        SelectRequest {
            title: &self.title,
            options: self.items.iter().map(|item| item.label.as_str()).collect(),
            help: self.help_message(),
            starting_cursor: checked.first().copied().unwrap_or(0),
            skippable: true,
            checked,
        }
    }
}
