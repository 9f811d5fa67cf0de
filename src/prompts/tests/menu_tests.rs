use std::collections::BTreeSet;

use super::{installer, manifest, manifest_with_modes};
use crate::manifest::{InstallMode, Scope};
use crate::prompts::{
    CheckMenu, CheckMenuPrompt, InstallModesPrompt, InstallerScope, Menu, MenuItem,
    RadioMenuPrompt, UpgradeBehaviorPrompt,
};

/// Prompt whose default is not among its items.
struct MachineOnly;

impl RadioMenuPrompt for MachineOnly {
    type Item = Scope;

    fn name(&self) -> &'static str {
        "Machine only"
    }

    fn items(&self) -> &'static [Scope] {
        &[Scope::Machine]
    }

    fn skippable(&self) -> bool {
        true
    }

    fn default(&self) -> Option<Scope> {
        Some(Scope::User)
    }
}

/// Required prompt with no help text of its own.
struct RequiredMachineOnly;

impl RadioMenuPrompt for RequiredMachineOnly {
    type Item = Scope;

    fn name(&self) -> &'static str {
        "Required machine only"
    }

    fn items(&self) -> &'static [Scope] {
        &[Scope::Machine]
    }

    fn skippable(&self) -> bool {
        false
    }

    fn default(&self) -> Option<Scope> {
        None
    }
}

/// Check prompt that pre-ticks a mode it does not offer.
struct SilentOnly;

impl CheckMenuPrompt for SilentOnly {
    type Item = InstallMode;

    fn name(&self) -> &'static str {
        "Silent only"
    }

    fn items(&self) -> &'static [InstallMode] {
        &[InstallMode::Silent]
    }

    fn defaults(&self) -> BTreeSet<InstallMode> {
        BTreeSet::from([InstallMode::Silent, InstallMode::Interactive])
    }

    fn help_message(&self) -> Option<&'static str> {
        Some("Pick the silent flavours")
    }
}

#[test]
fn test_menu_captures_prompt() {
    let previous = manifest(Some(Scope::User), vec![]);
    let menu = Menu::from_prompt(&InstallerScope::new(0, Some(&previous)));

    assert_eq!(menu.name(), "Installer scope");
    assert_eq!(menu.title(), "Installer scope:");
    assert!(menu.skippable());
    assert_eq!(menu.default(), Some(Scope::User));
    assert_eq!(
        menu.items(),
        &[
            MenuItem {
                value: Scope::Machine,
                label: "Machine".to_string()
            },
            MenuItem {
                value: Scope::User,
                label: "User".to_string()
            },
        ]
    );
}

#[test]
fn test_starting_cursor_points_at_default() {
    let previous = manifest(None, vec![installer(Some(Scope::User))]);

    let menu = Menu::from_prompt(&InstallerScope::new(0, Some(&previous)));
    assert_eq!(menu.starting_cursor(), 1);

    let menu = Menu::from_prompt(&InstallerScope::new(0, None));
    assert_eq!(menu.starting_cursor(), 0);
}

#[test]
fn test_default_outside_items_is_dropped() {
    let menu = Menu::from_prompt(&MachineOnly);

    assert_eq!(menu.default(), None);
    assert_eq!(menu.starting_cursor(), 0);
}

#[test]
fn test_help_message_depends_on_skippable() {
    let skippable = Menu::from_prompt(&InstallerScope::new(0, None));
    assert!(skippable.help_message().unwrap().ends_with("Esc skip"));

    let required = Menu::from_prompt(&UpgradeBehaviorPrompt::new(0, None));
    assert!(required.help_message().unwrap().starts_with("Whether to install"));
}

#[test]
fn test_required_prompt_without_help_falls_back_to_cancel_hint() {
    let menu = Menu::from_prompt(&RequiredMachineOnly);

    assert!(!menu.skippable());
    assert_eq!(
        menu.help_message(),
        Some("↑↓ navigate, Enter select, Esc cancel")
    );
    assert_eq!(menu.request().help, menu.help_message());
    assert_eq!(menu.without_help().help_message(), None);
}

#[test]
fn test_without_default_and_without_help() {
    let previous = manifest(Some(Scope::User), vec![]);
    let menu = Menu::from_prompt(&InstallerScope::new(0, Some(&previous)))
        .without_default()
        .without_help();

    assert_eq!(menu.default(), None);
    assert_eq!(menu.starting_cursor(), 0);
    assert_eq!(menu.help_message(), None);
}

#[test]
fn test_value_at() {
    let menu = Menu::from_prompt(&InstallerScope::new(0, None));

    assert_eq!(menu.value_at(0), Some(Scope::Machine));
    assert_eq!(menu.value_at(1), Some(Scope::User));
    assert_eq!(menu.value_at(2), None);
}

#[test]
fn test_request_mirrors_menu() {
    let previous = manifest(Some(Scope::User), vec![]);
    let menu = Menu::from_prompt(&InstallerScope::new(0, Some(&previous)));

    let request = menu.request();

    assert_eq!(request.title, "Installer scope:");
    assert_eq!(request.options, vec!["Machine", "User"]);
    assert_eq!(request.starting_cursor, 1);
    assert!(request.skippable);
    assert_eq!(request.help, menu.help_message());
}

#[test]
fn test_check_menu_defaults_to_check_hint() {
    let menu = CheckMenu::from_prompt(&InstallModesPrompt::new(0, None));

    assert_eq!(
        menu.help_message(),
        Some("↑↓ navigate, Space toggle, Enter confirm, Esc skip")
    );
    assert_eq!(menu.without_help().help_message(), None);
}

#[test]
fn test_check_menu_drops_unknown_defaults() {
    let menu = CheckMenu::from_prompt(&SilentOnly);

    assert_eq!(menu.checked(), &BTreeSet::from([InstallMode::Silent]));
    assert_eq!(menu.checked_indices(), vec![0]);
    assert_eq!(menu.help_message(), Some("Pick the silent flavours"));
}

#[test]
fn test_check_menu_checked_indices_follow_menu_order() {
    let previous = manifest_with_modes(
        Some(&[InstallMode::SilentWithProgress, InstallMode::Interactive]),
        vec![],
    );
    let menu = CheckMenu::from_prompt(&InstallModesPrompt::new(0, Some(&previous)));

    assert_eq!(menu.title(), "Install modes:");
    assert_eq!(menu.items().len(), 3);
    assert_eq!(menu.checked_indices(), vec![0, 2]);

    let menu = menu.without_defaults();
    assert!(menu.checked().is_empty());
    assert_eq!(menu.request().starting_cursor, 0);
}

#[test]
fn test_check_menu_values_at() {
    let menu = CheckMenu::from_prompt(&InstallModesPrompt::new(0, None));

    assert_eq!(menu.values_at(&[]), Some(BTreeSet::new()));
    assert_eq!(
        menu.values_at(&[1, 1]),
        Some(BTreeSet::from([InstallMode::Silent]))
    );
    assert_eq!(menu.values_at(&[0, 3]), None);
}

#[test]
fn test_radio_request_has_nothing_checked() {
    let menu = Menu::from_prompt(&InstallerScope::new(0, None));

    assert!(menu.request().checked.is_empty());
}
