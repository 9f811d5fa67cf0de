#![allow(clippy::unwrap_used)]

use std::collections::{BTreeSet, VecDeque};

use anyhow::anyhow;

use super::{MenuEngine, PromptResult, SelectRequest};
use crate::manifest::{InstallMode, Installer, InstallerManifest, Scope, UpgradeBehavior};

mod menu_tests;

/// What the scripted user does at the next menu.
#[derive(Clone)]
pub(super) enum Answer {
    Pick(usize),
    Check(Vec<usize>),
    Skip,
    Fail,
}

/// A menu as the engine saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Shown {
    pub title: String,
    pub options: Vec<String>,
    pub help: Option<String>,
    pub starting_cursor: usize,
    pub skippable: bool,
    pub checked: Vec<usize>,
}

impl From<&SelectRequest<'_>> for Shown {
    fn from(request: &SelectRequest<'_>) -> Self {
        Self {
            title: request.title.to_string(),
            options: request.options.iter().map(ToString::to_string).collect(),
            help: request.help.map(ToString::to_string),
            starting_cursor: request.starting_cursor,
            skippable: request.skippable,
            checked: request.checked.clone(),
        }
    }
}

/// Engine double that replays canned answers and records each menu.
#[derive(Default)]
pub(super) struct ScriptedEngine {
    answers: VecDeque<Answer>,
    pub shown: Vec<Shown>,
}

impl ScriptedEngine {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            shown: Vec::new(),
        }
    }
}

impl MenuEngine for ScriptedEngine {
    fn select(&mut self, request: &SelectRequest<'_>) -> PromptResult<usize> {
        self.shown.push(Shown::from(request));

        match self.answers.pop_front() {
            Some(Answer::Pick(index)) => Ok(Some(index)),
            Some(Answer::Skip) => Ok(None),
            Some(Answer::Check(_)) => Err(anyhow!("check answer given to a radio menu")),
            Some(Answer::Fail) | None => Err(anyhow!("terminal went away")),
        }
    }

    fn multi_select(&mut self, request: &SelectRequest<'_>) -> PromptResult<Vec<usize>> {
        self.shown.push(Shown::from(request));

        match self.answers.pop_front() {
            Some(Answer::Check(indices)) => Ok(Some(indices)),
            Some(Answer::Pick(index)) => Ok(Some(vec![index])),
            Some(Answer::Skip) => Ok(None),
            Some(Answer::Fail) | None => Err(anyhow!("terminal went away")),
        }
    }
}

pub(super) fn installer(scope: Option<Scope>) -> Installer {
    Installer {
        scope,
        ..Installer::default()
    }
}

pub(super) fn manifest(scope: Option<Scope>, installers: Vec<Installer>) -> InstallerManifest {
    InstallerManifest {
        package_identifier: "Example.App".to_string(),
        package_version: "1.0.0".to_string(),
        scope,
        installers,
        ..InstallerManifest::default()
    }
}

pub(super) fn manifest_with_upgrade(
    upgrade_behavior: Option<UpgradeBehavior>,
    installers: Vec<Option<UpgradeBehavior>>,
) -> InstallerManifest {
    InstallerManifest {
        upgrade_behavior,
        installers: installers
            .into_iter()
            .map(|upgrade_behavior| Installer {
                upgrade_behavior,
                ..Installer::default()
            })
            .collect(),
        ..InstallerManifest::default()
    }
}

pub(super) fn manifest_with_modes(
    install_modes: Option<&[InstallMode]>,
    installers: Vec<Option<&[InstallMode]>>,
) -> InstallerManifest {
    let to_set = |modes: &[InstallMode]| modes.iter().copied().collect::<BTreeSet<_>>();
    InstallerManifest {
        install_modes: install_modes.map(to_set),
        installers: installers
            .into_iter()
            .map(|modes| Installer {
                install_modes: modes.map(to_set),
                ..Installer::default()
            })
            .collect(),
        ..InstallerManifest::default()
    }
}
