//! Read model of a previously authored installer manifest.
//!
//! Only the fields the prompts consult are modelled. Loading the manifest from
//! disk or from a repository is left to the host tool; the serde derives let it
//! deserialize straight into these types.

use std::collections::BTreeSet;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Installation scope of an installer.
#[derive(
    Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Machine,
    User,
}

impl Scope {
    /// Every scope, in menu order.
    pub const ALL: &'static [Self] = &[Self::Machine, Self::User];
}

/// What the installer does when an older version is already present.
#[derive(
    Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "camelCase")]
pub enum UpgradeBehavior {
    Install,
    #[display("Uninstall previous")]
    UninstallPrevious,
    Deny,
}

impl UpgradeBehavior {
    /// Every upgrade behavior, in menu order.
    pub const ALL: &'static [Self] = &[Self::Install, Self::UninstallPrevious, Self::Deny];
}

/// A way the installer can be run.
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "camelCase")]
pub enum InstallMode {
    Interactive,
    Silent,
    #[display("Silent with progress")]
    SilentWithProgress,
}

impl InstallMode {
    /// Every install mode, in menu order.
    pub const ALL: &'static [Self] = &[Self::Interactive, Self::Silent, Self::SilentWithProgress];
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Installer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installer_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_behavior: Option<UpgradeBehavior>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_modes: Option<BTreeSet<InstallMode>>,
}

/// Installer manifest as last published for a package.
///
/// Values set at the top level apply to every installer and take precedence
/// over the per-installer ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstallerManifest {
    #[serde(default)]
    pub package_identifier: String,
    #[serde(default)]
    pub package_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Scope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_behavior: Option<UpgradeBehavior>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_modes: Option<BTreeSet<InstallMode>>,
    #[serde(default)]
    pub installers: Vec<Installer>,
}

impl InstallerManifest {
    /// Returns the installer at `index`, or `None` when out of range.
    #[must_use]
    pub fn installer(&self, index: usize) -> Option<&Installer> {
        self.installers.get(index)
    }
}
