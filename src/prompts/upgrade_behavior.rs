use super::RadioMenuPrompt;
use crate::manifest::{InstallerManifest, UpgradeBehavior};

/// Asks how the installer treats an already installed older version.
///
/// Unlike the scope, this value is required. The default comes from the
/// previous manifest the same way as [`super::InstallerScope`].
#[derive(Clone, Copy, Debug)]
pub struct UpgradeBehaviorPrompt<'a> {
    installer_index: usize,
    previous: Option<&'a InstallerManifest>,
}

impl<'a> UpgradeBehaviorPrompt<'a> {
    pub const NAME: &'static str = "Upgrade behavior";

    const HELP_MESSAGE: &'static str =
        "Whether to install over, uninstall first, or refuse when an older version is present";

    #[must_use]
    pub fn new(installer_index: usize, previous: Option<&'a InstallerManifest>) -> Self {
        Self {
            installer_index,
            previous,
        }
    }
}

impl RadioMenuPrompt for UpgradeBehaviorPrompt<'_> {
    type Item = UpgradeBehavior;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn items(&self) -> &'static [UpgradeBehavior] {
        UpgradeBehavior::ALL
    }

    fn skippable(&self) -> bool {
        false
    }

    fn default(&self) -> Option<UpgradeBehavior> {
        self.previous.and_then(|manifest| {
            manifest.upgrade_behavior.or_else(|| {
                manifest
                    .installer(self.installer_index)
                    .and_then(|installer| installer.upgrade_behavior)
            })
        })
    }

    fn help_message(&self) -> Option<&'static str> {
        Some(Self::HELP_MESSAGE)
    }
}
