use std::collections::BTreeSet;

use super::CheckMenuPrompt;
use crate::manifest::{InstallMode, InstallerManifest};

/// Asks which install modes the installer supports.
///
/// The modes recorded in the previous manifest start ticked, taken from the
/// manifest-wide value first, then from the installer at the same position.
#[derive(Clone, Copy, Debug)]
pub struct InstallModesPrompt<'a> {
    installer_index: usize,
    previous: Option<&'a InstallerManifest>,
}

impl<'a> InstallModesPrompt<'a> {
    pub const NAME: &'static str = "Install modes";

    #[must_use]
    pub fn new(installer_index: usize, previous: Option<&'a InstallerManifest>) -> Self {
        Self {
            installer_index,
            previous,
        }
    }
}

impl CheckMenuPrompt for InstallModesPrompt<'_> {
    type Item = InstallMode;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn items(&self) -> &'static [InstallMode] {
        InstallMode::ALL
    }

    fn defaults(&self) -> BTreeSet<InstallMode> {
        self.previous
            .and_then(|manifest| {
                manifest.install_modes.as_ref().or_else(|| {
                    manifest
                        .installer(self.installer_index)
                        .and_then(|installer| installer.install_modes.as_ref())
                })
            })
            .cloned()
            .unwrap_or_default()
    }
}
