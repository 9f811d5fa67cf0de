use super::RadioMenuPrompt;
use crate::manifest::{InstallerManifest, Scope};

/// Asks for the scope of the installer being edited.
///
/// When re-editing a package, the scope recorded in the previous manifest is
/// offered as the default: the manifest-wide scope first, then the scope of
/// the installer at the same position.
#[derive(Clone, Copy, Debug)]
pub struct InstallerScope<'a> {
    installer_index: usize,
    previous: Option<&'a InstallerManifest>,
}

impl<'a> InstallerScope<'a> {
    pub const NAME: &'static str = "Installer scope";

    #[must_use]
    pub fn new(installer_index: usize, previous: Option<&'a InstallerManifest>) -> Self {
        Self {
            installer_index,
            previous,
        }
    }
}

impl RadioMenuPrompt for InstallerScope<'_> {
    type Item = Scope;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn items(&self) -> &'static [Scope] {
        Scope::ALL
    }

    fn skippable(&self) -> bool {
        true
    }

    fn default(&self) -> Option<Scope> {
        self.previous.and_then(|manifest| {
            manifest.scope.or_else(|| {
                manifest
                    .installer(self.installer_index)
                    .and_then(|installer| installer.scope)
            })
        })
    }
}
