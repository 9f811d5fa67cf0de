mod common;
pub mod config;
mod logging;
pub mod manifest;
pub mod prompts;

pub use common::{ENV_CONFIG_DIR_OVERRIDE, PROJECT_NAME, PROJECT_VERSION};
pub use config::{Config, PromptConfig, show_configuration};
pub use logging::Logging;
pub use manifest::{InstallMode, Installer, InstallerManifest, Scope, UpgradeBehavior};
pub use prompts::{
    CheckMenuPrompt, InstallModesPrompt, InstallerScope, MenuEngine, PromptCancelled,
    PromptResult, Prompter, RadioMenuPrompt, SelectRequest, UpgradeBehaviorPrompt, check_prompt,
    radio_prompt,
};
