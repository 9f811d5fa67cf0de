mod loader;
pub use loader::{Config, PromptConfig, show_configuration};
