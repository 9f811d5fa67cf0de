use thiserror::Error;

/// The user left a required prompt without answering.
///
/// Hosts can `downcast_ref` this out of the returned `anyhow::Error` to exit
/// quietly instead of reporting a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{name} is required")]
pub struct PromptCancelled {
    /// Name of the prompt that was cancelled
    pub name: &'static str,
}
