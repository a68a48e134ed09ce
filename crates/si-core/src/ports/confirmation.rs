use anyhow::Result;
use async_trait::async_trait;

/// A yes/no question put to the user before a destructive step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub primary_action: String,
    pub destructive: bool,
}

impl ConfirmPrompt {
    pub fn destructive(
        title: impl Into<String>,
        message: impl Into<String>,
        primary_action: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            primary_action: primary_action.into(),
            destructive: true,
        }
    }
}

#[async_trait]
pub trait ConfirmationPort: Send + Sync {
    /// `Ok(true)` when the user accepted the primary action.
    async fn confirm(&self, prompt: &ConfirmPrompt) -> Result<bool>;
}
