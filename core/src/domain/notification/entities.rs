use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// A short user-facing message, shown as a toast by graphical front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }

    pub fn analyzing() -> Self {
        Self::info(
            "Analyzing image...",
            "Please wait while we process your food image.",
        )
    }

    pub fn analysis_failed(message: impl Into<String>) -> Self {
        Self::destructive("Error analyzing image", message)
    }

    pub fn invalid_file_type(message: impl Into<String>) -> Self {
        Self::destructive("Invalid file type", message)
    }
}
