use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// Toast shown after a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn submitted() -> Self {
        Self {
            title: "Success!",
            description: "Form submitted successfully",
            variant: NotificationVariant::Default,
        }
    }

    /// Generic failure. Never carries detail about the underlying error.
    pub fn submission_failed() -> Self {
        Self {
            title: "Error",
            description: "Something went wrong. Please try again.",
            variant: NotificationVariant::Destructive,
        }
    }
}
