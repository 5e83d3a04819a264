#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStyle {
    InProgress,
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub style: NotificationStyle,
    pub title: String,
    pub message: Option<String>,
}

impl Notification {
    pub fn in_progress(title: &str) -> Self {
        Self {
            style: NotificationStyle::InProgress,
            title: title.to_string(),
            message: None,
        }
    }

    pub fn success(title: &str) -> Self {
        Self {
            style: NotificationStyle::Success,
            title: title.to_string(),
            message: None,
        }
    }

    pub fn failure(title: &str, detail: impl ToString) -> Self {
        Self {
            style: NotificationStyle::Failure,
            title: title.to_string(),
            message: Some(detail.to_string()),
        }
    }

    /// In-progress notifications stay up until replaced.
    pub fn is_transient(&self) -> bool {
        self.style != NotificationStyle::InProgress
    }
}
