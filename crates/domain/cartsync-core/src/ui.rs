use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub status: NotificationStatus,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn new(
        status: NotificationStatus,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            status,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub cart_is_visible: bool,
    pub notification: Option<Notification>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    ToggleCart,
    ShowNotification(Notification),
    ClearNotification,
}

/// Every UI action is published, even one that leaves the state equal.
pub fn reduce_ui(mut state: UiState, action: UiAction) -> Option<UiState> {
    match action {
        UiAction::ToggleCart => state.cart_is_visible = !state.cart_is_visible,
        // Last write wins, no queueing.
        UiAction::ShowNotification(n) => state.notification = Some(n),
        UiAction::ClearNotification => state.notification = None,
    }
    Some(state)
}
