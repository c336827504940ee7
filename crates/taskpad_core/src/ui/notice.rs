//! Dismissible notice contract.

/// A dismissible user-visible message. No response is consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    /// Copy shown when an add collides with an existing title. The notice
    /// never echoes the title itself.
    pub fn duplicate_task() -> Self {
        Self {
            title: "Task already added".to_string(),
            message: "You cannot add a task with the same title".to_string(),
        }
    }
}

/// Presents dismissible notices to the user.
pub trait NoticePresenter {
    fn present(&mut self, notice: Notice);
}
