use log::error;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::{config::LauncherConfig, error::LaunchError};

/// Title and body of an error dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogContent {
    pub title: String,
    pub message: String,
}

impl DialogContent {
    pub fn for_error(error: &LaunchError, config: &LauncherConfig) -> Self {
        match error {
            LaunchError::MissingScript { path } => Self {
                title: config.error_title(),
                message: format!(
                    "Error: {} was not found in the application folder.\n\nExpected path: {}",
                    config.script_name,
                    path.display()
                ),
            },
            other => Self {
                title: config.critical_error_title(),
                message: format!("Error starting {}:\n\n{other}", config.app_name),
            },
        }
    }
}

/// Shows error dialogs to the user.
pub trait Presenter {
    /// Blocks until the user dismisses the dialog.
    fn show_error(&mut self, content: &DialogContent);
}

/// Native modal message box with a single OK button and an error icon.
#[derive(Debug, Default, Clone, Copy)]
pub struct MessageBoxPresenter;

impl Presenter for MessageBoxPresenter {
    fn show_error(&mut self, content: &DialogContent) {
        error!("{}: {}", content.title, content.message);
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(&content.title)
            .set_description(&content.message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
