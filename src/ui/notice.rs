/// User-facing notices for rejected submissions
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::state::StoreError;

/// Show a native modal and block until the user dismisses it
pub fn alert(title: &str, error: &StoreError) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(error.to_string())
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// One-line summary for the status bar
pub fn status_line(error: &StoreError) -> String {
    match error {
        StoreError::IncompleteSubmission { missing } => {
            let fields: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
            format!("{} (missing: {})", error, fields.join(", "))
        }
    }
}
