use std::path::Path;

use roll_client::{ActionError, ActionForm, FileUpload};

/// Build a file form from an optional path. No path leaves the form empty,
/// so submitting it yields the `missing` warning without a request.
pub async fn file_form(
    path: Option<&Path>,
    missing: &'static str,
) -> Result<ActionForm<FileUpload>, ActionError> {
    let selection = match path {
        Some(path) => Some(FileUpload::from_path(path).await?),
        None => None,
    };
    Ok(ActionForm::new(missing).with_selection(selection))
}
