use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Lesson file commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FileCommands {
    /// List files attached to a lesson.
    List {
        /// Lesson ID.
        lesson_id: i64,
    },
    /// Upload a file to a lesson.
    Upload(FileUploadArgs),
    /// Delete a file.
    Delete(FileDeleteArgs),
    /// Download a file.
    Download(FileDownloadArgs),
    /// Print (or open) a shareable download link.
    Link(FileLinkArgs),
}

#[derive(Clone, Debug, Args)]
pub struct FileUploadArgs {
    /// Lesson ID.
    pub lesson_id: i64,
    /// File to upload.
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct FileDeleteArgs {
    /// File ID.
    pub file_id: Option<i64>,
    /// Lesson the file belongs to; its file list is shown afterwards.
    #[arg(long)]
    pub lesson: Option<i64>,
    /// Skip the confirmation prompt.
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(Clone, Debug, Args)]
pub struct FileDownloadArgs {
    /// File ID.
    pub file_id: i64,
    /// Target path (defaults to the server file name in `general.download_dir`).
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct FileLinkArgs {
    /// File ID.
    pub file_id: i64,
    /// Open the link in the default browser.
    #[arg(long)]
    pub open: bool,
}
