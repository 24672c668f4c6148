use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Student commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// List lessons you are enrolled in.
    Lessons,
    /// Register the reference face image used for attendance.
    RegisterFace {
        /// Face image.
        image: Option<PathBuf>,
    },
    /// Show an enrolled lesson and its files.
    Lesson {
        /// Lesson ID.
        id: i64,
    },
    /// Mark attendance with a captured face image.
    Attend(StudentAttendArgs),
    /// Download a lesson file.
    Download {
        /// File ID.
        file_id: i64,
        /// Target path.
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct StudentAttendArgs {
    /// Lesson ID.
    pub lesson_id: i64,
    /// Captured face image.
    pub image: Option<PathBuf>,
}
