use clap::{Args, Subcommand};

/// Enrollment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EnrollmentCommands {
    /// Enroll a student in a lesson.
    Add(EnrollmentArgs),
    /// Remove a student from a lesson.
    Remove(EnrollmentArgs),
}

#[derive(Clone, Debug, Args)]
pub struct EnrollmentArgs {
    /// Lesson ID.
    pub lesson_id: i64,
    /// Student user ID.
    #[arg(long)]
    pub user: Option<i64>,
    /// Skip the confirmation prompt (remove only).
    #[arg(long, short = 'y')]
    pub yes: bool,
}
