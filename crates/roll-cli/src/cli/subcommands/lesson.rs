use clap::{Args, Subcommand};

/// Lesson commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LessonCommands {
    /// List lessons you teach.
    List,
    /// Show a lesson with its files and enrolled students.
    Show {
        /// Lesson ID.
        id: i64,
    },
    /// Create a lesson.
    Create(LessonCreateArgs),
    /// Update a lesson's title and description.
    Update(LessonUpdateArgs),
    /// Delete a lesson.
    Delete {
        /// Lesson ID.
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Clone, Debug, Args)]
pub struct LessonCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct LessonUpdateArgs {
    /// Lesson ID.
    pub id: i64,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
}
