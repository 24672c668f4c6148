use clap::Subcommand;

/// Attendance commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AttendanceCommands {
    /// List attendance records.
    List {
        /// Only records for this lesson.
        #[arg(long)]
        lesson: Option<i64>,
    },
}
