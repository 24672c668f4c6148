use clap::Subcommand;

use crate::cli::subcommands::{
    AttendanceCommands, AuthCommands, EnrollmentCommands, FileCommands, LessonCommands,
    StudentCommands, UserCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Lessons (teacher).
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },
    /// Lesson files (teacher).
    File {
        #[command(subcommand)]
        action: FileCommands,
    },
    /// Student enrollment (teacher).
    Enrollment {
        #[command(subcommand)]
        action: EnrollmentCommands,
    },
    /// User administration (teacher).
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Attendance records (teacher).
    Attendance {
        #[command(subcommand)]
        action: AttendanceCommands,
    },
    /// Enrolled lessons, face registration and check-in (student).
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
}
