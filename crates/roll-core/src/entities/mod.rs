//! Entity structs for backend resources as seen by the client.
//!
//! The client only holds transient copies; the backend owns persistence.
//! Timestamps are naive UTC, which is what the API emits.

mod attendance;
mod lesson;
mod user;

pub use attendance::Attendance;
pub use lesson::{Lesson, LessonEnrollment, LessonFile, LessonSummary};
pub use user::{User, UserSummary};
