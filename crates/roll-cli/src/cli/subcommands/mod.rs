pub mod attendance;
pub mod auth;
pub mod enrollment;
pub mod file;
pub mod lesson;
pub mod student;
pub mod user;

pub use attendance::AttendanceCommands;
pub use auth::AuthCommands;
pub use enrollment::EnrollmentCommands;
pub use file::FileCommands;
pub use lesson::LessonCommands;
pub use student::StudentCommands;
pub use user::UserCommands;
