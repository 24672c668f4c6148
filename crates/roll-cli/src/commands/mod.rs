pub mod attendance;
pub mod auth;
pub mod dispatch;
pub mod enrollment;
pub mod file;
pub mod lesson;
pub mod shared;
pub mod student;
pub mod user;
