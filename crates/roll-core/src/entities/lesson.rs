use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::user::UserSummary;

/// A lesson with its files and enrollments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lesson {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub teacher_id: i64,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub files: Vec<LessonFile>,
    #[serde(default)]
    pub enrollments: Vec<LessonEnrollment>,
}

impl Lesson {
    /// Lightweight row for list views.
    #[must_use]
    pub fn summary(&self) -> LessonSummary {
        LessonSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            files: self.files.len(),
            students: self.enrollments.len(),
        }
    }

    #[must_use]
    pub fn file(&self, file_id: i64) -> Option<&LessonFile> {
        self.files.iter().find(|f| f.id == file_id)
    }

    #[must_use]
    pub fn is_enrolled(&self, user_id: i64) -> bool {
        self.enrollments.iter().any(|e| e.user_id == user_id)
    }
}

/// A file attached to a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LessonFile {
    pub id: i64,
    pub filename: String,
    pub file_path: String,
    pub uploaded_at: NaiveDateTime,
    /// Present on `/files` listings, absent when nested in a lesson.
    #[serde(default)]
    pub lesson_id: Option<i64>,
}

/// One student's enrollment, nested inside a lesson.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LessonEnrollment {
    pub user_id: i64,
    pub student: UserSummary,
}

/// Flattened lesson row used by table output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LessonSummary {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub files: usize,
    pub students: usize,
}
