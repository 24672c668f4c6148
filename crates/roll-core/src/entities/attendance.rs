use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A recorded attendance mark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Attendance {
    pub id: i64,
    pub user_id: i64,
    pub lesson_id: i64,
    /// Face similarity score in `0.0..=1.0` reported by the backend.
    pub similarity: f64,
    pub timestamp: NaiveDateTime,
}
