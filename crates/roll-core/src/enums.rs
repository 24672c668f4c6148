//! Role enum for rollcall callers.
//!
//! Serialized in `snake_case`, matching the backend's `role` column.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// A caller's single capability class, resolved once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Teacher => "teacher",
            Self::Student => "student",
        }
    }

    /// Lenient parse: unknown or empty strings yield `None` instead of an error.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "teacher" => Ok(Self::Teacher),
            "student" => Ok(Self::Student),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("teacher", Some(Role::Teacher))]
    #[case("Student", Some(Role::Student))]
    #[case(" teacher ", Some(Role::Teacher))]
    #[case("admin", None)]
    #[case("", None)]
    fn parse_lenient_cases(#[case] raw: &str, #[case] expected: Option<Role>) {
        assert_eq!(Role::parse_lenient(raw), expected);
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&Role::Teacher).expect("serialize");
        assert_eq!(json, "\"teacher\"");
        let role: Role = serde_json::from_str("\"student\"").expect("deserialize");
        assert_eq!(role, Role::Student);
    }

    #[test]
    fn from_str_reports_unknown_role() {
        let err = "janitor".parse::<Role>().expect_err("should fail");
        assert!(err.to_string().contains("unknown role 'janitor'"));
    }
}
