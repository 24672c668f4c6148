use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// A backend user account.
///
/// `role` stays a raw string so an unexpected value from the server does not
/// fail the whole listing; use [`User::role`] for the typed view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(rename = "role")]
    pub role_name: String,
}

impl User {
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        Role::parse_lenient(&self.role_name)
    }
}

/// Minimal user reference nested in enrollments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_is_typed_when_known() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"username":"t","role":"teacher","taught_lessons":[]}"#)
                .expect("user should parse");
        assert_eq!(user.role(), Some(Role::Teacher));
    }

    #[test]
    fn unknown_role_does_not_fail_parse() {
        let user: User = serde_json::from_str(r#"{"id":2,"username":"x","role":"auditor"}"#)
            .expect("user should parse");
        assert_eq!(user.role(), None);
        assert_eq!(user.role_name, "auditor");
    }
}
