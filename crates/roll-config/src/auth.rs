//! Credential and role configuration.

use roll_core::enums::Role;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Pin the caller's role instead of probing the API (`teacher` or `student`).
    #[serde(default)]
    pub role: String,
}

impl AuthConfig {
    /// The pinned role, if one is configured and recognised.
    #[must_use]
    pub fn pinned_role(&self) -> Option<Role> {
        Role::parse_lenient(&self.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_pinned_role() {
        assert!(AuthConfig::default().pinned_role().is_none());
    }

    #[test]
    fn unknown_role_is_ignored() {
        let config = AuthConfig {
            role: "principal".into(),
        };
        assert!(config.pinned_role().is_none());
    }

    #[test]
    fn pinned_role_parses() {
        let config = AuthConfig {
            role: "student".into(),
        };
        assert_eq!(config.pinned_role(), Some(Role::Student));
    }
}
