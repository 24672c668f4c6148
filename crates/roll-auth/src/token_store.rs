use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "rollcall-cli";
const KEYRING_USER: &str = "access-token";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const TOKEN_ENV: &str = "ROLLCALL_AUTH__TOKEN";

/// Where a loaded token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    Env,
    File,
    /// Handed in directly (tests, impersonation in the same process).
    Explicit,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::File => "file",
            Self::Explicit => "explicit",
        }
    }
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyring service name. Override via `ROLLCALL_KEYRING_SERVICE` in tests so
/// real credentials are never touched.
fn keyring_service() -> String {
    std::env::var("ROLLCALL_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Persist a token, preferring the OS keychain over `~/.rollcall/credentials`.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` when the keychain refuses the token and the
/// credentials file cannot be written either.
pub fn store(token: &str) -> Result<(), AuthError> {
    let saved = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        .and_then(|entry| entry.set_password(token));
    if let Err(error) = saved {
        tracing::warn!(%error, "keychain rejected the token; writing credentials file");
        return store_file(&credentials_path()?, token);
    }
    Ok(())
}

/// Load a token. Priority: keyring → `ROLLCALL_AUTH__TOKEN` env → file
/// (`~/.rollcall/credentials`).
#[must_use]
pub fn load() -> Option<(String, TokenSource)> {
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        && let Ok(token) = entry.get_password()
        && !token.trim().is_empty()
    {
        return Some((token, TokenSource::Keyring));
    }

    if let Ok(token) = std::env::var(TOKEN_ENV)
        && !token.trim().is_empty()
    {
        return Some((token, TokenSource::Env));
    }

    let path = credentials_path().ok()?;
    load_file(&path).map(|token| (token, TokenSource::File))
}

/// Delete stored credentials from keyring and file.
///
/// # Errors
///
/// Returns `AuthError::TokenStore` if the credentials file cannot be removed.
pub fn delete() -> Result<(), AuthError> {
    // Missing entries are fine here
    if let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER) {
        let _ = entry.delete_credential();
    }
    delete_file(&credentials_path()?)
}

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".rollcall").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStore("home directory not found; cannot store credentials".into())
        })
}

fn store_file(path: &Path, token: &str) -> Result<(), AuthError> {
    let fail = |what: &str, target: &Path, e: std::io::Error| {
        AuthError::TokenStore(format!("cannot {what} {}: {e}", target.display()))
    };

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| fail("create", dir, e))?;
        restrict(dir, 0o700).unwrap_or_else(|e| {
            tracing::warn!(dir = %dir.display(), error = %e, "could not restrict credentials dir");
        });
    }
    fs::write(path, token).map_err(|e| fail("write", path, e))?;
    restrict(path, 0o600).map_err(|e| fail("restrict", path, e))
}

#[cfg(unix)]
fn restrict(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
#[allow(clippy::unnecessary_wraps)]
fn restrict(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}

fn load_file(path: &Path) -> Option<String> {
    fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn delete_file(path: &Path) -> Result<(), AuthError> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(AuthError::TokenStore(
            format!("cannot remove {}: {e}", path.display()),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn credentials_path_is_under_home() {
        let path = credentials_path().expect("should resolve");
        assert!(path.ends_with(".rollcall/credentials"));
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let creds_path = tmp.path().join("nested").join("credentials");

        store_file(&creds_path, "token_abc123").expect("store");
        assert_eq!(load_file(&creds_path).as_deref(), Some("token_abc123"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&creds_path)
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "credentials file should be 0600");
        }

        delete_file(&creds_path).expect("delete");
        assert!(!creds_path.exists());
        // Deleting twice is not an error
        delete_file(&creds_path).expect("second delete");
    }

    #[test]
    fn load_file_ignores_whitespace_only_content() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let creds_path = tmp.path().join("credentials");

        std::fs::write(&creds_path, "   \n  ").expect("write");
        assert!(load_file(&creds_path).is_none());
    }

    #[test]
    fn load_file_trims_trailing_newline() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let creds_path = tmp.path().join("credentials");

        std::fs::write(&creds_path, "abc.def.ghi\n").expect("write");
        assert_eq!(load_file(&creds_path).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn token_source_display() {
        assert_eq!(TokenSource::Keyring.to_string(), "keyring");
        assert_eq!(TokenSource::File.as_str(), "file");
    }
}
