//! Access token for the current session
//!
//! The token is minted by the backend's login flow; this client only reads
//! it, from `FINTRACK_ACCESS_TOKEN` or from `session.json` in the config
//! directory. A missing token is not an error: protected reads are simply
//! disabled until one is present.

use std::sync::RwLock;

use serde::Deserialize;
use zeroize::Zeroizing;

use super::file_io::{read_json, remove_if_exists};
use super::paths::FintrackPaths;
use crate::error::FinanceError;

/// Environment variable holding the access token
pub const ACCESS_TOKEN_ENV: &str = "FINTRACK_ACCESS_TOKEN";

#[derive(Debug, Default, Deserialize)]
struct SessionFile {
    #[serde(default, alias = "accessToken")]
    access_token: Option<String>,
}

/// Holds the bearer token shared by every request
#[derive(Default)]
pub struct Session {
    token: RwLock<Option<Zeroizing<String>>>,
}

impl Session {
    /// A session without a token
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session with a known token
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::default();
        session.set_token(Some(token.into()));
        session
    }

    /// Load the token from the environment, falling back to `session.json`
    pub fn load(paths: &FintrackPaths) -> Result<Self, FinanceError> {
        if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV) {
            if !token.trim().is_empty() {
                return Ok(Self::with_token(token.trim()));
            }
        }

        let file: SessionFile = read_json(paths.session_file())?;
        Ok(match file.access_token {
            Some(token) if !token.trim().is_empty() => Self::with_token(token.trim()),
            _ => Self::anonymous(),
        })
    }

    /// Current token, if any
    pub fn access_token(&self) -> Option<String> {
        self.token
            .read()
            .ok()
            .and_then(|guard| guard.as_ref().map(|t| t.as_str().to_string()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().map(|guard| guard.is_some()).unwrap_or(false)
    }

    /// Drop the token and the saved `session.json`
    pub fn forget(&self, paths: &FintrackPaths) -> Result<(), FinanceError> {
        self.set_token(None);
        remove_if_exists(paths.session_file())?;
        Ok(())
    }

    /// Replace (or clear) the token
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = token.filter(|t| !t.is_empty()).map(Zeroizing::new);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_anonymous_session() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.access_token(), None);
    }

    #[test]
    fn test_empty_token_is_no_token() {
        let session = Session::with_token("");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clear_token() {
        let session = Session::with_token("abc");
        assert_eq!(session.access_token().as_deref(), Some("abc"));
        session.set_token(None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.session_file(), r#"{"accessToken": "tok-123"}"#).unwrap();

        // Only meaningful when the environment doesn't already provide a token
        if std::env::var(ACCESS_TOKEN_ENV).is_err() {
            let session = Session::load(&paths).unwrap();
            assert_eq!(session.access_token().as_deref(), Some("tok-123"));
        }
    }

    #[test]
    fn test_forget_removes_saved_session() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.session_file(), r#"{"accessToken": "tok-123"}"#).unwrap();

        let session = Session::with_token("tok-123");
        session.forget(&paths).unwrap();
        assert!(!session.is_authenticated());
        assert!(!paths.session_file().exists());

        // a second sign-out has nothing left to remove
        session.forget(&paths).unwrap();
    }

    #[test]
    fn test_debug_hides_token() {
        let session = Session::with_token("secret-token");
        let printed = format!("{:?}", session);
        assert!(!printed.contains("secret-token"));
    }
}
