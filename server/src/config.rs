//! Environment-driven server configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use crate::gate::{DEFAULT_COOKIE_NAME, DEFAULT_LOGIN_PATH, GateConfig};

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("LOGIN_PATH must start with '/': {0:?}")]
    InvalidLoginPath(String),
    #[error("AUTH_COOKIE_NAME must not be empty")]
    EmptyCookieName,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides the Leptos `site-root` (where `/pkg` is served from).
    pub site_root: Option<PathBuf>,
    pub auth_cookie: String,
    pub login_path: String,
}

impl ServerConfig {
    /// Read `PORT`, `SITE_ROOT`, `AUTH_COOKIE_NAME`, and `LOGIN_PATH`.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set to an unusable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let auth_cookie = lookup("AUTH_COOKIE_NAME").unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_owned());
        if auth_cookie.trim().is_empty() {
            return Err(ConfigError::EmptyCookieName);
        }

        let login_path = lookup("LOGIN_PATH").unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_owned());
        if !login_path.starts_with('/') {
            return Err(ConfigError::InvalidLoginPath(login_path));
        }

        Ok(Self {
            port,
            site_root: lookup("SITE_ROOT").map(PathBuf::from),
            auth_cookie,
            login_path,
        })
    }

    #[must_use]
    pub fn gate(&self) -> GateConfig {
        GateConfig::new(self.auth_cookie.clone(), self.login_path.clone())
    }
}
