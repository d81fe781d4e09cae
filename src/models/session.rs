// src/models/session.rs

//! Login credentials and the authenticated session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub(crate) const NOT_AUTHORIZED: &str = "You are not authorized. Please log in.";

/// Username/password pair sent to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    #[serde(rename = "facultyUsername")]
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(AppError::validation("Username and password are required."));
        }
        Ok(())
    }
}

/// An authenticated faculty session.
///
/// Passed explicitly to every authenticated call; nothing reads the token
/// from ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,

    #[serde(default)]
    pub username: String,

    pub issued_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
            issued_at: Utc::now(),
        }
    }

    /// Bearer token for the `Authorization` header.
    ///
    /// A blank token is treated the same as no session at all.
    pub fn bearer(&self) -> Result<&str> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(AppError::authorization(NOT_AUTHORIZED));
        }
        Ok(token)
    }
}
