// src/models/query.rs

//! The filter selection that scopes a roster fetch.

use serde::Serialize;

use crate::error::{AppError, Result};

/// `(branch, className, subject[, date])`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryKey {
    pub branch: String,

    #[serde(rename = "className")]
    pub class_name: String,

    pub subject: String,

    #[serde(rename = "attendanceDate", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl QueryKey {
    pub fn new(
        branch: impl Into<String>,
        class_name: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            branch: branch.into(),
            class_name: class_name.into(),
            subject: subject.into(),
            date: None,
        }
    }

    /// Scope the key to a single date.
    pub fn on(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Check every required component is present.
    pub fn validate(&self, needs_date: bool) -> Result<()> {
        let missing = |s: &str| s.trim().is_empty();
        let scope_missing =
            missing(&self.branch) || missing(&self.class_name) || missing(&self.subject);
        if needs_date {
            if scope_missing || self.date.as_deref().is_none_or(missing) {
                return Err(AppError::validation(
                    "Please select branch, class, subject, and date.",
                ));
            }
        } else if scope_missing {
            return Err(AppError::validation(
                "Please select branch, class, and subject.",
            ));
        }
        Ok(())
    }

    /// Query-string pairs for `getAttendance`.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("branch", self.branch.as_str()),
            ("className", self.class_name.as_str()),
            ("subject", self.subject.as_str()),
        ];
        if let Some(date) = &self.date {
            pairs.push(("attendanceDate", date.as_str()));
        }
        pairs
    }
}
