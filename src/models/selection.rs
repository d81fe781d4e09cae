// src/models/selection.rs

//! Faculty-configured branch/class/subject/date options.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Which selection endpoint to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionScope {
    /// Options for roster and attendance filters (`getfacultySelection`)
    Roster,
    /// Options for enrolling a student (`getSelection`)
    Enrollment,
}

impl SelectionScope {
    pub fn path(self) -> &'static str {
        match self {
            Self::Roster => "getfacultySelection",
            Self::Enrollment => "getSelection",
        }
    }
}

/// Snapshot of the options a faculty member may select from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    #[serde(default)]
    pub branches: Vec<String>,

    #[serde(default)]
    pub classes: Vec<String>,

    #[serde(default, alias = "subject")]
    pub subjects: Vec<String>,

    #[serde(default)]
    pub dates: Vec<String>,
}

impl SelectionSet {
    pub fn contains_branch(&self, branch: &str) -> bool {
        self.branches.iter().any(|b| b == branch)
    }

    pub fn contains_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|c| c == class_name)
    }

    pub fn contains_subject(&self, subject: &str) -> bool {
        self.subjects.iter().any(|s| s == subject)
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
            && self.classes.is_empty()
            && self.subjects.is_empty()
            && self.dates.is_empty()
    }
}

/// Selection a faculty member saves for later use (`setSelection`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacultySelection {
    pub branch: String,

    #[serde(rename = "className")]
    pub class_name: String,

    #[serde(rename = "subject")]
    pub subjects: Vec<String>,

    pub date: String,
}

impl FacultySelection {
    pub fn new(
        branch: impl Into<String>,
        class_name: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            branch: branch.into(),
            class_name: class_name.into(),
            subjects: Vec::new(),
            date: date.into(),
        }
    }

    /// Add a subject, ignoring blanks and duplicates.
    ///
    /// Returns whether the subject was added.
    pub fn add_subject(&mut self, subject: impl Into<String>) -> bool {
        let subject = subject.into();
        let subject = subject.trim();
        if subject.is_empty() || self.subjects.iter().any(|s| s == subject) {
            return false;
        }
        self.subjects.push(subject.to_string());
        true
    }

    pub fn validate(&self) -> Result<()> {
        if self.branch.trim().is_empty()
            || self.class_name.trim().is_empty()
            || self.date.trim().is_empty()
        {
            return Err(AppError::validation(
                "Branch, class name and date are required.",
            ));
        }
        if self.subjects.is_empty() {
            return Err(AppError::validation("Add at least one subject."));
        }
        Ok(())
    }
}
