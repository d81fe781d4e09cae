// src/models/student.rs

//! Student records and the request bodies that create or change them.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::RosterEntry;

/// A student as returned by `getStudents`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "studentUSN")]
    pub usn: String,

    #[serde(rename = "studentName")]
    pub name: String,

    #[serde(rename = "isLateralEntry", default)]
    pub is_lateral_entry: bool,

    #[serde(default)]
    pub branch: String,

    #[serde(rename = "className", default)]
    pub class_name: String,
}

impl RosterEntry for StudentRecord {
    fn identifier(&self) -> &str {
        &self.usn
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Editable fields of a student row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
}

impl From<&StudentRecord> for StudentDraft {
    fn from(record: &StudentRecord) -> Self {
        Self {
            name: record.name.clone(),
        }
    }
}

/// Body of `updateStudent`.
#[derive(Debug, Clone, Serialize)]
pub struct StudentUpdate<'a> {
    #[serde(rename = "studentUSN")]
    pub usn: &'a str,

    #[serde(rename = "studentName")]
    pub name: &'a str,
}

/// Body of `addStudent`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewStudent {
    #[serde(rename = "studentName")]
    pub name: String,

    #[serde(rename = "studentUSN")]
    pub usn: String,

    #[serde(rename = "isLateralEntry")]
    pub is_lateral_entry: bool,

    #[serde(rename = "selectedBranch")]
    pub branch: String,

    #[serde(rename = "selectedClassName")]
    pub class_name: String,

    #[serde(rename = "selectedDate")]
    pub date: String,
}

impl NewStudent {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.usn.trim().is_empty() {
            return Err(AppError::validation("Student name and USN are required."));
        }
        Ok(())
    }
}
