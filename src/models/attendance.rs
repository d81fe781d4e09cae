// src/models/attendance.rs

//! Attendance records, statuses and the batched marking sheet.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::RosterEntry;

/// Attendance status. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            _ => Err(AppError::validation("Invalid status selected.")),
        }
    }
}

/// One student's attendance on one date, as returned by `getAttendance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "studentUSN")]
    pub usn: String,

    #[serde(rename = "studentName")]
    pub name: String,

    pub status: AttendanceStatus,
}

impl RosterEntry for AttendanceRecord {
    fn identifier(&self) -> &str {
        &self.usn
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Body of `markAttendance`: every student's status for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceSheet {
    pub subject: String,
    pub branch: String,

    #[serde(rename = "className")]
    pub class_name: String,

    #[serde(rename = "attendanceDate")]
    pub date: String,

    #[serde(rename = "attendanceData")]
    pub marks: BTreeMap<String, AttendanceStatus>,
}
