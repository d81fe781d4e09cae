// src/models/mod.rs

//! Domain models for the roster client.
//!
//! Field names follow the backend's JSON via serde renames; Rust-side names
//! are snake_case.

mod attendance;
mod profile;
mod query;
mod selection;
mod session;
mod student;

// Re-export all public types
pub use attendance::{AttendanceRecord, AttendanceSheet, AttendanceStatus};
pub use profile::FacultyProfile;
pub use query::QueryKey;
pub use selection::{FacultySelection, SelectionScope, SelectionSet};
pub use session::{Credentials, Session};
pub(crate) use session::NOT_AUTHORIZED;
pub use student::{NewStudent, StudentDraft, StudentRecord, StudentUpdate};

/// A row that can live in a roster: keyed by USN, searchable by name.
pub trait RosterEntry {
    fn identifier(&self) -> &str;
    fn name(&self) -> &str;
}
