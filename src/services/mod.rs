//! Service layer for the roster client.
//!
//! This module contains the business logic for:
//! - Login, profile and enrollment (`FacultyAccount`)
//! - Filter options (`SelectionProvider`)
//! - The shared fetch/sort/filter/edit engine (`Roster`)
//! - Student roster maintenance (`StudentRoster`)
//! - Attendance review and correction (`AttendanceRoster`)
//! - Batched attendance marking (`AttendanceMarker`)

mod account;
mod attendance;
mod marking;
pub mod roster;
mod selections;
mod students;

pub use account::FacultyAccount;
pub use attendance::AttendanceRoster;
pub use marking::AttendanceMarker;
pub use roster::{EditSlot, Roster};
pub use selections::SelectionProvider;
pub use students::StudentRoster;

/// Interactive yes/no gate in front of destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Result of a delete request that went through confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Server accepted the delete; carries its message
    Deleted(String),
    /// User declined; nothing was sent
    Declined,
}
