// src/services/attendance.rs

//! Attendance review: fetch one date's records and correct single statuses.

use std::sync::Arc;

use crate::api::FacultyApi;
use crate::error::Result;
use crate::models::{AttendanceRecord, AttendanceStatus, QueryKey, Session};
use crate::services::roster::Roster;

/// Attendance records for one branch/class/subject/date.
pub struct AttendanceRoster<A> {
    api: Arc<A>,
    session: Session,
    roster: Roster<AttendanceRecord>,
}

impl<A: FacultyApi> AttendanceRoster<A> {
    pub fn new(api: Arc<A>, session: Session) -> Result<Self> {
        session.bearer()?;
        Ok(Self {
            api,
            session,
            roster: Roster::new(),
        })
    }

    pub fn records(&self) -> &[AttendanceRecord] {
        self.roster.records()
    }

    pub fn last_query(&self) -> Option<&QueryKey> {
        self.roster.last_query()
    }

    pub fn filter(&self, term: &str) -> Vec<&AttendanceRecord> {
        self.roster.filter(term)
    }

    /// Fetch the records for `key`; the key must carry a date.
    pub async fn fetch(&mut self, key: QueryKey) -> Result<&[AttendanceRecord]> {
        let api = &self.api;
        let session = &self.session;
        let count = self
            .roster
            .sync(key, true, |key| async move { api.get_attendance(session, &key).await })
            .await?;
        if count == 0 {
            log::info!("No attendance records found for the selected date.");
        }
        Ok(self.roster.records())
    }

    /// Change one record's status on the server, then re-fetch.
    ///
    /// `status` must be `present` or `absent`; anything else is rejected
    /// before a request is made, as is a call before any fetch. No row is
    /// changed locally.
    pub async fn set_status(&mut self, record_id: &str, status: &str) -> Result<String> {
        self.roster.require_query()?;
        let status: AttendanceStatus = status.parse()?;

        let message = self
            .api
            .update_attendance(&self.session, record_id, status)
            .await
            .inspect_err(|e| log::warn!("Status update of {record_id} failed: {e}"))?;
        log::info!("Attendance {record_id} set to {status}");

        let api = &self.api;
        let session = &self.session;
        self.roster
            .reconcile(true, |key| async move { api.get_attendance(session, &key).await })
            .await?;
        Ok(message)
    }
}
