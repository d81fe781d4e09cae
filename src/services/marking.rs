// src/services/marking.rs

//! Batched attendance marking.
//!
//! After a fetch every student defaults to `present` in a local map. The
//! map is edited without any network traffic and submitted in one request
//! by [`AttendanceMarker::confirm`].

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::FacultyApi;
use crate::error::{AppError, Result};
use crate::models::{AttendanceSheet, AttendanceStatus, QueryKey, Session, StudentRecord};
use crate::services::roster::Roster;

pub struct AttendanceMarker<A> {
    api: Arc<A>,
    session: Session,
    roster: Roster<StudentRecord>,
    date: Option<String>,
    marks: BTreeMap<String, AttendanceStatus>,
}

impl<A: FacultyApi> AttendanceMarker<A> {
    pub fn new(api: Arc<A>, session: Session) -> Result<Self> {
        session.bearer()?;
        Ok(Self {
            api,
            session,
            roster: Roster::new(),
            date: None,
            marks: BTreeMap::new(),
        })
    }

    pub fn records(&self) -> &[StudentRecord] {
        self.roster.records()
    }

    pub fn filter(&self, term: &str) -> Vec<&StudentRecord> {
        self.roster.filter(term)
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = Some(date.into());
    }

    pub fn marks(&self) -> &BTreeMap<String, AttendanceStatus> {
        &self.marks
    }

    pub fn status_of(&self, usn: &str) -> Option<AttendanceStatus> {
        self.marks.get(usn).copied()
    }

    /// Fetch the students for `key` and mark everyone present.
    ///
    /// A date on `key` becomes the attendance date.
    pub async fn fetch(&mut self, key: QueryKey) -> Result<&[StudentRecord]> {
        let date = key.date.clone();
        let api = &self.api;
        let session = &self.session;
        self.roster
            .sync(key, false, |key| async move { api.get_students(session, &key).await })
            .await?;

        self.marks = self
            .roster
            .records()
            .iter()
            .map(|s| (s.usn.clone(), AttendanceStatus::Present))
            .collect();
        if let Some(date) = date {
            self.date = Some(date);
        }
        Ok(self.roster.records())
    }

    /// Change one student's mark locally.
    pub fn set_local_status(&mut self, usn: &str, status: AttendanceStatus) -> Result<()> {
        match self.marks.get_mut(usn) {
            Some(mark) => {
                *mark = status;
                Ok(())
            }
            None => Err(AppError::validation(format!(
                "Student {usn} is not in the fetched roster."
            ))),
        }
    }

    /// Submit every mark in one request.
    ///
    /// Success resets the marker to its initial state; failure keeps the
    /// marks so the submit can be retried as is.
    pub async fn confirm(&mut self) -> Result<String> {
        let date = self.date.as_deref().map(str::trim).unwrap_or_default();
        let key = match self.roster.last_query() {
            Some(key) if !date.is_empty() && !self.marks.is_empty() => key,
            _ => {
                return Err(AppError::validation(
                    "Please select a date and mark attendance for students.",
                ));
            }
        };

        let sheet = AttendanceSheet {
            subject: key.subject.clone(),
            branch: key.branch.clone(),
            class_name: key.class_name.clone(),
            date: date.to_string(),
            marks: self.marks.clone(),
        };
        let message = self
            .api
            .mark_attendance(&self.session, &sheet)
            .await
            .inspect_err(|e| log::warn!("Marking attendance failed: {e}"))?;

        log::info!(
            "Marked attendance for {} students on {}",
            sheet.marks.len(),
            sheet.date
        );
        self.reset();
        Ok(message)
    }

    /// Back to the freshly constructed state.
    pub fn reset(&mut self) {
        self.roster.clear();
        self.date = None;
        self.marks.clear();
    }
}
