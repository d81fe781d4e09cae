// src/services/students.rs

//! Student roster: fetch, search, inline rename and delete.

use std::sync::Arc;

use crate::api::FacultyApi;
use crate::error::{AppError, Result};
use crate::models::{QueryKey, Session, StudentDraft, StudentRecord, StudentUpdate};
use crate::services::roster::Roster;
use crate::services::{Confirm, DeleteOutcome};

const DELETE_PROMPT: &str = "Are you sure you want to delete this student?";

/// Students for one branch/class/subject, kept in step with the server.
pub struct StudentRoster<A> {
    api: Arc<A>,
    session: Session,
    roster: Roster<StudentRecord, StudentDraft>,
}

impl<A: FacultyApi> StudentRoster<A> {
    /// Bind a roster to an authenticated session.
    pub fn new(api: Arc<A>, session: Session) -> Result<Self> {
        session.bearer()?;
        Ok(Self {
            api,
            session,
            roster: Roster::new(),
        })
    }

    pub fn roster(&self) -> &Roster<StudentRecord, StudentDraft> {
        &self.roster
    }

    pub fn records(&self) -> &[StudentRecord] {
        self.roster.records()
    }

    pub fn filter(&self, term: &str) -> Vec<&StudentRecord> {
        self.roster.filter(term)
    }

    /// Fetch the students for `key`, replacing the current roster.
    pub async fn fetch(&mut self, key: QueryKey) -> Result<&[StudentRecord]> {
        let api = &self.api;
        let session = &self.session;
        self.roster
            .sync(key, false, |key| async move { api.get_students(session, &key).await })
            .await?;
        Ok(self.roster.records())
    }

    async fn reconcile(&mut self) -> Result<usize> {
        let api = &self.api;
        let session = &self.session;
        self.roster
            .reconcile(false, |key| async move { api.get_students(session, &key).await })
            .await
    }

    /// Select `usn` for inline editing. Replaces any other selection.
    pub fn begin_edit(&mut self, usn: &str) -> Result<()> {
        self.roster.begin_edit(usn)
    }

    pub fn cancel_edit(&mut self) {
        self.roster.cancel_edit();
    }

    pub fn editing(&self) -> Option<(&str, &StudentDraft)> {
        self.roster.editing()
    }

    /// Send `draft` for the selected student, then re-fetch.
    ///
    /// On failure the selection stays in place holding `draft`, so the
    /// same edit can be retried.
    pub async fn commit_edit(&mut self, draft: StudentDraft) -> Result<String> {
        let usn = match self.roster.editing() {
            Some((usn, _)) => usn.to_string(),
            None => return Err(AppError::validation("No student selected for update.")),
        };
        let name = draft.name.trim();
        if name.is_empty() {
            self.roster.set_draft(draft);
            return Err(AppError::validation("Student name cannot be empty."));
        }

        let update = StudentUpdate { usn: &usn, name };
        match self.api.update_student(&self.session, &update).await {
            Ok(message) => {
                log::info!("Updated student {usn}");
                self.roster.cancel_edit();
                self.reconcile().await?;
                Ok(message)
            }
            Err(e) => {
                log::warn!("Update of student {usn} failed: {e}");
                self.roster.set_draft(draft);
                Err(e)
            }
        }
    }

    /// Delete `usn` after confirmation, then re-fetch.
    ///
    /// Declining sends nothing. A failed delete leaves the roster as is.
    pub async fn delete(&mut self, usn: &str, confirm: &impl Confirm) -> Result<DeleteOutcome> {
        self.roster.require_query()?;
        if !confirm.confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Declined);
        }

        let message = self
            .api
            .delete_student(&self.session, usn)
            .await
            .inspect_err(|e| log::warn!("Delete of student {usn} failed: {e}"))?;
        log::info!("Deleted student {usn}");

        if self.roster.editing().is_some_and(|(id, _)| id == usn) {
            self.roster.cancel_edit();
        }
        self.reconcile().await?;
        Ok(DeleteOutcome::Deleted(message))
    }
}
