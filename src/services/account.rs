// src/services/account.rs

//! Login, profile, saved selection and student enrollment.

use std::sync::Arc;

use crate::api::FacultyApi;
use crate::error::Result;
use crate::models::{Credentials, FacultyProfile, FacultySelection, NewStudent, Session};

pub struct FacultyAccount<A> {
    api: Arc<A>,
}

impl<A: FacultyApi> FacultyAccount<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Exchange credentials for a session. Returns the server's greeting too.
    pub async fn login(&self, credentials: &Credentials) -> Result<(Session, String)> {
        credentials.validate()?;
        let reply = self.api.login(credentials).await?;
        let session = Session::new(reply.token, credentials.username.trim());
        // An empty token from the server is as good as a failed login.
        session.bearer()?;
        log::info!("Logged in as {}", session.username);
        Ok((session, reply.message))
    }

    pub async fn profile(&self, session: &Session) -> Result<FacultyProfile> {
        session.bearer()?;
        self.api.view_profile(session).await
    }

    pub async fn set_selection(
        &self,
        session: &Session,
        selection: &FacultySelection,
    ) -> Result<String> {
        session.bearer()?;
        selection.validate()?;
        self.api.set_selection(session, selection).await
    }

    pub async fn add_student(&self, session: &Session, student: &NewStudent) -> Result<String> {
        session.bearer()?;
        student.validate()?;
        let message = self.api.add_student(session, student).await?;
        log::info!("Added student {}", student.usn);
        Ok(message)
    }
}
