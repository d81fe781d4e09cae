// src/api/mod.rs

//! Remote API seam.
//!
//! [`FacultyApi`] is the only way the services reach the backend.
//! [`HttpFacultyApi`] talks to the real server; tests substitute an
//! in-memory implementation.

mod http;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    AttendanceRecord, AttendanceSheet, AttendanceStatus, Credentials, FacultyProfile,
    FacultySelection, NewStudent, QueryKey, SelectionScope, SelectionSet, Session,
    StudentRecord, StudentUpdate,
};

pub use http::HttpFacultyApi;

/// Successful login reply.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginReply {
    pub token: String,

    #[serde(default)]
    pub message: String,
}

/// Every endpoint the dashboard uses.
///
/// Mutations return the server's `message` field.
#[async_trait]
pub trait FacultyApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply>;

    async fn view_profile(&self, session: &Session) -> Result<FacultyProfile>;

    async fn get_selection(&self, session: &Session, scope: SelectionScope)
    -> Result<SelectionSet>;

    async fn set_selection(&self, session: &Session, selection: &FacultySelection)
    -> Result<String>;

    async fn add_student(&self, session: &Session, student: &NewStudent) -> Result<String>;

    async fn get_students(&self, session: &Session, key: &QueryKey) -> Result<Vec<StudentRecord>>;

    async fn update_student(&self, session: &Session, update: &StudentUpdate<'_>)
    -> Result<String>;

    async fn delete_student(&self, session: &Session, usn: &str) -> Result<String>;

    async fn mark_attendance(&self, session: &Session, sheet: &AttendanceSheet)
    -> Result<String>;

    async fn get_attendance(
        &self,
        session: &Session,
        key: &QueryKey,
    ) -> Result<Vec<AttendanceRecord>>;

    async fn update_attendance(
        &self,
        session: &Session,
        record_id: &str,
        status: AttendanceStatus,
    ) -> Result<String>;
}
