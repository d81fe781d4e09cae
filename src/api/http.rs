// src/api/http.rs

//! reqwest-backed [`FacultyApi`].

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::{FacultyApi, LoginReply};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::models::{
    AttendanceRecord, AttendanceSheet, AttendanceStatus, Credentials, FacultyProfile,
    FacultySelection, NewStudent, QueryKey, SelectionScope, SelectionSet, Session,
    StudentRecord, StudentUpdate,
};
use crate::utils::http::{create_async_client, read_json};
use crate::utils::url::{endpoint, endpoint_with_query};

#[derive(Debug, Deserialize)]
struct MessageReply {
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct ProfileReply {
    user: FacultyProfile,
}

#[derive(Debug, Deserialize)]
struct StudentsReply {
    #[serde(default)]
    students: Vec<StudentRecord>,
}

#[derive(Debug, Deserialize)]
struct AttendanceReply {
    #[serde(rename = "attendanceRecords", default)]
    records: Vec<AttendanceRecord>,
}

#[derive(Debug, serde::Serialize)]
struct StatusBody {
    status: AttendanceStatus,
}

#[derive(Debug, serde::Serialize)]
struct DeleteBody<'a> {
    #[serde(rename = "studentUSN")]
    usn: &'a str,
}

/// HTTP client for the attendance tracker backend.
#[derive(Debug, Clone)]
pub struct HttpFacultyApi {
    client: Client,
    base: Url,
}

impl HttpFacultyApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            client: create_async_client(config)?,
            base: Url::parse(&config.base_url)?,
        })
    }

    fn request(
        &self,
        method: Method,
        url: Url,
        session: Option<&Session>,
    ) -> Result<RequestBuilder> {
        log::debug!("{method} {url}");
        let builder = self.client.request(method, url);
        match session {
            Some(session) => Ok(builder.bearer_auth(session.bearer()?)),
            None => Ok(builder),
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        read_json(builder.send().await?).await
    }

    async fn send_message(&self, builder: RequestBuilder) -> Result<String> {
        let reply: MessageReply = self.send(builder).await?;
        Ok(reply.message)
    }
}

#[async_trait]
impl FacultyApi for HttpFacultyApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply> {
        let url = endpoint(&self.base, &["login"])?;
        let builder = self.request(Method::POST, url, None)?.json(credentials);
        self.send(builder).await
    }

    async fn view_profile(&self, session: &Session) -> Result<FacultyProfile> {
        let url = endpoint(&self.base, &["viewProfile"])?;
        let reply: ProfileReply = self.send(self.request(Method::GET, url, Some(session))?).await?;
        Ok(reply.user)
    }

    async fn get_selection(
        &self,
        session: &Session,
        scope: SelectionScope,
    ) -> Result<SelectionSet> {
        let url = endpoint(&self.base, &[scope.path()])?;
        self.send(self.request(Method::GET, url, Some(session))?).await
    }

    async fn set_selection(
        &self,
        session: &Session,
        selection: &FacultySelection,
    ) -> Result<String> {
        let url = endpoint(&self.base, &["setSelection"])?;
        let builder = self.request(Method::POST, url, Some(session))?.json(selection);
        self.send_message(builder).await
    }

    async fn add_student(&self, session: &Session, student: &NewStudent) -> Result<String> {
        let url = endpoint(&self.base, &["addStudent"])?;
        let builder = self.request(Method::POST, url, Some(session))?.json(student);
        self.send_message(builder).await
    }

    async fn get_students(&self, session: &Session, key: &QueryKey) -> Result<Vec<StudentRecord>> {
        let url = endpoint(&self.base, &["getStudents"])?;
        let body = QueryKey {
            date: None,
            ..key.clone()
        };
        let builder = self.request(Method::POST, url, Some(session))?.json(&body);
        let reply: StudentsReply = self.send(builder).await?;
        Ok(reply.students)
    }

    async fn update_student(
        &self,
        session: &Session,
        update: &StudentUpdate<'_>,
    ) -> Result<String> {
        let url = endpoint(&self.base, &["updateStudent"])?;
        let builder = self.request(Method::PUT, url, Some(session))?.json(update);
        self.send_message(builder).await
    }

    async fn delete_student(&self, session: &Session, usn: &str) -> Result<String> {
        let url = endpoint(&self.base, &["deleteStudent"])?;
        let builder = self
            .request(Method::DELETE, url, Some(session))?
            .json(&DeleteBody { usn });
        self.send_message(builder).await
    }

    async fn mark_attendance(
        &self,
        session: &Session,
        sheet: &AttendanceSheet,
    ) -> Result<String> {
        let url = endpoint(&self.base, &["attendance", "markAttendance"])?;
        let builder = self.request(Method::POST, url, Some(session))?.json(sheet);
        self.send_message(builder).await
    }

    async fn get_attendance(
        &self,
        session: &Session,
        key: &QueryKey,
    ) -> Result<Vec<AttendanceRecord>> {
        let url = endpoint_with_query(
            &self.base,
            &["attendance", "getAttendance"],
            &key.query_pairs(),
        )?;
        let reply: AttendanceReply = self.send(self.request(Method::GET, url, Some(session))?).await?;
        Ok(reply.records)
    }

    async fn update_attendance(
        &self,
        session: &Session,
        record_id: &str,
        status: AttendanceStatus,
    ) -> Result<String> {
        let url = endpoint(&self.base, &["attendance", "updateAttendance", record_id])?;
        let builder = self
            .request(Method::PUT, url, Some(session))?
            .json(&StatusBody { status });
        self.send_message(builder).await
    }
}
