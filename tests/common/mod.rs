//! In-memory `FacultyApi` used by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rollcall::api::{FacultyApi, LoginReply};
use rollcall::error::{AppError, Result};
use rollcall::models::{
    AttendanceRecord, AttendanceSheet, AttendanceStatus, Credentials, FacultyProfile,
    FacultySelection, NewStudent, QueryKey, SelectionScope, SelectionSet, Session,
    StudentRecord, StudentUpdate,
};

/// How a scripted failure should look.
#[derive(Debug, Clone)]
pub enum Fault {
    /// Non-2xx with a `message` body
    Server(u16, &'static str),
    /// Non-2xx without a usable body
    Status(u16),
}

impl Fault {
    fn into_error(self) -> AppError {
        match self {
            Fault::Server(status, message) => AppError::server(status, message),
            Fault::Status(status) => AppError::Status { status },
        }
    }
}

#[derive(Default)]
struct State {
    students: Vec<StudentRecord>,
    attendance: Vec<AttendanceRecord>,
    selection: SelectionSet,
    calls: Vec<String>,
    faults: HashMap<&'static str, Fault>,
    sheets: Vec<AttendanceSheet>,
    enrolled: Vec<NewStudent>,
}

#[derive(Default)]
pub struct FakeApi {
    state: Mutex<State>,
}

pub fn student(usn: &str, name: &str) -> StudentRecord {
    StudentRecord {
        usn: usn.to_string(),
        name: name.to_string(),
        is_lateral_entry: false,
        branch: String::new(),
        class_name: String::new(),
    }
}

pub fn record(id: &str, usn: &str, name: &str, status: AttendanceStatus) -> AttendanceRecord {
    AttendanceRecord {
        id: id.to_string(),
        usn: usn.to_string(),
        name: name.to_string(),
        status,
    }
}

pub fn session() -> Session {
    Session::new("test-token", "prof")
}

pub fn dbms() -> QueryKey {
    QueryKey::new("CSE", "A", "DBMS")
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_students(students: Vec<StudentRecord>) -> Arc<Self> {
        let api = Self::default();
        api.state.lock().unwrap().students = students;
        Arc::new(api)
    }

    pub fn with_attendance(records: Vec<AttendanceRecord>) -> Arc<Self> {
        let api = Self::default();
        api.state.lock().unwrap().attendance = records;
        Arc::new(api)
    }

    pub fn set_selection_set(&self, set: SelectionSet) {
        self.state.lock().unwrap().selection = set;
    }

    /// Make every later call to `endpoint` fail.
    pub fn fail(&self, endpoint: &'static str, fault: Fault) {
        self.state.lock().unwrap().faults.insert(endpoint, fault);
    }

    pub fn heal(&self, endpoint: &'static str) {
        self.state.lock().unwrap().faults.remove(endpoint);
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| *c == endpoint)
            .count()
    }

    pub fn sheets(&self) -> Vec<AttendanceSheet> {
        self.state.lock().unwrap().sheets.clone()
    }

    pub fn enrolled(&self) -> Vec<NewStudent> {
        self.state.lock().unwrap().enrolled.clone()
    }

    pub fn students(&self) -> Vec<StudentRecord> {
        self.state.lock().unwrap().students.clone()
    }

    fn enter(&self, endpoint: &'static str) -> Result<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(endpoint.to_string());
        match state.faults.get(endpoint) {
            Some(fault) => Err(fault.clone().into_error()),
            None => Ok(state),
        }
    }
}

#[async_trait]
impl FacultyApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginReply> {
        self.enter("login")?;
        if credentials.password != "secret" {
            return Err(AppError::server(400, "Invalid username or password"));
        }
        Ok(LoginReply {
            token: format!("token-for-{}", credentials.username),
            message: "Login successful".to_string(),
        })
    }

    async fn view_profile(&self, _session: &Session) -> Result<FacultyProfile> {
        self.enter("viewProfile")?;
        Ok(FacultyProfile {
            name: "Dr. Rao".to_string(),
            username: "prof".to_string(),
            branch: "CSE".to_string(),
            subject: serde_json::json!(["DBMS"]),
        })
    }

    async fn get_selection(
        &self,
        _session: &Session,
        scope: SelectionScope,
    ) -> Result<SelectionSet> {
        let state = self.enter(scope.path())?;
        Ok(state.selection.clone())
    }

    async fn set_selection(
        &self,
        _session: &Session,
        _selection: &FacultySelection,
    ) -> Result<String> {
        self.enter("setSelection")?;
        Ok("Selection saved".to_string())
    }

    async fn add_student(&self, _session: &Session, student: &NewStudent) -> Result<String> {
        let mut state = self.enter("addStudent")?;
        if state.students.iter().any(|s| s.usn == student.usn) {
            return Err(AppError::server(
                400,
                format!("Student with USN {} already exists", student.usn),
            ));
        }
        state.enrolled.push(student.clone());
        state.students.push(StudentRecord {
            usn: student.usn.clone(),
            name: student.name.clone(),
            is_lateral_entry: student.is_lateral_entry,
            branch: student.branch.clone(),
            class_name: student.class_name.clone(),
        });
        Ok("Student added".to_string())
    }

    async fn get_students(&self, _session: &Session, _key: &QueryKey) -> Result<Vec<StudentRecord>> {
        let state = self.enter("getStudents")?;
        Ok(state.students.clone())
    }

    async fn update_student(
        &self,
        _session: &Session,
        update: &StudentUpdate<'_>,
    ) -> Result<String> {
        let mut state = self.enter("updateStudent")?;
        match state.students.iter_mut().find(|s| s.usn == update.usn) {
            Some(s) => {
                s.name = update.name.to_string();
                Ok("Student updated".to_string())
            }
            None => Err(AppError::server(404, "Student not found")),
        }
    }

    async fn delete_student(&self, _session: &Session, usn: &str) -> Result<String> {
        let mut state = self.enter("deleteStudent")?;
        let before = state.students.len();
        state.students.retain(|s| s.usn != usn);
        if state.students.len() == before {
            return Err(AppError::server(404, "Student not found"));
        }
        Ok("Student deleted".to_string())
    }

    async fn mark_attendance(
        &self,
        _session: &Session,
        sheet: &AttendanceSheet,
    ) -> Result<String> {
        let mut state = self.enter("markAttendance")?;
        state.sheets.push(sheet.clone());
        Ok("Attendance marked successfully".to_string())
    }

    async fn get_attendance(
        &self,
        _session: &Session,
        _key: &QueryKey,
    ) -> Result<Vec<AttendanceRecord>> {
        let state = self.enter("getAttendance")?;
        Ok(state.attendance.clone())
    }

    async fn update_attendance(
        &self,
        _session: &Session,
        record_id: &str,
        status: AttendanceStatus,
    ) -> Result<String> {
        let mut state = self.enter("updateAttendance")?;
        match state.attendance.iter_mut().find(|r| r.id == record_id) {
            Some(r) => {
                r.status = status;
                Ok("Attendance updated".to_string())
            }
            None => Err(AppError::server(404, "Attendance record not found")),
        }
    }
}
