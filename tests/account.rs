mod common;

use rollcall::error::ErrorKind;
use rollcall::models::{Credentials, FacultySelection, NewStudent, SelectionScope, SelectionSet, Session};
use rollcall::services::{FacultyAccount, SelectionProvider};

use common::{FakeApi, Fault, session, student};

#[tokio::test]
async fn login_returns_session_for_username() {
    let api = FakeApi::new();
    let account = FacultyAccount::new(api);

    let (session, message) = account
        .login(&Credentials::new("prof", "secret"))
        .await
        .unwrap();

    assert_eq!(session.token, "token-for-prof");
    assert_eq!(session.username, "prof");
    assert_eq!(message, "Login successful");
}

#[tokio::test]
async fn login_failure_surfaces_server_message() {
    let account = FacultyAccount::new(FakeApi::new());

    let err = account
        .login(&Credentials::new("prof", "wrong"))
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message("Login failed. Please try again."),
        "Invalid username or password"
    );
}

#[tokio::test]
async fn login_with_blank_fields_skips_network() {
    let api = FakeApi::new();
    let account = FacultyAccount::new(api.clone());

    assert!(account.login(&Credentials::new("", "")).await.is_err());
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn duplicate_usn_error_is_shown_verbatim() {
    let api = FakeApi::with_students(vec![student("1AB21CS045", "Asha")]);
    let account = FacultyAccount::new(api.clone());
    let new = NewStudent {
        name: "Another".into(),
        usn: "1AB21CS045".into(),
        branch: "CSE".into(),
        class_name: "A".into(),
        ..NewStudent::default()
    };

    let err = account.add_student(&session(), &new).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ServerReported);
    assert_eq!(
        err.user_message("Error submitting student data."),
        "Student with USN 1AB21CS045 already exists"
    );
    assert!(api.enrolled().is_empty());
}

#[tokio::test]
async fn add_student_sends_selected_scope() {
    let api = FakeApi::new();
    let account = FacultyAccount::new(api.clone());
    let new = NewStudent {
        name: "Meena".into(),
        usn: "1AB21CS077".into(),
        is_lateral_entry: true,
        branch: "CSE".into(),
        class_name: "A".into(),
        date: "2024-05-01".into(),
    };

    account.add_student(&session(), &new).await.unwrap();

    assert_eq!(api.enrolled(), vec![new]);
    assert_eq!(api.students()[0].usn, "1AB21CS077");
}

#[tokio::test]
async fn set_selection_validates_locally() {
    let api = FakeApi::new();
    let account = FacultyAccount::new(api.clone());
    let selection = FacultySelection::new("CSE", "A", "2024-05-01");

    let err = account.set_selection(&session(), &selection).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(api.calls().is_empty());

    let mut selection = selection;
    selection.add_subject("DBMS");
    let message = account.set_selection(&session(), &selection).await.unwrap();
    assert_eq!(message, "Selection saved");
}

#[tokio::test]
async fn profile_needs_token() {
    let api = FakeApi::new();
    let account = FacultyAccount::new(api.clone());

    let err = account.profile(&Session::new("", "prof")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authorization);
    assert!(api.calls().is_empty());

    let profile = account.profile(&session()).await.unwrap();
    assert_eq!(profile.subject_label(), "DBMS");
}

#[tokio::test]
async fn selections_replace_on_success_and_survive_failure() {
    let api = FakeApi::new();
    let first = SelectionSet {
        branches: vec!["CSE".into()],
        classes: vec!["A".into()],
        subjects: vec!["DBMS".into()],
        dates: vec![],
    };
    api.set_selection_set(first.clone());
    let mut provider = SelectionProvider::new(api.clone());

    let loaded = provider.load(&session(), SelectionScope::Roster).await.unwrap();
    assert_eq!(loaded, &first);

    api.fail("getfacultySelection", Fault::Status(500));
    assert!(provider.load(&session(), SelectionScope::Roster).await.is_err());
    assert_eq!(provider.current(), Some(&first));
}

#[tokio::test]
async fn selections_are_idempotent() {
    let api = FakeApi::new();
    api.set_selection_set(SelectionSet {
        branches: vec!["CSE".into(), "ECE".into()],
        ..SelectionSet::default()
    });
    let mut provider = SelectionProvider::new(api.clone());

    let a = provider
        .load(&session(), SelectionScope::Enrollment)
        .await
        .unwrap()
        .clone();
    let b = provider
        .load(&session(), SelectionScope::Enrollment)
        .await
        .unwrap()
        .clone();
    assert_eq!(a, b);
    assert_eq!(api.count("getSelection"), 2);
}

#[tokio::test]
async fn selections_need_token_before_network() {
    let api = FakeApi::new();
    let mut provider = SelectionProvider::new(api.clone());

    let err = provider
        .load(&Session::new(" ", "prof"), SelectionScope::Roster)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authorization);
    assert!(api.calls().is_empty());
    assert!(provider.current().is_none());
}
