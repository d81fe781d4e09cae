//! rollcall CLI
//!
//! Faculty front end for the attendance tracker: each dashboard page is a
//! subcommand.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rollcall::{
    api::HttpFacultyApi,
    config::Config,
    error::AppError,
    models::{
        AttendanceRecord, AttendanceStatus, Credentials, FacultySelection, NewStudent, QueryKey,
        SelectionScope, Session, StudentDraft, StudentRecord,
    },
    services::{
        AttendanceMarker, AttendanceRoster, DeleteOutcome, FacultyAccount, SelectionProvider,
        StudentRoster,
    },
    storage::SessionFile,
};

/// rollcall - Faculty Roster & Attendance Client
#[derive(Parser, Debug)]
#[command(name = "rollcall", version, about = "Faculty roster and attendance client")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "rollcall.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

/// Branch/class/subject selection shared by the roster pages.
#[derive(clap::Args, Debug)]
struct Scope {
    #[arg(long)]
    branch: String,

    #[arg(long = "class")]
    class_name: String,

    #[arg(long)]
    subject: String,
}

impl Scope {
    fn key(&self) -> QueryKey {
        QueryKey::new(&self.branch, &self.class_name, &self.subject)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session
    Login {
        #[arg(short, long)]
        username: String,

        /// Read from stdin when omitted
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the faculty profile
    Profile,

    /// List configured branches, classes, subjects and dates
    Selections {
        /// Show enrollment options (with dates) instead of roster filters
        #[arg(long)]
        enrollment: bool,
    },

    /// Save the faculty selection
    SetSelection {
        #[arg(long)]
        branch: String,

        #[arg(long = "class")]
        class_name: String,

        /// Repeat for several subjects
        #[arg(long = "subject", required = true)]
        subjects: Vec<String>,

        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,
    },

    /// Enroll a student
    AddStudent {
        #[arg(long)]
        name: String,

        #[arg(long)]
        usn: String,

        /// Student joined through lateral entry
        #[arg(long)]
        lateral: bool,

        #[arg(long)]
        branch: String,

        #[arg(long = "class")]
        class_name: String,

        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// List, search, rename or delete students
    ViewStudents {
        #[command(flatten)]
        scope: Scope,

        /// Filter by USN or name
        #[arg(long, default_value = "")]
        search: String,

        /// USN of the student to rename (needs --name)
        #[arg(long, requires = "name")]
        edit: Option<String>,

        /// New name for --edit
        #[arg(long)]
        name: Option<String>,

        /// USN of the student to delete
        #[arg(long, conflicts_with = "edit")]
        delete: Option<String>,

        /// Skip the delete confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Review one date's attendance and correct single records
    UpdateAttendance {
        #[command(flatten)]
        scope: Scope,

        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,

        /// Filter by USN or name
        #[arg(long, default_value = "")]
        search: String,

        /// Record update as ID=STATUS (present|absent)
        #[arg(long)]
        set: Option<String>,
    },

    /// Mark attendance for a whole class (everyone present by default)
    MarkAttendance {
        #[command(flatten)]
        scope: Scope,

        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,

        /// USNs to mark absent
        #[arg(long, num_args = 1..)]
        absent: Vec<String>,

        /// Submit without asking
        #[arg(long)]
        yes: bool,
    },

    /// Validate the configuration file
    Validate,
}

/// An error plus the generic message shown when it has no better one.
struct Failure {
    error: AppError,
    fallback: &'static str,
}

impl From<AppError> for Failure {
    fn from(error: AppError) -> Self {
        Self {
            error,
            fallback: "Something went wrong. Please try again.",
        }
    }
}

trait OrSay<T> {
    fn or_say(self, fallback: &'static str) -> Result<T, Failure>;
}

impl<T> OrSay<T> for rollcall::error::Result<T> {
    fn or_say(self, fallback: &'static str) -> Result<T, Failure> {
        self.map_err(|error| Failure { error, fallback })
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn ask(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn confirm_on_stdin(prompt: &str) -> bool {
    matches!(
        ask(&format!("{prompt} [y/N] ")).map(|a| a.trim().to_lowercase()),
        Ok(answer) if answer == "y" || answer == "yes"
    )
}

fn print_students<'a>(rows: impl IntoIterator<Item = &'a StudentRecord>) {
    let rows: Vec<_> = rows.into_iter().collect();
    if rows.is_empty() {
        println!("No students found.");
        return;
    }
    println!("{:<4} {:<14} {:<30} Lateral", "#", "USN", "Name");
    for (i, s) in rows.iter().enumerate() {
        let lateral = if s.is_lateral_entry { "yes" } else { "no" };
        println!("{:<4} {:<14} {:<30} {}", i + 1, s.usn, s.name, lateral);
    }
}

fn print_attendance<'a>(rows: impl IntoIterator<Item = &'a AttendanceRecord>) {
    let rows: Vec<_> = rows.into_iter().collect();
    if rows.is_empty() {
        println!("No attendance records found for the selected date.");
        return;
    }
    println!("{:<26} {:<14} {:<30} Status", "ID", "USN", "Name");
    for r in rows {
        println!("{:<26} {:<14} {:<30} {}", r.id, r.usn, r.name, r.status);
    }
}

async fn run(cli: Cli, config: Config) -> Result<(), Failure> {
    let sessions = SessionFile::new(&config.session.file);
    let api = Arc::new(HttpFacultyApi::new(&config.api)?);
    let account = FacultyAccount::new(Arc::clone(&api));

    let stored = &sessions;
    let session = move || async move {
        stored
            .require()
            .await
            .or_say("You are not authorized. Please log in.")
    };

    match cli.command {
        Command::Login { username, password } => {
            let password = match password {
                Some(p) => p,
                None => ask("Password: ").map_err(AppError::from)?,
            };
            let (session, message) = account
                .login(&Credentials::new(username, password))
                .await
                .or_say("Login failed. Please try again.")?;
            sessions.save(&session).await?;
            if !message.is_empty() {
                println!("{message}");
            }
            log::info!("Session stored in {}", sessions.path().display());
        }

        Command::Logout => {
            sessions.clear().await?;
            println!("Logged out.");
        }

        Command::Profile => {
            let profile = account
                .profile(&session().await?)
                .await
                .or_say("Error fetching profile data.")?;
            println!("Name:     {}", profile.name);
            println!("Username: {}", profile.username);
            println!("Branch:   {}", profile.branch);
            println!("Subject:  {}", profile.subject_label());
        }

        Command::Selections { enrollment } => {
            let scope = if enrollment {
                SelectionScope::Enrollment
            } else {
                SelectionScope::Roster
            };
            let mut provider = SelectionProvider::new(Arc::clone(&api));
            let set = provider
                .load(&session().await?, scope)
                .await
                .or_say("Error fetching selections.")?;
            println!("Branches: {}", set.branches.join(", "));
            println!("Classes:  {}", set.classes.join(", "));
            match scope {
                SelectionScope::Roster => println!("Subjects: {}", set.subjects.join(", ")),
                SelectionScope::Enrollment => println!("Dates:    {}", set.dates.join(", ")),
            }
        }

        Command::SetSelection {
            branch,
            class_name,
            subjects,
            date,
        } => {
            let mut selection = FacultySelection::new(branch, class_name, format_date(date));
            for subject in subjects {
                selection.add_subject(subject);
            }
            let message = account
                .set_selection(&session().await?, &selection)
                .await
                .or_say("Error setting faculty selection.")?;
            println!("{message}");
        }

        Command::AddStudent {
            name,
            usn,
            lateral,
            branch,
            class_name,
            date,
        } => {
            let student = NewStudent {
                name,
                usn,
                is_lateral_entry: lateral,
                branch,
                class_name,
                date: date.map(format_date).unwrap_or_default(),
            };
            account
                .add_student(&session().await?, &student)
                .await
                .or_say("Error submitting student data.")?;
            println!("Student added successfully.");
        }

        Command::ViewStudents {
            scope,
            search,
            edit,
            name,
            delete,
            yes,
        } => {
            let session = session().await?;
            warn_unknown_scope(&api, &session, &scope).await;

            let mut roster = StudentRoster::new(Arc::clone(&api), session)?;
            roster
                .fetch(scope.key())
                .await
                .or_say("Error fetching students.")?;

            if let (Some(usn), Some(name)) = (edit, name) {
                roster.begin_edit(&usn)?;
                roster
                    .commit_edit(StudentDraft { name })
                    .await
                    .or_say("Error updating student.")?;
                println!("Student updated successfully.");
            }

            if let Some(usn) = delete {
                let confirm = |prompt: &str| yes || confirm_on_stdin(prompt);
                match roster
                    .delete(&usn, &confirm)
                    .await
                    .or_say("Error deleting student.")?
                {
                    DeleteOutcome::Deleted(_) => println!("Student deleted successfully."),
                    DeleteOutcome::Declined => println!("Delete cancelled."),
                }
            }

            print_students(roster.filter(&search));
        }

        Command::UpdateAttendance {
            scope,
            date,
            search,
            set,
        } => {
            let mut roster = AttendanceRoster::new(Arc::clone(&api), session().await?)?;
            roster
                .fetch(scope.key().on(format_date(date)))
                .await
                .or_say("No attendance record found.")?;

            if let Some(assignment) = set {
                let (id, status) = assignment.split_once('=').ok_or_else(|| {
                    AppError::validation("Use --set ID=STATUS, e.g. --set 665f1c=absent")
                })?;
                let message = roster
                    .set_status(id.trim(), status.trim())
                    .await
                    .or_say("Error updating attendance.")?;
                println!("{message}");
            }

            print_attendance(roster.filter(&search));
        }

        Command::MarkAttendance {
            scope,
            date,
            absent,
            yes,
        } => {
            let mut marker = AttendanceMarker::new(Arc::clone(&api), session().await?)?;
            marker
                .fetch(scope.key().on(format_date(date)))
                .await
                .or_say("Error fetching students.")?;
            for usn in &absent {
                marker.set_local_status(usn, AttendanceStatus::Absent)?;
            }

            for s in marker.records() {
                let status = marker.status_of(&s.usn).unwrap_or(AttendanceStatus::Present);
                println!("{:<14} {:<30} {}", s.usn, s.name, status);
            }

            let prompt = format!(
                "Submit attendance for {} students on {}?",
                marker.marks().len(),
                marker.date().unwrap_or_default()
            );
            if !yes && !confirm_on_stdin(&prompt) {
                println!("Attendance not submitted.");
                return Ok(());
            }
            let message = marker.confirm().await.or_say("Error marking attendance.")?;
            println!("{message}");
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            config.validate()?;
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}

/// Warn when a chosen filter is not among the faculty's configured options.
async fn warn_unknown_scope(api: &Arc<HttpFacultyApi>, session: &Session, scope: &Scope) {
    let mut provider = SelectionProvider::new(Arc::clone(api));
    let Ok(set) = provider.load(session, SelectionScope::Roster).await else {
        return;
    };
    if !set.contains_branch(&scope.branch) {
        log::warn!("Branch '{}' is not in your selection", scope.branch);
    }
    if !set.contains_class(&scope.class_name) {
        log::warn!("Class '{}' is not in your selection", scope.class_name);
    }
    if !set.contains_subject(&scope.subject) {
        log::warn!("Subject '{}' is not in your selection", scope.subject);
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = cli.config.exists().then(|| Config::load(&cli.config));
    let level = match &loaded {
        Some(Ok(config)) => config.logging.level.clone(),
        _ => "info".to_string(),
    };
    init_logging(cli.verbose, &level);

    let config = match loaded {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log::warn!(
                "Config load failed from {}: {}. Using defaults.",
                cli.config.display(),
                e
            );
            Config::default()
        }
        None => Config::default(),
    };

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure { error, fallback }) => {
            log::debug!("{error:?}");
            eprintln!("{}", error.user_message(fallback));
            ExitCode::FAILURE
        }
    }
}
