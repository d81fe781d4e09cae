//! Local persistence.
//!
//! The only state kept between runs is the login session:
//!
//! ```text
//! .rollcall/
//! └── session.json   # token, username, issued_at
//! ```

pub mod session;

pub use session::SessionFile;
