// src/services/selections.rs

//! Loads the faculty's configured branches, classes, subjects and dates.

use std::sync::Arc;

use crate::api::FacultyApi;
use crate::error::Result;
use crate::models::{SelectionScope, SelectionSet, Session};

pub struct SelectionProvider<A> {
    api: Arc<A>,
    current: Option<SelectionSet>,
}

impl<A: FacultyApi> SelectionProvider<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api, current: None }
    }

    /// Last successfully loaded set.
    pub fn current(&self) -> Option<&SelectionSet> {
        self.current.as_ref()
    }

    /// Fetch the options for `scope`, replacing the held set on success.
    ///
    /// A blank token fails before any request. On failure the previously
    /// held set is kept.
    pub async fn load(&mut self, session: &Session, scope: SelectionScope) -> Result<&SelectionSet> {
        session.bearer()?;
        let set = self
            .api
            .get_selection(session, scope)
            .await
            .inspect_err(|e| log::warn!("Loading selections failed: {e}"))?;
        log::debug!(
            "Loaded {} branches, {} classes, {} subjects, {} dates",
            set.branches.len(),
            set.classes.len(),
            set.subjects.len(),
            set.dates.len()
        );
        Ok(self.current.insert(set))
    }
}
