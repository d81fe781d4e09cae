// src/services/roster.rs

//! Generic roster engine.
//!
//! A [`Roster`] owns the records fetched for one [`QueryKey`], the key they
//! were fetched with, and at most one record under edit. Every fetch goes
//! through [`Roster::sync`]; every successful mutation calls
//! [`Roster::reconcile`], which re-runs the last fetch instead of patching
//! rows locally, so the displayed rows are always what the server returned
//! most recently.

use std::cmp::Ordering;
use std::future::Future;

use crate::error::{AppError, Result};
use crate::models::{QueryKey, RosterEntry};
use crate::utils::collate::{locale_cmp, trailing};

/// Number of trailing identifier characters used as the sort key.
pub const SORT_KEY_LEN: usize = 3;

/// Compare two identifiers by their trailing [`SORT_KEY_LEN`] characters.
pub fn compare_trailing(a: &str, b: &str) -> Ordering {
    locale_cmp(trailing(a, SORT_KEY_LEN), trailing(b, SORT_KEY_LEN))
}

/// Stable sort by trailing identifier; equal keys keep server order.
pub fn sort_by_trailing_id<T: RosterEntry>(records: &mut [T]) {
    records.sort_by(|a, b| compare_trailing(a.identifier(), b.identifier()));
}

/// Case-insensitive substring match on identifier or name.
///
/// An empty term returns every record.
pub fn filter_records<'a, T: RosterEntry>(records: &'a [T], term: &str) -> Vec<&'a T> {
    if term.is_empty() {
        return records.iter().collect();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| {
            r.identifier().to_lowercase().contains(&needle)
                || r.name().to_lowercase().contains(&needle)
        })
        .collect()
}

/// The single inline-edit slot of a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSlot<D> {
    #[default]
    NoSelection,
    Editing {
        id: String,
        draft: D,
    },
}

/// In-memory roster for one query key.
#[derive(Debug, Clone)]
pub struct Roster<T, D = ()> {
    records: Vec<T>,
    last_query: Option<QueryKey>,
    edit: EditSlot<D>,
}

impl<T, D> Default for Roster<T, D> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            last_query: None,
            edit: EditSlot::NoSelection,
        }
    }
}

impl<T: RosterEntry, D> Roster<T, D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in display order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn last_query(&self) -> Option<&QueryKey> {
        self.last_query.as_ref()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.identifier() == id)
    }

    /// Filtered view over the fetched records. Never touches the network.
    pub fn filter(&self, term: &str) -> Vec<&T> {
        filter_records(&self.records, term)
    }

    /// Validate `key`, fetch, and replace the roster with the sorted result.
    ///
    /// On failure the previous records and key are left as they were.
    pub async fn sync<F, Fut>(&mut self, key: QueryKey, needs_date: bool, fetch: F) -> Result<usize>
    where
        F: FnOnce(QueryKey) -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        key.validate(needs_date)?;

        let mut records = fetch(key.clone()).await.inspect_err(|e| {
            log::warn!(
                "Roster fetch failed for {}/{}/{}: {}",
                key.branch,
                key.class_name,
                key.subject,
                e
            );
        })?;
        sort_by_trailing_id(&mut records);

        log::info!(
            "Fetched {} records for {}/{}/{}",
            records.len(),
            key.branch,
            key.class_name,
            key.subject
        );
        self.records = records;
        self.last_query = Some(key);
        Ok(self.records.len())
    }

    /// Re-run the last fetch.
    pub async fn reconcile<F, Fut>(&mut self, needs_date: bool, fetch: F) -> Result<usize>
    where
        F: FnOnce(QueryKey) -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        let key = self.require_query()?.clone();
        self.sync(key, needs_date, fetch).await
    }

    /// The key of the last successful fetch, or a validation error when
    /// nothing has been fetched yet.
    pub fn require_query(&self) -> Result<&QueryKey> {
        self.last_query
            .as_ref()
            .ok_or_else(|| AppError::validation("Nothing to refresh: no roster fetched yet."))
    }

    /// Drop records, key and edit state.
    pub fn clear(&mut self) {
        self.records.clear();
        self.last_query = None;
        self.edit = EditSlot::NoSelection;
    }

    pub fn edit_slot(&self) -> &EditSlot<D> {
        &self.edit
    }

    /// Identifier and draft of the record under edit, if any.
    pub fn editing(&self) -> Option<(&str, &D)> {
        match &self.edit {
            EditSlot::NoSelection => None,
            EditSlot::Editing { id, draft } => Some((id.as_str(), draft)),
        }
    }

    /// Put `id` under edit, replacing whatever was being edited.
    pub fn begin_edit(&mut self, id: &str) -> Result<()>
    where
        D: for<'a> From<&'a T>,
    {
        let record = self.get(id).ok_or_else(|| {
            AppError::validation(format!("No record '{id}' in the current roster."))
        })?;
        self.edit = EditSlot::Editing {
            id: id.to_string(),
            draft: D::from(record),
        };
        Ok(())
    }

    /// Replace the draft of the record under edit. No-op without a selection.
    pub fn set_draft(&mut self, new_draft: D) {
        if let EditSlot::Editing { draft, .. } = &mut self.edit {
            *draft = new_draft;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditSlot::NoSelection;
    }
}
