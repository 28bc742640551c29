//! Student collection state for the table view.
//!
//! DESIGN
//! ======
//! The collection is the last successful server response and is replaced
//! wholesale on every fetch. A failed fetch keeps the previous rows and only
//! clears the loading flag, so a flaky refresh never blanks the table.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use crate::net::api::ApiError;
use crate::net::types::Student;
use crate::state::notifications::Notification;

/// What the collection area should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollectionView {
    Loading,
    Empty,
    Table { count: usize },
}

#[derive(Clone, Debug)]
pub struct StudentsState {
    pub items: Vec<Student>,
    /// True until the first fetch settles. Later refreshes keep rows visible.
    pub fetching: bool,
}

impl Default for StudentsState {
    fn default() -> Self {
        Self { items: Vec::new(), fetching: true }
    }
}

impl StudentsState {
    pub fn view(&self) -> CollectionView {
        if self.fetching {
            CollectionView::Loading
        } else if self.items.is_empty() {
            CollectionView::Empty
        } else {
            CollectionView::Table { count: self.items.len() }
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn find(&self, id: i64) -> Option<&Student> {
        self.items.iter().find(|s| s.id == id)
    }

    /// Settle a fetch. Returns the notification to show on failure.
    pub fn apply_fetch(&mut self, result: Result<Vec<Student>, ApiError>) -> Option<Notification> {
        self.fetching = false;
        match result {
            Ok(items) => {
                self.items = items;
                None
            }
            Err(err) => Some(Notification::api_failure(&err)),
        }
    }
}
