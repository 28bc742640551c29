//! Local UI chrome state (sider, drawer, confirmations, paging).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the student collection so
//! rendering controls can evolve independently of server data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::menu::DEFAULT_MENU_KEY;
use crate::util::pagination;

/// Confirmable per-row action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowAction {
    Delete,
    Edit,
}

impl RowAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Delete => "Delete",
            Self::Edit => "Edit",
        }
    }

    /// Question shown in the yes/no confirmation popover.
    pub fn prompt(self, name: &str) -> String {
        match self {
            Self::Delete => format!("Are you sure to delete {name}?"),
            Self::Edit => format!("Are you sure to change data for {name}?"),
        }
    }
}

/// The one confirmation popover currently open, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingConfirm {
    pub student_id: i64,
    pub action: RowAction,
}

#[derive(Clone, Debug)]
pub struct UiState {
    pub sider_collapsed: bool,
    pub drawer_open: bool,
    pub selected_menu_key: String,
    pub open_menu_groups: Vec<String>,
    pub pending_confirm: Option<PendingConfirm>,
    /// Zero-based table page.
    pub page: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sider_collapsed: false,
            drawer_open: false,
            selected_menu_key: DEFAULT_MENU_KEY.to_owned(),
            open_menu_groups: Vec::new(),
            pending_confirm: None,
            page: 0,
        }
    }
}

impl UiState {
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Open a confirmation, replacing any other one.
    pub fn request_confirm(&mut self, student_id: i64, action: RowAction) {
        self.pending_confirm = Some(PendingConfirm { student_id, action });
    }

    /// Close the open confirmation and return it if it matched.
    pub fn take_confirm(&mut self, student_id: i64, action: RowAction) -> Option<PendingConfirm> {
        let wanted = PendingConfirm { student_id, action };
        if self.pending_confirm == Some(wanted) {
            self.pending_confirm = None;
            Some(wanted)
        } else {
            None
        }
    }

    pub fn is_confirming(&self, student_id: i64, action: RowAction) -> bool {
        self.pending_confirm == Some(PendingConfirm { student_id, action })
    }

    pub fn toggle_menu_group(&mut self, key: &str) {
        if let Some(pos) = self.open_menu_groups.iter().position(|k| k == key) {
            self.open_menu_groups.remove(pos);
        } else {
            self.open_menu_groups.push(key.to_owned());
        }
    }

    pub fn is_menu_group_open(&self, key: &str) -> bool {
        self.open_menu_groups.iter().any(|k| k == key)
    }

    /// Keep the current page valid after the collection changed size.
    pub fn clamp_page(&mut self, total: usize) {
        self.page = pagination::clamp_page(self.page, total, pagination::PAGE_SIZE);
    }
}
