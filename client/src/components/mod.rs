//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the admin chrome and the student collection while
//! reading/writing shared state from Leptos context providers.

pub mod avatar;
pub mod confirm_popover;
pub mod notification_stack;
pub mod shell;
pub mod student_drawer_form;
pub mod student_table;
