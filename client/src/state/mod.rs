//! Reactive application state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! Each struct is wrapped in an `RwSignal` by `App` and read with
//! `expect_context`. The structs themselves are plain data so their
//! transitions can be unit-tested without a reactive runtime.

pub mod notifications;
pub mod students;
pub mod ui;
