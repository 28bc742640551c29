//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers kept out of components so they can be tested without a
//! browser or a reactive runtime.

pub mod avatar;
pub mod menu;
pub mod pagination;
pub mod student_form;
