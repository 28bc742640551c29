//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, mutations) and
//! delegates rendering details to `components`.

pub mod students;
