//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and reads the session through
//! the `SessionHandle` context. Access control lives in `Guarded`, not here.

pub mod admin;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod profile_setup;
pub mod register;
pub mod verify_email;
