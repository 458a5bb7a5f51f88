//! Reusable UI component modules.

pub mod guarded;
