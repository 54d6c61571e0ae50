//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep the issue vocabulary and report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — issue categories, report structs, exit codes.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no repository or filesystem access.

pub mod models;
