//! Service layer containing the audit logic and side-effect helpers.
//!
//! ## Service map
//! - `repo.rs` — repository reader trait + git2 adapter.
//! - `ledger.rs` — accumulating, de-duplicating record of findings.
//! - `baselines.rs` — trunk walk collecting historical merge points.
//! - `ancestry.rs` — feature-branch trace for self-merge detection.
//! - `policy.rs` — point-in-time access-control file resolution.
//! - `audit.rs` — orchestration of both audit phases.
//! - `output.rs` — JSON/text report rendering.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Findings go to the ledger; only operational failures are `Err`.
//! - Keep `main` thin; delegate to services.

pub mod ancestry;
pub mod audit;
pub mod baselines;
pub mod ledger;
pub mod output;
pub mod policy;
pub mod repo;
