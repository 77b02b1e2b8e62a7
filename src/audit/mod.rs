//! Audit trail for Horizon
//!
//! Every create, update and delete of a ledger record or a plan record is
//! appended to `audit.log` as one JSON object per line, with before/after
//! snapshots and a short field-level diff for updates.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
