//! Audit logging for stocklist
//!
//! Records every add, update and removal on the stock list in an
//! append-only JSONL journal next to the storage file.
//!
//! - `AuditEntry`: one change with timestamp, operation, product name and
//!   optional before/after values.
//! - `AuditLogger`: appends entries to the journal and reads them back.
//! - `generate_diff`: human-readable summary of changed fields.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
