//! Audit logging system for NexTrack
//!
//! Every mutation of the stores (a transaction recorded or imported, a budget
//! created, all data cleared) is appended to `audit.log` as one JSON line.
//!
//! - `AuditEntry`: timestamp, operation, entity information and the created
//!   entity's JSON.
//! - `AuditLogger`: appends entries and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
