//! Audit logging module
//!
//! Provides an append-only audit trail for masking runs. Values are recorded
//! only as SHA-256 hashes.

pub mod logger;

pub use logger::{hash_pii_value, AuditLogger};
