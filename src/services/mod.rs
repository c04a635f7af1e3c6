//! Business logic services.
//!
//! Services sit between HTTP handlers and storage.

pub mod catalog;
pub mod pg_catalog;
