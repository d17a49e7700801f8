//! Outbound adapters implementing domain ports.
//!
//! - **persistence**: PostgreSQL-backed product storage via Diesel.
//!
//! Adapters convert between domain types and infrastructure representations
//! and contain no business logic.

pub mod persistence;
