//! Outbound adapters implementing the domain's driven ports.
//!
//! - **persistence**: PostgreSQL read repositories using Diesel
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod persistence;
