//! Storage layer for softball records
//!
//! This module provides a clean abstraction over the SQLite database,
//! organized into logical components:
//! - `models`: Data structures and their update-path validation
//! - `schema`: Database connection and schema management
//! - `queries`: CRUD operations and the per-player / per-game statistic queries

pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use schema::SoftballDatabase;
