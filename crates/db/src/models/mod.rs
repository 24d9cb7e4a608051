//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for creates and patches
//!
//! Config snapshots (`Rates`, `Settings`) live in `printdesk_core::types`
//! because the pricing and classification functions consume them directly;
//! only their update DTOs live here.

pub mod batch;
pub mod config;
pub mod order;
pub mod printer;
