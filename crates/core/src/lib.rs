//! Domain logic for the print-job queue scheduler.
//!
//! This crate has zero internal deps so it can be used by both the
//! API/repository layer and any future worker or CLI tooling. Everything
//! here is a pure, synchronous computation: pricing, queue classification,
//! priority index arithmetic, and the order state machine. Persistence and
//! transport live in `printdesk-db` and `printdesk-api`.

pub mod admission;
pub mod classify;
pub mod error;
pub mod pricing;
pub mod priority;
pub mod state;
pub mod types;
