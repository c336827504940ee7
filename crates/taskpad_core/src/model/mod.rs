//! Domain model for the to-do list core.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, service and UI layers.
//!
//! # Invariants
//! - Every task is identified by a `TaskId` assigned at creation time.
//! - Tasks are value types; mutations produce replacement values.

pub mod task;
