//! Canonical task sequence ownership.
//!
//! # Responsibility
//! - Hold the single source of truth for the ordered task list.
//! - Provide the four mutation operations as pure sequence transformations.
//!
//! # Invariants
//! - Mutations replace the sequence wholesale; untouched tasks keep their
//!   relative order and values.
//! - The store never panics and never reports missing IDs as errors.

pub mod id_source;
pub mod task_store;
