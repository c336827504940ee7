//! View-layer collaborator contracts.
//!
//! # Responsibility
//! - Define the in-process callback surfaces the core calls out through:
//!   confirmation dialogs, dismissible notices and list rendering.
//!
//! # Invariants
//! - The core never talks to platform UI directly; embedders implement
//!   these traits, keeping store/service logic testable without a UI
//!   harness.

pub mod confirm;
pub mod notice;
pub mod render;
