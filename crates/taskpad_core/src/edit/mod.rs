//! Inline row editing.
//!
//! # Responsibility
//! - Own the per-row edit-mode state machine and its uncommitted draft.
//!
//! # Invariants
//! - Draft text never touches the committed task until submit.
//! - Each row carries its own controller; rows are independent.

pub mod row_controller;
