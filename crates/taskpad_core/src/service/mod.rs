//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations into the intent handlers the view layer
//!   delegates to.
//! - Keep UI/FFI layers decoupled from sequence ownership details.

pub mod list_service;
