//! FFI crate exposing the Taskpad core to the mobile UI.

pub mod api;
