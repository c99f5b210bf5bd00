//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `ui`) so components depend on small
//! focused models. `reset` carries the hooks that tie them together on
//! logout.

pub mod auth;
pub mod reset;
pub mod ui;
