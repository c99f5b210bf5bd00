//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate token parsing and browser storage from state and
//! component logic to improve reuse and testability.

pub mod claims;
pub mod storage;
