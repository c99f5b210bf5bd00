//! Top-level pages.

pub mod login;
