//! Repository implementations for database access
//!
//! Each repository issues single parameterized statements and handles
//! conflicts via DB constraints (no check-then-insert).

pub mod pogs;

pub use pogs::{DbError, NewPog, Pog, PogRepo};
