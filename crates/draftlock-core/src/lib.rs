//! Draftlock Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types the lock domain and
//! the API server depend on. It contains no infrastructure code.

pub mod clock;
pub mod error;
pub mod policy;
pub mod store;
pub mod token;
