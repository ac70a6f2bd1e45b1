//! Draftlock — advisory edit-lock domain.
//!
//! A lock is a single string-valued metadata field on a document recording
//! which principal is editing it and since when. Locks are advisory: a claim
//! always succeeds and the most recent claim wins. Staleness is evaluated
//! lazily at read time; expired locks are reported as unlocked but are never
//! proactively deleted.

pub mod record;
pub mod service;
pub mod view;

pub use record::{EDIT_LOCK_KEY, LockRecord};
pub use view::{LockConfig, LockView};
