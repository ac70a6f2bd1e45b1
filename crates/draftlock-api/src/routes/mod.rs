//! Route modules.

pub mod health;
pub mod lock;
