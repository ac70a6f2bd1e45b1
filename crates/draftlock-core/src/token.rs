//! Anti-forgery token abstraction.
//!
//! In production, this wraps a real RNG. In tests, a sequenced
//! implementation is injected so responses are deterministic.

use std::fmt::Write;

use rand::Rng;

/// Abstraction over per-request anti-forgery token generation.
pub trait TokenSource: Send {
    /// Generate a fresh token.
    fn token(&mut self) -> String;
}

/// Production token source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTokenSource;

impl TokenSource for SystemTokenSource {
    fn token(&mut self) -> String {
        let bytes: [u8; 8] = rand::rng().random();
        let mut out = String::with_capacity(16);
        for byte in bytes {
            let _ = write!(out, "{byte:02x}");
        }
        out
    }
}
