//! Test token source — deterministic `TokenSource` implementation.

use draftlock_core::token::TokenSource;

/// A token source that returns queued tokens in order, then falls back to
/// numbered placeholders once the queue is exhausted.
#[derive(Debug, Default)]
pub struct SequenceTokenSource {
    queued: Vec<String>,
    issued: usize,
}

impl SequenceTokenSource {
    /// Creates a source that will yield `tokens` in order.
    #[must_use]
    pub fn new(tokens: Vec<String>) -> Self {
        Self {
            queued: tokens,
            issued: 0,
        }
    }
}

impl TokenSource for SequenceTokenSource {
    fn token(&mut self) -> String {
        let token = self
            .queued
            .get(self.issued)
            .cloned()
            .unwrap_or_else(|| format!("test-nonce-{}", self.issued));
        self.issued += 1;
        token
    }
}
