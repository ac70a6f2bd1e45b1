//! Shared test mocks and utilities for the Draftlock service.

mod clock;
mod policy;
mod store;
mod token;

pub use clock::FixedClock;
pub use policy::{AllowAllPolicy, DenyAllPolicy, FailingPolicy};
pub use store::{FailingMetadataStore, InMemoryMetadataStore};
pub use token::SequenceTokenSource;
