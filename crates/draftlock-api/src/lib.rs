//! Draftlock — HTTP API for the advisory edit-lock resource.

pub mod error;
pub mod principal;
pub mod response;
pub mod routes;
pub mod state;
