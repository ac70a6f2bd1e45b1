//! Draftlock — `PostgreSQL` persistence.
//!
//! Implements the metadata store and edit policy seams on top of two small
//! tables: `document_meta` (scalar string fields per document) and
//! `document_editors` (which principals may edit which documents).

pub mod pg_edit_policy;
pub mod pg_metadata_store;
pub mod schema;

pub use pg_edit_policy::PgEditPolicy;
pub use pg_metadata_store::PgMetadataStore;
