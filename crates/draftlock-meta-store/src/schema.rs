//! Metadata store database schema.

/// SQL to create the document metadata table.
pub const CREATE_DOCUMENT_META_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS document_meta (
    document_id UUID NOT NULL,
    meta_key    VARCHAR(255) NOT NULL,
    meta_value  TEXT NOT NULL,
    PRIMARY KEY (document_id, meta_key)
);
";

/// SQL to create the document editors table.
pub const CREATE_DOCUMENT_EDITORS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS document_editors (
    document_id UUID NOT NULL,
    user_id     BIGINT NOT NULL,
    PRIMARY KEY (document_id, user_id)
);
";
