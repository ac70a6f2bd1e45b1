//! Context-filtered serialization of lock views.
//!
//! The lock schema declares four fields, each visible in a subset of the
//! response contexts. Responses carry hypermedia links: `self` always, and
//! `author` only while a live lock exists. The author link falls out of the
//! projected view, so it can never disagree with the `locked` flag.

use serde::Deserialize;
use serde_json::{Map, Value, json};
use uuid::Uuid;

use draftlock_lock::LockView;

/// Response-shaping mode controlling which fields are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    /// Default read context.
    #[default]
    View,
    /// Editing context.
    Edit,
    /// Embedded-resource context; anti-forgery tokens are withheld.
    Embed,
}

/// Query parameters accepted by the lock endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ContextQuery {
    /// Requested response context, defaulting to `view`.
    #[serde(default)]
    pub context: Context,
}

/// Per-context visibility of the lock schema's fields.
const FIELD_CONTEXTS: &[(&str, &[Context])] = &[
    ("time", &[Context::View, Context::Edit, Context::Embed]),
    ("nonce", &[Context::View, Context::Edit]),
    ("locked", &[Context::View, Context::Edit, Context::Embed]),
    ("user", &[Context::View, Context::Edit, Context::Embed]),
];

/// Serializes a view down to the fields visible in `context`.
#[must_use]
pub fn lock_fields(view: &LockView, context: Context) -> Map<String, Value> {
    let mut fields = Map::new();

    for (name, contexts) in FIELD_CONTEXTS {
        if !contexts.contains(&context) {
            continue;
        }
        let value = match *name {
            "time" => Value::String(view.time.clone()),
            "nonce" => Value::String(view.nonce.clone()),
            "locked" => Value::Bool(view.locked),
            "user" => Value::Number(view.user.into()),
            _ => continue,
        };
        fields.insert((*name).to_owned(), value);
    }

    fields
}

/// Builds the `_links` member for a lock response.
#[must_use]
pub fn lock_links(view: &LockView, document_id: Uuid) -> Value {
    let mut links = Map::new();

    links.insert(
        "self".to_owned(),
        json!([{ "href": format!("/api/v1/documents/{document_id}/lock") }]),
    );

    if view.locked {
        links.insert(
            "author".to_owned(),
            json!([{
                "href": format!("/api/v1/users/{}", view.user),
                "embeddable": true,
            }]),
        );
    }

    Value::Object(links)
}

/// Assembles the full context-filtered response body with links attached.
#[must_use]
pub fn lock_response(view: &LockView, context: Context, document_id: Uuid) -> Value {
    let mut body = lock_fields(view, context);
    body.insert("_links".to_owned(), lock_links(view, document_id));
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked_view() -> LockView {
        LockView {
            locked: true,
            time: "1700000000".into(),
            user: 7,
            nonce: "abc123".into(),
        }
    }

    fn unlocked_view() -> LockView {
        LockView {
            locked: false,
            time: String::new(),
            user: 0,
            nonce: "abc123".into(),
        }
    }

    #[test]
    fn test_view_context_includes_all_fields() {
        let fields = lock_fields(&locked_view(), Context::View);

        assert_eq!(fields["time"], "1700000000");
        assert_eq!(fields["nonce"], "abc123");
        assert_eq!(fields["locked"], true);
        assert_eq!(fields["user"], 7);
    }

    #[test]
    fn test_embed_context_withholds_nonce() {
        let fields = lock_fields(&locked_view(), Context::Embed);

        assert!(!fields.contains_key("nonce"));
        assert!(fields.contains_key("time"));
        assert!(fields.contains_key("locked"));
        assert!(fields.contains_key("user"));
    }

    #[test]
    fn test_edit_context_includes_nonce() {
        let fields = lock_fields(&locked_view(), Context::Edit);

        assert_eq!(fields["nonce"], "abc123");
    }

    #[test]
    fn test_links_include_author_only_when_locked() {
        let document_id = Uuid::new_v4();

        let links = lock_links(&locked_view(), document_id);
        assert_eq!(
            links["self"][0]["href"],
            format!("/api/v1/documents/{document_id}/lock")
        );
        assert_eq!(links["author"][0]["href"], "/api/v1/users/7");
        assert_eq!(links["author"][0]["embeddable"], true);

        let links = lock_links(&unlocked_view(), document_id);
        assert!(links.get("author").is_none());
    }

    #[test]
    fn test_lock_response_attaches_links() {
        let document_id = Uuid::new_v4();

        let body = lock_response(&locked_view(), Context::View, document_id);

        assert_eq!(body["locked"], true);
        assert!(body["_links"]["self"].is_array());
    }

    #[test]
    fn test_context_deserializes_from_lowercase() {
        let query: ContextQuery = serde_json::from_str(r#"{"context":"embed"}"#).unwrap();

        assert_eq!(query.context, Context::Embed);
    }
}
