//! Stored lock record and its storage codec.

use chrono::{DateTime, Utc};

use crate::view::LockConfig;

/// Metadata field under which the lock is stored.
pub const EDIT_LOCK_KEY: &str = "edit_lock";

/// A decoded lock record: who claimed the lock and when.
///
/// The stored form is a single colon-packed string, `"{time}:{user}"`. That
/// packing is a storage shortcut over a scalar-only metadata store; it is
/// confined to [`LockRecord::encode`] and [`LockRecord::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockRecord {
    /// Unix timestamp (seconds) when the lock was claimed or refreshed.
    pub time: i64,
    /// Identifier of the locking principal.
    pub user: i64,
}

impl LockRecord {
    /// Serializes the record into its colon-packed storage form.
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{}:{}", self.time, self.user)
    }

    /// Parses a stored value into a record.
    ///
    /// Returns `None` for anything that does not split into two positive
    /// integers. A malformed stored value must read as "no lock" rather than
    /// an error, so that a corrupted field can never block editing.
    #[must_use]
    pub fn decode(raw: &str) -> Option<Self> {
        let (time, user) = raw.split_once(':')?;
        let time: i64 = time.parse().ok()?;
        let user: i64 = user.parse().ok()?;
        if time <= 0 || user <= 0 {
            return None;
        }
        Some(Self { time, user })
    }

    /// Whether the lock is still inside the staleness window at `now`.
    #[must_use]
    pub fn is_live(&self, config: &LockConfig, now: DateTime<Utc>) -> bool {
        self.time > now.timestamp() - config.window.num_seconds()
    }
}
