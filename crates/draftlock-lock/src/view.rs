//! Response projection of a lock record.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::record::LockRecord;

/// Staleness policy for lock projection.
///
/// The same config instance must drive every place that asks "is this lock
/// live" — the locked flag and the author link must never disagree.
#[derive(Debug, Clone, Copy)]
pub struct LockConfig {
    /// Duration after which an unrenewed lock is reported as unlocked.
    pub window: Duration,
}

impl LockConfig {
    /// Default staleness window, in seconds.
    pub const DEFAULT_WINDOW_SECS: i64 = 150;

    /// Creates a config with a window of `secs` seconds.
    #[must_use]
    pub fn with_window_secs(secs: i64) -> Self {
        Self {
            window: Duration::seconds(secs),
        }
    }
}

impl Default for LockConfig {
    fn default() -> Self {
        Self::with_window_secs(Self::DEFAULT_WINDOW_SECS)
    }
}

/// What a client sees when it asks about a document's lock.
///
/// `time` is a Unix timestamp but serializes as a string; absence of a live
/// lock is an empty `time` and a zero `user`. The `nonce` is freshly
/// generated per response regardless of lock state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockView {
    /// Whether the document currently has a live lock.
    pub locked: bool,
    /// Unix time of the lock, or empty when unlocked.
    pub time: String,
    /// The ID of the principal holding the lock, or zero when unlocked.
    pub user: i64,
    /// Fresh anti-forgery token.
    pub nonce: String,
}

impl LockView {
    /// Projects an optional stored record through the staleness window.
    ///
    /// A missing record and a stale record produce the same unlocked view;
    /// staleness is purely a read-time decision and the stored field is left
    /// in place.
    #[must_use]
    pub fn project(
        record: Option<&LockRecord>,
        config: &LockConfig,
        now: DateTime<Utc>,
        nonce: String,
    ) -> Self {
        match record {
            Some(record) if record.is_live(config, now) => Self {
                locked: true,
                time: record.time.to_string(),
                user: record.user,
                nonce,
            },
            _ => Self {
                locked: false,
                time: String::new(),
                user: 0,
                nonce,
            },
        }
    }
}
