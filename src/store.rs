use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, SystemTime};

use crate::clock::{Clock, SystemClock};

/// Longest TTL honoured as-is; anything beyond is clamped so deadline
/// arithmetic on the wall clock cannot overflow.
pub const MAX_TTL_SECS: u64 = 100 * 365 * 24 * 60 * 60;

/// Result of a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(String),
    Absent,
}

impl Lookup {
    pub fn into_option(self) -> Option<String> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Lookup::Absent)
    }
}

struct Database {
    values: HashMap<String, String>,
    expires_at: HashMap<String, SystemTime>,
}

impl Database {
    fn new() -> Self {
        Database {
            values: HashMap::new(),
            expires_at: HashMap::new(),
        }
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
        self.expires_at.remove(key);
    }

    fn delete_key_if_expired(&mut self, key: &str, now: SystemTime) -> bool {
        match self.expires_at.get(key) {
            Some(t) if *t < now => {
                self.remove(key);
                true
            }
            _ => false,
        }
    }
}

/// In-memory string map with per-key TTL.
///
/// Every operation holds the one lock for its whole duration, so each is
/// atomic with respect to all others. Expiry is lazy: an expired key is
/// only removed when a `read` looks at it.
#[derive(Clone)]
pub struct Store {
    db: Arc<Mutex<Database>>,
    clock: Arc<dyn Clock>,
}

impl Store {
    pub fn new() -> Self {
        Store::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Store {
            db: Arc::new(Mutex::new(Database::new())),
            clock,
        }
    }

    // Every mutation is a complete single-key change, so a guard left behind
    // by a panicking holder still sees consistent maps.
    fn lock(&self) -> MutexGuard<'_, Database> {
        self.db.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Inserts or overwrites `key`. Any TTL on the key is cleared.
    pub fn write(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let mut db = self.lock();
        tracing::trace!(%key, "write");
        db.expires_at.remove(&key);
        db.values.insert(key, value.into());
    }

    /// Returns the value for `key`, evicting it first if its deadline has
    /// passed.
    pub fn read(&self, key: &str) -> Lookup {
        let mut db = self.lock();
        if db.delete_key_if_expired(key, self.clock.now()) {
            tracing::debug!(key, "lazily evicted expired key");
            return Lookup::Absent;
        }
        match db.values.get(key) {
            Some(value) => Lookup::Found(value.clone()),
            None => Lookup::Absent,
        }
    }

    /// Removes `key` and its TTL. Deleting a missing key is a no-op.
    pub fn delete(&self, key: &str) {
        let mut db = self.lock();
        tracing::trace!(key, "delete");
        db.remove(key);
    }

    /// Sets `key` to expire `ttl_seconds` from now. Returns false, and
    /// changes nothing, when the key is not present.
    ///
    /// Zero and negative TTLs are accepted: the key reads as absent from
    /// the next `read` on. A repeated call replaces the earlier deadline.
    pub fn set_expiry(&self, key: &str, ttl_seconds: i64) -> bool {
        let mut db = self.lock();
        if !db.values.contains_key(key) {
            tracing::trace!(key, "set_expiry on missing key");
            return false;
        }
        let deadline = deadline_after(self.clock.now(), ttl_seconds);
        tracing::trace!(key, ttl_seconds, "set_expiry");
        db.expires_at.insert(key.to_owned(), deadline);
        true
    }

    /// Number of resident keys, including expired ones nobody has read yet.
    pub fn len(&self) -> usize {
        self.lock().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of keys carrying a deadline.
    pub fn ttl_entries(&self) -> usize {
        self.lock().expires_at.len()
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new()
    }
}

// A non-positive TTL lands strictly before `now`, so the next read already
// sees the key as expired.
fn deadline_after(now: SystemTime, ttl_seconds: i64) -> SystemTime {
    let span = Duration::from_secs(ttl_seconds.unsigned_abs().min(MAX_TTL_SECS));
    let deadline = if ttl_seconds > 0 {
        now.checked_add(span)
    } else {
        now.checked_sub(span + Duration::from_nanos(1))
    };
    deadline.unwrap_or(now)
}
