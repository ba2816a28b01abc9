//! Bypass cache for recently authenticated client/user pairs.
//!
//! A pair that completed the second factor is remembered with the time of that
//! success. While the configured window has not elapsed, `begin` accepts the
//! pair again without calling the verification API.
//!
//! Eviction is lazy: an expired record is dropped when it is probed. Long-running
//! hosts can additionally run [`BypassCache::spawn_sweeper`] so pairs that never
//! come back do not accumulate.
//!
//! Concurrency: records live in a sharded `DashMap`. Insert-if-absent goes
//! through the entry API and expiry uses a conditional remove, so every
//! operation on one key is atomic without any lock held by the caller.

use dashmap::{DashMap, mapref::entry::Entry};
use std::{
    sync::{Arc, Weak},
    time::Duration,
};
use tokio::{
    task::JoinHandle,
    time::{Instant, interval},
};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ClientKey {
    remote_host: String,
    user_name: String,
}

impl ClientKey {
    // A missing client identity can be neither cached nor trusted.
    fn new(remote_host: &str, user_name: &str) -> Option<Self> {
        if remote_host.trim().is_empty() {
            return None;
        }
        Some(Self {
            remote_host: remote_host.to_string(),
            user_name: user_name.to_string(),
        })
    }
}

fn is_live(authenticated_at: Instant, window: Duration, now: Instant) -> bool {
    now.saturating_duration_since(authenticated_at) <= window
}

#[derive(Debug, Default)]
pub struct BypassCache {
    records: DashMap<ClientKey, Instant>,
}

impl BypassCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the pair authenticated no longer than `window` ago.
    ///
    /// An expired record is removed on the way out. An empty `remote_host`
    /// never matches.
    #[must_use]
    pub fn probe(&self, remote_host: &str, user_name: &str, window: Duration) -> bool {
        self.probe_at(remote_host, user_name, window, Instant::now())
    }

    #[must_use]
    pub fn probe_at(
        &self,
        remote_host: &str,
        user_name: &str,
        window: Duration,
        now: Instant,
    ) -> bool {
        let Some(key) = ClientKey::new(remote_host, user_name) else {
            return false;
        };

        // Copy the timestamp out so the shard guard is released before removal.
        let Some(authenticated_at) = self.records.get(&key).map(|record| *record.value()) else {
            return false;
        };

        if is_live(authenticated_at, window, now) {
            return true;
        }

        if self
            .records
            .remove_if(&key, |_, at| !is_live(*at, window, now))
            .is_some()
        {
            debug!(
                remote_host = %key.remote_host,
                user = %key.user_name,
                "bypass record expired"
            );
        }

        false
    }

    /// Remember a successful authentication unless the pair is already recorded.
    ///
    /// Returns `true` when a new record was inserted. The first success anchors
    /// the window; later ones do not extend it. Empty `remote_host` is a no-op.
    pub fn record(&self, remote_host: &str, user_name: &str) -> bool {
        self.record_at(remote_host, user_name, Instant::now())
    }

    pub fn record_at(&self, remote_host: &str, user_name: &str, now: Instant) -> bool {
        let Some(key) = ClientKey::new(remote_host, user_name) else {
            return false;
        };

        match self.records.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(now);
                true
            }
        }
    }

    /// When the pair last anchored a bypass window, if it is recorded.
    #[must_use]
    pub fn authenticated_at(&self, remote_host: &str, user_name: &str) -> Option<Instant> {
        let key = ClientKey::new(remote_host, user_name)?;
        self.records.get(&key).map(|record| *record.value())
    }

    /// Drop every record older than `window`, returning how many were removed.
    pub fn purge_expired(&self, window: Duration) -> usize {
        self.purge_expired_at(window, Instant::now())
    }

    pub fn purge_expired_at(&self, window: Duration, now: Instant) -> usize {
        let mut purged = 0;
        self.records.retain(|_, at| {
            let live = is_live(*at, window, now);
            if !live {
                purged += 1;
            }
            live
        });
        purged
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Periodically purge expired records.
    ///
    /// The task holds a weak reference and stops once the cache is dropped;
    /// abort the handle to stop it earlier.
    #[must_use]
    pub fn spawn_sweeper(cache: &Arc<Self>, window: Duration, every: Duration) -> JoinHandle<()> {
        let cache: Weak<Self> = Arc::downgrade(cache);
        let mut ticker = interval(every.max(Duration::from_secs(1)));

        tokio::spawn(async move {
            loop {
                ticker.tick().await;

                let Some(cache) = cache.upgrade() else {
                    debug!("bypass cache dropped, stopping sweeper");
                    return;
                };

                let purged = cache.purge_expired(window);
                if purged > 0 {
                    debug!("purged {} expired bypass records", purged);
                }
            }
        })
    }
}
