use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct CachedWallet {
    wallet: String,
    fetched_at: Instant,
}

/// Handle → wallet cache invalidated purely by age.
///
/// An entry is served only while `now - fetched_at < ttl`.
#[derive(Debug)]
pub struct WalletCache {
    entries: DashMap<String, CachedWallet>,
    ttl: Duration,
}

impl WalletCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cached wallet for `handle`, if still fresh
    pub fn get(&self, handle: &str) -> Option<String> {
        let entry = self.entries.get(handle)?;
        if entry.fetched_at.elapsed() < self.ttl {
            Some(entry.wallet.clone())
        } else {
            None
        }
    }

    pub fn insert(&self, handle: &str, wallet: String) {
        self.entries.insert(
            handle.to_string(),
            CachedWallet {
                wallet,
                fetched_at: Instant::now(),
            },
        );
    }

    pub fn invalidate(&self, handle: &str) {
        self.entries.remove(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn entry_expires_exactly_at_ttl() {
        let cache = WalletCache::new(Duration::from_secs(300));
        cache.insert("kym", "Wallet111".to_string());

        tokio::time::advance(Duration::from_millis(299_999)).await;
        assert_eq!(cache.get("kym").as_deref(), Some("Wallet111"));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(cache.get("kym"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn handles_are_cached_independently() {
        let cache = WalletCache::new(Duration::from_secs(60));
        cache.insert("a", "WalletA".to_string());
        cache.insert("b", "WalletB".to_string());
        cache.invalidate("a");

        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b").as_deref(), Some("WalletB"));
    }
}
