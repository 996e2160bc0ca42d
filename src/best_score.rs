//! Best score persistence
//!
//! The simulation only reports scores; stores decide how the best one is kept.
//! Persisted to LocalStorage on the web, held in memory elsewhere.

/// Merge-only store for the best score
pub trait ScoreStore {
    /// Best score recorded so far
    fn best(&self) -> u32;

    /// Record `score`, returning the new best (max of stored and `score`)
    fn merge(&mut self, score: u32) -> u32;
}

/// In-memory store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStore {
    best: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self { best }
    }
}

impl ScoreStore for MemoryStore {
    fn best(&self) -> u32 {
        self.best
    }

    fn merge(&mut self, score: u32) -> u32 {
        self.best = self.best.max(score);
        self.best
    }
}

/// LocalStorage key
#[allow(dead_code)]
pub const STORAGE_KEY: &str = "dollus_dungeon_escape_best";

/// Browser LocalStorage store (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStorageStore {
    best: u32,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }

    /// Load the stored best score (0 if missing or unreadable)
    pub fn load() -> Self {
        let best = Self::storage()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|text| text.trim().parse::<u32>().ok())
            .unwrap_or(0);
        log::info!("Loaded best score {}", best);
        Self { best }
    }
}

#[cfg(target_arch = "wasm32")]
impl ScoreStore for LocalStorageStore {
    fn best(&self) -> u32 {
        self.best
    }

    fn merge(&mut self, score: u32) -> u32 {
        if score > self.best {
            self.best = score;
            match Self::storage() {
                Some(storage) => {
                    if storage.set_item(STORAGE_KEY, &score.to_string()).is_err() {
                        log::warn!("Failed to save best score {}", score);
                    }
                }
                None => log::warn!("LocalStorage unavailable, best score not saved"),
            }
        }
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_maximum() {
        let mut store = MemoryStore::new();
        assert_eq!(store.best(), 0);
        assert_eq!(store.merge(12), 12);
        assert_eq!(store.merge(5), 12);
        assert_eq!(store.merge(30), 30);
        assert_eq!(store.best(), 30);
    }

    #[test]
    fn test_storage_key_matches_saved_scores() {
        assert_eq!(STORAGE_KEY, "dollus_dungeon_escape_best");
    }

    #[test]
    fn test_with_best() {
        let mut store = MemoryStore::with_best(40);
        assert_eq!(store.merge(39), 40);
    }
}
