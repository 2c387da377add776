use std::hash::{DefaultHasher, Hash, Hasher};
use std::num::NonZeroUsize;

use lru::LruCache;

/// Bounded memo of text-extent measurements, keyed by a hash of the text.
///
/// Repeated cell values (status strings, pool names) dominate large tables;
/// hashing instead of storing the strings keeps the memo small and the
/// lookup cheap.
pub struct ExtentCache {
    inner: LruCache<u64, f64>,
}

impl ExtentCache {
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).expect("capacity must be > 0");
        Self {
            inner: LruCache::new(cap),
        }
    }

    fn key(text: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        hasher.finish()
    }

    /// Returns the memoized extent or measures and records it.
    pub fn get_or_measure(&mut self, text: &str, measure: impl FnOnce(&str) -> f64) -> f64 {
        let key = Self::key(text);
        if let Some(extent) = self.inner.get(&key) {
            return *extent;
        }
        let extent = measure(text);
        self.inner.put(key, extent);
        extent
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl Default for ExtentCache {
    fn default() -> Self {
        Self::new(1024)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn second_lookup_skips_the_measurer() {
        let mut cache = ExtentCache::new(8);
        let calls = Cell::new(0);
        let measure = |text: &str| {
            calls.set(calls.get() + 1);
            text.len() as f64
        };

        assert_eq!(cache.get_or_measure("running", measure), 7.0);
        assert_eq!(cache.get_or_measure("running", measure), 7.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn capacity_bounds_the_memo() {
        let mut cache = ExtentCache::new(2);
        cache.get_or_measure("a", |t| t.len() as f64);
        cache.get_or_measure("b", |t| t.len() as f64);
        cache.get_or_measure("c", |t| t.len() as f64);

        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn clear_empties_the_memo() {
        let mut cache = ExtentCache::new(4);
        cache.get_or_measure("a", |t| t.len() as f64);

        cache.clear();

        assert!(cache.is_empty());
    }
}
