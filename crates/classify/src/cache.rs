use std::num::NonZeroUsize;
use std::sync::Mutex;

use fxhash::hash64;
use lru::LruCache;

use crate::types::Classification;

/// Content-hash keyed cache over classification results, avoiding a repeat
/// model call for text already seen in this process.
pub struct ClassificationCache {
    entries: Mutex<LruCache<u64, Classification>>,
}

impl ClassificationCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least 1");
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, text: &str) -> Option<Classification> {
        self.entries.lock().unwrap().get(&hash64(text)).cloned()
    }

    pub fn put(&self, text: &str, classification: Classification) {
        self.entries.lock().unwrap().put(hash64(text), classification);
    }
}
