use std::num::NonZeroUsize;
use std::sync::Mutex;

use fxhash::hash64;
use lru::LruCache;

/// Content-hash keyed cache over translated text. Keyed on the cleaned
/// input text plus the language hint, not on the source document, so two
/// documents that clean down to the same text share one cache entry.
pub struct TranslationCache {
    entries: Mutex<LruCache<u64, String>>,
}

impl TranslationCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity is at least 1");
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, text: &str, language_hint: &str) -> Option<String> {
        let key = cache_key(text, language_hint);
        self.entries.lock().unwrap().get(&key).cloned()
    }

    pub fn put(&self, text: &str, language_hint: &str, translated: String) {
        let key = cache_key(text, language_hint);
        self.entries.lock().unwrap().put(key, translated);
    }
}

fn cache_key(text: &str, language_hint: &str) -> u64 {
    hash64(&format!("{language_hint}\u{0}{text}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caches_by_content_and_language() {
        let cache = TranslationCache::new(4);
        assert!(cache.get("hello", "kn").is_none());
        cache.put("hello", "kn", "ಹಲೋ".to_string());
        assert_eq!(cache.get("hello", "kn").as_deref(), Some("ಹಲೋ"));
        assert!(cache.get("hello", "ta").is_none());
    }
}
