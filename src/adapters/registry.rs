use crate::adapters::adapter::{default_rules, Platform, PlatformAdapter, PlatformRule};

/// Resolves URLs to platform adapters. Holds an ordered adapter list (most
/// specific first, generic always last) and a single-entry cache keyed on
/// the exact URL string.
pub struct AdapterRegistry {
    adapters: Vec<PlatformAdapter>,
    cache: Option<CacheEntry>,
}

struct CacheEntry {
    url: String,
    index: usize,
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Build a registry from explicit rules. A generic fallback is appended
    /// when absent and always sorts last, so resolution is total.
    pub fn with_rules(rules: Vec<PlatformRule>) -> Self {
        let mut adapters: Vec<PlatformAdapter> =
            rules.into_iter().map(PlatformAdapter::new).collect();
        if !adapters
            .iter()
            .any(|a| matches!(a.platform(), Platform::Generic))
        {
            adapters.push(PlatformAdapter::new(PlatformRule {
                platform: Platform::Generic,
                host_patterns: vec![],
                path_patterns: vec![],
            }));
        }
        // Stable: user-provided order survives, generic moves to the end.
        adapters.sort_by_key(|a| matches!(a.platform(), Platform::Generic));
        Self {
            adapters,
            cache: None,
        }
    }

    /// First adapter whose rule matches the URL. Repeated calls with the
    /// same URL string return the cached adapter without re-running rules.
    pub fn resolve(&mut self, url: &str) -> &PlatformAdapter {
        let cached = match &self.cache {
            Some(entry) if entry.url == url => Some(entry.index),
            _ => None,
        };
        let index = match cached {
            Some(index) => index,
            None => {
                let index = self
                    .adapters
                    .iter()
                    .position(|a| a.matches(url))
                    .unwrap_or(self.adapters.len() - 1);
                self.cache = Some(CacheEntry {
                    url: url.to_string(),
                    index,
                });
                index
            }
        };
        // The generic fallback guarantees a non-empty list and a valid index.
        &self.adapters[index]
    }

    /// Drop the cached resolution, forcing the next resolve to re-walk the
    /// rules (used when the page mutates in place, e.g. SPA navigation).
    pub fn clear_cache(&mut self) {
        self.cache = None;
    }

    /// URL the cache currently holds, if any.
    pub fn cached_url(&self) -> Option<&str> {
        self.cache.as_ref().map(|entry| entry.url.as_str())
    }

    pub fn adapter_count(&self) -> usize {
        self.adapters.len()
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
