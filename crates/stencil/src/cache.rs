use stencil_core::Result;
use stencil_sql::Template;

use std::{
    collections::{hash_map::DefaultHasher, HashMap},
    fmt,
    hash::{Hash, Hasher},
    sync::{
        atomic::{AtomicU64, Ordering::Relaxed},
        Arc, Mutex, MutexGuard, PoisonError,
    },
};

/// Identifies a statement shape in a [`TemplateCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(pub u64);

/// Prepared templates keyed by statement identity.
///
/// The cache lives for as long as its owner keeps it and is safe to share
/// between threads. Concurrent first use of a key compiles the statement
/// exactly once: callers racing on the same key wait for the first compilation
/// and then share its result. A failed compilation is not stored, so the next
/// caller tries again.
pub struct TemplateCache<K = Fingerprint> {
    slots: Mutex<HashMap<K, Arc<Slot>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Filled at most once, by the first successful compilation.
type Slot = Mutex<Option<Arc<Template>>>;

/// Lookup counters of a [`TemplateCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl Fingerprint {
    pub fn of<T: Hash + ?Sized>(value: &T) -> Fingerprint {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        Fingerprint(hasher.finish())
    }
}

impl From<u64> for Fingerprint {
    fn from(value: u64) -> Self {
        Fingerprint(value)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl<K> TemplateCache<K>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    pub fn new() -> TemplateCache<K> {
        TemplateCache {
            slots: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the template stored for `key` without compiling.
    pub fn get(&self, key: &K) -> Option<Arc<Template>> {
        let slot = lock(&self.slots).get(key).cloned()?;
        let entry = lock(&slot);
        entry.clone()
    }

    /// Returns the template stored for `key`, running `compile` to create it
    /// when there is none.
    pub fn get_or_try_insert<F>(&self, key: &K, compile: F) -> Result<Arc<Template>>
    where
        F: FnOnce() -> Result<Template>,
    {
        // Only the slot map is locked while looking up, compilation holds the
        // slot alone so other keys are not blocked.
        let slot = lock(&self.slots).entry(key.clone()).or_default().clone();
        let mut entry = lock(&slot);

        if let Some(template) = &*entry {
            self.hits.fetch_add(1, Relaxed);
            log::trace!("template cache hit; key={key:?}");
            return Ok(template.clone());
        }

        self.misses.fetch_add(1, Relaxed);
        log::trace!("template cache miss; key={key:?}");

        let template = match compile() {
            Ok(template) => Arc::new(template),
            Err(err) => {
                log::debug!("compilation failed, not caching; key={key:?} error={err}");
                drop(entry);
                self.remove_unfilled(key, &slot);
                return Err(err);
            }
        };

        *entry = Some(template.clone());
        Ok(template)
    }

    /// Drops the slot for `key` if it is still `slot` and nobody filled it.
    fn remove_unfilled(&self, key: &K, slot: &Arc<Slot>) {
        let mut slots = lock(&self.slots);

        // A locked slot belongs to a caller that is compiling into it
        let unfilled = slots.get(key).is_some_and(|current| {
            Arc::ptr_eq(current, slot)
                && matches!(current.try_lock(), Ok(entry) if entry.is_none())
        });

        if unfilled {
            slots.remove(key);
        }
    }

    /// Number of stored templates.
    pub fn len(&self) -> usize {
        let slots: Vec<_> = lock(&self.slots).values().cloned().collect();
        slots.iter().filter(|slot| lock(slot).is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every stored template. Templates already handed out stay valid.
    pub fn clear(&self) {
        let mut slots = lock(&self.slots);
        log::debug!("clearing template cache; entries={}", slots.len());
        slots.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Relaxed),
            misses: self.misses.load(Relaxed),
        }
    }
}

impl<K> Default for TemplateCache<K>
where
    K: Hash + Eq + Clone + fmt::Debug,
{
    fn default() -> Self {
        TemplateCache::new()
    }
}

impl<K> fmt::Debug for TemplateCache<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateCache")
            .field("hits", &self.hits.load(Relaxed))
            .field("misses", &self.misses.load(Relaxed))
            .finish_non_exhaustive()
    }
}

/// Cache state stays consistent across a panicking compilation: a slot is only
/// written after the template is built.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
