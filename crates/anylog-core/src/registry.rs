//! Registry of named loggers

use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use crate::error::AnyLogResult;
use crate::logger::Logger;

/// A name's entry; empty while its logger is being built
type Slot = Arc<OnceCell<Arc<Logger>>>;

/// Name → logger map with at most one logger per name
///
/// Names are plain keys: `"toString"` or `"__proto__"` are as ordinary as
/// `"db"`. Removing an entry lets the next factory call build a new logger
/// under that name.
///
/// # Thread Safety
///
/// The map mutex is only held for lookups and inserts. Construction runs on a
/// per-name slot outside it, so concurrent first requests for a name build
/// once while other names, and the registry itself, stay usable from inside
/// the build.
#[derive(Debug, Default)]
pub struct Registry {
    slots: Mutex<BTreeMap<String, Slot>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(BTreeMap::new()),
        }
    }

    /// Get a logger by name
    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.slots.lock().get(name).and_then(|slot| slot.get().cloned())
    }

    /// Insert or overwrite the logger for `name`, returning the previous one
    pub fn set(&self, name: impl Into<String>, logger: Arc<Logger>) -> Option<Arc<Logger>> {
        self.slots
            .lock()
            .insert(name.into(), Arc::new(OnceCell::with_value(logger)))
            .and_then(|slot| slot.get().cloned())
    }

    /// Remove the logger for `name`
    pub fn delete(&self, name: &str) -> Option<Arc<Logger>> {
        self.slots.lock().remove(name).and_then(|slot| slot.get().cloned())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        self.entries().into_iter().map(|(name, _)| name).collect()
    }

    /// Snapshot of all entries, sorted by name
    pub fn entries(&self) -> Vec<(String, Arc<Logger>)> {
        self.slots
            .lock()
            .iter()
            .filter_map(|(name, slot)| slot.get().map(|logger| (name.clone(), Arc::clone(logger))))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.slots.lock().values().filter(|slot| slot.get().is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every logger
    pub fn clear(&self) {
        self.slots.lock().clear();
    }

    /// Return the logger for `name`, building and storing it on a miss.
    ///
    /// `build` may use this registry for other names. Asking for `name` itself
    /// from inside `build` is a cycle and never completes.
    /// If `build` fails, nothing is stored and the error is returned as-is.
    pub fn get_or_try_insert_with<F>(&self, name: &str, build: F) -> AnyLogResult<Arc<Logger>>
    where
        F: FnOnce() -> AnyLogResult<Logger>,
    {
        let slot = Arc::clone(self.slots.lock().entry(name.to_string()).or_default());

        match slot.get_or_try_init(|| build().map(Arc::new)) {
            Ok(logger) => Ok(Arc::clone(logger)),
            Err(err) => {
                let mut slots = self.slots.lock();
                let stale = slots
                    .get(name)
                    .is_some_and(|current| Arc::ptr_eq(current, &slot) && current.get().is_none());
                if stale {
                    slots.remove(name);
                }
                Err(err)
            }
        }
    }
}
