//! Process-wide theme preference with change notification.

use super::ThemePreference;
use parking_lot::{Mutex, RwLock};
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

type Callback = Arc<dyn Fn(&ThemePreference) + Send + Sync>;

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single source of truth for the theme preference.
///
/// Last writer wins. Notifications are delivered in subscription order
/// while the subscriber list is locked, so a callback must not call
/// `set`, `subscribe` or `unsubscribe` on the same store. Reading with
/// `get` from a callback is fine.
pub struct ThemeStore {
    value: RwLock<ThemePreference>,
    subscribers: Mutex<Vec<(SubscriptionId, Callback)>>,
    next_id: AtomicU64,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("value", &*self.value.read())
            .field("subscribers", &self.subscribers.lock().len())
            .finish()
    }
}

impl ThemeStore {
    pub fn new(initial: ThemePreference) -> Self {
        Self {
            value: RwLock::new(initial),
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Current preference.
    pub fn get(&self) -> ThemePreference {
        self.value.read().clone()
    }

    /// Replace the preference. Subscribers run only if the value changed.
    ///
    /// Returns whether a change happened.
    pub fn set(&self, pref: ThemePreference) -> bool {
        let subscribers = self.subscribers.lock();
        {
            let mut value = self.value.write();
            if *value == pref {
                return false;
            }
            *value = pref.clone();
        }
        for (_, callback) in subscribers.iter() {
            callback(&pref);
        }
        true
    }

    /// Register a callback. It is invoked once right away with the current
    /// value, then on every change until [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ThemePreference) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut subscribers = self.subscribers.lock();
        let current = self.get();
        callback(&current);
        subscribers.push((id, Arc::new(callback)));
        id
    }

    /// Remove a callback. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.lock().retain(|(sub, _)| *sub != id);
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemePreference::System)
    }
}
