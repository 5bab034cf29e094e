//! Boolean view of the theme preference for the toggle widget.

use super::{SubscriptionId, ThemePreference, ThemeStore};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Projects a [`ThemeStore`] onto the on/off state of the switch.
///
/// The cached state follows the store through a subscription and is never
/// written back; [`toggle`](Self::toggle) reads the store itself.
#[derive(Debug)]
pub struct ThemeSwitch {
    store: Arc<ThemeStore>,
    selected: Arc<AtomicBool>,
    subscription: SubscriptionId,
}

impl ThemeSwitch {
    /// Attach to a store. The state is computed immediately.
    pub fn new(store: Arc<ThemeStore>) -> Self {
        let selected = Arc::new(AtomicBool::new(false));
        let sink = Arc::clone(&selected);
        let subscription = store.subscribe(move |pref| {
            sink.store(pref.is_light(), Ordering::Release);
        });

        Self {
            store,
            selected,
            subscription,
        }
    }

    /// `true` (sun) when the preference is exactly `light`, `false` (moon) otherwise.
    #[inline]
    pub fn is_selected(&self) -> bool {
        self.selected.load(Ordering::Acquire)
    }

    /// Flip the preference in the store and return the new value.
    ///
    /// Decided from the store's current value, not the cached state:
    /// `light` becomes `dark`, everything else becomes `light`.
    /// The page script (`embed/theme.js`) applies the same rule in the browser.
    #[allow(dead_code)]
    pub fn toggle(&self) -> ThemePreference {
        let next = self.store.get().toggled();
        self.store.set(next.clone());
        next
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }
}

impl Drop for ThemeSwitch {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switch_with(pref: ThemePreference) -> (Arc<ThemeStore>, ThemeSwitch) {
        let store = Arc::new(ThemeStore::new(pref));
        let switch = ThemeSwitch::new(Arc::clone(&store));
        (store, switch)
    }

    #[test]
    fn test_selected_iff_light() {
        let cases = [
            (ThemePreference::Light, true),
            (ThemePreference::Dark, false),
            (ThemePreference::System, false),
            (ThemePreference::Custom("sepia".into()), false),
        ];
        for (pref, expected) in cases {
            let (_, switch) = switch_with(pref.clone());
            assert_eq!(switch.is_selected(), expected, "preference {pref}");
        }
    }

    #[test]
    fn test_read_is_idempotent() {
        let (_, switch) = switch_with(ThemePreference::Light);
        assert_eq!(switch.is_selected(), switch.is_selected());
    }

    #[test]
    fn test_follows_external_writes() {
        let (store, switch) = switch_with(ThemePreference::Dark);
        assert!(!switch.is_selected());

        store.set(ThemePreference::Light);
        assert!(switch.is_selected());

        store.set(ThemePreference::System);
        assert!(!switch.is_selected());
    }

    #[test]
    fn test_toggle_light_to_dark_and_back() {
        let (store, switch) = switch_with(ThemePreference::Light);

        assert_eq!(switch.toggle(), ThemePreference::Dark);
        assert_eq!(store.get(), ThemePreference::Dark);
        assert!(!switch.is_selected());

        assert_eq!(switch.toggle(), ThemePreference::Light);
        assert_eq!(store.get(), ThemePreference::Light);
        assert!(switch.is_selected());
    }

    #[test]
    fn test_toggle_from_system_forces_light() {
        let (store, switch) = switch_with(ThemePreference::System);
        switch.toggle();
        assert_eq!(store.get(), ThemePreference::Light);
    }

    #[test]
    fn test_toggle_reads_store_not_cache() {
        let (store, switch) = switch_with(ThemePreference::Light);
        let other = ThemeSwitch::new(Arc::clone(&store));

        other.toggle();
        assert_eq!(store.get(), ThemePreference::Dark);

        // Both switches observe the write; the next toggle starts from dark.
        assert!(!switch.is_selected());
        switch.toggle();
        assert_eq!(store.get(), ThemePreference::Light);
        assert!(other.is_selected());
    }

    #[test]
    fn test_page_script_uses_same_rules() {
        const SCRIPT: &str = include_str!("../embed/theme.js");

        // toggle: light -> dark, anything else -> light
        assert!(SCRIPT.contains(r#"var next = stored() === "light" ? "dark" : "light";"#));
        for pref in ["light", "dark", "system", "sepia"] {
            let expected = if pref == "light" { "dark" } else { "light" };
            assert_eq!(ThemePreference::from(pref).toggled().as_str(), expected, "{pref}");
        }

        // selected: exactly light
        assert!(SCRIPT.contains(r#"var selected = pref === "light";"#));
        for pref in ["light", "dark", "system", "sepia"] {
            assert_eq!(ThemePreference::from(pref).is_light(), pref == "light", "{pref}");
        }
    }

    #[test]
    fn test_drop_unsubscribes() {
        let (store, switch) = switch_with(ThemePreference::Dark);
        assert_eq!(store.subscriber_count(), 1);
        drop(switch);
        assert_eq!(store.subscriber_count(), 0);
    }
}
