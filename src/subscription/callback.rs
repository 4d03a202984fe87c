// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for host notifications.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::capability::{Characteristic, CharacteristicValue};
use crate::state::TelemetrySnapshot;

/// Unique identifier for a subscription.
///
/// This ID is returned when creating a subscription and can be used to
/// unsubscribe later. IDs are unique within an accessory's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

/// Type alias for characteristic update callbacks.
type CharacteristicCallback = Arc<dyn Fn(Characteristic, CharacteristicValue) + Send + Sync>;

/// Type alias for telemetry callbacks.
type TelemetryCallback = Arc<dyn Fn(&TelemetrySnapshot) + Send + Sync>;

/// Registry for host notification callbacks.
///
/// Callbacks are cloned out of the registry before being invoked, so a
/// callback may itself subscribe or unsubscribe without deadlocking.
pub struct CallbackRegistry {
    /// Counter for generating unique subscription IDs.
    next_id: AtomicU64,
    /// Characteristic update callbacks.
    characteristic_callbacks: RwLock<HashMap<SubscriptionId, CharacteristicCallback>>,
    /// Raw telemetry callbacks (includes humidity, which has no characteristic).
    telemetry_callbacks: RwLock<HashMap<SubscriptionId, TelemetryCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            characteristic_callbacks: RwLock::new(HashMap::new()),
            telemetry_callbacks: RwLock::new(HashMap::new()),
        }
    }

    /// Generates a new unique subscription ID.
    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback for characteristic value updates.
    pub fn on_characteristic_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Characteristic, CharacteristicValue) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.characteristic_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for every successfully pulled telemetry snapshot.
    pub fn on_telemetry<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&TelemetrySnapshot) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.telemetry_callbacks
            .write()
            .insert(id, Arc::new(callback));
        id
    }

    // =========================================================================
    // Unsubscription
    // =========================================================================

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        if self.characteristic_callbacks.write().remove(&id).is_some() {
            return true;
        }
        self.telemetry_callbacks.write().remove(&id).is_some()
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.characteristic_callbacks.write().clear();
        self.telemetry_callbacks.write().clear();
    }

    // =========================================================================
    // Dispatch methods
    // =========================================================================

    /// Notifies subscribers that a characteristic has a new value.
    pub fn dispatch_characteristic(&self, characteristic: Characteristic, value: CharacteristicValue) {
        let callbacks: Vec<_> = self.characteristic_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback(characteristic, value);
        }
    }

    /// Notifies subscribers of a freshly pulled telemetry snapshot.
    pub fn dispatch_telemetry(&self, snapshot: &TelemetrySnapshot) {
        let callbacks: Vec<_> = self.telemetry_callbacks.read().values().cloned().collect();
        for callback in callbacks {
            callback(snapshot);
        }
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn callback_count(&self) -> usize {
        self.characteristic_callbacks.read().len() + self.telemetry_callbacks.read().len()
    }

    /// Returns `true` if no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callback_count() == 0
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.callback_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn subscription_id_display() {
        assert_eq!(SubscriptionId::new(42).to_string(), "Sub(42)");
        assert_eq!(SubscriptionId::new(42).value(), 42);
    }

    #[test]
    fn registry_characteristic_dispatch() {
        let registry = CallbackRegistry::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();

        registry.on_characteristic_changed(move |c, v| {
            seen_clone.lock().push((c, v));
        });

        registry.dispatch_characteristic(Characteristic::Active, true.into());

        assert_eq!(
            *seen.lock(),
            vec![(Characteristic::Active, CharacteristicValue::Bool(true))]
        );
    }

    #[test]
    fn registry_telemetry_dispatch() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        registry.on_telemetry(move |snapshot| {
            assert_eq!(snapshot.current_humidity(), Some(40.0));
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch_telemetry(&TelemetrySnapshot::new(23.5, Some(40.0)));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn registry_unsubscribe() {
        let registry = CallbackRegistry::new();
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let id = registry.on_characteristic_changed(move |_, _| {
            counter_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(registry.unsubscribe(id));
        registry.dispatch_characteristic(Characteristic::Active, false.into());

        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(!registry.unsubscribe(id));
    }

    #[test]
    fn registry_unsubscribe_nonexistent() {
        let registry = CallbackRegistry::new();
        assert!(!registry.unsubscribe(SubscriptionId::new(999)));
    }

    #[test]
    fn registry_clear() {
        let registry = CallbackRegistry::new();

        registry.on_characteristic_changed(|_, _| {});
        registry.on_telemetry(|_| {});
        assert_eq!(registry.callback_count(), 2);

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn callback_may_unsubscribe_itself() {
        let registry = Arc::new(CallbackRegistry::new());
        let registry_clone = registry.clone();
        let own_id = Arc::new(Mutex::new(None));
        let own_id_clone = own_id.clone();

        let id = registry.on_characteristic_changed(move |_, _| {
            if let Some(id) = *own_id_clone.lock() {
                registry_clone.unsubscribe(id);
            }
        });
        *own_id.lock() = Some(id);

        registry.dispatch_characteristic(Characteristic::Active, true.into());
        assert!(registry.is_empty());
    }

    #[test]
    fn registry_unique_ids() {
        let registry = CallbackRegistry::new();

        let id1 = registry.on_characteristic_changed(|_, _| {});
        let id2 = registry.on_telemetry(|_| {});

        assert_ne!(id1, id2);
    }

    #[test]
    fn registry_debug() {
        let registry = CallbackRegistry::new();
        registry.on_telemetry(|_| {});

        let debug = format!("{registry:?}");
        assert!(debug.contains("CallbackRegistry"));
        assert!(debug.contains("callback_count"));
    }
}
