// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The heater-cooler accessory.
//!
//! [`Accessory`] bridges host characteristic requests and the appliance:
//!
//! - **set**: the local [`DeviceState`] is updated and the request is
//!   acknowledged at once; the new state is pushed in the background.
//!   Push failures are logged, never reported to the host.
//! - **get**: answered from memory without touching the network. Reading
//!   the current temperature also starts a background pull whose result is
//!   served by the *next* read.
//!
//! ```no_run
//! use pac_adapter::{Accessory, AccessoryConfig};
//! use pac_adapter::capability::Characteristic;
//!
//! # async fn example() -> pac_adapter::Result<()> {
//! let accessory = Accessory::http(AccessoryConfig::new("Cooler", "192.168.1.103"))?;
//!
//! accessory.handle_set(Characteristic::Active, true.into())?;
//! accessory.handle_set(Characteristic::CoolingThresholdTemperature, 22.0.into())?;
//!
//! let current = accessory.handle_get(Characteristic::CurrentTemperature);
//! println!("room temperature: {current}");
//! # Ok(())
//! # }
//! ```

mod push_queue;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tokio::runtime::Handle;

use crate::capability::{
    BINDINGS, BindingSource, CapabilityBinding, Characteristic, CharacteristicValue, binding,
};
use crate::config::AccessoryInformation;
use crate::error::{CapabilityError, Error};
use crate::protocol::Protocol;
use crate::state::{DeviceState, StateChange, TelemetrySnapshot};
use crate::subscription::{CallbackRegistry, SubscriptionId};
use crate::types::{CurrentHeaterCoolerState, TargetHeaterCoolerState, TargetTemperature};

use push_queue::PushQueue;

#[cfg(feature = "http")]
use crate::config::AccessoryConfig;
#[cfg(feature = "http")]
use crate::protocol::HttpClient;

/// State shared between the accessory and its background tasks.
pub(crate) struct Shared<P> {
    pub(crate) protocol: P,
    pub(crate) information: AccessoryInformation,
    pub(crate) state: RwLock<DeviceState>,
    telemetry: RwLock<Option<TelemetrySnapshot>>,
    pull_in_flight: AtomicBool,
    callbacks: CallbackRegistry,
}

impl<P: Protocol> Shared<P> {
    async fn refresh(&self) -> Result<TelemetrySnapshot, Error> {
        match self.protocol.pull().await {
            Ok(snapshot) => {
                self.apply_telemetry(snapshot);
                Ok(snapshot)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to pull telemetry, keeping previous snapshot");
                Err(e)
            }
        }
    }

    fn apply_telemetry(&self, snapshot: TelemetrySnapshot) {
        tracing::debug!(
            temperature = snapshot.current_temperature(),
            humidity = ?snapshot.current_humidity(),
            "Telemetry received"
        );

        *self.telemetry.write() = Some(snapshot);

        self.callbacks.dispatch_telemetry(&snapshot);
        self.callbacks.dispatch_characteristic(
            Characteristic::CurrentTemperature,
            snapshot.current_temperature().into(),
        );
    }
}

/// Clears the in-flight flag when the pull task ends, even by panic.
struct PullGuard<'a>(&'a AtomicBool);

impl Drop for PullGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// An air-conditioner accessory backed by one appliance.
///
/// There is exactly one `Accessory` per appliance. It owns the canonical
/// [`DeviceState`] and the last [`TelemetrySnapshot`]; both are only
/// changed through this type.
///
/// # Type Parameter
///
/// `P` is the transport to the appliance, normally [`HttpClient`].
pub struct Accessory<P: Protocol> {
    shared: Arc<Shared<P>>,
    push_queue: PushQueue,
    runtime: Handle,
}

impl<P: Protocol> Accessory<P> {
    /// Creates an accessory with the default device state.
    ///
    /// Spawns the background push worker on the current tokio runtime. The
    /// worker stops when the accessory is dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    #[must_use]
    pub fn new(information: AccessoryInformation, protocol: P) -> Self {
        let runtime = Handle::current();
        let shared = Arc::new(Shared {
            protocol,
            information,
            state: RwLock::new(DeviceState::new()),
            telemetry: RwLock::new(None),
            pull_in_flight: AtomicBool::new(false),
            callbacks: CallbackRegistry::new(),
        });
        let push_queue = PushQueue::spawn(&runtime, Arc::clone(&shared));

        tracing::debug!(name = %shared.information.name, "Accessory created");

        Self {
            shared,
            push_queue,
            runtime,
        }
    }

    /// Returns the identification values shown by the host.
    #[must_use]
    pub fn information(&self) -> &AccessoryInformation {
        &self.shared.information
    }

    /// Returns the declared capability surface.
    #[must_use]
    pub fn bindings(&self) -> &'static [CapabilityBinding] {
        &BINDINGS
    }

    /// Returns a snapshot of the current device state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.shared.state.read().clone()
    }

    /// Returns the last successfully pulled telemetry, if any.
    #[must_use]
    pub fn telemetry(&self) -> Option<TelemetrySnapshot> {
        *self.shared.telemetry.read()
    }

    // ========== Host requests ==========

    /// Handles a host write.
    ///
    /// Returns as soon as the local state is updated; the push to the
    /// appliance happens in the background.
    ///
    /// - `Active` switches the appliance on or off.
    /// - `CoolingThresholdTemperature` is rounded to 1 °C and clamped to
    ///   16-32 °C.
    /// - `TargetHeaterCoolerState` is acknowledged and ignored: the appliance
    ///   only cools.
    ///
    /// # Errors
    ///
    /// Returns `CapabilityError::NotWritable` for read-only characteristics
    /// and `CapabilityError::TypeMismatch` if the value has the wrong type.
    /// Appliance failures are never returned here.
    pub fn handle_set(
        &self,
        characteristic: Characteristic,
        value: CharacteristicValue,
    ) -> Result<(), Error> {
        let binding = binding(characteristic);
        if !binding.writable {
            return Err(CapabilityError::NotWritable(characteristic).into());
        }

        let change = match binding.source {
            BindingSource::Power => {
                StateChange::Power(value.as_bool().ok_or_else(|| type_mismatch(binding))?)
            }
            BindingSource::TargetTemperature => {
                let requested = value.as_f64().ok_or_else(|| type_mismatch(binding))?;
                let temperature = TargetTemperature::from_host(requested);
                if (f64::from(temperature.celsius()) - requested).abs() > f64::EPSILON {
                    tracing::debug!(
                        requested,
                        applied = temperature.celsius(),
                        "Target temperature adjusted to advertised range"
                    );
                }
                StateChange::target_temperature(temperature)
            }
            BindingSource::Mode => {
                let code = value.as_code().ok_or_else(|| type_mismatch(binding))?;
                match TargetHeaterCoolerState::try_from(code) {
                    Ok(TargetHeaterCoolerState::Cool) => {
                        tracing::debug!("Target state is already cooling");
                    }
                    Ok(state) => {
                        tracing::warn!(requested = %state, "Not setting cooler state, appliance only cools");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Ignoring unknown cooler state");
                    }
                }
                return Ok(());
            }
            BindingSource::Telemetry | BindingSource::DerivedFromPower => {
                return Err(CapabilityError::NotWritable(characteristic).into());
            }
        };

        self.apply_change(&change);
        Ok(())
    }

    /// Handles a host read.
    ///
    /// Never waits on the network. For `CurrentTemperature` a background
    /// pull is started and the previously cached reading is returned, or
    /// 0 °C if the appliance has not answered yet.
    #[must_use]
    pub fn handle_get(&self, characteristic: Characteristic) -> CharacteristicValue {
        match binding(characteristic).source {
            BindingSource::Power => self.shared.state.read().power().into(),
            BindingSource::TargetTemperature => {
                let celsius = self.shared.state.read().target_temperature().celsius();
                f64::from(celsius).into()
            }
            BindingSource::Mode => TargetHeaterCoolerState::Cool.into(),
            BindingSource::DerivedFromPower => {
                CurrentHeaterCoolerState::from_power(self.shared.state.read().power()).into()
            }
            BindingSource::Telemetry => {
                let cached = self.current_temperature();
                self.spawn_refresh();
                cached.into()
            }
        }
    }

    /// Handles the host's identify request. The appliance has no way to
    /// identify itself, so this only logs.
    pub fn identify(&self) {
        tracing::trace!(name = %self.shared.information.name, "Identify requested");
    }

    // ========== Telemetry ==========

    /// Pulls telemetry now and waits for the result.
    ///
    /// On success the snapshot is cached and subscribers are notified. On
    /// failure the previous snapshot is kept.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error of the pull.
    pub async fn refresh(&self) -> Result<TelemetrySnapshot, Error> {
        self.shared.refresh().await
    }

    /// Replaces the cached telemetry and notifies subscribers.
    pub fn apply_telemetry(&self, snapshot: TelemetrySnapshot) {
        self.shared.apply_telemetry(snapshot);
    }

    fn current_temperature(&self) -> f64 {
        self.shared
            .telemetry
            .read()
            .map_or(TelemetrySnapshot::DEFAULT_TEMPERATURE, |t| {
                t.current_temperature()
            })
    }

    /// Starts a background pull unless one is already running.
    fn spawn_refresh(&self) {
        if self.shared.pull_in_flight.swap(true, Ordering::AcqRel) {
            tracing::trace!("Telemetry pull already in flight");
            return;
        }

        let shared = Arc::clone(&self.shared);
        self.runtime.spawn(async move {
            let _guard = PullGuard(&shared.pull_in_flight);
            // Failures are logged by refresh
            let _ = shared.refresh().await;
        });
    }

    // ========== State changes ==========

    fn apply_change(&self, change: &StateChange) {
        let changed = self.shared.state.write().apply(change);

        if changed {
            tracing::info!(?change, "State changed");
            self.notify(change);
        } else {
            tracing::debug!(?change, "State unchanged, pushing anyway");
        }

        self.push_queue.request();
    }

    fn notify(&self, change: &StateChange) {
        match change {
            StateChange::Power(on) => {
                self.shared
                    .callbacks
                    .dispatch_characteristic(Characteristic::Active, (*on).into());
                self.shared.callbacks.dispatch_characteristic(
                    Characteristic::CurrentHeaterCoolerState,
                    CurrentHeaterCoolerState::from_power(*on).into(),
                );
            }
            StateChange::TargetTemperature(t) => {
                self.shared.callbacks.dispatch_characteristic(
                    Characteristic::CoolingThresholdTemperature,
                    f64::from(t.celsius()).into(),
                );
            }
        }
    }

    // ========== Subscriptions ==========

    /// Registers a callback for characteristic value updates.
    ///
    /// Called after accepted writes that changed a value, and after each
    /// successful telemetry pull.
    pub fn on_characteristic_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Characteristic, CharacteristicValue) + Send + Sync + 'static,
    {
        self.shared.callbacks.on_characteristic_changed(callback)
    }

    /// Registers a callback for every successfully pulled telemetry snapshot.
    pub fn on_telemetry<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&TelemetrySnapshot) + Send + Sync + 'static,
    {
        self.shared.callbacks.on_telemetry(callback)
    }

    /// Removes a callback. Returns `true` if it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.shared.callbacks.unsubscribe(id)
    }
}

#[cfg(feature = "http")]
impl Accessory<HttpClient> {
    /// Creates an accessory that talks to the appliance over HTTP.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or the HTTP client
    /// cannot be created.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn http(config: AccessoryConfig) -> Result<Self, Error> {
        config.validate()?;
        let client = config.http_config()?.into_client()?;
        Ok(Self::new(config.information(), client))
    }
}

impl<P: Protocol> std::fmt::Debug for Accessory<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accessory")
            .field("information", &self.shared.information)
            .field("state", &*self.shared.state.read())
            .field("telemetry", &*self.shared.telemetry.read())
            .finish_non_exhaustive()
    }
}

fn type_mismatch(binding: &CapabilityBinding) -> Error {
    CapabilityError::TypeMismatch {
        characteristic: binding.characteristic,
        expected: binding.format.name(),
    }
    .into()
}
