// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Explicit per-address device registry.
//!
//! The process root owns one [`DeviceRegistry`] and passes it to whatever
//! needs to find a device by address, such as the bus reader routing
//! decoded updates. There is no global lookup.
//!
//! Each device sits behind its own mutex. The registry lock is only held
//! while looking a device up, never while a device is being updated.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use heatpump_sync::protocol::{MessageTarget, Protocol, ProtocolRequest};
//! use heatpump_sync::registry::DeviceRegistry;
//! use heatpump_sync::state::FieldUpdate;
//! use heatpump_sync::types::DeviceAddress;
//!
//! struct Bus;
//! impl MessageTarget for Bus {
//!     fn publish_data(&self, _data: &[u8]) {}
//! }
//!
//! struct NoopProtocol;
//! impl Protocol for NoopProtocol {
//!     fn publish_request(&self, _: &dyn MessageTarget, _: &DeviceAddress, _: &ProtocolRequest) {}
//!     fn protocol_update(&self, _: &dyn MessageTarget) {}
//! }
//!
//! let protocol: Arc<dyn Protocol> = Arc::new(NoopProtocol);
//! let registry = DeviceRegistry::new(move |_: &DeviceAddress| Arc::clone(&protocol));
//! let bus: Arc<dyn MessageTarget> = Arc::new(Bus);
//!
//! let device = registry.get_or_create("20.00.00", &bus);
//! registry.dispatch(&"20.00.00".into(), FieldUpdate::power(true))?;
//!
//! assert_eq!(device.lock().state().power(), Some(true));
//! assert!(registry.dispatch(&"20.00.01".into(), FieldUpdate::power(true)).is_err());
//! # Ok::<(), heatpump_sync::Error>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::device::{Device, UpdateOutcome};
use crate::error::{Error, Result};
use crate::protocol::{MessageTarget, ProtocolResolver};
use crate::state::FieldUpdate;
use crate::types::DeviceAddress;

/// A device shared between the registry and its users.
pub type SharedDevice = Arc<Mutex<Device>>;

/// Owns every known device, one per address.
pub struct DeviceRegistry {
    resolver: Box<dyn ProtocolResolver>,
    devices: RwLock<HashMap<DeviceAddress, SharedDevice>>,
}

impl DeviceRegistry {
    /// Creates an empty registry.
    ///
    /// `resolver` picks the protocol for each newly created device.
    pub fn new(resolver: impl ProtocolResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
            devices: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the device for `address`, creating it on first use.
    ///
    /// A new device gets its protocol from the resolver and sends through
    /// `target`. An existing device is returned as is; `target` is ignored.
    pub fn get_or_create(
        &self,
        address: impl Into<DeviceAddress>,
        target: &Arc<dyn MessageTarget>,
    ) -> SharedDevice {
        let address = address.into();

        if let Some(device) = self.devices.read().get(&address) {
            return Arc::clone(device);
        }

        let mut devices = self.devices.write();
        let device = devices.entry(address).or_insert_with_key(|address| {
            tracing::debug!(%address, "Registering device");
            let protocol = self.resolver.resolve(address);
            Arc::new(Mutex::new(Device::new(
                address.clone(),
                Arc::clone(target),
                protocol,
            )))
        });
        Arc::clone(device)
    }

    /// Returns the device for `address`, if one exists.
    #[must_use]
    pub fn get(&self, address: &DeviceAddress) -> Option<SharedDevice> {
        self.devices.read().get(address).cloned()
    }

    /// Returns `true` if a device exists for `address`.
    #[must_use]
    pub fn contains(&self, address: &DeviceAddress) -> bool {
        self.devices.read().contains_key(address)
    }

    /// Removes a device and returns it.
    ///
    /// Handles already given out stay valid.
    pub fn remove(&self, address: &DeviceAddress) -> Option<SharedDevice> {
        let removed = self.devices.write().remove(address);
        if removed.is_some() {
            tracing::debug!(%address, "Removed device");
        }
        removed
    }

    /// Returns the addresses of all devices, sorted.
    #[must_use]
    pub fn addresses(&self) -> Vec<DeviceAddress> {
        let mut addresses: Vec<_> = self.devices.read().keys().cloned().collect();
        addresses.sort();
        addresses
    }

    /// Returns the number of devices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.devices.read().len()
    }

    /// Returns `true` if there are no devices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.devices.read().is_empty()
    }

    /// Routes an inbound update to the device at `address`.
    ///
    /// # Errors
    ///
    /// Returns `Error::DeviceNotFound` if no device exists for `address`.
    /// A rejected value is not an error; it is reported in the outcome.
    pub fn dispatch(&self, address: &DeviceAddress, update: FieldUpdate) -> Result<UpdateOutcome> {
        let device = self
            .get(address)
            .ok_or_else(|| Error::DeviceNotFound(address.clone()))?;
        let outcome = device.lock().update(update);
        Ok(outcome)
    }

    /// Asks every device to re-announce its full state.
    pub fn refresh_all(&self) {
        let devices: Vec<_> = self.devices.read().values().cloned().collect();
        tracing::debug!(count = devices.len(), "Refreshing all devices");
        for device in devices {
            device.lock().refresh();
        }
    }
}

impl fmt::Debug for DeviceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceRegistry")
            .field("addresses", &self.addresses())
            .finish_non_exhaustive()
    }
}
