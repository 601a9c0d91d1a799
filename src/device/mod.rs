// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The authoritative state of one physical unit.
//!
//! A [`Device`] sits between two streams:
//!
//! - **Inbound**: [`Device::update`] receives decoded protocol data, stores
//!   it and republishes it to whatever surface is attached for that field.
//!   Fields feeding a composite (power and mode feed the operating mode)
//!   also republish the climate surface once the composite is computable.
//! - **Outbound**: user input on a control surface, or a call to
//!   [`Device::command`], is translated into a sparse
//!   [`ProtocolRequest`](crate::protocol::ProtocolRequest) and handed to the
//!   protocol. Local state is not touched until the unit echoes the change.
//!
//! Surfaces are optional and may be attached at any time. Attaching never
//! republishes: a surface shows a value from the next update on.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use heatpump_sync::device::{Device, UpdateOutcome};
//! use heatpump_sync::protocol::{MessageTarget, Protocol, ProtocolRequest};
//! use heatpump_sync::state::FieldUpdate;
//! use heatpump_sync::types::{ClimateMode, DeviceAddress, Mode};
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
//! let mut device = Device::new("20.00.00", Arc::new(Bus), Arc::new(NoopProtocol));
//!
//! assert_eq!(device.update(FieldUpdate::power(true)), UpdateOutcome::Applied);
//! assert_eq!(device.state().operating_mode(), None);
//!
//! device.update(FieldUpdate::Mode(Mode::Heat));
//! assert_eq!(device.state().operating_mode(), Some(ClimateMode::Heat));
//! ```

mod attach;
mod update;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::capabilities::ClimateTraits;
use crate::command::{Commander, FieldCommand};
use crate::config::DeviceConfig;
use crate::error::{ConfigError, ValueError};
use crate::protocol::{MessageTarget, Protocol};
use crate::state::{ClimateState, DeviceState, SensorField};
use crate::surface::Surfaces;
use crate::types::{AltMode, AltModeCatalog, DeviceAddress, SwingMode};

/// What happened to an inbound update.
///
/// Rejections are never errors for the caller to handle: the update was
/// logged and dropped and the previous state is still in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The value was stored and published.
    Applied,
    /// The value failed a device-specific check and was ignored.
    Rejected(ValueError),
}

impl UpdateOutcome {
    /// Returns `true` if the update was stored.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// One physical indoor unit.
///
/// See the [module documentation](self) for the update and command flows.
#[derive(Debug)]
pub struct Device {
    address: DeviceAddress,
    state: DeviceState,
    surfaces: Surfaces,
    commander: Commander,
    catalog: Arc<RwLock<AltModeCatalog>>,
    room_temperature_offset: f32,
    supports_vertical_swing: bool,
    supports_horizontal_swing: bool,
}

impl Device {
    /// Creates a device with every field unknown and nothing attached.
    ///
    /// `target` is where the protocol writes outbound frames and `protocol`
    /// is the codec for this unit.
    pub fn new(
        address: impl Into<DeviceAddress>,
        target: Arc<dyn MessageTarget>,
        protocol: Arc<dyn Protocol>,
    ) -> Self {
        let address = address.into();
        let catalog = Arc::new(RwLock::new(AltModeCatalog::new()));
        let commander = Commander::new(address.clone(), target, protocol, Arc::clone(&catalog));

        tracing::debug!(%address, "Created device");

        Self {
            address,
            state: DeviceState::new(),
            surfaces: Surfaces::default(),
            commander,
            catalog,
            room_temperature_offset: 0.0,
            supports_vertical_swing: false,
            supports_horizontal_swing: false,
        }
    }

    /// Returns the unit's address.
    #[must_use]
    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    /// Returns the stored state.
    #[must_use]
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Returns the room temperature with the calibration offset applied.
    #[must_use]
    pub fn room_temperature(&self) -> Option<f32> {
        self.state
            .sensor(SensorField::RoomTemperature)
            .map(|raw| raw + self.room_temperature_offset)
    }

    /// Builds what the climate surface currently shows.
    #[must_use]
    pub fn climate_state(&self) -> ClimateState {
        ClimateState {
            mode: self.state.operating_mode(),
            current_temperature: self.room_temperature(),
            target_temperature: self.state.target_temperature(),
            fan: self.state.fan_setting(),
            preset: self.state.preset().cloned(),
            swing_mode: self.state.swing().map(|swing| swing.to_climate()),
        }
    }

    // ========== Configuration ==========

    /// Applies a whole configuration, replacing the alt-mode catalog.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error; nothing is applied in
    /// that case.
    pub fn configure(&mut self, config: &DeviceConfig) -> Result<(), ConfigError> {
        config.validate()?;

        self.room_temperature_offset = config.room_temperature_offset;
        self.supports_vertical_swing = config.supports_vertical_swing;
        self.supports_horizontal_swing = config.supports_horizontal_swing;
        *self.catalog.write() = config.alt_modes.clone();

        tracing::debug!(
            address = %self.address,
            alt_modes = config.alt_modes.len(),
            offset = config.room_temperature_offset,
            "Applied configuration"
        );
        Ok(())
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> DeviceConfig {
        DeviceConfig {
            supports_vertical_swing: self.supports_vertical_swing,
            supports_horizontal_swing: self.supports_horizontal_swing,
            room_temperature_offset: self.room_temperature_offset,
            alt_modes: self.catalog.read().clone(),
        }
    }

    /// Returns what the climate surface may offer for this unit.
    #[must_use]
    pub fn traits(&self) -> ClimateTraits {
        ClimateTraits::from_config(&self.config())
    }

    /// Adds one entry to the alt-mode catalog.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyAltModeName` or
    /// `ConfigError::DuplicateAltMode`; the catalog is unchanged then.
    pub fn add_alt_mode(
        &mut self,
        name: impl Into<String>,
        value: AltMode,
    ) -> Result<(), ConfigError> {
        let mut catalog = self.catalog.write();
        let mut candidate = (*catalog).clone();
        candidate.push(name, value);
        candidate.validate()?;
        *catalog = candidate;
        Ok(())
    }

    /// Sets the offset added to every room temperature reading.
    ///
    /// Applies from the next published reading on.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOffset` if `offset` is not finite.
    pub fn set_room_temperature_offset(&mut self, offset: f32) -> Result<(), ConfigError> {
        if !offset.is_finite() {
            return Err(ConfigError::InvalidOffset(offset));
        }
        self.room_temperature_offset = offset;
        Ok(())
    }

    /// Declares whether the unit has a vertically swinging louver.
    pub fn set_supports_vertical_swing(&mut self, supported: bool) {
        self.supports_vertical_swing = supported;
    }

    /// Declares whether the unit has a horizontally swinging louver.
    pub fn set_supports_horizontal_swing(&mut self, supported: bool) {
        self.supports_horizontal_swing = supported;
    }

    /// Returns `true` if the unit supports swinging on the given axis.
    #[must_use]
    pub fn supports_swing(&self, axis: SwingMode) -> bool {
        (axis.vertical() && self.supports_vertical_swing)
            || (axis.horizontal() && self.supports_horizontal_swing)
    }

    // ========== Outbound ==========

    /// Sends a user command to the unit.
    ///
    /// Local state stays as it is until the unit reports the new value.
    ///
    /// Returns `true` if a request was published.
    pub fn command(&self, command: &FieldCommand) -> bool {
        self.commander.send(command)
    }

    /// Returns the outbound handle of this device.
    ///
    /// The handle can be cloned and used without access to the device.
    #[must_use]
    pub fn commander(&self) -> &Commander {
        &self.commander
    }

    /// Asks the unit to re-announce its full state.
    pub fn refresh(&self) {
        self.commander.refresh();
    }
}
