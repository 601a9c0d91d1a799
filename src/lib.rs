// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `heatpump_sync` - device state synchronization for heat pump and air
//! conditioner integrations.
//!
//! The crate keeps one authoritative copy of each indoor unit's state and
//! mirrors it to display and control surfaces. It sits between a wire
//! protocol decoder (which produces [`FieldUpdate`]s) and whatever renders
//! the unit to users (which implements [`Surface`](surface::Surface) or
//! [`ControlSurface`](surface::ControlSurface)).
//!
//! # Features
//!
//! - **Unknown-then-known fields**: nothing is shown before the unit has
//!   reported it
//! - **Composite operating mode**: power and mode are combined into one
//!   climate mode once both are known
//! - **Independent swing axes** sharing one bitmask
//! - **Per-device alt-mode catalog**: codes outside it are rejected
//! - **Sparse commands**: user input becomes a request carrying only the
//!   changed field; local state waits for the unit's echo
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use heatpump_sync::config::DeviceConfig;
//! use heatpump_sync::protocol::{MessageTarget, Protocol, ProtocolRequest};
//! use heatpump_sync::state::FieldUpdate;
//! use heatpump_sync::types::{ClimatePreset, DeviceAddress, Mode, PresetSetting};
//! use heatpump_sync::{DeviceRegistry, UpdateOutcome};
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
//! # fn main() -> heatpump_sync::Result<()> {
//! let protocol: Arc<dyn Protocol> = Arc::new(NoopProtocol);
//! let registry = DeviceRegistry::new(move |_: &DeviceAddress| Arc::clone(&protocol));
//! let bus: Arc<dyn MessageTarget> = Arc::new(Bus);
//!
//! let device = registry.get_or_create("20.00.00", &bus);
//! device
//!     .lock()
//!     .configure(&DeviceConfig::from_json(r#"{"alt_modes": [{"name": "Sleep", "value": 1}]}"#)?)?;
//!
//! let address = DeviceAddress::from("20.00.00");
//! registry.dispatch(&address, FieldUpdate::power(true))?;
//! registry.dispatch(&address, FieldUpdate::Mode(Mode::Cool))?;
//! registry.dispatch(&address, FieldUpdate::AltMode(1))?;
//! assert!(matches!(
//!     registry.dispatch(&address, FieldUpdate::AltMode(7))?,
//!     UpdateOutcome::Rejected(_)
//! ));
//!
//! let climate = device.lock().climate_state();
//! assert_eq!(climate.preset, Some(PresetSetting::Standard(ClimatePreset::Sleep)));
//! # Ok(())
//! # }
//! ```

pub mod bitmask;
pub mod capabilities;
pub mod command;
pub mod config;
pub mod device;
pub mod error;
pub mod protocol;
pub mod registry;
pub mod resolve;
pub mod state;
pub mod surface;
pub mod types;

pub use capabilities::ClimateTraits;
pub use command::{ClimateCall, Commander, FieldCommand};
pub use config::DeviceConfig;
pub use device::{Device, UpdateOutcome};
pub use error::{ConfigError, Error, Result, ValueError};
pub use protocol::{MessageTarget, Protocol, ProtocolRequest, ProtocolResolver};
pub use registry::{DeviceRegistry, SharedDevice};
pub use state::{ClimateState, DeviceState, FieldKind, FieldUpdate};
