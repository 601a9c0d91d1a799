// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! User commands and their translation into sparse requests.
//!
//! A surface's write path produces a [`FieldCommand`]. The [`Commander`]
//! translates it into a [`ProtocolRequest`] in which only the changed
//! field is set and forwards it to the protocol. Local state is never
//! touched: the new value shows up only once the unit echoes it back.
//!
//! | Command | Request fields |
//! |---------|----------------|
//! | [`FieldCommand::Switch`] | `power`, `automatic_cleaning` or `water_heater_power` |
//! | [`FieldCommand::Number`] | `target_temp`, `water_outlet_target` or `target_water_temp` |
//! | [`FieldCommand::Mode`] | `mode` |
//! | [`FieldCommand::WaterHeaterMode`] | `water_heater_mode` |
//! | [`FieldCommand::FanMode`] | `fan_mode` |
//! | [`FieldCommand::AltMode`] | `alt_mode` |
//! | [`FieldCommand::Swing`] | `swing_mode` |
//! | [`FieldCommand::Climate`] | any of the above, see [`ClimateCall`] |
//!
//! # Examples
//!
//! ```
//! use heatpump_sync::command::FieldCommand;
//! use heatpump_sync::types::AltModeCatalog;
//!
//! let translation = FieldCommand::target_temperature(21.5).translate(&AltModeCatalog::new());
//! assert_eq!(translation.request.target_temp, Some(21.5));
//! assert_eq!(translation.request.field_count(), 1);
//! assert!(translation.rejected.is_empty());
//! ```

mod climate;
mod commander;

pub use climate::ClimateCall;
pub use commander::Commander;

use crate::error::ValueError;
use crate::protocol::ProtocolRequest;
use crate::state::{NumberField, SwitchField};
use crate::types::{AltMode, AltModeCatalog, FanMode, Mode, SwingMode, WaterHeaterMode};

/// A control action issued by the user on one surface.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldCommand {
    /// Turn an on/off field on or off.
    Switch {
        /// The field.
        field: SwitchField,
        /// The requested state.
        value: bool,
    },

    /// Change a setpoint.
    Number {
        /// The field.
        field: NumberField,
        /// The requested setpoint in °C.
        value: f32,
    },

    /// Change the indoor unit mode.
    Mode(Mode),

    /// Change the water heater mode.
    WaterHeaterMode(WaterHeaterMode),

    /// Change the fan speed.
    FanMode(FanMode),

    /// Select an alt-mode by code.
    AltMode(AltMode),

    /// Set both swing axes.
    Swing(SwingMode),

    /// A combined change from the climate surface.
    Climate(ClimateCall),
}

/// Result of translating a command.
///
/// Parts of a command that cannot be expressed for this device are listed
/// in `rejected`; the rest still goes into `request`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translation {
    /// The sparse request to send.
    pub request: ProtocolRequest,
    /// Parts of the command that were dropped.
    pub rejected: Vec<ValueError>,
}

impl FieldCommand {
    /// Creates a main power command.
    #[must_use]
    pub const fn power(value: bool) -> Self {
        Self::Switch {
            field: SwitchField::Power,
            value,
        }
    }

    /// Creates a room target temperature command.
    #[must_use]
    pub const fn target_temperature(value: f32) -> Self {
        Self::Number {
            field: NumberField::TargetTemperature,
            value,
        }
    }

    /// Translates this command into a sparse request.
    ///
    /// Alt-mode codes and climate presets must be in the catalog; anything
    /// else ends up in `rejected`.
    #[must_use]
    pub fn translate(&self, catalog: &AltModeCatalog) -> Translation {
        let mut request = ProtocolRequest::default();
        let mut rejected = Vec::new();

        match self {
            Self::Switch { field, value } => {
                let slot = match field {
                    SwitchField::Power => &mut request.power,
                    SwitchField::AutomaticCleaning => &mut request.automatic_cleaning,
                    SwitchField::WaterHeaterPower => &mut request.water_heater_power,
                };
                *slot = Some(*value);
            }
            Self::Number { field, value } => {
                let slot = match field {
                    NumberField::TargetTemperature => &mut request.target_temp,
                    NumberField::WaterOutletTarget => &mut request.water_outlet_target,
                    NumberField::TargetWaterTemperature => &mut request.target_water_temp,
                };
                *slot = Some(*value);
            }
            Self::Mode(mode) => request.mode = Some(*mode),
            Self::WaterHeaterMode(mode) => request.water_heater_mode = Some(*mode),
            Self::FanMode(mode) => request.fan_mode = Some(*mode),
            Self::AltMode(code) => match catalog.find_by_code(*code) {
                Some(desc) => request.alt_mode = Some(desc.value),
                None => rejected.push(ValueError::UnsupportedAltMode(*code)),
            },
            Self::Swing(swing) => request.swing_mode = Some(*swing),
            Self::Climate(call) => return call.translate(catalog),
        }

        Translation { request, rejected }
    }
}
