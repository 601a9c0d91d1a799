// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound field updates.
//!
//! A [`FieldUpdate`] is one partial status update decoded by the protocol
//! layer. Updates arrive in any order and carry a single field each; the
//! [`Device`](crate::device::Device) folds them into its state.
//!
//! # Examples
//!
//! ```
//! use heatpump_sync::state::{FieldKind, FieldUpdate, SwitchField};
//! use heatpump_sync::types::Mode;
//!
//! let power = FieldUpdate::power(true);
//! assert_eq!(power.kind(), FieldKind::Switch(SwitchField::Power));
//!
//! let mode = FieldUpdate::Mode(Mode::Heat);
//! assert!(mode.affects_operating_mode());
//! ```

use serde::Serialize;

use crate::types::{AltMode, FanMode, Mode, WaterHeaterMode};

use super::{FieldKind, NumberField, SensorField, SwitchField};

/// A single inbound value for one field kind.
///
/// Values are already decoded into their semantic type; domain checks that
/// depend on the device (such as the alt-mode catalog) happen when the
/// update is applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldUpdate {
    /// An on/off field changed.
    Switch {
        /// The field.
        field: SwitchField,
        /// The new state.
        value: bool,
    },

    /// A setpoint changed.
    Number {
        /// The field.
        field: NumberField,
        /// The new setpoint in °C.
        value: f32,
    },

    /// A measurement was reported.
    Sensor {
        /// The field.
        field: SensorField,
        /// The reading.
        value: f32,
    },

    /// Indoor unit mode changed.
    Mode(Mode),

    /// Water heater mode changed.
    WaterHeaterMode(WaterHeaterMode),

    /// Fan speed changed.
    FanMode(FanMode),

    /// Alt-mode code changed.
    AltMode(AltMode),

    /// Vertical swing flag changed.
    SwingVertical(bool),

    /// Horizontal swing flag changed.
    SwingHorizontal(bool),

    /// A raw protocol message mapped to a custom sensor.
    CustomSensor {
        /// The protocol message number.
        message_number: u16,
        /// The decoded value.
        value: f32,
    },
}

impl FieldUpdate {
    /// Creates a main power update.
    #[must_use]
    pub const fn power(value: bool) -> Self {
        Self::Switch {
            field: SwitchField::Power,
            value,
        }
    }

    /// Creates a room target temperature update.
    #[must_use]
    pub const fn target_temperature(value: f32) -> Self {
        Self::Number {
            field: NumberField::TargetTemperature,
            value,
        }
    }

    /// Creates a raw room temperature update.
    #[must_use]
    pub const fn room_temperature(value: f32) -> Self {
        Self::Sensor {
            field: SensorField::RoomTemperature,
            value,
        }
    }

    /// Creates an error code update.
    #[must_use]
    pub fn error_code(code: i16) -> Self {
        Self::Sensor {
            field: SensorField::ErrorCode,
            value: f32::from(code),
        }
    }

    /// Returns the field kind this update targets.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Switch { field, .. } => FieldKind::Switch(*field),
            Self::Number { field, .. } => FieldKind::Number(*field),
            Self::Sensor { field, .. } => FieldKind::Sensor(*field),
            Self::Mode(_) => FieldKind::Mode,
            Self::WaterHeaterMode(_) => FieldKind::WaterHeaterMode,
            Self::FanMode(_) => FieldKind::FanMode,
            Self::AltMode(_) => FieldKind::AltMode,
            Self::SwingVertical(_) => FieldKind::SwingVertical,
            Self::SwingHorizontal(_) => FieldKind::SwingHorizontal,
            Self::CustomSensor { message_number, .. } => FieldKind::CustomSensor(*message_number),
        }
    }

    /// Returns `true` if this update is an input of the composite operating
    /// mode.
    #[must_use]
    pub const fn affects_operating_mode(&self) -> bool {
        matches!(
            self,
            Self::Switch {
                field: SwitchField::Power,
                ..
            } | Self::Mode(_)
        )
    }

    /// Returns `true` if this update changes what the climate surface shows.
    #[must_use]
    pub const fn affects_climate(&self) -> bool {
        matches!(
            self,
            Self::Number {
                field: NumberField::TargetTemperature,
                ..
            } | Self::Sensor {
                field: SensorField::RoomTemperature,
                ..
            } | Self::FanMode(_)
                | Self::AltMode(_)
                | Self::SwingVertical(_)
                | Self::SwingHorizontal(_)
        ) || self.affects_operating_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert_eq!(
            FieldUpdate::power(false),
            FieldUpdate::Switch {
                field: SwitchField::Power,
                value: false
            }
        );
        assert_eq!(
            FieldUpdate::error_code(-3),
            FieldUpdate::Sensor {
                field: SensorField::ErrorCode,
                value: -3.0
            }
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(
            FieldUpdate::target_temperature(21.0).kind(),
            FieldKind::Number(NumberField::TargetTemperature)
        );
        assert_eq!(FieldUpdate::AltMode(2).kind(), FieldKind::AltMode);
        assert_eq!(
            FieldUpdate::CustomSensor {
                message_number: 0x4204,
                value: 1.0
            }
            .kind(),
            FieldKind::CustomSensor(0x4204)
        );
    }

    #[test]
    fn operating_mode_inputs() {
        assert!(FieldUpdate::power(true).affects_operating_mode());
        assert!(FieldUpdate::Mode(Mode::Cool).affects_operating_mode());
        assert!(!FieldUpdate::FanMode(FanMode::Low).affects_operating_mode());
        assert!(
            !FieldUpdate::Switch {
                field: SwitchField::AutomaticCleaning,
                value: true
            }
            .affects_operating_mode()
        );
    }

    #[test]
    fn climate_inputs() {
        assert!(FieldUpdate::room_temperature(22.0).affects_climate());
        assert!(FieldUpdate::SwingVertical(true).affects_climate());
        assert!(FieldUpdate::power(true).affects_climate());
        assert!(
            !FieldUpdate::Sensor {
                field: SensorField::OutdoorTemperature,
                value: 4.0
            }
            .affects_climate()
        );
        assert!(!FieldUpdate::WaterHeaterMode(WaterHeaterMode::Eco).affects_climate());
    }
}
