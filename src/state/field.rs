// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Field cells and field-kind tags.

use std::fmt;

use serde::Serialize;

/// A cell that is unknown until its first update and then holds the last
/// value received.
///
/// There is deliberately no way to make a known cell unknown again.
///
/// # Examples
///
/// ```
/// use heatpump_sync::state::FieldValue;
///
/// let mut cell = FieldValue::unknown();
/// assert!(!cell.is_known());
///
/// cell.set(21.5_f32);
/// assert_eq!(cell.value(), Some(21.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldValue<T>(Option<T>);

impl<T> FieldValue<T> {
    /// Creates an unknown cell.
    #[must_use]
    pub const fn unknown() -> Self {
        Self(None)
    }

    /// Stores a value, returning the one it replaced.
    pub fn set(&mut self, value: T) -> Option<T> {
        self.0.replace(value)
    }

    /// Returns `true` once the cell has received a value.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.0.is_some()
    }

    /// Returns a reference to the value, if known.
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }
}

impl<T: Copy> FieldValue<T> {
    /// Returns a copy of the value, if known.
    #[must_use]
    pub const fn value(&self) -> Option<T> {
        self.0
    }
}

impl<T> Default for FieldValue<T> {
    fn default() -> Self {
        Self::unknown()
    }
}

/// Macro generating `ALL`, `index` and `as_str` for a field group.
macro_rules! field_group {
    ($name:ident, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $name {
            /// Every field of this group, in storage order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Number of fields in this group.
            pub const COUNT: usize = Self::ALL.len();

            /// Returns the storage slot of this field.
            #[must_use]
            pub const fn index(self) -> usize {
                self as usize
            }

            /// Returns the field name used in logs.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// On/off fields exposed as switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SwitchField {
    /// Main power of the indoor unit.
    Power,
    /// Automatic coil cleaning after cooling.
    AutomaticCleaning,
    /// Power of the domestic hot water heater.
    WaterHeaterPower,
}

field_group!(SwitchField, {
    Power => "power",
    AutomaticCleaning => "automatic_cleaning",
    WaterHeaterPower => "water_heater_power",
});

/// Setpoint fields exposed as numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NumberField {
    /// Room target temperature.
    TargetTemperature,
    /// Target temperature of the water leaving the heat pump.
    WaterOutletTarget,
    /// Target temperature of the domestic hot water tank.
    TargetWaterTemperature,
}

field_group!(NumberField, {
    TargetTemperature => "target_temperature",
    WaterOutletTarget => "water_outlet_target",
    TargetWaterTemperature => "target_water_temperature",
});

/// Read-only measurement fields exposed as sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SensorField {
    /// Room temperature measured by the indoor unit, before calibration.
    RoomTemperature,
    /// Outdoor air temperature.
    OutdoorTemperature,
    /// Evaporator inlet temperature.
    IndoorEvaInTemperature,
    /// Evaporator outlet temperature.
    IndoorEvaOutTemperature,
    /// Active error code, 0 when healthy.
    ErrorCode,
    /// Instantaneous power draw of the outdoor unit in W.
    OutdoorInstantaneousPower,
    /// Cumulative energy of the outdoor unit in kWh.
    OutdoorCumulativeEnergy,
    /// Current drawn by the outdoor unit in A.
    OutdoorCurrent,
    /// Supply voltage of the outdoor unit in V.
    OutdoorVoltage,
}

field_group!(SensorField, {
    RoomTemperature => "room_temperature",
    OutdoorTemperature => "outdoor_temperature",
    IndoorEvaInTemperature => "indoor_eva_in_temperature",
    IndoorEvaOutTemperature => "indoor_eva_out_temperature",
    ErrorCode => "error_code",
    OutdoorInstantaneousPower => "outdoor_instantaneous_power",
    OutdoorCumulativeEnergy => "outdoor_cumulative_energy",
    OutdoorCurrent => "outdoor_current",
    OutdoorVoltage => "outdoor_voltage",
});

/// Tag identifying one logical piece of device state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKind {
    /// An on/off field.
    Switch(SwitchField),
    /// A setpoint field.
    Number(NumberField),
    /// A measurement field.
    Sensor(SensorField),
    /// Indoor unit operating mode.
    Mode,
    /// Water heater operating mode.
    WaterHeaterMode,
    /// Fan speed.
    FanMode,
    /// Vendor alt-mode.
    AltMode,
    /// Vertical swing flag.
    SwingVertical,
    /// Horizontal swing flag.
    SwingHorizontal,
    /// A raw protocol message exposed as a sensor.
    CustomSensor(u16),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Switch(field) => fmt::Display::fmt(field, f),
            Self::Number(field) => fmt::Display::fmt(field, f),
            Self::Sensor(field) => fmt::Display::fmt(field, f),
            Self::Mode => f.write_str("mode"),
            Self::WaterHeaterMode => f.write_str("water_heater_mode"),
            Self::FanMode => f.write_str("fan_mode"),
            Self::AltMode => f.write_str("alt_mode"),
            Self::SwingVertical => f.write_str("swing_vertical"),
            Self::SwingHorizontal => f.write_str("swing_horizontal"),
            Self::CustomSensor(number) => write!(f, "custom_sensor_{number:#06x}"),
        }
    }
}
