// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::resolve;
use crate::types::{
    AltMode, ClimateMode, FanMode, FanSetting, Mode, PresetSetting, SwingMode, WaterHeaterMode,
};

use super::{FieldValue, NumberField, SensorField, SwitchField};

/// Last known value of every field of one unit.
///
/// All cells start unknown and become known on their first update. This
/// struct only stores values; validation and publication are done by
/// [`Device`](crate::device::Device).
///
/// # Examples
///
/// ```
/// use heatpump_sync::state::{DeviceState, SwitchField};
///
/// let state = DeviceState::new();
/// assert_eq!(state.switch(SwitchField::Power), None);
/// assert_eq!(state.operating_mode(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceState {
    switches: [FieldValue<bool>; SwitchField::COUNT],
    numbers: [FieldValue<f32>; NumberField::COUNT],
    sensors: [FieldValue<f32>; SensorField::COUNT],
    mode: FieldValue<Mode>,
    water_heater_mode: FieldValue<WaterHeaterMode>,
    fan_mode: FieldValue<FanMode>,
    alt_mode: FieldValue<AltMode>,
    /// Resolved at update time, so later catalog edits do not change it.
    preset: FieldValue<PresetSetting>,
    swing: FieldValue<SwingMode>,
    custom_sensors: BTreeMap<u16, f32>,
}

impl DeviceState {
    /// Creates a state with every cell unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Switches, numbers, sensors ==========

    /// Gets an on/off field.
    #[must_use]
    pub fn switch(&self, field: SwitchField) -> Option<bool> {
        self.switches[field.index()].value()
    }

    pub(crate) fn set_switch(&mut self, field: SwitchField, value: bool) {
        self.switches[field.index()].set(value);
    }

    /// Gets a setpoint.
    #[must_use]
    pub fn number(&self, field: NumberField) -> Option<f32> {
        self.numbers[field.index()].value()
    }

    pub(crate) fn set_number(&mut self, field: NumberField, value: f32) {
        self.numbers[field.index()].set(value);
    }

    /// Gets a raw measurement.
    ///
    /// The room temperature is returned uncalibrated.
    #[must_use]
    pub fn sensor(&self, field: SensorField) -> Option<f32> {
        self.sensors[field.index()].value()
    }

    pub(crate) fn set_sensor(&mut self, field: SensorField, value: f32) {
        self.sensors[field.index()].set(value);
    }

    /// Gets the last value of a custom sensor.
    #[must_use]
    pub fn custom_sensor(&self, message_number: u16) -> Option<f32> {
        self.custom_sensors.get(&message_number).copied()
    }

    pub(crate) fn set_custom_sensor(&mut self, message_number: u16, value: f32) {
        self.custom_sensors.insert(message_number, value);
    }

    // ========== Modes ==========

    /// Gets the main power flag.
    #[must_use]
    pub fn power(&self) -> Option<bool> {
        self.switch(SwitchField::Power)
    }

    /// Gets the room target temperature.
    #[must_use]
    pub fn target_temperature(&self) -> Option<f32> {
        self.number(NumberField::TargetTemperature)
    }

    /// Gets the indoor unit mode.
    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        self.mode.value()
    }

    pub(crate) fn set_mode(&mut self, value: Mode) {
        self.mode.set(value);
    }

    /// Gets the water heater mode.
    #[must_use]
    pub fn water_heater_mode(&self) -> Option<WaterHeaterMode> {
        self.water_heater_mode.value()
    }

    pub(crate) fn set_water_heater_mode(&mut self, value: WaterHeaterMode) {
        self.water_heater_mode.set(value);
    }

    /// Gets the composite operating mode.
    ///
    /// `None` until both power and mode are known.
    #[must_use]
    pub fn operating_mode(&self) -> Option<ClimateMode> {
        resolve::operating_mode(self.power(), self.mode())
    }

    // ========== Climate extras ==========

    /// Gets the raw fan speed.
    #[must_use]
    pub fn fan_mode(&self) -> Option<FanMode> {
        self.fan_mode.value()
    }

    /// Gets the fan setting for the climate surface.
    #[must_use]
    pub fn fan_setting(&self) -> Option<FanSetting> {
        self.fan_mode().and_then(|mode| resolve::fan_setting(mode).ok())
    }

    pub(crate) fn set_fan_mode(&mut self, value: FanMode) {
        self.fan_mode.set(value);
    }

    /// Gets the last accepted alt-mode code.
    #[must_use]
    pub fn alt_mode(&self) -> Option<AltMode> {
        self.alt_mode.value()
    }

    /// Gets the preset the last accepted alt-mode resolved to.
    #[must_use]
    pub fn preset(&self) -> Option<&PresetSetting> {
        self.preset.get()
    }

    pub(crate) fn set_alt_mode(&mut self, code: AltMode, preset: PresetSetting) {
        self.alt_mode.set(code);
        self.preset.set(preset);
    }

    /// Gets the swing bitmask.
    #[must_use]
    pub fn swing(&self) -> Option<SwingMode> {
        self.swing.value()
    }

    /// Sets or clears one swing axis, preserving the other.
    ///
    /// An unknown swing field is treated as [`SwingMode::FIX`].
    pub(crate) fn set_swing_axis(&mut self, axis: SwingMode, enabled: bool) -> SwingMode {
        let current = self.swing.value().unwrap_or_default();
        let next = current.with_axis(axis, enabled);
        self.swing.set(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ClimatePreset;

    #[test]
    fn new_state_is_unknown() {
        let state = DeviceState::new();
        for field in SwitchField::ALL {
            assert!(state.switch(*field).is_none());
        }
        for field in SensorField::ALL {
            assert!(state.sensor(*field).is_none());
        }
        assert!(state.mode().is_none());
        assert!(state.swing().is_none());
        assert!(state.preset().is_none());
    }

    #[test]
    fn cells_are_independent() {
        let mut state = DeviceState::new();
        state.set_switch(SwitchField::AutomaticCleaning, true);
        state.set_sensor(SensorField::OutdoorTemperature, -2.5);

        assert_eq!(state.switch(SwitchField::AutomaticCleaning), Some(true));
        assert_eq!(state.power(), None);
        assert_eq!(state.sensor(SensorField::OutdoorTemperature), Some(-2.5));
        assert_eq!(state.sensor(SensorField::RoomTemperature), None);
    }

    #[test]
    fn operating_mode_needs_both_inputs() {
        let mut state = DeviceState::new();
        state.set_switch(SwitchField::Power, true);
        assert_eq!(state.operating_mode(), None);

        state.set_mode(Mode::Cool);
        assert_eq!(state.operating_mode(), Some(ClimateMode::Cool));

        state.set_switch(SwitchField::Power, false);
        assert_eq!(state.operating_mode(), Some(ClimateMode::Off));
    }

    #[test]
    fn swing_axes_combine() {
        let mut state = DeviceState::new();
        assert_eq!(state.set_swing_axis(SwingMode::VERTICAL, true).bits(), 0b01);
        assert_eq!(state.set_swing_axis(SwingMode::HORIZONTAL, true).bits(), 0b11);
        assert_eq!(state.set_swing_axis(SwingMode::VERTICAL, false).bits(), 0b10);
        assert_eq!(state.swing(), Some(SwingMode::HORIZONTAL));
    }

    #[test]
    fn alt_mode_stores_code_and_preset() {
        let mut state = DeviceState::new();
        state.set_alt_mode(1, PresetSetting::Standard(ClimatePreset::Sleep));
        assert_eq!(state.alt_mode(), Some(1));
        assert_eq!(
            state.preset(),
            Some(&PresetSetting::Standard(ClimatePreset::Sleep))
        );
    }

    #[test]
    fn custom_sensors() {
        let mut state = DeviceState::new();
        state.set_custom_sensor(0x4204, 23.0);
        assert_eq!(state.custom_sensor(0x4204), Some(23.0));
        assert_eq!(state.custom_sensor(0x4205), None);
    }

    #[test]
    fn serializes_to_json() {
        let mut state = DeviceState::new();
        state.set_switch(SwitchField::Power, true);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["switches"][0], serde_json::json!(true));
        assert_eq!(json["mode"], serde_json::Value::Null);
    }
}
