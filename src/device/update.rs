// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound path: storing updates and republishing them.

use crate::error::ValueError;
use crate::resolve;
use crate::state::{FieldUpdate, NumberField, SensorField, SwitchField};
use crate::surface::Surfaces;
use crate::types::{Mode, SwingMode};

use super::{Device, UpdateOutcome};

impl Device {
    /// Applies one inbound update.
    ///
    /// The value is stored, published to the surface attached for its
    /// field, and any composite it feeds is recomputed. A value that fails
    /// a device-specific check, such as an alt-mode code missing from the
    /// catalog, is logged and ignored and the previous state is kept.
    pub fn update(&mut self, update: FieldUpdate) -> UpdateOutcome {
        let kind = update.kind();

        match self.apply(update) {
            Ok(()) => {
                tracing::debug!(address = %self.address, field = %kind, "Applied update");
                UpdateOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(
                    address = %self.address,
                    field = %kind,
                    error = %err,
                    "Ignoring invalid update"
                );
                UpdateOutcome::Rejected(err)
            }
        }
    }

    /// Applies a batch of updates in order.
    pub fn update_all<I>(&mut self, updates: I) -> Vec<UpdateOutcome>
    where
        I: IntoIterator<Item = FieldUpdate>,
    {
        updates.into_iter().map(|update| self.update(update)).collect()
    }

    fn apply(&mut self, update: FieldUpdate) -> Result<(), ValueError> {
        let kind = update.kind();

        match update {
            FieldUpdate::Switch { field, value } => {
                self.state.set_switch(field, value);
                Surfaces::publish(self.surfaces.switches[field.index()].as_ref(), kind, &value);
                if field == SwitchField::Power {
                    self.publish_operating_mode();
                }
            }
            FieldUpdate::Number { field, value } => {
                self.state.set_number(field, value);
                Surfaces::publish(self.surfaces.numbers[field.index()].as_ref(), kind, &value);
                if field == NumberField::TargetTemperature {
                    self.publish_climate();
                }
            }
            FieldUpdate::Sensor { field, value } => {
                self.state.set_sensor(field, value);
                let shown = if field == SensorField::RoomTemperature {
                    value + self.room_temperature_offset
                } else {
                    value
                };
                Surfaces::publish(self.surfaces.sensors[field.index()].as_ref(), kind, &shown);
                if field == SensorField::RoomTemperature {
                    self.publish_climate();
                }
            }
            FieldUpdate::Mode(mode) => {
                self.state.set_mode(mode);
                Surfaces::publish(self.surfaces.mode.as_ref(), kind, &mode);
                self.publish_operating_mode();
            }
            FieldUpdate::WaterHeaterMode(mode) => {
                self.state.set_water_heater_mode(mode);
                Surfaces::publish(self.surfaces.water_heater_mode.as_ref(), kind, &mode);
            }
            FieldUpdate::FanMode(mode) => {
                resolve::fan_setting(mode)?;
                self.state.set_fan_mode(mode);
                self.publish_climate();
            }
            FieldUpdate::AltMode(code) => {
                let preset = resolve::preset(code, &self.catalog.read())?;
                self.state.set_alt_mode(code, preset);
                self.publish_climate();
            }
            FieldUpdate::SwingVertical(enabled) => {
                self.state.set_swing_axis(SwingMode::VERTICAL, enabled);
                self.publish_climate();
            }
            FieldUpdate::SwingHorizontal(enabled) => {
                self.state.set_swing_axis(SwingMode::HORIZONTAL, enabled);
                self.publish_climate();
            }
            FieldUpdate::CustomSensor {
                message_number,
                value,
            } => {
                self.state.set_custom_sensor(message_number, value);
                Surfaces::publish(
                    self.surfaces.custom_sensors.get(&message_number),
                    kind,
                    &value,
                );
            }
        }

        Ok(())
    }

    /// Republishes the climate surface if the operating mode is resolved.
    fn publish_operating_mode(&self) {
        if self.state.power() == Some(true) && self.state.mode() == Some(Mode::Unknown) {
            tracing::warn!(
                address = %self.address,
                code = Mode::Unknown.code(),
                "Mode has no climate equivalent, showing off"
            );
        }
        if self.state.operating_mode().is_some() {
            self.publish_climate();
        } else {
            tracing::trace!(
                address = %self.address,
                "Operating mode waits for both power and mode"
            );
        }
    }

    fn publish_climate(&self) {
        let Some(surface) = self.surfaces.climate.as_ref() else {
            tracing::trace!(address = %self.address, "No climate surface attached");
            return;
        };
        let climate = self.climate_state();
        tracing::debug!(address = %self.address, ?climate, "Publishing climate state");
        surface.publish(&climate);
    }
}
