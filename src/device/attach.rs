// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Binding surfaces to field kinds.
//!
//! Writable surfaces receive a writer that turns the user's value into a
//! [`FieldCommand`]. Attaching a surface to a kind that already has one
//! replaces it. No attach call publishes anything.

use std::sync::Arc;

use crate::command::{ClimateCall, FieldCommand};
use crate::state::{ClimateState, FieldKind, NumberField, SensorField, SwitchField};
use crate::surface::{ControlSurface, Surface};
use crate::types::{Mode, WaterHeaterMode};

use super::Device;

impl Device {
    /// Attaches an on/off control.
    pub fn attach_switch(&mut self, field: SwitchField, surface: Arc<dyn ControlSurface<bool>>) {
        surface.bind_writer(
            self.commander
                .writer(move |value: bool| FieldCommand::Switch { field, value }),
        );
        self.surfaces.switches[field.index()] = Some(surface);
        self.log_attached(FieldKind::Switch(field));
    }

    /// Attaches a setpoint control.
    pub fn attach_number(&mut self, field: NumberField, surface: Arc<dyn ControlSurface<f32>>) {
        surface.bind_writer(
            self.commander
                .writer(move |value: f32| FieldCommand::Number { field, value }),
        );
        self.surfaces.numbers[field.index()] = Some(surface);
        self.log_attached(FieldKind::Number(field));
    }

    /// Attaches a read-only measurement display.
    pub fn attach_sensor(&mut self, field: SensorField, surface: Arc<dyn Surface<f32>>) {
        self.surfaces.sensors[field.index()] = Some(surface);
        self.log_attached(FieldKind::Sensor(field));
    }

    /// Attaches the indoor unit mode select.
    pub fn attach_mode_select(&mut self, surface: Arc<dyn ControlSurface<Mode>>) {
        surface.bind_writer(self.commander.writer(FieldCommand::Mode));
        self.surfaces.mode = Some(surface);
        self.log_attached(FieldKind::Mode);
    }

    /// Attaches the water heater mode select.
    pub fn attach_water_heater_mode_select(
        &mut self,
        surface: Arc<dyn ControlSurface<WaterHeaterMode>>,
    ) {
        surface.bind_writer(self.commander.writer(FieldCommand::WaterHeaterMode));
        self.surfaces.water_heater_mode = Some(surface);
        self.log_attached(FieldKind::WaterHeaterMode);
    }

    /// Attaches the climate controller.
    ///
    /// It is republished on every change of operating mode, temperatures,
    /// fan speed, preset and swing.
    pub fn attach_climate(&mut self, surface: Arc<dyn ControlSurface<ClimateState, ClimateCall>>) {
        surface.bind_writer(self.commander.writer(FieldCommand::Climate));
        self.surfaces.climate = Some(surface);
        tracing::debug!(address = %self.address, "Attached climate surface");
    }

    /// Attaches a display for a raw protocol message.
    pub fn attach_custom_sensor(&mut self, message_number: u16, surface: Arc<dyn Surface<f32>>) {
        self.surfaces.custom_sensors.insert(message_number, surface);
        self.log_attached(FieldKind::CustomSensor(message_number));
    }

    fn log_attached(&self, kind: FieldKind) {
        tracing::debug!(address = %self.address, field = %kind, "Attached surface");
    }
}
