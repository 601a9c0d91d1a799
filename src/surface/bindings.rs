// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-device surface bindings.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::command::ClimateCall;
use crate::state::{ClimateState, FieldKind, NumberField, SensorField, SwitchField};
use crate::types::{Mode, WaterHeaterMode};

use super::{ControlSurface, Surface};

pub(crate) type SwitchSurface = Arc<dyn ControlSurface<bool>>;
pub(crate) type NumberSurface = Arc<dyn ControlSurface<f32>>;
pub(crate) type SensorSurface = Arc<dyn Surface<f32>>;
pub(crate) type ModeSurface = Arc<dyn ControlSurface<Mode>>;
pub(crate) type WaterHeaterModeSurface = Arc<dyn ControlSurface<WaterHeaterMode>>;
pub(crate) type ClimateSurface = Arc<dyn ControlSurface<ClimateState, ClimateCall>>;

/// The surfaces attached to one device, at most one per field kind.
///
/// Every slot is optional. Publishing to an empty slot is a no-op.
#[derive(Default)]
pub(crate) struct Surfaces {
    pub(crate) switches: [Option<SwitchSurface>; SwitchField::COUNT],
    pub(crate) numbers: [Option<NumberSurface>; NumberField::COUNT],
    pub(crate) sensors: [Option<SensorSurface>; SensorField::COUNT],
    pub(crate) mode: Option<ModeSurface>,
    pub(crate) water_heater_mode: Option<WaterHeaterModeSurface>,
    pub(crate) climate: Option<ClimateSurface>,
    pub(crate) custom_sensors: HashMap<u16, SensorSurface>,
}

impl Surfaces {
    /// Publishes to a surface if one is attached.
    pub(crate) fn publish<T, S>(slot: Option<&Arc<S>>, kind: FieldKind, value: &T)
    where
        S: Surface<T> + ?Sized,
    {
        match slot {
            Some(surface) => surface.publish(value),
            None => tracing::trace!(%kind, "No surface attached, skipping publication"),
        }
    }

    /// Returns every field kind that currently has a surface.
    pub(crate) fn attached(&self) -> Vec<FieldKind> {
        let mut kinds = Vec::new();
        kinds.extend(
            SwitchField::ALL
                .iter()
                .filter(|field| self.switches[field.index()].is_some())
                .map(|field| FieldKind::Switch(*field)),
        );
        kinds.extend(
            NumberField::ALL
                .iter()
                .filter(|field| self.numbers[field.index()].is_some())
                .map(|field| FieldKind::Number(*field)),
        );
        kinds.extend(
            SensorField::ALL
                .iter()
                .filter(|field| self.sensors[field.index()].is_some())
                .map(|field| FieldKind::Sensor(*field)),
        );
        if self.mode.is_some() {
            kinds.push(FieldKind::Mode);
        }
        if self.water_heater_mode.is_some() {
            kinds.push(FieldKind::WaterHeaterMode);
        }
        let mut custom: Vec<_> = self.custom_sensors.keys().copied().collect();
        custom.sort_unstable();
        kinds.extend(custom.into_iter().map(FieldKind::CustomSensor));
        kinds
    }
}

impl fmt::Debug for Surfaces {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surfaces")
            .field("attached", &self.attached())
            .field("climate", &self.climate.is_some())
            .finish()
    }
}
