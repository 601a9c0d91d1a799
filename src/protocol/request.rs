// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sparse outbound write request.

use serde::Serialize;

use crate::types::{AltMode, FanMode, Mode, SwingMode, WaterHeaterMode};

/// A write request where only the fields the user changed carry a value.
///
/// `None` means "leave unchanged". The protocol encodes only the present
/// fields.
///
/// # Examples
///
/// ```
/// use heatpump_sync::protocol::ProtocolRequest;
///
/// let request = ProtocolRequest {
///     target_temp: Some(21.5),
///     ..ProtocolRequest::default()
/// };
/// assert_eq!(request.field_count(), 1);
/// assert_eq!(request.to_string(), r#"{"target_temp":21.5}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProtocolRequest {
    /// Main power.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<bool>,
    /// Automatic coil cleaning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_cleaning: Option<bool>,
    /// Water heater power.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_heater_power: Option<bool>,
    /// Indoor unit mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    /// Water heater mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_heater_mode: Option<WaterHeaterMode>,
    /// Room target temperature in °C.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_temp: Option<f32>,
    /// Water outlet target temperature in °C.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_outlet_target: Option<f32>,
    /// Hot water tank target temperature in °C.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_water_temp: Option<f32>,
    /// Fan speed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fan_mode: Option<FanMode>,
    /// Alt-mode code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_mode: Option<AltMode>,
    /// Both swing axes at once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swing_mode: Option<SwingMode>,
}

impl ProtocolRequest {
    /// Returns `true` if no field carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field_count() == 0
    }

    /// Returns the number of fields that carry a value.
    #[must_use]
    pub fn field_count(&self) -> usize {
        [
            self.power.is_some(),
            self.automatic_cleaning.is_some(),
            self.water_heater_power.is_some(),
            self.mode.is_some(),
            self.water_heater_mode.is_some(),
            self.target_temp.is_some(),
            self.water_outlet_target.is_some(),
            self.target_water_temp.is_some(),
            self.fan_mode.is_some(),
            self.alt_mode.is_some(),
            self.swing_mode.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }
}

impl std::fmt::Display for ProtocolRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let request = ProtocolRequest::default();
        assert!(request.is_empty());
        assert_eq!(request.to_string(), "{}");
    }

    #[test]
    fn only_present_fields_are_serialized() {
        let request = ProtocolRequest {
            power: Some(true),
            mode: Some(Mode::Heat),
            swing_mode: Some(SwingMode::ALL),
            ..ProtocolRequest::default()
        };
        assert_eq!(request.field_count(), 3);
        assert_eq!(
            request.to_string(),
            r#"{"power":true,"mode":"Heat","swing_mode":3}"#
        );
    }
}
