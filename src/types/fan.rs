// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

use super::ClimateFanMode;

/// Fan speed reported by the indoor unit.
///
/// # Examples
///
/// ```
/// use heatpump_sync::types::{ClimateFanMode, FanMode};
///
/// assert_eq!(FanMode::Mid.to_climate(), Some(ClimateFanMode::Medium));
/// assert_eq!(FanMode::Turbo.to_climate(), None);
/// assert_eq!(FanMode::Turbo.custom_label(), Some("Turbo"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FanMode {
    /// The unit reported a speed this library does not recognize.
    Unknown,
    /// Speed chosen by the unit.
    Auto,
    /// Low speed.
    Low,
    /// Medium speed.
    Mid,
    /// High speed.
    High,
    /// Maximum speed.
    Turbo,
    /// Fan stopped.
    Off,
}

impl FanMode {
    /// Every fan mode, in protocol code order.
    pub const ALL: [Self; 7] = [
        Self::Unknown,
        Self::Auto,
        Self::Low,
        Self::Mid,
        Self::High,
        Self::Turbo,
        Self::Off,
    ];

    /// Returns the protocol-side label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Auto => "Auto",
            Self::Low => "Low",
            Self::Mid => "Mid",
            Self::High => "High",
            Self::Turbo => "Turbo",
            Self::Off => "Off",
        }
    }

    /// Returns the protocol code.
    #[must_use]
    pub const fn code(&self) -> i16 {
        match self {
            Self::Unknown => -1,
            Self::Auto => 0,
            Self::Low => 1,
            Self::Mid => 2,
            Self::High => 3,
            Self::Turbo => 4,
            Self::Off => 5,
        }
    }

    /// Decodes a protocol code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownCode` if the code is not a fan mode.
    pub const fn from_code(code: i16) -> Result<Self, ValueError> {
        match code {
            -1 => Ok(Self::Unknown),
            0 => Ok(Self::Auto),
            1 => Ok(Self::Low),
            2 => Ok(Self::Mid),
            3 => Ok(Self::High),
            4 => Ok(Self::Turbo),
            5 => Ok(Self::Off),
            _ => Err(ValueError::UnknownCode {
                field: "fan mode",
                code,
            }),
        }
    }

    /// Translates to a well-known climate fan mode, if one exists.
    #[must_use]
    pub const fn to_climate(&self) -> Option<ClimateFanMode> {
        match self {
            Self::Auto => Some(ClimateFanMode::Auto),
            Self::Low => Some(ClimateFanMode::Low),
            Self::Mid => Some(ClimateFanMode::Medium),
            Self::High => Some(ClimateFanMode::High),
            Self::Off => Some(ClimateFanMode::Off),
            Self::Turbo | Self::Unknown => None,
        }
    }

    /// Returns the custom climate label for speeds without a well-known
    /// equivalent.
    #[must_use]
    pub const fn custom_label(&self) -> Option<&'static str> {
        match self {
            Self::Turbo => Some("Turbo"),
            _ => None,
        }
    }

    /// Translates a well-known climate fan mode back to the protocol.
    #[must_use]
    pub const fn from_climate(mode: ClimateFanMode) -> Self {
        match mode {
            ClimateFanMode::Auto => Self::Auto,
            ClimateFanMode::Low => Self::Low,
            ClimateFanMode::Medium => Self::Mid,
            ClimateFanMode::High => Self::High,
            ClimateFanMode::Off => Self::Off,
        }
    }

    /// Translates a custom climate label back to the protocol.
    #[must_use]
    pub fn from_custom_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.custom_label() == Some(label))
    }
}

impl fmt::Display for FanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FanMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValueError::InvalidFanMode(s.to_string()))
    }
}

/// Fan setting published on the climate surface.
///
/// A speed is either one of the well-known climate fan modes or a custom
/// label, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FanSetting {
    /// A well-known fan mode.
    Standard(ClimateFanMode),
    /// A vendor-specific label.
    Custom(String),
}

impl FanSetting {
    /// Returns the well-known fan mode, if this is one.
    #[must_use]
    pub const fn fan_mode(&self) -> Option<ClimateFanMode> {
        match self {
            Self::Standard(mode) => Some(*mode),
            Self::Custom(_) => None,
        }
    }

    /// Returns the custom label, if this is one.
    #[must_use]
    pub fn custom_fan_mode(&self) -> Option<&str> {
        match self {
            Self::Standard(_) => None,
            Self::Custom(label) => Some(label),
        }
    }

    /// Returns the label regardless of kind.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Standard(mode) => mode.as_str(),
            Self::Custom(label) => label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_and_code_round_trip() {
        for mode in FanMode::ALL {
            assert_eq!(mode.as_str().parse::<FanMode>().unwrap(), mode);
            assert_eq!(FanMode::from_code(mode.code()).unwrap(), mode);
        }
    }

    #[test]
    fn climate_round_trip() {
        for mode in ClimateFanMode::ALL {
            assert_eq!(FanMode::from_climate(*mode).to_climate(), Some(*mode));
        }
    }

    #[test]
    fn custom_label_round_trip() {
        assert_eq!(FanMode::from_custom_label("Turbo"), Some(FanMode::Turbo));
        assert_eq!(FanMode::from_custom_label("Breeze"), None);
    }

    #[test]
    fn every_known_speed_has_exactly_one_label() {
        for mode in FanMode::ALL {
            if mode == FanMode::Unknown {
                continue;
            }
            assert!(mode.to_climate().is_some() ^ mode.custom_label().is_some());
        }
    }

    #[test]
    fn fan_setting_accessors() {
        let standard = FanSetting::Standard(ClimateFanMode::High);
        assert_eq!(standard.fan_mode(), Some(ClimateFanMode::High));
        assert_eq!(standard.custom_fan_mode(), None);
        assert_eq!(standard.label(), "high");

        let custom = FanSetting::Custom("Turbo".to_string());
        assert_eq!(custom.fan_mode(), None);
        assert_eq!(custom.custom_fan_mode(), Some("Turbo"));
    }
}
