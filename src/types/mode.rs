// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode types for the indoor unit and the water heater.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

use super::ClimateMode;

/// Operating mode reported by the indoor unit.
///
/// # Examples
///
/// ```
/// use heatpump_sync::types::Mode;
///
/// assert_eq!(Mode::Heat.as_str(), "Heat");
/// assert_eq!("Cool".parse::<Mode>().unwrap(), Mode::Cool);
/// assert_eq!(Mode::from_code(3).unwrap(), Mode::Fan);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// The unit reported a mode this library does not recognize.
    Unknown,
    /// Automatic heat/cool selection.
    Auto,
    /// Cooling.
    Cool,
    /// Dehumidifying.
    Dry,
    /// Fan only.
    Fan,
    /// Heating.
    Heat,
}

impl Mode {
    /// Every mode, in protocol code order.
    pub const ALL: [Self; 6] = [
        Self::Unknown,
        Self::Auto,
        Self::Cool,
        Self::Dry,
        Self::Fan,
        Self::Heat,
    ];

    /// Returns the label shown on select surfaces.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Auto => "Auto",
            Self::Cool => "Cool",
            Self::Dry => "Dry",
            Self::Fan => "Fan",
            Self::Heat => "Heat",
        }
    }

    /// Returns the protocol code.
    #[must_use]
    pub const fn code(&self) -> i16 {
        match self {
            Self::Unknown => -1,
            Self::Auto => 0,
            Self::Cool => 1,
            Self::Dry => 2,
            Self::Fan => 3,
            Self::Heat => 4,
        }
    }

    /// Decodes a protocol code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownCode` if the code is not a mode.
    pub const fn from_code(code: i16) -> Result<Self, ValueError> {
        match code {
            -1 => Ok(Self::Unknown),
            0 => Ok(Self::Auto),
            1 => Ok(Self::Cool),
            2 => Ok(Self::Dry),
            3 => Ok(Self::Fan),
            4 => Ok(Self::Heat),
            _ => Err(ValueError::UnknownCode { field: "mode", code }),
        }
    }

    /// Translates to the climate domain.
    ///
    /// Returns `None` for [`Mode::Unknown`], which has no climate equivalent.
    #[must_use]
    pub const fn to_climate(&self) -> Option<ClimateMode> {
        match self {
            Self::Unknown => None,
            Self::Auto => Some(ClimateMode::Auto),
            Self::Cool => Some(ClimateMode::Cool),
            Self::Dry => Some(ClimateMode::Dry),
            Self::Fan => Some(ClimateMode::FanOnly),
            Self::Heat => Some(ClimateMode::Heat),
        }
    }

    /// Translates from the climate domain.
    ///
    /// Returns `None` for [`ClimateMode::Off`], which is expressed through
    /// the power flag rather than a mode.
    #[must_use]
    pub const fn from_climate(mode: ClimateMode) -> Option<Self> {
        match mode {
            ClimateMode::Off => None,
            ClimateMode::Auto => Some(Self::Auto),
            ClimateMode::Cool => Some(Self::Cool),
            ClimateMode::Dry => Some(Self::Dry),
            ClimateMode::FanOnly => Some(Self::Fan),
            ClimateMode::Heat => Some(Self::Heat),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValueError::InvalidMode(s.to_string()))
    }
}

/// Operating mode of the domestic hot water heater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WaterHeaterMode {
    /// The unit reported a mode this library does not recognize.
    Unknown,
    /// Heat-pump only, lowest consumption.
    Eco,
    /// Heat pump with electric backup when needed.
    Standard,
    /// Fastest reheat.
    Power,
    /// Forced one-shot heating.
    Force,
}

impl WaterHeaterMode {
    /// Every water heater mode, in protocol code order.
    pub const ALL: [Self; 5] = [
        Self::Unknown,
        Self::Eco,
        Self::Standard,
        Self::Power,
        Self::Force,
    ];

    /// Returns the label shown on select surfaces.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Eco => "Eco",
            Self::Standard => "Standard",
            Self::Power => "Power",
            Self::Force => "Force",
        }
    }

    /// Returns the protocol code.
    #[must_use]
    pub const fn code(&self) -> i16 {
        match self {
            Self::Unknown => -1,
            Self::Eco => 0,
            Self::Standard => 1,
            Self::Power => 2,
            Self::Force => 3,
        }
    }

    /// Decodes a protocol code.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownCode` if the code is not a water heater mode.
    pub const fn from_code(code: i16) -> Result<Self, ValueError> {
        match code {
            -1 => Ok(Self::Unknown),
            0 => Ok(Self::Eco),
            1 => Ok(Self::Standard),
            2 => Ok(Self::Power),
            3 => Ok(Self::Force),
            _ => Err(ValueError::UnknownCode {
                field: "water heater mode",
                code,
            }),
        }
    }
}

impl fmt::Display for WaterHeaterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WaterHeaterMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ValueError::InvalidWaterHeaterMode(s.to_string()))
    }
}
