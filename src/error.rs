// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `heatpump_sync` library.
//!
//! Inbound protocol updates never fail with these types: they are absorbed
//! by the device and reported through
//! [`UpdateOutcome`](crate::device::UpdateOutcome). The errors below surface
//! only where the caller can act on them: parsing conversion-layer strings,
//! loading configuration, and looking devices up in the registry.

use thiserror::Error;

use crate::types::{AltMode, DeviceAddress};

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while loading or validating configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// No device is registered under the given address.
    #[error("device {0} not found")]
    DeviceNotFound(DeviceAddress),
}

/// Errors related to value validation and translation.
///
/// These are produced by the conversion layer when a string or protocol
/// code does not name a known value, and by the resolvers when a value is
/// outside the device's domain.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// An unknown mode label was provided.
    #[error("invalid mode: {0}")]
    InvalidMode(String),

    /// An unknown water heater mode label was provided.
    #[error("invalid water heater mode: {0}")]
    InvalidWaterHeaterMode(String),

    /// An unknown fan mode label was provided.
    #[error("invalid fan mode: {0}")]
    InvalidFanMode(String),

    /// An unknown swing mode label was provided.
    #[error("invalid swing mode: {0}")]
    InvalidSwingMode(String),

    /// An unknown climate mode label was provided.
    #[error("invalid climate mode: {0}")]
    InvalidClimateMode(String),

    /// An unknown preset label was provided.
    #[error("invalid preset: {0}")]
    InvalidPreset(String),

    /// A protocol code does not correspond to any value of the field.
    #[error("unknown {field} code {code}")]
    UnknownCode {
        /// The field the code was decoded for.
        field: &'static str,
        /// The raw protocol code.
        code: i16,
    },

    /// The alt-mode code is not in the device's catalog.
    #[error("unsupported alt mode {0}")]
    UnsupportedAltMode(AltMode),

    /// The fan mode has no label in either the standard or custom domain.
    #[error("fan mode {0} has no climate equivalent")]
    UnmappedFanMode(String),

    /// The preset does not name any alt mode in the device's catalog.
    #[error("preset {0} is not supported by this device")]
    UnsupportedPreset(String),
}

/// Errors related to device configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON decoding failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two catalog entries share the same protocol code.
    #[error("alt mode code {0} is listed more than once")]
    DuplicateAltMode(AltMode),

    /// A catalog entry has an empty name.
    #[error("alt mode {0} has an empty name")]
    EmptyAltModeName(AltMode),

    /// The room temperature offset is NaN or infinite.
    #[error("room temperature offset must be finite, got {0}")]
    InvalidOffset(f32),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::UnknownCode {
            field: "fan mode",
            code: 9,
        };
        assert_eq!(err.to_string(), "unknown fan mode code 9");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::UnsupportedAltMode(99).into();
        assert!(matches!(err, Error::Value(ValueError::UnsupportedAltMode(99))));
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::DuplicateAltMode(2);
        assert_eq!(err.to_string(), "alt mode code 2 is listed more than once");
    }

    #[test]
    fn device_not_found_display() {
        let err = Error::DeviceNotFound(DeviceAddress::from("20.00.00"));
        assert_eq!(err.to_string(), "device 20.00.00 not found");
    }
}
