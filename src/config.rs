// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-device configuration.
//!
//! Everything here describes the physical unit rather than its state: which
//! louvers it can swing, how far off its room sensor reads and which
//! alt-modes it knows. A configuration can be built in code or loaded from
//! JSON; missing keys take their defaults.
//!
//! ```json
//! {
//!     "supports_vertical_swing": true,
//!     "room_temperature_offset": -0.5,
//!     "alt_modes": [
//!         { "name": "Sleep", "value": 1 },
//!         { "name": "Quiet", "value": 2 }
//!     ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{AltMode, AltModeCatalog};

/// Static description of one unit.
///
/// # Examples
///
/// ```
/// use heatpump_sync::config::DeviceConfig;
///
/// let config = DeviceConfig::new()
///     .with_vertical_swing(true)
///     .with_room_temperature_offset(-0.5)
///     .with_alt_mode("Sleep", 1)
///     .with_alt_mode("Quiet", 2);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.alt_modes.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// The unit has a vertically swinging louver.
    pub supports_vertical_swing: bool,
    /// The unit has a horizontally swinging louver.
    pub supports_horizontal_swing: bool,
    /// Added to every room temperature reading before it is shown.
    pub room_temperature_offset: f32,
    /// Alt-modes the unit accepts.
    pub alt_modes: AltModeCatalog,
}

impl DeviceConfig {
    /// Creates a configuration with no swing, no offset and no alt-modes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` if the input is not a valid configuration
    /// document, or the first validation error otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use heatpump_sync::config::DeviceConfig;
    ///
    /// let config = DeviceConfig::from_json(r#"{"alt_modes": [{"name": "Quiet", "value": 2}]}"#)?;
    /// assert!(!config.supports_vertical_swing);
    /// assert_eq!(config.alt_modes.find_by_code(2).map(|d| d.name.as_str()), Some("Quiet"));
    /// # Ok::<(), heatpump_sync::error::ConfigError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOffset` for a non-finite offset, or the
    /// catalog's validation error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.room_temperature_offset.is_finite() {
            return Err(ConfigError::InvalidOffset(self.room_temperature_offset));
        }
        self.alt_modes.validate()
    }

    /// Sets vertical swing support.
    #[must_use]
    pub fn with_vertical_swing(mut self, supported: bool) -> Self {
        self.supports_vertical_swing = supported;
        self
    }

    /// Sets horizontal swing support.
    #[must_use]
    pub fn with_horizontal_swing(mut self, supported: bool) -> Self {
        self.supports_horizontal_swing = supported;
        self
    }

    /// Sets the room temperature calibration offset in °C.
    #[must_use]
    pub fn with_room_temperature_offset(mut self, offset: f32) -> Self {
        self.room_temperature_offset = offset;
        self
    }

    /// Adds an alt-mode to the catalog.
    #[must_use]
    pub fn with_alt_mode(mut self, name: impl Into<String>, value: AltMode) -> Self {
        self.alt_modes.push(name, value);
        self
    }
}
