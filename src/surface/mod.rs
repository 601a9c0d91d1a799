// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display and control surfaces.
//!
//! A surface is an externally constructed object that renders one field
//! kind and, for writable kinds, accepts user input. The device never owns
//! the concrete UI type; it only sees these small capability traits:
//!
//! - [`Surface`] - `publish(value)`; sensors implement only this
//! - [`ControlSurface`] - additionally receives a [`Writer`] through which
//!   the user's intended value is sent back into the core
//!
//! Surfaces are optional. A field without an attached surface is still
//! tracked; publication is simply skipped.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use heatpump_sync::surface::{ControlSurface, Surface, Writer};
//! use parking_lot::Mutex;
//!
//! #[derive(Default)]
//! struct Switch {
//!     state: Mutex<Option<bool>>,
//!     writer: Mutex<Option<Writer<bool>>>,
//! }
//!
//! impl Surface<bool> for Switch {
//!     fn publish(&self, value: &bool) {
//!         *self.state.lock() = Some(*value);
//!     }
//! }
//!
//! impl ControlSurface<bool> for Switch {
//!     fn bind_writer(&self, writer: Writer<bool>) {
//!         *self.writer.lock() = Some(writer);
//!     }
//! }
//!
//! let switch = Arc::new(Switch::default());
//! switch.publish(&true);
//! assert_eq!(*switch.state.lock(), Some(true));
//! ```

mod bindings;

pub(crate) use bindings::Surfaces;

use std::sync::Arc;

/// Callback a control surface invokes with the user's intended value.
pub type Writer<C> = Arc<dyn Fn(C) + Send + Sync>;

/// Something that renders values of one field kind.
pub trait Surface<T>: Send + Sync {
    /// Renders a new value.
    fn publish(&self, value: &T);
}

/// A surface that also accepts user input.
///
/// `T` is the published value and `C` the command the user issues; they
/// differ only for the climate surface, which publishes a whole
/// [`ClimateState`](crate::state::ClimateState) and receives a
/// [`ClimateCall`](crate::command::ClimateCall).
pub trait ControlSurface<T, C = T>: Surface<T> {
    /// Installs the callback the surface must invoke on user input.
    ///
    /// Called once when the surface is attached. Rebinding a surface
    /// replaces its writer.
    fn bind_writer(&self, writer: Writer<C>);
}
