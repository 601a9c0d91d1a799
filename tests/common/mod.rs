// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Recording test doubles shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use heatpump_sync::protocol::{MessageTarget, Protocol, ProtocolRequest};
use heatpump_sync::surface::{ControlSurface, Surface, Writer};
use heatpump_sync::types::DeviceAddress;
use heatpump_sync::Device;
use parking_lot::Mutex;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

pub const ADDRESS: &str = "20.00.00";

// ============================================================================
// Surfaces
// ============================================================================

/// Surface that remembers everything published to it and the writer it
/// was given.
pub struct RecordingSurface<T, C = T> {
    published: Mutex<Vec<T>>,
    writer: Mutex<Option<Writer<C>>>,
}

impl<T, C> RecordingSurface<T, C> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            published: Mutex::new(Vec::new()),
            writer: Mutex::new(None),
        })
    }
}

impl<T: Clone, C> RecordingSurface<T, C> {
    pub fn published(&self) -> Vec<T> {
        self.published.lock().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.published.lock().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.published.lock().len()
    }

    pub fn is_bound(&self) -> bool {
        self.writer.lock().is_some()
    }

    /// Simulates user input. Returns `false` if no writer is bound.
    pub fn write(&self, value: C) -> bool {
        let writer = self.writer.lock().clone();
        match writer {
            Some(writer) => {
                writer(value);
                true
            }
            None => false,
        }
    }
}

impl<T, C> Surface<T> for RecordingSurface<T, C>
where
    T: Clone + Send + Sync,
    C: Send + Sync,
{
    fn publish(&self, value: &T) {
        self.published.lock().push(value.clone());
    }
}

impl<T, C> ControlSurface<T, C> for RecordingSurface<T, C>
where
    T: Clone + Send + Sync,
    C: Send + Sync,
{
    fn bind_writer(&self, writer: Writer<C>) {
        *self.writer.lock() = Some(writer);
    }
}

// ============================================================================
// Protocol
// ============================================================================

/// Byte sink that keeps every frame.
#[derive(Default)]
pub struct RecordingTarget {
    frames: Mutex<Vec<Vec<u8>>>,
}

impl RecordingTarget {
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.frames.lock().clone()
    }
}

impl MessageTarget for RecordingTarget {
    fn publish_data(&self, data: &[u8]) {
        self.frames.lock().push(data.to_vec());
    }
}

/// Protocol that records requests and encodes them as JSON frames.
#[derive(Default)]
pub struct RecordingProtocol {
    requests: Mutex<Vec<(DeviceAddress, ProtocolRequest)>>,
    updates: AtomicUsize,
}

impl RecordingProtocol {
    pub fn requests(&self) -> Vec<(DeviceAddress, ProtocolRequest)> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> Option<ProtocolRequest> {
        self.requests.lock().last().map(|(_, request)| request.clone())
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

impl Protocol for RecordingProtocol {
    fn publish_request(
        &self,
        target: &dyn MessageTarget,
        address: &DeviceAddress,
        request: &ProtocolRequest,
    ) {
        target.publish_data(request.to_string().as_bytes());
        self.requests.lock().push((address.clone(), request.clone()));
    }

    fn protocol_update(&self, _target: &dyn MessageTarget) {
        self.updates.fetch_add(1, Ordering::SeqCst);
    }
}

/// A device wired to recording doubles.
pub struct Fixture {
    pub device: Device,
    pub protocol: Arc<RecordingProtocol>,
    pub target: Arc<RecordingTarget>,
}

impl Fixture {
    pub fn new() -> Self {
        let protocol = Arc::new(RecordingProtocol::default());
        let target = Arc::new(RecordingTarget::default());
        let device = Device::new(ADDRESS, target.clone(), protocol.clone());
        Self {
            device,
            protocol,
            target,
        }
    }

    /// A device whose catalog is `{("Sleep", 1), ("Quiet", 2)}`.
    pub fn with_catalog() -> Self {
        let mut fixture = Self::new();
        fixture.device.add_alt_mode("Sleep", 1).unwrap();
        fixture.device.add_alt_mode("Quiet", 2).unwrap();
        fixture
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Layer counting WARN events.
#[derive(Clone, Default)]
pub struct WarnCounter(Arc<AtomicUsize>);

impl WarnCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Runs `f` with a subscriber installed on this thread and returns its
/// result together with the number of warnings it logged.
pub fn count_warnings<R>(f: impl FnOnce() -> R) -> (R, usize) {
    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, counter.count())
}
