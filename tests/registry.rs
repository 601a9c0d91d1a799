// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Registry routing and configuration loading.

mod common;

use std::sync::Arc;
use std::thread;

use common::{RecordingProtocol, RecordingSurface, RecordingTarget};
use heatpump_sync::protocol::{MessageTarget, Protocol};
use heatpump_sync::state::{ClimateState, FieldUpdate};
use heatpump_sync::types::{ClimateMode, ClimatePreset, ClimateSwingMode, DeviceAddress, Mode};
use heatpump_sync::{ClimateCall, DeviceConfig, DeviceRegistry, Error, UpdateOutcome};

fn registry() -> (DeviceRegistry, Arc<RecordingProtocol>, Arc<dyn MessageTarget>) {
    let protocol = Arc::new(RecordingProtocol::default());
    let shared: Arc<dyn Protocol> = protocol.clone();
    let registry = DeviceRegistry::new(move |_: &DeviceAddress| Arc::clone(&shared));
    (registry, protocol, Arc::new(RecordingTarget::default()))
}

#[test]
fn dispatch_routes_by_address() {
    let (registry, _, target) = registry();
    let indoor = registry.get_or_create("20.00.00", &target);
    let other = registry.get_or_create("20.00.01", &target);

    let outcome = registry
        .dispatch(&"20.00.01".into(), FieldUpdate::Mode(Mode::Heat))
        .unwrap();

    assert_eq!(outcome, UpdateOutcome::Applied);
    assert_eq!(other.lock().state().mode(), Some(Mode::Heat));
    assert_eq!(indoor.lock().state().mode(), None);
}

#[test]
fn dispatch_reports_rejections() {
    let (registry, _, target) = registry();
    registry.get_or_create("20.00.00", &target);

    let outcome = registry
        .dispatch(&"20.00.00".into(), FieldUpdate::AltMode(4))
        .unwrap();
    assert!(!outcome.is_applied());
}

#[test]
fn dispatch_to_unknown_address_fails() {
    let (registry, _, _) = registry();
    let result = registry.dispatch(&"30.00.00".into(), FieldUpdate::power(true));
    assert!(matches!(result, Err(Error::DeviceNotFound(_))));
}

#[test]
fn resolver_is_asked_per_new_device() {
    let asked = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let protocol: Arc<dyn Protocol> = Arc::new(RecordingProtocol::default());
    let log = Arc::clone(&asked);
    let registry = DeviceRegistry::new(move |address: &DeviceAddress| {
        log.lock().push(address.clone());
        Arc::clone(&protocol)
    });
    let target: Arc<dyn MessageTarget> = Arc::new(RecordingTarget::default());

    registry.get_or_create("20.00.00", &target);
    registry.get_or_create("20.00.00", &target);
    registry.get_or_create("20.00.01", &target);

    assert_eq!(
        *asked.lock(),
        vec![DeviceAddress::from("20.00.00"), DeviceAddress::from("20.00.01")]
    );
}

#[test]
fn concurrent_producers_are_serialized_per_device() {
    let (registry, _, target) = registry();
    let registry = Arc::new(registry);
    let device = registry.get_or_create("20.00.00", &target);
    let climate = RecordingSurface::<ClimateState, ClimateCall>::new();
    device.lock().attach_climate(climate.clone());

    let handles: Vec<_> = (0..4u8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let address = DeviceAddress::from("20.00.00");
                for _ in 0..25 {
                    let update = if i % 2 == 0 {
                        FieldUpdate::SwingVertical(true)
                    } else {
                        FieldUpdate::SwingHorizontal(true)
                    };
                    registry.dispatch(&address, update).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(climate.count(), 100);
    assert_eq!(
        device.lock().climate_state().swing_mode,
        Some(ClimateSwingMode::Both)
    );
}

#[test]
fn configured_from_json() {
    let (registry, protocol, target) = registry();
    let device = registry.get_or_create("20.00.00", &target);
    let config = DeviceConfig::from_json(
        r#"{
            "supports_vertical_swing": true,
            "room_temperature_offset": -0.5,
            "alt_modes": [
                {"name": "Sleep", "value": 1},
                {"name": "Quiet", "value": 2}
            ]
        }"#,
    )
    .unwrap();
    device.lock().configure(&config).unwrap();

    let address = DeviceAddress::from("20.00.00");
    registry.dispatch(&address, FieldUpdate::power(true)).unwrap();
    registry.dispatch(&address, FieldUpdate::Mode(Mode::Cool)).unwrap();
    registry.dispatch(&address, FieldUpdate::room_temperature(25.0)).unwrap();
    registry.dispatch(&address, FieldUpdate::AltMode(1)).unwrap();

    let climate = device.lock().climate_state();
    assert_eq!(climate.mode, Some(ClimateMode::Cool));
    assert_eq!(climate.current_temperature, Some(24.5));
    assert_eq!(climate.preset(), Some(ClimatePreset::Sleep));

    let traits = device.lock().traits();
    assert_eq!(
        traits.swing_modes,
        vec![ClimateSwingMode::Off, ClimateSwingMode::Vertical]
    );

    registry.refresh_all();
    assert_eq!(protocol.update_count(), 1);
}
