// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

//! Integration tests for the snapshot lifecycle
//!
//! This tests the full flow: supplier JSON -> DashboardSnapshot -> validation ->
//! state construction with sample fallback -> explicit reconcile of a later delivery.

use orchis_core::{DashboardState, DashboardTab, SampleData, Tone};
use orchis_types::{DashboardSnapshot, MetricStatus, SubsystemName};

const FIRST_DELIVERY: &str = r#"{
    "metrics": [
        {
            "key": "temperature",
            "title": "Temperature",
            "unit": "°C",
            "value": 24.2,
            "target": "22-26",
            "status": "ok",
            "trend": [48, 50, 52, 51, 49, 50]
        },
        {
            "key": "moisture",
            "title": "Soil Moisture",
            "unit": "%VWC",
            "value": 29,
            "target": "30-40",
            "status": "warn",
            "trend": [40, 38, 35, 33, 31, 29]
        }
    ],
    "controls": [
        { "name": "watering", "auto": false, "status": "active", "last_run": "Today 06:40" },
        { "name": "climate", "auto": true, "status": "idle" },
        { "name": "lighting", "auto": true, "status": "error" }
    ],
    "generated_at": "2025-08-25T06:45:00Z"
}"#;

#[test]
fn supplier_delivery_round_trip() {
    let snapshot: DashboardSnapshot =
        serde_json::from_str(FIRST_DELIVERY).expect("Failed to parse supplier snapshot");
    snapshot.validate().expect("Snapshot invariants violated");

    let samples = SampleData::builtin();
    let mut state = DashboardState::from_snapshot(&snapshot, &samples);

    // Supplied collections replace samples; omitted ones fall back
    assert_eq!(state.metrics.len(), 2);
    assert_eq!(state.orchids, samples.orchids);
    assert_eq!(state.notifications, samples.notifications);
    assert_eq!(state.active_tab, DashboardTab::Overview);
    assert!(state.last_reconciled.is_some());

    // Local interaction between deliveries
    state.select_tab(DashboardTab::Controls);
    let lighting_auto = state.toggle_auto(SubsystemName::Lighting).unwrap();
    assert!(!lighting_auto);
    assert!(state.dismiss_notification("n3"));

    // Second delivery carries only metrics; local control and notification
    // edits must survive the reconcile
    let second = DashboardSnapshot {
        metrics: Some(vec![]),
        ..Default::default()
    };
    state.reconcile(&second);

    assert!(state.metrics.is_empty());
    assert_eq!(state.active_tab, DashboardTab::Controls);
    assert!(
        !state
            .controls
            .iter()
            .find(|s| s.name == SubsystemName::Lighting)
            .unwrap()
            .auto
    );
    assert!(state.notifications.iter().all(|n| n.id != "n3"));
}

#[test]
fn duplicate_ids_fail_validation_before_state_construction() {
    let snapshot: DashboardSnapshot = serde_json::from_str(
        r#"{
            "orchids": [
                {
                    "id": "o1", "name": "Aurora", "species": "Phalaenopsis sp.",
                    "stage": "bloom", "health": "excellent",
                    "image_url": "https://example.com/a.jpg"
                },
                {
                    "id": "o1", "name": "Twin", "species": "Phalaenopsis sp.",
                    "stage": "rest", "health": "good",
                    "image_url": "https://example.com/b.jpg"
                }
            ]
        }"#,
    )
    .unwrap();

    let err = snapshot.validate().unwrap_err();
    assert!(err.to_string().contains("Duplicate orchid id"));
}

#[test]
fn error_snapshot_degrades_overall_view() {
    let snapshot: DashboardSnapshot = serde_json::from_str(
        r#"{
            "error": "sensor gateway unreachable",
            "metrics": [
                {
                    "key": "humidity", "title": "Humidity", "unit": "%RH",
                    "status": "crit", "trend": []
                }
            ]
        }"#,
    )
    .unwrap();
    snapshot.validate().unwrap();

    let state = DashboardState::from_snapshot(&snapshot, &SampleData::builtin());
    assert_eq!(state.error.as_deref(), Some("sensor gateway unreachable"));
    assert_eq!(state.overall_tone(), Tone::Crit);
    assert_eq!(state.metrics[0].value, None);
    assert_eq!(state.metrics[0].status, MetricStatus::Crit);
}
