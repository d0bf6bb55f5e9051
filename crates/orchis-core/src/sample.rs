// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

use orchis_types::{
    AlertKind, AlertSeverity, AnalyticsAlert, ControlSubsystem, GrowthStage, HealthRating,
    MetricKey, MetricStatus, NotificationItem, NotificationLevel, OrchidRecord, SensorMetric,
    SubsystemName, SubsystemStatus,
};

/// Built-in fallback data injected at dashboard construction.
///
/// Any collection the data supplier omits falls back to these so the view is
/// never empty. This is an explicit constant passed in by the caller, never
/// hidden module-level state, so tests can substitute their own.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleData {
    pub metrics: Vec<SensorMetric>,
    pub orchids: Vec<OrchidRecord>,
    pub alerts: Vec<AnalyticsAlert>,
    pub controls: Vec<ControlSubsystem>,
    pub notifications: Vec<NotificationItem>,
}

impl SampleData {
    /// The stock demo greenhouse: four sensor channels, three plants, three
    /// predictive alerts, the three controllable subsystems, and a short
    /// notification backlog.
    pub fn builtin() -> Self {
        Self {
            metrics: vec![
                SensorMetric {
                    key: MetricKey::Temperature,
                    title: "Temperature".to_owned(),
                    unit: "°C".to_owned(),
                    value: Some(23.6),
                    target: Some("22-26".to_owned()),
                    status: MetricStatus::Ok,
                    trend: vec![
                        45.0, 48.0, 46.0, 50.0, 53.0, 52.0, 49.0, 47.0, 48.0, 50.0, 51.0, 52.0,
                    ],
                },
                SensorMetric {
                    key: MetricKey::Humidity,
                    title: "Humidity".to_owned(),
                    unit: "%RH".to_owned(),
                    value: Some(62.0),
                    target: Some("55-70".to_owned()),
                    status: MetricStatus::Ok,
                    trend: vec![
                        60.0, 58.0, 59.0, 61.0, 63.0, 65.0, 64.0, 62.0, 61.0, 60.0, 62.0, 63.0,
                    ],
                },
                SensorMetric {
                    key: MetricKey::Moisture,
                    title: "Soil Moisture".to_owned(),
                    unit: "%VWC".to_owned(),
                    value: Some(34.0),
                    target: Some("30-40".to_owned()),
                    status: MetricStatus::Warn,
                    trend: vec![
                        42.0, 40.0, 39.0, 37.0, 36.0, 35.0, 34.0, 33.0, 32.0, 34.0, 35.0, 34.0,
                    ],
                },
                SensorMetric {
                    key: MetricKey::Light,
                    title: "Light".to_owned(),
                    unit: "µmol/m²·s".to_owned(),
                    value: Some(210.0),
                    target: Some("150-250".to_owned()),
                    status: MetricStatus::Ok,
                    // Light trend is pre-scaled like every other channel
                    trend: vec![
                        12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 23.0, 24.0, 22.0, 21.0, 20.5, 21.0,
                    ],
                },
            ],
            orchids: vec![
                OrchidRecord {
                    id: "o1".to_owned(),
                    name: "Aurora".to_owned(),
                    species: "Phalaenopsis sp.".to_owned(),
                    stage: GrowthStage::Bloom,
                    health: HealthRating::Excellent,
                    image_url:
                        "https://images.unsplash.com/photo-1501004318641-b39e6451bec6?q=80&w=1200"
                            .to_owned(),
                    recommendations: vec![
                        "Maintain humidity near 60%.".to_owned(),
                        "Bright, indirect light; avoid midday sun.".to_owned(),
                        "Fertilize at 1/4 strength weekly.".to_owned(),
                    ],
                },
                OrchidRecord {
                    id: "o2".to_owned(),
                    name: "Saffron".to_owned(),
                    species: "Cattleya maxima".to_owned(),
                    stage: GrowthStage::Vegetative,
                    health: HealthRating::Good,
                    image_url:
                        "https://images.unsplash.com/photo-1520975682031-ae5b43b5f03b?q=80&w=1200"
                            .to_owned(),
                    recommendations: vec![
                        "Increase airflow around pseudobulbs.".to_owned(),
                        "Allow medium to dry slightly between waterings.".to_owned(),
                    ],
                },
                OrchidRecord {
                    id: "o3".to_owned(),
                    name: "Zephyr".to_owned(),
                    species: "Dendrobium nobile".to_owned(),
                    stage: GrowthStage::Spike,
                    health: HealthRating::Fair,
                    image_url:
                        "https://images.unsplash.com/photo-1582582621959-4eb51a2be2b2?q=80&w=1200"
                            .to_owned(),
                    recommendations: vec![
                        "Boost light to encourage spikes.".to_owned(),
                        "Monitor for mites on undersides of leaves.".to_owned(),
                    ],
                },
            ],
            alerts: vec![
                AnalyticsAlert {
                    id: "a1".to_owned(),
                    kind: AlertKind::Disease,
                    title: "Black rot risk uptrend".to_owned(),
                    confidence: 78.0,
                    recommendation:
                        "Improve drainage; reduce leaf wetness; apply systemic fungicide if lesions appear."
                            .to_owned(),
                    severity: AlertSeverity::Medium,
                },
                AnalyticsAlert {
                    id: "a2".to_owned(),
                    kind: AlertKind::Pest,
                    title: "Mealybug infestation likely".to_owned(),
                    confidence: 64.0,
                    recommendation:
                        "Inspect nodes; isolate affected plants; apply alcohol swab or horticultural oil."
                            .to_owned(),
                    severity: AlertSeverity::Low,
                },
                AnalyticsAlert {
                    id: "a3".to_owned(),
                    kind: AlertKind::Growth,
                    title: "Insufficient light for flowering (Phalaenopsis)".to_owned(),
                    confidence: 86.0,
                    recommendation:
                        "Increase PPFD by 10-15% during photoperiod; extend light cycle by 30 minutes."
                            .to_owned(),
                    severity: AlertSeverity::High,
                },
            ],
            controls: vec![
                ControlSubsystem {
                    name: SubsystemName::Watering,
                    auto: true,
                    status: SubsystemStatus::Idle,
                    last_run: Some("Today 07:10".to_owned()),
                },
                ControlSubsystem {
                    name: SubsystemName::Climate,
                    auto: true,
                    status: SubsystemStatus::Active,
                    last_run: None,
                },
                ControlSubsystem {
                    name: SubsystemName::Lighting,
                    auto: false,
                    status: SubsystemStatus::Paused,
                    last_run: Some("Yesterday 19:30".to_owned()),
                },
            ],
            notifications: vec![
                NotificationItem {
                    id: "n1".to_owned(),
                    title: "Fertilizer schedule due".to_owned(),
                    description: "Apply 1/4 strength balanced fertilizer to mature orchids."
                        .to_owned(),
                    time: "in 2h".to_owned(),
                    level: NotificationLevel::Info,
                    read: None,
                },
                NotificationItem {
                    id: "n2".to_owned(),
                    title: "Low substrate moisture".to_owned(),
                    description: "Moisture at 28% in Zone B benches; consider watering.".to_owned(),
                    time: "just now".to_owned(),
                    level: NotificationLevel::Warning,
                    read: None,
                },
                NotificationItem {
                    id: "n3".to_owned(),
                    title: "Sensor maintenance".to_owned(),
                    description: "Replace humidity probe (H-12) nearing end-of-life.".to_owned(),
                    time: "tomorrow".to_owned(),
                    level: NotificationLevel::Info,
                    read: None,
                },
            ],
        }
    }
}

impl Default for SampleData {
    fn default() -> Self {
        Self::builtin()
    }
}
