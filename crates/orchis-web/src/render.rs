// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

//! View models and askama templates for the dashboard pages.
//!
//! Everything the templates touch is pre-rendered into plain strings and
//! booleans here, so the templates stay free of formatting logic.

use askama::Template;
use orchis_core::{DashboardState, DashboardTab, Tone, confidence_fraction, points_attribute};
use orchis_types::{
    AlertSeverity, AnalyticsAlert, ControlSubsystem, HealthRating, NotificationItem, OrchidRecord,
    SensorMetric,
};

/// Projected growth index for the care-scenario panel (3-day forecast)
const FORECAST_SAMPLES: [f64; 12] = [
    40.0, 42.0, 45.0, 50.0, 58.0, 62.0, 68.0, 70.0, 73.0, 75.0, 78.0, 80.0,
];

/// Growth index series for the history panel
const GROWTH_HISTORY_SAMPLES: [f64; 12] = [
    30.0, 31.0, 33.0, 35.0, 40.0, 45.0, 47.0, 50.0, 54.0, 60.0, 62.0, 65.0,
];

/// Humidity correlation series for the history panel
const HUMIDITY_HISTORY_SAMPLES: [f64; 12] = [
    60.0, 58.0, 59.0, 61.0, 63.0, 65.0, 64.0, 63.0, 62.0, 64.0, 66.0, 67.0,
];

const EM_DASH: &str = "—";

// ============= View Models =============

#[derive(Debug, Clone)]
pub struct TabView {
    pub slug: String,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct MetricView {
    pub title: String,
    pub unit: String,
    pub value_display: String,
    pub target_display: String,
    pub badge_label: String,
    pub tone_class: String,
    pub points: String,
    pub has_trend: bool,
}

impl MetricView {
    fn from_metric(metric: &SensorMetric) -> Self {
        let tone = Tone::from(metric.status);
        Self {
            title: metric.title.clone(),
            unit: metric.unit.clone(),
            value_display: metric
                .value
                .map_or_else(|| EM_DASH.to_owned(), |v| format!("{v}")),
            target_display: metric.target.clone().unwrap_or_else(|| EM_DASH.to_owned()),
            badge_label: tone.label().to_owned(),
            tone_class: tone.css_class().to_owned(),
            points: points_attribute(&metric.trend),
            has_trend: !metric.trend.is_empty(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrchidView {
    pub id: String,
    pub name: String,
    pub species: String,
    pub stage_label: String,
    pub health_label: String,
    pub health_class: String,
    pub image_url: String,
    pub recommendations: Vec<String>,
}

impl OrchidView {
    fn from_record(orchid: &OrchidRecord) -> Self {
        Self {
            id: orchid.id.clone(),
            name: orchid.name.clone(),
            species: orchid.species.clone(),
            stage_label: orchid.stage.display_name().to_owned(),
            health_label: orchid.health.label().to_owned(),
            health_class: health_css(orchid.health).to_owned(),
            image_url: orchid.image_url.clone(),
            recommendations: orchid.visible_recommendations().to_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AlertView {
    pub id: String,
    pub title: String,
    pub kind_label: String,
    pub severity_label: String,
    pub severity_class: String,
    pub recommendation: String,
    pub confidence_display: String,
    /// Clamped bar width in percent, rendered into an inline style
    pub confidence_width: String,
}

impl AlertView {
    fn from_alert(alert: &AnalyticsAlert) -> Self {
        let confidence = confidence_fraction(alert.confidence);
        Self {
            id: alert.id.clone(),
            title: alert.title.clone(),
            kind_label: alert.kind.display_name().to_owned(),
            severity_label: alert.severity.label().to_owned(),
            severity_class: severity_css(alert.severity).to_owned(),
            recommendation: alert.recommendation.clone(),
            confidence_display: format!("{confidence:.0}%"),
            confidence_width: format!("{confidence:.0}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ControlView {
    pub slug: String,
    pub label: String,
    pub auto: bool,
    pub status_label: String,
    pub tone_class: String,
    pub last_run_display: String,
}

impl ControlView {
    fn from_subsystem(subsystem: &ControlSubsystem) -> Self {
        Self {
            slug: subsystem.name.to_config_value().to_owned(),
            label: subsystem.name.display_name().to_owned(),
            auto: subsystem.auto,
            status_label: subsystem.status.to_string(),
            tone_class: Tone::from(subsystem.status).css_class().to_owned(),
            last_run_display: subsystem
                .last_run
                .clone()
                .unwrap_or_else(|| EM_DASH.to_owned()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotificationView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub time: String,
    pub tone_class: String,
    pub read: bool,
}

impl NotificationView {
    fn from_item(item: &NotificationItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            time: item.time.clone(),
            tone_class: Tone::from(item.level).css_class().to_owned(),
            read: item.read.unwrap_or(false),
        }
    }
}

// ============= Templates =============

/// Full dashboard page
#[derive(Template, Debug)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub greenhouse_name: String,
    pub banner_label: String,
    pub banner_class: String,
    /// Empty string means no supplier error
    pub error: String,
    pub loading: bool,
    pub active_tab: String,
    pub tabs: Vec<TabView>,
    pub metrics: Vec<MetricView>,
    pub orchids: Vec<OrchidView>,
    pub alerts: Vec<AlertView>,
    pub alert_preview: Vec<AlertView>,
    pub controls: Vec<ControlView>,
    pub notifications: Vec<NotificationView>,
    pub forecast_points: String,
    pub growth_history_points: String,
    pub humidity_history_points: String,
    pub last_reconciled_display: String,
}

impl DashboardTemplate {
    pub fn from_state(state: &DashboardState, greenhouse_name: &str) -> Self {
        let tone = state.overall_tone();
        Self {
            greenhouse_name: greenhouse_name.to_owned(),
            banner_label: banner_label(tone).to_owned(),
            banner_class: tone.css_class().to_owned(),
            error: state.error.clone().unwrap_or_default(),
            loading: state.loading,
            active_tab: state.active_tab.slug().to_owned(),
            tabs: DashboardTab::all()
                .iter()
                .map(|tab| TabView {
                    slug: tab.slug().to_owned(),
                    label: tab.display_name().to_owned(),
                    active: *tab == state.active_tab,
                })
                .collect(),
            metrics: state.metrics.iter().map(MetricView::from_metric).collect(),
            orchids: state.orchids.iter().map(OrchidView::from_record).collect(),
            alerts: state.alerts.iter().map(AlertView::from_alert).collect(),
            alert_preview: state
                .alert_preview()
                .iter()
                .map(AlertView::from_alert)
                .collect(),
            controls: state
                .controls
                .iter()
                .map(ControlView::from_subsystem)
                .collect(),
            notifications: state
                .notifications
                .iter()
                .map(NotificationView::from_item)
                .collect(),
            forecast_points: points_attribute(&FORECAST_SAMPLES),
            growth_history_points: points_attribute(&GROWTH_HISTORY_SAMPLES),
            humidity_history_points: points_attribute(&HUMIDITY_HISTORY_SAMPLES),
            last_reconciled_display: state
                .last_reconciled
                .map_or_else(|| EM_DASH.to_owned(), |t| {
                    t.format("%Y-%m-%d %H:%M:%S UTC").to_string()
                }),
        }
    }
}

/// Live section re-rendered over SSE (banner plus metric and control cards)
#[derive(Template, Debug)]
#[template(path = "live.html")]
pub struct LiveTemplate {
    pub banner_label: String,
    pub banner_class: String,
    pub metrics: Vec<MetricView>,
    pub controls: Vec<ControlView>,
}

impl LiveTemplate {
    pub fn from_state(state: &DashboardState) -> Self {
        let tone = state.overall_tone();
        Self {
            banner_label: banner_label(tone).to_owned(),
            banner_class: tone.css_class().to_owned(),
            metrics: state.metrics.iter().map(MetricView::from_metric).collect(),
            controls: state
                .controls
                .iter()
                .map(ControlView::from_subsystem)
                .collect(),
        }
    }
}

// ============= Style Lookups =============

/// Header banner wording for the aggregated greenhouse tone
fn banner_label(tone: Tone) -> &'static str {
    match tone {
        Tone::Ok => "All systems nominal",
        Tone::Warn => "Attention needed",
        Tone::Crit => "Critical condition detected",
        Tone::Idle => "Sensors idle",
    }
}

fn severity_css(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Low => "sev-low",
        AlertSeverity::Medium => "sev-medium",
        AlertSeverity::High => "sev-high",
        AlertSeverity::Critical => "sev-critical",
    }
}

fn health_css(health: HealthRating) -> &'static str {
    match health {
        HealthRating::Excellent => "health-excellent",
        HealthRating::Good => "health-good",
        HealthRating::Fair => "health-fair",
        HealthRating::Poor => "health-poor",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchis_core::SampleData;
    use orchis_types::DashboardSnapshot;

    fn template_from_samples() -> DashboardTemplate {
        let state =
            DashboardState::from_snapshot(&DashboardSnapshot::default(), &SampleData::builtin());
        DashboardTemplate::from_state(&state, "Test House")
    }

    #[test]
    fn dashboard_template_renders_sample_state() {
        let html = template_from_samples().render().unwrap();
        assert!(html.contains("Test House"));
        assert!(html.contains("Temperature"));
        assert!(html.contains("tone-warn"));
        assert!(html.contains("<polyline"));
    }

    #[test]
    fn confidence_width_is_clamped_in_the_view() {
        let mut alert = SampleData::builtin().alerts[0].clone();
        alert.confidence = 150.0;
        assert_eq!(AlertView::from_alert(&alert).confidence_width, "100");

        alert.confidence = -20.0;
        assert_eq!(AlertView::from_alert(&alert).confidence_width, "0");

        alert.confidence = 64.0;
        assert_eq!(AlertView::from_alert(&alert).confidence_width, "64");
    }

    #[test]
    fn missing_value_renders_as_placeholder() {
        let mut metric = SampleData::builtin().metrics[0].clone();
        metric.value = None;
        metric.trend.clear();
        let view = MetricView::from_metric(&metric);
        assert_eq!(view.value_display, "—");
        assert!(!view.has_trend);
        assert_eq!(view.points, "");
    }

    #[test]
    fn error_snapshot_renders_alert_panel() {
        let snapshot = DashboardSnapshot {
            error: Some("sensor gateway unreachable".to_owned()),
            ..Default::default()
        };
        let state = DashboardState::from_snapshot(&snapshot, &SampleData::builtin());
        let html = DashboardTemplate::from_state(&state, "Test House")
            .render()
            .unwrap();
        assert!(html.contains("sensor gateway unreachable"));
        assert!(html.contains("Retry"));
    }

    #[test]
    fn live_template_renders_controls() {
        let state =
            DashboardState::from_snapshot(&DashboardSnapshot::default(), &SampleData::builtin());
        let html = LiveTemplate::from_state(&state).render().unwrap();
        assert!(html.contains("Watering"));
        assert!(html.contains("tone-ok"));
    }
}
