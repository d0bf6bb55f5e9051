// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

use crate::error::StateError;
use crate::sample::SampleData;
use crate::tone::Tone;
use anyhow::Result;
use chrono::{DateTime, Utc};
use orchis_types::{
    AnalyticsAlert, ControlSubsystem, DashboardSnapshot, NotificationItem, OrchidRecord,
    SensorMetric, SubsystemName,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How many predictive alerts the overview column previews
pub const ALERT_PREVIEW_LEN: usize = 3;

// ============= Dashboard Tab =============

/// Top-level dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardTab {
    #[default]
    Overview,
    Analytics,
    Controls,
    History,
    Notifications,
    Settings,
}

impl DashboardTab {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Analytics => "Predictive analytics",
            Self::Controls => "Controls",
            Self::History => "History",
            Self::Notifications => "Notifications",
            Self::Settings => "Settings",
        }
    }

    /// URL slug for `?tab=` selection
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Analytics => "analytics",
            Self::Controls => "controls",
            Self::History => "history",
            Self::Notifications => "notifications",
            Self::Settings => "settings",
        }
    }

    /// List all tabs in display order
    pub fn all() -> &'static [DashboardTab] {
        &[
            Self::Overview,
            Self::Analytics,
            Self::Controls,
            Self::History,
            Self::Notifications,
            Self::Settings,
        ]
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for DashboardTab {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "overview" => Ok(Self::Overview),
            "analytics" => Ok(Self::Analytics),
            "controls" => Ok(Self::Controls),
            "history" => Ok(Self::History),
            "notifications" => Ok(Self::Notifications),
            "settings" => Ok(Self::Settings),
            _ => Err(anyhow::anyhow!(
                "Unknown tab: '{}'. Supported tabs: {}",
                s,
                Self::all()
                    .iter()
                    .map(|t| t.slug())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

// ============= Dashboard State =============

/// In-memory state of one dashboard instance.
///
/// Each instance owns its state exclusively; every mutation below runs
/// synchronously in response to a single user action or snapshot delivery,
/// and nothing here is persisted anywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub metrics: Vec<SensorMetric>,
    pub orchids: Vec<OrchidRecord>,
    pub alerts: Vec<AnalyticsAlert>,
    pub controls: Vec<ControlSubsystem>,
    pub notifications: Vec<NotificationItem>,

    /// Currently selected tab; most recent selection wins
    pub active_tab: DashboardTab,

    /// Supplier-provided error message; when present the view renders a
    /// static alert panel with a retry affordance
    pub error: Option<String>,

    /// Supplier is still gathering data
    pub loading: bool,

    /// When the most recent snapshot was folded in
    pub last_reconciled: Option<DateTime<Utc>>,
}

impl DashboardState {
    /// Build initial state from a supplier snapshot, falling back to the
    /// injected sample data for every omitted collection.
    pub fn from_snapshot(snapshot: &DashboardSnapshot, samples: &SampleData) -> Self {
        Self {
            metrics: snapshot
                .metrics
                .clone()
                .unwrap_or_else(|| samples.metrics.clone()),
            orchids: snapshot
                .orchids
                .clone()
                .unwrap_or_else(|| samples.orchids.clone()),
            alerts: snapshot
                .alerts
                .clone()
                .unwrap_or_else(|| samples.alerts.clone()),
            controls: snapshot
                .controls
                .clone()
                .unwrap_or_else(|| samples.controls.clone()),
            notifications: snapshot
                .notifications
                .clone()
                .unwrap_or_else(|| samples.notifications.clone()),
            active_tab: DashboardTab::default(),
            error: snapshot.error.clone(),
            loading: snapshot.loading,
            last_reconciled: Some(snapshot.generated_at.unwrap_or_else(Utc::now)),
        }
    }

    /// Fold a new supplier snapshot into local state.
    ///
    /// Only collections the snapshot actually carries overwrite local state;
    /// omitted collections keep whatever the user has locally (including
    /// dismissals and toggles). Called explicitly on each delivery so the
    /// data flow stays auditable — there is no implicit reactive observation.
    pub fn reconcile(&mut self, snapshot: &DashboardSnapshot) {
        if let Some(metrics) = &snapshot.metrics {
            self.metrics = metrics.clone();
        }
        if let Some(orchids) = &snapshot.orchids {
            self.orchids = orchids.clone();
        }
        if let Some(alerts) = &snapshot.alerts {
            self.alerts = alerts.clone();
        }
        if let Some(controls) = &snapshot.controls {
            self.controls = controls.clone();
        }
        if let Some(notifications) = &snapshot.notifications {
            self.notifications = notifications.clone();
        }
        self.error = snapshot.error.clone();
        self.loading = snapshot.loading;
        self.last_reconciled = Some(snapshot.generated_at.unwrap_or_else(Utc::now));
    }

    /// Select a tab; the most recent user action wins.
    pub fn select_tab(&mut self, tab: DashboardTab) {
        self.active_tab = tab;
    }

    /// Flip the auto flag of exactly one subsystem, leaving every other entry
    /// untouched. Returns the new flag value.
    ///
    /// A name with no entry in the collection is a loud error: rendering a
    /// toggle as applied when nothing changed would be worse than failing.
    pub fn toggle_auto(&mut self, name: SubsystemName) -> Result<bool, StateError> {
        let subsystem = self
            .controls
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or(StateError::UnknownSubsystem(name))?;
        subsystem.auto = !subsystem.auto;
        Ok(subsystem.auto)
    }

    /// Remove exactly the notification with this id, preserving the relative
    /// order of the rest. Unknown ids are a no-op; returns whether anything
    /// was removed.
    pub fn dismiss_notification(&mut self, id: &str) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    /// Mark a notification read without removing it (the snooze affordance).
    /// Returns whether the id matched anything.
    pub fn mark_notification_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(item) => {
                item.read = Some(true);
                true
            }
            None => false,
        }
    }

    /// Worst metric tone, for the header banner. An empty metric set reads as
    /// idle.
    pub fn overall_tone(&self) -> Tone {
        self.metrics
            .iter()
            .map(|m| Tone::from(m.status))
            .max_by_key(Tone::escalation_rank)
            .unwrap_or(Tone::Idle)
    }

    /// The alerts previewed in the overview column (at most
    /// [`ALERT_PREVIEW_LEN`], in supplier order).
    pub fn alert_preview(&self) -> &[AnalyticsAlert] {
        let end = self.alerts.len().min(ALERT_PREVIEW_LEN);
        &self.alerts[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchis_types::{MetricStatus, NotificationLevel, SubsystemStatus};

    fn sample_state() -> DashboardState {
        DashboardState::from_snapshot(&DashboardSnapshot::default(), &SampleData::builtin())
    }

    #[test]
    fn empty_snapshot_falls_back_to_samples_everywhere() {
        let samples = SampleData::builtin();
        let state = sample_state();

        assert_eq!(state.metrics, samples.metrics);
        assert_eq!(state.orchids, samples.orchids);
        assert_eq!(state.alerts, samples.alerts);
        assert_eq!(state.controls, samples.controls);
        assert_eq!(state.notifications, samples.notifications);
        assert_eq!(state.active_tab, DashboardTab::Overview);
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn supplied_collection_overrides_samples() {
        let snapshot = DashboardSnapshot {
            metrics: Some(vec![]),
            ..Default::default()
        };
        let state = DashboardState::from_snapshot(&snapshot, &SampleData::builtin());

        // An explicitly empty collection is respected, not replaced
        assert!(state.metrics.is_empty());
        assert!(!state.orchids.is_empty());
    }

    #[test]
    fn toggle_auto_touches_only_the_named_subsystem() {
        let mut state = sample_state();
        let others_before: Vec<ControlSubsystem> = state
            .controls
            .iter()
            .filter(|s| s.name != SubsystemName::Watering)
            .cloned()
            .collect();
        let watering_before = state
            .controls
            .iter()
            .find(|s| s.name == SubsystemName::Watering)
            .unwrap()
            .auto;

        let now = state.toggle_auto(SubsystemName::Watering).unwrap();
        assert_eq!(now, !watering_before);

        let others_after: Vec<ControlSubsystem> = state
            .controls
            .iter()
            .filter(|s| s.name != SubsystemName::Watering)
            .cloned()
            .collect();
        assert_eq!(others_before, others_after);
    }

    #[test]
    fn toggle_auto_twice_restores_the_flag() {
        let mut state = sample_state();
        let before = state.controls[0].auto;
        let name = state.controls[0].name;
        state.toggle_auto(name).unwrap();
        state.toggle_auto(name).unwrap();
        assert_eq!(state.controls[0].auto, before);
    }

    #[test]
    fn toggle_auto_on_missing_entry_fails_loudly() {
        let mut state = sample_state();
        state.controls.retain(|s| s.name != SubsystemName::Lighting);

        let err = state.toggle_auto(SubsystemName::Lighting).unwrap_err();
        assert_eq!(err, StateError::UnknownSubsystem(SubsystemName::Lighting));
    }

    #[test]
    fn dismiss_removes_exactly_one_and_preserves_order() {
        let mut state = sample_state();
        assert!(state.dismiss_notification("n2"));

        let ids: Vec<&str> = state.notifications.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n3"]);
    }

    #[test]
    fn dismiss_unknown_id_is_a_noop() {
        let mut state = sample_state();
        let before = state.notifications.clone();
        assert!(!state.dismiss_notification("n999"));
        assert_eq!(state.notifications, before);
    }

    #[test]
    fn mark_read_keeps_the_entry() {
        let mut state = sample_state();
        assert!(state.mark_notification_read("n1"));
        let item = state.notifications.iter().find(|n| n.id == "n1").unwrap();
        assert_eq!(item.read, Some(true));
        assert_eq!(item.level, NotificationLevel::Info);
    }

    #[test]
    fn reconcile_overwrites_only_supplied_collections() {
        let mut state = sample_state();
        state.dismiss_notification("n1");
        let notifications_after_dismiss = state.notifications.clone();

        let snapshot = DashboardSnapshot {
            metrics: Some(vec![SensorMetric {
                key: orchis_types::MetricKey::Temperature,
                title: "Temperature".to_owned(),
                unit: "°C".to_owned(),
                value: Some(30.1),
                target: Some("22-26".to_owned()),
                status: MetricStatus::Crit,
                trend: vec![70.0, 80.0, 95.0],
            }]),
            ..Default::default()
        };
        state.reconcile(&snapshot);

        assert_eq!(state.metrics.len(), 1);
        assert_eq!(state.metrics[0].status, MetricStatus::Crit);
        // Local dismissal survives because the snapshot carried no notifications
        assert_eq!(state.notifications, notifications_after_dismiss);
        assert!(state.last_reconciled.is_some());
    }

    #[test]
    fn reconcile_error_switches_and_clears() {
        let mut state = sample_state();
        state.reconcile(&DashboardSnapshot {
            error: Some("sensor gateway unreachable".to_owned()),
            ..Default::default()
        });
        assert!(state.error.is_some());

        state.reconcile(&DashboardSnapshot::default());
        assert!(state.error.is_none());
    }

    #[test]
    fn tab_selection_last_action_wins() {
        let mut state = sample_state();
        state.select_tab(DashboardTab::Controls);
        state.select_tab(DashboardTab::History);
        assert_eq!(state.active_tab, DashboardTab::History);
    }

    #[test]
    fn overall_tone_escalates_to_worst_metric() {
        let mut state = sample_state();
        // Builtin samples carry one warn metric
        assert_eq!(state.overall_tone(), Tone::Warn);

        state.metrics[0].status = MetricStatus::Crit;
        assert_eq!(state.overall_tone(), Tone::Crit);

        state.metrics.clear();
        assert_eq!(state.overall_tone(), Tone::Idle);
    }

    #[test]
    fn alert_preview_caps_at_three() {
        let mut state = sample_state();
        assert_eq!(state.alert_preview().len(), 3);
        state.alerts.truncate(1);
        assert_eq!(state.alert_preview().len(), 1);
    }

    #[test]
    fn subsystem_status_is_untouched_by_toggle() {
        let mut state = sample_state();
        state.toggle_auto(SubsystemName::Climate).unwrap();
        let climate = state
            .controls
            .iter()
            .find(|s| s.name == SubsystemName::Climate)
            .unwrap();
        assert_eq!(climate.status, SubsystemStatus::Active);
    }
}
