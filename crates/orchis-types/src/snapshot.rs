// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

use crate::alerts::AnalyticsAlert;
use crate::controls::ControlSubsystem;
use crate::metrics::SensorMetric;
use crate::notifications::NotificationItem;
use crate::orchids::OrchidRecord;
use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Input contract from the data-supply collaborator.
///
/// Every collection is optional: an omitted collection falls back to the
/// built-in sample data when the dashboard state is constructed, so the view
/// is never empty. A snapshot is a one-shot delivery; there is no server
/// round-trip behind it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub metrics: Option<Vec<SensorMetric>>,

    #[serde(default)]
    pub orchids: Option<Vec<OrchidRecord>>,

    #[serde(default)]
    pub alerts: Option<Vec<AnalyticsAlert>>,

    #[serde(default)]
    pub controls: Option<Vec<ControlSubsystem>>,

    #[serde(default)]
    pub notifications: Option<Vec<NotificationItem>>,

    /// When present, the dashboard renders a static alert panel with a retry
    /// affordance instead of the normal content
    #[serde(default)]
    pub error: Option<String>,

    /// Supplier is still gathering data; the view shows loading placeholders
    #[serde(default)]
    pub loading: bool,

    /// When the supplier produced this snapshot
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

impl DashboardSnapshot {
    /// Check collection invariants: ids unique within each collection, at most
    /// one entry per subsystem name.
    pub fn validate(&self) -> Result<()> {
        if let Some(metrics) = &self.metrics {
            let mut seen = HashSet::new();
            for metric in metrics {
                if !seen.insert(metric.key) {
                    bail!("Duplicate metric key in snapshot: {}", metric.key);
                }
            }
        }

        if let Some(orchids) = &self.orchids {
            Self::check_unique_ids("orchid", orchids.iter().map(|o| o.id.as_str()))?;
        }

        if let Some(alerts) = &self.alerts {
            Self::check_unique_ids("alert", alerts.iter().map(|a| a.id.as_str()))?;
        }

        if let Some(notifications) = &self.notifications {
            Self::check_unique_ids("notification", notifications.iter().map(|n| n.id.as_str()))?;
        }

        if let Some(controls) = &self.controls {
            let mut seen = HashSet::new();
            for subsystem in controls {
                if !seen.insert(subsystem.name) {
                    bail!("Duplicate subsystem in snapshot: {}", subsystem.name);
                }
            }
        }

        Ok(())
    }

    fn check_unique_ids<'a>(entity: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                bail!("Duplicate {entity} id in snapshot: '{id}'");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{SubsystemName, SubsystemStatus};
    use crate::notifications::NotificationLevel;

    #[test]
    fn empty_snapshot_is_valid() {
        assert!(DashboardSnapshot::default().validate().is_ok());
    }

    #[test]
    fn partial_snapshot_deserializes_with_defaults() {
        let snapshot: DashboardSnapshot = serde_json::from_str(
            r#"{
                "notifications": [
                    {
                        "id": "n1",
                        "title": "Fertilizer schedule due",
                        "description": "Apply 1/4 strength balanced fertilizer.",
                        "time": "in 2h",
                        "level": "info"
                    }
                ]
            }"#,
        )
        .unwrap();

        assert!(snapshot.metrics.is_none());
        assert!(!snapshot.loading);
        let notifications = snapshot.notifications.as_ref().unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].level, NotificationLevel::Info);
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn duplicate_subsystem_is_rejected() {
        let entry = ControlSubsystem {
            name: SubsystemName::Watering,
            auto: true,
            status: SubsystemStatus::Idle,
            last_run: None,
        };
        let snapshot = DashboardSnapshot {
            controls: Some(vec![entry.clone(), entry]),
            ..Default::default()
        };

        let err = snapshot.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate subsystem"));
    }

    #[test]
    fn duplicate_notification_id_is_rejected() {
        let item = NotificationItem {
            id: "n1".to_owned(),
            title: "t".to_owned(),
            description: "d".to_owned(),
            time: "now".to_owned(),
            level: NotificationLevel::Warning,
            read: None,
        };
        let snapshot = DashboardSnapshot {
            notifications: Some(vec![item.clone(), item]),
            ..Default::default()
        };

        assert!(snapshot.validate().is_err());
    }
}
