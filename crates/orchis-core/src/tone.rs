// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

use anyhow::Result;
use orchis_types::{MetricStatus, NotificationLevel, SubsystemStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual tone shared by every status enum on the dashboard.
///
/// Each distinct status set (metric status, subsystem status, notification
/// level) maps onto this one closed set so colors and labels stay consistent
/// across cards. All conversions are total and exhaustive; an unrecognized
/// textual status fails at the parse boundary instead of silently defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tone {
    Ok,
    Warn,
    Crit,
    Idle,
}

impl Tone {
    /// Badge label paired with this tone
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "Stable",
            Self::Warn => "Watch",
            Self::Crit => "Critical",
            Self::Idle => "Idle",
        }
    }

    /// CSS class selecting the color pairing in the web templates
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Ok => "tone-ok",
            Self::Warn => "tone-warn",
            Self::Crit => "tone-crit",
            Self::Idle => "tone-idle",
        }
    }

    /// Get config string value (kebab-case)
    pub fn to_config_value(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warn => "warn",
            Self::Crit => "crit",
            Self::Idle => "idle",
        }
    }

    /// List all tones
    pub fn all() -> &'static [Tone] {
        &[Self::Ok, Self::Warn, Self::Crit, Self::Idle]
    }

    /// Ordering used when aggregating tones for the header banner; higher is
    /// worse. Idle outranks Ok so an all-idle greenhouse does not read as
    /// healthy.
    pub fn escalation_rank(&self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Idle => 1,
            Self::Warn => 2,
            Self::Crit => 3,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_config_value())
    }
}

impl FromStr for Tone {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(Self::Ok),
            "warn" => Ok(Self::Warn),
            "crit" => Ok(Self::Crit),
            "idle" => Ok(Self::Idle),
            _ => Err(anyhow::anyhow!(
                "Unknown tone: '{}'. Supported tones: {}",
                s,
                Self::all()
                    .iter()
                    .map(|t| t.to_config_value())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

impl From<MetricStatus> for Tone {
    fn from(status: MetricStatus) -> Self {
        match status {
            MetricStatus::Ok => Self::Ok,
            MetricStatus::Warn => Self::Warn,
            MetricStatus::Crit => Self::Crit,
            MetricStatus::Idle => Self::Idle,
        }
    }
}

impl From<SubsystemStatus> for Tone {
    fn from(status: SubsystemStatus) -> Self {
        match status {
            SubsystemStatus::Active => Self::Ok,
            SubsystemStatus::Paused => Self::Warn,
            SubsystemStatus::Error => Self::Crit,
            SubsystemStatus::Idle => Self::Idle,
        }
    }
}

impl From<NotificationLevel> for Tone {
    fn from(level: NotificationLevel) -> Self {
        match level {
            NotificationLevel::Info => Self::Ok,
            NotificationLevel::Warning => Self::Warn,
            NotificationLevel::Critical => Self::Crit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsystem_status_maps_to_expected_tones() {
        assert_eq!(Tone::from(SubsystemStatus::Active), Tone::Ok);
        assert_eq!(Tone::from(SubsystemStatus::Paused), Tone::Warn);
        assert_eq!(Tone::from(SubsystemStatus::Error), Tone::Crit);
        assert_eq!(Tone::from(SubsystemStatus::Idle), Tone::Idle);
    }

    #[test]
    fn metric_status_mapping_is_total_and_deterministic() {
        for status in [
            MetricStatus::Ok,
            MetricStatus::Warn,
            MetricStatus::Crit,
            MetricStatus::Idle,
        ] {
            let first = Tone::from(status);
            let second = Tone::from(status);
            assert_eq!(first, second);
            assert!(Tone::all().contains(&first));
        }
    }

    #[test]
    fn notification_level_maps_info_to_ok() {
        assert_eq!(Tone::from(NotificationLevel::Info), Tone::Ok);
        assert_eq!(Tone::from(NotificationLevel::Warning), Tone::Warn);
        assert_eq!(Tone::from(NotificationLevel::Critical), Tone::Crit);
    }

    #[test]
    fn unknown_tone_string_fails_loudly() {
        let err = "nominal".parse::<Tone>().unwrap_err();
        assert!(err.to_string().contains("Supported tones"));
    }

    #[test]
    fn crit_outranks_everything() {
        for tone in Tone::all() {
            if *tone != Tone::Crit {
                assert!(tone.escalation_rank() < Tone::Crit.escalation_rank());
            }
        }
    }
}
