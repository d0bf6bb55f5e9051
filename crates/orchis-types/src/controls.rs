// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============= Subsystem Name =============

/// Controllable greenhouse subsystems
/// A control collection carries at most one entry per subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubsystemName {
    Watering,
    Climate,
    Lighting,
}

impl SubsystemName {
    /// Get human-readable name for the subsystem
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Watering => "Watering",
            Self::Climate => "Climate",
            Self::Lighting => "Lighting",
        }
    }

    /// Get config string value (kebab-case)
    pub fn to_config_value(&self) -> &'static str {
        match self {
            Self::Watering => "watering",
            Self::Climate => "climate",
            Self::Lighting => "lighting",
        }
    }

    /// List all controllable subsystems
    pub fn all() -> &'static [SubsystemName] {
        &[Self::Watering, Self::Climate, Self::Lighting]
    }
}

impl fmt::Display for SubsystemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for SubsystemName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "watering" => Ok(Self::Watering),
            "climate" => Ok(Self::Climate),
            "lighting" => Ok(Self::Lighting),
            _ => Err(anyhow::anyhow!(
                "Unknown subsystem: '{}'. Supported subsystems: {}",
                s,
                Self::all()
                    .iter()
                    .map(|n| n.to_config_value())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

// ============= Subsystem Status =============

/// Runtime status reported for a subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SubsystemStatus {
    #[default]
    Idle,
    Active,
    Paused,
    Error,
}

impl fmt::Display for SubsystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Active => write!(f, "active"),
            Self::Paused => write!(f, "paused"),
            Self::Error => write!(f, "error"),
        }
    }
}

// ============= Control Subsystem =============

/// Snapshot of one controllable subsystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSubsystem {
    /// Which subsystem this entry controls
    pub name: SubsystemName,

    /// Whether the subsystem runs on its automatic schedule
    pub auto: bool,

    /// Reported runtime status
    #[serde(default)]
    pub status: SubsystemStatus,

    /// Last run as a display string (e.g. "Today 07:10"); the twin does not
    /// own a schedule, so this is never parsed
    #[serde(default)]
    pub last_run: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsystem_name_parses_config_values() {
        for name in SubsystemName::all() {
            let parsed: SubsystemName = name.to_config_value().parse().unwrap();
            assert_eq!(parsed, *name);
        }
    }

    #[test]
    fn subsystem_name_rejects_unknown_value() {
        let err = "misting".parse::<SubsystemName>().unwrap_err();
        assert!(err.to_string().contains("Supported subsystems"));
    }
}
