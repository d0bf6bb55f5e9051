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

// ============= Metric Key Enum =============

/// Sensor channels tracked for a greenhouse zone
/// This enum defines every environmental reading the dashboard renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKey {
    /// Air temperature at bench level
    Temperature,
    /// Relative air humidity
    Humidity,
    /// Volumetric water content of the growing medium
    Moisture,
    /// Photosynthetic photon flux density
    Light,
}

impl MetricKey {
    /// Get human-readable name for the sensor channel
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::Moisture => "Soil Moisture",
            Self::Light => "Light",
        }
    }

    /// Unit shown next to the reading when the data supplier omits one
    pub fn default_unit(&self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Humidity => "%RH",
            Self::Moisture => "%VWC",
            Self::Light => "µmol/m²·s",
        }
    }

    /// Get config string value (kebab-case)
    pub fn to_config_value(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Moisture => "moisture",
            Self::Light => "light",
        }
    }

    /// List all sensor channels in dashboard order
    pub fn all() -> &'static [MetricKey] {
        &[Self::Temperature, Self::Humidity, Self::Moisture, Self::Light]
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MetricKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "temperature" => Ok(Self::Temperature),
            "humidity" => Ok(Self::Humidity),
            "moisture" => Ok(Self::Moisture),
            "light" => Ok(Self::Light),
            _ => Err(anyhow::anyhow!(
                "Unknown metric key: '{}'. Supported keys: {}",
                s,
                Self::all()
                    .iter()
                    .map(|k| k.to_config_value())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

// ============= Metric Status =============

/// Reading status as judged by the data supplier.
///
/// The status is caller-supplied and never derived from `value` vs. `target`;
/// the supplier owns that judgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MetricStatus {
    /// Reading inside the expected envelope
    Ok,
    /// Reading drifting, worth watching
    Warn,
    /// Reading outside safe bounds
    Crit,
    /// Sensor present but not reporting
    #[default]
    Idle,
}

impl fmt::Display for MetricStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Warn => write!(f, "warn"),
            Self::Crit => write!(f, "crit"),
            Self::Idle => write!(f, "idle"),
        }
    }
}

// ============= Sensor Metric =============

/// One environmental reading with its recent trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorMetric {
    /// Which sensor channel this reading belongs to
    pub key: MetricKey,

    /// Card title (usually the channel name, but the supplier may override it)
    pub title: String,

    /// Unit string rendered next to the value
    pub unit: String,

    /// Latest reading; `None` renders as an em-dash placeholder
    #[serde(default)]
    pub value: Option<f64>,

    /// Target range as a display string (e.g. "22-26"), if the supplier provides one
    #[serde(default)]
    pub target: Option<String>,

    /// Supplier-judged status of this reading
    #[serde(default)]
    pub status: MetricStatus,

    /// Recent trend samples, pre-scaled by the supplier to [0, 100]
    #[serde(default)]
    pub trend: Vec<f64>,
}
