// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============= Alert Kind =============

/// What a predictive alert is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertKind {
    Disease,
    Pest,
    Growth,
}

impl AlertKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Disease => "Disease",
            Self::Pest => "Pest",
            Self::Growth => "Growth",
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============= Alert Severity =============

/// Severity band of a predictive alert.
///
/// Severity keeps its own four-level styling and is not folded into the
/// three-level status tone set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    /// Chip label rendered next to the alert title
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============= Analytics Alert =============

/// Model-predicted risk with a recommended intervention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsAlert {
    /// Unique within a collection
    pub id: String,

    /// What the prediction is about
    pub kind: AlertKind,

    /// Short headline
    pub title: String,

    /// Model confidence in percent. Upstream data is not validated, so the
    /// renderer clamps this to [0, 100] before using it as a bar width.
    pub confidence: f64,

    /// Suggested intervention
    pub recommendation: String,

    /// Severity band
    pub severity: AlertSeverity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_low_to_critical() {
        assert!(AlertSeverity::Low < AlertSeverity::Medium);
        assert!(AlertSeverity::Medium < AlertSeverity::High);
        assert!(AlertSeverity::High < AlertSeverity::Critical);
    }
}
