// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many care recommendations a card surfaces; the rest stay in the record
pub const MAX_VISIBLE_RECOMMENDATIONS: usize = 3;

// ============= Growth Stage =============

/// Cultivation stage of an orchid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthStage {
    Seedling,
    Vegetative,
    /// Flower spike forming
    Spike,
    Bloom,
    /// Dormant between growth cycles
    Rest,
}

impl GrowthStage {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Seedling => "Seedling",
            Self::Vegetative => "Vegetative",
            Self::Spike => "Spike",
            Self::Bloom => "Bloom",
            Self::Rest => "Rest",
        }
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============= Health Rating =============

/// Overall plant health as rated by the data supplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthRating {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthRating {
    /// Badge label shown on the orchid card
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for HealthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============= Orchid Record =============

/// One monitored plant in the greenhouse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchidRecord {
    /// Unique within a collection
    pub id: String,

    /// Given name of the plant
    pub name: String,

    /// Botanical species
    pub species: String,

    /// Current cultivation stage
    pub stage: GrowthStage,

    /// Supplier-rated health
    pub health: HealthRating,

    /// Opaque image URL; rendered as-is, never validated beyond display
    pub image_url: String,

    /// Ordered care recommendations; only the first few are displayed
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl OrchidRecord {
    /// The recommendations actually shown on the card (at most
    /// [`MAX_VISIBLE_RECOMMENDATIONS`], in supplier order).
    pub fn visible_recommendations(&self) -> &[String] {
        let end = self.recommendations.len().min(MAX_VISIBLE_RECOMMENDATIONS);
        &self.recommendations[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_recommendations(n: usize) -> OrchidRecord {
        OrchidRecord {
            id: "o1".to_owned(),
            name: "Aurora".to_owned(),
            species: "Phalaenopsis sp.".to_owned(),
            stage: GrowthStage::Bloom,
            health: HealthRating::Excellent,
            image_url: "https://example.com/aurora.jpg".to_owned(),
            recommendations: (0..n).map(|i| format!("rec {i}")).collect(),
        }
    }

    #[test]
    fn visible_recommendations_caps_at_three() {
        let record = record_with_recommendations(5);
        assert_eq!(record.visible_recommendations().len(), 3);
        assert_eq!(record.visible_recommendations()[0], "rec 0");
    }

    #[test]
    fn visible_recommendations_keeps_short_lists() {
        let record = record_with_recommendations(2);
        assert_eq!(record.visible_recommendations().len(), 2);
    }
}
