// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

pub mod alerts;
pub mod controls;
pub mod metrics;
pub mod notifications;
pub mod orchids;
pub mod snapshot;

// Re-export common types for convenience
pub use alerts::{AlertKind, AlertSeverity, AnalyticsAlert};
pub use controls::{ControlSubsystem, SubsystemName, SubsystemStatus};
pub use metrics::{MetricKey, MetricStatus, SensorMetric};
pub use notifications::{NotificationItem, NotificationLevel};
pub use orchids::{GrowthStage, HealthRating, OrchidRecord};
pub use snapshot::DashboardSnapshot;
