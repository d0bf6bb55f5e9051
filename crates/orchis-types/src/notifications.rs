// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============= Notification Level =============

/// Urgency of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationLevel {
    #[default]
    Info,
    Warning,
    Critical,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

// ============= Notification Item =============

/// One entry in the notification center.
///
/// Notifications live only in dashboard memory: dismissing one filters it out
/// of the local collection and nothing is persisted or synchronized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationItem {
    /// Unique within a collection; dismissal is keyed on this
    pub id: String,

    pub title: String,

    pub description: String,

    /// Relative time as a display string (e.g. "in 2h", "just now")
    pub time: String,

    #[serde(default)]
    pub level: NotificationLevel,

    /// Read marker; `None` means the supplier did not track it
    #[serde(default)]
    pub read: Option<bool>,
}
