// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

use serde::Serialize;
use std::fmt;
use tracing::info;

/// Callback the embedding application wires in for a dashboard action.
/// Fire-and-forget: the dashboard expects no return value and no error.
pub type ActionHook = Box<dyn Fn() + Send + Sync>;

/// Placeholder feedback produced when an action has no hook wired in.
/// The web layer surfaces it as a flash message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionFeedback {
    pub title: String,
    pub detail: String,
}

/// Optional notification hooks from the embedding application.
///
/// Each user action invokes its hook when one is set; otherwise the dashboard
/// performs a local placeholder (a log line plus [`ActionFeedback`]).
#[derive(Default)]
pub struct DashboardHooks {
    pub on_add_orchid: Option<ActionHook>,
    pub on_configure_sensors: Option<ActionHook>,
    pub on_export_data: Option<ActionHook>,
}

impl fmt::Debug for DashboardHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardHooks")
            .field("on_add_orchid", &self.on_add_orchid.is_some())
            .field("on_configure_sensors", &self.on_configure_sensors.is_some())
            .field("on_export_data", &self.on_export_data.is_some())
            .finish()
    }
}

impl DashboardHooks {
    /// User asked to add a new orchid.
    pub fn add_orchid(&self) -> Option<ActionFeedback> {
        Self::invoke(&self.on_add_orchid, "Add Orchid", "Launch the add-orchid flow.")
    }

    /// User asked to open sensor configuration.
    pub fn configure_sensors(&self) -> Option<ActionFeedback> {
        Self::invoke(
            &self.on_configure_sensors,
            "Sensor configuration",
            "Open sensor setup panel.",
        )
    }

    /// User asked for a data export.
    pub fn export_data(&self) -> Option<ActionFeedback> {
        Self::invoke(&self.on_export_data, "Export started", "Preparing data export...")
    }

    fn invoke(hook: &Option<ActionHook>, title: &str, detail: &str) -> Option<ActionFeedback> {
        match hook {
            Some(callback) => {
                callback();
                None
            }
            None => {
                info!("{title}: {detail} (no hook wired, local placeholder)");
                Some(ActionFeedback {
                    title: title.to_owned(),
                    detail: detail.to_owned(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn wired_hook_is_invoked_without_feedback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let hooks = DashboardHooks {
            on_add_orchid: Some(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
            ..Default::default()
        };

        assert!(hooks.add_orchid().is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unset_hook_yields_placeholder_feedback() {
        let hooks = DashboardHooks::default();
        let feedback = hooks.export_data().unwrap();
        assert_eq!(feedback.title, "Export started");

        assert!(hooks.configure_sensors().is_some());
        assert!(hooks.add_orchid().is_some());
    }
}
