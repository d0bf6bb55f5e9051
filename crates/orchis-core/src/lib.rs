// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

//! Core dashboard logic for the Orchis greenhouse digital twin.
//!
//! Everything here is synchronous and single-threaded by design: state
//! updates happen in direct response to discrete user actions, and the only
//! computations are the sparkline geometry, the status-to-tone mapping, and
//! defensive clamping of supplier data.

pub mod error;
pub mod hooks;
pub mod sample;
pub mod sparkline;
pub mod state;
pub mod tone;

// Re-export common types for convenience
pub use error::StateError;
pub use hooks::{ActionFeedback, ActionHook, DashboardHooks};
pub use sample::SampleData;
pub use sparkline::{
    VIEWBOX_EXTENT, clamp_percent, confidence_fraction, points_attribute, trend_points,
};
pub use state::{DashboardState, DashboardTab};
pub use tone::Tone;
