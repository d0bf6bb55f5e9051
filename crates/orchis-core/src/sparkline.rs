// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

//! Sparkline path construction.
//!
//! A sparkline is drawn in a fixed `0 0 100 100` viewbox with the origin at
//! the top-left, so samples are inverted on the y axis. Input samples are
//! nominally pre-scaled to [0, 100] by the supplier but that is not enforced,
//! so every sample is clamped before use.

/// Horizontal and vertical extent of the sparkline viewbox, in SVG user units
pub const VIEWBOX_EXTENT: f64 = 100.0;

/// Clamp a percentage-scaled value into the renderable [0, 100] range.
///
/// Non-finite input collapses to the nearest edge rather than poisoning the
/// path (NaN counts as 0).
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, VIEWBOX_EXTENT)
}

/// Clamp a confidence percentage before it is used as a bar width proportion.
///
/// Upstream analytics data is not validated, so this is applied at every
/// render site.
pub fn confidence_fraction(confidence: f64) -> f64 {
    clamp_percent(confidence)
}

/// Map an ordered sample sequence to polyline coordinates.
///
/// x runs evenly across the viewbox (a single sample sits at x = 0); y is the
/// clamped sample inverted for a top-origin coordinate system. An empty input
/// yields an empty path, so nothing is drawn.
#[expect(
    clippy::cast_precision_loss,
    reason = "sample counts never exceed f64 mantissa precision"
)]
pub fn trend_points(samples: &[f64]) -> Vec<(f64, f64)> {
    if samples.is_empty() {
        return Vec::new();
    }

    let max_x = samples.len().saturating_sub(1).max(1) as f64;
    samples
        .iter()
        .enumerate()
        .map(|(i, &sample)| {
            let x = i as f64 / max_x * VIEWBOX_EXTENT;
            let y = VIEWBOX_EXTENT - clamp_percent(sample);
            (x, y)
        })
        .collect()
}

/// Encode a sample sequence as an SVG `<polyline points>` attribute value.
pub fn points_attribute(samples: &[f64]) -> String {
    trend_points(samples)
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}
