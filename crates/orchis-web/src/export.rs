// Copyright (c) 2025 VERDANA GROW SYSTEMS s.r.o.
//
// This file is part of Orchis.
//
// Licensed under the MIT License. See the LICENSE file in the repository root for details.
//
// This software is provided "AS IS", without warranty of any kind.

//! Data export endpoints
//!
//! `/export` produces a hierarchical JSON document meant for offline analysis;
//! `/export.csv` flattens the sensor trends into rows for spreadsheet tooling.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use orchis_core::{DashboardState, confidence_fraction};
use tracing::error;

use crate::AppState;

/// Export endpoint - returns the full dashboard state as a JSON download
pub async fn json_export_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    let now = Utc::now();
    let filename = format!("orchis_export_{}.json", now.format("%Y%m%d_%H%M%S"));

    let export_data = {
        let state = app_state.dashboard.read();
        serde_json::json!({
            "metadata": {
                "export_timestamp": now,
                "greenhouse": app_state.greenhouse_name.as_ref(),
                "last_reconciled": state.last_reconciled,
                "supplier_error": state.error,
                "export_format_version": "1.0",
                "description": "Orchis greenhouse monitoring data export for analysis"
            },
            "environment": state.metrics.iter().map(|metric| {
                serde_json::json!({
                    "key": metric.key,
                    "title": metric.title,
                    "unit": metric.unit,
                    "value": metric.value,
                    "target_range": metric.target,
                    "status": metric.status,
                    "trend_percent": metric.trend,
                })
            }).collect::<Vec<_>>(),
            "orchids": state.orchids.iter().map(|orchid| {
                serde_json::json!({
                    "id": orchid.id,
                    "name": orchid.name,
                    "species": orchid.species,
                    "growth_stage": orchid.stage,
                    "health": orchid.health,
                    "care_recommendations": orchid.recommendations,
                })
            }).collect::<Vec<_>>(),
            "predictive_alerts": state.alerts.iter().map(|alert| {
                serde_json::json!({
                    "id": alert.id,
                    "kind": alert.kind,
                    "severity": alert.severity,
                    "title": alert.title,
                    "recommendation": alert.recommendation,
                    "confidence_percent": confidence_fraction(alert.confidence),
                })
            }).collect::<Vec<_>>(),
            "subsystems": state.controls.iter().map(|subsystem| {
                serde_json::json!({
                    "name": subsystem.name,
                    "automatic": subsystem.auto,
                    "status": subsystem.status,
                    "last_run": subsystem.last_run,
                })
            }).collect::<Vec<_>>(),
            "notifications": state.notifications.iter().map(|item| {
                serde_json::json!({
                    "id": item.id,
                    "level": item.level,
                    "title": item.title,
                    "description": item.description,
                    "time": item.time,
                    "read": item.read.unwrap_or(false),
                })
            }).collect::<Vec<_>>(),
        })
    };

    let json_string = match serde_json::to_string_pretty(&export_data) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize export data: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "").into_response();
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
    headers.insert(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{filename}\"")
            .parse()
            .unwrap(),
    );

    (headers, json_string).into_response()
}

/// CSV export endpoint - one row per trend sample, per metric
pub async fn csv_export_handler(State(app_state): State<AppState>) -> impl IntoResponse {
    let filename = format!("orchis_trends_{}.csv", Utc::now().format("%Y%m%d_%H%M%S"));

    let csv_bytes = {
        let state = app_state.dashboard.read();
        match write_trend_csv(&state) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!("Failed to build CSV export: {}", e);
                return (StatusCode::INTERNAL_SERVER_ERROR, "").into_response();
            }
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, "text/csv".parse().unwrap());
    headers.insert(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{filename}\"")
            .parse()
            .unwrap(),
    );

    (headers, csv_bytes).into_response()
}

fn write_trend_csv(state: &DashboardState) -> anyhow::Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["metric", "unit", "status", "sample_index", "sample"])?;

    for metric in &state.metrics {
        let status = metric.status.to_string();
        for (index, sample) in metric.trend.iter().enumerate() {
            writer.write_record([
                metric.key.to_config_value(),
                metric.unit.as_str(),
                status.as_str(),
                index.to_string().as_str(),
                sample.to_string().as_str(),
            ])?;
        }
    }

    Ok(writer.into_inner()?)
}
