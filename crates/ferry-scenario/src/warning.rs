//! Operator-facing warnings about a snapshot.

use serde::{Deserialize, Serialize};

use crate::OperationalSnapshot;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// One or more vessels are in maintenance.
    Maintenance,
    /// No vessel is operational.
    NoVessels,
    /// Nothing is scheduled for the day.
    NoTrips,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotWarning {
    #[serde(rename = "type")]
    pub kind:     WarningKind,
    pub severity: Severity,
    pub message:  String,
    /// Names of the vessels concerned, for `maintenance`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vessels:  Vec<String>,
}

/// Warnings in a fixed order: maintenance, no vessels, no trips.
pub fn snapshot_warnings(snapshot: &OperationalSnapshot) -> Vec<SnapshotWarning> {
    let mut warnings = Vec::new();

    let in_maintenance: Vec<String> =
        snapshot.maintenance_vessels().map(|v| v.name.clone()).collect();
    if !in_maintenance.is_empty() {
        warnings.push(SnapshotWarning {
            kind:     WarningKind::Maintenance,
            severity: Severity::Warning,
            message:  format!(
                "{} vessel(s) in maintenance: {}",
                in_maintenance.len(),
                in_maintenance.join(", ")
            ),
            vessels:  in_maintenance,
        });
    }

    if snapshot.operational_vessels().next().is_none() {
        warnings.push(SnapshotWarning {
            kind:     WarningKind::NoVessels,
            severity: Severity::Error,
            message:  "no operational vessel available".to_owned(),
            vessels:  Vec::new(),
        });
    }

    if snapshot.scheduled_trips.is_empty() {
        warnings.push(SnapshotWarning {
            kind:     WarningKind::NoTrips,
            severity: Severity::Info,
            message:  "no sailings scheduled for this date".to_owned(),
            vessels:  Vec::new(),
        });
    }

    warnings
}
