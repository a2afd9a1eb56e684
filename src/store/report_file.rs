// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::model::{
    Column, CurveSegment, LineSegment, ParcelRecord, SegmentRecord, UnsupportedSegment,
};

/// One parcel as emitted by the report generator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParcelJson {
    #[serde(alias = "name")]
    pub parcel_name: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub perimeter: String,
    /// Misclosure in feet.
    pub closure_error: f64,
    /// Denominator of the "1 in N" precision ratio.
    pub precision: f64,
    #[serde(default)]
    pub direction_error: String,
    #[serde(default)]
    pub segments: Vec<SegmentJson>,
}

/// One traverse leg. Which fields are required depends on `type`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SegmentJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_no: Option<u32>,
    /// `line` or `curve`; anything else is kept but not displayed.
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arc_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chord: Option<String>,
}

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    EmptyReport { path: PathBuf },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::EmptyReport { path } => write!(f, "report {path:?} contains no parcels"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::EmptyReport { .. } => None,
        }
    }
}

/// Reads a report file: a JSON array of parcels, in traverse order.
pub fn load_report(path: impl AsRef<Path>) -> Result<Vec<ParcelRecord>, StoreError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parcels = parse_report(&raw).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    if parcels.is_empty() {
        return Err(StoreError::EmptyReport {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), parcels = parcels.len(), "loaded mapcheck report");
    Ok(parcels)
}

/// Parses report JSON. Malformed segments become [`SegmentRecord::Unsupported`] rather than
/// failing the whole report.
pub fn parse_report(raw: &str) -> Result<Vec<ParcelRecord>, serde_json::Error> {
    let parcels: Vec<ParcelJson> = serde_json::from_str(raw)?;
    Ok(parcels.into_iter().map(ParcelRecord::from).collect())
}

/// JSON Schema of the report file.
pub fn report_schema() -> schemars::Schema {
    schemars::schema_for!(Vec<ParcelJson>)
}

impl From<ParcelJson> for ParcelRecord {
    fn from(value: ParcelJson) -> Self {
        let name = value.parcel_name;
        let segments = value
            .segments
            .into_iter()
            .map(SegmentRecord::from)
            .inspect(|segment| {
                if let SegmentRecord::Unsupported(unsupported) = segment {
                    warn!(
                        parcel = %name,
                        line_no = ?unsupported.line_no(),
                        kind = unsupported.kind(),
                        reason = unsupported.reason(),
                        "segment will not be displayed"
                    );
                }
            })
            .collect();

        ParcelRecord::new(name)
            .with_area(value.area)
            .with_perimeter(value.perimeter)
            .with_closure_error(value.closure_error)
            .with_precision(value.precision)
            .with_direction_error(value.direction_error)
            .with_segments(segments)
    }
}

impl From<SegmentJson> for SegmentRecord {
    fn from(value: SegmentJson) -> Self {
        let line_no = value.line_no;
        let unsupported =
            |reason: String| Self::Unsupported(UnsupportedSegment::new(line_no, &value.kind, reason));

        match value.kind.as_str() {
            "line" => match (line_no, &value.bearing, &value.distance) {
                (Some(line_no), Some(bearing), Some(distance)) => {
                    Self::Line(LineSegment::new(line_no, bearing, distance))
                }
                _ => unsupported(missing_fields(
                    "line",
                    &[
                        (Column::LineNo, line_no.is_some()),
                        (Column::Bearing, value.bearing.is_some()),
                        (Column::Distance, value.distance.is_some()),
                    ],
                )),
            },
            "curve" => match (
                line_no,
                &value.bearing,
                &value.distance,
                &value.delta,
                &value.radius,
                &value.arc_length,
            ) {
                (
                    Some(line_no),
                    Some(bearing),
                    Some(distance),
                    Some(delta),
                    Some(radius),
                    Some(arc_length),
                ) => {
                    let curve =
                        CurveSegment::new(line_no, bearing, distance, delta, radius, arc_length);
                    match value.chord.as_deref().map(str::trim) {
                        Some(chord) if !chord.is_empty() => Self::Curve(curve.with_chord(chord)),
                        _ => Self::Curve(curve),
                    }
                }
                _ => unsupported(missing_fields(
                    "curve",
                    &[
                        (Column::LineNo, line_no.is_some()),
                        (Column::Bearing, value.bearing.is_some()),
                        (Column::Distance, value.distance.is_some()),
                        (Column::Delta, value.delta.is_some()),
                        (Column::Radius, value.radius.is_some()),
                        (Column::ArcLength, value.arc_length.is_some()),
                    ],
                )),
            },
            "" => unsupported("segment has no type".to_owned()),
            other => unsupported(format!("unknown segment type {other:?}")),
        }
    }
}

fn missing_fields(kind: &str, fields: &[(Column, bool)]) -> String {
    let missing = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(column, _)| column.as_str())
        .collect::<Vec<_>>();
    format!("{kind} segment is missing {}", missing.join(", "))
}
