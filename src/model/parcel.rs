// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// One parcel's already-computed mapcheck results.
///
/// The view never recomputes geometry; `area`, `perimeter` and `direction_error` are display
/// strings produced upstream and are shown verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ParcelRecord {
    name: String,
    area: String,
    perimeter: String,
    closure_error: f64,
    precision: f64,
    direction_error: String,
    segments: Vec<SegmentRecord>,
}

impl ParcelRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            area: String::new(),
            perimeter: String::new(),
            closure_error: 0.0,
            precision: 0.0,
            direction_error: String::new(),
            segments: Vec::new(),
        }
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    pub fn with_perimeter(mut self, perimeter: impl Into<String>) -> Self {
        self.perimeter = perimeter.into();
        self
    }

    pub fn with_closure_error(mut self, closure_error: f64) -> Self {
        self.closure_error = closure_error;
        self
    }

    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_direction_error(mut self, direction_error: impl Into<String>) -> Self {
        self.direction_error = direction_error.into();
        self
    }

    pub fn with_segments(mut self, segments: Vec<SegmentRecord>) -> Self {
        self.segments = segments;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn perimeter(&self) -> &str {
        &self.perimeter
    }

    /// Misclosure in feet.
    pub fn closure_error(&self) -> f64 {
        self.closure_error
    }

    /// Denominator `N` of the "1 in N" precision ratio.
    pub fn precision(&self) -> f64 {
        self.precision
    }

    pub fn direction_error(&self) -> &str {
        &self.direction_error
    }

    /// Segments in traverse order. The order is load-bearing: row indices follow it.
    pub fn segments(&self) -> &[SegmentRecord] {
        &self.segments
    }
}

/// One traverse leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentRecord {
    Line(LineSegment),
    Curve(CurveSegment),
    /// A leg whose variant the viewer does not know how to lay out. It is kept so the
    /// remaining rows keep their positions, but it renders no row.
    Unsupported(UnsupportedSegment),
}

impl SegmentRecord {
    pub fn line_no(&self) -> Option<u32> {
        match self {
            Self::Line(line) => Some(line.line_no),
            Self::Curve(curve) => Some(curve.line_no),
            Self::Unsupported(unsupported) => unsupported.line_no,
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::Line(_) => "line",
            Self::Curve(_) => "curve",
            Self::Unsupported(unsupported) => &unsupported.kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSegment {
    line_no: u32,
    bearing: String,
    distance: String,
}

impl LineSegment {
    pub fn new(line_no: u32, bearing: impl Into<String>, distance: impl Into<String>) -> Self {
        Self {
            line_no,
            bearing: bearing.into(),
            distance: distance.into(),
        }
    }

    pub fn line_no(&self) -> u32 {
        self.line_no
    }

    pub fn bearing(&self) -> &str {
        &self.bearing
    }

    pub fn distance(&self) -> &str {
        &self.distance
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveSegment {
    line_no: u32,
    bearing: String,
    distance: String,
    delta: String,
    radius: String,
    arc_length: String,
    chord: Option<String>,
}

impl CurveSegment {
    pub fn new(
        line_no: u32,
        bearing: impl Into<String>,
        distance: impl Into<String>,
        delta: impl Into<String>,
        radius: impl Into<String>,
        arc_length: impl Into<String>,
    ) -> Self {
        Self {
            line_no,
            bearing: bearing.into(),
            distance: distance.into(),
            delta: delta.into(),
            radius: radius.into(),
            arc_length: arc_length.into(),
            chord: None,
        }
    }

    pub fn with_chord(mut self, chord: impl Into<String>) -> Self {
        self.chord = Some(chord.into());
        self
    }

    pub fn line_no(&self) -> u32 {
        self.line_no
    }

    /// Chord bearing. Carried by the data but not shown in the traverse table.
    pub fn bearing(&self) -> &str {
        &self.bearing
    }

    /// Chord distance. Carried by the data but not shown in the traverse table.
    pub fn distance(&self) -> &str {
        &self.distance
    }

    /// Central angle.
    pub fn delta(&self) -> &str {
        &self.delta
    }

    pub fn radius(&self) -> &str {
        &self.radius
    }

    pub fn arc_length(&self) -> &str {
        &self.arc_length
    }

    pub fn chord(&self) -> Option<&str> {
        self.chord.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedSegment {
    line_no: Option<u32>,
    kind: String,
    reason: String,
}

impl UnsupportedSegment {
    pub fn new(line_no: Option<u32>, kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            line_no,
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    pub fn line_no(&self) -> Option<u32> {
        self.line_no
    }

    /// The raw variant tag as it appeared in the input.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
