// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-segment row layout for the traverse table.
//!
//! Every rendered row has the seven columns of [`Column::ALL`]. Which of them carry a value
//! depends on the segment variant:
//!
//! | variant | populated                              | blank                               |
//! |---------|----------------------------------------|-------------------------------------|
//! | line    | line no, bearing, distance             | delta, radius, arc length, chord    |
//! | curve   | line no, delta, radius, arc length, chord | bearing, distance                |
//!
//! A curve's chord bearing and distance stay in the data but are not shown; radius and arc
//! length describe the leg. Unsupported variants render no row at all.

use smallvec::SmallVec;
use smol_str::SmolStr;

use crate::format::NO_VALUE;
use crate::model::{CellKey, Column, CurveSegment, LineSegment, SegmentRecord};
use crate::ui::InteractionState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Text(SmolStr),
    /// No value exists for this column in this row. Blank cells are not clickable.
    Blank,
}

impl CellContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            Self::Blank => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCell {
    key: CellKey,
    content: CellContent,
    highlighted: bool,
}

impl RowCell {
    pub fn key(&self) -> CellKey {
        self.key
    }

    pub fn content(&self) -> &CellContent {
        &self.content
    }

    pub fn text(&self) -> Option<&str> {
        self.content.as_text()
    }

    pub fn is_clickable(&self) -> bool {
        matches!(self.content, CellContent::Text(_))
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Line,
    Curve,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRow {
    row_index: usize,
    kind: RowKind,
    cells: SmallVec<[RowCell; 7]>,
}

impl SegmentRow {
    /// Position of the segment within its parcel (not the printed line number).
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    pub fn kind(&self) -> RowKind {
        self.kind
    }

    /// Cells in [`Column::ALL`] order.
    pub fn cells(&self) -> &[RowCell] {
        &self.cells
    }

    pub fn cell(&self, column: Column) -> &RowCell {
        &self.cells[column.idx()]
    }
}

/// Lays out one segment. Returns `None` for segment variants the table cannot show.
pub fn render_segment_row(
    segment: &SegmentRecord,
    parcel_index: usize,
    row_index: usize,
    state: &InteractionState,
) -> Option<SegmentRow> {
    let (kind, values) = match segment {
        SegmentRecord::Line(line) => (RowKind::Line, line_values(line)),
        SegmentRecord::Curve(curve) => (RowKind::Curve, curve_values(curve)),
        SegmentRecord::Unsupported(_) => return None,
    };

    let cells = Column::ALL
        .into_iter()
        .zip(values)
        .map(|(column, value)| {
            let key = CellKey::new(parcel_index, row_index, column);
            match value {
                Some(text) => RowCell {
                    key,
                    content: CellContent::Text(text),
                    highlighted: state.is_highlighted(&key),
                },
                None => RowCell {
                    key,
                    content: CellContent::Blank,
                    highlighted: false,
                },
            }
        })
        .collect();

    Some(SegmentRow {
        row_index,
        kind,
        cells,
    })
}

/// Lays out every segment of a parcel in traverse order, omitting unsupported ones. Row
/// indices are positions in `segments`, so rows after an omitted one keep their keys.
pub fn render_segment_rows(
    segments: &[SegmentRecord],
    parcel_index: usize,
    state: &InteractionState,
) -> Vec<SegmentRow> {
    segments
        .iter()
        .enumerate()
        .filter_map(|(row_index, segment)| {
            render_segment_row(segment, parcel_index, row_index, state)
        })
        .collect()
}

fn line_no_text(line_no: u32) -> SmolStr {
    let mut buf = itoa::Buffer::new();
    SmolStr::new(buf.format(line_no))
}

fn line_values(line: &LineSegment) -> [Option<SmolStr>; 7] {
    [
        Some(line_no_text(line.line_no())),
        Some(SmolStr::new(line.bearing())),
        Some(SmolStr::new(line.distance())),
        None,
        None,
        None,
        None,
    ]
}

fn curve_values(curve: &CurveSegment) -> [Option<SmolStr>; 7] {
    [
        Some(line_no_text(curve.line_no())),
        None,
        None,
        Some(SmolStr::new(curve.delta())),
        Some(SmolStr::new(curve.radius())),
        Some(SmolStr::new(curve.arc_length())),
        Some(SmolStr::new(curve.chord().unwrap_or(NO_VALUE))),
    ]
}
