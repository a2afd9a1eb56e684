// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// The seven traverse-table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    LineNo,
    Bearing,
    Distance,
    Delta,
    Radius,
    ArcLength,
    Chord,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Self::LineNo,
        Self::Bearing,
        Self::Distance,
        Self::Delta,
        Self::Radius,
        Self::ArcLength,
        Self::Chord,
    ];

    /// Stable camelCase name (matches the report field names).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LineNo => "lineNo",
            Self::Bearing => "bearing",
            Self::Distance => "distance",
            Self::Delta => "delta",
            Self::Radius => "radius",
            Self::ArcLength => "arcLength",
            Self::Chord => "chord",
        }
    }

    /// Table header label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::LineNo => "Line No",
            Self::Bearing => "Bearing",
            Self::Distance => "Distance",
            Self::Delta => "Delta",
            Self::Radius => "Radius",
            Self::ArcLength => "Arc Length",
            Self::Chord => "Chord",
        }
    }

    pub const fn idx(self) -> usize {
        match self {
            Self::LineNo => 0,
            Self::Bearing => 1,
            Self::Distance => 2,
            Self::Delta => 3,
            Self::Radius => 4,
            Self::ArcLength => 5,
            Self::Chord => 6,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Addresses one table cell across the whole parcel collection.
///
/// Two cells are the same interactive unit iff all three components are equal. The derived
/// ordering is parcel-major, so every key of one parcel sorts into a contiguous range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    parcel_index: usize,
    row_index: usize,
    column: Column,
}

impl CellKey {
    pub const fn new(parcel_index: usize, row_index: usize, column: Column) -> Self {
        Self {
            parcel_index,
            row_index,
            column,
        }
    }

    /// Smallest key of `parcel_index`; every key of that parcel is `>=` this one.
    pub(crate) const fn parcel_start(parcel_index: usize) -> Self {
        Self::new(parcel_index, 0, Column::LineNo)
    }

    pub fn parcel_index(&self) -> usize {
        self.parcel_index
    }

    pub fn row_index(&self) -> usize {
        self.row_index
    }

    pub fn column(&self) -> Column {
        self.column
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parcel {} row {} {}", self.parcel_index, self.row_index, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::{CellKey, Column};

    #[test]
    fn column_names_are_distinct_report_fields() {
        let names = Column::ALL.map(Column::as_str);
        assert_eq!(
            names,
            ["lineNo", "bearing", "distance", "delta", "radius", "arcLength", "chord"]
        );
        assert_eq!(Column::ArcLength.to_string(), "arcLength");
    }

    #[test]
    fn column_idx_matches_display_order() {
        for (idx, column) in Column::ALL.into_iter().enumerate() {
            assert_eq!(column.idx(), idx);
        }
    }

    #[test]
    fn keys_differing_in_any_component_are_distinct() {
        let base = CellKey::new(1, 2, Column::Delta);
        assert_eq!(base, CellKey::new(1, 2, Column::Delta));
        assert_ne!(base, CellKey::new(0, 2, Column::Delta));
        assert_ne!(base, CellKey::new(1, 3, Column::Delta));
        assert_ne!(base, CellKey::new(1, 2, Column::Radius));
    }

    #[test]
    fn keys_of_one_parcel_are_contiguous() {
        let start = CellKey::parcel_start(1);
        let next = CellKey::parcel_start(2);
        let inside = CellKey::new(1, usize::MAX, Column::Chord);
        assert!(start <= inside && inside < next);
        assert!(CellKey::new(0, usize::MAX, Column::Chord) < start);
    }
}
