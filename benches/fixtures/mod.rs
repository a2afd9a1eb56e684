// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use mapcheck::format::FormatOptions;
use mapcheck::model::fixtures::{sample_parcels, synthetic_parcels};
use mapcheck::model::{CellKey, Column, ParcelRecord};
use mapcheck::render::MapcheckView;

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Sample,
    Subdivision,
    LargeTraverse,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Sample, Case::Subdivision, Case::LargeTraverse];

    pub fn id(self) -> &'static str {
        match self {
            Self::Sample => "sample",
            Self::Subdivision => "subdivision_40x12",
            Self::LargeTraverse => "large_traverse_4x400",
        }
    }

    pub fn parcels(self) -> Vec<ParcelRecord> {
        match self {
            Self::Sample => sample_parcels(),
            Self::Subdivision => synthetic_parcels(40, 12),
            Self::LargeTraverse => synthetic_parcels(4, 400),
        }
    }
}

pub fn view(case: Case) -> MapcheckView {
    MapcheckView::new(case.parcels(), FormatOptions::default())
}

/// Every clickable cell of the view, parcel-major.
#[allow(dead_code)]
pub fn clickable_cells(view: &MapcheckView) -> Vec<CellKey> {
    view.render()
        .iter()
        .filter_map(|panel| panel.body())
        .flat_map(|body| body.rows())
        .flat_map(|row| row.cells())
        .filter(|cell| cell.is_clickable())
        .map(|cell| cell.key())
        .collect()
}

/// Every third cell in the first column; used to mark a view before rendering it.
#[allow(dead_code)]
pub fn marked_view(case: Case) -> MapcheckView {
    let mut view = view(case);
    for key in clickable_cells(&view).into_iter().step_by(3) {
        if key.column() == Column::LineNo || key.column() == Column::Radius {
            view.toggle_cell(key);
        }
    }
    view
}
