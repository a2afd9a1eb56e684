// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::format::FormatOptions;
use crate::model::ParcelRecord;
use crate::ui::InteractionState;

use super::segment_row::{render_segment_rows, SegmentRow};

/// One parcel's rendered panel: a clickable header and, unless collapsed, its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParcelPanel {
    parcel_index: usize,
    name: String,
    highlight_count: usize,
    body: Option<PanelBody>,
}

impl ParcelPanel {
    pub fn parcel_index(&self) -> usize {
        self.parcel_index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header attention style: on iff at least one cell of this parcel is highlighted.
    pub fn is_attention(&self) -> bool {
        self.highlight_count > 0
    }

    pub fn highlight_count(&self) -> usize {
        self.highlight_count
    }

    pub fn is_collapsed(&self) -> bool {
        self.body.is_none()
    }

    pub fn body(&self) -> Option<&PanelBody> {
        self.body.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelBody {
    summary: SummaryBlock,
    rows: Vec<SegmentRow>,
}

impl PanelBody {
    pub fn summary(&self) -> &SummaryBlock {
        &self.summary
    }

    pub fn rows(&self) -> &[SegmentRow] {
        &self.rows
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryBlock {
    pub misclosure: String,
    pub precision: String,
    pub area: String,
    pub perimeter: String,
    pub direction_error: String,
}

pub fn render_parcel_panel(
    parcel_index: usize,
    parcel: &ParcelRecord,
    state: &InteractionState,
    options: &FormatOptions,
) -> ParcelPanel {
    let body = (!state.is_collapsed(parcel_index)).then(|| PanelBody {
        summary: SummaryBlock {
            misclosure: options.closure_error(parcel.closure_error()),
            precision: options.precision(parcel.precision()),
            area: parcel.area().to_owned(),
            perimeter: parcel.perimeter().to_owned(),
            direction_error: parcel.direction_error().to_owned(),
        },
        rows: render_segment_rows(parcel.segments(), parcel_index, state),
    });

    ParcelPanel {
        parcel_index,
        name: parcel.name().to_owned(),
        highlight_count: state.parcel_highlight_count(parcel_index),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::render_parcel_panel;
    use crate::format::FormatOptions;
    use crate::model::fixtures::sample_parcels;
    use crate::model::{CellKey, Column, ParcelRecord};
    use crate::ui::InteractionState;

    #[test]
    fn expanded_panel_formats_summary() {
        let parcels = sample_parcels();
        let state = InteractionState::default();
        let panel = render_parcel_panel(0, &parcels[0], &state, &FormatOptions::default());

        assert_eq!(panel.name(), "Parcel A");
        assert!(!panel.is_attention());
        let body = panel.body().expect("expanded");
        assert_eq!(body.summary().misclosure, "0.010");
        assert_eq!(body.summary().precision, "291,872.20");
        assert_eq!(body.summary().area, "15,234.56 sq ft");
        assert_eq!(body.summary().perimeter, "1,234.50 ft");
        assert_eq!(body.summary().direction_error, "N 89°59'59\" E");
        assert_eq!(body.rows().len(), 2);
    }

    #[test]
    fn summary_strings_pass_through_unchanged() {
        let parcel = ParcelRecord::new("Lot 7")
            .with_area("")
            .with_perimeter("  812.4 ft ")
            .with_closure_error(0.0)
            .with_precision(1.0);
        let state = InteractionState::default();
        let panel = render_parcel_panel(0, &parcel, &state, &FormatOptions::default());

        let summary = panel.body().expect("expanded").summary();
        assert_eq!(summary.area, "");
        assert_eq!(summary.perimeter, "  812.4 ft ");
        assert_eq!(summary.direction_error, "");
    }

    #[test]
    fn collapsed_panel_has_no_body_but_keeps_attention() {
        let parcels = sample_parcels();
        let mut state = InteractionState::default();
        state.toggle_cell(CellKey::new(1, 1, Column::Chord));
        state.toggle_collapse(1);

        let panel = render_parcel_panel(1, &parcels[1], &state, &FormatOptions::default());
        assert!(panel.is_collapsed());
        assert!(panel.body().is_none());
        assert!(panel.is_attention());
        assert_eq!(panel.highlight_count(), 1);
    }
}
