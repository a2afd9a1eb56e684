// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::format::FormatOptions;
use crate::model::{CellKey, ParcelRecord};
use crate::ui::InteractionState;

use super::panel::{render_parcel_panel, ParcelPanel};
use super::segment_row::render_segment_row;

pub const VIEW_TITLE: &str = "Civil 3D Parcel Mapcheck Viewer";

/// Top-level report view.
///
/// Owns the (read-only) parcel collection and the single [`InteractionState`] for the session.
/// A parcel's index is its position in the collection.
#[derive(Debug, Clone)]
pub struct MapcheckView {
    parcels: Vec<ParcelRecord>,
    state: InteractionState,
    options: FormatOptions,
}

impl MapcheckView {
    pub fn new(parcels: Vec<ParcelRecord>, options: FormatOptions) -> Self {
        Self {
            parcels,
            state: InteractionState::default(),
            options,
        }
    }

    pub fn parcels(&self) -> &[ParcelRecord] {
        &self.parcels
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Handles a click on a table cell. Keys that do not address a populated cell are ignored
    /// and return `None`; otherwise returns the new highlight value.
    pub fn toggle_cell(&mut self, key: CellKey) -> Option<bool> {
        if !self.is_clickable_cell(&key) {
            return None;
        }
        Some(self.state.toggle_cell(key))
    }

    /// Handles a click on a parcel header. Returns `Some(true)` when the parcel is now collapsed
    /// and `None` for an index outside the collection.
    pub fn toggle_collapse(&mut self, parcel_index: usize) -> Option<bool> {
        if parcel_index >= self.parcels.len() {
            return None;
        }
        Some(self.state.toggle_collapse(parcel_index))
    }

    /// Renders one panel per parcel, in input order.
    pub fn render(&self) -> Vec<ParcelPanel> {
        self.parcels
            .iter()
            .enumerate()
            .map(|(parcel_index, parcel)| {
                render_parcel_panel(parcel_index, parcel, &self.state, &self.options)
            })
            .collect()
    }

    pub fn render_panel(&self, parcel_index: usize) -> Option<ParcelPanel> {
        let parcel = self.parcels.get(parcel_index)?;
        Some(render_parcel_panel(parcel_index, parcel, &self.state, &self.options))
    }

    fn is_clickable_cell(&self, key: &CellKey) -> bool {
        let Some(segment) = self
            .parcels
            .get(key.parcel_index())
            .and_then(|parcel| parcel.segments().get(key.row_index()))
        else {
            return false;
        };
        render_segment_row(segment, key.parcel_index(), key.row_index(), &self.state)
            .is_some_and(|row| row.cell(key.column()).is_clickable())
    }
}

#[cfg(test)]
mod tests {
    use super::MapcheckView;
    use crate::format::FormatOptions;
    use crate::model::fixtures::sample_parcels;
    use crate::model::{
        CellKey, Column, LineSegment, ParcelRecord, SegmentRecord, UnsupportedSegment,
    };

    fn sample_view() -> MapcheckView {
        MapcheckView::new(sample_parcels(), FormatOptions::default())
    }

    #[test]
    fn renders_panels_in_input_order_with_line_numbers() {
        let view = sample_view();
        let panels = view.render();

        let names = panels.iter().map(|panel| panel.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Parcel A", "Parcel B"]);

        for (idx, panel) in panels.iter().enumerate() {
            assert_eq!(panel.parcel_index(), idx);
            let body = panel.body().expect("expanded");
            let line_nos = body
                .rows()
                .iter()
                .map(|row| row.cell(Column::LineNo).text().unwrap_or_default().to_owned())
                .collect::<Vec<_>>();
            assert_eq!(line_nos, vec!["1", "2"]);
        }

        let b = panels[1].body().expect("expanded");
        assert_eq!(b.summary().misclosure, "0.020");
        assert_eq!(b.summary().precision, "15,483.20");
    }

    #[test]
    fn header_attention_tracks_highlighted_cells() {
        let mut view = sample_view();
        let key = CellKey::new(0, 0, Column::Distance);

        assert_eq!(view.toggle_cell(key), Some(true));
        let panels = view.render();
        assert!(panels[0].is_attention());
        assert!(!panels[1].is_attention());

        assert_eq!(view.toggle_cell(key), Some(false));
        assert!(!view.render()[0].is_attention());
    }

    #[test]
    fn clicks_on_blank_or_missing_cells_are_ignored() {
        let mut view = sample_view();
        assert_eq!(view.toggle_cell(CellKey::new(0, 0, Column::Delta)), None);
        assert_eq!(view.toggle_cell(CellKey::new(0, 1, Column::Bearing)), None);
        assert_eq!(view.toggle_cell(CellKey::new(0, 9, Column::LineNo)), None);
        assert_eq!(view.toggle_cell(CellKey::new(9, 0, Column::LineNo)), None);
        assert_eq!(view.state().rev(), 0);
    }

    #[test]
    fn collapse_hides_body_and_reexpand_restores_highlights() {
        let mut view = sample_view();
        let key = CellKey::new(1, 1, Column::Radius);
        view.toggle_cell(key);

        assert_eq!(view.toggle_collapse(1), Some(true));
        let collapsed = view.render_panel(1).expect("panel");
        assert!(collapsed.body().is_none());
        assert!(collapsed.is_attention());

        assert_eq!(view.toggle_collapse(1), Some(false));
        let expanded = view.render_panel(1).expect("panel");
        let row = &expanded.body().expect("expanded").rows()[1];
        assert!(row.cell(Column::Radius).is_highlighted());
        assert_eq!(view.toggle_collapse(5), None);
    }

    #[test]
    fn malformed_segments_do_not_block_the_panel() {
        let parcel = ParcelRecord::new("Odd").with_segments(vec![
            SegmentRecord::Line(LineSegment::new(1, "N", "1 ft")),
            SegmentRecord::Unsupported(UnsupportedSegment::new(Some(2), "arc-spiral", "")),
            SegmentRecord::Line(LineSegment::new(3, "S", "2 ft")),
        ]);
        let mut view = MapcheckView::new(vec![parcel], FormatOptions::default());

        let panel = view.render_panel(0).expect("panel");
        assert_eq!(panel.body().expect("expanded").rows().len(), 2);
        assert_eq!(view.toggle_cell(CellKey::new(0, 1, Column::LineNo)), None);
        assert_eq!(view.toggle_cell(CellKey::new(0, 2, Column::LineNo)), Some(true));
    }
}
