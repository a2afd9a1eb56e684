// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering of the mapcheck report.
//!
//! The view is rendered in two steps: [`MapcheckView::render`] produces a plain view tree
//! (panels, summary blocks, segment rows with their cell keys), and [`text`] lays that tree out
//! as text together with the clickable regions the TUI uses for hit testing and styling.

pub mod panel;
pub mod segment_row;
pub mod text;
pub mod view;

pub use panel::{render_parcel_panel, PanelBody, ParcelPanel, SummaryBlock};
pub use segment_row::{
    render_segment_row, render_segment_rows, CellContent, RowCell, RowKind, SegmentRow,
};
pub use text::{
    render_report_annotated, render_report_text, AnnotatedReport, ClickTarget, LineSpan, Region,
};
pub use view::{MapcheckView, VIEW_TITLE};
