// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{CellKey, Column};

use super::panel::{PanelBody, ParcelPanel};
use super::view::VIEW_TITLE;

const INDENT: &str = "  ";
const COLUMN_SEPARATOR: &str = " │ ";
const RULE_SEPARATOR: &str = "─┼─";
const NOTE_LABEL: &str = "Parcel notes: ";
const NOTE_PLACEHOLDER: &str = "no note";

/// Something the user can click in the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClickTarget {
    /// Parcel header; clicking toggles collapse.
    Header(usize),
    /// Populated table cell; clicking toggles its highlight.
    Cell(CellKey),
    /// Parcel note input.
    Note(usize),
}

impl ClickTarget {
    pub fn parcel_index(&self) -> usize {
        match self {
            Self::Header(parcel_index) | Self::Note(parcel_index) => *parcel_index,
            Self::Cell(key) => key.parcel_index(),
        }
    }
}

/// A contiguous run of character cells within a single rendered line.
///
/// Coordinates are `(y, x0, x1)` in character-cell indices, inclusive, relative to the rendered
/// text lines.
pub type LineSpan = (usize, usize, usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub target: ClickTarget,
    pub span: LineSpan,
    /// Draw in the attention style (highlighted cell, or header of a parcel with one).
    pub attention: bool,
}

/// Rendered report text plus the clickable regions inside it, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedReport {
    pub text: String,
    pub regions: Vec<Region>,
}

impl AnnotatedReport {
    /// The region under the character cell `(x, y)`, if any.
    pub fn target_at(&self, x: usize, y: usize) -> Option<ClickTarget> {
        self.regions
            .iter()
            .find(|region| {
                let (ry, x0, x1) = region.span;
                ry == y && x0 <= x && x <= x1
            })
            .map(|region| region.target)
    }

    pub fn region_for(&self, target: &ClickTarget) -> Option<&Region> {
        self.regions.iter().find(|region| region.target == *target)
    }
}

/// Plain-text rendering of the whole report, without notes.
pub fn render_report_text(panels: &[ParcelPanel]) -> String {
    render_report_annotated(panels, &[]).text
}

/// Renders the report and records where every clickable element landed. `notes[i]` is the note
/// shown for parcel `i`; missing or empty notes show the placeholder.
pub fn render_report_annotated(panels: &[ParcelPanel], notes: &[String]) -> AnnotatedReport {
    let mut out = ReportWriter::default();
    out.finish_line(VIEW_TITLE.to_owned());
    out.finish_line(String::new());

    for (idx, panel) in panels.iter().enumerate() {
        if idx > 0 {
            out.finish_line(String::new());
        }
        write_panel(&mut out, panel, notes);
    }

    AnnotatedReport {
        text: out.lines.join("\n"),
        regions: out.regions,
    }
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

#[derive(Debug, Default)]
struct ReportWriter {
    lines: Vec<String>,
    regions: Vec<Region>,
}

impl ReportWriter {
    fn y(&self) -> usize {
        self.lines.len()
    }

    fn finish_line(&mut self, line: String) {
        let trimmed_len = line.trim_end_matches(' ').len();
        let mut line = line;
        line.truncate(trimmed_len);

        let y = self.y();
        let len = text_len(&line);
        for region in self.regions.iter_mut().filter(|region| region.span.0 == y) {
            region.span.2 = region.span.2.min(len.saturating_sub(1));
        }
        self.lines.push(line);
    }

    fn region(&mut self, target: ClickTarget, x0: usize, width: usize, attention: bool) {
        if width == 0 {
            return;
        }
        self.regions.push(Region {
            target,
            span: (self.y(), x0, x0 + width - 1),
            attention,
        });
    }
}

fn write_panel(out: &mut ReportWriter, panel: &ParcelPanel, notes: &[String]) {
    let marker = if panel.is_collapsed() { '▸' } else { '▾' };
    let mut header = format!("{marker} {}", panel.name());
    if panel.highlight_count() > 0 {
        header.push_str(&format!("  ({} marked)", panel.highlight_count()));
    }
    out.region(
        ClickTarget::Header(panel.parcel_index()),
        0,
        text_len(&header),
        panel.is_attention(),
    );
    out.finish_line(header);

    let Some(body) = panel.body() else {
        return;
    };

    let summary = body.summary();
    out.finish_line(format!(
        "{INDENT}Misclosure: {} feet    Precision: 1 in {} feet",
        summary.misclosure, summary.precision
    ));
    out.finish_line(format!(
        "{INDENT}Area: {}    Perimeter: {}    Direction Error: {}",
        summary.area, summary.perimeter, summary.direction_error
    ));
    out.finish_line(String::new());

    write_table(out, body);
    out.finish_line(String::new());

    let note = notes
        .get(panel.parcel_index())
        .map(String::as_str)
        .filter(|note| !note.is_empty())
        .unwrap_or(NOTE_PLACEHOLDER);
    let x0 = text_len(INDENT) + text_len(NOTE_LABEL);
    out.region(ClickTarget::Note(panel.parcel_index()), x0, text_len(note), false);
    out.finish_line(format!("{INDENT}{NOTE_LABEL}{note}"));
}

fn write_table(out: &mut ReportWriter, body: &PanelBody) {
    let mut widths = Column::ALL.map(|column| text_len(column.label()));
    for row in body.rows() {
        for cell in row.cells() {
            if let Some(text) = cell.text() {
                let width = &mut widths[cell.key().column().idx()];
                *width = (*width).max(text_len(text));
            }
        }
    }

    let header = Column::ALL
        .iter()
        .map(|column| pad(column.label(), widths[column.idx()]))
        .collect::<Vec<_>>()
        .join(COLUMN_SEPARATOR);
    out.finish_line(format!("{INDENT}{header}"));

    let rule = widths.iter().map(|width| "─".repeat(*width)).collect::<Vec<_>>().join(RULE_SEPARATOR);
    out.finish_line(format!("{INDENT}{rule}"));

    for row in body.rows() {
        let mut line = String::from(INDENT);
        let mut x = text_len(INDENT);
        for (idx, cell) in row.cells().iter().enumerate() {
            if idx > 0 {
                line.push_str(COLUMN_SEPARATOR);
                x += text_len(COLUMN_SEPARATOR);
            }
            let width = widths[idx];
            match cell.text() {
                Some(text) => {
                    out.region(ClickTarget::Cell(cell.key()), x, width, cell.is_highlighted());
                    line.push_str(&pad(text, width));
                }
                None => line.push_str(&" ".repeat(width)),
            }
            x += width;
        }
        out.finish_line(line);
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text_len(text);
    let mut out = String::with_capacity(text.len() + width.saturating_sub(len));
    out.push_str(text);
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out
}

#[cfg(test)]
mod tests {
    use super::{render_report_annotated, render_report_text, text_len, ClickTarget};
    use crate::format::FormatOptions;
    use crate::model::fixtures::sample_parcels;
    use crate::model::{CellKey, Column};
    use crate::render::MapcheckView;

    fn sample_view() -> MapcheckView {
        MapcheckView::new(sample_parcels(), FormatOptions::default())
    }

    #[test]
    fn report_text_lists_parcels_with_formatted_summary() {
        let text = render_report_text(&sample_view().render());

        assert!(text.starts_with("Civil 3D Parcel Mapcheck Viewer\n"));
        assert!(text.contains("▾ Parcel A"));
        assert!(text.contains("Misclosure: 0.010 feet"));
        assert!(text.contains("Precision: 1 in 291,872.20 feet"));
        assert!(text.contains("Precision: 1 in 15,483.20 feet"));
        assert!(text.contains("Direction Error: S 45°00'00\" W"));
        assert!(text.contains("Line No │ Bearing"));
        assert!(text.contains("Parcel notes: no note"));
        let a = text.find("Parcel A").expect("parcel a");
        let b = text.find("Parcel B").expect("parcel b");
        assert!(a < b);
    }

    #[test]
    fn report_text_has_no_trailing_spaces() {
        let text = render_report_text(&sample_view().render());
        for line in text.lines() {
            assert_eq!(line, line.trim_end(), "trailing space in {line:?}");
        }
    }

    #[test]
    fn collapsed_panel_renders_header_only() {
        let mut view = sample_view();
        view.toggle_collapse(0);
        view.toggle_cell(CellKey::new(1, 0, Column::Bearing));
        let text = render_report_text(&view.render());

        assert!(text.contains("▸ Parcel A"));
        assert!(!text.contains("Misclosure: 0.010"));
        assert!(text.contains("▾ Parcel B  (1 marked)"));
    }

    #[test]
    fn regions_point_at_their_rendered_text() {
        let report = render_report_annotated(&sample_view().render(), &[]);
        let lines = report.text.lines().collect::<Vec<_>>();

        let region = report
            .region_for(&ClickTarget::Cell(CellKey::new(0, 1, Column::Chord)))
            .expect("chord region");
        let (y, x0, x1) = region.span;
        let slice = lines[y].chars().skip(x0).take(x1 + 1 - x0).collect::<String>();
        assert_eq!(slice, "98.00 ft");

        let header = report.region_for(&ClickTarget::Header(1)).expect("header");
        assert_eq!(lines[header.span.0], "▾ Parcel B");
    }

    #[test]
    fn blank_cells_have_no_region() {
        let report = render_report_annotated(&sample_view().render(), &[]);
        assert!(report.region_for(&ClickTarget::Cell(CellKey::new(0, 0, Column::Delta))).is_none());
        assert!(report.region_for(&ClickTarget::Cell(CellKey::new(0, 1, Column::Bearing))).is_none());
    }

    #[test]
    fn target_at_resolves_clicks() {
        let report = render_report_annotated(&sample_view().render(), &[]);
        let region = report.region_for(&ClickTarget::Header(0)).expect("header").clone();
        assert_eq!(report.target_at(region.span.1, region.span.0), Some(ClickTarget::Header(0)));
        assert_eq!(report.target_at(0, 0), None);
    }

    #[test]
    fn notes_replace_placeholder() {
        let notes = vec![String::new(), "check monument".to_owned()];
        let report = render_report_annotated(&sample_view().render(), &notes);
        assert!(report.text.contains("Parcel notes: no note"));
        assert!(report.text.contains("Parcel notes: check monument"));

        let region = report.region_for(&ClickTarget::Note(1)).expect("note region");
        assert_eq!(region.span.2 + 1 - region.span.1, text_len("check monument"));
    }
}
