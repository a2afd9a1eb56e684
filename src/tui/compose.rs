// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Turns the annotated report text into styled ratatui lines.

use ratatui::text::{Line, Span, Text};

use crate::render::{AnnotatedReport, ClickTarget, Region};

use super::theme::TuiTheme;

pub(crate) fn styled_report(
    report: &AnnotatedReport,
    cursor: Option<&ClickTarget>,
    theme: &TuiTheme,
) -> Text<'static> {
    let mut regions_by_line = vec![Vec::<&Region>::new(); report.text.split('\n').count()];
    for region in &report.regions {
        if let Some(line_regions) = regions_by_line.get_mut(region.span.0) {
            line_regions.push(region);
        }
    }

    let lines = report
        .text
        .split('\n')
        .zip(regions_by_line)
        .enumerate()
        .map(|(y, (line, mut regions))| {
            if y == 0 {
                return Line::from(Span::styled(line.to_owned(), theme.title_style()));
            }
            regions.sort_by_key(|region| region.span.1);
            styled_line(line, &regions, cursor, theme)
        })
        .collect::<Vec<_>>();

    Text::from(lines)
}

fn styled_line(
    line: &str,
    regions: &[&Region],
    cursor: Option<&ClickTarget>,
    theme: &TuiTheme,
) -> Line<'static> {
    if regions.is_empty() {
        return Line::from(Span::styled(line.to_owned(), theme.base_style()));
    }

    let chars = line.chars().collect::<Vec<_>>();
    let mut spans = Vec::<Span<'static>>::with_capacity(regions.len() * 2 + 1);
    let mut x = 0usize;
    for region in regions {
        let (_, x0, x1) = region.span;
        if x0 >= chars.len() || x0 < x {
            continue;
        }
        let x1 = x1.min(chars.len() - 1);

        if x0 > x {
            spans.push(Span::styled(chars[x..x0].iter().collect::<String>(), theme.base_style()));
        }

        let is_cursor = cursor == Some(&region.target);
        let style = if is_cursor {
            theme.cursor_style(region.attention)
        } else if region.attention {
            theme.attention_style()
        } else if matches!(region.target, ClickTarget::Header(_)) {
            theme.header_style()
        } else if matches!(region.target, ClickTarget::Note(_)) {
            theme.muted_style()
        } else {
            theme.base_style()
        };
        spans.push(Span::styled(chars[x0..=x1].iter().collect::<String>(), style));
        x = x1 + 1;
    }

    if x < chars.len() {
        spans.push(Span::styled(chars[x..].iter().collect::<String>(), theme.base_style()));
    }

    Line::from(spans)
}
