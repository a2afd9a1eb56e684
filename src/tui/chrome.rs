// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Title, footer, help, and layout helpers used by TUI rendering.

fn report_view_title(parcel_count: usize, marked: usize) -> String {
    let noun = if parcel_count == 1 { "parcel" } else { "parcels" };
    let mut title = format!("─ Mapcheck ─ {parcel_count} {noun}");
    if marked > 0 {
        title.push_str(&format!(" ─ {marked} marked"));
    }
    title.push(' ');
    title
}

const FOOTER_KEYS: &[(&str, &str)] = &[
    ("j/k", "move"),
    ("h/l", "cell"),
    ("space", "toggle"),
    ("c", "collapse"),
    ("/", "find"),
    ("?", "help"),
    ("q", "quit"),
];

fn footer_help_line(theme: &TuiTheme) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::with_capacity(FOOTER_KEYS.len() * 3);
    for (idx, (key, label)) in FOOTER_KEYS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled((*key).to_owned(), theme.key_style()));
        spans.push(Span::styled(format!(" {label}"), theme.muted_style()));
    }
    Line::from(spans)
}

fn footer_prompt_line(prompt: &str, input: &str, hint: &str, theme: &TuiTheme) -> Line<'static> {
    Line::from(vec![
        Span::styled(prompt.to_owned(), theme.key_style()),
        Span::styled(format!("{input}▏"), theme.base_style()),
        Span::styled(format!("  {hint}"), theme.muted_style()),
    ])
}

fn help_lines(theme: &TuiTheme) -> Vec<Line<'static>> {
    const ROWS: &[(&str, &str)] = &[
        ("j / k, ↓ / ↑", "previous / next line"),
        ("h / l, ← / →", "previous / next cell in the row"),
        ("g / G", "first / last item"),
        ("space / enter", "toggle cell mark, collapse header, edit note"),
        ("c", "collapse or expand the current parcel"),
        ("/", "find a parcel by name"),
        ("PgUp / PgDn", "scroll"),
        ("mouse click", "same as space on the clicked item"),
        ("?", "close help"),
        ("q / esc", "quit"),
    ];

    let mut lines = vec![
        Line::from(Span::styled("Keys".to_owned(), theme.title_style())),
        Line::from(String::new()),
    ];
    for (keys, action) in ROWS {
        lines.push(Line::from(vec![
            Span::styled(format!("{keys:<16}"), theme.key_style()),
            Span::styled((*action).to_owned(), theme.base_style()),
        ]));
    }
    lines.push(Line::from(String::new()));
    lines.push(Line::from(Span::styled(
        "Marked cells turn the parcel header orange. Notes are not saved.".to_owned(),
        theme.muted_style(),
    )));
    lines
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
