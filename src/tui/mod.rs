// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Interactive report viewer (ratatui + crossterm). The report is rendered as annotated text;
//! keyboard navigation and mouse clicks both resolve to a [`ClickTarget`] and go through the
//! same activation path.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::{debug, info};

use crate::render::{render_report_annotated, AnnotatedReport, ClickTarget, MapcheckView};

mod compose;
mod theme;

use compose::styled_report;
use theme::TuiTheme;

const WHEEL_STEP: usize = 3;
const TOAST_TTL: Duration = Duration::from_secs(2);
const INITIAL_VIEWPORT: Rect = Rect {
    x: 1,
    y: 1,
    width: 118,
    height: 40,
};

/// Runs the interactive viewer until the user quits.
pub fn run(view: MapcheckView) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(view, theme);
    info!(parcels = app.view.parcels().len(), "viewer started");

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key_code(key.code) {
                        app.should_quit = true;
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    info!(
        marked = app.view.state().highlighted_cells().count(),
        "viewer closed"
    );
    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let marked = app.view.state().highlighted_cells().count();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(report_view_title(app.view.parcels().len(), marked))
        .border_style(app.theme.border_style());
    app.set_viewport(block.inner(main_area));

    let report = Paragraph::new(styled_report(&app.report, app.cursor.as_ref(), &app.theme))
        .style(app.theme.base_style())
        .block(block)
        .scroll((u16::try_from(app.scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(report, main_area);

    frame.render_widget(Paragraph::new(app.footer_line()), status_area);

    if app.show_help {
        render_help(frame, app, main_area);
    }
}

fn render_help(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let lines = help_lines(&app.theme);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let popup = centered_rect(area, 64, height);
    let max_scroll = (lines.len() + 2).saturating_sub(usize::from(popup.height));
    app.help_scroll = app.help_scroll.min(u16::try_from(max_scroll).unwrap_or(u16::MAX));

    let help = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .scroll((app.help_scroll, 0))
        .style(app.theme.base_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(app.theme.border_style()),
        );
    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}

// Extracted title/footer/help helpers.
include!("chrome.rs");

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    is_error: bool,
    expires_at: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum InputMode {
    Normal,
    EditingNote { parcel_index: usize, draft: String },
    Search { query: String },
}

struct App {
    view: MapcheckView,
    // Session-only; indexed by parcel position, never written anywhere.
    notes: Vec<String>,
    theme: TuiTheme,
    report: AnnotatedReport,
    // State revision and displayed notes the current `report` was rendered from.
    rendered_for: Option<(u64, Vec<String>)>,
    cursor: Option<ClickTarget>,
    scroll: usize,
    report_area: Rect,
    mode: InputMode,
    show_help: bool,
    help_scroll: u16,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(view: MapcheckView, theme: TuiTheme) -> Self {
        let notes = vec![String::new(); view.parcels().len()];
        let mut app = Self {
            view,
            notes,
            theme,
            report: AnnotatedReport {
                text: String::new(),
                regions: Vec::new(),
            },
            rendered_for: None,
            cursor: None,
            scroll: 0,
            report_area: INITIAL_VIEWPORT,
            mode: InputMode::Normal,
            show_help: false,
            help_scroll: 0,
            toast: None,
            should_quit: false,
        };
        app.refresh();
        app
    }

    fn viewport_height(&self) -> usize {
        usize::from(self.report_area.height).max(1)
    }

    fn line_count(&self) -> usize {
        self.report.text.split('\n').count()
    }

    fn set_viewport(&mut self, area: Rect) {
        let resized = area.height != self.report_area.height;
        self.report_area = area;
        if resized {
            self.clamp_scroll();
            self.ensure_cursor_visible();
        }
    }

    /// Re-derives the report after any change to view state, notes, or edit mode.
    fn refresh(&mut self) {
        let rev = self.view.state().rev();
        let notes = self.display_notes();
        let stale = self
            .rendered_for
            .as_ref()
            .map_or(true, |(rendered_rev, rendered_notes)| {
                *rendered_rev != rev || *rendered_notes != notes
            });
        if stale {
            self.report = render_report_annotated(&self.view.render(), &notes);
            self.rendered_for = Some((rev, notes));
        }

        self.cursor = match self.cursor {
            Some(target) if self.report.region_for(&target).is_some() => Some(target),
            Some(target) => {
                let header = ClickTarget::Header(target.parcel_index());
                if self.report.region_for(&header).is_some() {
                    Some(header)
                } else {
                    self.first_target()
                }
            }
            None => self.first_target(),
        };
        self.clamp_scroll();
        self.ensure_cursor_visible();
    }

    fn display_notes(&self) -> Vec<String> {
        let mut notes = self.notes.clone();
        if let InputMode::EditingNote {
            parcel_index,
            draft,
        } = &self.mode
        {
            if let Some(note) = notes.get_mut(*parcel_index) {
                *note = format!("{draft}▏");
            }
        }
        notes
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            is_error: false,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn set_error_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            is_error: true,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                KeyCode::Home => self.help_scroll = 0,
                _ => {}
            }
            return false;
        }

        match self.mode {
            InputMode::EditingNote { .. } => {
                self.handle_note_key(code);
                return false;
            }
            InputMode::Search { .. } => {
                self.handle_search_key(code);
                return false;
            }
            InputMode::Normal => {}
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('?') => {
                self.show_help = true;
                self.help_scroll = 0;
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_line(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_line(-1),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.move_in_line(1),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.move_in_line(-1),
            KeyCode::Home | KeyCode::Char('g') => self.set_cursor(self.first_target()),
            KeyCode::End | KeyCode::Char('G') => self.set_cursor(self.last_target()),
            KeyCode::PageDown => self.scroll_page(1),
            KeyCode::PageUp => self.scroll_page(-1),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(target) = self.cursor {
                    self.activate(target);
                }
            }
            KeyCode::Char('c') => self.collapse_cursor_parcel(),
            KeyCode::Char('/') => {
                self.mode = InputMode::Search {
                    query: String::new(),
                };
            }
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP as isize),
            MouseEventKind::ScrollUp => self.scroll_by(-(WHEEL_STEP as isize)),
            _ => {}
        }
    }

    /// Resolves a click at terminal cell `(column, row)` against the report regions.
    fn click(&mut self, column: u16, row: u16) {
        if self.show_help || self.mode != InputMode::Normal {
            return;
        }
        let area = self.report_area;
        if column < area.x
            || row < area.y
            || column >= area.x.saturating_add(area.width)
            || row >= area.y.saturating_add(area.height)
        {
            return;
        }

        let x = usize::from(column - area.x);
        let y = usize::from(row - area.y) + self.scroll;
        let Some(target) = self.report.target_at(x, y) else {
            return;
        };
        self.cursor = Some(target);
        self.activate(target);
    }

    fn activate(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Header(parcel_index) => {
                self.view.toggle_collapse(parcel_index);
            }
            ClickTarget::Cell(key) => {
                self.view.toggle_cell(key);
            }
            ClickTarget::Note(parcel_index) => {
                let draft = self.notes.get(parcel_index).cloned().unwrap_or_default();
                self.mode = InputMode::EditingNote {
                    parcel_index,
                    draft,
                };
            }
        }
        self.refresh();
    }

    fn collapse_cursor_parcel(&mut self) {
        let Some(parcel_index) = self.cursor.map(|target| target.parcel_index()) else {
            return;
        };
        if self.view.toggle_collapse(parcel_index).is_some() {
            self.cursor = Some(ClickTarget::Header(parcel_index));
            self.refresh();
        }
    }

    fn handle_note_key(&mut self, code: KeyCode) {
        let InputMode::EditingNote {
            parcel_index,
            draft,
        } = &mut self.mode
        else {
            return;
        };

        match code {
            KeyCode::Char(ch) => draft.push(ch),
            KeyCode::Backspace => {
                draft.pop();
            }
            KeyCode::Enter => {
                let parcel_index = *parcel_index;
                let note = std::mem::take(draft);
                if let Some(slot) = self.notes.get_mut(parcel_index) {
                    *slot = note;
                }
                debug!(parcel_index, "parcel note updated");
                self.mode = InputMode::Normal;
                self.set_toast("Note kept for this session");
            }
            KeyCode::Esc => self.mode = InputMode::Normal,
            _ => return,
        }
        self.refresh();
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        let InputMode::Search { query } = &mut self.mode else {
            return;
        };

        match code {
            KeyCode::Char(ch) => query.push(ch),
            KeyCode::Backspace => {
                query.pop();
            }
            KeyCode::Enter => {
                let query = std::mem::take(query);
                self.mode = InputMode::Normal;
                self.jump_to_parcel(&query);
            }
            KeyCode::Esc => self.mode = InputMode::Normal,
            _ => {}
        }
    }

    fn jump_to_parcel(&mut self, query: &str) {
        let names = self.view.parcels().iter().map(|parcel| parcel.name());
        match best_parcel_match(query, names) {
            Some(parcel_index) => {
                self.set_cursor(Some(ClickTarget::Header(parcel_index)));
            }
            None if query.trim().is_empty() => {}
            None => self.set_error_toast(format!("No parcel matches \"{}\"", query.trim())),
        }
    }

    fn set_cursor(&mut self, target: Option<ClickTarget>) {
        if target.is_some() {
            self.cursor = target;
            self.ensure_cursor_visible();
        }
    }

    fn first_target(&self) -> Option<ClickTarget> {
        self.report.regions.first().map(|region| region.target)
    }

    fn last_target(&self) -> Option<ClickTarget> {
        self.report.regions.last().map(|region| region.target)
    }

    fn cursor_span(&self) -> Option<(usize, usize, usize)> {
        let target = self.cursor?;
        self.report.region_for(&target).map(|region| region.span)
    }

    /// Moves to the nearest region on the next (or previous) line that has any, keeping the
    /// column as close as possible.
    fn move_line(&mut self, direction: i32) {
        let Some((y, x0, _)) = self.cursor_span() else {
            self.set_cursor(self.first_target());
            return;
        };

        let candidates = self.report.regions.iter().filter(|region| {
            if direction > 0 {
                region.span.0 > y
            } else {
                region.span.0 < y
            }
        });
        let target_y = if direction > 0 {
            candidates.map(|region| region.span.0).min()
        } else {
            candidates.map(|region| region.span.0).max()
        };
        let Some(target_y) = target_y else {
            return;
        };

        let next = self
            .report
            .regions
            .iter()
            .filter(|region| region.span.0 == target_y)
            .min_by_key(|region| region.span.1.abs_diff(x0))
            .map(|region| region.target);
        self.set_cursor(next);
    }

    fn move_in_line(&mut self, direction: i32) {
        let Some((y, x0, _)) = self.cursor_span() else {
            self.set_cursor(self.first_target());
            return;
        };

        let same_line = self.report.regions.iter().filter(|region| region.span.0 == y);
        let next = if direction > 0 {
            same_line
                .filter(|region| region.span.1 > x0)
                .min_by_key(|region| region.span.1)
        } else {
            same_line
                .filter(|region| region.span.1 < x0)
                .max_by_key(|region| region.span.1)
        };
        self.set_cursor(next.map(|region| region.target));
    }

    fn max_scroll(&self) -> usize {
        self.line_count().saturating_sub(self.viewport_height())
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn ensure_cursor_visible(&mut self) {
        let Some((y, _, _)) = self.cursor_span() else {
            return;
        };
        let height = self.viewport_height();
        if y < self.scroll {
            self.scroll = y;
        } else if y >= self.scroll + height {
            self.scroll = y + 1 - height;
        }
    }

    fn scroll_page(&mut self, direction: isize) {
        let page = self.viewport_height().saturating_sub(1).max(1) as isize;
        self.scroll_by(direction * page);
    }

    /// Scrolls the report and pulls the cursor into the viewport if it left it.
    fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta).min(self.max_scroll());

        let height = self.viewport_height();
        let visible = |y: usize| y >= self.scroll && y < self.scroll + height;
        if self.cursor_span().is_some_and(|(y, _, _)| visible(y)) {
            return;
        }
        let regions = self.report.regions.iter().filter(|region| visible(region.span.0));
        let next = if delta > 0 {
            regions.map(|region| region.target).next()
        } else {
            regions.map(|region| region.target).last()
        };
        if next.is_some() {
            self.cursor = next;
        }
    }

    fn active_toast(&mut self) -> Option<&Toast> {
        if self.toast.as_ref().is_some_and(|toast| toast.expires_at <= Instant::now()) {
            self.toast = None;
        }
        self.toast.as_ref()
    }

    fn footer_line(&mut self) -> Line<'static> {
        let theme = self.theme.clone();
        match &self.mode {
            InputMode::Search { query } => {
                return footer_prompt_line("/", query, "enter jump · esc cancel", &theme);
            }
            InputMode::EditingNote { parcel_index, draft } => {
                let name = self
                    .view
                    .parcels()
                    .get(*parcel_index)
                    .map(|parcel| parcel.name())
                    .unwrap_or_default();
                let prompt = format!("note for {name}: ");
                return footer_prompt_line(&prompt, draft, "enter save · esc cancel", &theme);
            }
            InputMode::Normal => {}
        }

        let mut line = footer_help_line(&theme);
        if let Some(toast) = self.active_toast() {
            let style = if toast.is_error {
                theme.error_style()
            } else {
                theme.key_style()
            };
            line.spans.push(Span::styled(format!("  | {}", toast.message), style));
        }
        line
    }
}

/// Index of the parcel whose name best matches `query`, or `None` when nothing matches.
fn best_parcel_match<'a>(query: &str, names: impl Iterator<Item = &'a str>) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (idx, name) in names.enumerate() {
        let Some(score) = fuzzy_score(query, name) else {
            continue;
        };
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((idx, score));
        }
    }
    best.map(|(idx, _)| idx)
}

fn fuzzy_score(needle: &str, haystack: &str) -> Option<i64> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    let haystack = haystack.to_lowercase();
    if !is_subsequence(&needle, &haystack) {
        return None;
    }

    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    let mut score = (ratio * 1000.0).round() as i64;
    if haystack.contains(&needle) {
        score += 2000;
    }
    if haystack.starts_with(&needle) {
        score += 150;
    }
    if haystack == needle {
        score += 100_000;
    }
    Some(score)
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|want| hay.any(|ch| ch == want))
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}
