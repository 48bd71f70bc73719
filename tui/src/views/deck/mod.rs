use crate::{App, AppView, keys::viewer_key, theme::Theme};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use flashdeck_core::{DatasetStats, ImageRole, ImageView, Mode, ScreenView, Viewer};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};
use std::time::{Duration, Instant};

mod modal;
pub use modal::ModalCache;

pub mod pixels;

/// How long the card frame stays highlighted after a card change.
const TRANSITION: Duration = Duration::from_millis(300);

/// Image chips never take more rows than this.
const MAX_CHIP_ROWS: u16 = 3;

#[derive(Debug, Default)]
pub struct DeckState {
    /// Loaded deck, if any.
    pub viewer: Option<Viewer>,
    /// Statistics of the loaded dataset.
    pub stats: Option<DatasetStats>,
    pub show_stats: bool,

    /// Render count of the card drawn last; a change restarts the transition.
    pub seen_render: u64,
    pub transition_start: Option<Instant>,

    /* scrollbar stuff */
    /// Current vertical scroll of the card body.
    pub scroll_cur: u16,
    /// Maximum vertical scroll, updated on every draw.
    pub scroll_max: u16,
    pub scroll_bar: ScrollbarState,

    /// Screen areas of the image chips drawn last, with their visible image index.
    pub image_hits: Vec<(Rect, usize)>,
    /// Area of the image inside the overlay, if one is drawn.
    pub modal_image_area: Option<Rect>,
    pub modal_cache: Option<ModalCache>,
}

impl DeckState {
    /// Reset per-dataset state after a load.
    pub fn on_new_dataset(&mut self) {
        self.stats = self
            .viewer
            .as_ref()
            .map(|viewer| DatasetStats::collect(viewer.session().dataset()));
        self.seen_render = 0;
        self.scroll_cur = 0;
        self.image_hits.clear();
        self.modal_image_area = None;
        self.modal_cache = None;
    }

    /// Resolve a left click at `pos` against the areas drawn last.
    ///
    /// With the overlay open, a click on the image keeps it and any other
    /// click closes it. Otherwise a click on an image chip opens that image.
    /// Returns whether the click changed anything.
    pub fn click(&mut self, pos: Position) -> bool {
        let Some(viewer) = self.viewer.as_mut() else {
            return false;
        };
        if viewer.modal().is_open() {
            if self.modal_image_area.is_some_and(|area| area.contains(pos)) {
                return false;
            }
            return viewer.close_modal();
        }
        match self.image_hits.iter().find(|(rect, _)| rect.contains(pos)) {
            Some((_, index)) => viewer.open_image(*index),
            None => false,
        }
    }

    /// Mouse wheel scroll; ignored while the overlay is open.
    pub fn wheel(&mut self, delta: i32) -> bool {
        let locked = self
            .viewer
            .as_ref()
            .is_none_or(|viewer| viewer.modal().locks_scroll());
        if locked {
            return false;
        }
        self.scroll_by(delta);
        true
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (self.scroll_cur as i32 + delta).clamp(0, self.scroll_max as i32);
        self.scroll_cur = next as u16;
    }
}

/// Place chips of the given widths left to right, wrapping at `width`.
///
/// Returns `(x offset, row)` per chip. Chips wider than the row are
/// placed on a row of their own.
pub fn layout_chips(widths: &[u16], width: u16) -> Vec<(u16, u16)> {
    let mut out = Vec::with_capacity(widths.len());
    let (mut x, mut row) = (0u16, 0u16);
    for &w in widths {
        if x > 0 && x.saturating_add(w) > width {
            x = 0;
            row += 1;
        }
        out.push((x, row));
        x = x.saturating_add(w + 1);
    }
    out
}

fn chip_text(image: &ImageView) -> String {
    format!(" ▣ {} ", image.label)
}

impl App {
    pub fn draw_deck(&mut self, frame: &mut Frame) {
        let theme = self.state.theme;
        let deck = &mut self.state.deck;
        let Some(viewer) = deck.viewer.as_ref() else {
            return; // nothing to draw
        };
        let view = ScreenView::project(viewer);
        let render_count = viewer.render_count();
        let focused_label = viewer.focused_image_view().map(|image| image.label.clone());

        // restart the card transition on every card change
        if render_count != deck.seen_render {
            deck.seen_render = render_count;
            deck.transition_start = Some(Instant::now());
            deck.scroll_cur = 0;
        }
        let flashing = deck
            .transition_start
            .is_some_and(|start| start.elapsed() < TRANSITION);

        let mut area = frame.area();
        if deck.show_stats {
            let [main, side] =
                Layout::horizontal([Constraint::Min(40), Constraint::Length(36)]).areas(area);
            area = main;
            if let Some(stats) = &deck.stats {
                draw_stats(frame, theme, stats, side);
            }
        }

        let images: Vec<&ImageView> = view
            .question_images
            .iter()
            .chain(view.answer.iter().flat_map(|answer| answer.images.iter()))
            .collect();
        let widths: Vec<u16> = images
            .iter()
            .map(|image| chip_text(image).chars().count() as u16)
            .collect();
        let chips = layout_chips(&widths, area.width);
        let chip_rows = chips
            .last()
            .map_or(0, |(_, row)| (row + 1).min(MAX_CHIP_ROWS));

        let [header_area, card_area, chips_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(chip_rows),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(header_line(theme, &view)), header_area);

        /* card body */
        let border = if flashing {
            theme.card_flash
        } else {
            theme.card_border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" Q{} ", view.question_no),
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(card_area);
        let par = Paragraph::new(card_lines(theme, &view)).wrap(Wrap { trim: false });

        let num_lines = par.line_count(inner.width.saturating_sub(1)); // account for scrollbar
        deck.scroll_max = num_lines.saturating_sub(inner.height as usize) as u16;
        deck.scroll_cur = deck.scroll_cur.min(deck.scroll_max);

        frame.render_widget(block, card_area);
        frame.render_widget(
            par.scroll((deck.scroll_cur, 0)),
            Rect {
                width: inner.width.saturating_sub(1),
                ..inner
            },
        );
        if deck.scroll_max > 0 {
            deck.scroll_bar = deck
                .scroll_bar
                .content_length(deck.scroll_max as usize)
                .position(deck.scroll_cur as usize);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                card_area,
                &mut deck.scroll_bar,
            );
        }

        /* image chips */
        deck.image_hits.clear();
        for (index, (image, (x, row))) in images.iter().zip(chips.iter()).enumerate() {
            if *row >= chip_rows {
                break;
            }
            let rect = Rect {
                x: chips_area.x + x,
                y: chips_area.y + row,
                width: widths[index].min(chips_area.width.saturating_sub(*x)),
                height: 1,
            };
            let base = match image.role {
                ImageRole::Question => theme.secondary,
                ImageRole::Answer => theme.answer,
            };
            let style = if view.is_focused(index) {
                Style::default()
                    .fg(Color::Black)
                    .bg(theme.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(base)
            };
            frame.render_widget(Paragraph::new(Span::styled(chip_text(image), style)), rect);
            deck.image_hits.push((rect, index));
        }

        frame.render_widget(
            Paragraph::new(footer_line(theme, &view, focused_label.as_deref())),
            footer_area,
        );

        /* overlay */
        deck.modal_image_area = match &view.modal {
            Some(modal_image) => {
                modal::draw_modal(frame, theme, modal_image, &mut deck.modal_cache)
            }
            None => None,
        };
    }

    pub fn handle_deck_input(&mut self, key: KeyEvent) {
        let Some(viewer) = self.state.deck.viewer.as_mut() else {
            return;
        };
        if let Some(deck_key) = viewer_key(key) {
            if viewer.handle_key(deck_key) {
                return;
            }
        }
        if viewer.modal().is_open() {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') => self.show_help(),
            KeyCode::Char('o') => {
                self.state.open_file.alert = None;
                self.view = AppView::OpenFile;
            }
            KeyCode::Char('t') => self.cycle_theme(),
            KeyCode::Char('s') => self.state.deck.show_stats = !self.state.deck.show_stats,
            // scroll up (vertical offset shrinks)
            KeyCode::Up => self.state.deck.scroll_by(-1),
            // scroll down (vertical offset grows)
            KeyCode::Down => self.state.deck.scroll_by(1),
            KeyCode::PageUp => self.state.deck.scroll_by(-10),
            KeyCode::PageDown => self.state.deck.scroll_by(10),
            KeyCode::Home => self.state.deck.scroll_cur = 0,
            _ => {}
        }
    }

    pub fn handle_deck_mouse(&mut self, mouse: MouseEvent) {
        let deck = &mut self.state.deck;
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                deck.click(pos);
            }
            MouseEventKind::ScrollUp => {
                deck.wheel(-1);
            }
            MouseEventKind::ScrollDown => {
                deck.wheel(1);
            }
            _ => {}
        }
    }
}

fn header_line(theme: &Theme, view: &ScreenView) -> Line<'static> {
    let mode_label = match view.mode {
        Mode::Basic => " BASIC ",
        Mode::Exam => " EXAM ",
    };
    let mut spans = vec![
        Span::styled(
            format!(" Question {} / {} ", view.progress.current, view.progress.total),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("#{} ", view.question_no),
            Style::default().fg(theme.dimmed),
        ),
        Span::styled(
            mode_label,
            Style::default()
                .fg(Color::Black)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if view.has_images {
        spans.push(Span::styled(" ▣ images", Style::default().fg(theme.secondary)));
    }
    Line::from(spans)
}

fn card_lines(theme: &Theme, view: &ScreenView) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = view
        .question
        .lines()
        .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(theme.text))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "── Answer ──",
        Style::default().fg(theme.dimmed),
    )));

    match &view.answer {
        Some(answer) => {
            lines.extend(answer.text.lines().map(|line| {
                Line::from(Span::styled(line.to_string(), Style::default().fg(theme.answer)))
            }));
        }
        None => {
            lines.push(Line::from(vec![
                Span::styled("Space", Style::default().fg(theme.primary)),
                Span::styled(
                    " to reveal the answer",
                    Style::default()
                        .fg(theme.dimmed)
                        .add_modifier(Modifier::ITALIC),
                ),
            ]));
        }
    }
    lines
}

/// Key hint with its enabled state.
fn hint(theme: &Theme, key: &'static str, label: &'static str, enabled: bool) -> [Span<'static>; 2] {
    let (key_style, label_style) = if enabled {
        (Style::default().fg(theme.primary), Style::default().fg(theme.dimmed))
    } else {
        let off = Style::default()
            .fg(theme.dimmed)
            .add_modifier(Modifier::CROSSED_OUT);
        (off, off)
    };
    [Span::styled(key, key_style), Span::styled(label, label_style)]
}

fn footer_line(theme: &Theme, view: &ScreenView, focused: Option<&str>) -> Line<'static> {
    let reveal = if view.answer.is_some() { " hide · " } else { " answer · " };
    let mut spans: Vec<Span> = Vec::new();
    spans.extend(hint(theme, " ←", " prev · ", view.can_go_prev));
    spans.extend(hint(theme, "→", " next · ", view.can_go_next));
    spans.extend(hint(theme, "Space", reveal, true));
    for (key, mode, label) in [("b", Mode::Basic, " basic "), ("e", Mode::Exam, " exam")] {
        let label_style = if view.mode == mode {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dimmed)
        };
        spans.push(Span::styled(key, Style::default().fg(theme.primary)));
        spans.push(Span::styled(label, label_style));
    }
    spans.push(Span::styled(" · ", Style::default().fg(theme.dimmed)));
    if view.show_random_jump {
        spans.extend(hint(theme, "r", " random · ", true));
    }
    if !view.question_images.is_empty() || view.answer.as_ref().is_some_and(|a| !a.images.is_empty()) {
        spans.extend(hint(theme, "Tab", " image · ", true));
    }
    if let Some(label) = focused {
        spans.push(Span::styled("Enter", Style::default().fg(theme.primary)));
        spans.push(Span::styled(
            format!(" open {} · ", label),
            Style::default().fg(theme.dimmed),
        ));
    }
    spans.extend(hint(theme, "?", " help · ", true));
    spans.extend(hint(theme, "q", " quit", true));
    Line::from(spans)
}

fn draw_stats(frame: &mut Frame, theme: &Theme, stats: &DatasetStats, area: Rect) {
    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<18}", label), Style::default().fg(theme.dimmed)),
            Span::styled(value, Style::default().fg(theme.text)),
        ])
    };
    let lines = vec![
        row("Questions", stats.total_questions.to_string()),
        row("With answers", stats.questions_with_answers.to_string()),
        row("With images", stats.questions_with_images.to_string()),
        row("Question images", stats.question_images.to_string()),
        row("Answer images", stats.answer_images.to_string()),
        row("Answered", format!("{:.1}%", stats.answer_completion_rate())),
        row("Illustrated", format!("{:.1}%", stats.image_inclusion_rate())),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.card_border))
        .title(Span::styled(" Dataset ", Style::default().fg(theme.secondary)));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
