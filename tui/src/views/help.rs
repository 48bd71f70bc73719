use crate::{App, AppView};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Help content sections with their keyboard shortcuts.
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Cards",
        &[
            ("← / →", "Previous / next question"),
            ("Space", "Show or hide the answer"),
            ("r", "Random question (exam mode)"),
        ],
    ),
    (
        "Modes",
        &[
            ("b", "Basic mode, dataset order"),
            ("e", "Exam mode, shuffled order"),
        ],
    ),
    (
        "Images",
        &[
            ("Tab / Shift+Tab", "Focus next / previous image"),
            ("Enter", "Open focused image"),
            ("Click", "Open image"),
            ("ESC / x", "Close image"),
        ],
    ),
    (
        "General",
        &[
            ("↑ / ↓", "Scroll card"),
            ("o", "Open dataset file"),
            ("s", "Toggle dataset statistics"),
            ("t", "Next theme"),
            ("?", "Show help"),
            ("q / Ctrl+C", "Quit application"),
        ],
    ),
];

impl App {
    pub fn draw_help(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.state.theme;

        // title + blank, then header, items and a blank per section, then footer
        let content_height: u16 = 2
            + HELP_SECTIONS
                .iter()
                .map(|(_, items)| items.len() as u16 + 2)
                .sum::<u16>()
            + 1;
        let content_width: u16 = 48;

        let [centered_area] = Layout::horizontal([Constraint::Length(content_width)])
            .flex(Flex::Center)
            .areas(area);
        let [centered_area] = Layout::vertical([Constraint::Length(content_height)])
            .flex(Flex::Center)
            .areas(centered_area);

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                "━━━ Keyboard Controls ━━━",
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (section_name, items) in HELP_SECTIONS {
            lines.push(Line::from(Span::styled(
                section_name.to_string(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, description) in *items {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:<16}", key), Style::default().fg(theme.secondary)),
                    Span::styled(description.to_string(), Style::default().fg(theme.dimmed)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("ESC", Style::default().fg(theme.primary)),
            Span::styled(" to return", Style::default().fg(theme.dimmed)),
        ]));

        frame.render_widget(Paragraph::new(lines), centered_area);
    }

    pub fn handle_help_input(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('?')
        ) {
            self.view = self.previous_view.take().unwrap_or(AppView::Deck);
            if self.view == AppView::Deck && self.state.deck.viewer.is_none() {
                // nothing to return to yet
                self.view = AppView::OpenFile;
            }
        }
    }
}
