//! Prompt for a dataset file path.

use crate::{App, AppView, views::draw_alert};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Position},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct OpenFileState {
    /// Path typed so far.
    pub input: String,
    /// Error from the last attempt; blocks input until dismissed.
    pub alert: Option<String>,
}

impl OpenFileState {
    pub fn set_input(&mut self, path: &Path) {
        self.input = path.display().to_string();
    }

    /// Apply a text editing key to the input. Returns whether it was one.
    ///
    /// Ctrl and Alt chords other than Ctrl+U never type.
    pub fn edit(&mut self, key: KeyEvent) -> bool {
        let chord = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.clear()
            }
            KeyCode::Char(c) if !chord => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            _ => return false,
        }
        true
    }
}

impl App {
    pub fn draw_open_file(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.state.theme;

        let [centered_area] = Layout::horizontal([Constraint::Max(72)])
            .flex(Flex::Center)
            .areas(area);
        let [title_area, input_area, hint_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(centered_area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "━━━ Open dataset ━━━",
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            )))
            .centered(),
            title_area,
        );

        let input = &self.state.open_file.input;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .title(Span::styled(" JSON file ", Style::default().fg(theme.dimmed)));
        let inner_width = input_area.width.saturating_sub(2) as usize;
        // keep the tail of long paths visible
        let shown: String = {
            let len = input.chars().count();
            input.chars().skip(len.saturating_sub(inner_width.saturating_sub(1))).collect()
        };
        let cursor_x = input_area.x + 1 + shown.chars().count() as u16;
        frame.render_widget(
            Paragraph::new(Span::styled(shown, Style::default().fg(theme.text))).block(block),
            input_area,
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Enter", Style::default().fg(theme.primary)),
                Span::styled(" open · ", Style::default().fg(theme.dimmed)),
                Span::styled("Ctrl+U", Style::default().fg(theme.primary)),
                Span::styled(" clear · ", Style::default().fg(theme.dimmed)),
                Span::styled("ESC", Style::default().fg(theme.primary)),
                Span::styled(" back", Style::default().fg(theme.dimmed)),
            ]))
            .centered(),
            hint_area,
        );

        if let Some(message) = &self.state.open_file.alert {
            draw_alert(frame, theme, "Cannot open file", message);
        } else {
            frame.set_cursor_position(Position::new(cursor_x, input_area.y + 1));
        }
    }

    pub fn handle_open_file_input(&mut self, key: KeyEvent) {
        if self.state.open_file.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.state.open_file.alert = None;
            }
            return;
        }

        if self.state.open_file.edit(key) {
            return;
        }
        match key.code {
            KeyCode::Enter => {
                let path = PathBuf::from(self.state.open_file.input.trim());
                if !path.as_os_str().is_empty() {
                    self.open_file(path);
                }
            }
            KeyCode::Esc => {
                if self.state.deck.viewer.is_some() {
                    self.view = AppView::Deck;
                } else {
                    self.quit();
                }
            }
            _ => {}
        }
    }
}
