pub mod deck;
pub mod help;
pub mod loading;
pub mod open_file;

use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// A `width` x `height` rectangle centered in `area`, clamped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Draw a blocking alert box over whatever is on screen.
pub fn draw_alert(frame: &mut Frame, theme: &Theme, title: &str, message: &str) {
    let width = 60u16;
    // rough wrap estimate: border (2) + padding + footer
    let body_lines = (message.chars().count() as u16 / (width - 4)) + 1;
    let area = centered_rect(frame.area(), width, body_lines + 5);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.error))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        ));
    let lines = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(theme.text))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.primary)),
            Span::styled(" dismiss", Style::default().fg(theme.dimmed)),
        ]),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(area, 20, 10), Rect::new(40, 15, 20, 10));
        assert_eq!(centered_rect(area, 200, 80), area);
    }
}
