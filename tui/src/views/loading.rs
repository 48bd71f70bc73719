//! Loading screen shown while a dataset is fetched.

use crate::{App, AppView, describe_load_error};
use crossterm::event::{KeyCode, KeyEvent};
use flashdeck_core::Dataset;
use flashdeck_loader::LoadError;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Default)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    Fetching { since: Instant },
    /// Fetch succeeded; the dataset is handed over after a short delay.
    Loaded {
        count: usize,
        at: Instant,
        dataset: Option<Dataset>,
    },
    Failed { transport: bool, message: String },
}

impl LoadStatus {
    /// Status after a fetch finished at `now`.
    pub fn finished(result: Result<Dataset, LoadError>, now: Instant) -> Self {
        match result {
            Ok(dataset) => LoadStatus::Loaded {
                count: dataset.len(),
                at: now,
                dataset: Some(dataset),
            },
            Err(err) => LoadStatus::Failed {
                transport: err.is_transport(),
                message: describe_load_error(&err),
            },
        }
    }

    /// Hand over the loaded dataset once it has been announced for `delay`.
    ///
    /// Returns it at most once.
    pub fn take_settled(&mut self, now: Instant, delay: Duration) -> Option<Dataset> {
        match self {
            LoadStatus::Loaded { at, dataset, .. } if now.saturating_duration_since(*at) >= delay => {
                dataset.take()
            }
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoadingState {
    /// URL of the current or last fetch.
    pub url: Option<String>,
    pub status: LoadStatus,
    /// Running fetch, if any.
    pub task: Option<JoinHandle<Result<Dataset, LoadError>>>,
}

impl App {
    pub fn draw_loading(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.state.theme;
        let url = self.state.loading.url.clone().unwrap_or_default();

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                "━━━ flashdeck ━━━",
                Style::default()
                    .fg(theme.secondary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        match &self.state.loading.status {
            LoadStatus::Idle => {
                lines.push(Line::from(Span::styled(
                    "No dataset requested.",
                    Style::default().fg(theme.dimmed),
                )));
            }
            LoadStatus::Fetching { since } => {
                let frame_idx = (since.elapsed().as_millis() / 80) as usize % SPINNER.len();
                lines.push(Line::from(vec![
                    Span::styled(SPINNER[frame_idx], Style::default().fg(theme.primary)),
                    Span::styled(" Loading questions...", Style::default().fg(theme.text)),
                ]));
                lines.push(Line::from(Span::styled(url, Style::default().fg(theme.dimmed))));
            }
            LoadStatus::Loaded { count, .. } => {
                lines.push(Line::from(Span::styled(
                    format!("✓ Loaded {} questions", count),
                    Style::default().fg(theme.success),
                )));
            }
            LoadStatus::Failed { transport, message } => {
                let title = if *transport {
                    "✗ Could not reach the dataset"
                } else {
                    "✗ The dataset is not valid"
                };
                lines.push(Line::from(Span::styled(
                    title,
                    Style::default()
                        .fg(theme.error)
                        .add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(theme.text),
                )));
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::styled("r", Style::default().fg(theme.primary)),
                    Span::styled(" retry · ", Style::default().fg(theme.dimmed)),
                    Span::styled("o", Style::default().fg(theme.primary)),
                    Span::styled(" open file · ", Style::default().fg(theme.dimmed)),
                    Span::styled("q", Style::default().fg(theme.primary)),
                    Span::styled(" quit", Style::default().fg(theme.dimmed)),
                ]));
            }
        }

        let [centered_area] = Layout::horizontal([Constraint::Max(72)])
            .flex(Flex::Center)
            .areas(area);
        let [centered_area] = Layout::vertical([Constraint::Length(lines.len() as u16 + 2)])
            .flex(Flex::Center)
            .areas(centered_area);

        frame.render_widget(
            Paragraph::new(lines)
                .centered()
                .wrap(Wrap { trim: true }),
            centered_area,
        );
    }

    pub fn handle_loading_input(&mut self, key: KeyEvent) {
        let failed = matches!(self.state.loading.status, LoadStatus::Failed { .. });
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('r') if failed => {
                if let Some(url) = self.state.loading.url.clone() {
                    self.begin_fetch(url);
                }
            }
            KeyCode::Char('o') if failed => {
                self.view = AppView::OpenFile;
            }
            _ => {}
        }
    }
}
