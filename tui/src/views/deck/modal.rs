//! Full-size image overlay.

use super::pixels;
use crate::theme::Theme;
use flashdeck_core::{ModalImage, decode_data_uri};
use image::{DynamicImage, GenericImageView};
use log::warn;
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Decoded image for the open overlay, plus its last rendering.
#[derive(Debug)]
pub struct ModalCache {
    source: String,
    format: String,
    image: Result<DynamicImage, String>,
    rendered: Option<((u16, u16), Vec<Line<'static>>)>,
}

impl ModalCache {
    fn decode(source: &str) -> Self {
        let (format, image) = match decode_data_uri(source) {
            Ok(decoded) => (
                decoded.format,
                image::load_from_memory(&decoded.bytes).map_err(|e| e.to_string()),
            ),
            Err(err) => (String::from("?"), Err(err.to_string())),
        };
        if let Err(err) = &image {
            warn!("[Modal] Cannot decode image: {}", err);
        }
        Self {
            source: source.to_string(),
            format,
            image,
            rendered: None,
        }
    }
}

/// Draw the overlay for `modal`. Returns the area covered by the image
/// itself; clicks anywhere else close the overlay.
pub fn draw_modal(
    frame: &mut Frame,
    theme: &Theme,
    modal: &ModalImage,
    cache: &mut Option<ModalCache>,
) -> Option<Rect> {
    let area = frame.area();

    // dim the whole screen behind the popup
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.overlay_bg)),
        area,
    );

    let popup = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.secondary))
        .style(Style::default().bg(theme.overlay_bg))
        .title(Span::styled(
            format!(" {} ", modal.label),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(vec![
            Span::styled(" ESC", Style::default().fg(theme.primary)),
            Span::styled("/", Style::default().fg(theme.dimmed)),
            Span::styled("x", Style::default().fg(theme.primary)),
            Span::styled(" close · click outside the image to close ", Style::default().fg(theme.dimmed)),
        ]));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if cache.as_ref().is_none_or(|c| c.source != modal.source) {
        *cache = Some(ModalCache::decode(&modal.source));
    }
    let cache = cache.as_mut()?;

    let [image_area, info_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let image = match &cache.image {
        Ok(image) => image,
        Err(err) => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!("Cannot display this image: {}", err),
                    Style::default().fg(theme.error),
                )))
                .centered()
                .wrap(Wrap { trim: true }),
                image_area,
            );
            return None;
        }
    };

    let (width, height) = image.dimensions();
    let size = pixels::fit(width, height, image_area.width, image_area.height);
    if cache.rendered.as_ref().is_none_or(|(cached, _)| *cached != size) {
        let lines = pixels::to_lines(image, size.0, size.1, theme.overlay_bg);
        cache.rendered = Some((size, lines));
    }

    let [target] = Layout::horizontal([Constraint::Length(size.0)])
        .flex(Flex::Center)
        .areas(image_area);
    let [target] = Layout::vertical([Constraint::Length(size.1)])
        .flex(Flex::Center)
        .areas(target);

    if let Some((_, lines)) = &cache.rendered {
        frame.render_widget(Paragraph::new(lines.clone()), target);
    }
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{} · {}×{} px", cache.format, width, height),
            Style::default().fg(theme.dimmed),
        )))
        .centered(),
        info_area,
    );

    Some(target)
}
