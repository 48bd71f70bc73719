//! Half-block image rendering: every terminal cell shows two vertically
//! stacked pixels, the upper one as foreground of `▀` and the lower one as
//! background.

use image::{DynamicImage, Rgba, imageops::FilterType};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Cell size of a `width` x `height` pixel image scaled to fit
/// `max_cols` x `max_rows` cells while keeping its aspect ratio.
pub fn fit(width: u32, height: u32, max_cols: u16, max_rows: u16) -> (u16, u16) {
    if width == 0 || height == 0 || max_cols == 0 || max_rows == 0 {
        return (0, 0);
    }
    let scale = (max_cols as f64 / width as f64).min(max_rows as f64 * 2.0 / height as f64);
    let cols = ((width as f64 * scale).floor() as u16).clamp(1, max_cols);
    let rows = ((height as f64 * scale / 2.0).ceil() as u16).clamp(1, max_rows);
    (cols, rows)
}

/// Render `image` into `rows` lines of `cols` half-block cells.
///
/// Transparent pixels are blended onto `background`.
pub fn to_lines(image: &DynamicImage, cols: u16, rows: u16, background: Color) -> Vec<Line<'static>> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }
    let resized = image
        .resize_exact(cols as u32, rows as u32 * 2, FilterType::Triangle)
        .to_rgba8();
    let bg = rgb_of(background);

    (0..rows as u32)
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..cols as u32)
                .map(|x| {
                    let top = blend(resized.get_pixel(x, y * 2), bg);
                    let bottom = blend(resized.get_pixel(x, y * 2 + 1), bg);
                    Span::styled("▀", Style::default().fg(top).bg(bottom))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn rgb_of(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::White => (255, 255, 255),
        _ => (0, 0, 0),
    }
}

fn blend(pixel: &Rgba<u8>, bg: (u8, u8, u8)) -> Color {
    let alpha = pixel[3] as u16;
    let mix = |fg: u8, bg: u8| ((fg as u16 * alpha + bg as u16 * (255 - alpha)) / 255) as u8;
    Color::Rgb(mix(pixel[0], bg.0), mix(pixel[1], bg.1), mix(pixel[2], bg.2))
}
