//! Terminal rendering of the paintings.
//!
//! Images are decoded once and drawn with upper half blocks: every cell shows
//! two vertically stacked pixels (foreground = top, background = bottom).

use std::path::Path;

use image::{RgbImage, imageops::FilterType};
use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
};

use crate::error::PictureError;

/// Largest edge kept after decoding; rendering never needs more.
const MAX_EDGE: u32 = 256;

#[derive(Debug, Clone)]
pub struct Picture {
    pixels: RgbImage,
}

impl Picture {
    pub fn load(path: &Path) -> Result<Self, PictureError> {
        let bytes = std::fs::read(path).map_err(|source| PictureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let decoded = image::load_from_memory(&bytes).map_err(|e| PictureError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_rgb(decoded.thumbnail(MAX_EDGE, MAX_EDGE).to_rgb8()))
    }

    pub fn from_rgb(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    /// Pixel size of the target (width, height) that fits inside `cols` x `rows`
    /// cells while keeping the aspect ratio.
    pub fn fit(&self, cols: u16, rows: u16) -> (u32, u32) {
        let (w, h) = self.pixels.dimensions();
        if w == 0 || h == 0 || cols == 0 || rows == 0 {
            return (0, 0);
        }
        let max_w = cols as f64;
        let max_h = rows as f64 * 2.0;
        let scale = (max_w / w as f64).min(max_h / h as f64);
        let fw = ((w as f64 * scale).floor() as u32).max(1);
        let fh = ((h as f64 * scale).floor() as u32).max(1);
        (fw, fh)
    }

    /// Exactly `rows` lines, each `cols` cells wide, with the picture centered.
    pub fn lines(&self, cols: u16, rows: u16) -> Vec<Line<'static>> {
        let (fw, fh) = self.fit(cols, rows);
        if fw == 0 || fh == 0 {
            return vec![Line::default(); rows as usize];
        }
        let scaled = image::imageops::resize(&self.pixels, fw, fh, FilterType::Triangle);

        let cell_rows = fh.div_ceil(2) as u16;
        let pad_top = (rows - cell_rows.min(rows)) / 2;
        let pad_left = " ".repeat(((cols as u32 - fw) / 2) as usize);

        let mut lines: Vec<Line<'static>> = Vec::with_capacity(rows as usize);
        lines.extend((0..pad_top).map(|_| Line::default()));

        for row in 0..cell_rows {
            let mut spans: Vec<Span<'static>> = Vec::with_capacity(fw as usize + 1);
            spans.push(Span::raw(pad_left.clone()));
            let top_y = row as u32 * 2;
            for x in 0..fw {
                let top = scaled.get_pixel(x, top_y);
                let mut style = Style::default().fg(Color::Rgb(top[0], top[1], top[2]));
                if top_y + 1 < fh {
                    let bottom = scaled.get_pixel(x, top_y + 1);
                    style = style.bg(Color::Rgb(bottom[0], bottom[1], bottom[2]));
                }
                spans.push(Span::styled("▀", style));
            }
            lines.push(Line::from(spans));
        }

        lines.resize(rows as usize, Line::default());
        lines
    }
}

/// Stand-in for a picture that could not be loaded: `rows` lines with the
/// asset name in the middle.
pub fn placeholder_lines(label: &str, rows: u16) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(); rows as usize];
    if let Some(mid) = lines.get_mut(rows as usize / 2) {
        *mid = Line::from(format!("[ {label} ]").dim().italic()).centered();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(w: u32, h: u32) -> Picture {
        Picture::from_rgb(RgbImage::from_pixel(w, h, Rgb([200, 10, 10])))
    }

    #[test]
    fn fit_keeps_aspect_ratio_with_two_pixels_per_row() {
        // Portrait 100x200 into 40 cols x 10 rows (40x20 pixels) -> 10x20.
        assert_eq!(solid(100, 200).fit(40, 10), (10, 20));
        // Landscape 200x100 into 40 cols x 40 rows -> width bound.
        assert_eq!(solid(200, 100).fit(40, 40), (40, 20));
    }

    #[test]
    fn lines_always_fill_the_requested_rows() {
        let lines = solid(10, 10).lines(30, 8);
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().any(|l| l.to_string().contains('▀')));
    }

    #[test]
    fn empty_area_renders_blank_lines() {
        assert_eq!(solid(10, 10).lines(0, 3).len(), 3);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Picture::load(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, PictureError::Io { .. }));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(matches!(
            Picture::load(&path).unwrap_err(),
            PictureError::Decode { .. }
        ));
    }

    #[test]
    fn placeholder_names_the_asset() {
        let lines = placeholder_lines("monalisa.png", 5);
        assert_eq!(lines.len(), 5);
        assert!(lines[2].to_string().contains("monalisa.png"));
    }
}
