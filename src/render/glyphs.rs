//! Word rasterization.
//!
//! Renders a whole word into a grayscale coverage bitmap once, so placement
//! can test collisions and the final blit can blend without touching the
//! font again.

use fontdue::{Font, LineMetrics};
use image::{Rgba, RgbaImage};

/// Coverage above this counts as ink for collision purposes. Keeps faint
/// antialiasing fringes from inflating the occupied area.
const INK_THRESHOLD: u8 = 16;

/// A word rendered to an alpha coverage bitmap.
pub struct WordSprite {
    pub width: u32,
    pub height: u32,
    coverage: Vec<u8>,
}

/// Rasterize `text` at `size` pixels into a tightly sized sprite.
pub fn rasterize_word(text: &str, size: f32, font: &Font) -> WordSprite {
    let metrics = font.horizontal_line_metrics(size).unwrap_or(LineMetrics {
        ascent: size * 0.8,
        descent: size * -0.2,
        line_gap: 0.0,
        new_line_size: size,
    });

    let mut glyphs = Vec::new();
    let mut pen = 0.0f32;
    for ch in text.chars() {
        let (glyph, bitmap) = font.rasterize(ch, size);
        glyphs.push((pen, glyph, bitmap));
        pen += glyph.advance_width;
    }

    let width = pen.ceil().max(1.0) as u32;
    let height = metrics.new_line_size.ceil().max(1.0) as u32;
    let mut coverage = vec![0u8; (width * height) as usize];
    let baseline = metrics.ascent;

    for (origin, glyph, bitmap) in &glyphs {
        let left = origin + glyph.xmin as f32;
        let top = baseline - glyph.height as f32 - glyph.ymin as f32;

        for row in 0..glyph.height {
            for col in 0..glyph.width {
                let value = bitmap[row * glyph.width + col];
                if value == 0 {
                    continue;
                }
                let x = (left + col as f32).round() as i64;
                let y = (top + row as f32).round() as i64;
                if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
                    continue;
                }
                let cell = &mut coverage[(y as u32 * width + x as u32) as usize];
                *cell = (*cell).max(value);
            }
        }
    }

    WordSprite {
        width,
        height,
        coverage,
    }
}

impl WordSprite {
    /// Cells carrying enough ink to matter for collisions.
    pub fn inked(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.coverage[(y * self.width + x) as usize] > INK_THRESHOLD)
    }

    /// Whether the sprite contains any ink at all. Whitespace-only lines
    /// rasterize to blank sprites that are pointless to place.
    pub fn is_blank(&self) -> bool {
        self.coverage.iter().all(|&c| c <= INK_THRESHOLD)
    }

    /// Alpha-blend the sprite onto the canvas at (`left`, `top`) in `color`.
    pub fn blit(&self, canvas: &mut RgbaImage, left: i64, top: i64, color: Rgba<u8>) {
        for y in 0..self.height {
            for x in 0..self.width {
                let cov = self.coverage[(y * self.width + x) as usize] as u16;
                if cov == 0 {
                    continue;
                }
                let cx = left + x as i64;
                let cy = top + y as i64;
                if cx < 0 || cy < 0 || cx >= canvas.width() as i64 || cy >= canvas.height() as i64 {
                    continue;
                }

                let dst = canvas.get_pixel_mut(cx as u32, cy as u32);
                let inv = 255 - cov;
                for channel in 0..3 {
                    let src = color.0[channel] as u16;
                    let old = dst.0[channel] as u16;
                    dst.0[channel] = ((src * cov + old * inv) / 255) as u8;
                }
                let old_alpha = dst.0[3] as u16;
                dst.0[3] = (cov + old_alpha * inv / 255) as u8;
            }
        }
    }
}
