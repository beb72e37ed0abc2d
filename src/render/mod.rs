//! Frequency-weighted word cloud renderer.
//!
//! The driver hands this module an immutable set of options plus the
//! frequency mapping and gets back a pixel grid. Everything about glyph
//! rasterization and placement stays behind this boundary.

mod color;
mod glyphs;
mod layout;

pub mod fonts;

pub use color::parse_color;

use crate::error::CloudError;
use fontdue::{Font, FontSettings};
use image::{RgbImage, Rgba, RgbaImage};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

use layout::{Occupancy, Spiral};

/// Word colors used when the caller does not supply a palette.
const DEFAULT_PALETTE: [[u8; 3]; 5] = [
    [38, 70, 83],
    [42, 157, 143],
    [138, 177, 125],
    [233, 196, 106],
    [244, 162, 97],
];

/// Spiral probes attempted per word before giving up on it.
const MAX_PROBES: usize = 8000;

/// Immutable rendering options, built once by the driver and never mutated
/// after construction.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    width: u32,
    height: u32,
    background: Option<Rgba<u8>>,
    font_data: Vec<u8>,
    mask: Option<RgbImage>,
    palette: Vec<Rgba<u8>>,
    min_font_size: f32,
    max_font_size: f32,
    padding: u32,
    seed: Option<u64>,
}

impl RenderOptions {
    /// Start from the target canvas size and the font to render with.
    /// The background defaults to opaque white.
    pub fn new(width: u32, height: u32, font_data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba([255, 255, 255, 255])),
            font_data,
            mask: None,
            palette: DEFAULT_PALETTE
                .iter()
                .map(|&[r, g, b]| Rgba([r, g, b, 255]))
                .collect(),
            min_font_size: 14.0,
            max_font_size: 110.0,
            padding: 1,
            seed: None,
        }
    }

    /// Paint uncovered pixels with this color.
    pub fn background(mut self, color: Rgba<u8>) -> Self {
        self.background = Some(color);
        self
    }

    /// Leave uncovered pixels fully transparent.
    pub fn transparent(mut self) -> Self {
        self.background = None;
        self
    }

    /// Shape the cloud with a prepared mask. White pixels are excluded
    /// area; anything else is fillable.
    pub fn mask(mut self, mask: RgbImage) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Word colors, cycled through at random. Empty input keeps the default.
    pub fn palette(mut self, colors: Vec<Rgba<u8>>) -> Self {
        if !colors.is_empty() {
            self.palette = colors;
        }
        self
    }

    /// Font sizes assigned across the weight range, in pixels.
    pub fn font_size_range(mut self, min: f32, max: f32) -> Self {
        self.min_font_size = min.max(4.0);
        self.max_font_size = max.max(self.min_font_size);
        self
    }

    /// Minimum clearance between placed words, in pixels.
    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Fix the random seed for reproducible layouts.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Lay out the frequency mapping onto a canvas of exactly the configured
/// dimensions.
///
/// Words are placed heaviest first, sized by linear interpolation over the
/// configured range. A word that finds no free spot is skipped; an empty
/// mapping or a layout where nothing fits at all is an error.
pub fn generate(
    options: &RenderOptions,
    frequencies: &HashMap<String, usize>,
) -> Result<RgbaImage, CloudError> {
    if frequencies.is_empty() {
        return Err(CloudError::EmptyInput);
    }

    let font = Font::from_bytes(options.font_data.as_slice(), FontSettings::default())
        .map_err(|e| CloudError::Render(format!("Font could not be parsed: {e}")))?;

    let mut grid = Occupancy::new(options.width, options.height);
    if let Some(mask) = &options.mask {
        grid.block_mask(mask);
    }

    let mut rng = match options.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    // Heaviest words first; ties broken lexically so sorting is stable
    // across runs regardless of hash order.
    let mut words: Vec<(&str, usize)> = frequencies
        .iter()
        .map(|(word, &count)| (word.as_str(), count))
        .collect();
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let max_count = words.first().map(|w| w.1).unwrap_or(1) as f32;
    let min_count = words.last().map(|w| w.1).unwrap_or(1) as f32;
    let count_range = max_count - min_count;

    let background = options.background.unwrap_or(Rgba([0, 0, 0, 0]));
    let mut canvas = RgbaImage::from_pixel(options.width, options.height, background);

    let mut placed = 0usize;
    for (text, count) in &words {
        let weight = if count_range > 0.0 {
            (*count as f32 - min_count) / count_range
        } else {
            1.0
        };
        let mut size =
            options.min_font_size + weight * (options.max_font_size - options.min_font_size);

        // Shrink and retry before giving up, so a heavy word that would
        // overflow the canvas at its ideal size still lands somewhere.
        loop {
            let sprite = glyphs::rasterize_word(text, size, &font);
            if sprite.is_blank() {
                break;
            }

            if let Some((left, top)) = find_spot(&grid, &sprite, &mut rng) {
                grid.claim(&sprite, left, top, options.padding);
                let color = options.palette[rng.random_range(0..options.palette.len())];
                sprite.blit(&mut canvas, left, top, color);
                placed += 1;
                break;
            }

            if size <= options.min_font_size {
                tracing::debug!("No room for {:?} even at {:.0}px, skipping", text, size);
                break;
            }
            size = (size * 0.75).max(options.min_font_size);
        }
    }

    if placed == 0 {
        return Err(CloudError::Render(
            "No word could be placed on the canvas".to_string(),
        ));
    }

    tracing::info!("Placed {} of {} words", placed, words.len());
    Ok(canvas)
}

/// Walk a spiral out from the canvas center until the sprite fits.
fn find_spot(
    grid: &Occupancy,
    sprite: &glyphs::WordSprite,
    rng: &mut ChaCha8Rng,
) -> Option<(i64, i64)> {
    let center_x = grid.width() as i64 / 2 - sprite.width as i64 / 2;
    let center_y = grid.height() as i64 / 2 - sprite.height as i64 / 2;
    let clockwise = rng.random_bool(0.5);

    if grid.fits(sprite, center_x, center_y) {
        return Some((center_x, center_y));
    }

    for (dx, dy) in Spiral::new(grid.width(), grid.height(), clockwise).take(MAX_PROBES) {
        let left = center_x + dx;
        let top = center_y + dy;
        if grid.fits(sprite, left, top) {
            return Some((left, top));
        }
    }

    None
}
