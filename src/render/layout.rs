//! Placement machinery: the occupancy grid that tracks claimed pixels and
//! the spiral walk used to search for a free spot.

use super::glyphs::WordSprite;
use image::RgbImage;

/// Channel sum at or above this counts as white, which the mask contract
/// defines as excluded area.
const WHITE_THRESHOLD: u16 = 750;

/// Per-pixel occupancy of the canvas. Cells are claimed by the mask's
/// excluded region up front and by every word as it is placed.
pub struct Occupancy {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Occupancy {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Claim every near-white mask pixel. The mask arrives pre-flattened,
    /// so transparency has already been turned into white by the preparer.
    pub fn block_mask(&mut self, mask: &RgbImage) {
        for (x, y, pixel) in mask.enumerate_pixels() {
            if x >= self.width || y >= self.height {
                continue;
            }
            let [r, g, b] = pixel.0;
            if r as u16 + g as u16 + b as u16 >= WHITE_THRESHOLD {
                self.cells[(y * self.width + x) as usize] = true;
            }
        }
    }

    /// Out-of-bounds cells count as occupied so words stay on the canvas.
    fn occupied(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return true;
        }
        self.cells[(y as u32 * self.width + x as u32) as usize]
    }

    /// Whether every inked cell of the sprite is free with its top-left
    /// corner at (`left`, `top`).
    pub fn fits(&self, sprite: &WordSprite, left: i64, top: i64) -> bool {
        sprite
            .inked()
            .all(|(x, y)| !self.occupied(left + x as i64, top + y as i64))
    }

    /// Claim the sprite's inked cells, grown by `padding` in every direction
    /// so later words keep their distance.
    pub fn claim(&mut self, sprite: &WordSprite, left: i64, top: i64, padding: u32) {
        let pad = padding as i64;
        for (x, y) in sprite.inked() {
            for dy in -pad..=pad {
                for dx in -pad..=pad {
                    let cx = left + x as i64 + dx;
                    let cy = top + y as i64 + dy;
                    if cx >= 0 && cy >= 0 && cx < self.width as i64 && cy < self.height as i64 {
                        self.cells[(cy as u32 * self.width + cx as u32) as usize] = true;
                    }
                }
            }
        }
    }
}

/// Archimedean spiral walk outward from the origin, stretched to the canvas
/// aspect ratio so wide canvases fill sideways first.
pub struct Spiral {
    theta: f32,
    direction: f32,
    aspect: f32,
}

/// Angle advance per probe, in radians.
const THETA_STEP: f32 = 0.3;
/// Radius growth per radian, in pixels.
const RADIUS_GROWTH: f32 = 1.4;

impl Spiral {
    pub fn new(width: u32, height: u32, clockwise: bool) -> Self {
        Self {
            theta: 0.0,
            direction: if clockwise { 1.0 } else { -1.0 },
            aspect: width as f32 / height.max(1) as f32,
        }
    }
}

impl Iterator for Spiral {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        self.theta += THETA_STEP;
        let radius = RADIUS_GROWTH * self.theta;
        let angle = self.theta * self.direction;
        let x = radius * angle.cos() * self.aspect;
        let y = radius * angle.sin();
        Some((x.round() as i64, y.round() as i64))
    }
}
