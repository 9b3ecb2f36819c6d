//! Fog-of-war alpha raster
//!
//! A per-pixel alpha buffer covering the play-field, fully opaque at start
//! ("unexplored"). Each frame the disk revealed last frame is painted back to
//! opaque before a new transparent disk is punched at the player's committed
//! position, so at most one disk is ever open: a moving spotlight, not a
//! persistent fog-clear.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque raster the size of the play-field; alpha 1.0 hides, 0.0 reveals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisibilityMask {
    width: usize,
    height: usize,
    /// World-space field size the raster maps onto
    field: Vec2,
    alpha: Vec<f32>,
    /// Center of the currently open disk, re-darkened on the next reveal
    last_revealed: Option<Vec2>,
}

impl VisibilityMask {
    /// Fully opaque mask at one pixel per world unit
    pub fn new(field: Vec2) -> Self {
        let width = field.x.max(1.0) as usize;
        let height = field.y.max(1.0) as usize;
        Self {
            width,
            height,
            field,
            alpha: vec![1.0; width * height],
            last_revealed: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn alpha(&self) -> &[f32] {
        &self.alpha
    }

    /// World point to buffer pixel: origin moves to the top-left corner and
    /// world y (up) inverts into buffer rows (down).
    pub fn world_to_pixel(&self, world: Vec2) -> Vec2 {
        Vec2::new(
            (world.x + self.field.x / 2.0) / self.field.x * self.width as f32,
            (-world.y + self.field.y / 2.0) / self.field.y * self.height as f32,
        )
    }

    /// Alpha at a world point; out-of-field reads as opaque
    pub fn alpha_at(&self, world: Vec2) -> f32 {
        let p = self.world_to_pixel(world);
        let (x, y) = (p.x.floor() as i64, p.y.floor() as i64);
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return 1.0;
        }
        self.alpha[y as usize * self.width + x as usize]
    }

    /// Re-darken the previous disk, then punch a transparent disk of `radius`
    /// at `center`. Call once per frame from the committed player position.
    pub fn reveal(&mut self, center: Vec2, radius: f32) {
        if let Some(prev) = self.last_revealed {
            // One pixel wider so no bright rim survives the move.
            self.fill_disk(prev, radius + 1.0, 1.0);
        }
        self.fill_disk(center, radius, 0.0);
        self.last_revealed = Some(center);
    }

    fn fill_disk(&mut self, world_center: Vec2, radius: f32, value: f32) {
        let c = self.world_to_pixel(world_center);
        // The raster is one pixel per world unit in both axes.
        let r = radius * self.width as f32 / self.field.x;

        let x0 = ((c.x - r).floor().max(0.0)) as usize;
        let y0 = ((c.y - r).floor().max(0.0)) as usize;
        let x1 = ((c.x + r).ceil()).min(self.width as f32) as usize;
        let y1 = ((c.y + r).ceil()).min(self.height as f32) as usize;

        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - c.x;
                let dy = y as f32 + 0.5 - c.y;
                if dx * dx + dy * dy <= r * r {
                    self.alpha[y * self.width + x] = value;
                }
            }
        }
    }
}
