use crate::render::Surface;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WALL: Color = Color::rgb(128, 0, 0);
    pub const PLAYER: Color = Color::rgb(0, 0, 139);
    pub const BACKGROUND: Color = Color::rgb(245, 245, 220);
    pub const TEXT: Color = Color::rgb(0, 0, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    /// Opaque color with every channel in 1..=255.
    pub fn random(rng: &mut impl Rng) -> Color {
        Color::rgb(
            rng.random_range(1..=255),
            rng.random_range(1..=255),
            rng.random_range(1..=255),
        )
    }

    pub fn as_f32(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Playfield bounds. The top-left corner is always (0, 0).
#[derive(Serialize, Deserialize, PartialEq, Clone, Copy, Debug)]
pub struct Field {
    pub w: f32,
    pub h: f32,
}

impl Field {
    /// Whether the whole box lies inside the closed playfield.
    pub fn contains(&self, bb: &BoundingBox) -> bool {
        bb.x0 >= 0.0 && bb.y0 >= 0.0 && bb.x1 <= self.w && bb.y1 <= self.h
    }
}

/// Axis-aligned box stored by its corners.
///
/// `vx`/`vy` are the per-step displacement of a moving box; static boxes keep
/// them at zero. `color` only matters when painting.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct BoundingBox {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Color,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, w: f32, h: f32, color: Color) -> Self {
        BoundingBox {
            x0: x,
            y0: y,
            x1: x + w,
            y1: y + h,
            vx: 0.0,
            vy: 0.0,
            color,
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Top-left, bottom-left, top-right, bottom-right.
    pub fn corners(&self) -> [(f32, f32); 4] {
        [
            (self.x0, self.y0),
            (self.x0, self.y1),
            (self.x1, self.y0),
            (self.x1, self.y1),
        ]
    }

    /// Closed on all four edges.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    pub fn shift(&mut self, dx: f32, dy: f32) {
        self.x0 += dx;
        self.x1 += dx;
        self.y0 += dy;
        self.y1 += dy;
    }

    pub fn translate(&self, dx: f32, dy: f32) -> BoundingBox {
        let mut moved = self.duplicate();
        moved.shift(dx, dy);
        moved
    }

    pub fn duplicate(&self) -> BoundingBox {
        *self
    }

    pub fn describe(&self) -> String {
        format!(
            "coord = ({},{}) vel = ({},{})",
            self.x0, self.y0, self.vx, self.vy
        )
    }

    pub fn paint(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.x0, self.y0, self.width(), self.height(), self.color);
    }
}
