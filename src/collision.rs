//! Axis-aligned bounding boxes and the bullet/alien hit test.

use crate::entities::{Alien, Bullet, Entity};

/// Cell-aligned bounding box, `x`/`y` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Hitbox {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Index of the first alive alien the bullet overlaps, in slice order.
/// Aliens are stored row-major, so ties resolve to the top-left one.
pub fn first_hit(bullet: &Bullet, aliens: &[Alien]) -> Option<usize> {
    if !bullet.active {
        return None;
    }
    let hitbox = bullet.hitbox();
    aliens
        .iter()
        .position(|alien| alien.alive && alien.hitbox().overlaps(&hitbox))
}

/// Whether an alien at `x` moving by `dx` would leave `[0, field_width - width]`
pub fn crosses_edge(x: u16, width: u16, dx: i16, field_width: u16) -> bool {
    let next = x as i32 + dx as i32;
    next < 0 || next + width as i32 > field_width as i32
}
