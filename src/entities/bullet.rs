use super::{Entity, SpriteKind};
use crate::collision::Hitbox;
use crate::config::{BULLET_DRIFT_INTERVAL, BULLET_HEIGHT, BULLET_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
}

#[derive(Debug, Clone)]
pub struct Bullet {
    pub x: u16,
    pub y: u16,
    /// Columns shifted every [`BULLET_DRIFT_INTERVAL`] ticks (-1, 0, 1)
    pub velocity_x: i16,
    /// Rows moved per tick, negative is up
    pub velocity_y: i16,
    pub active: bool,
    pub owner: BulletOwner,
    age: u16,
}

impl Bullet {
    /// Straight player shot travelling up one row per tick
    pub fn player(x: u16, y: u16) -> Self {
        Self::diagonal(x, y, 0)
    }

    pub fn diagonal(x: u16, y: u16, velocity_x: i16) -> Self {
        Self {
            x,
            y,
            velocity_x,
            velocity_y: -1,
            active: true,
            owner: BulletOwner::Player,
            age: 0,
        }
    }

    /// Advances the bullet and deactivates it once it leaves the field
    pub fn update(&mut self, field_width: u16, field_height: u16) {
        if !self.active {
            return;
        }
        self.age = self.age.wrapping_add(1);

        let new_y = self.y as i32 + self.velocity_y as i32;
        if new_y < 0 || new_y >= field_height as i32 {
            self.active = false;
            return;
        }
        self.y = new_y as u16;

        if self.velocity_x != 0 && self.age.is_multiple_of(BULLET_DRIFT_INTERVAL) {
            let new_x = self.x as i32 + self.velocity_x as i32;
            if new_x < 0 || new_x + BULLET_WIDTH as i32 > field_width as i32 {
                self.active = false;
                return;
            }
            self.x = new_x as u16;
        }
    }
}

impl Entity for Bullet {
    fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, BULLET_WIDTH, BULLET_HEIGHT)
    }

    fn sprite_kind(&self) -> SpriteKind {
        SpriteKind::Bullet
    }

    fn is_visible(&self) -> bool {
        self.active
    }
}
