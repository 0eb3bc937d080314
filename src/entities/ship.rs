use super::bullet::Bullet;
use super::{Entity, SpriteKind};
use crate::collision::Hitbox;
use crate::config::{SHIP_HEIGHT, SHIP_WIDTH};

#[derive(Debug, Clone)]
pub struct Ship {
    pub x: u16,
    pub y: u16,
    pub speed: u16,
    pub alive: bool,
    pub fire_cooldown: u8,
}

impl Ship {
    pub fn new(x: u16, y: u16, speed: u16) -> Self {
        Self {
            x,
            y,
            speed,
            alive: true,
            fire_cooldown: 0,
        }
    }

    /// Centers the ship horizontally on `row`
    pub fn centered(field_width: u16, row: u16, speed: u16) -> Self {
        Self::new(field_width.saturating_sub(SHIP_WIDTH) / 2, row, speed)
    }

    pub fn move_left(&mut self, min_x: u16) {
        self.x = self.x.saturating_sub(self.speed).max(min_x);
    }

    pub fn move_right(&mut self, max_x: u16) {
        self.x = self.x.saturating_add(self.speed).min(max_x.max(self.x));
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown == 0
    }

    pub fn reset_cooldown(&mut self, ticks: u8) {
        self.fire_cooldown = ticks;
    }

    pub fn update_cooldown(&mut self) {
        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
        }
    }

    pub fn get_width(&self) -> u16 {
        SHIP_WIDTH
    }

    pub fn get_height(&self) -> u16 {
        SHIP_HEIGHT
    }

    /// Single straight shot from the nose
    pub fn shot(&self) -> Bullet {
        let (x, y) = self.muzzle();
        Bullet::player(x, y)
    }

    /// Boosted volley: straight shot plus one drifting left and one right
    pub fn spread_shot(&self) -> Vec<Bullet> {
        let (x, y) = self.muzzle();
        vec![
            Bullet::player(x, y),
            Bullet::diagonal(x.saturating_sub(1), y, -1),
            Bullet::diagonal(x + 1, y, 1),
        ]
    }

    fn muzzle(&self) -> (u16, u16) {
        (self.x + SHIP_WIDTH / 2, self.y.saturating_sub(1))
    }
}

impl Entity for Ship {
    fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, SHIP_WIDTH, SHIP_HEIGHT)
    }

    fn sprite_kind(&self) -> SpriteKind {
        SpriteKind::Ship
    }

    fn is_visible(&self) -> bool {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ship_new() {
        let ship = Ship::new(40, 20, 1);
        assert_eq!(ship.x, 40);
        assert_eq!(ship.y, 20);
        assert!(ship.alive);
        assert_eq!(ship.fire_cooldown, 0);
    }

    #[test]
    fn test_ship_centered() {
        let ship = Ship::centered(60, 27, 1);
        assert_eq!(ship.x, (60 - SHIP_WIDTH) / 2);
        assert_eq!(ship.y, 27);
    }

    #[test]
    fn test_ship_movement_left() {
        let mut ship = Ship::new(10, 10, 1);
        ship.move_left(0);
        assert_eq!(ship.x, 9);

        // Test boundary
        ship.x = 0;
        ship.move_left(0);
        assert_eq!(ship.x, 0);
    }

    #[test]
    fn test_ship_movement_right() {
        let mut ship = Ship::new(10, 10, 1);
        ship.move_right(53);
        assert_eq!(ship.x, 11);

        // Test boundary
        ship.x = 53;
        ship.move_right(53);
        assert_eq!(ship.x, 53);
    }

    #[test]
    fn test_fast_ship_clamps_instead_of_overshooting() {
        let mut ship = Ship::new(2, 10, 3);
        ship.move_left(0);
        assert_eq!(ship.x, 0);

        ship.x = 51;
        ship.move_right(53);
        assert_eq!(ship.x, 53);
    }

    #[test]
    fn test_ship_fire_cooldown() {
        let mut ship = Ship::new(10, 10, 1);
        assert!(ship.can_fire());

        ship.reset_cooldown(12);
        assert!(!ship.can_fire());

        for _ in 0..12 {
            ship.update_cooldown();
        }
        assert!(ship.can_fire());
    }

    #[test]
    fn test_shot_leaves_from_nose() {
        let ship = Ship::new(10, 27, 1);
        let bullet = ship.shot();
        assert_eq!(bullet.x, 10 + SHIP_WIDTH / 2);
        assert_eq!(bullet.y, 26);
        assert!(bullet.active);
    }

    #[test]
    fn test_spread_shot_fans_out() {
        let ship = Ship::new(10, 27, 1);
        let bullets = ship.spread_shot();
        assert_eq!(bullets.len(), 3);
        assert_eq!(bullets[0].velocity_x, 0);
        assert_eq!(bullets[1].velocity_x, -1);
        assert_eq!(bullets[2].velocity_x, 1);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_ship_stays_in_bounds_x(
                initial_x in 0u16..54,
                speed in 1u16..4,
                moves in prop::collection::vec(prop::bool::ANY, 0..100)
            ) {
                let mut ship = Ship::new(initial_x, 27, speed);
                for move_right in moves {
                    if move_right {
                        ship.move_right(53);
                    } else {
                        ship.move_left(0);
                    }
                }
                prop_assert!(ship.x <= 53);
            }
        }
    }
}
