use super::{Entity, SpriteKind};
use crate::collision::Hitbox;
use crate::config::{ALIEN_HEIGHT, ALIEN_WIDTH};

#[derive(Debug, Clone)]
pub struct Alien {
    pub x: u16,
    pub y: u16,
    pub alive: bool,
    /// Grid slot in the formation
    pub row: u16,
    pub column: u16,
}

impl Alien {
    pub fn new(x: u16, y: u16, row: u16, column: u16) -> Self {
        Self {
            x,
            y,
            alive: true,
            row,
            column,
        }
    }

    pub fn destroy(&mut self) {
        self.alive = false;
    }

    pub fn get_width(&self) -> u16 {
        ALIEN_WIDTH
    }

    pub fn get_height(&self) -> u16 {
        ALIEN_HEIGHT
    }
}

impl Entity for Alien {
    fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, ALIEN_WIDTH, ALIEN_HEIGHT)
    }

    fn sprite_kind(&self) -> SpriteKind {
        SpriteKind::Alien
    }

    fn is_visible(&self) -> bool {
        self.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alien_new() {
        let alien = Alien::new(20, 10, 1, 2);
        assert_eq!(alien.position(), (20, 10));
        assert_eq!((alien.row, alien.column), (1, 2));
        assert!(alien.alive);
        assert!(alien.is_visible());
    }

    #[test]
    fn test_destroyed_alien_is_hidden() {
        let mut alien = Alien::new(20, 10, 0, 0);
        alien.destroy();
        assert!(!alien.alive);
        assert!(!alien.is_visible());
    }

    #[test]
    fn test_alien_hitbox_matches_size() {
        let alien = Alien::new(20, 10, 0, 0);
        let hitbox = alien.hitbox();
        assert_eq!(hitbox.width, alien.get_width());
        assert_eq!(hitbox.height, alien.get_height());
    }
}
