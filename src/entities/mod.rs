mod alien;
mod bullet;
mod formation;
mod ship;

// Re-export all public types
pub use alien::Alien;
pub use bullet::{Bullet, BulletOwner};
pub use formation::Formation;
pub use ship::Ship;

use crate::collision::Hitbox;

/// Which sprite image an entity is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Ship,
    Alien,
    Bullet,
}

/// Shared capability of everything placed on the play field
pub trait Entity {
    fn hitbox(&self) -> Hitbox;

    /// Draw hook: the renderer looks the sprite up by kind
    fn sprite_kind(&self) -> SpriteKind;

    /// Dead aliens, spent bullets and a destroyed ship are not drawn
    fn is_visible(&self) -> bool;

    fn position(&self) -> (u16, u16) {
        let hitbox = self.hitbox();
        (hitbox.x, hitbox.y)
    }
}
