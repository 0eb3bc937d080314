//! Game constants, fixed at process start.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Play field size in terminal cells
pub const FIELD_WIDTH: u16 = 60;
pub const FIELD_HEIGHT: u16 = 30;

pub const FRAME_RATE: u32 = 60;

pub const SHIP_WIDTH: u16 = 7;
pub const SHIP_HEIGHT: u16 = 2;
/// Cells moved per tick while a direction is held
pub const SHIP_SPEED: u16 = 1;

pub const ALIEN_WIDTH: u16 = 5;
pub const ALIEN_HEIGHT: u16 = 2;
pub const ALIEN_ROWS: u16 = 4;
pub const ALIEN_COLUMNS: u16 = 6;
pub const ALIEN_H_SPACING: u16 = 8;
pub const ALIEN_V_SPACING: u16 = 3;
pub const ALIEN_ORIGIN: (u16, u16) = (4, 2);
/// The formation moves once every this many ticks
pub const ALIEN_STEP_INTERVAL: u16 = 6;
pub const ALIEN_SPEED: u16 = 1;
/// Rows descended on every bounce
pub const ALIEN_DROP: u16 = 1;

pub const BULLET_WIDTH: u16 = 1;
pub const BULLET_HEIGHT: u16 = 1;
/// Diagonal boost bullets shift one column every this many ticks
pub const BULLET_DRIFT_INTERVAL: u16 = 4;

pub const POINTS_PER_ALIEN: u32 = 10;
pub const BOOST_THRESHOLD: u32 = 100;
pub const BOOSTED_FIRE_COOLDOWN: u8 = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub field_width: u16,
    pub field_height: u16,
    pub frame_rate: u32,
    pub ship_speed: u16,
    pub alien_rows: u16,
    pub alien_columns: u16,
    pub alien_step_interval: u16,
    pub alien_speed: u16,
    pub alien_drop: u16,
    pub points_per_alien: u32,
    pub boost_threshold: u32,
    pub boosted_fire_cooldown: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            frame_rate: FRAME_RATE,
            ship_speed: SHIP_SPEED,
            alien_rows: ALIEN_ROWS,
            alien_columns: ALIEN_COLUMNS,
            alien_step_interval: ALIEN_STEP_INTERVAL,
            alien_speed: ALIEN_SPEED,
            alien_drop: ALIEN_DROP,
            points_per_alien: POINTS_PER_ALIEN,
            boost_threshold: BOOST_THRESHOLD,
            boosted_fire_cooldown: BOOSTED_FIRE_COOLDOWN,
        }
    }
}

impl GameConfig {
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }

    /// Row the ship sits on, one row above the bottom edge
    pub fn ship_row(&self) -> u16 {
        self.field_height.saturating_sub(SHIP_HEIGHT + 1)
    }
}

/// Locations of the sprite images
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPaths {
    pub ship: PathBuf,
    pub alien: PathBuf,
    pub bullet: PathBuf,
}

impl AssetPaths {
    pub fn from_root(root: &Path) -> Self {
        Self {
            ship: root.join("ship.ppm"),
            alien: root.join("alien.ppm"),
            bullet: root.join("bullet.ppm"),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::from_root(&find_assets_root())
    }
}

/// Walks up from the working directory looking for an `assets` folder,
/// falling back to the one next to this crate's manifest.
pub fn find_assets_root() -> PathBuf {
    if let Ok(cwd) = std::env::current_dir() {
        for dir in cwd.ancestors() {
            let candidate = dir.join("assets");
            if candidate.is_dir() {
                return candidate;
            }
        }
    }
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}
