//! Sprite images, rasterised into terminal cells at load time.
//!
//! Each cell covers two vertical pixels so sprites can be drawn with
//! half-block glyphs: the upper pixel is the foreground of `▀`, the lower
//! one its background.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use ratatui::style::Color;

use crate::config::{
    ALIEN_HEIGHT, ALIEN_WIDTH, AssetPaths, BULLET_HEIGHT, BULLET_WIDTH, SHIP_HEIGHT, SHIP_WIDTH,
};
use crate::entities::SpriteKind;
use crate::error::AssetError;

/// Pixels at or below this alpha are treated as transparent
const ALPHA_CUTOFF: u8 = 127;

/// One terminal cell of a sprite: upper and lower pixel, `None` if transparent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteCell {
    pub top: Option<Color>,
    pub bottom: Option<Color>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub width: u16,
    pub height: u16,
    /// Row-major, `width * height` cells
    cells: Vec<SpriteCell>,
}

impl Sprite {
    /// Scales `image` to `width` x `height` cells with nearest-neighbour sampling
    pub fn from_image(image: &RgbaImage, width: u16, height: u16) -> Self {
        let scaled = imageops::resize(image, width as u32, height as u32 * 2, FilterType::Nearest);
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for row in 0..height as u32 {
            for col in 0..width as u32 {
                cells.push(SpriteCell {
                    top: pixel_color(scaled.get_pixel(col, row * 2)),
                    bottom: pixel_color(scaled.get_pixel(col, row * 2 + 1)),
                });
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&SpriteCell> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(row as usize * self.width as usize + col as usize)
    }

    /// Loads and rasterises an image file. With `color_key` set, every pixel
    /// matching the top-left one becomes transparent.
    pub fn load(path: &Path, width: u16, height: u16, color_key: bool) -> Result<Self, AssetError> {
        log::debug!("Loading image {}", path.display());
        if !path.is_file() {
            return Err(AssetError::NotFound(path.to_path_buf()));
        }

        let mut image = image::open(path)
            .map_err(|source| AssetError::Load {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        if color_key {
            apply_color_key(&mut image);
        }

        Ok(Self::from_image(&image, width, height))
    }
}

fn pixel_color(pixel: &Rgba<u8>) -> Option<Color> {
    let [r, g, b, a] = pixel.0;
    (a > ALPHA_CUTOFF).then_some(Color::Rgb(r, g, b))
}

fn apply_color_key(image: &mut RgbaImage) {
    if image.width() == 0 || image.height() == 0 {
        return;
    }
    let key = *image.get_pixel(0, 0);
    for pixel in image.pixels_mut() {
        if *pixel == key {
            pixel.0[3] = 0;
        }
    }
}

/// Every sprite the renderer needs
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSet {
    pub ship: Sprite,
    pub alien: Sprite,
    pub bullet: Sprite,
}

impl SpriteSet {
    pub fn load(paths: &AssetPaths) -> Result<Self, AssetError> {
        Ok(Self {
            ship: Sprite::load(&paths.ship, SHIP_WIDTH, SHIP_HEIGHT, true)?,
            alien: Sprite::load(&paths.alien, ALIEN_WIDTH, ALIEN_HEIGHT, true)?,
            bullet: Sprite::load(&paths.bullet, BULLET_WIDTH, BULLET_HEIGHT, false)?,
        })
    }

    /// Solid single-colour sprites, used when drawing without image files
    pub fn solid() -> Self {
        let block = |width: u16, height: u16, color: [u8; 3]| {
            let [r, g, b] = color;
            let image = RgbaImage::from_pixel(width as u32, height as u32 * 2, Rgba([r, g, b, 255]));
            Sprite::from_image(&image, width, height)
        };
        Self {
            ship: block(SHIP_WIDTH, SHIP_HEIGHT, [0, 255, 0]),
            alien: block(ALIEN_WIDTH, ALIEN_HEIGHT, [255, 80, 255]),
            bullet: block(BULLET_WIDTH, BULLET_HEIGHT, [255, 255, 0]),
        }
    }

    pub fn get(&self, kind: SpriteKind) -> &Sprite {
        match kind {
            SpriteKind::Ship => &self.ship,
            SpriteKind::Alien => &self.alien,
            SpriteKind::Bullet => &self.bullet,
        }
    }
}
