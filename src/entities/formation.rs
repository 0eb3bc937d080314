use super::alien::Alien;
use crate::collision::crosses_edge;
use crate::config::{
    ALIEN_H_SPACING, ALIEN_HEIGHT, ALIEN_ORIGIN, ALIEN_V_SPACING, ALIEN_WIDTH, GameConfig,
};

/// The alien grid. Every alive alien shares one direction and speed.
#[derive(Debug, Clone)]
pub struct Formation {
    /// Row-major; collision tie-breaks rely on this order
    pub aliens: Vec<Alien>,
    /// Movement direction (-1 left, 1 right)
    pub direction_x: i16,
    pub speed: u16,
    pub drop: u16,
    /// Ticks between formation steps
    pub step_interval: u16,
    /// Frame counter for timing
    pub frame_counter: u16,
}

/// How many `size`-wide items spaced `spacing` apart fit between `origin` and `limit`
fn fitting(limit: u16, origin: u16, size: u16, spacing: u16) -> u16 {
    match limit.checked_sub(origin + size) {
        Some(room) => room / spacing.max(1) + 1,
        None => 0,
    }
}

impl Formation {
    pub fn new(aliens: Vec<Alien>, speed: u16, drop: u16, step_interval: u16) -> Self {
        Self {
            aliens,
            direction_x: 1, // Start moving right
            speed,
            drop,
            step_interval: step_interval.max(1),
            frame_counter: 0,
        }
    }

    /// Lays out up to `alien_rows` x `alien_columns` aliens from the top-left
    /// origin, dropping columns that would not fit the field width and rows
    /// that would start at or below the ship
    pub fn grid(config: &GameConfig) -> Self {
        let origin_x = ALIEN_ORIGIN.0.min(config.field_width.saturating_sub(ALIEN_WIDTH));
        let origin_y = ALIEN_ORIGIN.1;
        let columns = config
            .alien_columns
            .min(fitting(config.field_width, origin_x, ALIEN_WIDTH, ALIEN_H_SPACING));
        let rows = config
            .alien_rows
            .min(fitting(config.ship_row(), origin_y, ALIEN_HEIGHT, ALIEN_V_SPACING));
        if columns < config.alien_columns || rows < config.alien_rows {
            log::warn!(
                "Alien grid {}x{} does not fit the field, using {}x{}",
                config.alien_rows,
                config.alien_columns,
                rows,
                columns
            );
        }

        let mut aliens = Vec::with_capacity(rows as usize * columns as usize);
        for row in 0..rows {
            for column in 0..columns {
                aliens.push(Alien::new(
                    origin_x + column * ALIEN_H_SPACING,
                    origin_y + row * ALIEN_V_SPACING,
                    row,
                    column,
                ));
            }
        }
        Self::new(
            aliens,
            config.alien_speed,
            config.alien_drop,
            config.alien_step_interval,
        )
    }

    pub fn alive_count(&self) -> usize {
        self.aliens.iter().filter(|a| a.alive).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.aliens.iter().all(|a| !a.alive)
    }

    /// Lowest row touched by an alive alien, exclusive
    pub fn lowest_edge(&self) -> Option<u16> {
        self.aliens
            .iter()
            .filter(|a| a.alive)
            .map(|a| a.y + a.get_height())
            .max()
    }

    /// Advances the frame counter and, on step ticks, moves the formation.
    /// Returns true when the formation bounced this tick.
    pub fn update(&mut self, field_width: u16) -> bool {
        self.frame_counter = self.frame_counter.wrapping_add(1);
        if !self.frame_counter.is_multiple_of(self.step_interval) {
            return false;
        }
        self.step(field_width)
    }

    /// One formation step: either everyone moves sideways, or the
    /// direction flips and everyone descends.
    pub fn step(&mut self, field_width: u16) -> bool {
        let dx = self.direction_x * self.speed as i16;
        let hits_edge = self
            .aliens
            .iter()
            .filter(|a| a.alive)
            .any(|a| crosses_edge(a.x, ALIEN_WIDTH, dx, field_width));

        if hits_edge {
            // Hit edge, reverse direction and drop
            self.direction_x = -self.direction_x;
            for alien in self.aliens.iter_mut().filter(|a| a.alive) {
                alien.y = alien.y.saturating_add(self.drop);
            }
        } else {
            for alien in self.aliens.iter_mut().filter(|a| a.alive) {
                alien.x = (alien.x as i32 + dx as i32) as u16;
            }
        }
        hits_edge
    }
}
