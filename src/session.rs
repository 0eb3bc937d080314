//! All mutable state of one game, and the logic phase that advances it.

use crate::collision::first_hit;
use crate::config::GameConfig;
use crate::entities::{Bullet, Formation, Ship};
use crate::input::InputAction;
use crate::score::{BoostState, ScoreBoard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// Every alien destroyed
    Won,
    /// The formation reached the ship's row
    Lost,
}

/// What happened during one logic tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub bullets_fired: usize,
    pub kills: u32,
    pub bounced: bool,
    pub boost_unlocked: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub formation: Formation,
    pub score: ScoreBoard,
    pub outcome: Outcome,
    pub tick: u64,
}

impl Session {
    /// Fresh session with the standard alien grid
    pub fn new(config: GameConfig) -> Self {
        let formation = Formation::grid(&config);
        Self::with_formation(config, formation)
    }

    pub fn with_formation(config: GameConfig, formation: Formation) -> Self {
        let ship = Ship::centered(config.field_width, config.ship_row(), config.ship_speed);
        let score = ScoreBoard::new(config.points_per_alien, config.boost_threshold);
        Self {
            config,
            ship,
            bullets: Vec::new(),
            formation,
            score,
            outcome: Outcome::InProgress,
            tick: 0,
        }
    }

    pub fn boost(&self) -> BoostState {
        self.score.boost()
    }

    pub fn active_bullets(&self) -> usize {
        self.bullets.iter().filter(|b| b.active).count()
    }

    /// Applies this tick's actions, moves everything, resolves hits and
    /// updates score, boost and outcome. Does nothing once the round ended.
    pub fn handle_game_logic(&mut self, actions: &[InputAction]) -> TickReport {
        let mut report = TickReport::default();
        if self.outcome != Outcome::InProgress {
            return report;
        }
        self.tick += 1;
        self.ship.update_cooldown();

        let max_x = self.config.field_width.saturating_sub(self.ship.get_width());
        let mut fire = false;
        for action in actions {
            match action {
                InputAction::MoveLeft => self.ship.move_left(0),
                InputAction::MoveRight => self.ship.move_right(max_x),
                InputAction::Fire => fire = true,
                InputAction::Quit => {}
            }
        }
        if fire {
            report.bullets_fired = self.try_fire();
        }

        for bullet in &mut self.bullets {
            bullet.update(self.config.field_width, self.config.field_height);
        }
        report.bounced = self.formation.update(self.config.field_width);

        report.kills = self.check_collisions();
        self.bullets.retain(|b| b.active);

        report.boost_unlocked = self.score.record_kills(report.kills);
        if report.boost_unlocked {
            log::info!("Boost unlocked at score {}", self.score.score());
            // The unlock announces itself with an immediate volley
            report.bullets_fired += self.fire_volley();
        }

        self.check_outcome();
        report
    }

    /// Spawns bullets if the current firing rule allows it
    fn try_fire(&mut self) -> usize {
        if self.boost().is_boosted() {
            if !self.ship.can_fire() {
                return 0;
            }
            return self.fire_volley();
        }

        // One bullet in flight at a time until boosted
        if self.bullets.iter().any(|b| b.active) {
            return 0;
        }
        let bullet = self.ship.shot();
        log::debug!("Shooting bullet at ({}, {})", bullet.x, bullet.y);
        self.bullets.push(bullet);
        1
    }

    fn fire_volley(&mut self) -> usize {
        let volley = self.ship.spread_shot();
        let count = volley.len();
        log::debug!("Shooting {} bullets from ({}, {})", count, self.ship.x, self.ship.y);
        self.bullets.extend(volley);
        self.ship.reset_cooldown(self.config.boosted_fire_cooldown);
        count
    }

    /// Each active bullet destroys at most the first alien it overlaps
    fn check_collisions(&mut self) -> u32 {
        let mut kills = 0;
        for bullet in &mut self.bullets {
            if let Some(idx) = first_hit(bullet, &self.formation.aliens) {
                let alien = &mut self.formation.aliens[idx];
                alien.destroy();
                bullet.active = false;
                kills += 1;
                log::debug!("Hit! alien at row {} column {}", alien.row, alien.column);
            }
        }
        kills
    }

    fn check_outcome(&mut self) {
        if self.formation.is_cleared() {
            log::info!("You won! Final score {}", self.score.score());
            self.outcome = Outcome::Won;
        } else if self
            .formation
            .lowest_edge()
            .is_some_and(|edge| edge > self.ship.y)
        {
            log::info!("You lost! Final score {}", self.score.score());
            self.ship.alive = false;
            self.outcome = Outcome::Lost;
        }
    }
}
