//! Score keeping and the one-way boost unlock.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoostState {
    #[default]
    Normal,
    Boosted,
}

impl BoostState {
    pub fn is_boosted(&self) -> bool {
        *self == BoostState::Boosted
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            BoostState::Normal => "OFF",
            BoostState::Boosted => "ON",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoreBoard {
    score: u32,
    boost: BoostState,
    points_per_alien: u32,
    boost_threshold: u32,
}

impl ScoreBoard {
    pub fn new(points_per_alien: u32, boost_threshold: u32) -> Self {
        Self {
            score: 0,
            boost: BoostState::Normal,
            points_per_alien,
            boost_threshold,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn boost(&self) -> BoostState {
        self.boost
    }

    pub fn boost_threshold(&self) -> u32 {
        self.boost_threshold
    }

    /// Credits `kills` destroyed aliens, then checks the boost threshold.
    /// Returns true only on the tick the boost unlocks.
    pub fn record_kills(&mut self, kills: u32) -> bool {
        self.score = self
            .score
            .saturating_add(kills.saturating_mul(self.points_per_alien));

        if self.boost == BoostState::Normal && self.score >= self.boost_threshold {
            self.boost = BoostState::Boosted;
            return true;
        }
        false
    }
}
