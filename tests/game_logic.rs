/// Integration tests for game logic
///
/// These tests drive whole sessions through the public API and check
/// collisions, scoring, boost and the frame loop working together.
use space_invaders::{
    Alien, BoostState, Bullet, Entity, Formation, FrameDriver, GameConfig, InputAction, LoopState,
    Outcome, Phases, Session,
};
use std::time::Duration;

/// A formation that only moves when stepped explicitly
fn frozen(aliens: Vec<Alien>) -> Formation {
    Formation::new(aliens, 1, 1, u16::MAX)
}

/// Ten aliens in one row, 6 columns apart, spanning the field
fn row_of_ten() -> Vec<Alien> {
    (0..10).map(|col| Alien::new(1 + col * 6, 4, 0, col)).collect()
}

/// Bullet placed on the alien's bottom row; it rises into the alien on the next tick
fn bullet_under(alien: &Alien) -> Bullet {
    let hitbox = alien.hitbox();
    Bullet::player(hitbox.x + hitbox.width / 2, hitbox.bottom() - 1)
}

#[test]
fn test_bullet_overlapping_alien_destroys_both() {
    let mut session = Session::with_formation(GameConfig::default(), frozen(row_of_ten()));
    let target = session.formation.aliens[3].clone();
    session.bullets.push(bullet_under(&target));

    let report = session.handle_game_logic(&[]);

    assert_eq!(report.kills, 1);
    assert!(!session.formation.aliens[3].alive);
    assert_eq!(session.formation.alive_count(), 9);
    assert_eq!(session.active_bullets(), 0);
}

#[test]
fn test_ten_kills_unlock_boost_on_the_tenth() {
    let mut session = Session::with_formation(GameConfig::default(), frozen(row_of_ten()));
    assert_eq!(session.score.score(), 0);
    assert_eq!(session.boost(), BoostState::Normal);
    assert_eq!(session.formation.alive_count(), 10);

    for idx in 0..10 {
        let target = session.formation.aliens[idx].clone();
        session.bullets.push(bullet_under(&target));

        let report = session.handle_game_logic(&[]);

        assert_eq!(report.kills, 1);
        assert_eq!(session.score.score(), (idx as u32 + 1) * 10);
        if idx < 9 {
            assert_eq!(session.boost(), BoostState::Normal);
            assert!(!report.boost_unlocked);
        } else {
            assert!(report.boost_unlocked);
        }
    }

    assert_eq!(session.score.score(), 100);
    assert_eq!(session.boost(), BoostState::Boosted);
    assert_eq!(session.outcome, Outcome::Won);
}

#[test]
fn test_ship_at_left_edge_stays_put() {
    let mut session = Session::new(GameConfig::default());
    session.ship.x = 0;
    for _ in 0..5 {
        session.handle_game_logic(&[InputAction::MoveLeft]);
    }
    assert_eq!(session.ship.x, 0);
}

#[test]
fn test_fire_with_bullet_in_flight_is_ignored() {
    let mut session = Session::new(GameConfig::default());
    session.handle_game_logic(&[InputAction::Fire]);
    assert_eq!(session.bullets.len(), 1);

    let report = session.handle_game_logic(&[InputAction::Fire]);
    assert_eq!(report.bullets_fired, 0);
    assert_eq!(session.bullets.len(), 1);
}

#[test]
fn test_can_fire_again_once_bullet_leaves_field() {
    let mut session = Session::with_formation(
        GameConfig::default(),
        frozen(vec![Alien::new(0, 0, 0, 0)]),
    );
    session.ship.x = 40;
    session.handle_game_logic(&[InputAction::Fire]);

    // Bullet climbs one row per tick from just above the ship
    for _ in 0..session.config.field_height {
        session.handle_game_logic(&[]);
    }
    assert!(session.bullets.is_empty());

    let report = session.handle_game_logic(&[InputAction::Fire]);
    assert_eq!(report.bullets_fired, 1);
}

#[test]
fn test_boost_allows_multiple_bullets_in_flight() {
    let mut session = Session::with_formation(
        GameConfig::default(),
        frozen(vec![Alien::new(0, 0, 0, 0)]),
    );
    session.score.record_kills(10);

    session.handle_game_logic(&[InputAction::Fire]);
    assert_eq!(session.active_bullets(), 3);
}

#[test]
fn test_formation_bounces_and_descends_during_play() {
    let config = GameConfig::default();
    let mut session = Session::new(config.clone());
    let start_y = session.formation.aliens[0].y;

    let mut bounced = false;
    for _ in 0..(config.alien_step_interval as usize * 20) {
        let report = session.handle_game_logic(&[]);
        bounced |= report.bounced;
        for alien in &session.formation.aliens {
            assert!(alien.x + alien.get_width() <= config.field_width);
        }
    }

    assert!(bounced);
    assert!(session.formation.aliens[0].y > start_y);
    assert_eq!(session.formation.direction_x, -1);
}

/// Feeds a fixed script of actions through a real session
struct ScriptedGame {
    session: Session,
    script: Vec<Vec<InputAction>>,
    draws: usize,
}

impl Phases for ScriptedGame {
    fn handle_events(&mut self) -> color_eyre::Result<Vec<InputAction>> {
        if self.script.is_empty() {
            return Ok(vec![InputAction::Quit]);
        }
        Ok(self.script.remove(0))
    }

    fn handle_game_logic(&mut self, actions: &[InputAction]) {
        self.session.handle_game_logic(actions);
    }

    fn draw_stuff(&mut self) -> color_eyre::Result<()> {
        self.draws += 1;
        Ok(())
    }
}

#[test]
fn test_frame_driver_runs_session_until_quit() {
    let mut game = ScriptedGame {
        session: Session::new(GameConfig::default()),
        script: vec![
            vec![InputAction::MoveRight],
            vec![InputAction::MoveRight],
            vec![InputAction::Fire],
        ],
        draws: 0,
    };
    let start_x = game.session.ship.x;

    let mut driver = FrameDriver::new(Duration::from_millis(16));
    driver.run_with(&mut game, |_| {}).unwrap();

    assert_eq!(driver.state(), LoopState::Stopped);
    assert_eq!(driver.ticks(), 3);
    assert_eq!(game.draws, 3);
    assert_eq!(game.session.tick, 3);
    assert_eq!(game.session.ship.x, start_x + 2);
    assert_eq!(game.session.bullets.len(), 1);
}

#[test]
fn test_narrow_field_formation_sweeps_and_stays_in_bounds() {
    let config = GameConfig {
        field_width: 40,
        ..GameConfig::default()
    };
    let mut session = Session::new(config.clone());
    let start_x = session.formation.aliens[0].x;

    let mut moved_sideways = false;
    for _ in 0..(config.alien_step_interval as usize * 30) {
        session.handle_game_logic(&[]);
        moved_sideways |= session.formation.aliens[0].x != start_x;
        for alien in &session.formation.aliens {
            assert!(alien.x + alien.get_width() <= config.field_width);
        }
    }
    assert!(moved_sideways);
}
