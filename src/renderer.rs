use crate::assets::{Sprite, SpriteSet};
use crate::entities::{Alien, Bullet, Entity, Ship};
use crate::score::BoostState;
use crate::session::{Outcome, Session};
use rand::Rng;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub ship: &'a Ship,
    pub aliens: &'a [Alien],
    pub bullets: &'a [Bullet],
    pub score: u32,
    pub boost: BoostState,
    pub boost_threshold: u32,
    pub aliens_left: usize,
    pub outcome: Outcome,
    pub field_width: u16,
    pub field_height: u16,
    pub area: Rect,
}

impl<'a> RenderView<'a> {
    pub fn new(session: &'a Session, area: Rect) -> Self {
        Self {
            ship: &session.ship,
            aliens: &session.formation.aliens,
            bullets: &session.bullets,
            score: session.score.score(),
            boost: session.boost(),
            boost_threshold: session.score.boost_threshold(),
            aliens_left: session.formation.alive_count(),
            outcome: session.outcome,
            field_width: session.config.field_width,
            field_height: session.config.field_height,
            area,
        }
    }
}

/// Background stars, fixed for the whole session so frames stay stable
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Starfield {
    pub stars: Vec<(u16, u16)>,
}

impl Starfield {
    pub fn random<R: Rng>(rng: &mut R, width: u16, height: u16, density: f64) -> Self {
        let mut stars = Vec::new();
        for y in 0..height {
            for x in 0..width {
                if rng.random_bool(density) {
                    stars.push((x, y));
                }
            }
        }
        Self { stars }
    }
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {
    sprites: SpriteSet,
    starfield: Starfield,
}

impl GameRenderer {
    pub fn new(sprites: SpriteSet, starfield: Starfield) -> Self {
        Self { sprites, starfield }
    }

    /// Main render method. Reads the view only.
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        // Field plus side borders wide, field plus HUD and controls rows tall
        if area.width < view.field_width + 2 || area.height < view.field_height + 2 {
            self.render_too_small(frame, view);
            return;
        }

        let game_area = self.render_game(frame, view);
        if view.outcome != Outcome::InProgress {
            self.render_outcome(frame, view, game_area);
        }
    }

    /// Renders the active gameplay screen, returns the play field rect
    fn render_game(&self, frame: &mut Frame, view: &RenderView) -> Rect {
        let area = view.area;

        // Centered play field with side borders
        let bordered = Rect {
            x: area.x + (area.width - (view.field_width + 2)) / 2,
            y: area.y + 1,
            width: view.field_width + 2,
            height: view.field_height,
        };
        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));
        let game_area = block.inner(bordered);
        frame.render_widget(block, bordered);

        let buffer = frame.buffer_mut();
        for &(x, y) in &self.starfield.stars {
            if x < game_area.width && y < game_area.height {
                buffer.set_string(
                    game_area.x + x,
                    game_area.y + y,
                    ".",
                    Style::default().fg(Color::DarkGray),
                );
            }
        }

        for alien in view.aliens {
            self.draw_entity(buffer, game_area, alien);
        }
        for bullet in view.bullets {
            self.draw_entity(buffer, game_area, bullet);
        }
        self.draw_entity(buffer, game_area, view.ship);

        // Stats overlay at the top
        let boost_style = if view.boost.is_boosted() {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut stats = vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Aliens: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.aliens_left),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Boost: ", Style::default().fg(Color::DarkGray)),
            Span::styled(view.boost.get_name(), boost_style),
        ];
        if !view.boost.is_boosted() {
            stats.push(Span::styled(
                format!(" (at {})", view.boost_threshold),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let stats_area = Rect {
            x: bordered.x,
            y: area.y,
            width: bordered.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(Line::from(stats)), stats_area);

        // Controls hint at bottom
        let controls = Line::from(vec![Span::styled(
            "[A/D/Arrows: Move] [Space: Fire] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);

        let controls_area = Rect {
            x: bordered.x,
            y: bordered.y + bordered.height,
            width: bordered.width,
            height: 1,
        };

        frame.render_widget(Paragraph::new(controls).centered(), controls_area);

        game_area
    }

    /// Draws an entity's sprite clipped to the play field
    fn draw_entity<E: Entity>(&self, buffer: &mut Buffer, game_area: Rect, entity: &E) {
        if !entity.is_visible() {
            return;
        }
        let (x, y) = entity.position();
        draw_sprite(buffer, game_area, self.sprites.get(entity.sprite_kind()), x, y);
    }

    fn render_outcome(&self, frame: &mut Frame, view: &RenderView, game_area: Rect) {
        let (title, color) = match view.outcome {
            Outcome::Won => ("YOU WON!", Color::Green),
            _ => ("YOU LOST!", Color::Red),
        };
        let text = vec![
            Line::from(""),
            Line::from(title).centered().bold().fg(color),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(""),
            Line::from("Press Q to quit").centered().white(),
        ];

        let banner = Rect {
            x: game_area.x + game_area.width.saturating_sub(30) / 2,
            y: game_area.y + game_area.height.saturating_sub(8) / 2,
            width: 30.min(game_area.width),
            height: 8.min(game_area.height),
        };

        frame.render_widget(Clear, banner);
        frame.render_widget(
            Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .alignment(Alignment::Center),
            banner,
        );
    }

    fn render_too_small(&self, frame: &mut Frame, view: &RenderView) {
        let text = vec![
            Line::from("Terminal too small").centered().red().bold(),
            Line::from(format!(
                "need {}x{}",
                view.field_width + 2,
                view.field_height + 2
            ))
            .centered(),
        ];
        frame.render_widget(Paragraph::new(text), view.area);
    }
}

/// Writes a sprite with half-block glyphs at field position `(x, y)`
fn draw_sprite(buffer: &mut Buffer, game_area: Rect, sprite: &Sprite, x: u16, y: u16) {
    for row in 0..sprite.height {
        for col in 0..sprite.width {
            let (cx, cy) = (x + col, y + row);
            if cx >= game_area.width || cy >= game_area.height {
                continue;
            }
            let Some(sprite_cell) = sprite.cell(col, row) else {
                continue;
            };
            let Some(cell) = buffer.cell_mut((game_area.x + cx, game_area.y + cy)) else {
                continue;
            };
            match (sprite_cell.top, sprite_cell.bottom) {
                (Some(top), Some(bottom)) => {
                    cell.set_symbol("▀").set_fg(top).set_bg(bottom);
                }
                (Some(top), None) => {
                    cell.set_symbol("▀").set_fg(top);
                }
                (None, Some(bottom)) => {
                    cell.set_symbol("▄").set_fg(bottom);
                }
                (None, None) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn renderer() -> GameRenderer {
        GameRenderer::new(SpriteSet::solid(), Starfield::default())
    }

    fn draw(terminal: &mut Terminal<TestBackend>, renderer: &GameRenderer, session: &Session) -> Buffer {
        terminal
            .draw(|frame| {
                let view = RenderView::new(session, frame.area());
                renderer.render(frame, &view);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_hud_shows_score_and_boost() {
        let mut session = Session::new(GameConfig::default());
        session.score.record_kills(3);
        let mut terminal = Terminal::new(TestBackend::new(80, 34)).unwrap();

        let text = buffer_text(&draw(&mut terminal, &renderer(), &session));
        assert!(text.contains("Score: 30"));
        assert!(text.contains("Boost: OFF"));
        assert!(text.contains("Aliens: 24"));
    }

    #[test]
    fn test_ship_sprite_is_drawn() {
        let session = Session::new(GameConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(62, 32)).unwrap();
        let buffer = draw(&mut terminal, &renderer(), &session);

        // Field starts one column in (border) and one row down (HUD)
        let cell = &buffer[(1 + session.ship.x, 1 + session.ship.y)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(0, 255, 0));
    }

    #[test]
    fn test_dead_alien_is_not_drawn() {
        let mut session = Session::new(GameConfig::default());
        session.formation.aliens[0].destroy();
        let (x, y) = session.formation.aliens[0].position();
        let mut terminal = Terminal::new(TestBackend::new(62, 32)).unwrap();
        let buffer = draw(&mut terminal, &renderer(), &session);

        assert_eq!(buffer[(1 + x, 1 + y)].symbol(), " ");
    }

    #[test]
    fn test_draw_twice_is_identical_and_read_only() {
        let mut session = Session::new(GameConfig::default());
        session.handle_game_logic(&[crate::input::InputAction::Fire]);
        let before = format!("{:?}", session);

        let mut rng = rand::rng();
        let renderer = GameRenderer::new(
            SpriteSet::solid(),
            Starfield::random(&mut rng, 60, 30, 0.05),
        );
        let mut terminal = Terminal::new(TestBackend::new(80, 34)).unwrap();

        let first = draw(&mut terminal, &renderer, &session);
        let second = draw(&mut terminal, &renderer, &session);

        assert_eq!(first, second);
        assert_eq!(format!("{:?}", session), before);
    }

    #[test]
    fn test_outcome_banner() {
        let mut session = Session::new(GameConfig::default());
        session.outcome = Outcome::Won;
        let mut terminal = Terminal::new(TestBackend::new(80, 34)).unwrap();

        let text = buffer_text(&draw(&mut terminal, &renderer(), &session));
        assert!(text.contains("YOU WON!"));
        assert!(text.contains("Final Score: 0"));
    }

    #[test]
    fn test_small_terminal_shows_notice() {
        let session = Session::new(GameConfig::default());
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();

        let text = buffer_text(&draw(&mut terminal, &renderer(), &session));
        assert!(text.contains("Terminal too small"));
    }

    #[test]
    fn test_starfield_density_bounds() {
        let mut rng = rand::rng();
        assert!(Starfield::random(&mut rng, 60, 30, 0.0).stars.is_empty());
        assert_eq!(Starfield::random(&mut rng, 6, 3, 1.0).stars.len(), 18);
    }
}
