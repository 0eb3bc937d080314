use color_eyre::Result;
use ratatui::{Terminal, backend::Backend};

use crate::game_loop::{FrameDriver, Phases};
use crate::input::{InputAction, InputManager};
use crate::renderer::{GameRenderer, RenderView};
use crate::session::Session;

/// The main application: binds terminal, input, session and renderer to
/// the frame driver's three phases.
pub struct App<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    input_manager: InputManager,
    session: Session,
    renderer: GameRenderer,
}

impl<'a, B: Backend> App<'a, B> {
    /// Construct a new instance of [`App`].
    pub fn new(
        terminal: &'a mut Terminal<B>,
        input_manager: InputManager,
        session: Session,
        renderer: GameRenderer,
    ) -> Self {
        Self {
            terminal,
            input_manager,
            session,
            renderer,
        }
    }

    /// Run the application's main loop until the player quits.
    pub fn run(mut self) -> Result<()> {
        log::info!("Running the game");
        let mut driver = FrameDriver::new(self.session.config.frame_duration());
        driver.run(&mut self)
    }
}

impl<B: Backend> Phases for App<'_, B> {
    fn handle_events(&mut self) -> Result<Vec<InputAction>> {
        self.input_manager.poll_events()?;
        Ok(self.input_manager.get_actions())
    }

    fn handle_game_logic(&mut self, actions: &[InputAction]) {
        self.session.handle_game_logic(actions);
    }

    fn draw_stuff(&mut self) -> Result<()> {
        let session = &self.session;
        let renderer = &self.renderer;
        self.terminal.draw(|frame| {
            let view = RenderView::new(session, frame.area());
            renderer.render(frame, &view);
        })?;
        Ok(())
    }
}
