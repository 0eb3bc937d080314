use crossterm::{
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, stdout};

use space_invaders::{
    App, AssetPaths, GameConfig, GameRenderer, InputManager, Session, SpriteSet, Starfield,
    logging,
};

/// Share of field cells holding a background star
const STAR_DENSITY: f64 = 0.02;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init()?;
    log::info!("Initializing Space Invaders");

    let config = GameConfig::default();
    let paths = AssetPaths::default();

    // Load sprites before touching the terminal so a failure prints normally
    let sprites = SpriteSet::load(&paths).inspect_err(|err| log::error!("{err}"))?;
    let starfield = Starfield::random(
        &mut rand::rng(),
        config.field_width,
        config.field_height,
        STAR_DENSITY,
    );

    let supports_keyboard_enhancement = matches!(
        crossterm::terminal::supports_keyboard_enhancement(),
        Ok(true)
    );
    log::debug!("Keyboard enhancement supported: {supports_keyboard_enhancement}");

    // Setup terminal manually for full control
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Enable keyboard enhancement AFTER entering alternate screen
    if supports_keyboard_enhancement {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = App::new(
        &mut terminal,
        InputManager::new(supports_keyboard_enhancement),
        Session::new(config),
        GameRenderer::new(sprites, starfield),
    )
    .run();

    let cleanup = restore_terminal(&mut terminal, supports_keyboard_enhancement);
    result.and(cleanup)
}

/// Runs every restore step even if an earlier one fails
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    keyboard_enhancement: bool,
) -> color_eyre::Result<()> {
    let mut steps = Vec::new();
    if keyboard_enhancement {
        steps.push(execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags));
    }
    steps.push(disable_raw_mode());
    steps.push(execute!(terminal.backend_mut(), LeaveAlternateScreen));
    steps.push(terminal.show_cursor());
    first_failure(steps)?;
    Ok(())
}

/// Logs every failed step and returns the first failure
fn first_failure(steps: Vec<io::Result<()>>) -> io::Result<()> {
    for err in steps.iter().filter_map(|step| step.as_ref().err()) {
        log::error!("Terminal cleanup failed: {err}");
    }
    steps.into_iter().find(Result::is_err).unwrap_or(Ok(()))
}
