use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::error::InputError;

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    Fire,
    Quit,
}

/// Without release events a key counts as held for this many frames after
/// its last press or repeat. Terminal key repeat refreshes it well within
/// that window.
const HOLD_WINDOW: u64 = 4;

/// Frame a held key was last seen pressed, `None` when released
#[derive(Debug, Default)]
struct KeyState {
    left: Option<u64>,
    right: Option<u64>,
    fire: Option<u64>,
}

/// Manages input polling and translates raw key events into game actions
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
    /// Held actions pressed since the frame started, kept even if released again
    tapped: Vec<InputAction>,
    /// Terminal reports key releases (keyboard enhancement enabled)
    release_events: bool,
    frame: u64,
}

impl InputManager {
    /// Creates a new InputManager with default key state
    pub fn new(release_events: bool) -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
            tapped: Vec::new(),
            release_events,
            frame: 0,
        }
    }

    /// Polls for all input events and stores one-shot actions
    /// Should be called once per frame before getting actions
    pub fn poll_events(&mut self) -> color_eyre::Result<()> {
        self.advance_frame();

        // Poll for all available events without blocking
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event);
            }
        }

        Ok(())
    }

    /// Processes a key event and updates key state and one-shot actions
    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        let action = match translate_key(&key_event) {
            Ok(action) => action,
            Err(err) => {
                log::trace!("Ignoring input: {err}");
                return;
            }
        };

        match key_event.kind {
            KeyEventKind::Release => self.release(action),
            _ => self.press(action),
        }
    }

    fn press(&mut self, action: InputAction) {
        let frame = Some(self.frame);
        if action != InputAction::Quit && !self.tapped.contains(&action) {
            self.tapped.push(action);
        }
        match action {
            InputAction::Quit => self.oneshot_actions.push(InputAction::Quit),
            InputAction::MoveLeft => {
                self.key_state.left = frame;
                self.key_state.right = None;
                self.tapped.retain(|a| *a != InputAction::MoveRight);
            }
            InputAction::MoveRight => {
                self.key_state.right = frame;
                self.key_state.left = None;
                self.tapped.retain(|a| *a != InputAction::MoveLeft);
            }
            InputAction::Fire => self.key_state.fire = frame,
        }
    }

    fn release(&mut self, action: InputAction) {
        match action {
            InputAction::MoveLeft => self.key_state.left = None,
            InputAction::MoveRight => self.key_state.right = None,
            InputAction::Fire => self.key_state.fire = None,
            InputAction::Quit => {}
        }
    }

    fn is_held(&self, last_seen: Option<u64>) -> bool {
        match last_seen {
            Some(_) if self.release_events => true,
            Some(frame) => self.frame.saturating_sub(frame) <= HOLD_WINDOW,
            None => false,
        }
    }

    /// Advances the frame counter without reading the terminal
    pub fn advance_frame(&mut self) {
        self.oneshot_actions.clear();
        self.tapped.clear();
        self.frame += 1;
    }

    /// Returns all actions for this frame (both continuous and one-shot)
    /// Must be called after poll_events()
    pub fn get_actions(&self) -> Vec<InputAction> {
        let mut actions = Vec::new();

        // Add one-shot actions first
        actions.extend_from_slice(&self.oneshot_actions);

        // Add continuous actions for held keys, or keys tapped this frame
        let held = [
            (InputAction::MoveLeft, self.key_state.left),
            (InputAction::MoveRight, self.key_state.right),
            (InputAction::Fire, self.key_state.fire),
        ];
        for (action, last_seen) in held {
            if self.is_held(last_seen) || self.tapped.contains(&action) {
                actions.push(action);
            }
        }

        actions
    }
}

/// Maps a raw key to its action, or reports it as unmapped
pub fn translate_key(key_event: &KeyEvent) -> Result<InputAction, InputError> {
    if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        return Ok(InputAction::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(InputAction::Quit),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Ok(InputAction::MoveLeft),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Ok(InputAction::MoveRight),
        KeyCode::Char(' ') => Ok(InputAction::Fire),
        code => Err(InputError::UnmappedKey(code)),
    }
}
