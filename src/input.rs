use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Everything the arena reacts to
///
/// Raw SDL2 events are translated into these so the game never sees
/// keycodes directly.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    /// R: ring the bell
    StartMatch,
    /// Escape: pause or resume
    TogglePause,

    // === Debug ===
    /// B: outline ring/apron/weapon zones
    ToggleZoneOverlay,
    /// F2: smash the announce table
    BreakAnnounceTable,

    /// Cursor position in logical canvas coordinates
    MouseMove(i32, i32),

    /// Window closed
    Quit,
}

/// Translates SDL2 events into `GameAction`s
///
/// Only key presses are mapped. Key releases are ignored, as are
/// auto-repeated presses so holding Escape does not flicker the pause state.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drain all pending SDL2 events and return the resulting actions
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    pub fn translate(&self, event: &Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat,
                ..
            } => self.translate_key(*key, *repeat),
            Event::MouseMotion { x, y, .. } => Some(GameAction::MouseMove(*x, *y)),
            _ => None,
        }
    }

    pub fn translate_key(&self, key: Keycode, repeat: bool) -> Option<GameAction> {
        if repeat {
            return None;
        }

        match key {
            Keycode::R => Some(GameAction::StartMatch),
            Keycode::Escape => Some(GameAction::TogglePause),
            Keycode::B => Some(GameAction::ToggleZoneOverlay),
            Keycode::F2 => Some(GameAction::BreakAnnounceTable),
            _ => {
                log::debug!("Unbound key: {:?}", key);
                None
            }
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
