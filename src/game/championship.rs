// ChampionshipWrestling - match state and the per-frame draw
//
// Owns the ring, the HUD and the debug overlay. The main loop feeds it
// actions from the input system, calls update() with the frame delta and
// draw() every frame regardless of pause state.

use super::overlay::ZoneOverlay;
use super::LoopControl;
use crate::collision::aabb_intersect;
use crate::config::ArenaConfig;
use crate::hud::Hud;
use crate::input::GameAction;
use crate::painter::Painter;
use crate::ring::WrestlingRing;
use chrono::{DateTime, Local};
use sdl2::rect::Rect;
use std::time::Duration;

pub const STATUS_READY: &str = "Championship Wrestling Arena Ready!";
pub const STATUS_STARTED: &str = "Match Started! Fight!";
pub const STATUS_RESUMED: &str = "Match Resumed";
pub const STATUS_PAUSED: &str = "Match Paused - Press ESC to Resume";

pub struct ChampionshipWrestling {
    ring: WrestlingRing,
    hud: Hud,
    overlay: ZoneOverlay,

    game_running: bool,
    match_started: bool,

    /// Time spent with the match started and not paused
    match_clock: Duration,
    match_started_at: Option<DateTime<Local>>,
}

impl ChampionshipWrestling {
    pub fn new(config: &ArenaConfig) -> Self {
        let mut game = ChampionshipWrestling {
            ring: WrestlingRing::new(config.canvas_width, config.canvas_height),
            hud: Hud::new(),
            overlay: ZoneOverlay::new(config.show_zones),
            game_running: false,
            match_started: false,
            match_clock: Duration::ZERO,
            match_started_at: None,
        };
        game.update_match_status(STATUS_READY);
        game
    }

    /// Note: Currently only read by tests; kept for callers that inspect props.
    #[allow(dead_code)]
    pub fn ring(&self) -> &WrestlingRing {
        &self.ring
    }

    #[allow(dead_code)]
    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn is_running(&self) -> bool {
        self.game_running
    }

    pub fn is_match_started(&self) -> bool {
        self.match_started
    }

    pub fn match_clock(&self) -> Duration {
        self.match_clock
    }

    pub fn handle_action(&mut self, action: GameAction) -> LoopControl {
        match action {
            GameAction::StartMatch => self.start_match(),
            GameAction::TogglePause => self.pause_game(),
            GameAction::ToggleZoneOverlay => {
                let enabled = self.overlay.toggle();
                log::info!("Zone overlay: {}", if enabled { "ON" } else { "OFF" });
            }
            GameAction::BreakAnnounceTable => {
                self.ring.break_announce_table();
                log::info!("Announce table broken");
            }
            GameAction::MouseMove(x, y) => self.overlay.set_cursor(x, y),
            GameAction::Quit => return LoopControl::Quit,
        }
        LoopControl::Continue
    }

    /// Ring the bell. Does nothing once a match is under way.
    pub fn start_match(&mut self) {
        if self.match_started {
            log::debug!("Match already started, ignoring");
            return;
        }

        self.match_started = true;
        self.game_running = true;
        self.match_clock = Duration::ZERO;

        let now = Local::now();
        log::info!("Bell rang at {}", now.format("%H:%M:%S"));
        self.match_started_at = Some(now);

        self.update_match_status(STATUS_STARTED);
        self.ring.reset_props();
    }

    /// Flip between running and paused.
    ///
    /// Also flips before a match has started; the first press then reports
    /// "resumed" even though nothing was running.
    pub fn pause_game(&mut self) {
        self.game_running = !self.game_running;
        if self.game_running {
            self.update_match_status(STATUS_RESUMED);
        } else {
            if let Some(started_at) = self.match_started_at {
                log::info!(
                    "Paused {}s into the match (bell at {})",
                    self.match_clock.as_secs(),
                    started_at.format("%H:%M:%S")
                );
            }
            self.update_match_status(STATUS_PAUSED);
        }
    }

    pub fn update_match_status(&mut self, message: &str) {
        log::info!("{}", message);
        self.hud.set_status(message);
    }

    /// Set a player's health bar width in percent (players 1 and 2)
    ///
    /// Note: Nothing drives the meters yet; wrestler logic will.
    #[allow(dead_code)]
    pub fn update_health_bar(&mut self, player: u8, health: f32) {
        if self.hud.set_health(player, health) {
            log::debug!("P{} meters: {:?}", player, self.hud.player(player));
        } else {
            log::warn!("No health bar for player {}", player);
        }
    }

    /// Set a player's stamina bar width in percent (players 1 and 2)
    #[allow(dead_code)]
    pub fn update_stamina_bar(&mut self, player: u8, stamina: f32) {
        if self.hud.set_stamina(player, stamina) {
            log::debug!("P{} meters: {:?}", player, self.hud.player(player));
        } else {
            log::warn!("No stamina bar for player {}", player);
        }
    }

    /// Per-frame update. Only does work once the match has started.
    pub fn update(&mut self, delta: Duration) {
        if self.match_started {
            self.update_game(delta);
        }
    }

    fn update_game(&mut self, delta: Duration) {
        if self.game_running {
            self.match_clock += delta;
        }
    }

    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<(), String> {
        self.ring.draw(painter)?;
        self.overlay.render(painter, &self.ring)?;

        let clock = self.match_started.then_some(self.match_clock);
        self.hud.render(painter, clock)
    }

    /// Strict AABB overlap; boxes sharing only an edge do not collide
    ///
    /// Note: Currently unused outside tests, no wrestlers move yet.
    #[allow(dead_code)]
    pub fn check_collision(a: &Rect, b: &Rect) -> bool {
        aabb_intersect(a, b)
    }
}
