//! Screen-space HUD
//!
//! Drawn over the arena along the top edge, above the crowd:
//!
//! - player 1 health/stamina meters on the left, player 2 mirrored on the right
//! - the match clock between them
//! - the match status line underneath
//!
//! Meter values are percentages (0-100), matching how the game reports them.

pub mod meter;

use crate::painter::Painter;
use crate::text::text_width;
use meter::{Meter, MeterStyle};
use sdl2::pixels::Color;
use std::time::Duration;

const MARGIN: i32 = 20;
const LABEL_SCALE: u32 = 2;
const METER_TOP: i32 = 12;
const STAMINA_TOP: i32 = 26;
const STATUS_TOP: i32 = 60;
const LABEL_COLOR: Color = Color::RGB(255, 255, 255);
const STATUS_COLOR: Color = Color::RGB(255, 215, 0);
const CLOCK_COLOR: Color = Color::RGB(200, 200, 200);

/// One side's meters, as percentages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerMeters {
    pub health: f32,
    pub stamina: f32,
}

impl Default for PlayerMeters {
    fn default() -> Self {
        PlayerMeters {
            health: 100.0,
            stamina: 100.0,
        }
    }
}

pub struct Hud {
    status: String,
    players: [PlayerMeters; 2],
    health_meters: [Meter; 2],
    stamina_meters: [Meter; 2],
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            status: String::new(),
            players: [PlayerMeters::default(); 2],
            health_meters: [
                Meter::with_style(MeterStyle::health()),
                Meter::with_style(MeterStyle::health().mirrored()),
            ],
            stamina_meters: [
                Meter::with_style(MeterStyle::stamina()),
                Meter::with_style(MeterStyle::stamina().mirrored()),
            ],
        }
    }

    #[allow(dead_code)]
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    /// Meters for player 1 or 2
    pub fn player(&self, player: u8) -> Option<&PlayerMeters> {
        player_index(player).map(|i| &self.players[i])
    }

    /// Set a player's health percentage. Returns false for an unknown player.
    pub fn set_health(&mut self, player: u8, percent: f32) -> bool {
        match player_index(player) {
            Some(i) => {
                self.players[i].health = clamp_percent(percent);
                true
            }
            None => false,
        }
    }

    /// Set a player's stamina percentage. Returns false for an unknown player.
    pub fn set_stamina(&mut self, player: u8, percent: f32) -> bool {
        match player_index(player) {
            Some(i) => {
                self.players[i].stamina = clamp_percent(percent);
                true
            }
            None => false,
        }
    }

    pub fn render<P: Painter + ?Sized>(
        &self,
        painter: &mut P,
        match_clock: Option<Duration>,
    ) -> Result<(), String> {
        let (width, _) = painter.size();
        let width = width as i32;
        let label_width = text_width("P1", LABEL_SCALE) as i32;

        for (i, meters) in self.players.iter().enumerate() {
            let meter_width = self.health_meters[i].style().width as i32;
            let (label_x, meter_x) = if i == 0 {
                (MARGIN, MARGIN + label_width + 8)
            } else {
                let label_x = width - MARGIN - label_width;
                (label_x, label_x - 8 - meter_width)
            };

            let label = format!("P{}", i + 1);
            painter.text(&label, label_x, METER_TOP, LABEL_COLOR, LABEL_SCALE)?;
            self.health_meters[i].render(painter, meter_x, METER_TOP, meters.health / 100.0)?;
            self.stamina_meters[i].render(painter, meter_x, STAMINA_TOP, meters.stamina / 100.0)?;
        }

        if let Some(elapsed) = match_clock {
            let clock = format_clock(elapsed);
            let x = (width - text_width(&clock, LABEL_SCALE) as i32) / 2;
            painter.text(&clock, x, METER_TOP, CLOCK_COLOR, LABEL_SCALE)?;
        }

        if !self.status.is_empty() {
            let x = (width - text_width(&self.status, LABEL_SCALE) as i32) / 2;
            painter.text(&self.status, x, STATUS_TOP, STATUS_COLOR, LABEL_SCALE)?;
        }

        Ok(())
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

/// `MM:SS`, minutes keep counting past 59
pub fn format_clock(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn player_index(player: u8) -> Option<usize> {
    match player {
        1 | 2 => Some(player as usize - 1),
        _ => None,
    }
}

fn clamp_percent(percent: f32) -> f32 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}
