// Zone debug overlay
//
// Outlines the areas the ring predicates test against and labels the zone
// under the mouse cursor. Toggled with B.

use super::Zone;
use crate::painter::Painter;
use crate::ring::WrestlingRing;
use crate::text::{text_width, GLYPH_HEIGHT};
use sdl2::pixels::Color;

const RING_ZONE_COLOR: Color = Color::RGB(0, 255, 0);
const APRON_ZONE_COLOR: Color = Color::RGB(0, 160, 255);
const WEAPON_ZONE_COLOR: Color = Color::RGB(255, 140, 0);
const FLOOR_LEVEL_COLOR: Color = Color::RGB(0, 255, 255);
const CURSOR_LABEL_COLOR: Color = Color::RGB(255, 255, 255);
const CURSOR_LABEL_BACKING: Color = Color::RGBA(0, 0, 0, 160);

/// Label offset from the cursor hotspot
const CURSOR_OFFSET: i32 = 12;

/// Classify a point using the ring's predicates. Ring wins over apron,
/// apron over weapons.
pub fn classify(ring: &WrestlingRing, x: i32, y: i32) -> Zone {
    if ring.is_in_ring(x, y) {
        Zone::InRing
    } else if ring.is_on_apron(x, y) {
        Zone::Apron
    } else if ring.is_near_weapons(x, y) {
        Zone::NearWeapons
    } else {
        Zone::Outside
    }
}

#[derive(Debug, Default)]
pub struct ZoneOverlay {
    pub enabled: bool,
    cursor: Option<(i32, i32)>,
}

impl ZoneOverlay {
    pub fn new(enabled: bool) -> Self {
        ZoneOverlay {
            enabled,
            cursor: None,
        }
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Some((x, y));
    }

    /// Text shown next to the cursor, e.g. `APRON 400 351`
    pub fn cursor_label(&self, ring: &WrestlingRing) -> Option<String> {
        self.cursor
            .map(|(x, y)| format!("{} {} {}", classify(ring, x, y).label(), x, y))
    }

    pub fn render<P: Painter + ?Sized>(
        &self,
        painter: &mut P,
        ring: &WrestlingRing,
    ) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        painter.stroke_rect(ring.apron_zone(), APRON_ZONE_COLOR, 1)?;
        painter.stroke_rect(ring.ring_zone(), RING_ZONE_COLOR, 1)?;
        for zone in ring.weapon_zones() {
            painter.stroke_rect(zone, WEAPON_ZONE_COLOR, 1)?;
        }

        // Mat surface and arena ground
        let (canvas_width, _) = ring.canvas_size();
        for level in [ring.ring_floor_y(), ring.ground_y()] {
            painter.hline(0, canvas_width as i32, level, FLOOR_LEVEL_COLOR, 1)?;
        }

        let (Some((x, y)), Some(label)) = (self.cursor, self.cursor_label(ring)) else {
            return Ok(());
        };

        // Keep the label on screen near the right and bottom edges
        let (width, height) = painter.size();
        let label_width = text_width(&label, 1) as i32;
        let label_x = (x + CURSOR_OFFSET).min(width as i32 - label_width - 2);
        let label_y = (y + CURSOR_OFFSET).min(height as i32 - GLYPH_HEIGHT as i32 - 2);

        painter.fill_rect(
            sdl2::rect::Rect::new(
                label_x - 2,
                label_y - 2,
                label_width as u32 + 4,
                GLYPH_HEIGHT + 4,
            ),
            CURSOR_LABEL_BACKING,
        )?;
        painter.text(&label, label_x, label_y, CURSOR_LABEL_COLOR, 1)
    }
}
