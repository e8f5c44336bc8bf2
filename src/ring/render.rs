//! Painting the arena
//!
//! Back to front: background, floor, crowd, ring structure, props, light.

use super::WrestlingRing;
use crate::painter::Painter;
use crate::text::{text_width, GLYPH_HEIGHT};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

const ARENA_BACKGROUND: Color = Color::RGB(0x1a, 0x1a, 0x2e);
const ARENA_FLOOR: Color = Color::RGB(0x2d, 0x5a, 0x27);
const CROWD_STAND: Color = Color::RGB(0x33, 0x33, 0x33);
const CROWD_FIGURE: Color = Color::RGB(0x55, 0x55, 0x55);
const APRON: Color = Color::RGB(0, 0, 0);
const MAT: Color = Color::RGB(0x4a, 0x4a, 0x4a);
const MAT_LINE: Color = Color::RGB(0x66, 0x66, 0x66);
const POST: Color = Color::RGB(0x88, 0x88, 0x88);
const POST_EDGE: Color = Color::RGB(0x66, 0x66, 0x66);
const ROPE: Color = Color::RGB(255, 255, 255);
const TURNBUCKLE: Color = Color::RGB(255, 255, 0);
const TURNBUCKLE_EDGE: Color = Color::RGB(0, 0, 0);
const TABLE_TOP: Color = Color::RGB(0x8b, 0x45, 0x13);
const TABLE_WOOD: Color = Color::RGB(0x65, 0x43, 0x21);
const MONITOR: Color = Color::RGB(0x33, 0x33, 0x33);
const MONITOR_SHARD: Color = Color::RGB(0x22, 0x22, 0x22);
const STEEL: Color = Color::RGB(0xc0, 0xc0, 0xc0);
const STEEL_EDGE: Color = Color::RGB(0x80, 0x80, 0x80);
const WEAPON_FILL: Color = Color::RGBA(255, 255, 0, 51);
const WEAPON_EDGE: Color = Color::RGB(255, 255, 0);
const WEAPON_LABEL: Color = Color::RGB(255, 255, 255);

const FLOOR_Y: i32 = 400;
const FLOOR_HEIGHT: u32 = 200;
const CROWD_FIGURES: i32 = 20;
const POST_WIDTH: u32 = 10;
const TURNBUCKLE_HEIGHT: u32 = 40;
/// Turnbuckle pads sit this far above the mat
const TURNBUCKLE_DROP: i32 = 160;
const WEAPON_DASH: u32 = 3;

impl WrestlingRing {
    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<(), String> {
        let (width, height) = self.canvas_size();

        painter.fill_rect(Rect::new(0, 0, width, height), ARENA_BACKGROUND)?;
        painter.fill_rect(Rect::new(0, FLOOR_Y, width, FLOOR_HEIGHT), ARENA_FLOOR)?;

        self.draw_crowd(painter)?;

        self.draw_ring_base(painter)?;
        self.draw_ring_posts(painter)?;
        self.draw_ring_ropes(painter)?;
        self.draw_turnbuckles(painter)?;

        self.draw_announce_table(painter)?;
        self.draw_steel_steps(painter)?;
        self.draw_weapon_areas(painter)?;

        self.draw_lighting(painter)
    }

    fn draw_crowd<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<(), String> {
        let crowd = self.crowd();
        painter.fill_rect(crowd.left, CROWD_STAND)?;
        painter.fill_rect(crowd.right, CROWD_STAND)?;

        // Rows of 5 spectators, 4 rows per stand
        for i in 0..CROWD_FIGURES {
            let dx = (i % 5) * 15;
            let dy = (i / 5) * 20;
            painter.fill_rect(
                Rect::new(crowd.left.x() + 10 + dx, crowd.left.y() + 20 + dy, 8, 15),
                CROWD_FIGURE,
            )?;
            painter.fill_rect(
                Rect::new(crowd.right.x() + 10 + dx, crowd.right.y() + 20 + dy, 8, 15),
                CROWD_FIGURE,
            )?;
        }

        Ok(())
    }

    fn draw_ring_base<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<(), String> {
        // Skirt hangs below the mat down past the floor line
        painter.fill_rect(
            Rect::new(
                self.ring_x - 20,
                self.ring_y - 10,
                self.ring_width + 40,
                self.ring_height + 70,
            ),
            APRON,
        )?;

        painter.fill_rect(self.mat(), MAT)?;

        let mid_y = self.ring_y + self.ring_height as i32 / 2;
        painter.hline(self.ring_x, self.ring_right(), mid_y, MAT_LINE, 2)
    }

    fn draw_ring_posts<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<(), String> {
        for edge_x in [self.ring_x, self.ring_right()] {
            let post = Rect::new(
                edge_x - POST_WIDTH as i32 / 2,
                self.ring_y - self.post_height as i32,
                POST_WIDTH,
                self.post_height,
            );
            painter.fill_rect(post, POST)?;
            painter.stroke_rect(post, POST_EDGE, 2)?;
        }
        Ok(())
    }

    fn draw_ring_ropes<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<(), String> {
        for height in self.rope_heights {
            painter.hline(self.ring_x, self.ring_right(), self.ring_y - height, ROPE, 4)?;
        }
        Ok(())
    }

    fn draw_turnbuckles<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<(), String> {
        for edge_x in [self.ring_x, self.ring_right()] {
            let pad = Rect::new(
                edge_x - self.turnbuckle_width as i32 / 2,
                self.ring_y - TURNBUCKLE_DROP,
                self.turnbuckle_width,
                TURNBUCKLE_HEIGHT,
            );
            painter.fill_rect(pad, TURNBUCKLE)?;
            painter.stroke_rect(pad, TURNBUCKLE_EDGE, 2)?;
        }
        Ok(())
    }

    fn draw_announce_table<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<(), String> {
        let table = self.announce_table.bounds;
        let (x, y) = (table.x(), table.y());

        if self.announce_table.broken {
            painter.fill_rect(Rect::new(x, y + 20, 30, 10), TABLE_WOOD)?;
            painter.fill_rect(Rect::new(x + 40, y + 25, 35, 8), TABLE_WOOD)?;
            return painter.fill_rect(Rect::new(x + 15, y + 15, 15, 8), MONITOR_SHARD);
        }

        painter.fill_rect(table, TABLE_TOP)?;

        // Legs
        painter.fill_rect(Rect::new(x + 5, table.bottom(), 8, 20), TABLE_WOOD)?;
        painter.fill_rect(Rect::new(table.right() - 13, table.bottom(), 8, 20), TABLE_WOOD)?;

        // Commentary monitors
        painter.fill_rect(Rect::new(x + 10, y - 15, 25, 15), MONITOR)?;
        painter.fill_rect(Rect::new(x + 45, y - 15, 25, 15), MONITOR)
    }

    fn draw_steel_steps<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<(), String> {
        let steps = self.steel_steps.bounds;
        painter.fill_rect(steps, STEEL)?;
        painter.stroke_rect(steps, STEEL_EDGE, 2)?;

        for step in [10, 20] {
            painter.hline(steps.x(), steps.right(), steps.y() + step, STEEL_EDGE, 2)?;
        }
        Ok(())
    }

    fn draw_weapon_areas<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<(), String> {
        for area in self.weapon_areas() {
            painter.fill_rect(*area, WEAPON_FILL)?;
            painter.dashed_rect(*area, WEAPON_EDGE, 2, WEAPON_DASH)?;
        }

        // Label centred on the area, baseline 3px below its middle
        let label = "WEAPONS";
        let label_width = text_width(label, 1) as i32;
        for area in self.weapon_areas() {
            let center = area.center();
            let baseline = center.y() + 3;
            painter.text(
                label,
                center.x() - label_width / 2,
                baseline - GLYPH_HEIGHT as i32,
                WEAPON_LABEL,
                1,
            )?;
        }
        Ok(())
    }

    fn draw_lighting<P: Painter + ?Sized>(&self, painter: &mut P) -> Result<(), String> {
        for cell in &self.light_cells {
            painter.fill_rect(cell.rect, cell.color())?;
        }
        Ok(())
    }

    fn ring_right(&self) -> i32 {
        self.ring_x + self.ring_width as i32
    }
}
