//! Side-view wrestling ring and its surroundings
//!
//! The arena is a fixed layout on an 800x600 canvas:
//!
//! - crowd stands on both sides (`x < 100` and `x >= 700`)
//! - arena floor from `y = 400` down
//! - the ring itself, 500 wide, its mat surface at `y = 350`
//! - props outside the ring: announce table (left), steel steps (right) and
//!   two weapon stashes under the ring apron
//!
//! Geometry never changes after construction. The only mutable state is the
//! pair of prop flags (`AnnounceTable::broken`, `SteelSteps::moved`).
//!
//! Drawing lives in [`render`]; the spotlight gradient in [`lighting`].

pub mod lighting;
pub mod render;

use crate::collision::{contains_inclusive, inflate};
use lighting::{LightCell, Spotlight};
use sdl2::rect::Rect;

/// Height of the arena floor where props rest
const GROUND_Y: i32 = 450;

/// How far outside a weapon stash still counts as "near" it
const WEAPON_REACH: u32 = 10;

/// Announce table ringside. Drawn as debris once broken.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnounceTable {
    pub bounds: Rect,
    pub broken: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SteelSteps {
    pub bounds: Rect,
    pub moved: bool,
}

/// Crowd stands on either side of the arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrowdArea {
    pub left: Rect,
    pub right: Rect,
}

pub struct WrestlingRing {
    canvas_width: u32,
    canvas_height: u32,

    // Ring dimensions (side view)
    ring_x: i32,
    ring_y: i32,
    ring_width: u32,
    /// Thickness of the mat in side view
    ring_height: u32,

    post_height: u32,
    /// Rope heights above the mat, bottom to top
    rope_heights: [i32; 3],
    turnbuckle_width: u32,

    pub announce_table: AnnounceTable,
    pub steel_steps: SteelSteps,
    weapon_areas: [Rect; 2],
    crowd: CrowdArea,

    /// Spotlight gradient, baked once since the scene never moves
    light_cells: Vec<LightCell>,
}

impl WrestlingRing {
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        let light_cells = Spotlight::overhead(canvas_width).cells(canvas_width, canvas_height);

        WrestlingRing {
            canvas_width,
            canvas_height,
            ring_x: 150,
            ring_y: 350,
            ring_width: 500,
            ring_height: 100,
            post_height: 200,
            rope_heights: [50, 100, 150],
            turnbuckle_width: 30,
            announce_table: AnnounceTable {
                bounds: Rect::new(50, 400, 80, 50),
                broken: false,
            },
            steel_steps: SteelSteps {
                bounds: Rect::new(680, 420, 60, 30),
                moved: false,
            },
            weapon_areas: [
                Rect::new(200, 450, 80, 20), // under ring, left
                Rect::new(520, 450, 80, 20), // under ring, right
            ],
            crowd: CrowdArea {
                left: Rect::new(0, 100, 100, 300),
                right: Rect::new(700, 100, 100, 300),
            },
            light_cells,
        }
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }

    /// The ring mat as drawn (side view)
    pub fn mat(&self) -> Rect {
        Rect::new(self.ring_x, self.ring_y, self.ring_width, self.ring_height)
    }

    /// Space inside the ropes: from the mat up to the top of the posts
    pub fn ring_zone(&self) -> Rect {
        Rect::new(
            self.ring_x,
            self.ring_y - self.post_height as i32,
            self.ring_width,
            self.post_height,
        )
    }

    /// Band around the ring edge where a wrestler stands on the apron
    pub fn apron_zone(&self) -> Rect {
        Rect::new(self.ring_x - 20, self.ring_y - 10, self.ring_width + 40, 70)
    }

    pub fn weapon_areas(&self) -> &[Rect] {
        &self.weapon_areas
    }

    /// Weapon stashes grown by the reach margin
    pub fn weapon_zones(&self) -> impl Iterator<Item = Rect> + '_ {
        self.weapon_areas.iter().map(|area| inflate(area, WEAPON_REACH))
    }

    pub fn crowd(&self) -> &CrowdArea {
        &self.crowd
    }

    pub fn is_in_ring(&self, x: i32, y: i32) -> bool {
        contains_inclusive(&self.ring_zone(), x, y)
    }

    /// On the apron but not inside the ropes
    pub fn is_on_apron(&self, x: i32, y: i32) -> bool {
        contains_inclusive(&self.apron_zone(), x, y) && !self.is_in_ring(x, y)
    }

    pub fn is_near_weapons(&self, x: i32, y: i32) -> bool {
        self.weapon_zones().any(|zone| contains_inclusive(&zone, x, y))
    }

    pub fn ring_floor_y(&self) -> i32 {
        self.ring_y
    }

    pub fn ground_y(&self) -> i32 {
        GROUND_Y
    }

    pub fn break_announce_table(&mut self) {
        self.announce_table.broken = true;
    }

    /// Put the table back together and the steps back in place
    pub fn reset_props(&mut self) {
        self.announce_table.broken = false;
        self.steel_steps.moved = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> WrestlingRing {
        WrestlingRing::new(800, 600)
    }

    #[test]
    fn test_in_ring_bounds_are_inclusive() {
        let ring = ring();
        assert!(ring.is_in_ring(150, 150));
        assert!(ring.is_in_ring(650, 350));
        assert!(ring.is_in_ring(400, 300));
        assert!(!ring.is_in_ring(149, 300));
        assert!(!ring.is_in_ring(651, 300));
        assert!(!ring.is_in_ring(400, 149));
        assert!(!ring.is_in_ring(400, 351));
    }

    #[test]
    fn test_apron_excludes_ring() {
        let ring = ring();
        // Inside the ropes at mat level is ring, not apron
        assert!(ring.is_in_ring(400, 345));
        assert!(!ring.is_on_apron(400, 345));

        // Just below the mat surface
        assert!(ring.is_on_apron(400, 351));
        assert!(ring.is_on_apron(400, 410));
        assert!(!ring.is_on_apron(400, 411));

        // Outside the posts, at mat height
        assert!(ring.is_on_apron(130, 340));
        assert!(ring.is_on_apron(670, 345));
        assert!(!ring.is_on_apron(129, 345));
        assert!(!ring.is_on_apron(671, 345));
        assert!(!ring.is_on_apron(140, 339));
    }

    #[test]
    fn test_near_weapons() {
        let ring = ring();
        // Inside the left stash
        assert!(ring.is_near_weapons(240, 460));
        // Within reach of the left stash
        assert!(ring.is_near_weapons(190, 440));
        assert!(ring.is_near_weapons(290, 480));
        assert!(!ring.is_near_weapons(189, 460));
        assert!(!ring.is_near_weapons(240, 481));
        // Right stash
        assert!(ring.is_near_weapons(610, 455));
        // Centre of the ring floor is between the two stashes
        assert!(!ring.is_near_weapons(400, 460));
    }

    #[test]
    fn test_floor_levels() {
        let ring = ring();
        assert_eq!(ring.ring_floor_y(), 350);
        assert_eq!(ring.ground_y(), 450);
    }

    #[test]
    fn test_break_and_reset_props() {
        let mut ring = ring();
        assert!(!ring.announce_table.broken);

        ring.break_announce_table();
        assert!(ring.announce_table.broken);

        ring.steel_steps.moved = true;
        ring.reset_props();
        assert!(!ring.announce_table.broken);
        assert!(!ring.steel_steps.moved);
    }

    #[test]
    fn test_zones() {
        let ring = ring();
        assert_eq!(ring.mat(), Rect::new(150, 350, 500, 100));
        assert_eq!(ring.ring_zone(), Rect::new(150, 150, 500, 200));
        assert_eq!(ring.apron_zone(), Rect::new(130, 340, 540, 70));
        let zones: Vec<Rect> = ring.weapon_zones().collect();
        assert_eq!(zones, vec![Rect::new(190, 440, 100, 40), Rect::new(510, 440, 100, 40)]);
    }
}
