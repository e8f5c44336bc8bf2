//! Overhead spotlight
//!
//! A radial gradient from translucent white at the light's centre to fully
//! transparent at its radius. SDL2 has no gradient fill, so the gradient is
//! sampled on a coarse grid and each row is merged into runs of equal alpha.
//! The result is a few hundred blended rectangles, baked once per ring.

use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Grid size in pixels for sampling the gradient
const CELL_SIZE: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spotlight {
    pub center: (i32, i32),
    pub radius: f32,
    /// Opacity at the centre, 0.0-1.0
    pub peak_alpha: f32,
}

/// A rectangle of uniform light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightCell {
    pub rect: Rect,
    pub alpha: u8,
}

impl LightCell {
    pub fn color(&self) -> Color {
        Color::RGBA(255, 255, 255, self.alpha)
    }
}

impl Spotlight {
    /// The arena light: hanging over the middle of the top edge, 400px reach,
    /// 10% white at its brightest.
    pub fn overhead(canvas_width: u32) -> Self {
        Spotlight {
            center: (canvas_width as i32 / 2, 0),
            radius: 400.0,
            peak_alpha: 0.1,
        }
    }

    /// Alpha (0-255) of the light at a point; linear falloff to zero at the radius
    pub fn alpha_at(&self, x: f32, y: f32) -> u8 {
        if self.radius <= 0.0 {
            return 0;
        }
        let dx = x - self.center.0 as f32;
        let dy = y - self.center.1 as f32;
        let distance = (dx * dx + dy * dy).sqrt();
        let falloff = (1.0 - distance / self.radius).clamp(0.0, 1.0);

        (self.peak_alpha.clamp(0.0, 1.0) * falloff * 255.0).round() as u8
    }

    /// Sample the light over a `width` x `height` canvas.
    ///
    /// Cells with zero alpha are dropped; adjacent cells in a row with the same
    /// alpha are merged.
    pub fn cells(&self, width: u32, height: u32) -> Vec<LightCell> {
        let mut cells = Vec::new();

        for y in (0..height).step_by(CELL_SIZE as usize) {
            let cell_h = CELL_SIZE.min(height - y);
            let sample_y = y as f32 + cell_h as f32 / 2.0;
            let mut run: Option<(u32, u32, u8)> = None; // (start_x, width, alpha)

            for x in (0..width).step_by(CELL_SIZE as usize) {
                let cell_w = CELL_SIZE.min(width - x);
                let alpha = self.alpha_at(x as f32 + cell_w as f32 / 2.0, sample_y);

                run = match run {
                    Some((start, w, a)) if a == alpha => Some((start, w + cell_w, a)),
                    previous => {
                        if let Some((start, w, a)) = previous {
                            push_run(&mut cells, start, y, w, cell_h, a);
                        }
                        Some((x, cell_w, alpha))
                    }
                };
            }

            if let Some((start, w, a)) = run {
                push_run(&mut cells, start, y, w, cell_h, a);
            }
        }

        cells
    }
}

fn push_run(cells: &mut Vec<LightCell>, x: u32, y: u32, width: u32, height: u32, alpha: u8) {
    if alpha > 0 {
        cells.push(LightCell {
            rect: Rect::new(x as i32, y as i32, width, height),
            alpha,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_falloff() {
        let light = Spotlight::overhead(800);
        assert_eq!(light.center, (400, 0));
        assert_eq!(light.alpha_at(400.0, 0.0), 26);
        assert_eq!(light.alpha_at(400.0, 200.0), 13);
        assert_eq!(light.alpha_at(400.0, 400.0), 0);
        assert_eq!(light.alpha_at(0.0, 500.0), 0);
    }

    #[test]
    fn test_cells_stay_inside_light_radius() {
        let light = Spotlight::overhead(800);
        let cells = light.cells(800, 600);

        assert!(!cells.is_empty());
        for cell in &cells {
            assert!(cell.alpha > 0 && cell.alpha <= 26);
            // Nothing lit below the radius
            assert!(cell.rect.y() < 400);
            assert!(cell.rect.x() >= 0 && cell.rect.right() <= 800);
        }
    }

    #[test]
    fn test_runs_are_merged() {
        let light = Spotlight::overhead(800);
        let cells = light.cells(800, 600);

        // Runs in the same row never touch with equal alpha
        for pair in cells.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.rect.y() == b.rect.y() && a.rect.right() == b.rect.x() {
                assert_ne!(a.alpha, b.alpha);
            }
        }

        // Far fewer runs than raw 8x8 cells under the light
        assert!(cells.len() < (800 / 8) * (400 / 8));
    }

    #[test]
    fn test_partial_cells_at_canvas_edge() {
        let light = Spotlight {
            center: (0, 0),
            radius: 1000.0,
            peak_alpha: 1.0,
        };
        let cells = light.cells(10, 10);
        let covered: u32 = cells.iter().map(|c| c.rect.width() * c.rect.height()).sum();
        assert_eq!(covered, 100);
    }

    #[test]
    fn test_zero_radius_is_dark() {
        let light = Spotlight {
            center: (0, 0),
            radius: 0.0,
            peak_alpha: 1.0,
        };
        assert!(light.cells(64, 64).is_empty());
    }
}
