//! Horizontal meter for health and stamina
//!
//! Meters are stateless: one `Meter` per style, rendered once per player per
//! frame with that player's current fill.
//!
//! ```ignore
//! let health = Meter::with_style(MeterStyle::health());
//! health.render(&mut canvas, 50, 12, 0.75)?;
//! ```

use crate::painter::Painter;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

#[derive(Debug, Clone)]
pub struct MeterStyle {
    pub width: u32,
    pub height: u32,

    /// Shown behind the fill (the depleted part)
    pub background_color: Color,
    pub fill_color: Color,

    /// Fill color once the meter drops below `low_threshold`
    pub low_color: Color,
    pub low_threshold: f32,

    pub border_color: Color,
    /// 0 = no border
    pub border_thickness: u32,

    /// Fill grows from the right edge (for the player on the right)
    pub right_to_left: bool,
}

impl Default for MeterStyle {
    fn default() -> Self {
        MeterStyle::health()
    }
}

impl MeterStyle {
    pub fn health() -> Self {
        MeterStyle {
            width: 200,
            height: 10,
            background_color: Color::RGB(50, 50, 50),
            fill_color: Color::RGB(0, 200, 0),
            low_color: Color::RGB(200, 0, 0),
            low_threshold: 0.3,
            border_color: Color::RGB(0, 0, 0),
            border_thickness: 1,
            right_to_left: false,
        }
    }

    pub fn stamina() -> Self {
        MeterStyle {
            height: 6,
            fill_color: Color::RGB(230, 200, 0),
            low_color: Color::RGB(200, 120, 0),
            ..MeterStyle::health()
        }
    }

    pub fn mirrored(self) -> Self {
        MeterStyle {
            right_to_left: true,
            ..self
        }
    }
}

pub struct Meter {
    style: MeterStyle,
}

impl Meter {
    pub fn with_style(style: MeterStyle) -> Self {
        Meter { style }
    }

    pub fn style(&self) -> &MeterStyle {
        &self.style
    }

    /// The filled part of the meter at `fraction` (0.0-1.0), if any
    pub fn fill_rect(&self, x: i32, y: i32, fraction: f32) -> Option<Rect> {
        let fill_width = (self.style.width as f32 * fraction.clamp(0.0, 1.0)) as u32;
        if fill_width == 0 {
            return None;
        }

        let fill_x = if self.style.right_to_left {
            x + (self.style.width - fill_width) as i32
        } else {
            x
        };
        Some(Rect::new(fill_x, y, fill_width, self.style.height))
    }

    /// Draws the meter with its top-left corner at `(x, y)`
    pub fn render<P: Painter + ?Sized>(
        &self,
        painter: &mut P,
        x: i32,
        y: i32,
        fraction: f32,
    ) -> Result<(), String> {
        let frame = Rect::new(x, y, self.style.width, self.style.height);
        painter.fill_rect(frame, self.style.background_color)?;

        if let Some(fill) = self.fill_rect(x, y, fraction) {
            let color = if fraction < self.style.low_threshold {
                self.style.low_color
            } else {
                self.style.fill_color
            };
            painter.fill_rect(fill, color)?;
        }

        // Border last so it sits on top
        if self.style.border_thickness > 0 {
            painter.stroke_rect(frame, self.style.border_color, self.style.border_thickness)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painter::recording::RecordingPainter;

    #[test]
    fn test_default_style() {
        let style = MeterStyle::default();
        assert_eq!(style.width, 200);
        assert_eq!(style.height, 10);
        assert!(!style.right_to_left);
    }

    #[test]
    fn test_stamina_style_overrides() {
        let style = MeterStyle::stamina();
        assert_eq!(style.width, 200);
        assert_eq!(style.height, 6);
        assert_eq!(style.fill_color, Color::RGB(230, 200, 0));
    }

    #[test]
    fn test_fill_is_clamped() {
        let meter = Meter::with_style(MeterStyle::health());
        assert_eq!(meter.fill_rect(0, 0, 1.5), Some(Rect::new(0, 0, 200, 10)));
        assert_eq!(meter.fill_rect(0, 0, -0.2), None);
        assert_eq!(meter.fill_rect(10, 5, 0.5), Some(Rect::new(10, 5, 100, 10)));
    }

    #[test]
    fn test_mirrored_fill_hugs_right_edge() {
        let meter = Meter::with_style(MeterStyle::health().mirrored());
        assert_eq!(meter.fill_rect(550, 12, 0.25), Some(Rect::new(700, 12, 50, 10)));
    }

    #[test]
    fn test_low_fill_uses_low_color() {
        let meter = Meter::with_style(MeterStyle::health());
        let mut painter = RecordingPainter::new(800, 600);
        meter.render(&mut painter, 0, 0, 0.2).unwrap();

        assert!(painter.has_fill(Rect::new(0, 0, 40, 10), meter.style().low_color));
    }

    #[test]
    fn test_empty_meter_draws_background_and_border_only() {
        let meter = Meter::with_style(MeterStyle::health());
        let mut painter = RecordingPainter::new(800, 600);
        meter.render(&mut painter, 0, 0, 0.0).unwrap();

        assert_eq!(painter.fills().len(), 1);
        assert_eq!(painter.ops.len(), 2);
    }
}
