//! Drawing seam between the scene and SDL2
//!
//! The arena is described with a handful of 2D primitives: filled rectangles,
//! stroked rectangles with a line width, horizontal lines, dashed outlines and
//! bitmap text. `Painter` exposes exactly those. Only `fill_rect` and `size`
//! are required; everything else is built from filled rectangles so the SDL2
//! canvas (which has no line width) gets thick strokes for free.
//!
//! Strokes are centred on the shape's edge, so a 2px stroke around
//! `(10, 10, 20, 20)` covers `(9, 9)..(31, 31)`.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

pub trait Painter {
    /// Logical size of the drawing surface
    fn size(&self) -> (u32, u32);

    /// Fill a rectangle. Colors with alpha < 255 are blended.
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: u32) -> Result<(), String> {
        for edge in stroke_edges(rect, line_width).into_iter().flatten() {
            self.fill_rect(edge, color)?;
        }
        Ok(())
    }

    /// Horizontal line from `x1` to `x2` centred on `y`
    fn hline(
        &mut self,
        x1: i32,
        x2: i32,
        y: i32,
        color: Color,
        line_width: u32,
    ) -> Result<(), String> {
        match hline_rect(x1, x2, y, line_width) {
            Some(rect) => self.fill_rect(rect, color),
            None => Ok(()),
        }
    }

    /// Outline with an on/off dash pattern of `dash` pixels each
    fn dashed_rect(
        &mut self,
        rect: Rect,
        color: Color,
        line_width: u32,
        dash: u32,
    ) -> Result<(), String> {
        for segment in dash_segments(rect, line_width, dash) {
            self.fill_rect(segment, color)?;
        }
        Ok(())
    }

    /// Bitmap text with its top-left corner at `(x, y)`
    fn text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String> {
        crate::text::draw_simple_text(self, text, x, y, color, scale)
    }
}

impl Painter for Canvas<Window> {
    fn size(&self) -> (u32, u32) {
        match self.logical_size() {
            (0, _) | (_, 0) => self.output_size().unwrap_or((0, 0)),
            size => size,
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        let blend = if color.a < 255 {
            BlendMode::Blend
        } else {
            BlendMode::None
        };
        self.set_blend_mode(blend);
        self.set_draw_color(color);
        Canvas::fill_rect(self, rect)
    }
}

/// Rect builder that refuses empty sizes (SDL2 silently bumps 0 to 1)
fn non_empty(x: i32, y: i32, width: i32, height: i32) -> Option<Rect> {
    if width <= 0 || height <= 0 {
        None
    } else {
        Some(Rect::new(x, y, width as u32, height as u32))
    }
}

/// The four edge bands of a centred stroke: top, bottom, left, right.
///
/// Top and bottom span the full outer width; left and right fill the gap
/// between them so the corners are not painted twice.
pub fn stroke_edges(rect: Rect, line_width: u32) -> [Option<Rect>; 4] {
    if line_width == 0 {
        return [None; 4];
    }
    let lw = line_width as i32;
    let half = lw / 2;
    let outer_x = rect.x() - half;
    let outer_y = rect.y() - half;
    let outer_w = rect.width() as i32 + lw;
    let outer_h = rect.height() as i32 + lw;

    [
        non_empty(outer_x, outer_y, outer_w, lw),
        non_empty(outer_x, outer_y + outer_h - lw, outer_w, lw),
        non_empty(outer_x, outer_y + lw, lw, outer_h - 2 * lw),
        non_empty(outer_x + outer_w - lw, outer_y + lw, lw, outer_h - 2 * lw),
    ]
}

pub fn hline_rect(x1: i32, x2: i32, y: i32, line_width: u32) -> Option<Rect> {
    let lw = line_width as i32;
    non_empty(x1.min(x2), y - lw / 2, (x2 - x1).abs(), lw)
}

/// One side of a rectangle, walked clockwise from `start`
struct Edge {
    start: (i32, i32),
    dir: (i32, i32),
    len: i32,
}

impl Edge {
    /// Band of thickness `lw` covering `[t, t + run)` along the edge
    fn segment(&self, t: i32, run: i32, lw: i32) -> Option<Rect> {
        let a = (self.start.0 + self.dir.0 * t, self.start.1 + self.dir.1 * t);
        let b = (
            self.start.0 + self.dir.0 * (t + run),
            self.start.1 + self.dir.1 * (t + run),
        );
        let half = lw / 2;
        if self.dir.1 == 0 {
            non_empty(a.0.min(b.0), a.1 - half, run, lw)
        } else {
            non_empty(a.0 - half, a.1.min(b.1), lw, run)
        }
    }
}

/// Filled bands making up a dashed outline.
///
/// The dash phase carries over from one side to the next, starting at the
/// top-left corner and going clockwise.
pub fn dash_segments(rect: Rect, line_width: u32, dash: u32) -> Vec<Rect> {
    if line_width == 0 {
        return Vec::new();
    }
    if dash == 0 {
        return stroke_edges(rect, line_width).into_iter().flatten().collect();
    }

    let (x, y) = (rect.x(), rect.y());
    let (w, h) = (rect.width() as i32, rect.height() as i32);
    let edges = [
        Edge { start: (x, y), dir: (1, 0), len: w },
        Edge { start: (x + w, y), dir: (0, 1), len: h },
        Edge { start: (x + w, y + h), dir: (-1, 0), len: w },
        Edge { start: (x, y + h), dir: (0, -1), len: h },
    ];

    let dash = dash as i32;
    let period = dash * 2;
    let lw = line_width as i32;
    let mut segments = Vec::new();
    let mut travelled = 0;

    for edge in &edges {
        let mut t = 0;
        while t < edge.len {
            let phase = (travelled + t) % period;
            if phase < dash {
                let run = (dash - phase).min(edge.len - t);
                segments.extend(edge.segment(t, run, lw));
                t += run;
            } else {
                t += period - phase;
            }
        }
        travelled += edge.len;
    }

    segments
}

/// Painter that records draw calls instead of rasterizing them
#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawOp {
        Fill(Rect, Color),
        Stroke(Rect, Color, u32),
        HLine { x1: i32, x2: i32, y: i32, color: Color, width: u32 },
        Dashed(Rect, Color, u32, u32),
        Text { text: String, x: i32, y: i32, color: Color, scale: u32 },
    }

    pub struct RecordingPainter {
        pub width: u32,
        pub height: u32,
        pub ops: Vec<DrawOp>,
    }

    impl RecordingPainter {
        pub fn new(width: u32, height: u32) -> Self {
            RecordingPainter {
                width,
                height,
                ops: Vec::new(),
            }
        }

        pub fn fills(&self) -> Vec<(Rect, Color)> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Fill(rect, color) => Some((*rect, *color)),
                    _ => None,
                })
                .collect()
        }

        pub fn has_fill(&self, rect: Rect, color: Color) -> bool {
            self.ops.contains(&DrawOp::Fill(rect, color))
        }

        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Painter for RecordingPainter {
        fn size(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
            self.ops.push(DrawOp::Fill(rect, color));
            Ok(())
        }

        fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: u32) -> Result<(), String> {
            self.ops.push(DrawOp::Stroke(rect, color, line_width));
            Ok(())
        }

        fn hline(
            &mut self,
            x1: i32,
            x2: i32,
            y: i32,
            color: Color,
            width: u32,
        ) -> Result<(), String> {
            self.ops.push(DrawOp::HLine { x1, x2, y, color, width });
            Ok(())
        }

        fn dashed_rect(
            &mut self,
            rect: Rect,
            color: Color,
            line_width: u32,
            dash: u32,
        ) -> Result<(), String> {
            self.ops.push(DrawOp::Dashed(rect, color, line_width, dash));
            Ok(())
        }

        fn text(
            &mut self,
            text: &str,
            x: i32,
            y: i32,
            color: Color,
            scale: u32,
        ) -> Result<(), String> {
            self.ops.push(DrawOp::Text {
                text: text.to_string(),
                x,
                y,
                color,
                scale,
            });
            Ok(())
        }
    }
}
