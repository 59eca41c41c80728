// renderer/canvas.rs
// Draw-primitive interface consumed by the renderer, plus a recording implementation

use crate::bands::Rgb;
use ultraviolet::DVec2;

/// Minimal immediate-mode surface the field renderer draws onto.
///
/// Coordinates are play-area pixels. A line `width` of 0 strokes nothing;
/// implementations should accept it silently.
pub trait Canvas {
    fn draw_line(&mut self, color: Rgb, start: DVec2, end: DVec2, width: u32);
    fn draw_polygon(&mut self, color: Rgb, points: &[DVec2]);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_line(&mut self, color: Rgb, start: DVec2, end: DVec2, width: u32) {
        (**self).draw_line(color, start, end, width);
    }

    fn draw_polygon(&mut self, color: Rgb, points: &[DVec2]) {
        (**self).draw_polygon(color, points);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub color: Rgb,
    pub start: DVec2,
    pub end: DVec2,
    pub width: u32,
}

impl Line {
    pub fn length(&self) -> f64 {
        (self.end - self.start).mag()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub color: Rgb,
    pub points: Vec<DVec2>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Line(Line),
    Polygon(Polygon),
}

/// Canvas that keeps every primitive in call order.
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Line(line) => Some(line),
            DrawCommand::Polygon(_) => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Polygon(poly) => Some(poly),
            DrawCommand::Line(_) => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn draw_line(&mut self, color: Rgb, start: DVec2, end: DVec2, width: u32) {
        self.commands.push(DrawCommand::Line(Line {
            color,
            start,
            end,
            width,
        }));
    }

    fn draw_polygon(&mut self, color: Rgb, points: &[DVec2]) {
        self.commands.push(DrawCommand::Polygon(Polygon {
            color,
            points: points.to_vec(),
        }));
    }
}

/// Play-area rectangle with its origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayArea {
    pub width: f64,
    pub height: f64,
}

impl PlayArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Inclusive on every edge.
    pub fn contains(&self, p: DVec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        Self::new(crate::config::PLAY_AREA_WIDTH, crate::config::PLAY_AREA_HEIGHT)
    }
}
