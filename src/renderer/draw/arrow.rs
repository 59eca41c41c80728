// renderer/draw/arrow.rs
// Field arrow geometry: anchoring, quantized size and the triangular head

use crate::bands::{arrow_style, potential_color, ArrowStyle, Rgb};
use crate::config::TRACE_STEP;
use crate::field::FieldSample;
use crate::renderer::canvas::Canvas;
use ultraviolet::DVec2;

/// Which point of the arrow is pinned to the given position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// Tail pinned; head lies one trace step along the field.
    Start(DVec2),
    /// Head pinned; tail lies one trace step against the field.
    End(DVec2),
    /// Centered on the point with the quantized length.
    Center(DVec2),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadPlacement {
    Midpoint,
    Tip,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    pub color: Rgb,
    pub style: ArrowStyle,
    pub start: DVec2,
    pub end: DVec2,
    pub head: [DVec2; 3],
}

fn round(p: DVec2) -> DVec2 {
    DVec2::new(p.x.round(), p.y.round())
}

impl Arrow {
    pub fn new(potential: i64, sample: FieldSample, anchor: Anchor, head: HeadPlacement) -> Self {
        let color = potential_color(potential);
        let style = arrow_style(sample.magnitude);
        let dir = sample.direction;
        let still = sample.magnitude == 0.0;

        // Traced segments snap to whole pixels so frontier points stay on the pixel grid.
        let (start, end) = match anchor {
            Anchor::Start(p) if still => (p, p),
            Anchor::Start(p) => (p, round(p + dir * TRACE_STEP)),
            Anchor::End(p) if still => (p, p),
            Anchor::End(p) => (round(p - dir * TRACE_STEP), p),
            Anchor::Center(p) => {
                let half = style.length as f64 / 2.0;
                (p - dir * half, p + dir * half)
            }
        };

        let tip = match head {
            HeadPlacement::Midpoint => (start + end) / 2.0,
            HeadPlacement::Tip => end,
        };
        let s = style.width as f64 + 2.0;
        let head = [
            tip,
            tip + DVec2::new(dir.y - dir.x, -dir.y - dir.x) * s,
            tip + DVec2::new(-dir.y - dir.x, -dir.y + dir.x) * s,
        ];

        Self {
            color,
            style,
            start,
            end,
            head,
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.draw_line(self.color, self.start, self.end, self.style.width);
        canvas.draw_polygon(self.color, &self.head);
    }
}
