//! Continuous-mode field-line tracer.
//!
//! Every charged particle seeds [`SEED_RAYS`] short rays around itself. Each
//! ray then advances one [`TRACE_STEP`] segment at a time along the local
//! field (away from positive charges, back toward negative ones). Frontier
//! points are processed breadth-first. A line ends when its next point leaves
//! the play area, lands on a pixel the same line already visited, or the
//! per-line segment cap is reached.

use std::collections::{HashSet, VecDeque};

use crate::charge::{Charge, Polarity};
use crate::config::{SEED_ANGLE_OFFSET, SEED_RAYS};
use crate::field::{field, potential, FieldSample};
use crate::profile_scope;
use crate::renderer::canvas::Canvas;
use ultraviolet::DVec2;

use super::arrow::{Anchor, Arrow, HeadPlacement};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Seed rays emitted (one per line).
    pub lines: usize,
    /// Segments drawn, seeds included.
    pub segments: usize,
    /// Lines stopped by the segment cap rather than by leaving the canvas.
    pub truncated: usize,
}

impl std::ops::AddAssign for TraceStats {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.segments += rhs.segments;
        self.truncated += rhs.truncated;
    }
}

/// Unit seed directions: 45 degrees apart, starting at 22.5 degrees.
pub fn seed_directions() -> [DVec2; SEED_RAYS] {
    let step = std::f64::consts::TAU / SEED_RAYS as f64;
    std::array::from_fn(|j| {
        let angle = step * j as f64 + SEED_ANGLE_OFFSET;
        DVec2::new(angle.cos(), angle.sin())
    })
}

/// Direction a line is walked in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Walk {
    /// Tail pinned at the frontier, advancing to the head.
    Forward,
    /// Head pinned at the frontier, advancing to the tail.
    Backward,
}

impl Walk {
    fn anchor(self, p: DVec2) -> Anchor {
        match self {
            Walk::Forward => Anchor::Start(p),
            Walk::Backward => Anchor::End(p),
        }
    }

    fn next(self, arrow: &Arrow) -> DVec2 {
        match self {
            Walk::Forward => arrow.end,
            Walk::Backward => arrow.start,
        }
    }
}

struct Frontier {
    point: DVec2,
    line: usize,
    segments: usize,
}

type Pixel = (i64, i64);

fn pixel(p: DVec2) -> Pixel {
    (p.x.round() as i64, p.y.round() as i64)
}

impl crate::renderer::Renderer {
    /// Trace field lines for every charge. Neutral charges seed nothing.
    pub fn draw_field_lines<C: Canvas + ?Sized>(&self, charges: &[Charge], canvas: &mut C) -> TraceStats {
        profile_scope!("draw_field_lines");
        let mut stats = TraceStats::default();
        for charge in charges {
            let walk = match charge.polarity() {
                Polarity::Positive => Walk::Forward,
                Polarity::Negative => Walk::Backward,
                Polarity::Neutral => continue,
            };
            stats += self.trace_charge(charges, charge, walk, canvas);
        }
        stats
    }

    fn trace_charge<C: Canvas + ?Sized>(
        &self,
        charges: &[Charge],
        source: &Charge,
        walk: Walk,
        canvas: &mut C,
    ) -> TraceStats {
        let area = self.config.play_area;
        let max_segments = self.config.max_trace_steps.max(1);
        let mut stats = TraceStats::default();
        let mut frontier = VecDeque::new();
        let mut visited: Vec<HashSet<Pixel>> = Vec::with_capacity(SEED_RAYS);

        // Seed rays use the charge's own magnitude, not a resampled field.
        let source_potential = potential(charges, source.pos);
        for (line, direction) in seed_directions().into_iter().enumerate() {
            let sample = FieldSample {
                magnitude: source.magnitude.abs(),
                direction,
            };
            let arrow = Arrow::new(
                source_potential,
                sample,
                walk.anchor(source.pos),
                HeadPlacement::Midpoint,
            );
            arrow.draw(canvas);
            stats.lines += 1;
            stats.segments += 1;

            let mut seen = HashSet::new();
            seen.insert(pixel(source.pos));
            let next = walk.next(&arrow);
            if area.contains(next) && seen.insert(pixel(next)) {
                if max_segments > 1 {
                    frontier.push_back(Frontier {
                        point: next,
                        line,
                        segments: 1,
                    });
                } else {
                    stats.truncated += 1;
                }
            }
            visited.push(seen);
        }

        while let Some(Frontier {
            point,
            line,
            segments,
        }) = frontier.pop_front()
        {
            let arrow = Arrow::new(
                potential(charges, point),
                field(charges, point),
                walk.anchor(point),
                HeadPlacement::Midpoint,
            );
            arrow.draw(canvas);
            stats.segments += 1;
            let segments = segments + 1;

            let next = walk.next(&arrow);
            // A vanishing field leaves `next == point`, which is already visited.
            if !area.contains(next) || !visited[line].insert(pixel(next)) {
                continue;
            }
            if segments >= max_segments {
                stats.truncated += 1;
                continue;
            }
            frontier.push_back(Frontier {
                point: next,
                line,
                segments,
            });
        }
        stats
    }
}
