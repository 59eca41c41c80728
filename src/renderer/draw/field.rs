use crate::charge::Charge;
use crate::field::{field, potential, FieldSample};
use crate::profile_scope;
use crate::renderer::canvas::{Canvas, PlayArea};
use rayon::prelude::*;
use ultraviolet::DVec2;

use super::arrow::{Anchor, Arrow, HeadPlacement};

/// Sample points of the discrete-mode lattice, column by column.
///
/// Runs from `offset` to `extent - offset` inclusive on both axes.
pub fn lattice_points(area: PlayArea, stride: u32, offset: u32) -> Vec<DVec2> {
    let stride = stride.max(1) as usize;
    let offset = offset as f64;
    let x_max = area.width - offset;
    let y_max = area.height - offset;
    if x_max < offset || y_max < offset {
        return Vec::new();
    }
    let nx = ((x_max - offset) as usize) / stride + 1;
    let ny = ((y_max - offset) as usize) / stride + 1;

    let mut points = Vec::with_capacity(nx * ny);
    for ix in 0..nx {
        for iy in 0..ny {
            points.push(DVec2::new(
                offset + (ix * stride) as f64,
                offset + (iy * stride) as f64,
            ));
        }
    }
    points
}

impl crate::renderer::Renderer {
    /// Draw one potential-colored, magnitude-scaled arrow per lattice point.
    /// Returns the number of arrows drawn.
    pub fn draw_field_arrows<C: Canvas + ?Sized>(&self, charges: &[Charge], canvas: &mut C) -> usize {
        profile_scope!("draw_field_arrows");
        let points = lattice_points(
            self.config.play_area,
            self.config.lattice_stride,
            self.config.lattice_offset,
        );

        // Sampling is the expensive part; drawing stays sequential to keep call order stable.
        let samples: Vec<(DVec2, i64, FieldSample)> = points
            .par_iter()
            .map(|&p| (p, potential(charges, p), field(charges, p)))
            .collect();

        for &(p, pot, sample) in &samples {
            Arrow::new(pot, sample, Anchor::Center(p), HeadPlacement::Tip).draw(canvas);
        }
        samples.len()
    }
}
