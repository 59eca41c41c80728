pub mod canvas;
pub mod draw;

use crate::charge::Charge;
use crate::config;
use crate::profile_scope;
use canvas::{Canvas, PlayArea};

pub use draw::{Anchor, Arrow, HeadPlacement, TraceStats};

/// How the field is shown in the play area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldMode {
    /// Arrow grid on a fixed lattice.
    #[default]
    Discrete,
    /// Field lines traced out of (and into) each charge.
    Continuous,
}

impl FieldMode {
    pub fn toggle(self) -> Self {
        match self {
            FieldMode::Discrete => FieldMode::Continuous,
            FieldMode::Continuous => FieldMode::Discrete,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldMode::Discrete => "DISCRETE FIELD ARROWS MODE",
            FieldMode::Continuous => "CONTINUOUS FIELD LINES MODE",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub play_area: PlayArea,
    pub lattice_stride: u32,
    pub lattice_offset: u32,
    pub max_trace_steps: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            play_area: PlayArea::default(),
            lattice_stride: config::LATTICE_STRIDE,
            lattice_offset: config::LATTICE_OFFSET,
            max_trace_steps: config::MAX_TRACE_STEPS,
        }
    }
}

/// Per-frame counters reported by [`Renderer::draw_frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub arrows: usize,
    pub trace: TraceStats,
}

/// Stateless field renderer. Every frame is recomputed from the charge list.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    pub config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn play_area(&self) -> PlayArea {
        self.config.play_area
    }

    pub fn draw_frame<C: Canvas + ?Sized>(
        &self,
        mode: FieldMode,
        charges: &[Charge],
        canvas: &mut C,
    ) -> FrameStats {
        profile_scope!("draw_frame");
        match mode {
            FieldMode::Discrete => FrameStats {
                arrows: self.draw_field_arrows(charges, canvas),
                ..FrameStats::default()
            },
            FieldMode::Continuous => {
                let trace = self.draw_field_lines(charges, canvas);
                FrameStats {
                    arrows: trace.segments,
                    trace,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests;
