// Drawing routines split into focused modules

mod arrow;
mod field;
mod lines;

pub use arrow::{Anchor, Arrow, HeadPlacement};
pub use field::lattice_points;
pub use lines::{seed_directions, TraceStats};
