// charge/types.rs
// Contains the Charge record, its stable identifier and polarity helpers

use std::fmt;
use ultraviolet::DVec2;

/// Stable identifier handed out by a [`ChargeSet`](super::ChargeSet).
///
/// Selection, drag and dialog state refer to charges through this id rather
/// than holding references, so deleting a charge never leaves a dangling handle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct ChargeId(pub u64);

impl fmt::Display for ChargeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

/// A point charge in play-area pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Charge {
    pub id: ChargeId,
    /// Signed charge in coulombs. Fractional and zero values are allowed.
    pub magnitude: f64,
    pub pos: DVec2,
    pub name: String,
}

impl Charge {
    pub fn new(id: ChargeId, magnitude: f64, pos: DVec2, name: impl Into<String>) -> Self {
        Self {
            id,
            magnitude,
            pos,
            name: name.into(),
        }
    }

    pub fn polarity(&self) -> Polarity {
        if self.magnitude > 0.0 {
            Polarity::Positive
        } else if self.magnitude < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    /// Square hit box test used for picking and drag start.
    pub fn contains(&self, point: DVec2, half_extent: f64) -> bool {
        (point.x - self.pos.x).abs() <= half_extent && (point.y - self.pos.y).abs() <= half_extent
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q = {}C ({})", self.magnitude, self.name)
    }
}
