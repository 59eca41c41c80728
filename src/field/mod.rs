//! Electrostatic field model.
//!
//! Potential and field at an arbitrary point from a finite set of point
//! charges, using Coulomb's law with [`COULOMB_K`]. A charge sitting exactly
//! on the query point contributes nothing; the coincidence check happens
//! before any division so no NaN or infinity can escape.

use crate::charge::Charge;
use crate::config::COULOMB_K;
use ultraviolet::DVec2;

/// Net electric field at a point, split into magnitude and unit direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSample {
    /// Field strength in V/m, always `>= 0` for values produced by [`field`].
    pub magnitude: f64,
    /// Unit vector, or exactly zero when the net field vanishes.
    pub direction: DVec2,
}

impl FieldSample {
    pub const ZERO: FieldSample = FieldSample {
        magnitude: 0.0,
        direction: DVec2 { x: 0.0, y: 0.0 },
    };

    /// Build a sample from a raw field vector.
    pub fn from_vector(v: DVec2) -> Self {
        let magnitude = v.mag();
        if magnitude == 0.0 {
            Self::ZERO
        } else {
            Self {
                magnitude,
                direction: v / magnitude,
            }
        }
    }

    /// Field vector (magnitude times direction).
    pub fn vector(&self) -> DVec2 {
        self.direction * self.magnitude
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude == 0.0
    }
}

/// Electric potential at `point`, in volts.
///
/// Each charge's `k*q/r` term is truncated toward zero before summing, so
/// the result is an integer. Terms and sum saturate at the `i64` range,
/// which lies far outside the color domain.
pub fn potential(charges: &[Charge], point: DVec2) -> i64 {
    let mut potential = 0i64;
    for charge in charges {
        let r = (point - charge.pos).mag();
        if r == 0.0 {
            continue;
        }
        let term = (COULOMB_K * charge.magnitude / r).trunc() as i64;
        potential = potential.saturating_add(term);
    }
    potential
}

/// Superposed field vector at `point`.
pub fn field_vector(charges: &[Charge], point: DVec2) -> DVec2 {
    let mut net = DVec2::zero();
    for charge in charges {
        let d = point - charge.pos;
        let r = d.mag();
        if r == 0.0 {
            continue;
        }
        // Signed strength: a negative charge flips the outward direction.
        let strength = COULOMB_K * charge.magnitude / (r * r);
        net += (d / r) * strength;
    }
    net
}

/// Net electric field at `point`.
pub fn field(charges: &[Charge], point: DVec2) -> FieldSample {
    FieldSample::from_vector(field_vector(charges, point))
}
