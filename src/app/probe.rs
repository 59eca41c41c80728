// app/probe.rs
// Potential and field readout at the pointer position

use std::fmt;
use ultraviolet::DVec2;

use crate::charge::Charge;
use crate::field::{field, potential, FieldSample};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Probe {
    pub pos: DVec2,
    pub potential: i64,
    pub field: FieldSample,
}

impl Probe {
    pub fn at(charges: &[Charge], pos: DVec2) -> Self {
        Self {
            pos,
            potential: potential(charges, pos),
            field: field(charges, pos),
        }
    }

    pub fn lines(&self) -> [String; 3] {
        [
            format!("({}, {})", self.pos.x, self.pos.y),
            format!("Potential (V) = {}V", scientific(self.potential as f64)),
            format!("Field (E) = {}V/m", scientific(self.field.magnitude)),
        ]
    }
}

/// Six-digit mantissa with a signed, zero-padded exponent: `9.000000e+07`.
pub fn scientific(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string().to_lowercase();
    }
    let formatted = format!("{:.6e}", v);
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => formatted,
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [pos, pot, field] = self.lines();
        write!(f, "{}  {}  {}", pos, pot, field)
    }
}
