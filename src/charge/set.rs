// charge/set.rs
// Ordered charge collection. Insertion order doubles as z-order for picking.

use super::types::{Charge, ChargeId};
use ultraviolet::DVec2;

#[derive(Clone, Debug, Default)]
pub struct ChargeSet {
    charges: Vec<Charge>,
    next_id: u64,
}

impl ChargeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a charge and return its freshly generated id.
    pub fn push(&mut self, magnitude: f64, pos: DVec2, name: impl Into<String>) -> ChargeId {
        let id = ChargeId(self.next_id);
        self.next_id += 1;
        self.charges.push(Charge::new(id, magnitude, pos, name));
        id
    }

    /// Quick-add a unit charge (+1 C or -1 C) named after its position in the list.
    pub fn add_unit(&mut self, positive: bool, pos: DVec2) -> ChargeId {
        let magnitude = if positive { 1.0 } else { -1.0 };
        let name = self.default_name();
        self.push(magnitude, pos, name)
    }

    /// Name a new charge would get if added now.
    pub fn default_name(&self) -> String {
        format!("Charge{}", self.charges.len() + 1)
    }

    pub fn remove(&mut self, id: ChargeId) -> Option<Charge> {
        let idx = self.charges.iter().position(|c| c.id == id)?;
        Some(self.charges.remove(idx))
    }

    pub fn get(&self, id: ChargeId) -> Option<&Charge> {
        self.charges.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: ChargeId) -> Option<&mut Charge> {
        self.charges.iter_mut().find(|c| c.id == id)
    }

    pub fn set_position(&mut self, id: ChargeId, pos: DVec2) -> bool {
        match self.get_mut(id) {
            Some(charge) => {
                charge.pos = pos;
                true
            }
            None => false,
        }
    }

    pub fn set_magnitude(&mut self, id: ChargeId, magnitude: f64) -> bool {
        match self.get_mut(id) {
            Some(charge) => {
                charge.magnitude = magnitude;
                true
            }
            None => false,
        }
    }

    pub fn rename(&mut self, id: ChargeId, name: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(charge) => {
                charge.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Topmost charge under `point`. Later charges are drawn over earlier
    /// ones, so the search runs back to front.
    pub fn hit_test(&self, point: DVec2, half_extent: f64) -> Option<ChargeId> {
        self.charges
            .iter()
            .rev()
            .find(|c| c.contains(point, half_extent))
            .map(|c| c.id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Charge> {
        self.charges.iter()
    }

    pub fn as_slice(&self) -> &[Charge] {
        &self.charges
    }

    pub fn len(&self) -> usize {
        self.charges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charges.is_empty()
    }

    pub fn clear(&mut self) {
        self.charges.clear();
    }
}

impl<'a> IntoIterator for &'a ChargeSet {
    type Item = &'a Charge;
    type IntoIter = std::slice::Iter<'a, Charge>;

    fn into_iter(self) -> Self::IntoIter {
        self.charges.iter()
    }
}
