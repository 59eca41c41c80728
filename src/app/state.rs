// app/state.rs
// Explicit application state passed by reference into the per-frame update and render calls

use crate::charge::{ChargeId, ChargeSet};
use crate::renderer::canvas::PlayArea;
use crate::renderer::FieldMode;

use super::dialog::ChargeDialog;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub charges: ChargeSet,
    pub mode: FieldMode,
    pub play_area: PlayArea,
    /// Charge currently being dragged.
    pub selected: Option<ChargeId>,
    /// Charge whose delete/rename menu is open.
    pub context_menu: Option<ChargeId>,
    /// Add or edit dialog, when open.
    pub dialog: Option<ChargeDialog>,
}

impl AppState {
    pub fn new(play_area: PlayArea) -> Self {
        Self {
            play_area,
            ..Self::default()
        }
    }

    pub fn with_charges(play_area: PlayArea, charges: ChargeSet, mode: FieldMode) -> Self {
        Self {
            charges,
            mode,
            play_area,
            ..Self::default()
        }
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// Drop any handle to a charge that no longer exists.
    pub fn forget_missing(&mut self) {
        let charges = &self.charges;
        let alive = |id: &ChargeId| charges.get(*id).is_some();
        if !self.selected.as_ref().map_or(true, alive) {
            self.selected = None;
        }
        if !self.context_menu.as_ref().map_or(true, alive) {
            self.context_menu = None;
        }
        if let Some(target) = self.dialog.as_ref().and_then(|d| d.target) {
            if !alive(&target) {
                self.dialog = None;
            }
        }
    }
}
