// app/input.rs
// Pointer handling: picking, dragging and context-menu selection of charges

use ultraviolet::DVec2;

use crate::charge::Charge;

use super::state::AppState;

/// Pointer snapshot for one frame, in play-area coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub pos: DVec2,
    /// Primary button went down this frame.
    pub pressed: bool,
    /// Primary button went up this frame.
    pub released: bool,
    /// Secondary button went up this frame.
    pub secondary_released: bool,
}

impl PointerState {
    pub fn at(pos: DVec2) -> Self {
        Self {
            pos,
            ..Self::default()
        }
    }
}

/// Apply one frame of pointer input to the application state.
///
/// A press over a charge starts dragging the topmost one. While dragging,
/// the charge follows the pointer as long as it stays inside the play area;
/// leaving the area drops the drag. Releasing the button always ends it.
pub fn handle_pointer(state: &mut AppState, pointer: &PointerState, half_extent: f64) {
    if pointer.pressed {
        if let Some(id) = state.charges.hit_test(pointer.pos, half_extent) {
            state.selected = Some(id);
        }
    }

    if let Some(id) = state.selected {
        if state.play_area.contains(pointer.pos) {
            state.charges.set_position(id, pointer.pos);
        } else {
            state.selected = None;
        }
    }

    if pointer.released {
        state.selected = None;
    }

    if pointer.secondary_released {
        state.context_menu = state.charges.hit_test(pointer.pos, half_extent);
    }
}

/// Topmost charge under the pointer, for the hover readout.
pub fn hovered<'a>(state: &'a AppState, pos: DVec2, half_extent: f64) -> Option<&'a Charge> {
    let id = state.charges.hit_test(pos, half_extent)?;
    state.charges.get(id)
}
