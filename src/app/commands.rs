// app/commands.rs
// Handles processing of AppCommand messages produced by the UI layer

use crate::charge::ChargeId;
use crate::profile_scope;

use super::dialog::{ChargeDialog, DialogField};
use super::state::AppState;

/// User intents the UI layer forwards to the application state.
#[derive(Clone, Debug, PartialEq)]
pub enum AppCommand {
    /// Quick-add a unit charge at the centre of the play area.
    AddUnit { positive: bool },
    OpenAddDialog,
    OpenEditDialog { id: ChargeId },
    FocusDialogField { field: DialogField },
    /// Replace the whole text of one dialog field.
    DialogInput { field: DialogField, text: String },
    TypeChar { ch: char },
    Backspace,
    SubmitDialog,
    CancelDialog,
    OpenContextMenu { id: ChargeId },
    CloseContextMenu,
    Delete { id: ChargeId },
    Rename { id: ChargeId, name: String },
    ToggleMode,
    ClearAll,
}

/// Process a single AppCommand
pub fn process_command(cmd: AppCommand, state: &mut AppState) {
    profile_scope!("command_handling");
    match cmd {
        AppCommand::AddUnit { positive } => handle_add_unit(state, positive),
        AppCommand::OpenAddDialog => {
            let center = state.play_area.center();
            state.context_menu = None;
            state.dialog = Some(ChargeDialog::for_new(&state.charges, center));
        }
        AppCommand::OpenEditDialog { id } => match state.charges.get(id) {
            Some(charge) => {
                state.context_menu = None;
                state.dialog = Some(ChargeDialog::for_existing(charge));
            }
            None => eprintln!("Cannot edit charge {}: no such charge", id),
        },
        AppCommand::FocusDialogField { field } => {
            if let Some(dialog) = state.dialog.as_mut() {
                dialog.focus = field;
            }
        }
        AppCommand::DialogInput { field, text } => {
            if let Some(dialog) = state.dialog.as_mut() {
                *dialog.field_mut(field) = text;
            }
        }
        AppCommand::TypeChar { ch } => {
            if let Some(dialog) = state.dialog.as_mut() {
                dialog.type_char(ch);
            }
        }
        AppCommand::Backspace => {
            if let Some(dialog) = state.dialog.as_mut() {
                dialog.backspace();
            }
        }
        AppCommand::SubmitDialog => handle_submit_dialog(state),
        AppCommand::CancelDialog => state.dialog = None,
        AppCommand::OpenContextMenu { id } => {
            if state.charges.get(id).is_some() {
                state.context_menu = Some(id);
            }
        }
        AppCommand::CloseContextMenu => state.context_menu = None,
        AppCommand::Delete { id } => handle_delete(state, id),
        AppCommand::Rename { id, name } => {
            if state.charges.rename(id, name.clone()) {
                println!("Charge {} renamed to {}", id, name);
                state.context_menu = None;
            } else {
                eprintln!("Cannot rename charge {}: no such charge", id);
            }
        }
        AppCommand::ToggleMode => {
            state.mode = state.mode.toggle();
            println!("Switched to {}", state.mode.label());
        }
        AppCommand::ClearAll => {
            let removed = state.charges.len();
            state.charges.clear();
            state.forget_missing();
            println!("Removed all {} charges", removed);
        }
    }
}

fn handle_add_unit(state: &mut AppState, positive: bool) {
    // Quick-add is disabled while the custom charge dialog has focus.
    if state.dialog.as_ref().map_or(false, |d| d.target.is_none()) {
        return;
    }
    let id = state.charges.add_unit(positive, state.play_area.center());
    if let Some(charge) = state.charges.get(id) {
        println!("Added {} {}", id, charge);
    }
}

fn handle_delete(state: &mut AppState, id: ChargeId) {
    match state.charges.remove(id) {
        Some(charge) => {
            println!("Deleted {} {}", id, charge);
            state.forget_missing();
        }
        None => eprintln!("Cannot delete charge {}: no such charge", id),
    }
}

fn handle_submit_dialog(state: &mut AppState) {
    let Some(dialog) = state.dialog.as_mut() else {
        return;
    };
    let values = match dialog.parse() {
        Ok(values) => values,
        Err(e) => {
            eprintln!("Invalid charge input: {}", e);
            dialog.error = Some(e.to_string());
            return;
        }
    };

    match dialog.target {
        None => {
            let id = state.charges.push(values.magnitude, values.pos, values.name);
            if let Some(charge) = state.charges.get(id) {
                println!("Added {} {}", id, charge);
            }
        }
        Some(id) => match state.charges.get_mut(id) {
            Some(charge) => {
                charge.name = values.name;
                charge.magnitude = values.magnitude;
                charge.pos = values.pos;
                println!("Updated {} {}", id, charge);
            }
            None => eprintln!("Charge {} disappeared while being edited", id),
        },
    }
    state.dialog = None;
}
