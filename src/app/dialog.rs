// app/dialog.rs
// Add/edit charge dialog: three text fields parsed with the constrained expression parser

use ultraviolet::DVec2;

use crate::charge::{Charge, ChargeId, ChargeSet};
use crate::expr::{self, ExprError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogField {
    #[default]
    Name,
    Magnitude,
    Position,
}

/// Values ready to be written into the charge set.
#[derive(Clone, Debug, PartialEq)]
pub struct ChargeSpec {
    pub name: String,
    pub magnitude: f64,
    pub pos: DVec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChargeDialog {
    /// `None` when adding a new charge, the edited charge otherwise.
    pub target: Option<ChargeId>,
    pub name: String,
    pub magnitude: String,
    pub position: String,
    pub focus: DialogField,
    /// Message from the last failed submit.
    pub error: Option<String>,
}

fn format_position(pos: DVec2) -> String {
    format!("[{}, {}]", pos.x, pos.y)
}

impl ChargeDialog {
    /// Dialog prefilled for a +1 C charge at `pos`.
    pub fn for_new(charges: &ChargeSet, pos: DVec2) -> Self {
        Self {
            target: None,
            name: charges.default_name(),
            magnitude: "1".to_string(),
            position: format_position(pos),
            focus: DialogField::Name,
            error: None,
        }
    }

    pub fn for_existing(charge: &Charge) -> Self {
        Self {
            target: Some(charge.id),
            name: charge.name.clone(),
            magnitude: charge.magnitude.to_string(),
            position: format_position(charge.pos),
            focus: DialogField::Name,
            error: None,
        }
    }

    pub fn field(&self, field: DialogField) -> &str {
        match field {
            DialogField::Name => &self.name,
            DialogField::Magnitude => &self.magnitude,
            DialogField::Position => &self.position,
        }
    }

    pub fn field_mut(&mut self, field: DialogField) -> &mut String {
        match field {
            DialogField::Name => &mut self.name,
            DialogField::Magnitude => &mut self.magnitude,
            DialogField::Position => &mut self.position,
        }
    }

    /// Append a typed character to the focused field.
    pub fn type_char(&mut self, ch: char) {
        let focus = self.focus;
        self.field_mut(focus).push(ch);
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.field_mut(focus).pop();
    }

    pub fn parse(&self) -> Result<ChargeSpec, ExprError> {
        Ok(ChargeSpec {
            name: self.name.clone(),
            magnitude: expr::parse_magnitude(&self.magnitude)?,
            pos: expr::parse_position(&self.position)?,
        })
    }
}
