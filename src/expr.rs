//! Constrained numeric expression parser for typed charge values.
//!
//! Accepts decimal literals (with optional fraction and exponent), the
//! binary operators `+ - * /`, unary signs and parentheses. Nothing else is
//! evaluated: no identifiers, no function calls.
//!
//! Grammar:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := ('+' | '-') unary | atom
//! atom   := number | '(' expr ')'
//! ```

use thiserror::Error;
use ultraviolet::DVec2;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExprError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("unbalanced parenthesis at position {pos}")]
    UnbalancedParen { pos: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    NotFinite,

    #[error("expected two coordinates, found {0}")]
    Coordinates(usize),
}

/// Evaluate an arithmetic expression.
pub fn evaluate(text: &str) -> Result<f64, ExprError> {
    let mut parser = Parser::new(text);
    parser.skip_ws();
    if parser.peek().is_none() {
        return Err(ExprError::Empty);
    }
    let value = parser.expr()?;
    parser.skip_ws();
    if let Some((pos, ch)) = parser.peek() {
        return Err(if ch == ')' {
            ExprError::UnbalancedParen { pos }
        } else {
            ExprError::UnexpectedChar { ch, pos }
        });
    }
    if !value.is_finite() {
        return Err(ExprError::NotFinite);
    }
    Ok(value)
}

/// Parse the magnitude field of the charge dialog.
///
/// An empty field means a neutral charge and a field holding only a trailing
/// minus sign (the user started typing a negative value) means -1 C.
pub fn parse_magnitude(text: &str) -> Result<f64, ExprError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    if trimmed.ends_with('-') {
        return Ok(-1.0);
    }
    evaluate(trimmed)
}

/// Parse a position written as `[x, y]`, `(x, y)` or `x, y`.
/// Each coordinate may itself be an expression.
pub fn parse_position(text: &str) -> Result<DVec2, ExprError> {
    let trimmed = text.trim();
    let inner = strip_brackets(trimmed, '[', ']')
        .or_else(|| strip_brackets(trimmed, '(', ')'))
        .unwrap_or(trimmed);

    let parts: Vec<&str> = split_top_level(inner);
    if parts.len() != 2 {
        return Err(ExprError::Coordinates(parts.len()));
    }
    Ok(DVec2::new(evaluate(parts[0])?, evaluate(parts[1])?))
}

fn strip_brackets(text: &str, open: char, close: char) -> Option<&str> {
    text.strip_prefix(open)?.strip_suffix(close)
}

/// Split on commas that are not nested inside parentheses.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

struct Parser {
    chars: Vec<(usize, char)>,
    idx: usize,
}

impl Parser {
    fn new(src: &str) -> Self {
        Self {
            chars: src.char_indices().collect(),
            idx: 0,
        }
    }

    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.idx).copied()
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        let c = self.peek();
        if c.is_some() {
            self.idx += 1;
        }
        c
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some((_, c)) if c.is_whitespace()) {
            self.idx += 1;
        }
    }

    fn expr(&mut self) -> Result<f64, ExprError> {
        let mut value = self.term()?;
        loop {
            self.skip_ws();
            match self.peek() {
                Some((_, '+')) => {
                    self.bump();
                    value += self.term()?;
                }
                Some((_, '-')) => {
                    self.bump();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, ExprError> {
        let mut value = self.unary()?;
        loop {
            self.skip_ws();
            match self.peek() {
                Some((_, '*')) => {
                    self.bump();
                    value *= self.unary()?;
                }
                Some((_, '/')) => {
                    self.bump();
                    let rhs = self.unary()?;
                    if rhs == 0.0 {
                        return Err(ExprError::DivisionByZero);
                    }
                    value /= rhs;
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> Result<f64, ExprError> {
        self.skip_ws();
        match self.peek() {
            Some((_, '-')) => {
                self.bump();
                Ok(-self.unary()?)
            }
            Some((_, '+')) => {
                self.bump();
                self.unary()
            }
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<f64, ExprError> {
        self.skip_ws();
        match self.peek() {
            None => Err(ExprError::UnexpectedEnd),
            Some((open, '(')) => {
                self.bump();
                let value = self.expr()?;
                self.skip_ws();
                match self.bump() {
                    Some((_, ')')) => Ok(value),
                    Some((pos, ch)) => Err(ExprError::UnexpectedChar { ch, pos }),
                    None => Err(ExprError::UnbalancedParen { pos: open }),
                }
            }
            Some((_, c)) if c.is_ascii_digit() || c == '.' => self.number(),
            Some((pos, ')')) => Err(ExprError::UnbalancedParen { pos }),
            Some((pos, ch)) => Err(ExprError::UnexpectedChar { ch, pos }),
        }
    }

    fn number(&mut self) -> Result<f64, ExprError> {
        let mut literal = String::new();
        let mut digits = 0;
        while let Some((_, c)) = self.peek() {
            if c.is_ascii_digit() {
                digits += 1;
            } else if c != '.' {
                break;
            }
            literal.push(c);
            self.bump();
        }

        // Optional exponent, only taken when followed by digits.
        if let Some((_, 'e' | 'E')) = self.peek() {
            let save = self.idx;
            let mut exp = String::from("e");
            self.bump();
            if let Some((_, sign @ ('+' | '-'))) = self.peek() {
                exp.push(sign);
                self.bump();
            }
            let mut exp_digits = 0;
            while let Some((_, c)) = self.peek() {
                if !c.is_ascii_digit() {
                    break;
                }
                exp.push(c);
                exp_digits += 1;
                self.bump();
            }
            if exp_digits == 0 {
                self.idx = save;
            } else {
                literal.push_str(&exp);
            }
        }

        if digits == 0 {
            let (pos, ch) = self.chars[self.idx.saturating_sub(1)];
            return Err(ExprError::UnexpectedChar { ch, pos });
        }
        literal.parse::<f64>().map_err(|_| {
            let (pos, ch) = self.chars[self.idx.saturating_sub(1)];
            ExprError::UnexpectedChar { ch, pos }
        })
    }
}
