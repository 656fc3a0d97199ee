//! Formula evaluation against a player's stats.
//!
//! Formulas are evaluated straight from their text: each call trims the
//! operand, scans it once at parenthesis depth 0 and splits on the
//! right-most operator of the lowest precedence level present, which keeps
//! chains like `A - B - C` left-associative. Precedence, lowest first:
//!
//! | level | operators            |
//! |-------|----------------------|
//! | 0     | `\|\|`               |
//! | 1     | `&&`                 |
//! | 2     | `<<` `>>` (reserved) |
//! | 3     | `<` `>` `<=` `>=`    |
//! | 4     | `==` `!=`            |
//! | 5     | `+` `-`              |
//! | 6     | `*` `/`              |
//! | 7     | `^`                  |
//!
//! A leading `-`/`+` binds looser than `^` and tighter than everything
//! else, so `-2 ^ 2` is `-(2 ^ 2)` while `-2 * 3` is `(-2) * 3`.
//!
//! Operands without operators resolve as a numeric literal, a stat
//! (case-insensitive), a function call, or else 0.

pub mod functions;
pub mod scan;

pub use self::functions::Function;
use self::scan::BinaryOp;
use crate::core_types::Player;
use crate::error::{LfResult, LineupError};
use thiserror::Error;

/// `|value| > TRUTHY_THRESHOLD` counts as true for `&&`, `||` and `IF`.
pub const TRUTHY_THRESHOLD: f64 = 0.5;
pub const EQUALITY_EPSILON: f64 = 1e-6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormulaError {
    #[error("unbalanced parentheses")]
    UnbalancedParens,

    #[error("empty operand")]
    EmptyOperand,

    #[error("operator '{0}' is reserved")]
    ReservedOperator(&'static str),

    #[error("{function} expects {expected} arguments, got {found}")]
    Arity {
        function: Function,
        expected: usize,
        found: usize,
    },

    #[error("unexpected text around parentheses in '{0}'")]
    TrailingText(String),
}

pub fn evaluate(player: &Player, formula: &str) -> LfResult<f64> {
    eval(player, formula).map_err(|reason| LineupError::MalformedFormula {
        formula: formula.to_string(),
        reason,
    })
}

#[inline]
pub fn truthy(value: f64) -> bool {
    value.abs() > TRUTHY_THRESHOLD
}

fn eval(player: &Player, text: &str) -> Result<f64, FormulaError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FormulaError::EmptyOperand);
    }

    if let Some(value) = scan::parse_literal(text) {
        return Ok(value);
    }

    let top = scan::scan(text)?;
    if top.wrapped {
        return eval(player, &text[1..text.len() - 1]);
    }

    let split = top.lowest();
    if split.map_or(true, |s| s.op == BinaryOp::Pow) {
        if let Some(rest) = text.strip_prefix('-') {
            return Ok(-eval(player, rest)?);
        }
        if let Some(rest) = text.strip_prefix('+') {
            return eval(player, rest);
        }
    }

    if let Some(split) = split {
        let (lhs, rhs) = split.operands(text);
        let lhs = eval(player, lhs)?;
        let rhs = eval(player, rhs)?;
        return split.op.apply(lhs, rhs);
    }

    if let Some(value) = player.stat(text) {
        return Ok(value as f64);
    }

    functions::call(player, text)
}
