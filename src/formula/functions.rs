use super::{eval, scan, truthy, FormulaError};
use crate::core_types::Player;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, Display)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Function {
    Min,
    Max,
    If,
    Pow,
    #[strum(to_string = "AVG", serialize = "AVERAGE")]
    Avg,
}

impl Function {
    fn apply(self, player: &Player, args: &[&str]) -> Result<f64, FormulaError> {
        match self {
            Self::Min => Ok(eval_all(player, args)?
                .into_iter()
                .reduce(f64::min)
                .unwrap_or(0.0)),
            Self::Max => Ok(eval_all(player, args)?
                .into_iter()
                .reduce(f64::max)
                .unwrap_or(0.0)),
            Self::Avg => {
                let values = eval_all(player, args)?;
                if values.is_empty() {
                    return Ok(0.0);
                }
                Ok(values.iter().sum::<f64>() / values.len() as f64)
            }
            Self::If => {
                self.expect_arity(args, 3)?;
                let branch = if truthy(eval(player, args[0])?) {
                    args[1]
                } else {
                    args[2]
                };
                eval(player, branch)
            }
            Self::Pow => {
                self.expect_arity(args, 2)?;
                Ok(eval(player, args[0])?.powf(eval(player, args[1])?))
            }
        }
    }

    fn expect_arity(self, args: &[&str], expected: usize) -> Result<(), FormulaError> {
        if args.len() != expected {
            return Err(FormulaError::Arity {
                function: self,
                expected,
                found: args.len(),
            });
        }
        Ok(())
    }
}

fn eval_all(player: &Player, args: &[&str]) -> Result<Vec<f64>, FormulaError> {
    args.iter().map(|arg| eval(player, arg)).collect()
}

/// Last resort for a trimmed operand: a call `NAME(args…)`, or an
/// unresolved symbol, which scores 0.
pub(super) fn call(player: &Player, text: &str) -> Result<f64, FormulaError> {
    let Some(open) = text.find('(') else {
        trace!(symbol = text, "unresolved symbol scores 0");
        return Ok(0.0);
    };

    let name = text[..open].trim();
    if name.is_empty() {
        return Err(FormulaError::TrailingText(text.to_string()));
    }

    let Ok(function) = name.parse::<Function>() else {
        trace!(function = name, "unknown function scores 0");
        return Ok(0.0);
    };

    let close = scan::matching_paren(text, open)?;
    if close + 1 != text.len() {
        return Err(FormulaError::TrailingText(text.to_string()));
    }

    let args = scan::split_args(&text[open + 1..close]);
    function.apply(player, &args)
}
