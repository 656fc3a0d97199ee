use super::FormulaError;

/// Number of precedence levels, lowest binding first.
pub const LEVELS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    ShiftLeft,
    ShiftRight,
    Less,
    Greater,
    LessEq,
    GreaterEq,
    Eq,
    NotEq,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

// Two-character tokens come first so `<=` never matches as `<`.
const TOKENS: [BinaryOp; 15] = [
    BinaryOp::Or,
    BinaryOp::And,
    BinaryOp::ShiftLeft,
    BinaryOp::ShiftRight,
    BinaryOp::LessEq,
    BinaryOp::GreaterEq,
    BinaryOp::Eq,
    BinaryOp::NotEq,
    BinaryOp::Less,
    BinaryOp::Greater,
    BinaryOp::Add,
    BinaryOp::Sub,
    BinaryOp::Mul,
    BinaryOp::Div,
    BinaryOp::Pow,
];

impl BinaryOp {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEq => "<=",
            Self::GreaterEq => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    pub const fn level(self) -> usize {
        match self {
            Self::Or => 0,
            Self::And => 1,
            Self::ShiftLeft | Self::ShiftRight => 2,
            Self::Less | Self::Greater | Self::LessEq | Self::GreaterEq => 3,
            Self::Eq | Self::NotEq => 4,
            Self::Add | Self::Sub => 5,
            Self::Mul | Self::Div => 6,
            Self::Pow => 7,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, FormulaError> {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        Ok(match self {
            Self::Or => flag(super::truthy(lhs) || super::truthy(rhs)),
            Self::And => flag(super::truthy(lhs) && super::truthy(rhs)),
            Self::ShiftLeft | Self::ShiftRight => {
                return Err(FormulaError::ReservedOperator(self.token()))
            }
            Self::Less => flag(lhs < rhs),
            Self::Greater => flag(lhs > rhs),
            Self::LessEq => flag(lhs <= rhs),
            Self::GreaterEq => flag(lhs >= rhs),
            Self::Eq => flag((lhs - rhs).abs() < super::EQUALITY_EPSILON),
            Self::NotEq => flag((lhs - rhs).abs() >= super::EQUALITY_EPSILON),
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        })
    }

    fn match_at(rest: &[u8]) -> Option<Self> {
        TOKENS
            .iter()
            .copied()
            .find(|op| rest.starts_with(op.token().as_bytes()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub op: BinaryOp,
    pub at: usize,
}

impl Split {
    pub fn operands(self, text: &str) -> (&str, &str) {
        (&text[..self.at], &text[self.at + self.op.token().len()..])
    }
}

/// Result of one depth-0 pass over a trimmed formula.
#[derive(Debug, Default)]
pub struct TopLevel {
    rightmost: [Option<Split>; LEVELS],
    /// The whole text is a single parenthesized group.
    pub wrapped: bool,
}

impl TopLevel {
    /// Right-most operator of the lowest precedence level present.
    pub fn lowest(&self) -> Option<Split> {
        self.rightmost.iter().flatten().next().copied()
    }
}

pub fn scan(text: &str) -> Result<TopLevel, FormulaError> {
    let bytes = text.as_bytes();
    let mut top = TopLevel {
        wrapped: bytes.first() == Some(&b'('),
        ..TopLevel::default()
    };
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(FormulaError::UnbalancedParens)?;
                if depth == 0 && i + 1 < bytes.len() {
                    top.wrapped = false;
                }
            }
            _ if depth > 0 => {}
            _ => {
                if let Some(op) = BinaryOp::match_at(&bytes[i..]) {
                    if !is_sign(bytes, i, op) {
                        top.rightmost[op.level()] = Some(Split { op, at: i });
                    }
                    i += op.token().len();
                    continue;
                }
            }
        }
        i += 1;
    }

    if depth != 0 {
        return Err(FormulaError::UnbalancedParens);
    }
    Ok(top)
}

/// Index of the `)` closing the `(` at `open`.
pub fn matching_paren(text: &str, open: usize) -> Result<usize, FormulaError> {
    let mut depth = 0usize;
    for (i, b) in text.bytes().enumerate().skip(open) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(FormulaError::UnbalancedParens)?;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }
    Err(FormulaError::UnbalancedParens)
}

/// Splits a function's argument region on depth-0 commas.
/// An all-whitespace region has no arguments.
pub fn split_args(inner: &str) -> Vec<&str> {
    if inner.trim().is_empty() {
        return Vec::new();
    }
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, b) in inner.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                args.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    args.push(&inner[start..]);
    args
}

pub fn parse_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let body = match bytes.first()? {
        b'-' | b'+' => &bytes[1..],
        _ => bytes,
    };
    match body.first() {
        Some(b) if b.is_ascii_digit() || *b == b'.' => text.parse().ok(),
        _ => None,
    }
}

// A `+`/`-` with no left operand is a sign, as is the exponent sign of a literal.
fn is_sign(bytes: &[u8], at: usize, op: BinaryOp) -> bool {
    if !matches!(op, BinaryOp::Add | BinaryOp::Sub) {
        return false;
    }
    let before = bytes[..at].trim_ascii_end();
    match before.last() {
        None => true,
        Some(b) if b"|&<>=!+-*/^(,".contains(b) => true,
        Some(_) => before.len() == at && is_exponent_marker(before),
    }
}

fn is_exponent_marker(before: &[u8]) -> bool {
    let Some((&marker, mantissa)) = before.split_last() else {
        return false;
    };
    if marker != b'e' && marker != b'E' {
        return false;
    }
    let run = mantissa
        .iter()
        .rev()
        .take_while(|b| b.is_ascii_digit() || **b == b'.')
        .count();
    let head = &mantissa[..mantissa.len() - run];
    let has_digit = mantissa[head.len()..].iter().any(u8::is_ascii_digit);
    let detached = head
        .last()
        .map_or(true, |b| !(b.is_ascii_alphanumeric() || *b == b'_'));
    has_digit && detached
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lowest(text: &str) -> Option<(BinaryOp, usize)> {
        scan(text).unwrap().lowest().map(|s| (s.op, s.at))
    }

    #[test]
    fn picks_rightmost_of_lowest_level() {
        assert_eq!(lowest("A - B - C"), Some((BinaryOp::Sub, 6)));
        assert_eq!(lowest("2 + 3 * 4"), Some((BinaryOp::Add, 2)));
        assert_eq!(lowest("A * B + C - D"), Some((BinaryOp::Sub, 10)));
    }

    #[test]
    fn ignores_operators_inside_parens() {
        assert_eq!(lowest("(2 + 3) * 4"), Some((BinaryOp::Mul, 8)));
        assert!(scan("(A || B)").unwrap().wrapped);
        assert!(!scan("(A) + (B)").unwrap().wrapped);
    }

    #[test]
    fn two_char_tokens_win() {
        assert_eq!(lowest("A <= B"), Some((BinaryOp::LessEq, 2)));
        assert_eq!(lowest("A == B"), Some((BinaryOp::Eq, 2)));
        assert_eq!(lowest("A << B"), Some((BinaryOp::ShiftLeft, 2)));
    }

    #[test]
    fn signs_are_not_binary() {
        assert_eq!(lowest("A * -B"), Some((BinaryOp::Mul, 2)));
        assert_eq!(lowest("-A"), None);
        assert_eq!(lowest("A + 1e-5"), Some((BinaryOp::Add, 2)));
        assert_eq!(lowest("X1e-5"), Some((BinaryOp::Sub, 3)));
    }

    #[test]
    fn rejects_unbalanced() {
        assert_eq!(scan("(A + B").unwrap_err(), FormulaError::UnbalancedParens);
        assert_eq!(scan("A + B)").unwrap_err(), FormulaError::UnbalancedParens);
    }

    #[test]
    fn splits_args_at_top_level() {
        assert_eq!(split_args("A, MAX(B, C), 2"), vec!["A", " MAX(B, C)", " 2"]);
        assert!(split_args("   ").is_empty());
        assert_eq!(split_args("1,"), vec!["1", ""]);
    }

    #[test]
    fn literals() {
        assert_eq!(parse_literal("42"), Some(42.0));
        assert_eq!(parse_literal("-0.5"), Some(-0.5));
        assert_eq!(parse_literal(".25"), Some(0.25));
        assert_eq!(parse_literal("1e3"), Some(1000.0));
        assert_eq!(parse_literal("inf"), None);
        assert_eq!(parse_literal("Speed"), None);
    }
}
