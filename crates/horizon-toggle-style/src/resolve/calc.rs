//! Evaluation of resolved lengths and `calc()` expressions.
//!
//! Supports pixel lengths and plain numbers combined with `+ - * /`,
//! parentheses and nested `calc()`. Values must be `var()`-free.

use std::fmt;

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

/// A computed numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    /// A unitless number.
    Number(f32),
    /// A length in pixels.
    Px(f32),
}

impl Numeric {
    /// The pixel length, if this is one.
    pub fn as_px(self) -> Option<f32> {
        match self {
            Numeric::Px(px) => Some(px),
            Numeric::Number(_) => None,
        }
    }

    fn combine(self, op: char, rhs: Numeric) -> Option<Numeric> {
        use Numeric::{Number, Px};
        let value = match (op, self, rhs) {
            ('+', Number(a), Number(b)) => Number(a + b),
            ('+', Px(a), Px(b)) => Px(a + b),
            ('-', Number(a), Number(b)) => Number(a - b),
            ('-', Px(a), Px(b)) => Px(a - b),
            ('*', Number(a), Number(b)) => Number(a * b),
            ('*', Px(a), Number(b)) | ('*', Number(b), Px(a)) => Px(a * b),
            ('/', Number(a), Number(b)) if b != 0.0 => Number(a / b),
            ('/', Px(a), Number(b)) if b != 0.0 => Px(a / b),
            _ => return None,
        };
        Some(value)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Number(n) => write!(f, "{n}"),
            Numeric::Px(px) => write!(f, "{px}px"),
        }
    }
}

type CalcResult<'i> = Result<Numeric, CssParseError<'i, ()>>;

/// Evaluate a length, number or `calc()` expression.
///
/// Returns `None` for anything else (keywords, colors, unresolved `var()`,
/// unit mismatches).
///
/// ```
/// use horizon_toggle_style::resolve::{evaluate, Numeric};
///
/// assert_eq!(evaluate("calc(24px - calc(8px * 2))"), Some(Numeric::Px(8.0)));
/// assert_eq!(evaluate("0.5"), Some(Numeric::Number(0.5)));
/// assert_eq!(evaluate("limegreen"), None);
/// ```
pub fn evaluate(expr: &str) -> Option<Numeric> {
    let mut input = ParserInput::new(expr);
    let mut parser = Parser::new(&mut input);
    parser.parse_entirely(parse_sum).ok()
}

fn parse_sum<'i>(parser: &mut Parser<'i, '_>) -> CalcResult<'i> {
    let mut acc = parse_product(parser)?;
    while let Some(op) = next_operator(parser, &['+', '-']) {
        let rhs = parse_product(parser)?;
        acc = acc
            .combine(op, rhs)
            .ok_or_else(|| parser.new_custom_error(()))?;
    }
    Ok(acc)
}

fn parse_product<'i>(parser: &mut Parser<'i, '_>) -> CalcResult<'i> {
    let mut acc = parse_factor(parser)?;
    while let Some(op) = next_operator(parser, &['*', '/']) {
        let rhs = parse_factor(parser)?;
        acc = acc
            .combine(op, rhs)
            .ok_or_else(|| parser.new_custom_error(()))?;
    }
    Ok(acc)
}

fn parse_factor<'i>(parser: &mut Parser<'i, '_>) -> CalcResult<'i> {
    let token = parser.next()?.clone();
    match token {
        Token::Number { value, .. } => Ok(Numeric::Number(value)),
        Token::Dimension { value, ref unit, .. } if unit.eq_ignore_ascii_case("px") => {
            Ok(Numeric::Px(value))
        }
        Token::Function(ref name) if name.eq_ignore_ascii_case("calc") => {
            parser.parse_nested_block(parse_sum)
        }
        Token::ParenthesisBlock => parser.parse_nested_block(parse_sum),
        other => Err(parser.new_unexpected_token_error(other)),
    }
}

/// Consume the next token if it is one of `ops`.
fn next_operator(parser: &mut Parser<'_, '_>, ops: &[char]) -> Option<char> {
    parser
        .try_parse(|p| {
            let token = p.next()?.clone();
            match token {
                Token::Delim(c) if ops.contains(&c) => Ok(c),
                other => Err(p.new_unexpected_token_error::<()>(other)),
            }
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_and_numbers() {
        assert_eq!(evaluate("24px"), Some(Numeric::Px(24.0)));
        assert_eq!(evaluate("0"), Some(Numeric::Number(0.0)));
        assert_eq!(evaluate(" 2 "), Some(Numeric::Number(2.0)));
    }

    #[test]
    fn precedence_and_nesting() {
        assert_eq!(evaluate("calc(32px + 8px * 2 - 24px)"), Some(Numeric::Px(24.0)));
        assert_eq!(evaluate("calc((32px + 8px) * 2)"), Some(Numeric::Px(80.0)));
        assert_eq!(evaluate("calc(calc(24px - calc(8px * 2)) * 0.5)"), Some(Numeric::Px(4.0)));
        assert_eq!(evaluate("calc(12px / 4)"), Some(Numeric::Px(3.0)));
    }

    #[test]
    fn rejects_mismatched_units_and_keywords() {
        assert_eq!(evaluate("calc(24px + 1)"), None);
        assert_eq!(evaluate("calc(2px * 2px)"), None);
        assert_eq!(evaluate("calc(2px / 0)"), None);
        assert_eq!(evaluate("2em"), None);
        assert_eq!(evaluate("ease-in-out 0.2s"), None);
        assert_eq!(evaluate("calc(var(--x) * 2)"), None);
    }

    #[test]
    fn displays_css_values() {
        assert_eq!(Numeric::Px(8.0).to_string(), "8px");
        assert_eq!(Numeric::Number(0.5).to_string(), "0.5");
    }
}
