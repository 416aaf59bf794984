//! `var()` substitution.

use crate::declarations::token_name;
use crate::tokens::TokenSet;
use crate::{Result, StyleError};

/// Substitute every `var()` reference in `value`.
///
/// References nest (a token's value may itself use `var()`), and
/// `var(--name, fallback)` uses the fallback when `--name` is undefined.
///
/// # Errors
///
/// - [`StyleError::UnresolvedVariable`] for an undefined token without
///   fallback
/// - [`StyleError::VariableCycle`] when tokens reference each other in a loop
///
/// # Example
///
/// ```
/// use horizon_toggle_style::{resolve_value, TokenSet};
///
/// let tokens = TokenSet::new()
///     .with("toggle-knob-size", "24px")
///     .with("toggle-knob-radius", "calc(var(--toggle-knob-size) * 0.5)");
///
/// assert_eq!(
///     resolve_value("var(--toggle-knob-radius)", &tokens).unwrap(),
///     "calc(24px * 0.5)"
/// );
/// assert_eq!(resolve_value("var(--missing, 4px)", &tokens).unwrap(), "4px");
/// ```
pub fn resolve_value(value: &str, tokens: &TokenSet) -> Result<String> {
    let mut stack = Vec::new();
    substitute(value, tokens, &mut stack)
}

/// Resolve every token of a set against the set itself.
pub fn resolve_tokens(tokens: &TokenSet) -> Result<TokenSet> {
    tokens
        .iter()
        .map(|(name, value)| -> Result<(String, String)> {
            Ok((name.to_string(), resolve_value(value, tokens)?))
        })
        .collect()
}

/// Check if a value contains a `var()` reference.
pub fn has_var_reference(value: &str) -> bool {
    find_var(value).is_some()
}

fn substitute(value: &str, tokens: &TokenSet, stack: &mut Vec<String>) -> Result<String> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(index) = find_var(rest) {
        out.push_str(&rest[..index]);
        let args = &rest[index + "var(".len()..];
        let close = closing_paren(args)
            .ok_or_else(|| StyleError::parse(format!("unterminated var() in '{value}'"), 0, 0))?;
        let (name, fallback) = split_fallback(&args[..close]);
        out.push_str(&resolve_reference(token_name(name.trim()), fallback, tokens, stack)?);
        rest = &args[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

fn resolve_reference(
    name: &str,
    fallback: Option<&str>,
    tokens: &TokenSet,
    stack: &mut Vec<String>,
) -> Result<String> {
    if stack.iter().any(|n| n == name) {
        return Err(StyleError::VariableCycle {
            name: name.to_string(),
        });
    }

    match (tokens.get(name), fallback) {
        (Some(value), _) => {
            stack.push(name.to_string());
            let resolved = substitute(value, tokens, stack);
            stack.pop();
            resolved
        }
        (None, Some(fallback)) => substitute(fallback.trim(), tokens, stack),
        (None, None) => Err(StyleError::UnresolvedVariable {
            name: name.to_string(),
        }),
    }
}

/// Byte offset of the next `var(` that starts a function name.
fn find_var(value: &str) -> Option<usize> {
    value.match_indices("var(").map(|(i, _)| i).find(|&i| {
        value[..i]
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
    })
}

/// Offset of the parenthesis closing an already-opened group.
fn closing_paren(text: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

fn split_fallback(args: &str) -> (&str, Option<&str>) {
    let mut depth = 0usize;
    for (i, c) in args.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return (&args[..i], Some(&args[i + 1..])),
            _ => {}
        }
    }
    (args, None)
}
