//! CSS syntax parser using the `cssparser` crate.
//!
//! This module parses stylesheets into [`StyleRule`]s, bare declaration lists
//! into [`Declarations`], and selector text into [`SelectorList`]s. Values
//! are kept as raw text; substitution and evaluation happen at resolution
//! time.

use cssparser::{
    BasicParseErrorKind, Delimiter, ParseError as CssParseError, ParseErrorKind, Parser,
    ParserInput, Token,
};

use crate::declarations::Declarations;
use crate::rules::StyleRule;
use crate::selector::{
    AttributeSelector, Combinator, PseudoClass, PseudoElement, Selector, SelectorList,
    SelectorPart, TypeSelector,
};
use crate::{Result, StyleError};

const TARGET: &str = "horizon_toggle_style::parser";

type CssResult<'i, T> = std::result::Result<T, CssParseError<'i, String>>;

/// Parse a CSS stylesheet string into a list of style rules.
///
/// Rules are numbered in source order.
///
/// # Error Recovery
///
/// Parse errors in individual rules do not cause the entire parse to fail.
/// Instead, the parser:
/// 1. Logs the error via `tracing::warn!`
/// 2. Skips to the next rule (after the closing `}`)
/// 3. Continues parsing subsequent rules
///
/// Malformed declarations inside a rule are skipped the same way, up to the
/// next `;`.
///
/// # Example
///
/// ```
/// use horizon_toggle_style::parser::parse_css;
///
/// let rules = parse_css(":host { display: inline-block } ]] bad { } label { gap: 8px }").unwrap();
/// assert_eq!(rules.len(), 2);
/// ```
pub fn parse_css(css: &str) -> Result<Vec<StyleRule>> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rules = vec![];
    let mut order = 0u32;

    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }

        match parse_rule(&mut parser, order) {
            Ok(rule) => {
                rules.push(rule);
                order += 1;
            }
            Err(e) => {
                tracing::warn!(target: TARGET, "skipping rule: {}", e);
                skip_to_next_rule(&mut parser);
            }
        }
    }

    Ok(rules)
}

/// Parse a bare declaration list (`name: value; ...`).
pub fn parse_declaration_list(css: &str) -> Declarations {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    parse_declarations(&mut parser)
}

/// Collect custom property declarations (`--name: value`) from CSS text.
///
/// Text containing a `{` is parsed as a stylesheet and every rule
/// contributes; anything else is parsed as a declaration list. Other
/// properties are skipped with a warning.
pub fn parse_custom_properties(css: &str) -> Result<Vec<(String, String)>> {
    let blocks = if css.contains('{') {
        parse_css(css)?
            .into_iter()
            .map(|rule| rule.declarations)
            .collect()
    } else {
        vec![parse_declaration_list(css)]
    };

    let mut properties = Vec::new();
    for decls in &blocks {
        for decl in decls.iter() {
            if decl.is_custom_property() {
                properties.push((decl.name.clone(), decl.value.clone()));
            } else {
                tracing::warn!(
                    target: TARGET,
                    property = %decl.name,
                    "ignoring non-custom property in token overrides"
                );
            }
        }
    }
    Ok(properties)
}

/// Parse a comma-separated selector list.
pub fn parse_selector_list(text: &str) -> Result<SelectorList> {
    let mut input = ParserInput::new(text);
    let mut parser = Parser::new(&mut input);
    parser
        .parse_entirely(parse_selectors)
        .map_err(|e| StyleError::invalid_selector(text.trim(), describe(&e)))
}

/// Parse a single CSS rule: selector { declarations }
fn parse_rule(parser: &mut Parser<'_, '_>, order: u32) -> Result<StyleRule> {
    let start = parser.position();
    let selectors = parser
        .parse_until_before(Delimiter::CurlyBracketBlock, parse_selectors)
        .map_err(|e| StyleError::invalid_selector(parser.slice_from(start).trim(), describe(&e)))?;

    let location = parser.current_source_location();
    match parser.next() {
        Ok(Token::CurlyBracketBlock) => {}
        _ => {
            return Err(StyleError::parse(
                "Expected '{' after selector",
                location.line + 1,
                location.column,
            ));
        }
    }

    let declarations = parser
        .parse_nested_block(|block| Ok::<_, CssParseError<'_, ()>>(parse_declarations(block)))
        .map_err(|e| {
            StyleError::parse(
                format!("Failed to parse declaration block: {:?}", e.kind),
                e.location.line + 1,
                e.location.column,
            )
        })?;

    Ok(StyleRule::new(selectors, declarations, order))
}

/// Parse declarations until the parser is exhausted.
fn parse_declarations(parser: &mut Parser<'_, '_>) -> Declarations {
    let mut decls = Declarations::new();

    loop {
        parser.skip_whitespace();
        if parser.is_exhausted() {
            break;
        }

        let location = parser.current_source_location();
        let name = match parser.next() {
            Ok(Token::Semicolon) => continue,
            Ok(Token::Ident(name)) => name.to_string(),
            Ok(token) => {
                let message = format!("expected property name, found {:?}", token);
                tracing::warn!(target: TARGET, line = location.line + 1, "{}", message);
                skip_declaration(parser);
                continue;
            }
            Err(_) => break,
        };

        if parser.expect_colon().is_err() {
            tracing::warn!(target: TARGET, property = %name, "expected ':' after property name");
            skip_declaration(parser);
            continue;
        }

        let start = parser.position();
        let _ = parser.parse_until_before(Delimiter::Semicolon, |p| {
            while p.next().is_ok() {}
            Ok::<_, CssParseError<'_, ()>>(())
        });
        let value = parser.slice_from(start).trim().to_string();
        let _ = parser.try_parse(|p| p.expect_semicolon());

        if value.is_empty() {
            tracing::warn!(target: TARGET, property = %name, "empty property value");
            continue;
        }
        decls.insert(&name, value);
    }

    decls
}

fn parse_selectors<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, SelectorList> {
    let selectors = parser.parse_comma_separated(parse_selector)?;
    Ok(SelectorList(selectors))
}

/// Parse one complex selector (compounds joined by combinators).
fn parse_selector<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, Selector> {
    let mut parts = vec![];
    let mut combinators = vec![];
    let mut current = SelectorPart::default();
    let mut pending: Option<Combinator> = None;

    loop {
        let token = match parser.next_including_whitespace() {
            Ok(t) => t.clone(),
            Err(_) => break,
        };

        let combinator = match token {
            Token::WhiteSpace(_) => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                    pending = Some(Combinator::Descendant);
                }
                continue;
            }
            Token::Delim('>') => Some(Combinator::Child),
            Token::Delim('+') => Some(Combinator::AdjacentSibling),
            Token::Delim('~') => Some(Combinator::GeneralSibling),
            _ => None,
        };

        if let Some(combinator) = combinator {
            if !current.is_empty() {
                parts.push(std::mem::take(&mut current));
            } else if parts.is_empty()
                || pending.is_some_and(|p| p != Combinator::Descendant)
            {
                return Err(parser.new_custom_error(format!("misplaced combinator {:?}", combinator)));
            }
            pending = Some(combinator);
            continue;
        }

        if current.is_empty() && !parts.is_empty() {
            combinators.push(pending.take().unwrap_or(Combinator::Descendant));
        }
        parse_simple(parser, token, &mut current)?;
    }

    if !current.is_empty() {
        parts.push(current);
    } else if pending.is_some_and(|p| p != Combinator::Descendant) {
        return Err(parser.new_custom_error("selector ends with a combinator".to_string()));
    }
    if parts.is_empty() {
        return Err(parser.new_custom_error("empty selector".to_string()));
    }

    Ok(Selector { parts, combinators })
}

/// Parse a compound selector (the argument of `:not()` and `:host()`).
fn parse_compound<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, SelectorPart> {
    let mut part = SelectorPart::default();
    parser.skip_whitespace();
    loop {
        let token = match parser.next_including_whitespace() {
            Ok(Token::WhiteSpace(_)) => continue,
            Ok(t) => t.clone(),
            Err(_) => break,
        };
        parse_simple(parser, token, &mut part)?;
    }
    if part.is_empty() {
        return Err(parser.new_custom_error("empty compound selector".to_string()));
    }
    Ok(part)
}

/// Add one simple selector, starting at `token`, to `part`.
fn parse_simple<'i>(
    parser: &mut Parser<'i, '_>,
    token: Token<'i>,
    part: &mut SelectorPart,
) -> CssResult<'i, ()> {
    if part.pseudo_element.is_some() {
        return Err(parser.new_custom_error("nothing may follow a pseudo-element".to_string()));
    }

    match token {
        Token::Ident(name) => {
            if !part.is_empty() {
                return Err(parser.new_custom_error(format!("type selector '{}' must come first", name)));
            }
            part.type_selector = Some(TypeSelector::Type(name.to_ascii_lowercase()));
        }
        Token::Delim('*') => {
            if !part.is_empty() {
                return Err(parser.new_custom_error("'*' must come first".to_string()));
            }
            part.type_selector = Some(TypeSelector::Universal);
        }
        Token::Delim('.') => {
            let class = parser.expect_ident()?;
            part.classes.push(class.to_string());
        }
        Token::IDHash(id) | Token::Hash(id) => {
            part.id = Some(id.to_string());
        }
        Token::SquareBracketBlock => {
            let attribute = parser.parse_nested_block(parse_attribute)?;
            part.attributes.push(attribute);
        }
        Token::Colon => parse_pseudo(parser, part)?,
        other => return Err(parser.new_unexpected_token_error(other)),
    }
    Ok(())
}

fn parse_pseudo<'i>(parser: &mut Parser<'i, '_>, part: &mut SelectorPart) -> CssResult<'i, ()> {
    let token = parser.next_including_whitespace()?.clone();
    match token {
        Token::Ident(name) if name.eq_ignore_ascii_case("checked") => {
            part.pseudo_classes.push(PseudoClass::Checked);
        }
        Token::Ident(name) if name.eq_ignore_ascii_case("root") => {
            part.pseudo_classes.push(PseudoClass::Root);
        }
        Token::Ident(name) if name.eq_ignore_ascii_case("host") => {
            part.pseudo_classes.push(PseudoClass::Host(None));
        }
        Token::Function(name) if name.eq_ignore_ascii_case("host") => {
            let arg = parser.parse_nested_block(parse_compound)?;
            part.pseudo_classes.push(PseudoClass::Host(Some(Box::new(arg))));
        }
        Token::Function(name) if name.eq_ignore_ascii_case("not") => {
            let arg = parser.parse_nested_block(parse_compound)?;
            part.pseudo_classes.push(PseudoClass::Not(Box::new(arg)));
        }
        Token::Colon => {
            let element = parser.next_including_whitespace()?.clone();
            match element {
                Token::Function(name) if name.eq_ignore_ascii_case("part") => {
                    let part_name = parser.parse_nested_block(|p| {
                        let name = p.expect_ident()?.to_string();
                        Ok::<_, CssParseError<'i, String>>(name)
                    })?;
                    part.pseudo_element = Some(PseudoElement::Part(part_name));
                }
                other => {
                    return Err(parser.new_custom_error(format!("unsupported pseudo-element {:?}", other)));
                }
            }
        }
        other => {
            return Err(parser.new_custom_error(format!("unsupported pseudo-class {:?}", other)));
        }
    }
    Ok(())
}

fn parse_attribute<'i>(parser: &mut Parser<'i, '_>) -> CssResult<'i, AttributeSelector> {
    let name = parser.expect_ident()?.to_ascii_lowercase();
    if parser.is_exhausted() {
        return Ok(AttributeSelector { name, value: None });
    }
    parser.expect_delim('=')?;
    let value = parser.expect_ident_or_string()?.to_string();
    Ok(AttributeSelector {
        name,
        value: Some(value),
    })
}

fn describe(error: &CssParseError<'_, String>) -> String {
    let message = match &error.kind {
        ParseErrorKind::Custom(message) => message.clone(),
        ParseErrorKind::Basic(BasicParseErrorKind::UnexpectedToken(token)) => {
            format!("unexpected token {:?}", token)
        }
        ParseErrorKind::Basic(BasicParseErrorKind::EndOfInput) => "unexpected end of input".to_string(),
        ParseErrorKind::Basic(other) => format!("{:?}", other),
    };
    format!("{} (column {})", message, error.location.column)
}

/// Skip to the next rule after an error.
fn skip_to_next_rule(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::CurlyBracketBlock) => {
                let _ = parser.parse_nested_block(|p| {
                    while p.next().is_ok() {}
                    Ok::<_, CssParseError<'_, ()>>(())
                });
                return;
            }
            Ok(Token::CloseCurlyBracket) | Err(_) => return,
            _ => {}
        }
    }
}

/// Skip to the end of the current declaration.
fn skip_declaration(parser: &mut Parser<'_, '_>) {
    loop {
        match parser.next() {
            Ok(Token::Semicolon) | Err(_) => return,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_rule() {
        let rules = parse_css(":host { display: inline-block; }").unwrap();

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selectors.to_string(), ":host");
        assert_eq!(rules[0].declarations.get("display"), Some("inline-block"));
    }

    #[test]
    fn values_are_kept_verbatim() {
        let css = "[part=knob] { box-shadow: inset 0 1px 1px #fff8, 0 2px 4px #0006; \
                   left: calc(var(--toggle-track-width) + var(--toggle-track-inset) * 2) }";
        let rules = parse_css(css).unwrap();
        let decls = &rules[0].declarations;

        assert_eq!(decls.get("box-shadow"), Some("inset 0 1px 1px #fff8, 0 2px 4px #0006"));
        assert_eq!(
            decls.get("left"),
            Some("calc(var(--toggle-track-width) + var(--toggle-track-inset) * 2)")
        );
    }

    #[test]
    fn selector_lists_and_combinators() {
        let list =
            parse_selector_list("input:not(:checked) + * + * > [name=on], input:checked ~ div").unwrap();

        assert_eq!(list.0.len(), 2);
        assert_eq!(
            list.0[0].combinators,
            vec![
                Combinator::AdjacentSibling,
                Combinator::AdjacentSibling,
                Combinator::Child
            ]
        );
        assert_eq!(list.0[1].combinators, vec![Combinator::GeneralSibling]);
        assert_eq!(list.to_string(), "input:not(:checked) + * + * > [name=on], input:checked ~ div");
    }

    #[test]
    fn host_and_part_selectors() {
        let list = parse_selector_list(":host::part(container), :host([disabled]) label").unwrap();

        assert!(list.0[0].targets_part());
        assert_eq!(list.0[1].combinators, vec![Combinator::Descendant]);
        assert_eq!(list.to_string(), ":host::part(container), :host([disabled]) label");
    }

    #[test]
    fn invalid_selectors_are_rejected() {
        for bad in ["", "> div", "div >", "div:hover", "::before", "[part=]"] {
            assert!(
                matches!(parse_selector_list(bad), Err(StyleError::InvalidSelector { .. })),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn malformed_rules_are_skipped() {
        let css = "div:hover { color: red } label { gap: 8px; : nope; height 3px; width: 2px }";
        let rules = parse_css(css).unwrap();

        assert_eq!(rules.len(), 1);
        let decls = &rules[0].declarations;
        assert_eq!(decls.get("gap"), Some("8px"));
        assert_eq!(decls.get("width"), Some("2px"));
        assert_eq!(decls.len(), 2);
    }

    #[test]
    fn custom_properties_from_declaration_list() {
        let props = parse_custom_properties("--toggle-gap: 4px; display: none; --toggle-on-color: teal").unwrap();
        assert_eq!(
            props,
            vec![
                ("--toggle-gap".to_string(), "4px".to_string()),
                ("--toggle-on-color".to_string(), "teal".to_string()),
            ]
        );
    }
}
