//! Turns CSS text into the owned rule AST.
//!
//! Unlike a styling engine this parser keeps what the compiler cares about
//! verbatim: the raw selector text, the raw declaration values (quotes
//! included) and the comments written inside a block.

use crate::error::{Error, Result};
use crate::style::owned_css::{OwnedDeclaration, OwnedRule, OwnedStylesheet, RuleKind};
use cssparser::{ParseError, Parser, ParserInput, Token};

/// Parse a raw CSS string into a fully-owned stylesheet, keeping source order.
pub fn parse_stylesheet(css_text: &str) -> Result<OwnedStylesheet> {
    let mut input = ParserInput::new(css_text);
    let mut parser = Parser::new(&mut input);
    let mut rules = Vec::new();

    loop {
        let state = parser.state();
        let token = match parser.next_including_whitespace_and_comments().cloned() {
            Ok(token) => token,
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_) | Token::CDO | Token::CDC => {}
            Token::Comment(body) => rules.push(OwnedRule {
                kind: RuleKind::Comment,
                selectors: Vec::new(),
                declarations: vec![OwnedDeclaration::comment(body)],
            }),
            Token::AtKeyword(name) => {
                skip_at_rule(&mut parser);
                rules.push(OwnedRule {
                    kind: RuleKind::At(name.to_string()),
                    selectors: Vec::new(),
                    declarations: Vec::new(),
                });
            }
            _ => {
                parser.reset(&state);
                rules.push(parse_style_rule(&mut parser)?);
            }
        }
    }

    log::debug!("parsed {} top-level rules", rules.len());
    Ok(OwnedStylesheet { rules })
}

/// `prelude { block }`; the prelude is kept as source text.
fn parse_style_rule<'i>(parser: &mut Parser<'i, '_>) -> Result<OwnedRule> {
    let start = parser.position();
    let location = parser.current_source_location();

    let prelude_end = loop {
        let before = parser.position();
        match parser.next_including_whitespace_and_comments() {
            Ok(Token::CurlyBracketBlock) => break before,
            Ok(_) => {}
            Err(_) => {
                return Err(Error::CssParse {
                    message: "missing `{` after selector".to_string(),
                    line: location.line + 1,
                    column: location.column,
                })
            }
        }
    };
    let selectors = split_selectors(parser.slice(start..prelude_end));

    let declarations = parser
        .parse_nested_block(parse_declaration_block)
        .map_err(|e: ParseError<'i, ()>| Error::CssParse {
            message: format!("{:?}", e.kind),
            line: e.location.line + 1,
            column: e.location.column,
        })?;

    Ok(OwnedRule {
        kind: RuleKind::Style,
        selectors,
        declarations,
    })
}

fn parse_declaration_block<'i, 't>(
    parser: &mut Parser<'i, 't>,
) -> std::result::Result<Vec<OwnedDeclaration>, ParseError<'i, ()>> {
    let mut declarations = Vec::new();

    loop {
        let token = match parser.next_including_whitespace_and_comments().cloned() {
            Ok(token) => token,
            Err(_) => break,
        };

        match token {
            Token::WhiteSpace(_) | Token::Semicolon => {}
            Token::Comment(body) => declarations.push(OwnedDeclaration::comment(body)),
            Token::Ident(name) => match parse_declaration_value(parser) {
                Some(value) => declarations.push(OwnedDeclaration::Property {
                    property: name.to_string(),
                    value,
                }),
                None => log::debug!("skipping malformed declaration `{}`", name),
            },
            Token::CurlyBracketBlock => log::debug!("skipping nested block"),
            _ => skip_to_semicolon(parser),
        }
    }

    Ok(declarations)
}

/// Reads `: value` up to the next `;` (or the end of the block).
fn parse_declaration_value(parser: &mut Parser<'_, '_>) -> Option<String> {
    loop {
        match parser.next_including_whitespace_and_comments() {
            Ok(Token::WhiteSpace(_)) | Ok(Token::Comment(_)) => {}
            Ok(Token::Colon) => break,
            Ok(Token::Semicolon) | Ok(Token::CurlyBracketBlock) | Err(_) => return None,
            Ok(_) => {
                skip_to_semicolon(parser);
                return None;
            }
        }
    }

    // Comments are cut out of the value; the text between them is kept.
    let mut value = String::new();
    let mut chunk_start = parser.position();
    loop {
        let before = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(Token::Semicolon) | Err(_) => None,
            Ok(Token::Comment(_)) => Some(true),
            Ok(_) => Some(false),
        };
        match token {
            None => {
                value.push_str(parser.slice(chunk_start..before));
                break;
            }
            Some(true) => {
                value.push_str(parser.slice(chunk_start..before));
                chunk_start = parser.position();
            }
            Some(false) => {}
        }
    }

    Some(value.trim().to_string())
}

fn skip_to_semicolon(parser: &mut Parser<'_, '_>) {
    while let Ok(token) = parser.next_including_whitespace_and_comments() {
        if matches!(token, Token::Semicolon) {
            break;
        }
    }
}

/// At-rules end at their first `;` or after their block.
fn skip_at_rule(parser: &mut Parser<'_, '_>) {
    while let Ok(token) = parser.next_including_whitespace_and_comments() {
        if matches!(token, Token::Semicolon | Token::CurlyBracketBlock) {
            break;
        }
    }
}

/// Split a selector list on top-level commas, dropping comments and
/// collapsing whitespace runs outside of quotes to a single space.
fn split_selectors(prelude: &str) -> Vec<String> {
    let mut selectors = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut chars = prelude.chars().peekable();

    while let Some(ch) = chars.next() {
        if let Some(q) = quote {
            current.push(ch);
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' => {
                quote = Some(ch);
                current.push(ch);
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            '[' | '(' => {
                depth += 1;
                current.push(ch);
            }
            ']' | ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            ',' if depth == 0 => {
                selectors.push(current.trim().to_string());
                current.clear();
            }
            c if c.is_whitespace() => {
                if !current.is_empty() && !current.ends_with(' ') {
                    current.push(' ');
                }
            }
            c => current.push(c),
        }
    }
    selectors.push(current.trim().to_string());

    selectors.retain(|selector| !selector.is_empty());
    selectors
}
