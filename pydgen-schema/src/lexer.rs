//! SDL tokenizer.
//!
//! Commas, whitespace and `#` comments are insignificant in GraphQL and
//! are skipped here, so the parser only sees meaningful tokens.

use crate::error::{ParseError, Position};
use logos::{Lexer, Logos};
use std::fmt;
use std::ops::Range;

/// GraphQL SDL tokens.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n,]+")]
#[logos(skip r"#[^\r\n]*")]
pub enum Token {
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token(":")]
    Colon,
    #[token("!")]
    Bang,
    #[token("=")]
    Equals,
    #[token("@")]
    At,
    #[token("|")]
    Pipe,
    #[token("&")]
    Amp,
    #[token("$")]
    Dollar,
    #[token("...")]
    Spread,

    #[regex(r"[_A-Za-z][_0-9A-Za-z]*", |lex| lex.slice().to_string())]
    Name(String),

    #[regex(r"-?(0|[1-9][0-9]*)", |lex| lex.slice().to_string())]
    Int(String),

    #[regex(
        r"-?(0|[1-9][0-9]*)(\.[0-9]+([eE][+-]?[0-9]+)?|[eE][+-]?[0-9]+)",
        |lex| lex.slice().to_string()
    )]
    Float(String),

    #[regex(r#""([^"\\\r\n]|\\.)*""#, lex_string)]
    String(String),

    #[token("\"\"\"", lex_block_string)]
    BlockString(String),
}

impl Token {
    /// Returns true if this token is the given name.
    #[must_use]
    pub fn is_name(&self, keyword: &str) -> bool {
        matches!(self, Self::Name(name) if name == keyword)
    }

    /// Returns true if this token can start a description.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_) | Self::BlockString(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BraceOpen => f.write_str("{"),
            Self::BraceClose => f.write_str("}"),
            Self::ParenOpen => f.write_str("("),
            Self::ParenClose => f.write_str(")"),
            Self::BracketOpen => f.write_str("["),
            Self::BracketClose => f.write_str("]"),
            Self::Colon => f.write_str(":"),
            Self::Bang => f.write_str("!"),
            Self::Equals => f.write_str("="),
            Self::At => f.write_str("@"),
            Self::Pipe => f.write_str("|"),
            Self::Amp => f.write_str("&"),
            Self::Dollar => f.write_str("$"),
            Self::Spread => f.write_str("..."),
            Self::Name(name) => f.write_str(name),
            Self::Int(raw) | Self::Float(raw) => f.write_str(raw),
            Self::String(value) => write!(f, "{value:?}"),
            Self::BlockString(_) => f.write_str("\"\"\"...\"\"\""),
        }
    }
}

/// Token with its byte span in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// Token.
    pub token: Token,
    /// Byte range in the source.
    pub span: Range<usize>,
}

/// Tokenizes an SDL document.
///
/// # Errors
/// Returns `ParseError::UnexpectedCharacter` at the first character
/// sequence that is not a valid token (including unterminated strings).
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();

    for (result, span) in Token::lexer(source).spanned() {
        match result {
            Ok(token) => tokens.push(Spanned { token, span }),
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter {
                    text: source[span.clone()].to_string(),
                    position: Position::from_offset(source, span.start),
                });
            }
        }
    }

    Ok(tokens)
}

fn lex_string(lex: &mut Lexer<Token>) -> Option<String> {
    let slice = lex.slice();
    unescape(&slice[1..slice.len() - 1])
}

fn unescape(inner: &str) -> Option<String> {
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next()? {
            '"' => result.push('"'),
            '\\' => result.push('\\'),
            '/' => result.push('/'),
            'b' => result.push('\u{0008}'),
            'f' => result.push('\u{000C}'),
            'n' => result.push('\n'),
            'r' => result.push('\r'),
            't' => result.push('\t'),
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() != 4 {
                    return None;
                }
                let code = u32::from_str_radix(&hex, 16).ok()?;
                result.push(char::from_u32(code)?);
            }
            _ => return None,
        }
    }

    Some(result)
}

fn lex_block_string(lex: &mut Lexer<Token>) -> Option<String> {
    let remainder = lex.remainder();
    let mut raw = String::new();
    let mut idx = 0;

    while idx < remainder.len() {
        let rest = &remainder[idx..];
        if rest.starts_with("\\\"\"\"") {
            raw.push_str("\"\"\"");
            idx += 4;
        } else if rest.starts_with("\"\"\"") {
            lex.bump(idx + 3);
            return Some(block_string_value(&raw));
        } else {
            let ch = rest.chars().next()?;
            raw.push(ch);
            idx += ch.len_utf8();
        }
    }

    None
}

/// Applies the block string indentation rules: common indentation of all
/// lines but the first is removed, then leading and trailing blank lines
/// are dropped.
fn block_string_value(raw: &str) -> String {
    let lines: Vec<&str> = raw.split("\r\n").flat_map(|l| l.split(['\n', '\r'])).collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
            (indent < line.len()).then_some(indent)
        })
        .min()
        .unwrap_or(0);

    let mut dedented: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                return *line;
            }
            let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
            &line[indent.min(common_indent)..]
        })
        .collect();

    while dedented.first().is_some_and(|l| l.trim().is_empty()) {
        dedented.remove(0);
    }
    while dedented.last().is_some_and(|l| l.trim().is_empty()) {
        dedented.pop();
    }

    dedented.join("\n")
}
