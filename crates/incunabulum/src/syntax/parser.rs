//! Recursive-descent parser for one line of source

use crate::context::DEFAULT_MAX_DEPTH;
use crate::error::ParseError;

use super::{Expr, Verb};

/// Parse a complete line with the default nesting limit.
///
/// # Example
///
/// ```
/// use incunabulum::{parse, Expr, Verb};
///
/// let expr = parse("3+4+5").unwrap();
/// assert_eq!(
///     expr,
///     Expr::dyad(
///         Verb::Plus,
///         Expr::Noun(3),
///         Expr::dyad(Verb::Plus, Expr::Noun(4), Expr::Noun(5)),
///     )
/// );
/// ```
pub fn parse(src: &str) -> Result<Expr, ParseError> {
    Parser::new(src, DEFAULT_MAX_DEPTH).parse()
}

/// Parser state over a single line.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    src: &'a str,
    pos: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over `src` allowing at most `max_depth` nested expressions.
    pub fn new(src: &'a str, max_depth: usize) -> Self {
        Self {
            src,
            pos: 0,
            max_depth,
        }
    }

    /// Parse the whole input as one expression.
    ///
    /// # Errors
    ///
    /// Fails on empty input, unknown characters, a missing `)`, a bad
    /// assignment target, leftover input, or nesting beyond the limit.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        let expr = self.expr(0)?;
        self.skip_whitespace();
        match self.peek() {
            None => Ok(expr),
            Some(found) => Err(ParseError::UnexpectedChar {
                found,
                offset: self.pos,
            }),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Grammar Rules
    // ═══════════════════════════════════════════════════════════════════

    fn expr(&mut self, depth: usize) -> Result<Expr, ParseError> {
        if depth > self.max_depth {
            return Err(ParseError::TooDeep {
                max: self.max_depth,
                offset: self.pos,
            });
        }

        self.skip_whitespace();
        let c = self.peek().ok_or(ParseError::UnexpectedEnd {
            offset: self.pos,
        })?;

        if let Some(verb) = Verb::from_char(c) {
            self.bump(c);
            let right = self.expr(depth + 1)?;
            return Ok(Expr::monad(verb, right));
        }

        let left = self.primary(depth)?;
        self.skip_whitespace();
        let offset = self.pos;
        match self.peek() {
            None | Some(')') => Ok(left),
            Some('=') => {
                let name = match left {
                    Expr::Var(name) => name,
                    _ => return Err(ParseError::InvalidAssignTarget { offset }),
                };
                self.bump('=');
                let value = self.expr(depth + 1)?;
                Ok(Expr::assign(name, value))
            }
            Some(c) => match Verb::from_char(c) {
                Some(verb) => {
                    self.bump(c);
                    let right = self.expr(depth + 1)?;
                    Ok(Expr::dyad(verb, left, right))
                }
                None if starts_primary(c) => Err(ParseError::UnexpectedChar { found: c, offset }),
                None => Err(ParseError::UnknownVerb { found: c, offset }),
            },
        }
    }

    fn primary(&mut self, depth: usize) -> Result<Expr, ParseError> {
        let offset = self.pos;
        let c = self.peek().ok_or(ParseError::UnexpectedEnd { offset })?;
        match c {
            '0'..='9' => {
                self.bump(c);
                Ok(Expr::Noun(c as u8 - b'0'))
            }
            'a'..='z' => {
                self.bump(c);
                Ok(Expr::Var(c))
            }
            '(' => {
                self.bump(c);
                let inner = self.expr(depth + 1)?;
                self.skip_whitespace();
                if self.peek() != Some(')') {
                    return Err(ParseError::UnclosedGroup { offset });
                }
                self.bump(')');
                Ok(Expr::group(inner))
            }
            found => Err(ParseError::UnexpectedChar { found, offset }),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Cursor
    // ═══════════════════════════════════════════════════════════════════

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek().filter(|c| c.is_whitespace()) {
            self.bump(c);
        }
    }
}

fn starts_primary(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_lowercase() || c == '('
}
