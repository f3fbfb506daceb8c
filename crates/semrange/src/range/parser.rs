//! Recursive descent parser for range expressions
//!
//! ```text
//! rangeSet    := range ("||" range)* | <empty>
//! range       := basicRange (WS+ basicRange)*
//! basicRange  := comparator | hyphenRange | tildeRange | caretRange | partial
//! comparator  := ("<" | "<=" | ">" | ">=" | "=") WS* partial
//! hyphenRange := partial WS+ "-" WS+ partial
//! tildeRange  := ("~" | "~>") WS* partial
//! caretRange  := "^" WS* partial
//! ```

use thiserror::Error;

use super::partial::{PartialVersion, PartialVersionError};
use super::range_set::{Atom, Clause, RangeSet};
use super::Operator;

/// Error type for range parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeParseError {
    #[error("Could not parse range \"{range}\": unexpected end of input")]
    UnexpectedEnd { range: String },
    #[error("Could not parse range \"{range}\": unexpected '{found}' at position {position}")]
    UnexpectedChar { range: String, position: usize, found: char },
    #[error("Could not parse range \"{range}\": {source}")]
    InvalidPartial {
        range: String,
        #[source]
        source: PartialVersionError,
    },
}

/// Parser for node-style range expressions.
///
/// Parsing never looks at a candidate version; the resulting [`RangeSet`]
/// can be evaluated against any number of versions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeParser;

impl RangeParser {
    /// Create a new range parser
    pub fn new() -> Self {
        RangeParser
    }

    /// Parse a range expression. Empty or all-whitespace input matches everything.
    pub fn parse(&self, range: &str) -> Result<RangeSet, RangeParseError> {
        let mut scanner = Scanner::new(range);
        scanner.skip_whitespace();
        if scanner.at_end() {
            return Ok(RangeSet::any());
        }

        let mut clauses = Vec::new();
        loop {
            clauses.push(scanner.clause()?);
            if !scanner.eat("||") {
                break;
            }
        }

        match scanner.peek() {
            None => Ok(RangeSet::new(clauses)),
            Some(found) => Err(scanner.unexpected(found)),
        }
    }
}

fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r'
}

struct Scanner<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_byte(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.rest().starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    /// Skip whitespace, returning how many bytes were skipped
    fn skip_whitespace(&mut self) -> usize {
        let start = self.pos;
        while self.peek_byte().is_some_and(is_whitespace) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn unexpected(&self, found: char) -> RangeParseError {
        RangeParseError::UnexpectedChar {
            range: self.input.to_string(),
            position: self.pos,
            found,
        }
    }

    fn unexpected_here(&self) -> RangeParseError {
        match self.peek() {
            Some(found) => self.unexpected(found),
            None => RangeParseError::UnexpectedEnd {
                range: self.input.to_string(),
            },
        }
    }

    /// Atoms up to the next `||` or the end of input
    fn clause(&mut self) -> Result<Clause, RangeParseError> {
        let mut atoms = Vec::new();
        loop {
            self.skip_whitespace();
            if self.at_end() || self.rest().starts_with("||") {
                break;
            }
            atoms.push(self.basic_range()?);
        }

        if atoms.is_empty() {
            return Err(self.unexpected_here());
        }
        Ok(Clause::new(atoms))
    }

    fn basic_range(&mut self) -> Result<Atom, RangeParseError> {
        match self.peek_byte() {
            Some(b'~') => {
                self.pos += 1;
                self.eat(">");
                self.skip_whitespace();
                Ok(Atom::Tilde(self.partial()?))
            }
            Some(b'^') => {
                self.pos += 1;
                self.skip_whitespace();
                Ok(Atom::Caret(self.partial()?))
            }
            Some(b'<' | b'>' | b'=') => {
                let operator = self.operator();
                self.skip_whitespace();
                Ok(Atom::Comparator {
                    operator,
                    partial: self.partial()?,
                })
            }
            _ => {
                let from = self.partial()?;
                if let Some(to) = self.hyphen_tail()? {
                    return Ok(Atom::Hyphen { from, to });
                }
                if from.has_wildcard() {
                    Ok(Atom::Wildcard(from))
                } else {
                    Ok(Atom::Bare(from))
                }
            }
        }
    }

    fn operator(&mut self) -> Operator {
        if self.eat("<=") {
            Operator::LessThanOrEqual
        } else if self.eat(">=") {
            Operator::GreaterThanOrEqual
        } else if self.eat("<") {
            Operator::LessThan
        } else if self.eat(">") {
            Operator::GreaterThan
        } else {
            self.pos += 1;
            Operator::Equal
        }
    }

    /// The ` - to` part of a hyphen range, if the input continues with one.
    /// Leaves the position untouched otherwise.
    fn hyphen_tail(&mut self) -> Result<Option<PartialVersion>, RangeParseError> {
        let start = self.pos;
        if self.skip_whitespace() > 0 && self.eat("-") && self.skip_whitespace() > 0 {
            return self.partial().map(Some);
        }
        self.pos = start;
        Ok(None)
    }

    /// A partial version token, ending at whitespace, `|` or end of input
    fn partial(&mut self) -> Result<PartialVersion, RangeParseError> {
        let start = self.pos;
        while self.peek_byte().is_some_and(|b| !is_whitespace(b) && b != b'|') {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(self.unexpected_here());
        }

        let token = &self.input[start..self.pos];
        PartialVersion::parse(token).map_err(|source| RangeParseError::InvalidPartial {
            range: self.input.to_string(),
            source,
        })
    }
}
