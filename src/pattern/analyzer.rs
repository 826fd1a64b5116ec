//! Placeholder analysis for scan patterns
//!
//! A single left-to-right pass over the token stream recognizes `{}` and
//! `{%d}`-style placeholders, validates their syntax and records their byte
//! spans. Analysis never looks at source text; a malformed pattern is
//! rejected here, before any data is processed.

use std::fmt;

use serde::Serialize;

use crate::error::ScanError;
use crate::pattern::lexer::{self, Token};

/// Type constraint attached to a placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Specifier {
    /// `%d` - signed integer
    Decimal,
    /// `%u` - unsigned integer
    Unsigned,
    /// `%f` - floating point
    Float,
    /// `%s` - text
    Text,
}

impl Specifier {
    /// Map a specifier character to its tag
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'd' => Some(Specifier::Decimal),
            'u' => Some(Specifier::Unsigned),
            'f' => Some(Specifier::Float),
            's' => Some(Specifier::Text),
            _ => None,
        }
    }

    /// The character this specifier is written as in a pattern
    pub fn letter(self) -> char {
        match self {
            Specifier::Decimal => 'd',
            Specifier::Unsigned => 'u',
            Specifier::Float => 'f',
            Specifier::Text => 's',
        }
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.letter())
    }
}

/// A single placeholder: the byte offsets of its bounding braces plus the
/// optional specifier between them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    /// Byte offset of the opening `{`
    pub open: usize,
    /// Byte offset of the closing `}`
    pub close: usize,
    /// `None` for a bare `{}`
    pub specifier: Option<Specifier>,
}

/// A validated pattern, reusable across any number of scans
///
/// Holds the raw pattern text and the ordered placeholder list. Placeholder
/// spans are strictly increasing and non-overlapping, with
/// `open < close < text.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    text: String,
    placeholders: Vec<Placeholder>,
}

impl CompiledPattern {
    /// The raw pattern text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The ordered placeholder list
    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }

    /// Literal text strictly between the close of placeholder `index - 1`
    /// (or the pattern start for the first placeholder) and the open of
    /// placeholder `index`
    pub(crate) fn leading_separator(&self, index: usize) -> &str {
        let from = if index == 0 {
            0
        } else {
            self.placeholders[index - 1].close + 1
        };
        &self.text[from..self.placeholders[index].open]
    }

    /// Literal text strictly between the close of placeholder `index` and the
    /// open of placeholder `index + 1` (or the pattern end for the last one)
    pub(crate) fn trailing_separator(&self, index: usize) -> &str {
        let to = self
            .placeholders
            .get(index + 1)
            .map_or(self.text.len(), |next| next.open);
        &self.text[self.placeholders[index].close + 1..to]
    }

    /// True when the placeholder's closing brace is the pattern's final byte
    pub(crate) fn closes_at_end(&self, index: usize) -> bool {
        self.placeholders[index].close + 1 == self.text.len()
    }
}

/// Analyzer state between tokens
enum State {
    /// Copying literal text; `{` opens a placeholder
    Literal,
    /// Just saw `{`; expecting `%` or an immediate `}`
    AfterOpenBrace { open: usize },
    /// Just saw `{%`; expecting a specifier character
    AfterPercent { open: usize },
    /// Specifier consumed; expecting `}`
    AwaitingClose { open: usize, specifier: Specifier },
}

/// Analyze a pattern into a [`CompiledPattern`]
///
/// An empty pattern, or one containing no `{`, compiles to zero placeholders.
/// Re-compiling the same text always yields an identical descriptor set.
///
/// ```
/// use descan::compile;
///
/// let pattern = compile("format string {} with placeholders {%d}").unwrap();
/// assert_eq!(pattern.placeholder_count(), 2);
/// ```
pub fn compile(pattern: &str) -> Result<CompiledPattern, ScanError> {
    let mut placeholders = Vec::new();
    let mut state = State::Literal;

    for (token, span) in lexer::lex_with_spans(pattern) {
        state = match state {
            State::Literal => match token {
                Token::OpenBrace => State::AfterOpenBrace { open: span.start },
                // `}` and `%` outside a placeholder are ordinary literal text
                _ => State::Literal,
            },
            State::AfterOpenBrace { open } => match token {
                Token::Percent => State::AfterPercent { open },
                Token::CloseBrace => {
                    placeholders.push(Placeholder {
                        open,
                        close: span.start,
                        specifier: None,
                    });
                    State::Literal
                }
                _ => {
                    return Err(ScanError::MissingClosingBrace {
                        position: span.start,
                    })
                }
            },
            State::AfterPercent { open } => match token {
                Token::Text => {
                    let slice = &pattern[span.clone()];
                    let mut chars = slice.chars();
                    match chars.next() {
                        Some(c) => match Specifier::from_char(c) {
                            Some(specifier) => {
                                if chars.next().is_some() {
                                    // a valid specifier character not
                                    // immediately followed by `}`
                                    return Err(ScanError::MissingClosingBrace {
                                        position: span.start + c.len_utf8(),
                                    });
                                }
                                State::AwaitingClose { open, specifier }
                            }
                            None => {
                                return Err(ScanError::InvalidSpecifier {
                                    found: c,
                                    position: span.start,
                                })
                            }
                        },
                        // Text tokens are never empty
                        None => {
                            return Err(ScanError::InvalidSpecifier {
                                found: '%',
                                position: span.start,
                            })
                        }
                    }
                }
                Token::OpenBrace => {
                    return Err(ScanError::InvalidSpecifier {
                        found: '{',
                        position: span.start,
                    })
                }
                Token::CloseBrace => {
                    return Err(ScanError::InvalidSpecifier {
                        found: '}',
                        position: span.start,
                    })
                }
                Token::Percent => {
                    return Err(ScanError::InvalidSpecifier {
                        found: '%',
                        position: span.start,
                    })
                }
            },
            State::AwaitingClose { open, specifier } => match token {
                Token::CloseBrace => {
                    placeholders.push(Placeholder {
                        open,
                        close: span.start,
                        specifier: Some(specifier),
                    });
                    State::Literal
                }
                _ => {
                    return Err(ScanError::MissingClosingBrace {
                        position: span.start,
                    })
                }
            },
        };
    }

    match state {
        State::Literal => Ok(CompiledPattern {
            text: pattern.to_string(),
            placeholders,
        }),
        State::AfterOpenBrace { open } | State::AfterPercent { open } => {
            Err(ScanError::UnclosedPlaceholder { open })
        }
        State::AwaitingClose { .. } => Err(ScanError::MissingClosingBrace {
            position: pattern.len(),
        }),
    }
}
