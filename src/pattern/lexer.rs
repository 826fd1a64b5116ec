//! Token definitions for scan patterns
//!
//! The pattern grammar only gives structural meaning to braces and the
//! percent sign; every other character is literal text. The tokens are
//! defined using the logos derive macro and tokenization is handled entirely
//! by logos.

use std::ops::Range;

use logos::Logos;

/// All possible tokens in a scan pattern
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    #[token("%")]
    Percent,

    /// Maximal run of characters with no structural meaning
    #[regex(r"[^{}%]+")]
    Text,
}

/// Tokenize a pattern and collect tokens with their byte spans
///
/// The token set covers every input character, so no byte of the pattern is
/// ever skipped.
pub fn lex_with_spans(pattern: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = Token::lexer(pattern);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}
