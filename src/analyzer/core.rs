use thiserror::Error;

use crate::tokenizer::{Token, TokenKind};

/// A parser over a token slice.
///
/// The cursor is a plain index passed in and handed back with the result, so
/// parsers hold no state between calls.
pub trait Parser<I, O> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O>;
}

impl<I, O, F> Parser<I, O> for F
where
    F: Fn(&[I], usize) -> ParseResult<O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        self(input, pos)
    }
}

pub type ParseResult<O> = Result<(usize, O), ParseError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{message} - found {} '{}' at line {}", .found.kind, .found.text, .found.line)]
    Unexpected { message: String, found: Token },
    #[error("{message} - reached end of file unexpectedly")]
    UnexpectedEof { message: String },
    #[error("Number '{text}' at line {line} is out of range")]
    NumberOutOfRange { text: String, line: usize },
}

impl ParseError {
    /// Line of the offending token, when there is one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::Unexpected { found, .. } => Some(found.line),
            ParseError::NumberOutOfRange { line, .. } => Some(*line),
            ParseError::UnexpectedEof { .. } => None,
        }
    }

    pub fn found(&self) -> Option<&Token> {
        match self {
            ParseError::Unexpected { found, .. } => Some(found),
            _ => None,
        }
    }
}

/// Token under the cursor, or `None` once input is exhausted. The `EOF`
/// marker counts as exhausted.
pub fn peek(input: &[Token], pos: usize) -> Option<&Token> {
    input.get(pos).filter(|token| token.kind != TokenKind::Eof)
}
