use super::core::{peek, ParseError, ParseResult, Parser};
use crate::tokenizer::{symbol::Delimiter, Token, TokenKind};

/// Consumes one token of `kind`, or fails with `message`.
pub fn expect(kind: TokenKind, message: impl Into<String>) -> impl Parser<Token, Token> {
    let message = message.into();
    move |input: &[Token], pos: usize| match peek(input, pos) {
        Some(token) if token.kind == kind => Ok((pos + 1, token.clone())),
        Some(token) => Err(ParseError::Unexpected {
            message: message.clone(),
            found: token.clone(),
        }),
        None => Err(ParseError::UnexpectedEof {
            message: message.clone(),
        }),
    }
}

pub fn delimiter(delimiter: Delimiter, message: impl Into<String>) -> impl Parser<Token, Token> {
    expect(TokenKind::Delimiter(delimiter), message)
}

/// Text of a `CADENA` token.
pub fn string(message: impl Into<String>) -> impl Parser<Token, String> {
    map(expect(TokenKind::String, message), |token| token.text)
}

/// Text of a `NUMERO` token, kept as written.
pub fn number_text(message: impl Into<String>) -> impl Parser<Token, String> {
    map(expect(TokenKind::Number, message), |token| token.text)
}

/// Value of a `NUMERO` token.
pub fn number(message: impl Into<String>) -> impl Parser<Token, u32> {
    let parser = expect(TokenKind::Number, message);
    move |input: &[Token], pos: usize| {
        let (pos, token) = parser.parse(input, pos)?;
        let value = token
            .text
            .parse::<u32>()
            .map_err(|_| ParseError::NumberOutOfRange {
                text: token.text.clone(),
                line: token.line,
            })?;
        Ok((pos, value))
    }
}

/// Value of a `BOOLEANO` token; `true` in any case is true.
pub fn boolean(message: impl Into<String>) -> impl Parser<Token, bool> {
    map(expect(TokenKind::Boolean, message), |token| {
        token.text.eq_ignore_ascii_case("true")
    })
}

pub fn map<P, F, A, B>(parser: P, f: F) -> impl Parser<Token, B>
where
    P: Parser<Token, A>,
    F: Fn(A) -> B,
{
    move |input: &[Token], pos: usize| {
        let (pos, value) = parser.parse(input, pos)?;
        Ok((pos, f(value)))
    }
}

pub fn preceded<P1, P2, O1, O2>(first: P1, second: P2) -> impl Parser<Token, O2>
where
    P1: Parser<Token, O1>,
    P2: Parser<Token, O2>,
{
    move |input: &[Token], pos: usize| {
        let (pos, _) = first.parse(input, pos)?;
        second.parse(input, pos)
    }
}

pub fn terminated<P1, P2, O1, O2>(first: P1, second: P2) -> impl Parser<Token, O1>
where
    P1: Parser<Token, O1>,
    P2: Parser<Token, O2>,
{
    move |input: &[Token], pos: usize| {
        let (pos, value) = first.parse(input, pos)?;
        let (pos, _) = second.parse(input, pos)?;
        Ok((pos, value))
    }
}

/// Skips the token under the cursor. Used as the leading step of constructs
/// whose first token was already classified by a policy table.
pub fn any() -> impl Parser<Token, Token> {
    move |input: &[Token], pos: usize| match input.get(pos) {
        Some(token) => Ok((pos + 1, token.clone())),
        None => Err(ParseError::UnexpectedEof {
            message: "Expected a token".to_string(),
        }),
    }
}
