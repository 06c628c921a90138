use super::{
    literal::{is_quote, parse_number, parse_string, parse_word},
    symbol::{BracketStack, Delimiter},
    token::{LexError, LexOutput, Position, Token, TokenKind},
};

/// Scans `source` once, left to right.
///
/// Never fails: faults are collected in [`LexOutput::errors`] while scanning
/// continues, and the token list always ends with an [`TokenKind::Eof`] token.
/// All scan state (position, bracket stack) is local to the call.
#[tracing::instrument(level = "debug", skip(source), fields(len = source.len()))]
pub fn analyze(source: &str) -> LexOutput {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut brackets = BracketStack::default();
    let mut position = Position::start();

    while let Some(c) = source[position.offset..].chars().next() {
        let remaining = &source[position.offset..];
        let start = position;

        let consumed = if matches!(c, ' ' | '\t' | '\r' | '\n') {
            c.len_utf8()
        } else if let Some(delimiter) = Delimiter::from_char(c) {
            if delimiter.is_opening() {
                brackets.open(delimiter, start);
            } else if delimiter.is_closing() {
                errors.extend(brackets.close(delimiter, start));
            }
            tokens.push(Token::new(
                TokenKind::Delimiter(delimiter),
                c.to_string(),
                start,
            ));
            c.len_utf8()
        } else if is_quote(c) {
            match parse_string(c, remaining) {
                Ok((rest, body)) => {
                    tokens.push(Token::new(TokenKind::String, body, start));
                    remaining.len() - rest.len()
                }
                Err(_) => {
                    // the string swallows the rest of the input
                    errors.push(LexError::unterminated_string(start));
                    remaining.len()
                }
            }
        } else if let Ok((rest, digits)) = parse_number(remaining) {
            tokens.push(Token::new(TokenKind::Number, digits, start));
            remaining.len() - rest.len()
        } else if let Ok((rest, word)) = parse_word(remaining) {
            tokens.push(Token::new(TokenKind::classify_word(word), word, start));
            remaining.len() - rest.len()
        } else {
            errors.push(LexError::unexpected_character(c, start));
            c.len_utf8()
        };

        position = position.advance(&remaining[..consumed]);
    }

    errors.extend(brackets.finish());
    tokens.push(Token::eof(position));

    tracing::debug!(
        tokens = tokens.len(),
        errors = errors.len(),
        "lexical analysis finished"
    );

    LexOutput { tokens, errors }
}
