use super::{
    super::core::{peek, ParseError, ParseResult, Parser},
    policy::{AtEnd, Disposition},
};
use crate::tokenizer::Token;

/// Scans a block body with a policy table.
///
/// `enter` is called with the cursor on the token that was classified as
/// [`Disposition::Enter`] and must consume at least that token. The closing
/// token is consumed and not returned. `name` describes the block in the
/// end-of-input message and in debug logs.
pub fn block<C, T, P, E>(
    name: impl Into<String>,
    policy: P,
    at_end: AtEnd,
    enter: E,
) -> impl Parser<Token, Vec<T>>
where
    P: Fn(&Token) -> Disposition<C>,
    E: Fn(C, &[Token], usize) -> ParseResult<T>,
{
    let name = name.into();
    move |input: &[Token], pos: usize| {
        let mut pos = pos;
        let mut items = Vec::new();

        loop {
            let Some(token) = peek(input, pos) else {
                return match at_end {
                    AtEnd::Tolerate => Ok((pos, items)),
                    AtEnd::Fail(closer) => Err(ParseError::UnexpectedEof {
                        message: format!("Expected '{}' to close {}", closer.symbol(), name),
                    }),
                };
            };

            match policy(token) {
                Disposition::Enter(construct) => {
                    let (next, item) = enter(construct, input, pos)?;
                    items.push(item);
                    pos = next;
                }
                Disposition::Close => return Ok((pos + 1, items)),
                Disposition::Skip => {
                    tracing::debug!(
                        kind = %token.kind,
                        text = %token.text,
                        line = token.line,
                        "skipping token in {}",
                        name
                    );
                    pos += 1;
                }
            }
        }
    }
}
