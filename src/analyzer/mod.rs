pub mod core;
pub mod parsers;
pub mod prelude;

pub use core::ParseError;
pub use core::ParseResult;
pub use core::Parser;

use crate::ast::Pensum;
use crate::tokenizer::Token;

/// Builds a [`Pensum`] from a lexically clean token stream.
///
/// The first mandatory token that is missing aborts the parse. Streams that
/// still carry lexical errors may parse or fail, but never panic.
#[tracing::instrument(level = "debug", skip(tokens), fields(tokens = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Pensum, ParseError> {
    let (_, pensum) = parsers::parse_root().parse(tokens, 0)?;
    tracing::debug!(
        semestres = pensum.semester_count(),
        cursos = pensum.course_count(),
        "parse finished"
    );
    Ok(pensum)
}
