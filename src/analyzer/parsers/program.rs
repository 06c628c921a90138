use super::{
    super::{core::*, prelude::*},
    common::block,
    policy::{program_body, PROGRAM_AT_END},
    semester::parse_semester,
};
use crate::ast::ProgramDef;
use crate::tokenizer::{symbol::Delimiter, Token};

/// Parses `Carrera: "<name>"` with the cursor on `CARRERA`, followed by an
/// optional `[ Semestre ... ]` list.
///
/// Inside the brackets anything other than a semester is skipped, and a
/// missing `]` at end of input is tolerated.
pub fn parse_program() -> impl Parser<Token, ProgramDef> {
    move |input: &[Token], pos: usize| {
        let (pos, _) = any().parse(input, pos)?;
        let (pos, _) =
            delimiter(Delimiter::Colon, "Expected ':' after CARRERA").parse(input, pos)?;
        let (pos, carrera) = string("Expected the program name").parse(input, pos)?;

        tracing::debug!(carrera = %carrera, "parsing program");

        let (pos, semestres) = match peek(input, pos) {
            Some(token) if token.is_delimiter(Delimiter::OpenBracket) => block(
                "the program",
                program_body,
                PROGRAM_AT_END,
                |_, input: &[Token], pos| parse_semester().parse(input, pos),
            )
            .parse(input, pos + 1)?,
            _ => (pos, Vec::new()),
        };

        Ok((pos, ProgramDef { carrera, semestres }))
    }
}
