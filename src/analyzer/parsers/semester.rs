use super::{
    super::{core::*, prelude::*},
    common::block,
    course::parse_course,
    policy::{semester_body, SEMESTER_AT_END},
};
use crate::ast::SemesterDef;
use crate::tokenizer::{symbol::Delimiter, Token};

/// Parses `Semestre: <number> { Curso ... }` with the cursor on `SEMESTRE`.
///
/// Every course in the block is bound to the block's number. Tokens between
/// courses are skipped.
pub fn parse_semester() -> impl Parser<Token, SemesterDef> {
    move |input: &[Token], pos: usize| {
        let (pos, keyword) = any().parse(input, pos)?;
        let (pos, _) =
            delimiter(Delimiter::Colon, "Expected ':' after SEMESTRE").parse(input, pos)?;
        let (pos, numero) = number("Expected the semester number").parse(input, pos)?;
        let (pos, _) = delimiter(
            Delimiter::OpenBrace,
            "Expected '{' after the semester number",
        )
        .parse(input, pos)?;

        tracing::debug!(numero, line = keyword.line, "parsing semester");

        let (pos, cursos) = block(
            format!("semester {}", numero),
            semester_body,
            SEMESTER_AT_END,
            move |_, input: &[Token], pos| parse_course(numero).parse(input, pos),
        )
        .parse(input, pos)?;

        tracing::debug!(numero, cursos = cursos.len(), "semester completed");

        Ok((
            pos,
            SemesterDef {
                numero,
                line: keyword.line,
                cursos,
            },
        ))
    }
}
