//! # Block Policies
//!
//! Every block-shaped construct of the pensum grammar scans its body token by
//! token. What it does with each token is decided here, in one table per
//! construct, instead of being spread across fallthrough branches:
//!
//! | construct           | enters on                         | closes on | other tokens | end of input |
//! |---------------------|-----------------------------------|-----------|--------------|--------------|
//! | top level           | `CARRERA`, `SEMESTRE`             | (none)    | skipped      | ends         |
//! | program `[ ... ]`   | `SEMESTRE`                        | `]`       | skipped      | ends         |
//! | semester `{ ... }`  | `CURSO`                           | `}`       | skipped      | fails        |
//! | course `{ ... }`    | field keywords, `prerequisito`, `area` | `}`  | skipped      | fails        |
//! | prerequisites `( )` | `NUMERO`                          | `)`       | skipped      | fails        |
//!
//! Tokens required *inside* a construct (`:`, the value, `;`, `{`, ...) are
//! always mandatory; a wrong token there aborts the parse.

use crate::tokenizer::{keyword::Keyword, symbol::Delimiter, Token, TokenKind};

/// What a block does with the token under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition<C> {
    /// Parse a nested construct starting at this token.
    Enter(C),
    /// This token ends the block and is consumed.
    Close,
    /// Not part of the block's grammar; step over it.
    Skip,
}

/// What a block does when input runs out before it closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtEnd {
    Tolerate,
    /// Fail, naming the symbol that should have closed the block.
    Fail(Delimiter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevelItem {
    Program,
    Semester,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Nombre,
    Codigo,
    Creditos,
    Descripcion,
    Obligatorio,
    Prerrequisitos,
    Area,
}

impl CourseField {
    /// Label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            CourseField::Nombre => "NOMBRE",
            CourseField::Codigo => "CODIGO",
            CourseField::Creditos => "CREDITOS",
            CourseField::Descripcion => "DESCRIPCION",
            CourseField::Obligatorio => "OBLIGATORIO",
            CourseField::Prerrequisitos => "PREREQUISITO",
            CourseField::Area => "AREA",
        }
    }

    /// What the field's value is, as used in "Expected ..." messages.
    pub fn value_description(self) -> &'static str {
        match self {
            CourseField::Nombre => "the course name",
            CourseField::Codigo => "the course code",
            CourseField::Creditos => "the number of credits",
            CourseField::Descripcion => "the course description",
            CourseField::Obligatorio => "true or false",
            CourseField::Prerrequisitos => "the prerequisite list",
            CourseField::Area => "the course area",
        }
    }
}

const PREREQUISITE_SPELLINGS: [&str; 4] = [
    "prerequisito",
    "prerequisitos",
    "prerrequisito",
    "prerrequisitos",
];

fn is_prerequisite_word(word: &str) -> bool {
    PREREQUISITE_SPELLINGS
        .iter()
        .any(|spelling| word.eq_ignore_ascii_case(spelling))
}

pub const TOP_LEVEL_AT_END: AtEnd = AtEnd::Tolerate;
pub const PROGRAM_AT_END: AtEnd = AtEnd::Tolerate;
pub const SEMESTER_AT_END: AtEnd = AtEnd::Fail(Delimiter::CloseBrace);
pub const COURSE_AT_END: AtEnd = AtEnd::Fail(Delimiter::CloseBrace);
pub const PREREQUISITES_AT_END: AtEnd = AtEnd::Fail(Delimiter::CloseParen);

pub fn top_level(token: &Token) -> Disposition<TopLevelItem> {
    match token.kind {
        TokenKind::Keyword(Keyword::Carrera) => Disposition::Enter(TopLevelItem::Program),
        TokenKind::Keyword(Keyword::Semestre) => Disposition::Enter(TopLevelItem::Semester),
        _ => Disposition::Skip,
    }
}

pub fn program_body(token: &Token) -> Disposition<()> {
    match token.kind {
        TokenKind::Keyword(Keyword::Semestre) => Disposition::Enter(()),
        TokenKind::Delimiter(Delimiter::CloseBracket) => Disposition::Close,
        _ => Disposition::Skip,
    }
}

pub fn semester_body(token: &Token) -> Disposition<()> {
    match token.kind {
        TokenKind::Keyword(Keyword::Curso) => Disposition::Enter(()),
        TokenKind::Delimiter(Delimiter::CloseBrace) => Disposition::Close,
        _ => Disposition::Skip,
    }
}

pub fn course_body(token: &Token) -> Disposition<CourseField> {
    match token.kind {
        TokenKind::Keyword(Keyword::Nombre) => Disposition::Enter(CourseField::Nombre),
        TokenKind::Keyword(Keyword::Codigo) => Disposition::Enter(CourseField::Codigo),
        TokenKind::Keyword(Keyword::Creditos) => Disposition::Enter(CourseField::Creditos),
        TokenKind::Keyword(Keyword::Descripcion) => Disposition::Enter(CourseField::Descripcion),
        TokenKind::Keyword(Keyword::Obligatorio) => Disposition::Enter(CourseField::Obligatorio),
        TokenKind::Keyword(Keyword::Prerequisito) => {
            Disposition::Enter(CourseField::Prerrequisitos)
        }
        TokenKind::Identifier if is_prerequisite_word(&token.text) => {
            Disposition::Enter(CourseField::Prerrequisitos)
        }
        TokenKind::Identifier if token.text.eq_ignore_ascii_case("area") => {
            Disposition::Enter(CourseField::Area)
        }
        TokenKind::Delimiter(Delimiter::CloseBrace) => Disposition::Close,
        _ => Disposition::Skip,
    }
}

/// Commas are plain separators and fall under `Skip` with everything else
/// that is not a course code.
pub fn prerequisite_list(token: &Token) -> Disposition<()> {
    match token.kind {
        TokenKind::Number => Disposition::Enter(()),
        TokenKind::Delimiter(Delimiter::CloseParen) => Disposition::Close,
        _ => Disposition::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::analyze;

    fn first(input: &str) -> Token {
        analyze(input).tokens.remove(0)
    }

    #[test]
    fn test_course_body_table() {
        let cases = [
            ("Nombre", Disposition::Enter(CourseField::Nombre)),
            ("codigo", Disposition::Enter(CourseField::Codigo)),
            ("CREDITOS", Disposition::Enter(CourseField::Creditos)),
            ("Descripcion", Disposition::Enter(CourseField::Descripcion)),
            ("Obligatorio", Disposition::Enter(CourseField::Obligatorio)),
            ("Prerequisito", Disposition::Enter(CourseField::Prerrequisitos)),
            ("Prerrequisitos", Disposition::Enter(CourseField::Prerrequisitos)),
            ("prerequisitos", Disposition::Enter(CourseField::Prerrequisitos)),
            ("Area", Disposition::Enter(CourseField::Area)),
            ("}", Disposition::Close),
            ("Electivo", Disposition::Skip),
            ("Semestre", Disposition::Skip),
            ("profesor", Disposition::Skip),
            (";", Disposition::Skip),
        ];

        for (input, expected) in cases {
            assert_eq!(course_body(&first(input)), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_program_and_semester_tables() {
        assert_eq!(program_body(&first("Semestre")), Disposition::Enter(()));
        assert_eq!(program_body(&first("]")), Disposition::Close);
        assert_eq!(program_body(&first("Curso")), Disposition::Skip);

        assert_eq!(semester_body(&first("curso")), Disposition::Enter(()));
        assert_eq!(semester_body(&first("}")), Disposition::Close);
        assert_eq!(semester_body(&first("]")), Disposition::Skip);
    }

    #[test]
    fn test_prerequisite_list_table() {
        assert_eq!(prerequisite_list(&first("101")), Disposition::Enter(()));
        assert_eq!(prerequisite_list(&first(",")), Disposition::Skip);
        assert_eq!(prerequisite_list(&first("\"101\"")), Disposition::Skip);
        assert_eq!(prerequisite_list(&first(")")), Disposition::Close);
    }

    #[test]
    fn test_top_level_table() {
        assert_eq!(top_level(&first("CARRERA")), Disposition::Enter(TopLevelItem::Program));
        assert_eq!(top_level(&first("semestre")), Disposition::Enter(TopLevelItem::Semester));
        assert_eq!(top_level(&first("Curso")), Disposition::Skip);
    }
}
