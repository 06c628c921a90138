//! # Pensum Parsers
//!
//! One module per construct of the pensum grammar:
//!
//! ```text
//! pensum    := ( program | semester | <skipped> )*
//! program   := CARRERA ':' CADENA ( '[' ( semester | <skipped> )* ']' )?
//! semester  := SEMESTRE ':' NUMERO '{' ( course | <skipped> )* '}'
//! course    := CURSO ':' NUMERO '{' ( field | <skipped> )* '}'
//! field     := NOMBRE ':' CADENA ';'
//!            | CODIGO ':' CADENA ';'
//!            | CREDITOS ':' NUMERO ';'
//!            | DESCRIPCION ':' CADENA ';'
//!            | OBLIGATORIO ':' BOOLEANO ';'
//!            | 'area' ':' CADENA ';'
//!            | prereq ':' '(' ( NUMERO | <skipped> )* ')'
//! ```
//!
//! Which tokens are `<skipped>` in each block is defined in [`policy`].

pub mod common;
pub mod course;
pub mod policy;
pub mod program;
pub mod semester;

use super::{core::*, prelude::*};
use crate::ast::{Pensum, PensumItem};
use crate::tokenizer::Token;
use common::block;
use policy::{top_level, TopLevelItem, TOP_LEVEL_AT_END};

/// Parses a whole token stream into a [`Pensum`].
///
/// Semesters may appear inside a program or directly at the top level.
pub fn parse_root() -> impl Parser<Token, Pensum> {
    map(
        block(
            "the pensum",
            top_level,
            TOP_LEVEL_AT_END,
            |item, input: &[Token], pos| match item {
                TopLevelItem::Program => {
                    map(program::parse_program(), PensumItem::Program).parse(input, pos)
                }
                TopLevelItem::Semester => {
                    map(semester::parse_semester(), PensumItem::Semester).parse(input, pos)
                }
            },
        ),
        Pensum::from_items,
    )
}
