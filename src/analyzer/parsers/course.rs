//! Course construct.
//!
//! ```text
//! Curso: 101 {
//!     Nombre: "Matematica Basica 1";
//!     Codigo: "101";
//!     Creditos: 7;
//!     Descripcion: "Algebra y funciones";
//!     Obligatorio: true;
//!     Area: "Ciencias";
//!     Prerrequisitos: (100, 99)
//! }
//! ```
//!
//! Fields may come in any order and any number of times; the last occurrence
//! wins, except prerequisites, which accumulate.

use super::{
    super::{core::*, prelude::*},
    common::block,
    policy::{course_body, prerequisite_list, CourseField, COURSE_AT_END, PREREQUISITES_AT_END},
};
use crate::ast::Curso;
use crate::tokenizer::{symbol::Delimiter, Token};

/// Value of one field inside a course block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Nombre(String),
    /// The declared code and the line it was declared on.
    Codigo { codigo: String, line: usize },
    Creditos(u32),
    Descripcion(String),
    Obligatorio(bool),
    Prerrequisitos(Vec<String>),
    Area(String),
}

/// Parses `Curso: <code> { fields }` with the cursor on `CURSO`. The course
/// belongs to `semestre`.
pub fn parse_course(semestre: u32) -> impl Parser<Token, Curso> {
    move |input: &[Token], pos: usize| {
        let (pos, _) = any().parse(input, pos)?;
        let (pos, _) = delimiter(Delimiter::Colon, "Expected ':' after CURSO").parse(input, pos)?;
        let (pos, codigo) = number_text("Expected the course code").parse(input, pos)?;
        let (pos, _) = delimiter(Delimiter::OpenBrace, "Expected '{' after the course code")
            .parse(input, pos)?;

        tracing::debug!(codigo = %codigo, semestre, "parsing course");

        let (pos, fields) = block(
            format!("course {}", codigo),
            course_body,
            COURSE_AT_END,
            parse_field,
        )
        .parse(input, pos)?;

        let curso = fields
            .into_iter()
            .fold(Curso::new(codigo, semestre), apply_field);

        tracing::debug!(codigo = %curso.codigo, nombre = %curso.nombre, "course completed");
        Ok((pos, curso))
    }
}

/// Parses one field with the cursor on its leading keyword or identifier.
pub fn parse_field(field: CourseField, input: &[Token], pos: usize) -> ParseResult<FieldValue> {
    let (pos, keyword) = any().parse(input, pos)?;
    let (pos, _) = delimiter(
        Delimiter::Colon,
        format!("Expected ':' after {}", field.label()),
    )
    .parse(input, pos)?;

    let expected = format!("Expected {}", field.value_description());
    let semicolon = || {
        delimiter(
            Delimiter::Semicolon,
            format!("Expected ';' after {}", field.value_description()),
        )
    };

    match field {
        CourseField::Nombre => {
            terminated(map(string(expected), FieldValue::Nombre), semicolon()).parse(input, pos)
        }
        CourseField::Codigo => terminated(
            map(string(expected), move |codigo| FieldValue::Codigo {
                codigo,
                line: keyword.line,
            }),
            semicolon(),
        )
        .parse(input, pos),
        CourseField::Creditos => {
            terminated(map(number(expected), FieldValue::Creditos), semicolon()).parse(input, pos)
        }
        CourseField::Descripcion => {
            terminated(map(string(expected), FieldValue::Descripcion), semicolon())
                .parse(input, pos)
        }
        CourseField::Obligatorio => {
            terminated(map(boolean(expected), FieldValue::Obligatorio), semicolon())
                .parse(input, pos)
        }
        CourseField::Area => {
            terminated(map(string(expected), FieldValue::Area), semicolon()).parse(input, pos)
        }
        // no trailing ';'
        CourseField::Prerrequisitos => parse_prerequisites(input, pos),
    }
}

/// `( code, code, ... )`. Commas and any stray tokens between the
/// parentheses are skipped; the closing `)` is required.
fn parse_prerequisites(input: &[Token], pos: usize) -> ParseResult<FieldValue> {
    let codes = block(
        "the prerequisites",
        prerequisite_list,
        PREREQUISITES_AT_END,
        |_, input: &[Token], pos| number_text("Expected a course code").parse(input, pos),
    );
    map(
        preceded(delimiter(Delimiter::OpenParen, "Expected '(' after ':'"), codes),
        FieldValue::Prerrequisitos,
    )
    .parse(input, pos)
}

fn apply_field(mut curso: Curso, value: FieldValue) -> Curso {
    match value {
        FieldValue::Nombre(nombre) => curso.nombre = nombre,
        FieldValue::Codigo { codigo, line } => {
            if codigo != curso.codigo {
                tracing::warn!(
                    declared = %codigo,
                    block = %curso.codigo,
                    line,
                    "course code field does not match the course block"
                );
            }
        }
        FieldValue::Creditos(creditos) => curso.creditos = creditos,
        FieldValue::Descripcion(descripcion) => curso.descripcion = Some(descripcion),
        FieldValue::Obligatorio(obligatorio) => curso.obligatorio = Some(obligatorio),
        FieldValue::Prerrequisitos(codes) => curso.prerrequisitos.extend(codes),
        FieldValue::Area(area) => curso.area = Some(area),
    }
    curso
}
