//! # Pensum
//!
//! Front end for the pensum definition language, a small DSL describing a
//! university curriculum:
//!
//! ```text
//! Carrera: "Ingenieria en Sistemas" [
//!     Semestre: 1 {
//!         Curso: 101 {
//!             Nombre: "Matematica Basica 1";
//!             Creditos: 7;
//!             Obligatorio: true;
//!             Prerrequisitos: ()
//!         }
//!     }
//! ]
//! ```
//!
//! [`tokenizer::analyze`] turns source text into tokens plus lexical errors,
//! [`analyzer::parse`] turns a clean token stream into a [`Pensum`], and
//! [`analysis::analyze_source`] chains the two the way a host application
//! needs it.

pub mod analysis;
pub mod analyzer;
pub mod ast;
pub mod config;
pub mod error;
pub mod tokenizer;

// Re-exports
pub use analysis::{analyze_source, AnalysisError, AnalysisReport};
pub use ast::{CourseId, Curso, Pensum, SemesterBlock};
pub use config::AnalysisConfig;
pub use error::*;
pub use error::Error as PensumError;

/// Lexes and parses `source`, failing on the first problem of either kind.
pub fn parse_pensum(source: &str) -> InternalResult<Pensum> {
    let output = tokenizer::analyze(source);
    if output.has_errors() {
        return Err(Error::Lexical(output.errors));
    }
    Ok(analyzer::parse(&output.tokens)?)
}
