use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::analyzer::ParseError;
use crate::tokenizer::LexError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Lexical errors: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Lexical(Vec<LexError>),
    #[error("Syntax error: {0}")]
    Parse(#[from] ParseError),
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
    // config loading
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }
}
