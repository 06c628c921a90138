//! # Analysis
//!
//! The caller-facing pipeline: lex, stop on lexical errors, otherwise parse.
//! Hosts (the CLI, an HTTP handler) turn an [`AnalysisReport`] into their own
//! response; [`AnalysisReport::to_envelope`] gives the `{ success, data }`
//! JSON shape.

use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::analyzer;
use crate::ast::Pensum;
use crate::config::AnalysisConfig;
use crate::tokenizer::{self, LexError, Token};

/// Input rejected before analysis.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Input must be a non-empty string")]
    EmptyInput,
    #[error("Input is {len} bytes, the limit is {max}")]
    InputTooLarge { len: usize, max: usize },
}

impl AnalysisError {
    pub fn to_envelope(&self) -> Value {
        json!({
            "success": false,
            "error": self.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisReport {
    /// The source has lexical errors; it was not parsed.
    LexicalErrors { errors: Vec<LexError> },
    Parsed {
        #[serde(skip_serializing_if = "Option::is_none")]
        tokens: Option<Vec<Token>>,
        pensum: Pensum,
    },
    SyntaxError {
        #[serde(skip_serializing_if = "Option::is_none")]
        tokens: Option<Vec<Token>>,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        line: Option<usize>,
    },
}

impl AnalysisReport {
    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisReport::Parsed { .. })
    }

    pub fn tokens(&self) -> Option<&[Token]> {
        match self {
            AnalysisReport::LexicalErrors { .. } => None,
            AnalysisReport::Parsed { tokens, .. } | AnalysisReport::SyntaxError { tokens, .. } => {
                tokens.as_deref()
            }
        }
    }

    pub fn pensum(&self) -> Option<&Pensum> {
        match self {
            AnalysisReport::Parsed { pensum, .. } => Some(pensum),
            _ => None,
        }
    }

    /// `{ "success": bool, "data": { ... } }`.
    pub fn to_envelope(&self) -> Value {
        let data = match self {
            AnalysisReport::LexicalErrors { errors } => json!({ "errors": errors }),
            AnalysisReport::Parsed { tokens, pensum } => match tokens {
                Some(tokens) => json!({ "tokens": tokens, "pensum": pensum }),
                None => json!({ "pensum": pensum }),
            },
            AnalysisReport::SyntaxError {
                tokens,
                message,
                line,
            } => {
                let mut data = json!({ "error": message, "line": line });
                if let (Some(tokens), Some(object)) = (tokens, data.as_object_mut()) {
                    object.insert("tokens".to_string(), json!(tokens));
                }
                data
            }
        };

        json!({
            "success": self.is_success(),
            "data": data,
        })
    }
}

/// Runs the whole front end over `source`.
///
/// Lexical errors are a report, not an `Err`: the parser is simply not run.
/// `Err` is reserved for input that is rejected outright.
#[tracing::instrument(level = "debug", skip(source, config), fields(len = source.len()))]
pub fn analyze_source(
    source: &str,
    config: &AnalysisConfig,
) -> Result<AnalysisReport, AnalysisError> {
    if source.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }
    if let Some(max) = config.max_input_bytes {
        if source.len() > max {
            return Err(AnalysisError::InputTooLarge {
                len: source.len(),
                max,
            });
        }
    }

    let output = tokenizer::analyze(source);
    if output.has_errors() {
        tracing::info!(errors = output.errors.len(), "lexical errors found");
        return Ok(AnalysisReport::LexicalErrors {
            errors: output.errors,
        });
    }

    let result = analyzer::parse(&output.tokens);
    let tokens = config.include_tokens.then_some(output.tokens);

    Ok(match result {
        Ok(pensum) => AnalysisReport::Parsed { tokens, pensum },
        Err(error) => {
            tracing::info!(error = %error, "syntax error");
            AnalysisReport::SyntaxError {
                tokens,
                message: error.to_string(),
                line: error.line(),
            }
        }
    })
}
