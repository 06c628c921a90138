//! # Tokenizer
//!
//! Turns pensum source text into positioned [`Token`]s in a single pass.
//!
//! ## Components
//!
//! * [`keyword`]: reserved words, matched case-insensitively
//! * [`symbol`]: punctuation and the bracket stack
//! * [`literal`]: recognisers for numbers, words and quoted strings
//! * [`token`]: token, position and lexical error types
//! * [`tokenizer`]: the scan loop, [`analyze`]
//!
//! Lexical faults are data, not failures: [`analyze`] always returns a token
//! list (terminated by `EOF`) together with every [`LexError`] it found.

pub mod keyword;
pub mod literal;
pub mod symbol;
pub mod token;
#[allow(clippy::module_inception)]
pub mod tokenizer;

pub use token::{LexError, LexErrorKind, LexOutput, Position, Token, TokenKind};
pub use tokenizer::analyze;
