use nom::{error::VerboseError, IResult};
use serde::{Serialize, Serializer};
use thiserror::Error;

use super::{
    keyword::{parse_boolean, Keyword},
    symbol::{BracketStackEntry, Delimiter},
};

/// Kind of a lexeme. Closed set; see the [`Keyword`] and [`Delimiter`] tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword(Keyword),
    Delimiter(Delimiter),
    Identifier,
    String,
    Number,
    Boolean,
    Eof,
}

impl TokenKind {
    /// Reclassifies an identifier-shaped word as a keyword or boolean literal.
    pub fn classify_word(word: &str) -> Self {
        if let Ok(keyword) = word.parse::<Keyword>() {
            return TokenKind::Keyword(keyword);
        }
        if parse_boolean(word).is_some() {
            return TokenKind::Boolean;
        }
        TokenKind::Identifier
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword(keyword) => write!(f, "{}", keyword),
            TokenKind::Delimiter(delimiter) => write!(f, "{}", delimiter),
            TokenKind::Identifier => write!(f, "IDENTIFICADOR"),
            TokenKind::String => write!(f, "CADENA"),
            TokenKind::Number => write!(f, "NUMERO"),
            TokenKind::Boolean => write!(f, "BOOLEANO"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Scan position. `offset` is a byte index into the source; `line` and
/// `column` are 1-based and count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Position after consuming `text`.
    pub fn advance(self, text: &str) -> Self {
        text.chars().fold(self, |mut position, c| {
            position.offset += c.len_utf8();
            if c == '\n' {
                position.line += 1;
                position.column = 1;
            } else {
                position.column += 1;
            }
            position
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line: {}, column: {}", self.line, self.column)
    }
}

/// A positioned lexeme. String tokens carry their content without quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(rename = "lexeme")]
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, at: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            line: at.line,
            column: at.column,
        }
    }

    pub fn eof(at: Position) -> Self {
        Self::new(TokenKind::Eof, "", at)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_delimiter(&self, delimiter: Delimiter) -> bool {
        self.kind == TokenKind::Delimiter(delimiter)
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum LexErrorKind {
    UnexpectedCharacter,
    UnterminatedString,
    UnexpectedClosing,
    MismatchedClosing,
    UnclosedOpening,
}

/// A lexical fault. Faults accumulate; none of them stops the scan.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message} (line {line}, column {column})")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl LexError {
    fn new(kind: LexErrorKind, message: String, line: usize, column: usize) -> Self {
        Self {
            kind,
            message,
            line,
            column,
        }
    }

    pub fn unexpected_character(c: char, at: Position) -> Self {
        Self::new(
            LexErrorKind::UnexpectedCharacter,
            format!("Unexpected character: '{}'", c),
            at.line,
            at.column,
        )
    }

    pub fn unterminated_string(at: Position) -> Self {
        Self::new(
            LexErrorKind::UnterminatedString,
            "Unterminated string".to_string(),
            at.line,
            at.column,
        )
    }

    pub fn unexpected_closing(symbol: Delimiter, at: Position) -> Self {
        Self::new(
            LexErrorKind::UnexpectedClosing,
            format!(
                "Unexpected closing symbol '{}' at line {}.",
                symbol.symbol(),
                at.line
            ),
            at.line,
            at.column,
        )
    }

    pub fn mismatched_closing(symbol: Delimiter, at: Position, open: BracketStackEntry) -> Self {
        Self::new(
            LexErrorKind::MismatchedClosing,
            format!(
                "'{}' at line {}, column {} does not match opening '{}' at line {}, column {}.",
                symbol.symbol(),
                at.line,
                at.column,
                open.symbol.symbol(),
                open.line,
                open.column
            ),
            at.line,
            at.column,
        )
    }

    pub fn unclosed_opening(open: BracketStackEntry) -> Self {
        Self::new(
            LexErrorKind::UnclosedOpening,
            format!(
                "Opening symbol '{}' at line {}, column {} was never closed.",
                open.symbol.symbol(),
                open.line,
                open.column
            ),
            open.line,
            open.column,
        )
    }
}

/// Result of one scan: every recognised token, ending in [`TokenKind::Eof`],
/// plus every lexical fault in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;
