//! # Symbol Handling
//!
//! Single-character punctuation of the pensum language and the bracket stack
//! used to validate nesting while scanning.
//!
//! Every symbol maps to exactly one [`Delimiter`]. The three opening symbols
//! (`{`, `[`, `(`) are tracked on a [`BracketStack`]; the matching closing
//! symbols pop it. Mismatches never stop the scan, they only produce a
//! [`LexError`].

use strum_macros::{AsRefStr, Display, EnumIter};

use super::token::{LexError, Position};

/// Punctuation recognised by the tokenizer.
///
/// The display form is the token kind name used in diagnostics and JSON
/// output; [`Delimiter::symbol`] gives the source character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
pub enum Delimiter {
    /// `{`
    #[strum(serialize = "LLAVE_ABIERTA")]
    OpenBrace,
    /// `}`
    #[strum(serialize = "LLAVE_CERRADA")]
    CloseBrace,
    /// `[`
    #[strum(serialize = "CORCHETE_ABIERTO")]
    OpenBracket,
    /// `]`
    #[strum(serialize = "CORCHETE_CERRADO")]
    CloseBracket,
    /// `(`
    #[strum(serialize = "PARENTESIS_ABIERTO")]
    OpenParen,
    /// `)`
    #[strum(serialize = "PARENTESIS_CERRADO")]
    CloseParen,
    /// `,`
    #[strum(serialize = "COMA")]
    Comma,
    /// `;`
    #[strum(serialize = "PUNTO_COMA")]
    Semicolon,
    /// `:`
    #[strum(serialize = "DOS_PUNTOS")]
    Colon,
    /// `=`
    #[strum(serialize = "IGUAL")]
    Equal,
}

impl Delimiter {
    pub fn from_char(c: char) -> Option<Self> {
        let delimiter = match c {
            '{' => Delimiter::OpenBrace,
            '}' => Delimiter::CloseBrace,
            '[' => Delimiter::OpenBracket,
            ']' => Delimiter::CloseBracket,
            '(' => Delimiter::OpenParen,
            ')' => Delimiter::CloseParen,
            ',' => Delimiter::Comma,
            ';' => Delimiter::Semicolon,
            ':' => Delimiter::Colon,
            '=' => Delimiter::Equal,
            _ => return None,
        };
        Some(delimiter)
    }

    pub fn symbol(self) -> char {
        match self {
            Delimiter::OpenBrace => '{',
            Delimiter::CloseBrace => '}',
            Delimiter::OpenBracket => '[',
            Delimiter::CloseBracket => ']',
            Delimiter::OpenParen => '(',
            Delimiter::CloseParen => ')',
            Delimiter::Comma => ',',
            Delimiter::Semicolon => ';',
            Delimiter::Colon => ':',
            Delimiter::Equal => '=',
        }
    }

    pub fn is_opening(self) -> bool {
        matches!(
            self,
            Delimiter::OpenBrace | Delimiter::OpenBracket | Delimiter::OpenParen
        )
    }

    pub fn is_closing(self) -> bool {
        matches!(
            self,
            Delimiter::CloseBrace | Delimiter::CloseBracket | Delimiter::CloseParen
        )
    }

    /// The closing partner of an opening symbol.
    pub fn partner(self) -> Option<Self> {
        match self {
            Delimiter::OpenBrace => Some(Delimiter::CloseBrace),
            Delimiter::OpenBracket => Some(Delimiter::CloseBracket),
            Delimiter::OpenParen => Some(Delimiter::CloseParen),
            _ => None,
        }
    }
}

/// An opening symbol waiting for its partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketStackEntry {
    pub symbol: Delimiter,
    pub line: usize,
    pub column: usize,
}

/// LIFO of unmatched opening symbols for one scan.
#[derive(Debug, Default)]
pub struct BracketStack {
    entries: Vec<BracketStackEntry>,
}

impl BracketStack {
    pub fn open(&mut self, symbol: Delimiter, at: Position) {
        self.entries.push(BracketStackEntry {
            symbol,
            line: at.line,
            column: at.column,
        });
    }

    /// Matches `symbol` against the innermost open entry.
    ///
    /// On a mismatch the popped entry goes back on the stack, so an outer
    /// unclosed symbol is still reported by [`BracketStack::finish`].
    pub fn close(&mut self, symbol: Delimiter, at: Position) -> Option<LexError> {
        let Some(open) = self.entries.pop() else {
            return Some(LexError::unexpected_closing(symbol, at));
        };

        if open.symbol.partner() == Some(symbol) {
            return None;
        }

        let error = LexError::mismatched_closing(symbol, at, open);
        self.entries.push(open);
        Some(error)
    }

    /// Reports the innermost symbol still open at end of input, if any.
    /// Only one entry is reported even if several remain.
    pub fn finish(mut self) -> Option<LexError> {
        self.entries.pop().map(LexError::unclosed_opening)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
