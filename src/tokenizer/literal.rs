use nom::{
    bytes::complete::{take_till, take_while, take_while1},
    character::complete::{char, digit1},
    combinator::recognize,
    error::context,
    sequence::{delimited, pair},
};

use super::token::ParserResult;

/// Run of ASCII digits. No sign, decimal point or exponent.
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_number(input: &str) -> ParserResult<&str> {
    context("number literal", digit1)(input)
}

/// ASCII letter or `_`, followed by ASCII letters, digits or `_`.
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_word(input: &str) -> ParserResult<&str> {
    context(
        "word",
        recognize(pair(
            take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
            take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        )),
    )(input)
}

/// Quoted string, closed by the same quote character that opened it.
/// Newlines are part of the content. Returns the content without quotes.
#[tracing::instrument(level = "trace", skip(input))]
pub fn parse_string(quote: char, input: &str) -> ParserResult<&str> {
    context(
        "string literal",
        delimited(char(quote), take_till(|c| c == quote), char(quote)),
    )(input)
}

pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        assert_eq!(parse_number("123;").unwrap(), (";", "123"));
        assert_eq!(parse_number("0042 ").unwrap(), (" ", "0042"));
        assert!(parse_number("-1").is_err());
    }

    #[test]
    fn test_word() {
        assert_eq!(parse_word("my_var123 other").unwrap(), (" other", "my_var123"));
        assert_eq!(parse_word("_x:").unwrap(), (":", "_x"));
        assert!(parse_word("9abc").is_err());
    }

    #[test]
    fn test_word_stops_at_non_ascii() {
        assert_eq!(parse_word("Año").unwrap(), ("ño", "A"));
    }

    #[test]
    fn test_string_double_and_single_quotes() {
        assert_eq!(parse_string('"', r#""hola" x"#).unwrap(), (" x", "hola"));
        assert_eq!(parse_string('\'', "'it\"s' x").unwrap(), (" x", "it\"s"));
    }

    #[test]
    fn test_string_keeps_newlines_and_symbols() {
        let (rest, body) = parse_string('"', "\"a {\n} ; Curso\"").unwrap();
        assert_eq!(rest, "");
        assert_eq!(body, "a {\n} ; Curso");
    }

    #[test]
    fn test_unterminated_string_fails() {
        assert!(parse_string('"', "\"Abc").is_err());
        assert!(parse_string('"', "\"Abc'").is_err());
    }
}
