use pensum::tokenizer::{analyze, symbol::Delimiter, LexErrorKind, TokenKind};
use proptest::prelude::*;

/// Balanced bracket structures with filler in between.
fn balanced() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just(String::new()),
        "[a-z]{1,8}",
        "[0-9]{1,4}",
        Just("Curso".to_string()),
        Just(";".to_string()),
        Just(", ".to_string()),
        Just("\"{ ] ;\"".to_string()),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            inner.clone().prop_map(|s| format!("{{ {} }}", s)),
            inner.clone().prop_map(|s| format!("[{}]", s)),
            inner.clone().prop_map(|s| format!("( {} )", s)),
            prop::collection::vec(inner, 1..4).prop_map(|parts| parts.join(" ")),
        ]
    })
}

/// Bracket soup that never closes with the wrong partner: only `{` and `}`.
fn braces() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just('{'), Just('}'), Just(' '), Just('x')], 0..40)
        .prop_map(|chars| chars.into_iter().collect())
}

fn count_delimiter(tokens: &[pensum::tokenizer::Token], delimiter: Delimiter) -> usize {
    tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Delimiter(delimiter))
        .count()
}

proptest! {
    #[test]
    fn balanced_input_has_no_bracket_errors(input in balanced()) {
        let output = analyze(&input);
        prop_assert!(output.errors.is_empty(), "errors: {:?}", output.errors);
        prop_assert_eq!(output.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn bracket_counts_are_conserved(input in braces()) {
        let output = analyze(&input);
        let opens = count_delimiter(&output.tokens, Delimiter::OpenBrace);
        let closes = count_delimiter(&output.tokens, Delimiter::CloseBrace);
        let unexpected = output
            .errors
            .iter()
            .filter(|e| e.kind == LexErrorKind::UnexpectedClosing)
            .count();
        let unclosed = output
            .errors
            .iter()
            .filter(|e| e.kind == LexErrorKind::UnclosedOpening)
            .count();

        // at most one unclosed opening is reported, so compare matched pairs
        let matched = closes - unexpected;
        prop_assert!(matched <= opens);
        prop_assert_eq!(unclosed, usize::from(opens > matched));
    }

    #[test]
    fn analysis_is_deterministic(input in "\\PC{0,80}") {
        prop_assert_eq!(analyze(&input), analyze(&input));
    }

    #[test]
    fn every_token_is_positioned_inside_the_source(input in "[ -~\n]{0,80}") {
        let output = analyze(&input);
        let lines = input.split('\n').count();
        for token in &output.tokens {
            prop_assert!(token.line >= 1 && token.line <= lines);
            prop_assert!(token.column >= 1);
        }
    }
}
