use pensum::{
    analyzer::{self, ParseError},
    parse_pensum,
    tokenizer::{self, TokenKind},
    Curso, PensumError,
};
use pretty_assertions::assert_eq;
use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const SISTEMAS: &str = r#"
Carrera: "Ingenieria en Ciencias y Sistemas" [
    Semestre: 1 {
        Curso: 101 {
            Nombre: "Matematica Basica 1";
            Codigo: "101";
            Creditos: 7;
            Descripcion: "Algebra, funciones y trigonometria";
            Obligatorio: true;
            Area: "Ciencias Basicas";
            Prerrequisitos: ()
        }
        Curso: 039 {
            Nombre: "Deportes 1";
            Creditos: 1;
            Obligatorio: FALSE;
        }
    }
    Semestre: 2 {
        Curso: 103 {
            Nombre: "Matematica Basica 2";
            Creditos: 7;
            Prerrequisitos: (101)
        }
        Curso: 770 {
            Nombre: "Introduccion a la Programacion";
            Creditos: 4;
            Prerequisito: (101, 039);
        }
    }
]
"#;

#[test]
fn it_parses_a_complete_program() {
    let pensum = parse_pensum(SISTEMAS).unwrap();

    assert_eq!(pensum.carrera(), "Ingenieria en Ciencias y Sistemas");
    assert_eq!(pensum.semester_numbers().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(pensum.course_count(), 4);

    let calculo = pensum.curso("101").unwrap();
    assert_eq!(
        *calculo,
        Curso {
            codigo: "101".to_string(),
            nombre: "Matematica Basica 1".to_string(),
            creditos: 7,
            semestre: 1,
            descripcion: Some("Algebra, funciones y trigonometria".to_string()),
            area: Some("Ciencias Basicas".to_string()),
            obligatorio: Some(true),
            prerrequisitos: vec![],
        }
    );

    let deportes = pensum.curso("039").unwrap();
    assert_eq!(deportes.obligatorio, Some(false));
    assert_eq!(deportes.area, None);

    let programacion = pensum.curso("770").unwrap();
    assert_eq!(programacion.semestre, 2);
    assert_eq!(programacion.prerrequisitos, vec!["101", "039"]);

    let second: Vec<_> = pensum
        .semester(2)
        .unwrap()
        .iter()
        .map(|c| c.codigo.as_str())
        .collect();
    assert_eq!(second, vec!["103", "770"]);
}

#[test]
fn it_round_trips_a_minimal_program() {
    let input = r#"Carrera: "X" [ Semestre: 1 { Curso: 101 { Nombre: "A"; Creditos: 3; } } ]"#;
    let pensum = parse_pensum(input).unwrap();

    assert_eq!(pensum.carrera(), "X");
    let first = pensum.semester(1).unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].codigo, "101");
    assert_eq!(first[0].nombre, "A");
    assert_eq!(first[0].creditos, 3);
    assert_eq!(first[0].semestre, 1);
    assert!(std::ptr::eq(first[0], pensum.curso("101").unwrap()));
}

#[test]
fn it_reports_the_token_found_instead_of_a_semicolon() {
    let input = "Carrera: \"X\" [ Semestre: 1 {\n  Curso: 101 { Nombre: \"A\" }\n} ]";
    let tokens = tokenizer::analyze(input);
    assert!(tokens.errors.is_empty());

    let error = analyzer::parse(&tokens.tokens).unwrap_err();
    let found = error.found().unwrap();
    assert_eq!(found.text, "}");
    assert_eq!(found.line, 2);
    assert_eq!(
        error.to_string(),
        "Expected ';' after the course name - found LLAVE_CERRADA '}' at line 2"
    );
}

#[test]
fn it_accepts_semesters_without_a_program() {
    let input = r#"
        Semestre: 1 { Curso: 1 { Nombre: "Uno"; } }
        Semestre: 2 { Curso: 2 { Nombre: "Dos"; } }
    "#;
    let pensum = parse_pensum(input).unwrap();
    assert_eq!(pensum.carrera(), "");
    assert_eq!(pensum.semester_count(), 2);
    assert_eq!(pensum.curso("2").unwrap().semestre, 2);
}

#[test]
fn it_merges_repeated_semester_blocks() {
    let input = r#"Carrera: "X" [
        Semestre: 1 { Curso: 100 { Nombre: "Primero"; } }
        Semestre: 2 { }
        Semestre: 1 { Curso: 100 { Nombre: "Repetido"; } Curso: 101 { } }
    ]"#;
    let pensum = parse_pensum(input).unwrap();

    let blocks: Vec<_> = pensum.bloques().iter().map(|b| (b.numero, b.line)).collect();
    assert_eq!(blocks, vec![(1, 2), (2, 3), (1, 4)]);

    assert_eq!(pensum.semester_numbers().collect::<Vec<_>>(), vec![1, 2]);
    let first: Vec<_> = pensum
        .semester(1)
        .unwrap()
        .iter()
        .map(|c| c.nombre.as_str())
        .collect();
    assert_eq!(first, vec!["Primero", "Repetido", ""]);
    assert!(pensum.semester(2).unwrap().is_empty());

    // the code map keeps the latest course only
    assert_eq!(pensum.course_count(), 2);
    assert_eq!(pensum.curso("100").unwrap().nombre, "Repetido");
}

#[test]
fn it_skips_unknown_tokens_between_constructs() {
    let input = r#"
        Version = 3;
        Carrera: "X" [
            Nota: "sin semestre";
            Semestre: 1 { Electivo Curso: 5 { Profesor: "Y"; Creditos: 2; } }
        ]
        Fin
    "#;
    let pensum = parse_pensum(input).unwrap();
    assert_eq!(pensum.curso("5").unwrap().creditos, 2);
}

#[test]
fn it_fails_on_an_unclosed_semester() {
    let input = r#"Carrera: "X" [ Semestre: 1 { Curso: 1 { } "#;
    let tokens = tokenizer::analyze(input).tokens;
    let error = analyzer::parse(&tokens).unwrap_err();
    assert_eq!(
        error,
        ParseError::UnexpectedEof {
            message: "Expected '}' to close semester 1".to_string()
        }
    );
    assert_eq!(error.line(), None);
}

#[test]
fn it_tolerates_a_missing_closing_bracket() {
    let tokens = tokenizer::analyze(r#"Carrera: "X" [ Semestre: 1 { }"#).tokens;
    let pensum = analyzer::parse(&tokens).unwrap();
    assert_eq!(pensum.semester_count(), 1);
}

#[test]
fn it_parses_an_empty_token_stream() {
    let tokens = tokenizer::analyze("").tokens;
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert!(analyzer::parse(&tokens).unwrap().is_empty());
}

#[test]
fn it_does_not_panic_on_token_streams_with_lexical_errors() {
    for input in ["Semestre: 1 { Curso: 1 { Nombre: \"", "Carrera: ] ) } [", "Curso: 1 {{{"] {
        let output = tokenizer::analyze(input);
        assert!(output.has_errors(), "input: {}", input);
        let _ = analyzer::parse(&output.tokens);
    }
}

#[test]
fn it_rejects_lexically_invalid_source() {
    let error = parse_pensum("Carrera: \"X\" [ # ]").unwrap_err();
    let PensumError::Lexical(errors) = &error else {
        panic!("expected lexical errors, got {:?}", error);
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].column, 16);
}

#[test]
fn it_reports_out_of_range_numbers() {
    let error = parse_pensum("Semestre: 99999999999 { }").unwrap_err();
    assert!(matches!(
        error,
        PensumError::Parse(ParseError::NumberOutOfRange { line: 1, .. })
    ));
}
