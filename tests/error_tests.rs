/// Every failure category surfaces as a distinguishable error
use veclang::{execute, Error, ErrorKind, Interpreter, InterpreterConfig};

fn kind_of(source: &str) -> ErrorKind {
    execute(source).unwrap_err().kind()
}

#[test]
fn test_undefined_variable_is_name_error() {
    let err = execute("print 'x:', x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Name);
    assert_eq!(err.to_string(), "Undefined variable: x");
}

#[test]
fn test_unterminated_string_is_lex_error() {
    assert_eq!(kind_of("print 'abc"), ErrorKind::Lex);
    assert_eq!(kind_of("print \"abc\nprint 1"), ErrorKind::Lex);
}

#[test]
fn test_unsupported_character_is_lex_error() {
    let err = execute("x = [1] - [2]").unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedCharacter {
            ch: '-',
            line: 1,
            col: 9
        }
    );
}

#[test]
fn test_missing_bracket_is_syntax_error() {
    assert_eq!(kind_of("x = [1,2"), ErrorKind::Syntax);
    assert_eq!(kind_of("print [1,2"), ErrorKind::Syntax);
}

#[test]
fn test_missing_equal_is_syntax_error() {
    let err = execute("x [1]").unwrap_err();
    assert!(err.to_string().contains("Expected EQUAL"));
}

#[test]
fn test_bad_statement_start_is_syntax_error() {
    assert_eq!(kind_of("'loose string'"), ErrorKind::Syntax);
    assert_eq!(kind_of("5"), ErrorKind::Syntax);
    assert_eq!(kind_of("x = 'a' + [1]"), ErrorKind::Syntax);
}

#[test]
fn test_scalar_by_scalar_is_type_error() {
    let err = execute("x = 2 * 3").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    assert_eq!(err.to_string(), "Invalid operation: * on types integer and integer");

    assert_eq!(kind_of("x = 1 + 2"), ErrorKind::Type);
    assert_eq!(kind_of("x = 2 * [1]"), ErrorKind::Type);
}

#[test]
fn test_nested_vector_is_type_error() {
    assert_eq!(kind_of("x = [[1, 2]]"), ErrorKind::Type);
    assert_eq!(kind_of("v = [1]\nx = [v]"), ErrorKind::Type);
}

#[test]
fn test_overflow_is_arithmetic_error() {
    assert_eq!(
        kind_of("x = [9223372036854775807] * 2"),
        ErrorKind::Arithmetic
    );
}

#[test]
fn test_huge_literal_is_lex_error() {
    assert_eq!(kind_of("x = [9223372036854775808]"), ErrorKind::Lex);
}

#[test]
fn test_error_aborts_remaining_statements() {
    let mut interp = Interpreter::with_output(Vec::new());
    let result = interp.run("print [1]\nx = 2 * 3\nprint [2]");
    assert!(result.is_err());
    assert!(!interp.env().exists("x"));
    assert_eq!(String::from_utf8(interp.into_output()).unwrap(), "[1]\n");
}

#[test]
fn test_output_failure_is_io_error() {
    struct Broken;

    impl std::io::Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut interp = Interpreter::with_output(Broken);
    let err = interp.run("print [1]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn test_deep_brackets_are_syntax_error() {
    let source = format!("x = {}1", "[".repeat(100_000));
    let err = execute(&source).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert!(err.to_string().contains("nested deeper than"));
}

#[test]
fn test_oversized_vector_literal_is_resource_error() {
    let config = InterpreterConfig {
        max_vector_len: 3,
        ..InterpreterConfig::default()
    };
    let mut interp = Interpreter::with_config(Vec::new(), config);
    let err = interp.run("x = [1, 2, 3, 4]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Resource);
    assert_eq!(err, Error::VectorTooLarge { len: 4, limit: 3 });
}

#[test]
fn test_bad_config_is_config_error() {
    let err = InterpreterConfig::from_json("{\"max_vector_len\": -1}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert!(matches!(err, Error::InvalidConfig(_)));
}
