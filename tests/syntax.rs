use terracalc::{
    error::{Error, ErrorKind, LexicalErrorKind, ParseError},
    interpreter::{
        lexer::{TokenKind, scan},
        parser::core::{MAX_NESTING_DEPTH, is_function_declaration, parse},
    },
};

fn kinds(src: &str) -> Vec<TokenKind> {
    scan(src).unwrap_or_else(|e| panic!("`{src}` failed to scan: {e}"))
             .iter()
             .map(|t| t.kind)
             .collect()
}

fn printed(src: &str) -> String {
    parse(src).unwrap_or_else(|e| panic!("`{src}` failed to parse: {e}"))
              .unwrap_or_else(|| panic!("`{src}` parsed to nothing"))
              .to_string()
}

fn parse_error(src: &str) -> ParseError {
    match parse(src) {
        Err(Error::Parse(err)) => err,
        other => panic!("`{src}` should be a parse error, got {other:?}"),
    }
}

#[test]
fn single_character_tokens() {
    use TokenKind::{
        Asterisk, Caret, Comma, Equal, LeftParen, Minus, Modulo, Plus, RightParen, Slash,
    };
    assert_eq!(kinds("+ - * / % ^ ( ) = ,"),
               [Plus, Minus, Asterisk, Slash, Modulo, Caret, LeftParen, RightParen, Equal, Comma]);
}

#[test]
fn whitespace_is_insignificant() {
    assert_eq!(kinds("\t 1 \n+\n 2 "),
               [TokenKind::Number, TokenKind::Plus, TokenKind::Number]);
    assert!(kinds(" \t\n").is_empty());
}

#[test]
fn number_literal_forms() {
    for src in ["0", "42", "3.25", "3.", "1e3", "2.5E-3", "7e+2", "6.02e23"] {
        let tokens = scan(src).unwrap();
        assert_eq!(tokens.len(), 1, "`{src}`");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, src);
    }
}

#[test]
fn number_followed_by_identifier_splits() {
    assert_eq!(kinds("2x"), [TokenKind::Number, TokenKind::Identifier]);
}

#[test]
fn malformed_exponent_is_lexical_error() {
    for src in ["1e", "1.5E+", "3e-x", "2 * 4E"] {
        let err = scan(src).unwrap_err();
        assert_eq!(err.kind, LexicalErrorKind::MalformedNumber, "`{src}`");
        assert_eq!(err.message(), "Ill-formed number literal.");
    }
    assert!(!kinds("1e5 2.5E-3 7e+2 3.").contains(&TokenKind::MalformedNumber));
}

#[test]
fn invalid_character_reports_slice_and_offset() {
    let err = scan("2 # 3").unwrap_err();
    assert_eq!(err.kind, LexicalErrorKind::InvalidCharacter);
    assert_eq!(err.slice, "#");
    assert_eq!(err.offset, 2);

    assert!(scan("1\r").is_err());
    assert!(scan(".5").is_err());
}

#[test]
fn keyword_and_identifiers() {
    assert_eq!(kinds("mod"), [TokenKind::Mod]);
    assert_eq!(kinds("modulo _a1 π R"),
               [TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier]);
    assert_eq!(scan("π").unwrap()[0].lexeme, "π");
}

#[test]
fn binary_precedence_and_associativity() {
    assert_eq!(printed("2+3*4"), "(b[+]: 2, (b[*]: 3, 4))");
    assert_eq!(printed("1-2-3"), "(b[-]: (b[-]: 1, 2), 3)");
    assert_eq!(printed("a mod b * c"), "(b[*]: (b[mod]: (var: a), (var: b)), (var: c))");
    assert_eq!(printed("2^3^2"), "(b[^]: 2, (b[^]: 3, 2))");
}

#[test]
fn unary_forms() {
    assert_eq!(printed("-2^2"), "(u[-]: (b[^]: 2, 2))");
    assert_eq!(printed("2^-1"), "(b[^]: 2, (u[-]: 1))");
    assert_eq!(printed("--x"), "(u[-]: (u[-]: (var: x)))");
    assert_eq!(printed("+x"), "(u[+]: (var: x))");
    assert_eq!(printed("50%"), "(u[%]: 50)");
    assert_eq!(printed("2^3%"), "(b[^]: 2, (u[%]: 3))");
}

#[test]
fn groups_are_kept() {
    assert_eq!(printed("(1)"), "(1)");
    assert_eq!(printed("(1+2)*3"), "(b[*]: ((b[+]: 1, 2)), 3)");
}

#[test]
fn top_level_productions() {
    assert_eq!(printed("x = 1 + 2"), "x <- (b[+]: 1, 2)");
    assert_eq!(printed("f() = 1"), "f() -> 1");
    assert_eq!(printed("f(a,b)=a"), "f(a, b) -> (var: a)");
    assert_eq!(printed("f(1, 2)"), "(call f(1, 2))");
    assert_eq!(printed("f()"), "(call f())");
    assert_eq!(printed("g(f(x), -1)"), "(call g((call f((var: x))), (u[-]: 1)))");
}

#[test]
fn printing_is_deterministic() {
    let expr = parse("h(a, b) = sin(a)^2 + b mod 3 * 5%").unwrap().unwrap();
    assert_eq!(expr.to_string(), expr.to_string());
}

#[test]
fn blank_input_parses_to_nothing() {
    assert!(parse("").unwrap().is_none());
    assert!(parse("  \n\t").unwrap().is_none());
}

#[test]
fn declaration_lookahead() {
    let accepts = |src: &str| {
        let tokens = scan(src).unwrap();
        is_function_declaration(&tokens.iter().peekable())
    };
    assert!(accepts("f(x, y) = 1"));
    assert!(accepts("f() = 1"));
    assert!(!accepts("f(x, y)"));
    assert!(!accepts("f(x y) = 1"));
    assert!(!accepts("f(x,) = 1"));
    assert!(!accepts("f(1) = 1"));
    assert!(!accepts("f("));
    assert!(!accepts("x = 1"));
}

#[test]
fn malformed_declaration_falls_through_to_call() {
    let err = parse_error("f(1) = 2");
    assert_eq!(err.message(), "Expected end of expression.");
    assert!(matches!(err, ParseError::UnexpectedToken { ref token, .. } if token == "="));

    let err = parse_error("f(x,) = 2");
    assert_eq!(err.message(), "Expected expression.");
}

#[test]
fn parse_error_messages() {
    assert_eq!(parse_error("1 2").message(), "Expected end of expression.");
    assert_eq!(parse_error("(1").message(), "Expected ')' to close '('.");
    assert!(matches!(parse_error("(1"), ParseError::UnexpectedEndOfInput { .. }));
    assert_eq!(parse_error("f(1 2)").message(), "Expected ')' after call arguments.");
    assert_eq!(parse_error("x =").message(), "Unexpected end of string.");
    assert_eq!(parse_error("*").message(), "Expected expression.");
    assert_eq!(parse_error("5%%").message(), "Expected end of expression.");
}

#[test]
fn lexical_errors_surface_through_parse() {
    assert!(matches!(parse("1 + $"), Err(Error::Lexical(_))));
}

#[test]
fn nesting_limit_is_enforced_by_the_parser() {
    let deepest = format!("{}x{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert!(parse(&deepest).is_ok());

    for src in [format!("{}x{}", "(".repeat(MAX_NESTING_DEPTH + 1), ")".repeat(MAX_NESTING_DEPTH + 1)),
                format!("{}x", "+".repeat(MAX_NESTING_DEPTH + 1)),
                format!("2{}", "^2".repeat(MAX_NESTING_DEPTH + 1)),
                format!("{}x{}", "f(".repeat(MAX_NESTING_DEPTH + 1), ")".repeat(MAX_NESTING_DEPTH + 1))]
    {
        let err = parse_error(&src);
        assert_eq!(err, ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH });
        assert_eq!(Error::Parse(err).kind(), ErrorKind::Recursion);
    }
}

#[test]
fn flat_chains_are_not_nesting() {
    let src = vec!["a"; 50_000].join(" * ");
    let expected = format!("{}(var: a){}", "(b[*]: ".repeat(49_999), ", (var: a))".repeat(49_999));
    assert_eq!(printed(&src), expected);
}
