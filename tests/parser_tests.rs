//! End-to-end scanner and parser scenarios

use monkey_lang::parser::{Expression, Statement};
use monkey_lang::{parse, Lexer, Node, Token, TokenKind};
use pretty_assertions::assert_eq;

fn render(source: &str) -> String {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected errors for {:?}: {:?}", source, errors);
    program.to_string()
}

#[test]
fn test_let_binding_names_and_values() {
    let cases = [
        ("let a = 1;", "a", "1"),
        ("let total = a * (b + c);", "total", "(a * (b + c))"),
        ("let apply = fn(f, x) { f(x) };", "apply", "fn(f, x) f(x)"),
        ("let flag = !(1 < 2) == false;", "flag", "((!(1 < 2)) == false)"),
    ];

    for (source, expected_name, expected_value) in cases {
        let (program, errors) = parse(source);
        assert!(errors.is_empty());

        match &program.statements[..] {
            [Statement::Let { name, value, .. }] => {
                assert_eq!(name.value, expected_name);
                assert_eq!(value.to_string(), expected_value);
            }
            other => panic!("expected a single let statement, got {:?}", other),
        }
    }
}

#[test]
fn test_precedence_renderings() {
    assert_eq!(render("-a * b"), "((-a) * b)");
    assert_eq!(render("a + b * c"), "(a + (b * c))");
    assert_eq!(render("a + b + c"), "((a + b) + c)");
    assert_eq!(render("1 + (2 + 3) + 4"), "((1 + (2 + 3)) + 4)");
    assert_eq!(render("!(true == true)"), "(!(true == true))");
}

#[test]
fn test_let_identifier_round_trip() {
    let (program, errors) = parse("let myVar = anotherVar;");
    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 1);

    match &program.statements[0] {
        Statement::Let { name, value, .. } => {
            assert_eq!(name.value, "myVar");
            match value {
                Expression::Identifier(ident) => assert_eq!(ident.value, "anotherVar"),
                other => panic!("expected identifier, got {:?}", other),
            }
        }
        other => panic!("expected let statement, got {:?}", other),
    }

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_scanner_token_sequence() {
    let mut lexer = Lexer::new("let x = 5 + 5;");
    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Ident, "x"),
        (TokenKind::Assign, "="),
        (TokenKind::Int, "5"),
        (TokenKind::Plus, "+"),
        (TokenKind::Int, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Eof, ""),
    ];

    for (kind, literal) in expected {
        assert_eq!(lexer.next_token(), Token::new(kind, literal));
    }
    for _ in 0..5 {
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}

#[test]
fn test_two_character_operators() {
    for (source, kind) in [("==", TokenKind::Eq), ("!=", TokenKind::NotEq)] {
        let tokens = Lexer::new(source).tokenize();
        assert_eq!(tokens, vec![Token::new(kind, source), Token::eof()]);
    }
}

#[test]
fn test_missing_assign_in_let() {
    let (program, errors) = parse("let x 5;");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "expected next token to be =, got INT instead");
    assert!(!program
        .statements
        .iter()
        .any(|s| matches!(s, Statement::Let { .. })));
}

#[test]
fn test_illegal_character() {
    let tokens = Lexer::new("@").tokenize();
    assert_eq!(tokens, vec![Token::new(TokenKind::Illegal, "@"), Token::eof()]);

    let tokens = Lexer::new("a @ b").tokenize();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![TokenKind::Ident, TokenKind::Illegal, TokenKind::Ident, TokenKind::Eof]
    );
}

#[test]
fn test_function_and_call_rendering() {
    let (program, errors) = parse("fn(x, y) { x + y; }");
    assert!(errors.is_empty());

    match &program.statements[0] {
        Statement::Expression { expression: Expression::Function { parameters, .. }, .. } => {
            let rendered: Vec<String> = parameters.iter().map(|p| p.to_string()).collect();
            assert_eq!(rendered.join(", "), "x, y");
        }
        other => panic!("expected function literal, got {:?}", other),
    }

    assert_eq!(render("add(1, 2 * 3)"), "add(1, (2 * 3))");
}

#[test]
fn test_errors_do_not_stop_the_parse() {
    let (program, errors) = parse("let = 1; let y = 2;");

    assert_eq!(
        errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
        vec![
            "expected next token to be IDENT, got = instead",
            "no prefix parse function for = found",
        ]
    );
    assert_eq!(program.to_string(), "1let y = 2;");
}

#[test]
fn test_repeated_parses_are_independent() {
    let first = parse("a + b");
    let second = parse("a + b");
    assert_eq!(first, second);
}
