//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Operators and punctuation, including two-character operators
//! - Keywords and identifiers
//! - Integer literals
//! - Illegal characters
//! - End of input behaviour

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_identifier, TokenKind},
};

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("=+(){},;".to_string(), None);

    let expected = [
        (TokenKind::Assignment, "="),
        (TokenKind::Plus, "+"),
        (TokenKind::OpenParen, "("),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Comma, ","),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, value)) in tokens.iter().zip(expected.iter()) {
        assert_eq!(token.kind, *kind);
        assert_eq!(token.value, *value);
    }
}

#[test]
fn test_tokenize_equals() {
    let tokens = tokenize("==".to_string(), None);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Equals);
    assert_eq!(tokens[0].value, "==");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_not_equals() {
    let tokens = tokenize("!=".to_string(), None);

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::NotEquals);
    assert_eq!(tokens[0].value, "!=");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("! - / * < > = ==".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Not);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Slash);
    assert_eq!(tokens[3].kind, TokenKind::Star);
    assert_eq!(tokens[4].kind, TokenKind::Less);
    assert_eq!(tokens[5].kind, TokenKind::Greater);
    assert_eq!(tokens[6].kind, TokenKind::Assignment);
    assert_eq!(tokens[7].kind, TokenKind::Equals);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_bang_then_assign() {
    // `! =` with a space is two tokens, `!==` is NOT_EQ followed by ASSIGN
    let spaced = tokenize("! =".to_string(), None);
    assert_eq!(spaced[0].kind, TokenKind::Not);
    assert_eq!(spaced[1].kind, TokenKind::Assignment);

    let packed = tokenize("!==".to_string(), None);
    assert_eq!(packed[0].kind, TokenKind::NotEquals);
    assert_eq!(packed[1].kind, TokenKind::Assignment);
    assert_eq!(packed[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("let return fn if else true false".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Return);
    assert_eq!(tokens[2].kind, TokenKind::Fn);
    assert_eq!(tokens[3].kind, TokenKind::If);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::True);
    assert_eq!(tokens[6].kind, TokenKind::False);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo _underscore CamelCase letter".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "_underscore");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "CamelCase");
    // keyword prefix does not make a keyword
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "letter");
}

#[test]
fn test_tokenize_digits_split_identifiers() {
    let tokens = tokenize("abc123def".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].value, "123");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "def");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let tokens = tokenize("5 838383 -15".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].value, "5");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].value, "838383");
    assert_eq!(tokens[2].kind, TokenKind::Dash);
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].value, "15");
}

#[test]
fn test_tokenize_program() {
    let source = "let five = 5;\nlet add = fn(x, y) {\n\tx + y;\r\n};\nlet result = add(five, 10);";
    let kinds: Vec<TokenKind> = tokenize(source.to_string(), None).iter().map(|t| t.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Let, TokenKind::Identifier, TokenKind::Assignment, TokenKind::Integer, TokenKind::Semicolon,
            TokenKind::Let, TokenKind::Identifier, TokenKind::Assignment, TokenKind::Fn, TokenKind::OpenParen,
            TokenKind::Identifier, TokenKind::Comma, TokenKind::Identifier, TokenKind::CloseParen, TokenKind::OpenCurly,
            TokenKind::Identifier, TokenKind::Plus, TokenKind::Identifier, TokenKind::Semicolon,
            TokenKind::CloseCurly, TokenKind::Semicolon,
            TokenKind::Let, TokenKind::Identifier, TokenKind::Assignment, TokenKind::Identifier, TokenKind::OpenParen,
            TokenKind::Identifier, TokenKind::Comma, TokenKind::Integer, TokenKind::CloseParen, TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_illegal_characters() {
    let tokens = tokenize("a @ b # é".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].value, "@");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].value, "#");
    assert_eq!(tokens[4].kind, TokenKind::Illegal);
    assert_eq!(tokens[4].value, "é");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_eof_is_repeatable() {
    let mut lexer = Lexer::new("x".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.value, "");
    }
}

#[test]
fn test_tokenize_empty_and_whitespace() {
    assert_eq!(tokenize(String::new(), None).len(), 1);

    let tokens = tokenize(" \t\r\n ".to_string(), None);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let x == 10;".to_string(), Some("test.monkey".to_string()));

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[2].span.start.0, 6);
    assert_eq!(tokens[2].span.end.0, 8);
    assert_eq!(tokens[3].span.start.0, 9);
    assert_eq!(*tokens[3].span.start.1, "test.monkey");
}

#[test]
fn test_lexer_iterator_stops_before_eof() {
    let lexer = Lexer::new("1 + 2".to_string(), None);
    let values: Vec<String> = lexer.map(|t| t.value).collect();

    assert_eq!(values, vec!["1", "+", "2"]);
}

#[test]
fn test_tokenize_is_deterministic() {
    let source = "let x = !(5 != 10) * y;".to_string();

    assert_eq!(tokenize(source.clone(), None), tokenize(source, None));
}

#[test]
fn test_lookup_identifier() {
    assert_eq!(lookup_identifier("let"), TokenKind::Let);
    assert_eq!(lookup_identifier("return"), TokenKind::Return);
    assert_eq!(lookup_identifier("fn"), TokenKind::Fn);
    assert_eq!(lookup_identifier("Let"), TokenKind::Identifier);
    assert_eq!(lookup_identifier("foobar"), TokenKind::Identifier);
}
