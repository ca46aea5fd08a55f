//! Unit tests for the lexer module.

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("test.brook", "fn return let true false if else");

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Return);
    assert_eq!(tokens[2].kind, TokenKind::Let);
    assert_eq!(tokens[3].kind, TokenKind::True);
    assert_eq!(tokens[4].kind, TokenKind::False);
    assert_eq!(tokens[5].kind, TokenKind::If);
    assert_eq!(tokens[6].kind, TokenKind::Else);
    assert_eq!(tokens[7].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("test.brook", "foo bar baz_123 _underscore CamelCase iffy");

    for token in &tokens[..6] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[0].word, "foo");
    assert_eq!(tokens[2].word, "baz_123");
    assert_eq!(tokens[3].word, "_underscore");
    // A keyword prefix does not make an identifier a keyword.
    assert_eq!(tokens[5].word, "iffy");
    assert_eq!(tokens[6].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("test.brook", "42 3.14 0 100.5");

    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].word, "42");
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].word, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].word, "0");
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[3].word, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_second_dot_is_scan_error() {
    let tokens = tokenize("test.brook", "1.2.3");

    assert_eq!(tokens[0].kind, TokenKind::Float);
    assert_eq!(tokens[0].word, "1.2");
    assert_eq!(tokens[1].kind, TokenKind::Err);
    assert_eq!(tokens[1].word, ".");
    assert_eq!(tokens[2].kind, TokenKind::Int);
    assert_eq!(tokens[2].word, "3");
    assert_eq!(tokens[3].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize("test.brook", r#""hello" "" "multiple words""#);

    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].word, "hello");
    assert_eq!(tokens[1].kind, TokenKind::Str);
    assert_eq!(tokens[1].word, "");
    assert_eq!(tokens[2].kind, TokenKind::Str);
    assert_eq!(tokens[2].word, "multiple words");
    assert_eq!(tokens[3].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_strings_have_no_escapes() {
    // Backslashes are kept verbatim; no escape processing happens.
    let tokens = tokenize("test.brook", r#""a\nb""#);

    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].word, "a\\nb");
}

#[test]
fn test_tokenize_operators() {
    let tokens = tokenize("test.brook", "+ - * / == != < > <= >= = !");

    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::Dash);
    assert_eq!(tokens[2].kind, TokenKind::Star);
    assert_eq!(tokens[3].kind, TokenKind::Slash);
    assert_eq!(tokens[4].kind, TokenKind::Equals);
    assert_eq!(tokens[5].kind, TokenKind::NotEquals);
    assert_eq!(tokens[6].kind, TokenKind::Less);
    assert_eq!(tokens[7].kind, TokenKind::Greater);
    assert_eq!(tokens[8].kind, TokenKind::LessEquals);
    assert_eq!(tokens[9].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[10].kind, TokenKind::Assign);
    assert_eq!(tokens[11].kind, TokenKind::Bang);
    assert_eq!(tokens[12].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_compound_operator_fallback() {
    // No whitespace between the characters; `==` wins over `=` `=`.
    let tokens = tokenize("test.brook", "==!=<=>==");

    assert_eq!(tokens[0].kind, TokenKind::Equals);
    assert_eq!(tokens[1].kind, TokenKind::NotEquals);
    assert_eq!(tokens[2].kind, TokenKind::LessEquals);
    assert_eq!(tokens[3].kind, TokenKind::GreaterEquals);
    assert_eq!(tokens[4].kind, TokenKind::Assign);
    assert_eq!(tokens[5].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("test.brook", "( ) { } , ;");

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[3].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].kind, TokenKind::Semicolon);
    assert_eq!(tokens[6].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("test.brook", "let x = 5; // this is a comment\nlet y = 10;");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[3].word, "5");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Let);
    assert_eq!(tokens[6].word, "y");
}

#[test]
fn test_tokenize_unrecognised_character() {
    let tokens = tokenize("test.brook", "let x = @;");

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    // The bad byte becomes an Err token and scanning continues.
    assert_eq!(tokens[3].kind, TokenKind::Err);
    assert_eq!(tokens[3].word, "@");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Eof);
}

#[test]
fn test_line_and_column_tracking() {
    let tokens = tokenize("test.brook", "let x = 1;\n  let y = 2;");

    assert_eq!(tokens[0].loc.line, 1);
    assert_eq!(tokens[0].loc.column, 1);
    assert_eq!(tokens[1].loc.line, 1);
    assert_eq!(tokens[1].loc.column, 5);
    // Second statement starts on line 2 after two spaces of indent.
    assert_eq!(tokens[5].loc.line, 2);
    assert_eq!(tokens[5].loc.column, 3);
    assert_eq!(tokens[6].loc.line, 2);
    assert_eq!(tokens[6].loc.column, 7);
    assert_eq!(&*tokens[0].loc.file, "test.brook");
}

#[test]
fn test_next_token_keeps_returning_eof() {
    let mut lexer = Lexer::new("test.brook", "x");

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("test.brook", "let x = 42;");

    assert_eq!(tokens.len(), 6); // let, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].word, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assign);
    assert_eq!(tokens[3].kind, TokenKind::Int);
    assert_eq!(tokens[3].word, "42");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_function_declaration() {
    let tokens = tokenize("test.brook", "fn add(x, y) { x + y; }");

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].word, "add");
    assert_eq!(tokens[2].kind, TokenKind::OpenParen);
    assert_eq!(tokens[3].word, "x");
    assert_eq!(tokens[4].kind, TokenKind::Comma);
    assert_eq!(tokens[5].word, "y");
    assert_eq!(tokens[6].kind, TokenKind::CloseParen);
    assert_eq!(tokens[7].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[12].kind, TokenKind::CloseCurly);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("test.brook", "");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}
