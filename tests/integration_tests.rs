//! Integration tests for the full front end.
//!
//! These tests run whole source files through scanning and parsing and check
//! the resulting tree, its canonical rendering, and the collected diagnostics.

use brook::{
    ast::{
        ast::{Stmt, StmtType},
        statements::{FnDeclStmt, IfStmt, LetStmt},
    },
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::Parser,
};

#[test]
fn test_parse_simple_program() {
    let source = "let x = 42;";
    let lexer = Lexer::new("test.brook", source);
    let mut parser = Parser::new(lexer);

    let program = parser.parse();
    assert!(parser.errors().is_empty());
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.to_string(), "let x = 42;");
}

#[test]
fn test_parse_function_program() {
    let source = "\
fn max(a, b) {
    if a >= b {
        return a;
    }
    return b;
}

let biggest = max(3, 4.5);
";
    let lexer = Lexer::new("test.brook", source);
    let mut parser = Parser::new(lexer);

    let program = parser.parse();
    assert!(
        parser.errors().is_empty(),
        "errors: {:?}",
        parser
            .errors()
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
    );
    assert_eq!(program.statements.len(), 2);

    let decl = program.statements[0]
        .as_any()
        .downcast_ref::<FnDeclStmt>()
        .unwrap();
    assert_eq!(decl.ident.value, "max");
    assert_eq!(decl.value.parameters.len(), 2);
    assert_eq!(decl.value.body.statements.len(), 2);
    assert_eq!(
        decl.value.body.statements[0].get_stmt_type(),
        StmtType::IfStmt
    );

    let binding = program.statements[1]
        .as_any()
        .downcast_ref::<LetStmt>()
        .unwrap();
    assert_eq!(
        binding.init_value.as_ref().unwrap().to_string(),
        "max(3, 4.5)"
    );
}

#[test]
fn test_parse_else_if_chain_program() {
    let source = "\
if score >= 90 {
    let grade = \"A\";
} else if score >= 80 {
    let grade = \"B\";
} else {
    let grade = \"C\";
}
";
    let lexer = Lexer::new("test.brook", source);
    let mut parser = Parser::new(lexer);

    let program = parser.parse();
    assert!(parser.errors().is_empty());

    let stmt = program.statements[0]
        .as_any()
        .downcast_ref::<IfStmt>()
        .unwrap();
    assert_eq!(stmt.condition.to_string(), "(score >= 90)");
    assert_eq!(
        program.to_string(),
        "if (score >= 90) { let grade = \"A\"; } \
         else if (score >= 80) { let grade = \"B\"; } \
         else { let grade = \"C\"; }"
    );
}

#[test]
fn test_diagnostics_point_into_the_right_file() {
    let source = "let x = 1;\nlet = 2;";
    let lexer = Lexer::new("bad.brook", source);
    let mut parser = Parser::new(lexer);

    let program = parser.parse();
    assert_eq!(program.statements[0].get_stmt_type(), StmtType::LetStmt);

    assert!(!parser.errors().is_empty());
    let rendered = parser.errors()[0].to_string();
    assert!(rendered.starts_with("bad.brook:2:5"), "got: {rendered}");
}

#[test]
fn test_parse_continues_after_bad_statement() {
    let source = "let = 1;\nlet ok = 2;\nreturn ok;";
    let lexer = Lexer::new("test.brook", source);
    let mut parser = Parser::new(lexer);

    let program = parser.parse();
    assert!(!parser.errors().is_empty());

    // Later statements still made it into the tree.
    let kinds: Vec<StmtType> = program.iter().map(|s| s.get_stmt_type()).collect();
    assert!(kinds.contains(&StmtType::LetStmt));
    assert!(kinds.contains(&StmtType::ReturnStmt));
}

#[test]
fn test_tokenize_matches_parser_input() {
    let tokens = tokenize("test.brook", "let x = 1;");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Int,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_canonical_rendering_reparses_to_itself() {
    let source = "fn add(a, b) { return a + b; } let r = add(1, 2 * 3);";
    let lexer = Lexer::new("test.brook", source);
    let mut parser = Parser::new(lexer);
    let rendered = parser.parse().to_string();
    assert!(parser.errors().is_empty());

    let lexer = Lexer::new("test.brook", &rendered);
    let mut parser = Parser::new(lexer);
    let rerendered = parser.parse().to_string();
    assert!(parser.errors().is_empty());
    assert_eq!(rendered, rerendered);
}
