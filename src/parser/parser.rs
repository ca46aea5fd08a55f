use std::collections::HashMap;

use crate::{
    ast::{ast::ExprWrapper, statements::Program},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    SrcLoc,
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, LedHandler, LedLookup, NudHandler, NudLookup, Precedence,
        PrecedenceLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Recursive descent parser with Pratt expression parsing.
///
/// Two tokens of lookahead are held at all times: `cur_token` is the token
/// under the cursor, `peek_token` the one after it. Statement handlers leave
/// the cursor on the last token of their statement; the top-level loop steps
/// past it.
///
/// Syntax errors never abort a pass. The failing statement is dropped, the
/// diagnostic is recorded in order, and parsing resumes at the next token.
pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<Error>,

    stmt_lookup: StmtLookup,
    nud_lookup: NudLookup,
    led_lookup: LedLookup,
    precedence_lookup: PrecedenceLookup,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Parser {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Parser {
            lexer,
            cur_token,
            peek_token,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };

        create_token_lookups(&mut parser);
        parser
    }

    /// Parses the whole token stream into a program. The returned program
    /// holds every statement that parsed cleanly; check [`Parser::errors`]
    /// afterwards.
    pub fn parse(&mut self) -> Program {
        let mut program = Program::new();

        while self.cur_kind() != TokenKind::Eof {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => self.record_error(error),
            }
            self.next_token();
        }

        program
    }

    /// Entry point for parsing a single expression, used by handlers and by
    /// callers that want an expression without statement context. Failure is
    /// recorded as a diagnostic and surfaces as `None`.
    pub fn parse_expression(&mut self, min: Precedence) -> Option<ExprWrapper> {
        match parse_expr(self, min) {
            Ok(expr) => Some(expr),
            Err(error) => {
                self.record_error(error);
                None
            }
        }
    }

    /// Diagnostics collected so far, in source order.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn record_error(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Advances both lookahead tokens by one.
    pub fn next_token(&mut self) -> Token {
        let next = self.lexer.next_token();
        std::mem::replace(
            &mut self.cur_token,
            std::mem::replace(&mut self.peek_token, next),
        )
    }

    /// Advances past the peek token if it has the given kind, making it the
    /// current token and returning a clone of it. Otherwise the cursor stays
    /// put and an `UnexpectedToken` diagnostic value is returned.
    pub fn expect_peek(&mut self, kind: TokenKind) -> Result<Token, Error> {
        if self.peek_kind() == kind {
            self.next_token();
            return Ok(self.cur_token.clone());
        }

        Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: kind,
                found: self.peek_token.word.clone(),
            },
            self.peek_token.loc.clone(),
        ))
    }

    pub fn cur_token(&self) -> &Token {
        &self.cur_token
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    pub fn cur_kind(&self) -> TokenKind {
        self.cur_token.kind
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    pub fn cur_loc(&self) -> SrcLoc {
        self.cur_token.loc.clone()
    }

    /// The binding power of the current token, `None` for non-operators.
    pub fn cur_precedence(&self) -> Precedence {
        self.precedence_lookup
            .get(&self.cur_token.kind)
            .copied()
            .unwrap_or(Precedence::None)
    }

    /// The binding power of the peek token, `None` for non-operators.
    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_lookup
            .get(&self.peek_token.kind)
            .copied()
            .unwrap_or(Precedence::None)
    }

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud_handler(&self, kind: TokenKind) -> Option<NudHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led_handler(&self, kind: TokenKind) -> Option<LedHandler> {
        self.led_lookup.get(&kind).copied()
    }

    // Registration methods, used by create_token_lookups. A led entry also
    // enters the precedence table; a nud entry deliberately does not, so a
    // prefix-only token never continues an expression loop.
    pub fn led(&mut self, kind: TokenKind, precedence: Precedence, handler: LedHandler) {
        self.led_lookup.insert(kind, handler);
        self.precedence_lookup.insert(kind, precedence);
    }

    pub fn nud(&mut self, kind: TokenKind, handler: NudHandler) {
        self.nud_lookup.insert(kind, handler);
    }

    pub fn stmt(&mut self, kind: TokenKind, handler: StmtHandler) {
        self.stmt_lookup.insert(kind, handler);
    }
}
