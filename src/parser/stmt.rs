use crate::{
    ast::{
        ast::StmtWrapper,
        expressions::IdentExpr,
        statements::{
            BlockStmt, ElseBranch, ExpressionStmt, FnDeclStmt, IfStmt, LetStmt, ReturnStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_fn_literal},
    lookups::Precedence,
    parser::Parser,
};

/// Dispatches on the current token's statement handler; anything without one
/// is an expression statement. Handlers leave the cursor on the statement's
/// last token.
pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    if let Some(handler) = parser.get_stmt_handler(parser.cur_kind()) {
        return handler(parser);
    }

    let token = parser.cur_token().clone();
    let expression = parse_expr(parser, Precedence::None)?;

    // The trailing semicolon is optional for expression statements.
    if parser.peek_kind() == TokenKind::Semicolon {
        parser.next_token();
    }

    Ok(StmtWrapper::new(ExpressionStmt { token, expression }))
}

/// `let name;` or `let name = expr;`. The semicolon is mandatory.
pub fn parse_let_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.cur_token().clone();

    let ident_token = parser.expect_peek(TokenKind::Identifier)?;
    let ident = IdentExpr {
        value: ident_token.word.clone(),
        token: ident_token,
    };

    let init_value = if parser.peek_kind() == TokenKind::Assign {
        parser.next_token();
        parser.next_token();
        Some(parse_expr(parser, Precedence::None)?)
    } else {
        None
    };

    parser.expect_peek(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(LetStmt {
        token,
        ident,
        init_value,
    }))
}

/// `fn name(params) { body }`. In statement position the name is required;
/// the anonymous form only exists as an expression.
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.cur_token().clone();

    let ident_token = parser.expect_peek(TokenKind::Identifier)?;
    let ident = IdentExpr {
        value: ident_token.word.clone(),
        token: ident_token,
    };

    let value = parse_fn_literal(parser, token.clone())?;

    Ok(StmtWrapper::new(FnDeclStmt {
        token,
        ident,
        value,
    }))
}

/// `return;` or `return expr;`. The semicolon is mandatory.
pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.cur_token().clone();

    let value = if parser.peek_kind() == TokenKind::Semicolon {
        None
    } else {
        parser.next_token();
        Some(parse_expr(parser, Precedence::None)?)
    };

    parser.expect_peek(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(ReturnStmt { token, value }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    Ok(StmtWrapper::new(parse_if(parser)?))
}

/// `if cond { } [else if ... | else { }]`. The condition needs no parens;
/// both branches must be braced blocks. Else-if chains recurse.
fn parse_if(parser: &mut Parser) -> Result<IfStmt, Error> {
    let token = parser.cur_token().clone();

    parser.next_token();
    let condition = parse_expr(parser, Precedence::None)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let then = parse_block(parser)?;

    let else_branch = if parser.peek_kind() == TokenKind::Else {
        parser.next_token();

        if parser.peek_kind() == TokenKind::If {
            parser.next_token();
            Some(ElseBranch::If(Box::new(parse_if(parser)?)))
        } else {
            parser.expect_peek(TokenKind::OpenCurly)?;
            Some(ElseBranch::Block(parse_block(parser)?))
        }
    } else {
        None
    };

    Ok(IfStmt {
        token,
        condition,
        then,
        else_branch,
    })
}

/// A free-standing braced block in statement position.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    Ok(StmtWrapper::new(parse_block(parser)?))
}

/// Parses the statements between the current `{` and its matching `}`.
///
/// Inner statement failures are recorded on the parser and the block keeps
/// going, so one bad statement cannot take its siblings down with it. Only
/// running out of input before the closing curly fails the block itself.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.cur_token().clone();
    let mut statements = vec![];

    parser.next_token();
    while parser.cur_kind() != TokenKind::CloseCurly {
        if parser.cur_kind() == TokenKind::Eof {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::CloseCurly,
                    found: parser.cur_token().word.clone(),
                },
                parser.cur_loc(),
            ));
        }

        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => parser.record_error(error),
        }
        parser.next_token();
    }

    Ok(BlockStmt { token, statements })
}
