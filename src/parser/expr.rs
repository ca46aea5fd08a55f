use crate::{
    ast::{
        ast::ExprWrapper,
        expressions::{
            BoolExpr, CallExpr, FloatExpr, FnLiteralExpr, IdentExpr, InfixExpr, IntExpr,
            PrefixExpr, StrExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::Precedence, parser::Parser, stmt::parse_block};

/// Pratt expression loop. The current token must be the first token of the
/// expression; on success the cursor rests on its last token.
///
/// The strict `>` comparison makes same-level operators left-associative.
pub fn parse_expr(parser: &mut Parser, min: Precedence) -> Result<ExprWrapper, Error> {
    let nud = parser.get_nud_handler(parser.cur_kind()).ok_or_else(|| {
        Error::new(
            ErrorImpl::NoPrefixRule {
                kind: parser.cur_kind(),
                token: parser.cur_token().word.clone(),
            },
            parser.cur_loc(),
        )
    })?;

    let mut left = nud(parser)?;

    while parser.peek_precedence() > min {
        let led = match parser.get_led_handler(parser.peek_kind()) {
            Some(led) => led,
            None => break,
        };

        parser.next_token();
        left = led(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.cur_token().clone();
    let value = token.word.clone();

    Ok(ExprWrapper::new(IdentExpr { token, value }))
}

pub fn parse_int_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.cur_token().clone();
    // The scanner guarantees digits only, so the only failure left is range.
    let value = token.word.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParse {
                token: token.word.clone(),
            },
            token.loc.clone(),
        )
    })?;

    Ok(ExprWrapper::new(IntExpr { token, value }))
}

pub fn parse_float_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.cur_token().clone();
    let value = token.word.parse::<f64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParse {
                token: token.word.clone(),
            },
            token.loc.clone(),
        )
    })?;

    Ok(ExprWrapper::new(FloatExpr { token, value }))
}

pub fn parse_string_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.cur_token().clone();
    let value = token.word.clone();

    Ok(ExprWrapper::new(StrExpr { token, value }))
}

pub fn parse_bool_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.cur_token().clone();
    let value = token.kind == TokenKind::True;

    Ok(ExprWrapper::new(BoolExpr { token, value }))
}

/// `-` or `!` in prefix position. The operand binds at `Prefix`, tighter
/// than any infix operator, so `-a * b` parses as `((-a) * b)`.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.cur_token().clone();
    let operator = token.word.clone();

    parser.next_token();
    let right = parse_expr(parser, Precedence::Prefix)?;

    Ok(ExprWrapper::new(PrefixExpr {
        token,
        operator,
        right,
    }))
}

/// `(` in prefix position: a parenthesized subexpression. Grouping leaves no
/// node of its own behind.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    parser.next_token();
    let inner = parse_expr(parser, Precedence::None)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(inner)
}

/// Any binary operator. The right side binds at the operator's own level;
/// combined with the strict loop comparison that yields left associativity.
pub fn parse_infix_expr(parser: &mut Parser, left: ExprWrapper) -> Result<ExprWrapper, Error> {
    let token = parser.cur_token().clone();
    let operator = token.word.clone();
    let precedence = parser.cur_precedence();

    parser.next_token();
    let right = parse_expr(parser, precedence)?;

    Ok(ExprWrapper::new(InfixExpr {
        token,
        operator,
        left,
        right,
    }))
}

/// `(` in infix position: a call on whatever expression came before it.
/// Arguments are full expressions separated by commas; the cursor ends on
/// the closing paren.
pub fn parse_call_expr(parser: &mut Parser, callee: ExprWrapper) -> Result<ExprWrapper, Error> {
    let token = parser.cur_token().clone();
    let mut arguments = vec![];

    if parser.peek_kind() == TokenKind::CloseParen {
        parser.next_token();
    } else {
        parser.next_token();
        arguments.push(parse_expr(parser, Precedence::None)?);

        while parser.peek_kind() == TokenKind::Comma {
            parser.next_token();
            parser.next_token();
            arguments.push(parse_expr(parser, Precedence::None)?);
        }

        parser.expect_peek(TokenKind::CloseParen)?;
    }

    Ok(ExprWrapper::new(CallExpr {
        token,
        callee,
        arguments,
    }))
}

/// `fn` in expression position: an anonymous function literal.
pub fn parse_fn_literal_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.cur_token().clone();
    let literal = parse_fn_literal(parser, token)?;

    Ok(ExprWrapper::new(literal))
}

/// Shared tail of function parsing: parameter list plus block body. The
/// current token must be the `fn` keyword (anonymous form) or the name
/// (declaration form); the cursor ends on the body's closing curly.
pub fn parse_fn_literal(parser: &mut Parser, token: Token) -> Result<FnLiteralExpr, Error> {
    parser.expect_peek(TokenKind::OpenParen)?;

    let mut parameters = vec![];
    if parser.peek_kind() == TokenKind::CloseParen {
        parser.next_token();
    } else {
        let ident_token = parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(IdentExpr {
            value: ident_token.word.clone(),
            token: ident_token,
        });

        while parser.peek_kind() == TokenKind::Comma {
            parser.next_token();
            let ident_token = parser.expect_peek(TokenKind::Identifier)?;
            parameters.push(IdentExpr {
                value: ident_token.word.clone(),
                token: ident_token,
            });
        }

        parser.expect_peek(TokenKind::CloseParen)?;
    }

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block(parser)?;

    Ok(FnLiteralExpr {
        token,
        parameters,
        body,
    })
}
