use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanExpr, CallExpr, FunctionExpr, IdentifierExpr, IfExpr, InfixExpr, IntegerExpr,
            PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser, stmt::parse_block_stmt};

/// Parses an expression whose first token is the current token.
///
/// Infix operators are folded into the left-hand side for as long as the
/// upcoming operator binds tighter than `precedence`. On return the cursor
/// rests on the expression's last token.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(prefix) = parser.nud_handler(token_kind) else {
        return Err(Error::new(
            ErrorImpl::MissingPrefixRule { token: token_kind },
            parser.get_position(),
        ));
    };

    let mut left = prefix(parser)?;

    // Equal precedence stops the loop, which makes operators left-associative
    while parser.peek_token_kind() != TokenKind::Semicolon && precedence < parser.peek_precedence() {
        let Some(infix) = parser.led_handler(parser.peek_token_kind()) else {
            return Ok(left);
        };

        parser.advance();
        left = infix(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Identifier(IdentifierExpr::new(
        parser.current_token().clone(),
    )))
}

pub fn parse_integer_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match parse_integer_literal(&token.value) {
        Some(value) => Ok(Expr::Integer(IntegerExpr { token, value })),
        None => Err(Error::new(
            ErrorImpl::IntegerParseError {
                token: token.value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// Decimal, `0x` / `0o` / `0b` prefixed, or octal when a `0` is followed by
/// more digits (`010` is 8). `None` on overflow or bad digits.
pub(crate) fn parse_integer_literal(literal: &str) -> Option<i64> {
    let (digits, radix) = match literal.get(..2) {
        Some("0x") | Some("0X") => (&literal[2..], 16),
        Some("0o") | Some("0O") => (&literal[2..], 8),
        Some("0b") | Some("0B") => (&literal[2..], 2),
        _ if literal.len() > 1 && literal.starts_with('0') => (&literal[1..], 8),
        _ => (literal, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    i64::from_str_radix(digits, radix).ok()
}

pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    Ok(Expr::Boolean(BooleanExpr {
        value: token.kind == TokenKind::True,
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let right = parse_expr(parser, Precedence::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        right: Box::new(right),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let precedence = parser.current_precedence();
    let operator_token = parser.advance();
    let right = parse_expr(parser, precedence)?;

    Ok(Expr::Infix(InfixExpr {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // if (<condition>) { ... } else { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // fn(a, b) { ... }
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(FunctionExpr {
        token,
        parameters,
        body,
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<IdentifierExpr>, Error> {
    let mut parameters = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(parameters);
    }

    parameters.push(IdentifierExpr::new(parser.expect_peek(TokenKind::Identifier)?));

    while parser.peek_token_kind() == TokenKind::Comma {
        parser.advance();
        parameters.push(IdentifierExpr::new(parser.expect_peek(TokenKind::Identifier)?));
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, function: Expr) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    let mut arguments = vec![];

    if parser.peek_token_kind() == TokenKind::CloseParen {
        parser.advance();
    } else {
        parser.advance();
        arguments.push(parse_expr(parser, Precedence::Lowest)?);

        while parser.peek_token_kind() == TokenKind::Comma {
            parser.advance();
            parser.advance();
            arguments.push(parse_expr(parser, Precedence::Lowest)?);
        }

        parser.expect_peek(TokenKind::CloseParen)?;
    }

    Ok(Expr::Call(CallExpr {
        token,
        function: Box::new(function),
        arguments,
    }))
}
