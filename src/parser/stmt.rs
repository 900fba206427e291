use crate::{
    ast::{
        ast::Stmt,
        expressions::IdentifierExpr,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::parser::Parser;

/// Parses one statement starting at the current token.
///
/// On success the cursor rests on the statement's last token: its `;` when
/// one is present.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.stmt_handler(parser.current_token_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

/// Consumes an optional trailing `;`.
fn skip_semicolon(parser: &mut Parser) {
    if parser.peek_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let name = IdentifierExpr::new(parser.expect_peek(TokenKind::Identifier)?);
    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;
    skip_semicolon(parser);

    Ok(Stmt::Let(LetStmt { token, name, value }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    if parser
        .peek_token()
        .is_one_of_many(&[TokenKind::Semicolon, TokenKind::EOF])
    {
        skip_semicolon(parser);
        return Ok(Stmt::Return(ReturnStmt { token, value: None }));
    }

    parser.advance();
    let value = parse_expr(parser, Precedence::Lowest)?;
    skip_semicolon(parser);

    Ok(Stmt::Return(ReturnStmt {
        token,
        value: Some(value),
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, Precedence::Lowest)?;
    skip_semicolon(parser);

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// Parses `{ ... }` with the cursor on the opening brace. Leaves the cursor
/// on the closing brace.
///
/// Failed inner statements are recorded on the parser and skipped, the same
/// way the program loop does it.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let mut statements = Vec::new();
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => {
                parser.recover(error);
                if parser.current_token_kind() == TokenKind::CloseCurly {
                    break;
                }
            }
        }
        parser.advance();
    }

    if parser.current_token_kind() == TokenKind::EOF {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::CloseCurly,
                received: TokenKind::EOF,
            },
            parser.get_position(),
        ));
    }

    Ok(BlockStmt { token, statements })
}
