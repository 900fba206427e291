//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the `Parser` cursor and the program-level loop.
//! The parser pulls tokens from its own `Lexer` and keeps two of them in
//! view: the current token and one token of lookahead.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Operator precedences
//!
//! Malformed statements never abort the parse. Their diagnostic is recorded
//! and parsing resumes at the next statement boundary.

use std::{collections::HashMap, mem};

use tracing::{debug, trace};

use crate::{
    ast::ast::{Node, Program},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, LEDHandler, LEDLookup, NUDHandler, NUDLookup, Precedence,
        PrecedenceLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens, owned by this parse run
    lexer: Lexer,
    /// The token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics recorded so far, in source order
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix operator precedence
    precedence_lookup: PrecedenceLookup,
}

impl Parser {
    /// Creates a parser over `lexer` with every rule registered and the
    /// current and peek tokens primed.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Advances to the next token and returns the previous current token.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek, next);
        mem::replace(&mut self.current, peek)
    }

    /// Advances onto the lookahead token if it is of the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or an `UnexpectedToken` error positioned at the
    /// offending token. The cursor does not move on failure.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    received: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ));
        }

        self.advance();
        Ok(self.current.clone())
    }

    /// Precedence of the lookahead token, `Lowest` when it is not an operator.
    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek.kind)
    }

    /// Precedence of the current token, `Lowest` when it is not an operator.
    pub fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current.kind)
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// Returns the statement handler registered for `kind`, if any.
    pub fn stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    /// Returns the prefix handler registered for `kind`, if any.
    pub fn nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    /// Returns the infix handler registered for `kind`, if any.
    pub fn led_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `precedence` - The precedence of this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, precedence: Precedence, led_fn: LEDHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Diagnostics recorded so far, in the order they were found.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Records `error` and skips the rest of the failed statement.
    ///
    /// Stops on the statement's closing `;`, at end of input, or at a `}` that
    /// closes the enclosing block: on it when the failure was already there,
    /// otherwise just before it. Block loops must not advance past a `}` left
    /// as the current token.
    pub fn recover(&mut self, error: Error) {
        debug!(
            error = %error,
            offset = error.get_position().0,
            "recording parse error"
        );
        self.errors.push(error);

        while !matches!(
            self.current.kind,
            TokenKind::Semicolon | TokenKind::EOF | TokenKind::CloseCurly
        ) && self.peek.kind != TokenKind::CloseCurly
        {
            self.advance();
        }
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    /// Parses statements until end of input.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current.kind != TokenKind::EOF {
            match parse_stmt(self) {
                Ok(stmt) => {
                    trace!(literal = stmt.token_literal(), "parsed statement");
                    program.statements.push(stmt);
                }
                Err(error) => self.recover(error),
            }
            self.advance();
        }

        program
    }
}

/// Parses a complete source into a `Program`.
///
/// This is the main entry point for parsing. It creates a lexer and parser
/// over the source and parses every statement until EOF.
///
/// # Arguments
///
/// * `source` - The program text
/// * `file` - Optional name of the source, used in positions
///
/// # Returns
///
/// A tuple containing:
/// - The Program, possibly missing the statements that failed to parse
/// - Every diagnostic recorded, in source order. Callers must check it
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.errors)
}
