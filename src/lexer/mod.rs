//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts Monkey source
//! into tokens for the parser. It handles:
//!
//! - Pull-based tokenization, one token per call, using anchored regex patterns
//! - Recognition of keywords, identifiers, integers and operators
//! - Illegal characters, reported as tokens rather than errors
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
