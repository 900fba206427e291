//! Error types for the parser.
//!
//! This module defines the diagnostics collected while parsing. It includes:
//!
//! - Error structures with source position information
//! - Specific variants for structural and integer-literal failures
//! - Error formatting and suggestions for the caret display

pub mod errors;

#[cfg(test)]
mod tests;
