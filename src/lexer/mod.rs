//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts a character
//! stream into tokens for parsing. It handles:
//!
//! - On-demand tokenization, one token per call
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
