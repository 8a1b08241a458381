//! Error types and error handling for the front end.
//!
//! This module defines the error types shared by the reader, lexer and
//! parser. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical, parse and I/O failures
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
