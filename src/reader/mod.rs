//! Source acquisition for the lexer.
//!
//! Exposes the character-stream interface the lexer pulls from, together
//! with a buffered file provider and a buffered in-memory string provider.

pub mod reader;
