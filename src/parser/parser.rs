//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and its entry point.
//! The parser pulls tokens from the lexer on demand and keeps exactly two
//! of them: the current token and one token of lookahead.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Every grammar function starts with the current token on the first token
//! of its construct and returns with it on the last one.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    reader::reader::CharStream,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser<R: CharStream> {
    /// The token source
    lexer: Lexer<R>,
    /// The token being parsed
    current_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<R>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup<R>,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup<R>,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<R: CharStream> Parser<R> {
    /// Creates a new Parser with its lookup tables registered.
    ///
    /// Pulls the first two tokens, so lexical errors at the very start of
    /// the input are reported here.
    pub fn new(mut lexer: Lexer<R>) -> Result<Self, Error> {
        let current_token = lexer.next_token()?;
        let peek_token = lexer.next_token()?;

        let mut parser = Parser {
            lexer,
            current_token,
            peek_token,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        Ok(parser)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token.kind
    }

    /// Moves the lookahead into the current slot and pulls a new lookahead.
    pub fn advance(&mut self) -> Result<(), Error> {
        let next = self.lexer.next_token()?;
        self.current_token = std::mem::replace(&mut self.peek_token, next);
        Ok(())
    }

    /// Advances past newline tokens sitting in the current slot.
    pub fn skip_newlines(&mut self) -> Result<(), Error> {
        while self.current_token.is(TokenKind::Newline) {
            self.advance()?;
        }
        Ok(())
    }

    /// Advances past any statement terminators sitting in the current slot.
    ///
    /// Used between statements, where blank lines and stray `;` carry no
    /// meaning.
    pub fn skip_terminators(&mut self) -> Result<(), Error> {
        while self.current_token.kind.is_terminator() {
            self.advance()?;
        }
        Ok(())
    }

    /// Advances onto the lookahead if it has the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or an `UnexpectedToken` error naming both kinds
    /// at the lookahead's position.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_token.is(expected_kind) {
            self.advance()?;
            Ok(self.current_token.clone())
        } else {
            Err(self.unexpected(expected_kind, &self.peek_token))
        }
    }

    /// Builds the error for finding `token` where `expected_kind` was required.
    pub fn unexpected(&self, expected_kind: TokenKind, token: &Token) -> Error {
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected: expected_kind.name().to_string(),
                received: token.kind.name().to_string(),
            },
            token.position,
        )
    }

    pub fn peek_is_terminator(&self) -> bool {
        self.peek_token.kind.is_terminator()
    }

    /// Binding power of the lookahead, `Lowest` for non-operators.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek_token.kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<R> {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<R> {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup<R> {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler<R>) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<R>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<R>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses statements until the end of the input.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        tracing::debug!("Parsing program");

        let result = self.parse_statements();

        match &result {
            Ok(program) => tracing::debug!(statements = program.len(), "Parsed program"),
            Err(error) => tracing::error!(%error, "Parsing aborted"),
        }

        result
    }

    fn parse_statements(&mut self) -> Result<Program, Error> {
        let mut program = Program::default();

        self.skip_terminators()?;

        while !self.current_token.is(TokenKind::EOF) {
            program.statements.push(parse_stmt(self)?);

            self.advance()?;
            self.skip_terminators()?;
        }

        Ok(program)
    }
}

/// Parses a token stream into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes all lookup tables, and parses all statements until EOF. The
/// first error aborts the whole parse.
pub fn parse<R: CharStream>(lexer: Lexer<R>) -> Result<Program, Error> {
    Parser::new(lexer)?.parse_program()
}
