use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
    reader::reader::CharStream,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler<R> = fn(&mut Parser<R>) -> Result<Stmt, Error>;
pub type NUDHandler<R> = fn(&mut Parser<R>) -> Result<Expr, Error>;
pub type LEDHandler<R> = fn(&mut Parser<R>, Expr, BindingPower) -> Result<Expr, Error>;

pub fn create_token_lookups<R: CharStream>(parser: &mut Parser<R>) {
    // Equality
    parser.led(TokenKind::Equals, BindingPower::Equals, parse_infix_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Equals, parse_infix_expr);

    // Relational
    parser.led(TokenKind::Less, BindingPower::LessGreater, parse_infix_expr);
    parser.led(TokenKind::LessEquals, BindingPower::LessGreater, parse_infix_expr);
    parser.led(TokenKind::Greater, BindingPower::LessGreater, parse_infix_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Sum, parse_infix_expr);
    parser.led(TokenKind::Minus, BindingPower::Sum, parse_infix_expr);
    parser.led(TokenKind::Star, BindingPower::Product, parse_infix_expr);
    parser.led(TokenKind::Slash, BindingPower::Product, parse_infix_expr);

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::IntegerLiteral, parse_primary_expr);
    parser.nud(TokenKind::DecimalLiteral, parse_primary_expr);
    parser.nud(TokenKind::BooleanLiteral, parse_primary_expr);
    parser.nud(TokenKind::StringLiteral, parse_primary_expr);
    parser.nud(TokenKind::CharLiteral, parse_primary_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
    parser.nud(TokenKind::If, parse_if_expr);

    // Statements
    parser.stmt(TokenKind::Var, parse_var_decl_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup<R> = HashMap<TokenKind, StmtHandler<R>>;
pub type NUDLookup<R> = HashMap<TokenKind, NUDHandler<R>>;
pub type LEDLookup<R> = HashMap<TokenKind, LEDHandler<R>>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
