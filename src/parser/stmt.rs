use crate::{
    ast::{
        ast::Stmt,
        expressions::SymbolExpr,
        statements::{BlockStmt, ExpressionStmt, ReturnStmt, VarDeclStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    reader::reader::CharStream,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

pub fn parse_stmt<R: CharStream>(parser: &mut Parser<R>) -> Result<Stmt, Error> {
    let stmt_fn = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();

    match stmt_fn {
        Some(stmt_fn) => stmt_fn(parser),
        None => parse_expression_stmt(parser),
    }
}

/// A bare expression. A terminator right after it belongs to the statement.
pub fn parse_expression_stmt<R: CharStream>(parser: &mut Parser<R>) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    tracing::trace!(position = %token.position, "Parsing expression statement");

    let expression = parse_expr(parser, BindingPower::Lowest)?;

    if parser.peek_is_terminator() {
        parser.advance()?;
    }

    Ok(Stmt::Expression(ExpressionStmt { token, expression }))
}

/// `var <identifier> = <expr>`
///
/// Ends on the last token of the value; any terminator after it is skipped
/// by the enclosing statement list.
pub fn parse_var_decl_stmt<R: CharStream>(parser: &mut Parser<R>) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    tracing::trace!(position = %token.position, "Parsing variable declaration");

    let name = parser.expect_peek(TokenKind::Identifier)?;
    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance()?;

    let assigned_value = parse_expr(parser, BindingPower::Lowest)?;

    Ok(Stmt::VarDecl(VarDeclStmt {
        token,
        identifier: SymbolExpr {
            value: name.value.clone(),
            token: name,
        },
        assigned_value,
    }))
}

/// `return [<expr>]`
pub fn parse_return_stmt<R: CharStream>(parser: &mut Parser<R>) -> Result<Stmt, Error> {
    let token = parser.current_token().clone();
    tracing::trace!(position = %token.position, "Parsing return statement");

    let ends_here = parser.peek_is_terminator()
        || matches!(
            parser.peek_token_kind(),
            TokenKind::CloseCurly | TokenKind::Else | TokenKind::EOF
        );

    let value = if ends_here {
        None
    } else {
        parser.advance()?;
        Some(parse_expr(parser, BindingPower::Lowest)?)
    };

    if parser.peek_is_terminator() {
        parser.advance()?;
    }

    Ok(Stmt::Return(ReturnStmt { token, value }))
}

pub fn parse_block_stmt<R: CharStream>(parser: &mut Parser<R>) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// `{ <stmt>* }`, ending on the closing brace.
pub fn parse_block<R: CharStream>(parser: &mut Parser<R>) -> Result<BlockStmt, Error> {
    let token = parser.current_token().clone();
    tracing::trace!(position = %token.position, "Parsing block");

    parser.advance()?;
    parser.skip_terminators()?;

    let mut body = Vec::new();
    while !parser.current_token().is(TokenKind::CloseCurly) {
        if parser.current_token().is(TokenKind::EOF) {
            return Err(parser.unexpected(TokenKind::CloseCurly, parser.current_token()));
        }

        body.push(parse_stmt(parser)?);

        parser.advance()?;
        parser.skip_terminators()?;
    }

    Ok(BlockStmt { token, body })
}
