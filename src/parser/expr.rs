use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::{
            BooleanExpr, CharExpr, DecimalExpr, IfExpr, InfixExpr, IntegerExpr, PrefixExpr,
            StringExpr, SymbolExpr,
        },
        statements::BlockStmt,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    reader::reader::CharStream,
    Position,
};

use super::{
    lookups::BindingPower,
    parser::Parser,
    stmt::{parse_block, parse_stmt},
};

pub fn parse_expr<R: CharStream>(parser: &mut Parser<R>, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixHandler {
                token: parser.current_token().value.clone(),
            },
            parser.current_token().position,
        ));
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than bp, keep folding into lhs
    while !parser.peek_is_terminator() && bp < parser.peek_binding_power() {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token_kind()).copied() else {
            return Ok(left);
        };

        let operator_bp = parser.peek_binding_power();
        parser.advance()?;
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr<R: CharStream>(parser: &mut Parser<R>) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Identifier => Ok(Expr::Symbol(SymbolExpr {
            value: token.value.clone(),
            token,
        })),
        TokenKind::IntegerLiteral => match token.value.parse::<i64>() {
            Ok(value) => Ok(Expr::Integer(IntegerExpr { token, value })),
            Err(_) => Err(number_parse_error(&token.value, token.position)),
        },
        TokenKind::DecimalLiteral => match token.value.parse::<f64>() {
            Ok(value) => Ok(Expr::Decimal(DecimalExpr { token, value })),
            Err(_) => Err(number_parse_error(&token.value, token.position)),
        },
        TokenKind::BooleanLiteral => Ok(Expr::Boolean(BooleanExpr {
            value: token.value == "true",
            token,
        })),
        TokenKind::StringLiteral => Ok(Expr::String(StringExpr {
            value: token.value.clone(),
            token,
        })),
        TokenKind::CharLiteral => match token.value.chars().next() {
            Some(value) => Ok(Expr::Char(CharExpr { token, value })),
            None => Err(parser.unexpected(TokenKind::CharLiteral, &token)),
        },
        _ => Err(Error::new(
            ErrorImpl::NoPrefixHandler { token: token.value },
            token.position,
        )),
    }
}

fn number_parse_error(spelling: &str, position: Position) -> Error {
    Error::new(
        ErrorImpl::NumberParseError {
            token: spelling.to_string(),
        },
        position,
    )
}

pub fn parse_prefix_expr<R: CharStream>(parser: &mut Parser<R>) -> Result<Expr, Error> {
    let operator = parser.current_token().clone();
    parser.advance()?;

    let right_expr = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        operator,
        right_expr: Box::new(right_expr),
    }))
}

/// Both operands are already bounded by `bp`, so operators of equal power
/// associate to the left.
pub fn parse_infix_expr<R: CharStream>(
    parser: &mut Parser<R>,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator = parser.current_token().clone();
    parser.advance()?;

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

/// `( <expr> )`. Returns the inner expression; the grouping leaves no node.
pub fn parse_grouping_expr<R: CharStream>(parser: &mut Parser<R>) -> Result<Expr, Error> {
    parser.advance()?;

    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

/// If Expression
///
/// `if ( <cond> ) <branch> [else <branch>]`
///
/// Newlines between the condition and a branch, and after `else`, are
/// skipped. A branch that is not a block is wrapped into a single-statement
/// block.
///
/// `else` must be the token right after the then-branch. A block branch ends
/// on its `}`, so `else` has to share that line. A single-statement branch
/// takes its own terminator, so `if (a) b\nelse c` is one expression.
pub fn parse_if_expr<R: CharStream>(parser: &mut Parser<R>) -> Result<Expr, Error> {
    let token = parser.current_token().clone();
    tracing::trace!(position = %token.position, "Parsing if expression");

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance()?;
    let condition = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.advance()?;
    parser.skip_newlines()?;
    let then_body = parse_branch(parser)?;

    let else_body = if parser.peek_token().is(TokenKind::Else) {
        parser.advance()?;
        parser.advance()?;
        parser.skip_newlines()?;
        Some(parse_branch(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        token,
        condition: Box::new(condition),
        then_body,
        else_body,
    }))
}

fn parse_branch<R: CharStream>(parser: &mut Parser<R>) -> Result<BlockStmt, Error> {
    if parser.current_token().is(TokenKind::OpenCurly) {
        return parse_block(parser);
    }

    let token = parser.current_token().clone();
    let stmt: Stmt = parse_stmt(parser)?;

    Ok(BlockStmt {
        token,
        body: vec![stmt],
    })
}
