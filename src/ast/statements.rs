use std::{fmt::Display, slice::Iter};

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, Node, Stmt},
    expressions::SymbolExpr,
};

/// Block Statement
///
/// Marks a lexical scope boundary. No symbols are resolved here.
#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub token: Token,
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

impl Node for BlockStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ ")?;
        for stmt in self.iter() {
            write!(f, "{} ", stmt)?;
        }
        write!(f, "}}")
    }
}

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Expr,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Variable Declaration Statement
/// `var <identifier> = <value>`
#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub token: Token,
    pub identifier: SymbolExpr,
    pub assigned_value: Expr,
}

impl Node for VarDeclStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for VarDeclStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} = {};",
            self.token.value, self.identifier, self.assigned_value
        )
    }
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expr>,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {};", self.token.value, value),
            None => write!(f, "{};", self.token.value),
        }
    }
}
