use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, Node},
    statements::BlockStmt,
};

// LITERALS

/// Symbol Expression
/// Represents an identifier in the AST.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub token: Token,
    pub value: String,
}

impl Node for SymbolExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for SymbolExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub token: Token,
    pub value: i64,
}

impl Node for IntegerExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

/// Decimal Expression
/// Represents a decimal literal in the AST.
///
/// Renders its source spelling, so `1.50` stays `1.50`.
#[derive(Debug, Clone)]
pub struct DecimalExpr {
    pub token: Token,
    pub value: f64,
}

impl Node for DecimalExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for DecimalExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

/// Boolean Expression
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
}

impl Node for BooleanExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

/// String Expression
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub token: Token,
    pub value: String,
}

impl Node for StringExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for StringExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.value)
    }
}

/// Char Expression
#[derive(Debug, Clone)]
pub struct CharExpr {
    pub token: Token,
    pub value: char,
}

impl Node for CharExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for CharExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.value)
    }
}

// COMPLEX

/// Prefix Expression
/// Represents a unary operation (`!x`, `-x`) in the AST.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right_expr: Box<Expr>,
}

impl Node for PrefixExpr {
    fn token_literal(&self) -> &str {
        &self.operator.value
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator.value, self.right_expr)
    }
}

/// Infix Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

impl Node for InfixExpr {
    fn token_literal(&self) -> &str {
        &self.operator.value
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator.value, self.right)
    }
}

/// If Expression
/// A conditional that yields the value of the branch taken.
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expr>,
    pub then_body: BlockStmt,
    pub else_body: Option<BlockStmt>,
}

impl Node for IfExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.condition.is_parenthesized() {
            write!(f, "if {} {}", self.condition, self.then_body)?;
        } else {
            write!(f, "if ({}) {}", self.condition, self.then_body)?;
        }

        if let Some(else_body) = &self.else_body {
            write!(f, " else {}", else_body)?;
        }

        Ok(())
    }
}
