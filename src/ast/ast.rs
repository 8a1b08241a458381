use std::fmt::{Debug, Display};

use super::{
    expressions::{
        BooleanExpr, CharExpr, DecimalExpr, IfExpr, InfixExpr, IntegerExpr, PrefixExpr, StringExpr,
        SymbolExpr,
    },
    statements::{BlockStmt, ExpressionStmt, ReturnStmt, VarDeclStmt},
};

/// Node Trait
///
/// Every node exposes the spelling of the token that introduced it, and
/// renders (through [`Display`]) to its canonical parenthesized form.
pub trait Node: Debug + Display {
    fn token_literal(&self) -> &str;
}

/// Statement
///
/// A tagged union over every statement kind in the AST.
#[derive(Debug, Clone)]
pub enum Stmt {
    Expression(ExpressionStmt),
    VarDecl(VarDeclStmt),
    Return(ReturnStmt),
    Block(BlockStmt),
}

impl Node for Stmt {
    fn token_literal(&self) -> &str {
        match self {
            Stmt::Expression(stmt) => stmt.token_literal(),
            Stmt::VarDecl(stmt) => stmt.token_literal(),
            Stmt::Return(stmt) => stmt.token_literal(),
            Stmt::Block(stmt) => stmt.token_literal(),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Expression(stmt) => write!(f, "{}", stmt),
            Stmt::VarDecl(stmt) => write!(f, "{}", stmt),
            Stmt::Return(stmt) => write!(f, "{}", stmt),
            Stmt::Block(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression
///
/// A tagged union over every expression kind in the AST. Compound
/// expressions own their operands.
#[derive(Debug, Clone)]
pub enum Expr {
    Symbol(SymbolExpr),
    Integer(IntegerExpr),
    Decimal(DecimalExpr),
    Boolean(BooleanExpr),
    String(StringExpr),
    Char(CharExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
}

impl Expr {
    /// Whether the rendering is already wrapped in parentheses.
    pub fn is_parenthesized(&self) -> bool {
        matches!(self, Expr::Prefix(_) | Expr::Infix(_))
    }
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        match self {
            Expr::Symbol(expr) => expr.token_literal(),
            Expr::Integer(expr) => expr.token_literal(),
            Expr::Decimal(expr) => expr.token_literal(),
            Expr::Boolean(expr) => expr.token_literal(),
            Expr::String(expr) => expr.token_literal(),
            Expr::Char(expr) => expr.token_literal(),
            Expr::Prefix(expr) => expr.token_literal(),
            Expr::Infix(expr) => expr.token_literal(),
            Expr::If(expr) => expr.token_literal(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Symbol(expr) => write!(f, "{}", expr),
            Expr::Integer(expr) => write!(f, "{}", expr),
            Expr::Decimal(expr) => write!(f, "{}", expr),
            Expr::Boolean(expr) => write!(f, "{}", expr),
            Expr::String(expr) => write!(f, "{}", expr),
            Expr::Char(expr) => write!(f, "{}", expr),
            Expr::Prefix(expr) => write!(f, "{}", expr),
            Expr::Infix(expr) => write!(f, "{}", expr),
            Expr::If(expr) => write!(f, "{}", expr),
        }
    }
}

/// Program
///
/// The root of the tree: the top-level statements in source order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

/// Statements are written back to back. A `;` goes between two of them only
/// when the first ends and the next starts with a letter or digit, so that
/// `1; 2` renders `1;2` rather than `12`.
impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ends_in_word = false;

        for stmt in self.iter() {
            let rendered = stmt.to_string();

            if ends_in_word && rendered.starts_with(|c: char| c.is_ascii_alphanumeric()) {
                write!(f, ";")?;
            }
            write!(f, "{}", rendered)?;

            ends_in_word = rendered.ends_with(|c: char| c.is_ascii_alphanumeric());
        }

        Ok(())
    }
}
