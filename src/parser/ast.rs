//! Abstract Syntax Tree definitions
//!
//! This module defines the AST node types for the Monkey language. Every
//! node except [`Program`] keeps the token it was built from, and every node
//! renders back to a canonical, fully parenthesized form through `Display`.

use std::fmt;

use crate::lexer::Token;

/// Behavior shared by all AST nodes
pub trait Node: fmt::Display {
    /// Literal text of the token the node originates from
    fn token_literal(&self) -> &str;
}

/// Root AST node representing a complete program
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A bare name, either a binding site or a reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    /// Build an identifier node from its token, the name is the token literal
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

/// Braced statement sequence: `{ ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
    /// The opening `{`
    pub token: Token,
    pub statements: Vec<Statement>,
}

/// Statement node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Binding: let x = 5;
    Let {
        token: Token,
        name: Identifier,
        value: Expression,
    },

    /// Return statement: return x;
    Return {
        token: Token,
        value: Expression,
    },

    /// Expression used as a statement, token is the expression's first token
    Expression {
        token: Token,
        expression: Expression,
    },

    /// Block statement
    Block(BlockStatement),
}

/// Expression node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Variable reference
    Identifier(Identifier),

    /// Integer literal
    Integer {
        token: Token,
        value: i64,
    },

    /// `true` / `false`
    Boolean {
        token: Token,
        value: bool,
    },

    /// Unary operation: !x, -x
    Prefix {
        token: Token,
        operator: String,
        operand: Box<Expression>,
    },

    /// Binary operation, token is the operator
    Infix {
        token: Token,
        left: Box<Expression>,
        operator: String,
        right: Box<Expression>,
    },

    /// Conditional: if (cond) { ... } else { ... }
    If {
        token: Token,
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    },

    /// Function literal: fn(x, y) { ... }
    Function {
        token: Token,
        parameters: Vec<Identifier>,
        body: BlockStatement,
    },

    /// Function call, token is the `(`
    Call {
        token: Token,
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|s| s.token_literal())
            .unwrap_or("")
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Node for BlockStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let { token, .. }
            | Statement::Return { token, .. }
            | Statement::Expression { token, .. } => &token.literal,
            Statement::Block(block) => block.token_literal(),
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
            Expression::Integer { token, .. }
            | Expression::Boolean { token, .. }
            | Expression::Prefix { token, .. }
            | Expression::Infix { token, .. }
            | Expression::If { token, .. }
            | Expression::Function { token, .. }
            | Expression::Call { token, .. } => &token.literal,
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { token, name, value } => {
                write!(f, "{} {} = {};", token.literal, name, value)
            }
            Statement::Return { token, value } => write!(f, "{} {};", token.literal, value),
            Statement::Expression { expression, .. } => write!(f, "{}", expression),
            Statement::Block(block) => write!(f, "{}", block),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::Integer { token, .. } => f.write_str(&token.literal),
            Expression::Boolean { value, .. } => write!(f, "{}", value),
            Expression::Prefix { operator, operand, .. } => write!(f, "({}{})", operator, operand),
            Expression::Infix { left, operator, right, .. } => {
                write!(f, "({} {} {})", left, operator, right)
            }
            Expression::If { condition, consequence, alternative, .. } => {
                write!(f, "if{} {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, "else {}", alternative)?;
                }
                Ok(())
            }
            Expression::Function { token, parameters, body } => {
                write!(f, "{}({}) {}", token.literal, join(parameters), body)
            }
            Expression::Call { callee, arguments, .. } => {
                write!(f, "{}({})", callee, join(arguments))
            }
        }
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
