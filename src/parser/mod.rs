//! Parser module
//!
//! This module handles parsing tokens into an Abstract Syntax Tree (AST).

pub mod ast;
pub mod parser;

pub use ast::{BlockStatement, Expression, Identifier, Node, Program, Statement};
pub use parser::{Parser, Precedence};
