//! Lexical analysis module
//!
//! This module handles tokenization of Monkey source code.

pub mod token;
pub mod scanner;

pub use token::{Token, TokenKind};
pub use scanner::Lexer;
