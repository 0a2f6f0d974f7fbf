//! # Monkey Programming Language
//!
//! Front end for Monkey, a small dynamically-typed, C-like expression
//! language:
//! - `let` bindings, `return`, and expression statements
//! - integers, booleans, prefix and infix operators
//! - `if`/`else` expressions, first-class function literals and calls
//!
//! ## Architecture
//!
//! - `lexer`: pull-based scanner turning source text into tokens
//! - `parser`: Pratt parser building the Abstract Syntax Tree (AST)
//! - `error`: parse errors and their terminal rendering
//!
//! Parsing never fails as a whole. It returns the best-effort program plus
//! every error it recorded along the way.

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use error::{Diagnostic, ParseError, ParseResult};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{Node, Parser, Program};

/// Version of the Monkey front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a Monkey program from source code
///
/// # Arguments
///
/// * `source` - The source code to parse
///
/// # Returns
///
/// The parsed program and the errors recorded while parsing it, in source
/// order. An empty error list means the whole input parsed cleanly.
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    (program, parser.into_errors())
}
