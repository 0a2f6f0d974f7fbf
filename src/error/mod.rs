//! Error handling and diagnostics for the Monkey language
//!
//! Parse errors are values: the parser records them and keeps going, and
//! the caller decides how to present them.

use std::fmt;

use crate::lexer::{Token, TokenKind};

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias used inside the parser
pub type ParseResult<T> = Result<T, ParseError>;

/// A recorded, non-fatal parse error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A mandatory token kind was absent
    UnexpectedToken {
        expected: TokenKind,
        got: Token,
    },
    /// A token with no prefix meaning started an expression
    NoPrefixParseFn {
        token: Token,
    },
    /// An integer literal outside the signed 64-bit range
    InvalidInteger {
        token: Token,
    },
}

impl ParseError {
    pub fn unexpected_token(expected: TokenKind, got: Token) -> Self {
        Self::UnexpectedToken { expected, got }
    }

    pub fn no_prefix_parse_fn(token: Token) -> Self {
        Self::NoPrefixParseFn { token }
    }

    pub fn invalid_integer(token: Token) -> Self {
        Self::InvalidInteger { token }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::UnexpectedToken { .. } => "Unexpected Token",
            Self::NoPrefixParseFn { .. } => "Missing Prefix Rule",
            Self::InvalidInteger { .. } => "Invalid Integer",
        }
    }

    /// Get the human-readable message
    pub fn message(&self) -> String {
        match self {
            Self::UnexpectedToken { expected, got } => {
                format!("expected next token to be {}, got {} instead", expected, got.kind)
            }
            Self::NoPrefixParseFn { token } => {
                format!("no prefix parse function for {} found", token.kind)
            }
            Self::InvalidInteger { token } => {
                format!("could not parse {:?} as integer", token.literal)
            }
        }
    }

    /// The token the error was raised at
    pub fn token(&self) -> &Token {
        match self {
            Self::UnexpectedToken { got: token, .. }
            | Self::NoPrefixParseFn { token }
            | Self::InvalidInteger { token } => token,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ParseError {}
