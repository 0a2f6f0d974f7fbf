//! Token definitions for the Monkey language
//!
//! This module defines all token kinds produced by the scanner.

use std::fmt;

/// A token in the Monkey language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {:?}}}", self.kind, self.literal)
    }
}

/// Token kinds in the Monkey language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,     // =
    Plus,       // +
    Minus,      // -
    Bang,       // !
    Asterisk,   // *
    Slash,      // /

    Lt,         // <
    Gt,         // >
    Eq,         // ==
    NotEq,      // !=

    // Delimiters
    Comma,      // ,
    Semicolon,  // ;
    LParen,     // (
    RParen,     // )
    LBrace,     // {
    RBrace,     // }

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Get keyword kind from identifier text
    pub fn keyword(s: &str) -> Option<Self> {
        match s {
            "fn" => Some(Self::Function),
            "let" => Some(Self::Let),
            "true" => Some(Self::True),
            "false" => Some(Self::False),
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "return" => Some(Self::Return),
            _ => None,
        }
    }

    /// Classify scanned identifier text as a keyword or a plain identifier
    pub fn lookup_ident(s: &str) -> Self {
        Self::keyword(s).unwrap_or(Self::Ident)
    }

    /// Stable name used in diagnostics and token dumps
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident => "IDENT",
            Self::Int => "INT",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
