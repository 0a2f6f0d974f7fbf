//! Lexer/Scanner implementation for the Monkey language
//!
//! The scanner is pull-based: every call to [`Lexer::next_token`] produces
//! one token and the parser drives it. Unknown characters never stop the
//! scan, they come out as `Illegal` tokens.

use super::token::{Token, TokenKind};

/// Lexer for Monkey source code
pub struct Lexer {
    input: Vec<char>,
    /// Index of `ch`, the last character read
    position: usize,
    /// Index of the next character to read
    read_position: usize,
    ch: char,
    finished: bool,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: '\0',
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    /// Produce the next token, `Eof` forever once the input is exhausted
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            '=' => {
                if self.peek_char() == '=' {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    self.single(TokenKind::Assign)
                }
            }
            '!' => {
                if self.peek_char() == '=' {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    self.single(TokenKind::Bang)
                }
            }
            ';' => self.single(TokenKind::Semicolon),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            ',' => self.single(TokenKind::Comma),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Asterisk),
            '/' => self.single(TokenKind::Slash),
            '<' => self.single(TokenKind::Lt),
            '>' => self.single(TokenKind::Gt),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '\0' if self.position >= self.input.len() => return Token::eof(),

            // Identifiers and keywords
            c if is_letter(c) => {
                let literal = self.read_while(is_letter);
                return Token::new(TokenKind::lookup_ident(&literal), literal);
            }

            // Integer literals
            c if c.is_ascii_digit() => {
                let literal = self.read_while(|c| c.is_ascii_digit());
                return Token::new(TokenKind::Int, literal);
            }

            _ => self.single(TokenKind::Illegal),
        };

        self.read_char();
        token
    }

    /// Drain the whole input, the last token is always `Eof`
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::Eof);
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    fn single(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.ch.to_string())
    }

    /// Advance the cursor by one character
    fn read_char(&mut self) {
        self.ch = self.peek_char();
        self.position = self.read_position;
        if self.read_position < self.input.len() {
            self.read_position += 1;
        } else {
            // Park one past the end so `position` marks exhaustion
            self.read_position = self.input.len() + 1;
        }
    }

    /// Look at the next character without consuming it
    fn peek_char(&self) -> char {
        self.input.get(self.read_position).copied().unwrap_or('\0')
    }

    /// Consume characters while `pred` holds, leaving `ch` on the first one that fails
    fn read_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while self.position < self.input.len() && pred(self.ch) {
            self.read_char();
        }
        self.input[start..self.position.min(self.input.len())].iter().collect()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, ' ' | '\t' | '\n' | '\r') {
            self.read_char();
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.finished = true;
            None
        } else {
            Some(token)
        }
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}
