//! Parser implementation
//!
//! A Pratt parser over a two-token window (`cur_token`, `peek_token`) pulled
//! from the [`Lexer`]. Each token kind maps to at most one prefix rule and
//! one infix rule, and [`Precedence`] decides how far an infix loop reaches.
//!
//! Errors never abort the parse. A failing rule returns `Err` up to the
//! nearest statement loop (program or block), which records the error, skips
//! the statement and moves on by one token.

use log::{debug, trace};

use super::ast::*;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{Lexer, Token, TokenKind};

/// Binding power of operators, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -x or !x
    Call,        // f(x)
}

impl Precedence {
    /// Infix binding power of a token kind, `Lowest` for non-operators
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// Rule invoked when a token starts an expression
pub type PrefixParseFn = fn(&mut Parser) -> ParseResult<Expression>;

/// Rule invoked when a token follows a complete expression
pub type InfixParseFn = fn(&mut Parser, Expression) -> ParseResult<Expression>;

/// Parser for Monkey source code
pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<ParseError>,
}

impl Parser {
    /// Create a new parser and fill the lookahead window
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::eof(),
            peek_token: Token::eof(),
            errors: Vec::new(),
        };

        parser.next_token(); // peek
        parser.next_token(); // cur

        parser
    }

    /// Parse the whole token stream. Check [`Parser::errors`] afterwards.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cur_token_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => program.statements.push(statement),
                Err(err) => self.record(err),
            }
            self.next_token();
        }

        debug!(
            "parsed {} statements with {} errors",
            program.statements.len(),
            self.errors.len()
        );

        program
    }

    /// Diagnostics recorded so far, in source order
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Prefix rule registered for a token kind
    pub fn prefix_rule(kind: TokenKind) -> Option<PrefixParseFn> {
        let rule: PrefixParseFn = match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::Function => Self::parse_function_literal,
            TokenKind::Illegal
            | TokenKind::Eof
            | TokenKind::Assign
            | TokenKind::Plus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::Let
            | TokenKind::Else
            | TokenKind::Return => return None,
        };
        Some(rule)
    }

    /// Infix rule registered for a token kind
    pub fn infix_rule(kind: TokenKind) -> Option<InfixParseFn> {
        let rule: InfixParseFn = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Eq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::Gt => Self::parse_infix_expression,
            TokenKind::LParen => Self::parse_call_expression,
            TokenKind::Illegal
            | TokenKind::Eof
            | TokenKind::Ident
            | TokenKind::Int
            | TokenKind::Assign
            | TokenKind::Bang
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::Function
            | TokenKind::Let
            | TokenKind::True
            | TokenKind::False
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::Return => return None,
        };
        Some(rule)
    }

    // ===== Statements =====

    fn parse_statement(&mut self) -> ParseResult<Statement> {
        trace!("statement at {}", self.cur_token);

        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = Identifier::new(self.cur_token.clone());

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Let { token, name, value })
    }

    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let token = self.cur_token.clone();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Return { token, value })
    }

    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let token = self.cur_token.clone();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Ok(Statement::Expression { token, expression })
    }

    /// Statements up to the closing `}`, `cur_token` must be the opening `{`
    fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.cur_token.clone();
        let mut statements = Vec::new();

        self.next_token();

        while !self.cur_token_is(TokenKind::RBrace) && !self.cur_token_is(TokenKind::Eof) {
            match self.parse_statement() {
                Ok(statement) => statements.push(statement),
                Err(err) => self.record(err),
            }
            self.next_token();
        }

        BlockStatement { token, statements }
    }

    // ===== Expressions =====

    fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let prefix = Self::prefix_rule(self.cur_token.kind)
            .ok_or_else(|| ParseError::no_prefix_parse_fn(self.cur_token.clone()))?;
        let mut left = prefix(self)?;

        while !self.peek_token_is(TokenKind::Semicolon)
            && !self.peek_token_is(TokenKind::Eof)
            && precedence < self.peek_precedence()
        {
            let Some(infix) = Self::infix_rule(self.peek_token.kind) else {
                return Ok(left);
            };

            self.next_token();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    fn parse_identifier(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Identifier(Identifier::new(self.cur_token.clone())))
    }

    fn parse_integer_literal(&mut self) -> ParseResult<Expression> {
        let token = self.cur_token.clone();
        let value = token
            .literal
            .parse::<i64>()
            .map_err(|_| ParseError::invalid_integer(token.clone()))?;

        Ok(Expression::Integer { token, value })
    }

    fn parse_boolean(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Boolean {
            token: self.cur_token.clone(),
            value: self.cur_token_is(TokenKind::True),
        })
    }

    fn parse_prefix_expression(&mut self) -> ParseResult<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        self.next_token();
        let operand = Box::new(self.parse_expression(Precedence::Prefix)?);

        Ok(Expression::Prefix {
            token,
            operator,
            operand,
        })
    }

    fn parse_infix_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = self.cur_precedence();

        self.next_token();
        let right = Box::new(self.parse_expression(precedence)?);

        Ok(Expression::Infix {
            token,
            left: Box::new(left),
            operator,
            right,
        })
    }

    fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        Ok(expression)
    }

    fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = Box::new(self.parse_expression(Precedence::Lowest)?);
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement())
        } else {
            None
        };

        Ok(Expression::If {
            token,
            condition,
            consequence,
            alternative,
        })
    }

    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        let token = self.cur_token.clone();

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement();

        Ok(Expression::Function {
            token,
            parameters,
            body,
        })
    }

    fn parse_function_parameters(&mut self) -> ParseResult<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Ok(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(Identifier::new(self.cur_token.clone()));

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(Identifier::new(self.cur_token.clone()));
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(parameters)
    }

    fn parse_call_expression(&mut self, callee: Expression) -> ParseResult<Expression> {
        let token = self.cur_token.clone();
        let arguments = self.parse_call_arguments()?;

        Ok(Expression::Call {
            token,
            callee: Box::new(callee),
            arguments,
        })
    }

    fn parse_call_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        let mut arguments = Vec::new();

        if self.peek_token_is(TokenKind::RParen) {
            self.next_token();
            return Ok(arguments);
        }

        self.next_token();
        arguments.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(TokenKind::RParen)?;
        Ok(arguments)
    }

    // ===== Helper Methods =====

    /// Shift the window by one token
    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cur_token = std::mem::replace(&mut self.peek_token, next);
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.is(kind)
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advance onto the next token if it has the given kind, fail without advancing otherwise
    fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_token_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(kind, self.peek_token.clone()))
        }
    }

    fn skip_semicolon(&mut self) {
        if self.peek_token_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek_token.kind)
    }

    fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur_token.kind)
    }

    fn record(&mut self, err: ParseError) {
        debug!("parse error: {}", err);
        self.errors.push(err);
    }
}
