//! Diagnostic formatting for better error messages
//!
//! This module renders parse errors for a terminal, optionally with the
//! source line they came from.

use super::ParseError;
use colored::Colorize;

const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

/// Diagnostic information for displaying a parse error with context
pub struct Diagnostic<'a> {
    error: &'a ParseError,
    source: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    /// Create a new diagnostic from an error
    pub fn new(error: &'a ParseError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: &'a ParseError, source: &'a str) -> Self {
        Self {
            error,
            source: Some(source),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: {}\n", kind, self.error.message()));

        let token = self.error.token();
        let near = if token.literal.is_empty() {
            "end of input".to_string()
        } else {
            format!("`{}`", token.literal)
        };
        output.push_str(&format!("  {} at {}\n", "-->".blue().bold(), near));

        if let Some(source) = self.source {
            output.push_str(&self.format_source_context(source));
        }

        output
    }

    /// Show the source lines containing the offending token, highlighted.
    /// Tokens carry no position, so an end-of-input token gets no context.
    fn format_source_context(&self, source: &str) -> String {
        let literal = self.error.token().literal.as_str();
        let mut output = String::new();

        if literal.is_empty() {
            return output;
        }

        for (line_idx, line) in source.lines().enumerate() {
            let Some(start) = line.find(literal) else {
                continue;
            };
            let end = start + literal.len();
            output.push_str(&format!(
                "  {} {}{}{}\n",
                format!("{:>4} |", line_idx + 1).blue().bold(),
                &line[..start],
                (&line[start..end]).red().bold(),
                &line[end..]
            ));
        }

        output
    }

    /// Render a whole list of errors under a single banner
    pub fn report(errors: &[ParseError], source: Option<&str>) -> String {
        let mut output = String::new();
        output.push_str(MONKEY_FACE);
        output.push_str("Woops! We ran into some monkey business here!\n");
        output.push_str(&format!(" {} parser errors:\n", errors.len()));

        for error in errors {
            let diagnostic = match source {
                Some(source) => Diagnostic::with_source(error, source),
                None => Diagnostic::new(error),
            };
            output.push_str(&diagnostic.format());
        }

        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Token, TokenKind};

    #[test]
    fn test_diagnostic_without_source() {
        let err = ParseError::unexpected_token(TokenKind::Assign, Token::new(TokenKind::Int, "5"));
        let formatted = Diagnostic::new(&err).format();

        assert!(formatted.contains("Unexpected Token"));
        assert!(formatted.contains("expected next token to be =, got INT instead"));
        assert!(formatted.contains("`5`"));
    }

    #[test]
    fn test_diagnostic_at_end_of_input() {
        let err = ParseError::unexpected_token(TokenKind::RParen, Token::eof());
        let formatted = Diagnostic::new(&err).format();
        assert!(formatted.contains("end of input"));
    }

    #[test]
    fn test_diagnostic_with_source() {
        let err = ParseError::no_prefix_parse_fn(Token::new(TokenKind::Illegal, "@"));
        let formatted = Diagnostic::with_source(&err, "let y = @;").format();

        assert!(formatted.contains("Missing Prefix Rule"));
        assert!(formatted.contains("let y = "));
    }

    #[test]
    fn test_source_context_only_shows_matching_lines() {
        let source = "let a = 1;\nlet b = 2;\nlet c = 3;\nlet d 4;\nlet e = 5;";
        let err = ParseError::unexpected_token(TokenKind::Assign, Token::new(TokenKind::Int, "4"));
        let formatted = Diagnostic::with_source(&err, source).format();

        assert!(formatted.contains("let d "));
        for unrelated in ["let a = 1;", "let b = 2;", "let c = 3;", "let e = 5;"] {
            assert!(!formatted.contains(unrelated), "unexpected context line {:?}", unrelated);
        }
    }

    #[test]
    fn test_no_source_context_at_end_of_input() {
        let err = ParseError::unexpected_token(TokenKind::RParen, Token::eof());
        let formatted = Diagnostic::with_source(&err, "let a = (1;\nlet b = 2;").format();

        assert!(formatted.contains("end of input"));
        assert!(!formatted.contains("let a"));
        assert!(!formatted.contains("let b"));
    }

    #[test]
    fn test_report_counts_errors() {
        let errors = vec![
            ParseError::unexpected_token(TokenKind::Ident, Token::new(TokenKind::Int, "5")),
            ParseError::no_prefix_parse_fn(Token::new(TokenKind::Semicolon, ";")),
        ];
        let report = Diagnostic::report(&errors, None);

        assert!(report.contains("monkey business"));
        assert!(report.contains(" 2 parser errors:"));
        assert!(report.contains("no prefix parse function for ; found"));
    }
}
