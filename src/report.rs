//! Diagnostic collection for the scanner and parser.
//!
//! Lexical and syntax errors are reported, not thrown: both front-end stages
//! record a [`Diagnostic`] through a [`Reporter`] and keep going, so a single
//! pass surfaces every problem it can. The driver inspects the reporter after
//! a scan+parse cycle and decides what to do with a best-effort artifact.

use std::fmt;

use crate::parser::token::{Token, TokenKind};

/// Which stage produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Lexical,
    Syntax,
}

/// One reported error.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    /// Rendered between `Error` and the message: empty, ` at end`, or
    /// ` at '<lexeme>'`.
    pub context: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.context, self.message
        )
    }
}

impl std::error::Error for Diagnostic {}

/// Accumulating error sink shared by the scanner and parser.
///
/// Calls are fire-and-forget; nothing here ever stops a scan or parse.
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lexical error at `line`.
    pub fn lexical(&mut self, line: usize, message: &str) {
        self.diagnostics.push(Diagnostic {
            kind: DiagnosticKind::Lexical,
            line,
            context: String::new(),
            message: message.to_string(),
        });
    }

    /// Record a syntax error at the offending token. The context is derived
    /// from the token: ` at end` for the end-of-input sentinel, otherwise
    /// ` at '<lexeme>'`.
    pub fn syntax(&mut self, token: &Token, message: &str) {
        let context = if token.kind == TokenKind::Eof {
            " at end".to_string()
        } else {
            format!(" at '{}'", token.lexeme)
        };
        self.diagnostics.push(Diagnostic {
            kind: DiagnosticKind::Syntax,
            line: token.line,
            context,
            message: message.to_string(),
        });
    }

    /// True once any diagnostic has been recorded.
    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
