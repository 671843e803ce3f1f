//! Scanner (tokenizer) for meowBASIC source text
//!
//! Converts raw source text into the flat [`Token`] stream consumed by the
//! parser. Scanning is total: lexical errors go to the [`Reporter`] and the
//! cursor keeps moving, so a best-effort token sequence is always produced
//! and always ends with exactly one [`TokenKind::Eof`] token.

use log::debug;

use super::token::{keyword, Literal, Token, TokenKind};
use crate::report::Reporter;

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Single-pass, character-by-character scanner.
///
/// Each instance owns its cursor state, so any number of scanners may run
/// concurrently; the only shared data is the read-only keyword table.
pub struct Scanner {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    /// Line of the current lexeme's first character. Differs from `line`
    /// only inside multi-line string literals.
    start_line: usize,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
        }
    }

    /// Scan the entire input into a token sequence.
    pub fn scan_tokens(mut self, reporter: &mut Reporter) -> Vec<Token> {
        while !self.is_at_end() {
            // We are at the beginning of the next lexeme.
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token(reporter);
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, String::new(), None, self.line));
        debug!(
            "scanned {} tokens across {} lines",
            self.tokens.len(),
            self.line
        );
        self.tokens
    }

    fn scan_token(&mut self, reporter: &mut Reporter) {
        let c = match self.advance() {
            Some(c) => c,
            None => return,
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            ':' => self.add_token(TokenKind::Colon),
            '*' => self.add_token(TokenKind::Star),
            '\\' => self.add_token(TokenKind::Backslash),
            '%' => self.add_token(TokenKind::Percent),
            '^' => self.add_token(TokenKind::Caret),

            '&' => {
                if self.match_char('&') {
                    self.add_token(TokenKind::AmpAmp);
                } else {
                    reporter.lexical(self.line, "Unexpected character.");
                }
            }
            '|' => {
                if self.match_char('|') {
                    self.add_token(TokenKind::PipePipe);
                } else {
                    reporter.lexical(self.line, "Unexpected character.");
                }
            }

            // A ';' comment runs to the end of the line and emits nothing.
            ';' => {
                while self.peek() != Some('\n') && !self.is_at_end() {
                    self.advance();
                }
            }

            '/' => {
                let kind = if self.match_char('/') {
                    TokenKind::SlashSlash
                } else {
                    TokenKind::Slash
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '+' => {
                let kind = if self.match_char('+') {
                    TokenKind::PlusPlus
                } else {
                    TokenKind::Plus
                };
                self.add_token(kind);
            }
            '-' => {
                let kind = if self.match_char('-') {
                    TokenKind::MinusMinus
                } else {
                    TokenKind::Minus
                };
                self.add_token(kind);
            }

            // Whitespace emits nothing.
            ' ' | '\r' | '\t' => {}

            // A newline is a statement separator, so it does emit a token.
            '\n' => {
                self.add_token(TokenKind::Newline);
                self.line += 1;
            }

            '"' => self.string(reporter),
            '\'' => self.character(reporter),

            c if c.is_ascii_digit() => self.number(reporter),
            c if is_ident_start(c) => self.identifier(),

            _ => reporter.lexical(self.line, "Unexpected character."),
        }
    }

    /// Scan a numeric literal. The inferred kind is `Integer` for a plain
    /// digit run and `Double` once a fractional part appears; a trailing
    /// suffix letter overrides it (`i` → Integer, `l` → Long, `f` → Single,
    /// `d` → Double). The suffix belongs to the lexeme but not to the parsed
    /// numeric text.
    fn number(&mut self, reporter: &mut Reporter) {
        let mut fractional = false;

        self.consume_digits();

        // Look for a fractional part.
        if self.peek() == Some('.') && self.peek_ahead(1).is_some_and(|c| c.is_ascii_digit()) {
            fractional = true;
            self.advance(); // consume the '.'
            self.consume_digits();
        }

        match self.peek() {
            Some('i') | Some('I') => {
                self.advance();
                let value = self.parse_numeric(reporter);
                self.add_literal_token(TokenKind::Integer, Literal::Int(value));
            }
            Some('l') | Some('L') => {
                self.advance();
                let value = self.parse_numeric(reporter);
                self.add_literal_token(TokenKind::Long, Literal::Long(value));
            }
            Some('f') | Some('F') => {
                self.advance();
                let value = self.parse_numeric(reporter);
                self.add_literal_token(TokenKind::Single, Literal::Single(value));
            }
            Some('d') | Some('D') => {
                self.advance();
                let value = self.parse_numeric(reporter);
                self.add_literal_token(TokenKind::Double, Literal::Double(value));
            }
            _ if fractional => {
                let value = self.parse_numeric(reporter);
                self.add_literal_token(TokenKind::Double, Literal::Double(value));
            }
            _ => {
                let value = self.parse_numeric(reporter);
                self.add_literal_token(TokenKind::Integer, Literal::Int(value));
            }
        }
    }

    fn consume_digits(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Parse the numeric text scanned so far, excluding a consumed suffix
    /// letter. A failed parse (overflow, or a fractional literal forced to an
    /// integer kind) reports a lexical error and yields zero.
    fn parse_numeric<T>(&mut self, reporter: &mut Reporter) -> T
    where
        T: std::str::FromStr + Default,
    {
        let end = if self.source[self.current - 1].is_ascii_digit() {
            self.current
        } else {
            self.current - 1
        };
        let text: String = self.source[self.start..end].iter().collect();
        match text.parse() {
            Ok(value) => value,
            Err(_) => {
                reporter.lexical(self.start_line, "Malformed number.");
                T::default()
            }
        }
    }

    /// Scan a string literal, tracking embedded newlines. An unterminated
    /// string reports one error and still emits the partial text.
    fn string(&mut self, reporter: &mut Reporter) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            reporter.lexical(self.line, "Unterminated string.");
            let value: String = self.source[self.start + 1..self.current].iter().collect();
            self.add_literal_token(TokenKind::Str, Literal::Str(value));
            return;
        }

        self.advance(); // closing '"'

        // Trim the surrounding quotes.
        let value: String = self.source[self.start + 1..self.current - 1]
            .iter()
            .collect();
        self.add_literal_token(TokenKind::Str, Literal::Str(value));
    }

    /// Scan a character literal: exactly one character between single quotes.
    /// Any other shape reports an error and emits a best-effort value.
    fn character(&mut self, reporter: &mut Reporter) {
        if self.peek() != Some('\'') && !self.is_at_end() {
            let value = match self.advance() {
                Some(c) => c,
                None => return,
            };
            if self.peek() == Some('\'') {
                self.advance(); // closing '\''
                self.add_literal_token(TokenKind::Char, Literal::Char(value));
            } else {
                reporter.lexical(self.line, "Unterminated char.");
                self.add_literal_token(TokenKind::Char, Literal::Char(value));
            }
        } else {
            // Empty literal, or the input ended right after the quote.
            reporter.lexical(self.line, "Unterminated char.");
            if self.peek() == Some('\'') {
                self.advance();
            }
            self.add_literal_token(TokenKind::Char, Literal::Char('\0'));
        }
    }

    fn identifier(&mut self) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        match keyword(&text) {
            Some(TokenKind::True) => self.add_literal_token(TokenKind::True, Literal::Bool(true)),
            Some(TokenKind::False) => {
                self.add_literal_token(TokenKind::False, Literal::Bool(false))
            }
            Some(kind) => self.add_token(kind),
            None => self.add_token(TokenKind::Identifier),
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.source.get(self.current + n).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.source.get(self.current).copied();
        if c.is_some() {
            self.current += 1;
        }
        c
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens
            .push(Token::new(kind, lexeme, None, self.start_line));
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens
            .push(Token::new(kind, lexeme, Some(literal), self.start_line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> (Vec<Token>, Reporter) {
        let mut reporter = Reporter::new();
        let tokens = Scanner::new(source).scan_tokens(&mut reporter);
        (tokens, reporter)
    }

    fn scan_clean(source: &str) -> Vec<Token> {
        let (tokens, reporter) = scan(source);
        assert!(
            !reporter.had_error(),
            "unexpected diagnostics: {:?}",
            reporter.diagnostics()
        );
        tokens
    }

    #[test]
    fn test_single_char_tokens() {
        let tokens = scan_clean("( ) , . : * \\ % ^");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Colon,
                TokenKind::Star,
                TokenKind::Backslash,
                TokenKind::Percent,
                TokenKind::Caret,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_two_char_operators() {
        let tokens = scan_clean("== = >= > <= < ++ + -- - // /");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::EqualEqual,
                TokenKind::Equal,
                TokenKind::GreaterEqual,
                TokenKind::Greater,
                TokenKind::LessEqual,
                TokenKind::Less,
                TokenKind::PlusPlus,
                TokenKind::Plus,
                TokenKind::MinusMinus,
                TokenKind::Minus,
                TokenKind::SlashSlash,
                TokenKind::Slash,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lexeme_matches_source_slice() {
        let tokens = scan_clean(">=++");
        assert_eq!(tokens[0].lexeme, ">=");
        assert_eq!(tokens[1].lexeme, "++");
    }

    #[test]
    fn test_logical_operators() {
        let tokens = scan_clean("&& ||");
        assert_eq!(tokens[0].kind, TokenKind::AmpAmp);
        assert_eq!(tokens[1].kind, TokenKind::PipePipe);
    }

    #[test]
    fn test_lone_ampersand_is_an_error() {
        let (tokens, reporter) = scan("&");
        assert_eq!(reporter.diagnostics().len(), 1);
        // Only the Eof sentinel remains.
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }

    #[test]
    fn test_lone_pipe_is_an_error() {
        let (tokens, reporter) = scan("|");
        assert_eq!(reporter.diagnostics().len(), 1);
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_integer_literal() {
        let tokens = scan_clean("42");
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].lexeme, "42");
        assert_eq!(tokens[0].literal, Some(Literal::Int(42)));
    }

    #[test]
    fn test_suffixed_literals() {
        let tokens = scan_clean("42i 42L 3.14f 3.14d 7l");
        assert_eq!(tokens[0].literal, Some(Literal::Int(42)));
        assert_eq!(tokens[0].lexeme, "42i");
        assert_eq!(tokens[1].kind, TokenKind::Long);
        assert_eq!(tokens[1].literal, Some(Literal::Long(42)));
        assert_eq!(tokens[2].kind, TokenKind::Single);
        assert_eq!(tokens[2].literal, Some(Literal::Single(3.14)));
        assert_eq!(tokens[3].kind, TokenKind::Double);
        assert_eq!(tokens[3].literal, Some(Literal::Double(3.14)));
        assert_eq!(tokens[4].literal, Some(Literal::Long(7)));
    }

    #[test]
    fn test_unsuffixed_fractional_is_double() {
        let tokens = scan_clean("3.14");
        assert_eq!(tokens[0].kind, TokenKind::Double);
        assert_eq!(tokens[0].literal, Some(Literal::Double(3.14)));
    }

    #[test]
    fn test_dot_without_fraction_stays_separate() {
        let tokens = scan_clean("42.foo");
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[1].kind, TokenKind::Dot);
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_malformed_numeric_suffix() {
        // A fractional literal with an integer suffix cannot be parsed; the
        // scan reports one error and emits a zero-valued token.
        let (tokens, reporter) = scan("3.14i");
        assert_eq!(reporter.diagnostics().len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!(tokens[0].literal, Some(Literal::Int(0)));
    }

    #[test]
    fn test_integer_overflow_reports_error() {
        let (tokens, reporter) = scan("99999999999");
        assert_eq!(reporter.diagnostics().len(), 1);
        assert_eq!(tokens[0].literal, Some(Literal::Int(0)));
    }

    #[test]
    fn test_keywords() {
        let tokens = scan_clean("if else while print rem var sub fun endsub");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::If,
                TokenKind::Else,
                TokenKind::While,
                TokenKind::Print,
                TokenKind::Rem,
                TokenKind::Var,
                TokenKind::Sub,
                TokenKind::Fun,
                TokenKind::EndSub,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifier_shaped_text() {
        let tokens = scan_clean("whilex _temp if2");
        assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Identifier));
        assert_eq!(tokens[0].lexeme, "whilex");
    }

    #[test]
    fn test_boolean_literals_carry_values() {
        let tokens = scan_clean("true false");
        assert_eq!(tokens[0].kind, TokenKind::True);
        assert_eq!(tokens[0].literal, Some(Literal::Bool(true)));
        assert_eq!(tokens[1].kind, TokenKind::False);
        assert_eq!(tokens[1].literal, Some(Literal::Bool(false)));
    }

    #[test]
    fn test_newlines_count_lines_and_separate() {
        let tokens = scan_clean("\n\n\n42");
        assert_eq!(tokens[0].kind, TokenKind::Newline);
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[2].line, 3);
        assert_eq!(tokens[3].kind, TokenKind::Integer);
        assert_eq!(tokens[3].line, 4);
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        let tokens = scan_clean("1 ; the rest is ignored ^ %\n2");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Integer,
                TokenKind::Newline,
                TokenKind::Integer,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_string_literal() {
        let tokens = scan_clean("\"meow mix\"");
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(
            tokens[0].literal,
            Some(Literal::Str("meow mix".to_string()))
        );
        assert_eq!(tokens[0].lexeme, "\"meow mix\"");
    }

    #[test]
    fn test_multiline_string_tracks_lines() {
        let tokens = scan_clean("\"a\nb\" 1");
        // The string token carries the line it started on.
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].literal, Some(Literal::Str("a\nb".to_string())));
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_unterminated_string() {
        let (tokens, reporter) = scan("\"abc");
        assert_eq!(reporter.diagnostics().len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].literal, Some(Literal::Str("abc".to_string())));
    }

    #[test]
    fn test_char_literal() {
        let tokens = scan_clean("'m'");
        assert_eq!(tokens[0].kind, TokenKind::Char);
        assert_eq!(tokens[0].literal, Some(Literal::Char('m')));
    }

    #[test]
    fn test_empty_char_literal_is_an_error() {
        let (tokens, reporter) = scan("''");
        assert_eq!(reporter.diagnostics().len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Char);
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn test_unclosed_char_literal_is_an_error() {
        let (_, reporter) = scan("'a");
        assert_eq!(reporter.diagnostics().len(), 1);
    }

    #[test]
    fn test_unexpected_character() {
        let (tokens, reporter) = scan("@ 1");
        assert_eq!(reporter.diagnostics().len(), 1);
        // Scanning continues past the bad character.
        assert_eq!(tokens[0].kind, TokenKind::Integer);
    }

    #[test]
    fn test_eof_is_always_last_and_unique() {
        for source in ["", "1 + 2", "\"open", "@#$"] {
            let (tokens, _) = scan(source);
            let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
            assert_eq!(eofs, 1, "source {:?}", source);
            assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
            assert!(tokens.last().is_some_and(|t| t.lexeme.is_empty()));
        }
    }
}
