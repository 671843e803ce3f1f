//! Token definitions for meowBASIC
//!
//! The scanner classifies every lexeme into one of the [`TokenKind`] variants
//! below and wraps it in an immutable [`Token`] record. Literal tokens
//! additionally carry a typed [`Literal`] value so later stages never re-parse
//! source text.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// All lexeme categories produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Punctuation
    LeftParen,  // (
    RightParen, // )
    Comma,      // ,
    Dot,        // .
    Colon,      // :

    // Operators
    Plus,       // +
    Minus,      // -
    Star,       // *
    Slash,      // /
    SlashSlash, // //
    Backslash,  // \
    Percent,    // %
    Caret,      // ^
    PlusPlus,   // ++
    MinusMinus, // --
    AmpAmp,     // &&
    PipePipe,   // ||
    Equal,      // =
    EqualEqual, // ==
    Less,       // <
    LessEqual,  // <=
    Greater,    // >
    GreaterEqual, // >=

    // Literals
    Integer, // 42, 42i
    Long,    // 42l
    Single,  // 3.14f
    Double,  // 3.14, 3.14d
    Str,     // "meow"
    Char,    // 'm'
    True,
    False,
    Null,

    // Identifiers and reserved words
    Identifier,
    BoolType,
    CharType,
    FloatType,
    IntType,
    StrType,
    Case,
    Default,
    Do,
    Each,
    Else,
    EndFun,
    EndIf,
    EndSel,
    EndSub,
    For,
    Fun,
    If,
    In,
    Loop,
    Next,
    Print,
    Rem,
    Return,
    Select,
    Sub,
    To,
    Until,
    Var,
    While,

    // Statement separator and end-of-input sentinel
    Newline,
    Eof,
}

/// Typed value attached to a literal token.
///
/// The variant is determined by the token kind: 32-bit integers for
/// [`TokenKind::Integer`], 64-bit for [`TokenKind::Long`], 32-bit floats for
/// [`TokenKind::Single`], 64-bit for [`TokenKind::Double`].
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i32),
    Long(i64),
    Single(f32),
    Double(f64),
    Str(String),
    Char(char),
    Bool(bool),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(v) => write!(f, "{}", v),
            Literal::Long(v) => write!(f, "{}", v),
            Literal::Single(v) => write!(f, "{}", v),
            Literal::Double(v) => write!(f, "{}", v),
            Literal::Str(v) => write!(f, "{}", v),
            Literal::Char(v) => write!(f, "{}", v),
            Literal::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// One classified lexeme.
///
/// Tokens are created by the scanner and never mutated afterwards; the parser
/// receives the whole sequence by value, terminated by exactly one
/// [`TokenKind::Eof`] token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source slice this token was scanned from.
    pub lexeme: String,
    /// Typed value, present for literal kinds only.
    pub literal: Option<Literal>,
    /// 1-based line of the lexeme's first character.
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: String, literal: Option<Literal>, line: usize) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}' at line {}", self.kind, self.lexeme, self.line)
    }
}

static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();

/// Reserved-word lookup.
///
/// Matches are case-sensitive against the lowercase spellings. The table is
/// built on first use and shared read-only for the life of the process.
pub fn keyword(text: &str) -> Option<TokenKind> {
    let table = KEYWORDS.get_or_init(|| {
        let mut map = FxHashMap::default();
        map.insert("bool", TokenKind::BoolType);
        map.insert("case", TokenKind::Case);
        map.insert("char", TokenKind::CharType);
        map.insert("default", TokenKind::Default);
        map.insert("do", TokenKind::Do);
        map.insert("each", TokenKind::Each);
        map.insert("else", TokenKind::Else);
        map.insert("endfun", TokenKind::EndFun);
        map.insert("endif", TokenKind::EndIf);
        map.insert("endsel", TokenKind::EndSel);
        map.insert("endsub", TokenKind::EndSub);
        map.insert("false", TokenKind::False);
        map.insert("float", TokenKind::FloatType);
        map.insert("for", TokenKind::For);
        map.insert("fun", TokenKind::Fun);
        map.insert("if", TokenKind::If);
        map.insert("in", TokenKind::In);
        map.insert("int", TokenKind::IntType);
        map.insert("loop", TokenKind::Loop);
        map.insert("next", TokenKind::Next);
        map.insert("null", TokenKind::Null);
        map.insert("print", TokenKind::Print);
        map.insert("rem", TokenKind::Rem);
        map.insert("return", TokenKind::Return);
        map.insert("select", TokenKind::Select);
        map.insert("string", TokenKind::StrType);
        map.insert("sub", TokenKind::Sub);
        map.insert("to", TokenKind::To);
        map.insert("true", TokenKind::True);
        map.insert("until", TokenKind::Until);
        map.insert("var", TokenKind::Var);
        map.insert("while", TokenKind::While);
        map
    });
    table.get(text).copied()
}
