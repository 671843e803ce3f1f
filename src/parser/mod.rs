//! meowBASIC source front end
//!
//! This module transforms meowBASIC source text into an expression tree:
//! - [`token`]: Token and keyword definitions
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → expression tree)
//! - [`ast`]: Expression tree definitions
//! - [`printer`]: Prefix-form rendering of a tree
//!
//! # Supported Input
//!
//! A single top-level expression over the meowBASIC operator set:
//! - Literals: suffix-typed numbers (`42`, `42L`, `3.14f`, `3.14d`), strings,
//!   characters, `true`, `false`, `null`
//! - Binary operators: `||`, `&&`, `==`, `<` `<=` `>` `>=`, `+` `-`,
//!   `*` `/` `//` `%` `\`
//! - Unary operators: `-`, `++`, `--`
//! - Grouping with parentheses; `;` line comments
//!
//! The scanner also recognizes the full keyword set and newline statement
//! separators for the statement grammar, which is an extension point rather
//! than part of the expression parser.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent with one method per precedence level and
//! iterative left-folding for associativity. No parser generator
//! dependencies.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;
