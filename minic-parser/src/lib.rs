//! Front end for a minimal C-like language: an ordered lexer and a precedence-climbing parser.
//!
//! The whole source is lexed before parsing starts:
//!
//! ```
//! use minic_parser::{lexer::lex, parser::parse};
//!
//! let tokens = lex("int main() { return 1 + 2; }");
//! let program = parse(&tokens).unwrap();
//! assert_eq!(program.functions[0].name, "main");
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod visitor;

pub use error::{Expected, ParseError, ParseResult};

/// Lexes and parses `source` into a [`ast::Program`].
pub fn parse_source(source: &str) -> ParseResult<ast::Program> {
    let tokens = lexer::lex(source);
    parser::parse(&tokens)
}
