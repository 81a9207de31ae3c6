//! # Applesoft lexing, program tree, and transformations
//!
//! The path from source text to the memory image is
//! `lexer` (text to tokens), `parser` (tokens to `Program`), then passes built on
//! `visitor` such as `tokenizer` (memory image), `renumber`, and `lister` (text).
//! The keyword table and character classes are in `keywords`.

pub mod keywords;
pub mod token;
pub mod lexer;
pub mod program;
pub mod parser;
pub mod visitor;
pub mod tokenizer;
pub mod renumber;
pub mod lister;
pub mod settings;
#[cfg(test)]
mod keywords_test;
#[cfg(test)]
mod lexer_test;
#[cfg(test)]
mod visitor_test;

pub use token::{Token,TokenKind};
pub use program::{Program,Line,Statement};
pub use keywords::Keyword;
