//! # Language Module
//!
//! Language specific operations are in the submodules.
//! At present only Applesoft BASIC is handled, see `lang::applesoft`.
//! Errors raised by any language pass are collected in `lang::Error`.

pub mod applesoft;

use thiserror::Error;
use applesoft::keywords::Keyword;

#[derive(Error,Debug)]
pub enum Error {
    #[error("line {line}: unexpected {found}")]
    UnexpectedRawToken { line: usize, found: String },
    #[error("line {line}: expecting `{part}` to complete `{keyword}`")]
    ExpectedKeywordPart { line: usize, keyword: Keyword, part: &'static str },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: expecting a line number")]
    ExpectedLineNumber { line: usize },
    #[error("line {line}: invalid line number {value}")]
    InvalidLineNumber { line: usize, value: String },
    #[error("line {line}: directive `{name}` is not supported")]
    UnsupportedDirective { line: usize, name: String },
    #[error("line {line}: character `{ch}` cannot be tokenized")]
    NonAscii { line: usize, ch: char },
    #[error("line {line}: program runs past end of memory")]
    OutOfMemory { line: usize },
    #[error("renumber failed: {0}")]
    Renumber(String)
}
