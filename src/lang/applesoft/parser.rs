//! Groups the lexer's token sequence into lines and statements.

use log::debug;
use crate::lang::Error;
use super::lexer;
use super::program::{Program,Statement};
use super::token::{self,Token,TokenKind};

pub const MAX_LINE_NUMBER: u16 = 63999;

/// Check that a number token can serve as a line number
pub fn line_number(tok: &Token) -> Result<u16,Error> {
    match tok.kind {
        TokenKind::Number(n) if n.fract()==0.0 && n >= 0.0 && n <= MAX_LINE_NUMBER as f64 => Ok(n as u16),
        TokenKind::Number(n) => Err(Error::InvalidLineNumber { line: tok.line, value: token::number_text(n) }),
        _ => Err(Error::ExpectedLineNumber { line: tok.line })
    }
}

/// Build a program from tokens.
/// Each logical line starts with its line number, statements are split on `:`,
/// blank lines are skipped.
pub fn parse<I: IntoIterator<Item=Token>>(tokens: I) -> Result<Program,Error> {
    let mut program = Program::new();
    let mut iter = tokens.into_iter().peekable();
    while let Some(tok) = iter.next() {
        if tok.is_eol() {
            continue;
        }
        let number = line_number(&tok)?;
        debug!("line {} from source line {}",number,tok.line);
        let line = program.add_line(number);
        let mut curr: Vec<Token> = Vec::new();
        let mut any = false;
        while let Some(tok) = iter.next_if(|t| !t.is_eol()) {
            any = true;
            match tok.kind {
                TokenKind::Syntax(':') => {
                    line.add_statement(Statement::new(curr));
                    curr = Vec::new();
                },
                _ => curr.push(tok)
            }
        }
        if any {
            line.add_statement(Statement::new(curr));
        }
    }
    Ok(program)
}

/// Lex and parse a program held in a string
pub fn parse_str(source: &str) -> Result<Program,Error> {
    parse(lexer::tokenize_str(source)?)
}
