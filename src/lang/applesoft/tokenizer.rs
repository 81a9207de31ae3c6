//! Module containing the Applesoft tokenizer.
//!
//! Produces the memory image of a program as the interpreter keeps it: each line is a link
//! to the next line's address, the line number, the tokenized statements, and a zero.
//! The program ends with a null link.

use log::{debug,error};
use crate::lang::Error;
use super::parser;
use super::program::{Program,Line,Statement};
use super::token::{self,Token,TokenKind};
use super::visitor::{self,Visit};
use super::keywords::Keyword;
use crate::{STDRESULT,DYNERR};

const COLON: u8 = 0x3a;
const QUOTE: u8 = 0x22;
const SPACE: u8 = 0x20;

/// Handles tokenization of Applesoft BASIC
pub struct Tokenizer
{
    tokenized_program: Vec<u8>,
    tokenized_line: Vec<u8>,
    curr_addr: u16,
    prev_number: Option<u16>,
    curr_line: usize
}

impl Visit for Tokenizer {
    fn visit_line(&mut self,line: &Line) -> STDRESULT {
        if let Some(tok) = line.statements.first().and_then(|s| s.tokens.first()) {
            self.curr_line = tok.line;
        }
        if let Some(prev) = self.prev_number {
            if line.number <= prev {
                error!("line {} follows line {}",line.number,prev);
                return Err(Box::new(Error::InvalidLineNumber { line: self.curr_line, value: line.number.to_string() }));
            }
        }
        self.prev_number = Some(line.number);
        self.tokenized_line = u16::to_le_bytes(line.number).to_vec();
        for (i,statement) in line.statements.iter().enumerate() {
            if i > 0 {
                self.tokenized_line.push(COLON);
            }
            self.visit_statement(statement)?;
        }
        let next_addr = match u16::try_from(self.curr_addr as usize + self.tokenized_line.len() + 3) {
            Ok(addr) => addr,
            Err(_) => return Err(Box::new(Error::OutOfMemory { line: self.curr_line }))
        };
        debug!("line {} at {:04X}",line.number,self.curr_addr);
        self.tokenized_program.extend_from_slice(&u16::to_le_bytes(next_addr));
        self.tokenized_program.append(&mut self.tokenized_line);
        self.tokenized_program.push(0);
        self.curr_addr = next_addr;
        Ok(())
    }
    fn visit_statement(&mut self,statement: &Statement) -> STDRESULT {
        if let Some(tok) = statement.tokens.first() {
            self.curr_line = tok.line;
        }
        visitor::walk_statement(self,statement)
    }
    fn visit_token(&mut self,tok: &Token) -> STDRESULT {
        match &tok.kind {
            TokenKind::EndOfLine => {},
            TokenKind::Number(n) => self.push_ascii(tok.line,&token::number_text(*n))?,
            TokenKind::Keyword(kw) => self.tokenized_line.push(kw.code()),
            TokenKind::Identifier(name) => self.push_ascii(tok.line,&name.to_uppercase())?,
            TokenKind::StringLiteral(s) => {
                self.tokenized_line.push(QUOTE);
                self.push_ascii(tok.line,s)?;
                self.tokenized_line.push(QUOTE);
            },
            TokenKind::Comment(txt) => {
                self.tokenized_line.push(Keyword::Rem.code());
                // the lexer drops the separating space, the interpreter stores it
                if txt.len() > 0 {
                    self.tokenized_line.push(SPACE);
                }
                self.push_ascii(tok.line,txt)?;
            },
            TokenKind::Syntax(c) => self.push_ascii(tok.line,&c.to_string())?,
            TokenKind::Directive(name) => {
                error!("no handler for directive {}",name);
                return Err(Box::new(Error::UnsupportedDirective { line: tok.line, name: name.to_string() }));
            }
        }
        Ok(())
    }
}

impl Tokenizer
{
    /// Create a new `Tokenizer` structure
    pub fn new() -> Self
    {
        Self {
            tokenized_program: Vec::new(),
            tokenized_line: Vec::new(),
            curr_addr: 2049,
            prev_number: None,
            curr_line: 0
        }
    }
    fn push_ascii(&mut self,line: usize,s: &str) -> STDRESULT {
        for c in s.chars() {
            if !c.is_ascii() {
                return Err(Box::new(Error::NonAscii { line, ch: c }));
            }
            self.tokenized_line.push(c as u8);
        }
        Ok(())
    }
    /// Tokenize a program tree, `start_addr` is where the first line will be loaded.
    pub fn tokenize(&mut self,program: &Program,start_addr: u16) -> Result<Vec<u8>,DYNERR> {
        self.curr_addr = start_addr;
        self.prev_number = None;
        self.tokenized_program = Vec::new();
        program.accept(self)?;
        // the null link must also fit below the top of memory
        if self.curr_addr as usize + 2 > 0x10000 {
            error!("program ends at {:04X}, no room for the end marker",self.curr_addr);
            return Err(Box::new(Error::OutOfMemory { line: self.curr_line }));
        }
        self.tokenized_program.push(0);
        self.tokenized_program.push(0);
        Ok(self.tokenized_program.clone())
    }
    /// Tokenize a program contained in a UTF8 string, result is an array of bytes
    pub fn tokenize_str(&mut self,source: &str,start_addr: u16) -> Result<Vec<u8>,DYNERR> {
        let program = parser::parse_str(source)?;
        self.tokenize(&program,start_addr)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
