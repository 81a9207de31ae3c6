//! # Program tree
//!
//! A `Program` owns its `Line`s in storage order, a `Line` owns its `Statement`s,
//! and a `Statement` owns its `Token`s.  Lines can only be created through their program,
//! and remember which program that was by an opaque `ProgramId`.

use std::sync::atomic::{AtomicU64,Ordering};
use super::token::Token;
use super::visitor::{Visit,VisitMut};
use crate::STDRESULT;

static NEXT_PROGRAM_ID: AtomicU64 = AtomicU64::new(0);

/// Handle identifying the program that owns a line
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash)]
pub struct ProgramId(u64);

#[derive(Debug,Clone,PartialEq)]
pub struct Statement {
    pub tokens: Vec<Token>
}

impl Statement {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }
}

#[derive(Debug,Clone)]
pub struct Line {
    pub number: u16,
    pub statements: Vec<Statement>,
    program: ProgramId
}

impl Line {
    /// id of the program that created this line
    pub fn program(&self) -> ProgramId {
        self.program
    }
    /// The line after this one in storage order, regardless of line number.
    /// Returns `None` for the last line, or if `program` does not hold this very line.
    pub fn next_line<'a>(&self,program: &'a Program) -> Option<&'a Line> {
        if program.id != self.program {
            return None;
        }
        let i = program.lines.iter().position(|l| std::ptr::eq(l,self))?;
        program.lines.get(i+1)
    }
    pub fn add_statement(&mut self,statement: Statement) -> &mut Statement {
        self.statements.push(statement);
        let last = self.statements.len() - 1;
        &mut self.statements[last]
    }
}

#[derive(Debug,Clone)]
pub struct Program {
    id: ProgramId,
    lines: Vec<Line>
}

impl Program {
    pub fn new() -> Self {
        Self {
            id: ProgramId(NEXT_PROGRAM_ID.fetch_add(1,Ordering::Relaxed)),
            lines: Vec::new()
        }
    }
    pub fn id(&self) -> ProgramId {
        self.id
    }
    /// Append a new empty line and return it for population
    pub fn add_line(&mut self,number: u16) -> &mut Line {
        self.lines.push(Line {
            number,
            statements: Vec::new(),
            program: self.id
        });
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
    /// Lines can be changed in place, but not added or removed
    pub fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }
    /// First line in storage order with the given number
    pub fn find_line(&self,number: u16) -> Option<&Line> {
        self.lines.iter().find(|l| l.number==number)
    }
    pub fn accept<V: Visit + ?Sized>(&self,visitor: &mut V) -> STDRESULT {
        visitor.visit_program(self)
    }
    pub fn accept_mut<V: VisitMut + ?Sized>(&mut self,visitor: &mut V) -> STDRESULT {
        visitor.visit_program(self)
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}
