//! ## Applesoft Renumber Module
//!
//! Renumbers a range of lines and updates every reference to them.
//! References are the numbers following GOTO, GOSUB, THEN, RUN, LIST, and DEL,
//! including lists such as `ON X GOTO 10,20` or `LIST 10-20`.

use std::collections::HashMap;
use log::{debug,error};
use crate::lang::Error;
use super::keywords::Keyword;
use super::lister::Lister;
use super::parser::{self,MAX_LINE_NUMBER};
use super::program::{Program,Line,Statement};
use super::token::{Token,TokenKind};
use super::visitor::{self,VisitMut};
use crate::{STDRESULT,DYNERR};

#[derive(Clone,Copy,PartialEq)]
enum Reference {
    None,
    Expect,
    Seen
}

pub struct Renumberer {
    map: HashMap<u16,u16>,
    state: Reference
}

impl VisitMut for Renumberer {
    fn visit_line(&mut self,line: &mut Line) -> STDRESULT {
        if let Some(new_num) = self.map.get(&line.number) {
            line.number = *new_num;
        }
        visitor::walk_line_mut(self,line)
    }
    fn visit_statement(&mut self,statement: &mut Statement) -> STDRESULT {
        self.state = Reference::None;
        visitor::walk_statement_mut(self,statement)
    }
    fn visit_token(&mut self,tok: &mut Token) -> STDRESULT {
        self.state = match (&mut tok.kind,self.state) {
            (TokenKind::Keyword(Keyword::Goto | Keyword::Gosub | Keyword::Then | Keyword::Run | Keyword::List | Keyword::Del),_) => Reference::Expect,
            (TokenKind::Number(n),Reference::Expect) => {
                if let Some(new_num) = self.map.get(&(*n as u16)) {
                    if n.fract()==0.0 {
                        debug!("reference {} -> {} on source line {}",n,new_num,tok.line);
                        *n = *new_num as f64;
                    }
                }
                Reference::Seen
            },
            (TokenKind::Syntax(','),Reference::Seen) => Reference::Expect,
            (TokenKind::Keyword(Keyword::Minus),Reference::Seen) => Reference::Expect,
            _ => Reference::None
        };
        Ok(())
    }
}

impl Renumberer {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
            state: Reference::None
        }
    }
    /// Renumber all lines with number >= beg && number < end, as [first,first+step,...].
    /// References are updated globally.
    /// Fails without changing anything if the new numbering would be out of order or out of range.
    pub fn renumber(&mut self,program: &mut Program,beg: usize,end: usize,first: usize,step: usize) -> STDRESULT {
        self.map = HashMap::new();
        let mut next = first;
        let mut prev: Option<usize> = None;
        for line in program.lines() {
            let old = line.number as usize;
            let new_num = match old >= beg && old < end {
                true => {
                    let ans = next;
                    // saturates, so a huge step fails the range check below
                    next = next.saturating_add(step);
                    ans
                },
                false => old
            };
            if new_num > MAX_LINE_NUMBER as usize {
                error!("line {} would become {}",old,new_num);
                return Err(Box::new(Error::Renumber(format!("line number {} is out of range",new_num))));
            }
            if let Some(p) = prev {
                if new_num <= p {
                    error!("line {} would become {} following {}",old,new_num,p);
                    return Err(Box::new(Error::Renumber(format!("line number {} is out of order",new_num))));
                }
            }
            prev = Some(new_num);
            if new_num != old {
                self.map.insert(old as u16,new_num as u16);
            }
        }
        debug!("renumbering {} lines",self.map.len());
        program.accept_mut(self)
    }
    /// Renumber a program held in a string, returning the new listing
    pub fn renumber_str(&mut self,source: &str,beg: usize,end: usize,first: usize,step: usize) -> Result<String,DYNERR> {
        let mut program = parser::parse_str(source)?;
        self.renumber(&mut program,beg,end,first,step)?;
        Lister::new().list(&program)
    }
}

impl Default for Renumberer {
    fn default() -> Self {
        Self::new()
    }
}
