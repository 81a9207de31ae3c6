//! # Program visitors
//!
//! `Visit` walks a `Program` read only, `VisitMut` walks it with mutable access.
//! Every method has a default that descends into the children in storage order, and a pass
//! overrides only the levels it cares about.  An override that does not call the matching
//! `walk_*` function stops the descent at that level.
//!
//! Order is always program, lines in order, statements in order, tokens in order.

use super::program::{Program,Line,Statement};
use super::token::Token;
use crate::STDRESULT;

pub trait Visit {
    fn visit_program(&mut self,program: &Program) -> STDRESULT {
        walk_program(self,program)
    }
    fn visit_line(&mut self,line: &Line) -> STDRESULT {
        walk_line(self,line)
    }
    fn visit_statement(&mut self,statement: &Statement) -> STDRESULT {
        walk_statement(self,statement)
    }
    fn visit_token(&mut self,_token: &Token) -> STDRESULT {
        Ok(())
    }
}

pub fn walk_program<V: Visit + ?Sized>(visitor: &mut V,program: &Program) -> STDRESULT {
    for line in program.lines() {
        visitor.visit_line(line)?;
    }
    Ok(())
}

pub fn walk_line<V: Visit + ?Sized>(visitor: &mut V,line: &Line) -> STDRESULT {
    for statement in &line.statements {
        visitor.visit_statement(statement)?;
    }
    Ok(())
}

pub fn walk_statement<V: Visit + ?Sized>(visitor: &mut V,statement: &Statement) -> STDRESULT {
    for token in &statement.tokens {
        visitor.visit_token(token)?;
    }
    Ok(())
}

pub trait VisitMut {
    fn visit_program(&mut self,program: &mut Program) -> STDRESULT {
        walk_program_mut(self,program)
    }
    fn visit_line(&mut self,line: &mut Line) -> STDRESULT {
        walk_line_mut(self,line)
    }
    fn visit_statement(&mut self,statement: &mut Statement) -> STDRESULT {
        walk_statement_mut(self,statement)
    }
    fn visit_token(&mut self,_token: &mut Token) -> STDRESULT {
        Ok(())
    }
}

pub fn walk_program_mut<V: VisitMut + ?Sized>(visitor: &mut V,program: &mut Program) -> STDRESULT {
    for line in program.lines_mut() {
        visitor.visit_line(line)?;
    }
    Ok(())
}

pub fn walk_line_mut<V: VisitMut + ?Sized>(visitor: &mut V,line: &mut Line) -> STDRESULT {
    for statement in &mut line.statements {
        visitor.visit_statement(statement)?;
    }
    Ok(())
}

pub fn walk_statement_mut<V: VisitMut + ?Sized>(visitor: &mut V,statement: &mut Statement) -> STDRESULT {
    for token in &mut statement.tokens {
        visitor.visit_token(token)?;
    }
    Ok(())
}
