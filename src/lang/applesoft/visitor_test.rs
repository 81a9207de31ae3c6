use super::parser;
use super::program::{Program,Line,Statement};
use super::token::{Token,TokenKind};
use super::visitor::{self,Visit,VisitMut};
use crate::STDRESULT;

fn sample() -> Program {
    parser::parse_str("10 A=1:B=2\n20 PRINT A;B\n30 GOTO 10").expect("parse failed")
}

/// Records the position of every token visited
struct Recorder {
    line: usize,
    statement: usize,
    token: usize,
    visited: Vec<(usize,usize,usize)>
}

impl Visit for Recorder {
    fn visit_program(&mut self,program: &Program) -> STDRESULT {
        self.line = 0;
        visitor::walk_program(self,program)
    }
    fn visit_line(&mut self,line: &Line) -> STDRESULT {
        self.statement = 0;
        visitor::walk_line(self,line)?;
        self.line += 1;
        Ok(())
    }
    fn visit_statement(&mut self,statement: &Statement) -> STDRESULT {
        self.token = 0;
        visitor::walk_statement(self,statement)?;
        self.statement += 1;
        Ok(())
    }
    fn visit_token(&mut self,_token: &Token) -> STDRESULT {
        self.visited.push((self.line,self.statement,self.token));
        self.token += 1;
        Ok(())
    }
}

/// Only counts tokens, relies on default traversal
struct Counter {
    tokens: usize
}

impl Visit for Counter {
    fn visit_token(&mut self,_token: &Token) -> STDRESULT {
        self.tokens += 1;
        Ok(())
    }
}

/// Counts lines but stops descending
struct LinesOnly {
    lines: usize,
    tokens: usize
}

impl Visit for LinesOnly {
    fn visit_line(&mut self,_line: &Line) -> STDRESULT {
        self.lines += 1;
        Ok(())
    }
    fn visit_token(&mut self,_token: &Token) -> STDRESULT {
        self.tokens += 1;
        Ok(())
    }
}

/// Doubles every number
struct Doubler;

impl VisitMut for Doubler {
    fn visit_token(&mut self,token: &mut Token) -> STDRESULT {
        if let TokenKind::Number(n) = &mut token.kind {
            *n *= 2.0;
        }
        Ok(())
    }
}

mod traversal {
    use super::*;
    #[test]
    fn order() {
        let program = super::sample();
        let mut recorder = Recorder { line: 0, statement: 0, token: 0, visited: Vec::new() };
        program.accept(&mut recorder).expect("visit failed");
        let mut expected = Vec::new();
        for (l,line) in program.lines().iter().enumerate() {
            for (s,statement) in line.statements.iter().enumerate() {
                for t in 0..statement.tokens.len() {
                    expected.push((l,s,t));
                }
            }
        }
        assert_eq!(recorder.visited,expected);
        assert_eq!(recorder.visited.len(),12);
    }
    #[test]
    fn every_token_once() {
        let program = super::sample();
        let mut counter = Counter { tokens: 0 };
        program.accept(&mut counter).expect("visit failed");
        let total: usize = program.lines().iter().flat_map(|l| l.statements.iter()).map(|s| s.tokens.len()).sum();
        assert_eq!(counter.tokens,total);
    }
    #[test]
    fn override_stops_descent() {
        let program = super::sample();
        let mut v = LinesOnly { lines: 0, tokens: 0 };
        program.accept(&mut v).expect("visit failed");
        assert_eq!(v.lines,3);
        assert_eq!(v.tokens,0);
    }
    #[test]
    fn mutate_in_place() {
        let mut program = super::sample();
        program.accept_mut(&mut Doubler).expect("visit failed");
        assert_eq!(program.lines()[0].statements[1].tokens[2].kind,TokenKind::Number(4.0));
        assert_eq!(program.lines()[2].statements[0].tokens[1].kind,TokenKind::Number(20.0));
        // structure and line numbers are untouched
        assert_eq!(program.lines()[2].number,30);
        assert_eq!(program.lines()[0].next_line(&program).map(|l| l.number),Some(20));
    }
}
