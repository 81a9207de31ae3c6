//! Renders a program tree back to source text.
//!
//! Keywords are put in their canonical spelling with space around word keywords,
//! which is enough for the lexer to read the listing back into the same tokens.

use super::program::{Program,Line,Statement};
use super::token::{self,Token,TokenKind};
use super::visitor::{self,Visit};
use crate::{STDRESULT,DYNERR};

/// Builds a listing.  Only `visit_line` and `visit_token` are overridden,
/// statements are walked by default.
pub struct Lister {
    code: String,
    prev: Option<TokenKind>,
    lower_case: bool
}

fn needs_space(prev: &TokenKind,next: &TokenKind) -> bool {
    let alpha_end = |k: &TokenKind| matches!(k,TokenKind::Keyword(kw) if kw.spelling().ends_with(|c: char| c.is_ascii_alphabetic()));
    let alpha_start = |k: &TokenKind| matches!(k,TokenKind::Keyword(kw) if kw.spelling().starts_with(|c: char| c.is_ascii_alphabetic()));
    let ends_word = |k: &TokenKind| match k {
        TokenKind::Identifier(s) => !s.ends_with('('),
        TokenKind::Number(_) | TokenKind::Directive(_) => true,
        _ => false
    };
    let starts_word = |k: &TokenKind| matches!(k,TokenKind::Identifier(_) | TokenKind::Number(_) | TokenKind::Directive(_));
    alpha_end(prev) || alpha_start(next) || (ends_word(prev) && starts_word(next))
}

impl Visit for Lister {
    fn visit_line(&mut self,line: &Line) -> STDRESULT {
        self.code += &line.number.to_string();
        self.prev = None;
        for (i,statement) in line.statements.iter().enumerate() {
            if i > 0 {
                self.code.push(':');
                self.prev = None;
            } else {
                self.code.push(' ');
            }
            self.visit_statement(statement)?;
        }
        self.code.push('\n');
        Ok(())
    }
    fn visit_statement(&mut self,statement: &Statement) -> STDRESULT {
        visitor::walk_statement(self,statement)
    }
    fn visit_token(&mut self,tok: &Token) -> STDRESULT {
        if let Some(prev) = &self.prev {
            if needs_space(prev,&tok.kind) {
                self.code.push(' ');
            }
        }
        let txt = match &tok.kind {
            TokenKind::EndOfLine => String::new(),
            TokenKind::Number(n) => token::number_text(*n),
            TokenKind::Keyword(kw) => self.cased(&kw.spelling()),
            TokenKind::Identifier(name) => self.cased(name),
            TokenKind::StringLiteral(s) => format!("\"{}\"",s),
            TokenKind::Directive(name) => name.to_string(),
            TokenKind::Comment(txt) if txt.is_empty() => self.cased("REM"),
            TokenKind::Comment(txt) => format!("{} {}",self.cased("REM"),txt),
            TokenKind::Syntax(c) => c.to_string()
        };
        self.code += &txt;
        self.prev = Some(tok.kind.clone());
        Ok(())
    }
}

impl Lister {
    pub fn new() -> Self {
        Self {
            code: String::new(),
            prev: None,
            lower_case: false
        }
    }
    pub fn set_lower_case(&mut self,lower_case: bool) {
        self.lower_case = lower_case;
    }
    fn cased(&self,s: &str) -> String {
        match self.lower_case {
            true => s.to_lowercase(),
            false => s.to_uppercase()
        }
    }
    /// Produce the listing, every line is terminated by a newline
    pub fn list(&mut self,program: &Program) -> Result<String,DYNERR> {
        self.code = String::new();
        program.accept(self)?;
        Ok(self.code.clone())
    }
}

impl Default for Lister {
    fn default() -> Self {
        Self::new()
    }
}
